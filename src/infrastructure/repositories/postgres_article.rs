// src/infrastructure/repositories/postgres_article.rs
use super::map_sqlx;
use crate::domain::article::{
    Article, ArticleCombination, ArticleFilter, ArticleId, ArticleName, ArticleReadRepository,
    ArticleUpdate, ArticleWriteRepository, NewArticle, Price,
};
use crate::domain::errors::{DomainError, DomainResult};
use crate::domain::provider::ProviderId;
use async_trait::async_trait;
use sqlx::{FromRow, PgPool, Postgres, QueryBuilder};

const ARTICLE_COLUMNS: &str = "article_no, article_name, price, provider_no";

#[derive(Clone)]
pub struct PostgresArticleWriteRepository {
    pool: PgPool,
}

impl PostgresArticleWriteRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[derive(Clone)]
pub struct PostgresArticleReadRepository {
    pool: PgPool,
}

impl PostgresArticleReadRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[derive(Debug, FromRow)]
struct ArticleRow {
    article_no: i64,
    article_name: String,
    price: i32,
    provider_no: i64,
}

impl TryFrom<ArticleRow> for Article {
    type Error = DomainError;

    fn try_from(row: ArticleRow) -> Result<Self, Self::Error> {
        Ok(Article {
            id: ArticleId::new(row.article_no)?,
            name: ArticleName::new(row.article_name)?,
            price: Price::new(row.price),
            provider_id: ProviderId::new(row.provider_no)?,
        })
    }
}

async fn fetch_by_id(pool: &PgPool, id: ArticleId) -> DomainResult<Option<Article>> {
    let row = sqlx::query_as::<_, ArticleRow>(&format!(
        "SELECT {ARTICLE_COLUMNS} FROM articles WHERE article_no = $1"
    ))
    .bind(i64::from(id))
    .fetch_optional(pool)
    .await
    .map_err(map_sqlx)?;

    row.map(Article::try_from).transpose()
}

/// `UPDATE` touching only the columns set on `update`. Callers handle the
/// empty update before building.
fn update_query(update: ArticleUpdate) -> QueryBuilder<'static, Postgres> {
    let ArticleUpdate {
        id,
        name,
        price,
        provider_id,
    } = update;

    let mut builder = QueryBuilder::new("UPDATE articles SET ");
    let mut assignments = builder.separated(", ");

    if let Some(name) = name {
        assignments.push("article_name = ");
        assignments.push_bind_unseparated(String::from(name));
    }

    if let Some(price) = price {
        assignments.push("price = ");
        assignments.push_bind_unseparated(price.value());
    }

    if let Some(provider_id) = provider_id {
        assignments.push("provider_no = ");
        assignments.push_bind_unseparated(i64::from(provider_id));
    }

    builder.push(" WHERE article_no = ");
    builder.push_bind(i64::from(id));
    builder.push(" RETURNING ");
    builder.push(ARTICLE_COLUMNS);
    builder
}

/// `SELECT` for a listing, newest first.
fn list_query(filter: &ArticleFilter) -> QueryBuilder<'static, Postgres> {
    let mut builder = QueryBuilder::new(format!("SELECT {ARTICLE_COLUMNS} FROM articles"));

    match *filter {
        ArticleFilter::All => {}
        ArticleFilter::Price(range) => match (range.min, range.max) {
            (Some(min), Some(max)) => {
                builder.push(" WHERE price BETWEEN ");
                builder.push_bind(min);
                builder.push(" AND ");
                builder.push_bind(max);
            }
            (Some(min), None) => {
                builder.push(" WHERE price >= ");
                builder.push_bind(min);
            }
            (None, Some(max)) => {
                builder.push(" WHERE price <= ");
                builder.push_bind(max);
            }
            (None, None) => {}
        },
        ArticleFilter::Provider(provider_no) => {
            builder.push(" WHERE provider_no = ");
            builder.push_bind(provider_no);
        }
    }

    builder.push(" ORDER BY article_no DESC");
    builder
}

#[async_trait]
impl ArticleWriteRepository for PostgresArticleWriteRepository {
    async fn insert(&self, article: NewArticle) -> DomainResult<Article> {
        let NewArticle {
            name,
            price,
            provider_id,
        } = article;

        let row = sqlx::query_as::<_, ArticleRow>(&format!(
            "INSERT INTO articles (article_name, price, provider_no) VALUES ($1, $2, $3)
             RETURNING {ARTICLE_COLUMNS}"
        ))
        .bind(name.as_str())
        .bind(price.value())
        .bind(i64::from(provider_id))
        .fetch_one(&self.pool)
        .await
        .map_err(map_sqlx)?;

        Article::try_from(row)
    }

    async fn update(&self, update: ArticleUpdate) -> DomainResult<Article> {
        if update.is_empty() {
            return fetch_by_id(&self.pool, update.id)
                .await?
                .ok_or_else(|| DomainError::NotFound("article not found".into()));
        }

        let mut builder = update_query(update);
        let row = builder
            .build_query_as::<ArticleRow>()
            .fetch_optional(&self.pool)
            .await
            .map_err(map_sqlx)?
            .ok_or_else(|| DomainError::NotFound("article not found".into()))?;

        Article::try_from(row)
    }

    async fn delete(&self, id: ArticleId) -> DomainResult<()> {
        let result = sqlx::query("DELETE FROM articles WHERE article_no = $1")
            .bind(i64::from(id))
            .execute(&self.pool)
            .await
            .map_err(map_sqlx)?;
        if result.rows_affected() == 0 {
            return Err(DomainError::NotFound("article not found".into()));
        }
        Ok(())
    }
}

#[async_trait]
impl ArticleReadRepository for PostgresArticleReadRepository {
    async fn find_by_id(&self, id: ArticleId) -> DomainResult<Option<Article>> {
        fetch_by_id(&self.pool, id).await
    }

    async fn list(&self, filter: &ArticleFilter) -> DomainResult<Vec<Article>> {
        let mut builder = list_query(filter);
        let rows = builder
            .build_query_as::<ArticleRow>()
            .fetch_all(&self.pool)
            .await
            .map_err(map_sqlx)?;

        rows.into_iter().map(Article::try_from).collect()
    }

    async fn exists_by_combination(
        &self,
        combination: &ArticleCombination,
    ) -> DomainResult<bool> {
        sqlx::query_scalar::<_, bool>(
            "SELECT EXISTS(
                 SELECT 1 FROM articles
                 WHERE article_name = $1 AND price = $2 AND provider_no = $3
             )",
        )
        .bind(combination.name.as_str())
        .bind(combination.price.value())
        .bind(i64::from(combination.provider_id))
        .fetch_one(&self.pool)
        .await
        .map_err(map_sqlx)
    }
}

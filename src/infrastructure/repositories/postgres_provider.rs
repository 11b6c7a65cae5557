// src/infrastructure/repositories/postgres_provider.rs
use super::map_sqlx;
use crate::domain::errors::{DomainError, DomainResult};
use crate::domain::provider::{
    NewProvider, Provider, ProviderId, ProviderName, ProviderRepository, ProviderUpdate,
};
use async_trait::async_trait;
use sqlx::{FromRow, PgPool, Postgres, QueryBuilder};

#[derive(Clone)]
pub struct PostgresProviderRepository {
    pool: PgPool,
}

impl PostgresProviderRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[derive(Debug, FromRow)]
struct ProviderRow {
    provider_no: i64,
    provider_name: String,
}

impl TryFrom<ProviderRow> for Provider {
    type Error = DomainError;

    fn try_from(row: ProviderRow) -> Result<Self, Self::Error> {
        Ok(Provider {
            id: ProviderId::new(row.provider_no)?,
            name: ProviderName::new(row.provider_name)?,
        })
    }
}

/// Whether another provider already uses `name`. `exclude` leaves the
/// provider being renamed out of the check.
fn exists_by_name_query<'a>(
    name: &'a ProviderName,
    exclude: Option<ProviderId>,
) -> QueryBuilder<'a, Postgres> {
    let mut builder =
        QueryBuilder::new("SELECT EXISTS(SELECT 1 FROM providers WHERE provider_name = ");
    builder.push_bind(name.as_str());
    if let Some(id) = exclude {
        builder.push(" AND provider_no <> ");
        builder.push_bind(i64::from(id));
    }
    builder.push(")");
    builder
}

#[async_trait]
impl ProviderRepository for PostgresProviderRepository {
    async fn insert(&self, provider: NewProvider) -> DomainResult<Provider> {
        let row = sqlx::query_as::<_, ProviderRow>(
            "INSERT INTO providers (provider_name) VALUES ($1)
             RETURNING provider_no, provider_name",
        )
        .bind(provider.name.as_str())
        .fetch_one(&self.pool)
        .await
        .map_err(map_sqlx)?;

        Provider::try_from(row)
    }

    async fn update(&self, update: ProviderUpdate) -> DomainResult<Provider> {
        let ProviderUpdate { id, name } = update;

        let Some(name) = name else {
            return self
                .find_by_id(id)
                .await?
                .ok_or_else(|| DomainError::NotFound("provider not found".into()));
        };

        let row = sqlx::query_as::<_, ProviderRow>(
            "UPDATE providers SET provider_name = $1 WHERE provider_no = $2
             RETURNING provider_no, provider_name",
        )
        .bind(name.as_str())
        .bind(i64::from(id))
        .fetch_optional(&self.pool)
        .await
        .map_err(map_sqlx)?
        .ok_or_else(|| DomainError::NotFound("provider not found".into()))?;

        Provider::try_from(row)
    }

    async fn delete(&self, id: ProviderId) -> DomainResult<()> {
        // articles follow through ON DELETE CASCADE
        let result = sqlx::query("DELETE FROM providers WHERE provider_no = $1")
            .bind(i64::from(id))
            .execute(&self.pool)
            .await
            .map_err(map_sqlx)?;
        if result.rows_affected() == 0 {
            return Err(DomainError::NotFound("provider not found".into()));
        }
        Ok(())
    }

    async fn find_by_id(&self, id: ProviderId) -> DomainResult<Option<Provider>> {
        let row = sqlx::query_as::<_, ProviderRow>(
            "SELECT provider_no, provider_name FROM providers WHERE provider_no = $1",
        )
        .bind(i64::from(id))
        .fetch_optional(&self.pool)
        .await
        .map_err(map_sqlx)?;

        row.map(Provider::try_from).transpose()
    }

    async fn list(&self) -> DomainResult<Vec<Provider>> {
        let rows = sqlx::query_as::<_, ProviderRow>(
            "SELECT provider_no, provider_name FROM providers ORDER BY provider_no DESC",
        )
        .fetch_all(&self.pool)
        .await
        .map_err(map_sqlx)?;

        rows.into_iter().map(Provider::try_from).collect()
    }

    async fn exists_by_name(
        &self,
        name: &ProviderName,
        exclude: Option<ProviderId>,
    ) -> DomainResult<bool> {
        let mut builder = exists_by_name_query(name, exclude);
        builder
            .build_query_scalar::<bool>()
            .fetch_one(&self.pool)
            .await
            .map_err(map_sqlx)
    }
}

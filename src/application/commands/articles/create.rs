// src/application/commands/articles/create.rs
use super::ArticleCommandService;
use crate::{
    application::{
        dto::ArticleDto,
        error::{ApplicationError, ApplicationResult},
    },
    domain::article::{ArticleName, NewArticle, Price},
};

pub struct CreateArticleCommand {
    pub name: String,
    pub price: i32,
    pub provider_id: i64,
}

impl CreateArticleCommand {
    pub fn builder() -> CreateArticleCommandBuilder {
        CreateArticleCommandBuilder::default()
    }
}

#[derive(Default)]
pub struct CreateArticleCommandBuilder {
    name: Option<String>,
    price: Option<i32>,
    provider_id: Option<i64>,
}

impl CreateArticleCommandBuilder {
    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    pub fn price(mut self, price: i32) -> Self {
        self.price = Some(price);
        self
    }

    pub fn provider_id(mut self, provider_id: i64) -> Self {
        self.provider_id = Some(provider_id);
        self
    }

    pub fn build(self) -> Result<CreateArticleCommand, &'static str> {
        Ok(CreateArticleCommand {
            name: self.name.ok_or("article_name is required")?,
            price: self.price.ok_or("price is required")?,
            provider_id: self.provider_id.ok_or("provider_no is required")?,
        })
    }
}

impl ArticleCommandService {
    /// Creates an article after checking that no article already carries the
    /// same name, price and provider.
    ///
    /// The check and the insert are separate statements: two concurrent
    /// requests with the same triple can both pass the check.
    pub async fn create_article(
        &self,
        command: CreateArticleCommand,
    ) -> ApplicationResult<ArticleDto> {
        let provider_id = self.resolve_provider(command.provider_id).await?;
        let name = ArticleName::new(command.name)?;
        let price = Price::new(command.price);

        let new_article = NewArticle {
            name,
            price,
            provider_id,
        };

        if self
            .read_repo
            .exists_by_combination(&new_article.combination())
            .await?
        {
            return Err(ApplicationError::validation(
                "article with the same name, price, and provider already exists",
            ));
        }

        let created = self.write_repo.insert(new_article).await?;
        tracing::info!(article_no = %created.id, provider_id = %created.provider_id, "article created");
        Ok(created.into())
    }
}

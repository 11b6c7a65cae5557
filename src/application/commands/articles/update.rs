use super::ArticleCommandService;
use crate::{
    application::{
        commands::UpdateMode,
        dto::ArticleDto,
        error::{ApplicationError, ApplicationResult, lookup_id},
    },
    domain::article::{ArticleId, ArticleName, ArticleUpdate, Price},
};

pub struct UpdateArticleCommand {
    pub id: i64,
    pub name: Option<String>,
    pub price: Option<i32>,
    pub provider_id: Option<i64>,
    pub mode: UpdateMode,
}

impl UpdateArticleCommand {
    fn missing_fields(&self) -> Vec<&'static str> {
        let mut missing = Vec::new();
        if self.name.is_none() {
            missing.push("article_name");
        }
        if self.price.is_none() {
            missing.push("price");
        }
        if self.provider_id.is_none() {
            missing.push("provider_no");
        }
        missing
    }
}

impl ArticleCommandService {
    /// Updates the supplied fields. The name/price/provider combination is
    /// only checked at creation time, not here.
    pub async fn update_article(
        &self,
        command: UpdateArticleCommand,
    ) -> ApplicationResult<ArticleDto> {
        let id = lookup_id(command.id, ArticleId::new, "article")?;
        let article = self
            .read_repo
            .find_by_id(id)
            .await?
            .ok_or_else(|| ApplicationError::not_found("article not found"))?;

        if command.mode.is_full() {
            let missing = command.missing_fields();
            if !missing.is_empty() {
                return Err(ApplicationError::validation(format!(
                    "missing required fields: {}",
                    missing.join(", ")
                )));
            }
        }

        let UpdateArticleCommand {
            name,
            price,
            provider_id,
            ..
        } = command;

        let mut update = ArticleUpdate::new(id);
        if let Some(name) = name {
            update = update.with_name(ArticleName::new(name)?);
        }
        if let Some(price) = price {
            update = update.with_price(Price::new(price));
        }
        if let Some(raw_provider) = provider_id {
            update = update.with_provider(self.resolve_provider(raw_provider).await?);
        }

        if update.is_empty() {
            return Ok(article.into());
        }

        let updated = self.write_repo.update(update).await?;
        tracing::info!(article_no = %updated.id, "article updated");
        Ok(updated.into())
    }
}

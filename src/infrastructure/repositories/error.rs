use crate::domain::errors::DomainError;

const CNT_PROVIDER_NAME: &str = "providers_provider_name_key";
const CNT_PROVIDER_NAME_BLANK: &str = "providers_provider_name_not_blank";
const CNT_ARTICLE_PROVIDER: &str = "articles_provider_no_fkey";
const CNT_ARTICLE_NAME_BLANK: &str = "articles_article_name_not_blank";

pub fn map_sqlx(err: sqlx::Error) -> DomainError {
    match &err {
        sqlx::Error::Database(db_err) => db_err
            .constraint()
            .and_then(map_constraint)
            .or_else(|| db_err.code().and_then(|code| map_sqlstate(code.as_ref())))
            .unwrap_or_else(|| DomainError::Persistence(db_err.message().to_string())),
        _ => DomainError::Persistence(err.to_string()),
    }
}

fn map_constraint(constraint: &str) -> Option<DomainError> {
    let mapped = match constraint {
        CNT_PROVIDER_NAME => {
            DomainError::Validation("provider with this provider name already exists".into())
        }
        CNT_PROVIDER_NAME_BLANK => DomainError::Validation("provider name cannot be empty".into()),
        CNT_ARTICLE_PROVIDER => DomainError::Validation("provider does not exist".into()),
        CNT_ARTICLE_NAME_BLANK => DomainError::Validation("article name cannot be empty".into()),
        _ => return None,
    };
    Some(mapped)
}

fn map_sqlstate(code: &str) -> Option<DomainError> {
    let mapped = match code {
        "23505" => DomainError::Validation("unique constraint violated".into()),
        "23503" => DomainError::Validation("referenced record not found".into()),
        "23514" => DomainError::Validation("check constraint violated".into()),
        "22001" => DomainError::Validation("value too long".into()),
        _ => return None,
    };
    Some(mapped)
}

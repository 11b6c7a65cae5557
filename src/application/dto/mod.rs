pub mod articles;
pub mod providers;

pub use articles::ArticleDto;
pub use providers::ProviderDto;

pub mod entity;
pub mod filter;
pub mod repository;
pub mod value_objects;

pub use entity::{Article, ArticleCombination, ArticleUpdate, NewArticle};
pub use filter::{ArticleFilter, PriceRange};
pub use repository::{ArticleReadRepository, ArticleWriteRepository};
pub use value_objects::{ArticleId, ArticleName, Price};

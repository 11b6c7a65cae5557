pub mod entity;
pub mod repository;
pub mod value_objects;

pub use entity::{NewProvider, Provider, ProviderUpdate};
pub use repository::ProviderRepository;
pub use value_objects::{ProviderId, ProviderName};

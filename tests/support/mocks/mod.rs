// tests/support/mocks/mod.rs
pub mod catalog;
pub mod unavailable;

pub use catalog::InMemoryCatalog;
pub use unavailable::UnavailableCatalog;

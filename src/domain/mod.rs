pub mod article;
pub mod errors;
pub mod provider;
mod text;

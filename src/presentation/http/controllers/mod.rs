// src/presentation/http/controllers/mod.rs
pub mod articles;
pub mod filters;
pub mod providers;

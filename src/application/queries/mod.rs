pub mod articles;
pub mod filters;
pub mod providers;

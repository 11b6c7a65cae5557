// src/application/commands/providers/mod.rs
mod create;
mod delete;
mod service;
mod update;

pub use create::CreateProviderCommand;
pub use delete::DeleteProviderCommand;
pub use service::ProviderCommandService;
pub use update::UpdateProviderCommand;

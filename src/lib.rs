//! Provider and article catalog service.
//!
//! Layers follow the ports-and-adapters split: `domain` owns entities and
//! repository traits, `application` implements the use cases on top of those
//! traits, `infrastructure` provides the PostgreSQL adapters and
//! `presentation` exposes everything over HTTP.

pub mod application;
pub mod config;
pub mod domain;
pub mod infrastructure;
pub mod presentation;

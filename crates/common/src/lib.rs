//! Shared utilities, configuration, and error handling for Pagemark
//!
//! This crate provides common functionality used across the Pagemark application:
//! - Configuration management following 12-factor principles
//! - Error types and handling
//! - Repository error mapping

pub mod config;
pub mod db;
pub mod error;

pub use config::Config;
pub use db::RepositoryError;
pub use error::{Error, Result};

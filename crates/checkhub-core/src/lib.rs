//! # checkhub-core
//!
//! Core crate for CheckHub. Contains configuration schemas, logging
//! initialization, and the unified error system.
//!
//! This crate has **no** internal dependencies on other CheckHub crates.

pub mod config;
pub mod error;
pub mod logging;
pub mod result;

pub use error::AppError;
pub use result::AppResult;

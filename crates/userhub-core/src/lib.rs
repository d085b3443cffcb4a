//! # userhub-core
//!
//! Core crate for UserHub. Contains the configuration schema and the
//! unified error system shared by every other crate.
//!
//! This crate has **no** internal dependencies on other UserHub crates.

pub mod config;
pub mod error;
pub mod result;

pub use error::AppError;
pub use result::AppResult;

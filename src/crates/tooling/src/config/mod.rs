//! Configuration loading utilities
//!
//! This module provides the two halves of environment-driven configuration:
//!
//! - `EnvSource` abstracts where raw variables come from, so a configuration
//!   can be built from the process environment or from an in-memory map
//! - Coercion helpers turn raw values into typed values with defaults. They
//!   never fail: a missing or malformed value falls back to its default
//!
//! # Example
//!
//! ```rust
//! use tooling::config::{get_env_enabled, get_env_int_or, get_env_or, MapEnv};
//!
//! let env = MapEnv::new()
//!     .with("APP_NAME", "Acme")
//!     .with("APP_WORKERS", "not-a-number")
//!     .with("APP_BILLING", "false");
//!
//! assert_eq!(get_env_or(&env, "APP_NAME", "Nextacular"), "Acme");
//! assert_eq!(get_env_int_or(&env, "APP_WORKERS", 4), 4);
//! assert!(!get_env_enabled(&env, "APP_BILLING"));
//! ```

mod env;
mod source;

pub use env::{
    build_env_key, get_env, get_env_enabled, get_env_f64_or, get_env_first, get_env_int_or,
    get_env_non_empty, get_env_or, get_env_present,
};
pub use source::{EnvSource, MapEnv, ProcessEnv};

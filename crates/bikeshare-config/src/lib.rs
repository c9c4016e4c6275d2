//! # Bikeshare Config
//!
//! Type-safe configuration management for the bikeshare explorer.
//!
//! This crate provides the YAML configuration schema, built-in defaults,
//! file discovery and loading, command-line overrides, and validation.
//! The city to dataset mapping lives here so the analysis crate never
//! hard-codes file locations.

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![warn(clippy::nursery)]
#![allow(clippy::module_name_repetitions)]

pub mod defaults;
pub mod loader;
pub mod schema;
pub mod validator;

pub use defaults::*;
pub use loader::*;
pub use schema::*;
pub use validator::*;

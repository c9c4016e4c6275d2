//! # Bikeshare CLI
//!
//! Interactive command-line explorer for US bikeshare trip data.
//!
//! This crate wires configuration, dataset loading, statistics and the
//! console protocol into the restartable session run by the `bikeshare`
//! binary.

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![warn(clippy::nursery)]
#![allow(clippy::module_name_repetitions)]

pub mod app;
pub mod error;

pub use app::*;
pub use error::*;

//! # Bikeshare Prompt
//!
//! The interactive console protocol of the bikeshare explorer.
//!
//! [`Prompter`] owns the line-oriented input and output streams. The
//! [`FilterResolver`] drives it until every filter criterion is valid, and
//! the [`RawDataPager`] pages through the rows of a filtered table. The
//! streams are generic so whole sessions can be scripted in tests.

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![warn(clippy::nursery)]
#![allow(clippy::module_name_repetitions)]

pub mod pager;
pub mod prompt;
pub mod resolver;

pub use pager::*;
pub use prompt::*;
pub use resolver::*;

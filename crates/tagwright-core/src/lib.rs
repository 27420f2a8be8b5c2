//! Core types for tagwright.
//!
//! This crate defines the multi-valued [`Metadata`] record produced by the
//! mapper, the genre accumulators that collect weighted genre names for
//! tracks, albums, and artists, and the small text services the mapper
//! consults: weighted script detection, sort-name transliteration,
//! duration formatting, and Amazon URL parsing.

#![deny(unsafe_code)]
#![warn(missing_debug_implementations)]

pub mod error;
pub mod genre;
pub mod metadata;
pub mod script;
pub mod text;

pub use error::{Error, Result};
pub use genre::{CreditedEntity, GenreSink, GenreTally};
pub use metadata::Metadata;
pub use script::{Script, ScriptDetector, ScriptWeights, WeightedScriptDetector};

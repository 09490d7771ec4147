//! Shared type definitions for simple-migrations
//!
//! This crate provides the vocabulary used by the table builder and the
//! migration runner:
//!
//! - [`FieldType`] - MySQL/MariaDB column type tags, grouped by [`FieldCategory`]
//! - [`Engine`] - Supported storage engines
//! - [`FieldExtent`] - The size-or-values argument of a column type
//!
//! # Features
//!
//! - `serde` - Enable serde serialization/deserialization of the enums

mod engine;
mod extent;
mod field_type;

pub use engine::{Engine, EngineParseError};
pub use extent::FieldExtent;
pub use field_type::{FieldCategory, FieldType, FieldTypeParseError};

/// Prelude module for commonly used types
pub mod prelude {
    pub use crate::{Engine, FieldCategory, FieldExtent, FieldType};
}

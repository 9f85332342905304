//! Foundation types for yaml-diff.
//!
//! This crate provides the value model compared by the diff engine and the
//! loader that produces it from multi-document YAML text.
//!
//! # Key Types
//!
//! - [`TreeValue`] -- Closed variant over null, bool, number, string, mapping, sequence
//! - [`Mapping`] -- Insertion-ordered mapping with unique string keys
//! - [`Slot`] -- A comparison position that is either present or absent
//! - [`Document`] / [`DocumentId`] -- A loaded document and its opaque identity

pub mod document;
pub mod error;
pub mod load;
pub mod value;

pub use document::{Document, DocumentId};
pub use error::{LoadError, LoadResult};
pub use load::load;
pub use value::{format_number, Mapping, Slot, TreeValue};

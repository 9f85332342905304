//! Structural diff engine for yaml-diff.
//!
//! Compares trees of mappings, sequences, and scalars while ignoring key
//! order and sequence element order, and renders the result as annotated
//! pseudo-YAML.
//!
//! # Key Types
//!
//! - [`Differ`] / [`DiffOptions`] -- The engine and its null-equivalence options
//! - [`DiffNode`] / [`DiffChildren`] / [`DiffStatus`] -- The diff tree
//! - [`DocumentDiff`] -- One paired (or unpaired) document from [`diff_documents`]
//!
//! # Example
//!
//! ```
//! use yamldiff_diff::{diff_documents, DiffOptions};
//! use yamldiff_types::load;
//!
//! let left = load("name: app\nreplicas: 3\n").unwrap();
//! let right = load("replicas: 10\nname: app\n").unwrap();
//!
//! let diffs = diff_documents(&left, &right, DiffOptions::default());
//! assert_eq!(diffs[0].render(), "  name: \"app\"\n- replicas: 3\n+ replicas: 10\n");
//! ```

pub mod document_set;
pub mod node;
pub mod options;
pub mod primitive;
pub mod printer;
pub mod sequence;
pub mod structural;

pub use document_set::{diff_documents, DocumentDiff};
pub use node::{DiffChildren, DiffNode, DiffStatus};
pub use options::DiffOptions;
pub use primitive::changed_weight;
pub use structural::Differ;

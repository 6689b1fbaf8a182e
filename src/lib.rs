//! # corvusdb-types
//!
//! The logical-type identity layer shared by every CorvusDB process.
//! Coordinators, workers and catalog readers all hold a [`PrimitiveType`]
//! as the canonical answer to "what kind of value is this"; this crate owns
//! that enumeration and the four pure mappings derived from it:
//!
//! - [`wire`] — lossless, fail-closed translation to and from the
//!   cross-process protocol's type codes, plus minimal descriptor-tree
//!   fixtures for metadata responses.
//! - [`compat`] — the directional implicit-coercion predicate the binder
//!   consults; string-family only, never converts a value.
//! - [`presentation`] — canonical diagnostic names and the independent
//!   ODBC driver name table.
//! - [`exec`] — fail-fast bridge from the vectorized execution engine's
//!   runtime tags.
//!
//! Everything here is a stateless pure function over a closed enum: no
//! locks, no I/O, safe to call from any number of threads.

pub mod compat;
pub mod exec;
pub mod presentation;
pub mod primitive_type;
pub mod wire;

pub use compat::is_type_compatible;
pub use exec::ExecTypeTag;
pub use presentation::{canonical_name, odbc_name};
pub use primitive_type::{ParseTypeError, PrimitiveType};
pub use wire::{
    scalar_descriptor, wrap_column_type, ColumnTypeDescriptor, ScalarTypeDescriptor,
    StructFieldDescriptor, TypeDescriptor, TypeNode, WireTypeCode,
};

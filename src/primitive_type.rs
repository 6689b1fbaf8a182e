//! PrimitiveType - the closed catalog of logical value kinds
//!
//! Every component of the engine that needs to answer "what kind of value is
//! this" holds a `PrimitiveType`. The enum mirrors the cross-process protocol's
//! type enumeration value-for-value; shape information for nested kinds
//! (array element types, struct field names) lives in the descriptor tree
//! built by the wire module, never in the enum itself.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// The closed enumeration of scalar and structural kinds.
///
/// Variants are plain tags: `Decimal32` carries no precision/scale and
/// `Array`/`Map`/`Struct` carry no element or field shape. That metadata
/// belongs to the type-descriptor tree owned by the catalog layer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum PrimitiveType {
    /// Sentinel for unmapped or unknown wire codes. Callers receiving this
    /// from a decode must treat the input as an unsupported type.
    Invalid,

    /// The NULL literal's type before resolution.
    Null,

    Boolean,
    TinyInt,
    SmallInt,
    Int,
    BigInt,
    /// 128-bit signed integer.
    LargeInt,
    Float,
    Double,

    Date,
    DateTime,
    DateV2,
    DateTimeV2,
    Time,
    TimeV2,

    /// Legacy fixed-point decimal.
    DecimalV2,
    Decimal32,
    Decimal64,
    Decimal128I,

    Char,
    Varchar,
    String,
    /// HyperLogLog sketch, carried on the wire as a string value.
    Hll,
    /// Opaque bitmap object, carried on the wire as a string value.
    Object,
    /// Quantile digest, carried on the wire as a string value.
    QuantileState,

    /// Schema-less nested document.
    Jsonb,

    Binary,

    Array,
    Map,
    Struct,
}

impl PrimitiveType {
    /// Every variant, in wire-code order. Property tests iterate this to
    /// prove the mapping and name tables cover the whole catalog.
    pub const ALL: [PrimitiveType; 31] = [
        PrimitiveType::Invalid,
        PrimitiveType::Null,
        PrimitiveType::Boolean,
        PrimitiveType::TinyInt,
        PrimitiveType::SmallInt,
        PrimitiveType::Int,
        PrimitiveType::BigInt,
        PrimitiveType::LargeInt,
        PrimitiveType::Float,
        PrimitiveType::Double,
        PrimitiveType::Date,
        PrimitiveType::DateTime,
        PrimitiveType::DateV2,
        PrimitiveType::DateTimeV2,
        PrimitiveType::Time,
        PrimitiveType::TimeV2,
        PrimitiveType::DecimalV2,
        PrimitiveType::Decimal32,
        PrimitiveType::Decimal64,
        PrimitiveType::Decimal128I,
        PrimitiveType::Char,
        PrimitiveType::Varchar,
        PrimitiveType::String,
        PrimitiveType::Hll,
        PrimitiveType::Object,
        PrimitiveType::QuantileState,
        PrimitiveType::Jsonb,
        PrimitiveType::Binary,
        PrimitiveType::Array,
        PrimitiveType::Map,
        PrimitiveType::Struct,
    ];

    /// Boolean, integer and floating-point kinds.
    pub fn is_numeric(&self) -> bool {
        matches!(
            self,
            PrimitiveType::Boolean
                | PrimitiveType::TinyInt
                | PrimitiveType::SmallInt
                | PrimitiveType::Int
                | PrimitiveType::BigInt
                | PrimitiveType::LargeInt
                | PrimitiveType::Float
                | PrimitiveType::Double
        )
    }

    /// Date and time kinds, legacy and v2 forms.
    pub fn is_temporal(&self) -> bool {
        matches!(
            self,
            PrimitiveType::Date
                | PrimitiveType::DateTime
                | PrimitiveType::DateV2
                | PrimitiveType::DateTimeV2
                | PrimitiveType::Time
                | PrimitiveType::TimeV2
        )
    }

    pub fn is_decimal(&self) -> bool {
        matches!(
            self,
            PrimitiveType::DecimalV2
                | PrimitiveType::Decimal32
                | PrimitiveType::Decimal64
                | PrimitiveType::Decimal128I
        )
    }

    /// The string family: the kinds governed by the implicit-coercion rules
    /// in [`crate::compat`]. Hll, Object and QuantileState belong here
    /// because their values travel as strings.
    pub fn is_string_like(&self) -> bool {
        matches!(
            self,
            PrimitiveType::Char
                | PrimitiveType::Varchar
                | PrimitiveType::String
                | PrimitiveType::Hll
                | PrimitiveType::Object
                | PrimitiveType::QuantileState
        )
    }

    /// Array, map and struct. Shape lives in the descriptor tree.
    pub fn is_nested(&self) -> bool {
        matches!(
            self,
            PrimitiveType::Array | PrimitiveType::Map | PrimitiveType::Struct
        )
    }

    pub fn is_sentinel(&self) -> bool {
        matches!(self, PrimitiveType::Invalid | PrimitiveType::Null)
    }
}

impl fmt::Display for PrimitiveType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(crate::presentation::canonical_name(*self))
    }
}

/// Error returned when a canonical type name does not parse.
///
/// Parsing text is a caller-input concern, so this is a real error value:
/// it is deliberately neither the `Invalid` sentinel (wire policy) nor a
/// panic (exec-bridge policy).
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("unknown type name: {0}")]
pub struct ParseTypeError(pub String);

impl FromStr for PrimitiveType {
    type Err = ParseTypeError;

    /// Parses the canonical diagnostic name (`"BIGINT"`, `"DECIMAL128I"`,
    /// ...) back to its kind. Used by catalog-metadata readers; matching is
    /// case-sensitive because canonical names are machine-written.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        PrimitiveType::ALL
            .iter()
            .copied()
            .find(|t| crate::presentation::canonical_name(*t) == s)
            .ok_or_else(|| ParseTypeError(s.to_string()))
    }
}

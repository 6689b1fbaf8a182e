//! Wire bridge between [`PrimitiveType`] and the cross-process protocol
//!
//! Coordinators, workers and the catalog exchange type identities as numeric
//! codes. The code values are a cross-version contract: changing one breaks
//! any cluster that mixes builds. Decoding is total and fail-closed — a code
//! this build does not know (a newer peer's type, or a retired one) maps to
//! [`PrimitiveType::Invalid`] so the process stays up and the caller can
//! report an unsupported-type condition.

use crate::primitive_type::PrimitiveType;
use serde::{Deserialize, Serialize};

/// A protocol type code as it appears on the wire.
///
/// Modeled the way protocol codegen renders open enums: an i32 newtype with
/// named constants, so values outside the known set stay representable.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct WireTypeCode(pub i32);

impl WireTypeCode {
    pub const INVALID_TYPE: WireTypeCode = WireTypeCode(0);
    pub const NULL_TYPE: WireTypeCode = WireTypeCode(1);
    pub const BOOLEAN: WireTypeCode = WireTypeCode(2);
    pub const TINYINT: WireTypeCode = WireTypeCode(3);
    pub const SMALLINT: WireTypeCode = WireTypeCode(4);
    pub const INT: WireTypeCode = WireTypeCode(5);
    pub const BIGINT: WireTypeCode = WireTypeCode(6);
    pub const FLOAT: WireTypeCode = WireTypeCode(7);
    pub const DOUBLE: WireTypeCode = WireTypeCode(8);
    pub const DATE: WireTypeCode = WireTypeCode(9);
    pub const DATETIME: WireTypeCode = WireTypeCode(10);
    pub const BINARY: WireTypeCode = WireTypeCode(11);
    /// Retired first-generation decimal. Still reserved on the wire; decodes
    /// to the `Invalid` sentinel like any other unmapped code.
    pub const DECIMAL_DEPRECATED: WireTypeCode = WireTypeCode(12);
    pub const CHAR: WireTypeCode = WireTypeCode(13);
    pub const LARGEINT: WireTypeCode = WireTypeCode(14);
    pub const VARCHAR: WireTypeCode = WireTypeCode(15);
    pub const HLL: WireTypeCode = WireTypeCode(16);
    pub const DECIMALV2: WireTypeCode = WireTypeCode(17);
    pub const TIME: WireTypeCode = WireTypeCode(18);
    pub const OBJECT: WireTypeCode = WireTypeCode(19);
    pub const ARRAY: WireTypeCode = WireTypeCode(20);
    pub const MAP: WireTypeCode = WireTypeCode(21);
    pub const STRUCT: WireTypeCode = WireTypeCode(22);
    pub const STRING: WireTypeCode = WireTypeCode(23);
    /// Wildcard used by function signatures on the protocol side; never a
    /// concrete value type, so it has no `PrimitiveType` counterpart.
    pub const ALL: WireTypeCode = WireTypeCode(24);
    pub const QUANTILE_STATE: WireTypeCode = WireTypeCode(25);
    pub const DATEV2: WireTypeCode = WireTypeCode(26);
    pub const DATETIMEV2: WireTypeCode = WireTypeCode(27);
    pub const TIMEV2: WireTypeCode = WireTypeCode(28);
    pub const DECIMAL32: WireTypeCode = WireTypeCode(29);
    pub const DECIMAL64: WireTypeCode = WireTypeCode(30);
    pub const DECIMAL128I: WireTypeCode = WireTypeCode(31);
    pub const JSONB: WireTypeCode = WireTypeCode(32);
}

impl PrimitiveType {
    /// Decodes a wire code. Total: every i32 yields a kind, with anything
    /// outside the mapped set degrading to [`PrimitiveType::Invalid`].
    pub fn from_wire(code: WireTypeCode) -> PrimitiveType {
        match code {
            WireTypeCode::INVALID_TYPE => PrimitiveType::Invalid,
            WireTypeCode::NULL_TYPE => PrimitiveType::Null,
            WireTypeCode::BOOLEAN => PrimitiveType::Boolean,
            WireTypeCode::TINYINT => PrimitiveType::TinyInt,
            WireTypeCode::SMALLINT => PrimitiveType::SmallInt,
            WireTypeCode::INT => PrimitiveType::Int,
            WireTypeCode::BIGINT => PrimitiveType::BigInt,
            WireTypeCode::LARGEINT => PrimitiveType::LargeInt,
            WireTypeCode::FLOAT => PrimitiveType::Float,
            WireTypeCode::DOUBLE => PrimitiveType::Double,
            WireTypeCode::DATE => PrimitiveType::Date,
            WireTypeCode::DATETIME => PrimitiveType::DateTime,
            WireTypeCode::DATEV2 => PrimitiveType::DateV2,
            WireTypeCode::DATETIMEV2 => PrimitiveType::DateTimeV2,
            WireTypeCode::TIME => PrimitiveType::Time,
            WireTypeCode::TIMEV2 => PrimitiveType::TimeV2,
            WireTypeCode::DECIMALV2 => PrimitiveType::DecimalV2,
            WireTypeCode::DECIMAL32 => PrimitiveType::Decimal32,
            WireTypeCode::DECIMAL64 => PrimitiveType::Decimal64,
            WireTypeCode::DECIMAL128I => PrimitiveType::Decimal128I,
            WireTypeCode::CHAR => PrimitiveType::Char,
            WireTypeCode::VARCHAR => PrimitiveType::Varchar,
            WireTypeCode::STRING => PrimitiveType::String,
            WireTypeCode::HLL => PrimitiveType::Hll,
            WireTypeCode::OBJECT => PrimitiveType::Object,
            WireTypeCode::QUANTILE_STATE => PrimitiveType::QuantileState,
            WireTypeCode::JSONB => PrimitiveType::Jsonb,
            WireTypeCode::BINARY => PrimitiveType::Binary,
            WireTypeCode::ARRAY => PrimitiveType::Array,
            WireTypeCode::MAP => PrimitiveType::Map,
            WireTypeCode::STRUCT => PrimitiveType::Struct,
            _ => PrimitiveType::Invalid,
        }
    }

    /// Encodes this kind as its wire code. Exhaustive over the closed enum,
    /// so a newly added variant fails to compile until it is mapped here.
    pub fn to_wire(self) -> WireTypeCode {
        match self {
            PrimitiveType::Invalid => WireTypeCode::INVALID_TYPE,
            PrimitiveType::Null => WireTypeCode::NULL_TYPE,
            PrimitiveType::Boolean => WireTypeCode::BOOLEAN,
            PrimitiveType::TinyInt => WireTypeCode::TINYINT,
            PrimitiveType::SmallInt => WireTypeCode::SMALLINT,
            PrimitiveType::Int => WireTypeCode::INT,
            PrimitiveType::BigInt => WireTypeCode::BIGINT,
            PrimitiveType::LargeInt => WireTypeCode::LARGEINT,
            PrimitiveType::Float => WireTypeCode::FLOAT,
            PrimitiveType::Double => WireTypeCode::DOUBLE,
            PrimitiveType::Date => WireTypeCode::DATE,
            PrimitiveType::DateTime => WireTypeCode::DATETIME,
            PrimitiveType::DateV2 => WireTypeCode::DATEV2,
            PrimitiveType::DateTimeV2 => WireTypeCode::DATETIMEV2,
            PrimitiveType::Time => WireTypeCode::TIME,
            PrimitiveType::TimeV2 => WireTypeCode::TIMEV2,
            PrimitiveType::DecimalV2 => WireTypeCode::DECIMALV2,
            PrimitiveType::Decimal32 => WireTypeCode::DECIMAL32,
            PrimitiveType::Decimal64 => WireTypeCode::DECIMAL64,
            PrimitiveType::Decimal128I => WireTypeCode::DECIMAL128I,
            PrimitiveType::Char => WireTypeCode::CHAR,
            PrimitiveType::Varchar => WireTypeCode::VARCHAR,
            PrimitiveType::String => WireTypeCode::STRING,
            PrimitiveType::Hll => WireTypeCode::HLL,
            PrimitiveType::Object => WireTypeCode::OBJECT,
            PrimitiveType::QuantileState => WireTypeCode::QUANTILE_STATE,
            PrimitiveType::Jsonb => WireTypeCode::JSONB,
            PrimitiveType::Binary => WireTypeCode::BINARY,
            PrimitiveType::Array => WireTypeCode::ARRAY,
            PrimitiveType::Map => WireTypeCode::MAP,
            PrimitiveType::Struct => WireTypeCode::STRUCT,
        }
    }
}

/// Leaf payload of a descriptor node: the scalar kind as a wire code.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScalarTypeDescriptor {
    pub type_code: WireTypeCode,
}

/// A named field attached to a struct node.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StructFieldDescriptor {
    pub name: String,
}

/// One node of a type-descriptor tree.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TypeNode {
    pub scalar_type: Option<ScalarTypeDescriptor>,
    pub struct_fields: Option<Vec<StructFieldDescriptor>>,
}

/// A flattened descriptor tree, nodes in pre-order. This crate only emits
/// single-node trees; the catalog's descriptor builder composes multi-node
/// trees for array/map/struct shapes.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TypeDescriptor {
    pub types: Vec<TypeNode>,
}

/// Column-type wrapper used by metadata responses and test fixtures.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ColumnTypeDescriptor {
    pub type_code: WireTypeCode,
}

/// Builds a single-node descriptor tree for a scalar kind, optionally
/// carrying one named struct field. Fixture and metadata use only — nested
/// shapes and decimal precision/scale are the descriptor builder's job.
pub fn scalar_descriptor(ptype: PrimitiveType, field_name: Option<&str>) -> TypeDescriptor {
    let node = TypeNode {
        scalar_type: Some(ScalarTypeDescriptor {
            type_code: ptype.to_wire(),
        }),
        struct_fields: field_name.map(|name| {
            vec![StructFieldDescriptor {
                name: name.to_string(),
            }]
        }),
    };
    TypeDescriptor { types: vec![node] }
}

/// Wraps a wire code as a column-type descriptor. Carries no semantics
/// beyond the code itself.
pub fn wrap_column_type(code: WireTypeCode) -> ColumnTypeDescriptor {
    ColumnTypeDescriptor { type_code: code }
}

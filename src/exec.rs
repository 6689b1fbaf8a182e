//! Bridge from the columnar execution engine's runtime tags
//!
//! The vectorized execution layer identifies column contents by its own tag
//! enum. Planning validates type support before any fragment reaches
//! execution, so by the time a tag arrives here an unmapped value can only
//! mean an internal defect. The failure policy is therefore the opposite of
//! the wire bridge's: no sentinel, no recoverable error — log and panic so
//! the defect surfaces at the fault and no corrupted type identity
//! propagates downstream.

use crate::primitive_type::PrimitiveType;
use tracing::error;

/// Runtime type tag of a column in the vectorized execution engine.
///
/// The engine defines more tags than the logical layer currently supports;
/// the unsupported ones exist here so columns can carry them, but they must
/// never reach [`PrimitiveType::from_exec_tag`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ExecTypeTag {
    Nothing,
    UInt8,
    UInt16,
    UInt32,
    UInt64,
    Int8,
    Int16,
    Int32,
    Int64,
    Float32,
    Float64,
    Decimal32,
    Decimal64,
    Decimal128,
    String,
    FixedString,
    Date,
    DateTime,
    DateV2,
    DateTimeV2,
    Jsonb,
    Array,
    Tuple,
    Map,
}

impl PrimitiveType {
    /// Maps an execution tag onto its logical kind.
    ///
    /// Partial by design: panics on any tag without a mapping, since upstream
    /// planning guarantees supported tags only. Callers must not catch this.
    pub fn from_exec_tag(tag: ExecTypeTag) -> PrimitiveType {
        match tag {
            ExecTypeTag::Int8 => PrimitiveType::TinyInt,
            ExecTypeTag::Int16 => PrimitiveType::SmallInt,
            ExecTypeTag::Int32 => PrimitiveType::Int,
            ExecTypeTag::Int64 => PrimitiveType::BigInt,
            ExecTypeTag::Float32 => PrimitiveType::Float,
            ExecTypeTag::Float64 => PrimitiveType::Double,
            // Narrow decimals execute on the legacy decimal path.
            ExecTypeTag::Decimal32 => PrimitiveType::DecimalV2,
            ExecTypeTag::Decimal128 => PrimitiveType::Decimal128I,
            ExecTypeTag::String => PrimitiveType::String,
            ExecTypeTag::Date => PrimitiveType::Date,
            ExecTypeTag::DateTime => PrimitiveType::DateTime,
            ExecTypeTag::DateV2 => PrimitiveType::DateV2,
            ExecTypeTag::DateTimeV2 => PrimitiveType::DateTimeV2,
            ExecTypeTag::Jsonb => PrimitiveType::Jsonb,
            ExecTypeTag::Array => PrimitiveType::Array,
            ExecTypeTag::Tuple => PrimitiveType::Struct,
            other => {
                error!(tag = ?other, "execution type tag has no logical mapping");
                panic!("execution type tag has no logical mapping: {other:?}");
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_mapped_tags() {
        assert_eq!(
            PrimitiveType::from_exec_tag(ExecTypeTag::Int8),
            PrimitiveType::TinyInt
        );
        assert_eq!(
            PrimitiveType::from_exec_tag(ExecTypeTag::Decimal32),
            PrimitiveType::DecimalV2
        );
        assert_eq!(
            PrimitiveType::from_exec_tag(ExecTypeTag::Decimal128),
            PrimitiveType::Decimal128I
        );
        assert_eq!(
            PrimitiveType::from_exec_tag(ExecTypeTag::Tuple),
            PrimitiveType::Struct
        );
        assert_eq!(
            PrimitiveType::from_exec_tag(ExecTypeTag::Jsonb),
            PrimitiveType::Jsonb
        );
    }

    #[test]
    #[should_panic(expected = "no logical mapping")]
    fn test_unmapped_tag_panics() {
        let _ = PrimitiveType::from_exec_tag(ExecTypeTag::UInt64);
    }

    #[test]
    #[should_panic(expected = "no logical mapping")]
    fn test_nothing_tag_panics() {
        let _ = PrimitiveType::from_exec_tag(ExecTypeTag::Nothing);
    }
}

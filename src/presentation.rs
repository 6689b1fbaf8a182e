//! Name rendering for logical kinds
//!
//! Two deliberately independent tables. `canonical_name` feeds logs and
//! error messages; `odbc_name` feeds driver metadata and follows the ODBC
//! contract's lowercase vocabulary, which collapses distinctions the
//! canonical table keeps (both `Varchar` and `String` report `"string"`).
//! The tables must not be merged or cross-derived.

use crate::primitive_type::PrimitiveType;

/// What the original rendering code returned from its unreachable default
/// arm. The Rust table is exhaustive so no live path produces this; it is
/// pinned here so the behavior stays visible and tested.
pub const CANONICAL_NAME_FALLBACK: &str = "";

/// Rendering for kinds the ODBC contract does not name. Identical to the
/// `Invalid` rendering on purpose: drivers treat both as "not reportable".
pub const ODBC_NAME_FALLBACK: &str = "invalid";

/// Upper-case diagnostic name, stable across releases.
pub fn canonical_name(t: PrimitiveType) -> &'static str {
    match t {
        PrimitiveType::Invalid => "INVALID",
        PrimitiveType::Null => "NULL",
        PrimitiveType::Boolean => "BOOL",
        PrimitiveType::TinyInt => "TINYINT",
        PrimitiveType::SmallInt => "SMALLINT",
        PrimitiveType::Int => "INT",
        PrimitiveType::BigInt => "BIGINT",
        PrimitiveType::LargeInt => "LARGEINT",
        PrimitiveType::Float => "FLOAT",
        PrimitiveType::Double => "DOUBLE",
        PrimitiveType::Date => "DATE",
        PrimitiveType::DateTime => "DATETIME",
        PrimitiveType::DateV2 => "DATEV2",
        PrimitiveType::DateTimeV2 => "DATETIMEV2",
        PrimitiveType::Time => "TIME",
        PrimitiveType::TimeV2 => "TIMEV2",
        PrimitiveType::DecimalV2 => "DECIMALV2",
        PrimitiveType::Decimal32 => "DECIMAL32",
        PrimitiveType::Decimal64 => "DECIMAL64",
        PrimitiveType::Decimal128I => "DECIMAL128I",
        PrimitiveType::Char => "CHAR",
        PrimitiveType::Varchar => "VARCHAR",
        PrimitiveType::String => "STRING",
        PrimitiveType::Hll => "HLL",
        PrimitiveType::Object => "OBJECT",
        PrimitiveType::QuantileState => "QUANTILE_STATE",
        PrimitiveType::Jsonb => "JSONB",
        PrimitiveType::Binary => "BINARY",
        PrimitiveType::Array => "ARRAY",
        PrimitiveType::Map => "MAP",
        PrimitiveType::Struct => "STRUCT",
    }
}

/// Lower-case ODBC driver name. Part of the driver-metadata contract; do
/// not edit independently of it. `Time` and the nested kinds have no ODBC
/// rendering and report [`ODBC_NAME_FALLBACK`].
pub fn odbc_name(t: PrimitiveType) -> &'static str {
    match t {
        PrimitiveType::Invalid => "invalid",
        PrimitiveType::Null => "null",
        PrimitiveType::Boolean => "boolean",
        PrimitiveType::TinyInt => "tinyint",
        PrimitiveType::SmallInt => "smallint",
        PrimitiveType::Int => "int",
        PrimitiveType::BigInt => "bigint",
        PrimitiveType::LargeInt => "largeint",
        PrimitiveType::Float => "float",
        PrimitiveType::Double => "double",
        PrimitiveType::Date => "date",
        PrimitiveType::DateTime => "datetime",
        PrimitiveType::DateV2 => "datev2",
        PrimitiveType::DateTimeV2 => "datetimev2",
        PrimitiveType::TimeV2 => "timev2",
        PrimitiveType::DecimalV2 => "decimalv2",
        PrimitiveType::Decimal32 => "decimal32",
        PrimitiveType::Decimal64 => "decimal64",
        // Width suffix dropped per the driver contract.
        PrimitiveType::Decimal128I => "decimal128",
        PrimitiveType::Char => "char",
        PrimitiveType::Varchar => "string",
        PrimitiveType::String => "string",
        PrimitiveType::Hll => "hll",
        PrimitiveType::Object => "object",
        PrimitiveType::QuantileState => "quantile_state",
        PrimitiveType::Jsonb => "jsonb",
        PrimitiveType::Binary => "binary",
        PrimitiveType::Time
        | PrimitiveType::Array
        | PrimitiveType::Map
        | PrimitiveType::Struct => ODBC_NAME_FALLBACK,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_names_are_non_empty_for_every_kind() {
        for t in PrimitiveType::ALL {
            assert!(!canonical_name(t).is_empty(), "{t:?} canonical name empty");
            assert!(!odbc_name(t).is_empty(), "{t:?} odbc name empty");
        }
    }

    #[test]
    fn test_canonical_names_are_upper_case() {
        for t in PrimitiveType::ALL {
            let name = canonical_name(t);
            assert_eq!(name, name.to_uppercase(), "{t:?}");
        }
    }

    #[test]
    fn test_odbc_names_are_lower_case() {
        for t in PrimitiveType::ALL {
            let name = odbc_name(t);
            assert_eq!(name, name.to_lowercase(), "{t:?}");
        }
    }

    #[test]
    fn test_sentinel_renderings() {
        assert_eq!(canonical_name(PrimitiveType::Invalid), "INVALID");
        assert_eq!(canonical_name(PrimitiveType::Null), "NULL");
        assert_eq!(odbc_name(PrimitiveType::Null), "null");
    }

    #[test]
    fn test_odbc_collapses_string_kinds() {
        assert_eq!(odbc_name(PrimitiveType::Varchar), "string");
        assert_eq!(odbc_name(PrimitiveType::String), "string");
        assert_eq!(odbc_name(PrimitiveType::Decimal128I), "decimal128");
    }

    #[test]
    fn test_odbc_fallback_kinds() {
        for t in [
            PrimitiveType::Time,
            PrimitiveType::Array,
            PrimitiveType::Map,
            PrimitiveType::Struct,
        ] {
            assert_eq!(odbc_name(t), ODBC_NAME_FALLBACK);
        }
    }

    #[test]
    fn test_pinned_fallback_constants() {
        assert_eq!(CANONICAL_NAME_FALLBACK, "");
        assert_eq!(ODBC_NAME_FALLBACK, "invalid");
        assert_eq!(ODBC_NAME_FALLBACK, odbc_name(PrimitiveType::Invalid));
    }
}

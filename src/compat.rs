//! Implicit-coercion compatibility between logical kinds
//!
//! Consulted by the binder during expression and overload resolution:
//! `is_type_compatible(lhs, rhs)` answers whether a value of kind `rhs` may
//! occupy a context expecting `lhs` without an explicit cast. Classification
//! only — no value is ever converted here.
//!
//! Only the string family coerces at all, and the relation is directional:
//! each target kind has its own acceptance list, and listing is not
//! mutual (`Varchar` accepts `QuantileState`, but `String` does not).
//! Everything outside the family is compatible with itself alone.

use crate::primitive_type::PrimitiveType;

const VARCHAR_ACCEPTS: &[PrimitiveType] = &[
    PrimitiveType::Char,
    PrimitiveType::Varchar,
    PrimitiveType::Hll,
    PrimitiveType::Object,
    PrimitiveType::QuantileState,
    PrimitiveType::String,
];

const OBJECT_ACCEPTS: &[PrimitiveType] = &[
    PrimitiveType::Varchar,
    PrimitiveType::Object,
    PrimitiveType::String,
];

const CHAR_HLL_ACCEPTS: &[PrimitiveType] = &[
    PrimitiveType::Char,
    PrimitiveType::Varchar,
    PrimitiveType::Hll,
    PrimitiveType::String,
];

const STRING_ACCEPTS: &[PrimitiveType] = &[
    PrimitiveType::Char,
    PrimitiveType::Varchar,
    PrimitiveType::Hll,
    PrimitiveType::Object,
    PrimitiveType::String,
];

const QUANTILE_STATE_ACCEPTS: &[PrimitiveType] = &[
    PrimitiveType::Varchar,
    PrimitiveType::QuantileState,
    PrimitiveType::String,
];

/// Directional compatibility: may a `rhs` value stand where `lhs` is
/// expected, without a cast?
pub fn is_type_compatible(lhs: PrimitiveType, rhs: PrimitiveType) -> bool {
    let accepted = match lhs {
        PrimitiveType::Varchar => VARCHAR_ACCEPTS,
        PrimitiveType::Object => OBJECT_ACCEPTS,
        PrimitiveType::Char | PrimitiveType::Hll => CHAR_HLL_ACCEPTS,
        PrimitiveType::String => STRING_ACCEPTS,
        PrimitiveType::QuantileState => QUANTILE_STATE_ACCEPTS,
        _ => return lhs == rhs,
    };
    accepted.contains(&rhs)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_reflexive_for_every_kind() {
        for t in PrimitiveType::ALL {
            assert!(is_type_compatible(t, t), "{t:?} not self-compatible");
        }
    }

    #[test]
    fn test_directional_pairs() {
        assert!(is_type_compatible(
            PrimitiveType::Varchar,
            PrimitiveType::QuantileState
        ));
        assert!(!is_type_compatible(
            PrimitiveType::QuantileState,
            PrimitiveType::Char
        ));
        assert!(is_type_compatible(
            PrimitiveType::QuantileState,
            PrimitiveType::String
        ));
        assert!(!is_type_compatible(
            PrimitiveType::String,
            PrimitiveType::QuantileState
        ));
    }

    #[test]
    fn test_non_string_kinds_accept_only_themselves() {
        for lhs in PrimitiveType::ALL {
            if lhs.is_string_like() {
                continue;
            }
            for rhs in PrimitiveType::ALL {
                assert_eq!(
                    is_type_compatible(lhs, rhs),
                    lhs == rhs,
                    "unexpected coercion {lhs:?} <- {rhs:?}"
                );
            }
        }
    }

    #[test]
    fn test_string_family_never_accepts_outsiders() {
        for lhs in PrimitiveType::ALL {
            if !lhs.is_string_like() {
                continue;
            }
            for rhs in PrimitiveType::ALL {
                if !rhs.is_string_like() {
                    assert!(
                        !is_type_compatible(lhs, rhs),
                        "{lhs:?} must not accept {rhs:?}"
                    );
                }
            }
        }
    }
}

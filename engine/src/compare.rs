//! Total ordering over field values.
//!
//! Sorting must never fail, whatever mix of values a column holds, so the
//! comparator groups values into kinds before comparing within a kind:
//!
//! 1. missing fields and nulls
//! 2. numbers, compared numerically
//! 3. everything else, compared by its stringified natural order
//!
//! Keeping kinds apart is what makes the relation transitive. Comparing a
//! number against a string through their text forms would not be
//! (`2 < 10`, `"10" < "1a"`, `"1a" < "2"`).

use crate::record::{FieldValue, Record};
use serde::{Deserialize, Serialize};
use std::cmp::Ordering;

/// Direction of a sort.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SortDirection {
    #[default]
    Ascending,
    Descending,
}

impl SortDirection {
    /// Apply this direction to a base (ascending) ordering.
    pub fn apply(self, ordering: Ordering) -> Ordering {
        match self {
            SortDirection::Ascending => ordering,
            SortDirection::Descending => ordering.reverse(),
        }
    }

    /// The opposite direction.
    pub fn toggled(self) -> Self {
        match self {
            SortDirection::Ascending => SortDirection::Descending,
            SortDirection::Descending => SortDirection::Ascending,
        }
    }
}

fn kind(value: Option<&FieldValue<'_>>) -> u8 {
    match value {
        None | Some(FieldValue::Null) => 0,
        Some(FieldValue::Int(_)) | Some(FieldValue::Float(_)) => 1,
        Some(_) => 2,
    }
}

fn compare_f64(a: f64, b: f64) -> Ordering {
    // partial_cmp keeps -0.0 == 0.0; NaN falls back to the IEEE total order
    a.partial_cmp(&b).unwrap_or_else(|| a.total_cmp(&b))
}

/// Exact comparison of an integer against a float. Integers beyond 2^53
/// are not rounded, keeping it consistent with `Int`/`Int`.
fn compare_int_float(i: i64, f: f64) -> Ordering {
    // i64 bounds as exactly representable floats: [-2^63, 2^63)
    const LOWER: f64 = -9_223_372_036_854_775_808.0;
    const UPPER: f64 = 9_223_372_036_854_775_808.0;

    if f.is_nan() {
        // same place total_cmp gives NaN among floats
        return if f.is_sign_negative() {
            Ordering::Greater
        } else {
            Ordering::Less
        };
    }
    if f >= UPPER {
        return Ordering::Less;
    }
    if f < LOWER {
        return Ordering::Greater;
    }

    let whole = f.trunc();
    match i.cmp(&(whole as i64)) {
        Ordering::Equal => compare_f64(whole, f),
        ordering => ordering,
    }
}

/// Compare two (possibly missing) field values in ascending order.
pub fn compare_values(a: Option<&FieldValue<'_>>, b: Option<&FieldValue<'_>>) -> Ordering {
    let (ka, kb) = (kind(a), kind(b));
    if ka != kb {
        return ka.cmp(&kb);
    }

    match (a, b) {
        (Some(FieldValue::Int(x)), Some(FieldValue::Int(y))) => x.cmp(y),
        (Some(FieldValue::Int(x)), Some(FieldValue::Float(y))) => compare_int_float(*x, *y),
        (Some(FieldValue::Float(x)), Some(FieldValue::Int(y))) => {
            compare_int_float(*y, *x).reverse()
        }
        (Some(FieldValue::Text(x)), Some(FieldValue::Text(y))) => x.cmp(y),
        (Some(x), Some(y)) => match (x.as_f64(), y.as_f64()) {
            (Some(x), Some(y)) => compare_f64(x, y),
            _ => x.to_string().cmp(&y.to_string()),
        },
        _ => Ordering::Equal,
    }
}

/// Compare two records by the value of `key`, ascending.
pub fn compare_records<R: Record + ?Sized>(a: &R, b: &R, key: &str) -> Ordering {
    compare_values(a.field(key).as_ref(), b.field(key).as_ref())
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn cmp(a: FieldValue<'_>, b: FieldValue<'_>) -> Ordering {
        compare_values(Some(&a), Some(&b))
    }

    #[test]
    fn equal_values() {
        assert_eq!(cmp("Depot".into(), "Depot".into()), Ordering::Equal);
        assert_eq!(cmp(FieldValue::Int(3), FieldValue::Int(3)), Ordering::Equal);
        assert_eq!(cmp(FieldValue::Int(3), FieldValue::Float(3.0)), Ordering::Equal);
        assert_eq!(compare_values(None, None), Ordering::Equal);
    }

    #[test]
    fn numbers_compare_numerically() {
        assert_eq!(cmp(FieldValue::Int(2), FieldValue::Int(10)), Ordering::Less);
        assert_eq!(cmp(FieldValue::Float(9.5), FieldValue::Int(10)), Ordering::Less);
        assert_eq!(cmp(FieldValue::Float(-0.0), FieldValue::Float(0.0)), Ordering::Equal);
    }

    #[test]
    fn strings_compare_lexicographically() {
        assert_eq!(cmp("Apollo".into(), "Zenith".into()), Ordering::Less);
        assert_eq!(cmp("10".into(), "9".into()), Ordering::Less);
        assert_eq!(
            cmp("2024-01-31".into(), "2024-02-01".into()),
            Ordering::Less
        );
        assert_eq!(cmp(FieldValue::Bool(false), FieldValue::Bool(true)), Ordering::Less);
    }

    #[test]
    fn missing_sorts_first() {
        let present = FieldValue::from("a");
        assert_eq!(compare_values(None, Some(&present)), Ordering::Less);
        assert_eq!(compare_values(Some(&present), None), Ordering::Greater);
        assert_eq!(
            compare_values(Some(&FieldValue::Null), Some(&FieldValue::Int(i64::MIN))),
            Ordering::Less
        );
        assert_eq!(compare_values(Some(&FieldValue::Null), None), Ordering::Equal);
    }

    #[test]
    fn numbers_before_text() {
        assert_eq!(cmp(FieldValue::Int(10), "1a".into()), Ordering::Less);
        assert_eq!(cmp("1a".into(), FieldValue::Int(2)), Ordering::Greater);
    }

    #[test]
    fn nan_is_ordered() {
        let ordering = cmp(FieldValue::Float(f64::NAN), FieldValue::Float(1.0));
        assert_eq!(ordering, Ordering::Greater);
        assert_eq!(
            cmp(FieldValue::Float(1.0), FieldValue::Float(f64::NAN)),
            Ordering::Less
        );
    }

    #[test]
    fn large_ints_against_floats_stay_transitive() {
        let big = 1_i64 << 53;
        let float = FieldValue::Float(big as f64);

        assert_eq!(cmp(FieldValue::Int(big + 1), float.clone()), Ordering::Greater);
        assert_eq!(cmp(float.clone(), FieldValue::Int(big)), Ordering::Equal);
        assert_eq!(cmp(FieldValue::Int(big + 1), FieldValue::Int(big)), Ordering::Greater);
        assert_eq!(cmp(float, FieldValue::Int(big + 1)), Ordering::Less);
    }

    #[test]
    fn ints_against_fractional_and_extreme_floats() {
        assert_eq!(cmp(FieldValue::Int(2), FieldValue::Float(2.5)), Ordering::Less);
        assert_eq!(cmp(FieldValue::Int(-2), FieldValue::Float(-2.5)), Ordering::Greater);
        assert_eq!(cmp(FieldValue::Int(0), FieldValue::Float(-0.0)), Ordering::Equal);
        assert_eq!(cmp(FieldValue::Int(i64::MAX), FieldValue::Float(f64::INFINITY)), Ordering::Less);
        assert_eq!(cmp(FieldValue::Int(i64::MAX), FieldValue::Float(9.3e18)), Ordering::Less);
        assert_eq!(cmp(FieldValue::Int(i64::MIN), FieldValue::Float(-9.3e18)), Ordering::Greater);
        assert_eq!(cmp(FieldValue::Int(i64::MIN), FieldValue::Float(i64::MIN as f64)), Ordering::Equal);
        assert_eq!(cmp(FieldValue::Float(f64::NAN), FieldValue::Int(i64::MAX)), Ordering::Greater);
    }

    #[test]
    fn direction() {
        assert_eq!(SortDirection::default(), SortDirection::Ascending);
        assert_eq!(SortDirection::Ascending.toggled(), SortDirection::Descending);
        assert_eq!(SortDirection::Descending.toggled(), SortDirection::Ascending);
        assert_eq!(SortDirection::Descending.apply(Ordering::Less), Ordering::Greater);
        assert_eq!(SortDirection::Ascending.apply(Ordering::Less), Ordering::Less);
    }

    #[test]
    fn records_by_key() {
        let a = json!({"id": "1", "stock": 5});
        let b = json!({"id": "2", "stock": 12});
        let c = json!({"id": "3"});
        assert_eq!(compare_records(&a, &b, "stock"), Ordering::Less);
        assert_eq!(compare_records(&c, &a, "stock"), Ordering::Less);
    }
}

//! Search and ordering over raw field values.

use std::cmp::Ordering;

use crate::models::{Entity, FieldValue};

use super::{Column, SortOrder};

/// Case-insensitive substring match against every field of the record.
pub fn matches<T: Entity>(row: &T, query: &str) -> bool {
    if query.is_empty() {
        return true;
    }
    let needle = query.to_lowercase();
    row.fields().iter().any(|(_, value)| {
        value
            .search_text()
            .is_some_and(|text| text.to_lowercase().contains(&needle))
    })
}

fn rank(value: &FieldValue) -> u8 {
    match value {
        FieldValue::Null => 0,
        FieldValue::Number(_) => 1,
        FieldValue::Text(_) => 2,
        FieldValue::Date(_) => 3,
        FieldValue::Timestamp(_) => 4,
    }
}

/// Native ordering within a kind; across kinds null < number < text < date < timestamp.
pub fn compare_values(a: &FieldValue, b: &FieldValue) -> Ordering {
    match (a, b) {
        (FieldValue::Number(x), FieldValue::Number(y)) => x.total_cmp(y),
        (FieldValue::Text(x), FieldValue::Text(y)) => x.cmp(y),
        (FieldValue::Date(x), FieldValue::Date(y)) => x.cmp(y),
        (FieldValue::Timestamp(x), FieldValue::Timestamp(y)) => x.cmp(y),
        _ => rank(a).cmp(&rank(b)),
    }
}

pub fn sort_rows<T: Entity>(rows: &mut [&T], column: &Column<T>, order: SortOrder) {
    rows.sort_by_cached_key(|row| SortKey(column.sort_value(row)));
    if order == SortOrder::Desc {
        rows.reverse();
    }
}

struct SortKey(FieldValue);

impl PartialEq for SortKey {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl Eq for SortKey {}

impl PartialOrd for SortKey {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for SortKey {
    fn cmp(&self, other: &Self) -> Ordering {
        compare_values(&self.0, &other.0)
    }
}

#[cfg(test)]
mod tests {
    use chrono::NaiveDate;

    use super::*;

    #[test]
    fn numbers_compare_numerically() {
        assert_eq!(
            compare_values(&FieldValue::number(9), &FieldValue::number(10)),
            Ordering::Less
        );
    }

    #[test]
    fn text_compares_lexicographically() {
        assert_eq!(
            compare_values(&FieldValue::text("MATH101"), &FieldValue::text("CS201")),
            Ordering::Greater
        );
    }

    #[test]
    fn mixed_kinds_have_a_fixed_order() {
        let date = FieldValue::Date(NaiveDate::default());
        assert_eq!(compare_values(&FieldValue::Null, &FieldValue::number(1)), Ordering::Less);
        assert_eq!(compare_values(&FieldValue::text("a"), &FieldValue::number(1)), Ordering::Greater);
        assert_eq!(compare_values(&date, &FieldValue::text("z")), Ordering::Greater);
    }
}

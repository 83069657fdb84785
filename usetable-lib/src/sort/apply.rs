//! Sorting rows by the active column.

use std::cmp::Ordering;

use log::trace;
use log::warn;

use super::SortBy;
use super::SortKey;
use super::compare_keys;
use crate::column::ColumnDef;
use crate::column::resolve_value;
use crate::error::TableError;
use crate::model::Row;

/// Returns a copy of `rows` ordered by the column `sort_by` names.
///
/// Every row's value is resolved and checked before any reordering, so an
/// error leaves nothing half-sorted. The sort is stable and finishes even
/// when a mixed column compares some pairs inconsistently. If no column has
/// the requested id the rows come back in their original order.
pub fn sort_rows(rows: &[Row], columns: &[ColumnDef], sort_by: &SortBy) -> Result<Vec<Row>, TableError> {
    let Some(column) = columns
        .iter()
        .find(|col| col.get_id() == Some(sort_by.column_id.as_str()))
    else {
        warn!(
            "[sort] No column with id '{}', leaving {} rows unsorted",
            sort_by.column_id,
            rows.len()
        );
        return Ok(rows.to_vec());
    };

    let keys = rows
        .iter()
        .map(|row| {
            let value = resolve_value(column, row)?;
            SortKey::new(&value).map_err(|err| match err {
                TableError::InvalidColumnDef { reason, .. } => {
                    TableError::invalid_column(column.get_id(), reason)
                }
                other => other,
            })
        })
        .collect::<Result<Vec<_>, _>>()?;

    let order = merge_sort((0..rows.len()).collect(), &|a, b| {
        compare_keys(&keys[a], &keys[b], sort_by.direction)
    });

    trace!(
        "[sort] Sorted {} rows by '{}' {}",
        rows.len(),
        sort_by.column_id,
        sort_by.direction
    );

    Ok(order.into_iter().map(|i| rows[i].clone()).collect())
}

/// Stable merge sort of row indices.
///
/// Mixed columns classify each pair separately, so `compare` need not be a
/// total order. Merging only ever picks one of two heads and never checks
/// consistency, so any comparator yields a permutation of `indices`.
fn merge_sort(indices: Vec<usize>, compare: &impl Fn(usize, usize) -> Ordering) -> Vec<usize> {
    if indices.len() <= 1 {
        return indices;
    }

    let mut left = indices;
    let right = left.split_off(left.len() / 2);
    let left = merge_sort(left, compare);
    let right = merge_sort(right, compare);

    let mut merged = Vec::with_capacity(left.len() + right.len());
    let (mut l, mut r) = (0, 0);
    while l < left.len() && r < right.len() {
        if compare(right[r], left[l]) == Ordering::Less {
            merged.push(right[r]);
            r += 1;
        } else {
            merged.push(left[l]);
            l += 1;
        }
    }
    merged.extend_from_slice(&left[l..]);
    merged.extend_from_slice(&right[r..]);
    merged
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::Value;

    fn cars() -> Vec<Row> {
        vec![
            Row::new()
                .set("id", "24242")
                .set("displayName", "Alex's Car")
                .set("make", "Ford")
                .set("model", "Taurus")
                .set("year", "2001"),
            Row::new()
                .set("id", "24242dfsdsffff")
                .set("displayName", "Brian's Car")
                .set("make", "Chevrolet")
                .set("model", "Cavelier")
                .set("year", "1998"),
            Row::new()
                .set("id", "sdfsdfw32r")
                .set("displayName", "Chris' Car")
                .set("make", "Lexus")
                .set("model", "CT-200h")
                .set("year", "2014"),
        ]
    }

    fn columns(keys: &[&str]) -> Vec<ColumnDef> {
        keys.iter()
            .map(|key| ColumnDef::key(*key).id(*key).header(*key))
            .collect()
    }

    fn field<'a>(rows: &'a [Row], key: &str) -> Vec<&'a Value> {
        rows.iter().map(|row| row.get(key).unwrap()).collect()
    }

    #[test]
    fn test_sort_strings_asc() {
        let data = cars();
        let cols = columns(&["displayName", "make", "model", "year"]);

        assert_eq!(sort_rows(&data, &cols, &SortBy::asc("displayName")).unwrap(), data);

        let sorted = sort_rows(&data, &cols, &SortBy::asc("make")).unwrap();
        assert_eq!(
            field(&sorted, "make"),
            vec![&Value::from("Chevrolet"), &Value::from("Ford"), &Value::from("Lexus")]
        );
    }

    #[test]
    fn test_sort_strings_desc() {
        let data = cars();
        let cols = columns(&["displayName", "make", "model", "year"]);

        let sorted = sort_rows(&data, &cols, &SortBy::desc("displayName")).unwrap();
        let expected: Vec<Row> = data.iter().rev().cloned().collect();
        assert_eq!(sorted, expected);
    }

    #[test]
    fn test_sort_numbers() {
        let data: Vec<Row> = [(1, 2, 3, 4), (2, 3, 4, 1), (3, 4, 1, 2), (4, 1, 2, 3)]
            .into_iter()
            .map(|(a, b, c, d)| {
                Row::new()
                    .set("displayName", a as i64)
                    .set("make", b as i64)
                    .set("model", c as i64)
                    .set("year", d as i64)
            })
            .collect();
        let cols = columns(&["displayName", "make", "model", "year"]);

        let sorted = sort_rows(&data, &cols, &SortBy::asc("make")).unwrap();
        assert_eq!(
            field(&sorted, "make"),
            vec![&Value::Int(1), &Value::Int(2), &Value::Int(3), &Value::Int(4)]
        );
        assert_eq!(sorted[0].get("displayName"), Some(&Value::Int(4)));

        let sorted = sort_rows(&data, &cols, &SortBy::desc("displayName")).unwrap();
        assert_eq!(
            field(&sorted, "displayName"),
            vec![&Value::Int(4), &Value::Int(3), &Value::Int(2), &Value::Int(1)]
        );
    }

    #[test]
    fn test_sort_numeric_strings_numerically() {
        let data: Vec<Row> = ["10", "9", "100"]
            .into_iter()
            .map(|n| Row::new().set("n", n))
            .collect();
        let sorted = sort_rows(&data, &columns(&["n"]), &SortBy::asc("n")).unwrap();
        assert_eq!(
            field(&sorted, "n"),
            vec![&Value::from("9"), &Value::from("10"), &Value::from("100")]
        );
    }

    #[test]
    fn test_sort_date_strings_desc() {
        let data: Vec<Row> = ["12-12-2000", "12-13-2000", "12-14-2000", "12-15-2000"]
            .into_iter()
            .map(|d| Row::new().set("displayName", d))
            .collect();
        let sorted = sort_rows(&data, &columns(&["displayName"]), &SortBy::desc("displayName")).unwrap();
        let expected: Vec<Row> = data.iter().rev().cloned().collect();
        assert_eq!(sorted, expected);
    }

    #[test]
    fn test_sort_absent_values_last() {
        let data = vec![
            Row::new().set("name", Value::Null),
            Row::new().set("name", "B"),
            Row::new().set("name", ""),
            Row::new().set("name", "A"),
        ];
        let cols = columns(&["name"]);

        let asc = sort_rows(&data, &cols, &SortBy::asc("name")).unwrap();
        assert_eq!(
            field(&asc, "name"),
            vec![&Value::from("A"), &Value::from("B"), &Value::Null, &Value::from("")]
        );

        let desc = sort_rows(&data, &cols, &SortBy::desc("name")).unwrap();
        assert_eq!(
            field(&desc, "name"),
            vec![&Value::from("B"), &Value::from("A"), &Value::Null, &Value::from("")]
        );
    }

    #[test]
    fn test_sort_is_stable() {
        let data = vec![
            Row::new().set("k", "a").set("n", 1i64),
            Row::new().set("k", "A").set("n", 2i64),
            Row::new().set("k", "a").set("n", 3i64),
        ];
        let sorted = sort_rows(&data, &columns(&["k"]), &SortBy::desc("k")).unwrap();
        assert_eq!(sorted, data);
    }

    #[test]
    fn test_unknown_column_leaves_order() {
        let data = cars();
        let sorted = sort_rows(&data, &columns(&["make"]), &SortBy::asc("nope")).unwrap();
        assert_eq!(sorted, data);
    }

    #[test]
    fn test_sort_errors_propagate() {
        let data = cars();
        let cols = vec![ColumnDef::key("color").id("color")];
        let err = sort_rows(&data, &cols, &SortBy::asc("color")).unwrap_err();
        assert_eq!(err, TableError::missing_field("color"));

        let data = vec![Row::new().set("tags", serde_json::json!(["a", "b"]))];
        let cols = vec![ColumnDef::key("tags").id("tags")];
        let err = sort_rows(&data, &cols, &SortBy::asc("tags")).unwrap_err();
        assert!(matches!(
            err,
            TableError::InvalidColumnDef { ref column, .. } if column == "tags"
        ));
    }

    /// Deterministic shuffle of `pool` values into `n` rows.
    fn mixed_rows(pool: &[&str], n: usize, seed: u64) -> Vec<Row> {
        let mut state = seed;
        (0..n)
            .map(|i| {
                state = state
                    .wrapping_mul(6_364_136_223_846_793_005)
                    .wrapping_add(1_442_695_040_888_963_407);
                let pick = (state >> 33) as usize % pool.len();
                Row::new().set("v", pool[pick]).set("i", i as i64)
            })
            .collect()
    }

    fn row_ids(rows: &[Row]) -> Vec<i64> {
        let mut ids: Vec<i64> = rows
            .iter()
            .map(|row| match row.get("i") {
                Some(Value::Int(i)) => *i,
                other => panic!("unexpected id {:?}", other),
            })
            .collect();
        ids.sort_unstable();
        ids
    }

    #[test]
    fn test_sort_mixed_kinds_completes() {
        let pool = ["9", "10", "5-1-2000", "100", "3-3-1999", "2", "b", "12-12-2012", ""];
        let cols = columns(&["v"]);

        for (seed, n) in [(1u64, 25usize), (7, 64), (42, 300), (1234, 1000)] {
            let data = mixed_rows(&pool, n, seed);
            for sort_by in [SortBy::asc("v"), SortBy::desc("v")] {
                let sorted = sort_rows(&data, &cols, &sort_by).unwrap();
                assert_eq!(row_ids(&sorted), (0..n as i64).collect::<Vec<_>>());

                let first_empty = sorted
                    .iter()
                    .position(|row| row.get("v") == Some(&Value::from("")))
                    .unwrap_or(n);
                assert!(sorted[first_empty..]
                    .iter()
                    .all(|row| row.get("v") == Some(&Value::from(""))));
            }
        }
    }

    #[test]
    fn test_sort_uniform_kind_in_mixed_pool() {
        let data = mixed_rows(&["9", "10", "100", "2"], 40, 99);
        let sorted = sort_rows(&data, &columns(&["v"]), &SortBy::asc("v")).unwrap();
        let values: Vec<f64> = sorted
            .iter()
            .map(|row| row.get("v").and_then(crate::sort::parse_number).unwrap())
            .collect();
        assert!(values.windows(2).all(|w| w[0] <= w[1]));
    }

    #[test]
    fn test_sort_falsy_numbers_last() {
        let data: Vec<Row> = [3i64, 0, -2, 7]
            .into_iter()
            .map(|n| Row::new().set("n", n))
            .collect();
        let cols = columns(&["n"]);

        let asc = sort_rows(&data, &cols, &SortBy::asc("n")).unwrap();
        assert_eq!(
            field(&asc, "n"),
            vec![&Value::Int(-2), &Value::Int(3), &Value::Int(7), &Value::Int(0)]
        );

        let desc = sort_rows(&data, &cols, &SortBy::desc("n")).unwrap();
        assert_eq!(
            field(&desc, "n"),
            vec![&Value::Int(7), &Value::Int(3), &Value::Int(-2), &Value::Int(0)]
        );
    }

    #[test]
    fn test_sort_accented_names() {
        let data: Vec<Row> = ["zeta", "éclair", "Eve", "apple"]
            .into_iter()
            .map(|name| Row::new().set("name", name))
            .collect();
        let sorted = sort_rows(&data, &columns(&["name"]), &SortBy::asc("name")).unwrap();
        assert_eq!(
            field(&sorted, "name"),
            vec![
                &Value::from("apple"),
                &Value::from("éclair"),
                &Value::from("Eve"),
                &Value::from("zeta")
            ]
        );
    }
}

//! Copyright © 2025-2026 Wenze Wei. All Rights Reserved.
//!
//! This file is part of Zi Grid.
//! The Zi Grid project belongs to the Dunimd Team.
//!
//! Licensed under the Apache License, Version 2.0 (the "License");
//! You may not use this file except in compliance with the License.
//! You may obtain a copy of the License at
//!
//!     http://www.apache.org/licenses/LICENSE-2.0
//!
//! Unless required by applicable law or agreed to in writing, software
//! distributed under the License is distributed on an "AS IS" BASIS,
//! WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
//! See the License for the specific language governing permissions and
//! limitations under the License.

//! # Zi Grid Engine Tests - Sort
//!
//! Single-column ordering of filtered views and the column toggle cycle.
//!
//! ## Running Tests
//!
//! ```bash
//! cargo test --test sort
//! ```

use std::collections::BTreeSet;

use proptest::prelude::*;
use serde_json::{json, Value};
use zigrid::{sort, ZiRecord, ZiSortConfig, ZiSortDirection};

fn records(rows: Vec<Value>) -> Vec<ZiRecord> {
    rows.into_iter().map(ZiRecord::from).collect()
}

fn ids(records: &[&ZiRecord]) -> Vec<String> {
    records
        .iter()
        .map(|record| record.id.clone().unwrap_or_default())
        .collect()
}

/// Tests case-insensitive string ordering in both directions.
#[test]
fn test_sort_strings_case_insensitively() {
    let rows = records(vec![
        json!({"id": "a", "name": "charlie"}),
        json!({"id": "b", "name": "Alice"}),
        json!({"id": "c", "name": "bob"}),
    ]);
    let refs: Vec<&ZiRecord> = rows.iter().collect();

    assert_eq!(ids(&sort(&refs, &ZiSortConfig::ascending("name"))), vec!["b", "c", "a"]);
    assert_eq!(ids(&sort(&refs, &ZiSortConfig::descending("name"))), vec!["a", "c", "b"]);
}

/// Tests numeric, nested and boolean keys.
#[test]
fn test_sort_numbers_nested_paths_and_booleans() {
    let rows = records(vec![
        json!({"id": "a", "salary": 120000, "address": {"city": "Denver"}, "is_active": true}),
        json!({"id": "b", "salary": 9500.5, "address": {"city": "austin"}, "is_active": false}),
        json!({"id": "c", "salary": 70000, "address": {"city": "Boston"}, "is_active": true}),
    ]);
    let refs: Vec<&ZiRecord> = rows.iter().collect();

    assert_eq!(ids(&sort(&refs, &ZiSortConfig::ascending("salary"))), vec!["b", "c", "a"]);
    assert_eq!(ids(&sort(&refs, &ZiSortConfig::ascending("address.city"))), vec!["b", "c", "a"]);
    assert_eq!(ids(&sort(&refs, &ZiSortConfig::ascending("is_active"))), vec!["b", "a", "c"]);
}

/// Tests that equal keys keep their incoming order.
#[test]
fn test_sort_is_stable() {
    let rows = records(vec![
        json!({"id": "1", "department": "Design"}),
        json!({"id": "2", "department": "Engineering"}),
        json!({"id": "3", "department": "design"}),
        json!({"id": "4", "department": "Engineering"}),
    ]);
    let refs: Vec<&ZiRecord> = rows.iter().collect();

    assert_eq!(
        ids(&sort(&refs, &ZiSortConfig::ascending("department"))),
        vec!["1", "3", "2", "4"]
    );
    assert_eq!(
        ids(&sort(&refs, &ZiSortConfig::descending("department"))),
        vec!["2", "4", "1", "3"]
    );
}

/// Tests that mixed kinds and missing values compare equal without panicking.
#[test]
fn test_sort_mixed_and_missing_values() {
    let rows = records(vec![
        json!({"id": "1", "age": 40}),
        json!({"id": "2", "age": "thirty"}),
        json!({"id": "3"}),
        json!({"id": "4", "age": 25}),
        json!({"id": "5", "age": null}),
        json!({"id": "6", "age": true}),
    ]);
    let refs: Vec<&ZiRecord> = rows.iter().collect();

    let sorted = sort(&refs, &ZiSortConfig::ascending("age"));
    assert_eq!(sorted.len(), rows.len());
    let unique: BTreeSet<String> = ids(&sorted).into_iter().collect();
    assert_eq!(unique.len(), rows.len());
}

/// Tests that direction `none` and unusable keys return the input order.
#[test]
fn test_sort_none_and_blank_key_keep_order() {
    let rows = records(vec![
        json!({"id": "b", "name": "b"}),
        json!({"id": "a", "name": "a"}),
    ]);
    let refs: Vec<&ZiRecord> = rows.iter().collect();

    assert_eq!(ids(&sort(&refs, &ZiSortConfig::new("name", ZiSortDirection::None))), vec!["b", "a"]);
    assert_eq!(ids(&sort(&refs, &ZiSortConfig::ascending(""))), vec!["b", "a"]);
}

/// Tests that sorting leaves the caller's slice untouched.
#[test]
fn test_sort_does_not_mutate_input() {
    let rows = records(vec![
        json!({"id": "b", "salary": 2}),
        json!({"id": "a", "salary": 1}),
    ]);
    let refs: Vec<&ZiRecord> = rows.iter().collect();

    let sorted = sort(&refs, &ZiSortConfig::ascending("salary"));
    assert_eq!(ids(&sorted), vec!["a", "b"]);
    assert_eq!(ids(&refs), vec!["b", "a"]);
}

/// Tests the column-click cycle.
#[test]
fn test_toggle_cycle() {
    let config = ZiSortConfig::default();
    assert!(!config.is_active());

    let config = config.toggled("salary");
    assert_eq!(config.dir, ZiSortDirection::Ascending);
    let config = config.toggled("salary");
    assert_eq!(config.dir, ZiSortDirection::Descending);
    let config = config.toggled("salary");
    assert_eq!(config.dir, ZiSortDirection::None);
    let config = config.toggled("salary");
    assert_eq!(config.dir, ZiSortDirection::Ascending);

    let config = config.toggled("salary").toggled("name");
    assert_eq!(config, ZiSortConfig::ascending("name"));
}

/// Tests the wire form of the sort configuration.
#[test]
fn test_sort_config_serde() {
    let encoded = serde_json::to_value(ZiSortConfig::descending("hire_date")).unwrap();
    assert_eq!(encoded, json!({"key": "hire_date", "dir": "descending"}));

    let decoded: ZiSortConfig = serde_json::from_value(json!({"key": "age", "dir": "none"})).unwrap();
    assert_eq!(decoded, ZiSortConfig::new("age", ZiSortDirection::None));
}

proptest! {
    /// Tests that reversing an ascending sort of distinct keys gives the descending sort.
    #[test]
    fn prop_descending_is_reversed_ascending(
        salaries in prop::collection::btree_set(-1_000_000i64..1_000_000, 0..40),
        names in prop::collection::btree_set("[a-z]{1,8}", 0..40),
    ) {
        let by_salary: Vec<ZiRecord> = salaries
            .iter()
            .rev()
            .enumerate()
            .map(|(index, salary)| json!({"id": index, "salary": salary}).into())
            .collect();
        let by_name: Vec<ZiRecord> = names
            .iter()
            .rev()
            .enumerate()
            .map(|(index, name)| json!({"id": index, "name": name}).into())
            .collect();

        for (rows, key) in [(&by_salary, "salary"), (&by_name, "name")] {
            let refs: Vec<&ZiRecord> = rows.iter().collect();
            let mut ascending = ids(&sort(&refs, &ZiSortConfig::ascending(key)));
            ascending.reverse();
            let descending = ids(&sort(&refs, &ZiSortConfig::descending(key)));
            prop_assert_eq!(ascending, descending);
        }
    }

    /// Tests that sorting permutes the input without losing records.
    #[test]
    fn prop_sort_is_a_permutation(ages in prop::collection::vec(prop::option::of(0u8..100), 0..40)) {
        let rows: Vec<ZiRecord> = ages
            .iter()
            .enumerate()
            .map(|(index, age)| json!({"id": index, "age": age}).into())
            .collect();
        let refs: Vec<&ZiRecord> = rows.iter().collect();

        let mut sorted = ids(&sort(&refs, &ZiSortConfig::ascending("age")));
        let mut original = ids(&refs);
        sorted.sort();
        original.sort();
        prop_assert_eq!(sorted, original);
    }
}

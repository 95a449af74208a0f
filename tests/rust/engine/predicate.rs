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

//! # Zi Grid Engine Tests - Predicate
//!
//! Per-type predicate evaluation of one condition against one record.
//!
//! ## Running Tests
//!
//! ```bash
//! cargo test --test predicate
//! ```

use chrono::{DateTime, Duration, TimeZone, Utc};
use serde_json::{json, Value};
use zigrid::{
    matches, ZiEvalContext, ZiFieldCatalog, ZiFilterCondition, ZiFilterOperator, ZiFilterValue,
    ZiRecord,
};

fn now() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2024, 6, 15, 12, 0, 0).unwrap()
}

fn eval(payload: Value, field: &str, operator: ZiFilterOperator, value: ZiFilterValue) -> bool {
    let catalog = ZiFieldCatalog::employees();
    let ctx = ZiEvalContext::new(&catalog, now());
    let record = ZiRecord::from(payload);
    let condition = ZiFilterCondition::new("c", field, operator, value).with_valid(true);
    matches(&record, &condition, &ctx)
}

/// Tests text operators with case-insensitive comparison.
#[test]
fn test_text_operators() {
    let record = json!({"name": "Ada Lovelace"});
    let text = ZiFilterValue::text;

    assert!(eval(record.clone(), "name", ZiFilterOperator::Contains, text("LOVE")));
    assert!(!eval(record.clone(), "name", ZiFilterOperator::Contains, text("babbage")));
    assert!(eval(record.clone(), "name", ZiFilterOperator::NotContains, text("babbage")));
    assert!(!eval(record.clone(), "name", ZiFilterOperator::NotContains, text("ada")));
    assert!(eval(record.clone(), "name", ZiFilterOperator::Equals, text("ada lovelace")));
    assert!(!eval(record.clone(), "name", ZiFilterOperator::Equals, text("ada")));
    assert!(eval(record.clone(), "name", ZiFilterOperator::StartsWith, text("aDa")));
    assert!(eval(record.clone(), "name", ZiFilterOperator::EndsWith, text("LACE")));
    assert!(!eval(record, "name", ZiFilterOperator::EndsWith, text("ada")));
}

/// Tests nested dot-path resolution and absent data.
#[test]
fn test_nested_paths_and_absent_values() {
    let record = json!({"address": {"city": "Austin", "state": "TX"}});
    assert!(eval(record.clone(), "address.city", ZiFilterOperator::Equals, ZiFilterValue::text("austin")));

    assert!(!eval(json!({}), "address.city", ZiFilterOperator::NotContains, ZiFilterValue::text("x")));
    assert!(!eval(json!({"address": null}), "address.city", ZiFilterOperator::Contains, ZiFilterValue::text("a")));
    assert!(!eval(json!({"name": null}), "name", ZiFilterOperator::NotContains, ZiFilterValue::text("a")));
}

/// Tests that conditions on fields missing from the catalog impose no constraint.
#[test]
fn test_unknown_field_passes() {
    assert!(eval(json!({}), "nickname", ZiFilterOperator::Equals, ZiFilterValue::text("ace")));
}

/// Tests that operators outside a field type's set pass.
#[test]
fn test_foreign_operators_pass() {
    assert!(eval(json!({"name": "Ada"}), "name", ZiFilterOperator::Gt, ZiFilterValue::text("z")));
    assert!(eval(json!({"salary": 10}), "salary", ZiFilterOperator::Contains, ZiFilterValue::text("9")));
    assert!(eval(json!({"department": "Design"}), "department", ZiFilterOperator::Unknown, ZiFilterValue::text("Legal")));
    assert!(eval(json!({"skills": ["Go"]}), "skills", ZiFilterOperator::Is, ZiFilterValue::list(["Rust"])));

    let inactive = json!({"is_active": false});
    assert!(eval(inactive.clone(), "is_active", ZiFilterOperator::Unknown, ZiFilterValue::Bool(true)));
    assert!(eval(inactive.clone(), "is_active", ZiFilterOperator::IsNot, ZiFilterValue::Bool(true)));
    assert!(eval(json!({}), "is_active", ZiFilterOperator::Unknown, ZiFilterValue::Bool(true)));
    assert!(!eval(inactive, "is_active", ZiFilterOperator::Is, ZiFilterValue::Bool(true)));

    let bonus = json!({"bonus": 5000});
    let range = ZiFilterValue::number_range("1000", "2000");
    assert!(eval(bonus.clone(), "bonus", ZiFilterOperator::Gt, range.clone()));
    assert!(eval(bonus.clone(), "bonus", ZiFilterOperator::Unknown, range.clone()));
    assert!(!eval(bonus, "bonus", ZiFilterOperator::Between, range));
}

/// Tests scalar number comparisons.
#[test]
fn test_number_comparisons() {
    let record = json!({"salary": 95000});
    let text = ZiFilterValue::text;

    assert!(eval(record.clone(), "salary", ZiFilterOperator::Equals, text("95000")));
    assert!(eval(record.clone(), "salary", ZiFilterOperator::NotEquals, text("1")));
    assert!(eval(record.clone(), "salary", ZiFilterOperator::Gt, text("80000")));
    assert!(!eval(record.clone(), "salary", ZiFilterOperator::Gt, text("95000")));
    assert!(eval(record.clone(), "salary", ZiFilterOperator::Gte, text("95000")));
    assert!(eval(record.clone(), "salary", ZiFilterOperator::Lt, text("100000")));
    assert!(eval(record.clone(), "salary", ZiFilterOperator::Lte, text("95000")));
    assert!(!eval(record.clone(), "salary", ZiFilterOperator::Lte, text("94999.99")));

    assert!(eval(record.clone(), "salary", ZiFilterOperator::Gt, text("a lot")));
    assert!(!eval(json!({}), "salary", ZiFilterOperator::Gt, text("1")));
    assert!(eval(json!({"salary": "95000"}), "salary", ZiFilterOperator::Gt, text("80000")));
    assert!(!eval(json!({"salary": "n/a"}), "salary", ZiFilterOperator::Gt, text("80000")));
}

/// Tests number `between` bounds, including one-sided and malformed bounds.
#[test]
fn test_number_between() {
    let range = ZiFilterValue::number_range;
    let record = json!({"salary": 95000});

    assert!(eval(record.clone(), "salary", ZiFilterOperator::Between, range("90000", "100000")));
    assert!(eval(record.clone(), "salary", ZiFilterOperator::Between, range("95000", "95000")));
    assert!(!eval(record.clone(), "salary", ZiFilterOperator::Between, range("96000", "")));
    assert!(eval(record.clone(), "salary", ZiFilterOperator::Between, range("", "95000")));
    assert!(!eval(record.clone(), "salary", ZiFilterOperator::Between, range("", "94000")));
    assert!(eval(record.clone(), "salary", ZiFilterOperator::Between, range("abc", "100000")));
    assert!(!eval(json!({}), "salary", ZiFilterOperator::Between, range("1", "")));
}

/// Tests that `between` with one bound matches `gte`/`lte`.
#[test]
fn test_one_sided_between_matches_gte_and_lte() {
    for salary in [0, 79999, 80000, 80001, 250000] {
        let record = json!({"salary": salary});
        assert_eq!(
            eval(record.clone(), "salary", ZiFilterOperator::Between, ZiFilterValue::number_range("80000", "")),
            eval(record.clone(), "salary", ZiFilterOperator::Gte, ZiFilterValue::text("80000")),
        );
        assert_eq!(
            eval(record.clone(), "salary", ZiFilterOperator::Between, ZiFilterValue::number_range("", "80000")),
            eval(record, "salary", ZiFilterOperator::Lte, ZiFilterValue::text("80000")),
        );
    }
}

/// Tests amount fields use between bounds.
#[test]
fn test_amount_bounds() {
    let range = ZiFilterValue::number_range;
    assert!(eval(json!({"bonus": 1500.5}), "bonus", ZiFilterOperator::Between, range("1000", "2000")));
    assert!(!eval(json!({"bonus": 2500}), "bonus", ZiFilterOperator::Between, range("1000", "2000")));
    assert!(!eval(json!({"bonus": null}), "bonus", ZiFilterOperator::Between, range("1000", "")));
}

/// Tests `last_30_days` at the window edges.
#[test]
fn test_last_30_days_window() {
    let window = ZiFilterValue::date_range("", "");
    let at = |instant: DateTime<Utc>| json!({"hire_date": instant.to_rfc3339()});

    assert!(eval(at(now()), "hire_date", ZiFilterOperator::Last30Days, window.clone()));
    assert!(eval(at(now() - Duration::days(30)), "hire_date", ZiFilterOperator::Last30Days, window.clone()));
    assert!(!eval(at(now() - Duration::days(31)), "hire_date", ZiFilterOperator::Last30Days, window.clone()));
    assert!(eval(at(now() + Duration::days(3)), "hire_date", ZiFilterOperator::Last30Days, window));
}

/// Tests that the window follows the injected clock.
#[test]
fn test_last_30_days_follows_context_clock() {
    let catalog = ZiFieldCatalog::employees();
    let record = ZiRecord::from(json!({"hire_date": "2024-06-01"}));
    let condition = ZiFilterCondition::new(
        "c",
        "hire_date",
        ZiFilterOperator::Last30Days,
        ZiFilterValue::date_range("", ""),
    );

    let ctx = ZiEvalContext::new(&catalog, now());
    assert!(matches(&record, &condition, &ctx));
    let later = ctx.with_now(now() + Duration::days(60));
    assert!(!matches(&record, &condition, &later));
}

/// Tests `before`/`after` thresholds and empty or malformed thresholds.
#[test]
fn test_before_and_after() {
    let record = json!({"hire_date": "2021-03-15"});
    let from = |date: &str| ZiFilterValue::date_range(date, "");

    assert!(eval(record.clone(), "hire_date", ZiFilterOperator::Before, from("2022-01-01")));
    assert!(!eval(record.clone(), "hire_date", ZiFilterOperator::Before, from("2021-03-15")));
    assert!(eval(record.clone(), "hire_date", ZiFilterOperator::After, from("2020-12-31")));
    assert!(!eval(record.clone(), "hire_date", ZiFilterOperator::After, from("2022-01-01")));

    assert!(eval(record.clone(), "hire_date", ZiFilterOperator::Before, from("")));
    assert!(eval(record.clone(), "hire_date", ZiFilterOperator::After, from("someday")));
    assert!(eval(record, "hire_date", ZiFilterOperator::Before, ZiFilterValue::date_range("", "2000-01-01")));
}

/// Tests inclusive date ranges with partial and malformed bounds.
#[test]
fn test_date_between() {
    let record = json!({"last_review": "2024-02-10"});
    let range = ZiFilterValue::date_range;

    assert!(eval(record.clone(), "last_review", ZiFilterOperator::Between, range("2024-02-01", "2024-02-29")));
    assert!(eval(record.clone(), "last_review", ZiFilterOperator::Between, range("2024-02-10", "2024-02-10")));
    assert!(!eval(record.clone(), "last_review", ZiFilterOperator::Between, range("2024-02-11", "")));
    assert!(eval(record.clone(), "last_review", ZiFilterOperator::Between, range("", "2024-02-10")));
    assert!(eval(record.clone(), "last_review", ZiFilterOperator::Between, range("garbage", "2024-03-01")));
    assert!(!eval(record, "last_review", ZiFilterOperator::Between, range("garbage", "2024-01-01")));
}

/// Tests that unparseable record dates never match.
#[test]
fn test_unparseable_record_date_never_matches() {
    let record = json!({"hire_date": "last spring"});
    assert!(!eval(record.clone(), "hire_date", ZiFilterOperator::Last30Days, ZiFilterValue::date_range("", "")));
    assert!(!eval(record.clone(), "hire_date", ZiFilterOperator::Before, ZiFilterValue::date_range("", "")));
    assert!(!eval(record, "hire_date", ZiFilterOperator::Between, ZiFilterValue::date_range("", "")));
    assert!(!eval(json!({}), "hire_date", ZiFilterOperator::After, ZiFilterValue::date_range("", "")));
}

/// Tests single-select `is`/`is_not`.
#[test]
fn test_single_select() {
    let record = json!({"department": "Engineering", "address": {"country": "Canada"}});
    assert!(eval(record.clone(), "department", ZiFilterOperator::Is, ZiFilterValue::text("engineering")));
    assert!(!eval(record.clone(), "department", ZiFilterOperator::Is, ZiFilterValue::text("Design")));
    assert!(eval(record.clone(), "department", ZiFilterOperator::IsNot, ZiFilterValue::text("Design")));
    assert!(!eval(record.clone(), "department", ZiFilterOperator::IsNot, ZiFilterValue::text("ENGINEERING")));
    assert!(eval(record, "address.country", ZiFilterOperator::Is, ZiFilterValue::text("canada")));
    assert!(!eval(json!({}), "department", ZiFilterOperator::IsNot, ZiFilterValue::text("Design")));
}

/// Tests multi-select set operators.
#[test]
fn test_multi_select() {
    let record = json!({"skills": ["Rust", "SQL", "Docker"]});
    let list = |values: &[&str]| ZiFilterValue::list(values.iter().copied());

    assert!(eval(record.clone(), "skills", ZiFilterOperator::In, list(&["go", "rust"])));
    assert!(!eval(record.clone(), "skills", ZiFilterOperator::In, list(&["Go", "Java"])));
    assert!(eval(record.clone(), "skills", ZiFilterOperator::NotIn, list(&["Go", "Java"])));
    assert!(!eval(record.clone(), "skills", ZiFilterOperator::NotIn, list(&["Java", "sql"])));
    assert!(eval(record.clone(), "skills", ZiFilterOperator::ContainsAll, list(&["rust", "docker"])));
    assert!(!eval(record.clone(), "skills", ZiFilterOperator::ContainsAll, list(&["rust", "go"])));

    for operator in [ZiFilterOperator::In, ZiFilterOperator::NotIn, ZiFilterOperator::ContainsAll] {
        assert!(eval(record.clone(), "skills", operator, list(&[])));
    }
    assert!(!eval(json!({}), "skills", ZiFilterOperator::NotIn, list(&["Go"])));
}

/// Tests boolean coercion of record and condition values.
#[test]
fn test_boolean_coercion() {
    let is = ZiFilterOperator::Is;
    assert!(eval(json!({"is_active": true}), "is_active", is, ZiFilterValue::Bool(true)));
    assert!(eval(json!({"is_active": true}), "is_active", is, ZiFilterValue::text("true")));
    assert!(!eval(json!({"is_active": true}), "is_active", is, ZiFilterValue::text("yes")));
    assert!(eval(json!({"is_active": false}), "is_active", is, ZiFilterValue::Bool(false)));

    assert!(eval(json!({}), "is_active", is, ZiFilterValue::Bool(false)));
    assert!(!eval(json!({}), "is_active", is, ZiFilterValue::Bool(true)));
    assert!(eval(json!({"is_active": null}), "is_active", is, ZiFilterValue::text("false")));
    assert!(eval(json!({"is_active": 1}), "is_active", is, ZiFilterValue::Bool(true)));
}

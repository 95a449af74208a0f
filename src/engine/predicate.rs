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

//! # Predicate Evaluator
//!
//! Decides whether one record satisfies one condition. The rules, per field
//! type:
//!
//! - A field key missing from the catalog imposes no constraint (`true`).
//! - A missing or `null` record value never matches, except for boolean
//!   fields where it reads as `false`.
//! - A comparison value that cannot be parsed imposes no constraint on that
//!   side.
//! - An operator outside the field type's set passes. Date fields are the
//!   exception: anything other than `before`, `after` and `last_30_days` is
//!   evaluated as `between`.
//!
//! String comparisons are case-insensitive throughout.

use chrono::{DateTime, Duration, NaiveDate, NaiveDateTime, Utc};
use serde_json::Value;

use crate::catalog::ZiFieldType;
use crate::condition::{ZiDateRange, ZiFilterCondition, ZiFilterValue, ZiNumberRange};
use crate::context::ZiEvalContext;
use crate::engine::validate::parse_number;
use crate::operator::{supports, ZiFilterOperator};
use crate::record::ZiRecord;

/// Width of the `last_30_days` window.
pub const RECENT_WINDOW_DAYS: i64 = 30;

/// Returns `true` when `record` satisfies `condition`.
pub fn matches(record: &ZiRecord, condition: &ZiFilterCondition, ctx: &ZiEvalContext<'_>) -> bool {
    let Some(field_type) = ctx.catalog().field_type(&condition.field_key) else {
        return true;
    };
    if field_type != ZiFieldType::Date && !supports(field_type, condition.operator) {
        return true;
    }
    let resolved = record.get(&condition.field_key);

    if field_type == ZiFieldType::Boolean {
        return match_boolean(resolved, condition);
    }
    let Some(actual) = resolved else {
        return false;
    };

    match field_type {
        ZiFieldType::Text => match_text(actual, condition),
        ZiFieldType::Number => match_number(actual, condition),
        ZiFieldType::Date => match_date(actual, condition, ctx.now()),
        ZiFieldType::Amount => match as_number(actual) {
            Some(number) => within_number_range(number, condition.value.as_number_range()),
            None => false,
        },
        ZiFieldType::SingleSelect => match_single_select(actual, condition),
        ZiFieldType::MultiSelect => match_multi_select(actual, condition),
        ZiFieldType::Boolean => match_boolean(Some(actual), condition),
    }
}

fn match_text(actual: &Value, condition: &ZiFilterCondition) -> bool {
    let Some(haystack) = as_text(actual) else {
        return false;
    };
    let Some(needle) = condition.value.as_text() else {
        return true;
    };
    let haystack = haystack.to_lowercase();
    let needle = needle.to_lowercase();

    match condition.operator {
        ZiFilterOperator::Contains => haystack.contains(&needle),
        ZiFilterOperator::NotContains => !haystack.contains(&needle),
        ZiFilterOperator::Equals => haystack == needle,
        ZiFilterOperator::StartsWith => haystack.starts_with(&needle),
        ZiFilterOperator::EndsWith => haystack.ends_with(&needle),
        _ => true,
    }
}

fn match_number(actual: &Value, condition: &ZiFilterCondition) -> bool {
    let Some(number) = as_number(actual) else {
        return false;
    };
    if condition.operator == ZiFilterOperator::Between {
        return within_number_range(number, condition.value.as_number_range());
    }
    let Some(target) = condition.value.as_text().and_then(parse_number) else {
        return true;
    };

    match condition.operator {
        ZiFilterOperator::Equals => number == target,
        ZiFilterOperator::NotEquals => number != target,
        ZiFilterOperator::Gt => number > target,
        ZiFilterOperator::Lt => number < target,
        ZiFilterOperator::Gte => number >= target,
        ZiFilterOperator::Lte => number <= target,
        _ => true,
    }
}

/// Inclusive bounds check; an absent or unparseable bound is open.
fn within_number_range(number: f64, range: Option<&ZiNumberRange>) -> bool {
    let Some(range) = range else {
        return true;
    };
    if let Some(min) = parse_number(&range.min) {
        if number < min {
            return false;
        }
    }
    if let Some(max) = parse_number(&range.max) {
        if number > max {
            return false;
        }
    }
    true
}

fn match_date(actual: &Value, condition: &ZiFilterCondition, now: DateTime<Utc>) -> bool {
    let Some(date) = as_text(actual).as_deref().and_then(parse_date) else {
        return false;
    };
    let range = condition.value.as_date_range();

    match condition.operator {
        ZiFilterOperator::Last30Days => date >= now - Duration::days(RECENT_WINDOW_DAYS),
        ZiFilterOperator::Before => match threshold(range) {
            Some(threshold) => date < threshold,
            None => true,
        },
        ZiFilterOperator::After => match threshold(range) {
            Some(threshold) => date > threshold,
            None => true,
        },
        _ => within_date_range(date, range),
    }
}

fn threshold(range: Option<&ZiDateRange>) -> Option<DateTime<Utc>> {
    range.and_then(|range| parse_date(&range.from))
}

fn within_date_range(date: DateTime<Utc>, range: Option<&ZiDateRange>) -> bool {
    let Some(range) = range else {
        return true;
    };
    if let Some(from) = parse_date(&range.from) {
        if date < from {
            return false;
        }
    }
    if let Some(to) = parse_date(&range.to) {
        if date > to {
            return false;
        }
    }
    true
}

fn match_single_select(actual: &Value, condition: &ZiFilterCondition) -> bool {
    let Some(actual) = as_text(actual) else {
        return false;
    };
    let Some(selected) = condition.value.as_text() else {
        return true;
    };
    let same = actual.to_lowercase() == selected.to_lowercase();

    match condition.operator {
        ZiFilterOperator::Is => same,
        ZiFilterOperator::IsNot => !same,
        _ => true,
    }
}

fn match_multi_select(actual: &Value, condition: &ZiFilterCondition) -> bool {
    let Value::Array(items) = actual else {
        return false;
    };
    let selected = match condition.value.as_list() {
        Some(selected) if !selected.is_empty() => selected,
        _ => return true,
    };
    let present: Vec<String> = items
        .iter()
        .filter_map(Value::as_str)
        .map(str::to_lowercase)
        .collect();
    let mut hits = selected
        .iter()
        .map(|value| present.contains(&value.to_lowercase()));

    match condition.operator {
        ZiFilterOperator::In => hits.any(|hit| hit),
        ZiFilterOperator::NotIn => !hits.any(|hit| hit),
        ZiFilterOperator::ContainsAll => hits.all(|hit| hit),
        _ => true,
    }
}

fn match_boolean(actual: Option<&Value>, condition: &ZiFilterCondition) -> bool {
    truthy(actual) == condition.value.is_true()
}

fn truthy(value: Option<&Value>) -> bool {
    match value {
        None | Some(Value::Null) => false,
        Some(Value::Bool(flag)) => *flag,
        Some(Value::Number(number)) => number.as_f64().is_some_and(|n| n != 0.0 && !n.is_nan()),
        Some(Value::String(text)) => !text.is_empty(),
        Some(Value::Array(_)) | Some(Value::Object(_)) => true,
    }
}

/// Scalar record values rendered as text; arrays and objects are not text.
fn as_text(value: &Value) -> Option<String> {
    match value {
        Value::String(text) => Some(text.clone()),
        Value::Number(number) => Some(number.to_string()),
        Value::Bool(flag) => Some(flag.to_string()),
        _ => None,
    }
}

/// Numbers, or strings holding a finite number.
fn as_number(value: &Value) -> Option<f64> {
    match value {
        Value::Number(number) => number.as_f64(),
        Value::String(text) => parse_number(text),
        _ => None,
    }
}

/// Parses RFC 3339 timestamps, naive `YYYY-MM-DDTHH:MM:SS` timestamps and
/// plain `YYYY-MM-DD` dates. Naive values are read as UTC.
pub fn parse_date(input: &str) -> Option<DateTime<Utc>> {
    let input = input.trim();
    if input.is_empty() {
        return None;
    }
    if let Ok(parsed) = DateTime::parse_from_rfc3339(input) {
        return Some(parsed.with_timezone(&Utc));
    }
    for format in ["%Y-%m-%dT%H:%M:%S%.f", "%Y-%m-%d %H:%M:%S%.f", "%Y-%m-%dT%H:%M"] {
        if let Ok(parsed) = NaiveDateTime::parse_from_str(input, format) {
            return Some(parsed.and_utc());
        }
    }
    NaiveDate::parse_from_str(input, "%Y-%m-%d")
        .ok()
        .and_then(|date| date.and_hms_opt(0, 0, 0))
        .map(|datetime| datetime.and_utc())
}

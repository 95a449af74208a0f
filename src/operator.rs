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

//! # Zi Grid Operator Registry
//!
//! Operators are string tags scoped per [`ZiFieldType`]. The registry answers
//! three questions for a field type: which operators are legal (in display
//! order), which one a new condition starts with, and what an empty value
//! looks like.
//!
//! | Type | Operators |
//! |---|---|
//! | text | contains, equals, starts_with, ends_with, not_contains |
//! | number | equals, not_equals, gt, lt, gte, lte, between |
//! | date | between, before, after, last_30_days |
//! | amount | between |
//! | single-select | is, is_not |
//! | multi-select | in, not_in, contains_all |
//! | boolean | is |

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::catalog::ZiFieldType;
use crate::condition::ZiFilterValue;

/// Every operator tag known to the engine.
///
/// Tags that are not recognised when reading persisted conditions map to
/// [`ZiFilterOperator::Unknown`], which the evaluator treats as passing.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ZiFilterOperator {
    Contains,
    Equals,
    StartsWith,
    EndsWith,
    NotContains,
    NotEquals,
    Gt,
    Lt,
    Gte,
    Lte,
    Between,
    Before,
    After,
    #[serde(rename = "last_30_days")]
    Last30Days,
    Is,
    IsNot,
    In,
    NotIn,
    ContainsAll,
    #[serde(other)]
    Unknown,
}

const TEXT_OPERATORS: &[ZiFilterOperator] = &[
    ZiFilterOperator::Contains,
    ZiFilterOperator::Equals,
    ZiFilterOperator::StartsWith,
    ZiFilterOperator::EndsWith,
    ZiFilterOperator::NotContains,
];

const NUMBER_OPERATORS: &[ZiFilterOperator] = &[
    ZiFilterOperator::Equals,
    ZiFilterOperator::NotEquals,
    ZiFilterOperator::Gt,
    ZiFilterOperator::Lt,
    ZiFilterOperator::Gte,
    ZiFilterOperator::Lte,
    ZiFilterOperator::Between,
];

const DATE_OPERATORS: &[ZiFilterOperator] = &[
    ZiFilterOperator::Between,
    ZiFilterOperator::Before,
    ZiFilterOperator::After,
    ZiFilterOperator::Last30Days,
];

const AMOUNT_OPERATORS: &[ZiFilterOperator] = &[ZiFilterOperator::Between];

const SINGLE_SELECT_OPERATORS: &[ZiFilterOperator] =
    &[ZiFilterOperator::Is, ZiFilterOperator::IsNot];

const MULTI_SELECT_OPERATORS: &[ZiFilterOperator] = &[
    ZiFilterOperator::In,
    ZiFilterOperator::NotIn,
    ZiFilterOperator::ContainsAll,
];

const BOOLEAN_OPERATORS: &[ZiFilterOperator] = &[ZiFilterOperator::Is];

impl ZiFilterOperator {
    pub fn as_str(&self) -> &'static str {
        match self {
            ZiFilterOperator::Contains => "contains",
            ZiFilterOperator::Equals => "equals",
            ZiFilterOperator::StartsWith => "starts_with",
            ZiFilterOperator::EndsWith => "ends_with",
            ZiFilterOperator::NotContains => "not_contains",
            ZiFilterOperator::NotEquals => "not_equals",
            ZiFilterOperator::Gt => "gt",
            ZiFilterOperator::Lt => "lt",
            ZiFilterOperator::Gte => "gte",
            ZiFilterOperator::Lte => "lte",
            ZiFilterOperator::Between => "between",
            ZiFilterOperator::Before => "before",
            ZiFilterOperator::After => "after",
            ZiFilterOperator::Last30Days => "last_30_days",
            ZiFilterOperator::Is => "is",
            ZiFilterOperator::IsNot => "is_not",
            ZiFilterOperator::In => "in",
            ZiFilterOperator::NotIn => "not_in",
            ZiFilterOperator::ContainsAll => "contains_all",
            ZiFilterOperator::Unknown => "unknown",
        }
    }
}

impl fmt::Display for ZiFilterOperator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Legal operators for a field type, in display order.
pub fn operators_for(field_type: ZiFieldType) -> &'static [ZiFilterOperator] {
    match field_type {
        ZiFieldType::Text => TEXT_OPERATORS,
        ZiFieldType::Number => NUMBER_OPERATORS,
        ZiFieldType::Date => DATE_OPERATORS,
        ZiFieldType::Amount => AMOUNT_OPERATORS,
        ZiFieldType::SingleSelect => SINGLE_SELECT_OPERATORS,
        ZiFieldType::MultiSelect => MULTI_SELECT_OPERATORS,
        ZiFieldType::Boolean => BOOLEAN_OPERATORS,
    }
}

/// Whether `op` belongs to the operator set of `field_type`.
pub fn supports(field_type: ZiFieldType, op: ZiFilterOperator) -> bool {
    operators_for(field_type).contains(&op)
}

/// Operator a new condition on this field type starts with.
pub fn default_operator(field_type: ZiFieldType) -> ZiFilterOperator {
    match field_type {
        ZiFieldType::Text => ZiFilterOperator::Contains,
        ZiFieldType::Number => ZiFilterOperator::Equals,
        ZiFieldType::Date => ZiFilterOperator::Between,
        ZiFieldType::Amount => ZiFilterOperator::Between,
        ZiFieldType::SingleSelect => ZiFilterOperator::Is,
        ZiFieldType::MultiSelect => ZiFilterOperator::In,
        ZiFieldType::Boolean => ZiFilterOperator::Is,
    }
}

/// Fresh empty value for a field type under its default operator.
pub fn default_value(field_type: ZiFieldType) -> ZiFilterValue {
    default_value_for(field_type, default_operator(field_type))
}

/// Fresh empty value for a field type under a specific operator.
///
/// Only number fields change shape with the operator: `between` takes a
/// numeric range, every other comparison a single string.
pub fn default_value_for(field_type: ZiFieldType, op: ZiFilterOperator) -> ZiFilterValue {
    match field_type {
        ZiFieldType::Text | ZiFieldType::SingleSelect => ZiFilterValue::Text(String::new()),
        ZiFieldType::Number if op == ZiFilterOperator::Between => ZiFilterValue::number_range("", ""),
        ZiFieldType::Number => ZiFilterValue::Text(String::new()),
        ZiFieldType::Date => ZiFilterValue::date_range("", ""),
        ZiFieldType::Amount => ZiFilterValue::number_range("", ""),
        ZiFieldType::MultiSelect => ZiFilterValue::List(Vec::new()),
        ZiFieldType::Boolean => ZiFilterValue::Bool(true),
    }
}

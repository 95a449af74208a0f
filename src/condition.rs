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

//! # Zi Grid Condition Model
//!
//! A [`ZiFilterCondition`] is one field/operator/value row composed by the
//! user. Its value is a [`ZiFilterValue`] whose shape depends on the field
//! type. Range bounds are kept as the strings the user typed so that an
//! empty input and an unparseable input can both be told apart from `0`.
//!
//! Conditions serialize with camelCase keys, which is the layout used for
//! persisted filter state:
//!
//! ```json
//! {"id": "filter-1", "fieldKey": "salary", "operator": "gt", "value": "80000", "isValid": true}
//! ```

use serde::{Deserialize, Serialize};

use crate::operator::ZiFilterOperator;

/// `{min, max}` bounds used by number `between` and amount fields.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ZiNumberRange {
    #[serde(default)]
    pub min: String,
    #[serde(default)]
    pub max: String,
}

/// `{from, to}` bounds used by date fields.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ZiDateRange {
    #[serde(default)]
    pub from: String,
    #[serde(default)]
    pub to: String,
}

/// Value carried by a condition.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ZiFilterValue {
    Bool(bool),
    Text(String),
    List(Vec<String>),
    NumberRange(ZiNumberRange),
    DateRange(ZiDateRange),
}

impl ZiFilterValue {
    pub fn text(value: impl Into<String>) -> Self {
        ZiFilterValue::Text(value.into())
    }

    pub fn list<I, S>(values: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        ZiFilterValue::List(values.into_iter().map(Into::into).collect())
    }

    pub fn number_range(min: impl Into<String>, max: impl Into<String>) -> Self {
        ZiFilterValue::NumberRange(ZiNumberRange {
            min: min.into(),
            max: max.into(),
        })
    }

    pub fn date_range(from: impl Into<String>, to: impl Into<String>) -> Self {
        ZiFilterValue::DateRange(ZiDateRange {
            from: from.into(),
            to: to.into(),
        })
    }

    pub fn as_text(&self) -> Option<&str> {
        match self {
            ZiFilterValue::Text(value) => Some(value),
            _ => None,
        }
    }

    pub fn as_list(&self) -> Option<&[String]> {
        match self {
            ZiFilterValue::List(values) => Some(values),
            _ => None,
        }
    }

    pub fn as_number_range(&self) -> Option<&ZiNumberRange> {
        match self {
            ZiFilterValue::NumberRange(range) => Some(range),
            _ => None,
        }
    }

    pub fn as_date_range(&self) -> Option<&ZiDateRange> {
        match self {
            ZiFilterValue::DateRange(range) => Some(range),
            _ => None,
        }
    }

    /// Boolean reading of the value: `true` or the string `"true"`.
    pub fn is_true(&self) -> bool {
        match self {
            ZiFilterValue::Bool(value) => *value,
            ZiFilterValue::Text(value) => value == "true",
            _ => false,
        }
    }
}

/// One user-composed filter row.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ZiFilterCondition {
    pub id: String,
    pub field_key: String,
    pub operator: ZiFilterOperator,
    pub value: ZiFilterValue,
    #[serde(default)]
    pub is_valid: bool,
}

impl ZiFilterCondition {
    /// Creates a condition with `is_valid` unset.
    pub fn new(
        id: impl Into<String>,
        field_key: impl Into<String>,
        operator: ZiFilterOperator,
        value: ZiFilterValue,
    ) -> Self {
        Self {
            id: id.into(),
            field_key: field_key.into(),
            operator,
            value,
            is_valid: false,
        }
    }

    /// Sets the validity flag.
    pub fn with_valid(mut self, is_valid: bool) -> Self {
        self.is_valid = is_valid;
        self
    }
}

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

//! Decides whether a condition carries enough information to be applied.

use crate::catalog::{ZiFieldCatalog, ZiFieldType};
use crate::condition::{ZiFilterCondition, ZiFilterValue};
use crate::operator::ZiFilterOperator;

/// Returns `true` when `condition` may take part in filtering.
///
/// Conditions on fields missing from `catalog` are never valid.
pub fn is_valid(condition: &ZiFilterCondition, catalog: &ZiFieldCatalog) -> bool {
    let Some(field_type) = catalog.field_type(&condition.field_key) else {
        return false;
    };
    let value = &condition.value;

    match field_type {
        ZiFieldType::Text => value.as_text().is_some_and(|text| !text.trim().is_empty()),
        ZiFieldType::Number if condition.operator == ZiFilterOperator::Between => {
            has_numeric_bound(value)
        }
        ZiFieldType::Number => value
            .as_text()
            .and_then(parse_number)
            .is_some(),
        ZiFieldType::Date => match condition.operator {
            ZiFilterOperator::Last30Days => true,
            ZiFilterOperator::Before | ZiFilterOperator::After => value
                .as_date_range()
                .is_some_and(|range| !range.from.trim().is_empty()),
            _ => value.as_date_range().is_some_and(|range| {
                !range.from.trim().is_empty() || !range.to.trim().is_empty()
            }),
        },
        ZiFieldType::Amount => has_numeric_bound(value),
        ZiFieldType::SingleSelect => value.as_text().is_some_and(|text| !text.is_empty()),
        ZiFieldType::MultiSelect => value.as_list().is_some_and(|values| !values.is_empty()),
        ZiFieldType::Boolean => true,
    }
}

fn has_numeric_bound(value: &ZiFilterValue) -> bool {
    value
        .as_number_range()
        .is_some_and(|range| !range.min.trim().is_empty() || !range.max.trim().is_empty())
}

/// Parses user input as a finite number; blank input is `None`.
pub(crate) fn parse_number(input: &str) -> Option<f64> {
    let trimmed = input.trim();
    if trimmed.is_empty() {
        return None;
    }
    trimmed.parse::<f64>().ok().filter(|number| number.is_finite())
}

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

//! # Sort Comparator
//!
//! Orders a filtered view by one column. Sorting is stable and returns a new
//! sequence; the caller's slice is left untouched. Clicking a column cycles
//! its direction through ascending, descending and none.

use std::cmp::Ordering;
use std::fmt;

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::record::{ZiFieldPath, ZiRecord};

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ZiSortDirection {
    Ascending,
    Descending,
    #[default]
    None,
}

impl fmt::Display for ZiSortDirection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            ZiSortDirection::Ascending => "ascending",
            ZiSortDirection::Descending => "descending",
            ZiSortDirection::None => "none",
        };
        f.write_str(label)
    }
}

/// Active sort column and direction.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ZiSortConfig {
    pub key: String,
    pub dir: ZiSortDirection,
}

impl ZiSortConfig {
    pub fn new(key: impl Into<String>, dir: ZiSortDirection) -> Self {
        Self {
            key: key.into(),
            dir,
        }
    }

    pub fn ascending(key: impl Into<String>) -> Self {
        Self::new(key, ZiSortDirection::Ascending)
    }

    pub fn descending(key: impl Into<String>) -> Self {
        Self::new(key, ZiSortDirection::Descending)
    }

    /// Configuration after a click on column `key`.
    ///
    /// The active column steps ascending → descending → none → ascending;
    /// any other column starts over at ascending.
    pub fn toggled(&self, key: &str) -> Self {
        if self.key != key {
            return Self::ascending(key);
        }
        let dir = match self.dir {
            ZiSortDirection::Ascending => ZiSortDirection::Descending,
            ZiSortDirection::Descending => ZiSortDirection::None,
            ZiSortDirection::None => ZiSortDirection::Ascending,
        };
        Self::new(key, dir)
    }

    pub fn is_active(&self) -> bool {
        self.dir != ZiSortDirection::None
    }
}

/// Returns `records` ordered by `config`.
pub fn sort<'r>(records: &[&'r ZiRecord], config: &ZiSortConfig) -> Vec<&'r ZiRecord> {
    if !config.is_active() {
        return records.to_vec();
    }

    let Ok(path) = ZiFieldPath::parse(&config.key) else {
        return records.to_vec();
    };

    log::debug!("sorting {} records by '{}' {}", records.len(), config.key, config.dir);

    merge_sort(records, &|a: &&'r ZiRecord, b: &&'r ZiRecord| {
        let ordering = compare_values(path.resolve(a), path.resolve(b));
        match config.dir {
            ZiSortDirection::Descending => ordering.reverse(),
            _ => ordering,
        }
    })
}

/// Stable top-down merge sort.
///
/// `compare_values` is not a total order once kinds are mixed, which
/// `slice::sort_by` is allowed to panic on.
fn merge_sort<T, F>(items: &[T], compare: &F) -> Vec<T>
where
    T: Copy,
    F: Fn(&T, &T) -> Ordering,
{
    if items.len() <= 1 {
        return items.to_vec();
    }
    let (left, right) = items.split_at(items.len() / 2);
    let left = merge_sort(left, compare);
    let right = merge_sort(right, compare);

    let mut merged = Vec::with_capacity(items.len());
    let (mut i, mut j) = (0, 0);
    while i < left.len() && j < right.len() {
        if compare(&right[j], &left[i]) == Ordering::Less {
            merged.push(right[j]);
            j += 1;
        } else {
            merged.push(left[i]);
            i += 1;
        }
    }
    merged.extend_from_slice(&left[i..]);
    merged.extend_from_slice(&right[j..]);
    merged
}

/// Compares two resolved values of the same kind.
///
/// Strings compare case-insensitively, numbers numerically and booleans as
/// `0`/`1`. Mixed kinds and missing values compare equal.
pub fn compare_values(a: Option<&Value>, b: Option<&Value>) -> Ordering {
    match (a, b) {
        (Some(Value::String(a)), Some(Value::String(b))) => a.to_lowercase().cmp(&b.to_lowercase()),
        (Some(Value::Number(a)), Some(Value::Number(b))) => match (a.as_f64(), b.as_f64()) {
            (Some(a), Some(b)) => a.partial_cmp(&b).unwrap_or(Ordering::Equal),
            _ => Ordering::Equal,
        },
        (Some(Value::Bool(a)), Some(Value::Bool(b))) => a.cmp(b),
        _ => Ordering::Equal,
    }
}

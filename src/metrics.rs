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

use serde::Serialize;
use serde_json::Value;

/// Counts describing one filter pass, e.g. for a "12 of 240 rows" badge.
#[derive(Clone, Copy, Debug, Serialize, Default, PartialEq, Eq)]
pub struct ZiFilterStats {
    pub total_records: usize,
    pub matched_records: usize,
    pub active_conditions: usize,
    pub field_groups: usize,
}

impl ZiFilterStats {
    /// Records removed by the pass.
    pub fn hidden_records(&self) -> usize {
        self.total_records.saturating_sub(self.matched_records)
    }

    /// Share of records kept, `1.0` for an empty dataset.
    pub fn match_ratio(&self) -> f64 {
        if self.total_records == 0 {
            return 1.0;
        }
        self.matched_records as f64 / self.total_records as f64
    }

    pub fn as_json(&self) -> Value {
        serde_json::to_value(self).unwrap_or(Value::Null)
    }
}

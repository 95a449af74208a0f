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

//! # Combination Engine
//!
//! Valid conditions are grouped by field key. A record is kept when every
//! group has at least one matching condition: conditions on the same field
//! are alternatives, conditions on different fields are all required.
//!
//! ```text
//! department is Engineering  ┐ OR
//! department is Design       ┘      AND  salary gt 80000
//! ```

use crate::condition::ZiFilterCondition;
use crate::context::ZiEvalContext;
use crate::engine::predicate::matches;
use crate::metrics::ZiFilterStats;
use crate::record::ZiRecord;

/// Valid conditions sharing one field key, in first-seen order.
#[derive(Debug)]
pub struct ZiConditionGroup<'c> {
    pub field_key: &'c str,
    pub conditions: Vec<&'c ZiFilterCondition>,
}

impl ZiConditionGroup<'_> {
    /// `true` when any condition of the group accepts the record.
    pub fn matches(&self, record: &ZiRecord, ctx: &ZiEvalContext<'_>) -> bool {
        self.conditions
            .iter()
            .any(|condition| matches(record, condition, ctx))
    }
}

/// Partitions the valid conditions by field key.
pub fn group_conditions(conditions: &[ZiFilterCondition]) -> Vec<ZiConditionGroup<'_>> {
    let mut groups: Vec<ZiConditionGroup<'_>> = Vec::new();
    for condition in conditions.iter().filter(|condition| condition.is_valid) {
        match groups
            .iter()
            .position(|group| group.field_key == condition.field_key)
        {
            Some(index) => groups[index].conditions.push(condition),
            None => groups.push(ZiConditionGroup {
                field_key: &condition.field_key,
                conditions: vec![condition],
            }),
        }
    }
    groups
}

/// Filters `records` by the valid `conditions`, preserving input order.
pub fn apply<'r>(
    records: &'r [ZiRecord],
    conditions: &[ZiFilterCondition],
    ctx: &ZiEvalContext<'_>,
) -> Vec<&'r ZiRecord> {
    apply_with_stats(records, conditions, ctx).0
}

/// Same as [`apply`], also reporting counts for the pass.
pub fn apply_with_stats<'r>(
    records: &'r [ZiRecord],
    conditions: &[ZiFilterCondition],
    ctx: &ZiEvalContext<'_>,
) -> (Vec<&'r ZiRecord>, ZiFilterStats) {
    let groups = group_conditions(conditions);
    let active = groups.iter().map(|group| group.conditions.len()).sum();

    let retained: Vec<&ZiRecord> = if groups.is_empty() {
        records.iter().collect()
    } else {
        records
            .iter()
            .filter(|record| groups.iter().all(|group| group.matches(record, ctx)))
            .collect()
    };

    log::debug!(
        "filter pass kept {}/{} records ({} active conditions in {} field groups)",
        retained.len(),
        records.len(),
        active,
        groups.len()
    );

    let stats = ZiFilterStats {
        total_records: records.len(),
        matched_records: retained.len(),
        active_conditions: active,
        field_groups: groups.len(),
    };
    (retained, stats)
}

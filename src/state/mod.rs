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

//! # Filter State Module
//!
//! [`ZiFilterState`] owns the condition collection and the active sort
//! column. Every mutation re-validates the touched condition against the
//! catalog, so the `is_valid` flags the engine reads are always current.
//!
//! ## Persistence
//!
//! State is saved and restored through a [`ZiConditionStore`]. Restoring
//! never fails: corrupted or unreadable state degrades to an empty
//! collection, and every restored condition is re-validated because the
//! catalog may have changed since it was saved. Save failures are logged and
//! otherwise ignored.
//!
//! ## Threading
//!
//! Mutators take `&mut self`. Hosts that share one state across threads wrap
//! it in their own `RwLock` and evaluate views under a read guard.

pub mod store;

use std::mem;

use chrono::{DateTime, Utc};

use crate::catalog::ZiFieldCatalog;
use crate::condition::{ZiFilterCondition, ZiFilterValue};
use crate::context::ZiEvalContext;
use crate::engine::combine::apply_with_stats;
use crate::engine::sort::{sort, ZiSortConfig};
use crate::engine::validate::is_valid;
use crate::errors::{Result, ZiError};
use crate::metrics::ZiFilterStats;
use crate::operator::{default_operator, default_value, default_value_for, ZiFilterOperator};
use crate::record::ZiRecord;

pub use store::{ZiConditionStore, ZiFileStore, ZiMemoryStore, DEFAULT_STORAGE_KEY};

const ID_PREFIX: &str = "filter-";

/// Owner of the condition collection and sort configuration.
#[derive(Clone, Debug)]
pub struct ZiFilterState {
    catalog: ZiFieldCatalog,
    conditions: Vec<ZiFilterCondition>,
    sort: ZiSortConfig,
    next_id: u64,
}

impl ZiFilterState {
    pub fn new(catalog: ZiFieldCatalog) -> Self {
        Self {
            catalog,
            conditions: Vec::new(),
            sort: ZiSortConfig::default(),
            next_id: 1,
        }
    }

    /// Rebuilds state from `store`, re-validating every restored condition.
    pub fn restore(catalog: ZiFieldCatalog, store: &dyn ZiConditionStore) -> Self {
        let mut state = Self::new(catalog);
        let restored = match store.load() {
            Ok(Some(conditions)) => conditions,
            Ok(None) => Vec::new(),
            Err(err) => {
                log::warn!(
                    "discarding saved filters under '{}': {}",
                    store.key(),
                    err
                );
                Vec::new()
            }
        };

        for mut condition in restored {
            if state.catalog.get(&condition.field_key).is_none() {
                log::warn!(
                    "restored filter '{}' references unknown field '{}'",
                    condition.id,
                    condition.field_key
                );
            }
            condition.is_valid = is_valid(&condition, &state.catalog);
            state.conditions.push(condition);
        }
        state.next_id = state.conditions.iter().filter_map(id_number).max().unwrap_or(0) + 1;
        state
    }

    /// Saves the collection to `store`; failures are logged, not returned.
    pub fn persist(&self, store: &dyn ZiConditionStore) {
        if let Err(err) = store.save(&self.conditions) {
            log::warn!("failed to save filters under '{}': {}", store.key(), err);
        }
    }

    pub fn catalog(&self) -> &ZiFieldCatalog {
        &self.catalog
    }

    pub fn conditions(&self) -> &[ZiFilterCondition] {
        &self.conditions
    }

    pub fn condition(&self, id: &str) -> Option<&ZiFilterCondition> {
        self.conditions.iter().find(|condition| condition.id == id)
    }

    pub fn sort_config(&self) -> &ZiSortConfig {
        &self.sort
    }

    /// Number of conditions currently taking part in filtering.
    pub fn active_count(&self) -> usize {
        self.conditions.iter().filter(|condition| condition.is_valid).count()
    }

    /// Appends a blank condition on the first catalog field and returns its id.
    pub fn add_condition(&mut self) -> Result<String> {
        let field = self
            .catalog
            .first()
            .ok_or_else(|| ZiError::validation("catalog has no fields to filter on"))?;
        let (field_key, field_type) = (field.key.clone(), field.field_type);
        let condition = ZiFilterCondition::new(
            self.allocate_id(),
            field_key,
            default_operator(field_type),
            default_value(field_type),
        );
        let id = condition.id.clone();
        self.conditions.push(condition);
        Ok(id)
    }

    /// Moves a condition to another field, resetting operator and value.
    pub fn set_field(&mut self, id: &str, field_key: &str) -> Result<()> {
        let field_type = self
            .catalog
            .field_type(field_key)
            .ok_or_else(|| ZiError::validation(format!("unknown field '{field_key}'")))?;
        self.update(id, |condition| {
            condition.field_key = field_key.to_string();
            condition.operator = default_operator(field_type);
            condition.value = default_value(field_type);
        })
    }

    /// Changes the operator, resetting the value when its expected shape changes.
    pub fn set_operator(&mut self, id: &str, operator: ZiFilterOperator) -> Result<()> {
        let index = self.index_of(id)?;
        let field_type = self.catalog.field_type(&self.conditions[index].field_key);
        self.update(id, |condition| {
            if let Some(field_type) = field_type {
                let before = default_value_for(field_type, condition.operator);
                let after = default_value_for(field_type, operator);
                if mem::discriminant(&before) != mem::discriminant(&after) {
                    condition.value = after;
                }
            }
            condition.operator = operator;
        })
    }

    pub fn set_value(&mut self, id: &str, value: ZiFilterValue) -> Result<()> {
        self.update(id, |condition| condition.value = value)
    }

    pub fn remove_condition(&mut self, id: &str) -> Result<ZiFilterCondition> {
        let index = self.index_of(id)?;
        Ok(self.conditions.remove(index))
    }

    pub fn clear(&mut self) {
        self.conditions.clear();
    }

    /// Applies a column click to the sort configuration.
    pub fn toggle_sort(&mut self, key: &str) -> &ZiSortConfig {
        self.sort = self.sort.toggled(key);
        &self.sort
    }

    pub fn set_sort(&mut self, sort: ZiSortConfig) {
        self.sort = sort;
    }

    /// Filtered and sorted view of `records` evaluated at `now`.
    pub fn view<'r>(&self, records: &'r [ZiRecord], now: DateTime<Utc>) -> Vec<&'r ZiRecord> {
        self.evaluate(records, now).0
    }

    /// Counts for the view of `records` evaluated at `now`.
    pub fn summary(&self, records: &[ZiRecord], now: DateTime<Utc>) -> ZiFilterStats {
        self.evaluate(records, now).1
    }

    /// Filtered and sorted view together with its counts.
    pub fn evaluate<'r>(
        &self,
        records: &'r [ZiRecord],
        now: DateTime<Utc>,
    ) -> (Vec<&'r ZiRecord>, ZiFilterStats) {
        let ctx = ZiEvalContext::new(&self.catalog, now);
        let (filtered, stats) = apply_with_stats(records, &self.conditions, &ctx);
        (sort(&filtered, &self.sort), stats)
    }

    fn update(&mut self, id: &str, mutate: impl FnOnce(&mut ZiFilterCondition)) -> Result<()> {
        let index = self.index_of(id)?;
        let condition = &mut self.conditions[index];
        mutate(condition);
        condition.is_valid = is_valid(condition, &self.catalog);
        Ok(())
    }

    fn index_of(&self, id: &str) -> Result<usize> {
        self.conditions
            .iter()
            .position(|condition| condition.id == id)
            .ok_or_else(|| ZiError::validation(format!("unknown filter condition '{id}'")))
    }

    fn allocate_id(&mut self) -> String {
        loop {
            let id = format!("{ID_PREFIX}{}", self.next_id);
            self.next_id += 1;
            if self.condition(&id).is_none() {
                return id;
            }
        }
    }
}

fn id_number(condition: &ZiFilterCondition) -> Option<u64> {
    condition.id.strip_prefix(ID_PREFIX)?.parse().ok()
}

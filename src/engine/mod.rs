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

//! # Engine Module
//!
//! The four pure stages of a filtered view:
//!
//! - **validate**: does a condition carry enough input to be applied
//! - **predicate**: does one record satisfy one condition
//! - **combine**: grouped AND/OR over all valid conditions
//! - **sort**: stable single-column ordering
//!
//! None of the stages mutate their inputs or keep state between calls.

pub mod combine;
pub mod predicate;
pub mod sort;
pub mod validate;

use crate::condition::ZiFilterCondition;
use crate::context::ZiEvalContext;
use crate::record::ZiRecord;

use self::sort::ZiSortConfig;

/// Filters then sorts `records`, the full pipeline behind a table view.
pub fn view<'r>(
    records: &'r [ZiRecord],
    conditions: &[ZiFilterCondition],
    sort_config: &ZiSortConfig,
    ctx: &ZiEvalContext<'_>,
) -> Vec<&'r ZiRecord> {
    let filtered = combine::apply(records, conditions, ctx);
    sort::sort(&filtered, sort_config)
}

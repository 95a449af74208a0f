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

//! # Zi Grid Core Library
//!
//! Zi Grid filters and sorts an in-memory table of records from
//! user-composed field/operator/value conditions.
//!
//! ## Module Overview
//!
//! - **record**: ZiRecord and dot-path field resolution
//! - **catalog**: Field catalog (field types, labels, select options)
//! - **operator**: Operator registry (legal operators and default values per type)
//! - **condition**: Filter condition and value model
//! - **context**: Evaluation context (catalog plus the evaluation clock)
//! - **engine**: Validation, predicate evaluation, AND/OR combination and sorting
//! - **metrics**: Counts describing a filter pass
//! - **state**: Stateful owner of the condition collection with persistence
//! - **export**: CSV/JSON export of filtered views
//!
//! ## Feature Flags
//!
//! - `csv`: Enables the export module
//! - `yaml`: Enables YAML field catalog configuration
//! - `full`: Enables all features
//!
//! ## Quick Start
//!
//! ```rust
//! use zigrid::{ZiFieldCatalog, ZiFilterState, ZiFilterValue, ZiRecord};
//! use serde_json::json;
//!
//! let records: Vec<ZiRecord> = vec![
//!     json!({"id": 1, "department": "Engineering", "salary": 95000}).into(),
//!     json!({"id": 2, "department": "Design", "salary": 70000}).into(),
//! ];
//!
//! let mut state = ZiFilterState::new(ZiFieldCatalog::employees());
//! let id = state.add_condition()?;
//! state.set_field(&id, "department")?;
//! state.set_value(&id, ZiFilterValue::text("engineering"))?;
//!
//! let view = state.view(&records, chrono::Utc::now());
//! assert_eq!(view.len(), 1);
//! ```
//!
//! ## Error Handling
//!
//! Evaluation never fails: absent data, unknown fields and malformed input
//! degrade to a filtering outcome. Catalog loading, state mutation by id,
//! stores and export return `Result<T, ZiError>`.

pub mod catalog;
pub mod condition;
pub mod context;
pub mod engine;
pub mod errors;
#[cfg(feature = "csv")]
pub mod export;
pub mod metrics;
pub mod operator;
pub mod record;
pub mod state;

pub use catalog::{ZiCatalogFormat, ZiFieldCatalog, ZiFieldDefinition, ZiFieldType};
pub use condition::{ZiDateRange, ZiFilterCondition, ZiFilterValue, ZiNumberRange};
pub use context::ZiEvalContext;
pub use engine::combine::{apply, apply_with_stats, group_conditions, ZiConditionGroup};
pub use engine::predicate::matches;
pub use engine::sort::{sort, ZiSortConfig, ZiSortDirection};
pub use engine::validate::is_valid;
pub use engine::view;
pub use errors::{Result, ZiError};
pub use metrics::ZiFilterStats;
pub use operator::{default_operator, default_value, default_value_for, operators_for, ZiFilterOperator};
pub use record::{ZiFieldPath, ZiRecord};
pub use state::{ZiConditionStore, ZiFileStore, ZiFilterState, ZiMemoryStore, DEFAULT_STORAGE_KEY};

#[cfg(feature = "csv")]
pub use export::{ZiOutputFormat, ZiViewWriter, ZiWriteStats};

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

use chrono::{DateTime, Utc};

use crate::catalog::ZiFieldCatalog;

/// Inputs every predicate evaluation reads besides the record and condition.
///
/// `now` is explicit so that relative date operators are deterministic under
/// test; callers re-create the context (or call [`ZiEvalContext::at_now`])
/// for each evaluation pass.
#[derive(Clone, Copy, Debug)]
pub struct ZiEvalContext<'a> {
    catalog: &'a ZiFieldCatalog,
    now: DateTime<Utc>,
}

impl<'a> ZiEvalContext<'a> {
    pub fn new(catalog: &'a ZiFieldCatalog, now: DateTime<Utc>) -> Self {
        Self { catalog, now }
    }

    /// Context pinned to the current wall-clock time.
    pub fn at_now(catalog: &'a ZiFieldCatalog) -> Self {
        Self::new(catalog, Utc::now())
    }

    pub fn catalog(&self) -> &'a ZiFieldCatalog {
        self.catalog
    }

    pub fn now(&self) -> DateTime<Utc> {
        self.now
    }

    pub fn with_now(mut self, now: DateTime<Utc>) -> Self {
        self.now = now;
        self
    }
}

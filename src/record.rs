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

//! # Zi Grid Record Module
//!
//! Rows of the dataset being browsed. A [`ZiRecord`] wraps a JSON payload
//! holding scalar fields, string arrays and nested objects such as
//! `{"address": {"city": "Austin"}}`. The engine only ever borrows records;
//! filtering and sorting hand back references into the caller's collection.
//!
//! Fields are addressed with a [`ZiFieldPath`], a dot-delimited path into the
//! payload (`"address.city"`).

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::errors::{Result, ZiError};

/// One row of the dataset.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ZiRecord {
    /// Optional stable identifier for the record.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,

    /// Field values of the row.
    pub payload: Value,
}

impl ZiRecord {
    /// Constructs a record with the given payload and optional identifier.
    pub fn new(id: impl Into<Option<String>>, payload: Value) -> Self {
        ZiRecord {
            id: id.into(),
            payload,
        }
    }

    /// Resolves a dot-delimited key against the payload.
    ///
    /// Keys that are not valid paths resolve to `None`, the same as a path
    /// that does not exist in this record.
    pub fn get(&self, key: &str) -> Option<&Value> {
        ZiFieldPath::parse(key).ok()?.resolve(self)
    }
}

impl From<Value> for ZiRecord {
    /// Builds a record from a bare payload, lifting a string or numeric
    /// `id` field into the record identifier.
    fn from(payload: Value) -> Self {
        let id = match payload.get("id") {
            Some(Value::String(id)) => Some(id.clone()),
            Some(Value::Number(id)) => Some(id.to_string()),
            _ => None,
        };
        ZiRecord { id, payload }
    }
}

/// Dot-delimited path referencing a payload value.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ZiFieldPath {
    segments: Vec<String>,
}

impl ZiFieldPath {
    pub fn parse(path: &str) -> Result<Self> {
        let segments: Vec<String> = path
            .split('.')
            .map(|segment| segment.trim().to_string())
            .filter(|segment| !segment.is_empty())
            .collect();

        if segments.is_empty() {
            return Err(ZiError::validation("field path may not be empty"));
        }

        Ok(Self { segments })
    }

    pub fn segments(&self) -> &[String] {
        &self.segments
    }

    /// Walks the payload one object key at a time.
    ///
    /// Returns `None` when a segment is missing, when an intermediate value
    /// is not an object, or when the leaf is JSON `null`.
    pub fn resolve<'a>(&self, record: &'a ZiRecord) -> Option<&'a Value> {
        let mut current: &Value = &record.payload;
        for segment in &self.segments {
            current = match current {
                Value::Object(map) => map.get(segment)?,
                _ => return None,
            };
        }
        match current {
            Value::Null => None,
            value => Some(value),
        }
    }
}

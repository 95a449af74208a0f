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

//! # Zi Grid Error Module
//!
//! Error types shared by the fallible surfaces of Zi Grid: catalog
//! configuration, the filter state owner, condition stores and CSV export.
//!
//! The evaluation engine itself never fails. Missing data, unknown fields and
//! malformed comparison values all degrade to a filtering outcome instead of
//! an error, so none of the functions in [`crate::engine`] return
//! [`Result`].
//!
//! ## Error Categories
//!
//! - **Io**: Filesystem errors from file-backed stores and exports
//! - **Schema**: Malformed field catalog definitions
//! - **Validation**: Invalid parameters such as unknown condition ids
//! - **Storage**: Condition store failures
//! - **Export**: CSV serialization failures
//! - **Serde**: Serialization/deserialization errors

use std::io;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Convenience result type used throughout Zi Grid.
pub type Result<T> = std::result::Result<T, ZiError>;

/// Canonical error enumeration for Zi Grid.
#[derive(Debug, Error, Serialize, Deserialize)]
pub enum ZiError {
    /// Errors originating from filesystem IO.
    #[error("io error: {0}")]
    Io(String),

    /// Errors caused by a malformed field catalog.
    #[error("schema error: {message}")]
    Schema { message: String },

    /// Validation errors triggered by invalid parameters or inputs.
    #[error("validation error: {message}")]
    Validation { message: String },

    /// Failures reported by a condition store.
    #[error("storage error for key '{key}': {message}")]
    Storage { key: String, message: String },

    /// Failures while serializing a filtered view for export.
    #[error("export error: {0}")]
    Export(String),

    /// Wrapper for serde-style serialization issues.
    #[error("serialization error: {0}")]
    Serde(String),
}

impl From<io::Error> for ZiError {
    fn from(err: io::Error) -> Self {
        ZiError::Io(err.to_string())
    }
}

impl From<serde_json::Error> for ZiError {
    fn from(err: serde_json::Error) -> Self {
        ZiError::Serde(err.to_string())
    }
}

#[cfg(feature = "yaml")]
impl From<serde_yaml::Error> for ZiError {
    fn from(err: serde_yaml::Error) -> Self {
        ZiError::Serde(err.to_string())
    }
}

#[cfg(feature = "csv")]
impl From<csv::Error> for ZiError {
    fn from(err: csv::Error) -> Self {
        ZiError::Export(err.to_string())
    }
}

impl ZiError {
    /// Helper to construct simple validation errors.
    pub fn validation<T: Into<String>>(message: T) -> Self {
        ZiError::Validation {
            message: message.into(),
        }
    }

    /// Helper to construct schema errors.
    pub fn schema<T: Into<String>>(message: T) -> Self {
        ZiError::Schema {
            message: message.into(),
        }
    }

    /// Helper to construct storage errors.
    pub fn storage(key: impl Into<String>, message: impl Into<String>) -> Self {
        ZiError::Storage {
            key: key.into(),
            message: message.into(),
        }
    }
}

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

//! # Zi Grid Field Catalog
//!
//! Registry of filterable fields. Each [`ZiFieldDefinition`] maps a dot-path
//! key to a [`ZiFieldType`] and, for select fields, the ordered option set.
//!
//! A catalog is either the bundled [`ZiFieldCatalog::employees`] set or
//! loaded from JSON/YAML configuration:
//!
//! ```yaml
//! - key: department
//!   label: Department
//!   type: single-select
//!   options: [Engineering, Design]
//! - key: salary
//!   label: Salary
//!   type: number
//! ```

use std::collections::HashSet;
use std::fmt;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::errors::{Result, ZiError};
use crate::record::ZiFieldPath;

/// Closed set of field types understood by the engine.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ZiFieldType {
    Text,
    Number,
    Date,
    Amount,
    SingleSelect,
    MultiSelect,
    Boolean,
}

impl ZiFieldType {
    pub fn as_str(&self) -> &'static str {
        match self {
            ZiFieldType::Text => "text",
            ZiFieldType::Number => "number",
            ZiFieldType::Date => "date",
            ZiFieldType::Amount => "amount",
            ZiFieldType::SingleSelect => "single-select",
            ZiFieldType::MultiSelect => "multi-select",
            ZiFieldType::Boolean => "boolean",
        }
    }

    /// Whether fields of this type carry an enumerated option set.
    pub fn has_options(&self) -> bool {
        matches!(self, ZiFieldType::SingleSelect | ZiFieldType::MultiSelect)
    }
}

impl fmt::Display for ZiFieldType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A single filterable field.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ZiFieldDefinition {
    /// Dot-path into the record payload.
    pub key: String,
    /// Human-readable column label.
    pub label: String,
    #[serde(rename = "type")]
    pub field_type: ZiFieldType,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub options: Option<Vec<String>>,
}

impl ZiFieldDefinition {
    pub fn new(key: impl Into<String>, label: impl Into<String>, field_type: ZiFieldType) -> Self {
        Self {
            key: key.into(),
            label: label.into(),
            field_type,
            options: None,
        }
    }

    /// Attaches the enumerated option set of a select field.
    pub fn with_options<I, S>(mut self, options: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.options = Some(options.into_iter().map(Into::into).collect());
        self
    }

    fn check(&self) -> Result<()> {
        ZiFieldPath::parse(&self.key)
            .map_err(|_| ZiError::schema("field key may not be empty"))?;

        match (&self.options, self.field_type.has_options()) {
            (None, true) => Err(ZiError::schema(format!(
                "field '{}' of type {} requires 'options'",
                self.key, self.field_type
            ))),
            (Some(options), true) if options.is_empty() => Err(ZiError::schema(format!(
                "field '{}' 'options' may not be empty",
                self.key
            ))),
            (Some(_), false) => Err(ZiError::schema(format!(
                "field '{}' of type {} may not declare 'options'",
                self.key, self.field_type
            ))),
            _ => Ok(()),
        }
    }
}

/// Supported catalog configuration formats.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ZiCatalogFormat {
    Json,
    #[cfg(feature = "yaml")]
    Yaml,
}

impl ZiCatalogFormat {
    /// Attempts to infer the configuration format from the file extension.
    pub fn detect(path: impl AsRef<Path>) -> Option<Self> {
        let ext = path
            .as_ref()
            .extension()?
            .to_string_lossy()
            .to_ascii_lowercase();
        match ext.as_str() {
            "json" => Some(ZiCatalogFormat::Json),
            #[cfg(feature = "yaml")]
            "yaml" | "yml" => Some(ZiCatalogFormat::Yaml),
            _ => None,
        }
    }
}

/// Ordered registry of field definitions.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ZiFieldCatalog {
    fields: Vec<ZiFieldDefinition>,
}

impl ZiFieldCatalog {
    /// Builds a catalog, rejecting duplicate keys and malformed definitions.
    pub fn new(fields: Vec<ZiFieldDefinition>) -> Result<Self> {
        let mut seen = HashSet::new();
        for field in &fields {
            field.check()?;
            if !seen.insert(field.key.as_str()) {
                return Err(ZiError::schema(format!(
                    "duplicate field key '{}'",
                    field.key
                )));
            }
        }
        Ok(Self { fields })
    }

    pub fn from_json_str(source: &str) -> Result<Self> {
        let fields: Vec<ZiFieldDefinition> = serde_json::from_str(source)?;
        Self::new(fields)
    }

    #[cfg(feature = "yaml")]
    pub fn from_yaml_str(source: &str) -> Result<Self> {
        let fields: Vec<ZiFieldDefinition> = serde_yaml::from_str(source)?;
        Self::new(fields)
    }

    /// Loads a catalog file, inferring the format from its extension.
    pub fn from_path(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let format = ZiCatalogFormat::detect(path)
            .ok_or_else(|| ZiError::validation("unable to detect catalog format from extension"))?;
        let source = std::fs::read_to_string(path)?;
        match format {
            ZiCatalogFormat::Json => Self::from_json_str(&source),
            #[cfg(feature = "yaml")]
            ZiCatalogFormat::Yaml => Self::from_yaml_str(&source),
        }
    }

    /// Bundled catalog for the employee directory dataset.
    pub fn employees() -> Self {
        use ZiFieldType::*;

        Self {
            fields: vec![
                ZiFieldDefinition::new("name", "Name", Text),
                ZiFieldDefinition::new("email", "Email", Text),
                ZiFieldDefinition::new("title", "Job Title", Text),
                ZiFieldDefinition::new("department", "Department", SingleSelect).with_options([
                    "Engineering",
                    "Design",
                    "Marketing",
                    "Sales",
                    "Finance",
                    "Human Resources",
                    "Operations",
                    "Legal",
                ]),
                ZiFieldDefinition::new("salary", "Salary", Number),
                ZiFieldDefinition::new("age", "Age", Number),
                ZiFieldDefinition::new("bonus", "Bonus", Amount),
                ZiFieldDefinition::new("hire_date", "Hire Date", Date),
                ZiFieldDefinition::new("last_review", "Last Review", Date),
                ZiFieldDefinition::new("is_active", "Active", Boolean),
                ZiFieldDefinition::new("skills", "Skills", MultiSelect).with_options([
                    "Rust",
                    "TypeScript",
                    "Python",
                    "Go",
                    "Java",
                    "SQL",
                    "React",
                    "Kubernetes",
                    "AWS",
                    "Docker",
                    "Figma",
                    "Sketch",
                    "User Research",
                    "SEO",
                    "Copywriting",
                    "Analytics",
                    "Negotiation",
                    "Accounting",
                    "Public Speaking",
                    "Leadership",
                ]),
                ZiFieldDefinition::new("address.city", "City", Text),
                ZiFieldDefinition::new("address.state", "State", Text),
                ZiFieldDefinition::new("address.country", "Country", SingleSelect).with_options([
                    "United States",
                    "Canada",
                    "United Kingdom",
                    "Germany",
                    "Australia",
                    "Japan",
                ]),
            ],
        }
    }

    pub fn get(&self, key: &str) -> Option<&ZiFieldDefinition> {
        self.fields.iter().find(|field| field.key == key)
    }

    pub fn field_type(&self, key: &str) -> Option<ZiFieldType> {
        self.get(key).map(|field| field.field_type)
    }

    pub fn first(&self) -> Option<&ZiFieldDefinition> {
        self.fields.first()
    }

    pub fn fields(&self) -> &[ZiFieldDefinition] {
        &self.fields
    }

    pub fn len(&self) -> usize {
        self.fields.len()
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &ZiFieldDefinition> {
        self.fields.iter()
    }
}

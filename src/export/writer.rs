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

//! # View Writer Module
//!
//! Serializes a filtered and sorted view for download. Columns follow the
//! catalog order and are headed by field labels.

use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::catalog::ZiFieldCatalog;
use crate::errors::Result;
use crate::record::{ZiFieldPath, ZiRecord};

/// Supported output formats.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ZiOutputFormat {
    /// Comma-separated values with a header row.
    #[default]
    Csv,
    /// JSON array of `{label: value}` objects.
    Json,
}

/// Statistics about a write.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ZiWriteStats {
    pub records_written: usize,
    pub columns: usize,
}

#[derive(Clone, Debug)]
struct ZiColumn {
    label: String,
    path: ZiFieldPath,
}

/// Writer turning a view into CSV or JSON.
#[derive(Clone, Debug)]
pub struct ZiViewWriter {
    columns: Vec<ZiColumn>,
    format: ZiOutputFormat,
    pretty: bool,
}

impl ZiViewWriter {
    /// Writer with one column per catalog field.
    pub fn new(catalog: &ZiFieldCatalog) -> Result<Self> {
        let columns = catalog
            .iter()
            .map(|field| {
                Ok(ZiColumn {
                    label: field.label.clone(),
                    path: ZiFieldPath::parse(&field.key)?,
                })
            })
            .collect::<Result<Vec<_>>>()?;
        Ok(Self {
            columns,
            format: ZiOutputFormat::Csv,
            pretty: false,
        })
    }

    pub fn with_format(mut self, format: ZiOutputFormat) -> Self {
        self.format = format;
        self
    }

    /// Pretty-prints JSON output.
    pub fn with_pretty(mut self, pretty: bool) -> Self {
        self.pretty = pretty;
        self
    }

    pub fn headers(&self) -> Vec<&str> {
        self.columns.iter().map(|column| column.label.as_str()).collect()
    }

    /// Writes the view into any [`Write`] sink.
    pub fn write_to<W: Write>(&self, writer: W, records: &[&ZiRecord]) -> Result<ZiWriteStats> {
        match self.format {
            ZiOutputFormat::Csv => self.write_csv(writer, records)?,
            ZiOutputFormat::Json => self.write_json(writer, records)?,
        }
        Ok(ZiWriteStats {
            records_written: records.len(),
            columns: self.columns.len(),
        })
    }

    /// Renders the view as a string.
    pub fn render(&self, records: &[&ZiRecord]) -> Result<String> {
        let mut buffer = Vec::new();
        self.write_to(&mut buffer, records)?;
        Ok(String::from_utf8_lossy(&buffer).into_owned())
    }

    /// Writes the view to `path`, creating parent directories.
    pub fn write_path(&self, path: impl AsRef<Path>, records: &[&ZiRecord]) -> Result<ZiWriteStats> {
        let path = path.as_ref();
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        let stats = self.write_to(BufWriter::new(File::create(path)?), records)?;
        log::debug!(
            "exported {} records to {}",
            stats.records_written,
            path.display()
        );
        Ok(stats)
    }

    fn write_csv<W: Write>(&self, writer: W, records: &[&ZiRecord]) -> Result<()> {
        let mut csv_writer = csv::Writer::from_writer(writer);
        csv_writer.write_record(self.headers())?;
        for record in records {
            let row: Vec<String> = self
                .columns
                .iter()
                .map(|column| cell(column.path.resolve(record)))
                .collect();
            csv_writer.write_record(&row)?;
        }
        csv_writer.flush()?;
        Ok(())
    }

    fn write_json<W: Write>(&self, mut writer: W, records: &[&ZiRecord]) -> Result<()> {
        let rows: Vec<Value> = records
            .iter()
            .map(|record| {
                let row: Map<String, Value> = self
                    .columns
                    .iter()
                    .map(|column| {
                        let value = column.path.resolve(record).cloned().unwrap_or(Value::Null);
                        (column.label.clone(), value)
                    })
                    .collect();
                Value::Object(row)
            })
            .collect();

        if self.pretty {
            serde_json::to_writer_pretty(&mut writer, &rows)?;
        } else {
            serde_json::to_writer(&mut writer, &rows)?;
        }
        writer.flush()?;
        Ok(())
    }
}

/// Flat text for one CSV cell.
fn cell(value: Option<&Value>) -> String {
    match value {
        None | Some(Value::Null) => String::new(),
        Some(Value::String(text)) => text.clone(),
        Some(Value::Array(items)) => items
            .iter()
            .map(|item| cell(Some(item)))
            .collect::<Vec<_>>()
            .join(", "),
        Some(other) => other.to_string(),
    }
}

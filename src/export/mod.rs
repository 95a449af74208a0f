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

//! # Data Export Module
//!
//! Download support for filtered views.
//!
//! ## Supported Output Formats
//!
//! - **CSV**: header row of field labels; cells containing a comma, quote or
//!   newline are quoted with embedded quotes doubled
//! - **JSON**: array of objects keyed by field label
//!
//! ```rust
//! use zigrid::export::{ZiViewWriter, ZiOutputFormat};
//!
//! let writer = ZiViewWriter::new(&catalog)?;
//! let csv = writer.render(&view)?;
//! ```

pub mod writer;

pub use writer::{ZiOutputFormat, ZiViewWriter, ZiWriteStats};

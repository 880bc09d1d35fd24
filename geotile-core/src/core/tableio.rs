//
// Copyright (c) Pirmin Kalberer. All rights reserved.
// Licensed under the MIT License. See LICENSE file in the project root for full license information.
//

//! Reading and writing record tables

use crate::core::record::Table;
use crate::error::CatalogError;
use std::fs::File;
use std::io::{BufReader, BufWriter};
use std::path::Path;

/// File extension of the supported table format
pub const TABLE_EXT: &str = "json";

pub(crate) fn check_supported(path: &str) -> Result<(), CatalogError> {
    match Path::new(path).extension().and_then(|ext| ext.to_str()) {
        Some(ext) if ext == TABLE_EXT => Ok(()),
        other => Err(CatalogError::UnsupportedFileType(
            other.unwrap_or("").to_string(),
        )),
    }
}

/// Serialize a table into the supported format
pub fn table_to_bytes(table: &Table) -> Result<Vec<u8>, CatalogError> {
    Ok(serde_json::to_vec_pretty(table)?)
}

/// Deserialize a table from the supported format
pub fn table_from_bytes(bytes: &[u8]) -> Result<Table, CatalogError> {
    Ok(serde_json::from_slice(bytes)?)
}

/// Read a table file
pub fn read_table(path: &str) -> Result<Table, CatalogError> {
    check_supported(path)?;
    debug!("read_table {}", path);
    let file = File::open(path)?;
    Ok(serde_json::from_reader(BufReader::new(file))?)
}

/// Write a table file
pub fn write_table(path: &str, table: &Table) -> Result<(), CatalogError> {
    check_supported(path)?;
    debug!("write_table {}", path);
    let file = File::create(path)?;
    Ok(serde_json::to_writer_pretty(BufWriter::new(file), table)?)
}

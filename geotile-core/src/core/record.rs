//
// Copyright (c) Pirmin Kalberer. All rights reserved.
// Licensed under the MIT License. See LICENSE file in the project root for full license information.
//

//! Geolocated records and record tables

use std::collections::BTreeMap;

/// Supported record payload value types
#[derive(Serialize, Deserialize, Clone, PartialEq, Debug)]
#[serde(untagged)]
pub enum RecordValue {
    Bool(bool),
    Int(i64),
    Double(f64),
    String(String),
}

/// A geolocated data row: a point plus arbitrary named payload fields
#[derive(Serialize, Deserialize, Clone, PartialEq, Debug)]
pub struct Record {
    pub latitude: f64,
    pub longitude: f64,
    #[serde(flatten)]
    pub attrs: BTreeMap<String, RecordValue>,
}

impl Record {
    pub fn new(latitude: f64, longitude: f64) -> Record {
        Record {
            latitude,
            longitude,
            attrs: BTreeMap::new(),
        }
    }
}

/// Table-level metadata, persisted with the table under the historical
/// wire keys `geotile_id` and `XY_epsg`
#[derive(Serialize, Deserialize, Clone, PartialEq, Debug, Default)]
pub struct TableMeta {
    #[serde(rename = "geotile_id", skip_serializing_if = "Option::is_none")]
    pub tile_id: Option<String>,
    #[serde(rename = "XY_epsg", skip_serializing_if = "Option::is_none")]
    pub xy_epsg: Option<i32>,
}

/// A sequence of records with attached metadata
#[derive(Serialize, Deserialize, Clone, PartialEq, Debug, Default)]
pub struct Table {
    #[serde(flatten)]
    pub meta: TableMeta,
    #[serde(default)]
    pub records: Vec<Record>,
}

//
// Copyright (c) Pirmin Kalberer. All rights reserved.
// Licensed under the MIT License. See LICENSE file in the project root for full license information.
//

use crate::catalog::partition::{group_by_tile, save_groups};
use crate::core::record::{Record, RecordValue};
use crate::core::tableio;
use crate::error::CatalogError;
use crate::store::memstore::Memstore;
use crate::store::store::TileStore;
use geotile_grid::TileGrid;
use std::io::Read;

fn record(lat: f64, lon: f64, height: f64) -> Record {
    let mut record = Record::new(lat, lon);
    record
        .attrs
        .insert("height".to_string(), RecordValue::Double(height));
    record
}

#[test]
fn test_group_by_tile() {
    let tiles = TileGrid::new(2.0).unwrap().tiles();
    let records = vec![
        record(61.2, -145.3, 12.5),
        record(61.9, -144.1, 13.0),
        record(63.0, -145.3, 9.75),
    ];
    let grouped = group_by_tile(records, &tiles);
    assert_eq!(grouped.groups.len(), 2);
    assert_eq!(grouped.groups["lat[+60+62]lon[-146-144]"].len(), 2);
    assert_eq!(grouped.groups["lat[+62+64]lon[-146-144]"].len(), 1);
    assert_eq!(grouped.unassigned_count(), 0);
}

#[test]
fn test_group_reports_unassigned() {
    let tiles = TileGrid::new(30.0).unwrap().tiles();
    let records = vec![record(15.0, 15.0, 1.0), record(-90.0, -180.0, 2.0)];
    let grouped = group_by_tile(records, &tiles);
    assert_eq!(grouped.groups.len(), 1);
    // the global minimum corner belongs to no tile and must be reported
    assert_eq!(grouped.unassigned_count(), 1);
    assert_eq!(grouped.unassigned[0].latitude, -90.0);
}

#[test]
fn test_save_groups_stamps_metadata() {
    let tiles = TileGrid::new(2.0).unwrap().tiles();
    let grouped = group_by_tile(vec![record(61.2, -145.3, 12.5)], &tiles);
    let store = Memstore::new();

    let written = save_groups(&store, &grouped, "json").unwrap();
    assert_eq!(written, vec!["lat[+60+62]lon[-146-144].json"]);

    let mut bytes = Vec::new();
    store.read(&written[0], |f| {
        let _ = f.read_to_end(&mut bytes);
    });
    let table = tableio::table_from_bytes(&bytes).unwrap();
    assert_eq!(
        table.meta.tile_id.as_deref(),
        Some("lat[+60+62]lon[-146-144]")
    );
    assert_eq!(table.meta.xy_epsg, Some(32606));
    assert_eq!(table.records.len(), 1);
    assert_eq!(table.records[0].latitude, 61.2);
}

#[test]
fn test_save_groups_rejects_unsupported_format() {
    let tiles = TileGrid::new(2.0).unwrap().tiles();
    let grouped = group_by_tile(vec![record(61.2, -145.3, 12.5)], &tiles);
    let store = Memstore::new();
    assert!(matches!(
        save_groups(&store, &grouped, "csv"),
        Err(CatalogError::UnsupportedFileType(_))
    ));
}

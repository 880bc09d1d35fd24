//
// Copyright (c) Pirmin Kalberer. All rights reserved.
// Licensed under the MIT License. See LICENSE file in the project root for full license information.
//

//! Partitioning records into per-tile tables

use crate::catalog::catalog::{suffix_normalize, tile_path};
use crate::core::record::{Record, Table, TableMeta};
use crate::core::tableio;
use crate::error::CatalogError;
use crate::store::TileStore;
use geotile_grid::{assign_tile, tileid, zone, Tile};
use std::collections::BTreeMap;

/// Records partitioned by containing tile
///
/// Records outside the tessellation are kept in `unassigned`, never
/// silently dropped.
#[derive(Clone, PartialEq, Debug, Default)]
pub struct TileGroups {
    pub groups: BTreeMap<String, Vec<Record>>,
    pub unassigned: Vec<Record>,
}

impl TileGroups {
    pub fn unassigned_count(&self) -> usize {
        self.unassigned.len()
    }
}

/// Partition records by the tile containing their point.
pub fn group_by_tile(records: Vec<Record>, tiles: &[Tile]) -> TileGroups {
    let mut grouped = TileGroups::default();
    for record in records {
        match assign_tile(tiles, record.latitude, record.longitude, false) {
            Some(tile) => grouped
                .groups
                .entry(tile.id.clone())
                .or_insert_with(Vec::new)
                .push(record),
            None => grouped.unassigned.push(record),
        }
    }
    if !grouped.unassigned.is_empty() {
        warn!(
            "{} record(s) outside the tessellation left unassigned",
            grouped.unassigned.len()
        );
    }
    grouped
}

/// Write one table per group into the store, stamped with the tile id
/// and the zone code of the tile extent. Returns the written paths.
///
/// Concurrent writers to the same tile file must be serialized by the
/// caller.
pub fn save_groups<S: TileStore>(
    store: &S,
    grouped: &TileGroups,
    suffix: &str,
) -> Result<Vec<String>, CatalogError> {
    let suffix = suffix_normalize(suffix)?;
    let mut written = Vec::new();
    for (id, records) in &grouped.groups {
        let extent = tileid::decode(id)?;
        let table = Table {
            meta: TableMeta {
                tile_id: Some(id.clone()),
                xy_epsg: Some(zone::utm_zone_for_extent(&extent)?),
            },
            records: records.clone(),
        };
        let path = tile_path(id, &suffix);
        tableio::check_supported(&path)?;
        store.write(&path, &tableio::table_to_bytes(&table)?)?;
        debug!("saved {} record(s) to {}", records.len(), path);
        written.push(path);
    }
    Ok(written)
}

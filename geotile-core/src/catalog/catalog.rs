//
// Copyright (c) Pirmin Kalberer. All rights reserved.
// Licensed under the MIT License. See LICENSE file in the project root for full license information.
//

//! Directory-as-index catalog queries
//!
//! A directory of tile-named files is its own spatial index: every
//! filename starts with the tile id, so listing the directory and
//! decoding the ids answers range queries without a catalog database.

use crate::error::CatalogError;
use crate::store::TileStore;
use geotile_grid::{tileid, Extent};
use std::collections::BTreeMap;
use std::path::Path;

/// A tile file found in a store
#[derive(Clone, PartialEq, Debug)]
pub struct TileFile {
    pub id: String,
    pub extent: Extent,
    pub path: String,
}

/// Result of a multi-layer listing: tiles present in every layer
#[derive(Clone, PartialEq, Debug)]
pub struct LayerJoin {
    pub suffixes: Vec<String>,
    pub rows: Vec<LayerRow>,
}

#[derive(Clone, PartialEq, Debug)]
pub struct LayerRow {
    pub id: String,
    pub extent: Extent,
    /// One path per suffix, in `suffixes` order
    pub paths: Vec<String>,
}

/// Ensure a leading `.` separator. Idempotent.
pub fn suffix_normalize(suffix: &str) -> Result<String, CatalogError> {
    if suffix.is_empty() {
        return Err(CatalogError::InvalidSuffix);
    }
    if suffix.starts_with('.') {
        Ok(suffix.to_string())
    } else {
        Ok(format!(".{}", suffix))
    }
}

/// Filename of a tile layer file
pub fn tile_path(id: &str, suffix: &str) -> String {
    format!("{}{}", id, suffix)
}

fn decode_entry(name: &str) -> Option<(String, Extent)> {
    let id = tileid::id_from_filename(name).ok()?;
    let extent = tileid::decode(&id).ok()?;
    Some((id, extent))
}

/// List tile files in a store, optionally filtered by suffix and by
/// intersection with a region.
///
/// Only entries whose name starts with a valid tile id are candidates;
/// anything else in the directory is skipped. Results are sorted by id
/// since directory enumeration order is OS-dependent.
pub fn list_tiles<S: TileStore>(
    store: &S,
    suffix: Option<&str>,
    within: Option<&Extent>,
) -> Result<Vec<TileFile>, CatalogError> {
    let suffix = match suffix {
        Some(s) => Some(suffix_normalize(s)?),
        None => None,
    };
    let mut tiles = Vec::new();
    for path in store.list(true)? {
        let name = Path::new(&path)
            .file_name()
            .and_then(|n| n.to_str())
            .unwrap_or(&path);
        if let Some(ref sfx) = suffix {
            if !name.ends_with(sfx.as_str()) {
                continue;
            }
        }
        let (id, extent) = match decode_entry(name) {
            Some(decoded) => decoded,
            None => {
                debug!("skipping entry without tile id: {}", name);
                continue;
            }
        };
        if let Some(region) = within {
            if !extent.intersects(region) {
                continue;
            }
        }
        tiles.push(TileFile { id, extent, path });
    }
    tiles.sort_by(|a, b| a.id.cmp(&b.id).then_with(|| a.path.cmp(&b.path)));
    Ok(tiles)
}

/// Strict multi-layer join: only tiles present in every requested
/// layer are returned. A tile missing from any layer signals
/// incomplete data and is dropped entirely.
pub fn list_tiles_across_layers<S: TileStore>(
    store: &S,
    suffixes: &[&str],
    within: Option<&Extent>,
) -> Result<LayerJoin, CatalogError> {
    let mut normalized = Vec::new();
    for suffix in suffixes {
        normalized.push(suffix_normalize(suffix)?);
    }
    let mut layers: Vec<BTreeMap<String, TileFile>> = Vec::new();
    for suffix in &normalized {
        let listed = list_tiles(store, Some(suffix.as_str()), within)?;
        layers.push(listed.into_iter().map(|t| (t.id.clone(), t)).collect());
    }
    let mut rows = Vec::new();
    if let Some((first, rest)) = layers.split_first() {
        for (id, tile) in first {
            if rest.iter().all(|layer| layer.contains_key(id)) {
                let mut paths = vec![tile.path.clone()];
                paths.extend(rest.iter().map(|layer| layer[id].path.clone()));
                rows.push(LayerRow {
                    id: id.clone(),
                    extent: tile.extent.clone(),
                    paths,
                });
            }
        }
    }
    debug!("layer join over {:?}: {} tile(s)", normalized, rows.len());
    Ok(LayerJoin {
        suffixes: normalized,
        rows,
    })
}

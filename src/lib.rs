//
// Copyright (c) Pirmin Kalberer. All rights reserved.
// Licensed under the MIT License. See LICENSE file in the project root for full license information.
//

//! Global rectangular tile indexing and geocoding
//!
//! Facade over the workspace crates: the tiling engine
//! ([`geotile_grid`]) and the record/store/catalog layer
//! ([`geotile_core`]).

pub use geotile_core::catalog;
pub use geotile_core::core;
pub use geotile_core::store;
pub use geotile_core::CatalogError;
pub use geotile_grid::{
    assign_tile, tileid, zone, Extent, GridError, Tile, TileGrid, WORLD_EXTENT,
};

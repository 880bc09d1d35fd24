//
// Copyright (c) Pirmin Kalberer. All rights reserved.
// Licensed under the MIT License. See LICENSE file in the project root for full license information.
//

//! A library for fixed global tile grid calculations
//!
//! ## Grid generation
//!
//! ```rust
//! use geotile_grid::{Extent, TileGrid};
//!
//! let grid = TileGrid::new(2.0).unwrap();
//! assert_eq!(grid.size(), (90, 180));
//! let tiles = grid.tiles();
//! assert_eq!(
//!     tiles[0].extent,
//!     Extent {
//!         minx: -180.0,
//!         miny: -90.0,
//!         maxx: -178.0,
//!         maxy: -88.0,
//!     }
//! );
//! assert_eq!(tiles[0].id, "lat[-90-88]lon[-180-178]");
//! ```
//!
//! ## Tile identifiers
//!
//! ```rust
//! use geotile_grid::tileid;
//!
//! let extent = tileid::decode("lat[+60+62]lon[-146-144]").unwrap();
//! assert_eq!(tileid::encode(&extent), "lat[+60+62]lon[-146-144]");
//! ```
//!
//! ## Zone resolution
//!
//! ```rust
//! use geotile_grid::zone;
//!
//! // Bergen is covered by the widened zone 32V
//! assert_eq!(zone::utm_zone(61.0, 5.0).unwrap(), 32632);
//! ```

mod error;
mod extent;
mod grid;
pub mod tileid;
pub mod zone;

#[cfg(test)]
mod tileid_test;

pub use crate::error::GridError;
pub use crate::extent::{Extent, WORLD_EXTENT};
pub use crate::grid::{assign_tile, Tile, TileGrid};

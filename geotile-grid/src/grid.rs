//
// Copyright (c) Pirmin Kalberer. All rights reserved.
// Licensed under the MIT License. See LICENSE file in the project root for full license information.
//

//! Fixed global tile grids

use crate::error::GridError;
use crate::extent::Extent;
use crate::tileid;

/// One cell of the global tessellation
#[derive(PartialEq, Clone, Debug)]
pub struct Tile {
    pub id: String,
    pub extent: Extent,
    /// Closed corner ring, populated when the grid is asked for boundaries
    pub boundary: Option<Vec<(f64, f64)>>,
}

/// Fixed global tile grid
///
/// Square tiles of `width` degrees covering latitude [-90, 90] and
/// longitude [-180, 180] without gaps or overlaps. Tile bounds are
/// computed in scaled-integer degree units so the generated extents
/// round-trip exactly through their ids.
#[derive(Clone, Debug)]
pub struct TileGrid {
    width: f64,
    /// Tile width in units of 10^-decimals degree
    step: i64,
    scale: i64,
    rows: i64,
    cols: i64,
    /// Keep only tiles intersecting this region (partial overlap retained)
    pub restrict: Option<Extent>,
    /// Attach corner rings to generated tiles
    pub boundaries: bool,
}

impl TileGrid {
    /// Grid with square tiles of `width` degrees.
    ///
    /// The width must evenly divide 180° and its half-width must have
    /// an exact decimal representation, otherwise the per-tile ids
    /// could not reproduce the tile bounds losslessly.
    pub fn new(width: f64) -> Result<TileGrid, GridError> {
        if !width.is_finite() || width <= 0.0 {
            return Err(GridError::InvalidWidth(width));
        }
        let rows = 180.0 / width;
        if (rows - rows.round()).abs() > 1e-6 {
            return Err(GridError::InvalidWidth(width));
        }
        let rows = rows.round() as i64;
        let decimals = tileid::decimals_for(width / 2.0).ok_or(GridError::InvalidWidth(width))?;
        let scale = 10i64.pow(decimals as u32);
        let half = (width / 2.0 * scale as f64).round() as i64;
        Ok(TileGrid {
            width,
            step: 2 * half,
            scale,
            rows,
            cols: 2 * rows,
            restrict: None,
            boundaries: false,
        })
    }

    pub fn width(&self) -> f64 {
        self.width
    }

    /// (rows, cols) of the full tessellation: (180/width, 360/width)
    pub fn size(&self) -> (u32, u32) {
        (self.rows as u32, self.cols as u32)
    }

    /// Generate the tessellation, latitude-major.
    pub fn tiles(&self) -> Vec<Tile> {
        let mut tiles = Vec::new();
        for row in 0..self.rows {
            let miny = self.coord(-90 * self.scale + row * self.step);
            let maxy = self.coord(-90 * self.scale + (row + 1) * self.step);
            for col in 0..self.cols {
                let minx = self.coord(-180 * self.scale + col * self.step);
                let maxx = self.coord(-180 * self.scale + (col + 1) * self.step);
                let extent = Extent {
                    minx,
                    miny,
                    maxx,
                    maxy,
                };
                if let Some(ref region) = self.restrict {
                    if !region.intersects(&extent) {
                        continue;
                    }
                }
                let boundary = if self.boundaries {
                    Some(corner_ring(&extent))
                } else {
                    None
                };
                tiles.push(Tile {
                    id: tileid::encode(&extent),
                    extent,
                    boundary,
                });
            }
        }
        tiles
    }

    fn coord(&self, scaled: i64) -> f64 {
        scaled as f64 / self.scale as f64
    }
}

/// Closed 5-point ring of the extent corners, counter-clockwise from
/// (minx, miny)
fn corner_ring(extent: &Extent) -> Vec<(f64, f64)> {
    vec![
        (extent.minx, extent.miny),
        (extent.maxx, extent.miny),
        (extent.maxx, extent.maxy),
        (extent.minx, extent.maxy),
        (extent.minx, extent.miny),
    ]
}

/// First tile containing the point, `None` when the point lies outside
/// the tessellation. With `always_xy` the pair is read as `(x, y)`,
/// otherwise as `(lat, lon)`.
pub fn assign_tile<'a>(tiles: &'a [Tile], a: f64, b: f64, always_xy: bool) -> Option<&'a Tile> {
    tiles
        .iter()
        .find(|tile| tile.extent.contains(a, b, always_xy))
}

//
// Copyright (c) Pirmin Kalberer. All rights reserved.
// Licensed under the MIT License. See LICENSE file in the project root for full license information.
//

//! UTM and polar stereographic zone resolution
//!
//! Maps a geographic coordinate to the EPSG code of its local projected
//! CRS: `326xx`/`327xx` UTM zones between 80°S and 84°N, polar
//! stereographic codes beyond. The Norway and Svalbard irregular zones
//! are reproduced with the conventional hardcoded thresholds.

use crate::error::GridError;
use crate::extent::Extent;

/// EPSG code of the north polar stereographic CRS (NSIDC Sea Ice Polar
/// Stereographic North)
pub const EPSG_POLAR_NORTH: i32 = 3413;
/// EPSG code of the south polar stereographic CRS (Antarctic Polar
/// Stereographic)
pub const EPSG_POLAR_SOUTH: i32 = 3031;

/// Projected CRS for a point: UTM zone code, or a polar stereographic
/// code outside the UTM latitude range.
pub fn utm_zone(lat: f64, lon: f64) -> Result<i32, GridError> {
    if !lat.is_finite() || !lon.is_finite() {
        return Err(GridError::InvalidCoordinate { lat, lon });
    }
    if lat > 84.0 {
        return Ok(EPSG_POLAR_NORTH);
    }
    if lat < -80.0 {
        return Ok(EPSG_POLAR_SOUTH);
    }
    let lon = (lon + 180.0).rem_euclid(360.0) - 180.0;
    let ilat = lat.floor() as i32;
    let ilon = lon.floor() as i32;
    // Latitude band index (-10..=9), only consulted by the irregular
    // zones below
    let band = ((ilat + 80) / 8 - 10).max(-10).min(9);
    let mut zone = (ilon + 186) / 6;
    // Norway: zone 31V east of 3°E belongs to the widened zone 32V
    if band == 7 && zone == 31 && ilon >= 3 {
        zone = 32;
    }
    // Svalbard: zones 31X..37X are 12° wide and odd-numbered
    if band == 9 && (0..42).contains(&ilon) {
        zone = 2 * ((ilon + 183) / 12) + 1;
    }
    Ok(if lat >= 0.0 { 32600 + zone } else { 32700 + zone })
}

/// Zone of the extent center
pub fn utm_zone_for_extent(extent: &Extent) -> Result<i32, GridError> {
    let (x, y) = extent.center();
    utm_zone(y, x)
}

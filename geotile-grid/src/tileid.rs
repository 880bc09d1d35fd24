//
// Copyright (c) Pirmin Kalberer. All rights reserved.
// Licensed under the MIT License. See LICENSE file in the project root for full license information.
//

//! Canonical tile identifiers
//!
//! A tile id encodes the tile extent as `lat[<min><max>]lon[<min><max>]`
//! with forced signs and zero-padded integer parts (two digits for
//! latitude, three for longitude). The number of fractional digits is
//! the minimum needed to represent the tile half-width exactly, so
//! integer-degree tilings stay short while fractional tilings remain
//! lossless. The id doubles as the filename prefix of per-tile files.

use crate::error::GridError;
use crate::extent::Extent;
use regex::Regex;
use std::path::Path;

/// Upper bound on fractional digits in tile id fields
pub const MAX_DECIMALS: i32 = 6;

const ID_PATTERN: &str = r"^lat\[([+-]\d{2}(?:\.\d+)?)([+-]\d{2}(?:\.\d+)?)\]lon\[([+-]\d{3}(?:\.\d+)?)([+-]\d{3}(?:\.\d+)?)\]$";

/// Fractional digits needed to print `value` exactly, up to
/// [`MAX_DECIMALS`]. `None` when the value has no exact decimal form.
pub(crate) fn decimals_for(value: f64) -> Option<i32> {
    for digits in 0..=MAX_DECIMALS {
        let scaled = value * 10f64.powi(digits);
        if (scaled - scaled.round()).abs() < 1e-6 {
            return Some(digits);
        }
    }
    None
}

fn format_field(value: f64, int_digits: usize, decimals: i32) -> String {
    // sign + integer part + optional point and fraction
    let width = 1 + int_digits
        + if decimals > 0 {
            1 + decimals as usize
        } else {
            0
        };
    format!("{:+0width$.prec$}", value, width = width, prec = decimals as usize)
}

/// Encode an extent as its canonical tile id.
///
/// The fractional precision is derived per axis from the extent
/// half-width. Half-widths with no exact decimal form print at
/// [`MAX_DECIMALS`] digits; the grid generator never produces such
/// extents.
pub fn encode(extent: &Extent) -> String {
    let lat_decimals = decimals_for((extent.maxy - extent.miny) / 2.0).unwrap_or(MAX_DECIMALS);
    let lon_decimals = decimals_for((extent.maxx - extent.minx) / 2.0).unwrap_or(MAX_DECIMALS);
    format!(
        "lat[{}{}]lon[{}{}]",
        format_field(extent.miny, 2, lat_decimals),
        format_field(extent.maxy, 2, lat_decimals),
        format_field(extent.minx, 3, lon_decimals),
        format_field(extent.maxx, 3, lon_decimals),
    )
}

/// Decode a tile id back into its extent.
///
/// The full id must match the grammar; anything else is a
/// [`GridError::MalformedTileId`]. For grid-generated tiles
/// `decode(encode(extent))` reproduces the extent bit for bit.
pub fn decode(id: &str) -> Result<Extent, GridError> {
    let re = Regex::new(ID_PATTERN).unwrap();
    let malformed = || GridError::MalformedTileId(id.to_string());
    let caps = re.captures(id).ok_or_else(|| malformed())?;
    let miny: f64 = caps[1].parse().map_err(|_| malformed())?;
    let maxy: f64 = caps[2].parse().map_err(|_| malformed())?;
    let minx: f64 = caps[3].parse().map_err(|_| malformed())?;
    let maxx: f64 = caps[4].parse().map_err(|_| malformed())?;
    if miny > maxy || minx > maxx {
        return Err(malformed());
    }
    Ok(Extent {
        minx,
        miny,
        maxx,
        maxy,
    })
}

/// Extract the tile id prefix from a tile filename.
///
/// Takes the final path component and returns everything through the
/// second `]`, independent of the file suffix. Fails with
/// [`GridError::InvalidTileFilename`] when fewer than two `]` are
/// present.
pub fn id_from_filename(path: &str) -> Result<String, GridError> {
    let name = Path::new(path)
        .file_name()
        .and_then(|n| n.to_str())
        .unwrap_or(path);
    let mut brackets = name.match_indices(']').map(|(pos, _)| pos);
    let _ = brackets.next();
    match brackets.next() {
        Some(pos) => Ok(name[..=pos].to_string()),
        None => Err(GridError::InvalidTileFilename(path.to_string())),
    }
}

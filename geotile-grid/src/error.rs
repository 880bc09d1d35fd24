//
// Copyright (c) Pirmin Kalberer. All rights reserved.
// Licensed under the MIT License. See LICENSE file in the project root for full license information.
//

use thiserror::Error;

/// Errors raised by grid generation, tile identifiers and zone resolution
#[derive(Error, Debug, Clone, PartialEq)]
pub enum GridError {
    #[error("tile width {0}° does not evenly divide 180°")]
    InvalidWidth(f64),
    #[error("malformed tile id `{0}`")]
    MalformedTileId(String),
    #[error("no tile id prefix in filename `{0}`")]
    InvalidTileFilename(String),
    #[error("non-finite coordinate lat={lat} lon={lon}")]
    InvalidCoordinate { lat: f64, lon: f64 },
}

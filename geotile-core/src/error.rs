//
// Copyright (c) Pirmin Kalberer. All rights reserved.
// Licensed under the MIT License. See LICENSE file in the project root for full license information.
//

use std::io;
use thiserror::Error;

/// Errors raised by catalog, store and table operations
#[derive(Error, Debug)]
pub enum CatalogError {
    #[error("empty file suffix")]
    InvalidSuffix,
    #[error("unsupported file type `{0}`")]
    UnsupportedFileType(String),
    #[error(transparent)]
    Grid(#[from] geotile_grid::GridError),
    #[error(transparent)]
    Io(#[from] io::Error),
    #[error("table format error: {0}")]
    Format(#[from] serde_json::Error),
}

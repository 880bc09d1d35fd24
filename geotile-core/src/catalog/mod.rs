//
// Copyright (c) Pirmin Kalberer. All rights reserved.
// Licensed under the MIT License. See LICENSE file in the project root for full license information.
//

pub mod catalog;
pub mod partition;

#[cfg(test)]
mod partition_test;

pub use self::catalog::{
    list_tiles, list_tiles_across_layers, suffix_normalize, tile_path, LayerJoin, LayerRow,
    TileFile,
};
pub use self::partition::{group_by_tile, save_groups, TileGroups};

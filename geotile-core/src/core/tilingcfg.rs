//
// Copyright (c) Pirmin Kalberer. All rights reserved.
// Licensed under the MIT License. See LICENSE file in the project root for full license information.
//

use crate::core::config::TilingCfg;
use crate::core::Config;
use geotile_grid::{Extent, TileGrid};

#[derive(Deserialize, Clone, Debug)]
pub struct ExtentCfg {
    pub minx: f64,
    pub miny: f64,
    pub maxx: f64,
    pub maxy: f64,
}

impl From<&ExtentCfg> for Extent {
    fn from(cfg: &ExtentCfg) -> Extent {
        Extent {
            minx: cfg.minx,
            miny: cfg.miny,
            maxx: cfg.maxx,
            maxy: cfg.maxy,
        }
    }
}

impl<'a> Config<'a, TilingCfg> for TileGrid {
    fn from_config(tiling_cfg: &TilingCfg) -> Result<Self, String> {
        let mut grid = TileGrid::new(tiling_cfg.width).map_err(|e| e.to_string())?;
        grid.restrict = tiling_cfg.extent.as_ref().map(Extent::from);
        grid.boundaries = tiling_cfg.boundaries;
        Ok(grid)
    }
    fn gen_config() -> String {
        let toml = r#"
[tiling]
# Tile width in degrees, must evenly divide 180
width = 2.0
"#;
        toml.to_string()
    }
}

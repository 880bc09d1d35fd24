//
// Copyright (c) Pirmin Kalberer. All rights reserved.
// Licensed under the MIT License. See LICENSE file in the project root for full license information.
//

use crate::core::tilingcfg::ExtentCfg;
use regex::Regex;
use serde::Deserialize;
use std::collections::HashMap;
use std::env;
use std::error::Error;
use std::fs::File;
use std::io::prelude::*;
use tera::{Context, Tera};
use toml::Value;

pub trait Config<'a, C: Deserialize<'a>>
where
    Self: std::marker::Sized,
{
    /// Read configuration
    fn from_config(config: &C) -> Result<Self, String>;
    /// Generate configuration template
    fn gen_config() -> String;
    /// Generate configuration template with runtime information
    fn gen_runtime_config(&self) -> String {
        Self::gen_config()
    }
}

#[derive(Deserialize, Clone, Debug)]
pub struct ApplicationCfg {
    pub tiling: TilingCfg,
    pub store: Option<StoreCfg>,
    #[serde(rename = "layer", default)]
    pub layers: Vec<LayerCfg>,
}

#[derive(Deserialize, Clone, Debug)]
pub struct TilingCfg {
    /// Tile width in degrees. Must evenly divide 180.
    pub width: f64,
    /// Restrict the tessellation to this region
    pub extent: Option<ExtentCfg>,
    /// Attach corner rings to generated tiles
    #[serde(default)]
    pub boundaries: bool,
}

#[derive(Deserialize, Clone, Debug)]
pub struct StoreCfg {
    pub file: Option<FileStoreCfg>,
}

#[derive(Deserialize, Clone, Debug)]
pub struct FileStoreCfg {
    pub base: String,
}

#[derive(Deserialize, Clone, Debug)]
pub struct LayerCfg {
    /// Filename suffix of the layer's per-tile files
    pub suffix: String,
}

pub const DEFAULT_CONFIG: &'static str = r#"
[tiling]
width = 2.0

[store.file]
base = "/tmp/geotiles"

[[layer]]
suffix = ".json"
"#;

/// Load and parse the config file into an config struct.
pub fn read_config<'a, T: Deserialize<'a>>(path: &str) -> Result<T, String> {
    let mut file = match File::open(path) {
        Ok(file) => file,
        Err(_) => {
            return Err("Could not find config file!".to_string());
        }
    };
    let mut config_toml = String::new();
    if let Err(err) = file.read_to_string(&mut config_toml) {
        return Err(format!("Error while reading config: [{}]", err));
    };

    parse_config(config_toml, path)
}

/// Parse the configuration into an config struct.
pub fn parse_config<'a, T: Deserialize<'a>>(config_toml: String, path: &str) -> Result<T, String> {
    // Check for old ${var} expressions
    let re = Regex::new(r"\$\{([[:alnum:]]+)\}").unwrap();
    if re.is_match(&config_toml) {
        return Err(
            "Replace old environment variable syntax ${VARNAME} with `{{env.VARNAME}}`".to_string(),
        );
    }

    // Parse template
    let mut tera = Tera::default();
    tera.add_raw_template(path, &config_toml)
        .map_err(|e| format!("Template error: {}", e))?;
    let mut context = Context::new();
    let mut env = HashMap::new();
    for (key, value) in env::vars() {
        env.insert(key, value);
    }
    context.insert("env", &env);
    let toml = tera
        .render(path, &context)
        .map_err(|e| format!("Template error: {}", e.source().unwrap()))?;

    toml.parse::<Value>()
        .and_then(|cfg| cfg.try_into::<T>())
        .map_err(|err| format!("{} - {}", path, err))
}

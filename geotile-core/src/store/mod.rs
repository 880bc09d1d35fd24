//
// Copyright (c) Pirmin Kalberer. All rights reserved.
// Licensed under the MIT License. See LICENSE file in the project root for full license information.
//

pub mod filestore;
pub mod memstore;
pub mod store;

#[cfg(test)]
mod filestore_test;
#[cfg(test)]
mod memstore_test;

pub use self::filestore::Filestore;
pub use self::memstore::Memstore;
pub use self::store::TileStore;
use crate::core::ApplicationCfg;
use crate::core::Config;
use std::io;
use std::io::Read;

/// Store variants behind one dispatch type
#[derive(Clone)]
pub enum Tilestore {
    Memory(Memstore),
    File(Filestore),
}

impl TileStore for Tilestore {
    fn info(&self) -> String {
        match self {
            Tilestore::Memory(store) => store.info(),
            Tilestore::File(store) => store.info(),
        }
    }
    fn list(&self, recursive: bool) -> Result<Vec<String>, io::Error> {
        match self {
            Tilestore::Memory(store) => store.list(recursive),
            Tilestore::File(store) => store.list(recursive),
        }
    }
    fn read<F>(&self, path: &str, read: F) -> bool
    where
        F: FnMut(&mut dyn Read),
    {
        match self {
            Tilestore::Memory(store) => store.read(path, read),
            Tilestore::File(store) => store.read(path, read),
        }
    }
    fn write(&self, path: &str, obj: &[u8]) -> Result<(), io::Error> {
        match self {
            Tilestore::Memory(store) => store.write(path, obj),
            Tilestore::File(store) => store.write(path, obj),
        }
    }
    fn exists(&self, path: &str) -> bool {
        match self {
            Tilestore::Memory(store) => store.exists(path),
            Tilestore::File(store) => store.exists(path),
        }
    }
}

impl<'a> Config<'a, ApplicationCfg> for Tilestore {
    fn from_config(config: &ApplicationCfg) -> Result<Self, String> {
        match config.store.as_ref().and_then(|cfg| cfg.file.as_ref()) {
            Some(file_store_cfg) => Ok(Tilestore::File(Filestore {
                basepath: file_store_cfg.base.clone(),
            })),
            None => Ok(Tilestore::Memory(Memstore::new())),
        }
    }
    fn gen_config() -> String {
        let toml = r#"
#[store.file]
#base = "/var/data/geotiles"
"#;
        toml.to_string()
    }
}

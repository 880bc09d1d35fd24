//
// Copyright (c) Pirmin Kalberer. All rights reserved.
// Licensed under the MIT License. See LICENSE file in the project root for full license information.
//

use crate::store::store::TileStore;
use std::fs::{self, File};
use std::io::{self, Read, Write};
use std::path::Path;

/// Filesystem-backed tile store
#[derive(Clone)]
pub struct Filestore {
    pub basepath: String,
}

impl Filestore {
    fn fullpath(&self, path: &str) -> String {
        format!("{}/{}", self.basepath, path)
    }

    fn collect_entries(
        &self,
        dir: &Path,
        recursive: bool,
        entries: &mut Vec<String>,
    ) -> Result<(), io::Error> {
        for entry in fs::read_dir(dir)? {
            let path = entry?.path();
            if path.is_dir() {
                if recursive {
                    self.collect_entries(&path, recursive, entries)?;
                }
            } else if let Ok(rel) = path.strip_prefix(&self.basepath) {
                entries.push(rel.to_string_lossy().into_owned());
            }
        }
        Ok(())
    }
}

impl TileStore for Filestore {
    fn info(&self) -> String {
        format!("Tile directory: {}", self.basepath)
    }
    fn list(&self, recursive: bool) -> Result<Vec<String>, io::Error> {
        let mut entries = Vec::new();
        self.collect_entries(Path::new(&self.basepath), recursive, &mut entries)?;
        Ok(entries)
    }
    fn read<F>(&self, path: &str, mut read: F) -> bool
    where
        F: FnMut(&mut dyn Read),
    {
        let fullpath = self.fullpath(path);
        debug!("Filestore.read {}", fullpath);
        match File::open(&fullpath) {
            Ok(mut f) => {
                read(&mut f);
                true
            }
            Err(_e) => false,
        }
    }
    fn write(&self, path: &str, obj: &[u8]) -> Result<(), io::Error> {
        let fullpath = self.fullpath(path);
        debug!("Filestore.write {}", fullpath);
        let p = Path::new(&fullpath);
        if let Some(parent) = p.parent() {
            fs::create_dir_all(parent)?;
        }
        let mut f = File::create(&fullpath)?;
        f.write_all(obj)
    }
    fn exists(&self, path: &str) -> bool {
        Path::new(&self.fullpath(path)).exists()
    }
}

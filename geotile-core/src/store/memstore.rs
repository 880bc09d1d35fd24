//
// Copyright (c) Pirmin Kalberer. All rights reserved.
// Licensed under the MIT License. See LICENSE file in the project root for full license information.
//

use crate::store::store::TileStore;
use std::collections::BTreeMap;
use std::io::{self, Read};
use std::sync::{Arc, Mutex};

/// In-memory tile store for catalog tests and dry runs
#[derive(Clone, Default)]
pub struct Memstore {
    files: Arc<Mutex<BTreeMap<String, Vec<u8>>>>,
}

impl Memstore {
    pub fn new() -> Memstore {
        Memstore::default()
    }
}

impl TileStore for Memstore {
    fn info(&self) -> String {
        "In-memory tile store".to_string()
    }
    fn list(&self, _recursive: bool) -> Result<Vec<String>, io::Error> {
        Ok(self.files.lock().unwrap().keys().cloned().collect())
    }
    fn read<F>(&self, path: &str, mut read: F) -> bool
    where
        F: FnMut(&mut dyn Read),
    {
        match self.files.lock().unwrap().get(path) {
            Some(bytes) => {
                let mut slice: &[u8] = bytes.as_slice();
                read(&mut slice);
                true
            }
            None => false,
        }
    }
    fn write(&self, path: &str, obj: &[u8]) -> Result<(), io::Error> {
        self.files
            .lock()
            .unwrap()
            .insert(path.to_string(), obj.to_vec());
        Ok(())
    }
    fn exists(&self, path: &str) -> bool {
        self.files.lock().unwrap().contains_key(path)
    }
}

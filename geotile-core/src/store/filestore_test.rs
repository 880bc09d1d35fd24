//
// Copyright (c) Pirmin Kalberer. All rights reserved.
// Licensed under the MIT License. See LICENSE file in the project root for full license information.
//

use crate::store::filestore::Filestore;
use crate::store::store::TileStore;
use std::fs;
use std::io::Read;
use std::path::Path;

#[test]
fn test_file_store() {
    use std::env;

    let mut dir = env::temp_dir();
    dir.push("geotile_test_store");
    let basepath = format!("{}", &dir.display());
    let _ = fs::remove_dir_all(&basepath);

    let store = Filestore {
        basepath: basepath.clone(),
    };
    let path = "lat[+60+62]lon[-146-144].json";
    let fullpath = format!("{}/{}", store.basepath, path);
    let obj = "0123456789";

    // Store miss
    assert_eq!(store.read(path, |_| {}), false);
    assert!(!store.exists(path));

    // Write into the store
    let _ = store.write(path, obj.as_bytes());
    assert!(Path::new(&fullpath).exists());
    assert!(store.exists(path));

    // Store hit
    assert_eq!(store.read(path, |_| {}), true);

    // Read from the store
    let mut s = String::new();
    store.read(path, |f| {
        let _ = f.read_to_string(&mut s);
    });
    assert_eq!(&s, "0123456789");

    // Listing
    assert_eq!(store.list(true).unwrap(), vec![path.to_string()]);
}

#[test]
fn test_file_store_recursive_listing() {
    use std::env;

    let mut dir = env::temp_dir();
    dir.push("geotile_test_store_recursive");
    let basepath = format!("{}", &dir.display());
    let _ = fs::remove_dir_all(&basepath);

    let store = Filestore {
        basepath: basepath.clone(),
    };
    let top = "lat[+60+62]lon[-146-144].json";
    let nested = "2019/lat[+62+64]lon[-146-144].json";
    store.write(top, b"{}").unwrap();
    store.write(nested, b"{}").unwrap();

    let mut entries = store.list(true).unwrap();
    entries.sort();
    assert_eq!(entries, vec![nested.to_string(), top.to_string()]);

    let entries = store.list(false).unwrap();
    assert_eq!(entries, vec![top.to_string()]);
}

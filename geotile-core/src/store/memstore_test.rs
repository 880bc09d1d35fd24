//
// Copyright (c) Pirmin Kalberer. All rights reserved.
// Licensed under the MIT License. See LICENSE file in the project root for full license information.
//

use crate::store::memstore::Memstore;
use crate::store::store::TileStore;
use std::io::Read;

#[test]
fn test_mem_store() {
    let store = Memstore::new();
    let path = "lat[+60+62]lon[-146-144].json";

    assert_eq!(store.read(path, |_| {}), false);
    assert!(!store.exists(path));

    store.write(path, b"0123456789").unwrap();
    assert!(store.exists(path));

    let mut s = String::new();
    store.read(path, |f| {
        let _ = f.read_to_string(&mut s);
    });
    assert_eq!(&s, "0123456789");
}

#[test]
fn test_mem_store_lists_sorted() {
    let store = Memstore::new();
    store.write("lat[+62+64]lon[-146-144].json", b"{}").unwrap();
    store.write("lat[+60+62]lon[-146-144].json", b"{}").unwrap();
    assert_eq!(
        store.list(true).unwrap(),
        vec![
            "lat[+60+62]lon[-146-144].json".to_string(),
            "lat[+62+64]lon[-146-144].json".to_string(),
        ]
    );
}

#[test]
fn test_mem_store_clones_share_content() {
    let store = Memstore::new();
    let clone = store.clone();
    store.write("lat[+60+62]lon[-146-144].json", b"{}").unwrap();
    assert!(clone.exists("lat[+60+62]lon[-146-144].json"));
}

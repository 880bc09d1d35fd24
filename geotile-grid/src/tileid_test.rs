//
// Copyright (c) Pirmin Kalberer. All rights reserved.
// Licensed under the MIT License. See LICENSE file in the project root for full license information.
//

use crate::error::GridError;
use crate::extent::Extent;
use crate::tileid::{decode, encode, id_from_filename};

#[test]
fn test_encode_integer_width() {
    let extent = Extent {
        minx: -146.0,
        miny: 60.0,
        maxx: -144.0,
        maxy: 62.0,
    };
    assert_eq!(encode(&extent), "lat[+60+62]lon[-146-144]");
}

#[test]
fn test_encode_pads_small_values() {
    let extent = Extent {
        minx: 0.0,
        miny: -2.0,
        maxx: 2.0,
        maxy: 0.0,
    };
    assert_eq!(encode(&extent), "lat[-02+00]lon[+000+002]");
}

#[test]
fn test_encode_fractional_width() {
    // half-width 0.75° needs two fractional digits
    let extent = Extent {
        minx: -180.0,
        miny: -90.0,
        maxx: -178.5,
        maxy: -88.5,
    };
    assert_eq!(encode(&extent), "lat[-90.00-88.50]lon[-180.00-178.50]");
}

#[test]
fn test_decode() {
    assert_eq!(
        decode("lat[+60+62]lon[-146-144]").unwrap(),
        Extent {
            minx: -146.0,
            miny: 60.0,
            maxx: -144.0,
            maxy: 62.0,
        }
    );
    assert_eq!(
        decode("lat[-90.00-88.50]lon[-180.00-178.50]").unwrap(),
        Extent {
            minx: -180.0,
            miny: -90.0,
            maxx: -178.5,
            maxy: -88.5,
        }
    );
}

#[test]
fn test_decode_rejects_malformed() {
    let malformed = [
        "",
        "lat[6062]lon[-146-144]",
        "lat[+60+62]lon[-146]",
        "lat[+060+062]lon[-146-144]",
        "lat[+60+62]lon[-46-44]",
        "LAT[+60+62]lon[-146-144]",
        "lat[+60+62]lon[-146-144].json",
    ];
    for id in &malformed {
        assert!(
            matches!(decode(id), Err(GridError::MalformedTileId(_))),
            "`{}` unexpectedly decoded",
            id
        );
    }
}

#[test]
fn test_decode_rejects_inverted_bounds() {
    assert!(matches!(
        decode("lat[+62+60]lon[-146-144]"),
        Err(GridError::MalformedTileId(_))
    ));
}

#[test]
fn test_id_from_filename() {
    assert_eq!(
        id_from_filename("/a/b/lat[+60+62]lon[-146-144].ext").unwrap(),
        "lat[+60+62]lon[-146-144]"
    );
    assert_eq!(
        id_from_filename("lat[-90-88]lon[-180-178].atl06.json").unwrap(),
        "lat[-90-88]lon[-180-178]"
    );
}

#[test]
fn test_id_from_filename_requires_two_brackets() {
    assert!(matches!(
        id_from_filename("/a/b/points.json"),
        Err(GridError::InvalidTileFilename(_))
    ));
    assert!(matches!(
        id_from_filename("lat[+60+62]lon.json"),
        Err(GridError::InvalidTileFilename(_))
    ));
}

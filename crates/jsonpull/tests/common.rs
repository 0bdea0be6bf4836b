#![allow(missing_docs)]

/// A document exercising the whole supported grammar: every scalar kind,
/// nested containers both ways, empty containers, an empty key, a raw
/// escaped quote, and insignificant whitespace in awkward places.
pub const KITCHEN_SINK: &[u8] = br#"
{
    "id": 1009,
    "active": true,
    "parent": null,
    "label": "a \"quoted\" phrase",
    "": "empty key",
    "counts": [0, 007, 12345678901234567890123456789],
    "matrix": [[1, 2], [3, 4], []],
    "nested": {
        "inner": {
            "flag": false,
            "items": ["x", {"y": []}]
        }
    },
    "empty_object": {},
    "empty_array": []
}
"#;

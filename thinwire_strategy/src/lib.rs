use bytes::Bytes;
use proptest::prelude::*;
use thinwire::{map::Map, number::Number, Value};

/// arbitrary Bytes for use with proptest
pub fn arb_bs() -> impl Strategy<Value = Bytes> {
    ".*".prop_map(|s| -> Bytes { Bytes::from(s) })
}

/// arbitrary map key for use with proptest
pub fn arb_key() -> impl Strategy<Value = Value> {
    prop_oneof![
        ".*".prop_map(Value::from),
        any::<i32>().prop_map(Value::from),
        any::<i64>().prop_map(Value::from),
    ]
}

/// arbitrary Value for use with proptest
pub fn arb_value() -> impl Strategy<Value = Value> {
    let leaf = prop_oneof![
        Just(Value::Null),
        // misc
        any::<bool>().prop_map(Value::Bool),
        ".*".prop_map(Value::from),
        // integers
        // 8-bit
        any::<u8>().prop_map(Value::from),
        any::<i8>().prop_map(Value::from),
        // 16-bit
        any::<u16>().prop_map(Value::from),
        any::<i16>().prop_map(Value::from),
        // 32-bit
        any::<u32>().prop_map(Value::from),
        any::<i32>().prop_map(Value::from),
        // 64-bit
        any::<i64>().prop_map(Value::from),
        // forced wire kinds
        any::<i32>().prop_map(|n| Value::from(Number::Long(i64::from(n)))),
        any::<f32>().prop_map(|f| Value::from(Number::Float(f))),
        // floats
        any::<f32>().prop_map(Value::from),
        any::<f64>().prop_map(Value::from),
        // bytestrings
        arb_bs().prop_map(Value::from),
    ];
    leaf.prop_recursive(
        20, // max depth
        20, // max nodes
        20, // max items per collection
        |inner| {
            prop_oneof![
                prop::collection::vec(inner.clone(), 0..10).prop_map(Value::from),
                prop::collection::vec((arb_key(), inner), 0..10).prop_map(|entries| {
                    let mut map = Map::new();
                    for (k, v) in entries {
                        map.insert(k, v).unwrap();
                    }
                    Value::from(map)
                })
            ]
        },
    )
}

use thinwire::prelude::*;

#[test]
fn nested_map_survives_the_wire() {
    let mut inner = List::new();
    inner.push(true);
    inner.push(Value::Null);
    inner.push("x");

    let mut map = Map::new();
    map.insert("a", 1).unwrap();
    map.insert("b", inner.clone()).unwrap();

    let enc = encode_full(&Value::from(map)).unwrap();
    let dec: Value = decode_full(enc).unwrap();

    let map = dec.into_map().unwrap();
    assert_eq!(map.len(), 2);

    let keys: Vec<&Value> = map.keys().collect();
    assert_eq!(keys, [&Value::from("a"), &Value::from("b")]);

    assert_eq!(map.get(&Value::from("a")), Some(&Value::I32(1)));
    assert_eq!(map.get(&Value::from("b")), Some(&Value::List(inner)));
}

#[test]
fn size_class_grows_with_the_payload() {
    let empty = encode_full(&Value::List(List::new())).unwrap();
    assert_eq!(empty, vec![0xa0]);

    let mut list = List::new();
    list.push("w".repeat(300));
    let enc = encode_full(&Value::from(list)).unwrap();

    // one element, so the count fits in a single byte
    assert_eq!(enc[0], 0xa1);
    assert_eq!(enc[1], 1);
    // the string inside needs two length bytes
    assert_eq!(enc[2], 0x82);
    assert_eq!(enc[3..5], [0x2c, 0x01]);
    assert_eq!(enc.len(), 5 + 300);

    let dec: Value = decode_full(enc).unwrap();
    let list = dec.into_list().unwrap();
    assert_eq!(list.get(0).unwrap().to_str().unwrap().len(), 300);
}

#[test]
fn floats_round_trip_bit_patterns() {
    let cases = vec![
        Value::from(1.5f64),
        Value::from(-0f64),
        // NaN with a payload
        Value::from(f64::from_bits(0x7ff8_0000_0000_0001)),
        Value::from(-0f32),
        Value::from(f32::from_bits(0x7fc0_0001)),
    ];

    for v in cases {
        let enc = encode_full(&v).unwrap();
        let dec: Value = decode_full(enc).unwrap();
        assert_eq!(dec, v);
    }
}

#[test]
fn integer_boundaries_survive_the_wire() {
    let cases = [
        0i64,
        -1,
        i64::from(i32::max_value()),
        i64::from(i32::min_value()),
        i64::max_value(),
        i64::min_value(),
    ];

    for &i in &cases {
        let enc = encode_full(&i).unwrap();
        let dec: i64 = decode_full(enc).unwrap();
        assert_eq!(dec, i);
    }
}

#[test]
fn empty_values_take_one_byte_each() {
    let cases = vec![
        Value::from(""),
        Value::from(Bytes::new()),
        Value::from(List::new()),
        Value::from(Map::new()),
    ];

    for v in cases {
        let enc = encode_full(&v).unwrap();
        assert_eq!(enc.len(), 1);
        let dec: Value = decode_full(enc).unwrap();
        assert_eq!(dec, v);
    }
}

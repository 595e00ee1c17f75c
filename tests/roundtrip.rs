use proptest::prelude::*;
use thinwire::encoding::*;
use thinwire_strategy::*;

proptest! {
    #![proptest_config(ProptestConfig { cases: 1_000, ..ProptestConfig::default() })]

    #[test]
    fn encode_decode(v in arb_value()) {
        let enc = encode_full(&v).unwrap();

        let dec = decode_full(&enc).ok();

        if dec != Some(v.clone()) {
            panic!(format!("Tried encoding\n {:?}\n as \n{:x?}\n got \n{:?}\n", v, enc, dec))
        }
    }

    #[test]
    fn encode_decode_i64(i in proptest::num::i64::ANY) {
        let enc = encode_full(&i).unwrap();

        let dec = decode_full(&enc).ok();

        if dec != Some(i) {
            panic!(format!("Tried encoding\n {:?}\n as \n{:x?}\n got \n{:?}\n", i, enc, dec))
        }
    }
}

use proptest::prelude::*;

use cosmos_amino::{decode_signature, encode_secp256k1_signature, AminoError, StdSignature};
use cosmos_primitives::pubkey::{decode_secp256k1_pubkey, PubKey, PubkeyType};

fn compressed_pubkey() -> impl Strategy<Value = Vec<u8>> {
    (
        prop_oneof![Just(0x02u8), Just(0x03u8)],
        prop::array::uniform32(any::<u8>()),
    )
        .prop_map(|(prefix, x)| {
            let mut key = vec![prefix];
            key.extend_from_slice(&x);
            key
        })
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(128))]

    #[test]
    fn envelope_roundtrip(
        pubkey in compressed_pubkey(),
        signature in prop::collection::vec(any::<u8>(), 64),
    ) {
        let envelope = encode_secp256k1_signature(&pubkey, &signature).unwrap();
        let decoded = decode_signature(&envelope).unwrap();
        prop_assert_eq!(&decoded.signature, &signature);
        prop_assert_eq!(decoded.pubkey, decode_secp256k1_pubkey(&envelope.pub_key).unwrap());

        let parsed = StdSignature::from_json(&envelope.to_json().unwrap()).unwrap();
        prop_assert_eq!(parsed, envelope);
    }

    #[test]
    fn encode_rejects_any_other_length(
        pubkey in compressed_pubkey(),
        signature in prop::collection::vec(any::<u8>(), 0..200)
            .prop_filter("not 64 bytes", |s| s.len() != 64),
    ) {
        let is_length_error = matches!(
            encode_secp256k1_signature(&pubkey, &signature),
            Err(AminoError::InvalidSignatureLength { expected: 64, .. })
        );
        prop_assert!(is_length_error);
    }

    #[test]
    fn decode_rejects_any_other_tag(tag in "\\PC*") {
        prop_assume!(tag != PubkeyType::Secp256k1.as_str());
        let envelope = StdSignature {
            pub_key: PubKey { key_type: tag.clone(), value: "AA==".to_string() },
            signature: "AA==".to_string(),
        };
        match decode_signature(&envelope) {
            Err(AminoError::UnsupportedPubkeyType(got)) => prop_assert_eq!(got, tag),
            other => prop_assert!(false, "unexpected {:?}", other),
        }
    }
}

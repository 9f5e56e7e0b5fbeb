use crate::{AlphabetRegistry, Codec, DecodeError, Z85, decode, encode};
use rand::rngs::StdRng;
use rand::{RngCore, SeedableRng};

fn get_codec(name: &str) -> Codec {
    let registry = AlphabetRegistry::load_default().unwrap();
    registry.codec(name).unwrap()
}

fn random_bytes(len: usize, seed: u64) -> Vec<u8> {
    let mut data = vec![0u8; len];
    StdRng::seed_from_u64(seed).fill_bytes(&mut data);
    data
}

#[test]
fn test_z85_hello_world() {
    let data = [0x86, 0x4f, 0xd2, 0x6f, 0xb5, 0x59, 0xf7, 0x5b];
    assert_eq!(encode(&data), "HelloWorld");
    assert_eq!(decode("HelloWorld").unwrap(), data);
}

#[test]
fn test_adobe85_max_quartet() {
    let codec = get_codec("adobe85");
    assert_eq!(codec.encode(&[0xff, 0xff, 0xff, 0xff]), "s8W-!");
    assert_eq!(codec.decode("s8W-!").unwrap(), vec![0xff; 4]);
}

#[test]
fn test_adobe85_zero_quartet() {
    // No `z` contraction: zeros spell out as five `!`.
    let codec = get_codec("adobe85");
    assert_eq!(codec.encode(&[0; 4]), "!!!!!");
}

#[test]
fn test_adobe85_illegal_sequence() {
    let codec = get_codec("adobe85");
    match codec.decode("s8W-$") {
        Err(DecodeError::IllegalSequence { group, value }) => {
            assert_eq!(group, "s8W-$");
            assert_eq!(value, 0x1_0000_0002);
        }
        other => panic!("expected IllegalSequence, got {:?}", other),
    }
}

#[test]
fn test_illegal_sequence_in_later_group() {
    let codec = get_codec("adobe85");
    let err = codec.decode("!!!!!s8W-$").unwrap_err();
    assert!(matches!(err, DecodeError::IllegalSequence { .. }));
}

#[test]
fn test_overflow_only_for_large_radix() {
    // With 95 symbols the top digit alone can exceed 32 bits.
    let codec = get_codec("ascii95");
    let last = codec.alphabet().chars().last().unwrap();
    let text: String = std::iter::repeat_n(last, 5).collect();
    assert!(matches!(
        codec.decode(&text),
        Err(DecodeError::IllegalSequence { .. })
    ));
}

#[test]
fn test_illegal_character_position() {
    let err = decode("HelloWorld0123\u{e9}").unwrap_err();
    assert_eq!(
        err,
        DecodeError::IllegalCharacter {
            char: '\u{e9}',
            ordinal: 0xe9,
            position: 14,
        }
    );
}

#[test]
fn test_illegal_character_in_alphabet_gap() {
    // Space is printable but not part of Z85.
    let err = decode("Hello World").unwrap_err();
    assert_eq!(err, DecodeError::illegal_character(' ', 5));
}

#[test]
fn test_encode_decode_empty() {
    for name in ["z85", "adobe85", "w92", "ascii95"] {
        let codec = get_codec(name);
        assert_eq!(codec.encode(b""), "");
        assert_eq!(codec.decode("").unwrap(), Vec::<u8>::new());
    }
}

#[test]
fn test_roundtrip_every_length() {
    let data = random_bytes(64, 42);
    for name in ["z85", "adobe85", "w92", "ascii95"] {
        let codec = get_codec(name);
        for len in 0..=data.len() {
            let encoded = codec.encode(&data[..len]);
            assert_eq!(
                codec.decode(&encoded).unwrap(),
                &data[..len],
                "{} failed at length {}",
                name,
                len
            );
        }
    }
}

#[test]
fn test_roundtrip_large_random() {
    let data = random_bytes(4099, 1024);
    let encoded = Z85.encode(&data);
    assert_eq!(Z85.decode(&encoded).unwrap(), data);
}

#[test]
fn test_roundtrip_extreme_tails() {
    let codec = get_codec("ascii95");
    for tail in 1..4 {
        for fill in [0x00, 0xff] {
            let data = vec![fill; 8 + tail];
            let encoded = codec.encode(&data);
            assert_eq!(codec.decode(&encoded).unwrap(), data);
        }
    }
}

#[test]
fn test_output_length() {
    for len in 0..20usize {
        let expected = len / 4 * 5 + if len % 4 == 0 { 0 } else { len % 4 + 1 };
        assert_eq!(encode(&vec![0xa5; len]).len(), expected);
    }
}

#[test]
fn test_tail_trimming() {
    let data = random_bytes(7, 3);
    let full = encode(&data[..4]);
    for tail in 1..4 {
        let encoded = encode(&data[..4 + tail]);
        assert!(encoded.starts_with(&full));
        assert_eq!(encoded.len() - full.len(), tail + 1);
        assert_eq!(decode(&encoded).unwrap(), &data[..4 + tail]);
    }
}

#[test]
fn test_output_uses_only_alphabet() {
    let codec = get_codec("w92");
    let encoded = codec.encode(&random_bytes(256, 9));
    assert!(encoded.chars().all(|c| codec.alphabet().contains(c)));
}

#[test]
fn test_custom_alphabet() {
    let reversed: String = crate::Z85_ALPHABET.chars().rev().collect();
    let codec = Codec::new(reversed.chars()).unwrap();
    let data = b"custom alphabets";
    let encoded = codec.encode(data);
    assert_ne!(encoded, encode(data));
    assert_eq!(codec.decode(&encoded).unwrap(), data);
}

#[test]
fn test_roundtrip_every_radix() {
    for radix in crate::MIN_RADIX..=crate::MAX_RADIX {
        let codec = Codec::new((32u8..).take(radix).map(char::from)).unwrap();
        for seed in 0..200 {
            for len in 0..=12 {
                let data = random_bytes(len, seed);
                assert_eq!(codec.decode(&codec.encode(&data)).unwrap(), data);
            }
        }
        for fill in [0x00, 0xff, 0xfe, 0x80] {
            for len in 0..=12 {
                let data = vec![fill; len];
                assert_eq!(
                    codec.decode(&codec.encode(&data)).unwrap(),
                    data,
                    "radix {} fill {:#x} length {}",
                    radix,
                    fill,
                    len
                );
            }
        }
    }
}

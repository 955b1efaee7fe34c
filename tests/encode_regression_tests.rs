//! Integration tests for QR code encoding regression testing
//!
//! These tests pin whole symbols and the structural guarantees every encoded
//! symbol must meet: finder/timing/dark-module geometry, both format copies,
//! version information, mask choice and capacity errors.

use rust_qr_encoder::encoder::format::{
    FORMAT_INFO_BITS, format_word, split_position, top_left_position,
};
use rust_qr_encoder::encoder::tables::data_codewords;
use rust_qr_encoder::encoder::version::{VERSION_INFO_BITS, top_right_position, version_word};
use rust_qr_encoder::{
    BitBuffer, ECLevel, EncodeRequest, EncoderConfig, ErrorKind, MaskPattern, QrCode, QrEncoder,
    QrError, Version,
};

const HELLO_WORLD_1M: [u8; 16] = [
    32, 91, 11, 120, 209, 114, 220, 77, 67, 64, 236, 17, 236, 17, 236, 17,
];

const HELLO_WORLD_1M_SYMBOL: [&str; 21] = [
    "#######...#.#.#######",
    "#.....#.###...#.....#",
    "#.###.#...#.#.#.###.#",
    "#.###.#...#.#.#.###.#",
    "#.###.#.#.###.#.###.#",
    "#.....#..###..#.....#",
    "#######.#.#.#.#######",
    ".....................",
    "#.#.#.#..#..#...#..#.",
    ".####...#..#....#...#",
    "...#######.#..#.##...",
    "####.#.##..###.#.###.",
    ".#..####.#.#..###.#.#",
    "........#.#...#...#.#",
    "#######.....#..#.##..",
    "#.....#..##...##.#...",
    "#.###.#.##..#.#######",
    "#.###.#...##.#.#...#.",
    "#.###.#.####.###.#..#",
    "#.....#....###...#.##",
    "#######.##.#.###....#",
];

fn v(n: u8) -> Version {
    Version::new(n).unwrap()
}

fn encoder() -> QrEncoder {
    QrEncoder::new(EncoderConfig::default())
}

fn sample_data(version: Version, level: ECLevel) -> Vec<u8> {
    (0..data_codewords(version, level))
        .map(|i| (i * 31 % 256) as u8)
        .collect()
}

fn assert_finder(code: &QrCode, x0: usize, y0: usize) {
    for dy in 0..7 {
        for dx in 0..7 {
            let edge = dx == 0 || dx == 6 || dy == 0 || dy == 6;
            let core = (2..=4).contains(&dx) && (2..=4).contains(&dy);
            assert_eq!(
                code.get(x0 + dx, y0 + dy),
                edge || core,
                "finder at ({x0}, {y0}) offset ({dx}, {dy})"
            );
        }
    }
}

fn assert_structure(code: &QrCode) {
    let size = code.size();
    assert_eq!(size, code.version.size());

    assert_finder(code, 0, 0);
    assert_finder(code, size - 7, 0);
    assert_finder(code, 0, size - 7);

    // Separators
    for i in 0..8 {
        assert!(!code.get(7, i) && !code.get(i, 7));
        assert!(!code.get(size - 8, i) && !code.get(size - 1 - i, 7));
        assert!(!code.get(7, size - 1 - i) && !code.get(i, size - 8));
    }

    for i in 8..size - 8 {
        assert_eq!(code.get(i, 6), i % 2 == 0, "timing row at {i}");
        assert_eq!(code.get(6, i), i % 2 == 0, "timing column at {i}");
    }

    assert!(code.get(8, size - 8), "dark module");

    let expected = format_word(code.error_correction, code.mask_pattern);
    let mut top_left = 0u32;
    let mut split = 0u32;
    for i in 0..FORMAT_INFO_BITS {
        let a = top_left_position(i);
        let b = split_position(i, size);
        top_left = (top_left << 1) | code.get(a.x, a.y) as u32;
        split = (split << 1) | code.get(b.x, b.y) as u32;
    }
    assert_eq!(top_left, expected, "top-left format copy");
    assert_eq!(split, expected, "split format copy");
}

#[test]
fn test_hello_world_1m_symbol() {
    let code = encoder()
        .encode_data(&HELLO_WORLD_1M, v(1), ECLevel::M)
        .unwrap();
    assert_eq!(code.mask_pattern, MaskPattern::Pattern0);
    for (y, row) in HELLO_WORLD_1M_SYMBOL.iter().enumerate() {
        let actual: String = (0..21)
            .map(|x| if code.get(x, y) { '#' } else { '.' })
            .collect();
        assert_eq!(&actual, row, "row {y}");
    }
}

#[test]
fn test_encode_stream_matches_encode_data() {
    let mut stream = BitBuffer::from_bytes(&HELLO_WORLD_1M);
    for &ecc in &[196u8, 35, 39, 119, 235, 215, 231, 226, 93, 23] {
        stream.append_bits(ecc as u32, 8).unwrap();
    }
    let from_stream = encoder().encode_stream(&stream, v(1), ECLevel::M).unwrap();
    let from_data = encoder()
        .encode_data(&HELLO_WORLD_1M, v(1), ECLevel::M)
        .unwrap();
    assert_eq!(from_stream, from_data);
}

#[test]
fn test_selected_masks() {
    let cases = [
        (2u8, ECLevel::H, MaskPattern::Pattern5),
        (7, ECLevel::L, MaskPattern::Pattern3),
        (10, ECLevel::Q, MaskPattern::Pattern7),
    ];
    for (n, level, mask) in cases {
        let code = encoder()
            .encode_data(&sample_data(v(n), level), v(n), level)
            .unwrap();
        assert_eq!(code.mask_pattern, mask, "version {n} level {level}");
    }
}

#[test]
fn test_structure_across_versions() {
    for n in [1u8, 2, 6, 7, 13, 21, 32, 40] {
        for level in ECLevel::ALL {
            let code = encoder()
                .encode_data(&sample_data(v(n), level), v(n), level)
                .unwrap();
            assert_structure(&code);
        }
    }
}

#[test]
fn test_version_information_blocks() {
    for n in [7u8, 8, 21, 40] {
        let code = encoder()
            .encode_data(&sample_data(v(n), ECLevel::M), v(n), ECLevel::M)
            .unwrap();
        let word = version_word(v(n)).unwrap();
        for k in 0..VERSION_INFO_BITS {
            let p = top_right_position(k, code.size());
            let bit = (word >> k) & 1 == 1;
            assert_eq!(code.get(p.x, p.y), bit, "v{n} top-right bit {k}");
            assert_eq!(code.get(p.y, p.x), bit, "v{n} bottom-left bit {k}");
        }
    }
}

#[test]
fn test_forced_mask_is_used() {
    for mask in MaskPattern::ALL {
        let code = QrEncoder::new(EncoderConfig::default().with_forced_mask(mask))
            .encode_data(&HELLO_WORLD_1M, v(1), ECLevel::M)
            .unwrap();
        assert_eq!(code.mask_pattern, mask);
        assert_structure(&code);
    }
}

#[test]
fn test_capacity_errors() {
    let too_many = encoder()
        .encode_data(&[0u8; 17], v(1), ECLevel::M)
        .unwrap_err();
    assert_eq!(too_many.kind(), ErrorKind::Capacity);

    let short = BitBuffer::from_bytes(&[0u8; 43]);
    let err = encoder().encode_stream(&short, v(2), ECLevel::L).unwrap_err();
    assert!(matches!(
        err,
        QrError::StreamUnderfilled {
            version: 2,
            required: 352,
            actual: 344
        }
    ));

    // 44 codewords + 7 remainder bits fit, one more bit does not
    let mut full = BitBuffer::from_bytes(&[0u8; 44]);
    full.extend(std::iter::repeat_n(false, 7));
    assert!(encoder().encode_stream(&full, v(2), ECLevel::L).is_ok());
    full.append_bit(false);
    let err = encoder().encode_stream(&full, v(2), ECLevel::L).unwrap_err();
    assert!(matches!(err, QrError::StreamOverflow { capacity: 359, .. }));
}

#[test]
fn test_batch_equals_sequential() {
    let requests: Vec<EncodeRequest> = (1..=12u8)
        .map(|n| {
            let level = ECLevel::ALL[n as usize % 4];
            EncodeRequest::new(sample_data(v(n), level), v(n), level)
        })
        .chain(std::iter::once(EncodeRequest::new(vec![1, 2, 3], v(3), ECLevel::H)))
        .collect();
    let batch = encoder().encode_batch(&requests);
    assert_eq!(batch.len(), requests.len());
    for (req, result) in requests.iter().zip(batch) {
        let sequential = encoder().encode_data(&req.data, req.version, req.ec_level);
        match (result, sequential) {
            (Ok(a), Ok(b)) => assert_eq!(a, b),
            (Err(a), Err(b)) => assert_eq!(a.to_string(), b.to_string()),
            _ => panic!("batch and sequential disagree for version {}", req.version),
        }
    }
}

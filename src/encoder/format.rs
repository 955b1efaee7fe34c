/// Format information: error correction level + mask pattern, BCH(15,5)
use super::bch::{FORMAT_INFO_MASK, FORMAT_INFO_POLY, calculate_bch};
use crate::error::{QrError, Result};
use crate::models::{BitBuffer, ECLevel, MaskPattern, MatrixPoint, ModuleMatrix};

/// Bits in the format information field
pub const FORMAT_INFO_BITS: usize = 15;

/// 15-bit masked format codeword as an integer (bit 14 is transmitted first)
pub fn format_word(ec_level: ECLevel, mask: MaskPattern) -> u32 {
    let payload = (ec_level.indicator_bits() << 3) | mask.id() as u32;
    let codeword = (payload << 10) | calculate_bch(payload, FORMAT_INFO_POLY);
    codeword ^ FORMAT_INFO_MASK
}

/// Format codeword as a bit sequence, index 0 = most significant bit
pub fn format_bits(ec_level: ECLevel, mask: MaskPattern) -> Result<BitBuffer> {
    let mut bits = BitBuffer::new();
    bits.append_bits(format_word(ec_level, mask), FORMAT_INFO_BITS)?;
    if bits.len() != FORMAT_INFO_BITS {
        return Err(QrError::FieldWidth {
            field: "format information",
            expected: FORMAT_INFO_BITS,
            actual: bits.len(),
        });
    }
    Ok(bits)
}

/// Location of bit `index` in the copy around the top-left finder
///
/// Runs along row 8 left to right, then up column 8, stepping over the
/// timing pattern at column 6 and row 6.
pub fn top_left_position(index: usize) -> MatrixPoint {
    match index {
        0..=5 => MatrixPoint::new(index, 8),
        6 => MatrixPoint::new(7, 8),
        7 => MatrixPoint::new(8, 8),
        8 => MatrixPoint::new(8, 7),
        _ => MatrixPoint::new(8, 14 - index),
    }
}

/// Location of bit `index` in the split copy (bottom-left column, top-right row)
pub fn split_position(index: usize, width: usize) -> MatrixPoint {
    if index < 7 {
        MatrixPoint::new(8, width - 1 - index)
    } else {
        MatrixPoint::new(width - 8 + (index - 7), 8)
    }
}

/// Every module covered by format information (both copies)
pub fn format_positions(width: usize) -> impl Iterator<Item = MatrixPoint> {
    (0..FORMAT_INFO_BITS)
        .flat_map(move |i| [top_left_position(i), split_position(i, width)])
}

/// Write the format codeword into both copies as function modules
pub fn embed_format_information(
    matrix: &mut ModuleMatrix,
    ec_level: ECLevel,
    mask: MaskPattern,
) -> Result<()> {
    let bits = format_bits(ec_level, mask)?;
    let width = matrix.width();
    for (index, bit) in bits.iter().enumerate() {
        matrix.set_function_point(top_left_position(index), bit)?;
        matrix.set_function_point(split_position(index, width), bit)?;
    }
    Ok(())
}

/// Read the top-left copy back as an integer (first bit most significant)
pub fn read_format_word(matrix: &ModuleMatrix) -> Result<u32> {
    (0..FORMAT_INFO_BITS).try_fold(0u32, |acc, i| {
        Ok((acc << 1) | matrix.get_point(top_left_position(i))? as u32)
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{ModuleStatus, Version};

    // ISO/IEC 18004 Table C.1, masks 0-7 per level
    const FORMAT_TABLE: [(ECLevel, [u32; 8]); 4] = [
        (
            ECLevel::L,
            [
                0b111011111000100,
                0b111001011110011,
                0b111110110101010,
                0b111100010011101,
                0b110011000101111,
                0b110001100011000,
                0b110110001000001,
                0b110100101110110,
            ],
        ),
        (
            ECLevel::M,
            [
                0b101010000010010,
                0b101000100100101,
                0b101111001111100,
                0b101101101001011,
                0b100010111111001,
                0b100000011001110,
                0b100111110010111,
                0b100101010100000,
            ],
        ),
        (
            ECLevel::Q,
            [
                0b011010101011111,
                0b011000001101000,
                0b011111100110001,
                0b011101000000110,
                0b010010010110100,
                0b010000110000011,
                0b010111011011010,
                0b010101111101101,
            ],
        ),
        (
            ECLevel::H,
            [
                0b001011010001001,
                0b001001110111110,
                0b001110011100111,
                0b001100111010000,
                0b000011101100010,
                0b000001001010101,
                0b000110100001100,
                0b000100000111011,
            ],
        ),
    ];

    #[test]
    fn test_format_table() {
        for (level, row) in FORMAT_TABLE {
            for (mask, expected) in MaskPattern::ALL.into_iter().zip(row) {
                assert_eq!(format_word(level, mask), expected, "{level} mask {mask}");
            }
        }
    }

    #[test]
    fn test_level_m_mask_0_bits() {
        let bits = format_bits(ECLevel::M, MaskPattern::Pattern0).unwrap();
        let text: String = bits.iter().map(|b| if b { '1' } else { '0' }).collect();
        assert_eq!(text, "101010000010010");
    }

    #[test]
    fn test_positions_skip_timing() {
        let width = 21;
        let points: Vec<MatrixPoint> = format_positions(width).collect();
        assert_eq!(points.len(), 30);
        assert!(points.iter().all(|p| p.x != 6 && p.y != 6));
        assert!(points.iter().all(|p| p.x < width && p.y < width));
        // The two copies never overlap
        let mut sorted = points.clone();
        sorted.sort_by_key(|p| (p.y, p.x));
        sorted.dedup();
        assert_eq!(sorted.len(), 30);
    }

    #[test]
    fn test_embed_is_idempotent() {
        let version = Version::new(3).unwrap();
        let mut a = ModuleMatrix::new(version);
        let mut b = ModuleMatrix::new(version);
        embed_format_information(&mut a, ECLevel::Q, MaskPattern::Pattern4).unwrap();
        embed_format_information(&mut b, ECLevel::Q, MaskPattern::Pattern4).unwrap();
        embed_format_information(&mut b, ECLevel::Q, MaskPattern::Pattern4).unwrap();
        assert_eq!(a, b);
        assert_eq!(a.count_status(ModuleStatus::Function), 30);
    }

    #[test]
    fn test_both_copies_agree() {
        let version = Version::new(1).unwrap();
        let mut matrix = ModuleMatrix::new(version);
        embed_format_information(&mut matrix, ECLevel::H, MaskPattern::Pattern6).unwrap();
        let width = matrix.width();
        for i in 0..FORMAT_INFO_BITS {
            assert_eq!(
                matrix.get_point(top_left_position(i)).unwrap(),
                matrix.get_point(split_position(i, width)).unwrap()
            );
        }
        assert_eq!(
            read_format_word(&matrix).unwrap(),
            format_word(ECLevel::H, MaskPattern::Pattern6)
        );
    }
}

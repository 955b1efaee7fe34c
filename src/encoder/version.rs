/// Version information for QR codes v7+ (BCH(18,6), not masked)
use super::bch::{VERSION_INFO_POLY, calculate_bch};
use crate::error::{QrError, Result};
use crate::models::{MatrixPoint, ModuleMatrix, Version};

/// Bits in the version information field
pub const VERSION_INFO_BITS: usize = 18;

/// 18-bit version codeword: version << 12 | BCH remainder
pub fn version_word(version: Version) -> Result<u32> {
    let number = version.number() as u32;
    let word = (number << 12) | calculate_bch(number, VERSION_INFO_POLY);
    let width = (u32::BITS - word.leading_zeros()) as usize;
    if width > VERSION_INFO_BITS {
        return Err(QrError::FieldWidth {
            field: "version information",
            expected: VERSION_INFO_BITS,
            actual: width,
        });
    }
    Ok(word)
}

/// Position of bit `k` (LSB = 0) in the 3x6 block left of the top-right
/// finder; the bottom-left copy is its transpose
pub fn top_right_position(k: usize, width: usize) -> MatrixPoint {
    MatrixPoint::new(width - 11 + k % 3, k / 3)
}

/// Every module covered by version information (both copies)
pub fn version_positions(width: usize) -> impl Iterator<Item = MatrixPoint> {
    (0..VERSION_INFO_BITS).flat_map(move |k| {
        let p = top_right_position(k, width);
        [p, p.transpose()]
    })
}

/// Write both version blocks; no-op below version 7
pub fn embed_version_information(matrix: &mut ModuleMatrix, version: Version) -> Result<()> {
    if !version.has_version_info() {
        return Ok(());
    }
    let word = version_word(version)?;
    let width = matrix.width();
    for k in 0..VERSION_INFO_BITS {
        let bit = (word >> k) & 1 == 1;
        let p = top_right_position(k, width);
        matrix.set_function_point(p, bit)?;
        matrix.set_function_point(p.transpose(), bit)?;
    }
    Ok(())
}

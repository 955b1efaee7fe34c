use crate::encoder::format::format_word;
use crate::encoder::tables::{data_codewords, ec_block_info, remainder_bits, total_codewords};
use crate::error::Result;
use crate::models::{ECLevel, MaskPattern, Version};

/// Parse hex codewords, ignoring whitespace, commas and an optional `0x` per byte
pub fn parse_hex_codewords(text: &str) -> Result<Vec<u8>> {
    let mut digits = String::with_capacity(text.len());
    for token in text.split(|c: char| c.is_whitespace() || c == ',') {
        let token = token
            .strip_prefix("0x")
            .or_else(|| token.strip_prefix("0X"))
            .unwrap_or(token);
        digits.push_str(token);
    }
    Ok(hex::decode(&digits)?)
}

/// Capacity summary for one version/level
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CapacityRow {
    /// Version
    pub version: Version,
    /// Error correction level
    pub ec_level: ECLevel,
    /// Data codewords the caller supplies
    pub data_codewords: usize,
    /// All codewords in the symbol
    pub total_codewords: usize,
    /// RS blocks
    pub num_blocks: usize,
    /// ECC codewords per block
    pub ecc_per_block: usize,
    /// Trailing light modules
    pub remainder_bits: usize,
}

/// Capacity rows for one version, one per level
pub fn capacity_rows(version: Version) -> Vec<CapacityRow> {
    ECLevel::ALL
        .iter()
        .map(|&ec_level| {
            let info = ec_block_info(version, ec_level);
            CapacityRow {
                version,
                ec_level,
                data_codewords: data_codewords(version, ec_level),
                total_codewords: total_codewords(version),
                num_blocks: info.num_blocks,
                ecc_per_block: info.ecc_per_block,
                remainder_bits: remainder_bits(version),
            }
        })
        .collect()
}

/// Every (level, mask, 15-bit format word) combination
pub fn format_table() -> Vec<(ECLevel, MaskPattern, u32)> {
    ECLevel::ALL
        .iter()
        .flat_map(|&level| {
            MaskPattern::ALL
                .iter()
                .map(move |&mask| (level, mask, format_word(level, mask)))
        })
        .collect()
}

/// Data codewords -> interleaved data + ECC codeword stream
use super::reed_solomon::ReedSolomonEncoder;
use super::tables::{data_codewords, ec_block_info, raw_data_modules, remainder_bits};
use crate::error::{QrError, Result};
use crate::models::{BitBuffer, ECLevel, Version};

/// Split `data` into RS blocks, append ECC to each and interleave
///
/// Short blocks come first; long blocks carry one extra data codeword.
/// Data codewords are interleaved column by column, then ECC codewords the
/// same way. Remainder bits are not appended; placement leaves them light.
pub fn build_codewords(data: &[u8], version: Version, ec_level: ECLevel) -> Result<BitBuffer> {
    let expected = data_codewords(version, ec_level);
    if data.len() != expected {
        return Err(QrError::DataCodewordCount {
            version: version.number(),
            level: ec_level.as_char(),
            expected,
            actual: data.len(),
        });
    }

    let info = ec_block_info(version, ec_level);
    let short_len = expected / info.num_blocks;
    let num_long = expected % info.num_blocks;
    let num_short = info.num_blocks - num_long;
    let rs = ReedSolomonEncoder::new(info.ecc_per_block);

    let mut blocks: Vec<(&[u8], Vec<u8>)> = Vec::with_capacity(info.num_blocks);
    let mut offset = 0;
    for i in 0..info.num_blocks {
        let len = if i < num_short { short_len } else { short_len + 1 };
        let block = &data[offset..offset + len];
        blocks.push((block, rs.encode(block)));
        offset += len;
    }

    let mut stream = BitBuffer::new();
    for i in 0..=short_len {
        for (block, _) in &blocks {
            if let Some(&byte) = block.get(i) {
                stream.append_bits(byte as u32, 8)?;
            }
        }
    }
    for i in 0..info.ecc_per_block {
        for (_, ecc) in &blocks {
            stream.append_bits(ecc[i] as u32, 8)?;
        }
    }
    debug_assert_eq!(
        stream.len() + remainder_bits(version),
        raw_data_modules(version)
    );
    Ok(stream)
}

/// Codeword placement into the QR matrix following the zigzag pattern
use super::tables::{raw_data_modules, total_codewords};
use crate::error::{QrError, Result};
use crate::models::{BitBuffer, MatrixPoint, ModuleMatrix, ModuleStatus, Version};

/// Data module coordinates in placement order
///
/// Column pairs are taken from the right edge, skipping the vertical timing
/// column; the first pair runs upward and the direction alternates. Within a
/// row the right column comes first.
pub fn zigzag_order(matrix: &ModuleMatrix) -> Vec<MatrixPoint> {
    let size = matrix.width();
    let mut order = Vec::with_capacity(size * size);
    let mut upward = true;
    let mut right = size as isize - 1;

    while right >= 1 {
        if right == 6 {
            right = 5;
        }
        let col = right as usize;
        for step in 0..size {
            let row = if upward { size - 1 - step } else { step };
            for x in [col, col - 1] {
                if matches!(matrix.status(x, row), Ok(ModuleStatus::Unset)) {
                    order.push(MatrixPoint::new(x, row));
                }
            }
        }
        upward = !upward;
        right -= 2;
    }
    order
}

/// Write the codeword stream into every unset module
///
/// The stream must cover all codewords of `version`; modules past the end of
/// the stream are remainder bits and stay light. Returns the number of data
/// modules written.
pub fn place_data_bits(
    matrix: &mut ModuleMatrix,
    version: Version,
    stream: &BitBuffer,
) -> Result<usize> {
    let required = total_codewords(version) * 8;
    let capacity = raw_data_modules(version);
    if stream.len() < required {
        return Err(QrError::StreamUnderfilled {
            version: version.number(),
            required,
            actual: stream.len(),
        });
    }
    if stream.len() > capacity {
        return Err(QrError::StreamOverflow {
            version: version.number(),
            capacity,
            actual: stream.len(),
        });
    }

    let order = zigzag_order(matrix);
    let mut bits = stream.iter();
    for point in &order {
        let dark = bits.next().unwrap_or(false);
        matrix.set(point.x, point.y, dark, ModuleStatus::Data)?;
    }
    Ok(order.len())
}

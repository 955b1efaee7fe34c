use super::format::format_positions;
use super::version::version_positions;
use crate::error::Result;
use crate::models::{ModuleMatrix, Version};

/// Draw every function pattern for `version` and reserve the format and
/// version information areas
///
/// Order: finders with separators, timing, alignment, dark module, reserved
/// zones. Afterwards every non-data module is fixed.
pub fn place_function_patterns(matrix: &mut ModuleMatrix, version: Version) -> Result<()> {
    let size = matrix.width();

    // Finder patterns + separators at three corners
    place_finder_pattern(matrix, 0, 0)?;
    place_finder_pattern(matrix, size - 7, 0)?;
    place_finder_pattern(matrix, 0, size - 7)?;

    place_timing_patterns(matrix)?;
    place_alignment_patterns(matrix, version)?;

    // Dark module
    matrix.set_function(8, size - 8, true)?;

    for point in format_positions(size) {
        matrix.reserve(point.x, point.y)?;
    }
    if version.has_version_info() {
        for point in version_positions(size) {
            matrix.reserve(point.x, point.y)?;
        }
    }
    Ok(())
}

/// 7x7 finder with top-left corner at (x, y), plus its light separator
///
/// ```text
/// #######
/// #.....#
/// #.###.#
/// #.###.#
/// #.###.#
/// #.....#
/// #######
/// ```
fn place_finder_pattern(matrix: &mut ModuleMatrix, x: usize, y: usize) -> Result<()> {
    let size = matrix.width() as isize;
    // Walk the 9x9 area including the separator ring, clipped to the symbol
    for dy in -1isize..=7 {
        for dx in -1isize..=7 {
            let xx = x as isize + dx;
            let yy = y as isize + dy;
            if xx < 0 || yy < 0 || xx >= size || yy >= size {
                continue;
            }
            let in_ring = (0..=6).contains(&dx) && (0..=6).contains(&dy);
            let edge = dx == 0 || dx == 6 || dy == 0 || dy == 6;
            let core = (2..=4).contains(&dx) && (2..=4).contains(&dy);
            matrix.set_function(xx as usize, yy as usize, in_ring && (edge || core))?;
        }
    }
    Ok(())
}

/// Alternating modules on row 6 and column 6, dark at even indices
fn place_timing_patterns(matrix: &mut ModuleMatrix) -> Result<()> {
    let size = matrix.width();
    for i in 8..size - 8 {
        let dark = i % 2 == 0;
        matrix.set_function(i, 6, dark)?;
        matrix.set_function(6, i, dark)?;
    }
    Ok(())
}

fn place_alignment_patterns(matrix: &mut ModuleMatrix, version: Version) -> Result<()> {
    let size = matrix.width();
    let align = alignment_pattern_positions(version);
    for &cx in &align {
        for &cy in &align {
            // Skip the three finder corners
            let in_tl = cx <= 8 && cy <= 8;
            let in_tr = cx >= size - 9 && cy <= 8;
            let in_bl = cx <= 8 && cy >= size - 9;
            if in_tl || in_tr || in_bl {
                continue;
            }
            // 5x5 alignment pattern
            for dy in 0..5 {
                for dx in 0..5 {
                    let ring = dx == 0 || dx == 4 || dy == 0 || dy == 4;
                    let centre = dx == 2 && dy == 2;
                    matrix.set_function(cx - 2 + dx, cy - 2 + dy, ring || centre)?;
                }
            }
        }
    }
    Ok(())
}

/// Alignment pattern centres (same list for rows and columns)
pub fn alignment_pattern_positions(version: Version) -> Vec<usize> {
    let v = version.number() as usize;
    if v == 1 {
        return Vec::new();
    }
    let num_align = v / 7 + 2;
    let size = version.size();
    let step = (v * 8 + num_align * 3 + 5) / (num_align * 4 - 4) * 2;

    let mut positions = vec![0usize; num_align];
    positions[0] = 6;
    let mut pos = size - 7;
    for i in (1..num_align).rev() {
        positions[i] = pos;
        pos = pos.saturating_sub(step);
    }
    positions
}

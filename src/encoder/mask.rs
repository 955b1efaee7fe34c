/// Mask selection and application over data modules
use super::format::embed_format_information;
use super::penalty::{self, Penalty};
use crate::error::Result;
use crate::models::{ECLevel, MaskPattern, ModuleMatrix, ModuleStatus};
use tracing::trace;

/// XOR `mask` over every data module (applying twice undoes it)
pub fn apply_mask(matrix: &mut ModuleMatrix, mask: MaskPattern) {
    for (x, y, module) in matrix.cells_mut() {
        if module.status == ModuleStatus::Data && mask.is_masked(y, x) {
            module.dark = !module.dark;
        }
    }
}

/// Penalty of `matrix` as it would look with `mask` and its format bits
///
/// The matrix is restored to its unmasked data afterwards; format modules keep
/// the trial's bits until the winner is embedded.
pub fn trial_penalty(
    matrix: &mut ModuleMatrix,
    ec_level: ECLevel,
    mask: MaskPattern,
) -> Result<Penalty> {
    apply_mask(matrix, mask);
    embed_format_information(matrix, ec_level, mask)?;
    let score = penalty::evaluate(matrix);
    apply_mask(matrix, mask);
    Ok(score)
}

/// Try all eight masks and return the lowest-penalty one
///
/// Ties keep the lowest pattern id. The matrix data is left unmasked.
pub fn choose_mask(matrix: &mut ModuleMatrix, ec_level: ECLevel) -> Result<(MaskPattern, Penalty)> {
    let mut best: Option<(MaskPattern, Penalty)> = None;
    for mask in MaskPattern::ALL {
        let score = trial_penalty(matrix, ec_level, mask)?;
        trace!(
            mask = mask.id(),
            runs = score.runs,
            blocks = score.blocks,
            finder_like = score.finder_like,
            balance = score.balance,
            total = score.total(),
            "mask penalty"
        );
        if best.is_none_or(|(_, b)| score.total() < b.total()) {
            best = Some((mask, score));
        }
    }
    // MaskPattern::ALL is non-empty
    Ok(best.unwrap_or((MaskPattern::Pattern0, Penalty::default())))
}

/// Apply `mask` permanently and write the matching format information
pub fn finalize_mask(matrix: &mut ModuleMatrix, ec_level: ECLevel, mask: MaskPattern) -> Result<()> {
    apply_mask(matrix, mask);
    embed_format_information(matrix, ec_level, mask)
}

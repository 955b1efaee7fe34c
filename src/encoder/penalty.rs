use crate::models::ModuleMatrix;

const N1: u32 = 3;
const N2: u32 = 3;
const N3: u32 = 40;
const N4: u32 = 10;

/// Dark-light-dark-dark-dark-light-dark, the finder core in 1:1:3:1:1
const FINDER_LIKE: [bool; 7] = [true, false, true, true, true, false, true];

/// Penalty score of a matrix, split by rule
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Penalty {
    /// Runs of five or more same-colour modules
    pub runs: u32,
    /// Same-colour 2x2 blocks
    pub blocks: u32,
    /// Finder-like 1:1:3:1:1 sequences with a light 4-module side
    pub finder_like: u32,
    /// Dark-ratio deviation from 50%
    pub balance: u32,
}

impl Penalty {
    /// Sum of all four rules
    pub fn total(&self) -> u32 {
        self.runs + self.blocks + self.finder_like + self.balance
    }
}

/// Score the current colours of every module
pub fn evaluate(matrix: &ModuleMatrix) -> Penalty {
    Penalty {
        runs: run_penalty(matrix),
        blocks: block_penalty(matrix),
        finder_like: finder_like_penalty(matrix),
        balance: balance_penalty(matrix),
    }
}

fn line_run_penalty(line: impl Iterator<Item = bool>) -> u32 {
    let mut penalty = 0;
    let mut run_color = None;
    let mut run_len = 0u32;
    for module in line {
        if Some(module) == run_color {
            run_len += 1;
        } else {
            if run_len >= 5 {
                penalty += N1 + (run_len - 5);
            }
            run_color = Some(module);
            run_len = 1;
        }
    }
    if run_len >= 5 {
        penalty += N1 + (run_len - 5);
    }
    penalty
}

/// Rule 1: runs of >= 5 in rows and columns score 3 + (len - 5)
pub fn run_penalty(matrix: &ModuleMatrix) -> u32 {
    let size = matrix.width();
    let rows: u32 = (0..size)
        .map(|y| line_run_penalty((0..size).map(|x| matrix.dark_at(x, y))))
        .sum();
    let cols: u32 = (0..size)
        .map(|x| line_run_penalty((0..size).map(|y| matrix.dark_at(x, y))))
        .sum();
    rows + cols
}

/// Rule 2: every 2x2 same-colour block scores 3 (overlapping blocks count)
pub fn block_penalty(matrix: &ModuleMatrix) -> u32 {
    let size = matrix.width();
    let mut penalty = 0;
    for y in 0..size.saturating_sub(1) {
        for x in 0..size.saturating_sub(1) {
            let c = matrix.dark_at(x, y);
            if c == matrix.dark_at(x + 1, y)
                && c == matrix.dark_at(x, y + 1)
                && c == matrix.dark_at(x + 1, y + 1)
            {
                penalty += N2;
            }
        }
    }
    penalty
}

/// Rule 3: 1:1:3:1:1 sequences with four light modules on either side
///
/// Modules outside the symbol count as light (quiet zone). Follows the ZXing
/// convention: a match scores 40 once even when both sides are light, unlike
/// Nayuki's `qrcodegen`, which can pick a different mask on the same data.
pub fn finder_like_penalty(matrix: &ModuleMatrix) -> u32 {
    let size = matrix.width();
    let mut penalty = 0;
    for a in 0..size {
        penalty += line_finder_penalty(size, |b| matrix.dark_at(b, a));
        penalty += line_finder_penalty(size, |b| matrix.dark_at(a, b));
    }
    penalty
}

fn line_finder_penalty(size: usize, dark: impl Fn(usize) -> bool) -> u32 {
    let light = |from: isize, to: isize| {
        (from..to).all(|i| i < 0 || i as usize >= size || !dark(i as usize))
    };
    let mut penalty = 0;
    for start in 0..size.saturating_sub(FINDER_LIKE.len() - 1) {
        let matches = FINDER_LIKE
            .iter()
            .enumerate()
            .all(|(k, &expected)| dark(start + k) == expected);
        if !matches {
            continue;
        }
        let s = start as isize;
        if light(s - 4, s) || light(s + 7, s + 11) {
            penalty += N3;
        }
    }
    penalty
}

/// Rule 4: 10 points per full 5% step away from a 50% dark ratio (floored, as in ZXing)
pub fn balance_penalty(matrix: &ModuleMatrix) -> u32 {
    let total = (matrix.width() * matrix.width()) as i64;
    if total == 0 {
        return 0;
    }
    let dark = matrix.count_dark() as i64;
    let steps = (dark * 2 - total).abs() * 10 / total;
    steps as u32 * N4
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::ModuleStatus;

    fn from_rows(rows: &[&str]) -> ModuleMatrix {
        let mut matrix = ModuleMatrix::with_width(rows.len());
        for (y, row) in rows.iter().enumerate() {
            for (x, c) in row.chars().enumerate() {
                matrix.set(x, y, c == '#', ModuleStatus::Data).unwrap();
            }
        }
        matrix
    }

    #[test]
    fn test_line_runs() {
        let line = |s: &str| line_run_penalty(s.chars().map(|c| c == '#'));
        assert_eq!(line("####"), 0);
        assert_eq!(line("#####"), 3);
        assert_eq!(line("#######"), 5);
        assert_eq!(line("#####.....#"), 6);
    }

    #[test]
    fn test_all_light_matrix() {
        let matrix = ModuleMatrix::with_width(5);
        let p = evaluate(&matrix);
        // 5 rows + 5 columns of length-5 runs
        assert_eq!(p.runs, 30);
        // 4x4 overlapping blocks
        assert_eq!(p.blocks, 48);
        assert_eq!(p.finder_like, 0);
        // 0% dark: 10 steps
        assert_eq!(p.balance, 100);
        assert_eq!(p.total(), 178);
    }

    #[test]
    fn test_checkerboard() {
        let rows: Vec<String> = (0..6)
            .map(|y| (0..6).map(|x| if (x + y) % 2 == 0 { '#' } else { '.' }).collect())
            .collect();
        let refs: Vec<&str> = rows.iter().map(String::as_str).collect();
        let p = evaluate(&from_rows(&refs));
        assert_eq!(p, Penalty::default());
    }

    #[test]
    fn test_finder_like_row() {
        let matrix = from_rows(&[
            "#.###.#....",
            "#.#.#.#.#.#",
            ".#.#.#.#.#.",
            "#.#.#.#.#.#",
            ".#.#.#.#.#.",
            "#.#.#.#.#.#",
            ".#.#.#.#.#.",
            "#.#.#.#.#.#",
            ".#.#.#.#.#.",
            "#.#.#.#.#.#",
            ".#.#.#.#.#.",
        ]);
        // Row 0 matches with light run after it (and quiet zone before)
        assert_eq!(finder_like_penalty(&matrix), 40);
    }

    #[test]
    fn test_finder_like_needs_light_side() {
        let line = "##.#.###.#.##";
        let dark: Vec<bool> = line.chars().map(|c| c == '#').collect();
        let p = line_finder_penalty(dark.len(), |i| dark[i]);
        assert_eq!(p, 0);
    }

    #[test]
    fn test_balance_steps() {
        let mut matrix = ModuleMatrix::with_width(10);
        // 45 of 100 dark: one 5% step
        for i in 0..45 {
            matrix.set(i % 10, i / 10, true, ModuleStatus::Data).unwrap();
        }
        assert_eq!(balance_penalty(&matrix), 10);
        for i in 45..50 {
            matrix.set(i % 10, i / 10, true, ModuleStatus::Data).unwrap();
        }
        assert_eq!(balance_penalty(&matrix), 0);
    }
}

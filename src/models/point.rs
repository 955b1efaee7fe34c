/// Integer module coordinate (x = column, y = row)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct MatrixPoint {
    /// X coordinate (column)
    pub x: usize,
    /// Y coordinate (row)
    pub y: usize,
}

impl MatrixPoint {
    /// Create a new point
    pub const fn new(x: usize, y: usize) -> Self {
        Self { x, y }
    }

    /// Mirror across the main diagonal
    pub const fn transpose(self) -> Self {
        Self {
            x: self.y,
            y: self.x,
        }
    }
}

impl From<(usize, usize)> for MatrixPoint {
    fn from((x, y): (usize, usize)) -> Self {
        Self { x, y }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_transpose() {
        let p = MatrixPoint::new(3, 8);
        assert_eq!(p.transpose(), MatrixPoint::from((8, 3)));
        assert_eq!(p.transpose().transpose(), p);
    }
}

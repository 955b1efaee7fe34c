use super::{BitMatrix, MatrixPoint, Version};
use crate::error::{QrError, Result};

/// What a module is used for
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ModuleStatus {
    /// Not yet written
    #[default]
    Unset,
    /// Finder, separator, timing, alignment, dark module, format/version bits
    Function,
    /// Reserved for format/version information that is written later
    Reserved,
    /// Data or ECC bit; the only status masking touches
    Data,
}

impl ModuleStatus {
    /// Function and reserved modules are never masked or overwritten by data
    pub fn is_fixed(&self) -> bool {
        matches!(self, ModuleStatus::Function | ModuleStatus::Reserved)
    }
}

/// One cell: colour plus status
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Module {
    /// Dark module
    pub dark: bool,
    /// What the module carries
    pub status: ModuleStatus,
}

/// Square working matrix of [`Module`]s, stored row-major
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ModuleMatrix {
    width: usize,
    cells: Vec<Module>,
}

impl ModuleMatrix {
    /// Blank matrix sized for `version`
    pub fn new(version: Version) -> Self {
        Self::with_width(version.size())
    }

    /// Blank square matrix of the given side length
    pub fn with_width(width: usize) -> Self {
        Self {
            width,
            cells: vec![Module::default(); width * width],
        }
    }

    /// Side length
    pub fn width(&self) -> usize {
        self.width
    }

    fn index(&self, x: usize, y: usize) -> Result<usize> {
        if x >= self.width || y >= self.width {
            return Err(QrError::CoordinateOutOfRange {
                x,
                y,
                width: self.width,
            });
        }
        Ok(y * self.width + x)
    }

    /// Module at (x, y)
    pub fn module(&self, x: usize, y: usize) -> Result<Module> {
        Ok(self.cells[self.index(x, y)?])
    }

    /// Colour at (x, y)
    pub fn get(&self, x: usize, y: usize) -> Result<bool> {
        Ok(self.module(x, y)?.dark)
    }

    /// Status at (x, y)
    pub fn status(&self, x: usize, y: usize) -> Result<ModuleStatus> {
        Ok(self.module(x, y)?.status)
    }

    /// Colour at a point
    pub fn get_point(&self, point: MatrixPoint) -> Result<bool> {
        self.get(point.x, point.y)
    }

    /// Write colour and status
    ///
    /// A fixed (function or reserved) module keeps its fixed status: it can be
    /// re-coloured as function/reserved, but never turned back into data.
    pub fn set(&mut self, x: usize, y: usize, dark: bool, status: ModuleStatus) -> Result<()> {
        let index = self.index(x, y)?;
        let cell = &mut self.cells[index];
        let status = match (cell.status, status) {
            (ModuleStatus::Function, _) => ModuleStatus::Function,
            (ModuleStatus::Reserved, ModuleStatus::Function) => ModuleStatus::Function,
            (ModuleStatus::Reserved, _) => ModuleStatus::Reserved,
            (_, s) => s,
        };
        *cell = Module { dark, status };
        Ok(())
    }

    /// Write a function-pattern module
    pub fn set_function(&mut self, x: usize, y: usize, dark: bool) -> Result<()> {
        self.set(x, y, dark, ModuleStatus::Function)
    }

    /// Write a function-pattern module at a point
    pub fn set_function_point(&mut self, point: MatrixPoint, dark: bool) -> Result<()> {
        self.set_function(point.x, point.y, dark)
    }

    /// Mark a module reserved (light) unless it is already fixed
    pub fn reserve(&mut self, x: usize, y: usize) -> Result<()> {
        let index = self.index(x, y)?;
        let cell = &mut self.cells[index];
        if !cell.status.is_fixed() {
            *cell = Module {
                dark: false,
                status: ModuleStatus::Reserved,
            };
        }
        Ok(())
    }

    /// Flip a data module; fixed and unset modules are left alone
    pub fn toggle_data(&mut self, x: usize, y: usize) -> Result<()> {
        let index = self.index(x, y)?;
        let cell = &mut self.cells[index];
        if cell.status == ModuleStatus::Data {
            cell.dark = !cell.dark;
        }
        Ok(())
    }

    /// Count modules with the given status
    pub fn count_status(&self, status: ModuleStatus) -> usize {
        self.cells.iter().filter(|c| c.status == status).count()
    }

    /// Count dark modules
    pub fn count_dark(&self) -> usize {
        self.cells.iter().filter(|c| c.dark).count()
    }

    /// Colour at (x, y) without bounds checking beyond the slice index
    pub(crate) fn dark_at(&self, x: usize, y: usize) -> bool {
        self.cells[y * self.width + x].dark
    }

    /// Mutable access to every cell with its coordinates
    pub(crate) fn cells_mut(&mut self) -> impl Iterator<Item = (usize, usize, &mut Module)> {
        let width = self.width;
        self.cells
            .iter_mut()
            .enumerate()
            .map(move |(i, m)| (i % width, i / width, m))
    }

    /// Freeze into a read-only bit matrix
    pub fn to_bit_matrix(&self) -> BitMatrix {
        let mut out = BitMatrix::new(self.width, self.width);
        for (i, cell) in self.cells.iter().enumerate() {
            if cell.dark {
                out.set(i % self.width, i / self.width, true);
            }
        }
        out
    }
}

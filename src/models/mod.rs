pub mod bit_buffer;
pub mod matrix;
pub mod module_matrix;
pub mod point;
pub mod qr_code;

pub use bit_buffer::{BitBuffer, Bits};
pub use matrix::BitMatrix;
pub use module_matrix::{Module, ModuleMatrix, ModuleStatus};
pub use point::MatrixPoint;
pub use qr_code::{ECLevel, MaskPattern, QrCode, Version};

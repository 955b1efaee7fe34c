//! RustQR encoder - bit-exact QR code symbol construction
//!
//! Takes a finished codeword stream (or data codewords, with ECC computed
//! here) and builds the ISO/IEC 18004 Model 2 module matrix: function
//! patterns, zigzag data placement, mask selection by the four penalty rules,
//! and format/version information.
//!
//! ```
//! use rust_qr_encoder::{ECLevel, Version, encode_data};
//!
//! let data = [32, 91, 11, 120, 209, 114, 220, 77, 67, 64, 236, 17, 236, 17, 236, 17];
//! let code = encode_data(&data, Version::MIN, ECLevel::M).unwrap();
//! assert_eq!(code.size(), 21);
//! ```

#![warn(missing_docs)]
#![allow(clippy::missing_docs_in_private_items)]

/// Symbol construction (error correction, patterns, placement, masking)
pub mod encoder;
/// Error type and classification
pub mod error;
/// Core data structures (BitBuffer, ModuleMatrix, QrCode, Version, etc.)
pub mod models;
/// Text, SVG and raster output
pub mod render;
/// Helpers shared by the command-line tool
pub mod tools;

pub use encoder::{EncodeRequest, EncoderConfig, QrEncoder};
pub use error::{ErrorKind, QrError, Result};
pub use models::{BitBuffer, BitMatrix, ECLevel, MaskPattern, ModuleMatrix, QrCode, Version};

/// Encode an interleaved data + ECC bit stream with the default configuration
///
/// # Arguments
/// * `stream` - All codewords of `version`, optionally followed by remainder bits
/// * `version` - Symbol version (1-40)
/// * `ec_level` - Error correction level the stream was built for
pub fn encode_stream(stream: &BitBuffer, version: Version, ec_level: ECLevel) -> Result<QrCode> {
    QrEncoder::from_env().encode_stream(stream, version, ec_level)
}

/// Encode data codewords (ECC added here) with the default configuration
pub fn encode_data(data: &[u8], version: Version, ec_level: ECLevel) -> Result<QrCode> {
    QrEncoder::from_env().encode_data(data, version, ec_level)
}

/// Encode many independent requests in parallel with the default configuration
pub fn encode_batch(requests: &[EncodeRequest]) -> Vec<Result<QrCode>> {
    QrEncoder::from_env().encode_batch(requests)
}

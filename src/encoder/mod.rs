//! QR code symbol construction
//!
//! Everything between a codeword stream and a finished module matrix:
//! - Error correction (Reed-Solomon over GF(256), BCH for format/version info)
//! - Function patterns and reserved areas
//! - Zigzag data placement
//! - Mask evaluation and selection

/// BCH remainders for format and version info
pub mod bch;
/// Block split, Reed-Solomon and interleaving of data codewords
pub mod codewords;
/// Encoder settings read from the environment
pub mod config;
/// Format information (EC level + mask), both copies
pub mod format;
/// Finder, separator, timing, alignment patterns and the dark module
pub mod function_patterns;
/// GF(256) arithmetic
pub mod gf256;
/// Mask application and selection
pub mod mask;
/// The four mask penalty rules
pub mod penalty;
/// Zigzag placement of the codeword stream
pub mod placement;
/// Orchestrates the encoding pipeline
pub mod qr_encoder;
/// Reed-Solomon ECC generation
pub mod reed_solomon;
/// QR specification tables (ECC codewords/blocks, capacities)
pub mod tables;
/// Version information (versions 7-40)
pub mod version;

pub use config::EncoderConfig;
pub use qr_encoder::{EncodeRequest, QrEncoder};

//! Error type shared by every encoder stage

use thiserror::Error;

/// Broad classification of a [`QrError`]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    /// Caller passed a value outside the accepted range
    InputRange,
    /// A derived field came out with the wrong shape (encoder defect)
    Internal,
    /// Payload does not match the symbol's capacity
    Capacity,
    /// Writing or encoding the rendered output failed
    Output,
}

/// Errors returned by the encoder
#[derive(Error, Debug)]
pub enum QrError {
    /// Bit buffer read past its end
    #[error("bit index {index} out of range for buffer of {len} bits")]
    BitIndexOutOfRange {
        /// Requested index
        index: usize,
        /// Bits in the buffer
        len: usize,
    },

    /// `append_bits` called with more than 32 bits
    #[error("bit count {0} outside 0..=32")]
    BitCountOutOfRange(usize),

    /// Matrix access outside the symbol
    #[error("module ({x}, {y}) outside {width}x{width} matrix")]
    CoordinateOutOfRange {
        /// Column
        x: usize,
        /// Row
        y: usize,
        /// Matrix side length
        width: usize,
    },

    /// Version number outside 1-40
    #[error("unsupported version {0}, expected 1-40")]
    InvalidVersion(u32),

    /// Mask id outside 0-7
    #[error("invalid mask pattern {0}, expected 0-7")]
    InvalidMaskPattern(u32),

    /// Unknown error correction level name
    #[error("unsupported error correction level [{0}]")]
    InvalidEcLevel(String),

    /// Malformed hex codeword text
    #[error("invalid hex input: {0}")]
    InvalidHex(#[from] hex::FromHexError),

    /// Renderer options or output format rejected
    #[error("invalid render option: {0}")]
    InvalidRenderOption(String),

    /// Derived field has the wrong width
    #[error("{field} is {actual} bits, expected {expected}")]
    FieldWidth {
        /// Name of the derived field
        field: &'static str,
        /// Expected bit count
        expected: usize,
        /// Actual bit count
        actual: usize,
    },

    /// Data codeword count does not match the version/level
    #[error(
        "version {version} level {level} takes {expected} data codewords, got {actual}; \
         choose a larger version or a lower error correction level"
    )]
    DataCodewordCount {
        /// Version number
        version: u8,
        /// Level name
        level: char,
        /// Required data codewords
        expected: usize,
        /// Supplied data codewords
        actual: usize,
    },

    /// Bit stream shorter than the symbol's codeword capacity
    #[error("bit stream has {actual} bits but version {version} needs at least {required}")]
    StreamUnderfilled {
        /// Version number
        version: u8,
        /// Minimum bits
        required: usize,
        /// Supplied bits
        actual: usize,
    },

    /// Bit stream longer than the symbol's data modules
    #[error("bit stream has {actual} bits but version {version} holds only {capacity}")]
    StreamOverflow {
        /// Version number
        version: u8,
        /// Data modules available
        capacity: usize,
        /// Supplied bits
        actual: usize,
    },

    /// Raster encoder failure
    #[error("image error: {0}")]
    Image(#[from] image::ImageError),

    /// Output I/O failure
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl QrError {
    /// Classify the error
    pub fn kind(&self) -> ErrorKind {
        match self {
            QrError::FieldWidth { .. } => ErrorKind::Internal,
            QrError::DataCodewordCount { .. }
            | QrError::StreamUnderfilled { .. }
            | QrError::StreamOverflow { .. } => ErrorKind::Capacity,
            QrError::Image(_) | QrError::Io(_) => ErrorKind::Output,
            QrError::BitIndexOutOfRange { .. }
            | QrError::BitCountOutOfRange(_)
            | QrError::CoordinateOutOfRange { .. }
            | QrError::InvalidVersion(_)
            | QrError::InvalidMaskPattern(_)
            | QrError::InvalidEcLevel(_)
            | QrError::InvalidHex(_)
            | QrError::InvalidRenderOption(_) => ErrorKind::InputRange,
        }
    }
}

/// Result alias used throughout the crate
pub type Result<T> = std::result::Result<T, QrError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_kinds() {
        assert_eq!(QrError::BitCountOutOfRange(33).kind(), ErrorKind::InputRange);
        assert_eq!(
            QrError::FieldWidth {
                field: "format information",
                expected: 15,
                actual: 14
            }
            .kind(),
            ErrorKind::Internal
        );
        assert_eq!(
            QrError::StreamOverflow {
                version: 1,
                capacity: 208,
                actual: 300
            }
            .kind(),
            ErrorKind::Capacity
        );
    }

    #[test]
    fn test_output_failures_are_not_input_errors() {
        let io = std::io::Error::new(std::io::ErrorKind::PermissionDenied, "read-only");
        assert_eq!(QrError::from(io).kind(), ErrorKind::Output);
        let codec = image::ImageError::IoError(std::io::Error::other("disk full"));
        assert_eq!(QrError::from(codec).kind(), ErrorKind::Output);
        assert_eq!(
            QrError::from(hex::FromHexError::OddLength).kind(),
            ErrorKind::InputRange
        );
        assert_eq!(
            QrError::InvalidRenderOption("bad".to_string()).kind(),
            ErrorKind::InputRange
        );
    }

    #[test]
    fn test_capacity_message_suggests_fix() {
        let err = QrError::DataCodewordCount {
            version: 1,
            level: 'H',
            expected: 9,
            actual: 12,
        };
        assert!(err.to_string().contains("larger version"));
    }
}

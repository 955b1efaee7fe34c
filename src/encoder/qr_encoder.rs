use super::codewords::build_codewords;
use super::config::{EncoderConfig, default_config};
use super::function_patterns::place_function_patterns;
use super::mask::{choose_mask, finalize_mask};
use super::placement::place_data_bits;
use super::version::embed_version_information;
use crate::error::Result;
use crate::models::{BitBuffer, ECLevel, ModuleMatrix, QrCode, Version};
use rayon::prelude::*;
use tracing::{debug, instrument};

/// Turns finished codeword streams into QR code symbols
#[derive(Debug, Clone, Copy, Default)]
pub struct QrEncoder {
    config: EncoderConfig,
}

/// One job for [`QrEncoder::encode_batch`]
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EncodeRequest {
    /// Data codewords (without ECC)
    pub data: Vec<u8>,
    /// Target version
    pub version: Version,
    /// Error correction level
    pub ec_level: ECLevel,
}

impl EncodeRequest {
    /// Bundle a request
    pub fn new(data: impl Into<Vec<u8>>, version: Version, ec_level: ECLevel) -> Self {
        Self {
            data: data.into(),
            version,
            ec_level,
        }
    }
}

impl QrEncoder {
    /// Encoder with an explicit configuration
    pub fn new(config: EncoderConfig) -> Self {
        Self { config }
    }

    /// Encoder using the process-wide (environment) configuration
    pub fn from_env() -> Self {
        Self::new(default_config())
    }

    /// Active configuration
    pub fn config(&self) -> &EncoderConfig {
        &self.config
    }

    /// Build a symbol from an interleaved data + ECC codeword stream
    ///
    /// The stream must hold every codeword of `version` and at most its data
    /// module capacity. Function patterns, data, version information, mask
    /// and format information are written in that order.
    #[instrument(name = "encode", skip_all, fields(version = version.number(), level = %ec_level))]
    pub fn encode_stream(
        &self,
        stream: &BitBuffer,
        version: Version,
        ec_level: ECLevel,
    ) -> Result<QrCode> {
        let mut matrix = ModuleMatrix::new(version);
        place_function_patterns(&mut matrix, version)?;
        let written = place_data_bits(&mut matrix, version, stream)?;
        embed_version_information(&mut matrix, version)?;
        debug!(
            size = matrix.width(),
            stream_bits = stream.len(),
            data_modules = written,
            "data placed"
        );

        let mask = match self.config.forced_mask {
            Some(mask) => {
                debug!(mask = mask.id(), "using forced mask");
                mask
            }
            None => {
                let (mask, penalty) = choose_mask(&mut matrix, ec_level)?;
                debug!(mask = mask.id(), penalty = penalty.total(), "selected mask");
                mask
            }
        };
        finalize_mask(&mut matrix, ec_level, mask)?;

        Ok(QrCode {
            version,
            error_correction: ec_level,
            mask_pattern: mask,
            modules: matrix.to_bit_matrix(),
        })
    }

    /// Build a symbol from data codewords (ECC is computed here)
    pub fn encode_data(&self, data: &[u8], version: Version, ec_level: ECLevel) -> Result<QrCode> {
        let stream = build_codewords(data, version, ec_level)?;
        self.encode_stream(&stream, version, ec_level)
    }

    /// Encode independent requests in parallel, results in request order
    pub fn encode_batch(&self, requests: &[EncodeRequest]) -> Vec<Result<QrCode>> {
        debug!(count = requests.len(), "encoding batch");
        requests
            .par_iter()
            .map(|req| self.encode_data(&req.data, req.version, req.ec_level))
            .collect()
    }
}

use crate::models::MaskPattern;
use std::sync::OnceLock;

fn parse_env_usize(name: &str, default: usize) -> usize {
    std::env::var(name)
        .ok()
        .and_then(|v| v.trim().parse::<usize>().ok())
        .unwrap_or(default)
}

fn parse_env_mask(name: &str) -> Option<MaskPattern> {
    std::env::var(name)
        .ok()
        .and_then(|v| v.trim().parse::<u8>().ok())
        .and_then(|v| MaskPattern::from_bits(v).ok())
}

/// Default quiet zone in modules
pub const DEFAULT_QUIET_ZONE: usize = 4;
/// Default pixels per module for raster output
pub const DEFAULT_MODULE_SIZE: usize = 4;

/// Encoder settings
///
/// `Default` is the built-in configuration; [`EncoderConfig::from_env`] reads
/// `QR_FORCE_MASK` (0-7), `QR_QUIET_ZONE` and `QR_MODULE_SIZE` on top of it.
/// Invalid values fall back to the defaults.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EncoderConfig {
    /// Skip mask evaluation and always use this pattern
    pub forced_mask: Option<MaskPattern>,
    /// Light border around rendered symbols, in modules
    pub quiet_zone: usize,
    /// Pixels per module for raster output
    pub module_size: usize,
}

impl Default for EncoderConfig {
    fn default() -> Self {
        Self {
            forced_mask: None,
            quiet_zone: DEFAULT_QUIET_ZONE,
            module_size: DEFAULT_MODULE_SIZE,
        }
    }
}

impl EncoderConfig {
    /// Defaults overridden by environment variables
    pub fn from_env() -> Self {
        Self {
            forced_mask: parse_env_mask("QR_FORCE_MASK"),
            quiet_zone: parse_env_usize("QR_QUIET_ZONE", DEFAULT_QUIET_ZONE).min(64),
            module_size: parse_env_usize("QR_MODULE_SIZE", DEFAULT_MODULE_SIZE).clamp(1, 64),
        }
    }

    /// Always use `mask` instead of choosing the lowest-penalty one
    pub fn with_forced_mask(mut self, mask: MaskPattern) -> Self {
        self.forced_mask = Some(mask);
        self
    }

    /// Choose the mask by penalty score
    pub fn with_automatic_mask(mut self) -> Self {
        self.forced_mask = None;
        self
    }

    /// Set the quiet zone width in modules
    pub fn with_quiet_zone(mut self, modules: usize) -> Self {
        self.quiet_zone = modules;
        self
    }

    /// Set pixels per module
    pub fn with_module_size(mut self, pixels: usize) -> Self {
        self.module_size = pixels;
        self
    }
}

static DEFAULT_CONFIG: OnceLock<EncoderConfig> = OnceLock::new();

/// Process-wide configuration, read from the environment on first use
pub fn default_config() -> EncoderConfig {
    *DEFAULT_CONFIG.get_or_init(EncoderConfig::from_env)
}

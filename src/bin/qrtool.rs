use clap::{Parser, Subcommand, ValueEnum};
use rust_qr_encoder::encoder::config::default_config;
use rust_qr_encoder::render::{self, OutputFormat, RenderOptions};
use rust_qr_encoder::tools::{capacity_rows, format_table, parse_hex_codewords};
use rust_qr_encoder::{ECLevel, MaskPattern, QrEncoder, Result, Version};
use std::fs;
use std::path::{Path, PathBuf};
use std::process::ExitCode;
use tracing::{error, info};
use tracing_subscriber::{EnvFilter, prelude::*};

#[derive(Parser)]
#[command(name = "qrtool", version, about = "RustQR encoder CLI tools")]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Clone, Copy, ValueEnum)]
enum Output {
    Ascii,
    Svg,
    Png,
    Bmp,
    Jpeg,
    Tiff,
    Gif,
}

#[derive(Subcommand)]
enum Command {
    /// Encode hex data codewords into a symbol
    Encode {
        /// Data codewords as hex (whitespace and commas ignored)
        #[arg(long, conflicts_with = "input")]
        hex: Option<String>,
        /// File holding hex data codewords
        #[arg(long)]
        input: Option<PathBuf>,
        /// Symbol version (1-40)
        #[arg(long, default_value_t = 1)]
        version: u8,
        /// Error correction level (L, M, Q, H)
        #[arg(long, default_value = "M")]
        level: ECLevel,
        /// Force a mask pattern (0-7) instead of choosing by penalty
        #[arg(long)]
        mask: Option<u8>,
        /// Output kind
        #[arg(long, value_enum, default_value_t = Output::Ascii)]
        format: Output,
        /// Output file (stdout for text formats when omitted)
        #[arg(long)]
        output: Option<PathBuf>,
        /// Pixels per module for SVG and raster output
        #[arg(long)]
        module_size: Option<u32>,
        /// Quiet zone in modules
        #[arg(long)]
        quiet_zone: Option<u32>,
    },
    /// Print the 32 format information words
    FormatInfo,
    /// Print codeword capacities per version and level
    Capacity {
        /// Single version to show (all when omitted)
        #[arg(long)]
        version: Option<u8>,
    },
}

fn main() -> ExitCode {
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let cli = Cli::parse();
    let result = match cli.command {
        Command::Encode {
            hex,
            input,
            version,
            level,
            mask,
            format,
            output,
            module_size,
            quiet_zone,
        } => {
            let options = EncodeOptions {
                version,
                level,
                mask,
                format,
                module_size,
                quiet_zone,
            };
            encode_cmd(hex, input.as_deref(), output.as_deref(), &options)
        }
        Command::FormatInfo => {
            format_info_cmd();
            Ok(())
        }
        Command::Capacity { version } => capacity_cmd(version),
    };

    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            error!(kind = ?err.kind(), "{err}");
            ExitCode::FAILURE
        }
    }
}

struct EncodeOptions {
    version: u8,
    level: ECLevel,
    mask: Option<u8>,
    format: Output,
    module_size: Option<u32>,
    quiet_zone: Option<u32>,
}

fn encode_cmd(
    hex: Option<String>,
    input: Option<&Path>,
    output: Option<&Path>,
    options: &EncodeOptions,
) -> Result<()> {
    let text = match (hex, input) {
        (Some(hex), _) => hex,
        (None, Some(path)) => fs::read_to_string(path)?,
        (None, None) => String::new(),
    };
    let data = parse_hex_codewords(&text)?;
    let version = Version::new(options.version)?;

    let mut config = default_config();
    if let Some(mask) = options.mask {
        config = config.with_forced_mask(MaskPattern::from_bits(mask)?);
    }
    let code = QrEncoder::new(config).encode_data(&data, version, options.level)?;
    info!(
        version = %code.version,
        level = %code.error_correction,
        mask = %code.mask_pattern,
        size = code.size(),
        "encoded"
    );

    let mut render_options = RenderOptions::from_config(&config);
    if let Some(size) = options.module_size {
        render_options.module_size = size;
    }
    if let Some(quiet) = options.quiet_zone {
        render_options.quiet_zone = quiet;
    }

    let raster = match options.format {
        Output::Ascii => {
            let text = render::to_ascii(&code, render_options.quiet_zone as usize);
            return write_text(output, &text);
        }
        Output::Svg => {
            let svg = render::to_svg(&code, &render_options)?;
            return write_text(output, &svg);
        }
        Output::Png => OutputFormat::Png,
        Output::Bmp => OutputFormat::Bmp,
        Output::Jpeg => OutputFormat::Jpeg,
        Output::Tiff => OutputFormat::Tiff,
        Output::Gif => OutputFormat::Gif,
    };
    let path = match output {
        Some(path) => path.to_path_buf(),
        None => PathBuf::from(format!("qr-v{}.{}", version, extension(raster))),
    };
    render::save_image(&code, &render_options, &path, raster)?;
    println!("Wrote {}", path.display());
    Ok(())
}

fn extension(format: OutputFormat) -> &'static str {
    match format {
        OutputFormat::Png => "png",
        OutputFormat::Bmp => "bmp",
        OutputFormat::Jpeg => "jpg",
        OutputFormat::Tiff => "tiff",
        OutputFormat::Gif => "gif",
    }
}

fn write_text(output: Option<&Path>, text: &str) -> Result<()> {
    match output {
        Some(path) => {
            fs::write(path, text)?;
            println!("Wrote {}", path.display());
        }
        None => println!("{text}"),
    }
    Ok(())
}

fn format_info_cmd() {
    println!("level  mask  word             hex");
    for (level, mask, word) in format_table() {
        println!(
            "{:<6} {:<5} {:015b}  0x{:04X}",
            level.to_string(),
            mask.to_string(),
            word,
            word
        );
    }
}

fn capacity_cmd(version: Option<u8>) -> Result<()> {
    let versions: Vec<Version> = match version {
        Some(n) => vec![Version::new(n)?],
        None => Version::all().collect(),
    };
    println!("version level  data  total  blocks  ecc/block  remainder");
    for version in versions {
        for row in capacity_rows(version) {
            println!(
                "{:<7} {:<6} {:<5} {:<6} {:<7} {:<10} {}",
                row.version.to_string(),
                row.ec_level.to_string(),
                row.data_codewords,
                row.total_codewords,
                row.num_blocks,
                row.ecc_per_block,
                row.remainder_bits
            );
        }
    }
    Ok(())
}

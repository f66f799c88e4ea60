//! Rasterkit CLI — transform raster images from the command line.
//!
//! Configuration comes from the environment (RASTERKIT_ENCODE_FORMAT,
//! RASTERKIT_ACCEPT_EXTENSIONS, RASTERKIT_MAX_INPUT_BYTES), with a
//! .env file honored when present.

use std::path::{Path, PathBuf};
use std::sync::Arc;

use anyhow::Context;
use clap::{Parser, Subcommand};
use serde::Serialize;

use rasterkit_cli::{init_tracing, output_path};
use rasterkit_core::ProcessorConfig;
use rasterkit_platform::{DirectoryPicker, LocalLoader};
use rasterkit_processing::{
    CropRegion, ImageAcquirer, ImageCodec, Compressor, Loaded, RasterImage, ResizeSpec,
    Transformer,
};

#[derive(Parser)]
#[command(name = "rasterkit", about = "Raster image transformation CLI")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Show dimensions and size of an image
    Info {
        /// Path to the image
        file: PathBuf,
    },
    /// Scale an image by ratio or to explicit dimensions
    Resize {
        /// Path to the image
        file: PathBuf,
        /// Scale as a percentage of the source; overrides width/height
        #[arg(long)]
        ratio: Option<f64>,
        /// Target width in pixels
        #[arg(long)]
        width: Option<f64>,
        /// Target height in pixels
        #[arg(long)]
        height: Option<f64>,
        /// Output path
        #[arg(long)]
        out: Option<PathBuf>,
    },
    /// Cut a window out of an image; reversed corners mirror the result
    Crop {
        /// Path to the image
        file: PathBuf,
        /// Left edge; omitted means 0
        #[arg(long)]
        x1: Option<u32>,
        /// Top edge; omitted means 0
        #[arg(long)]
        y1: Option<u32>,
        /// Right edge; omitted or 0 means the full width
        #[arg(long)]
        x2: Option<u32>,
        /// Bottom edge; omitted or 0 means the full height
        #[arg(long)]
        y2: Option<u32>,
        /// Output path
        #[arg(long)]
        out: Option<PathBuf>,
    },
    /// Mirror an image along the named axes
    Flip {
        /// Path to the image
        file: PathBuf,
        /// Axes to mirror: x, y, or xy
        axes: String,
        /// Output path
        #[arg(long)]
        out: Option<PathBuf>,
    },
    /// Downscale an image toward a byte budget
    Compress {
        /// Path to the image
        file: PathBuf,
        /// Byte budget for the encoded output
        max_bytes: u64,
        /// Output path
        #[arg(long)]
        out: Option<PathBuf>,
    },
    /// Pick images from a directory and report what decoded
    Pick {
        /// Directory to pick from
        dir: PathBuf,
        /// Pick every matching file instead of the first
        #[arg(long)]
        multiple: bool,
    },
}

fn print_json(value: &impl Serialize) -> anyhow::Result<()> {
    let out = serde_json::to_string_pretty(value).context("Serialize output")?;
    println!("{}", out);
    Ok(())
}

async fn write_output(
    codec: &ImageCodec,
    image: &RasterImage,
    input: &Path,
    suffix: &str,
    out: Option<PathBuf>,
) -> anyhow::Result<()> {
    let encoded = codec.encode(image, None).await?;
    let out = out.unwrap_or_else(|| output_path(input, suffix, codec.format().extension()));
    tokio::fs::write(&out, &encoded.data)
        .await
        .with_context(|| format!("Failed to write {}", out.display()))?;
    print_json(&serde_json::json!({
        "output": out.display().to_string(),
        "width": image.width(),
        "height": image.height(),
        "size_bytes": encoded.size(),
    }))
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    init_tracing();
    dotenvy::dotenv().ok();

    let config = ProcessorConfig::from_env().context("Failed to load configuration")?;
    let loader = Arc::new(LocalLoader::new(&config));
    let codec = ImageCodec::new(loader, &config).context("Failed to initialize codec")?;
    let transformer = Transformer::new(codec.clone());

    let cli = Cli::parse();

    match cli.command {
        Commands::Info { file } => {
            let image = codec.load(&file.to_string_lossy()).await?;
            let metadata = tokio::fs::metadata(&file)
                .await
                .with_context(|| format!("Failed to stat {}", file.display()))?;
            print_json(&serde_json::json!({
                "path": file.display().to_string(),
                "width": image.width(),
                "height": image.height(),
                "size_bytes": metadata.len(),
            }))?;
        }
        Commands::Resize {
            file,
            ratio,
            width,
            height,
            out,
        } => {
            let image = codec.load(&file.to_string_lossy()).await?;
            let spec = (ratio.is_some() || width.is_some() || height.is_some()).then_some(
                ResizeSpec {
                    ratio,
                    width,
                    height,
                },
            );
            let resized = transformer.resize(image, spec.as_ref()).await?;
            write_output(&codec, &resized, &file, "resized", out).await?;
        }
        Commands::Crop {
            file,
            x1,
            y1,
            x2,
            y2,
            out,
        } => {
            let image = codec.load(&file.to_string_lossy()).await?;
            let cropped = transformer
                .crop(image, &CropRegion::new(x1, y1, x2, y2))
                .await?;
            write_output(&codec, &cropped, &file, "cropped", out).await?;
        }
        Commands::Flip { file, axes, out } => {
            let image = codec.load(&file.to_string_lossy()).await?;
            let flipped = transformer.flip(image, &axes).await?;
            write_output(&codec, &flipped, &file, "flipped", out).await?;
        }
        Commands::Compress {
            file,
            max_bytes,
            out,
        } => {
            let image = codec.load(&file.to_string_lossy()).await?;
            let compressed = Compressor::new(codec.clone())
                .compress(image, max_bytes)
                .await?;
            write_output(&codec, &compressed, &file, "compressed", out).await?;
        }
        Commands::Pick { dir, multiple } => {
            let picker = Arc::new(DirectoryPicker::new(&dir, &config));
            let acquirer = ImageAcquirer::new(picker, codec.clone());
            let loaded = acquirer.request_image(multiple).await?;
            let single = matches!(loaded, Loaded::Single(_));
            let images: Vec<_> = loaded
                .into_vec()
                .iter()
                .map(|image| {
                    serde_json::json!({
                        "width": image.width(),
                        "height": image.height(),
                    })
                })
                .collect();
            print_json(&serde_json::json!({
                "count": images.len(),
                "single": single,
                "images": images,
            }))?;
        }
    }

    Ok(())
}

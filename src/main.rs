mod codec;
mod matte;
mod pipeline;
mod render;

use anyhow::{Context, Result};
use clap::{Parser, ValueEnum};
use codec::{FileSink, FileSource, OutputFormat, SpriteSink, SpriteSource};
use pipeline::NormalizeOptions;
use std::path::PathBuf;
use std::time::Instant;

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Input image file (PNG/JPEG) or text file holding a base64 data URL
    input: PathBuf,

    /// Output file path
    #[arg(short, long, default_value = "sprite.png")]
    output: PathBuf,

    /// Output sprite side length in pixels
    #[arg(short, long, default_value_t = 64, value_parser = clap::value_parser!(u32).range(8..=256))]
    resolution: u32,

    /// RGB distance below which a border-connected pixel counts as background
    #[arg(long, default_value_t = matte::MATTE_TOLERANCE)]
    matte_tolerance: f32,

    /// RGB distance below which an opaque pixel touching transparency is stripped
    #[arg(long, default_value_t = matte::FRINGE_TOLERANCE)]
    fringe_tolerance: f32,

    /// Output container
    #[arg(long, value_enum, default_value_t = Emit::Png)]
    emit: Emit,

    /// Enable debug logging
    #[arg(long)]
    debug: bool,
}

#[derive(ValueEnum, Clone, Copy, Debug)]
enum Emit {
    /// Binary PNG file
    Png,
    /// base64 PNG data URL as text
    DataUrl,
}

fn main() -> Result<()> {
    let args = Args::parse();

    // Initialize logging
    let log_level = if args.debug {
        tracing::Level::DEBUG
    } else {
        tracing::Level::INFO
    };

    tracing_subscriber::fmt()
        .with_max_level(log_level)
        .with_target(false)
        .init();

    tracing::info!("Pixelmatte starting");
    tracing::info!("Target sprite: {0}x{0}", args.resolution);
    tracing::info!(
        "Tolerances: matte={}, fringe={}",
        args.matte_tolerance,
        args.fringe_tolerance
    );

    let format = match args.emit {
        Emit::Png => OutputFormat::Png,
        Emit::DataUrl => OutputFormat::DataUrl,
    };

    let mut source = FileSource::new(&args.input);
    let mut sink = FileSink::new(&args.output, format);

    let options = NormalizeOptions {
        resolution: args.resolution,
        matte_tolerance: args.matte_tolerance,
        fringe_tolerance: args.fringe_tolerance,
    };

    run_pipeline(&mut source, &mut sink, &options)
}

fn run_pipeline<S, K>(source: &mut S, sink: &mut K, options: &NormalizeOptions) -> Result<()>
where
    S: SpriteSource,
    K: SpriteSink,
{
    let load_start = Instant::now();
    let image = source.load().context("Failed to load source image")?;
    let load_time = load_start.elapsed();

    let (width, height) = image.dimensions();
    tracing::info!("Source image: {}x{}", width, height);

    let normalize_start = Instant::now();
    let sprite = pipeline::normalize(image, options).context("Failed to normalize image")?;
    let normalize_time = normalize_start.elapsed();

    let write_start = Instant::now();
    sink.write(&sprite).context("Failed to write sprite")?;
    let write_time = write_start.elapsed();

    tracing::info!(
        "Done: load={:.1}ms, normalize={:.1}ms, write={:.1}ms",
        load_time.as_secs_f64() * 1000.0,
        normalize_time.as_secs_f64() * 1000.0,
        write_time.as_secs_f64() * 1000.0
    );

    Ok(())
}

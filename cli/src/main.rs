//! shutter: one-shot screen capture from the command line.

use std::path::PathBuf;
use std::time::{SystemTime, UNIX_EPOCH};

use anyhow::{bail, Context, Result};
use clap::{Parser, Subcommand};
use tracing::info;

use shutter_core::{Color, Region};
use shutter_platform::{capture_region, capture_screen, pixel_at, primary_display, set_dpi_aware};

#[derive(Parser)]
#[command(name = "shutter", version, about = "One-shot screen capture")]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Capture the primary display (or a region of it) to a PNG file.
    Shot {
        /// Output file. Defaults to shot-<timestamp>.png in the current directory.
        #[arg(short, long)]
        output: Option<PathBuf>,
        /// Region to capture as X,Y,WxH (e.g. 100,50,800x600).
        #[arg(short, long, allow_hyphen_values = true)]
        region: Option<Region>,
    },
    /// Read the color of a single screen pixel.
    Pixel {
        #[arg(allow_negative_numbers = true)]
        x: i32,
        #[arg(allow_negative_numbers = true)]
        y: i32,
        /// Expected color as hex (#RRGGBB); exit nonzero when it does not match.
        #[arg(long)]
        expect: Option<String>,
        /// Maximum allowed sum of channel differences for --expect.
        #[arg(long, default_value_t = 0)]
        tolerance: u8,
    },
    /// Print primary display metrics.
    Info {
        #[arg(long)]
        json: bool,
    },
}

fn init_logging() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "shutter_cli=info,shutter_platform=info".into()),
        )
        .try_init();
}

fn main() -> Result<()> {
    init_logging();

    match Cli::parse().command {
        Command::Shot { output, region } => run_shot(output, region),
        Command::Pixel { x, y, expect, tolerance } => run_pixel(x, y, expect, tolerance),
        Command::Info { json } => run_info(json),
    }
}

fn run_shot(output: Option<PathBuf>, region: Option<Region>) -> Result<()> {
    set_dpi_aware();

    let frame = match region {
        Some(region) => capture_region(region)?,
        None => capture_screen()?,
    };
    let (width, height, data) = frame.into_raw();
    info!(width, height, "captured frame");

    let image = image::RgbaImage::from_raw(width, height, data)
        .context("captured frame does not match its dimensions")?;
    let path = output.unwrap_or_else(default_output_path);
    image
        .save(&path)
        .with_context(|| format!("failed to write {}", path.display()))?;

    println!("{}", path.display());
    Ok(())
}

fn run_pixel(x: i32, y: i32, expect: Option<String>, tolerance: u8) -> Result<()> {
    set_dpi_aware();

    let color = pixel_at(x, y)?;
    println!("{color}");

    if let Some(expect) = expect {
        let expected =
            Color::from_hex(&expect).with_context(|| format!("invalid hex color '{expect}'"))?;
        if !color.matches(&expected, tolerance) {
            bail!(
                "pixel {color} does not match {expected} (distance {}, tolerance {tolerance})",
                color.distance(&expected)
            );
        }
    }
    Ok(())
}

fn run_info(json: bool) -> Result<()> {
    let display = primary_display()?;
    if json {
        println!("{}", serde_json::to_string_pretty(&display)?);
    } else {
        println!(
            "primary display: {}x{} px, scale factor {:.2}",
            display.width, display.height, display.scale_factor
        );
    }
    Ok(())
}

fn default_output_path() -> PathBuf {
    let timestamp = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .unwrap_or_default()
        .as_secs();
    PathBuf::from(format!("shot-{timestamp}.png"))
}

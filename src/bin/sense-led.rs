use anyhow::{bail, Context, Result};
use clap::{Parser, Subcommand};
use sense_matrix::{Frame, LedMatrix, MatrixError, PixelSource, Rgb, Rotation};
use std::fs;
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "sense-led")]
#[command(about = "Drive the Sense HAT 8x8 LED matrix from the command line", long_about = None)]
struct Args {
    /// Framebuffer device node; discovered via /sys/class/graphics when omitted
    #[arg(long, value_name = "PATH")]
    device: Option<PathBuf>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Print the color of one pixel
    Get { x: u8, y: u8 },
    /// Set one pixel to an R,G,B color
    Set { x: u8, y: u8, color: String },
    /// Fill the whole matrix with one R,G,B color
    Fill { color: String },
    /// Switch every pixel off
    Clear,
    /// Write a frame loaded from a JSON file (8 rows of 8 [R, G, B] cells)
    Show { path: PathBuf },
    /// Dump the current frame as JSON
    Dump,
    /// Set the mounting rotation, re-projecting the visible image
    Rotate { degrees: u16 },
    /// Mirror the image horizontally or vertically
    Flip {
        #[arg(value_parser = ["h", "v"])]
        axis: String,
    },
    /// Show a diagonal color gradient (procedural pattern)
    Gradient,
}

fn parse_color(text: &str) -> Result<Rgb> {
    let channels: Vec<i64> = text
        .split(',')
        .map(|part| part.trim().parse::<i64>())
        .collect::<std::result::Result<_, _>>()
        .with_context(|| format!("color {text:?} is not an R,G,B triple"))?;
    let rgb = match channels[..] {
        [r, g, b] => Rgb::from_channels(r, g, b)?,
        _ => {
            return Err(MatrixError::InvalidColor(format!(
                "expected 3 channels, got {}",
                channels.len()
            ))
            .into())
        }
    };
    Ok(rgb)
}

fn main() -> Result<()> {
    env_logger::init();
    let args = Args::parse();

    let mut matrix = match args.device {
        Some(path) => LedMatrix::open_path(path),
        None => LedMatrix::open()?,
    };

    match args.command {
        Command::Get { x, y } => {
            let rgb = matrix.pixel(x, y)?;
            println!("({x}, {y}) = {},{},{}", rgb.r, rgb.g, rgb.b);
        }
        Command::Set { x, y, color } => {
            matrix.set_pixel(x, y, parse_color(&color)?)?;
        }
        Command::Fill { color } => {
            matrix.fill(parse_color(&color)?)?;
        }
        Command::Clear => {
            matrix.clear()?;
        }
        Command::Show { path } => {
            let text = fs::read_to_string(&path)
                .with_context(|| format!("read frame file {}", path.display()))?;
            let rows: Vec<Vec<Rgb>> = serde_json::from_str(&text)
                .with_context(|| format!("parse frame file {}", path.display()))?;
            let frame = Frame::from_rows(&rows)?;
            matrix.set_pixels(PixelSource::Grid(frame))?;
        }
        Command::Dump => {
            let frame = matrix.pixels()?;
            println!("{}", serde_json::to_string_pretty(&frame)?);
        }
        Command::Rotate { degrees } => {
            matrix.set_rotation(Rotation::try_from(degrees)?)?;
        }
        Command::Flip { axis } => match axis.as_str() {
            "h" => matrix.flip_horizontal()?,
            "v" => matrix.flip_vertical()?,
            other => bail!("unknown flip axis {other:?}"),
        },
        Command::Gradient => {
            matrix.set_pixels(PixelSource::Generator(&|x, y| {
                Rgb::new(x * 32, y * 32, (14 - x - y) * 16)
            }))?;
        }
    }

    Ok(())
}

//! trueno-raster: draw points, lines and rectangles from the command line.
//!
//! Run: `cargo run --features cli -- --width 3 --height 3 --rect 0,0,2,2`

#![cfg_attr(test, allow(clippy::unwrap_used))]

use std::io::{self, Write};
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use tracing_subscriber::EnvFilter;
use trueno_raster::prelude::*;

/// Two points given as `X0,Y0,X1,Y1`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct Corners(Point, Point);

/// Rasterize shapes onto a canvas and print it as ASCII or HTML.
#[derive(Parser, Debug)]
#[command(name = "trueno-raster")]
#[command(author = "PAIML Team")]
#[command(version)]
#[command(about = "Rasterize points, lines and rectangles to ASCII or HTML", long_about = None)]
struct Cli {
    /// Canvas width in cells
    #[arg(long, default_value_t = 16)]
    width: u32,

    /// Canvas height in cells
    #[arg(long, default_value_t = 16)]
    height: u32,

    /// Output format (ascii or html)
    #[arg(short, long, default_value = "ascii")]
    format: RendererKind,

    /// Point to draw, as X,Y (repeatable)
    #[arg(long = "point", value_name = "X,Y", value_parser = parse_point)]
    points: Vec<Point>,

    /// Line to draw, as X0,Y0,X1,Y1 (repeatable)
    #[arg(long = "line", value_name = "X0,Y0,X1,Y1", value_parser = parse_corners)]
    lines: Vec<Corners>,

    /// Rectangle outline to draw, as X0,Y0,X1,Y1 (repeatable)
    #[arg(long = "rect", value_name = "X0,Y0,X1,Y1", value_parser = parse_corners)]
    rects: Vec<Corners>,

    /// Write output to a file instead of stdout
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Log drawing and rendering steps to stderr
    #[arg(short, long)]
    verbose: bool,
}

fn parse_coords<const N: usize>(s: &str) -> std::result::Result<[i32; N], String> {
    let parts: Vec<&str> = s.split(',').map(str::trim).collect();
    if parts.len() != N {
        return Err(format!("expected {N} comma-separated integers, got {s:?}"));
    }
    let mut coords = [0; N];
    for (slot, part) in coords.iter_mut().zip(parts) {
        *slot = part.parse().map_err(|e| format!("invalid coordinate {part:?}: {e}"))?;
    }
    Ok(coords)
}

fn parse_point(s: &str) -> std::result::Result<Point, String> {
    let [x, y] = parse_coords::<2>(s)?;
    Ok(Point::new(x, y))
}

fn parse_corners(s: &str) -> std::result::Result<Corners, String> {
    let [x0, y0, x1, y1] = parse_coords::<4>(s)?;
    Ok(Corners(Point::new(x0, y0), Point::new(x1, y1)))
}

fn init_logging(verbose: bool) {
    let default = if verbose { "debug" } else { "warn" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));
    tracing_subscriber::fmt().with_env_filter(filter).with_writer(io::stderr).init();
}

fn build_canvas(cli: &Cli) -> Canvas {
    let mut canvas = Canvas::new(cli.width, cli.height);
    canvas.draw(cli.points.as_slice());
    for &Corners(a, b) in &cli.lines {
        canvas.draw(&Line::new(a, b));
    }
    for &Corners(a, b) in &cli.rects {
        canvas.draw(&Rectangle::new(a, b));
    }
    canvas
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let canvas = build_canvas(&cli);
    tracing::info!(lit = canvas.lit_count(), format = %cli.format, "canvas ready");

    match &cli.output {
        Some(path) => canvas
            .write_to_file(cli.format, path)
            .with_context(|| format!("failed to write {}", path.display()))?,
        None => {
            let mut stdout = io::stdout().lock();
            writeln!(stdout, "{}", canvas.render_as(cli.format)).context("failed to write stdout")?;
        }
    }

    Ok(())
}

// src/main.rs

use std::fs;
use std::io::Write;
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand, ValueEnum};
use log::info;

use drawing_shapes::gradient::{ColorCycleGradient, Hsb, Rgb, UnitPoint};
use drawing_shapes::path::{vertex_bytes, DEFAULT_TOLERANCE};
use drawing_shapes::shapes::{Arc, Arrow, BlendCircles, Checkerboard, Flower, InsettableShape, Shape, Spirograph, Trapezoid};
use drawing_shapes::svg::{Paint, Style, SvgDocument};
use drawing_shapes::{Path, Rect};

#[derive(Parser, Debug)]
#[command(name = "drawing-shapes", about = "Generate parametric shapes as SVG or raw vertex buffers")]
struct Cli {
    #[command(subcommand)]
    shape: ShapeCommand,

    /// Width of the bounding rectangle
    #[arg(long, default_value_t = 300.0, global = true)]
    width: f64,

    /// Height of the bounding rectangle
    #[arg(long, default_value_t = 300.0, global = true)]
    height: f64,

    #[arg(long, value_enum, default_value_t = Format::Svg, global = true)]
    format: Format,

    /// Write to a file instead of stdout
    #[arg(short, long, global = true)]
    output: Option<PathBuf>,
}

#[derive(Clone, Copy, Debug, ValueEnum)]
enum Format {
    Svg,
    /// Flattened vertices as native-endian f64 x/y pairs
    Raw,
}

#[derive(Subcommand, Debug)]
enum ShapeCommand {
    Arrow {
        #[arg(long, default_value_t = 50.0)]
        amount: f64,
    },
    Arc {
        /// Start angle in degrees, 0 pointing up
        #[arg(long, default_value_t = 0.0)]
        start: f64,
        /// End angle in degrees
        #[arg(long, default_value_t = 110.0)]
        end: f64,
        #[arg(long)]
        clockwise: bool,
        #[arg(long, default_value_t = 0.0)]
        inset: f64,
        #[arg(long, default_value_t = 40.0)]
        stroke_width: f64,
    },
    Flower {
        #[arg(long, default_value_t = -20.0, allow_hyphen_values = true)]
        offset: f64,
        #[arg(long, default_value_t = 100.0)]
        petal_width: f64,
    },
    Checkerboard {
        #[arg(long, default_value_t = 4)]
        rows: usize,
        #[arg(long, default_value_t = 4)]
        columns: usize,
    },
    Spirograph {
        #[arg(long, default_value_t = 100, allow_hyphen_values = true)]
        inner: i64,
        #[arg(long, default_value_t = 40, allow_hyphen_values = true)]
        outer: i64,
        #[arg(long, default_value_t = 40, allow_hyphen_values = true)]
        distance: i64,
        #[arg(long, default_value_t = 1.0)]
        amount: f64,
        /// Hue of the stroke, 0 to 1
        #[arg(long, default_value_t = 0.0)]
        hue: f64,
    },
    Trapezoid {
        #[arg(long, default_value_t = 50.0, allow_hyphen_values = true)]
        inset: f64,
    },
    Blend {
        #[arg(long, default_value_t = 1.0)]
        amount: f64,
    },
    Gradient {
        #[arg(long, default_value_t = 0.0)]
        cycle1: f64,
        #[arg(long, default_value_t = 0.0)]
        cycle2: f64,
        #[arg(long, default_value_t = 100)]
        steps: u32,
        #[arg(long, default_value_t = 0.2)]
        top: f64,
        #[arg(long, default_value_t = 0.2)]
        left: f64,
        #[arg(long, default_value_t = 0.2)]
        bottom: f64,
        #[arg(long, default_value_t = 0.2)]
        right: f64,
    },
}

fn render(command: &ShapeCommand, bounds: Rect) -> Result<(Vec<Path>, SvgDocument)> {
    let mut doc = SvgDocument::new(bounds);
    let mut paths = Vec::new();

    match *command {
        ShapeCommand::Arrow { amount } => {
            let path = Arrow::new(amount).path(bounds)?;
            doc.add_path(&path, &Style::fill(Rgb::BLACK));
            paths.push(path);
        }
        ShapeCommand::Arc {
            start,
            end,
            clockwise,
            inset,
            stroke_width,
        } => {
            // Inset by half the stroke so the line stays inside the bounds.
            let arc = Arc::from_degrees(start, end, clockwise).inset(inset).inset(stroke_width / 2.0);
            let path = arc.path(bounds)?;
            doc.add_path(&path, &Style::stroke(Rgb::BLUE, stroke_width));
            paths.push(path);
        }
        ShapeCommand::Flower { offset, petal_width } => {
            let path = Flower::new(offset, petal_width).path(bounds)?;
            doc.add_path(&path, &Style::fill(Rgb::RED));
            paths.push(path);
        }
        ShapeCommand::Checkerboard { rows, columns } => {
            let path = Checkerboard::new(rows, columns).path(bounds)?;
            doc.add_path(&path, &Style::fill(Rgb::BLACK));
            paths.push(path);
        }
        ShapeCommand::Spirograph {
            inner,
            outer,
            distance,
            amount,
            hue,
        } => {
            let path = Spirograph::new(inner, outer, distance, amount).path(bounds)?;
            let color = Hsb::new(hue, 1.0, 1.0).to_rgb();
            doc.add_path(&path, &Style::stroke(color, 1.0));
            paths.push(path);
        }
        ShapeCommand::Trapezoid { inset } => {
            let path = Trapezoid::new(inset).path(bounds)?;
            doc.add_path(&path, &Style::fill(Rgb::BLACK));
            paths.push(path);
        }
        ShapeCommand::Blend { amount } => {
            doc = doc.with_background(Rgb::BLACK);
            for layer in BlendCircles::new(amount).layers(bounds)? {
                let mut style = Style::fill(layer.color);
                style.screen_blend = true;
                doc.add_path(&layer.path, &style);
                paths.push(layer.path);
            }
        }
        ShapeCommand::Gradient {
            cycle1,
            cycle2,
            steps,
            top,
            left,
            bottom,
            right,
        } => {
            let gradient = ColorCycleGradient {
                cycle_position_1: cycle1,
                cycle_position_2: cycle2,
                steps,
                start: UnitPoint::new(top, left),
                end: UnitPoint::new(bottom, right),
            };
            let mut path = Path::new();
            path.add_rect(bounds);
            let style = Style {
                fill: Paint::Gradient(gradient.gradient(1.0)?),
                stroke: None,
                screen_blend: false,
            };
            doc.add_path(&path, &style);
            paths.push(path);
        }
    }

    Ok((paths, doc))
}

fn main() -> Result<()> {
    env_logger::init();
    let cli = Cli::parse();

    let bounds = Rect::from_size(cli.width, cli.height);
    let (paths, doc) = render(&cli.shape, bounds).with_context(|| format!("failed to generate {:?}", cli.shape))?;
    info!(
        "generated {} path(s), {} segment(s) in {}x{}",
        paths.len(),
        paths.iter().map(Path::len).sum::<usize>(),
        cli.width,
        cli.height
    );

    let bytes = match cli.format {
        Format::Svg => doc.finish().into_bytes(),
        Format::Raw => {
            let vertices: Vec<_> = paths.iter().flat_map(|p| p.flatten(DEFAULT_TOLERANCE).points()).collect();
            vertex_bytes(&vertices).to_vec()
        }
    };

    match &cli.output {
        Some(file) => {
            fs::write(file, &bytes).with_context(|| format!("failed to write {}", file.display()))?;
            info!("wrote {} bytes to {}", bytes.len(), file.display());
        }
        None => std::io::stdout().write_all(&bytes).context("failed to write to stdout")?,
    }
    Ok(())
}

//! Command line front end.
//!
//! Subcommands:
//! - `render <sketch.ron>`: draw a sketch file to SVG
//! - `defaults <family>`: print a starter sketch file
//! - `poster`: lay out a folder of SVGs as a LaTeX poster
use std::path::PathBuf;

use anyhow::{anyhow, Context, Result};
use clap::{Parser, Subcommand};
use plotty_sketches::prelude::*;
use tracing::info;
use tracing_subscriber::{fmt, EnvFilter};

#[derive(Parser)]
#[command(name = "plotsketch", about = "Seed-deterministic line art for pen plotters")]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Draw a RON sketch file and write the SVG.
    Render {
        /// Sketch file.
        sketch: PathBuf,

        /// Output SVG path.
        #[arg(short, long, default_value = "sketch.svg")]
        output: PathBuf,

        /// Override the seed stored in the file.
        #[arg(long, conflicts_with = "randomize")]
        seed: Option<i64>,

        /// Draw with a fresh random seed.
        #[arg(long)]
        randomize: bool,

        /// Override the paper size with an A-number (2 to 5).
        #[arg(long)]
        paper: Option<u32>,
    },
    /// Print a default sketch file for a family (line-grid, roulette, terrain).
    Defaults { family: String },
    /// Build a LaTeX poster from a folder of SVG sketches.
    Poster {
        #[arg(long)]
        input: PathBuf,

        #[arg(short, long, default_value = "output")]
        output: PathBuf,

        #[arg(long)]
        rows: u32,

        #[arg(long)]
        columns: u32,

        /// Total left + right margin in mm.
        #[arg(long, default_value_t = 20.0)]
        width_margin: f64,

        /// Total top + bottom margin in mm.
        #[arg(long, default_value_t = 30.0)]
        height_margin: f64,

        #[arg(long, default_value = r"\today")]
        lfooter: String,

        #[arg(long, default_value = r"\#001")]
        rfooter: String,
    },
}

fn run(cli: Cli) -> Result<()> {
    match cli.command {
        Command::Render {
            sketch,
            output,
            seed,
            randomize,
            paper,
        } => {
            let mut file = SketchFile::load(&sketch)
                .with_context(|| format!("loading {}", sketch.display()))?;
            if let Some(seed) = seed {
                file.sketch = file.sketch.with_seed(seed);
            } else if randomize {
                file.sketch = file.sketch.randomized();
            }
            if let Some(number) = paper {
                file.canvas.paper = PaperSize::from_number(number)
                    .ok_or_else(|| anyhow!("no A{number} paper, pick 2 to 5"))?;
            }

            let mut renderer = SvgRenderer::new(&file.canvas.canvas());
            match file.draw(&mut renderer)? {
                Some(lines) => {
                    renderer
                        .save(&output)
                        .with_context(|| format!("writing {}", output.display()))?;
                    info!(
                        sketch = file.sketch.name(),
                        seed = file.sketch.seed(),
                        polylines = lines.0.len(),
                        output = %output.display(),
                        "saved"
                    );
                }
                None => info!("nothing drawn, no file written"),
            }
        }
        Command::Defaults { family } => {
            let sketch = SketchConfig::default_for(&family)
                .ok_or_else(|| anyhow!("unknown sketch family {family}"))?;
            for range in sketch.param_ranges() {
                println!(
                    "// {}: {} to {}, step {}",
                    range.name, range.min, range.max, range.step
                );
            }
            println!("{}", SketchFile::new(sketch).to_ron()?);
        }
        Command::Poster {
            input,
            output,
            rows,
            columns,
            width_margin,
            height_margin,
            lfooter,
            rfooter,
        } => {
            let layout = PosterLayout {
                rows,
                columns,
                width_margin,
                height_margin,
                left_footer: lfooter,
                right_footer: rfooter,
            };
            layout
                .build(&input, &output)
                .with_context(|| format!("building poster from {}", input.display()))?;
        }
    }
    Ok(())
}

fn main() -> Result<()> {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    fmt().with_env_filter(filter).init();

    run(Cli::parse())
}

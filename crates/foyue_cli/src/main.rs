//! Foyue CLI
//!
//! Draw cards and wrapped text with the drawing helper and print what the
//! surface was asked to do.

use anyhow::{Context, Result};
use clap::{Args, Parser, Subcommand};
use foyue_paint::{
    FontMeasurer, MonospaceMeasurer, MultiTextRequest, Paint, PaintConfig, RecordingSurface,
    SurfaceCommand, TextProps,
};
use std::path::{Path, PathBuf};
use tracing::{debug, info};
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

mod card;

use card::CardArgs;

/// Config file picked up from the working directory when `--config` is absent
const DEFAULT_CONFIG: &str = "foyue.toml";

#[derive(Parser)]
#[command(name = "foyue")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(about = "Foyue drawing helper CLI", long_about = None)]
struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Paint config file (TOML)
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Render a card and print the recorded commands as JSON
    Card(CardArgs),

    /// Wrap text and print one line per row
    Wrap {
        /// Text to wrap
        text: String,

        /// Maximum line width
        #[arg(short = 'w', long)]
        max_width: f32,

        /// Stop with an ellipsis before a line would start past this height
        #[arg(long)]
        max_height: Option<f32>,

        /// Gap between lines
        #[arg(short, long)]
        gap: Option<f32>,

        /// CSS font, e.g. "16px sans-serif"
        #[arg(short, long)]
        font: Option<String>,

        #[command(flatten)]
        measure: MeasureArgs,
    },
}

/// How the recording surface measures text
#[derive(Args, Clone, Debug, Default)]
pub struct MeasureArgs {
    /// Fixed advance per character
    #[arg(long, conflicts_with = "font_file")]
    advance: Option<f32>,

    /// Measure with glyph advances from a TrueType/OpenType font
    #[arg(long)]
    font_file: Option<PathBuf>,
}

impl MeasureArgs {
    pub fn surface(&self, config: &PaintConfig) -> Result<RecordingSurface> {
        if let Some(path) = &self.font_file {
            let measurer = FontMeasurer::from_file(path)?
                .with_fallback_size(config.fallback_font_size);
            debug!("Measuring text with {}", path.display());
            return Ok(RecordingSurface::with_measurer(measurer));
        }

        let measurer = match self.advance {
            Some(advance) => MonospaceMeasurer::fixed(advance),
            None => MonospaceMeasurer::relative(0.5, config.fallback_font_size),
        };
        Ok(RecordingSurface::with_measurer(measurer))
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    // Initialize logging
    let filter = if cli.verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"))
    };

    tracing_subscriber::registry()
        .with(fmt::layer().with_writer(std::io::stderr))
        .with(filter)
        .init();

    let config = load_config(cli.config.as_deref())?;

    match cli.command {
        Commands::Card(args) => cmd_card(&args, config).await,
        Commands::Wrap {
            text,
            max_width,
            max_height,
            gap,
            font,
            measure,
        } => cmd_wrap(&text, max_width, max_height, gap, font, &measure, config),
    }
}

fn load_config(path: Option<&Path>) -> Result<PaintConfig> {
    match path {
        Some(path) => PaintConfig::load(path)
            .with_context(|| format!("Failed to load {}", path.display())),
        None if Path::new(DEFAULT_CONFIG).exists() => PaintConfig::load(DEFAULT_CONFIG)
            .with_context(|| format!("Failed to load {}", DEFAULT_CONFIG)),
        None => Ok(PaintConfig::default()),
    }
}

async fn cmd_card(args: &CardArgs, config: PaintConfig) -> Result<()> {
    let surface = args.measure.surface(&config)?;
    let mut paint = Paint::with_config(surface, config);

    card::render(&mut paint, args).await?;

    let commands = paint.into_surface().take_commands();
    for command in &commands {
        if let SurfaceCommand::Stroke { path, .. } = command {
            if let Some(bounds) = path.bounds() {
                debug!(
                    "Border bounds: {}x{} at ({}, {})",
                    bounds.width, bounds.height, bounds.x, bounds.y
                );
            }
        }
    }
    info!("Recorded {} commands", commands.len());

    let json = if args.compact {
        serde_json::to_string(&commands)?
    } else {
        serde_json::to_string_pretty(&commands)?
    };
    println!("{}", json);
    Ok(())
}

fn cmd_wrap(
    text: &str,
    max_width: f32,
    max_height: Option<f32>,
    gap: Option<f32>,
    font: Option<String>,
    measure: &MeasureArgs,
    config: PaintConfig,
) -> Result<()> {
    let surface = measure.surface(&config)?;
    let mut paint = Paint::with_config(surface, config);

    let mut style = TextProps::new();
    style.font = font;
    let mut request = MultiTextRequest::new(text, 0.0, 0.0, max_width).style(style);
    request.max_height = max_height;
    request.gap = gap;

    paint.draw_multi_text(&request);

    for command in paint.surface().commands() {
        if let SurfaceCommand::FillText { text, position, .. }
        | SurfaceCommand::StrokeText { text, position, .. } = command
        {
            println!("{}\t{}", position.y, text);
        }
    }
    Ok(())
}

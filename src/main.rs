use anyhow::Result;
use caretrek_assets::{
    asset::DrawContext,
    generate::{self, Style},
    logging,
    palette::Palette,
    text,
};
use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Debug, Parser)]
#[clap(
    name = "caretrek-assets",
    about = "Draw the CareTrek app icon, favicon, splash and banner assets"
)]
struct Args {
    /// Output directory.
    #[clap(short, long, value_name = "DIR", default_value = "assets", global = true)]
    output: PathBuf,

    /// Font used for the app name and tagline (defaults to a system sans-serif)
    #[clap(long, value_name = "PATH", env = "CARETREK_FONT", global = true)]
    font: Option<PathBuf>,

    /// App name drawn on the splash screen and banner
    #[clap(long, default_value = "CareTrek", global = true)]
    app_name: String,

    /// Tagline drawn under the app name on the splash screen
    #[clap(long, default_value = "Bridging Generations", global = true)]
    tagline: String,

    /// Primary colour (CSS color format), sage green by default
    #[clap(long, global = true)]
    primary: Option<String>,

    /// Secondary colour (CSS color format), warm orange by default
    #[clap(long, global = true)]
    secondary: Option<String>,

    /// Accent colour (CSS color format), warm beige by default
    #[clap(long, global = true)]
    accent: Option<String>,

    /// Print debug diagnostics to stderr
    #[clap(short, long, global = true)]
    verbose: bool,

    #[clap(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Flat heart icons over ring gradients
    Creative,
    /// Layered hearts with shadows and decorations
    Professional,
    /// Centre an existing logo on each icon canvas, never upscaling it
    Fit {
        /// Path to the source logo.
        #[clap(long, value_name = "INPUT", default_value = "assets/source.png")]
        source: PathBuf,
    },
    /// Expo layout: full-bleed icon, padded adaptive icon and splash
    Expo {
        /// Path to the source logo.
        #[clap(long, value_name = "INPUT", default_value = "assets/source.png")]
        source: PathBuf,
    },
}

fn main() -> Result<()> {
    let args = Args::parse();
    logging::init(args.verbose)?;

    // Failures are reported, not turned into an exit status.
    if let Err(err) = run(args) {
        println!("❌ Error creating icons: {err}");
        eprintln!("{err:?}");
    }

    Ok(())
}

fn run(args: Args) -> Result<()> {
    let palette = Palette::from_overrides(
        args.primary.as_deref(),
        args.secondary.as_deref(),
        args.accent.as_deref(),
    )?;

    let (style, source) = match args.command {
        Command::Creative => (Style::Creative, None),
        Command::Professional => (Style::Professional, None),
        Command::Fit { source } => (Style::Fit, Some(source)),
        Command::Expo { source } => (Style::Expo, Some(source)),
    };

    let font = if style.needs_source() {
        None
    } else {
        text::load_font(args.font.as_deref())?
    };

    let ctx = DrawContext {
        palette,
        font,
        app_name: args.app_name,
        tagline: args.tagline,
    };

    let generate_args = generate::Args {
        style,
        output: args.output,
        source: source.unwrap_or_default(),
    };
    generate::generate_assets(&generate_args, &ctx)?;

    Ok(())
}

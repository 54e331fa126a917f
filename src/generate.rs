use crate::asset::{save_png, Asset, AssetSpec, DrawContext};
use crate::manifest::{write_manifest, Manifest, ManifestEntry};
use crate::{creative, professional, resize};
use anyhow::{Context, Result};
use image::{DynamicImage, RgbaImage};
use std::path::{Path, PathBuf};
use tracing::debug;

/// Which asset set to produce.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Style {
    /// Flat hearts over ring gradients
    Creative,
    /// Layered hearts, shadows and decorations
    Professional,
    /// Source logo shrunk to fit and centred on each canvas
    Fit,
    /// Source logo in the Expo icon/adaptive/splash layout
    Expo,
}

impl Style {
    pub fn name(&self) -> &'static str {
        match self {
            Style::Creative => "creative",
            Style::Professional => "professional",
            Style::Fit => "fit",
            Style::Expo => "expo",
        }
    }

    pub fn needs_source(&self) -> bool {
        matches!(self, Style::Fit | Style::Expo)
    }
}

#[derive(Debug)]
pub struct Args {
    pub style: Style,
    pub output: PathBuf,
    pub source: PathBuf,
}

/// Generate one asset set into `args.output`.
///
/// Returns `Ok(None)` without writing anything when the style needs a source
/// image and none exists at `args.source`.
pub fn generate_assets(args: &Args, ctx: &DrawContext) -> Result<Option<Manifest>> {
    let source = if args.style.needs_source() {
        match load_source(&args.source)? {
            Some(source) => Some(source),
            None => return Ok(None),
        }
    } else {
        None
    };

    std::fs::create_dir_all(&args.output).context("Can't create output directory")?;

    let mut manifest = Manifest::new(args.style.name());
    match (args.style, source) {
        (Style::Creative, _) => {
            println!("🎨 Creating beautiful {} icons...\n", ctx.app_name);
            generate_drawn(creative::ASSETS, &args.output, ctx, &mut manifest)?;
        }
        (Style::Professional, _) => {
            println!("🎨 Creating professional designer-quality icons...\n");
            generate_drawn(professional::ASSETS, &args.output, ctx, &mut manifest)?;
        }
        (Style::Fit, Some(source)) => {
            let assets = resize::fit_assets(&source);
            write_all(assets, &args.output, &mut manifest)?;
        }
        (Style::Expo, Some(source)) => {
            let assets = resize::expo_assets(&source);
            write_all(assets, &args.output, &mut manifest)?;
        }
        (style, None) => anyhow::bail!("{} style needs a source image", style.name()),
    }

    write_manifest(&args.output, &manifest)?;
    print_summary(args.style, &manifest);

    Ok(Some(manifest))
}

/// Open the source logo, or report that it is missing.
fn load_source(path: &Path) -> Result<Option<DynamicImage>> {
    if !path.exists() {
        println!("Error: Source image not found at {}", path.display());
        return Ok(None);
    }

    let source = image::open(path)
        .with_context(|| format!("Failed to load image: {}", path.display()))?;
    println!("Loaded source image: {}x{}", source.width(), source.height());
    Ok(Some(source))
}

fn generate_drawn(
    assets: &[Asset],
    out_dir: &Path,
    ctx: &DrawContext,
    manifest: &mut Manifest,
) -> Result<()> {
    for asset in assets {
        debug!(file = asset.spec.file_name, "drawing");
        let image = (asset.draw)(ctx);
        write_one(&asset.spec, &image, out_dir, manifest)?;
    }
    Ok(())
}

fn write_all(
    assets: Vec<(AssetSpec, RgbaImage)>,
    out_dir: &Path,
    manifest: &mut Manifest,
) -> Result<()> {
    for (spec, image) in &assets {
        write_one(spec, image, out_dir, manifest)?;
    }
    Ok(())
}

fn write_one(
    spec: &AssetSpec,
    image: &RgbaImage,
    out_dir: &Path,
    manifest: &mut Manifest,
) -> Result<()> {
    save_png(image, &out_dir.join(spec.file_name))?;
    println!("✓ Created {} ({}x{})", spec.file_name, spec.width, spec.height);
    manifest.add_image(ManifestEntry::from(spec));
    Ok(())
}

fn print_summary(style: Style, manifest: &Manifest) {
    println!("\n✅ All {} icons generated successfully!", style.name());
    println!("\nGenerated files:");
    for entry in &manifest.images {
        let purpose = entry.purpose.as_deref().unwrap_or("");
        println!(
            "  • {} ({}x{}) - {}",
            entry.filename, entry.width, entry.height, purpose
        );
    }
}

use anyhow::Result;
use caretrek_assets::verify::verify_dir;
use std::path::PathBuf;

fn main() -> Result<()> {
    let dir = PathBuf::from(std::env::args().nth(1).unwrap_or_else(|| "assets".to_string()));

    println!("Checking generated assets in: {}", dir.display());
    let checks = verify_dir(&dir)?;

    let mut failed = 0;
    for check in &checks {
        match &check.outcome {
            Ok(()) => println!(
                "  ✓ {} ({}x{})",
                check.entry.filename, check.entry.width, check.entry.height
            ),
            Err(err) => {
                failed += 1;
                println!("  ✗ {err}");
            }
        }
    }

    if failed > 0 {
        println!("\n⚠ {} of {} assets break their contract", failed, checks.len());
        std::process::exit(1);
    }

    println!("\n✓ All {} assets match the manifest", checks.len());
    Ok(())
}

//! Marketing command implementation.
//!
//! Renders the shot deck into per-device marketing slides.

use std::path::PathBuf;

use clap::Args;

use crate::discovery::plan_shots;
use crate::error::{Result, ShotError};
use crate::render::{write_png, MarketingRenderer};
use crate::types::{builtin_deck, load_deck, validate_deck};

use super::frame::load_png;

/// Render marketing slides from the shot deck
#[derive(Args, Debug)]
pub struct MarketingArgs {
    /// Root folder containing per-device screenshot folders (iphone/, ipad/)
    #[arg(long)]
    pub source_root: PathBuf,

    /// Root folder for rendered slides
    #[arg(long)]
    pub output_root: PathBuf,

    /// Optional YAML deck file replacing the built-in shot deck
    #[arg(long)]
    pub deck: Option<PathBuf>,

    /// Label drawn in the branding badge
    #[arg(long, default_value = "NOTELAYER")]
    pub badge_label: String,
}

pub fn run(args: MarketingArgs) -> Result<()> {
    let deck = match &args.deck {
        Some(path) => load_deck(path)?,
        None => builtin_deck(),
    };
    validate_deck(&deck)?;

    let plan = plan_shots(&args.source_root, &args.output_root, &deck)?;
    let mut renderer = MarketingRenderer::new(&args.badge_label);

    let total = plan.jobs.len();
    let mut failures = 0usize;
    for job in &plan.jobs {
        let result = load_png(&job.source)
            .and_then(|source| renderer.render(&source, &job.descriptor, job.device))
            .and_then(|canvas| write_png(&canvas, &job.output));
        match result {
            Ok(()) => println!("Rendered: {}", job.output.display()),
            Err(err) => {
                failures += 1;
                eprintln!("Failed: {}: {}", job.source.display(), err);
            }
        }
    }

    if !plan.missing.is_empty() {
        println!("Missing source screenshots:");
        for path in &plan.missing {
            println!("  - {}", path.display());
        }
    }

    if failures > 0 || !plan.missing.is_empty() {
        return Err(ShotError::Batch {
            message: format!(
                "{} of {} slides failed, {} inputs missing",
                failures,
                total,
                plan.missing.len()
            ),
        });
    }

    println!("Marketing composites complete.");
    Ok(())
}

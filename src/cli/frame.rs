//! Frame command implementation.
//!
//! Renders every PNG in a directory inside the device chassis.

use std::path::{Path, PathBuf};

use clap::Args;
use image::RgbaImage;

use crate::discovery::scan_screenshots;
use crate::error::{Result, ShotError};
use crate::render::{render_frame, write_png};

/// Render screenshots inside a device chassis
#[derive(Args, Debug)]
pub struct FrameArgs {
    /// Directory containing raw PNG screenshots
    #[arg(long)]
    pub source_dir: PathBuf,

    /// Directory for framed output, created if missing
    #[arg(long)]
    pub output_dir: PathBuf,
}

pub fn run(args: FrameArgs) -> Result<()> {
    let sources = scan_screenshots(&args.source_dir)?;

    let mut failures = 0usize;
    for source_path in &sources {
        let output_path = match source_path.file_name() {
            Some(name) => args.output_dir.join(name),
            None => continue,
        };
        match frame_one(source_path, &output_path) {
            Ok(()) => println!("Rendered: {}", output_path.display()),
            Err(err) => {
                failures += 1;
                eprintln!("Failed: {}: {}", source_path.display(), err);
            }
        }
    }

    if failures > 0 {
        return Err(ShotError::Batch {
            message: format!(
                "{} of {} screenshots failed to render",
                failures,
                sources.len()
            ),
        });
    }

    println!("Completed {} framed screenshots.", sources.len());
    Ok(())
}

fn frame_one(source_path: &Path, output_path: &Path) -> Result<()> {
    let source = load_png(source_path)?;
    let framed = render_frame(&source)?;
    write_png(&framed, output_path)
}

pub(crate) fn load_png(path: &Path) -> Result<RgbaImage> {
    let img = image::open(path).map_err(|e| ShotError::Decode {
        path: path.to_path_buf(),
        message: e.to_string(),
    })?;
    Ok(img.to_rgba8())
}

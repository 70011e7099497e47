//! Input discovery: screenshot scanning and deck-driven batch planning.

use std::path::{Path, PathBuf};

use walkdir::WalkDir;

use crate::error::{Result, ShotError};
use crate::types::{Device, ShotDescriptor};

/// Sentinel ordering unindexed names after every indexed one.
const UNINDEXED: u32 = u32::MAX;

/// Extract the shot index embedded in a filename as `-<digits>-`, e.g.
/// `screenshot-12-settings.png` yields `12`.
pub fn natural_index(name: &str) -> Option<u32> {
    let bytes = name.as_bytes();
    let mut i = 0;
    while i < bytes.len() {
        if bytes[i] == b'-' {
            let start = i + 1;
            let mut end = start;
            while end < bytes.len() && bytes[end].is_ascii_digit() {
                end += 1;
            }
            if end > start && end < bytes.len() && bytes[end] == b'-' {
                if let Ok(n) = name[start..end].parse() {
                    return Some(n);
                }
            }
        }
        i += 1;
    }
    None
}

fn sort_key(path: &Path) -> (u32, String) {
    let name = path
        .file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_default();
    (natural_index(&name).unwrap_or(UNINDEXED), name)
}

/// List the PNG screenshots directly inside `dir`, in natural shot order:
/// embedded index first, then filename. Fails when the directory is missing
/// or holds no PNGs, since an empty batch is always a misconfiguration.
pub fn scan_screenshots(dir: &Path) -> Result<Vec<PathBuf>> {
    if !dir.is_dir() {
        return Err(ShotError::Config {
            message: format!("source directory does not exist: {}", dir.display()),
            help: Some("pass --source-dir pointing at a folder of PNG screenshots".to_string()),
        });
    }

    let mut files: Vec<PathBuf> = WalkDir::new(dir)
        .max_depth(1)
        .into_iter()
        .filter_map(|e| e.ok())
        .filter(|e| e.file_type().is_file())
        .map(|e| e.into_path())
        .filter(|p| {
            p.extension()
                .map(|ext| ext.eq_ignore_ascii_case("png"))
                .unwrap_or(false)
        })
        .collect();

    if files.is_empty() {
        return Err(ShotError::Config {
            message: format!("no PNG screenshots found in: {}", dir.display()),
            help: Some("the frame renderer expects at least one .png file".to_string()),
        });
    }

    files.sort_by_key(|p| sort_key(p));
    Ok(files)
}

/// One marketing render: a deck entry bound to a concrete input and output.
#[derive(Debug, Clone, PartialEq)]
pub struct ShotJob {
    pub device: Device,
    /// 1-based position in the deck; used for the `NN-` output prefix.
    pub index: usize,
    pub descriptor: ShotDescriptor,
    pub source: PathBuf,
    pub output: PathBuf,
}

/// The planned batch plus the inputs the deck expected but could not find.
#[derive(Debug, Clone, Default)]
pub struct ShotPlan {
    pub jobs: Vec<ShotJob>,
    pub missing: Vec<PathBuf>,
}

/// Plan the marketing batch for every device category present under
/// `source_root`.
///
/// A device directory that is absent entirely is skipped without complaint;
/// a deck entry whose file is absent inside a present directory is recorded
/// as missing. Inputs are `<device>/<device>-<source>.png`, outputs
/// `<device>/<NN>-<slug>.png`.
pub fn plan_shots(
    source_root: &Path,
    output_root: &Path,
    deck: &[ShotDescriptor],
) -> Result<ShotPlan> {
    if !source_root.is_dir() {
        return Err(ShotError::Config {
            message: format!("source root does not exist: {}", source_root.display()),
            help: Some(
                "pass --source-root pointing at a folder with iphone/ and ipad/ subfolders"
                    .to_string(),
            ),
        });
    }

    let mut plan = ShotPlan::default();
    for device in Device::ALL {
        let device_dir = source_root.join(device.key());
        if !device_dir.is_dir() {
            continue;
        }

        for (index, descriptor) in deck.iter().enumerate() {
            let index = index + 1;
            let source = device_dir.join(format!("{}-{}.png", device.key(), descriptor.source));
            if !source.is_file() {
                plan.missing.push(source);
                continue;
            }
            let output = output_root
                .join(device.key())
                .join(format!("{:02}-{}.png", index, descriptor.slug));
            plan.jobs.push(ShotJob {
                device,
                index,
                descriptor: descriptor.clone(),
                source,
                output,
            });
        }
    }
    Ok(plan)
}

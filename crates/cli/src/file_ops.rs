//! Writing whole files and extracted sections into the destination.

use std::fs;
use std::path::{Path, PathBuf};

use airules_core::{HeadingItem, extract_selected_headings};
use anyhow::{Context, Result};

/// Flags shared by every write.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct GenerateOptions {
    /// Report what would happen without touching disk.
    pub dry_run: bool,
    /// Overwrite files that already exist.
    pub force: bool,
}

/// What a single write did, or would have done.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum WriteOutcome {
    /// Whole file copied.
    Copied {
        /// Source file.
        source: PathBuf,
        /// Written file.
        target: PathBuf,
        /// Set when only reported.
        dry_run: bool,
    },
    /// Sections extracted and written.
    Extracted {
        /// Written file.
        target: PathBuf,
        /// Headings that made it into the output.
        headings: Vec<HeadingItem>,
        /// Whether front matter was carried over.
        with_front_matter: bool,
        /// Set when only reported.
        dry_run: bool,
    },
    /// Target exists and `--force` was not given.
    SkippedExisting {
        /// Existing file.
        target: PathBuf,
    },
    /// None of the selected headings exist in the source.
    NothingExtracted,
}

impl WriteOutcome {
    /// Human readable summary, `None` when there is nothing to say.
    pub fn message(&self) -> Option<String> {
        match self {
            WriteOutcome::Copied {
                source,
                target,
                dry_run: true,
            } => Some(format!(
                "Would copy {} to {}",
                source.display(),
                target.display()
            )),
            WriteOutcome::Copied {
                source,
                target,
                dry_run: false,
            } => Some(format!(
                "Copied {} to {}",
                file_name(source),
                target.display()
            )),
            WriteOutcome::Extracted {
                target,
                headings,
                with_front_matter,
                dry_run,
            } => Some(format!(
                "{} {} sections ({}){} to {}",
                if *dry_run { "Would write" } else { "Extracted" },
                headings.len(),
                format_headings_list(headings),
                if *with_front_matter {
                    " with frontmatter"
                } else {
                    ""
                },
                target.display()
            )),
            WriteOutcome::SkippedExisting { target } => Some(format!(
                "File {} already exists. Use --force to overwrite.",
                file_name(target)
            )),
            WriteOutcome::NothingExtracted => None,
        }
    }
}

/// Quotes up to three headings; longer lists show the first two and a count.
pub fn format_headings_list(headings: &[HeadingItem]) -> String {
    let quoted = |items: &[HeadingItem]| {
        items
            .iter()
            .map(|item| format!("\"{}\"", item.text))
            .collect::<Vec<_>>()
            .join(", ")
    };

    if headings.len() <= 3 {
        quoted(headings)
    } else {
        format!("{}, and {} more", quoted(&headings[..2]), headings.len() - 2)
    }
}

/// Copies `source` byte-for-byte into `target_dir` under its own file name.
pub fn copy_whole_file(
    source: &Path,
    target_dir: &Path,
    options: GenerateOptions,
) -> Result<WriteOutcome> {
    let target = target_path(source, target_dir);
    if target.exists() && !options.force {
        return Ok(WriteOutcome::SkippedExisting { target });
    }

    if !options.dry_run {
        fs::copy(source, &target).with_context(|| {
            format!("Failed to copy {} to {}", source.display(), target.display())
        })?;
    }

    Ok(WriteOutcome::Copied {
        source: source.to_path_buf(),
        target,
        dry_run: options.dry_run,
    })
}

/// Writes the selected sections of `content` into `target_dir`.
///
/// Headings missing from the document are logged and left out. Nothing is
/// written when none of them is found.
pub fn write_selected_headings(
    content: &str,
    headings: &[HeadingItem],
    source: &Path,
    target_dir: &Path,
    options: GenerateOptions,
) -> Result<WriteOutcome> {
    let selection = extract_selected_headings(content, headings)
        .with_context(|| format!("Failed to parse {}", source.display()))?;

    for missing in &selection.missing {
        tracing::error!(
            "Heading {:?} not found in {}",
            missing,
            source.display()
        );
    }

    let Some(output) = selection.content else {
        return Ok(WriteOutcome::NothingExtracted);
    };

    let target = target_path(source, target_dir);
    if target.exists() && !options.force {
        return Ok(WriteOutcome::SkippedExisting { target });
    }

    if !options.dry_run {
        fs::write(&target, output)
            .with_context(|| format!("Failed to write {}", target.display()))?;
    }

    Ok(WriteOutcome::Extracted {
        target,
        headings: selection
            .extracted
            .into_iter()
            .map(HeadingItem::selected)
            .collect(),
        with_front_matter: selection.has_front_matter,
        dry_run: options.dry_run,
    })
}

fn target_path(source: &Path, target_dir: &Path) -> PathBuf {
    target_dir.join(source.file_name().unwrap_or(source.as_os_str()))
}

fn file_name(path: &Path) -> String {
    path.file_name()
        .map(|name| name.to_string_lossy().into_owned())
        .unwrap_or_else(|| path.display().to_string())
}

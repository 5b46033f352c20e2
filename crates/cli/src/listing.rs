//! Rule file discovery under the rules directory.

use std::fs;
use std::path::{Path, PathBuf};

use airules_core::{HeadingEntry, outline};
use anyhow::{Context, Result};
use rayon::prelude::*;
use serde::Serialize;
use walkdir::{DirEntry, WalkDir};

/// File name suffixes treated as rule files.
pub const TARGET_EXTENSIONS: [&str; 3] = [".md", ".mdc", ".prompt.md"];

/// A rule file and its headings.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RuleFile {
    /// Absolute or rules-dir-joined path of the source file.
    pub source_path: PathBuf,
    /// Path relative to the rules directory, `/` separated.
    pub display_name: String,
    /// File name without directories.
    pub file_name: String,
    /// Selectable headings in document order.
    pub headings: Vec<HeadingEntry>,
}

/// Whether a file name carries one of [`TARGET_EXTENSIONS`].
pub fn is_rule_file(file_name: &str) -> bool {
    TARGET_EXTENSIONS
        .iter()
        .any(|extension| file_name.len() > extension.len() && file_name.ends_with(extension))
}

/// Lists rule files below `rules_dir`, sorted by display name.
///
/// `.git` is skipped. Each file is read once to extract its headings; files
/// that cannot be read as UTF-8 markdown are logged and left out.
pub fn list_rule_files(rules_dir: &Path) -> Result<Vec<RuleFile>> {
    let mut paths = Vec::new();
    for entry in WalkDir::new(rules_dir)
        .follow_links(true)
        .into_iter()
        .filter_entry(|entry| !is_git_dir(entry))
    {
        let entry = entry.with_context(|| format!("Failed to walk {}", rules_dir.display()))?;
        if entry.file_type().is_file()
            && entry.file_name().to_str().is_some_and(is_rule_file)
        {
            paths.push(entry.into_path());
        }
    }

    let mut files: Vec<RuleFile> = paths
        .par_iter()
        .filter_map(|path| match read_rule_file(rules_dir, path) {
            Ok(file) => Some(file),
            Err(err) => {
                tracing::warn!("Skipping {}: {err:#}", path.display());
                None
            }
        })
        .collect();
    files.sort_by(|a, b| a.display_name.cmp(&b.display_name));

    tracing::debug!("Found {} rule files in {}", files.len(), rules_dir.display());
    Ok(files)
}

fn read_rule_file(rules_dir: &Path, path: &Path) -> Result<RuleFile> {
    let content = fs::read_to_string(path)
        .with_context(|| format!("Failed to read rule file {}", path.display()))?;
    let headings = outline(&content)
        .with_context(|| format!("Failed to parse rule file {}", path.display()))?;

    Ok(RuleFile {
        source_path: path.to_path_buf(),
        display_name: display_name(rules_dir, path),
        file_name: path
            .file_name()
            .map(|name| name.to_string_lossy().into_owned())
            .unwrap_or_default(),
        headings,
    })
}

fn is_git_dir(entry: &DirEntry) -> bool {
    entry.depth() > 0 && entry.file_type().is_dir() && entry.file_name() == ".git"
}

fn display_name(rules_dir: &Path, path: &Path) -> String {
    let relative = path.strip_prefix(rules_dir).unwrap_or(path);
    relative
        .components()
        .map(|component| component.as_os_str().to_string_lossy())
        .collect::<Vec<_>>()
        .join("/")
}

/// JSON shape printed by `airules list --json`.
#[derive(Debug, Serialize)]
pub struct ListedFile<'a> {
    /// Display name of the file.
    pub file: &'a str,
    /// Its headings.
    pub headings: Vec<ListedHeading<'a>>,
}

/// One heading in [`ListedFile`].
#[derive(Debug, Serialize)]
pub struct ListedHeading<'a> {
    /// Heading depth.
    pub depth: u8,
    /// Heading text.
    pub text: &'a str,
    /// Slug of the text.
    pub slug: &'a str,
}

impl<'a> From<&'a RuleFile> for ListedFile<'a> {
    fn from(file: &'a RuleFile) -> Self {
        Self {
            file: &file.display_name,
            headings: file
                .headings
                .iter()
                .map(|heading| ListedHeading {
                    depth: heading.depth,
                    text: &heading.text,
                    slug: &heading.slug,
                })
                .collect(),
        }
    }
}

/// Prints the listing as an indented outline or as JSON.
pub fn print_listing(files: &[RuleFile], json: bool) -> Result<()> {
    if json {
        let listed: Vec<ListedFile<'_>> = files.iter().map(ListedFile::from).collect();
        println!("{}", serde_json::to_string_pretty(&listed)?);
        return Ok(());
    }

    for file in files {
        println!("{}", file.display_name);
        for heading in &file.headings {
            let indent = "  ".repeat(usize::from(heading.depth));
            println!("{indent}{}", heading.text);
        }
    }
    Ok(())
}

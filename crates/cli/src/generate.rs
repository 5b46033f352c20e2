//! `airules generate`: materialize selected files and sections.

use std::fs;
use std::path::Path;
use std::str::FromStr;

use airules_core::HeadingItem;
use anyhow::{Context, Result};

use crate::destination::{Target, determine_dest_dir};
use crate::error::CliError;
use crate::file_ops::{GenerateOptions, WriteOutcome, copy_whole_file, write_selected_headings};
use crate::listing::{RuleFile, is_rule_file, list_rule_files};

/// One `--select` value: `<file>` or `<file>#<heading text>`.
///
/// The heading starts after the first `#` that directly follows a rule file
/// extension, so file names may contain `#` themselves.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Selection {
    /// Display name or bare file name.
    pub file: String,
    /// Heading text, `None` for the whole file.
    pub heading: Option<String>,
}

impl FromStr for Selection {
    type Err = String;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        let (file, heading) = match split_heading(value) {
            Some((file, heading)) => (file, Some(heading.trim())),
            None => (value, None),
        };

        let file = file.trim();
        if file.is_empty() {
            return Err(format!("selection {value:?} does not name a file"));
        }
        if heading.is_some_and(str::is_empty) {
            return Err(format!("selection {value:?} has an empty heading"));
        }

        Ok(Self {
            file: file.to_string(),
            heading: heading.map(str::to_string),
        })
    }
}

fn split_heading(value: &str) -> Option<(&str, &str)> {
    value
        .match_indices('#')
        .map(|(index, _)| (&value[..index], &value[index + 1..]))
        .find(|(file, _)| file.trim().is_empty() || is_rule_file(file.trim()))
}

/// What to do with one rule file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PlannedFile<'a> {
    /// The file.
    pub file: &'a RuleFile,
    /// Copy the whole file; section selections are ignored.
    pub whole: bool,
    /// Selected headings, in the order given.
    pub headings: Vec<HeadingItem>,
}

impl PlannedFile<'_> {
    fn selected_headings(&self) -> usize {
        if self.whole { 0 } else { self.headings.len() }
    }
}

/// Groups selections per file in first-mention order.
pub fn plan<'a>(files: &'a [RuleFile], selections: &[Selection]) -> Result<Vec<PlannedFile<'a>>, CliError> {
    let mut planned: Vec<PlannedFile<'a>> = Vec::new();

    for selection in selections {
        let file = resolve_file(files, &selection.file)?;
        let index = match planned
            .iter()
            .position(|entry| std::ptr::eq(entry.file, file))
        {
            Some(index) => index,
            None => {
                planned.push(PlannedFile {
                    file,
                    whole: false,
                    headings: Vec::new(),
                });
                planned.len() - 1
            }
        };

        let entry = &mut planned[index];
        match &selection.heading {
            None => entry.whole = true,
            Some(text) => {
                if !entry.headings.iter().any(|item| &item.text == text) {
                    entry.headings.push(HeadingItem::selected(text.clone()));
                }
            }
        }
    }

    Ok(planned)
}

fn resolve_file<'a>(files: &'a [RuleFile], name: &str) -> Result<&'a RuleFile, CliError> {
    let name = name.trim_start_matches("./");
    if let Some(file) = files.iter().find(|file| file.display_name == name) {
        return Ok(file);
    }

    let by_name: Vec<&RuleFile> = files.iter().filter(|file| file.file_name == name).collect();
    match by_name.as_slice() {
        [file] => Ok(*file),
        [] => Err(CliError::UnknownFile(name.to_string())),
        many => Err(CliError::AmbiguousFile {
            name: name.to_string(),
            candidates: many.iter().map(|file| file.display_name.clone()).collect(),
        }),
    }
}

/// Runs the generate command against an already resolved rules directory.
pub fn run(
    rules_dir: &Path,
    dest_base: &Path,
    target: Option<Target>,
    selections: &[Selection],
    options: GenerateOptions,
) -> Result<()> {
    if !rules_dir.is_dir() {
        return Err(CliError::MissingDirectory(rules_dir.to_path_buf()).into());
    }

    let files = list_rule_files(rules_dir)?;
    if files.is_empty() {
        return Err(CliError::NoRuleFiles(rules_dir.to_path_buf()).into());
    }

    let planned = plan(&files, selections)?;
    let file_count = planned.iter().filter(|entry| entry.whole).count();
    let heading_count: usize = planned.iter().map(PlannedFile::selected_headings).sum();

    if file_count + heading_count == 0 {
        println!("No files or sections selected. Exiting.");
        return Ok(());
    }

    let dest_dir = determine_dest_dir(dest_base, target, options.dry_run)?;
    tracing::info!("Rules directory: {}", rules_dir.display());
    tracing::info!("Destination directory: {}", dest_dir.display());
    tracing::info!(
        "Dry run: {}",
        if options.dry_run { "enabled" } else { "disabled" }
    );
    tracing::info!(
        "Force overwrite: {}",
        if options.force { "enabled" } else { "disabled" }
    );
    println!("Selected {file_count} files and {heading_count} sections.");

    for entry in &planned {
        let source = &entry.file.source_path;
        let outcome = if entry.whole {
            copy_whole_file(source, &dest_dir, options)?
        } else {
            let content = fs::read_to_string(source)
                .with_context(|| format!("Failed to read {}", source.display()))?;
            write_selected_headings(&content, &entry.headings, source, &dest_dir, options)?
        };
        report(&outcome);
    }

    Ok(())
}

fn report(outcome: &WriteOutcome) {
    match (outcome, outcome.message()) {
        (WriteOutcome::SkippedExisting { .. }, Some(message)) => tracing::error!("{message}"),
        (_, Some(message)) => println!("{message}"),
        (_, None) => {}
    }
}

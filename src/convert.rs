use crate::exporter::{JournalWriter, PhotoResult};
use crate::importer::read_source;
use crate::parser::parse_entries;
use crate::utils::{ConvertConfig, validate_paths};
use eyre::{Context, Result};
use indicatif::{ProgressBar, ProgressStyle};

/// Counts reported at the end of a run.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ConvertSummary {
    pub entries: usize,
    pub photos_copied: usize,
    pub photos_missing: usize,
}

/// Convert the export named in `config`, appending every entry to the journal.
///
/// Reading and parsing happen up front, so a bad document or entry aborts
/// before the journal is touched. Entries are then written strictly in export order.
pub fn execute(config: ConvertConfig) -> Result<ConvertSummary> {
    validate_paths(&config)?;

    let raw_entries = read_source(&config.source_path).wrap_err_with(|| {
        format!(
            "Failed to read Day One export: {}",
            config.source_path.display()
        )
    })?;
    let entries = parse_entries(&raw_entries).wrap_err("Failed to parse Day One entries")?;

    let writer = JournalWriter::new(&config.source_path, &config.journal_path());

    let pb = if config.quiet {
        ProgressBar::hidden()
    } else {
        let bar = ProgressBar::new(entries.len() as u64);
        bar.set_style(
            ProgressStyle::with_template(
                "{spinner:.green} [{bar:40.cyan/blue}] {pos}/{len} ({percent}%)",
            )
            .wrap_err("Invalid progress bar template")?
            .progress_chars("=>-"),
        );
        bar.println(format!("Found {} entries.", entries.len()));
        bar
    };

    let mut summary = ConvertSummary::default();
    for entry in &entries {
        let photo_results = writer.write_entry(entry).wrap_err_with(|| {
            format!(
                "Failed to write entry {} to {}",
                entry.date,
                writer.journal_path().display()
            )
        })?;

        for (photo, result) in entry.photos.iter().zip(&photo_results) {
            match result {
                PhotoResult::Copied => summary.photos_copied += 1,
                PhotoResult::Missing => {
                    summary.photos_missing += 1;
                    if config.verbose {
                        pb.println(format!("Missing photo: {}", photo.file_name()));
                    }
                }
            }
        }

        summary.entries += 1;
        if config.verbose {
            pb.println(format!("Wrote:  {}", entry.date));
        }
        pb.inc(1);
    }

    pb.finish_and_clear();

    if !config.quiet {
        let mut line = format!(
            "Done. {} entries written to {}, {} photos copied.",
            summary.entries,
            writer.journal_path().display(),
            summary.photos_copied
        );
        if summary.photos_missing > 0 {
            line.push_str(&format!(
                " {} photo(s) not found in the export.",
                summary.photos_missing
            ));
        }
        eprintln!("{}", line);
    }

    Ok(summary)
}

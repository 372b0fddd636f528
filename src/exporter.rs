use std::fs::{self, OpenOptions};
use std::io::Write;
use std::path::{Path, PathBuf};

use crate::error::ConvertError;
use crate::parser::JournalEntry;
use crate::utils::PHOTOS_DIR_NAME;

/// What happened to one photo reference while writing an entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PhotoResult {
    Copied,
    Missing,
}

/// `@tag` for every tag, inner spaces removed: `["foo bar", "baz"]` gives `@foobar @baz`.
pub fn format_tag_line(tags: &[String]) -> String {
    tags.iter()
        .map(|tag| format!("@{}", tag.replace(' ', "")))
        .collect::<Vec<_>>()
        .join(" ")
        .trim()
        .to_string()
}

/// Write one entry in jrnl's plain-text layout.
///
/// ```text
/// 2016-03-07 20:23 Body text
///
/// @tag1 @tag2
///
/// photos/abc123.jpeg
///
/// ```
///
/// The tag block is written whenever the export carried a tag list, even an empty one.
/// The photo block is only written when there is at least one photo.
pub fn render_entry<W: Write>(writer: &mut W, entry: &JournalEntry) -> std::io::Result<()> {
    write!(writer, "{} {}\n\n", entry.date, entry.text)?;

    if let Some(tags) = &entry.tags {
        write!(writer, "{}\n\n", format_tag_line(tags))?;
    }

    if !entry.photos.is_empty() {
        for photo in &entry.photos {
            writeln!(writer, "{}/{}", PHOTOS_DIR_NAME, photo.file_name())?;
        }
        writeln!(writer)?;
    }

    Ok(())
}

/// Appends entries to a jrnl file and copies their photos next to it.
#[derive(Debug)]
pub struct JournalWriter {
    journal_path: PathBuf,
    source_photos_dir: PathBuf,
    target_photos_dir: PathBuf,
}

impl JournalWriter {
    /// `source_path` is the export JSON; its sibling `photos/` folder is the photo source.
    pub fn new(source_path: &Path, journal_path: &Path) -> Self {
        let sibling = |p: &Path| {
            p.parent()
                .unwrap_or_else(|| Path::new(""))
                .join(PHOTOS_DIR_NAME)
        };
        Self {
            journal_path: journal_path.to_path_buf(),
            source_photos_dir: sibling(source_path),
            target_photos_dir: sibling(journal_path),
        }
    }

    pub fn journal_path(&self) -> &Path {
        &self.journal_path
    }

    pub fn photos_dir(&self) -> &Path {
        &self.target_photos_dir
    }

    /// Append `entry` as a single write, copying photos first.
    ///
    /// Photos missing from the export folder are still referenced in the journal.
    /// Existing files in the target photo folder are overwritten.
    pub fn write_entry(&self, entry: &JournalEntry) -> Result<Vec<PhotoResult>, ConvertError> {
        let mut block = Vec::new();
        render_entry(&mut block, entry).map_err(|e| ConvertError::io(&self.journal_path, e))?;

        let photo_results = self.copy_photos(entry)?;

        let mut file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(&self.journal_path)
            .map_err(|e| ConvertError::io(&self.journal_path, e))?;
        file.write_all(&block)
            .map_err(|e| ConvertError::io(&self.journal_path, e))?;

        Ok(photo_results)
    }

    fn copy_photos(&self, entry: &JournalEntry) -> Result<Vec<PhotoResult>, ConvertError> {
        if entry.photos.is_empty() {
            return Ok(Vec::new());
        }

        fs::create_dir_all(&self.target_photos_dir)
            .map_err(|e| ConvertError::io(&self.target_photos_dir, e))?;

        let source_dir_exists = self.source_photos_dir.is_dir();
        let mut results = Vec::with_capacity(entry.photos.len());
        for photo in &entry.photos {
            let file_name = photo.file_name();
            let src = self.source_photos_dir.join(&file_name);
            if source_dir_exists && src.is_file() {
                let dst = self.target_photos_dir.join(&file_name);
                fs::copy(&src, &dst).map_err(|e| ConvertError::io(&src, e))?;
                results.push(PhotoResult::Copied);
            } else {
                results.push(PhotoResult::Missing);
            }
        }
        Ok(results)
    }
}

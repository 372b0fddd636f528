//! Turns a raw Day One entry into a jrnl-ready [`JournalEntry`].
use chrono::NaiveDateTime;
use chrono_tz::Tz;

use crate::error::ConvertError;
use crate::importer::SourceEntry;
use crate::tag_line::is_tag_line;

const CREATION_DATE_FORMAT: &str = "%Y-%m-%dT%H:%M:%SZ";
const JRNL_DATE_FORMAT: &str = "%Y-%m-%d %H:%M";
const MOMENT_PLACEHOLDER_PREFIX: &str = "![](dayone-moment://";

/// A photo reference, renamed to its content hash.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PhotoRef {
    pub name: String,
    pub kind: String,
}

impl PhotoRef {
    /// `<md5>.<type>`
    pub fn file_name(&self) -> String {
        format!("{}.{}", self.name, self.kind)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct JournalEntry {
    /// Local wall-clock time of the entry, `YYYY-MM-DD HH:MM`.
    pub date: String,
    pub text: String,
    /// `None` when the export had no tag list at all.
    pub tags: Option<Vec<String>>,
    pub photos: Vec<PhotoRef>,
}

/// Parse every entry, stopping at the first one that fails.
pub fn parse_entries(entries: &[SourceEntry]) -> Result<Vec<JournalEntry>, ConvertError> {
    entries.iter().map(parse_entry).collect()
}

pub fn parse_entry(entry: &SourceEntry) -> Result<JournalEntry, ConvertError> {
    let date = format_local_date(&entry.creation_date, &entry.time_zone)?;

    let photos = entry
        .photos
        .iter()
        .flatten()
        .map(|photo| PhotoRef {
            name: photo.md5.clone(),
            kind: photo.kind.clone(),
        })
        .collect();

    Ok(JournalEntry {
        date,
        text: clean_text(&entry.text),
        tags: entry.tags.clone(),
        photos,
    })
}

/// Render a UTC `creationDate` as wall-clock time in `time_zone`.
///
/// The instant is preserved: `2016-03-07T18:23:45Z` in `Europe/Helsinki` becomes
/// `2016-03-07 20:23`.
pub fn format_local_date(creation_date: &str, time_zone: &str) -> Result<String, ConvertError> {
    let utc = NaiveDateTime::parse_from_str(creation_date, CREATION_DATE_FORMAT)
        .map_err(|source| ConvertError::InvalidDate {
            value: creation_date.to_string(),
            source,
        })?
        .and_utc();

    let tz: Tz = time_zone
        .parse()
        .map_err(|_| ConvertError::UnknownTimeZone(time_zone.to_string()))?;

    Ok(utc.with_timezone(&tz).format(JRNL_DATE_FORMAT).to_string())
}

/// Strip the parts of a Day One body that jrnl represents elsewhere.
///
/// Drops a leading moment placeholder, then one leading blank line, then a trailing
/// hashtag line, and finally trims the result.
pub fn clean_text(text: &str) -> String {
    let mut lines: Vec<&str> = text.split('\n').collect();

    if lines
        .first()
        .is_some_and(|line| line.starts_with(MOMENT_PLACEHOLDER_PREFIX))
    {
        lines.remove(0);
    }

    if lines.first().is_some_and(|line| line.is_empty()) {
        lines.remove(0);
    }

    if lines.last().is_some_and(|line| is_tag_line(line)) {
        lines.pop();
    }

    lines.join("\n").trim().to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::importer::SourcePhoto;

    fn entry(text: &str) -> SourceEntry {
        SourceEntry {
            creation_date: "2016-03-07T18:23:45Z".to_string(),
            time_zone: "Europe/Helsinki".to_string(),
            text: text.to_string(),
            tags: None,
            photos: None,
        }
    }

    #[test]
    fn date_is_shifted_into_entry_zone() {
        let date = format_local_date("2016-03-07T18:23:45Z", "Europe/Helsinki").unwrap();
        assert_eq!(date, "2016-03-07 20:23");
    }

    #[test]
    fn date_can_cross_midnight_backwards() {
        let date = format_local_date("2016-03-07T02:05:00Z", "America/New_York").unwrap();
        assert_eq!(date, "2016-03-06 21:05");
    }

    #[test]
    fn date_follows_daylight_saving() {
        let summer = format_local_date("2016-07-01T12:00:00Z", "Europe/Helsinki").unwrap();
        let winter = format_local_date("2016-01-01T12:00:00Z", "Europe/Helsinki").unwrap();
        assert_eq!(summer, "2016-07-01 15:00");
        assert_eq!(winter, "2016-01-01 14:00");
    }

    #[test]
    fn utc_zone_keeps_digits() {
        let date = format_local_date("2016-03-07T18:23:45Z", "UTC").unwrap();
        assert_eq!(date, "2016-03-07 18:23");
    }

    #[test]
    fn bad_date_is_rejected() {
        let err = format_local_date("07/03/2016 18:23", "UTC").unwrap_err();
        assert!(matches!(err, ConvertError::InvalidDate { .. }));
    }

    #[test]
    fn unknown_zone_is_rejected() {
        let err = format_local_date("2016-03-07T18:23:45Z", "Mars/Olympus_Mons").unwrap_err();
        assert!(matches!(err, ConvertError::UnknownTimeZone(zone) if zone == "Mars/Olympus_Mons"));
    }

    #[test]
    fn strips_placeholder_blank_and_tag_line() {
        let text = "![](dayone-moment://abc)\n\nHello world\n#tag1 #tag2";
        assert_eq!(clean_text(text), "Hello world");
    }

    #[test]
    fn plain_note_is_unchanged() {
        assert_eq!(clean_text("Just a note"), "Just a note");
    }

    #[test]
    fn empty_text_stays_empty() {
        assert_eq!(clean_text(""), "");
    }

    #[test]
    fn placeholder_only() {
        assert_eq!(clean_text("![](dayone-moment://abc)"), "");
    }

    #[test]
    fn single_tag_line_is_removed() {
        assert_eq!(clean_text("#only #tags"), "");
    }

    #[test]
    fn only_one_leading_blank_line_is_dropped() {
        assert_eq!(clean_text("\n\n  Body"), "Body");
        assert_eq!(clean_text("\nBody\n"), "Body");
    }

    #[test]
    fn tag_line_must_be_last_line() {
        let text = "Body\n#a #b\n";
        assert_eq!(clean_text(text), "Body\n#a #b");
    }

    #[test]
    fn inner_lines_are_kept() {
        let text = "![](dayone-moment://x)\n\nFirst\n\nSecond paragraph\n#x";
        assert_eq!(clean_text(text), "First\n\nSecond paragraph");
    }

    #[test]
    fn placeholder_must_be_a_prefix() {
        let text = "See ![](dayone-moment://x)";
        assert_eq!(clean_text(text), text);
    }

    #[test]
    fn parse_entry_maps_all_fields() {
        let mut raw = entry("![](dayone-moment://abc)\n\nHello world\n#trip");
        raw.tags = Some(vec!["trip".to_string()]);
        raw.photos = Some(vec![
            SourcePhoto {
                md5: "abc123".to_string(),
                kind: "jpeg".to_string(),
            },
            SourcePhoto {
                md5: "def456".to_string(),
                kind: "png".to_string(),
            },
        ]);

        let parsed = parse_entry(&raw).unwrap();
        assert_eq!(parsed.date, "2016-03-07 20:23");
        assert_eq!(parsed.text, "Hello world");
        assert_eq!(parsed.tags, Some(vec!["trip".to_string()]));
        assert_eq!(parsed.photos.len(), 2);
        assert_eq!(parsed.photos[0].file_name(), "abc123.jpeg");
        assert_eq!(parsed.photos[1].file_name(), "def456.png");
    }

    #[test]
    fn parse_entry_without_lists() {
        let parsed = parse_entry(&entry("Note")).unwrap();
        assert_eq!(parsed.tags, None);
        assert!(parsed.photos.is_empty());
    }

    #[test]
    fn parse_entries_preserves_count_and_order() {
        let raws = vec![entry("one"), entry("two"), entry("three")];
        let parsed = parse_entries(&raws).unwrap();
        let texts: Vec<_> = parsed.iter().map(|e| e.text.as_str()).collect();
        assert_eq!(texts, ["one", "two", "three"]);
    }

    #[test]
    fn parse_entries_fails_on_any_bad_entry() {
        let mut bad = entry("two");
        bad.time_zone = "Nowhere".to_string();
        let raws = vec![entry("one"), bad];
        assert!(parse_entries(&raws).is_err());
    }
}

/// Returns true when `line` consists only of `#hashtags` separated by single spaces.
///
/// Day One appends such a line to the entry text, duplicating the structured tag list.
/// Any empty token (empty line, double space, trailing space) disqualifies the line.
pub fn is_tag_line(line: &str) -> bool {
    line.split(' ').all(|word| word.starts_with('#'))
}

//! Section Segmenter — slices resume text into blocks keyed by the headings found in it.
//!
//! Headings are matched as case-insensitive substrings, so a heading word used
//! mid-sentence still opens a block. Text before the first found heading is
//! never part of any block.

use indexmap::IndexMap;

/// Found heading → trimmed block, in document order.
pub type SectionMap = IndexMap<String, String>;

/// First-occurrence byte offset of every heading present in `text`,
/// sorted by offset. Equal offsets keep catalog order.
pub fn locate_headings<'h>(text: &str, headings: &'h [String]) -> Vec<(&'h str, usize)> {
    // ASCII folding keeps byte offsets identical to the original text.
    let folded = text.to_ascii_lowercase();
    let mut found: Vec<(&str, usize)> = headings
        .iter()
        .filter_map(|h| folded.find(h.as_str()).map(|pos| (h.as_str(), pos)))
        .collect();
    found.sort_by_key(|&(_, pos)| pos);
    found
}

/// Splits `text` into one block per found heading.
pub fn find_sections(text: &str, headings: &[String]) -> SectionMap {
    let found = locate_headings(text, headings);
    let mut sections = SectionMap::with_capacity(found.len());

    for (i, &(heading, start)) in found.iter().enumerate() {
        let end = found.get(i + 1).map(|&(_, pos)| pos).unwrap_or(text.len());
        sections.insert(heading.to_string(), text[start..end].trim().to_string());
    }

    sections
}

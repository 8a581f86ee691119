//! Skill Splitter — turns the skills block of a resume into individual skill strings.

use std::sync::LazyLock;

use regex::Regex;

use crate::parsing::sections::SectionMap;

static RE_SKILL_DELIMITERS: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[\n,•\-;]+").unwrap());

/// Blocks consulted for skills, most specific first.
const SKILL_SECTIONS: &[&str] = &["technical skills", "skills"];

/// Longer pieces are sentences, not skills.
const MAX_SKILL_LEN: usize = 60;

/// Splits a raw block on newlines, commas, bullets, hyphens and semicolons.
/// Order and duplicates are preserved.
pub fn split_skills(block: &str) -> Vec<String> {
    RE_SKILL_DELIMITERS
        .split(block)
        .map(str::trim)
        .filter(|piece| !piece.is_empty() && piece.chars().count() <= MAX_SKILL_LEN)
        .map(String::from)
        .collect()
}

/// Skills from the "technical skills" block, else the "skills" block, else none.
pub fn extract_skills(sections: &SectionMap) -> Vec<String> {
    SKILL_SECTIONS
        .iter()
        .find_map(|name| sections.get(*name))
        .map(|block| split_skills(block))
        .unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_split_on_every_delimiter() {
        let skills = split_skills("Python, Java\n• SQL; Docker-Compose");
        assert_eq!(skills, vec!["Python", "Java", "SQL", "Docker", "Compose"]);
    }

    #[test]
    fn test_long_pieces_are_discarded() {
        let long = "x".repeat(61);
        let exact = "y".repeat(60);
        let skills = split_skills(&format!("Rust, {long}, {exact}"));
        assert_eq!(skills, vec!["Rust".to_string(), exact]);
    }

    #[test]
    fn test_duplicates_are_kept_in_order() {
        let skills = split_skills("SQL\nPython\nSQL");
        assert_eq!(skills, vec!["SQL", "Python", "SQL"]);
    }

    #[test]
    fn test_blank_pieces_are_dropped() {
        let skills = split_skills(" ,, \n\n • ;  Git  ");
        assert_eq!(skills, vec!["Git"]);
    }

    #[test]
    fn test_prefers_technical_skills_block() {
        let mut sections = SectionMap::new();
        sections.insert("skills".to_string(), "Skills\nCommunication".to_string());
        sections.insert("technical skills".to_string(), "Rust, Go".to_string());
        assert_eq!(extract_skills(&sections), vec!["Rust", "Go"]);
    }

    #[test]
    fn test_falls_back_to_skills_block() {
        let mut sections = SectionMap::new();
        sections.insert("skills".to_string(), "Skills\nHTML, CSS".to_string());
        assert_eq!(extract_skills(&sections), vec!["Skills", "HTML", "CSS"]);
    }

    #[test]
    fn test_no_skills_block_yields_nothing() {
        let mut sections = SectionMap::new();
        sections.insert("education".to_string(), "Education\nMIT".to_string());
        assert!(extract_skills(&sections).is_empty());
    }
}

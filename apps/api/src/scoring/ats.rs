//! ATS Keyword Scorer — share of a job description's keywords that also appear
//! in the resume.

use std::collections::HashSet;

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

use crate::parsing::keywords::extract_keywords;

/// At most this many suggestions are returned.
const MAX_SUGGESTIONS: usize = 10;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AtsReport {
    /// 0 – 100, 2 decimals.
    pub ats_score: f64,
    pub matched_keywords: Vec<String>,
    pub missing_keywords: Vec<String>,
    pub suggestions: Vec<String>,
}

/// Scores `resume_text` against `job_description`. Never fails.
pub fn score_ats(
    resume_text: &str,
    job_description: &str,
    stopwords: &HashSet<String>,
) -> AtsReport {
    let resume_words: HashSet<String> = extract_keywords(resume_text, stopwords)
        .into_iter()
        .collect();

    // Unique JD keywords in first-occurrence order, with frequency.
    let mut jd_counts: IndexMap<String, u32> = IndexMap::new();
    for word in extract_keywords(job_description, stopwords) {
        *jd_counts.entry(word).or_insert(0) += 1;
    }

    let (matched_keywords, missing_keywords): (Vec<String>, Vec<String>) = jd_counts
        .keys()
        .cloned()
        .partition(|w| resume_words.contains(w));

    let total = jd_counts.len().max(1) as f64;
    let ats_score = round2(matched_keywords.len() as f64 / total * 100.0);

    let suggestions = missing_keywords
        .iter()
        .take(MAX_SUGGESTIONS)
        .map(|w| format!("Consider including the keyword '{w}' if relevant to your experience."))
        .collect();

    AtsReport {
        ats_score,
        matched_keywords,
        missing_keywords,
        suggestions,
    }
}

fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::Catalog;

    fn stopwords() -> HashSet<String> {
        Catalog::default().stopwords
    }

    #[test]
    fn test_all_keywords_present_scores_100() {
        let report = score_ats("Python developer with SQL skills", "Python and SQL", &stopwords());
        assert_eq!(report.matched_keywords, vec!["python", "sql"]);
        assert!(report.missing_keywords.is_empty());
        assert!(report.suggestions.is_empty());
        assert_eq!(report.ats_score, 100.0);
    }

    #[test]
    fn test_partial_match_counts_unique_jd_keywords() {
        let report = score_ats(
            "Python developer with SQL skills",
            "Python and SQL required",
            &stopwords(),
        );
        assert!(report.matched_keywords.contains(&"python".to_string()));
        assert!(report.matched_keywords.contains(&"sql".to_string()));
        assert_eq!(report.missing_keywords, vec!["required"]);
        assert_eq!(report.ats_score, 66.67);
    }

    #[test]
    fn test_jd_repetition_does_not_inflate_score() {
        let report = score_ats("rust", "rust rust rust golang", &stopwords());
        assert_eq!(report.matched_keywords, vec!["rust"]);
        assert_eq!(report.missing_keywords, vec!["golang"]);
        assert_eq!(report.ats_score, 50.0);
    }

    #[test]
    fn test_empty_job_description_scores_zero() {
        let report = score_ats("Anything at all", "", &stopwords());
        assert_eq!(report.ats_score, 0.0);
        assert!(report.matched_keywords.is_empty());
        assert!(report.missing_keywords.is_empty());
    }

    #[test]
    fn test_stopword_only_job_description_scores_zero() {
        let report = score_ats("the and of", "the and of a to", &stopwords());
        assert_eq!(report.ats_score, 0.0);
    }

    #[test]
    fn test_suggestions_capped_at_ten() {
        let jd = "alpha bravo charlie delta echo foxtrot golf hotel india juliet kilo lima";
        let report = score_ats("", jd, &stopwords());
        assert_eq!(report.missing_keywords.len(), 12);
        assert_eq!(report.suggestions.len(), 10);
        assert_eq!(
            report.suggestions[0],
            "Consider including the keyword 'alpha' if relevant to your experience."
        );
        assert!(report.suggestions[9].contains("juliet"));
    }

    #[test]
    fn test_matching_is_case_insensitive() {
        let report = score_ats("KUBERNETES expert", "Kubernetes", &stopwords());
        assert_eq!(report.ats_score, 100.0);
    }

    #[test]
    fn test_scoring_is_idempotent() {
        let a = score_ats("Docker Linux AWS", "AWS Azure Terraform Docker", &stopwords());
        let b = score_ats("Docker Linux AWS", "AWS Azure Terraform Docker", &stopwords());
        assert_eq!(a, b);
        assert_eq!(a.ats_score, 50.0);
    }
}

//! Skill Gap Analyzer — which of a role's expected skills a resume does not list.

use std::collections::HashSet;

use serde::{Deserialize, Serialize};

use crate::catalog::Catalog;
use crate::errors::AppError;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SkillGapReport {
    pub role: String,
    pub given_skills: Vec<String>,
    /// Catalog casing.
    pub expected_skills: Vec<String>,
    /// Lower-cased, catalog order, no repeats.
    pub missing_skills: Vec<String>,
    pub recommendations: Vec<String>,
}

/// Compares `skills` against the role's expected skills, ignoring case.
pub fn analyze_skill_gap(
    catalog: &Catalog,
    role: &str,
    skills: &[String],
) -> Result<SkillGapReport, AppError> {
    let profile = catalog
        .role(role)
        .ok_or_else(|| AppError::UnknownRole(role.to_string()))?;

    let present: HashSet<String> = skills.iter().map(|s| s.to_lowercase()).collect();

    let mut seen = HashSet::new();
    let missing_skills: Vec<String> = profile
        .expected_skills
        .iter()
        .map(|s| s.to_lowercase())
        .filter(|s| !present.contains(s) && seen.insert(s.clone()))
        .collect();

    let recommendations = missing_skills
        .iter()
        .map(|s| format!("Consider adding {s} experience to your resume/projects."))
        .collect();

    Ok(SkillGapReport {
        role: profile.name.clone(),
        given_skills: skills.to_vec(),
        expected_skills: profile.expected_skills.clone(),
        missing_skills,
        recommendations,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn skills(list: &[&str]) -> Vec<String> {
        list.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_frontend_gap_lists_missing_in_catalog_order() {
        let catalog = Catalog::default();
        let report =
            analyze_skill_gap(&catalog, "Frontend Developer", &skills(&["html", "css"])).unwrap();

        assert_eq!(
            report.missing_skills,
            vec!["javascript", "react", "typescript", "ui/ux"]
        );
        assert!(!report.missing_skills.contains(&"html".to_string()));
        assert_eq!(
            report.expected_skills,
            vec!["HTML", "CSS", "JavaScript", "React", "TypeScript", "UI/UX"]
        );
    }

    #[test]
    fn test_comparison_ignores_case() {
        let catalog = Catalog::default();
        let report = analyze_skill_gap(
            &catalog,
            "DevOps Engineer",
            &skills(&["LINUX", "docker", "KuBeRnEtEs", "ci/cd", "aws", "AZURE", "terraform"]),
        )
        .unwrap();
        assert!(report.missing_skills.is_empty());
        assert!(report.recommendations.is_empty());
    }

    #[test]
    fn test_one_recommendation_per_missing_skill() {
        let catalog = Catalog::default();
        let report = analyze_skill_gap(&catalog, "Product Manager", &skills(&["Agile"])).unwrap();
        assert_eq!(report.missing_skills.len(), 4);
        assert_eq!(report.recommendations.len(), 4);
        assert_eq!(
            report.recommendations[0],
            "Consider adding scrum experience to your resume/projects."
        );
    }

    #[test]
    fn test_given_skills_are_echoed_unchanged() {
        let catalog = Catalog::default();
        let given = skills(&["Python", "python", "Rust"]);
        let report = analyze_skill_gap(&catalog, "Software Engineer", &given).unwrap();
        assert_eq!(report.given_skills, given);
        assert_eq!(report.role, "Software Engineer");
    }

    #[test]
    fn test_unknown_role_fails() {
        let catalog = Catalog::default();
        let err = analyze_skill_gap(&catalog, "Astronaut", &skills(&["html"])).unwrap_err();
        assert!(matches!(err, AppError::UnknownRole(ref r) if r == "Astronaut"));
    }

    #[test]
    fn test_role_name_is_case_sensitive() {
        let catalog = Catalog::default();
        assert!(analyze_skill_gap(&catalog, "frontend developer", &[]).is_err());
    }

    #[test]
    fn test_duplicate_expected_skills_reported_once() {
        let mut catalog = Catalog::default();
        catalog.roles[0].expected_skills = skills(&["SQL", "sql", "Git"]);
        let report = analyze_skill_gap(&catalog, "Software Engineer", &[]).unwrap();
        assert_eq!(report.missing_skills, vec!["sql", "git"]);
    }

    #[test]
    fn test_analysis_is_idempotent() {
        let catalog = Catalog::default();
        let given = skills(&["Excel", "Tableau"]);
        let a = analyze_skill_gap(&catalog, "Business Analyst", &given).unwrap();
        let b = analyze_skill_gap(&catalog, "Business Analyst", &given).unwrap();
        assert_eq!(a, b);
    }
}

//! Catalog — the fixed reference data every analysis runs against.
//!
//! Headings, stopwords and role profiles are loaded once at startup (built-in
//! defaults or a JSON file via `CATALOG_PATH`) and shared read-only behind
//! `Arc<Catalog>` in `AppState`.

use std::collections::HashSet;
use std::path::Path;

use anyhow::{bail, Context, Result};
use serde::{Deserialize, Serialize};

use crate::scoring::classifier::TOP_ROLES;

/// Section titles searched for in resume text, in registration order.
/// Equal first-occurrence offsets fall back to this order.
const DEFAULT_HEADINGS: &[&str] = &[
    "summary",
    "objective",
    "skills",
    "technical skills",
    "experience",
    "work experience",
    "projects",
    "education",
    "certifications",
];

const DEFAULT_STOPWORDS: &[&str] = &[
    "and", "or", "with", "in", "the", "to", "for", "a", "of", "on", "at", "is", "as", "by", "an",
];

/// A job role the classifier and skill-gap analyzer know about.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RoleProfile {
    pub name: String,
    pub description: String,
    pub expected_skills: Vec<String>,
}

/// Immutable reference data shared by all operations.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Catalog {
    pub headings: Vec<String>,
    pub stopwords: HashSet<String>,
    pub roles: Vec<RoleProfile>,
}

impl Default for Catalog {
    fn default() -> Self {
        Self {
            headings: DEFAULT_HEADINGS.iter().map(|h| h.to_string()).collect(),
            stopwords: DEFAULT_STOPWORDS.iter().map(|w| w.to_string()).collect(),
            roles: default_roles(),
        }
    }
}

impl Catalog {
    /// Loads a catalog from a JSON file and validates it.
    pub fn from_json_file(path: &Path) -> Result<Self> {
        let raw = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read catalog file '{}'", path.display()))?;
        let catalog: Catalog = serde_json::from_str(&raw)
            .with_context(|| format!("Catalog file '{}' is not valid JSON", path.display()))?;
        catalog.validate()?;
        Ok(catalog)
    }

    /// Checks the invariants the segmenter and analyzers rely on.
    pub fn validate(&self) -> Result<()> {
        if self.headings.is_empty() {
            bail!("Catalog must define at least one heading");
        }
        for heading in &self.headings {
            if heading.trim().is_empty() {
                bail!("Catalog headings must not be blank");
            }
            // Segmentation folds case ASCII-only, so headings must already be folded.
            if !heading.is_ascii() || heading.to_ascii_lowercase() != *heading {
                bail!("Catalog heading '{heading}' must be lower-case ASCII");
            }
        }

        // Classification always reports the top TOP_ROLES roles.
        if self.roles.len() < TOP_ROLES {
            bail!(
                "Catalog must define at least {TOP_ROLES} roles, found {}",
                self.roles.len()
            );
        }
        let mut seen = HashSet::new();
        for role in &self.roles {
            if role.name.trim().is_empty() {
                bail!("Catalog role names must not be blank");
            }
            if role.description.trim().is_empty() {
                bail!("Role '{}' has an empty description", role.name);
            }
            if !seen.insert(role.name.as_str()) {
                bail!("Duplicate role '{}' in catalog", role.name);
            }
        }
        Ok(())
    }

    /// Looks up a role by its exact name.
    pub fn role(&self, name: &str) -> Option<&RoleProfile> {
        self.roles.iter().find(|r| r.name == name)
    }
}

fn role(name: &str, description: &str, expected_skills: &[&str]) -> RoleProfile {
    RoleProfile {
        name: name.to_string(),
        description: description.to_string(),
        expected_skills: expected_skills.iter().map(|s| s.to_string()).collect(),
    }
}

fn default_roles() -> Vec<RoleProfile> {
    vec![
        role(
            "Software Engineer",
            "Writes, tests, and maintains software applications using programming languages and frameworks.",
            &["Python", "Java", "C++", "Git", "SQL", "Algorithms", "Data Structures"],
        ),
        role(
            "Data Scientist",
            "Analyzes datasets using machine learning, statistics, and data visualization.",
            &[
                "Python",
                "R",
                "SQL",
                "Pandas",
                "NumPy",
                "Scikit-learn",
                "Statistics",
                "Data Visualization",
            ],
        ),
        role(
            "Machine Learning Engineer",
            "Builds and deploys machine learning models in production systems.",
            &[
                "Python",
                "TensorFlow",
                "PyTorch",
                "Scikit-learn",
                "ML Ops",
                "FastAPI",
                "Docker",
                "Cloud",
            ],
        ),
        role(
            "Frontend Developer",
            "Builds responsive and interactive user interfaces with HTML, CSS, and JavaScript.",
            &["HTML", "CSS", "JavaScript", "React", "TypeScript", "UI/UX"],
        ),
        role(
            "Backend Developer",
            "Designs APIs, databases, and server-side systems for scalable applications.",
            &[
                "Python",
                "Java",
                "Node.js",
                "Databases",
                "APIs",
                "FastAPI",
                "Django",
                "SQL",
                "Docker",
            ],
        ),
        role(
            "DevOps Engineer",
            "Manages deployment, CI/CD pipelines, cloud infrastructure, and automation.",
            &["Linux", "Docker", "Kubernetes", "CI/CD", "AWS", "Azure", "Terraform"],
        ),
        role(
            "Business Analyst",
            "Analyzes business requirements, prepares reports, and bridges between stakeholders and developers.",
            &["Excel", "SQL", "Power BI", "Tableau", "Business Process", "Requirements Analysis"],
        ),
        role(
            "Product Manager",
            "Defines product vision, gathers requirements, and manages product lifecycle.",
            &["Agile", "Scrum", "Roadmap", "Stakeholder Management", "Market Research"],
        ),
    ]
}

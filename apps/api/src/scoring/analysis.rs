//! Full resume analysis: parse, classify, skill gap for the top role, ATS score
//! and per-role readiness, in one call.

use serde::{Deserialize, Serialize};
use tracing::{info, warn};

use crate::catalog::Catalog;
use crate::embedding::Embedder;
use crate::errors::AppError;
use crate::parsing::resume::ParsedResume;
use crate::scoring::ats::{score_ats, AtsReport};
use crate::scoring::classifier::{Classification, RoleIndex};
use crate::scoring::skill_gap::{analyze_skill_gap, SkillGapReport};

/// Scored against when the caller supplies no job description.
pub const DEFAULT_JOB_DESCRIPTION: &str = "Looking for a skilled professional with experience in software development and problem-solving abilities.";

/// Readiness is classification confidence scaled down by this factor.
const READINESS_FACTOR: f64 = 0.9;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ReadinessScore {
    pub role: String,
    pub score: u32,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ResumeAnalysis {
    #[serde(flatten)]
    pub resume: ParsedResume,
    pub classifications: Vec<Classification>,
    /// Absent when the resume lists no skills or the top role has no profile.
    pub skill_gap: Option<SkillGapReport>,
    pub ats: AtsReport,
    pub readiness_scores: Vec<ReadinessScore>,
}

/// Everything downstream of parsing. Classification failures abort; a missing
/// skill gap does not.
pub async fn analyze_parsed(
    resume: ParsedResume,
    job_description: Option<&str>,
    catalog: &Catalog,
    index: &RoleIndex,
    embedder: &dyn Embedder,
) -> Result<ResumeAnalysis, AppError> {
    let classifications = index.classify(&resume.text, embedder).await?;

    let skill_gap = match classifications.first() {
        Some(top) if !resume.skills.is_empty() => {
            match analyze_skill_gap(catalog, &top.role, &resume.skills) {
                Ok(report) => Some(report),
                Err(e) => {
                    warn!(role = %top.role, error = %e, "Skill gap skipped");
                    None
                }
            }
        }
        _ => None,
    };

    let job_description = job_description
        .filter(|jd| !jd.trim().is_empty())
        .unwrap_or(DEFAULT_JOB_DESCRIPTION);
    let ats = score_ats(&resume.text, job_description, &catalog.stopwords);

    let readiness_scores = classifications.iter().map(readiness).collect();

    info!(
        top_role = classifications.first().map(|c| c.role.as_str()).unwrap_or_default(),
        ats_score = ats.ats_score,
        "Resume analyzed"
    );

    Ok(ResumeAnalysis {
        resume,
        classifications,
        skill_gap,
        ats,
        readiness_scores,
    })
}

fn readiness(classification: &Classification) -> ReadinessScore {
    ReadinessScore {
        role: classification.role.clone(),
        score: (classification.confidence * READINESS_FACTOR).round() as u32,
    }
}

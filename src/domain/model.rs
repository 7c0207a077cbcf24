use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SkillCategory {
    Technical,
    Soft,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Difficulty {
    Beginner,
    Intermediate,
    Advanced,
}

impl fmt::Display for Difficulty {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            Difficulty::Beginner => "beginner",
            Difficulty::Intermediate => "intermediate",
            Difficulty::Advanced => "advanced",
        };
        f.write_str(label)
    }
}

/// A canonical taxonomy entry.
#[derive(Debug, Clone, PartialEq)]
pub struct Skill {
    pub id: String,
    pub category: SkillCategory,
    pub weight: f64,
    pub aliases: Vec<String>,
    pub prerequisites: Vec<String>,
    pub difficulty: Option<Difficulty>,
    pub estimated_weeks: Option<u32>,
}

/// One line of a job's requirement list.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RequiredSkill {
    pub mention: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub weight: Option<f64>,
}

impl RequiredSkill {
    pub fn new(mention: impl Into<String>) -> Self {
        Self {
            mention: mention.into(),
            weight: None,
        }
    }

    pub fn weighted(mention: impl Into<String>, weight: f64) -> Self {
        Self {
            mention: mention.into(),
            weight: Some(weight),
        }
    }
}

/// Request-scoped input: raw mentions for the job and the candidate.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct AnalysisRequest {
    #[serde(default)]
    pub required_skills: Vec<RequiredSkill>,
    #[serde(default)]
    pub candidate_skills: Vec<String>,
}

/// A required skill after normalization, carrying its effective weight.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WeightedSkill {
    pub skill: String,
    pub weight: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MatchResult {
    pub match_percentage: f64,
    pub achieved_weight: f64,
    pub total_weight: f64,
    pub summary: String,
    pub matching_skills: Vec<WeightedSkill>,
    pub missing_skills: Vec<WeightedSkill>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LearningResource {
    pub title: String,
    pub url: String,
    #[serde(rename = "type")]
    pub kind: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum StepReason {
    /// The job asked for this skill.
    Required,
    /// Pulled in because a missing skill depends on it.
    Prerequisite,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RoadmapStep {
    pub step: usize,
    pub skill: String,
    pub reason: StepReason,
    pub difficulty: Difficulty,
    pub estimated_weeks: u32,
    pub cumulative_weeks: u32,
    pub resources: Vec<LearningResource>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Roadmap {
    pub steps: Vec<RoadmapStep>,
    pub total_weeks: u32,
}

/// Mentions that matched nothing in the taxonomy, kept verbatim.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Unrecognized {
    pub required: Vec<String>,
    pub candidate: Vec<String>,
}

impl Unrecognized {
    pub fn is_empty(&self) -> bool {
        self.required.is_empty() && self.candidate.is_empty()
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AnalysisReport {
    #[serde(flatten)]
    pub result: MatchResult,
    /// Learning steps in prerequisite order.
    pub roadmap: Vec<RoadmapStep>,
    pub roadmap_total_weeks: u32,
    pub unrecognized: Unrecognized,
    pub generated_at: DateTime<Utc>,
}

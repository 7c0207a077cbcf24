use crate::domain::model::WeightedSkill;
use std::collections::{BTreeSet, HashSet};

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ScoreBreakdown {
    pub achieved_weight: f64,
    pub total_weight: f64,
    pub match_percentage: f64,
}

pub fn round_one_decimal(value: f64) -> f64 {
    (value * 10.0).round() / 10.0
}

/// Weighted share of the required skills the candidate has, 0..=100 with
/// one decimal. Nothing required counts as a full match.
pub fn score(required: &[WeightedSkill], candidate: &BTreeSet<String>) -> f64 {
    evaluate(required, candidate).match_percentage
}

pub fn evaluate(required: &[WeightedSkill], candidate: &BTreeSet<String>) -> ScoreBreakdown {
    let mut seen: HashSet<&str> = HashSet::new();
    let unique: Vec<&WeightedSkill> = required
        .iter()
        .filter(|requirement| seen.insert(requirement.skill.as_str()))
        .collect();

    if unique.is_empty() {
        return ScoreBreakdown {
            achieved_weight: 0.0,
            total_weight: 0.0,
            match_percentage: 100.0,
        };
    }

    // 比例以最大權重縮放後再加總，極大的權重也不會溢位
    let largest = unique.iter().map(|r| r.weight).fold(0.0_f64, f64::max);
    let scale = if largest.is_finite() && largest > 0.0 { largest } else { 1.0 };

    let mut achieved_weight = 0.0;
    let mut total_weight = 0.0;
    let mut achieved_share = 0.0;
    let mut total_share = 0.0;
    for requirement in &unique {
        let share = requirement.weight / scale;
        total_weight += requirement.weight;
        total_share += share;
        if candidate.contains(&requirement.skill) {
            achieved_weight += requirement.weight;
            achieved_share += share;
        }
    }

    let ratio = if total_share > 0.0 { achieved_share / total_share } else { 0.0 };
    let percentage = round_one_decimal(ratio * 100.0);
    ScoreBreakdown {
        achieved_weight,
        total_weight,
        match_percentage: if percentage.is_finite() {
            percentage.clamp(0.0, 100.0)
        } else {
            0.0
        },
    }
}

pub fn summary(breakdown: &ScoreBreakdown, required_count: usize) -> String {
    if required_count == 0 {
        return "No required skills were identified in the job description.".to_string();
    }
    format!(
        "The candidate's skills align with {:.1}% of the job's weighted requirements.",
        breakdown.match_percentage
    )
}

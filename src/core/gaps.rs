use crate::domain::model::WeightedSkill;
use std::cmp::Ordering;
use std::collections::{BTreeSet, HashSet};

#[derive(Debug, Clone, Default, PartialEq)]
pub struct GapReport {
    pub matching: Vec<WeightedSkill>,
    pub missing: Vec<WeightedSkill>,
}

/// Weight descending, then canonical id ascending.
pub fn by_significance(a: &WeightedSkill, b: &WeightedSkill) -> Ordering {
    b.weight
        .total_cmp(&a.weight)
        .then_with(|| a.skill.cmp(&b.skill))
}

/// Splits the required skills into the ones the candidate has and the
/// ones they lack.
pub fn detect(required: &[WeightedSkill], candidate: &BTreeSet<String>) -> GapReport {
    let mut seen: HashSet<&str> = HashSet::new();
    let mut report = GapReport::default();

    for requirement in required {
        if !seen.insert(requirement.skill.as_str()) {
            continue;
        }
        if candidate.contains(&requirement.skill) {
            report.matching.push(requirement.clone());
        } else {
            report.missing.push(requirement.clone());
        }
    }

    report.matching.sort_by(by_significance);
    report.missing.sort_by(by_significance);
    report
}

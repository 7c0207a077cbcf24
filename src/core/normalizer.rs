use crate::core::taxonomy::{exact_key, fuzzy_key, SkillTaxonomy};
use crate::domain::model::{RequiredSkill, Skill, WeightedSkill};
use crate::utils::error::{Result, SkillError};
use crate::utils::validation::{validate_positive_weight, MAX_WEIGHT};
use std::collections::{BTreeSet, HashSet};

/// Outcome of resolving one free-text mention.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Resolution<'t> {
    Canonical(&'t Skill),
    Unresolved,
}

impl<'t> Resolution<'t> {
    pub fn skill_id(&self) -> Option<&'t str> {
        match self {
            Resolution::Canonical(skill) => Some(skill.id.as_str()),
            Resolution::Unresolved => None,
        }
    }
}

/// Job requirements after normalization, in first-mention order.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct NormalizedRequirements {
    pub skills: Vec<WeightedSkill>,
    pub unresolved: Vec<String>,
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct NormalizedProfile {
    pub skills: BTreeSet<String>,
    pub unresolved: Vec<String>,
}

/// Resolves mentions against one taxonomy snapshot. Holds no state of its
/// own, so the same snapshot always yields the same answer.
#[derive(Debug, Clone, Copy)]
pub struct SkillNormalizer<'t> {
    taxonomy: &'t SkillTaxonomy,
}

impl<'t> SkillNormalizer<'t> {
    pub fn new(taxonomy: &'t SkillTaxonomy) -> Self {
        Self { taxonomy }
    }

    /// Resolution order: exact id or alias (case-insensitive), then the same
    /// lookup on the punctuation-stripped form.
    pub fn normalize(&self, mention: &str) -> Resolution<'t> {
        let key = exact_key(mention);
        if key.is_empty() {
            return Resolution::Unresolved;
        }

        if let Some(idx) = self.taxonomy.lookup_exact(&key) {
            return Resolution::Canonical(self.taxonomy.skill(idx));
        }

        match self.taxonomy.lookup_fuzzy(&fuzzy_key(&key)) {
            Some(idx) => Resolution::Canonical(self.taxonomy.skill(idx)),
            None => Resolution::Unresolved,
        }
    }

    /// Resolves job requirements. The explicit weight wins over the
    /// taxonomy default; duplicates keep their first occurrence.
    pub fn resolve_requirements(&self, required: &[RequiredSkill]) -> Result<NormalizedRequirements> {
        let mut normalized = NormalizedRequirements::default();
        let mut seen: HashSet<&str> = HashSet::new();

        for requirement in required {
            if let Some(weight) = requirement.weight {
                if validate_positive_weight(&requirement.mention, weight).is_err() {
                    return Err(SkillError::InvalidRequest {
                        message: format!(
                            "weight for '{}' must be a positive number up to {}, got {}",
                            requirement.mention, MAX_WEIGHT, weight
                        ),
                    });
                }
            }

            match self.normalize(&requirement.mention) {
                Resolution::Canonical(skill) => {
                    if !seen.insert(skill.id.as_str()) {
                        tracing::debug!(
                            "Requirement '{}' duplicates '{}', keeping the first mention",
                            requirement.mention,
                            skill.id
                        );
                        continue;
                    }
                    tracing::debug!("Requirement '{}' -> {}", requirement.mention, skill.id);
                    normalized.skills.push(WeightedSkill {
                        skill: skill.id.clone(),
                        weight: requirement.weight.unwrap_or(skill.weight),
                    });
                }
                Resolution::Unresolved => {
                    normalized.unresolved.push(requirement.mention.clone());
                }
            }
        }

        Ok(normalized)
    }

    pub fn resolve_profile(&self, mentions: &[String]) -> NormalizedProfile {
        let mut normalized = NormalizedProfile::default();

        for mention in mentions {
            match self.normalize(mention) {
                Resolution::Canonical(skill) => {
                    tracing::debug!("Candidate skill '{}' -> {}", mention, skill.id);
                    normalized.skills.insert(skill.id.clone());
                }
                Resolution::Unresolved => normalized.unresolved.push(mention.clone()),
            }
        }

        normalized
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn taxonomy() -> SkillTaxonomy {
        SkillTaxonomy::from_toml_str(
            r#"
[react]
category = "technical"
weight = 2.0
aliases = ["react.js", "reactjs"]
prerequisites = ["javascript"]

[javascript]
category = "technical"
weight = 2.0
aliases = ["js", "ECMAScript"]

[aws]
category = "technical"
weight = 2.0
aliases = ["Amazon Web Services (AWS)", "amazon web services"]

["spring boot"]
category = "technical"
weight = 3.0
aliases = ["springboot"]

[communication]
category = "soft"
weight = 1.0
aliases = ["communication skills"]
"#,
        )
        .unwrap()
    }

    #[test]
    fn test_canonical_id_is_idempotent() {
        let taxonomy = taxonomy();
        let normalizer = SkillNormalizer::new(&taxonomy);

        for skill in taxonomy.skills() {
            assert_eq!(normalizer.normalize(&skill.id).skill_id(), Some(skill.id.as_str()));
        }
    }

    #[test]
    fn test_case_and_punctuation_insensitive() {
        let taxonomy = taxonomy();
        let normalizer = SkillNormalizer::new(&taxonomy);

        let mentions = ["React.js", "reactjs", "ReactJS", "REACT", " react ", "React-JS", "React.JS."];
        for mention in mentions {
            assert_eq!(normalizer.normalize(mention).skill_id(), Some("react"), "{}", mention);
        }
    }

    #[test]
    fn test_alias_with_parentheses_resolves() {
        let taxonomy = taxonomy();
        let normalizer = SkillNormalizer::new(&taxonomy);

        assert_eq!(
            normalizer.normalize("Amazon Web Services (AWS)").skill_id(),
            Some("aws")
        );
        assert_eq!(normalizer.normalize("amazon   web services").skill_id(), Some("aws"));
    }

    #[test]
    fn test_whitespace_collapse() {
        let taxonomy = taxonomy();
        let normalizer = SkillNormalizer::new(&taxonomy);

        assert_eq!(normalizer.normalize("Spring  Boot").skill_id(), Some("spring boot"));
        assert_eq!(normalizer.normalize("Spring-Boot").skill_id(), Some("spring boot"));
    }

    #[test]
    fn test_unknown_mention_is_unresolved() {
        let taxonomy = taxonomy();
        let normalizer = SkillNormalizer::new(&taxonomy);

        assert_eq!(normalizer.normalize("Haskell"), Resolution::Unresolved);
        assert_eq!(normalizer.normalize("   "), Resolution::Unresolved);
    }

    #[test]
    fn test_resolve_requirements_keeps_unresolved_mentions() {
        let taxonomy = taxonomy();
        let normalizer = SkillNormalizer::new(&taxonomy);

        let required = vec![
            RequiredSkill::weighted("JS", 5.0),
            RequiredSkill::new("Haskell"),
            RequiredSkill::new("Communication Skills"),
            RequiredSkill::weighted("javascript", 1.0),
        ];
        let normalized = normalizer.resolve_requirements(&required).unwrap();

        assert_eq!(
            normalized.skills,
            vec![
                WeightedSkill { skill: "javascript".into(), weight: 5.0 },
                WeightedSkill { skill: "communication".into(), weight: 1.0 },
            ]
        );
        assert_eq!(normalized.unresolved, vec!["Haskell".to_string()]);
    }

    #[test]
    fn test_resolve_requirements_rejects_bad_weights() {
        let taxonomy = taxonomy();
        let normalizer = SkillNormalizer::new(&taxonomy);

        for weight in [0.0, -3.0, f64::NAN, f64::INFINITY, 1e307] {
            let required = vec![RequiredSkill::weighted("react", weight)];
            assert!(matches!(
                normalizer.resolve_requirements(&required),
                Err(SkillError::InvalidRequest { .. })
            ));
        }
    }

    #[test]
    fn test_resolve_profile() {
        let taxonomy = taxonomy();
        let normalizer = SkillNormalizer::new(&taxonomy);

        let mentions = vec!["ReactJS".to_string(), "js".to_string(), "COBOL".to_string(), "react".to_string()];
        let profile = normalizer.resolve_profile(&mentions);

        assert_eq!(
            profile.skills.iter().map(String::as_str).collect::<Vec<_>>(),
            vec!["javascript", "react"]
        );
        assert_eq!(profile.unresolved, vec!["COBOL".to_string()]);
    }
}

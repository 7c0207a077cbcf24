use crate::config::toml_config::EngineConfig;
use crate::core::normalizer::SkillNormalizer;
use crate::core::roadmap::RoadmapBuilder;
use crate::core::taxonomy::{SkillTaxonomy, TaxonomyStore};
use crate::core::{gaps, scoring, ResourceGateway};
use crate::domain::model::{AnalysisReport, AnalysisRequest, MatchResult, Unrecognized};
use crate::utils::error::{Result, SkillError};
use std::sync::Arc;

/// Runs one analysis per call against the taxonomy snapshot current at
/// the start of the call. Holds nothing request-scoped.
pub struct SkillEngine {
    store: Arc<TaxonomyStore>,
    gateway: Arc<dyn ResourceGateway>,
    config: EngineConfig,
}

impl SkillEngine {
    pub fn new(store: Arc<TaxonomyStore>, gateway: Arc<dyn ResourceGateway>, config: EngineConfig) -> Self {
        Self {
            store,
            gateway,
            config,
        }
    }

    pub fn from_taxonomy(
        taxonomy: SkillTaxonomy,
        gateway: Arc<dyn ResourceGateway>,
        config: EngineConfig,
    ) -> Self {
        Self::new(Arc::new(TaxonomyStore::new(taxonomy)), gateway, config)
    }

    pub fn taxonomy(&self) -> Arc<SkillTaxonomy> {
        self.store.snapshot()
    }

    pub fn store(&self) -> &Arc<TaxonomyStore> {
        &self.store
    }

    pub async fn analyze(&self, request: &AnalysisRequest) -> Result<AnalysisReport> {
        let taxonomy = self.store.snapshot();
        let normalizer = SkillNormalizer::new(&taxonomy);

        let required = normalizer.resolve_requirements(&request.required_skills)?;
        let candidate = normalizer.resolve_profile(&request.candidate_skills);

        let unrecognized = Unrecognized {
            required: required.unresolved,
            candidate: candidate.unresolved,
        };
        if !unrecognized.is_empty() {
            tracing::warn!(
                required = ?unrecognized.required,
                candidate = ?unrecognized.candidate,
                "Some skill mentions are not in the taxonomy and were left out"
            );
        }

        let breakdown = scoring::evaluate(&required.skills, &candidate.skills);
        let gap_report = gaps::detect(&required.skills, &candidate.skills);
        tracing::debug!(
            "Match {:.1}%: {} matching, {} missing",
            breakdown.match_percentage,
            gap_report.matching.len(),
            gap_report.missing.len()
        );

        let builder = RoadmapBuilder::new(&taxonomy, self.config.roadmap_policy());
        let roadmap = match builder
            .build(
                &gap_report.missing,
                &candidate.skills,
                self.gateway.as_ref(),
                &self.config,
            )
            .await
        {
            Ok(roadmap) => roadmap,
            Err(e @ SkillError::InternalConsistencyError { .. }) => {
                tracing::error!(
                    required = ?required.skills.iter().map(|s| s.skill.as_str()).collect::<Vec<_>>(),
                    candidate = ?candidate.skills,
                    taxonomy_size = taxonomy.len(),
                    "Roadmap construction failed: {}",
                    e
                );
                return Err(e);
            }
            Err(e) => return Err(e),
        };

        let result = MatchResult {
            match_percentage: breakdown.match_percentage,
            achieved_weight: breakdown.achieved_weight,
            total_weight: breakdown.total_weight,
            summary: scoring::summary(&breakdown, required.skills.len()),
            matching_skills: gap_report.matching,
            missing_skills: gap_report.missing,
        };

        tracing::info!(
            "Analysis finished: {:.1}% match, {} roadmap steps",
            result.match_percentage,
            roadmap.steps.len()
        );

        Ok(AnalysisReport {
            result,
            roadmap: roadmap.steps,
            roadmap_total_weeks: roadmap.total_weeks,
            unrecognized,
            generated_at: chrono::Utc::now(),
        })
    }
}

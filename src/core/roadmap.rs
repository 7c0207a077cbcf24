use crate::core::taxonomy::{SkillIdx, SkillTaxonomy};
use crate::domain::model::{
    Difficulty, LearningResource, Roadmap, RoadmapStep, SkillCategory, StepReason, WeightedSkill,
};
use crate::domain::ports::{ConfigProvider, ResourceGateway};
use crate::utils::error::{Result, SkillError};
use crate::utils::validation::{validate_positive_number, validate_positive_weight, Validate};
use futures::stream::{self, StreamExt};
use serde::{Deserialize, Serialize};
use std::cmp::Ordering;
use std::collections::{BTreeSet, BinaryHeap, HashMap, VecDeque};
use std::time::Duration;

/// Weight cut-offs for the difficulty mapping.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DifficultyThresholds {
    pub intermediate_min_weight: f64,
    pub advanced_min_weight: f64,
}

impl Default for DifficultyThresholds {
    fn default() -> Self {
        Self {
            intermediate_min_weight: 2.0,
            advanced_min_weight: 4.0,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct WeeksTable {
    pub beginner: u32,
    pub intermediate: u32,
    pub advanced: u32,
}

impl Default for WeeksTable {
    fn default() -> Self {
        Self {
            beginner: 3,
            intermediate: 5,
            advanced: 8,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RoadmapPolicy {
    /// Add prerequisites the candidate lacks even when the job does not ask
    /// for them.
    pub include_unmet_prerequisites: bool,
    pub difficulty: DifficultyThresholds,
    pub weeks: WeeksTable,
}

impl Default for RoadmapPolicy {
    fn default() -> Self {
        Self {
            include_unmet_prerequisites: true,
            difficulty: DifficultyThresholds::default(),
            weeks: WeeksTable::default(),
        }
    }
}

impl Validate for RoadmapPolicy {
    fn validate(&self) -> Result<()> {
        validate_positive_weight(
            "roadmap.difficulty.intermediate_min_weight",
            self.difficulty.intermediate_min_weight,
        )?;
        validate_positive_weight(
            "roadmap.difficulty.advanced_min_weight",
            self.difficulty.advanced_min_weight,
        )?;
        if self.difficulty.advanced_min_weight < self.difficulty.intermediate_min_weight {
            return Err(SkillError::InvalidConfigValueError {
                field: "roadmap.difficulty.advanced_min_weight".to_string(),
                value: self.difficulty.advanced_min_weight.to_string(),
                reason: "Must not be lower than intermediate_min_weight".to_string(),
            });
        }
        validate_positive_number("roadmap.weeks.beginner", self.weeks.beginner.into(), 1)?;
        validate_positive_number("roadmap.weeks.intermediate", self.weeks.intermediate.into(), 1)?;
        validate_positive_number("roadmap.weeks.advanced", self.weeks.advanced.into(), 1)?;
        Ok(())
    }
}

/// Soft skills top out at intermediate.
pub fn difficulty_for(category: SkillCategory, weight: f64, thresholds: &DifficultyThresholds) -> Difficulty {
    match category {
        SkillCategory::Technical if weight >= thresholds.advanced_min_weight => Difficulty::Advanced,
        _ if weight >= thresholds.intermediate_min_weight => Difficulty::Intermediate,
        _ => Difficulty::Beginner,
    }
}

pub fn weeks_for(difficulty: Difficulty, weeks: &WeeksTable) -> u32 {
    match difficulty {
        Difficulty::Beginner => weeks.beginner,
        Difficulty::Intermediate => weeks.intermediate,
        Difficulty::Advanced => weeks.advanced,
    }
}

/// A roadmap entry before resources are attached.
#[derive(Debug, Clone, PartialEq)]
pub struct PlannedStep {
    pub skill: String,
    pub weight: f64,
    pub reason: StepReason,
    pub difficulty: Difficulty,
    pub estimated_weeks: u32,
}

/// Source node ready for Kahn's algorithm. The heap pops the highest
/// weight first and the smallest id among equal weights.
#[derive(Debug)]
struct Ready<'a> {
    weight: f64,
    id: &'a str,
    local: usize,
}

impl PartialEq for Ready<'_> {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl Eq for Ready<'_> {}

impl PartialOrd for Ready<'_> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Ready<'_> {
    fn cmp(&self, other: &Self) -> Ordering {
        self.weight
            .total_cmp(&other.weight)
            .then_with(|| other.id.cmp(self.id))
    }
}

pub struct RoadmapBuilder<'t> {
    taxonomy: &'t SkillTaxonomy,
    policy: &'t RoadmapPolicy,
}

impl<'t> RoadmapBuilder<'t> {
    pub fn new(taxonomy: &'t SkillTaxonomy, policy: &'t RoadmapPolicy) -> Self {
        Self { taxonomy, policy }
    }

    /// Orders the missing skills so that every skill comes after its
    /// in-scope prerequisites.
    pub fn plan(&self, missing: &[WeightedSkill], possessed: &BTreeSet<String>) -> Result<Vec<PlannedStep>> {
        let possessed: BTreeSet<SkillIdx> = possessed
            .iter()
            .filter_map(|id| self.taxonomy.index_of(id))
            .collect();

        // 範圍內節點: (taxonomy index, 權重, 原因)
        let mut scope: Vec<(SkillIdx, f64, StepReason)> = Vec::with_capacity(missing.len());
        let mut local: HashMap<SkillIdx, usize> = HashMap::new();

        for requirement in missing {
            let idx = self.taxonomy.index_of(&requirement.skill).ok_or_else(|| {
                tracing::error!(
                    "Missing skill '{}' is not part of the taxonomy snapshot",
                    requirement.skill
                );
                SkillError::InternalConsistencyError {
                    message: format!("skill '{}' is not in the taxonomy", requirement.skill),
                    skills: vec![requirement.skill.clone()],
                }
            })?;
            if local.contains_key(&idx) {
                continue;
            }
            local.insert(idx, scope.len());
            scope.push((idx, requirement.weight, StepReason::Required));
        }

        if self.policy.include_unmet_prerequisites {
            let mut queue: VecDeque<SkillIdx> = scope.iter().map(|(idx, _, _)| *idx).collect();
            while let Some(idx) = queue.pop_front() {
                for &prerequisite in self.taxonomy.prerequisites_of(idx) {
                    if possessed.contains(&prerequisite) || local.contains_key(&prerequisite) {
                        continue;
                    }
                    local.insert(prerequisite, scope.len());
                    scope.push((
                        prerequisite,
                        self.taxonomy.skill(prerequisite).weight,
                        StepReason::Prerequisite,
                    ));
                    queue.push_back(prerequisite);
                }
            }
        }

        let order = self.topological_order(&scope, &local)?;

        Ok(order
            .into_iter()
            .map(|position| {
                let (idx, weight, reason) = scope[position];
                let skill = self.taxonomy.skill(idx);
                let difficulty = skill.difficulty.unwrap_or_else(|| {
                    difficulty_for(skill.category, skill.weight, &self.policy.difficulty)
                });
                let estimated_weeks = skill
                    .estimated_weeks
                    .unwrap_or_else(|| weeks_for(difficulty, &self.policy.weeks));
                PlannedStep {
                    skill: skill.id.clone(),
                    weight,
                    reason,
                    difficulty,
                    estimated_weeks,
                }
            })
            .collect())
    }

    /// Kahn's algorithm over the scope. Edges are "prerequisite before
    /// dependent"; a prerequisite outside the scope is walked through so
    /// that ordering still holds transitively.
    fn topological_order(
        &self,
        scope: &[(SkillIdx, f64, StepReason)],
        local: &HashMap<SkillIdx, usize>,
    ) -> Result<Vec<usize>> {
        let mut dependents: Vec<Vec<usize>> = vec![Vec::new(); scope.len()];
        let mut in_degree = vec![0usize; scope.len()];

        for (position, (idx, _, _)) in scope.iter().enumerate() {
            for before in self.in_scope_prerequisites(*idx, local) {
                dependents[before].push(position);
                in_degree[position] += 1;
            }
        }

        let mut ready: BinaryHeap<Ready<'_>> = BinaryHeap::new();
        for (position, (idx, weight, _)) in scope.iter().enumerate() {
            if in_degree[position] == 0 {
                ready.push(Ready {
                    weight: *weight,
                    id: &self.taxonomy.skill(*idx).id,
                    local: position,
                });
            }
        }

        let mut order = Vec::with_capacity(scope.len());
        while let Some(next) = ready.pop() {
            order.push(next.local);
            for &dependent in &dependents[next.local] {
                in_degree[dependent] -= 1;
                if in_degree[dependent] == 0 {
                    let (idx, weight, _) = scope[dependent];
                    ready.push(Ready {
                        weight,
                        id: &self.taxonomy.skill(idx).id,
                        local: dependent,
                    });
                }
            }
        }

        if order.len() < scope.len() {
            let stuck: Vec<String> = (0..scope.len())
                .filter(|position| in_degree[*position] > 0)
                .map(|position| self.taxonomy.skill(scope[position].0).id.clone())
                .collect();
            tracing::error!(
                scope = ?scope.iter().map(|(idx, _, _)| self.taxonomy.skill(*idx).id.as_str()).collect::<Vec<_>>(),
                stuck = ?stuck,
                "Prerequisite cycle found while ordering roadmap; the taxonomy snapshot is inconsistent"
            );
            return Err(SkillError::InternalConsistencyError {
                message: format!("prerequisite cycle among [{}]", stuck.join(", ")),
                skills: stuck,
            });
        }

        Ok(order)
    }

    /// Nearest in-scope prerequisites of `idx`, looking through skills that
    /// are outside the scope.
    fn in_scope_prerequisites(&self, idx: SkillIdx, local: &HashMap<SkillIdx, usize>) -> BTreeSet<usize> {
        let mut found = BTreeSet::new();
        let mut visited: BTreeSet<SkillIdx> = BTreeSet::new();
        let mut stack: Vec<SkillIdx> = self.taxonomy.prerequisites_of(idx).to_vec();

        while let Some(current) = stack.pop() {
            if !visited.insert(current) {
                continue;
            }
            match local.get(&current) {
                Some(&position) => {
                    found.insert(position);
                }
                None => stack.extend_from_slice(self.taxonomy.prerequisites_of(current)),
            }
        }

        found
    }

    /// Plans the roadmap and attaches resources. Lookups run concurrently
    /// up to `concurrent_lookups`; a failed or slow lookup only empties its
    /// own step.
    pub async fn build<G, C>(
        &self,
        missing: &[WeightedSkill],
        possessed: &BTreeSet<String>,
        gateway: &G,
        config: &C,
    ) -> Result<Roadmap>
    where
        G: ResourceGateway + ?Sized,
        C: ConfigProvider,
    {
        let planned = self.plan(missing, possessed)?;
        let limit = config.resource_limit();
        let timeout = config.lookup_timeout();

        let resources: Vec<Vec<LearningResource>> = stream::iter(
            planned
                .iter()
                .map(|step| lookup_resources(gateway, &step.skill, limit, timeout)),
        )
        .buffered(config.concurrent_lookups().max(1))
        .collect()
        .await;

        let mut total_weeks = 0;
        let steps = planned
            .into_iter()
            .zip(resources)
            .enumerate()
            .map(|(position, (step, resources))| {
                total_weeks += step.estimated_weeks;
                RoadmapStep {
                    step: position + 1,
                    skill: step.skill,
                    reason: step.reason,
                    difficulty: step.difficulty,
                    estimated_weeks: step.estimated_weeks,
                    cumulative_weeks: total_weeks,
                    resources,
                }
            })
            .collect();

        Ok(Roadmap { steps, total_weeks })
    }
}

async fn lookup_resources<G: ResourceGateway + ?Sized>(
    gateway: &G,
    skill: &str,
    limit: usize,
    timeout: Duration,
) -> Vec<LearningResource> {
    match tokio::time::timeout(timeout, gateway.fetch(skill, limit)).await {
        Ok(Ok(mut resources)) => {
            resources.truncate(limit);
            tracing::debug!("{} returned {} resources for {}", gateway.name(), resources.len(), skill);
            resources
        }
        Ok(Err(e)) => {
            tracing::warn!("Resource lookup for '{}' failed via {}: {}", skill, gateway.name(), e);
            Vec::new()
        }
        Err(_) => {
            tracing::warn!(
                "Resource lookup for '{}' timed out after {}ms",
                skill,
                timeout.as_millis()
            );
            Vec::new()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::taxonomy::TaxonomyDocument;
    use async_trait::async_trait;

    fn taxonomy() -> SkillTaxonomy {
        SkillTaxonomy::from_toml_str(
            r#"
[python]
category = "technical"
weight = 3.0

[ml]
category = "technical"
weight = 4.0
prerequisites = ["python"]

["deep learning"]
category = "technical"
weight = 5.0
prerequisites = ["ml", "python"]
estimated_weeks = 10

[javascript]
category = "technical"
weight = 2.0

[react]
category = "technical"
weight = 2.0
prerequisites = ["javascript"]

[sql]
category = "technical"
weight = 1.5

["data visualization"]
category = "technical"
weight = 1.0
prerequisites = ["sql"]

[tableau]
category = "technical"
weight = 1.0
prerequisites = ["data visualization"]

[leadership]
category = "soft"
weight = 4.5
difficulty = "advanced"

[teamwork]
category = "soft"
weight = 1.0
"#,
        )
        .unwrap()
    }

    fn ws(skill: &str, weight: f64) -> WeightedSkill {
        WeightedSkill {
            skill: skill.to_string(),
            weight,
        }
    }

    fn set(skills: &[&str]) -> BTreeSet<String> {
        skills.iter().map(|s| s.to_string()).collect()
    }

    fn ids(steps: &[PlannedStep]) -> Vec<&str> {
        steps.iter().map(|s| s.skill.as_str()).collect()
    }

    #[test]
    fn test_prerequisite_comes_first() {
        let taxonomy = taxonomy();
        let policy = RoadmapPolicy::default();
        let builder = RoadmapBuilder::new(&taxonomy, &policy);

        // ml 權重較高，但必須排在 python 之後
        let steps = builder.plan(&[ws("ml", 4.0), ws("python", 3.0)], &set(&[])).unwrap();
        assert_eq!(ids(&steps), vec!["python", "ml"]);
    }

    #[test]
    fn test_ties_break_by_weight_then_id() {
        let taxonomy = taxonomy();
        let policy = RoadmapPolicy::default();
        let builder = RoadmapBuilder::new(&taxonomy, &policy);

        let missing = [ws("teamwork", 1.0), ws("sql", 1.5), ws("javascript", 2.0), ws("python", 2.0)];
        let steps = builder.plan(&missing, &set(&[])).unwrap();
        assert_eq!(ids(&steps), vec!["javascript", "python", "sql", "teamwork"]);
    }

    #[test]
    fn test_unmet_prerequisites_are_added() {
        let taxonomy = taxonomy();
        let policy = RoadmapPolicy::default();
        let builder = RoadmapBuilder::new(&taxonomy, &policy);

        let steps = builder.plan(&[ws("tableau", 1.0)], &set(&[])).unwrap();
        assert_eq!(ids(&steps), vec!["sql", "data visualization", "tableau"]);
        assert_eq!(steps[0].reason, StepReason::Prerequisite);
        assert_eq!(steps[2].reason, StepReason::Required);
    }

    #[test]
    fn test_possessed_prerequisites_are_skipped() {
        let taxonomy = taxonomy();
        let policy = RoadmapPolicy::default();
        let builder = RoadmapBuilder::new(&taxonomy, &policy);

        let steps = builder.plan(&[ws("react", 2.0)], &set(&["javascript"])).unwrap();
        assert_eq!(ids(&steps), vec!["react"]);
    }

    #[test]
    fn test_disabled_expansion_still_orders_transitively() {
        let taxonomy = taxonomy();
        let policy = RoadmapPolicy {
            include_unmet_prerequisites: false,
            ..RoadmapPolicy::default()
        };
        let builder = RoadmapBuilder::new(&taxonomy, &policy);

        // tableau -> data visualization -> sql; only tableau and sql are in scope
        let steps = builder.plan(&[ws("tableau", 5.0), ws("sql", 1.0)], &set(&[])).unwrap();
        assert_eq!(ids(&steps), vec!["sql", "tableau"]);
    }

    #[test]
    fn test_every_step_follows_its_prerequisites() {
        let taxonomy = taxonomy();
        let policy = RoadmapPolicy::default();
        let builder = RoadmapBuilder::new(&taxonomy, &policy);

        let missing = [
            ws("deep learning", 5.0),
            ws("react", 2.0),
            ws("tableau", 1.0),
            ws("leadership", 4.5),
        ];
        let steps = builder.plan(&missing, &set(&[])).unwrap();
        let position: HashMap<&str, usize> = steps
            .iter()
            .enumerate()
            .map(|(i, s)| (s.skill.as_str(), i))
            .collect();

        for step in &steps {
            let idx = taxonomy.index_of(&step.skill).unwrap();
            for &prerequisite in taxonomy.prerequisites_of(idx) {
                let id = taxonomy.skill(prerequisite).id.as_str();
                if let Some(&before) = position.get(id) {
                    assert!(before < position[step.skill.as_str()], "{} before {}", id, step.skill);
                }
            }
        }
        assert_eq!(steps.len(), 9);
    }

    #[test]
    fn test_difficulty_mapping_table() {
        let thresholds = DifficultyThresholds::default();
        let cases = [
            (SkillCategory::Technical, 0.5, Difficulty::Beginner),
            (SkillCategory::Technical, 1.99, Difficulty::Beginner),
            (SkillCategory::Technical, 2.0, Difficulty::Intermediate),
            (SkillCategory::Technical, 3.99, Difficulty::Intermediate),
            (SkillCategory::Technical, 4.0, Difficulty::Advanced),
            (SkillCategory::Technical, 10.0, Difficulty::Advanced),
            (SkillCategory::Soft, 1.0, Difficulty::Beginner),
            (SkillCategory::Soft, 2.0, Difficulty::Intermediate),
            (SkillCategory::Soft, 9.0, Difficulty::Intermediate),
        ];
        for (category, weight, expected) in cases {
            assert_eq!(difficulty_for(category, weight, &thresholds), expected, "{:?} {}", category, weight);
        }
    }

    #[test]
    fn test_weeks_mapping_table() {
        let weeks = WeeksTable::default();
        let cases = [
            (Difficulty::Beginner, 3),
            (Difficulty::Intermediate, 5),
            (Difficulty::Advanced, 8),
        ];
        for (difficulty, expected) in cases {
            assert_eq!(weeks_for(difficulty, &weeks), expected);
        }
    }

    #[test]
    fn test_taxonomy_overrides_win() {
        let taxonomy = taxonomy();
        let policy = RoadmapPolicy::default();
        let builder = RoadmapBuilder::new(&taxonomy, &policy);

        let steps = builder
            .plan(&[ws("leadership", 1.0), ws("deep learning", 5.0)], &set(&["ml", "python"]))
            .unwrap();
        let leadership = steps.iter().find(|s| s.skill == "leadership").unwrap();
        let deep = steps.iter().find(|s| s.skill == "deep learning").unwrap();

        assert_eq!(leadership.difficulty, Difficulty::Advanced);
        assert_eq!(leadership.estimated_weeks, 8);
        assert_eq!(deep.difficulty, Difficulty::Advanced);
        assert_eq!(deep.estimated_weeks, 10);
    }

    #[test]
    fn test_unknown_missing_skill_is_internal_fault() {
        let taxonomy = taxonomy();
        let policy = RoadmapPolicy::default();
        let builder = RoadmapBuilder::new(&taxonomy, &policy);

        assert!(matches!(
            builder.plan(&[ws("cobol", 1.0)], &set(&[])),
            Err(SkillError::InternalConsistencyError { .. })
        ));
    }

    #[test]
    fn test_cycle_in_scope_is_internal_fault() {
        let taxonomy = SkillTaxonomy::unchecked(&[
            ("a", 2.0, &["b"]),
            ("b", 2.0, &["a"]),
            ("c", 1.0, &["a"]),
            ("d", 1.0, &[]),
        ]);
        let policy = RoadmapPolicy::default();
        let builder = RoadmapBuilder::new(&taxonomy, &policy);

        match builder.plan(&[ws("c", 1.0), ws("d", 1.0)], &set(&[])) {
            Err(SkillError::InternalConsistencyError { skills, .. }) => {
                let stuck: BTreeSet<&str> = skills.iter().map(String::as_str).collect();
                // c 依賴於循環中的 a，同樣無法排序；d 不受影響
                assert_eq!(stuck, BTreeSet::from(["a", "b", "c"]));
            }
            other => panic!("expected internal consistency error, got {:?}", other),
        }
    }

    #[tokio::test]
    async fn test_cycle_fails_build_before_any_lookup() {
        let taxonomy = SkillTaxonomy::unchecked(&[("a", 2.0, &["b"]), ("b", 2.0, &["a"])]);
        let policy = RoadmapPolicy {
            include_unmet_prerequisites: false,
            ..RoadmapPolicy::default()
        };
        let builder = RoadmapBuilder::new(&taxonomy, &policy);

        let err = builder
            .build(&[ws("a", 2.0), ws("b", 2.0)], &set(&[]), &NamedGateway, &Settings)
            .await
            .unwrap_err();
        assert!(matches!(err, SkillError::InternalConsistencyError { ref skills, .. } if skills.len() == 2));
        assert!(err.to_string().contains("cycle"));
    }

    #[test]
    fn test_policy_validation() {
        assert!(RoadmapPolicy::default().validate().is_ok());

        let inverted = RoadmapPolicy {
            difficulty: DifficultyThresholds {
                intermediate_min_weight: 3.0,
                advanced_min_weight: 2.0,
            },
            ..RoadmapPolicy::default()
        };
        assert!(inverted.validate().is_err());

        let zero_weeks = RoadmapPolicy {
            weeks: WeeksTable {
                beginner: 0,
                ..WeeksTable::default()
            },
            ..RoadmapPolicy::default()
        };
        assert!(zero_weeks.validate().is_err());
    }

    struct NamedGateway;

    #[async_trait]
    impl ResourceGateway for NamedGateway {
        async fn fetch(&self, skill_id: &str, _limit: usize) -> Result<Vec<LearningResource>> {
            if skill_id == "sql" {
                return Err(SkillError::ResourceLookupError {
                    skill: skill_id.to_string(),
                    message: "boom".to_string(),
                });
            }
            Ok((0..5)
                .map(|i| LearningResource {
                    title: format!("{} part {}", skill_id, i),
                    url: format!("https://learn.example/{}/{}", skill_id, i),
                    kind: "Article".to_string(),
                })
                .collect())
        }
    }

    struct Settings;

    impl ConfigProvider for Settings {
        fn resource_limit(&self) -> usize {
            2
        }

        fn lookup_timeout(&self) -> Duration {
            Duration::from_millis(500)
        }

        fn concurrent_lookups(&self) -> usize {
            3
        }
    }

    #[tokio::test]
    async fn test_build_attaches_resources_and_weeks() {
        let taxonomy = taxonomy();
        let policy = RoadmapPolicy::default();
        let builder = RoadmapBuilder::new(&taxonomy, &policy);

        let roadmap = builder
            .build(&[ws("tableau", 1.0)], &set(&[]), &NamedGateway, &Settings)
            .await
            .unwrap();

        assert_eq!(roadmap.steps.len(), 3);
        assert_eq!(roadmap.steps.iter().map(|s| s.step).collect::<Vec<_>>(), vec![1, 2, 3]);
        // sql 查詢失敗 -> 空資源，其他步驟不受影響
        assert!(roadmap.steps[0].resources.is_empty());
        assert_eq!(roadmap.steps[1].resources.len(), 2);
        assert_eq!(roadmap.steps[2].resources.len(), 2);
        assert_eq!(roadmap.steps[2].cumulative_weeks, roadmap.total_weeks);
        assert_eq!(roadmap.total_weeks, 3 + 3 + 3);
    }

    #[tokio::test]
    async fn test_build_with_nothing_missing() {
        let taxonomy = SkillTaxonomy::load(TaxonomyDocument::new()).unwrap();
        let policy = RoadmapPolicy::default();
        let builder = RoadmapBuilder::new(&taxonomy, &policy);

        let roadmap = builder.build(&[], &set(&[]), &NamedGateway, &Settings).await.unwrap();
        assert!(roadmap.steps.is_empty());
        assert_eq!(roadmap.total_weeks, 0);
    }
}

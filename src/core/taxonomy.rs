use crate::domain::model::{Difficulty, Skill, SkillCategory};
use crate::utils::error::{Result, SkillError};
use crate::utils::validation::{validate_file_extension, validate_path, validate_positive_weight};
use serde::de::{self, Deserializer, MapAccess, Visitor};
use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, HashMap};
use std::fmt;
use std::path::Path;
use std::sync::{Arc, RwLock};

/// Index of a skill inside the taxonomy arena.
pub type SkillIdx = usize;

/// 設定檔中單一技能的原始定義
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct SkillDefinition {
    pub category: SkillCategory,
    pub weight: f64,
    #[serde(default)]
    pub aliases: Vec<String>,
    #[serde(default)]
    pub prerequisites: Vec<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub difficulty: Option<Difficulty>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub estimated_weeks: Option<u32>,
}

/// Canonical id -> definition, exactly as persisted.
pub type TaxonomyDocument = BTreeMap<String, SkillDefinition>;

/// JSON document wrapper that refuses repeated keys. serde_json keeps the
/// last value for a repeated key, TOML rejects the file; this makes JSON
/// behave like TOML.
struct UniqueKeyDocument(TaxonomyDocument);

impl<'de> Deserialize<'de> for UniqueKeyDocument {
    fn deserialize<D>(deserializer: D) -> std::result::Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        struct DocumentVisitor;

        impl<'de> Visitor<'de> for DocumentVisitor {
            type Value = TaxonomyDocument;

            fn expecting(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
                formatter.write_str("a map from skill id to skill definition")
            }

            fn visit_map<A>(self, mut map: A) -> std::result::Result<Self::Value, A::Error>
            where
                A: MapAccess<'de>,
            {
                let mut document = TaxonomyDocument::new();
                while let Some((id, definition)) = map.next_entry::<String, SkillDefinition>()? {
                    if document.contains_key(&id) {
                        return Err(de::Error::custom(format!("duplicate skill id '{}'", id)));
                    }
                    document.insert(id, definition);
                }
                Ok(document)
            }
        }

        deserializer.deserialize_map(DocumentVisitor).map(UniqueKeyDocument)
    }
}

/// Immutable skill registry.
///
/// Skills live in an arena ordered by canonical id; prerequisite edges are
/// stored as index lists. The alias tables are built once here so that
/// normalization never has to rescan the skill list.
#[derive(Debug)]
pub struct SkillTaxonomy {
    nodes: Vec<Skill>,
    ids: HashMap<String, SkillIdx>,
    exact: HashMap<String, SkillIdx>,
    fuzzy: HashMap<String, SkillIdx>,
    prerequisites: Vec<Vec<SkillIdx>>,
}

#[derive(Clone, Copy, PartialEq, Eq)]
enum Color {
    White,
    Gray,
    Black,
}

/// Case-insensitive key used for exact id/alias lookups.
pub fn exact_key(text: &str) -> String {
    text.trim().to_lowercase()
}

/// Key used by the fuzzy pass: lowercase, `.` and `-` stripped, internal
/// whitespace collapsed to single spaces.
pub fn fuzzy_key(text: &str) -> String {
    let stripped: String = text
        .to_lowercase()
        .chars()
        .filter(|c| *c != '.' && *c != '-')
        .collect();
    stripped.split_whitespace().collect::<Vec<_>>().join(" ")
}

impl SkillTaxonomy {
    /// 從 TOML 或 JSON 檔案載入 (依副檔名判斷)
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let shown = path.as_ref().to_string_lossy().to_string();
        validate_path("taxonomy.path", &shown)?;
        validate_file_extension("taxonomy.path", &shown, &["toml", "json"])?;

        let content = std::fs::read_to_string(&path).map_err(SkillError::IoError)?;
        let is_json = path
            .as_ref()
            .extension()
            .and_then(|ext| ext.to_str())
            .map(|ext| ext.eq_ignore_ascii_case("json"))
            .unwrap_or(false);

        let taxonomy = if is_json {
            Self::from_json_str(&content)?
        } else {
            Self::from_toml_str(&content)?
        };
        tracing::info!("Loaded {} skills from {}", taxonomy.len(), shown);
        Ok(taxonomy)
    }

    pub fn from_toml_str(content: &str) -> Result<Self> {
        let document: TaxonomyDocument = toml::from_str(content)
            .map_err(|e| SkillError::config(format!("Taxonomy TOML parsing error: {}", e)))?;
        Self::load(document)
    }

    pub fn from_json_str(content: &str) -> Result<Self> {
        let UniqueKeyDocument(document) = serde_json::from_str(content)
            .map_err(|e| SkillError::config(format!("Taxonomy JSON parsing error: {}", e)))?;
        Self::load(document)
    }

    /// Builds and validates a taxonomy. Outside of tests this is the only
    /// place a taxonomy is constructed, so every instance is consistent.
    pub fn load(document: TaxonomyDocument) -> Result<Self> {
        let mut nodes = Vec::with_capacity(document.len());
        let mut ids: HashMap<String, SkillIdx> = HashMap::with_capacity(document.len());

        for (id, definition) in &document {
            let id = id.trim();
            if id.is_empty() {
                return Err(SkillError::InvalidConfigValueError {
                    field: "taxonomy".to_string(),
                    value: id.to_string(),
                    reason: "Skill id cannot be empty".to_string(),
                });
            }
            if definition.weight.is_nan() || definition.weight <= 0.0 {
                return Err(SkillError::NonPositiveWeight {
                    skill: id.to_string(),
                    weight: definition.weight,
                });
            }
            validate_positive_weight(&format!("{}.weight", id), definition.weight)?;
            if definition.estimated_weeks == Some(0) {
                return Err(SkillError::InvalidConfigValueError {
                    field: format!("{}.estimated_weeks", id),
                    value: "0".to_string(),
                    reason: "Estimated weeks must be at least 1".to_string(),
                });
            }

            let idx = nodes.len();
            if let Some(&existing) = ids.get(&exact_key(id)) {
                let existing: &Skill = &nodes[existing];
                return Err(SkillError::DuplicateAlias {
                    alias: id.to_string(),
                    first: existing.id.clone(),
                    second: id.to_string(),
                });
            }
            ids.insert(exact_key(id), idx);
            nodes.push(Skill {
                id: id.to_string(),
                category: definition.category,
                weight: definition.weight,
                aliases: definition.aliases.clone(),
                prerequisites: definition.prerequisites.clone(),
                difficulty: definition.difficulty,
                estimated_weeks: definition.estimated_weeks,
            });
        }

        let (exact, fuzzy) = build_alias_index(&nodes)?;
        let prerequisites = resolve_prerequisites(&nodes, &ids)?;

        if let Some(cycle) = find_cycle(&prerequisites) {
            let cycle: Vec<String> = cycle.into_iter().map(|idx| nodes[idx].id.clone()).collect();
            return Err(SkillError::PrerequisiteCycle { cycle });
        }

        Ok(Self {
            nodes,
            ids,
            exact,
            fuzzy,
            prerequisites,
        })
    }

    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    pub fn skills(&self) -> impl Iterator<Item = &Skill> {
        self.nodes.iter()
    }

    pub fn skill(&self, idx: SkillIdx) -> &Skill {
        &self.nodes[idx]
    }

    /// Case-insensitive lookup by canonical id.
    pub fn index_of(&self, id: &str) -> Option<SkillIdx> {
        self.ids.get(&exact_key(id)).copied()
    }

    pub fn get(&self, id: &str) -> Option<&Skill> {
        self.index_of(id).map(|idx| &self.nodes[idx])
    }

    pub fn prerequisites_of(&self, idx: SkillIdx) -> &[SkillIdx] {
        &self.prerequisites[idx]
    }

    pub(crate) fn lookup_exact(&self, key: &str) -> Option<SkillIdx> {
        self.exact.get(key).copied()
    }

    pub(crate) fn lookup_fuzzy(&self, key: &str) -> Option<SkillIdx> {
        self.fuzzy.get(key).copied()
    }

    /// Builds an arena without any of the load-time checks, so tests can
    /// hand the roadmap builder a graph `load` would reject.
    #[cfg(test)]
    pub(crate) fn unchecked(skills: &[(&str, f64, &[&str])]) -> Self {
        let nodes: Vec<Skill> = skills
            .iter()
            .map(|(id, weight, prerequisites)| Skill {
                id: id.to_string(),
                category: SkillCategory::Technical,
                weight: *weight,
                aliases: Vec::new(),
                prerequisites: prerequisites.iter().map(|p| p.to_string()).collect(),
                difficulty: None,
                estimated_weeks: None,
            })
            .collect();
        let ids: HashMap<String, SkillIdx> = nodes
            .iter()
            .enumerate()
            .map(|(idx, skill)| (exact_key(&skill.id), idx))
            .collect();
        let prerequisites = nodes
            .iter()
            .map(|skill| {
                skill
                    .prerequisites
                    .iter()
                    .filter_map(|p| ids.get(&exact_key(p)).copied())
                    .collect()
            })
            .collect();

        Self {
            exact: ids.clone(),
            fuzzy: HashMap::new(),
            nodes,
            ids,
            prerequisites,
        }
    }
}

fn build_alias_index(
    nodes: &[Skill],
) -> Result<(HashMap<String, SkillIdx>, HashMap<String, SkillIdx>)> {
    let mut exact: HashMap<String, SkillIdx> = HashMap::new();
    let mut fuzzy: HashMap<String, SkillIdx> = HashMap::new();

    // canonical id 先登記，別名不得與其他技能的 id 重疊
    for (idx, skill) in nodes.iter().enumerate() {
        exact.insert(exact_key(&skill.id), idx);
    }

    for (idx, skill) in nodes.iter().enumerate() {
        for alias in &skill.aliases {
            let key = exact_key(alias);
            if key.is_empty() {
                continue;
            }
            match exact.get(&key) {
                Some(&owner) if owner != idx => {
                    return Err(SkillError::DuplicateAlias {
                        alias: alias.clone(),
                        first: nodes[owner].id.clone(),
                        second: skill.id.clone(),
                    });
                }
                Some(_) => {}
                None => {
                    exact.insert(key, idx);
                }
            }
        }
    }

    // 模糊鍵若在兩個技能間相撞也視為別名重複
    let mut keys: Vec<(&String, &SkillIdx)> = exact.iter().collect();
    keys.sort();
    for (key, &idx) in keys {
        let loose = fuzzy_key(key);
        if loose.is_empty() {
            continue;
        }
        match fuzzy.get(&loose) {
            Some(&owner) if owner != idx => {
                let (first, second) = if nodes[owner].id <= nodes[idx].id {
                    (owner, idx)
                } else {
                    (idx, owner)
                };
                return Err(SkillError::DuplicateAlias {
                    alias: key.clone(),
                    first: nodes[first].id.clone(),
                    second: nodes[second].id.clone(),
                });
            }
            Some(_) => {}
            None => {
                fuzzy.insert(loose, idx);
            }
        }
    }

    Ok((exact, fuzzy))
}

fn resolve_prerequisites(
    nodes: &[Skill],
    ids: &HashMap<String, SkillIdx>,
) -> Result<Vec<Vec<SkillIdx>>> {
    let mut edges = Vec::with_capacity(nodes.len());
    for skill in nodes {
        let mut resolved: Vec<SkillIdx> = Vec::with_capacity(skill.prerequisites.len());
        for prerequisite in &skill.prerequisites {
            let idx = ids.get(&exact_key(prerequisite)).copied().ok_or_else(|| {
                SkillError::UnknownPrerequisite {
                    skill: skill.id.clone(),
                    prerequisite: prerequisite.clone(),
                }
            })?;
            if !resolved.contains(&idx) {
                resolved.push(idx);
            }
        }
        edges.push(resolved);
    }
    Ok(edges)
}

/// Iterative three-color DFS. Returns the first cycle found as a closed
/// path (`a -> b -> a`), following "requires" edges.
fn find_cycle(edges: &[Vec<SkillIdx>]) -> Option<Vec<SkillIdx>> {
    let mut color = vec![Color::White; edges.len()];

    for start in 0..edges.len() {
        if color[start] != Color::White {
            continue;
        }

        color[start] = Color::Gray;
        let mut stack: Vec<(SkillIdx, usize)> = vec![(start, 0)];

        while let Some(frame) = stack.last_mut() {
            let node = frame.0;
            match edges[node].get(frame.1).copied() {
                Some(next) => {
                    frame.1 += 1;
                    match color[next] {
                        Color::White => {
                            color[next] = Color::Gray;
                            stack.push((next, 0));
                        }
                        Color::Gray => {
                            // 灰色節點一定還在堆疊上
                            let from = stack.iter().position(|(n, _)| *n == next).unwrap_or(0);
                            let mut cycle: Vec<SkillIdx> =
                                stack[from..].iter().map(|(n, _)| *n).collect();
                            cycle.push(next);
                            return Some(cycle);
                        }
                        Color::Black => {}
                    }
                }
                None => {
                    color[node] = Color::Black;
                    stack.pop();
                }
            }
        }
    }

    None
}

/// Process-wide holder of the current taxonomy snapshot.
///
/// Readers clone the `Arc` and keep using it for the whole request; a
/// reload swaps the pointer and never touches a published snapshot.
#[derive(Debug)]
pub struct TaxonomyStore {
    current: RwLock<Arc<SkillTaxonomy>>,
}

impl TaxonomyStore {
    pub fn new(taxonomy: SkillTaxonomy) -> Self {
        Self {
            current: RwLock::new(Arc::new(taxonomy)),
        }
    }

    pub fn snapshot(&self) -> Arc<SkillTaxonomy> {
        let guard = self.current.read().unwrap_or_else(|poisoned| poisoned.into_inner());
        Arc::clone(&*guard)
    }

    /// Publishes a new snapshot and returns the previous one.
    pub fn replace(&self, taxonomy: SkillTaxonomy) -> Arc<SkillTaxonomy> {
        let mut guard = self.current.write().unwrap_or_else(|poisoned| poisoned.into_inner());
        std::mem::replace(&mut *guard, Arc::new(taxonomy))
    }

    /// Loads and validates a file; the current snapshot stays in place
    /// when validation fails.
    pub fn reload_from_file<P: AsRef<Path>>(&self, path: P) -> Result<()> {
        let taxonomy = SkillTaxonomy::from_file(path)?;
        let previous = self.replace(taxonomy);
        tracing::info!("Taxonomy reloaded ({} skills before reload)", previous.len());
        Ok(())
    }
}

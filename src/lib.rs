pub mod adapters;
pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

#[cfg(feature = "cli")]
pub use config::CliConfig;

pub use adapters::{gateway_from_config, FallbackGateway, HttpResourceGateway, NoopGateway, StaticResourceCatalog};
pub use config::{cli::LocalStorage, toml_config::EngineConfig};
pub use self::core::{
    engine::SkillEngine,
    normalizer::{Resolution, SkillNormalizer},
    roadmap::{RoadmapBuilder, RoadmapPolicy},
    taxonomy::{SkillTaxonomy, TaxonomyStore},
};
pub use domain::model::*;
pub use domain::ports::{ConfigProvider, ResourceGateway, Storage};
pub use utils::error::{Result, SkillError};

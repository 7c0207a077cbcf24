pub mod engine;
pub mod gaps;
pub mod normalizer;
pub mod roadmap;
pub mod scoring;
pub mod taxonomy;

pub use crate::domain::model::{
    AnalysisReport, AnalysisRequest, LearningResource, MatchResult, RequiredSkill, Roadmap, RoadmapStep,
    WeightedSkill,
};
pub use crate::domain::ports::{ConfigProvider, ResourceGateway, Storage};
pub use crate::utils::error::Result;

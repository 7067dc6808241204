pub mod aggregator;

pub use aggregator::{Aggregator, CompanyAggregate};

use crate::registry::Company;
use crate::sentiment::ScoredNewsItem;

/// Everything the pipeline accumulated for one company. Owned by the
/// orchestrator for the duration of a run.
#[derive(Debug, Clone)]
pub struct CompanyAnalysis {
    pub company: Company,
    pub articles: Vec<ScoredNewsItem>,
    pub aggregate: CompanyAggregate,
}

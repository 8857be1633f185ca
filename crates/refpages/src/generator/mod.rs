pub mod metrics;
pub mod nav;
pub mod orchestrator;
pub mod staged;
pub(crate) mod stub;

pub use metrics::{GenerationStats, GenerationWarning};
pub use nav::{NavItem, NavigationTree};
pub use orchestrator::{GeneratedOutput, ReferenceGenerator};
pub use staged::StagedFiles;
pub use stub::StubDocument;

#[cfg(test)]
mod tests;

//! Configuration for a pipeline run.
//!
//! There is no config file or environment lookup; `PipelineConfig` exists so
//! hosts and tests can describe a run as data and hand it to
//! `PipelineBuilder::from_config`.

mod pipeline;

pub use pipeline::PipelineConfig;

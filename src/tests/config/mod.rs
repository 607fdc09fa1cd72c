//! Config and builder tests.

mod builder_tests;
mod pipeline_config_tests;

//! Integration test modules

mod pipeline_tests;
mod sample_tests;

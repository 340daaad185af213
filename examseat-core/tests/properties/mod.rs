//! Property test modules

mod allocation_tests;
mod session_tests;

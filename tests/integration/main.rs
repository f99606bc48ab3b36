#[path = "../common/mod.rs"]
mod common;

mod config_tests;
mod lesson_flow_tests;
mod mission_tests;
mod plugin_tests;

#![allow(dead_code)]

pub mod fixtures;

pub use fixtures::{create_test_palette, create_test_project};
pub use test_db::create_test_pool;

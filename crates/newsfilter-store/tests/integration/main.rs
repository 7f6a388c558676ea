mod cache_tests;
mod common;
mod export_tests;

// src/io/mod.rs

pub mod forecast;
pub mod loader;
pub mod reporting;

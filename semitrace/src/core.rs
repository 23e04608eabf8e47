// src/core.rs
pub mod classifier;
pub mod patterns;
pub mod rewriter;
pub mod scanner;

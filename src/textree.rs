//! Main module for textree library functionality

pub mod ast;
pub mod classifier;
pub mod config;
pub mod decomposition;
pub mod error;
pub mod formats;
pub mod loader;
pub mod parser;
pub mod patterns;
pub mod testing;

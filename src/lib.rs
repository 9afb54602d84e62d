// src/lib.rs
// Library interface for h1-scope
pub mod category;
pub mod cli;
pub mod config;
pub mod error;
pub mod http;
pub mod output;
pub mod platforms;
pub mod progress;
pub mod types;

#![doc = include_str!("../README.md")]
#![deny(unsafe_code)]
#![deny(unused_crate_dependencies)]

// Dependencies used by the binary entry point in main.rs
use anyhow as _;
use dotenvy as _;
use liftlog_axum as _;
use liftlog_core as _;
use tokio as _;
use tracing_subscriber as _;

pub mod commands;
pub mod parser;

// Re-export primary types for convenient access
pub use commands::Commands;
pub use parser::Cli;

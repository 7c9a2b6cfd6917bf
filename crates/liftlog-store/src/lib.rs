#![doc = include_str!("../README.md")]
#![deny(unsafe_code)]

pub mod stores;

// Re-export store implementations
pub use stores::JsonExerciseStore;

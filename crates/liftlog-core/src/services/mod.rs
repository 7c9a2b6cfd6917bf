//! Service layer - business logic orchestrating the storage port.
//!
//! Services hold no adapter-specific code; they speak to the outside world
//! only through the traits in [`crate::ports`].

pub mod exercise_service;

pub use exercise_service::ExerciseService;

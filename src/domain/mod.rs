//! Domain layer containing business logic and domain types.
//!
//! # Module Organization
//!
//! - `foundation` - Shared domain primitives (IDs, errors, state machine trait)
//! - `assessment` - Questionnaire, decision flow engine and summary formatter

pub mod assessment;
pub mod foundation;

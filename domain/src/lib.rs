//! Domain layer for chartq
//!
//! This crate contains the core business logic: the configuration value
//! tree, the question model with its merge and synthesis rules, chart
//! reference parsing, and the session abstraction. It has no dependencies
//! on infrastructure or presentation concerns.
//!
//! # Core Concepts
//!
//! - **ConfigTree**: the parsed nested key-value document describing a
//!   chart's tunable parameters.
//! - **Question / QuestionSet**: the exposable-parameter schema derived
//!   from the tree, optionally seeded from a pre-existing document, merged
//!   with existing-wins precedence.
//! - **ChartReference**: a validated HTTP or OCI-style chart address.

pub mod questions;
pub mod reference;
pub mod session;
pub mod values;

// Re-export commonly used types
pub use questions::{Question, QuestionError, QuestionSet, QuestionType, synthesize_defaults};
pub use reference::{ChartReference, ReferenceError};
pub use session::{Session, SessionError, SessionStore};
pub use values::{ConfigTree, ConfigValue, ValueKind};

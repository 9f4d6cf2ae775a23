//! Autoreview: a decision engine for pending wiki edits.
//!
//! Given a pending revision, its page, and optional editor and scoring
//! signals, the engine runs a fixed pipeline of checks and produces exactly
//! one decision: approve, reject, or send to manual review.
//!
//! # Core Principles
//!
//! - **Deterministic**: the same context and configuration always yield the
//!   same decision; nothing reads the wall clock or external state
//! - **Pure**: all signals are gathered up front into a [`CheckContext`];
//!   checks never perform I/O
//! - **Traceable**: every decision carries the full per-check trace,
//!   including the checks that did not decide the outcome
//!
//! # Example
//!
//! ```no_run
//! use autoreview::{Autoreview, CheckContext, PageData, RevisionData};
//!
//! let context = CheckContext::new(RevisionData::default(), PageData::default());
//! let decision = Autoreview::new().evaluate(&context);
//!
//! println!("{}: {}", decision.outcome.label(), decision.reason);
//! for result in &decision.trace {
//!     println!("  {} -> {}", result.check, result.reason);
//! }
//! ```

pub mod checks;
pub mod config;
pub mod context;
pub mod engine;
pub mod error;
pub mod isbn;
pub mod wikitext;

pub use checks::{Check, CheckId, CheckResult, CheckStatus, CANONICAL_ORDER};
pub use config::{AutoreviewConfig, ScoreThresholds, TrustRequirements};
pub use context::{CheckContext, EditScores, EditorProfile, PageData, RevisionData};
pub use engine::{evaluate, Autoreview, Decision, Outcome};
pub use error::{AutoreviewError, Result};

//! # Brain Module
//!
//! Deterministic, non-LLM analysis core for EclatChat.
//! Maps one free-text French message to one pre-written advisor reply.
//!
//! ## Components
//! - `normalizer`: canonical form for keyword matching (case, accents, punctuation)
//! - `intent`: ordered keyword rule tables and intent detection
//! - `responses`: canned French response catalog
//! - `engine`: main orchestrator (normalize -> detect -> respond)

pub mod engine;
pub mod intent;
pub mod normalizer;
pub mod responses;

// Re-export main types for convenience
pub use engine::{AssistantBrain, Reply};
#[allow(unused_imports)]
pub use intent::{ContainerIntent, Intent, IntentClassifier, OutdoorIntent, PoolIntent};
#[allow(unused_imports)]
pub use normalizer::normalize;

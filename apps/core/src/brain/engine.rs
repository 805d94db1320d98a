//! Assistant engine - main orchestrator of the Brain module.
//!
//! Pipelines the normalizer, the intent classifier and the response catalog
//! into the single entry point the UI layer consumes:
//! `classify(message) -> reply`. Pure string processing, no I/O, no state
//! between calls.

use serde::Serialize;
use tracing::debug;

use super::intent::{Intent, IntentClassifier};
use super::normalizer::normalize;
use super::responses;

/// Outcome of one classification pass.
#[derive(Debug, Clone, Serialize)]
pub struct Reply {
    /// Detected intent
    pub intent: Intent,
    /// The canned reply selected for that intent
    pub text: &'static str,
}

/// Rule-based advisor brain for the Éclat de Jardin chat panel.
pub struct AssistantBrain {
    classifier: IntentClassifier,
}

impl Default for AssistantBrain {
    fn default() -> Self {
        Self::new()
    }
}

impl AssistantBrain {
    /// Create a new brain over the static rule tables
    pub fn new() -> Self {
        Self {
            classifier: IntentClassifier::new(),
        }
    }

    /// Classify a raw user message and return the reply text.
    ///
    /// Total function: any input, including the empty string, yields a
    /// non-empty reply. "Not understood" is a normal reply, never an error.
    pub fn classify(&self, message: &str) -> String {
        self.analyze(message).text.to_string()
    }

    /// Full classification outcome, for logging and the one-shot CLI mode.
    pub fn analyze(&self, message: &str) -> Reply {
        let normalized = normalize(message);
        let intent = self.classifier.classify(&normalized);
        debug!(intent = %intent, "message classified");
        Reply {
            intent,
            text: responses::response_for(intent),
        }
    }

    /// Opening message shown when a chat session starts.
    pub fn welcome(&self) -> &'static str {
        responses::response_for(Intent::Greeting)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_classify_is_total_and_nonempty() {
        let brain = AssistantBrain::new();
        for input in ["", "   ", "bonjour", "piscine", "xyz abc 123", "???", "émoji 🌊"] {
            assert!(!brain.classify(input).is_empty(), "Empty reply for {input:?}");
        }
    }

    #[test]
    fn test_analyze_exposes_the_intent() {
        let brain = AssistantBrain::new();
        let reply = brain.analyze("Piscine maçonnée en béton");
        assert_eq!(reply.intent.label(), "pool.masonry");
        assert_eq!(reply.text, brain.classify("piscine maconnee en beton"));
    }

    #[test]
    fn test_welcome_matches_greeting() {
        let brain = AssistantBrain::new();
        assert_eq!(brain.welcome(), brain.classify("bonjour"));
    }
}

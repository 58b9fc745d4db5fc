//! StageEvent — A stage occurrence with metadata
//!
//! Wraps a Stage with its logical timestamp and routing tags.

use serde::{Deserialize, Serialize};

use crate::stage::{Stage, StageCategory};

/// A stage event with timing metadata
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StageEvent {
    /// The canonical stage
    pub stage: Stage,

    /// Logical timestamp in milliseconds (from round start)
    pub timestamp_ms: f64,

    /// Custom tags for filtering/routing
    #[serde(default)]
    pub tags: Vec<String>,
}

impl StageEvent {
    /// Create a new stage event
    pub fn new(stage: Stage, timestamp_ms: f64) -> Self {
        Self {
            stage,
            timestamp_ms,
            tags: Vec::new(),
        }
    }

    /// Add a tag
    pub fn with_tag(mut self, tag: impl Into<String>) -> Self {
        self.tags.push(tag.into());
        self
    }

    /// Add multiple tags
    pub fn with_tags(mut self, tags: impl IntoIterator<Item = impl Into<String>>) -> Self {
        self.tags.extend(tags.into_iter().map(|t| t.into()));
        self
    }

    /// Get stage type name
    pub fn type_name(&self) -> &'static str {
        self.stage.type_name()
    }

    /// Get stage category
    pub fn category(&self) -> StageCategory {
        self.stage.category()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_event_builder() {
        let event = StageEvent::new(Stage::RoundStart, 0.0)
            .with_tag("session-1")
            .with_tags(["ui", "audio"]);

        assert_eq!(event.type_name(), "round_start");
        assert_eq!(event.tags, vec!["session-1", "ui", "audio"]);
    }

    #[test]
    fn test_event_serde_roundtrip() {
        let event = StageEvent::new(
            Stage::ReelStop {
                reel_index: 0,
                value: 6,
            },
            150.0,
        );
        let json = serde_json::to_string(&event).unwrap();
        let back: StageEvent = serde_json::from_str(&json).unwrap();
        assert_eq!(back, event);
    }
}

//! RoundTrace — A complete sequence of stage events for one session
//!
//! A trace captures the full timeline of played rounds, for replay,
//! presentation QA, and session analysis.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::event::StageEvent;
use crate::stage::StageCategory;

/// Errors from trace (de)serialization
#[derive(Error, Debug)]
pub enum TraceError {
    #[error("Trace serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

/// A complete trace of stage events for one session
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RoundTrace {
    /// Unique identifier for this trace
    pub trace_id: String,

    /// Game identifier (e.g., "reelflex")
    pub game_id: String,

    /// Optional session identifier
    #[serde(default)]
    pub session_id: Option<String>,

    /// All events in chronological order
    pub events: Vec<StageEvent>,

    /// When this trace was recorded
    pub recorded_at: DateTime<Utc>,

    /// Custom metadata (e.g., configured spin speed)
    #[serde(default)]
    pub metadata: serde_json::Map<String, serde_json::Value>,
}

impl RoundTrace {
    /// Create a new empty trace
    pub fn new(trace_id: impl Into<String>, game_id: impl Into<String>) -> Self {
        Self {
            trace_id: trace_id.into(),
            game_id: game_id.into(),
            session_id: None,
            events: Vec::new(),
            recorded_at: Utc::now(),
            metadata: serde_json::Map::new(),
        }
    }

    /// Add an event to the trace
    pub fn push(&mut self, event: StageEvent) {
        self.events.push(event);
    }

    /// Add an event and return self (builder pattern)
    pub fn with_event(mut self, event: StageEvent) -> Self {
        self.events.push(event);
        self
    }

    /// Set session ID
    pub fn with_session(mut self, session_id: impl Into<String>) -> Self {
        self.session_id = Some(session_id.into());
        self
    }

    /// Set a metadata entry
    pub fn with_metadata(mut self, key: impl Into<String>, value: serde_json::Value) -> Self {
        self.metadata.insert(key.into(), value);
        self
    }

    /// Number of events in the trace
    pub fn len(&self) -> usize {
        self.events.len()
    }

    /// Check if the trace is empty
    pub fn is_empty(&self) -> bool {
        self.events.is_empty()
    }

    /// Total duration covered by the trace (last event timestamp)
    pub fn duration_ms(&self) -> f64 {
        self.events
            .last()
            .map(|e| e.timestamp_ms)
            .unwrap_or(0.0)
    }

    /// Iterate events of a given category
    pub fn events_in_category(
        &self,
        category: StageCategory,
    ) -> impl Iterator<Item = &StageEvent> {
        self.events.iter().filter(move |e| e.category() == category)
    }

    /// Count events of a given category
    pub fn count_category(&self, category: StageCategory) -> usize {
        self.events_in_category(category).count()
    }

    /// Serialize to pretty JSON
    pub fn to_json(&self) -> Result<String, TraceError> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Deserialize from JSON
    pub fn from_json(json: &str) -> Result<Self, TraceError> {
        Ok(serde_json::from_str(json)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::stage::Stage;
    use crate::taxonomy::AwardTier;

    fn sample_trace() -> RoundTrace {
        RoundTrace::new("trace-001", "reelflex")
            .with_session("session-42")
            .with_metadata("spin_speed", serde_json::json!(0.10))
            .with_event(StageEvent::new(Stage::RoundStart, 0.0))
            .with_event(StageEvent::new(
                Stage::ReelStop {
                    reel_index: 0,
                    value: 6,
                },
                300.0,
            ))
            .with_event(StageEvent::new(
                Stage::RoundWon {
                    tier: AwardTier::TripleSpecial,
                    points: 500,
                },
                450.0,
            ))
    }

    #[test]
    fn test_trace_queries() {
        let trace = sample_trace();
        assert_eq!(trace.len(), 3);
        assert_eq!(trace.duration_ms(), 450.0);
        assert_eq!(trace.count_category(StageCategory::RoundFlow), 2);
        assert_eq!(trace.count_category(StageCategory::Outcome), 1);
        assert_eq!(trace.count_category(StageCategory::Session), 0);
    }

    #[test]
    fn test_trace_json_roundtrip() {
        let trace = sample_trace();
        let json = trace.to_json().unwrap();
        let back = RoundTrace::from_json(&json).unwrap();
        assert_eq!(back, trace);
    }

    #[test]
    fn test_empty_trace() {
        let trace = RoundTrace::new("t", "reelflex");
        assert!(trace.is_empty());
        assert_eq!(trace.duration_ms(), 0.0);
    }
}

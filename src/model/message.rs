use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::error::{Result, TraceGraphError};

use super::{Event, EventGroup, Uid};

/// target uid -> source uids（source 导致了 target）
pub type TracingResult = BTreeMap<Uid, Vec<Uid>>;

/// One payload delivered to the renderer.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct TraceMessage {
    pub events: EventGroup,
    #[serde(rename = "tracingResult", default)]
    pub tracing_result: TracingResult,
}

impl TraceMessage {
    pub fn from_json(raw: &str) -> Result<Self> {
        serde_json::from_str(raw).map_err(|e| TraceGraphError::parse("trace message", e))
    }

    /// All events in group order, then sequence order.
    pub fn iter_events(&self) -> impl Iterator<Item = &Event> {
        self.events.values().flatten()
    }

    pub fn event_count(&self) -> usize {
        self.events.values().map(Vec::len).sum()
    }

    /// `(source, target)` pairs in `tracingResult` order.
    pub fn causal_pairs(&self) -> impl Iterator<Item = (&Uid, &Uid)> {
        self.tracing_result
            .iter()
            .flat_map(|(target, sources)| sources.iter().map(move |src| (src, target)))
    }
}

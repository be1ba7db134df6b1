//! Plot snapshot synchronisation: stale-response guard and change detection.
//!
//! DESIGN
//! ======
//! Every fetch is tagged with the venture it was issued for and a generation
//! counter bumped on each venture switch. A response is applied only while
//! its tag is still current, so a slow response for a previous venture can
//! never overwrite the active one. Polled payloads are compared with the last
//! applied snapshot by JSON equality; identical payloads skip the rebuild.

#[cfg(test)]
#[path = "plot_sync_test.rs"]
mod plot_sync_test;

use plotmap::geometry::{GeometryError, PlotFeature, parse_features};

/// Identity of an in-flight plot request.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RequestTag {
    pub venture_id: String,
    pub generation: u64,
}

/// What to do with a plot response.
#[derive(Debug)]
pub enum SyncOutcome {
    /// Issued for a venture (or generation) that is no longer active; drop it.
    Stale,
    /// Same payload as the last applied snapshot; keep the current shapes.
    Unchanged,
    /// New snapshot to load wholesale.
    Changed {
        features: Vec<PlotFeature>,
        malformed: Vec<GeometryError>,
    },
}

#[derive(Debug, Default)]
pub struct PlotSync {
    current: Option<RequestTag>,
    generation: u64,
    last_payload: Option<serde_json::Value>,
}

impl PlotSync {
    /// Switch to `venture_id`, invalidating every outstanding request.
    pub fn begin(&mut self, venture_id: impl Into<String>) -> RequestTag {
        self.generation += 1;
        self.last_payload = None;
        let tag = RequestTag { venture_id: venture_id.into(), generation: self.generation };
        self.current = Some(tag.clone());
        tag
    }

    /// Stop syncing (no active venture).
    pub fn reset(&mut self) {
        self.generation += 1;
        self.current = None;
        self.last_payload = None;
    }

    /// Tag to use for the next poll, if a venture is active.
    #[must_use]
    pub fn current_tag(&self) -> Option<RequestTag> {
        self.current.clone()
    }

    #[must_use]
    pub fn is_current(&self, tag: &RequestTag) -> bool {
        self.current.as_ref() == Some(tag)
    }

    /// Classify a response and remember it when it is applied.
    pub fn accept(&mut self, tag: &RequestTag, payload: serde_json::Value) -> SyncOutcome {
        if !self.is_current(tag) {
            return SyncOutcome::Stale;
        }
        if self.last_payload.as_ref() == Some(&payload) {
            return SyncOutcome::Unchanged;
        }
        let (features, malformed) = parse_features(feature_values(&payload));
        self.last_payload = Some(payload);
        SyncOutcome::Changed { features, malformed }
    }
}

/// The `features` array of a collection, or a bare array; anything else is empty.
fn feature_values(payload: &serde_json::Value) -> Vec<serde_json::Value> {
    let array = match payload {
        serde_json::Value::Array(items) => Some(items),
        serde_json::Value::Object(map) => map.get("features").and_then(serde_json::Value::as_array),
        _ => None,
    };
    array.cloned().unwrap_or_default()
}

//! Test capture mode for deterministic logging assertions
//!
//! A capture layer records every event that passes the facade's level filter
//! in memory, next to the regular fmt output.

use crate::backend::severity_of;
use crate::encoder::FieldVisitor;
use simplelogger_types::Level;
use std::collections::BTreeMap;
use std::sync::{Arc, Mutex};
use tracing::Subscriber;
use tracing_subscriber::layer::Context;
use tracing_subscriber::registry::LookupSpan;
use tracing_subscriber::Layer;

/// A captured log event
#[derive(Clone, Debug)]
pub struct CapturedEvent {
    pub level: Level,
    pub message: String,
    pub fields: BTreeMap<String, serde_json::Value>,
}

/// Layer collecting events into a shared buffer
pub struct TestCaptureLayer {
    events: Arc<Mutex<Vec<CapturedEvent>>>,
}

impl<S> Layer<S> for TestCaptureLayer
where
    S: Subscriber + for<'a> LookupSpan<'a>,
{
    fn on_event(&self, event: &tracing::Event<'_>, _ctx: Context<'_, S>) {
        let mut visitor = FieldVisitor::default();
        event.record(&mut visitor);

        let captured = CapturedEvent {
            level: severity_of(event.metadata()),
            message: visitor.message,
            fields: visitor.fields,
        };

        self.events
            .lock()
            .map(|mut events| events.push(captured))
            .ok();
    }
}

/// Handle for accessing captured events in tests
#[derive(Clone, Default)]
pub struct TestCapture {
    events: Arc<Mutex<Vec<CapturedEvent>>>,
}

impl TestCapture {
    pub fn new() -> Self {
        Self::default()
    }

    /// A layer feeding this capture; every logger rebuild asks for a new one
    pub fn layer(&self) -> TestCaptureLayer {
        TestCaptureLayer {
            events: self.events.clone(),
        }
    }

    /// Get all captured events
    pub fn events(&self) -> Vec<CapturedEvent> {
        self.events.lock().map(|e| e.clone()).unwrap_or_default()
    }

    /// Messages captured at exactly `level`
    pub fn messages_at(&self, level: Level) -> Vec<String> {
        self.events()
            .into_iter()
            .filter(|e| e.level == level)
            .map(|e| e.message)
            .collect()
    }

    /// Assert that a message containing `needle` was captured at `level`
    ///
    /// # Panics
    ///
    /// Panics if no such event is found
    pub fn assert_logged(&self, level: Level, needle: &str) {
        let events = self.events();
        let found = events
            .iter()
            .any(|e| e.level == level && e.message.contains(needle));
        assert!(
            found,
            "Expected {} event containing {:?} not found in {} captured events",
            level,
            needle,
            events.len()
        );
    }

    /// Clear all captured events
    pub fn clear(&self) {
        self.events.lock().map(|mut e| e.clear()).ok();
    }

    /// Count events matching a predicate
    pub fn count_events<F>(&self, predicate: F) -> usize
    where
        F: Fn(&CapturedEvent) -> bool,
    {
        self.events().iter().filter(|e| predicate(e)).count()
    }
}

//! Host callbacks: how the page hands navigation and button presses to the
//! environment embedding it.

use page_leptos::types::{NavTarget, TriggerId};
use tracing::info;

/// Callbacks the embedding environment supplies to the page composer.
///
/// Both default to doing nothing; the page itself never resolves targets or
/// handles triggers.
pub trait PageHost {
    /// A link to another page was followed.
    fn navigate(&self, _target: &NavTarget) {}

    /// A button trigger was pressed.
    fn trigger(&self, _id: &TriggerId) {}
}

/// Host that ignores every event.
#[derive(Debug, Default, Clone, Copy)]
pub struct NoopHost;

impl PageHost for NoopHost {}

/// Host that records every event to the tracing subscriber.
#[derive(Debug, Default, Clone, Copy)]
pub struct TracingHost;

impl PageHost for TracingHost {
    fn navigate(&self, target: &NavTarget) {
        info!(path = %target, "navigate");
    }

    fn trigger(&self, id: &TriggerId) {
        info!(trigger = %id, "trigger fired");
    }
}

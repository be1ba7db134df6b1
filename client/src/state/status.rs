//! Transient status messages shown in the status bar.
//!
//! DESIGN
//! ======
//! Messages carry ids so a delayed dismiss only removes the message it was
//! scheduled for, even if newer messages arrived in between.

#[cfg(test)]
#[path = "status_test.rs"]
mod status_test;

#[cfg(feature = "csr")]
use leptos::prelude::*;

/// How long a message stays visible.
pub const STATUS_DISMISS_MS: u32 = 4_000;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum StatusKind {
    Info,
    Error,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct StatusMessage {
    pub id: u64,
    pub kind: StatusKind,
    pub text: String,
}

#[derive(Clone, Debug, Default)]
pub struct StatusState {
    messages: Vec<StatusMessage>,
    next_id: u64,
}

impl StatusState {
    /// Queue a message and return its id.
    pub fn push(&mut self, kind: StatusKind, text: impl Into<String>) -> u64 {
        self.next_id += 1;
        let id = self.next_id;
        self.messages.push(StatusMessage { id, kind, text: text.into() });
        id
    }

    pub fn dismiss(&mut self, id: u64) {
        self.messages.retain(|m| m.id != id);
    }

    /// Most recent message still visible.
    #[must_use]
    pub fn latest(&self) -> Option<&StatusMessage> {
        self.messages.last()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.messages.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.messages.is_empty()
    }
}

/// Show a message and schedule its dismissal.
#[cfg(feature = "csr")]
pub fn show_status(status: RwSignal<StatusState>, kind: StatusKind, text: impl Into<String>) {
    let text = text.into();
    if kind == StatusKind::Error {
        log::warn!("{text}");
    }
    let id = status.try_update(|s| s.push(kind, text)).unwrap_or_default();
    gloo_timers::callback::Timeout::new(STATUS_DISMISS_MS, move || {
        status.try_update(|s| s.dismiss(id));
    })
    .forget();
}

//! Mock skill host for testing
//!
//! Records every call the skill makes so tests can assert on them.

use abc_radio::host::{PlaybackStatus, SkillHost};
use anyhow::Result;
use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::{Arc, Mutex};

/// One recorded host interaction
#[derive(Debug, Clone, PartialEq)]
pub enum HostCall {
    Play { url: String, mime: Option<String> },
    WaitWhileSpeaking,
    Speak { dialog: String, data: HashMap<String, String> },
    Emit(String),
    EnableIntent(String),
    DisableIntent(String),
    Register(String),
    GuiSet { key: String, value: serde_json::Value },
    ShowPage(String),
    GuiRelease,
    Status(Option<PlaybackStatus>),
    ReleaseFocus,
}

pub struct MockHost {
    pub calls: Arc<Mutex<Vec<HostCall>>>,
    /// Make the next play() fail
    pub fail_play: Arc<Mutex<bool>>,
    pub gui_connected: Arc<Mutex<bool>>,
}

impl MockHost {
    pub fn new() -> Self {
        Self {
            calls: Arc::new(Mutex::new(Vec::new())),
            fail_play: Arc::new(Mutex::new(false)),
            gui_connected: Arc::new(Mutex::new(true)),
        }
    }

    fn record(&self, call: HostCall) {
        self.calls.lock().unwrap().push(call);
    }

    pub fn calls(&self) -> Vec<HostCall> {
        self.calls.lock().unwrap().clone()
    }

    pub fn clear(&self) {
        self.calls.lock().unwrap().clear();
    }

    pub fn played(&self) -> Vec<String> {
        self.calls()
            .into_iter()
            .filter_map(|c| match c {
                HostCall::Play { url, .. } => Some(url),
                _ => None,
            })
            .collect()
    }

    pub fn pages(&self) -> Vec<String> {
        self.calls()
            .into_iter()
            .filter_map(|c| match c {
                HostCall::ShowPage(page) => Some(page),
                _ => None,
            })
            .collect()
    }

    pub fn gui_value(&self, key: &str) -> Option<serde_json::Value> {
        self.calls().into_iter().rev().find_map(|c| match c {
            HostCall::GuiSet { key: k, value } if k == key => Some(value),
            _ => None,
        })
    }

    pub fn was_spoken(&self, dialog: &str) -> bool {
        self.calls()
            .iter()
            .any(|c| matches!(c, HostCall::Speak { dialog: d, .. } if d == dialog))
    }
}

impl Default for MockHost {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl SkillHost for MockHost {
    async fn play(&self, url: &str, mime: Option<&str>) -> Result<()> {
        if *self.fail_play.lock().unwrap() {
            return Err(anyhow::anyhow!("Mock playback failure"));
        }
        self.record(HostCall::Play {
            url: url.to_string(),
            mime: mime.map(str::to_string),
        });
        Ok(())
    }

    async fn wait_while_speaking(&self) {
        self.record(HostCall::WaitWhileSpeaking);
    }

    async fn speak_dialog(&self, dialog: &str, data: HashMap<String, String>) {
        self.record(HostCall::Speak {
            dialog: dialog.to_string(),
            data,
        });
    }

    async fn emit(&self, msg_type: &str) {
        self.record(HostCall::Emit(msg_type.to_string()));
    }

    async fn enable_intent(&self, intent: &str) {
        self.record(HostCall::EnableIntent(intent.to_string()));
    }

    async fn disable_intent(&self, intent: &str) {
        self.record(HostCall::DisableIntent(intent.to_string()));
    }

    async fn register_handler(&self, event: &str) {
        self.record(HostCall::Register(event.to_string()));
    }

    fn gui_connected(&self) -> bool {
        *self.gui_connected.lock().unwrap()
    }

    async fn gui_set(&self, key: &str, value: serde_json::Value) {
        self.record(HostCall::GuiSet {
            key: key.to_string(),
            value,
        });
    }

    async fn gui_show_page(&self, page: &str, _override_idle: bool) {
        self.record(HostCall::ShowPage(page.to_string()));
    }

    async fn gui_release(&self) {
        self.record(HostCall::GuiRelease);
    }

    async fn send_status(&self, status: Option<PlaybackStatus>) {
        self.record(HostCall::Status(status));
    }

    async fn release_output_focus(&self) {
        self.record(HostCall::ReleaseFocus);
    }
}

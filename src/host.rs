//! Host platform boundary
//!
//! The voice assistant that loads this skill owns audio playback, the GUI,
//! speech and the message bus. The skill only talks to it through
//! [`SkillHost`].

use anyhow::Result;
use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use tracing::info;

/// Bus and GUI event names the skill subscribes to
pub mod events {
    pub const AUDIO_PAUSE: &str = "mycroft.audio.service.pause";
    pub const AUDIO_RESUME: &str = "mycroft.audio.service.resume";
    pub const QUEUE_END: &str = "mycroft.audio.queue_end";
    pub const GUI_PAUSE: &str = "cps.gui.pause";
    pub const GUI_PLAY: &str = "cps.gui.play";
}

/// Intent that shows the player page
pub const SHOW_PLAYER_INTENT: &str = "handle_show_player";

/// Playback status reported to the host's media service
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlaybackStatus {
    pub image: String,
    pub artist: String,
}

#[async_trait]
pub trait SkillHost: Send + Sync {
    /// Start streaming `url` through the host audio service
    async fn play(&self, url: &str, mime: Option<&str>) -> Result<()>;

    /// Block until any in-progress speech has finished
    async fn wait_while_speaking(&self);

    /// Speak a named dialog with template data
    async fn speak_dialog(&self, dialog: &str, data: HashMap<String, String>);

    /// Emit a message on the bus
    async fn emit(&self, msg_type: &str);

    async fn enable_intent(&self, intent: &str);

    async fn disable_intent(&self, intent: &str);

    /// Subscribe the skill to a bus or GUI event
    async fn register_handler(&self, event: &str);

    fn gui_connected(&self) -> bool;

    async fn gui_set(&self, key: &str, value: serde_json::Value);

    async fn gui_show_page(&self, page: &str, override_idle: bool);

    async fn gui_release(&self);

    /// Report playback status; `None` clears it
    async fn send_status(&self, status: Option<PlaybackStatus>);

    async fn release_output_focus(&self);
}

/// A host that only logs what it is asked to do
///
/// Used by the CLI to dry-run playback decisions.
#[derive(Debug, Default)]
pub struct LoggingHost;

#[async_trait]
impl SkillHost for LoggingHost {
    async fn play(&self, url: &str, mime: Option<&str>) -> Result<()> {
        info!("▶️ play {} ({})", url, mime.unwrap_or("unknown type"));
        Ok(())
    }

    async fn wait_while_speaking(&self) {}

    async fn speak_dialog(&self, dialog: &str, data: HashMap<String, String>) {
        info!("🗣️ dialog {} {:?}", dialog, data);
    }

    async fn emit(&self, msg_type: &str) {
        info!("📨 emit {}", msg_type);
    }

    async fn enable_intent(&self, intent: &str) {
        info!("enable intent {}", intent);
    }

    async fn disable_intent(&self, intent: &str) {
        info!("disable intent {}", intent);
    }

    async fn register_handler(&self, event: &str) {
        info!("listening for {}", event);
    }

    fn gui_connected(&self) -> bool {
        false
    }

    async fn gui_set(&self, key: &str, value: serde_json::Value) {
        info!("gui[{}] = {}", key, value);
    }

    async fn gui_show_page(&self, page: &str, _override_idle: bool) {
        info!("gui page {}", page);
    }

    async fn gui_release(&self) {
        info!("gui released");
    }

    async fn send_status(&self, status: Option<PlaybackStatus>) {
        info!("status {:?}", status);
    }

    async fn release_output_focus(&self) {
        info!("output focus released");
    }
}

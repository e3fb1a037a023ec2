//! Radio skill
//!
//! Answers playback queries from the host and drives playback of the
//! chosen station.

use crate::config::Config;
use crate::error::{RadioError, RadioResult};
use crate::host::{events, PlaybackStatus, SkillHost, SHOW_PLAYER_INTENT};
use crate::stations::matcher::normalize_phrase;
use crate::stations::{
    find_mime_type, match_station_from_utterance, AssetResolver, Catalogue, DisplayInfo, Match,
    MatchConfidence, Station,
};
use serde::Serialize;
use serde_json::json;
use std::collections::HashMap;
use std::sync::Arc;
use tracing::{debug, error, info, warn};

/// Possible states of this skill
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Status {
    /// Media not playing or displayed
    #[default]
    Stopped,
    /// Media is playing
    Playing,
    /// Media paused, ready to resume
    Paused,
}

/// How well a query matched, as reported to the host
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum MatchLevel {
    Exact,
    Likely,
    Generic,
}

impl MatchLevel {
    /// Map a confidence score to a tier, `None` below the generic threshold
    pub fn from_confidence(confidence: f64) -> Option<Self> {
        if confidence >= MatchConfidence::Exact.value() {
            Some(MatchLevel::Exact)
        } else if confidence >= MatchConfidence::Likely.value() {
            Some(MatchLevel::Likely)
        } else if confidence >= MatchConfidence::Generic.value() {
            Some(MatchLevel::Generic)
        } else {
            None
        }
    }
}

/// Answer to a playback query
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct QueryResponse {
    pub name: String,
    pub level: MatchLevel,
    pub info: DisplayInfo,
}

pub struct RadioSkill {
    host: Arc<dyn SkillHost>,
    catalogue: Catalogue,
    assets: AssetResolver,
    config: Config,
    status: Status,
    now_playing: Option<String>,
}

impl RadioSkill {
    pub fn new(host: Arc<dyn SkillHost>, catalogue: Catalogue, config: Config) -> Self {
        let assets = AssetResolver::new(&config.assets_dir);
        Self {
            host,
            catalogue,
            assets,
            config,
            status: Status::Stopped,
            now_playing: None,
        }
    }

    pub fn status(&self) -> Status {
        self.status
    }

    pub fn now_playing(&self) -> Option<&str> {
        self.now_playing.as_deref()
    }

    pub fn catalogue(&self) -> &Catalogue {
        &self.catalogue
    }

    /// Register event handlers and hide the player intent until playback starts
    pub async fn initialize(&self) {
        for event in [
            events::AUDIO_PAUSE,
            events::AUDIO_RESUME,
            events::QUEUE_END,
            events::GUI_PAUSE,
            events::GUI_PLAY,
        ] {
            self.host.register_handler(event).await;
        }
        self.host.disable_intent(SHOW_PLAYER_INTENT).await;
    }

    fn default_station(&self) -> Option<&Station> {
        let station = self.catalogue.find(&self.config.default_station);
        if station.is_none() {
            warn!(
                "Default station '{}' is not in the catalogue",
                self.config.default_station
            );
        }
        station
    }

    /// Respond to a playback query
    ///
    /// Weak matches fall back to the default station at generic confidence.
    /// Utterances with nothing left after normalisation are declined.
    pub fn match_query_phrase(&self, phrase: &str) -> Option<QueryResponse> {
        if normalize_phrase(phrase).is_empty() {
            debug!("Declining empty query '{}'", phrase);
            return None;
        }

        let mut matched = match_station_from_utterance(&self.catalogue, phrase);

        if !matched.meets(MatchConfidence::Generic) {
            matched = Match {
                station: Some(self.default_station()?),
                confidence: MatchConfidence::Generic.value(),
            };
        }

        let station = matched.station?;
        let level = MatchLevel::from_confidence(matched.confidence)?;
        info!(
            "Query '{}' -> {} ({:?}, {:.3})",
            phrase, station.name, level, matched.confidence
        );

        Some(QueryResponse {
            name: station.name.clone(),
            level,
            info: station.display_info(&self.assets),
        })
    }

    /// Start playback of a station chosen by the host
    pub async fn start(&mut self, name: &str) -> RadioResult<()> {
        let station = match self.catalogue.find(name) {
            Some(station) => station.clone(),
            None => {
                error!("No station named '{}'", name);
                return Err(RadioError::UnknownStation(name.to_string()));
            }
        };
        self.play_station(&station).await
    }

    /// Play the given station through the host audio service
    ///
    /// On failure the user is told, and the skill state is left untouched.
    pub async fn play_station(&mut self, station: &Station) -> RadioResult<()> {
        info!("Playing station: {}", station.name);

        let media_url = station.stream_url(self.config.stream_format);
        info!("Station url: {}", media_url);
        let mime = find_mime_type(&media_url);

        // Let the announcement finish before the stream starts
        self.host.wait_while_speaking().await;

        if let Err(e) = self.host.play(&media_url, mime).await {
            let data = HashMap::from([("station_name".to_string(), station.name.clone())]);
            self.host
                .speak_dialog("could-not-start-that-station", data)
                .await;
            error!("❌ Failed to start {}: {:#}", station.name, e);
            return Err(RadioError::Playback {
                station: station.name.clone(),
                source: e,
            });
        }

        self.host.enable_intent(SHOW_PLAYER_INTENT).await;

        let image = station
            .image_path(&self.assets)
            .map(|p| p.to_string_lossy().to_string())
            .unwrap_or_default();

        self.host
            .gui_set(
                "media",
                json!({
                    "image": image,
                    "artist": station.name,
                    "track": "",
                    "album": "",
                    "streaming": true,
                }),
            )
            .await;
        self.host.gui_set("status", json!("Playing")).await;
        self.host
            .gui_set(
                "theme",
                json!({ "fgColor": "white", "bgColor": station.color }),
            )
            .await;
        self.show_gui_page("AudioPlayer").await;
        self.host
            .send_status(Some(PlaybackStatus {
                image,
                artist: station.name.clone(),
            }))
            .await;

        self.status = Status::Playing;
        self.now_playing = Some(station.name.clone());
        Ok(())
    }

    /// Show a page variation depending on platform
    async fn show_gui_page(&self, page: &str) {
        if !self.host.gui_connected() {
            return;
        }
        let qml_page = if self.config.platform == "mycroft_mark_2" {
            format!("{}_mark_ii.qml", page)
        } else {
            format!("{}_scalable.qml", page)
        };
        self.host.gui_show_page(&qml_page, true).await;
    }

    pub async fn handle_show_player(&self) {
        if self.status == Status::Stopped {
            self.host
                .speak_dialog("no-station-playing", HashMap::new())
                .await;
        } else {
            self.show_gui_page("AudioPlayer").await;
        }
    }

    /// Handle pause/resume reported by the audio service
    pub async fn handle_audioservice_status_change(&mut self, msg_type: &str) {
        if self.status == Status::Stopped {
            return;
        }
        let (status, label) = match command(msg_type) {
            "resume" => (Status::Playing, "Playing"),
            "pause" => (Status::Paused, "Paused"),
            other => {
                debug!("Ignoring audio service command '{}'", other);
                return;
            }
        };
        self.status = status;
        self.host.gui_set("status", json!(label)).await;
    }

    /// Forward play/pause presses on the GUI to the audio service
    ///
    /// The GUI only changes once the audio service reports the new state.
    pub async fn handle_gui_status_change(&self, msg_type: &str) {
        if self.status == Status::Stopped {
            return;
        }
        match command(msg_type) {
            "play" => {
                info!("Audio resumed by GUI.");
                self.host.emit(events::AUDIO_RESUME).await;
            }
            "pause" => {
                info!("Audio paused by GUI.");
                self.host.emit(events::AUDIO_PAUSE).await;
            }
            other => debug!("Ignoring GUI command '{}'", other),
        }
    }

    pub async fn handle_media_finished(&mut self) {
        if self.status == Status::Playing {
            self.host.gui_release().await;
            self.status = Status::Stopped;
        }
    }

    /// Respond to system stop commands
    ///
    /// Returns whether there was anything to stop.
    pub async fn stop(&mut self) -> bool {
        if self.status == Status::Stopped {
            return false;
        }
        self.now_playing = None;
        self.host.disable_intent(SHOW_PLAYER_INTENT).await;
        self.host.send_status(None).await;
        self.host.gui_release().await;
        self.host.release_output_focus().await;
        self.status = Status::Stopped;
        true
    }
}

fn command(msg_type: &str) -> &str {
    msg_type.rsplit('.').next().unwrap_or(msg_type)
}

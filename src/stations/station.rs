//! Station records and the catalogue
//!
//! Images for each station can be found at <https://www.abc.net.au/radio/stations/>.
//! Streams are playlists in the form `{base_url}/{format}/{stream}`, for example
//! `http://www.abc.net.au/res/streaming/audio/mp3/news_radio.pls`.

use crate::error::{RadioError, RadioResult};
use crate::stations::assets::AssetResolver;
use lazy_static::lazy_static;
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::fmt;
use std::path::{Path, PathBuf};
use std::str::FromStr;
use tracing::debug;

/// Shared prefix for all ABC streaming playlists
pub const DEFAULT_BASE_URL: &str = "http://www.abc.net.au/res/streaming/audio/";

fn default_base_url() -> String {
    DEFAULT_BASE_URL.to_string()
}

/// Audio encoding of a stream
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum StreamFormat {
    #[default]
    Mp3,
    Aac,
}

impl StreamFormat {
    pub fn as_str(&self) -> &'static str {
        match self {
            StreamFormat::Mp3 => "mp3",
            StreamFormat::Aac => "aac",
        }
    }
}

impl fmt::Display for StreamFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for StreamFormat {
    type Err = RadioError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "mp3" => Ok(StreamFormat::Mp3),
            "aac" | "aac+" => Ok(StreamFormat::Aac),
            other => Err(RadioError::Config(format!(
                "unknown stream format '{}', expected mp3 or aac",
                other
            ))),
        }
    }
}

/// An ABC radio station
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Station {
    pub name: String,
    #[serde(default)]
    pub aliases: Vec<String>,
    #[serde(default)]
    pub image_file: Option<String>,
    pub color: String,
    pub stream: String,
    #[serde(default = "default_base_url")]
    pub base_url: String,
}

/// The subset of station data sent across process boundaries
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DisplayInfo {
    pub name: String,
    pub image_path: String,
}

impl Station {
    pub fn new(name: &str, aliases: &[&str], image_file: &str, color: &str, stream: &str) -> Self {
        Self {
            name: name.to_string(),
            aliases: aliases.iter().map(|a| a.to_string()).collect(),
            image_file: Some(image_file.to_string()),
            color: color.to_string(),
            stream: stream.to_string(),
            base_url: default_base_url(),
        }
    }

    /// Stream URL for the given encoding
    pub fn stream_url(&self, format: StreamFormat) -> String {
        format!(
            "{}/{}/{}",
            self.base_url.trim_end_matches('/'),
            format,
            self.stream
        )
    }

    /// The MP3 stream url
    pub fn mp3_stream(&self) -> String {
        self.stream_url(StreamFormat::Mp3)
    }

    /// The AAC+ stream url
    pub fn aac_stream(&self) -> String {
        self.stream_url(StreamFormat::Aac)
    }

    /// Absolute path to the station logo, `None` if the station has no image
    pub fn image_path(&self, assets: &AssetResolver) -> Option<PathBuf> {
        self.image_file
            .as_deref()
            .map(|file| assets.logo_path(file))
    }

    pub fn display_info(&self, assets: &AssetResolver) -> DisplayInfo {
        DisplayInfo {
            name: self.name.clone(),
            image_path: self
                .image_path(assets)
                .map(|p| p.to_string_lossy().to_string())
                .unwrap_or_default(),
        }
    }
}

lazy_static! {
    static ref BUILTIN: Catalogue = Catalogue::new(vec![
        Station::new("ABC News", &[], "abc-news.png", "#000000", "news_radio.pls"),
        Station::new(
            "ABC Radio National",
            &["ABC RN"],
            "abc-radio-national.png",
            "#ac1c1c",
            "radio_national.pls",
        ),
        Station::new("ABC Sport", &[], "abc-sport.png", "#2eab2b", "grandstand.pls"),
        Station::new("triple j", &[], "triple-j.png", "#E03125", "triplej.pls"),
        Station::new(
            "triple j Unearthed",
            &["unearthed"],
            "unearthed.png",
            "#3f752c",
            "unearthed.pls",
        ),
        Station::new("Double J", &["dig music"], "double-j.png", "#000000", "dig_music.pls"),
    ]);
}

/// Ordered, immutable list of stations
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Catalogue {
    stations: Vec<Station>,
}

impl Catalogue {
    pub fn new(stations: Vec<Station>) -> Self {
        Self { stations }
    }

    /// The built-in ABC station list
    pub fn builtin() -> &'static Catalogue {
        &BUILTIN
    }

    /// Load a catalogue from a JSON array of stations
    pub fn from_file(path: &Path) -> RadioResult<Self> {
        let content = std::fs::read_to_string(path)?;
        let catalogue = Self::from_json(&content)?;
        debug!(
            "Loaded {} stations from {}",
            catalogue.len(),
            path.display()
        );
        Ok(catalogue)
    }

    pub fn from_json(content: &str) -> RadioResult<Self> {
        let stations: Vec<Station> = serde_json::from_str(content)
            .map_err(|e| RadioError::Catalogue(format!("invalid station list: {}", e)))?;

        let mut seen = HashSet::new();
        for station in &stations {
            if station.name.trim().is_empty() {
                return Err(RadioError::Catalogue("station with empty name".to_string()));
            }
            if !seen.insert(station.name.as_str()) {
                return Err(RadioError::Catalogue(format!(
                    "duplicate station name '{}'",
                    station.name
                )));
            }
        }

        Ok(Self::new(stations))
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Station> {
        self.stations.iter()
    }

    /// Find a station by its exact canonical name
    pub fn find(&self, name: &str) -> Option<&Station> {
        self.stations.iter().find(|s| s.name == name)
    }

    pub fn len(&self) -> usize {
        self.stations.len()
    }

    pub fn is_empty(&self) -> bool {
        self.stations.is_empty()
    }
}

impl<'a> IntoIterator for &'a Catalogue {
    type Item = &'a Station;
    type IntoIter = std::slice::Iter<'a, Station>;

    fn into_iter(self) -> Self::IntoIter {
        self.stations.iter()
    }
}

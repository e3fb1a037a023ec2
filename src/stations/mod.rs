//! Station catalogue and matching
//!
//! The fixed list of ABC streams, and the engine that decides which of them
//! an utterance asked for.

pub mod assets;
pub mod matcher;
pub mod station;
pub mod util;

pub use assets::AssetResolver;
pub use matcher::{match_station_from_utterance, match_station_name, Match, MatchConfidence};
pub use station::{Catalogue, DisplayInfo, Station, StreamFormat, DEFAULT_BASE_URL};
pub use util::find_mime_type;

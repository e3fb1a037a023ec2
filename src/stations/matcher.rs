//! Utterance to station matching

use crate::stations::station::{Catalogue, Station};
use crate::utils::fuzzy::best_similarity;
use tracing::debug;

/// Minimum confidence levels for playback matching
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MatchConfidence {
    Exact,
    /// Reserved; no decision tier uses it.
    High,
    Likely,
    Generic,
}

impl MatchConfidence {
    pub const fn value(self) -> f64 {
        match self {
            MatchConfidence::Exact => 0.9,
            MatchConfidence::High => 0.8,
            MatchConfidence::Likely => 0.7,
            MatchConfidence::Generic => 0.6,
        }
    }
}

/// A station paired with how confident we are it was requested
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Match<'a> {
    pub station: Option<&'a Station>,
    pub confidence: f64,
}

impl<'a> Match<'a> {
    pub fn none() -> Self {
        Self {
            station: None,
            confidence: 0.0,
        }
    }

    pub fn meets(&self, level: MatchConfidence) -> bool {
        self.confidence >= level.value()
    }
}

/// Lowercase, trim, and drop every "play" from an utterance
///
/// "Play triple j" becomes "triple j".
pub fn normalize_phrase(phrase: &str) -> String {
    phrase
        .to_lowercase()
        .trim()
        .replace("play", "")
        .trim()
        .to_string()
}

fn score_station(normalized: &str, station: &Station) -> f64 {
    let name = station.name.to_lowercase();
    let aliases: Vec<String> = station.aliases.iter().map(|a| a.to_lowercase()).collect();

    best_similarity(
        normalized,
        std::iter::once(name.as_str()).chain(aliases.iter().map(String::as_str)),
    )
}

/// Determine confidence that a phrase requested a given station
///
/// The score is the best similarity against the station name and any alias.
pub fn match_station_name<'a>(phrase: &str, station: &'a Station) -> Match<'a> {
    let normalized = normalize_phrase(phrase);
    Match {
        station: Some(station),
        confidence: score_station(&normalized, station),
    }
}

/// Get the expected station from a user utterance
///
/// Stations are scanned in catalogue order and the first one with the
/// highest score wins. Only an empty catalogue yields no station.
pub fn match_station_from_utterance<'a>(catalogue: &'a Catalogue, utterance: &str) -> Match<'a> {
    let normalized = normalize_phrase(utterance);
    let mut best = Match::none();

    for station in catalogue {
        let confidence = score_station(&normalized, station);
        if best.station.is_none() || confidence > best.confidence {
            best = Match {
                station: Some(station),
                confidence,
            };
        }
    }

    if let Some(station) = best.station {
        debug!(
            "Best station for '{}': {} ({:.3})",
            utterance, station.name, best.confidence
        );
    }
    best
}

#[cfg(test)]
mod tests {
    use super::*;

    fn station(name: &str, aliases: &[&str]) -> Station {
        Station::new(name, aliases, "logo.png", "#000000", "stream.pls")
    }

    #[test]
    fn test_normalize_phrase() {
        assert_eq!(normalize_phrase("  Play triple j "), "triple j");
        assert_eq!(normalize_phrase("PLAY"), "");
        assert_eq!(normalize_phrase("ABC RN please play"), "abc rn please");
    }

    #[test]
    fn test_confidence_values() {
        assert_eq!(MatchConfidence::Exact.value(), 0.9);
        assert_eq!(MatchConfidence::High.value(), 0.8);
        assert_eq!(MatchConfidence::Likely.value(), 0.7);
        assert_eq!(MatchConfidence::Generic.value(), 0.6);
    }

    #[test]
    fn test_match_station_name_uses_aliases() {
        let rn = station("ABC Radio National", &["ABC RN"]);
        let m = match_station_name("play abc rn", &rn);
        assert_eq!(m.confidence, 1.0);
        assert_eq!(m.station, Some(&rn));
    }

    #[test]
    fn test_two_station_scenario() {
        let catalogue = Catalogue::new(vec![station("ABC News", &[]), station("triple j", &[])]);

        let m = match_station_from_utterance(&catalogue, "play triple j");
        assert_eq!(m.station.unwrap().name, "triple j");
        assert_eq!(m.confidence, 1.0);

        let m = match_station_from_utterance(&catalogue, "play the news");
        assert_eq!(m.station.unwrap().name, "ABC News");
        assert!((m.confidence - 0.625).abs() < 1e-9);
        assert!(m.meets(MatchConfidence::Generic));
    }

    #[test]
    fn test_tie_goes_to_first_station() {
        let mut first = station("Twin", &["twin fm"]);
        first.stream = "first.pls".to_string();
        let mut second = station("Twin", &["twin fm"]);
        second.stream = "second.pls".to_string();
        let catalogue = Catalogue::new(vec![first, second]);

        let m = match_station_from_utterance(&catalogue, "twin");
        assert_eq!(m.station.unwrap().stream, "first.pls");

        let m = match_station_from_utterance(&catalogue, "something else");
        assert_eq!(m.station.unwrap().stream, "first.pls");
    }

    #[test]
    fn test_empty_catalogue() {
        let catalogue = Catalogue::default();
        let m = match_station_from_utterance(&catalogue, "triple j");
        assert!(m.station.is_none());
        assert_eq!(m.confidence, 0.0);
    }
}

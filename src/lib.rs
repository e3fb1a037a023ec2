//! ABC Radio Library
//!
//! Station catalogue, utterance matching and playback orchestration for the
//! ABC radio voice skill.

pub mod config;
pub mod error;
pub mod host;
pub mod skill;
pub mod stations;
pub mod utils;

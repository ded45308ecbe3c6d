//! JSON config file loading
//!
//! A config file is a flat JSON object. Service keys may be written either in
//! short form (`stt`) or with the `_service` suffix used by the serialized
//! `ProjectConfig`, so a `--dry-run` output can be fed straight back in.
//! Unknown keys are ignored.

use super::RawConfigInput;
use serde::Deserialize;
use std::path::{Path, PathBuf};
use thiserror::Error;
use tokio::fs;

/// Errors raised before a candidate input set even exists
#[derive(Error, Debug)]
pub enum ConfigFileError {
    #[error("Failed to read config file {}: {source}", .path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to parse config file {}: {source}", .path.display())]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
}

/// A transport entry given either as a single string or a list
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(untagged)]
pub enum OneOrMany {
    One(String),
    Many(Vec<String>),
}

impl OneOrMany {
    fn into_vec(self) -> Vec<String> {
        match self {
            OneOrMany::One(value) => vec![value],
            OneOrMany::Many(values) => values,
        }
    }
}

/// Recognized keys of a config file
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct ConfigFile {
    pub name: Option<String>,
    pub project_name: Option<String>,
    pub bot_type: Option<String>,
    pub transports: Option<OneOrMany>,
    pub transport: Option<OneOrMany>,
    pub mode: Option<String>,
    pub stt: Option<String>,
    pub stt_service: Option<String>,
    pub llm: Option<String>,
    pub llm_service: Option<String>,
    pub tts: Option<String>,
    pub tts_service: Option<String>,
    pub realtime: Option<String>,
    pub realtime_service: Option<String>,
    pub video: Option<String>,
    pub video_service: Option<String>,
    pub client_framework: Option<String>,
    pub client_server: Option<String>,
    pub daily_pstn_mode: Option<String>,
    pub twilio_daily_sip_mode: Option<String>,
    pub recording: Option<bool>,
    pub transcription: Option<bool>,
    pub smart_turn: Option<bool>,
    pub video_input: Option<bool>,
    pub video_output: Option<bool>,
    pub deploy_to_cloud: Option<bool>,
    pub enable_krisp: Option<bool>,
    pub observability: Option<bool>,
    pub enable_observability: Option<bool>,
}

impl ConfigFile {
    /// Parse config file text
    pub fn from_json(text: &str) -> serde_json::Result<Self> {
        serde_json::from_str(text)
    }
}

/// Short key first, then its long spelling
fn either(short: Option<String>, long: Option<String>) -> Option<String> {
    short.filter(|s| !s.is_empty()).or(long)
}

impl From<ConfigFile> for RawConfigInput {
    fn from(file: ConfigFile) -> Self {
        let transports = file
            .transports
            .map(OneOrMany::into_vec)
            .filter(|t| !t.is_empty())
            .or_else(|| file.transport.map(OneOrMany::into_vec));

        RawConfigInput {
            name: either(file.name, file.project_name),
            bot_type: file.bot_type,
            transports,
            mode: file.mode,
            stt: either(file.stt, file.stt_service),
            llm: either(file.llm, file.llm_service),
            tts: either(file.tts, file.tts_service),
            realtime: either(file.realtime, file.realtime_service),
            video: either(file.video, file.video_service),
            client_framework: file.client_framework,
            client_server: file.client_server,
            daily_pstn_mode: file.daily_pstn_mode,
            twilio_daily_sip_mode: file.twilio_daily_sip_mode,
            recording: file.recording,
            transcription: file.transcription,
            smart_turn: file.smart_turn,
            video_input: file.video_input,
            video_output: file.video_output,
            deploy_to_cloud: file.deploy_to_cloud,
            enable_krisp: file.enable_krisp,
            observability: file.observability.or(file.enable_observability),
        }
    }
}

/// Load and parse a JSON config file
pub async fn load_config_file(path: &Path) -> Result<ConfigFile, ConfigFileError> {
    let content = fs::read_to_string(path)
        .await
        .map_err(|source| ConfigFileError::Read {
            path: path.to_path_buf(),
            source,
        })?;

    let file = ConfigFile::from_json(&content).map_err(|source| ConfigFileError::Parse {
        path: path.to_path_buf(),
        source,
    })?;

    tracing::debug!(path = %path.display(), "loaded config file");
    Ok(file)
}

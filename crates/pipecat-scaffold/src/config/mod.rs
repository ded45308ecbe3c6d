//! Project configuration: raw input, resolved record, validation and file I/O
//!
//! This module provides:
//! - The closed option sets (bot type, pipeline mode, client, dial mode)
//! - `RawConfigInput`, the untrusted bag of optional values
//! - `ProjectConfig`, the resolved record handed to a generator
//! - Validation (`validate_and_build`) and JSON loading/serialization

pub mod file;
pub mod validator;

use serde::{Deserialize, Serialize};
use std::fmt;
use std::path::{Component, Path};

pub use file::{load_config_file, ConfigFile, ConfigFileError};
pub use validator::{validate_and_build, ConfigValidationError};

/// What kind of bot the project is
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BotType {
    Web,
    Telephony,
}

impl BotType {
    pub fn parse(s: &str) -> Option<Self> {
        match s {
            "web" => Some(BotType::Web),
            "telephony" => Some(BotType::Telephony),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            BotType::Web => "web",
            BotType::Telephony => "telephony",
        }
    }
}

impl fmt::Display for BotType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// How the voice pipeline is assembled
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PipelineMode {
    /// Separate STT, LLM and TTS stages
    Cascade,
    /// One speech-to-speech service
    Realtime,
}

impl PipelineMode {
    pub fn parse(s: &str) -> Option<Self> {
        match s {
            "cascade" => Some(PipelineMode::Cascade),
            "realtime" => Some(PipelineMode::Realtime),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            PipelineMode::Cascade => "cascade",
            PipelineMode::Realtime => "realtime",
        }
    }
}

impl fmt::Display for PipelineMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Client app flavour generated alongside a web bot
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ClientFramework {
    React,
    Vanilla,
}

impl ClientFramework {
    pub fn as_str(&self) -> &'static str {
        match self {
            ClientFramework::React => "react",
            ClientFramework::Vanilla => "vanilla",
        }
    }
}

/// Dev server used by the generated client
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ClientServer {
    Vite,
    Nextjs,
}

impl ClientServer {
    pub fn parse(s: &str) -> Option<Self> {
        match s {
            "vite" => Some(ClientServer::Vite),
            "nextjs" => Some(ClientServer::Nextjs),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            ClientServer::Vite => "vite",
            ClientServer::Nextjs => "nextjs",
        }
    }
}

/// Direction of a phone call leg
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum DialMode {
    DialIn,
    DialOut,
}

impl DialMode {
    pub fn parse(s: &str) -> Option<Self> {
        match s {
            "dial-in" => Some(DialMode::DialIn),
            "dial-out" => Some(DialMode::DialOut),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            DialMode::DialIn => "dial-in",
            DialMode::DialOut => "dial-out",
        }
    }

    /// Suffix appended to a generic transport name (hyphen stripped)
    pub fn suffix(&self) -> &'static str {
        match self {
            DialMode::DialIn => "dialin",
            DialMode::DialOut => "dialout",
        }
    }
}

impl fmt::Display for DialMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Transports that need a dial mode before they name a concrete catalog entry
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum GenericTransport {
    DailyPstn,
    TwilioDailySip,
}

impl GenericTransport {
    pub const ALL: [GenericTransport; 2] =
        [GenericTransport::DailyPstn, GenericTransport::TwilioDailySip];

    pub fn parse(s: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|g| g.base_name() == s)
    }

    /// Token accepted in the transport list
    pub fn base_name(&self) -> &'static str {
        match self {
            GenericTransport::DailyPstn => "daily_pstn",
            GenericTransport::TwilioDailySip => "twilio_daily_sip",
        }
    }

    /// Flag carrying the dial mode
    pub fn mode_flag(&self) -> &'static str {
        match self {
            GenericTransport::DailyPstn => "--daily-pstn-mode",
            GenericTransport::TwilioDailySip => "--twilio-daily-sip-mode",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            GenericTransport::DailyPstn => "Daily PSTN",
            GenericTransport::TwilioDailySip => "Twilio + Daily SIP",
        }
    }

    /// Concrete transport identifier, e.g. `daily_pstn` + dial-in => `daily_pstn_dialin`
    pub fn resolve(&self, mode: DialMode) -> String {
        format!("{}_{}", self.base_name(), mode.suffix())
    }

    /// Recover the dial mode from a resolved identifier of this transport
    pub fn dial_mode_of(&self, resolved: &str) -> Option<DialMode> {
        let suffix = resolved
            .strip_prefix(self.base_name())?
            .strip_prefix('_')?;
        [DialMode::DialIn, DialMode::DialOut]
            .into_iter()
            .find(|m| m.suffix() == suffix)
    }

    /// The raw dial-mode value supplied for this transport
    pub fn mode_input<'a>(&self, input: &'a RawConfigInput) -> Option<&'a str> {
        let value = match self {
            GenericTransport::DailyPstn => &input.daily_pstn_mode,
            GenericTransport::TwilioDailySip => &input.twilio_daily_sip_mode,
        };
        value.as_deref().filter(|s| !s.is_empty())
    }
}

/// Untrusted project description gathered from flags, a config file or prompts
///
/// Every field is independently optional; `validate_and_build` decides which
/// combinations are legal. Booleans are optional so a config file can fill in
/// whatever the command line left unset.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RawConfigInput {
    pub name: Option<String>,
    pub bot_type: Option<String>,
    pub transports: Option<Vec<String>>,
    pub mode: Option<String>,
    pub stt: Option<String>,
    pub llm: Option<String>,
    pub tts: Option<String>,
    pub realtime: Option<String>,
    pub video: Option<String>,
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
}

/// True when `name` is exactly one plain path segment, usable as a directory
/// under an output directory
pub fn is_directory_name(name: &str) -> bool {
    let mut components = Path::new(name).components();
    matches!(
        (components.next(), components.next()),
        (Some(Component::Normal(_)), None)
    )
}

fn non_empty(value: Option<String>) -> Option<String> {
    value.filter(|s| !s.is_empty())
}

impl RawConfigInput {
    /// Merge with a fallback source; values set on `self` win
    pub fn or(self, fallback: RawConfigInput) -> RawConfigInput {
        RawConfigInput {
            name: non_empty(self.name).or(fallback.name),
            bot_type: non_empty(self.bot_type).or(fallback.bot_type),
            transports: self
                .transports
                .filter(|t| !t.is_empty())
                .or(fallback.transports),
            mode: non_empty(self.mode).or(fallback.mode),
            stt: non_empty(self.stt).or(fallback.stt),
            llm: non_empty(self.llm).or(fallback.llm),
            tts: non_empty(self.tts).or(fallback.tts),
            realtime: non_empty(self.realtime).or(fallback.realtime),
            video: non_empty(self.video).or(fallback.video),
            client_framework: non_empty(self.client_framework).or(fallback.client_framework),
            client_server: non_empty(self.client_server).or(fallback.client_server),
            daily_pstn_mode: non_empty(self.daily_pstn_mode).or(fallback.daily_pstn_mode),
            twilio_daily_sip_mode: non_empty(self.twilio_daily_sip_mode)
                .or(fallback.twilio_daily_sip_mode),
            recording: self.recording.or(fallback.recording),
            transcription: self.transcription.or(fallback.transcription),
            smart_turn: self.smart_turn.or(fallback.smart_turn),
            video_input: self.video_input.or(fallback.video_input),
            video_output: self.video_output.or(fallback.video_output),
            deploy_to_cloud: self.deploy_to_cloud.or(fallback.deploy_to_cloud),
            enable_krisp: self.enable_krisp.or(fallback.enable_krisp),
            observability: self.observability.or(fallback.observability),
        }
    }
}

/// Fully resolved, internally consistent project description
///
/// Only `validate_and_build` constructs this. Field order is the key order of
/// the JSON form.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ProjectConfig {
    pub project_name: String,
    pub bot_type: BotType,
    pub transports: Vec<String>,
    pub mode: PipelineMode,
    pub stt_service: Option<String>,
    pub llm_service: Option<String>,
    pub tts_service: Option<String>,
    pub realtime_service: Option<String>,
    pub video_service: Option<String>,
    pub generate_client: bool,
    pub client_framework: Option<ClientFramework>,
    pub client_server: Option<ClientServer>,
    pub daily_pstn_mode: Option<DialMode>,
    pub twilio_daily_sip_mode: Option<DialMode>,
    pub video_input: bool,
    pub video_output: bool,
    pub recording: bool,
    pub transcription: bool,
    pub smart_turn: bool,
    pub deploy_to_cloud: bool,
    pub enable_krisp: bool,
    pub enable_observability: bool,
}

impl ProjectConfig {
    /// Pretty-printed JSON form of every field
    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string_pretty(self)
    }
}

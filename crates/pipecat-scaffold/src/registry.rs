//! Static catalog of transports and services a project can be built from
//!
//! The catalog is split into categories. Only the `value` of each entry is
//! load-bearing for validation; `label` is shown in interactive prompts.

use serde::Serialize;
use std::fmt;

/// A single selectable entry in a catalog category
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ServiceDefinition {
    /// Stable identifier used in flags, config files and generated projects
    pub value: &'static str,
    /// Human-readable name
    pub label: &'static str,
}

const fn svc(value: &'static str, label: &'static str) -> ServiceDefinition {
    ServiceDefinition { value, label }
}

pub const WEB_TRANSPORTS: &[ServiceDefinition] = &[
    svc("daily", "Daily (WebRTC)"),
    svc("smallwebrtc", "SmallWebRTC"),
];

pub const TELEPHONY_TRANSPORTS: &[ServiceDefinition] = &[
    svc("twilio", "Twilio"),
    svc("telnyx", "Telnyx"),
    svc("plivo", "Plivo"),
    svc("exotel", "Exotel"),
    svc("daily_pstn_dialin", "Daily PSTN (dial-in)"),
    svc("daily_pstn_dialout", "Daily PSTN (dial-out)"),
    svc("twilio_daily_sip_dialin", "Twilio + Daily SIP (dial-in)"),
    svc("twilio_daily_sip_dialout", "Twilio + Daily SIP (dial-out)"),
];

pub const STT_SERVICES: &[ServiceDefinition] = &[
    svc("deepgram_stt", "Deepgram"),
    svc("assemblyai_stt", "AssemblyAI"),
    svc("aws_transcribe_stt", "AWS Transcribe"),
    svc("azure_stt", "Azure"),
    svc("cartesia_stt", "Cartesia"),
    svc("elevenlabs_stt", "ElevenLabs"),
    svc("gladia_stt", "Gladia"),
    svc("google_stt", "Google"),
    svc("groq_stt", "Groq (Whisper)"),
    svc("openai_stt", "OpenAI"),
    svc("soniox_stt", "Soniox"),
    svc("speechmatics_stt", "Speechmatics"),
    svc("whisper_stt", "Whisper (local)"),
];

pub const LLM_SERVICES: &[ServiceDefinition] = &[
    svc("openai_llm", "OpenAI"),
    svc("anthropic_llm", "Anthropic"),
    svc("aws_bedrock_llm", "AWS Bedrock"),
    svc("azure_llm", "Azure OpenAI"),
    svc("cerebras_llm", "Cerebras"),
    svc("deepseek_llm", "DeepSeek"),
    svc("fireworks_llm", "Fireworks AI"),
    svc("google_gemini_llm", "Google Gemini"),
    svc("grok_llm", "Grok"),
    svc("groq_llm", "Groq"),
    svc("mistral_llm", "Mistral"),
    svc("ollama_llm", "Ollama"),
    svc("openrouter_llm", "OpenRouter"),
    svc("perplexity_llm", "Perplexity"),
    svc("together_llm", "Together AI"),
];

pub const TTS_SERVICES: &[ServiceDefinition] = &[
    svc("cartesia_tts", "Cartesia"),
    svc("elevenlabs_tts", "ElevenLabs"),
    svc("aws_polly_tts", "AWS Polly"),
    svc("azure_tts", "Azure"),
    svc("deepgram_tts", "Deepgram"),
    svc("fish_tts", "Fish Audio"),
    svc("google_tts", "Google"),
    svc("hume_tts", "Hume"),
    svc("inworld_tts", "Inworld"),
    svc("lmnt_tts", "LMNT"),
    svc("neuphonic_tts", "Neuphonic"),
    svc("openai_tts", "OpenAI"),
    svc("rime_tts", "Rime"),
];

pub const REALTIME_SERVICES: &[ServiceDefinition] = &[
    svc("openai_realtime", "OpenAI Realtime"),
    svc("gemini_live_realtime", "Gemini Live"),
    svc("aws_nova_sonic_realtime", "AWS Nova Sonic"),
    svc("azure_realtime", "Azure Realtime"),
    svc("ultravox_realtime", "Ultravox"),
];

pub const VIDEO_SERVICES: &[ServiceDefinition] = &[
    svc("tavus_video", "Tavus"),
    svc("heygen_video", "HeyGen"),
    svc("simli_video", "Simli"),
];

/// Catalog categories
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ServiceCategory {
    WebTransport,
    TelephonyTransport,
    Stt,
    Llm,
    Tts,
    Realtime,
    Video,
}

impl ServiceCategory {
    pub const ALL: [ServiceCategory; 7] = [
        ServiceCategory::WebTransport,
        ServiceCategory::TelephonyTransport,
        ServiceCategory::Stt,
        ServiceCategory::Llm,
        ServiceCategory::Tts,
        ServiceCategory::Realtime,
        ServiceCategory::Video,
    ];

    /// Entries of this category, in catalog order
    pub fn services(self) -> &'static [ServiceDefinition] {
        match self {
            ServiceCategory::WebTransport => WEB_TRANSPORTS,
            ServiceCategory::TelephonyTransport => TELEPHONY_TRANSPORTS,
            ServiceCategory::Stt => STT_SERVICES,
            ServiceCategory::Llm => LLM_SERVICES,
            ServiceCategory::Tts => TTS_SERVICES,
            ServiceCategory::Realtime => REALTIME_SERVICES,
            ServiceCategory::Video => VIDEO_SERVICES,
        }
    }

    /// Identifiers of this category, in catalog order
    pub fn values(self) -> Vec<&'static str> {
        self.services().iter().map(|s| s.value).collect()
    }

    pub fn contains(self, value: &str) -> bool {
        self.services().iter().any(|s| s.value == value)
    }

    /// Short name used in validation messages
    pub fn display_name(&self) -> &'static str {
        match self {
            ServiceCategory::WebTransport => "web transport",
            ServiceCategory::TelephonyTransport => "telephony transport",
            ServiceCategory::Stt => "STT",
            ServiceCategory::Llm => "LLM",
            ServiceCategory::Tts => "TTS",
            ServiceCategory::Realtime => "realtime",
            ServiceCategory::Video => "video",
        }
    }
}

impl fmt::Display for ServiceCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.display_name())
    }
}

/// Every literal transport identifier (web catalog followed by telephony catalog)
pub fn transport_values() -> Vec<&'static str> {
    WEB_TRANSPORTS
        .iter()
        .chain(TELEPHONY_TRANSPORTS)
        .map(|s| s.value)
        .collect()
}

/// Transports grouped by the bot type they belong to
#[derive(Debug, Clone, Serialize)]
pub struct TransportListing {
    pub web: Vec<&'static str>,
    pub telephony: Vec<&'static str>,
}

/// Machine-readable listing of every accepted value, printed by `--list-options`
#[derive(Debug, Clone, Serialize)]
pub struct OptionListing {
    pub bot_type: Vec<&'static str>,
    pub transports: TransportListing,
    pub stt: Vec<&'static str>,
    pub llm: Vec<&'static str>,
    pub tts: Vec<&'static str>,
    pub realtime: Vec<&'static str>,
    pub video: Vec<&'static str>,
}

/// Build the option listing from the catalog
pub fn list_options() -> OptionListing {
    OptionListing {
        bot_type: vec!["web", "telephony"],
        transports: TransportListing {
            web: ServiceCategory::WebTransport.values(),
            telephony: ServiceCategory::TelephonyTransport.values(),
        },
        stt: ServiceCategory::Stt.values(),
        llm: ServiceCategory::Llm.values(),
        tts: ServiceCategory::Tts.values(),
        realtime: ServiceCategory::Realtime.values(),
        video: ServiceCategory::Video.values(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_identifiers_unique_within_category() {
        for category in ServiceCategory::ALL {
            let values = category.values();
            let unique: HashSet<_> = values.iter().collect();
            assert_eq!(values.len(), unique.len(), "duplicate in {}", category);
        }
    }

    #[test]
    fn test_transport_catalogs_disjoint() {
        let web: HashSet<_> = WEB_TRANSPORTS.iter().map(|s| s.value).collect();
        assert!(TELEPHONY_TRANSPORTS.iter().all(|s| !web.contains(s.value)));
    }

    #[test]
    fn test_transport_values_covers_both_catalogs() {
        let all = transport_values();
        assert_eq!(all.len(), WEB_TRANSPORTS.len() + TELEPHONY_TRANSPORTS.len());
        assert_eq!(all[0], "daily");
        assert!(all.contains(&"twilio"));
        assert!(all.contains(&"daily_pstn_dialin"));
    }

    #[test]
    fn test_contains() {
        assert!(ServiceCategory::Stt.contains("deepgram_stt"));
        assert!(!ServiceCategory::Stt.contains("deepgram_tts"));
        assert!(ServiceCategory::Realtime.contains("openai_realtime"));
        assert!(!ServiceCategory::WebTransport.contains("twilio"));
    }

    #[test]
    fn test_list_options_matches_catalog() {
        let listing = list_options();
        assert_eq!(listing.bot_type, vec!["web", "telephony"]);
        assert_eq!(listing.transports.web, ServiceCategory::WebTransport.values());
        assert_eq!(
            listing.transports.telephony,
            ServiceCategory::TelephonyTransport.values()
        );
        assert_eq!(listing.video, ServiceCategory::Video.values());
        assert!(!listing.stt.is_empty());
        assert!(!listing.llm.is_empty());
        assert!(!listing.tts.is_empty());
        assert!(!listing.realtime.is_empty());
    }

    #[test]
    fn test_list_options_json_keys() {
        let json = serde_json::to_value(list_options()).unwrap();
        let keys: HashSet<_> = json.as_object().unwrap().keys().cloned().collect();
        let expected: HashSet<String> = ["bot_type", "transports", "stt", "llm", "tts", "realtime", "video"]
            .iter()
            .map(|s| s.to_string())
            .collect();
        assert_eq!(keys, expected);
        assert!(json["transports"]["web"].is_array());
        assert!(json["transports"]["telephony"].is_array());
    }
}

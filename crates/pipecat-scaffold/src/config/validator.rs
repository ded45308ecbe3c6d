//! Validation of raw project input into a `ProjectConfig`
//!
//! Every rule is evaluated on every call. Violations are collected and
//! reported together so the caller can fix all of them in one pass.

use super::{
    is_directory_name, BotType, ClientFramework, ClientServer, DialMode, GenericTransport, PipelineMode,
    ProjectConfig, RawConfigInput,
};
use crate::registry::{self, ServiceCategory};
use thiserror::Error;

/// Aggregate validation failure carrying every violated rule, in rule order
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("Configuration validation failed:{}", bullet_list(.errors))]
pub struct ConfigValidationError {
    pub errors: Vec<String>,
}

fn bullet_list(errors: &[String]) -> String {
    errors.iter().map(|e| format!("\n  - {}", e)).collect()
}

/// Accumulates violation messages while rules run
#[derive(Debug, Default)]
struct Violations {
    errors: Vec<String>,
}

impl Violations {
    fn push(&mut self, message: impl Into<String>) {
        self.errors.push(message.into());
    }

    fn is_empty(&self) -> bool {
        self.errors.is_empty()
    }

    fn into_error(self) -> ConfigValidationError {
        ConfigValidationError {
            errors: self.errors,
        }
    }
}

/// Treat empty strings the same as missing values
fn present(value: &Option<String>) -> Option<&str> {
    value.as_deref().filter(|s| !s.is_empty())
}

/// Resolved client generation settings
#[derive(Debug, Default)]
struct ClientChoice {
    generate: bool,
    framework: Option<ClientFramework>,
    server: Option<ClientServer>,
}

/// Validate all inputs and build a `ProjectConfig`
///
/// Returns every violated rule at once on failure. Performs no I/O.
pub fn validate_and_build(input: &RawConfigInput) -> Result<ProjectConfig, ConfigValidationError> {
    let mut violations = Violations::default();

    // Required fields
    let name = present(&input.name);
    match name {
        None => violations.push("--name is required"),
        Some(raw) if !is_directory_name(raw) => violations.push(format!(
            "--name must be a plain directory name without path separators, got '{}'",
            raw
        )),
        Some(_) => {}
    }

    let bot_type = match present(&input.bot_type) {
        None => {
            violations.push("--bot-type is required (web or telephony)");
            None
        }
        Some(raw) => {
            let parsed = BotType::parse(raw);
            if parsed.is_none() {
                violations.push(format!(
                    "--bot-type must be 'web' or 'telephony', got '{}'",
                    raw
                ));
            }
            parsed
        }
    };

    let transports: &[String] = input.transports.as_deref().unwrap_or_default();
    if transports.is_empty() {
        violations.push("At least one --transport is required");
    }

    let mode = match present(&input.mode) {
        None => {
            violations.push("--mode is required (cascade or realtime)");
            None
        }
        Some(raw) => {
            let parsed = PipelineMode::parse(raw);
            if parsed.is_none() {
                violations.push(format!(
                    "--mode must be 'cascade' or 'realtime', got '{}'",
                    raw
                ));
            }
            parsed
        }
    };

    // Transports
    let resolved_transports = resolve_transports(transports, input, &mut violations);
    check_transports_for_bot_type(bot_type, &resolved_transports, &mut violations);

    // Services
    match mode {
        Some(PipelineMode::Cascade) => {
            let mode = PipelineMode::Cascade;
            for (flag, value, category) in [
                ("--stt", &input.stt, ServiceCategory::Stt),
                ("--llm", &input.llm, ServiceCategory::Llm),
                ("--tts", &input.tts, ServiceCategory::Tts),
            ] {
                check_required_service(&mut violations, present(value), category, flag, mode);
            }
            if present(&input.realtime).is_some() {
                violations.push("--realtime should not be specified in cascade mode");
            }
        }
        Some(PipelineMode::Realtime) => {
            let mode = PipelineMode::Realtime;
            check_required_service(
                &mut violations,
                present(&input.realtime),
                ServiceCategory::Realtime,
                "--realtime",
                mode,
            );
            for (flag, value) in [
                ("--stt", &input.stt),
                ("--llm", &input.llm),
                ("--tts", &input.tts),
            ] {
                if present(value).is_some() {
                    violations.push(format!("{} should not be specified in realtime mode", flag));
                }
            }
        }
        None => {}
    }

    let video = present(&input.video);
    if let Some(video) = video {
        check_catalog(&mut violations, video, ServiceCategory::Video);
        if bot_type == Some(BotType::Telephony) {
            violations.push("Video services are only available for web bots");
        }
    }

    let client = resolve_client(input, bot_type, &mut violations);

    // Cross-field constraints
    let video_input = input.video_input.unwrap_or(false);
    let video_output = input.video_output.unwrap_or(false);
    let deploy_to_cloud = input.deploy_to_cloud.unwrap_or(true);
    let enable_krisp = input.enable_krisp.unwrap_or(false);

    if video_input && bot_type == Some(BotType::Telephony) {
        violations.push("--video-input is only available for web bots");
    }
    if video_output && bot_type == Some(BotType::Telephony) {
        violations.push("--video-output is only available for web bots");
    }
    if enable_krisp && !deploy_to_cloud {
        violations.push("--enable-krisp requires --deploy-to-cloud");
    }

    // Dial mode given for a generic transport that was never requested
    for generic in GenericTransport::ALL {
        if generic.mode_input(input).is_none() || transports.is_empty() {
            continue;
        }
        let requested = transports
            .iter()
            .map(String::as_str)
            .chain(resolved_transports.iter().map(String::as_str))
            .any(|t| t.starts_with(generic.base_name()));
        if !requested {
            violations.push(format!(
                "{} specified but no '{}' transport",
                generic.mode_flag(),
                generic.base_name()
            ));
        }
    }

    if !violations.is_empty() {
        tracing::debug!(
            count = violations.errors.len(),
            "project configuration rejected"
        );
        return Err(violations.into_error());
    }

    // Each of these pushed a violation when missing
    let (Some(name), Some(bot_type), Some(mode)) = (name, bot_type, mode) else {
        return Err(violations.into_error());
    };

    let resolved_mode = |generic: GenericTransport| {
        resolved_transports
            .iter()
            .find_map(|t| generic.dial_mode_of(t))
    };
    let daily_pstn_mode = resolved_mode(GenericTransport::DailyPstn);
    let twilio_daily_sip_mode = resolved_mode(GenericTransport::TwilioDailySip);

    let cascade = mode == PipelineMode::Cascade;
    let service = |value: &Option<String>, keep: bool| {
        present(value).filter(|_| keep).map(str::to_string)
    };

    let config = ProjectConfig {
        project_name: name.to_string(),
        bot_type,
        transports: resolved_transports,
        mode,
        stt_service: service(&input.stt, cascade),
        llm_service: service(&input.llm, cascade),
        tts_service: service(&input.tts, cascade),
        realtime_service: service(&input.realtime, !cascade),
        video_service: video.map(str::to_string),
        generate_client: client.generate,
        client_framework: client.framework,
        client_server: client.server,
        daily_pstn_mode,
        twilio_daily_sip_mode,
        video_input,
        // A video avatar always needs video output
        video_output: video_output || video.is_some(),
        recording: input.recording.unwrap_or(false),
        transcription: input.transcription.unwrap_or(false),
        smart_turn: input.smart_turn.unwrap_or(cascade),
        deploy_to_cloud,
        enable_krisp,
        enable_observability: input.observability.unwrap_or(false),
    };

    tracing::debug!(
        project = %config.project_name,
        bot_type = %config.bot_type,
        mode = %config.mode,
        transports = ?config.transports,
        "project configuration resolved"
    );

    Ok(config)
}

/// Resolve each requested transport token independently
fn resolve_transports(
    transports: &[String],
    input: &RawConfigInput,
    violations: &mut Violations,
) -> Vec<String> {
    let mut resolved = Vec::new();

    for token in transports {
        if let Some(generic) = GenericTransport::parse(token) {
            match generic.mode_input(input) {
                None => violations.push(format!(
                    "{} is required when transport is '{}' (dial-in or dial-out)",
                    generic.mode_flag(),
                    generic.base_name()
                )),
                Some(raw) => match DialMode::parse(raw) {
                    Some(dial_mode) => {
                        let name = generic.resolve(dial_mode);
                        tracing::debug!(
                            transport = %token,
                            resolved = %name,
                            "resolved generic transport"
                        );
                        resolved.push(name);
                    }
                    None => violations.push(format!(
                        "{} must be 'dial-in' or 'dial-out', got '{}'",
                        generic.mode_flag(),
                        raw
                    )),
                },
            }
        } else if registry::transport_values().contains(&token.as_str()) {
            resolved.push(token.clone());
        } else {
            violations.push(format!(
                "Unknown transport '{}'. Valid transports: {}",
                token,
                valid_transport_tokens().join(", ")
            ));
        }
    }

    resolved
}

/// Catalog transports plus the generic names, sorted
fn valid_transport_tokens() -> Vec<&'static str> {
    let mut tokens = registry::transport_values();
    tokens.extend(GenericTransport::ALL.iter().map(|g| g.base_name()));
    tokens.sort_unstable();
    tokens.dedup();
    tokens
}

/// Web bots cannot use telephony transports. Telephony bots may add a web
/// transport for local testing.
fn check_transports_for_bot_type(
    bot_type: Option<BotType>,
    resolved: &[String],
    violations: &mut Violations,
) {
    if bot_type != Some(BotType::Web) {
        return;
    }
    for transport in resolved {
        if ServiceCategory::TelephonyTransport.contains(transport) {
            violations.push(format!(
                "Transport '{}' is a telephony transport but bot-type is 'web'",
                transport
            ));
        }
    }
}

fn check_required_service(
    violations: &mut Violations,
    value: Option<&str>,
    category: ServiceCategory,
    flag: &str,
    mode: PipelineMode,
) {
    match value {
        None => violations.push(format!("{} is required for {} mode", flag, mode)),
        Some(value) => check_catalog(violations, value, category),
    }
}

fn check_catalog(violations: &mut Violations, value: &str, category: ServiceCategory) {
    if !category.contains(value) {
        violations.push(format!(
            "Unknown {} service '{}'. Valid: {}",
            category,
            value,
            category.values().join(", ")
        ));
    }
}

fn resolve_client(
    input: &RawConfigInput,
    bot_type: Option<BotType>,
    violations: &mut Violations,
) -> ClientChoice {
    let server = present(&input.client_server);
    let mut choice = ClientChoice::default();

    let Some(framework) = present(&input.client_framework) else {
        if server.is_some() {
            violations.push("--client-server requires --client-framework");
        }
        return choice;
    };

    if bot_type == Some(BotType::Telephony) {
        violations.push("--client-framework is only available for web bots");
    }

    match framework {
        "react" => {
            choice.generate = true;
            choice.framework = Some(ClientFramework::React);
            if let Some(raw) = server {
                choice.server = ClientServer::parse(raw);
                if choice.server.is_none() {
                    violations.push(format!(
                        "--client-server must be 'vite' or 'nextjs', got '{}'",
                        raw
                    ));
                }
            }
        }
        "vanilla" => {
            choice.generate = true;
            choice.framework = Some(ClientFramework::Vanilla);
            choice.server = Some(ClientServer::Vite);
        }
        "none" => {}
        other => violations.push(format!(
            "--client-framework must be 'react', 'vanilla', or 'none', got '{}'",
            other
        )),
    }

    choice
}

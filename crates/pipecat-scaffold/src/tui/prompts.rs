//! Charm-style project questions using cliclack

use crate::config::{is_directory_name, GenericTransport, RawConfigInput};
use crate::registry::{ServiceCategory, ServiceDefinition};
use anyhow::Result;

/// Ask the project questions and collect the answers as raw input
///
/// The answers go through the same validator as command-line flags, so this
/// only narrows choices to what makes sense for earlier answers.
pub fn ask_project_questions() -> Result<RawConfigInput> {
    cliclack::intro("Pipecat")?;

    let name: String = cliclack::input("Project name")
        .placeholder("my-bot")
        .validate(|input: &String| {
            if input.trim().is_empty() {
                Err("Please enter a project name")
            } else if !is_directory_name(input.trim()) {
                Err("Use a plain directory name without slashes")
            } else {
                Ok(())
            }
        })
        .interact()?;

    let bot_type: &str = cliclack::select("What kind of bot are you building?")
        .item("web", "Web", "browser or app clients")
        .item("telephony", "Telephony", "phone calls")
        .interact()?;
    let is_web = bot_type == "web";

    let mut input = RawConfigInput {
        name: Some(name.trim().to_string()),
        bot_type: Some(bot_type.to_string()),
        ..Default::default()
    };

    select_transports(is_web, &mut input)?;

    let mode: &str = cliclack::select("Pipeline mode")
        .item("cascade", "Cascade", "separate STT, LLM and TTS")
        .item("realtime", "Realtime", "one speech-to-speech service")
        .interact()?;
    input.mode = Some(mode.to_string());
    let cascade = mode == "cascade";

    if cascade {
        input.stt = Some(select_service("Speech-to-text service", ServiceCategory::Stt)?);
        input.llm = Some(select_service("Language model", ServiceCategory::Llm)?);
        input.tts = Some(select_service("Text-to-speech service", ServiceCategory::Tts)?);
    } else {
        input.realtime = Some(select_service(
            "Realtime service",
            ServiceCategory::Realtime,
        )?);
    }

    if is_web {
        select_video_and_client(&mut input)?;
    }

    select_features(is_web, cascade, &mut input)?;

    Ok(input)
}

fn select_service(prompt: &str, category: ServiceCategory) -> Result<String> {
    let mut select = cliclack::select(prompt);
    for service in category.services() {
        select = select.item(service.value, service.label, "");
    }
    let value: &str = select.interact()?;
    Ok(value.to_string())
}

/// Transports offered for a bot type: the matching catalog with dial-mode
/// variants collapsed into their generic name, plus web transports for local
/// testing of telephony bots
fn transport_choices(is_web: bool) -> Vec<(&'static str, &'static str, &'static str)> {
    let as_choice = |s: &ServiceDefinition, hint: &'static str| (s.value, s.label, hint);
    let mut choices: Vec<_> = Vec::new();

    if !is_web {
        choices.extend(
            ServiceCategory::TelephonyTransport
                .services()
                .iter()
                .filter(|s| {
                    !GenericTransport::ALL
                        .iter()
                        .any(|g| s.value.starts_with(g.base_name()))
                })
                .map(|s| as_choice(s, "")),
        );
        choices.extend(
            GenericTransport::ALL
                .iter()
                .map(|g| (g.base_name(), g.label(), "dial-in or dial-out")),
        );
    }

    let web_hint = if is_web { "" } else { "local testing" };
    choices.extend(
        ServiceCategory::WebTransport
            .services()
            .iter()
            .map(|s| as_choice(s, web_hint)),
    );
    choices
}

fn select_transports(is_web: bool, input: &mut RawConfigInput) -> Result<()> {
    let mut multi = cliclack::multiselect("Transports");
    for (value, label, hint) in transport_choices(is_web) {
        multi = multi.item(value, label, hint);
    }
    let selected: Vec<&str> = multi.required(true).interact()?;

    for generic in GenericTransport::ALL {
        if !selected.contains(&generic.base_name()) {
            continue;
        }
        let dial_mode: &str = cliclack::select(format!("{} call direction", generic.label()))
            .item("dial-in", "Dial-in", "callers phone the bot")
            .item("dial-out", "Dial-out", "the bot places calls")
            .interact()?;
        match generic {
            GenericTransport::DailyPstn => input.daily_pstn_mode = Some(dial_mode.to_string()),
            GenericTransport::TwilioDailySip => {
                input.twilio_daily_sip_mode = Some(dial_mode.to_string())
            }
        }
    }

    input.transports = Some(selected.into_iter().map(str::to_string).collect());
    Ok(())
}

fn select_video_and_client(input: &mut RawConfigInput) -> Result<()> {
    let mut video = cliclack::select("Video avatar").item(None, "None", "");
    for service in ServiceCategory::Video.services() {
        video = video.item(Some(service.value), service.label, "");
    }
    let video: Option<&str> = video.interact()?;
    if let Some(video) = video {
        cliclack::log::info("Video output is enabled for avatar services")?;
        input.video = Some(video.to_string());
    }

    let framework: &str = cliclack::select("Client app")
        .item("react", "React", "")
        .item("vanilla", "Vanilla JS", "served with Vite")
        .item("none", "None", "bring your own client")
        .interact()?;
    input.client_framework = Some(framework.to_string());

    if framework == "react" {
        let server: &str = cliclack::select("Client dev server")
            .item("vite", "Vite", "")
            .item("nextjs", "Next.js", "")
            .interact()?;
        input.client_server = Some(server.to_string());
    }

    Ok(())
}

fn confirm(prompt: &str, initial: bool) -> Result<bool> {
    Ok(cliclack::confirm(prompt).initial_value(initial).interact()?)
}

fn select_features(is_web: bool, cascade: bool, input: &mut RawConfigInput) -> Result<()> {
    input.recording = Some(confirm("Enable recording?", false)?);
    input.transcription = Some(confirm("Enable transcription?", false)?);

    if cascade {
        input.smart_turn = Some(confirm("Enable smart turn-taking?", true)?);
    }

    if is_web {
        input.video_input = Some(confirm("Enable video input?", false)?);
        if input.video.is_none() {
            input.video_output = Some(confirm("Enable video output?", false)?);
        }
    }

    let deploy = confirm("Generate cloud deployment files?", true)?;
    input.deploy_to_cloud = Some(deploy);
    if deploy {
        input.enable_krisp = Some(confirm("Enable Krisp noise cancellation?", false)?);
    }

    input.observability = Some(confirm("Enable observability?", false)?);
    Ok(())
}

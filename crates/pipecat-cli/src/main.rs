//! Pipecat CLI - Project scaffolding for Pipecat voice bots

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use colored::Colorize;
use pipecat_scaffold::generator::{self, ManifestGenerator, ProjectGenerator};
use pipecat_scaffold::{load_config_file, validate_and_build, ProjectConfig, RawConfigInput};
use std::path::{Path, PathBuf};
use std::process::ExitCode;

#[derive(Parser, Debug)]
#[command(name = "pc")]
#[command(about = "CLI tool for scaffolding Pipecat AI voice agent projects")]
#[command(version)]
pub struct Args {
    #[command(subcommand)]
    pub command: Option<Command>,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Initialize a new Pipecat project
    Init(InitArgs),
}

/// Flags for `pc init`
///
/// Passing `--name` or `--config` switches to non-interactive mode. Flags win
/// over values from the config file.
#[derive(Parser, Debug, Default)]
pub struct InitArgs {
    /// Output directory (defaults to current directory)
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    /// Project name (triggers non-interactive mode)
    #[arg(short, long)]
    pub name: Option<String>,

    /// Bot type: 'web' or 'telephony'
    #[arg(short, long = "bot-type")]
    pub bot_type: Option<String>,

    /// Transport (repeatable, e.g. -t daily -t smallwebrtc)
    #[arg(short, long = "transport")]
    pub transport: Vec<String>,

    /// Pipeline mode: 'cascade' or 'realtime'
    #[arg(short, long)]
    pub mode: Option<String>,

    /// STT service (cascade mode)
    #[arg(long)]
    pub stt: Option<String>,

    /// LLM service (cascade mode)
    #[arg(long)]
    pub llm: Option<String>,

    /// TTS service (cascade mode)
    #[arg(long)]
    pub tts: Option<String>,

    /// Realtime service (realtime mode)
    #[arg(long)]
    pub realtime: Option<String>,

    /// Video avatar service
    #[arg(long)]
    pub video: Option<String>,

    /// Client framework: 'react', 'vanilla', or 'none'
    #[arg(long = "client-framework")]
    pub client_framework: Option<String>,

    /// Client dev server: 'vite' or 'nextjs'
    #[arg(long = "client-server")]
    pub client_server: Option<String>,

    /// Daily PSTN mode: 'dial-in' or 'dial-out'
    #[arg(long = "daily-pstn-mode")]
    pub daily_pstn_mode: Option<String>,

    /// Twilio + Daily SIP mode: 'dial-in' or 'dial-out'
    #[arg(long = "twilio-daily-sip-mode")]
    pub twilio_daily_sip_mode: Option<String>,

    /// Enable recording
    #[arg(long, overrides_with = "no_recording")]
    pub recording: bool,
    #[arg(long = "no-recording", overrides_with = "recording", hide = true)]
    pub no_recording: bool,

    /// Enable transcription
    #[arg(long, overrides_with = "no_transcription")]
    pub transcription: bool,
    #[arg(long = "no-transcription", overrides_with = "transcription", hide = true)]
    pub no_transcription: bool,

    /// Enable smart turn-taking (default: on for cascade, off for realtime)
    #[arg(long = "smart-turn", overrides_with = "no_smart_turn")]
    pub smart_turn: bool,
    #[arg(long = "no-smart-turn", overrides_with = "smart_turn", hide = true)]
    pub no_smart_turn: bool,

    /// Enable video input
    #[arg(long = "video-input", overrides_with = "no_video_input")]
    pub video_input: bool,
    #[arg(long = "no-video-input", overrides_with = "video_input", hide = true)]
    pub no_video_input: bool,

    /// Enable video output
    #[arg(long = "video-output", overrides_with = "no_video_output")]
    pub video_output: bool,
    #[arg(long = "no-video-output", overrides_with = "video_output", hide = true)]
    pub no_video_output: bool,

    /// Generate cloud deployment files (default: on; disable with --no-deploy-to-cloud)
    #[arg(long = "deploy-to-cloud", overrides_with = "no_deploy_to_cloud")]
    pub deploy_to_cloud: bool,
    #[arg(long = "no-deploy-to-cloud", overrides_with = "deploy_to_cloud", hide = true)]
    pub no_deploy_to_cloud: bool,

    /// Enable Krisp noise cancellation (requires cloud deployment)
    #[arg(long = "enable-krisp", overrides_with = "no_enable_krisp")]
    pub enable_krisp: bool,
    #[arg(long = "no-enable-krisp", overrides_with = "enable_krisp", hide = true)]
    pub no_enable_krisp: bool,

    /// Enable observability
    #[arg(long, overrides_with = "no_observability")]
    pub observability: bool,
    #[arg(long = "no-observability", overrides_with = "observability", hide = true)]
    pub no_observability: bool,

    /// JSON config file (triggers non-interactive mode)
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Print resolved config as JSON without generating files
    #[arg(long = "dry-run")]
    pub dry_run: bool,

    /// Print every accepted option value as JSON and exit
    #[arg(long = "list-options")]
    pub list_options: bool,
}

/// Collapse a `--x/--no-x` pair; neither flag leaves the value unset
fn flag_pair(on: bool, off: bool) -> Option<bool> {
    match (on, off) {
        (true, _) => Some(true),
        (_, true) => Some(false),
        _ => None,
    }
}

impl From<&InitArgs> for RawConfigInput {
    fn from(args: &InitArgs) -> Self {
        RawConfigInput {
            name: args.name.clone(),
            bot_type: args.bot_type.clone(),
            transports: Some(args.transport.clone()).filter(|t| !t.is_empty()),
            mode: args.mode.clone(),
            stt: args.stt.clone(),
            llm: args.llm.clone(),
            tts: args.tts.clone(),
            realtime: args.realtime.clone(),
            video: args.video.clone(),
            client_framework: args.client_framework.clone(),
            client_server: args.client_server.clone(),
            daily_pstn_mode: args.daily_pstn_mode.clone(),
            twilio_daily_sip_mode: args.twilio_daily_sip_mode.clone(),
            recording: flag_pair(args.recording, args.no_recording),
            transcription: flag_pair(args.transcription, args.no_transcription),
            smart_turn: flag_pair(args.smart_turn, args.no_smart_turn),
            video_input: flag_pair(args.video_input, args.no_video_input),
            video_output: flag_pair(args.video_output, args.no_video_output),
            deploy_to_cloud: flag_pair(args.deploy_to_cloud, args.no_deploy_to_cloud),
            enable_krisp: flag_pair(args.enable_krisp, args.no_enable_krisp),
            observability: flag_pair(args.observability, args.no_observability),
        }
    }
}

impl InitArgs {
    fn is_non_interactive(&self) -> bool {
        self.name.is_some() || self.config.is_some()
    }
}

/// Logs go to stderr so JSON on stdout stays clean
fn init_tracing() {
    let env_filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_writer(std::io::stderr)
        .init();
}

fn is_interrupted(err: &anyhow::Error) -> bool {
    err.downcast_ref::<std::io::Error>()
        .is_some_and(|e| e.kind() == std::io::ErrorKind::Interrupted)
}

/// Resolve the config, printing every validation error when it is rejected
fn validate_or_report(input: &RawConfigInput) -> Option<ProjectConfig> {
    match validate_and_build(input) {
        Ok(config) => Some(config),
        Err(err) => {
            eprintln!();
            eprintln!("{}", err.to_string().red());
            None
        }
    }
}

async fn run_init(args: InitArgs) -> Result<ExitCode> {
    if args.list_options {
        let listing = pipecat_scaffold::list_options();
        println!("{}", serde_json::to_string_pretty(&listing)?);
        return Ok(ExitCode::SUCCESS);
    }

    let input = if args.is_non_interactive() {
        let mut input = RawConfigInput::from(&args);
        if let Some(path) = &args.config {
            let file = load_config_file(path).await?;
            input = input.or(file.into());
            tracing::debug!(path = %path.display(), "merged config file under command-line flags");
        }
        input
    } else {
        match pipecat_scaffold::ask_project_questions() {
            Ok(input) => input,
            Err(e) if is_interrupted(&e) => {
                eprintln!("\n{}", "Project creation cancelled.".yellow());
                return Ok(ExitCode::FAILURE);
            }
            Err(e) => return Err(e),
        }
    };

    let Some(config) = validate_or_report(&input) else {
        return Ok(ExitCode::FAILURE);
    };

    if args.dry_run {
        println!("{}", config.to_json()?);
        return Ok(ExitCode::SUCCESS);
    }

    let output_dir = match args.output {
        Some(dir) => dir,
        None => std::env::current_dir().context("Failed to determine current directory")?,
    };

    let project_dir = ManifestGenerator.generate(&config, &output_dir)?;
    print_next_steps(&config, &project_dir);

    Ok(ExitCode::SUCCESS)
}

fn print_next_steps(config: &ProjectConfig, project_dir: &Path) {
    println!();
    println!(
        "{} {} in {}",
        "Created".green().bold(),
        config.project_name,
        project_dir.display()
    );
    println!();
    println!("  Next steps");
    println!();

    for (i, step) in generator::next_steps(config, project_dir).iter().enumerate() {
        println!("  {}.  {}", i + 1, step);
    }
    println!();
}

#[tokio::main]
async fn main() -> Result<ExitCode> {
    // Ensure terminal cursor is restored on panic
    let default_panic = std::panic::take_hook();
    std::panic::set_hook(Box::new(move |info| {
        let _ = console::Term::stderr().show_cursor();
        default_panic(info);
    }));

    // Handle Ctrl+C gracefully
    ctrlc::set_handler(move || {
        let _ = console::Term::stderr().show_cursor();
        std::process::exit(130);
    })
    .ok();

    init_tracing();

    let args = Args::parse();

    // No subcommand behaves like `init` (interactive unless flags say otherwise)
    let init_args = match args.command {
        Some(Command::Init(init_args)) => init_args,
        None => InitArgs::default(),
    };

    let result = run_init(init_args).await;

    // Ensure cursor is visible on normal exit
    let _ = console::Term::stderr().show_cursor();

    result
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    fn parse(argv: &[&str]) -> InitArgs {
        let mut full = vec!["pc", "init"];
        full.extend_from_slice(argv);
        match Args::parse_from(full).command {
            Some(Command::Init(args)) => args,
            None => panic!("expected init subcommand"),
        }
    }

    #[test]
    fn test_flags_map_to_raw_input() {
        let args = parse(&[
            "--name", "my-bot", "-b", "web", "-t", "daily", "-t", "smallwebrtc", "-m", "cascade",
            "--stt", "deepgram_stt", "--llm", "openai_llm", "--tts", "cartesia_tts",
        ]);
        assert!(args.is_non_interactive());

        let input = RawConfigInput::from(&args);
        assert_eq!(input.name.as_deref(), Some("my-bot"));
        assert_eq!(
            input.transports,
            Some(vec!["daily".to_string(), "smallwebrtc".to_string()])
        );
        assert_eq!(input.recording, None);
        assert_eq!(input.deploy_to_cloud, None);

        let config = validate_and_build(&input).unwrap();
        assert!(config.deploy_to_cloud);
        assert!(config.smart_turn);
    }

    #[test]
    fn test_boolean_flag_pairs() {
        let args = parse(&["--recording", "--no-deploy-to-cloud", "--no-smart-turn"]);
        let input = RawConfigInput::from(&args);
        assert_eq!(input.recording, Some(true));
        assert_eq!(input.deploy_to_cloud, Some(false));
        assert_eq!(input.smart_turn, Some(false));
        assert_eq!(input.transcription, None);
    }

    #[test]
    fn test_last_flag_of_pair_wins() {
        let args = parse(&["--recording", "--no-recording"]);
        assert_eq!(RawConfigInput::from(&args).recording, Some(false));
    }

    #[test]
    fn test_interactive_without_name_or_config() {
        assert!(!parse(&[]).is_non_interactive());
        assert!(parse(&["-c", "project.json"]).is_non_interactive());
    }

    #[test]
    fn test_negated_flags_are_hidden() {
        let command = Args::command();
        let init = command
            .get_subcommands()
            .find(|c| c.get_name() == "init")
            .unwrap();

        let negated: Vec<_> = init
            .get_arguments()
            .filter(|a| a.get_id().as_str().starts_with("no_"))
            .collect();
        assert!(negated.iter().any(|a| a.get_id() == "no_deploy_to_cloud"));
        for arg in negated {
            assert!(arg.is_hide_set(), "{} should be hidden", arg.get_id());
        }
    }

    #[test]
    fn test_rejected_config_reports_instead_of_exiting() {
        assert!(validate_or_report(&RawConfigInput::default()).is_none());

        let input = RawConfigInput::from(&parse(&[
            "--name", "my-bot", "-b", "web", "-t", "daily", "-m", "cascade", "--stt",
            "deepgram_stt", "--llm", "openai_llm", "--tts", "cartesia_tts",
        ]));
        assert!(validate_or_report(&input).is_some());
    }

    #[test]
    fn test_flags_override_config_file() {
        let args = parse(&["--name", "flag-bot", "--no-recording"]);
        let file = pipecat_scaffold::ConfigFile::from_json(
            r#"{"project_name": "file-bot", "bot_type": "web", "recording": true}"#,
        )
        .unwrap();

        let merged = RawConfigInput::from(&args).or(file.into());
        assert_eq!(merged.name.as_deref(), Some("flag-bot"));
        assert_eq!(merged.bot_type.as_deref(), Some("web"));
        assert_eq!(merged.recording, Some(false));
    }
}

//! Pipecat Scaffold - Shared library for the Pipecat project CLI
//!
//! This library turns a loosely-typed description of a voice bot project into a
//! validated, fully resolved `ProjectConfig`, and hands that to a generator.
//!
//! # Architecture
//!
//! The library is organized into layers:
//!
//! - **Layer 1: Catalog** - `registry`, the static list of transports and services
//! - **Layer 2: Configuration** - `RawConfigInput` -> `validate_and_build` -> `ProjectConfig`,
//!   plus JSON config file loading and serialization
//! - **Layer 3: Output** - `ProjectGenerator` trait for whatever emits the project
//! - **Layer 4: CLI/TUI Interface** - Optional cliclack-based questions (feature-gated)
//!
//! # Feature Flags
//!
//! - `tui` (default): Enables the cliclack-based question flow
//!
//! # Example Usage (without TUI)
//!
//! ```ignore
//! use pipecat_scaffold::{validate_and_build, RawConfigInput};
//!
//! let input = RawConfigInput {
//!     name: Some("my-bot".into()),
//!     bot_type: Some("web".into()),
//!     transports: Some(vec!["daily".into()]),
//!     mode: Some("cascade".into()),
//!     stt: Some("deepgram_stt".into()),
//!     llm: Some("openai_llm".into()),
//!     tts: Some("cartesia_tts".into()),
//!     ..Default::default()
//! };
//!
//! match validate_and_build(&input) {
//!     Ok(config) => println!("{}", config.to_json()?),
//!     Err(err) => eprintln!("{}", err),
//! }
//! ```

pub mod config;
pub mod generator;
pub mod registry;

#[cfg(feature = "tui")]
pub mod tui;

// Re-export main types for convenience
pub use config::{
    load_config_file, validate_and_build, BotType, ClientFramework, ClientServer, ConfigFile,
    ConfigFileError, ConfigValidationError, DialMode, PipelineMode, ProjectConfig,
    RawConfigInput,
};
pub use generator::{ManifestGenerator, ProjectGenerator};
pub use registry::{list_options, ServiceCategory, ServiceDefinition};

#[cfg(feature = "tui")]
pub use tui::ask_project_questions;

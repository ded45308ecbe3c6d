//! Hand-off point between a validated `ProjectConfig` and whatever emits the project

use crate::config::{is_directory_name, ProjectConfig};
use anyhow::{Context, Result};
use std::path::{Path, PathBuf};

/// File name of the resolved configuration written into a new project
pub const CONFIG_FILE_NAME: &str = "pipecat.config.json";

/// Something that turns a validated configuration into a project on disk
pub trait ProjectGenerator {
    /// Create the project under `output_dir` and return its root directory
    fn generate(&self, config: &ProjectConfig, output_dir: &Path) -> Result<PathBuf>;
}

/// Creates the project directory and records the resolved configuration in it
#[derive(Debug, Clone, Default)]
pub struct ManifestGenerator;

impl ProjectGenerator for ManifestGenerator {
    fn generate(&self, config: &ProjectConfig, output_dir: &Path) -> Result<PathBuf> {
        if !is_directory_name(&config.project_name) {
            anyhow::bail!(
                "Project name must be a plain directory name: {}",
                config.project_name
            );
        }

        let project_dir = output_dir.join(&config.project_name);
        if project_dir.exists() {
            anyhow::bail!("Directory already exists: {}", project_dir.display());
        }

        std::fs::create_dir_all(&project_dir)
            .with_context(|| format!("Failed to create directory: {}", project_dir.display()))?;

        let manifest_path = project_dir.join(CONFIG_FILE_NAME);
        let json = config
            .to_json()
            .context("Failed to serialize project configuration")?;
        std::fs::write(&manifest_path, json + "\n")
            .with_context(|| format!("Failed to write file: {}", manifest_path.display()))?;

        tracing::info!(path = %project_dir.display(), "project created");
        Ok(project_dir)
    }
}

/// Suggested commands once a project exists
pub fn next_steps(config: &ProjectConfig, project_dir: &Path) -> Vec<String> {
    let mut steps = Vec::new();
    let current = std::env::current_dir().ok();

    if current.as_deref() != Some(project_dir) {
        steps.push(format!("cd {}", project_dir.display()));
    }

    steps.push(format!(
        "Review {} and add API keys for your services",
        CONFIG_FILE_NAME
    ));

    if config.generate_client {
        steps.push("Install client dependencies: cd client && npm install".to_string());
    }

    if config.deploy_to_cloud {
        steps.push("Deploy when ready: pipecat cloud deploy".to_string());
    }

    steps
}

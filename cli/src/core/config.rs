//! # Medibot Configuration System
//!
//! File: cli/src/core/config.rs
//!
//! ## Overview
//!
//! This module loads, merges and validates the medibot configuration. The
//! configuration can customize the assistant text (name, greeting, fallback)
//! and extend or replace the built-in knowledge base.
//!
//! ## Architecture
//!
//! Configuration sources (in order of precedence):
//! 1. An explicit file given with `--config` / `MEDIBOT_CONFIG` (used alone)
//! 2. Project-specific `.medibot.toml` in the current directory or ancestors
//! 3. User-specific `<config dir>/medibot/config.toml`
//! 4. Built-in defaults
//!
//! The merged configuration is validated by building the knowledge base from
//! it; a malformed rule stops the program at startup.
//!
//! ## Examples
//!
//! Configuration file format:
//!
//! ```toml
//! [assistant]
//! name = "Clinic Helper"
//! greeting = "Welcome to the clinic!"
//!
//! [knowledge_base]
//! include_builtin = true
//!
//! [[knowledge_base.rules]]
//! keywords = ["allergy", "pollen"]
//! response = "Antihistamines can help with seasonal allergies."
//! ```
//!
//! Custom rules are consulted before the built-in ones.
//!
use crate::core::error::{MedibotError, Result};
use crate::knowledge::{builtin, KnowledgeBase, RuleDefinition};
use anyhow::Context;
use directories::ProjectDirs;
use serde::Deserialize;
use std::{
    fs,
    path::{Path, PathBuf},
};
use tracing::{debug, info, warn};

const PROJECT_CONFIG_FILENAME: &str = ".medibot.toml";

/// Represents the main configuration structure, loaded from TOML files.
#[derive(Deserialize, Debug, Default, Clone, PartialEq, Eq)]
#[serde(deny_unknown_fields)]
pub struct Config {
    #[serde(default)]
    pub assistant: AssistantConfig,
    #[serde(default)]
    pub knowledge_base: KnowledgeBaseConfig,
}

/// Text the assistant presents. Unset values fall back to the built-in text.
#[derive(Deserialize, Debug, Default, Clone, PartialEq, Eq)]
#[serde(deny_unknown_fields)]
pub struct AssistantConfig {
    pub name: Option<String>,
    pub greeting: Option<String>,
    pub fallback: Option<String>,
}

/// Knowledge base customization.
#[derive(Deserialize, Debug, Default, Clone, PartialEq, Eq)]
#[serde(deny_unknown_fields)]
pub struct KnowledgeBaseConfig {
    /// Keep the built-in medical rules after the custom ones (default: true).
    pub include_builtin: Option<bool>,
    /// Custom rules, highest priority first.
    #[serde(default)]
    pub rules: Vec<RuleDefinition>,
}

impl Config {
    pub fn assistant_name(&self) -> &str {
        self.assistant
            .name
            .as_deref()
            .unwrap_or(builtin::ASSISTANT_NAME)
    }

    pub fn greeting(&self) -> &str {
        self.assistant.greeting.as_deref().unwrap_or(builtin::GREETING)
    }

    pub fn fallback(&self) -> &str {
        self.assistant
            .fallback
            .as_deref()
            .unwrap_or(builtin::FALLBACK_RESPONSE)
    }

    pub fn include_builtin(&self) -> bool {
        self.knowledge_base.include_builtin.unwrap_or(true)
    }

    /// # Build Knowledge Base (`build_knowledge_base`)
    ///
    /// Custom rules first, then (unless disabled) the built-in rules, with the
    /// configured or default fallback.
    ///
    /// ## Errors
    ///
    /// Any `MedibotError` from `KnowledgeBase::new`. Rule numbers in the error
    /// count custom rules first, then built-in rules.
    pub fn build_knowledge_base(&self) -> std::result::Result<KnowledgeBase, MedibotError> {
        let mut definitions = self.knowledge_base.rules.clone();
        if self.include_builtin() {
            definitions.extend(builtin::rules());
        }
        KnowledgeBase::new(definitions, self.fallback())
    }
}

/// # Load Configuration (`load_config`)
///
/// Loads and validates the effective configuration.
///
/// ## Arguments
///
/// * `explicit_path`: A file named on the command line. When present it is the
///   only source consulted, and it must exist.
///
/// ## Returns
///
/// * `Result<Config>`: The merged configuration, already validated.
pub fn load_config(explicit_path: Option<&Path>) -> Result<Config> {
    let config = match explicit_path {
        Some(path) => {
            let path = expand_path(path);
            info!("Loading configuration from: {}", path.display());
            load_config_from_path(&path)?
        }
        None => {
            let user_config = load_user_config()?;
            let project_config = load_project_config()?;
            merge_configs(user_config.unwrap_or_default(), project_config)
        }
    };
    validate_config(&config).context("Configuration validation failed")?;
    debug!("Final loaded configuration: {:?}", config);
    Ok(config)
}

fn expand_path(path: &Path) -> PathBuf {
    PathBuf::from(shellexpand::tilde(&path.to_string_lossy()).into_owned())
}

fn load_user_config() -> Result<Option<Config>> {
    if let Some(proj_dirs) = ProjectDirs::from("com", "Medibot", "medibot") {
        let config_path = proj_dirs.config_dir().join("config.toml");
        if config_path.exists() {
            info!("Loading user configuration from: {}", config_path.display());
            load_config_from_path(&config_path).map(Some)
        } else {
            debug!(
                "User configuration file not found at {}",
                config_path.display()
            );
            Ok(None)
        }
    } else {
        warn!("Could not determine user config directory.");
        Ok(None)
    }
}

fn load_project_config() -> Result<Option<Config>> {
    let current_dir = std::env::current_dir().context("Failed to get current directory")?;
    if let Some(project_config_path) = find_project_config_path(&current_dir) {
        info!(
            "Loading project configuration from: {}",
            project_config_path.display()
        );
        load_config_from_path(&project_config_path).map(Some)
    } else {
        debug!("No project configuration file (.medibot.toml) found in current directory or ancestors.");
        Ok(None)
    }
}

/// Walks up from `start` looking for `.medibot.toml`, stopping at a `.git` directory.
fn find_project_config_path(start: &Path) -> Option<PathBuf> {
    let mut path = start;
    loop {
        let project_config = path.join(PROJECT_CONFIG_FILENAME);
        if project_config.is_file() {
            return Some(project_config);
        }
        if path.join(".git").is_dir() {
            debug!(
                "Found .git directory at {}, stopping project config search.",
                path.display()
            );
            return None;
        }
        path = path.parent()?;
    }
}

fn load_config_from_path(path: &Path) -> Result<Config> {
    let content = fs::read_to_string(path)
        .with_context(|| format!("Failed to read configuration file: {}", path.display()))?;
    toml::from_str(&content)
        .with_context(|| format!("Failed to parse TOML from file: {}", path.display()))
}

fn merge_configs(user: Config, project: Option<Config>) -> Config {
    let project = match project {
        Some(p) => p,
        None => return user,
    };
    Config {
        assistant: AssistantConfig {
            name: project.assistant.name.or(user.assistant.name),
            greeting: project.assistant.greeting.or(user.assistant.greeting),
            fallback: project.assistant.fallback.or(user.assistant.fallback),
        },
        knowledge_base: KnowledgeBaseConfig {
            include_builtin: project
                .knowledge_base
                .include_builtin
                .or(user.knowledge_base.include_builtin),
            rules: if !project.knowledge_base.rules.is_empty() {
                project.knowledge_base.rules
            } else {
                user.knowledge_base.rules
            },
        },
    }
}

fn validate_config(config: &Config) -> Result<()> {
    info!("Validating final configuration...");
    if config.greeting().trim().is_empty() {
        return Err(MedibotError::Config("Assistant greeting cannot be empty.".to_string()).into());
    }
    if config.assistant_name().trim().is_empty() {
        return Err(MedibotError::Config("Assistant name cannot be empty.".to_string()).into());
    }
    let kb = config.build_knowledge_base()?;
    if kb.rules().is_empty() {
        warn!("Knowledge base has no rules; every message will receive the fallback response.");
    }
    info!("Configuration validation successful.");
    Ok(())
}

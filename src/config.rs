use crate::error::{GfResult, GradeFormError};
use crate::fields::FieldSet;
use crate::mask::{GrammarMode, MaskPolicy, OverflowPolicy};
use clap::{parser::ValueSource, ArgMatches, Args};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

#[derive(Args, Debug, Clone, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct Config {
    #[command(flatten)]
    pub engine: EngineConfig,
    #[command(flatten)]
    pub client: ClientConfig,
}

#[derive(Args, Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct EngineConfig {
    /// Which grade columns the form collects
    #[arg(long, value_enum, default_value_t = FieldSet::Full)]
    pub field_set: FieldSet,

    /// Whether a bare leading separator is completed with `0`
    #[arg(long, value_enum, default_value_t = GrammarMode::Lenient)]
    pub grammar: GrammarMode,

    /// What an out-of-range value (> 10) turns into
    #[arg(long, value_enum, default_value_t = OverflowPolicy::Clamp)]
    pub overflow: OverflowPolicy,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            field_set: FieldSet::Full,
            grammar: GrammarMode::Lenient,
            overflow: OverflowPolicy::Clamp,
        }
    }
}

impl EngineConfig {
    pub fn policy(&self) -> MaskPolicy {
        MaskPolicy {
            grammar: self.grammar,
            overflow: self.overflow,
        }
    }
}

#[derive(Args, Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ClientConfig {
    /// Base URL of the prediction service
    #[arg(long, default_value = "http://localhost:5000")]
    pub server: String,

    #[arg(long, default_value = "/predict")]
    pub predict_path: String,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            server: "http://localhost:5000".to_string(),
            predict_path: "/predict".to_string(),
        }
    }
}

impl Config {
    pub fn load_from_file<P: AsRef<Path>>(path: P) -> GfResult<Self> {
        let path = path.as_ref();
        let content = fs::read_to_string(path).map_err(|e| {
            GradeFormError::Config(format!("Failed to read {}: {}", path.display(), e))
        })?;
        let config: Config = serde_json::from_str(&content)?;
        config.check()?;
        Ok(config)
    }

    /// Overlays only the flags the user actually typed onto `self`.
    pub fn merge_from_cli(&mut self, cli: &Config, matches: &ArgMatches) {
        macro_rules! update_if_present {
            ($group:ident . $field:ident, $arg_name:expr) => {
                if matches.value_source($arg_name) == Some(ValueSource::CommandLine) {
                    self.$group.$field = cli.$group.$field.clone();
                }
            };
        }

        update_if_present!(engine.field_set, "field_set");
        update_if_present!(engine.grammar, "grammar");
        update_if_present!(engine.overflow, "overflow");

        update_if_present!(client.server, "server");
        update_if_present!(client.predict_path, "predict_path");
    }

    pub fn check(&self) -> GfResult<()> {
        let server = self.client.server.trim();
        if !(server.starts_with("http://") || server.starts_with("https://")) {
            return Err(GradeFormError::Config(format!(
                "server must be an http(s) URL, got '{}'",
                self.client.server
            )));
        }
        if !self.client.predict_path.starts_with('/') {
            return Err(GradeFormError::Config(format!(
                "predict_path must start with '/', got '{}'",
                self.client.predict_path
            )));
        }
        Ok(())
    }
}

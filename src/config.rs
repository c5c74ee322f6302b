//! Runtime configuration, loaded from `config.json` in the platform config
//! directory and overridable from the command line.

use crate::board::Marker;
use crate::constants::{
    CONFIG_APP_NAME, CONFIG_FILE_NAME, DEFAULT_THINK_DELAY_MS, TICK_INTERVAL_MS,
};
use directories::ProjectDirs;
use serde::{Deserialize, Serialize};
use std::fs;
use std::io;
use std::path::{Path, PathBuf};

/// Game options that survive between runs.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct GameConfig {
    /// Marker played by the advisor (None = two humans share the keyboard)
    pub advisor: Option<Marker>,
    /// Cosmetic pause before the advisor moves
    pub think_delay_ms: u64,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            advisor: Some(Marker::O),
            think_delay_ms: DEFAULT_THINK_DELAY_MS,
        }
    }
}

impl GameConfig {
    /// Path of the config file for this platform.
    pub fn default_path() -> io::Result<PathBuf> {
        let project_dirs = ProjectDirs::from("", "", CONFIG_APP_NAME).ok_or_else(|| {
            io::Error::new(
                io::ErrorKind::NotFound,
                "Could not determine config directory",
            )
        })?;
        Ok(project_dirs.config_dir().join(CONFIG_FILE_NAME))
    }

    /// Load the config from `path`. A missing file yields the defaults.
    pub fn load_or_default(path: &Path) -> io::Result<Self> {
        match fs::read_to_string(path) {
            Ok(content) => Self::from_json(&content),
            Err(e) if e.kind() == io::ErrorKind::NotFound => Ok(Self::default()),
            Err(e) => Err(e),
        }
    }

    /// Parse a config from JSON. Missing fields take their defaults.
    pub fn from_json(content: &str) -> io::Result<Self> {
        serde_json::from_str(content).map_err(|e| io::Error::new(io::ErrorKind::InvalidData, e))
    }

    /// Write the config to `path`, creating parent directories.
    pub fn save(&self, path: &Path) -> io::Result<()> {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }
        let json = serde_json::to_string_pretty(self)
            .map_err(|e| io::Error::new(io::ErrorKind::InvalidData, e))?;
        fs::write(path, json)
    }

    /// Think delay expressed in game ticks, rounded up.
    pub fn think_ticks(&self) -> u32 {
        let ticks = self.think_delay_ms.div_ceil(TICK_INTERVAL_MS);
        u32::try_from(ticks).unwrap_or(u32::MAX)
    }

    /// Apply `--ai` and `--delay` style overrides on top of the loaded values.
    pub fn apply_args(&mut self, args: &[String]) -> Result<(), String> {
        let mut i = 0;
        while i < args.len() {
            match args[i].as_str() {
                "--ai" => {
                    let value = args.get(i + 1).ok_or("--ai needs a value (X, O or off)")?;
                    self.advisor = match value.as_str() {
                        "off" | "none" => None,
                        other => Some(
                            Marker::parse(other)
                                .ok_or_else(|| format!("Unknown marker for --ai: {}", other))?,
                        ),
                    };
                    i += 1;
                }
                "--delay" => {
                    let value = args.get(i + 1).ok_or("--delay needs a value in ms")?;
                    self.think_delay_ms = value
                        .parse()
                        .map_err(|_| format!("Invalid delay: {}", value))?;
                    i += 1;
                }
                other => return Err(format!("Unknown argument: {}", other)),
            }
            i += 1;
        }
        Ok(())
    }
}

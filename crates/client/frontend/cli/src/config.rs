//! CLI-specific configuration.
use std::{env, path::PathBuf, str::FromStr, time::Duration};

/// Which backend draws the game area.
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
pub enum RenderBackend {
    /// Character-grid terminal rendering.
    #[default]
    Grid,
    /// 2D top-down canvas.
    TopDown,
    /// First-person canvas.
    FirstPerson,
}

impl FromStr for RenderBackend {
    type Err = ();

    fn from_str(raw: &str) -> Result<Self, Self::Err> {
        match raw.trim().to_ascii_lowercase().as_str() {
            "grid" | "terminal" => Ok(Self::Grid),
            "topdown" | "top-down" => Ok(Self::TopDown),
            "firstperson" | "first-person" | "fp" => Ok(Self::FirstPerson),
            _ => Err(()),
        }
    }
}

/// Terminal frontend settings.
#[derive(Clone, Debug)]
pub struct CliConfig {
    pub backend: RenderBackend,
    /// Height of the message panel under the game area, in lines.
    pub message_panel_height: u16,
    /// Feedback tick cadence.
    pub frame_interval: Duration,
    /// How many tiles ahead the first-person sweep samples.
    pub first_person_depth: i32,
    /// Lateral half-width of the first-person sweep, in tiles.
    pub first_person_half_width: i32,
    /// Spectator sessions render but never send.
    pub spectator: bool,
    /// Log directory override; platform default when unset.
    pub log_dir: Option<PathBuf>,
    /// Session identifier used for the log file path.
    pub session_id: Option<String>,
}

impl Default for CliConfig {
    fn default() -> Self {
        Self {
            backend: RenderBackend::Grid,
            message_panel_height: 5,
            frame_interval: Duration::from_millis(100),
            first_person_depth: 8,
            first_person_half_width: 4,
            spectator: false,
            log_dir: None,
            session_id: None,
        }
    }
}

impl CliConfig {
    /// Construct configuration from process environment variables.
    ///
    /// Environment variables:
    /// - `GLOOMWARD_BACKEND` - grid | topdown | firstperson
    /// - `GLOOMWARD_MSG_PANEL` - message panel height in lines
    /// - `GLOOMWARD_FRAME_MS` - feedback tick cadence in milliseconds
    /// - `GLOOMWARD_FP_DEPTH` - first-person sweep depth in tiles
    /// - `GLOOMWARD_SPECTATOR` - true/1 renders without sending
    /// - `GLOOMWARD_LOG_DIR` - log directory override
    /// - `GLOOMWARD_SESSION` - session id for the log file path
    pub fn from_env() -> Self {
        let mut config = Self::default();

        if let Some(backend) = read_env::<RenderBackend>("GLOOMWARD_BACKEND") {
            config.backend = backend;
        }
        if let Some(height) = read_env::<u16>("GLOOMWARD_MSG_PANEL") {
            config.message_panel_height = height.clamp(1, 20);
        }
        if let Some(millis) = read_env::<u64>("GLOOMWARD_FRAME_MS") {
            config.frame_interval = Duration::from_millis(millis.max(16));
        }
        if let Some(depth) = read_env::<i32>("GLOOMWARD_FP_DEPTH") {
            config.first_person_depth = depth.clamp(1, 32);
        }
        if let Some(spectator) = read_env_bool("GLOOMWARD_SPECTATOR") {
            config.spectator = spectator;
        }
        if let Ok(dir) = env::var("GLOOMWARD_LOG_DIR") {
            if !dir.trim().is_empty() {
                config.log_dir = Some(PathBuf::from(dir));
            }
        }
        if let Ok(session) = env::var("GLOOMWARD_SESSION") {
            if !session.trim().is_empty() {
                config.session_id = Some(session);
            }
        }

        config
    }
}

fn read_env<T: FromStr>(name: &str) -> Option<T> {
    env::var(name).ok()?.trim().parse().ok()
}

fn read_env_bool(name: &str) -> Option<bool> {
    let raw = env::var(name).ok()?;
    match raw.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Some(true),
        "0" | "false" | "no" | "off" => Some(false),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn backend_parsing_accepts_aliases() {
        assert_eq!("grid".parse(), Ok(RenderBackend::Grid));
        assert_eq!("top-down".parse(), Ok(RenderBackend::TopDown));
        assert_eq!("fp".parse(), Ok(RenderBackend::FirstPerson));
        assert!("vulkan".parse::<RenderBackend>().is_err());
    }

    #[test]
    fn defaults_are_sane() {
        let config = CliConfig::default();
        assert_eq!(config.backend, RenderBackend::Grid);
        assert!(config.frame_interval >= Duration::from_millis(16));
        assert!(!config.spectator);
    }
}

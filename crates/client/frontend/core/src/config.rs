//! Frontend configuration shared across rendering backends.
use std::{env, str::FromStr, time::Duration};

use crate::compositor::ComposeParams;
use crate::fov::DEFAULT_CONE_RADIUS;

/// Settings every frontend needs, regardless of backend.
#[derive(Clone, Debug)]
pub struct FrontendConfig {
    pub viewport_width: u32,
    pub viewport_height: u32,
    pub tile_size: u32,
    pub cone_radius: f32,
    /// Capacity of the client-side notice log.
    pub message_capacity: usize,
    /// Lifetime of transient feedback flashes.
    pub flash_duration: Duration,
    /// Outbound request queue size.
    pub command_buffer: usize,
}

impl Default for FrontendConfig {
    fn default() -> Self {
        Self {
            viewport_width: 20,
            viewport_height: 15,
            tile_size: 32,
            cone_radius: DEFAULT_CONE_RADIUS,
            message_capacity: 64,
            flash_duration: Duration::from_millis(400),
            command_buffer: 16,
        }
    }
}

impl FrontendConfig {
    /// Construct configuration from process environment variables.
    ///
    /// Environment variables:
    /// - `GLOOMWARD_VIEWPORT_W` / `GLOOMWARD_VIEWPORT_H` - viewport size in tiles
    /// - `GLOOMWARD_FOV_RADIUS` - facing-cone reach in tiles
    /// - `GLOOMWARD_MSG_CAPACITY` - client notice log capacity
    /// - `GLOOMWARD_FLASH_MS` - feedback flash duration in milliseconds
    /// - `GLOOMWARD_CMD_BUFFER` - outbound request queue size
    pub fn from_env() -> Self {
        let mut config = Self::default();

        if let Some(width) = read_env::<u32>("GLOOMWARD_VIEWPORT_W") {
            config.viewport_width = width.max(1);
        }
        if let Some(height) = read_env::<u32>("GLOOMWARD_VIEWPORT_H") {
            config.viewport_height = height.max(1);
        }
        if let Some(radius) = read_env::<f32>("GLOOMWARD_FOV_RADIUS") {
            config.cone_radius = radius.max(0.0);
        }
        if let Some(capacity) = read_env::<usize>("GLOOMWARD_MSG_CAPACITY") {
            config.message_capacity = capacity.max(1);
        }
        if let Some(millis) = read_env::<u64>("GLOOMWARD_FLASH_MS") {
            config.flash_duration = Duration::from_millis(millis);
        }
        if let Some(buffer) = read_env::<usize>("GLOOMWARD_CMD_BUFFER") {
            config.command_buffer = buffer.max(1);
        }

        config
    }

    /// The compositor parameters this configuration implies.
    pub fn compose_params(&self) -> ComposeParams {
        ComposeParams {
            viewport_width: self.viewport_width,
            viewport_height: self.viewport_height,
            tile_size: self.tile_size,
            cone_radius: self.cone_radius,
        }
    }
}

fn read_env<T: FromStr>(name: &str) -> Option<T> {
    env::var(name).ok()?.trim().parse().ok()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_the_spec_viewport() {
        let config = FrontendConfig::default();
        assert_eq!(config.viewport_width, 20);
        assert_eq!(config.viewport_height, 15);
        assert_eq!(config.cone_radius, DEFAULT_CONE_RADIUS);
    }

    #[test]
    fn compose_params_carry_the_viewport() {
        let config = FrontendConfig::default();
        let params = config.compose_params();
        assert_eq!(params.viewport_width, config.viewport_width);
        assert_eq!(params.tile_size, config.tile_size);
    }
}

//! Runtime configuration for the desk scene viewer
//!
//! Defaults match the classic 1000x800 coursework window with textures read from
//! `./Textures`. Each field can be overridden through an environment variable so
//! the binary needs no command-line parsing.

use std::path::PathBuf;

/// Environment variable overriding [`SceneConfig::texture_dir`].
pub const TEXTURE_DIR_VAR: &str = "DESK_SCENE_TEXTURE_DIR";
/// Environment variable overriding [`SceneConfig::width`].
pub const WIDTH_VAR: &str = "DESK_SCENE_WIDTH";
/// Environment variable overriding [`SceneConfig::height`].
pub const HEIGHT_VAR: &str = "DESK_SCENE_HEIGHT";
/// Environment variable overriding [`SceneConfig::vsync`] (`0`/`false` disables).
pub const VSYNC_VAR: &str = "DESK_SCENE_VSYNC";

#[derive(Debug, Clone, PartialEq)]
pub struct SceneConfig {
    pub title: String,
    pub width: u32,
    pub height: u32,
    /// Directory the scene texture files are resolved against
    pub texture_dir: PathBuf,
    pub vsync: bool,
}

impl Default for SceneConfig {
    fn default() -> Self {
        Self {
            title: "Desk Scene".to_string(),
            width: 1000,
            height: 800,
            texture_dir: PathBuf::from("Textures"),
            vsync: true,
        }
    }
}

impl SceneConfig {
    /// Builds a configuration from the process environment
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Builds a configuration from an arbitrary key lookup.
    ///
    /// Unparseable values are ignored with a warning and the default is kept.
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = Self::default();

        if let Some(dir) = lookup(TEXTURE_DIR_VAR) {
            config.texture_dir = PathBuf::from(dir);
        }
        if let Some(width) = lookup(WIDTH_VAR) {
            match width.trim().parse::<u32>() {
                Ok(value) if value > 0 => config.width = value,
                _ => log::warn!("Ignoring invalid {}={:?}", WIDTH_VAR, width),
            }
        }
        if let Some(height) = lookup(HEIGHT_VAR) {
            match height.trim().parse::<u32>() {
                Ok(value) if value > 0 => config.height = value,
                _ => log::warn!("Ignoring invalid {}={:?}", HEIGHT_VAR, height),
            }
        }
        if let Some(vsync) = lookup(VSYNC_VAR) {
            match vsync.trim().to_ascii_lowercase().as_str() {
                "1" | "true" | "on" | "yes" => config.vsync = true,
                "0" | "false" | "off" | "no" => config.vsync = false,
                _ => log::warn!("Ignoring invalid {}={:?}", VSYNC_VAR, vsync),
            }
        }

        config
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup_from(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| map.get(key).cloned()
    }

    #[test]
    fn test_defaults_without_overrides() {
        let config = SceneConfig::from_lookup(|_| None);
        assert_eq!(config, SceneConfig::default());
        assert_eq!(config.texture_dir, PathBuf::from("Textures"));
    }

    #[test]
    fn test_overrides_are_applied() {
        let config = SceneConfig::from_lookup(lookup_from(&[
            (TEXTURE_DIR_VAR, "/srv/assets"),
            (WIDTH_VAR, "1280"),
            (HEIGHT_VAR, " 720 "),
            (VSYNC_VAR, "off"),
        ]));
        assert_eq!(config.texture_dir, PathBuf::from("/srv/assets"));
        assert_eq!(config.width, 1280);
        assert_eq!(config.height, 720);
        assert!(!config.vsync);
    }

    #[test]
    fn test_invalid_values_keep_defaults() {
        let config = SceneConfig::from_lookup(lookup_from(&[
            (WIDTH_VAR, "wide"),
            (HEIGHT_VAR, "0"),
            (VSYNC_VAR, "maybe"),
        ]));
        let defaults = SceneConfig::default();
        assert_eq!(config.width, defaults.width);
        assert_eq!(config.height, defaults.height);
        assert_eq!(config.vsync, defaults.vsync);
    }
}

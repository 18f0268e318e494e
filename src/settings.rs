use std::path::{Path, PathBuf};

use crate::CONFY_APP_NAME;
use crate::error::ConvertError;

use serde::{Deserialize, Serialize};

/// External converter programs and the fixed arguments passed to them.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ToolSettings {
    pub skeleton_tool: String,
    pub animation_tool: String,
    pub animation_log_level: String,
    /// File inside the input directory the skeleton is extracted from.
    pub pose_file: String,
}

impl Default for ToolSettings {
    fn default() -> Self {
        Self {
            skeleton_tool: "fbx2skel".to_string(),
            animation_tool: "fbx2anim".to_string(),
            animation_log_level: "verbose".to_string(),
            pose_file: "pose.fbx".to_string(),
        }
    }
}

impl ToolSettings {
    pub fn load() -> Self {
        confy::load(CONFY_APP_NAME, "tools").unwrap_or_default()
    }

    /// Store into the user config file and return where it went.
    pub fn save(&self) -> Result<PathBuf, ConvertError> {
        let path = confy::get_configuration_file_path(CONFY_APP_NAME, "tools")
            .map_err(ConvertError::save_config)?;
        self.save_to(&path)?;
        Ok(path)
    }

    pub fn save_to(&self, path: &Path) -> Result<(), ConvertError> {
        confy::store_path(path, self)
            .map_err(|e| ConvertError::save_config(e).with_arg("path", path.display()))
    }

    /// Apply per-run program overrides from the command line.
    pub fn with_overrides(
        mut self,
        skeleton_tool: Option<String>,
        animation_tool: Option<String>,
    ) -> Self {
        if let Some(tool) = skeleton_tool {
            self.skeleton_tool = tool;
        }
        if let Some(tool) = animation_tool {
            self.animation_tool = tool;
        }
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_stock_tools() {
        let settings = ToolSettings::default();
        assert_eq!(settings.skeleton_tool, "fbx2skel");
        assert_eq!(settings.animation_tool, "fbx2anim");
        assert_eq!(settings.animation_log_level, "verbose");
        assert_eq!(settings.pose_file, "pose.fbx");
    }

    #[test]
    fn overrides_replace_only_given_tools() {
        let settings =
            ToolSettings::default().with_overrides(None, Some("/opt/ozz/fbx2anim".into()));
        assert_eq!(settings.skeleton_tool, "fbx2skel");
        assert_eq!(settings.animation_tool, "/opt/ozz/fbx2anim");
    }

    #[test]
    fn saved_settings_load_back() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("tools.toml");
        let settings = ToolSettings::default().with_overrides(Some("skel".into()), None);

        settings.save_to(&path).unwrap();
        let loaded: ToolSettings = confy::load_path(&path).unwrap();
        assert_eq!(loaded, settings);
    }

    #[test]
    fn unwritable_config_path_is_reported() {
        let dir = tempfile::tempdir().unwrap();
        let blocker = dir.path().join("not-a-dir");
        std::fs::write(&blocker, b"").unwrap();

        let err = ToolSettings::default().save_to(&blocker.join("tools.toml")).unwrap_err();
        assert_eq!(err.key, "save-config");
        assert!(err.args["path"].ends_with("tools.toml"));
    }
}

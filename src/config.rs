use anyhow::Result;
use cuboid_layout_ui3d::SlabKind;
use serde::{Deserialize, Serialize};
use std::{fs, path::Path};
use thiserror::Error;
use tracing::warn;

pub const DEFAULT_SCENE_PATH: &str = "config/scene.toml";

/// Errors emitted while loading or validating a scene file.
#[derive(Debug, Error)]
pub enum SceneError {
    #[error("failed to read scene file: {0}")]
    Io(#[from] std::io::Error),
    #[error("failed to parse scene file: {0}")]
    Parse(#[from] toml::de::Error),
    #[error("invalid scene: {0}")]
    Invalid(String),
}

/// Scene description consumed by the CLI.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
#[serde(default)]
pub struct SceneConfig {
    /// Template name for standard backing slabs.
    pub standard_template: String,
    /// Template name for highlight slabs.
    pub highlight_template: String,
    /// Shared material applied to standard slabs after layout.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub material: Option<u64>,
    pub standard: Vec<RectConfig>,
    pub highlight: Vec<RectConfig>,
    /// Dimension changes replayed after the initial pass, in order.
    pub resize: Vec<ResizeStep>,
}

#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
#[serde(default)]
pub struct RectConfig {
    pub size: [f32; 2],
    pub pivot: [f32; 2],
    pub position: [f32; 3],
}

#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct ResizeStep {
    pub target: SlabKind,
    pub index: usize,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub size: Option<[f32; 2]>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub pivot: Option<[f32; 2]>,
}

impl Default for RectConfig {
    fn default() -> Self {
        Self {
            size: [1.0, 1.0],
            pivot: [0.5, 0.5],
            position: [0.0, 0.0, 0.0],
        }
    }
}

impl Default for SceneConfig {
    fn default() -> Self {
        let panel = RectConfig {
            size: [100.0, 50.0],
            pivot: [0.0, 0.0],
            ..RectConfig::default()
        };
        Self {
            standard_template: "backing_cube".to_string(),
            highlight_template: "highlight_cube".to_string(),
            material: None,
            standard: vec![panel.clone()],
            highlight: vec![panel],
            resize: Vec::new(),
        }
    }
}

impl SceneConfig {
    /// Load the scene from the default path, falling back to the built-in scene.
    pub fn load() -> Self {
        let path = Path::new(DEFAULT_SCENE_PATH);
        match Self::from_file(path) {
            Ok(cfg) => cfg,
            Err(SceneError::Io(err)) if err.kind() == std::io::ErrorKind::NotFound => {
                warn!("Scene not found at {}. Using built-in scene", path.display());
                SceneConfig::default()
            }
            Err(err) => {
                warn!("Failed to load {}: {err}. Using built-in scene", path.display());
                SceneConfig::default()
            }
        }
    }

    /// Load and validate a scene from an explicit path.
    pub fn from_file(path: &Path) -> Result<Self, SceneError> {
        let contents = fs::read_to_string(path)?;
        Self::from_toml_str(&contents)
    }

    /// Parse and validate a scene from TOML text.
    pub fn from_toml_str(contents: &str) -> Result<Self, SceneError> {
        let cfg: SceneConfig = toml::from_str(contents)?;
        cfg.validate()?;
        Ok(cfg)
    }

    /// Save the scene to an explicit path.
    pub fn save_to_path(&self, path: &Path) -> Result<()> {
        let toml = toml::to_string_pretty(self)?;
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }
        fs::write(path, toml)?;
        Ok(())
    }

    /// Rects for one slab kind.
    pub fn rects(&self, kind: SlabKind) -> &[RectConfig] {
        match kind {
            SlabKind::Standard => &self.standard,
            SlabKind::Highlight => &self.highlight,
        }
    }

    /// Check pivots and replay steps. Sizes may be negative; layout
    /// normalizes them.
    pub fn validate(&self) -> Result<(), SceneError> {
        for kind in [SlabKind::Standard, SlabKind::Highlight] {
            for (index, rect) in self.rects(kind).iter().enumerate() {
                let label = format!("{}[{index}]", kind.as_str());
                check_finite(&label, &rect.size)?;
                check_finite(&label, &rect.position)?;
                check_pivot(&label, rect.pivot)?;
            }
        }

        for (step, resize) in self.resize.iter().enumerate() {
            let label = format!("resize[{step}]");
            let count = self.rects(resize.target).len();
            if resize.index >= count {
                return Err(SceneError::Invalid(format!(
                    "{label} targets {}[{}] but only {count} rects exist",
                    resize.target.as_str(),
                    resize.index
                )));
            }
            if resize.size.is_none() && resize.pivot.is_none() {
                return Err(SceneError::Invalid(format!("{label} changes nothing")));
            }
            if let Some(size) = &resize.size {
                check_finite(&label, size)?;
            }
            if let Some(pivot) = resize.pivot {
                check_pivot(&label, pivot)?;
            }
        }
        Ok(())
    }
}

fn check_finite(label: &str, values: &[f32]) -> Result<(), SceneError> {
    if values.iter().all(|v| v.is_finite()) {
        Ok(())
    } else {
        Err(SceneError::Invalid(format!("{label} has a non-finite value")))
    }
}

fn check_pivot(label: &str, pivot: [f32; 2]) -> Result<(), SceneError> {
    if pivot.iter().all(|p| (0.0..=1.0).contains(p)) {
        Ok(())
    } else {
        Err(SceneError::Invalid(format!(
            "{label} pivot {pivot:?} is outside [0, 1]"
        )))
    }
}

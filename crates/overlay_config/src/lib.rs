use anyhow::Result;
use serde::Deserialize;

/// Overlay drawing configuration, loaded from TOML.
#[derive(Debug, Clone, Deserialize)]
pub struct OverlayCfg {
    #[serde(default = "default_box_thickness")]
    pub box_thickness: u32,
    #[serde(default = "default_font_px")]
    pub font_px: f32,
    /// Path to a TTF file for label text. When unset the host is
    /// expected to supply its own glyph backend.
    #[serde(default)]
    pub font: Option<String>,
}

impl OverlayCfg {
    pub fn from_file(p: &str) -> Result<Self> {
        let content = std::fs::read_to_string(p)?;
        let config: OverlayCfg = toml::from_str(&content)?;
        Ok(config)
    }
}

impl Default for OverlayCfg {
    fn default() -> Self {
        Self {
            box_thickness: default_box_thickness(),
            font_px: default_font_px(),
            font: None,
        }
    }
}

fn default_box_thickness() -> u32 {
    2
}

fn default_font_px() -> f32 {
    16.0
}

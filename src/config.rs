/// View configuration shared by the popup, manager and graph pages
use serde::{Deserialize, Serialize};

/// How a bookmark is attached to its folder in the graph projection
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum FolderLinking {
    /// Match the enclosing folder by name; the first folder with that name wins
    #[default]
    ByName,
    /// Link to the folder that actually contains the bookmark
    ById,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct ViewConfig {
    pub placeholder_title: String,
    pub root_label: String,
    pub recent_count: u32,
    pub popup_title_length: usize,
    pub label_length: usize,
    pub folder_linking: FolderLinking,
    pub layout: LayoutConfig,
}

impl Default for ViewConfig {
    fn default() -> Self {
        ViewConfig {
            placeholder_title: "Untitled".to_string(),
            root_label: "Bookmarks".to_string(),
            recent_count: 7,
            popup_title_length: 27,
            label_length: 20,
            folder_linking: FolderLinking::ByName,
            layout: LayoutConfig::default(),
        }
    }
}

impl ViewConfig {
    /// Parse a config object handed over from JavaScript; missing keys keep their defaults
    pub fn from_json(value: serde_json::Value) -> crate::error::Result<Self> {
        if value.is_null() {
            return Ok(ViewConfig::default());
        }
        Ok(serde_json::from_value(value)?)
    }
}

/// Force-simulation parameters forwarded untouched to the graph renderer
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct LayoutConfig {
    pub root_charge: f64,
    pub folder_charge: f64,
    pub bookmark_charge: f64,
    pub charge_distance_min: f64,
    pub charge_distance_max: f64,
    pub root_link_distance: f64,
    pub folder_link_distance: f64,
    pub link_distance: f64,
    pub link_strength: f64,
    pub collision_padding: f64,
    pub alpha_decay: f64,
    pub velocity_decay: f64,
    pub zoom_min: f64,
    pub zoom_max: f64,
}

impl Default for LayoutConfig {
    fn default() -> Self {
        LayoutConfig {
            root_charge: -200.0,
            folder_charge: -100.0,
            bookmark_charge: -50.0,
            charge_distance_min: 30.0,
            charge_distance_max: 200.0,
            root_link_distance: 350.0,
            folder_link_distance: 200.0,
            link_distance: 80.0,
            link_strength: 0.2,
            collision_padding: 35.0,
            alpha_decay: 0.02,
            velocity_decay: 0.4,
            zoom_min: 0.1,
            zoom_max: 4.0,
        }
    }
}

use serde::{Serialize, Deserialize};

/// Fixed parameters applied to every batch run.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BatchDefaults {
    /// Target width for "Resize" actions (standard web size)
    pub resize_width: u32,
    /// Suffix appended to the source id of every produced item
    pub id_suffix: String,
    /// Prefix for produced display names
    pub name_prefix: String,
    /// Tag added to every produced item
    pub processed_tag: String,
}

impl Default for BatchDefaults {
    fn default() -> Self {
        Self {
            resize_width: 1200,
            id_suffix: "-proc".to_string(),
            name_prefix: "PROCESSED_".to_string(),
            processed_tag: "processed".to_string(),
        }
    }
}

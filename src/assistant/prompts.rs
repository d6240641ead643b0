//! Prompt templates for the name-based AI operations.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Kind of structured data to pull out of an image.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum DataTopic {
    Contacts,
    Chat,
    Docs,
    #[default]
    Misc,
}

impl DataTopic {
    /// Extension of the file the extraction result is saved as
    pub fn file_extension(&self) -> &'static str {
        match self {
            Self::Contacts | Self::Chat => "csv",
            Self::Docs | Self::Misc => "md",
        }
    }
}

pub fn tags_prompt(image_name: &str) -> String {
    format!(
        "Generate 5 concise, relevant categorization tags for a hypothetical high-quality stock photo named \"{image_name}\". Return only the tags as a JSON string array."
    )
}

pub fn description_prompt(image_name: &str) -> String {
    format!(
        "Write a short, professional description (max 2 sentences) for an image titled \"{image_name}\". Assume it is a stunning professional photograph."
    )
}

pub fn extraction_prompt(image_name: &str, topic: DataTopic) -> String {
    match topic {
        DataTopic::Contacts => format!(
            "Analyze the image \"{image_name}\" (hypothetically). Extract any contact details found (Name, Phone, Email, Address, Organization). Format the output strictly as a CSV string with headers."
        ),
        DataTopic::Chat => format!(
            "Analyze the image \"{image_name}\" (hypothetically) as a chat screenshot. Extract the conversation. Format the output strictly as a CSV with headers: Timestamp, Sender, Message."
        ),
        DataTopic::Docs => format!(
            "Perform OCR on the image \"{image_name}\" (hypothetically). Extract the text as a structured essay or letter. Return the result in Markdown format."
        ),
        DataTopic::Misc => format!(
            "Analyze the image \"{image_name}\" (hypothetically). Extract all intelligible data and list it in a structured Markdown format."
        ),
    }
}

/// Text produced by a data extraction, kept alongside the gallery.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ExtractedFile {
    pub id: String,
    pub name: String,
    pub topic: DataTopic,
    pub content: String,
    pub source_item_id: String,
    pub created_at: DateTime<Utc>,
}

impl ExtractedFile {
    pub fn new(
        id: impl Into<String>,
        source_item_id: &str,
        image_name: &str,
        topic: DataTopic,
        content: String,
    ) -> Self {
        Self {
            id: id.into(),
            name: format!("EXT_{image_name}.{}", topic.file_extension()),
            topic,
            content,
            source_item_id: source_item_id.to_string(),
            created_at: Utc::now(),
        }
    }
}

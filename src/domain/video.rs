// src/domain/video.rs
use crate::constants::{DEFAULT_COVER_COLOR, DEFAULT_COUNT};
use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;

/// Counts come back as display strings ("2.9万") or plain numbers.
fn string_or_number<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(match Value::deserialize(deserializer)? {
        Value::String(s) => s,
        Value::Number(n) => n.to_string(),
        Value::Null => String::new(),
        other => other.to_string(),
    })
}

fn null_as_empty<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<String>::deserialize(deserializer)?.unwrap_or_default())
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Video {
    pub id: i64,
    #[serde(default, deserialize_with = "null_as_empty")]
    pub title: String,
    #[serde(default, deserialize_with = "null_as_empty")]
    pub bilibili_url: String,
    #[serde(default, deserialize_with = "null_as_empty")]
    pub cover_color: String,
    #[serde(default, deserialize_with = "string_or_number")]
    pub play_count: String,
    #[serde(default, deserialize_with = "string_or_number")]
    pub danmaku_count: String,
    #[serde(default, deserialize_with = "null_as_empty")]
    pub publish_date: String,
    #[serde(default, deserialize_with = "null_as_empty")]
    pub up_name: String,
    #[serde(default, deserialize_with = "null_as_empty")]
    pub description: String,
}

fn or_fallback<'a>(value: &'a str, fallback: &'a str) -> &'a str {
    if value.trim().is_empty() {
        fallback
    } else {
        value
    }
}

// Placeholders shown on a card when the backend left a field blank
impl Video {
    pub fn display_title(&self) -> &str {
        or_fallback(&self.title, "Untitled video")
    }

    pub fn display_url(&self) -> &str {
        or_fallback(&self.bilibili_url, "#")
    }

    pub fn display_cover(&self) -> &str {
        or_fallback(&self.cover_color, DEFAULT_COVER_COLOR)
    }

    pub fn display_play_count(&self) -> &str {
        or_fallback(&self.play_count, DEFAULT_COUNT)
    }

    pub fn display_danmaku_count(&self) -> &str {
        or_fallback(&self.danmaku_count, DEFAULT_COUNT)
    }

    pub fn display_publish_date(&self) -> &str {
        or_fallback(&self.publish_date, "Unknown date")
    }

    pub fn display_up_name(&self) -> &str {
        or_fallback(&self.up_name, "Unknown uploader")
    }

    pub fn display_description(&self) -> &str {
        or_fallback(&self.description, "No description")
    }
}

/// Form payload for `POST /api/add_video`
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct NewVideo {
    pub title: String,
    pub bilibili_url: String,
    pub cover_color: String,
    pub play_count: String,
    pub danmaku_count: String,
    pub publish_date: String,
    pub up_name: String,
    pub description: String,
}

impl NewVideo {
    /// Blank counts are submitted as "0", everything else is sent as typed.
    pub fn normalized(mut self) -> Self {
        if self.play_count.trim().is_empty() {
            self.play_count = DEFAULT_COUNT.to_string();
        }
        if self.danmaku_count.trim().is_empty() {
            self.danmaku_count = DEFAULT_COUNT.to_string();
        }
        self
    }

    /// Names of required fields that are empty
    pub fn missing_fields(&self) -> Vec<&'static str> {
        let mut missing = Vec::new();
        if self.title.trim().is_empty() {
            missing.push("title");
        }
        if self.bilibili_url.trim().is_empty() {
            missing.push("bilibili_url");
        }
        missing
    }
}

use chrono::{DateTime, NaiveDateTime, Utc};
use serde::{Deserialize, Deserializer, Serialize};

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Card {
    pub id: String,
    pub public_id: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub full_name: String,
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default)]
    pub company: Option<String>,
    #[serde(default)]
    pub bio: Option<String>,
    #[serde(default)]
    pub avatar_url: Option<String>,
    #[serde(default)]
    pub company_logo_url: Option<String>,
    #[serde(default)]
    pub phone_number: Option<String>,
    #[serde(default)]
    pub email: Option<String>,
    #[serde(default)]
    pub website_url: Option<String>,
    #[serde(default)]
    pub instagram_url: Option<String>,
    #[serde(default)]
    pub facebook_url: Option<String>,
    #[serde(default)]
    pub whatsapp_number: Option<String>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub whatsapp_enabled: bool,
    #[serde(default)]
    pub theme_primary: Option<String>,
    #[serde(default)]
    pub theme_secondary: Option<String>,
    #[serde(default)]
    pub template_id: Option<String>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub is_published: bool,
    #[serde(default, deserialize_with = "lenient_timestamp")]
    pub created_at: Option<DateTime<Utc>>,
    #[serde(default, deserialize_with = "lenient_timestamp")]
    pub updated_at: Option<DateTime<Utc>>,
}

impl Card {
    /// The WhatsApp number, only when the toggle is on.
    pub fn whatsapp(&self) -> Option<&str> {
        if self.whatsapp_enabled {
            self.whatsapp_number.as_deref()
        } else {
            None
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CardLink {
    pub id: String,
    pub card_id: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub label: String,
    #[serde(rename = "type", default, deserialize_with = "null_as_default")]
    pub link_type: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub value: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub order_index: i32,
    #[serde(default, deserialize_with = "lenient_timestamp")]
    pub created_at: Option<DateTime<Utc>>,
}

impl CardLink {
    /// Label shown for the link at 1-based `position`: label, then type tag, then `Link N`.
    pub fn display_label(&self, position: usize) -> String {
        if !self.label.trim().is_empty() {
            self.label.clone()
        } else if !self.link_type.trim().is_empty() {
            self.link_type.clone()
        } else {
            format!("Link {}", position)
        }
    }

    pub fn has_value(&self) -> bool {
        !self.value.trim().is_empty()
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CardTemplate {
    pub id: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub name: String,
    #[serde(default)]
    pub preview_url: Option<String>,
    /// Free-form mapping; non-object values behave as an empty mapping.
    #[serde(default)]
    pub config_json: serde_json::Value,
    #[serde(default, deserialize_with = "null_as_default")]
    pub is_active: bool,
    #[serde(default, deserialize_with = "lenient_timestamp")]
    pub created_at: Option<DateTime<Utc>>,
}

impl CardTemplate {
    /// A string entry of `config_json`, if the mapping has one under `key`.
    pub fn config_str(&self, key: &str) -> Option<&str> {
        self.config_json.get(key).and_then(|v| v.as_str())
    }
}

/// A card with its ordered links and optional template.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CardBundle {
    pub card: Card,
    #[serde(default)]
    pub links: Vec<CardLink>,
    #[serde(default)]
    pub template: Option<CardTemplate>,
}

impl CardBundle {
    pub fn new(card: Card, links: Vec<CardLink>, template: Option<CardTemplate>) -> Self {
        let mut bundle = Self {
            card,
            links,
            template,
        };
        bundle.sort_links();
        bundle
    }

    /// Stable sort by `order_index` ascending.
    pub fn sort_links(&mut self) {
        self.links.sort_by_key(|link| link.order_index);
    }
}

/// Timestamps are informational only: RFC 3339 or an offset-less
/// `timestamp` value (read as UTC) parse, anything else becomes `None`.
fn lenient_timestamp<'de, D>(deserializer: D) -> Result<Option<DateTime<Utc>>, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = Option::<serde_json::Value>::deserialize(deserializer)?;
    Ok(raw.as_ref().and_then(|v| v.as_str()).and_then(parse_timestamp))
}

fn parse_timestamp(raw: &str) -> Option<DateTime<Utc>> {
    let raw = raw.trim();
    if let Ok(parsed) = DateTime::parse_from_rfc3339(raw) {
        return Some(parsed.with_timezone(&Utc));
    }
    ["%Y-%m-%dT%H:%M:%S%.f", "%Y-%m-%d %H:%M:%S%.f"]
        .iter()
        .find_map(|format| NaiveDateTime::parse_from_str(raw, format).ok())
        .map(|naive| naive.and_utc())
}

/// Database `NULL` in a column the model treats as plain value.
fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

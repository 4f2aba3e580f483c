//! Template resolution: free-form template data to one of a closed set of layouts.

use crate::domain::model::CardTemplate;
use crate::render::templates::{classic, minimal, modern, premium, CardView};
use regex::Regex;
use std::sync::LazyLock;

pub type TemplateRenderer = fn(&CardView<'_>) -> String;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TemplateVariant {
    Modern,
    Minimal,
    Classic,
    Premium,
}

/// Known aliases. Several aliases may point at one variant.
const ALIASES: &[(&str, TemplateVariant)] = &[
    ("classic", TemplateVariant::Classic),
    ("classic-default", TemplateVariant::Classic),
    ("classic-template", TemplateVariant::Classic),
    ("minimal", TemplateVariant::Minimal),
    ("minimal-template", TemplateVariant::Minimal),
    ("modern", TemplateVariant::Modern),
    ("modern-template", TemplateVariant::Modern),
    ("premium", TemplateVariant::Premium),
    ("v0-image-analysis", TemplateVariant::Premium),
    ("dharma-bhakti", TemplateVariant::Premium),
    ("dharma-premium", TemplateVariant::Premium),
    ("dharma-premium-v0", TemplateVariant::Premium),
];

/// Configuration entries consulted before the template's own name and id.
const CONFIG_KEY_FIELDS: [&str; 3] = ["componentKey", "slug", "key"];

static NON_ALPHANUMERIC_RUN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[^a-z0-9]+").expect("slug pattern is valid"));

impl TemplateVariant {
    pub const DEFAULT: TemplateVariant = TemplateVariant::Modern;

    pub const ALL: [TemplateVariant; 4] = [
        TemplateVariant::Modern,
        TemplateVariant::Minimal,
        TemplateVariant::Classic,
        TemplateVariant::Premium,
    ];

    pub fn key(self) -> &'static str {
        match self {
            TemplateVariant::Modern => "modern",
            TemplateVariant::Minimal => "minimal",
            TemplateVariant::Classic => "classic",
            TemplateVariant::Premium => "premium",
        }
    }

    /// Exact alias lookup; unknown strings select nothing.
    pub fn from_alias(alias: &str) -> Option<TemplateVariant> {
        ALIASES
            .iter()
            .find(|(known, _)| *known == alias)
            .map(|(_, variant)| *variant)
    }

    pub fn renderer(self) -> TemplateRenderer {
        match self {
            TemplateVariant::Modern => modern::render,
            TemplateVariant::Minimal => minimal::render,
            TemplateVariant::Classic => classic::render,
            TemplateVariant::Premium => premium::render,
        }
    }
}

impl Default for TemplateVariant {
    fn default() -> Self {
        TemplateVariant::DEFAULT
    }
}

/// Lowercase, trim, collapse non-alphanumeric runs to `-`, strip edge hyphens.
pub fn slugify(value: &str) -> String {
    let lowered = value.trim().to_lowercase();
    NON_ALPHANUMERIC_RUN
        .replace_all(&lowered, "-")
        .trim_matches('-')
        .to_string()
}

/// The explicit or inferred component key of a template.
pub fn component_key(template: Option<&CardTemplate>) -> Option<String> {
    let template = template?;

    CONFIG_KEY_FIELDS
        .iter()
        .map(|field| template.config_str(field))
        .chain([Some(template.name.as_str()), Some(template.id.as_str())])
        .flatten()
        .find(|candidate| !candidate.trim().is_empty())
        .map(slugify)
}

/// Ordered, de-duplicated registry keys to try for a template.
pub fn lookup_keys(template: Option<&CardTemplate>) -> Vec<String> {
    let mut keys: Vec<String> = Vec::new();
    let mut push = |key: String| {
        if !key.is_empty() && !keys.contains(&key) {
            keys.push(key);
        }
    };

    if let Some(key) = component_key(template) {
        push(key);
    }

    if let Some(template) = template {
        if !template.name.is_empty() {
            push(slugify(&template.name));
            push(template.name.to_lowercase());
        }
        push(template.id.clone());
    }

    keys
}

/// Never fails: anything unrecognised resolves to the default variant.
pub fn resolve(template: Option<&CardTemplate>) -> TemplateVariant {
    lookup_keys(template)
        .iter()
        .find_map(|key| TemplateVariant::from_alias(key))
        .unwrap_or_default()
}

pub fn resolve_renderer(template: Option<&CardTemplate>) -> TemplateRenderer {
    resolve(template).renderer()
}

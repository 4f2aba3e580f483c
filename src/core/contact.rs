//! vCard 3.0 payload for the "save contact" download.

use crate::domain::model::{Card, CardLink};
use crate::utils::format::{create_valid_url, non_blank, sanitize_phone};
use chrono::{DateTime, SecondsFormat, Utc};
use regex::Regex;
use std::sync::LazyLock;

pub const VCARD_CONTENT_TYPE: &str = "text/vcard;charset=utf-8";

const FALLBACK_FILENAME: &str = "contact-card";

static WHITESPACE_RUN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\s+").expect("whitespace pattern is valid"));

/// Builds the payload stamped with the current time.
pub fn build_vcard(card: &Card, links: &[CardLink]) -> String {
    build_vcard_at(card, links, Utc::now())
}

pub fn build_vcard_at(card: &Card, links: &[CardLink], revision: DateTime<Utc>) -> String {
    let mut lines: Vec<String> = vec!["BEGIN:VCARD".to_string(), "VERSION:3.0".to_string()];

    if let Some(full_name) = non_blank(Some(&card.full_name)) {
        lines.push(format!("FN:{}", escape_text(full_name.trim())));
        lines.push(structured_name(full_name));
    }

    if let Some(company) = non_blank(card.company.as_deref()) {
        lines.push(format!("ORG:{}", escape_text(company)));
    }

    if let Some(title) = non_blank(card.title.as_deref()) {
        lines.push(format!("TITLE:{}", escape_text(title)));
    }

    if let Some(bio) = non_blank(card.bio.as_deref()) {
        lines.push(format!("NOTE:{}", escape_text(bio)));
    }

    let primary_phone = card.phone_number.as_deref().map(sanitize_phone);
    if let Some(phone) = primary_phone.filter(|p| !p.is_empty()) {
        lines.push(format!("TEL;TYPE=VOICE,WORK:{}", phone));
    }

    let whatsapp = card.whatsapp().map(sanitize_phone);
    if let Some(phone) = whatsapp.filter(|p| !p.is_empty()) {
        lines.push(format!("TEL;TYPE=CELL,WHATSAPP:{}", phone));
        lines.push(format!("X-SOCIALPROFILE;TYPE=whatsapp:https://wa.me/{}", phone));
    }

    if let Some(email) = non_blank(card.email.as_deref()) {
        lines.push(format!("EMAIL;TYPE=INTERNET:{}", email.trim()));
    }

    if let Some(website) = create_valid_url(card.website_url.as_deref()) {
        lines.push(format!("URL;TYPE=WORK:{}", website));
    }

    if let Some(instagram) = non_blank(card.instagram_url.as_deref()) {
        lines.push(format!("X-SOCIALPROFILE;TYPE=instagram:{}", instagram));
    }

    if let Some(facebook) = non_blank(card.facebook_url.as_deref()) {
        lines.push(format!("X-SOCIALPROFILE;TYPE=facebook:{}", facebook));
    }

    for (index, link) in links.iter().enumerate() {
        if !link.has_value() {
            continue;
        }
        // Group index is the 0-based list position; the label counts from 1.
        lines.push(format!("item{}.URL:{}", index, link.value.trim()));
        lines.push(format!(
            "item{}.X-ABLabel:{}",
            index,
            escape_text(&link.display_label(index + 1))
        ));
    }

    lines.push(format!(
        "REV:{}",
        revision.to_rfc3339_opts(SecondsFormat::Millis, true)
    ));
    lines.push("END:VCARD".to_string());

    lines.join("\n")
}

/// `N:<last>;<first>;<middle names>;;`
fn structured_name(full_name: &str) -> String {
    let parts: Vec<&str> = full_name.split_whitespace().collect();
    let first = parts.first().copied().unwrap_or_default();
    let (last, middle) = if parts.len() > 1 {
        (parts[parts.len() - 1], parts[1..parts.len() - 1].join(" "))
    } else {
        ("", String::new())
    };

    format!(
        "N:{};{};{};;",
        escape_text(last),
        escape_text(first),
        escape_text(&middle)
    )
}

/// RFC 6350 text escaping.
fn escape_text(value: &str) -> String {
    let mut escaped = String::with_capacity(value.len());
    for c in value.chars() {
        match c {
            '\\' => escaped.push_str("\\\\"),
            ',' => escaped.push_str("\\,"),
            ';' => escaped.push_str("\\;"),
            '\n' => escaped.push_str("\\n"),
            '\r' => {}
            _ => escaped.push(c),
        }
    }
    escaped
}

/// Download name: lowercased, whitespace runs become hyphens.
pub fn vcard_filename(full_name: &str) -> String {
    let slug = WHITESPACE_RUN
        .replace_all(full_name.trim(), "-")
        .to_lowercase();

    if slug.is_empty() {
        format!("{}.vcf", FALLBACK_FILENAME)
    } else {
        format!("{}.vcf", slug)
    }
}

//! Card layouts. Every layout is a pure function of a [`CardView`] and
//! shares the affordance builders below, so absent fields are omitted the
//! same way everywhere.

pub mod classic;
pub mod minimal;
pub mod modern;
pub mod premium;

use crate::core::contact::vcard_filename;
use crate::domain::model::{Card, CardBundle, CardLink, CardTemplate};
use crate::render::html::{anchor, escape};
use crate::utils::format::{
    create_valid_url, create_whatsapp_link, format_phone_link, initials, non_blank,
};

/// Borrowed input shared by all layouts.
#[derive(Debug, Clone, Copy)]
pub struct CardView<'a> {
    pub card: &'a Card,
    pub links: &'a [CardLink],
    pub template: Option<&'a CardTemplate>,
}

impl<'a> CardView<'a> {
    pub fn new(card: &'a Card, links: &'a [CardLink], template: Option<&'a CardTemplate>) -> Self {
        Self {
            card,
            links,
            template,
        }
    }

    pub fn from_bundle(bundle: &'a CardBundle) -> Self {
        Self::new(&bundle.card, &bundle.links, bundle.template.as_ref())
    }

    /// Links with a value, paired with their 1-based position in the full list.
    pub fn visible_links(&self) -> Vec<(usize, &'a CardLink)> {
        self.links
            .iter()
            .enumerate()
            .filter(|(_, link)| link.has_value())
            .map(|(index, link)| (index + 1, link))
            .collect()
    }

    pub fn contact_href(&self) -> String {
        format!("/{}/contact.vcf", self.card.public_id)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ActionKind {
    Email,
    Phone,
    Website,
    WhatsApp,
    Instagram,
    Facebook,
}

impl ActionKind {
    pub fn css(self) -> &'static str {
        match self {
            ActionKind::Email => "email",
            ActionKind::Phone => "phone",
            ActionKind::Website => "website",
            ActionKind::WhatsApp => "whatsapp",
            ActionKind::Instagram => "instagram",
            ActionKind::Facebook => "facebook",
        }
    }
}

/// One rendered affordance: where it points and what it shows.
#[derive(Debug, Clone, PartialEq)]
pub struct ContactAction {
    pub kind: ActionKind,
    pub label: &'static str,
    pub href: String,
    pub display: String,
    pub external: bool,
}

/// Email, phone, website and WhatsApp, in that order, each only when usable.
pub fn contact_actions(card: &Card) -> Vec<ContactAction> {
    let mut actions = Vec::new();

    if let Some(email) = non_blank(card.email.as_deref()) {
        actions.push(ContactAction {
            kind: ActionKind::Email,
            label: "Email",
            href: format!("mailto:{}", email.trim()),
            display: email.trim().to_string(),
            external: false,
        });
    }

    if let Some(href) = format_phone_link(card.phone_number.as_deref()) {
        actions.push(ContactAction {
            kind: ActionKind::Phone,
            label: "Call",
            href,
            display: card.phone_number.clone().unwrap_or_default(),
            external: false,
        });
    }

    if let Some(href) = create_valid_url(card.website_url.as_deref()) {
        actions.push(ContactAction {
            kind: ActionKind::Website,
            label: "Web",
            href,
            display: card.website_url.clone().unwrap_or_default(),
            external: true,
        });
    }

    if let Some(href) = create_whatsapp_link(card.whatsapp()) {
        actions.push(ContactAction {
            kind: ActionKind::WhatsApp,
            label: "Chat",
            href,
            display: card.whatsapp_number.clone().unwrap_or_default(),
            external: true,
        });
    }

    actions
}

pub fn social_actions(card: &Card) -> Vec<ContactAction> {
    let mut actions = Vec::new();

    if let Some(href) = create_valid_url(card.instagram_url.as_deref()) {
        actions.push(ContactAction {
            kind: ActionKind::Instagram,
            label: "Instagram",
            display: href.clone(),
            href,
            external: true,
        });
    }

    if let Some(href) = create_valid_url(card.facebook_url.as_deref()) {
        actions.push(ContactAction {
            kind: ActionKind::Facebook,
            label: "Facebook",
            display: href.clone(),
            href,
            external: true,
        });
    }

    actions
}

/// Avatar image, or initials when there is none.
pub fn avatar(card: &Card, class: &str) -> String {
    match non_blank(card.avatar_url.as_deref()) {
        Some(url) => format!(
            r#"<img class="{} avatar-image" src="{}" alt="{}" />"#,
            class,
            escape(url.trim()),
            escape(&card.full_name)
        ),
        None => format!(
            r#"<div class="{} avatar-initials" aria-hidden="true">{}</div>"#,
            class,
            escape(&initials(&card.full_name))
        ),
    }
}

pub fn company_logo(card: &Card, class: &str) -> Option<String> {
    let url = non_blank(card.company_logo_url.as_deref())?;
    let alt = non_blank(card.company.as_deref()).unwrap_or("Company logo");
    Some(format!(
        r#"<img class="{}" src="{}" alt="{}" />"#,
        class,
        escape(url.trim()),
        escape(alt)
    ))
}

/// `<p>` with escaped text, or nothing when the field is absent.
pub fn optional_text(tag: &str, class: &str, value: Option<&str>) -> String {
    match non_blank(value) {
        Some(text) => format!(r#"<{tag} class="{class}">{}</{tag}>"#, escape(text)),
        None => String::new(),
    }
}

/// Custom links list; empty string when no link has a value.
pub fn links_section(view: &CardView<'_>, list_class: &str, item_class: &str) -> String {
    let links = view.visible_links();
    if links.is_empty() {
        return String::new();
    }

    let mut html = format!(r#"<nav class="{}">"#, list_class);
    for (position, link) in links {
        let href = create_valid_url(Some(&link.value)).unwrap_or_default();
        let body = format!(
            r#"<span class="link-label">{}</span><span class="link-arrow" aria-hidden="true">&#8599;</span>"#,
            escape(&link.display_label(position))
        );
        html.push_str(&anchor(&href, item_class, &body, true));
    }
    html.push_str("</nav>");
    html
}

pub fn save_contact_button(view: &CardView<'_>, class: &str) -> String {
    format!(
        r#"<a class="{} save-contact" href="{}" download="{}">Save Contact</a>"#,
        class,
        escape(&view.contact_href()),
        escape(&vcard_filename(&view.card.full_name))
    )
}

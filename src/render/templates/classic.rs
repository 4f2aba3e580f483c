//! Two-column layout tinted with the card's theme colors.

use super::{
    avatar, company_logo, contact_actions, links_section, optional_text, save_contact_button,
    social_actions, ActionKind, CardView,
};
use crate::render::html::{anchor, escape};
use crate::utils::format::non_blank;

const DEFAULT_PRIMARY: &str = "#1e3a8a";
const DEFAULT_SECONDARY: &str = "#3b82f6";

const STYLE: &str = r#"<style>
.classic{min-height:100vh;display:flex;align-items:center;justify-content:center;padding:2rem 1rem;background:#f3f4f6;font-family:Georgia,serif}
.classic-card{width:100%;max-width:56rem;display:flex;flex-wrap:wrap;background:#fff;border-radius:.5rem;box-shadow:0 20px 25px -5px rgba(0,0,0,.1);overflow:hidden}
.classic-side{flex:1 1 16rem;padding:2rem;color:#fff;text-align:center;background:linear-gradient(180deg,var(--classic-primary) 0%,var(--classic-secondary) 100%)}
.classic-main{flex:2 1 24rem;padding:2rem}
.classic-avatar{width:8rem;height:8rem;margin:0 auto;border-radius:999px;border:4px solid rgba(255,255,255,.3);object-fit:cover;background:rgba(255,255,255,.15);display:flex;align-items:center;justify-content:center;font-size:2.25rem;font-weight:700}
.classic-name{font-size:1.5rem;margin:1.5rem 0 .5rem}
.classic-title{margin:0;opacity:.8}
.classic-company{margin:.25rem 0 0;opacity:.6;font-size:.875rem}
.classic-quick{display:flex;justify-content:center;gap:.75rem;margin-top:1.5rem}
.classic-quick a{color:#fff;text-decoration:none;padding:.5rem .75rem;border-radius:999px;background:rgba(255,255,255,.15);font-size:.75rem}
.classic-logo{max-height:4rem;margin-bottom:1.5rem}
.classic-main h2{font-size:1.125rem;border-bottom:2px solid #e5e7eb;padding-bottom:.5rem}
.classic-bio{color:#374151;line-height:1.7}
.classic-row{display:block;padding:.5rem 0;color:#1f2937;text-decoration:none}
.classic-row .row-label{display:inline-block;min-width:5rem;color:#6b7280}
.classic-save{display:inline-block;margin-top:1.5rem;padding:.75rem 1.5rem;border-radius:.375rem;background:var(--classic-primary);color:#fff;text-decoration:none}
.classic-social{display:flex;gap:.75rem;margin-top:1.5rem}
.classic-social a{color:#1f2937}
.classic-links{display:flex;flex-direction:column;gap:.5rem;margin-top:1.5rem}
.classic-link{display:flex;justify-content:space-between;padding:.75rem 1rem;border:1px solid #e5e7eb;border-radius:.375rem;color:#1f2937;text-decoration:none}
</style>"#;

/// Accepts hex colors and plain color names; anything else falls back.
fn theme_color<'a>(value: Option<&'a str>, fallback: &'a str) -> &'a str {
    match non_blank(value).map(str::trim) {
        Some(color)
            if color.len() <= 32
                && color
                    .chars()
                    .enumerate()
                    .all(|(i, c)| c.is_ascii_alphanumeric() || (i == 0 && c == '#')) =>
        {
            color
        }
        _ => fallback,
    }
}

pub fn render(view: &CardView<'_>) -> String {
    let card = view.card;
    let primary = theme_color(card.theme_primary.as_deref(), DEFAULT_PRIMARY);
    let secondary = theme_color(card.theme_secondary.as_deref(), DEFAULT_SECONDARY);
    let actions = contact_actions(card);

    let mut html = String::from(STYLE);
    html.push_str(&format!(
        r#"<main class="classic" style="--classic-primary:{};--classic-secondary:{}"><article class="classic-card">"#,
        primary, secondary
    ));
    html.push_str(r#"<aside class="classic-side">"#);
    html.push_str(&avatar(card, "classic-avatar"));
    html.push_str(&format!(
        r#"<h1 class="classic-name">{}</h1>"#,
        escape(&card.full_name)
    ));
    html.push_str(&optional_text("p", "classic-title", card.title.as_deref()));
    html.push_str(&optional_text("p", "classic-company", card.company.as_deref()));

    let quick: Vec<_> = actions
        .iter()
        .filter(|a| matches!(a.kind, ActionKind::Email | ActionKind::Phone | ActionKind::Website))
        .collect();
    if !quick.is_empty() {
        html.push_str(r#"<div class="classic-quick">"#);
        for action in quick {
            let class = format!("action-{}", action.kind.css());
            html.push_str(&anchor(&action.href, &class, action.label, action.external));
        }
        html.push_str("</div>");
    }
    html.push_str("</aside>");

    html.push_str(r#"<section class="classic-main">"#);
    if let Some(logo) = company_logo(card, "classic-logo") {
        html.push_str(&logo);
    }
    if let Some(bio) = non_blank(card.bio.as_deref()) {
        html.push_str(&format!(
            r#"<h2>About</h2><p class="classic-bio">{}</p>"#,
            escape(bio)
        ));
    }

    let details: Vec<_> = actions
        .iter()
        .filter(|a| a.kind != ActionKind::WhatsApp)
        .collect();
    if !details.is_empty() {
        html.push_str("<h2>Contact Information</h2>");
        for action in details {
            let body = format!(
                r#"<span class="row-label">{}</span>{}"#,
                action.label,
                escape(&action.display)
            );
            let class = format!("classic-row action-{}", action.kind.css());
            html.push_str(&anchor(&action.href, &class, &body, action.external));
        }
    }

    let mut socials = social_actions(card);
    socials.extend(
        actions
            .iter()
            .filter(|a| a.kind == ActionKind::WhatsApp)
            .cloned(),
    );
    if !socials.is_empty() {
        html.push_str(r#"<div class="classic-social">"#);
        for social in &socials {
            let class = format!("action-{}", social.kind.css());
            html.push_str(&anchor(&social.href, &class, social.label, true));
        }
        html.push_str("</div>");
    }

    html.push_str(&links_section(view, "classic-links", "classic-link"));
    html.push_str(&save_contact_button(view, "classic-save"));
    html.push_str("</section></article></main>");
    html
}

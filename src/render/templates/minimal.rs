//! Text-first layout: contact details are listed with their stored values.

use super::{
    avatar, contact_actions, links_section, optional_text, save_contact_button, social_actions,
    ActionKind, CardView,
};
use crate::render::html::{anchor, escape};

const STYLE: &str = r#"<style>
.minimal{min-height:100vh;display:flex;justify-content:center;padding:3rem 1rem;background:#fff;color:#111827;font-family:ui-sans-serif,system-ui,sans-serif;font-weight:300}
.minimal-card{width:100%;max-width:32rem}
.minimal-profile{display:flex;align-items:center;gap:1.5rem}
.minimal-avatar{width:5rem;height:5rem;border-radius:999px;object-fit:cover;background:#f3f4f6;display:flex;align-items:center;justify-content:center;font-size:1.5rem;color:#6b7280}
.minimal-name{font-size:1.875rem;font-weight:300;margin:0}
.minimal-title,.minimal-company{margin:.25rem 0 0;color:#6b7280}
.minimal-bio{margin-top:2rem;color:#4b5563;line-height:1.7}
.minimal-contact{margin-top:2rem;border-top:1px solid #f3f4f6}
.minimal-row{display:flex;justify-content:space-between;padding:1rem 0;border-bottom:1px solid #f3f4f6;color:#111827;text-decoration:none}
.minimal-row .row-label{color:#9ca3af;font-size:.75rem;text-transform:uppercase;letter-spacing:.1em}
.minimal-save{display:inline-block;margin-top:2rem;padding:.75rem 1.5rem;border:1px solid #111827;border-radius:.75rem;color:#111827;text-decoration:none}
.minimal-social{display:flex;gap:1.5rem;margin-top:2rem}
.minimal-social a{color:#6b7280;text-decoration:none}
.minimal-links{margin-top:2rem;display:flex;flex-direction:column}
.minimal-link{display:flex;justify-content:space-between;padding:.75rem 0;color:#111827;text-decoration:none;border-bottom:1px solid #f3f4f6}
</style>"#;

pub fn render(view: &CardView<'_>) -> String {
    let card = view.card;
    let mut html = String::from(STYLE);

    html.push_str(r#"<main class="minimal"><article class="minimal-card">"#);
    html.push_str(r#"<header class="minimal-profile">"#);
    html.push_str(&avatar(card, "minimal-avatar"));
    html.push_str(&format!(
        r#"<div><h1 class="minimal-name">{}</h1>"#,
        escape(&card.full_name)
    ));
    html.push_str(&optional_text("p", "minimal-title", card.title.as_deref()));
    html.push_str(&optional_text("p", "minimal-company", card.company.as_deref()));
    html.push_str("</div></header>");
    html.push_str(&optional_text("p", "minimal-bio", card.bio.as_deref()));

    let (details, chat): (Vec<_>, Vec<_>) = contact_actions(card)
        .into_iter()
        .partition(|action| action.kind != ActionKind::WhatsApp);

    if !details.is_empty() {
        html.push_str(r#"<section class="minimal-contact">"#);
        for action in &details {
            let body = format!(
                r#"<span class="row-label">{}</span><span>{}</span>"#,
                action.label,
                escape(&action.display)
            );
            let class = format!("minimal-row action-{}", action.kind.css());
            html.push_str(&anchor(&action.href, &class, &body, action.external));
        }
        html.push_str("</section>");
    }

    html.push_str(&save_contact_button(view, "minimal-save"));

    let socials: Vec<_> = social_actions(card).into_iter().chain(chat).collect();
    if !socials.is_empty() {
        html.push_str(r#"<div class="minimal-social">"#);
        for social in &socials {
            let label = if social.kind == ActionKind::WhatsApp {
                "WhatsApp"
            } else {
                social.label
            };
            let class = format!("action-{}", social.kind.css());
            html.push_str(&anchor(&social.href, &class, label, true));
        }
        html.push_str("</div>");
    }

    html.push_str(&links_section(view, "minimal-links", "minimal-link"));
    html.push_str("</article></main>");
    html
}

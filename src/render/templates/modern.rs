//! Default layout: gradient header, rotated avatar tile and a four-up action grid.

use super::{
    avatar, contact_actions, links_section, optional_text, save_contact_button, social_actions,
    CardView,
};
use crate::render::html::{anchor, escape};
use crate::utils::format::non_blank;

const STYLE: &str = r#"<style>
.modern{min-height:100vh;display:flex;align-items:center;justify-content:center;padding:2rem 1rem;background:#f9fafb;font-family:system-ui,sans-serif}
.modern-card{width:100%;max-width:28rem;background:#fff;border-radius:2.5rem;box-shadow:0 25px 50px -12px rgba(76,29,149,.15);overflow:hidden}
.modern-header{height:12rem;background:linear-gradient(135deg,#7c3aed,#9333ea,#c026d3)}
.modern-body{padding:0 2rem 2rem;margin-top:-5rem;display:flex;flex-direction:column;align-items:center}
.modern-avatar{width:8rem;height:8rem;border-radius:1rem;border:6px solid #fff;transform:rotate(3deg);object-fit:cover;background:linear-gradient(135deg,#ede9fe,#fae8ff);display:flex;align-items:center;justify-content:center;font-size:2.25rem;font-weight:700;color:#7c3aed}
.modern-name{margin:1.5rem 0 .5rem;font-size:1.5rem;font-weight:700;color:#111827;text-align:center}
.modern-title{color:#7c3aed;background:#f5f3ff;padding:.25rem .75rem;border-radius:999px;font-size:.875rem;margin:0}
.modern-company{color:#6b7280;font-size:.875rem;margin:.5rem 0 0}
.modern-bio{color:#4b5563;font-size:.875rem;line-height:1.6;text-align:center;max-width:20rem;margin:1rem auto 0}
.modern-actions{display:grid;grid-template-columns:repeat(4,1fr);gap:.75rem;width:100%;margin-top:2rem}
.modern-action{display:flex;flex-direction:column;align-items:center;padding:.75rem;border-radius:1rem;background:#f9fafb;color:#6b7280;font-size:.625rem;font-weight:600;text-transform:uppercase;text-decoration:none}
.modern-save{display:block;width:100%;margin-top:1.5rem;padding:1rem 0;text-align:center;border-radius:1rem;background:#111827;color:#fff;font-weight:700;text-decoration:none}
.modern-social{display:flex;gap:1rem;margin-top:2rem}
.modern-social a{padding:.75rem;border-radius:999px;background:#f9fafb;color:#4b5563;text-decoration:none}
.modern-links{width:100%;margin-top:2rem;display:flex;flex-direction:column;gap:.75rem}
.modern-link{display:flex;justify-content:space-between;padding:1rem;border-radius:1rem;border:1px solid #f3f4f6;color:#374151;text-decoration:none}
.modern-footer{margin-top:2rem;opacity:.3;font-size:.75rem;letter-spacing:.1em;text-transform:uppercase}
</style>"#;

pub fn render(view: &CardView<'_>) -> String {
    let card = view.card;
    let mut html = String::from(STYLE);

    html.push_str(r#"<main class="modern"><article class="modern-card">"#);
    html.push_str(r#"<div class="modern-header"></div><div class="modern-body">"#);
    html.push_str(&avatar(card, "modern-avatar"));
    html.push_str(&format!(
        r#"<h1 class="modern-name">{}</h1>"#,
        escape(&card.full_name)
    ));
    html.push_str(&optional_text("p", "modern-title", card.title.as_deref()));
    html.push_str(&optional_text("p", "modern-company", card.company.as_deref()));
    if let Some(bio) = non_blank(card.bio.as_deref()) {
        html.push_str(&format!(r#"<p class="modern-bio">{}</p>"#, escape(bio)));
    }

    let actions = contact_actions(card);
    if !actions.is_empty() {
        html.push_str(r#"<div class="modern-actions">"#);
        for action in &actions {
            let class = format!("modern-action action-{}", action.kind.css());
            html.push_str(&anchor(&action.href, &class, action.label, action.external));
        }
        html.push_str("</div>");
    }

    html.push_str(&save_contact_button(view, "modern-save"));

    let socials = social_actions(card);
    if !socials.is_empty() {
        html.push_str(r#"<div class="modern-social">"#);
        for social in &socials {
            let class = format!("action-{}", social.kind.css());
            html.push_str(&anchor(&social.href, &class, social.label, true));
        }
        html.push_str("</div>");
    }

    html.push_str(&links_section(view, "modern-links", "modern-link"));
    html.push_str(r#"<footer class="modern-footer">Virtual Card</footer>"#);
    html.push_str("</div></article></main>");
    html
}

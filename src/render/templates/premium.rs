//! Glass-panel layout with a two-column action grid and a details footer.

use super::{
    avatar, company_logo, contact_actions, links_section, optional_text, save_contact_button,
    social_actions, ActionKind, CardView,
};
use crate::render::html::{anchor, escape};

const STYLE: &str = r#"<style>
.premium{min-height:100vh;display:flex;align-items:center;justify-content:center;padding:1rem;background:radial-gradient(circle at 0 0,rgba(253,186,116,.25),transparent 40%),radial-gradient(circle at 100% 0,rgba(216,180,254,.25),transparent 40%),#f8fafc;font-family:system-ui,sans-serif}
.premium-card{width:100%;max-width:28rem;padding:2rem;border-radius:2.5rem;background:rgba(255,255,255,.7);border:1px solid rgba(255,255,255,.6);box-shadow:0 8px 30px rgba(0,0,0,.04);text-align:center}
.premium-logo{height:3rem;margin:0 auto 1.5rem;display:block}
.premium-avatar{width:7rem;height:7rem;margin:0 auto;border-radius:999px;border:4px solid #fff;object-fit:cover;background:linear-gradient(135deg,#fed7aa,#f97316);color:#fff;display:flex;align-items:center;justify-content:center;font-size:2rem;font-weight:700}
.premium-name{font-size:1.875rem;font-weight:700;color:#111827;margin:1.25rem 0 .25rem}
.premium-title{color:#6b7280;margin:0}
.premium-company{display:inline-block;margin:.75rem 0 0;padding:.25rem .75rem;border-radius:999px;background:#fff7ed;color:#c2410c;font-size:.75rem;font-weight:600}
.premium-bio{color:#4b5563;font-size:.875rem;line-height:1.6;margin:1rem auto 0;max-width:20rem}
.premium-actions{display:grid;grid-template-columns:1fr 1fr;gap:.75rem;margin-top:1.5rem}
.premium-action{display:flex;align-items:center;justify-content:center;height:3.5rem;border-radius:1rem;background:#fff;border:1px solid #f3f4f6;color:#1f2937;font-weight:600;text-decoration:none}
.premium-save{display:flex;align-items:center;justify-content:center;height:3.5rem;margin-top:.75rem;border-radius:1rem;background:#111827;color:#fff;font-weight:700;text-decoration:none}
.premium-details{margin-top:1.5rem;padding-top:1.5rem;border-top:1px solid #f3f4f6}
.premium-detail-phone{color:#111827;font-weight:600}
.premium-detail-email{color:#374151}
.premium-detail-website{color:#ea580c;font-weight:600}
.premium-links{display:flex;flex-direction:column;gap:.75rem;margin-top:1rem}
.premium-link{display:flex;justify-content:space-between;padding:.75rem;border-radius:.75rem;background:rgba(255,255,255,.5);color:#374151;text-decoration:none}
.premium-social{display:flex;justify-content:center;gap:1rem;margin-top:1.25rem}
.premium-social a{color:#6b7280}
</style>"#;

fn action_label(kind: ActionKind) -> &'static str {
    match kind {
        ActionKind::Phone => "Call",
        ActionKind::WhatsApp => "WhatsApp",
        ActionKind::Email => "Email",
        ActionKind::Website => "Website",
        ActionKind::Instagram => "Instagram",
        ActionKind::Facebook => "Facebook",
    }
}

/// Call first, then WhatsApp, Email, Website.
fn action_rank(kind: ActionKind) -> u8 {
    match kind {
        ActionKind::Phone => 0,
        ActionKind::WhatsApp => 1,
        ActionKind::Email => 2,
        ActionKind::Website => 3,
        ActionKind::Instagram => 4,
        ActionKind::Facebook => 5,
    }
}

pub fn render(view: &CardView<'_>) -> String {
    let card = view.card;
    let mut html = String::from(STYLE);

    html.push_str(r#"<main class="premium"><article class="premium-card">"#);
    if let Some(logo) = company_logo(card, "premium-logo") {
        html.push_str(&logo);
    }
    html.push_str(&avatar(card, "premium-avatar"));
    html.push_str(&format!(
        r#"<h1 class="premium-name">{}</h1>"#,
        escape(&card.full_name)
    ));
    html.push_str(&optional_text("p", "premium-title", card.title.as_deref()));
    html.push_str(&optional_text("p", "premium-company", card.company.as_deref()));
    html.push_str(&optional_text("p", "premium-bio", card.bio.as_deref()));

    let mut actions = contact_actions(card);
    actions.sort_by_key(|a| action_rank(a.kind));
    if !actions.is_empty() {
        html.push_str(r#"<div class="premium-actions">"#);
        for action in &actions {
            let class = format!("premium-action action-{}", action.kind.css());
            html.push_str(&anchor(
                &action.href,
                &class,
                action_label(action.kind),
                action.external,
            ));
        }
        html.push_str("</div>");
    }

    html.push_str(&save_contact_button(view, "premium-save"));

    let details: Vec<_> = actions
        .iter()
        .filter(|a| matches!(a.kind, ActionKind::Phone | ActionKind::Email | ActionKind::Website))
        .collect();
    let links = links_section(view, "premium-links", "premium-link");
    if !details.is_empty() || !links.is_empty() {
        html.push_str(r#"<footer class="premium-details">"#);
        for detail in details {
            html.push_str(&format!(
                r#"<p class="premium-detail-{}">{}</p>"#,
                detail.kind.css(),
                escape(&detail.display)
            ));
        }
        html.push_str(&links);
        html.push_str("</footer>");
    }

    let socials = social_actions(card);
    if !socials.is_empty() {
        html.push_str(r#"<div class="premium-social">"#);
        for social in &socials {
            let class = format!("action-{}", social.kind.css());
            html.push_str(&anchor(&social.href, &class, social.label, true));
        }
        html.push_str("</div>");
    }

    html.push_str("</article></main>");
    html
}

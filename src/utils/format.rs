//! Small formatting helpers shared by the renderers and the vCard builder.

/// Returns the value when it holds something other than whitespace.
pub fn non_blank(value: Option<&str>) -> Option<&str> {
    value.filter(|v| !v.trim().is_empty())
}

/// Prefixes `https://` when the stored value lacks an `http(s)://` scheme.
pub fn create_valid_url(url: Option<&str>) -> Option<String> {
    let url = non_blank(url)?.trim();

    if url.starts_with("http://") || url.starts_with("https://") {
        Some(url.to_string())
    } else {
        Some(format!("https://{}", url))
    }
}

/// Keeps digits and a single leading `+`.
pub fn sanitize_phone(phone: &str) -> String {
    let mut cleaned = String::with_capacity(phone.len());
    for c in phone.chars() {
        if c.is_ascii_digit() {
            cleaned.push(c);
        } else if c == '+' && cleaned.is_empty() {
            cleaned.push(c);
        }
    }

    if cleaned == "+" {
        String::new()
    } else {
        cleaned
    }
}

fn sanitized(phone: Option<&str>) -> Option<String> {
    let cleaned = sanitize_phone(non_blank(phone)?);
    (!cleaned.is_empty()).then_some(cleaned)
}

pub fn format_phone_link(phone: Option<&str>) -> Option<String> {
    sanitized(phone).map(|p| format!("tel:{}", p))
}

pub fn create_whatsapp_link(phone: Option<&str>) -> Option<String> {
    sanitized(phone).map(|p| format!("https://wa.me/{}", p))
}

/// First letter of each whitespace-separated token, uppercased, at most two characters.
pub fn initials(name: &str) -> String {
    name.split_whitespace()
        .filter_map(|part| part.chars().next())
        .flat_map(char::to_uppercase)
        .take(2)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_create_valid_url() {
        assert_eq!(
            create_valid_url(Some("example.com")).as_deref(),
            Some("https://example.com")
        );
        assert_eq!(
            create_valid_url(Some("https://example.com")).as_deref(),
            Some("https://example.com")
        );
        assert_eq!(
            create_valid_url(Some("http://example.com/a")).as_deref(),
            Some("http://example.com/a")
        );
        assert_eq!(create_valid_url(Some("   ")), None);
        assert_eq!(create_valid_url(None), None);
    }

    #[test]
    fn test_sanitize_phone() {
        assert_eq!(sanitize_phone("+1 (555) 123-4567"), "+15551234567");
        assert_eq!(sanitize_phone("555.123+4567"), "5551234567");
        assert_eq!(sanitize_phone("+"), "");
        assert_eq!(sanitize_phone("ext."), "");
    }

    #[test]
    fn test_phone_and_whatsapp_links() {
        assert_eq!(
            format_phone_link(Some("+44 20 7946 0958")).as_deref(),
            Some("tel:+442079460958")
        );
        assert_eq!(format_phone_link(Some("n/a")), None);
        assert_eq!(
            create_whatsapp_link(Some("+62 812-3456-789")).as_deref(),
            Some("https://wa.me/+628123456789")
        );
        assert_eq!(create_whatsapp_link(None), None);
    }

    #[test]
    fn test_initials() {
        assert_eq!(initials("Ada Lovelace"), "AL");
        assert_eq!(initials("Madonna"), "M");
        assert_eq!(initials("grace  brewster murray hopper"), "GB");
        assert_eq!(initials(""), "");
    }
}

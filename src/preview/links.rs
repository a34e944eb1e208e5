use url::Url;

use crate::{core::codec::uri_component_encode, model::profile::Profile};

const FALLBACK_THEME_COLOR: &str = "#3b82f6";

fn digits(text: &str) -> String {
    text.chars().filter(char::is_ascii_digit).collect()
}

/// Current page address with `shared=true` set, fragment kept. An existing
/// `shared` parameter is overwritten where it stands; repeats are dropped.
pub fn share_url(href: &str) -> anyhow::Result<String> {
    let mut url = Url::parse(href)?;
    let mut seen = false;
    let mut pairs: Vec<(String, String)> = Vec::new();
    for (k, v) in url.query_pairs() {
        if k != "shared" {
            pairs.push((k.into_owned(), v.into_owned()));
        } else if !seen {
            seen = true;
            pairs.push(("shared".to_string(), "true".to_string()));
        }
    }
    if !seen {
        pairs.push(("shared".to_string(), "true".to_string()));
    }
    url.query_pairs_mut().clear().extend_pairs(pairs);
    Ok(url.to_string())
}

/// Text a scannable code for the card should carry.
pub fn qr_payload(href: &str) -> anyhow::Result<String> {
    share_url(href)
}

pub fn share_title(profile: &Profile) -> String {
    format!("{} - {}", profile.name, profile.title)
}

pub fn share_text(profile: &Profile) -> String {
    format!(
        "Check out my digital business card: {}, {} at {}",
        profile.name, profile.title, profile.company
    )
}

pub fn whatsapp_link(profile: &Profile) -> Option<String> {
    if profile.whatsapp.is_empty() {
        return None;
    }
    Some(format!("https://wa.me/{}", digits(&profile.whatsapp)))
}

/// Deep link that opens a WhatsApp chat with `phone` prefilled with the
/// card link.
pub fn whatsapp_share_link(country_code: &str, phone: &str, share_url: &str) -> Option<String> {
    if phone.is_empty() {
        return None;
    }
    let number = format!("{}{}", country_code.replace('+', ""), digits(phone));
    let text = format!("Hello! Check out my digital visiting card: {share_url}");
    Some(format!(
        "https://wa.me/{number}?text={}",
        uri_component_encode(&text)
    ))
}

pub fn phone_link(profile: &Profile) -> String {
    format!("tel:{}", profile.phone)
}

pub fn email_link(profile: &Profile) -> String {
    format!("mailto:{}", profile.email)
}

pub fn maps_link(profile: &Profile) -> String {
    format!(
        "https://maps.google.com/?q={}",
        uri_component_encode(&profile.address)
    )
}

pub fn avatar_url(profile: &Profile) -> String {
    if !profile.avatar_url.is_empty() {
        return profile.avatar_url.clone();
    }
    let name = if profile.name.is_empty() {
        "A"
    } else {
        profile.name.as_str()
    };
    format!(
        "https://ui-avatars.com/api/?name={}&background=random&size=150",
        uri_component_encode(name)
    )
}

pub fn theme_color(profile: &Profile) -> &str {
    if profile.theme_color.is_empty() {
        FALLBACK_THEME_COLOR
    } else {
        &profile.theme_color
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_share_url_keeps_fragment() -> anyhow::Result<()> {
        assert_eq!(
            share_url("http://localhost:3000/#abc=")?,
            "http://localhost:3000/?shared=true#abc="
        );
        assert_eq!(
            share_url("http://localhost:3000/?shared=false&x=1#abc")?,
            "http://localhost:3000/?shared=true&x=1#abc"
        );
        assert_eq!(
            share_url("http://localhost:3000/?x=1&shared=0&y=2&shared=1")?,
            "http://localhost:3000/?x=1&shared=true&y=2"
        );
        assert_eq!(
            share_url("http://localhost:3000/?x=1")?,
            "http://localhost:3000/?x=1&shared=true"
        );
        assert_eq!(qr_payload("http://localhost:3000/")?, "http://localhost:3000/?shared=true");
        Ok(())
    }

    #[test]
    fn test_whatsapp_links() {
        let profile = Profile::default();
        assert_eq!(
            whatsapp_link(&profile).as_deref(),
            Some("https://wa.me/15551234567")
        );
        let no_whatsapp = Profile {
            whatsapp: String::new(),
            ..Profile::default()
        };
        assert_eq!(whatsapp_link(&no_whatsapp), None);

        assert_eq!(
            whatsapp_share_link("+91", "98765 43210", "http://x/#t").as_deref(),
            Some("https://wa.me/919876543210?text=Hello!%20Check%20out%20my%20digital%20visiting%20card%3A%20http%3A%2F%2Fx%2F%23t")
        );
        assert_eq!(whatsapp_share_link("+91", "", "http://x/"), None);
    }

    #[test]
    fn test_contact_links() {
        let profile = Profile::default();
        assert_eq!(phone_link(&profile), "tel:+1 (555) 123-4567");
        assert_eq!(email_link(&profile), "mailto:alex.morgan@example.com");
        assert_eq!(
            maps_link(&profile),
            "https://maps.google.com/?q=San%20Francisco%2C%20CA"
        );
    }

    #[test]
    fn test_share_copy() {
        let profile = Profile::default();
        assert_eq!(share_title(&profile), "Alex Morgan - Senior Product Designer");
        assert_eq!(
            share_text(&profile),
            "Check out my digital business card: Alex Morgan, Senior Product Designer at Design Studio Inc."
        );
    }

    #[test]
    fn test_avatar_and_theme_fallbacks() {
        let profile = Profile::default();
        assert_eq!(
            avatar_url(&profile),
            "https://ui-avatars.com/api/?name=Alex%20Morgan&background=random&size=150"
        );
        assert_eq!(theme_color(&profile), "#0ea5e9");

        let blank = Profile {
            name: String::new(),
            avatar_url: String::new(),
            theme_color: String::new(),
            ..Profile::default()
        };
        assert_eq!(
            avatar_url(&blank),
            "https://ui-avatars.com/api/?name=A&background=random&size=150"
        );
        assert_eq!(theme_color(&blank), "#3b82f6");

        let custom = Profile {
            avatar_url: "https://img/me.png".to_string(),
            ..Profile::default()
        };
        assert_eq!(avatar_url(&custom), "https://img/me.png");
    }
}

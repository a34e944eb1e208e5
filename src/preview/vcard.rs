use crate::model::profile::Profile;

/// Escape a TEXT value (RFC 2426 §4).
fn escape_text(value: &str) -> String {
    let mut out = String::with_capacity(value.len());
    for c in value.chars() {
        match c {
            '\\' => out.push_str("\\\\"),
            ';' => out.push_str("\\;"),
            ',' => out.push_str("\\,"),
            '\n' => out.push_str("\\n"),
            '\r' => {}
            _ => out.push(c),
        }
    }
    out
}

/// URI values are not TEXT escaped, so line breaks and other controls are
/// dropped to keep the value on one content line.
fn single_line(value: &str) -> String {
    value.chars().filter(|c| !c.is_control()).collect()
}

/// Downloadable contact card, vCard 3.0 with CRLF line endings.
pub fn vcard(profile: &Profile) -> String {
    let lines = [
        "BEGIN:VCARD".to_string(),
        "VERSION:3.0".to_string(),
        format!("FN:{}", escape_text(&profile.name)),
        format!("ORG:{}", escape_text(&profile.company)),
        format!("TITLE:{}", escape_text(&profile.title)),
        format!("TEL;TYPE=WORK,VOICE:{}", escape_text(&profile.phone)),
        format!("TEL;TYPE=CELL,VOICE:{}", escape_text(&profile.whatsapp)),
        format!("EMAIL;TYPE=PREF,INTERNET:{}", escape_text(&profile.email)),
        format!("URL:{}", single_line(&profile.website)),
        format!("NOTE:{}", escape_text(&profile.bio)),
        "END:VCARD".to_string(),
    ];
    let mut card = lines.join("\r\n");
    card.push_str("\r\n");
    card
}

/// File name for the exported card. Path separators and control characters
/// become `_`, so the result is always a single path component.
pub fn vcard_file_name(profile: &Profile) -> String {
    let stem: String = profile
        .name
        .split_whitespace()
        .collect::<Vec<_>>()
        .join("_")
        .chars()
        .map(|c| match c {
            '/' | '\\' | ':' => '_',
            c if c.is_control() => '_',
            c => c,
        })
        .collect();
    if stem.chars().all(|c| c == '.') {
        return "contact.vcf".to_string();
    }
    format!("{stem}.vcf")
}

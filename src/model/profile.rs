use serde::{Deserialize, Serialize};

/// Storage key the profile is persisted under unless configured otherwise.
pub const STORAGE_KEY: &str = "visitingCardProfile";

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Service {
    pub id: String,
    pub title: String,
    pub description: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub price: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image_url: Option<String>,
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MediaType {
    #[default]
    Image,
    Video,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct GalleryItem {
    pub id: String,
    pub url: String,
    #[serde(rename = "type")]
    pub media_type: MediaType,
}

/// Everything shown on one card. Always complete: consumers never see a
/// partially populated profile.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Profile {
    pub name: String,
    pub title: String,
    pub company: String,
    pub bio: String,
    pub email: String,
    pub phone: String,
    pub whatsapp: String,
    pub website: String,
    pub address: String,
    pub linkedin: String,
    pub twitter: String,
    pub instagram: String,
    pub youtube: String,
    pub facebook: String,
    pub avatar_url: String,
    pub cover_url: String,
    pub theme_color: String,
    pub services: Vec<Service>,
    pub gallery: Vec<GalleryItem>,
}

impl Default for Profile {
    /// The placeholder card shown on first visit.
    fn default() -> Self {
        Self {
            name: "Alex Morgan".to_string(),
            title: "Senior Product Designer".to_string(),
            company: "Design Studio Inc.".to_string(),
            bio: "Passionate about creating intuitive and beautiful user experiences. Let's build something amazing together.".to_string(),
            email: "alex.morgan@example.com".to_string(),
            phone: "+1 (555) 123-4567".to_string(),
            whatsapp: "+15551234567".to_string(),
            website: "https://alexmorgan.design".to_string(),
            address: "San Francisco, CA".to_string(),
            linkedin: "https://linkedin.com/in/alexmorgan".to_string(),
            twitter: "https://twitter.com/alexmorgan".to_string(),
            instagram: "https://instagram.com/alexmorgan".to_string(),
            youtube: "https://youtube.com/c/alexmorgan".to_string(),
            facebook: "https://facebook.com/alexmorgan".to_string(),
            avatar_url: String::new(),
            cover_url: String::new(),
            theme_color: "#0ea5e9".to_string(),
            services: vec![
                Service {
                    id: "1".to_string(),
                    title: "UI/UX Design".to_string(),
                    description: "Complete user interface and experience design for web and mobile applications.".to_string(),
                    price: Some("$150/hr".to_string()),
                    image_url: Some("https://picsum.photos/seed/design/400/300".to_string()),
                },
                Service {
                    id: "2".to_string(),
                    title: "Brand Identity".to_string(),
                    description: "Logo design, color palettes, and comprehensive brand guidelines.".to_string(),
                    price: Some("$2000".to_string()),
                    image_url: Some("https://picsum.photos/seed/brand/400/300".to_string()),
                },
            ],
            gallery: (1..=3)
                .map(|i| GalleryItem {
                    id: i.to_string(),
                    url: format!("https://picsum.photos/seed/g{i}/800/600"),
                    media_type: MediaType::Image,
                })
                .collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    #[test]
    fn test_default_profile_shape() {
        let profile = Profile::default();
        assert_eq!(profile.name, "Alex Morgan");
        assert_eq!(profile.theme_color, "#0ea5e9");
        assert_eq!(profile.services.len(), 2);
        assert_eq!(profile.gallery.len(), 3);
        assert!(profile
            .gallery
            .iter()
            .all(|item| item.media_type == MediaType::Image));
    }

    #[test]
    fn test_wire_field_names() {
        let profile = Profile::default();
        let value = serde_json::to_value(&profile).unwrap();
        assert_eq!(value["themeColor"], json!("#0ea5e9"));
        assert_eq!(value["avatarUrl"], json!(""));
        assert_eq!(value["services"][0]["imageUrl"], json!("https://picsum.photos/seed/design/400/300"));
        assert_eq!(value["gallery"][2]["type"], json!("image"));
        assert!(value.get("avatar_url").is_none());
    }

    #[test]
    fn test_service_optional_fields_omitted() {
        let service = Service {
            id: "9".to_string(),
            title: "Consulting".to_string(),
            description: String::new(),
            price: None,
            image_url: None,
        };
        let value = serde_json::to_value(&service).unwrap();
        assert!(value.get("price").is_none());
        assert!(value.get("imageUrl").is_none());
        let back: Service = serde_json::from_value(value).unwrap();
        assert_eq!(back, service);
    }

    #[test]
    fn test_video_gallery_item() {
        let item: GalleryItem =
            serde_json::from_value(json!({"id": "v", "url": "https://x/y.mp4", "type": "video"}))
                .unwrap();
        assert_eq!(item.media_type, MediaType::Video);
    }
}

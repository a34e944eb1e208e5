use std::{fmt, str::FromStr};

use anyhow::bail;
use uuid::Uuid;

use crate::model::profile::{GalleryItem, MediaType, Profile, Service};

/// Scalar fields of a [`Profile`] that the editor can set directly.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ProfileField {
    Name,
    Title,
    Company,
    Bio,
    Email,
    Phone,
    Whatsapp,
    Website,
    Address,
    Linkedin,
    Twitter,
    Instagram,
    Youtube,
    Facebook,
    AvatarUrl,
    CoverUrl,
    ThemeColor,
}

impl ProfileField {
    pub const ALL: [ProfileField; 17] = [
        ProfileField::Name,
        ProfileField::Title,
        ProfileField::Company,
        ProfileField::Bio,
        ProfileField::Email,
        ProfileField::Phone,
        ProfileField::Whatsapp,
        ProfileField::Website,
        ProfileField::Address,
        ProfileField::Linkedin,
        ProfileField::Twitter,
        ProfileField::Instagram,
        ProfileField::Youtube,
        ProfileField::Facebook,
        ProfileField::AvatarUrl,
        ProfileField::CoverUrl,
        ProfileField::ThemeColor,
    ];

    /// camelCase name as used in the serialized profile.
    pub fn wire_name(self) -> &'static str {
        match self {
            ProfileField::Name => "name",
            ProfileField::Title => "title",
            ProfileField::Company => "company",
            ProfileField::Bio => "bio",
            ProfileField::Email => "email",
            ProfileField::Phone => "phone",
            ProfileField::Whatsapp => "whatsapp",
            ProfileField::Website => "website",
            ProfileField::Address => "address",
            ProfileField::Linkedin => "linkedin",
            ProfileField::Twitter => "twitter",
            ProfileField::Instagram => "instagram",
            ProfileField::Youtube => "youtube",
            ProfileField::Facebook => "facebook",
            ProfileField::AvatarUrl => "avatarUrl",
            ProfileField::CoverUrl => "coverUrl",
            ProfileField::ThemeColor => "themeColor",
        }
    }

    pub fn get(self, profile: &Profile) -> &str {
        match self {
            ProfileField::Name => &profile.name,
            ProfileField::Title => &profile.title,
            ProfileField::Company => &profile.company,
            ProfileField::Bio => &profile.bio,
            ProfileField::Email => &profile.email,
            ProfileField::Phone => &profile.phone,
            ProfileField::Whatsapp => &profile.whatsapp,
            ProfileField::Website => &profile.website,
            ProfileField::Address => &profile.address,
            ProfileField::Linkedin => &profile.linkedin,
            ProfileField::Twitter => &profile.twitter,
            ProfileField::Instagram => &profile.instagram,
            ProfileField::Youtube => &profile.youtube,
            ProfileField::Facebook => &profile.facebook,
            ProfileField::AvatarUrl => &profile.avatar_url,
            ProfileField::CoverUrl => &profile.cover_url,
            ProfileField::ThemeColor => &profile.theme_color,
        }
    }

    fn slot(self, profile: &mut Profile) -> &mut String {
        match self {
            ProfileField::Name => &mut profile.name,
            ProfileField::Title => &mut profile.title,
            ProfileField::Company => &mut profile.company,
            ProfileField::Bio => &mut profile.bio,
            ProfileField::Email => &mut profile.email,
            ProfileField::Phone => &mut profile.phone,
            ProfileField::Whatsapp => &mut profile.whatsapp,
            ProfileField::Website => &mut profile.website,
            ProfileField::Address => &mut profile.address,
            ProfileField::Linkedin => &mut profile.linkedin,
            ProfileField::Twitter => &mut profile.twitter,
            ProfileField::Instagram => &mut profile.instagram,
            ProfileField::Youtube => &mut profile.youtube,
            ProfileField::Facebook => &mut profile.facebook,
            ProfileField::AvatarUrl => &mut profile.avatar_url,
            ProfileField::CoverUrl => &mut profile.cover_url,
            ProfileField::ThemeColor => &mut profile.theme_color,
        }
    }
}

/// Lowercase and drop `_`/`-` so `avatarUrl`, `avatar_url` and
/// `avatar-url` all compare equal.
fn normalize(name: &str) -> String {
    name.chars()
        .filter(|c| *c != '_' && *c != '-')
        .flat_map(char::to_lowercase)
        .collect()
}

impl FromStr for ProfileField {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = normalize(s);
        match ProfileField::ALL
            .into_iter()
            .find(|field| normalize(field.wire_name()) == wanted)
        {
            Some(field) => Ok(field),
            None => bail!("unknown profile field: {s}"),
        }
    }
}

impl fmt::Display for ProfileField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.wire_name())
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ServiceField {
    Title,
    Description,
    Price,
    ImageUrl,
}

impl FromStr for ServiceField {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match normalize(s).as_str() {
            "title" => Ok(ServiceField::Title),
            "description" => Ok(ServiceField::Description),
            "price" => Ok(ServiceField::Price),
            "imageurl" => Ok(ServiceField::ImageUrl),
            _ => bail!("unknown service field: {s}"),
        }
    }
}

/// Time-ordered id for a newly created service or gallery item.
pub fn new_item_id() -> String {
    Uuid::now_v7().to_string()
}

pub fn set_field(profile: &Profile, field: ProfileField, value: &str) -> Profile {
    let mut next = profile.clone();
    *field.slot(&mut next) = value.to_string();
    next
}

pub fn add_service(profile: &Profile) -> Profile {
    let mut next = profile.clone();
    next.services.push(Service {
        id: new_item_id(),
        title: String::new(),
        description: String::new(),
        price: Some(String::new()),
        image_url: Some(String::new()),
    });
    next
}

pub fn update_service(profile: &Profile, id: &str, field: ServiceField, value: &str) -> Profile {
    let mut next = profile.clone();
    for service in next.services.iter_mut().filter(|s| s.id == id) {
        let value = value.to_string();
        match field {
            ServiceField::Title => service.title = value,
            ServiceField::Description => service.description = value,
            ServiceField::Price => service.price = Some(value),
            ServiceField::ImageUrl => service.image_url = Some(value),
        }
    }
    next
}

pub fn remove_service(profile: &Profile, id: &str) -> Profile {
    let mut next = profile.clone();
    next.services.retain(|s| s.id != id);
    next
}

pub fn add_gallery_item(profile: &Profile) -> Profile {
    let mut next = profile.clone();
    next.gallery.push(GalleryItem {
        id: new_item_id(),
        url: String::new(),
        media_type: MediaType::Image,
    });
    next
}

pub fn update_gallery_item(profile: &Profile, id: &str, url: &str) -> Profile {
    let mut next = profile.clone();
    for item in next.gallery.iter_mut().filter(|g| g.id == id) {
        item.url = url.to_string();
    }
    next
}

pub fn remove_gallery_item(profile: &Profile, id: &str) -> Profile {
    let mut next = profile.clone();
    next.gallery.retain(|g| g.id != id);
    next
}

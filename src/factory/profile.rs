use fake::{
    faker::{
        address::en::CityName, company::en::CompanyName, internet::en::SafeEmail,
        job::en::Title, lorem::en::Sentence, name::en::Name, phone_number::en::PhoneNumber,
    },
    Dummy, Fake, Faker,
};
use uuid::Uuid;

use crate::model::profile::{GalleryItem, MediaType, Profile, Service};

pub struct ProfileFactory<T: Clone> {
    modifier_one: fn(x: &Profile, ext: T) -> Profile,
    modifier_many: fn(x: &Profile, idx: usize, ext: T) -> Profile,
}

impl<T: Clone> Default for ProfileFactory<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Clone> ProfileFactory<T> {
    pub fn new() -> Self {
        Self {
            modifier_one: |x, _| x.clone(),
            modifier_many: |x, _, _| x.clone(),
        }
    }

    pub fn modified_one(&mut self, modifier: fn(x: &Profile, ext: T) -> Profile) {
        self.modifier_one = modifier
    }

    pub fn modified_many(&mut self, modifier: fn(x: &Profile, idx: usize, ext: T) -> Profile) {
        self.modifier_many = modifier
    }

    pub fn generate_one(&self, ext: T) -> Profile {
        let data = Faker.fake::<ProfileDummy>().into_profile();
        (self.modifier_one)(&data, ext)
    }

    pub fn generate_many(&self, num: u32, ext: T) -> Vec<Profile> {
        let mut result: Vec<Profile> = vec![];
        for idx in 0..num as usize {
            let data = Faker.fake::<ProfileDummy>().into_profile();
            result.push((self.modifier_many)(&data, idx, ext.clone()));
        }
        result
    }
}

#[derive(Debug, Dummy, Clone)]
struct ServiceDummy {
    pub id: Uuid,
    #[dummy(faker = "Title()")]
    pub title: String,
    #[dummy(faker = "Sentence(3..12)")]
    pub description: String,
    pub price: Option<String>,
    pub image_url: Option<String>,
}

#[derive(Debug, Dummy, Clone)]
struct GalleryItemDummy {
    pub id: Uuid,
    pub url: String,
    pub is_video: bool,
}

#[derive(Debug, Dummy, Clone)]
struct ProfileDummy {
    #[dummy(faker = "Name()")]
    pub name: String,
    #[dummy(faker = "Title()")]
    pub title: String,
    #[dummy(faker = "CompanyName()")]
    pub company: String,
    #[dummy(faker = "Sentence(5..20)")]
    pub bio: String,
    #[dummy(faker = "SafeEmail()")]
    pub email: String,
    #[dummy(faker = "PhoneNumber()")]
    pub phone: String,
    #[dummy(faker = "PhoneNumber()")]
    pub whatsapp: String,
    pub website: String,
    #[dummy(faker = "CityName()")]
    pub address: String,
    pub linkedin: String,
    pub twitter: String,
    pub instagram: String,
    pub youtube: String,
    pub facebook: String,
    pub avatar_url: String,
    pub cover_url: String,
    pub theme_color: String,
    #[dummy(faker = "(Faker, 0..4)")]
    pub services: Vec<ServiceDummy>,
    #[dummy(faker = "(Faker, 0..6)")]
    pub gallery: Vec<GalleryItemDummy>,
}

impl ProfileDummy {
    fn into_profile(self) -> Profile {
        Profile {
            name: self.name,
            title: self.title,
            company: self.company,
            bio: self.bio,
            email: self.email,
            phone: self.phone,
            whatsapp: self.whatsapp,
            website: self.website,
            address: self.address,
            linkedin: self.linkedin,
            twitter: self.twitter,
            instagram: self.instagram,
            youtube: self.youtube,
            facebook: self.facebook,
            avatar_url: self.avatar_url,
            cover_url: self.cover_url,
            theme_color: self.theme_color,
            services: self
                .services
                .into_iter()
                .map(|s| Service {
                    id: s.id.to_string(),
                    title: s.title,
                    description: s.description,
                    price: s.price,
                    image_url: s.image_url,
                })
                .collect(),
            gallery: self
                .gallery
                .into_iter()
                .map(|g| GalleryItem {
                    id: g.id.to_string(),
                    url: g.url,
                    media_type: if g.is_video {
                        MediaType::Video
                    } else {
                        MediaType::Image
                    },
                })
                .collect(),
        }
    }
}

use std::{fs, path::Path};

use anyhow::{bail, Context};

use crate::{
    core::{
        codec::decode_fragment,
        editor::{self, ProfileField, ServiceField},
        location::{Location, PageLocation},
        storage::Storage,
        store::ProfileStore,
        sync::SyncOutcome,
    },
    preview::{
        links,
        qr::{self, QrFormat},
        vcard,
    },
};

fn report(outcome: SyncOutcome) {
    if !outcome.stored {
        eprintln!("warning: profile could not be saved to storage");
    }
    if !outcome.fragment_replaced {
        eprintln!("warning: share link could not be updated");
    }
}

/// Page the session runs under: `base_url`, then `url` followed from it when
/// given, so a bare `#token` opens a shared card on the configured host.
pub fn open_location(base_url: &str, url: Option<&str>) -> anyhow::Result<PageLocation> {
    let mut location = PageLocation::parse(base_url)?;
    if let Some(url) = url {
        location
            .navigate(url)
            .with_context(|| format!("invalid url {url}"))?;
    }
    Ok(location)
}

pub fn show<S: Storage, L: Location>(store: &ProfileStore<S, L>) -> anyhow::Result<String> {
    Ok(serde_json::to_string_pretty(store.get())?)
}

pub fn set_field<S: Storage, L: Location>(
    store: &mut ProfileStore<S, L>,
    field: &str,
    value: &str,
) -> anyhow::Result<()> {
    let field: ProfileField = field.parse()?;
    report(store.update(|p| editor::set_field(p, field, value)));
    Ok(())
}

pub struct NewService<'a> {
    pub title: &'a str,
    pub description: &'a str,
    pub price: Option<&'a str>,
    pub image_url: Option<&'a str>,
}

/// Append a service and fill it in with one replacement. Returns the new id.
pub fn add_service<S: Storage, L: Location>(
    store: &mut ProfileStore<S, L>,
    service: NewService<'_>,
) -> anyhow::Result<String> {
    let mut next = editor::add_service(store.get());
    let id = next
        .services
        .last()
        .map(|s| s.id.clone())
        .context("service was not appended")?;
    next = editor::update_service(&next, &id, ServiceField::Title, service.title);
    next = editor::update_service(&next, &id, ServiceField::Description, service.description);
    if let Some(price) = service.price {
        next = editor::update_service(&next, &id, ServiceField::Price, price);
    }
    if let Some(image_url) = service.image_url {
        next = editor::update_service(&next, &id, ServiceField::ImageUrl, image_url);
    }
    report(store.replace(next));
    Ok(id)
}

pub fn update_service<S: Storage, L: Location>(
    store: &mut ProfileStore<S, L>,
    id: &str,
    field: &str,
    value: &str,
) -> anyhow::Result<()> {
    let field: ServiceField = field.parse()?;
    if !store.get().services.iter().any(|s| s.id == id) {
        bail!("no service with id {id}");
    }
    report(store.update(|p| editor::update_service(p, id, field, value)));
    Ok(())
}

pub fn remove_service<S: Storage, L: Location>(
    store: &mut ProfileStore<S, L>,
    id: &str,
) -> anyhow::Result<()> {
    if !store.get().services.iter().any(|s| s.id == id) {
        bail!("no service with id {id}");
    }
    report(store.update(|p| editor::remove_service(p, id)));
    Ok(())
}

pub fn add_gallery_item<S: Storage, L: Location>(
    store: &mut ProfileStore<S, L>,
    url: &str,
) -> anyhow::Result<String> {
    let mut next = editor::add_gallery_item(store.get());
    let id = next
        .gallery
        .last()
        .map(|g| g.id.clone())
        .context("gallery item was not appended")?;
    next = editor::update_gallery_item(&next, &id, url);
    report(store.replace(next));
    Ok(id)
}

pub fn update_gallery_item<S: Storage, L: Location>(
    store: &mut ProfileStore<S, L>,
    id: &str,
    url: &str,
) -> anyhow::Result<()> {
    if !store.get().gallery.iter().any(|g| g.id == id) {
        bail!("no gallery item with id {id}");
    }
    report(store.update(|p| editor::update_gallery_item(p, id, url)));
    Ok(())
}

pub fn remove_gallery_item<S: Storage, L: Location>(
    store: &mut ProfileStore<S, L>,
    id: &str,
) -> anyhow::Result<()> {
    if !store.get().gallery.iter().any(|g| g.id == id) {
        bail!("no gallery item with id {id}");
    }
    report(store.update(|p| editor::remove_gallery_item(p, id)));
    Ok(())
}

pub fn share_link<S: Storage, L: Location>(store: &ProfileStore<S, L>) -> anyhow::Result<String> {
    links::share_url(&store.location().href())
}

/// Scannable code for the share link.
pub fn share_qr<S: Storage, L: Location>(
    store: &ProfileStore<S, L>,
    format: QrFormat,
) -> anyhow::Result<String> {
    qr::render_share_qr(&store.location().href(), format)
}

pub fn whatsapp_share<S: Storage, L: Location>(
    store: &ProfileStore<S, L>,
    country_code: &str,
    phone: &str,
) -> anyhow::Result<String> {
    let url = share_link(store)?;
    links::whatsapp_share_link(country_code, phone, &url).context("a phone number is required")
}

/// Write the vCard into `dir`, named after the profile. Returns the path.
/// The file name is a single component, so the card never lands outside `dir`.
pub fn export_vcard<S: Storage, L: Location>(
    store: &ProfileStore<S, L>,
    dir: &Path,
) -> anyhow::Result<String> {
    let profile = store.get();
    let path = dir.join(vcard::vcard_file_name(profile));
    fs::write(&path, vcard::vcard(profile))
        .with_context(|| format!("write {}", path.display()))?;
    Ok(path.display().to_string())
}

pub fn decode(token: &str) -> anyhow::Result<String> {
    let token = match token.split_once('#') {
        Some((_, fragment)) => fragment,
        None => token,
    };
    let profile = decode_fragment(token)?;
    Ok(serde_json::to_string_pretty(&profile)?)
}

#[cfg(test)]
mod tests {
    use tempfile::TempDir;

    use super::*;
    use crate::{
        core::{codec::encode_fragment, loader::LoadSource, storage::MemoryStorage},
        model::mode::Mode,
        model::profile::{Profile, STORAGE_KEY},
    };

    fn open() -> anyhow::Result<ProfileStore<MemoryStorage, PageLocation>> {
        Ok(ProfileStore::open(
            MemoryStorage::new(),
            PageLocation::parse("http://localhost:3000/")?,
            STORAGE_KEY,
        ))
    }

    #[test]
    fn test_open_location_follows_url() -> anyhow::Result<()> {
        let base = "http://localhost:3000/";
        assert_eq!(open_location(base, None)?.href(), base);
        assert_eq!(
            open_location(base, Some("https://card.example/me"))?.href(),
            "https://card.example/me"
        );

        // Given
        let shared = Profile {
            name: "Jordan Lee".to_string(),
            ..Profile::default()
        };
        let token = encode_fragment(&shared)?;

        // When
        let location = open_location(base, Some(&format!("#{token}")))?;
        let store = ProfileStore::open(MemoryStorage::new(), location, STORAGE_KEY);

        // Expect
        assert_eq!(store.source(), LoadSource::Fragment);
        assert_eq!(store.mode(), Mode::Preview);
        assert_eq!(store.get(), &shared);
        assert!(store.location().href().starts_with("http://localhost:3000/#"));
        Ok(())
    }

    #[test]
    fn test_set_field_by_name() -> anyhow::Result<()> {
        let mut store = open()?;
        set_field(&mut store, "theme_color", "#111111")?;
        assert_eq!(store.get().theme_color, "#111111");
        assert!(set_field(&mut store, "services", "x").is_err());
        Ok(())
    }

    #[test]
    fn test_service_commands() -> anyhow::Result<()> {
        // Given
        let mut store = open()?;

        // When
        let id = add_service(
            &mut store,
            NewService {
                title: "Workshops",
                description: "Team design sprints.",
                price: None,
                image_url: Some("https://img/w.png"),
            },
        )?;
        update_service(&mut store, &id, "price", "$900")?;
        remove_service(&mut store, "1")?;

        // Expect
        let services = &store.get().services;
        assert_eq!(services.len(), 2);
        assert_eq!(services[0].id, "2");
        assert_eq!(services[1].id, id);
        assert_eq!(services[1].title, "Workshops");
        assert_eq!(services[1].price.as_deref(), Some("$900"));
        assert_eq!(services[1].image_url.as_deref(), Some("https://img/w.png"));
        assert!(update_service(&mut store, "missing", "title", "x").is_err());
        assert!(remove_service(&mut store, "missing").is_err());
        Ok(())
    }

    #[test]
    fn test_gallery_commands() -> anyhow::Result<()> {
        let mut store = open()?;
        let id = add_gallery_item(&mut store, "https://picsum.photos/seed/g4/800/600")?;
        update_gallery_item(&mut store, "1", "https://picsum.photos/seed/g0/800/600")?;
        remove_gallery_item(&mut store, "2")?;

        let urls: Vec<&str> = store.get().gallery.iter().map(|g| g.url.as_str()).collect();
        assert_eq!(
            urls,
            vec![
                "https://picsum.photos/seed/g0/800/600",
                "https://picsum.photos/seed/g3/800/600",
                "https://picsum.photos/seed/g4/800/600",
            ]
        );
        assert_eq!(store.get().gallery[2].id, id);
        assert!(remove_gallery_item(&mut store, "missing").is_err());
        Ok(())
    }

    #[test]
    fn test_share_link_decodes_back() -> anyhow::Result<()> {
        let mut store = open()?;
        set_field(&mut store, "name", "Jordan Lee")?;

        let link = share_link(&store)?;
        assert!(link.starts_with("http://localhost:3000/?shared=true#"));
        let decoded: Profile = serde_json::from_str(&decode(&link)?)?;
        assert_eq!(&decoded, store.get());
        Ok(())
    }

    #[test]
    fn test_share_qr_encodes_share_link() -> anyhow::Result<()> {
        let mut store = open()?;
        set_field(&mut store, "name", "Jordan Lee")?;

        let drawn = share_qr(&store, QrFormat::Text)?;
        assert!(!drawn.trim().is_empty());
        assert_eq!(drawn, qr::render(&share_link(&store)?, QrFormat::Text)?);
        assert!(share_qr(&store, QrFormat::Svg)?.contains("<svg"));
        Ok(())
    }

    #[test]
    fn test_whatsapp_share_requires_phone() -> anyhow::Result<()> {
        let store = open()?;
        assert!(whatsapp_share(&store, "+91", "").is_err());
        let link = whatsapp_share(&store, "+91", "9876543210")?;
        assert!(link.starts_with("https://wa.me/919876543210?text=Hello!"));
        Ok(())
    }

    #[test]
    fn test_export_vcard() -> anyhow::Result<()> {
        let dir = TempDir::new()?;
        let store = open()?;
        let path = export_vcard(&store, dir.path())?;
        assert!(path.ends_with("Alex_Morgan.vcf"));
        let content = fs::read_to_string(&path)?;
        assert!(content.starts_with("BEGIN:VCARD\r\nVERSION:3.0\r\nFN:Alex Morgan\r\n"));
        Ok(())
    }

    #[test]
    fn test_export_vcard_stays_in_out_dir() -> anyhow::Result<()> {
        // Given
        let root = TempDir::new()?;
        let out_dir = root.path().join("out");
        fs::create_dir(&out_dir)?;
        let mut store = open()?;
        set_field(&mut store, "name", "../escaped")?;

        // When
        let path = export_vcard(&store, &out_dir)?;

        // Expect
        assert_eq!(Path::new(&path).parent(), Some(out_dir.as_path()));
        assert!(!root.path().join("escaped.vcf").exists());
        assert_eq!(fs::read_dir(&out_dir)?.count(), 1);
        Ok(())
    }

    #[test]
    fn test_show_is_wire_json() -> anyhow::Result<()> {
        let store = open()?;
        let shown = show(&store)?;
        assert!(shown.contains("\"themeColor\": \"#0ea5e9\""));
        Ok(())
    }
}

use tracing::{debug, warn};

use crate::{
    core::{
        codec::{decode_fragment, from_json},
        location::Location,
        storage::Storage,
    },
    model::{mode::Mode, profile::Profile},
};

/// Where the initial profile of a session came from.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum LoadSource {
    Fragment,
    Storage,
    Default,
}

#[derive(Clone, Debug)]
pub struct Loaded {
    pub profile: Profile,
    pub mode: Mode,
    pub source: LoadSource,
}

/// Resolve the initial profile: URL fragment, then stored value, then the
/// built-in default. Never fails; bad input only moves it down the chain.
pub fn load_profile<S, L>(storage: &mut S, location: &L, key: &str) -> Loaded
where
    S: Storage + ?Sized,
    L: Location + ?Sized,
{
    if let Some(fragment) = location.fragment() {
        match decode_fragment(&fragment) {
            Ok(profile) => {
                debug!("loaded profile from url fragment");
                return Loaded {
                    profile,
                    mode: Mode::Preview,
                    source: LoadSource::Fragment,
                };
            }
            Err(err) => warn!("failed to parse profile from url: {err}"),
        }
    }

    match storage.get_item(key) {
        Ok(Some(saved)) => match from_json(&saved) {
            Ok(profile) => {
                debug!("loaded profile from storage key {key}");
                return Loaded {
                    profile,
                    mode: Mode::Edit,
                    source: LoadSource::Storage,
                };
            }
            Err(err) => warn!("failed to parse stored profile {key}: {err}"),
        },
        Ok(None) => {}
        Err(err) => warn!("failed to read stored profile {key}: {err:#}"),
    }

    debug!("using default profile");
    Loaded {
        profile: Profile::default(),
        mode: Mode::Edit,
        source: LoadSource::Default,
    }
}

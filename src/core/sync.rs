use tracing::{debug, error};

use crate::{
    core::{
        codec::{encode_fragment, to_json},
        loader::{load_profile, Loaded},
        location::Location,
        storage::Storage,
    },
    model::profile::Profile,
};

/// Result of one synchronization pass. Both writes are always attempted.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct SyncOutcome {
    pub stored: bool,
    pub fragment_replaced: bool,
}

impl SyncOutcome {
    pub fn is_complete(&self) -> bool {
        self.stored && self.fragment_replaced
    }
}

/// Mirrors the current profile into storage and the page fragment.
pub struct Synchronizer<S: Storage, L: Location> {
    storage: S,
    location: L,
    key: String,
}

impl<S: Storage, L: Location> Synchronizer<S, L> {
    pub fn new(storage: S, location: L, key: impl Into<String>) -> Self {
        Self {
            storage,
            location,
            key: key.into(),
        }
    }

    pub fn storage(&self) -> &S {
        &self.storage
    }

    pub fn location(&self) -> &L {
        &self.location
    }

    pub fn key(&self) -> &str {
        &self.key
    }

    pub fn into_parts(self) -> (S, L) {
        (self.storage, self.location)
    }

    pub(crate) fn load(&mut self) -> Loaded {
        load_profile(&mut self.storage, &self.location, &self.key)
    }

    pub fn sync(&mut self, profile: &Profile) -> SyncOutcome {
        let stored = match to_json(profile) {
            Ok(json) => match self.storage.set_item(&self.key, &json) {
                Ok(()) => true,
                Err(err) => {
                    error!("failed to store profile under {}: {err:#}", self.key);
                    false
                }
            },
            Err(err) => {
                error!("failed to serialize profile for storage: {err}");
                false
            }
        };

        let fragment_replaced = match encode_fragment(profile) {
            Ok(token) => {
                self.location.replace_fragment(&token);
                true
            }
            Err(err) => {
                error!("failed to encode profile for url: {err}");
                false
            }
        };

        let outcome = SyncOutcome {
            stored,
            fragment_replaced,
        };
        debug!("synchronized profile: {outcome:?}");
        outcome
    }
}

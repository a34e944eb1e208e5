use tracing::info;

use crate::{
    core::{
        loader::LoadSource,
        location::Location,
        storage::Storage,
        sync::{SyncOutcome, Synchronizer},
    },
    model::{mode::Mode, profile::Profile},
};

pub type Subscriber = Box<dyn FnMut(&Profile)>;

/// Owns the current profile of a session.
///
/// Every [`ProfileStore::replace`] stores the new value, runs the
/// [`Synchronizer`] and then notifies subscribers, all before returning.
pub struct ProfileStore<S: Storage, L: Location> {
    profile: Profile,
    mode: Mode,
    source: LoadSource,
    sync: Synchronizer<S, L>,
    subscribers: Vec<Subscriber>,
}

impl<S: Storage, L: Location> ProfileStore<S, L> {
    /// Load the initial profile and synchronize it once.
    pub fn open(storage: S, location: L, key: impl Into<String>) -> Self {
        let mut sync = Synchronizer::new(storage, location, key);
        let loaded = sync.load();
        info!(
            "opened profile store from {:?} in {} mode",
            loaded.source, loaded.mode
        );
        sync.sync(&loaded.profile);
        Self {
            profile: loaded.profile,
            mode: loaded.mode,
            source: loaded.source,
            sync,
            subscribers: vec![],
        }
    }

    pub fn get(&self) -> &Profile {
        &self.profile
    }

    /// Swap in a complete new profile. No validation is done here.
    pub fn replace(&mut self, profile: Profile) -> SyncOutcome {
        self.profile = profile;
        let outcome = self.sync.sync(&self.profile);
        for subscriber in self.subscribers.iter_mut() {
            subscriber(&self.profile);
        }
        outcome
    }

    /// Build the replacement from the current value, then [`replace`](Self::replace).
    pub fn update<F>(&mut self, edit: F) -> SyncOutcome
    where
        F: FnOnce(&Profile) -> Profile,
    {
        let next = edit(&self.profile);
        self.replace(next)
    }

    pub fn subscribe<F>(&mut self, subscriber: F)
    where
        F: FnMut(&Profile) + 'static,
    {
        self.subscribers.push(Box::new(subscriber));
    }

    pub fn mode(&self) -> Mode {
        self.mode
    }

    pub fn set_mode(&mut self, mode: Mode) {
        self.mode = mode;
    }

    pub fn toggle_mode(&mut self) -> Mode {
        self.mode = self.mode.toggle();
        self.mode
    }

    pub fn source(&self) -> LoadSource {
        self.source
    }

    pub fn synchronizer(&self) -> &Synchronizer<S, L> {
        &self.sync
    }

    pub fn location(&self) -> &L {
        self.sync.location()
    }

    pub fn storage(&self) -> &S {
        self.sync.storage()
    }

    pub fn into_parts(self) -> (Profile, S, L) {
        let (storage, location) = self.sync.into_parts();
        (self.profile, storage, location)
    }
}

use std::{
    collections::HashMap,
    fs,
    io::ErrorKind,
    path::{Path, PathBuf},
};

use anyhow::Context;
use redis::ConnectionLike;
use tracing::info;

use crate::settings::{Config, StorageBackend};

/// Local key/value persistence for a session.
pub trait Storage {
    fn get_item(&mut self, key: &str) -> anyhow::Result<Option<String>>;
    fn set_item(&mut self, key: &str, value: &str) -> anyhow::Result<()>;
}

impl<T: Storage + ?Sized> Storage for Box<T> {
    fn get_item(&mut self, key: &str) -> anyhow::Result<Option<String>> {
        (**self).get_item(key)
    }

    fn set_item(&mut self, key: &str, value: &str) -> anyhow::Result<()> {
        (**self).set_item(key, value)
    }
}

#[derive(Debug, Default, Clone)]
pub struct MemoryStorage {
    items: HashMap<String, String>,
}

impl MemoryStorage {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_item(key: &str, value: &str) -> Self {
        let mut storage = Self::new();
        storage.items.insert(key.to_string(), value.to_string());
        storage
    }

    pub fn peek(&self, key: &str) -> Option<&str> {
        self.items.get(key).map(String::as_str)
    }
}

impl Storage for MemoryStorage {
    fn get_item(&mut self, key: &str) -> anyhow::Result<Option<String>> {
        Ok(self.items.get(key).cloned())
    }

    fn set_item(&mut self, key: &str, value: &str) -> anyhow::Result<()> {
        self.items.insert(key.to_string(), value.to_string());
        Ok(())
    }
}

/// One `<key>.json` file per key under a directory.
#[derive(Debug, Clone)]
pub struct FileStorage {
    dir: PathBuf,
}

impl FileStorage {
    pub fn new(dir: impl AsRef<Path>) -> Self {
        Self {
            dir: dir.as_ref().to_path_buf(),
        }
    }

    fn path_for(&self, key: &str) -> PathBuf {
        self.dir.join(format!("{key}.json"))
    }
}

impl Storage for FileStorage {
    fn get_item(&mut self, key: &str) -> anyhow::Result<Option<String>> {
        let path = self.path_for(key);
        match fs::read_to_string(&path) {
            Ok(content) => Ok(Some(content)),
            Err(err) if err.kind() == ErrorKind::NotFound => Ok(None),
            Err(err) => Err(err).with_context(|| format!("read {}", path.display())),
        }
    }

    fn set_item(&mut self, key: &str, value: &str) -> anyhow::Result<()> {
        fs::create_dir_all(&self.dir)
            .with_context(|| format!("create storage dir {}", self.dir.display()))?;
        let path = self.path_for(key);
        // write to a sibling file first so a failed write never truncates the old value
        let tmp = path.with_extension("json.tmp");
        fs::write(&tmp, value).with_context(|| format!("write {}", tmp.display()))?;
        fs::rename(&tmp, &path).with_context(|| format!("rename to {}", path.display()))?;
        Ok(())
    }
}

pub fn get_redis_connection(redis_url: &str) -> anyhow::Result<redis::Connection> {
    let client = redis::Client::open(redis_url)?;
    let con = client.get_connection()?;
    Ok(con)
}

pub struct RedisStorage<C: ConnectionLike> {
    conn: C,
}

impl<C: ConnectionLike> RedisStorage<C> {
    pub fn new(conn: C) -> Self {
        Self { conn }
    }
}

impl<C: ConnectionLike> Storage for RedisStorage<C> {
    fn get_item(&mut self, key: &str) -> anyhow::Result<Option<String>> {
        let res: Option<String> = redis::cmd("get").arg(key).query(&mut self.conn)?;
        Ok(res)
    }

    fn set_item(&mut self, key: &str, value: &str) -> anyhow::Result<()> {
        redis::cmd("set").arg(key).arg(value).exec(&mut self.conn)?;
        Ok(())
    }
}

/// Build the storage backend selected in the config.
pub fn open_storage(config: &Config) -> anyhow::Result<Box<dyn Storage>> {
    match config.storage_backend {
        StorageBackend::File => {
            info!("using file storage in {}", config.storage_dir);
            Ok(Box::new(FileStorage::new(&config.storage_dir)))
        }
        StorageBackend::Redis => {
            let redis_url = config
                .redis_url
                .as_deref()
                .context("redis_url is required for the redis storage backend")?;
            info!("using redis storage on {redis_url}");
            Ok(Box::new(RedisStorage::new(get_redis_connection(redis_url)?)))
        }
        StorageBackend::Memory => {
            info!("using in-memory storage, nothing will persist");
            Ok(Box::new(MemoryStorage::new()))
        }
    }
}

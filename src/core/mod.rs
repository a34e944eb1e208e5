pub mod codec;
pub mod editor;
pub mod loader;
pub mod location;
pub mod storage;
pub mod store;
pub mod sync;

//! Shared key-value store constructor for all platforms.
//!
//! Returns a [`store::KeyValueStore`] backed by:
//! - **Web** (WASM + `web` feature): `window.localStorage` via [`store::LocalStorage`]
//! - **Native**: one process-wide [`store::MemoryStore`]

/// Create the platform-appropriate store.
pub fn make_storage() -> impl store::KeyValueStore + Clone + 'static {
    #[cfg(all(target_arch = "wasm32", feature = "web"))]
    {
        store::LocalStorage::new()
    }
    #[cfg(not(all(target_arch = "wasm32", feature = "web")))]
    {
        static MEMORY: std::sync::OnceLock<store::MemoryStore> = std::sync::OnceLock::new();
        MEMORY.get_or_init(store::MemoryStore::new).clone()
    }
}

/// The page's `localStorage`, if the browser allows access to it.
pub fn local_storage() -> Option<web_sys::Storage> {
    web_sys::window()?.local_storage().ok().flatten()
}

/// Read a key, treating storage errors like a missing entry.
pub fn read_storage(key: &str) -> Option<String> {
    local_storage()?.get_item(key).ok().flatten()
}

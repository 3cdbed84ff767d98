use xxhash_rust::const_xxh3::xxh3_64 as const_xxh3_64;

pub const fn command_id_hash(name: &str) -> u64 {
    const_xxh3_64(name.as_bytes())
}

/// Compile-time command ID generator using xxHash3.
///
/// Computes a deterministic `u64` from a command name at **compile time**. The
/// same name yields the same ID on every platform, so executors and invokers
/// built separately agree on routing keys.
///
/// ## Example
///
/// ```rust
/// use cmdwire_service::command_id;
/// let id_1 = command_id!("GetStatus");
/// let id_2 = command_id!("RemovePreset");
/// assert_ne!(id_1, id_2);
/// assert_eq!(id_1, cmdwire_service::command_id_hash("GetStatus"));
/// ```
#[macro_export]
macro_rules! command_id {
    ($name:literal) => {{
        const ID: u64 = $crate::command_id_hash($name);
        ID
    }};
}

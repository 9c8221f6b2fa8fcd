//! Snapshot persistence for the load-mutate-persist cycle.
//!
//! Collections are read once at construction and rewritten in full after
//! every mutation. Failures never cross this boundary: a missing or
//! malformed slot loads as the default value, and write failures are
//! logged and swallowed so a full disk cannot take the widget down.

use serde::Serialize;
use serde::de::DeserializeOwned;
use tracing::warn;

use super::kv::KeyValueStore;

/// Deserialize the snapshot stored under `key`, recovering to the default
/// value when the slot is absent, unreadable or malformed.
pub fn load_or_default<S, T>(store: &S, key: &str) -> T
where
    S: KeyValueStore + ?Sized,
    T: DeserializeOwned + Default,
{
    let raw = match store.get(key) {
        Ok(Some(raw)) => raw,
        Ok(None) => return T::default(),
        Err(err) => {
            warn!(key, error = %err, "could not read durable slot, starting empty");
            return T::default();
        }
    };

    match serde_json::from_str(&raw) {
        Ok(value) => value,
        Err(err) => {
            warn!(key, error = %err, "malformed durable slot, starting empty");
            T::default()
        }
    }
}

/// Serialize `value` and overwrite the slot under `key`.
pub fn persist<S, T>(store: &mut S, key: &str, value: &T)
where
    S: KeyValueStore + ?Sized,
    T: Serialize,
{
    let raw = match serde_json::to_string(value) {
        Ok(raw) => raw,
        Err(err) => {
            warn!(key, error = %err, "could not serialize snapshot");
            return;
        }
    };

    if let Err(err) = store.set(key, &raw) {
        warn!(key, error = %err, "could not write durable slot");
    }
}

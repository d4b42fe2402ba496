//! Associative user-data storage
//!
//! Lets callers attach arbitrary values to a shared object (a Unicode
//! property provider, a face handle) under their own keys. The table is
//! protected by a mutex independent of any reference count on the owner, and
//! value destructors always run after that lock is released, so a destructor
//! may itself touch the table without deadlocking.

use std::any::Any;
use std::sync::{Arc, Mutex};

/// A user-data key, identified by the address of a static instance.
///
/// ```
/// use scribe_core::UserDataKey;
/// static MY_KEY: UserDataKey = UserDataKey::new();
/// ```
pub struct UserDataKey {
    // Must occupy at least one byte: zero-sized statics may share an
    // address, and the address is the identity.
    _priv: u8,
}

impl UserDataKey {
    pub const fn new() -> Self {
        UserDataKey { _priv: 0 }
    }

    #[inline]
    fn id(&'static self) -> usize {
        self as *const UserDataKey as usize
    }
}

impl Default for UserDataKey {
    fn default() -> Self {
        Self::new()
    }
}

type Value = Arc<dyn Any + Send + Sync>;

fn lock<T>(mutex: &Mutex<T>) -> std::sync::MutexGuard<'_, T> {
    match mutex.lock() {
        Ok(guard) => guard,
        Err(poisoned) => poisoned.into_inner(),
    }
}

/// A mutex-protected side table of (key, value) entries.
#[derive(Default)]
pub struct UserDataTable {
    entries: Mutex<Vec<(usize, Value)>>,
}

impl UserDataTable {
    pub fn new() -> Self {
        Self::default()
    }

    /// Attaches `value` under `key`.
    ///
    /// If the key is already present and `replace` is false, the table is
    /// left untouched and `false` is returned. A replaced value is dropped
    /// outside the table lock.
    pub fn set(&self, key: &'static UserDataKey, value: Value, replace: bool) -> bool {
        let displaced;
        {
            let mut entries = lock(&self.entries);
            match entries.iter_mut().find(|(id, _)| *id == key.id()) {
                Some(slot) => {
                    if !replace {
                        return false;
                    }
                    displaced = Some(std::mem::replace(&mut slot.1, value));
                }
                None => {
                    entries.push((key.id(), value));
                    displaced = None;
                }
            }
        }

        drop(displaced);
        true
    }

    /// Fetches a clone of the value stored under `key`.
    pub fn get(&self, key: &'static UserDataKey) -> Option<Value> {
        let entries = lock(&self.entries);
        entries
            .iter()
            .find(|(id, _)| *id == key.id())
            .map(|(_, v)| Arc::clone(v))
    }

    /// Detaches and returns the value stored under `key`.
    ///
    /// The caller receives ownership; if it drops the value, the destructor
    /// runs with the table lock already released.
    pub fn remove(&self, key: &'static UserDataKey) -> Option<Value> {
        let mut entries = lock(&self.entries);
        let i = entries.iter().position(|(id, _)| *id == key.id())?;
        Some(entries.swap_remove(i).1)
    }
}

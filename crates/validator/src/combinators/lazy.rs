//! LAZY slot - resolve-once storage for a fallibly built value

use std::fmt;
use std::sync::OnceLock;

use parking_lot::Mutex;

/// Holds a value that is built on first use, at most once.
///
/// Unlike a bare `OnceLock`, initialization may fail: a failed attempt
/// stores nothing and the next caller tries again. Concurrent first use is
/// serialized so exactly one initializer runs; the others wait and then see
/// the stored value.
///
/// # Examples
///
/// ```rust
/// use sieve_validator::combinators::Lazy;
///
/// let slot: Lazy<String> = Lazy::new();
/// assert!(slot.get().is_none());
///
/// let failed = slot.get_or_try_init(|| Err::<String, _>("not yet"));
/// assert_eq!(failed, Err("not yet"));
/// assert!(!slot.is_initialized());
///
/// let value = slot.get_or_try_init(|| Ok::<_, &str>("ready".to_owned())).unwrap();
/// assert_eq!(value, "ready");
/// assert!(slot.is_initialized());
/// ```
pub struct Lazy<T> {
    value: OnceLock<T>,
    init_lock: Mutex<()>,
}

impl<T> Lazy<T> {
    /// Creates an empty slot.
    #[must_use]
    pub fn new() -> Self {
        Self {
            value: OnceLock::new(),
            init_lock: Mutex::new(()),
        }
    }

    /// Returns the stored value, if any.
    pub fn get(&self) -> Option<&T> {
        self.value.get()
    }

    /// Returns true if a value has been stored.
    pub fn is_initialized(&self) -> bool {
        self.value.get().is_some()
    }

    /// Returns the stored value, running `init` first if the slot is empty.
    pub fn get_or_try_init<E, F>(&self, init: F) -> Result<&T, E>
    where
        F: FnOnce() -> Result<T, E>,
    {
        if let Some(value) = self.value.get() {
            return Ok(value);
        }

        let _guard = self.init_lock.lock();
        // Another thread may have finished while we waited for the lock.
        if let Some(value) = self.value.get() {
            return Ok(value);
        }

        let value = init()?;
        Ok(self.value.get_or_init(|| value))
    }
}

impl<T> Default for Lazy<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: fmt::Debug> fmt::Debug for Lazy<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Lazy")
            .field("value", &self.value.get())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Arc;
    use std::sync::atomic::{AtomicUsize, Ordering};

    #[test]
    fn not_initialized_before_use() {
        let slot: Lazy<u32> = Lazy::new();
        assert!(!slot.is_initialized());
        assert!(slot.get().is_none());
        assert_eq!(format!("{slot:?}"), "Lazy { value: None }");
    }

    #[test]
    fn initialized_only_once() {
        let calls = AtomicUsize::new(0);
        let slot = Lazy::new();

        for _ in 0..3 {
            let value = slot
                .get_or_try_init(|| {
                    calls.fetch_add(1, Ordering::SeqCst);
                    Ok::<_, ()>(7)
                })
                .unwrap();
            assert_eq!(*value, 7);
        }

        assert_eq!(calls.load(Ordering::SeqCst), 1);
    }

    #[test]
    fn failure_is_not_cached() {
        let calls = AtomicUsize::new(0);
        let slot: Lazy<u32> = Lazy::new();

        for _ in 0..2 {
            let result = slot.get_or_try_init(|| {
                calls.fetch_add(1, Ordering::SeqCst);
                Err("broken")
            });
            assert_eq!(result, Err("broken"));
        }

        assert_eq!(calls.load(Ordering::SeqCst), 2);
        assert!(!slot.is_initialized());
    }

    #[test]
    fn concurrent_first_use_runs_one_initializer() {
        let calls = Arc::new(AtomicUsize::new(0));
        let slot: Lazy<usize> = Lazy::new();

        std::thread::scope(|scope| {
            for _ in 0..8 {
                let calls = Arc::clone(&calls);
                let slot = &slot;
                scope.spawn(move || {
                    let value = slot
                        .get_or_try_init(|| {
                            std::thread::sleep(std::time::Duration::from_millis(5));
                            Ok::<_, ()>(calls.fetch_add(1, Ordering::SeqCst))
                        })
                        .unwrap();
                    assert_eq!(*value, 0);
                });
            }
        });

        assert_eq!(calls.load(Ordering::SeqCst), 1);
    }
}

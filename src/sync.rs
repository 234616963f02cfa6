//! Mutex shim: `std::sync::Mutex` with poisoning ignored, or `spin::Mutex`
//! without `std`.

#[cfg(feature = "std")]
pub struct Mutex<T>(std::sync::Mutex<T>);

#[cfg(feature = "std")]
impl<T> Mutex<T> {
    pub const fn new(value: T) -> Self {
        Self(std::sync::Mutex::new(value))
    }

    /// Locks the mutex. A panic in another holder does not make the game
    /// unusable; the state it left behind is taken as is.
    pub fn lock(&self) -> std::sync::MutexGuard<'_, T> {
        self.0
            .lock()
            .unwrap_or_else(std::sync::PoisonError::into_inner)
    }
}

#[cfg(all(not(feature = "std"), feature = "alloc"))]
pub use spin::Mutex;

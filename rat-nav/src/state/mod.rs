use std::sync::{Arc, RwLock};

use tokio::sync::watch;

/// Anything whose changes can be watched by the render loop.
pub trait Observe {
    fn changes(&self) -> watch::Receiver<()>;
}

/// Single-slot reactive cell: a shared value plus a change channel that
/// fires on every mutation.
pub struct Signal<T> {
    inner: Arc<RwLock<T>>,
    tx: watch::Sender<()>,
}

impl<T> Signal<T> {
    /// Create a new signal holding the given value.
    pub fn new(value: T) -> Self {
        let (tx, _) = watch::channel(());
        Self {
            inner: Arc::new(RwLock::new(value)),
            tx,
        }
    }

    /// Read the slot through a closure.
    pub fn read<F, R>(&self, f: F) -> crate::Result<R>
    where
        F: FnOnce(&T) -> R,
    {
        let guard = self.inner.read().map_err(|_| crate::Error::LockPoisoned)?;
        Ok(f(&guard))
    }

    /// Mutate the slot through a closure and notify subscribers.
    pub fn update<F, R>(&self, f: F) -> crate::Result<R>
    where
        F: FnOnce(&mut T) -> R,
    {
        let mut guard = self.inner.write().map_err(|_| crate::Error::LockPoisoned)?;
        let res = f(&mut guard);
        drop(guard);
        let _ = self.tx.send(());
        Ok(res)
    }

    /// Replace the slot's value and notify subscribers.
    pub fn set(&self, value: T) -> crate::Result<()> {
        self.update(|slot| *slot = value)
    }

    /// Copy the slot's value out.
    pub fn get(&self) -> crate::Result<T>
    where
        T: Clone,
    {
        self.read(|slot| slot.clone())
    }
}

impl<T> Clone for Signal<T> {
    fn clone(&self) -> Self {
        Self {
            inner: Arc::clone(&self.inner),
            tx: self.tx.clone(),
        }
    }
}

impl<T> Observe for Signal<T> {
    fn changes(&self) -> watch::Receiver<()> {
        self.tx.subscribe()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn set_and_get_round_trip() {
        let signal = Signal::new(1u32);
        assert_eq!(signal.get().unwrap(), 1);
        signal.set(5).unwrap();
        assert_eq!(signal.get().unwrap(), 5);
    }

    #[test]
    fn update_mutates_in_place() {
        let signal = Signal::new(vec![1, 2]);
        signal.update(|v| v.push(3)).unwrap();
        assert_eq!(signal.get().unwrap(), vec![1, 2, 3]);
    }

    #[test]
    fn mutation_wakes_subscribers() {
        let signal = Signal::new(0u32);
        let mut rx = signal.changes();
        assert!(!rx.has_changed().unwrap());
        signal.set(1).unwrap();
        assert!(rx.has_changed().unwrap());
    }

    #[test]
    fn clones_share_the_slot() {
        let signal = Signal::new(0u32);
        let mirror = signal.clone();
        mirror.set(7).unwrap();
        assert_eq!(signal.get().unwrap(), 7);
    }
}

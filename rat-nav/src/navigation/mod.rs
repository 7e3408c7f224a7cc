//! Navigation coordinator: owns the current-page slot and mediates
//! transitions between a closed set of page kinds.

use std::collections::HashMap;
use std::fmt;
use std::hash::Hash;
use std::sync::RwLock;

use tokio::sync::watch;
use tracing::debug;

use crate::state::Observe;
use crate::viewmodel::PageHandle;
use crate::{Error, Result};

/// Marker for a page-kind enum. Satisfied automatically by anything the
/// [`define_pages!`](crate::define_pages) macro generates.
pub trait PageKind: Copy + Eq + Hash + fmt::Display + Send + Sync + 'static {}

impl<K> PageKind for K where K: Copy + Eq + Hash + fmt::Display + Send + Sync + 'static {}

type Observer<K> = Box<dyn Fn(K, &PageHandle) + Send + Sync>;

/// How the coordinator obtains the view-model for a kind.
pub enum PageSource<K: PageKind> {
    /// One shared instance per kind, registered up front. A kind missing
    /// from the map is a wiring error.
    Singletons(HashMap<K, PageHandle>),
    /// Build a fresh view-model on every navigation.
    Factory(Box<dyn Fn(K) -> PageHandle + Send + Sync>),
}

impl<K: PageKind> PageSource<K> {
    fn resolve(&self, kind: K) -> Result<PageHandle> {
        match self {
            PageSource::Singletons(pages) => {
                pages.get(&kind).cloned().ok_or_else(|| Error::MissingPage {
                    page: kind.to_string(),
                })
            }
            PageSource::Factory(build) => Ok(build(kind)),
        }
    }
}

/// Owns the current `(kind, view-model)` pair. Observers registered with
/// [`observe`](Navigator::observe) run synchronously inside every
/// navigation, before it returns; the [`Observe`] channel additionally
/// wakes the render loop.
pub struct Navigator<K: PageKind> {
    source: PageSource<K>,
    current: RwLock<(K, PageHandle)>,
    history: RwLock<Vec<K>>,
    observers: RwLock<Vec<Observer<K>>>,
    changed: watch::Sender<()>,
}

impl<K: PageKind> Navigator<K> {
    /// Create a navigator showing `initial`. Resolving the initial page
    /// happens here, so a misregistered kind fails at wiring time.
    pub fn new(source: PageSource<K>, initial: K) -> Result<Self> {
        let first = source.resolve(initial)?;
        let (changed, _) = watch::channel(());
        Ok(Self {
            source,
            current: RwLock::new((initial, first)),
            history: RwLock::new(Vec::new()),
            observers: RwLock::new(Vec::new()),
            changed,
        })
    }

    /// Switch to `kind`. Always reassigns the slot and always notifies,
    /// even when `kind` is already active; with a singleton source that
    /// reinstalls the same instance, with a factory it builds a new one.
    pub fn navigate_to(&self, kind: K) -> Result<()> {
        let handle = self.source.resolve(kind)?;
        let previous = {
            let mut current = self.current.write().map_err(|_| Error::LockPoisoned)?;
            let previous = current.0;
            *current = (kind, handle.clone());
            previous
        };
        self.history
            .write()
            .map_err(|_| Error::LockPoisoned)?
            .push(previous);
        debug!(page = %kind, "navigate");
        self.notify(kind, &handle)
    }

    /// Return to the most recently left page. `Ok(false)` when the
    /// history is empty.
    pub fn back(&self) -> Result<bool> {
        let popped = self.history.write().map_err(|_| Error::LockPoisoned)?.pop();
        let Some(kind) = popped else {
            return Ok(false);
        };
        let handle = self.source.resolve(kind)?;
        {
            let mut current = self.current.write().map_err(|_| Error::LockPoisoned)?;
            *current = (kind, handle.clone());
        }
        debug!(page = %kind, "navigate back");
        self.notify(kind, &handle)?;
        Ok(true)
    }

    fn notify(&self, kind: K, handle: &PageHandle) -> Result<()> {
        let observers = self.observers.read().map_err(|_| Error::LockPoisoned)?;
        for observer in observers.iter() {
            observer(kind, handle);
        }
        drop(observers);
        let _ = self.changed.send(());
        Ok(())
    }

    /// The current `(kind, view-model)` pair.
    pub fn current(&self) -> Result<(K, PageHandle)> {
        let current = self.current.read().map_err(|_| Error::LockPoisoned)?;
        Ok((current.0, current.1.clone()))
    }

    /// The kind of the current page.
    pub fn current_kind(&self) -> Result<K> {
        self.current().map(|(kind, _)| kind)
    }

    /// Whether [`back`](Navigator::back) has anywhere to go.
    pub fn can_go_back(&self) -> bool {
        self.history
            .read()
            .map(|history| !history.is_empty())
            .unwrap_or(false)
    }

    /// Register a callback invoked synchronously on every navigation.
    pub fn observe<F>(&self, observer: F) -> Result<()>
    where
        F: Fn(K, &PageHandle) + Send + Sync + 'static,
    {
        self.observers
            .write()
            .map_err(|_| Error::LockPoisoned)?
            .push(Box::new(observer));
        Ok(())
    }
}

impl<K: PageKind> Observe for Navigator<K> {
    fn changes(&self) -> watch::Receiver<()> {
        self.changed.subscribe()
    }
}

/// Define a closed page-kind enum with Display, a first-variant Default,
/// and an `ALL` listing.
///
/// # Example
/// ```ignore
/// use rat_nav::define_pages;
///
/// define_pages! {
///     pub enum Page {
///         Page1,
///         Page2,
///     }
/// }
///
/// assert_eq!(Page::default(), Page::Page1);
/// assert_eq!(format!("{}", Page::Page2), "Page2");
/// ```
#[macro_export]
macro_rules! define_pages {
    ($vis:vis enum $name:ident { $($page:ident),+ $(,)? }) => {
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
        $vis enum $name {
            $($page),+
        }

        impl $name {
            $vis const ALL: &'static [$name] = &[$($name::$page),+];
        }

        impl std::fmt::Display for $name {
            fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                match self {
                    $($name::$page => write!(f, stringify!($page))),+
                }
            }
        }

        impl Default for $name {
            fn default() -> Self {
                $crate::define_pages!(@first $name, $($page),+)
            }
        }
    };

    // Helper to get the first variant
    (@first $name:ident, $first:ident $(, $rest:ident)*) => {
        $name::$first
    };
}

//! The common capability every page-level view-model provides, so a single
//! current-page slot can hold any page.

use std::sync::{Arc, RwLock};

/// Base trait for page-level presentation state.
///
/// Each page keeps its own attributes private; the trait carries only the
/// surface the hosting window and the views bind to.
pub trait PageViewModel: Send + Sync + 'static {
    /// Conventional type label, e.g. `"Page1ViewModel"`. The view locator
    /// derives the matching view name from it when it has to report a
    /// failed lookup.
    fn name(&self) -> &'static str;

    /// The display string the bound view renders.
    fn text(&self) -> String;

    /// Increment the page's click counter and rewrite the display string.
    fn count(&mut self);
}

/// Shared handle to a page view-model, the slot type used wherever a
/// "current page" is held.
pub type PageHandle = Arc<RwLock<dyn PageViewModel>>;

/// Wrap a concrete view-model into a [`PageHandle`].
pub fn page_handle<V: PageViewModel>(vm: V) -> PageHandle {
    Arc::new(RwLock::new(vm))
}

//! Singleton wiring, assembled once at process start and threaded through
//! constructors. Resolve-only once the run loop starts.

use std::collections::HashMap;
use std::sync::Arc;

use rat_nav::{page_handle, Navigator, PageHandle, PageSource, ViewLocator};

use crate::pages::{Page, Page1View, Page1ViewModel, Page2View, Page2ViewModel};

pub struct Registry {
    pub navigator: Arc<Navigator<Page>>,
    pub views: ViewLocator<Page>,
}

impl Registry {
    pub fn build() -> rat_nav::Result<Self> {
        let pages = Self::view_models();
        let views = Self::views(&pages);
        let navigator = Arc::new(Navigator::new(
            PageSource::Singletons(pages),
            Page::default(),
        )?);
        Ok(Self { navigator, views })
    }

    /// One view-model singleton per page kind.
    fn view_models() -> HashMap<Page, PageHandle> {
        let mut pages: HashMap<Page, PageHandle> = HashMap::new();
        pages.insert(Page::Page1, page_handle(Page1ViewModel::new()));
        pages.insert(Page::Page2, page_handle(Page2ViewModel::new()));
        pages
    }

    /// One view singleton per page kind, each bound to its view-model.
    fn views(pages: &HashMap<Page, PageHandle>) -> ViewLocator<Page> {
        let mut views = ViewLocator::new();
        if let Some(vm) = pages.get(&Page::Page1) {
            views.register_shared(Page::Page1, Page1View::new(vm.clone()));
        }
        if let Some(vm) = pages.get(&Page::Page2) {
            views.register_shared(Page::Page2, Page2View::new(vm.clone()));
        }
        views
    }
}

#[cfg(test)]
mod tests {
    use rat_nav::ResolvedView;

    use super::*;

    #[test]
    fn every_page_kind_is_wired() {
        let registry = Registry::build().unwrap();
        for kind in Page::ALL {
            registry.navigator.navigate_to(*kind).unwrap();
            let (_, vm) = registry.navigator.current().unwrap();
            assert!(matches!(
                registry.views.resolve(*kind, &vm),
                ResolvedView::Shared(_)
            ));
        }
    }
}

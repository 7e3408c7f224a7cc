//! View resolution: an explicit, closed mapping from page kind to the
//! visual that presents it, with a never-failing placeholder fallback.

use std::collections::HashMap;
use std::sync::{Arc, Mutex};

use ratatui::layout::{Alignment, Rect};
use ratatui::widgets::Paragraph;
use ratatui::Frame;
use tracing::warn;

use crate::component::{Action, Event, View};
use crate::navigation::PageKind;
use crate::viewmodel::{PageHandle, PageViewModel};

/// A view shared by registration, handed out to whoever renders the page.
pub type SharedView = Arc<Mutex<dyn View>>;

type ViewCtor = Box<dyn Fn(&PageHandle) -> Box<dyn View> + Send + Sync>;

/// Fixed naming convention mapping a view-model label to its view label.
pub fn view_name(vm_name: &str) -> String {
    vm_name.replace("ViewModel", "View")
}

/// Maps each page kind to the visual presenting it. Registered shared
/// instances win over constructors; a kind with neither degrades to a
/// placeholder naming the view that was looked for.
pub struct ViewLocator<K: PageKind> {
    shared: HashMap<K, SharedView>,
    constructors: HashMap<K, ViewCtor>,
}

impl<K: PageKind> ViewLocator<K> {
    pub fn new() -> Self {
        Self {
            shared: HashMap::new(),
            constructors: HashMap::new(),
        }
    }

    /// Register a shared view instance for `kind`.
    pub fn register_shared<V: View>(&mut self, kind: K, view: V) {
        self.shared.insert(kind, Arc::new(Mutex::new(view)));
    }

    /// Register a constructor building a view bound to the given
    /// view-model, used when no shared instance exists for `kind`.
    pub fn register<F>(&mut self, kind: K, ctor: F)
    where
        F: Fn(&PageHandle) -> Box<dyn View> + Send + Sync + 'static,
    {
        self.constructors.insert(kind, Box::new(ctor));
    }

    /// Resolve the visual for the active page. Never fails: an unmapped
    /// kind yields the diagnostic placeholder.
    pub fn resolve(&self, kind: K, vm: &PageHandle) -> ResolvedView {
        if let Some(view) = self.shared.get(&kind) {
            return ResolvedView::Shared(view.clone());
        }
        if let Some(ctor) = self.constructors.get(&kind) {
            return ResolvedView::Owned(ctor(vm));
        }
        let wanted = match vm.read() {
            Ok(guard) => view_name(guard.name()),
            Err(_) => format!("{kind}View"),
        };
        warn!(page = %kind, view = %wanted, "no view registered, using placeholder");
        ResolvedView::Missing(NotFoundView::new(wanted))
    }
}

/// Outcome of a locator lookup.
pub enum ResolvedView {
    /// The shared instance registered for the kind.
    Shared(SharedView),
    /// A freshly constructed view.
    Owned(Box<dyn View>),
    /// Nothing mapped; the placeholder names the view that was wanted.
    Missing(NotFoundView),
}

impl ResolvedView {
    pub fn render(&mut self, frame: &mut Frame, area: Rect) {
        match self {
            ResolvedView::Shared(view) => {
                if let Ok(mut guard) = view.lock() {
                    guard.render(frame, area);
                }
            }
            ResolvedView::Owned(view) => view.render(frame, area),
            ResolvedView::Missing(view) => view.render(frame, area),
        }
    }

    pub fn handle_event(&mut self, event: &Event) -> Option<Action> {
        match self {
            ResolvedView::Shared(view) => view.lock().ok()?.handle_event(event),
            ResolvedView::Owned(view) => view.handle_event(event),
            ResolvedView::Missing(view) => view.handle_event(event),
        }
    }
}

/// Placeholder rendered when no view resolves for the active page.
pub struct NotFoundView {
    message: String,
}

impl NotFoundView {
    pub fn new(wanted: impl Into<String>) -> Self {
        Self {
            message: format!("Not Found: {}", wanted.into()),
        }
    }

    pub fn message(&self) -> &str {
        &self.message
    }
}

impl View for NotFoundView {
    fn render(&mut self, frame: &mut Frame, area: Rect) {
        let paragraph = Paragraph::new(self.message.clone()).alignment(Alignment::Center);
        frame.render_widget(paragraph, area);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::viewmodel::{page_handle, PageViewModel};

    crate::define_pages! {
        pub enum TestPage {
            First,
            Second,
            Third,
        }
    }

    struct StubPage;

    impl PageViewModel for StubPage {
        fn name(&self) -> &'static str {
            "StubPageViewModel"
        }

        fn text(&self) -> String {
            String::new()
        }

        fn count(&mut self) {}
    }

    struct StubView;

    impl View for StubView {
        fn render(&mut self, _frame: &mut Frame, _area: Rect) {}
    }

    #[test]
    fn view_name_applies_the_naming_convention() {
        assert_eq!(view_name("Page1ViewModel"), "Page1View");
        assert_eq!(
            view_name("demo::pages::Page2ViewModel"),
            "demo::pages::Page2View"
        );
    }

    #[test]
    fn shared_registration_wins_resolution() {
        let mut locator = ViewLocator::new();
        locator.register_shared(TestPage::First, StubView);
        locator.register(TestPage::First, |_| Box::new(StubView));
        let vm = page_handle(StubPage);

        let first = locator.resolve(TestPage::First, &vm);
        let second = locator.resolve(TestPage::First, &vm);
        match (first, second) {
            (ResolvedView::Shared(a), ResolvedView::Shared(b)) => {
                assert!(Arc::ptr_eq(&a, &b));
            }
            _ => panic!("expected the shared instance"),
        }
    }

    #[test]
    fn constructor_builds_when_no_shared_instance_exists() {
        let mut locator = ViewLocator::new();
        locator.register(TestPage::Second, |_| Box::new(StubView));
        let vm = page_handle(StubPage);
        assert!(matches!(
            locator.resolve(TestPage::Second, &vm),
            ResolvedView::Owned(_)
        ));
    }

    #[test]
    fn unmapped_kind_degrades_to_the_placeholder() {
        let locator: ViewLocator<TestPage> = ViewLocator::new();
        let vm = page_handle(StubPage);
        match locator.resolve(TestPage::Third, &vm) {
            ResolvedView::Missing(placeholder) => {
                assert_eq!(placeholder.message(), "Not Found: StubPageView");
            }
            _ => panic!("expected the placeholder"),
        }
    }
}

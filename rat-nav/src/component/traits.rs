use ratatui::layout::Rect;
use ratatui::Frame;

use crate::application::Context;

/// Event type for component interactions.
#[derive(Debug, Clone)]
pub enum Event {
    Key(crossterm::event::KeyEvent),
    Mouse(crossterm::event::MouseEvent),
    Resize(u16, u16),
    FocusGained,
    FocusLost,
    Paste(String),
}

/// Action that a component can return after handling an event.
#[derive(Debug, PartialEq, Eq)]
pub enum Action {
    /// The event was consumed; nothing further to do.
    Noop,
    Quit,
}

/// The root component hosted by the application run loop.
pub trait Component: Send + 'static {
    /// Called once before the run loop starts.
    fn on_init(&mut self, cx: &mut Context) {
        let _ = cx;
    }

    /// Render the component into the frame.
    fn render(&mut self, frame: &mut Frame, cx: &mut Context);

    /// Handle an event, returning an optional action.
    fn handle_event(&mut self, event: Event, cx: &mut Context) -> Option<Action> {
        let _ = event;
        let _ = cx;
        None
    }
}

/// A visual bound to a page view-model at construction. Object-safe so the
/// view locator can hold a mixed registry.
pub trait View: Send + Sync + 'static {
    fn render(&mut self, frame: &mut Frame, area: Rect);

    /// Page-local commands; anything not handled by the hosting window is
    /// delegated here.
    fn handle_event(&mut self, event: &Event) -> Option<Action> {
        let _ = event;
        None
    }
}

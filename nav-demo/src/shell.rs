//! The hosting window: mirrors the navigator's current page and renders
//! whichever view resolves for it.

use std::sync::Arc;

use crossterm::event::KeyCode;
use ratatui::layout::{Alignment, Constraint, Direction, Layout};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;
use ratatui::Frame;

use rat_nav::{Action, Component, Context, Event, Navigator, PageHandle, Signal, ViewLocator};

use crate::pages::Page;

/// Presentation state for the hosting window. Keeps a mirrored copy of
/// the navigator's current page, updated inside the navigation call
/// itself, and exposes the navigation commands.
pub struct MainViewModel {
    navigator: Arc<Navigator<Page>>,
    current_page: Signal<(Page, PageHandle)>,
}

impl MainViewModel {
    pub fn new(navigator: Arc<Navigator<Page>>) -> rat_nav::Result<Self> {
        let current_page = Signal::new(navigator.current()?);
        let mirror = current_page.clone();
        navigator.observe(move |kind, handle| {
            let _ = mirror.set((kind, handle.clone()));
        })?;
        Ok(Self {
            navigator,
            current_page,
        })
    }

    /// The mirrored `(kind, view-model)` pair the window renders.
    pub fn current_page(&self) -> rat_nav::Result<(Page, PageHandle)> {
        self.current_page.get()
    }

    pub fn go_page1(&self) -> rat_nav::Result<()> {
        self.navigator.navigate_to(Page::Page1)
    }

    pub fn go_page2(&self) -> rat_nav::Result<()> {
        self.navigator.navigate_to(Page::Page2)
    }

    pub fn go_back(&self) -> rat_nav::Result<bool> {
        self.navigator.back()
    }

    fn can_go_back(&self) -> bool {
        self.navigator.can_go_back()
    }
}

/// Root component: tab bar, the resolved page view, key hints.
pub struct MainWindow {
    vm: MainViewModel,
    views: ViewLocator<Page>,
}

impl MainWindow {
    pub fn new(vm: MainViewModel, views: ViewLocator<Page>) -> Self {
        Self { vm, views }
    }
}

impl Component for MainWindow {
    fn on_init(&mut self, cx: &mut Context) {
        cx.app.subscribe(self.vm.navigator.as_ref());
        cx.app.subscribe(&self.vm.current_page);
    }

    fn render(&mut self, frame: &mut Frame, cx: &mut Context) {
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(1),
                Constraint::Min(0),
                Constraint::Length(1),
            ])
            .split(cx.area);

        let Ok((kind, vm)) = self.vm.current_page() else {
            return;
        };

        let mut tabs: Vec<Span> = vec![Span::raw(" ")];
        for (i, page) in Page::ALL.iter().enumerate() {
            let style = if *page == kind {
                Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD)
            } else {
                Style::default().fg(Color::DarkGray)
            };
            tabs.push(Span::styled(format!(" {} {} ", i + 1, page), style));
        }
        frame.render_widget(Paragraph::new(Line::from(tabs)), chunks[0]);

        let mut view = self.views.resolve(kind, &vm);
        view.render(frame, chunks[1]);

        let hint = if self.vm.can_go_back() {
            " 1/2 pages | Space count | Esc back | Q quit "
        } else {
            " 1/2 pages | Space count | Q quit "
        };
        let footer = Paragraph::new(hint)
            .alignment(Alignment::Center)
            .style(Style::default().fg(Color::DarkGray));
        frame.render_widget(footer, chunks[2]);
    }

    fn handle_event(&mut self, event: Event, _cx: &mut Context) -> Option<Action> {
        if let Event::Key(key) = &event {
            match key.code {
                KeyCode::Char('1') => {
                    let _ = self.vm.go_page1();
                    return Some(Action::Noop);
                }
                KeyCode::Char('2') => {
                    let _ = self.vm.go_page2();
                    return Some(Action::Noop);
                }
                KeyCode::Esc => {
                    let _ = self.vm.go_back();
                    return Some(Action::Noop);
                }
                KeyCode::Char('q') => return Some(Action::Quit),
                _ => {}
            }
        }
        let (kind, vm) = self.vm.current_page().ok()?;
        self.views.resolve(kind, &vm).handle_event(&event)
    }
}

#[cfg(test)]
mod tests {
    use rat_nav::{Observe, PageViewModel};

    use super::*;
    use crate::registry::Registry;

    #[test]
    fn mirror_starts_from_the_navigator() {
        let registry = Registry::build().unwrap();
        let vm = MainViewModel::new(registry.navigator.clone()).unwrap();

        let (kind, page) = vm.current_page().unwrap();
        assert_eq!(kind, Page::default());
        let (_, current) = registry.navigator.current().unwrap();
        assert!(Arc::ptr_eq(&page, &current));
    }

    #[test]
    fn commands_steer_the_mirror_in_the_same_turn() {
        let registry = Registry::build().unwrap();
        let vm = MainViewModel::new(registry.navigator.clone()).unwrap();
        let mut rx = vm.current_page.changes();

        vm.go_page2().unwrap();
        let (kind, page) = vm.current_page().unwrap();
        assert_eq!(kind, Page::Page2);
        let (_, current) = registry.navigator.current().unwrap();
        assert!(Arc::ptr_eq(&page, &current));
        assert!(rx.has_changed().unwrap());

        vm.go_page1().unwrap();
        assert_eq!(vm.current_page().unwrap().0, Page::Page1);
    }

    #[test]
    fn counter_survives_navigation_with_singletons() {
        let registry = Registry::build().unwrap();
        let vm = MainViewModel::new(registry.navigator.clone()).unwrap();

        let (_, page) = vm.current_page().unwrap();
        page.write().unwrap().count();

        vm.go_page2().unwrap();
        vm.go_page1().unwrap();

        let (_, revisited) = vm.current_page().unwrap();
        assert_eq!(revisited.read().unwrap().text(), "你点击了1次");
    }

    #[test]
    fn back_returns_to_the_previous_page() {
        let registry = Registry::build().unwrap();
        let vm = MainViewModel::new(registry.navigator.clone()).unwrap();

        vm.go_page2().unwrap();
        assert!(vm.go_back().unwrap());
        assert_eq!(vm.current_page().unwrap().0, Page::Page1);
    }
}

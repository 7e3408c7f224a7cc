//! Variant without the shared registry: the window owns the current-page
//! slot itself and rebuilds the page on every navigation, so page state
//! lives only as long as the page stays active.

use crossterm::event::KeyCode;
use ratatui::layout::{Alignment, Constraint, Direction, Layout};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;
use ratatui::Frame;
use tracing::debug;

use rat_nav::{page_handle, Action, Component, Context, Event, PageHandle, View};

use crate::pages::{Page, Page1View, Page1ViewModel, Page2View, Page2ViewModel};

pub struct DirectWindow {
    current_kind: Page,
    current_page: PageHandle,
    current_view: Box<dyn View>,
}

impl DirectWindow {
    pub fn new() -> Self {
        let (vm, view) = Self::build_page(Page::default());
        Self {
            current_kind: Page::default(),
            current_page: vm,
            current_view: view,
        }
    }

    fn build_page(kind: Page) -> (PageHandle, Box<dyn View>) {
        match kind {
            Page::Page1 => {
                let vm = page_handle(Page1ViewModel::new());
                let view: Box<dyn View> = Box::new(Page1View::new(vm.clone()));
                (vm, view)
            }
            Page::Page2 => {
                let vm = page_handle(Page2ViewModel::new());
                let view: Box<dyn View> = Box::new(Page2View::new(vm.clone()));
                (vm, view)
            }
        }
    }

    /// Fresh view-model and view on every call, including re-navigation
    /// to the active page.
    pub fn navigate(&mut self, kind: Page) {
        debug!(page = %kind, "rebuild page");
        let (vm, view) = Self::build_page(kind);
        self.current_kind = kind;
        self.current_page = vm;
        self.current_view = view;
    }

    pub fn current(&self) -> (Page, PageHandle) {
        (self.current_kind, self.current_page.clone())
    }
}

impl Default for DirectWindow {
    fn default() -> Self {
        Self::new()
    }
}

impl Component for DirectWindow {
    fn render(&mut self, frame: &mut Frame, cx: &mut Context) {
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(1),
                Constraint::Min(0),
                Constraint::Length(1),
            ])
            .split(cx.area);

        let mut tabs: Vec<Span> = vec![Span::raw(" ")];
        for (i, page) in Page::ALL.iter().enumerate() {
            let style = if *page == self.current_kind {
                Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD)
            } else {
                Style::default().fg(Color::DarkGray)
            };
            tabs.push(Span::styled(format!(" {} {} ", i + 1, page), style));
        }
        frame.render_widget(Paragraph::new(Line::from(tabs)), chunks[0]);

        self.current_view.render(frame, chunks[1]);

        let footer = Paragraph::new(" 1/2 pages | Space count | Q quit ")
            .alignment(Alignment::Center)
            .style(Style::default().fg(Color::DarkGray));
        frame.render_widget(footer, chunks[2]);
    }

    fn handle_event(&mut self, event: Event, _cx: &mut Context) -> Option<Action> {
        if let Event::Key(key) = &event {
            match key.code {
                KeyCode::Char('1') => {
                    self.navigate(Page::Page1);
                    return Some(Action::Noop);
                }
                KeyCode::Char('2') => {
                    self.navigate(Page::Page2);
                    return Some(Action::Noop);
                }
                KeyCode::Char('q') => return Some(Action::Quit),
                _ => {}
            }
        }
        self.current_view.handle_event(&event)
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use rat_nav::PageViewModel;

    use super::*;

    #[test]
    fn navigation_rebuilds_the_page() {
        let mut window = DirectWindow::new();
        let (kind, first) = window.current();
        assert_eq!(kind, Page::Page1);
        first.write().unwrap().count();

        window.navigate(Page::Page2);
        window.navigate(Page::Page1);

        let (_, rebuilt) = window.current();
        assert!(!Arc::ptr_eq(&first, &rebuilt));
        assert_eq!(rebuilt.read().unwrap().text(), "你还没点击");
    }

    #[test]
    fn renavigating_to_the_active_page_resets_it() {
        let mut window = DirectWindow::new();
        let (_, page) = window.current();
        page.write().unwrap().count();
        assert_eq!(page.read().unwrap().text(), "你点击了1次");

        window.navigate(Page::Page1);
        let (_, fresh) = window.current();
        assert_eq!(fresh.read().unwrap().text(), "你还没点击");
    }
}

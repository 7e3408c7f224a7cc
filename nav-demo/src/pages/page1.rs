use crossterm::event::KeyCode;
use ratatui::layout::{Alignment, Rect};
use ratatui::style::{Color, Style};
use ratatui::widgets::{Block, BorderType, Borders, Paragraph};
use ratatui::Frame;

use rat_nav::{Action, Event, PageHandle, PageViewModel, View};

/// First demo page: a click counter behind a display string.
pub struct Page1ViewModel {
    clicks: u32,
    text: String,
}

impl Page1ViewModel {
    pub fn new() -> Self {
        Self {
            clicks: 0,
            text: "你还没点击".to_string(),
        }
    }
}

impl Default for Page1ViewModel {
    fn default() -> Self {
        Self::new()
    }
}

impl PageViewModel for Page1ViewModel {
    fn name(&self) -> &'static str {
        "Page1ViewModel"
    }

    fn text(&self) -> String {
        self.text.clone()
    }

    fn count(&mut self) {
        self.clicks += 1;
        self.text = format!("你点击了{}次", self.clicks);
    }
}

pub struct Page1View {
    vm: PageHandle,
}

impl Page1View {
    pub fn new(vm: PageHandle) -> Self {
        Self { vm }
    }
}

impl View for Page1View {
    fn render(&mut self, frame: &mut Frame, area: Rect) {
        let text = self.vm.read().map(|vm| vm.text()).unwrap_or_default();
        let block = Block::default()
            .title(" Page 1 ")
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded)
            .border_style(Style::default().fg(Color::Cyan));
        let paragraph = Paragraph::new(format!("\n{text}\n\nSpace / C to count"))
            .alignment(Alignment::Center)
            .block(block);
        frame.render_widget(paragraph, area);
    }

    fn handle_event(&mut self, event: &Event) -> Option<Action> {
        match event {
            Event::Key(key)
                if key.code == KeyCode::Char(' ') || key.code == KeyCode::Char('c') =>
            {
                if let Ok(mut vm) = self.vm.write() {
                    vm.count();
                }
                Some(Action::Noop)
            }
            _ => None,
        }
    }
}

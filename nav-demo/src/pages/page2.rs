use crossterm::event::KeyCode;
use ratatui::layout::{Alignment, Rect};
use ratatui::style::{Color, Style};
use ratatui::widgets::{Block, BorderType, Borders, Paragraph};
use ratatui::Frame;

use rat_nav::{Action, Event, PageHandle, PageViewModel, View};

/// Second demo page. Deliberately parallel to page 1; each keeps its own
/// counter.
pub struct Page2ViewModel {
    clicks: u32,
    text: String,
}

impl Page2ViewModel {
    pub fn new() -> Self {
        Self {
            clicks: 0,
            text: "你还没点击".to_string(),
        }
    }
}

impl Default for Page2ViewModel {
    fn default() -> Self {
        Self::new()
    }
}

impl PageViewModel for Page2ViewModel {
    fn name(&self) -> &'static str {
        "Page2ViewModel"
    }

    fn text(&self) -> String {
        self.text.clone()
    }

    fn count(&mut self) {
        self.clicks += 1;
        self.text = format!("你点击了{}次", self.clicks);
    }
}

pub struct Page2View {
    vm: PageHandle,
}

impl Page2View {
    pub fn new(vm: PageHandle) -> Self {
        Self { vm }
    }
}

impl View for Page2View {
    fn render(&mut self, frame: &mut Frame, area: Rect) {
        let text = self.vm.read().map(|vm| vm.text()).unwrap_or_default();
        let block = Block::default()
            .title(" Page 2 ")
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded)
            .border_style(Style::default().fg(Color::Green));
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

pub mod page1;
pub mod page2;

pub use page1::{Page1View, Page1ViewModel};
pub use page2::{Page2View, Page2ViewModel};

rat_nav::define_pages! {
    pub enum Page {
        Page1,
        Page2,
    }
}

#[cfg(test)]
mod tests {
    use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
    use rat_nav::{page_handle, Action, Event, PageViewModel, View};

    use super::*;

    #[test]
    fn fresh_pages_show_the_placeholder_text() {
        assert_eq!(Page1ViewModel::new().text(), "你还没点击");
        assert_eq!(Page2ViewModel::new().text(), "你还没点击");
    }

    #[test]
    fn counting_embeds_the_click_total() {
        let mut vm = Page1ViewModel::new();
        for _ in 0..3 {
            vm.count();
        }
        assert_eq!(vm.text(), "你点击了3次");
        vm.count();
        assert_eq!(vm.text(), "你点击了4次");
    }

    #[test]
    fn pages_count_independently() {
        let mut one = Page1ViewModel::new();
        let mut two = Page2ViewModel::new();
        one.count();
        assert_eq!(two.text(), "你还没点击");
        two.count();
        two.count();
        assert_eq!(two.text(), "你点击了2次");
        assert_eq!(one.text(), "你点击了1次");
    }

    #[test]
    fn page_set_is_closed_and_ordered() {
        assert_eq!(Page::default(), Page::Page1);
        assert_eq!(Page::ALL, &[Page::Page1, Page::Page2]);
        assert_eq!(Page::Page2.to_string(), "Page2");
    }

    #[test]
    fn view_models_report_conventional_names() {
        assert_eq!(Page1ViewModel::new().name(), "Page1ViewModel");
        assert_eq!(rat_nav::view_name(Page2ViewModel::new().name()), "Page2View");
    }

    #[test]
    fn the_count_key_reaches_the_bound_view_model() {
        let vm = page_handle(Page1ViewModel::new());
        let mut view = Page1View::new(vm.clone());

        let key = KeyEvent::new(KeyCode::Char(' '), KeyModifiers::NONE);
        let action = view.handle_event(&Event::Key(key));

        assert_eq!(action, Some(Action::Noop));
        assert_eq!(vm.read().unwrap().text(), "你点击了1次");
    }
}

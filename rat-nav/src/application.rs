//! Terminal application shell hosting a single root component.

use std::io::{self, stdout};
use std::time::Duration;

use crossterm::{
    event::{self, DisableMouseCapture, EnableMouseCapture, Event as CrosstermEvent, KeyEventKind},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::prelude::*;
use tokio::runtime::Runtime;
use tokio::sync::mpsc;

use crate::component::{Action, Component, Event};
use crate::state::Observe;

/// Application context providing access to global services.
#[derive(Clone)]
pub struct AppContext {
    /// Internal: Channel to trigger a re-render.
    re_render_tx: mpsc::UnboundedSender<()>,
}

impl AppContext {
    /// Trigger a re-render.
    pub fn refresh(&self) {
        let _ = self.re_render_tx.send(());
    }

    /// Forward every change of `source` into the render channel.
    pub fn subscribe<O: Observe>(&self, source: &O) {
        let mut rx = source.changes();
        let tx = self.re_render_tx.clone();
        tokio::spawn(async move {
            while rx.changed().await.is_ok() {
                let _ = tx.send(());
            }
        });
    }
}

/// Context passed to root-component methods.
pub struct Context {
    pub app: AppContext,
    pub area: Rect,
}

impl Context {
    pub fn new(app: AppContext, area: Rect) -> Self {
        Self { app, area }
    }

    /// Access the underlying AppContext.
    pub fn app(&self) -> &AppContext {
        &self.app
    }

    /// Explicitly trigger a re-render.
    pub fn notify(&self) {
        self.app.refresh();
    }
}

/// Main application handle.
pub struct Application;

impl Application {
    /// Create a new application instance.
    pub fn new() -> Self {
        Self
    }

    /// Run the application. The setup closure wires dependencies and
    /// returns the root component.
    pub fn run<C, F>(self, setup: F) -> anyhow::Result<()>
    where
        C: Component,
        F: FnOnce(&AppContext) -> anyhow::Result<C>,
    {
        let rt = Runtime::new().map_err(|e| anyhow::anyhow!("Failed to start tokio: {}", e))?;

        let (re_render_tx, re_render_rx) = mpsc::unbounded_channel();
        let app_context = AppContext { re_render_tx };

        let _guard = rt.enter();
        let root = setup(&app_context)?;
        drop(_guard);

        rt.block_on(async move { self.run_loop(app_context, root, re_render_rx).await })
    }

    async fn run_loop<C: Component>(
        &self,
        app: AppContext,
        mut root: C,
        re_render_rx: mpsc::UnboundedReceiver<()>,
    ) -> anyhow::Result<()> {
        enable_raw_mode()?;
        let mut stdout = stdout();
        execute!(
            stdout,
            EnterAlternateScreen,
            EnableMouseCapture,
            event::EnableFocusChange
        )?;
        let backend = CrosstermBackend::new(stdout);
        let mut terminal = Terminal::new(backend)?;

        // Lifecycle: let the root wire its subscriptions before the loop.
        {
            let size = terminal.size()?;
            let area = Rect::new(0, 0, size.width, size.height);
            let mut cx = Context::new(app.clone(), area);
            root.on_init(&mut cx);
        }

        let result = self.event_loop(app, &mut terminal, &mut root, re_render_rx).await;

        disable_raw_mode()?;
        execute!(
            terminal.backend_mut(),
            LeaveAlternateScreen,
            DisableMouseCapture,
            event::DisableFocusChange
        )?;
        terminal.show_cursor()?;

        result
    }

    async fn event_loop<C: Component>(
        &self,
        app: AppContext,
        terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
        root: &mut C,
        mut re_render_rx: mpsc::UnboundedReceiver<()>,
    ) -> anyhow::Result<()> {
        // Initial render
        app.refresh();

        loop {
            tokio::select! {
                _ = re_render_rx.recv() => {
                    terminal.draw(|frame| {
                        let mut cx = Context::new(app.clone(), frame.area());
                        root.render(frame, &mut cx);
                    })?;
                }
                event_ready = async { event::poll(Duration::from_millis(100)) } => {
                    if let Ok(true) = event_ready {
                        let crossterm_event = event::read()?;
                        let internal_event = match crossterm_event {
                            CrosstermEvent::Key(key) if key.kind == KeyEventKind::Press => Some(Event::Key(key)),
                            CrosstermEvent::Mouse(mouse) => Some(Event::Mouse(mouse)),
                            CrosstermEvent::Resize(w, h) => Some(Event::Resize(w, h)),
                            CrosstermEvent::FocusGained => Some(Event::FocusGained),
                            CrosstermEvent::FocusLost => Some(Event::FocusLost),
                            CrosstermEvent::Paste(s) => Some(Event::Paste(s)),
                            _ => None,
                        };

                        if let Some(event) = internal_event {
                            let size = terminal.size()?;
                            let area = Rect::new(0, 0, size.width, size.height);
                            let mut cx = Context::new(app.clone(), area);
                            let action = root.handle_event(event, &mut cx);
                            app.refresh(); // Trigger refresh after any event handling

                            if let Some(Action::Quit) = action {
                                return Ok(());
                            }
                        }
                    }
                }
            }
        }
    }
}

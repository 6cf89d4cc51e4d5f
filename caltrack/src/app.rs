use anyhow::Result;
use crossterm::{
    event::{Event, EventStream, KeyEventKind},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use futures::StreamExt;
use ratatui::{backend::CrosstermBackend, Terminal};

use crate::app_core::AppCore;
use crate::input::KeyEvent;
use crate::log_buffer::LogBuffer;
use crate::logging::init_logging;
use crate::settings::Settings;
use crate::ui::screens::Screen;

pub struct App {
    settings: Settings,
}

impl App {
    pub fn new(settings: Settings) -> Self {
        Self { settings }
    }

    pub async fn run(&self) -> Result<()> {
        // Create log buffer before initializing logging
        let log_buffer = LogBuffer::new(self.settings.log_buffer_capacity);
        let logging = init_logging(&self.settings, log_buffer.clone())?;

        tracing::info!("caltrack starting, logging to {}", logging.log_path.display());

        let mut terminal = self.init()?;
        let result = self.event_loop(&mut terminal, &log_buffer).await;

        tracing::info!("Cleaning up application");
        self.exit(terminal)?;

        result
    }

    async fn event_loop(
        &self,
        terminal: &mut Terminal<CrosstermBackend<std::io::Stdout>>,
        log_buffer: &LogBuffer,
    ) -> Result<()> {
        let mut core = AppCore::new();
        let mut event_stream = EventStream::new();

        tracing::info!("Entering main event loop");

        loop {
            // Update total_entries for logs screen if active
            if let Screen::Logs(logs_state) = core.state_mut().current_screen_mut() {
                logs_state.total_entries = log_buffer.len();
            }

            terminal.draw(|f| {
                crate::ui::render_app(f, core.state(), log_buffer);
            })?;

            let Some(event) = event_stream.next().await else {
                tracing::info!("Terminal event stream closed");
                break;
            };

            match event? {
                Event::Key(key) if matches!(key.kind, KeyEventKind::Press) => {
                    // Don't log when on logs screen to avoid feedback loop
                    let on_logs_screen = matches!(core.state().current_screen(), Screen::Logs(_));
                    if !on_logs_screen {
                        tracing::debug!("Key press: {:?}", key);
                    }
                    if let Some(command) = core.handle_key(KeyEvent::from(key)) {
                        if !on_logs_screen {
                            tracing::debug!("Executed command: {:?}", command);
                        }
                    }
                }
                _ => {
                    // Resize and focus events only need a redraw
                }
            }

            if core.should_quit() {
                tracing::info!("Quit requested, exiting event loop");
                break;
            }
        }

        Ok(())
    }

    fn init(&self) -> Result<Terminal<CrosstermBackend<std::io::Stdout>>, std::io::Error> {
        enable_raw_mode()?;
        let mut stdout = std::io::stdout();
        execute!(stdout, EnterAlternateScreen)?;
        let backend = CrosstermBackend::new(stdout);
        Terminal::new(backend)
    }

    fn exit(
        &self,
        mut terminal: Terminal<CrosstermBackend<std::io::Stdout>>,
    ) -> Result<(), std::io::Error> {
        disable_raw_mode()?;
        execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
        terminal.show_cursor()?;
        Ok(())
    }
}

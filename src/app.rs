use anyhow::{Context, Result};
use crossterm::{
    cursor::Show,
    event::{self, Event},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
    tty::IsTty,
};
use ratatui::{backend::CrosstermBackend, Terminal};
use std::io;
use std::panic;
use std::sync::Once;
use tokio::time::{Duration, Instant};

use crate::clock::{Clock, SystemClock};
use crate::config::AppConfig;
use crate::events::EventHandler;
use crate::tea::message::SystemMessage;
use crate::tea::{update, Message, Model};
use crate::theme::Theme;
use crate::ui;

pub struct App<C: Clock = SystemClock> {
    model: Model,
    clock: C,
    event_handler: EventHandler,
    theme: Theme,
    tick_rate: Duration,
}

impl App<SystemClock> {
    pub fn new(config: &AppConfig) -> Result<Self> {
        Self::with_clock(config, SystemClock)
    }
}

impl<C: Clock> App<C> {
    /// Build the application around an explicit clock
    pub fn with_clock(config: &AppConfig, clock: C) -> Result<Self> {
        let theme = config.resolve_theme().context("Failed to load theme")?;
        let format = config
            .delivery_format()
            .context("Failed to load delivery date/time format")?;

        Ok(Self {
            model: Model::new(clock.now(), format),
            clock,
            event_handler: EventHandler::new(),
            theme,
            tick_rate: config.tick_rate(),
        })
    }

    pub fn model(&self) -> &Model {
        &self.model
    }

    /// Apply one message to the model
    pub fn dispatch(&mut self, message: Message) {
        let model = std::mem::take(&mut self.model);
        self.model = update(model, message, &self.clock);
    }

    /// Feed a terminal event through the key mapping
    pub fn handle_event(&mut self, event: Event) {
        if let Event::Key(key) = event {
            if let Some(message) = self.event_handler.handle_key_event(key, &self.model) {
                self.dispatch(message);
            }
        }
    }

    pub async fn run(&mut self) -> Result<()> {
        // Check if we're running in a proper terminal
        if !io::stdout().is_tty() {
            return Err(anyhow::anyhow!(
                "encomendas requires a terminal (TTY) to run. Please run it in a terminal emulator."
            ));
        }

        // Setup terminal
        install_panic_hook();
        enable_raw_mode().context("Failed to enable raw mode")?;
        let result = self.run_in_terminal();

        let restored = restore_terminal().context("Failed to restore terminal");
        tracing::info!("Order form closed with {} order(s)", self.model.orders.len());
        result.and(restored)
    }

    /// Everything between enabling and restoring raw mode
    fn run_in_terminal(&mut self) -> Result<()> {
        let mut stdout = io::stdout();
        execute!(stdout, EnterAlternateScreen).context("Failed to enter alternate screen")?;
        let backend = CrosstermBackend::new(stdout);
        let mut terminal = Terminal::new(backend).context("Failed to create terminal")?;

        tracing::info!("Order form started");
        self.run_loop(&mut terminal)
    }

    fn run_loop(&mut self, terminal: &mut Terminal<CrosstermBackend<io::Stdout>>) -> Result<()> {
        let mut last_tick = Instant::now();

        loop {
            terminal.draw(|f| ui::render(f, &self.model, &self.theme))?;

            let timeout = self
                .tick_rate
                .checked_sub(last_tick.elapsed())
                .unwrap_or_else(|| Duration::from_secs(0));

            if event::poll(timeout)? {
                self.handle_event(event::read()?);
            }

            if last_tick.elapsed() >= self.tick_rate {
                self.dispatch(Message::System(SystemMessage::Tick));
                last_tick = Instant::now();
            }

            if self.model.should_quit {
                break;
            }
        }

        Ok(())
    }
}

/// Leave raw mode and the alternate screen and show the cursor
///
/// Every step is attempted even when an earlier one fails; the first
/// error is returned. Safe to call when the terminal was never set up.
pub fn restore_terminal() -> io::Result<()> {
    let raw = disable_raw_mode();
    let screen = execute!(io::stdout(), LeaveAlternateScreen, Show);
    raw.and(screen)
}

/// Restore the terminal before the default panic report is printed
fn install_panic_hook() {
    static INSTALL: Once = Once::new();
    INSTALL.call_once(|| {
        let default_hook = panic::take_hook();
        panic::set_hook(Box::new(move |info| {
            let _ = restore_terminal();
            default_hook(info);
        }));
    });
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::clock::FixedClock;
    use crate::tea::message::{FormMessage, OverlayMessage};
    use chrono::NaiveDate;
    use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

    fn app() -> App<FixedClock> {
        let now = NaiveDate::from_ymd_opt(2026, 10, 18)
            .unwrap()
            .and_hms_opt(12, 0, 0)
            .unwrap();
        App::with_clock(&AppConfig::default(), FixedClock(now)).unwrap()
    }

    fn press(app: &mut App<FixedClock>, code: KeyCode) {
        app.handle_event(Event::Key(KeyEvent::new(code, KeyModifiers::NONE)));
    }

    fn type_text(app: &mut App<FixedClock>, text: &str) {
        for c in text.chars() {
            press(app, KeyCode::Char(c));
        }
    }

    #[test]
    fn test_keyboard_flow_records_order() {
        let mut app = app();

        type_text(&mut app, "Maria");
        press(&mut app, KeyCode::Tab);
        press(&mut app, KeyCode::Enter); // open item picker
        press(&mut app, KeyCode::Down);
        press(&mut app, KeyCode::Enter); // Bolo
        press(&mut app, KeyCode::Tab);
        type_text(&mut app, "2");
        press(&mut app, KeyCode::Tab); // date
        press(&mut app, KeyCode::Tab); // time
        press(&mut app, KeyCode::Tab); // submit
        press(&mut app, KeyCode::Enter);

        let model = app.model();
        assert_eq!(model.orders.len(), 1);
        let order = model.orders.get(0).unwrap();
        assert_eq!(order.client_name, "Maria");
        assert_eq!(order.item, "Bolo");
        assert_eq!(order.quantity, "2");
        assert_eq!(order.delivery_date, "18/10/2026");
        assert_eq!(order.delivery_time, "12:00");
        assert!(model.form.client_name.is_empty());
    }

    #[test]
    fn test_dispatch_keeps_state_across_ticks() {
        let mut app = app();
        app.dispatch(Message::Form(FormMessage::SetClientName("Ana".to_string())));
        app.dispatch(Message::Overlay(OverlayMessage::OpenItemPicker));
        app.dispatch(Message::Form(FormMessage::ChooseItem("Doces".to_string())));
        app.dispatch(Message::Form(FormMessage::SetQuantity("6".to_string())));
        app.dispatch(Message::Form(FormMessage::Submit));
        type_text(&mut app, "Bia");
        app.dispatch(Message::System(SystemMessage::Tick));
        app.dispatch(Message::System(SystemMessage::Tick));

        let model = app.model();
        assert_eq!(model.orders.len(), 1);
        assert_eq!(model.form.client_name, "Bia");
        // Delivery defaults come from the app clock, not Model::default
        assert_eq!(model.form.delivery_time.to_string(), "12:00:00");
        assert!(!model.should_quit);
    }

    #[test]
    fn test_restore_terminal_without_setup() {
        // Not in raw mode here, so both calls only emit escape sequences
        assert!(restore_terminal().is_ok());
        assert!(restore_terminal().is_ok());
    }

    #[test]
    fn test_unknown_theme_fails() {
        let config = AppConfig {
            theme: "neon".to_string(),
            ..AppConfig::default()
        };
        assert!(App::new(&config).is_err());
    }
}

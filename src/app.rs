use crate::banner::{preference, BannerOptions, FrameDriver, PreferenceStore};
use crate::config::Config;
use crate::error::{AppError, AppResult};
use crate::events::terminal::Handler as TerminalEventHandler;
use crate::logger::{LogBuffer, LogLogger};
use crate::state::State;
use crate::ui::Theme;
use crossterm::{
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use log::*;
use ratatui::{
    backend::{Backend, CrosstermBackend},
    Terminal,
};
use std::io::stdout;
use std::sync::{mpsc, Arc};
use std::time::Instant;
use tokio::task::JoinHandle;
use tui_logger::{init_logger, set_default_level};

/// Options that only apply to a single run and are never persisted.
///
#[derive(Clone, Copy, Debug, Default)]
pub struct LaunchOptions {
    /// Start on the final frame.
    pub completed: bool,
    /// Keep the settled banner on screen until the user exits.
    pub hold: bool,
}

/// Oversees the banner animation, preference write-back and terminal output.
///
pub struct App {
    config: Config,
    options: LaunchOptions,
}

impl App {
    /// Start a new application according to the given configuration. Returns
    /// the result of the application execution.
    ///
    pub async fn start(config: Config, options: LaunchOptions) -> AppResult<()> {
        init_logger(LevelFilter::Info).map_err(|e| AppError::Logger(e.to_string()))?;
        set_default_level(LevelFilter::Trace);

        info!("Starting application...");
        if let Some(path) = config.file_path() {
            info!("Using configuration at {}.", path.display());
        }
        let app = App { config, options };
        let (tx, rx) = mpsc::channel::<preference::PreferenceEvent>();
        let saver = app.start_preference_saver(rx);

        let log = LogBuffer::default();
        let driver = app.build_driver(log.clone()).with_preference_sender(tx);
        let mut state = State::new(
            driver,
            app.theme(),
            app.config.background.resolve(),
            app.options.hold,
        )
        .with_log(log.clone());
        state.mount(Instant::now());

        let result = if state.driver().should_render() {
            app.start_ui(&mut state)
        } else {
            info!("Banner is disabled; nothing to draw.");
            Ok(())
        };

        // Dropping the state closes the preference channel so the saver can
        // finish any pending write before we exit.
        drop(state);
        saver.await.map_err(|e| AppError::Task(e.to_string()))?;

        // The alternate screen is gone, so repeat anything the log pane
        // showed, including writes that finished after the UI closed.
        for entry in log.entries() {
            eprintln!("{}", entry);
        }

        info!("Exiting application...");
        result
    }

    /// Build the banner driver from the loaded configuration. Preference
    /// failures are captured in `log`.
    ///
    fn build_driver(&self, log: LogBuffer) -> FrameDriver {
        let options = BannerOptions {
            animation_complete: Some(Box::new(|| info!("Banner animation complete."))),
            completed: self.options.completed,
            banner_config: self.config.banner,
            logger_override: Some(Arc::new(LogLogger::new(log))),
        };
        FrameDriver::new(options, self.config.screen_reader)
    }

    /// Return the configured theme, falling back to the default for unknown
    /// names.
    ///
    fn theme(&self) -> Theme {
        Theme::by_name(&self.config.theme_name).unwrap_or_else(|| {
            warn!(
                "Unknown theme '{}', using the default theme.",
                self.config.theme_name
            );
            Theme::default()
        })
    }

    /// Start a blocking task to apply preference writes off the render loop.
    ///
    fn start_preference_saver(&self, receiver: preference::PreferenceReceiver) -> JoinHandle<()> {
        debug!("Starting preference saver...");
        let store: Arc<dyn PreferenceStore> = Arc::new(self.config.clone());
        tokio::task::spawn_blocking(move || preference::run_saver(receiver, store.as_ref()))
    }

    /// Take over the terminal and run the render loop on the main thread,
    /// restoring the terminal afterwards.
    ///
    fn start_ui(&self, state: &mut State) -> AppResult<()> {
        debug!("Starting user interface on main thread...");
        let mut stdout = stdout();
        execute!(stdout, EnterAlternateScreen)?;
        enable_raw_mode()?;

        let mut terminal = Terminal::new(CrosstermBackend::new(stdout))?;
        terminal.hide_cursor()?;

        let result = Self::render_loop(&mut terminal, state);

        disable_raw_mode()?;
        execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
        terminal.show_cursor()?;

        result
    }

    fn render_loop<B: Backend>(terminal: &mut Terminal<B>, state: &mut State) -> AppResult<()> {
        let terminal_event_handler = TerminalEventHandler::new();
        loop {
            terminal.draw(|frame| crate::ui::render(frame, state))?;
            let keep_going = terminal_event_handler
                .handle_next(state)
                .map_err(|e| AppError::Terminal(e.to_string()))?;
            if !keep_going {
                debug!("Received application exit request.");
                break;
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::banner::preference::tests::RecordingStore;
    use crate::banner::BannerConfig;
    use ratatui::backend::TestBackend;

    fn app(banner: Option<BannerConfig>, theme_name: &str) -> App {
        let mut config = Config::new();
        config.banner = banner;
        config.theme_name = theme_name.to_string();
        App {
            config,
            options: LaunchOptions {
                completed: true,
                hold: false,
            },
        }
    }

    #[test]
    fn test_unknown_theme_falls_back_to_default() {
        assert_eq!(app(None, "solarized").theme(), Theme::default());
        assert_eq!(app(None, "light").theme(), Theme::light());
    }

    #[test]
    fn test_build_driver_uses_config() {
        let mut driver = app(Some(BannerConfig::Always), "dark").build_driver(LogBuffer::default());
        assert!(driver.should_render());
        assert_eq!(driver.frame_idx(), 4);
        driver.mount(Instant::now());
        assert!(driver.is_complete());
    }

    #[test]
    fn test_failed_preference_write_is_captured_for_display() {
        let log = LogBuffer::default();
        let (tx, rx) = mpsc::channel();
        let mut driver = app(Some(BannerConfig::Once), "dark")
            .build_driver(log.clone())
            .with_preference_sender(tx);
        driver.mount(Instant::now());
        drop(driver);

        let store = RecordingStore {
            fail: true,
            ..Default::default()
        };
        preference::run_saver(rx, &store);
        let entries = log.entries();
        assert_eq!(entries.len(), 1);
        assert!(entries[0].starts_with("Failed to update banner preference: "));
    }

    #[test]
    fn test_full_screen_render_shows_banner_and_footer() {
        let app = app(Some(BannerConfig::Always), "dark");
        let mut state = State::new(
            app.build_driver(LogBuffer::default()),
            app.theme(),
            crate::ui::TerminalBackground::Dark,
            true,
        );
        state.mount(Instant::now());

        let mut terminal = Terminal::new(TestBackend::new(60, 16)).unwrap();
        terminal
            .draw(|frame| crate::ui::render(frame, &state))
            .unwrap();
        let buffer = terminal.backend().buffer();
        // One cell of margin around the layout.
        assert_eq!(buffer.get(1, 2).symbol(), "┌");
        assert_eq!(buffer.get(2, 14).symbol(), "q");
    }
}

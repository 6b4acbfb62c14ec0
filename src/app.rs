use crate::config::Config;
use crate::events::network::{Event as NetworkEvent, Handler as NetworkEventHandler};
use crate::events::terminal::Handler as TerminalEventHandler;
use crate::exchange::{Client, CurrencyCache, RateService, Resolver};
use crate::logger::LogBuffer;
use crate::state::State;
use crate::ui::Theme;
use anyhow::Result;
use crossterm::{
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use log::*;
use ratatui::{
    backend::{Backend, CrosstermBackend},
    Terminal,
};
use std::io::{self, stdout};
use std::sync::Arc;
use tokio::sync::Mutex;

pub type NetworkEventSender = std::sync::mpsc::Sender<NetworkEvent>;
type NetworkEventReceiver = std::sync::mpsc::Receiver<NetworkEvent>;

/// Oversees event processing, state management, and terminal output.
///
pub struct App {
    config: Config,
    state: Arc<Mutex<State>>,
    logs: LogBuffer,
    theme: Theme,
}

impl App {
    /// Start a new application according to the given configuration, using
    /// the already connected cache. Returns the result of the application
    /// execution.
    ///
    pub async fn start(
        config: Config,
        cache: Arc<dyn CurrencyCache>,
        logs: LogBuffer,
    ) -> Result<()> {
        info!("Starting application...");
        let (tx, rx) = std::sync::mpsc::channel::<NetworkEvent>();
        let theme = Theme::from_name(&config.theme_name).unwrap_or_else(|| {
            warn!(
                "Unknown theme '{}', expected one of {:?}",
                config.theme_name,
                Theme::available_themes()
            );
            Theme::default()
        });
        let mut app = App {
            state: Arc::new(Mutex::new(State::new(&config.base_currency))),
            config,
            logs,
            theme,
        };
        app.start_network(rx, cache);
        app.start_ui(tx).await?;
        info!("Exiting application...");
        Ok(())
    }

    /// Start a separate thread for asynchronous state mutations. Events are
    /// handled one at a time in the order they were dispatched.
    ///
    fn start_network(&self, net_receiver: NetworkEventReceiver, cache: Arc<dyn CurrencyCache>) {
        debug!("Creating new thread for asynchronous networking...");
        let cloned_state = Arc::clone(&self.state);
        let rates_url = self.config.rates_url.to_owned();
        std::thread::spawn(move || {
            let runtime = match tokio::runtime::Builder::new_multi_thread()
                .enable_all()
                .build()
            {
                Ok(runtime) => runtime,
                Err(e) => {
                    error!("Failed to create network runtime: {}", e);
                    return;
                }
            };
            runtime.block_on(async {
                let client = Arc::new(Client::new(&rates_url));
                let resolver = Resolver::new(cache, client.clone());
                let rates = RateService::new(client);
                let mut network_event_handler =
                    NetworkEventHandler::new(&cloned_state, &resolver, &rates);
                while let Ok(network_event) = net_receiver.recv() {
                    if let Err(e) = network_event_handler.handle(network_event).await {
                        error!("Failed to handle network event: {}", e);
                    }
                }
            })
        });
    }

    /// Begin the terminal event poll on a separate thread before starting the
    /// render loop on the main thread. The terminal is restored even when the
    /// loop fails.
    ///
    async fn start_ui(&mut self, net_sender: NetworkEventSender) -> Result<()> {
        debug!("Starting user interface on main thread...");
        let mut stdout = stdout();
        execute!(stdout, EnterAlternateScreen)?;
        enable_raw_mode()?;

        let mut terminal = Terminal::new(CrosstermBackend::new(stdout))?;
        terminal.hide_cursor()?;

        let result = self.render_loop(&mut terminal, net_sender).await;

        disable_raw_mode()?;
        execute!(io::stdout(), LeaveAlternateScreen)?;
        terminal.show_cursor()?;

        result
    }

    async fn render_loop<B: Backend>(
        &mut self,
        terminal: &mut Terminal<B>,
        net_sender: NetworkEventSender,
    ) -> Result<()> {
        let terminal_event_handler = TerminalEventHandler::new(net_sender);
        loop {
            let mut state = self.state.lock().await;
            let logs = self.logs.entries();
            terminal.draw(|frame| crate::ui::render(frame, &state, &logs, &self.theme))?;
            if !terminal_event_handler.handle_next(&mut state)? {
                debug!("Received application exit request.");
                break;
            }
        }
        Ok(())
    }
}

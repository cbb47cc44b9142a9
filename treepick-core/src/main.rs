//! src/main.rs
//! ============================================================================
//! # treepick: terminal tree picker entry point
//!
//! Builds the tree, runs the UI on the controlling terminal and, once the UI
//! is gone, prints the chosen file's path to stdout.

use std::{io, panic::PanicHookInfo, path::PathBuf, sync::Arc, time::Instant};

use anyhow::{Context, Result};
use clap::Parser;
use crossterm::event::EventStream;
use futures::StreamExt;
use ratatui::{Frame, Terminal, backend::CrosstermBackend};
use tokio::{signal, sync::Notify};
use tracing::{debug, error, info, warn};

use treepick_core::{
    Logger,
    cli::Cli,
    config::Config,
    controller::{EventLoop, Flow, KeyBindings, Outcome, write_selection},
    fs::{BuildOptions, TreeBuilder},
    model::{AppState, Node},
    terminal::{ScreenGuard, TtyWriter, UiTarget, emergency_restore},
    view::UIRenderer,
};

type AppTerminal = Terminal<CrosstermBackend<ScreenGuard<TtyWriter>>>;

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<()> {
    setup_panic_handler();

    let cli = Cli::parse();

    let (config, config_err) = match Config::load(cli.config.as_deref()).await {
        Ok(config) => (config, None),
        Err(e) if cli.config.is_some() => return Err(e).context("Failed to load config"),
        Err(e) => (Config::default(), Some(e)),
    };

    let level = cli.log_level.unwrap_or(config.log_level);
    if let Err(e) =
        Config::log_dir().and_then(|dir| Logger::init_tracing(level.to_tracing_level(), &dir))
    {
        eprintln!("treepick: logging disabled: {e}");
    }
    if let Some(e) = config_err {
        warn!("Failed to load config, using defaults: {}", e);
    }
    info!("Starting treepick");

    let root = build_tree(cli.root(), &config).await?;

    let app = App::new(root, &config).context("Failed to initialize terminal UI")?;
    let outcome = app.run().await.context("Application runtime error")?;

    // the terminal is restored by now; stdout carries only the result
    if let Outcome::Selected(path) = outcome {
        write_selection(&mut io::stdout().lock(), &path).context("Failed to write selection")?;
    }

    info!("Application exited cleanly");
    Ok(())
}

async fn build_tree(root_path: PathBuf, config: &Config) -> Result<Node> {
    let options = BuildOptions {
        show_hidden: config.show_hidden,
        expand_root: config.expand_root,
        unreadable_dirs: config.unreadable_dirs,
    };

    let start = Instant::now();
    let display = root_path.display().to_string();
    let root = tokio::task::spawn_blocking(move || {
        TreeBuilder::from_fs(options).build(&root_path)
    })
    .await
    .context("Tree builder task failed")?
    .with_context(|| format!("Failed to read {display}"))?;

    debug!("Tree built in {:?}", start.elapsed());
    Ok(root)
}

struct App {
    terminal: AppTerminal,
    event_loop: EventLoop,
    keys: KeyBindings,
    ui_renderer: UIRenderer,
    shutdown: Arc<Notify>,
}

impl App {
    fn new(root: Node, config: &Config) -> Result<Self> {
        // on any early return the guard inside the backend restores the screen
        let terminal = setup_terminal()?;
        let height = terminal.size().context("Failed to query terminal size")?.height;

        info!("Application initialized, viewport height {}", height);

        Ok(Self {
            terminal,
            event_loop: EventLoop::new(AppState::new(root, usize::from(height))),
            keys: KeyBindings::new(config.keymap),
            ui_renderer: UIRenderer::new(config),
            shutdown: Arc::new(Notify::new()),
        })
    }

    async fn run(mut self) -> Result<Outcome> {
        self.setup_shutdown_handler();
        info!("Starting event loop");

        let mut event_stream = EventStream::new();

        let outcome = loop {
            self.render()?;

            tokio::select! {
                _ = self.shutdown.notified() => {
                    info!("Shutdown signal received");
                    break Outcome::Cancelled;
                }

                maybe_event = event_stream.next() => {
                    let event = match maybe_event {
                        Some(Ok(event)) => event,
                        Some(Err(e)) => return Err(e).context("Failed to read terminal event"),
                        None => {
                            info!("Terminal event stream ended");
                            break Outcome::Cancelled;
                        }
                    };

                    if let Some(action) = self.keys.action_for(&event)
                        && let Flow::Exit(outcome) = self.event_loop.dispatch_action(action)
                    {
                        break outcome;
                    }
                }
            }
        };

        self.log_final_metrics();
        Ok(outcome)
    }

    fn render(&mut self) -> Result<()> {
        let Self {
            terminal,
            event_loop,
            ui_renderer,
            ..
        } = self;

        terminal
            .draw(|frame: &mut Frame<'_>| {
                ui_renderer.render(frame, event_loop.state_mut());
            })
            .context("Failed to draw terminal")?;

        Ok(())
    }

    fn log_final_metrics(&self) {
        let stats = self.ui_renderer.stats();

        info!("Final metrics:");
        info!("  Actions processed: {}", self.event_loop.actions());
        info!("  Frames drawn: {} ({} slow)", stats.frames, stats.slow);
        info!("  Average frame: {:.2?}", stats.avg());
    }

    fn setup_shutdown_handler(&self) {
        let shutdown: Arc<Notify> = self.shutdown.clone();

        tokio::spawn(async move {
            #[cfg(unix)]
            {
                use tokio::signal::unix::{SignalKind, signal};

                let (mut sigterm, mut sighup) =
                    match (signal(SignalKind::terminate()), signal(SignalKind::hangup())) {
                        (Ok(term), Ok(hup)) => (term, hup),
                        (Err(e), _) | (_, Err(e)) => {
                            warn!("Failed to install signal handlers: {}", e);
                            return;
                        }
                    };

                tokio::select! {
                    _ = sigterm.recv() => info!("Received SIGTERM"),
                    _ = sighup.recv() => info!("Received SIGHUP"),
                    _ = signal::ctrl_c() => info!("Received Ctrl+C"),
                }
            }

            #[cfg(not(unix))]
            {
                if let Err(e) = signal::ctrl_c().await {
                    warn!("Failed to listen for Ctrl+C: {}", e);
                    return;
                }
                info!("Received Ctrl+C");
            }

            shutdown.notify_one();
        });
    }
}

fn setup_terminal() -> Result<AppTerminal> {
    let writer = UiTarget::detect().open()?;

    let guard = ScreenGuard::enter(writer)
        .context("Failed to enter alternate screen")?
        .raw()
        .context("Failed to enable raw mode")?;

    let terminal =
        Terminal::new(CrosstermBackend::new(guard)).context("Failed to create terminal")?;

    info!("Terminal setup complete");
    Ok(terminal)
}

fn setup_panic_handler() {
    let original_hook = std::panic::take_hook();

    std::panic::set_hook(Box::new(move |panic_info: &PanicHookInfo<'_>| {
        emergency_restore();

        error!("Application panicked: {}", panic_info);
        original_hook(panic_info);
    }));
}

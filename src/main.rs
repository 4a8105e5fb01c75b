//! Scroll-reactive hotel landing pages in the terminal.
//!
//! Run the binary to open a landing page; scroll with the keyboard or the
//! mouse wheel and watch the navbar, progress bar and hero react.
//! Run with `--print-config` to dump the effective configuration.

use std::io::{self, stdout};
use std::path::PathBuf;
use std::sync::Mutex;
use std::time::{Duration, Instant};

use anyhow::{Context, Result};
use clap::Parser;
use crossterm::{
    event::{DisableMouseCapture, EnableMouseCapture},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{backend::CrosstermBackend, widgets::Paragraph, Frame, Terminal};
use tokio::time::MissedTickBehavior;

use stay_scroll::app::{
    event::{spawn_input_reader, AppEvent},
    handler,
    state::{ActiveView, AppState},
};
use stay_scroll::config;
use stay_scroll::core::{booking::StaySummary, content::Page};
use stay_scroll::ui::{
    booking_popup::BookingPopup, hero::HeroWidget, menu_overlay::MenuOverlay, navbar::NavbarWidget,
    page_view::PageView, progress_bar::ProgressBar, theme::Theme,
};

// ───────────────────────────────────────── CLI ───────────────

#[derive(Parser, Debug)]
#[command(name = env!("CARGO_PKG_NAME"), about = "Scroll-reactive hotel landing pages")]
struct Cli {
    /// Landing page to open (`luxe` or `ananta`).
    #[arg(long, default_value = "luxe")]
    page: Page,

    /// Pixels per terminal row; overrides the config file.
    #[arg(long)]
    px_per_row: Option<u32>,

    /// Animation frame interval in milliseconds.
    #[arg(long, default_value_t = 16)]
    tick_ms: u64,

    /// Print the effective configuration and exit.
    #[arg(long)]
    print_config: bool,

    /// Write the effective configuration to the config file and exit.
    #[arg(long)]
    write_config: bool,

    /// Append logs to this file instead of stderr.
    #[arg(long)]
    log_file: Option<PathBuf>,
}

fn init_tracing(log_file: Option<&PathBuf>) -> Result<()> {
    let filter = tracing_subscriber::EnvFilter::from_default_env();
    match log_file {
        Some(path) => {
            let file = std::fs::OpenOptions::new()
                .create(true)
                .append(true)
                .open(path)
                .with_context(|| format!("opening log file {}", path.display()))?;
            tracing_subscriber::fmt()
                .with_env_filter(filter)
                .with_ansi(false)
                .with_writer(Mutex::new(file))
                .init();
        }
        None => {
            tracing_subscriber::fmt()
                .with_env_filter(filter)
                .with_writer(io::stderr) // never pollute stdout
                .init();
        }
    }
    Ok(())
}

// ───────────────────────────────────────── drawing ───────────

fn draw(frame: &mut Frame, state: &AppState, now: Instant) {
    let layout = state.layout();
    let theme: &Theme = &state.theme;
    let scroll_row = state.scroll_row();

    let alphas = state.reveals.alphas(&state.document, &state.timings, now);
    frame.render_widget(
        PageView {
            document: &state.document,
            scroll_row,
            block_alpha: &alphas,
        },
        layout.page_area,
    );
    frame.render_widget(
        HeroWidget {
            page: state.page,
            theme,
            parallax: state.hero_parallax(),
            px_per_row: state.px_per_row(),
            timings: &state.timings,
            elapsed: state.entrance_elapsed(now),
            stay: &state.stay,
            hero_rows: state.document.hero_rows,
            scrolled_rows: scroll_row,
        },
        layout.page_area,
    );

    if state.menu.is_open() {
        frame.render_widget(
            MenuOverlay {
                page: state.page,
                theme,
                cursor: state.menu.cursor(),
            },
            layout.page_area,
        );
    }
    frame.render_widget(
        NavbarWidget {
            page: state.page,
            theme,
            solid: state.navbar_solid(),
            menu_open: state.menu.is_open(),
        },
        layout.navbar_area,
    );
    if state.progress.is_some() {
        frame.render_widget(
            ProgressBar {
                value: state.spring.value(),
                theme,
            },
            layout.navbar_area,
        );
    }

    let hint = state.config.status_bar_hint();
    let status_text = match state.active_view {
        ActiveView::Page => state.status_message.as_deref().unwrap_or(&hint),
        ActiveView::Booking => "",
    };
    let status = Paragraph::new(status_text).style(Theme::status_bar_style());
    frame.render_widget(status, layout.status_area);

    if state.active_view == ActiveView::Booking {
        frame.render_widget(
            BookingPopup {
                page: state.page,
                theme,
                stay: &state.stay,
            },
            frame.area(),
        );
    }
}

// ───────────────────────────────────────── main ─────────────

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.log_file.as_ref())?;

    let mut user_config = config::AppConfig::load();
    if let Some(ppr) = cli.px_per_row {
        user_config.tuning.px_per_row = ppr.max(1);
    }

    // ── config modes ──────────────────────────────────────────
    if cli.print_config {
        print!("{}", user_config.serialise());
        return Ok(());
    }
    if cli.write_config {
        user_config.save()?;
        println!("wrote {}", config::config_path().display());
        return Ok(());
    }

    let tuning = user_config.tuning;
    let stay = StaySummary::today(tuning.booking_lead_days, tuning.booking_nights);
    let mut state = AppState::new(cli.page, user_config, stay, Instant::now());
    tracing::info!(page = cli.page.label(), px_per_row = tuning.px_per_row, "starting");

    // ── terminal setup ────────────────────────────────────────
    enable_raw_mode()?;
    let mut stdout_handle = stdout();
    execute!(stdout_handle, EnterAlternateScreen, EnableMouseCapture)?;
    let backend = CrosstermBackend::new(stdout());
    let mut terminal = Terminal::new(backend)?;

    let size = terminal.size()?;
    state.resize(size.width, size.height);

    // ── event sources ─────────────────────────────────────────
    let mut events = spawn_input_reader(Duration::from_millis(100));
    let mut frames = tokio::time::interval(Duration::from_millis(cli.tick_ms.max(1)));
    frames.set_missed_tick_behavior(MissedTickBehavior::Skip);

    // ── event loop ────────────────────────────────────────────
    loop {
        terminal.draw(|frame| draw(frame, &state, Instant::now()))?;

        tokio::select! {
            biased;

            Some(event) = events.recv() => {
                match event {
                    AppEvent::Key(k) => handler::handle_key(&mut state, k),
                    AppEvent::Mouse(m) => handler::handle_mouse(&mut state, m),
                    AppEvent::Resize(w, h) => state.resize(w, h),
                }
            }

            _ = frames.tick() => state.tick(Instant::now()),
        }

        if state.should_quit {
            break;
        }
    }

    // ── teardown ──────────────────────────────────────────────
    state.unmount();
    disable_raw_mode()?;
    execute!(
        terminal.backend_mut(),
        LeaveAlternateScreen,
        DisableMouseCapture
    )?;
    terminal.show_cursor()?;

    Ok(())
}

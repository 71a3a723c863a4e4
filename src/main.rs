mod display;

use std::fs::File;
use std::io::{stdout, BufWriter, Write};
use std::path::{Path, PathBuf};
use std::sync::{mpsc, Mutex};
use std::thread;
use std::time::{Instant, SystemTime, UNIX_EPOCH};

use anyhow::{Context, Result};
use clap::Parser;
use crossterm::{
    cursor,
    event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers},
    terminal, ExecutableCommand,
};
use rand::rngs::StdRng;
use rand::SeedableRng;
use tracing::{error, info};

use display::{Bell, SpriteSet};
use tank_battle::compute::Intent;
use tank_battle::config::{frame_interval, DEFAULT_FPS};
use tank_battle::session::{MenuChoice, Phase, Session};

#[derive(Parser, Debug)]
#[command(name = "tank_battle")]
#[command(about = "Four-screen arcade tank battle in the terminal")]
struct Cli {
    /// Seed for the enemy AI; defaults to the clock
    #[arg(long)]
    seed: Option<u64>,
    /// Simulation ticks per second
    #[arg(long, default_value_t = DEFAULT_FPS)]
    fps: u32,
    /// Where log output goes (the terminal is busy drawing the game)
    #[arg(long, default_value = "tank_battle.log")]
    log_file: PathBuf,
    /// Ring the terminal bell on impacts
    #[arg(long)]
    sound: bool,
}

// ── Logging ───────────────────────────────────────────────────────────────────

fn init_tracing(path: &Path) -> Result<()> {
    let file = File::create(path)
        .with_context(|| format!("creating log file {}", path.display()))?;
    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info"));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_ansi(false)
        .with_writer(Mutex::new(file))
        .init();

    std::panic::set_hook(Box::new(|info| {
        let backtrace = std::backtrace::Backtrace::capture();
        error!(%info, ?backtrace, "panic");
    }));
    Ok(())
}

fn system_seed() -> u64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .unwrap_or_default()
        .as_nanos() as u64
}

// ── Input ─────────────────────────────────────────────────────────────────────

enum Action {
    Intent(Intent),
    Choose(MenuChoice),
    Quit,
}

/// Translate a key press for the current phase.  Keys that mean nothing in
/// that phase are dropped.
fn map_key(key: &KeyEvent, phase: Phase) -> Option<Action> {
    if key.code == KeyCode::Esc
        || (key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL))
    {
        return Some(Action::Quit);
    }
    match phase {
        Phase::Playing => match key.code {
            KeyCode::Right => Some(Action::Intent(Intent::TurnClockwise)),
            KeyCode::Left => Some(Action::Intent(Intent::TurnCounterClockwise)),
            KeyCode::Up => Some(Action::Intent(Intent::Forward)),
            KeyCode::Char(' ') => Some(Action::Intent(Intent::Fire)),
            _ => None,
        },
        Phase::AwaitMenuChoice(_) => match key.code {
            KeyCode::Char('y') | KeyCode::Char('Y') => Some(Action::Choose(MenuChoice::Restart)),
            KeyCode::Char('n') | KeyCode::Char('N') => Some(Action::Choose(MenuChoice::Quit)),
            _ => None,
        },
        Phase::ShowEndMenu(_) | Phase::Terminated => None,
    }
}

// ── Game loop ─────────────────────────────────────────────────────────────────

fn game_loop<W: Write>(out: &mut W, rx: &mpsc::Receiver<Event>, cli: &Cli) -> Result<()> {
    let seed = cli.seed.unwrap_or_else(system_seed);
    info!(seed, fps = cli.fps, "starting");

    let mut rng = StdRng::seed_from_u64(seed);
    let mut bell = Bell::new(cli.sound);
    let sprites = SpriteSet::standard();
    let frame = frame_interval(cli.fps);
    let mut session = Session::new();

    while session.is_running() {
        let frame_start = Instant::now();

        // ── Drain all pending input events (non-blocking) ─────────────────────
        while let Ok(ev) = rx.try_recv() {
            let Event::Key(key) = ev else { continue };
            if key.kind == KeyEventKind::Release {
                continue;
            }
            match map_key(&key, session.phase) {
                Some(Action::Intent(intent)) => session.handle_intent(intent),
                Some(Action::Choose(choice)) => session.choose(choice),
                Some(Action::Quit) => session.quit(),
                None => {}
            }
        }
        if !session.is_running() {
            break;
        }

        session.update(&mut rng, &mut bell);
        display::render(out, &session, &sprites).context("drawing frame")?;
        bell.ring(out)?;

        let elapsed = frame_start.elapsed();
        if elapsed < frame {
            thread::sleep(frame - elapsed);
        }
    }
    Ok(())
}

// ── Entry point ───────────────────────────────────────────────────────────────

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_tracing(&cli.log_file)?;

    let mut out = BufWriter::new(stdout());
    terminal::enable_raw_mode().context("enabling raw mode")?;
    out.execute(terminal::EnterAlternateScreen)?;
    out.execute(cursor::Hide)?;

    // Dedicate a thread exclusively to blocking event reads, sending them
    // through a channel so the game loop never has to block on I/O.
    let (tx, rx) = mpsc::channel::<Event>();
    thread::spawn(move || {
        while let Ok(ev) = event::read() {
            if tx.send(ev).is_err() {
                break;
            }
        }
    });

    let result = game_loop(&mut out, &rx, &cli);

    // Always restore the terminal
    let _ = out.execute(cursor::Show);
    let _ = out.execute(terminal::LeaveAlternateScreen);
    let _ = terminal::disable_raw_mode();

    if let Err(e) = &result {
        error!(error = %e, "exiting with error");
    }
    result
}

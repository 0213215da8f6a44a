use std::io::{stdout, BufWriter, Write};
use std::path::{Path, PathBuf};
use std::sync::mpsc;
use std::thread;
use std::time::{Duration, Instant};

use clap::Parser;
use crossterm::{
    cursor,
    event::{self, Event},
    terminal, ExecutableCommand,
};
use rand::thread_rng;

use space_invaders::compute::StepOutcome;
use space_invaders::config::GameConfig;
use space_invaders::display::CellCanvas;
use space_invaders::error::GameError;
use space_invaders::game::Game;
use space_invaders::input::{command_for, Command};
use space_invaders::logging::init_file_logging;
use space_invaders::scheduler::IntervalScheduler;

const DEFAULT_CONFIG: &str = "space_invaders.toml";

/// Longest wait for input before checking the timer again.
const MAX_WAIT: Duration = Duration::from_millis(50);

#[derive(Parser, Debug)]
#[command(name = "space_invaders", about = "Terminal space invaders with destructible asteroids")]
struct Args {
    /// TOML file overriding the built-in layout and tuning.
    #[arg(long)]
    config: Option<PathBuf>,

    /// Write logs to this file (the terminal is taken over by the game).
    #[arg(long)]
    log: Option<PathBuf>,
}

// ── Game loop ─────────────────────────────────────────────────────────────────

/// Runs until the player quits or the input thread goes away.
///
/// Key events are applied the moment they arrive; between events the loop
/// sleeps on the channel until the next timer deadline.
fn game_loop<W: Write>(
    out: &mut W,
    game: &mut Game<IntervalScheduler, rand::rngs::ThreadRng>,
    rx: &mpsc::Receiver<Event>,
) -> Result<(), GameError> {
    let (columns, rows) = terminal::size()?;
    let mut canvas = CellCanvas::new(
        columns,
        rows,
        game.config().canvas_width,
        game.config().canvas_height,
    );

    let mut session: u32 = 1;
    loop {
        let now = Instant::now();
        for handle in game.scheduler_mut().poll(now) {
            if let Some(StepOutcome::Restart(reason)) = game.tick(handle, &mut canvas) {
                session += 1;
                tracing::info!(session, ?reason, "new session after restart");
            }
            canvas.present(out)?;
        }

        let wait = game
            .scheduler()
            .next_deadline()
            .map(|deadline| deadline.saturating_duration_since(Instant::now()))
            .unwrap_or(MAX_WAIT)
            .min(MAX_WAIT);

        match rx.recv_timeout(wait) {
            Ok(Event::Key(key)) => match command_for(&key) {
                Some(Command::Quit) => return Ok(()),
                Some(Command::Play(action)) => game.handle_action(action),
                None => {}
            },
            Ok(Event::Resize(columns, rows)) => {
                canvas = CellCanvas::new(
                    columns,
                    rows,
                    game.config().canvas_width,
                    game.config().canvas_height,
                );
            }
            Ok(_) | Err(mpsc::RecvTimeoutError::Timeout) => {}
            Err(mpsc::RecvTimeoutError::Disconnected) => return Ok(()),
        }
    }
}

// ── Entry point ───────────────────────────────────────────────────────────────

fn main() -> Result<(), GameError> {
    let args = Args::parse();
    if let Some(path) = &args.log {
        init_file_logging(path)?;
    }

    let config = match &args.config {
        Some(path) => GameConfig::load(path)?,
        None => GameConfig::load_or_default(Path::new(DEFAULT_CONFIG)),
    };

    let mut out = BufWriter::new(stdout());
    terminal::enable_raw_mode()?;
    out.execute(terminal::EnterAlternateScreen)?;
    out.execute(cursor::Hide)?;

    // Dedicate a thread exclusively to blocking event reads, sending them
    // through a channel so the game loop never has to block on I/O.
    let (tx, rx) = mpsc::channel::<Event>();
    thread::spawn(move || loop {
        match event::read() {
            Ok(ev) => {
                if tx.send(ev).is_err() {
                    break; // receiver dropped → program exiting
                }
            }
            Err(_) => break,
        }
    });

    let mut game = Game::new(config, IntervalScheduler::new(), thread_rng());
    game.init();
    let result = game_loop(&mut out, &mut game, &rx);
    game.stop();

    // Always restore the terminal
    let _ = out.execute(cursor::Show);
    let _ = out.execute(terminal::LeaveAlternateScreen);
    let _ = terminal::disable_raw_mode();

    result
}

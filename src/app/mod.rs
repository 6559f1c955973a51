use std::error::Error;
use std::fs::File;
use std::io::{stdout, Stdout};
use std::time::{Duration, Instant};

use crossterm::event::{self, Event, KeyCode, KeyEventKind};
use crossterm::execute;
use crossterm::terminal::{
    disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen,
};
use log::info;
use ratatui::backend::CrosstermBackend;
use ratatui::Terminal;

use blockwell::config::{env_var, ENV_LOG, ENV_SEED};
use blockwell::{new_session, Game, Intent, WellConfig, POLL_MS};

use crate::ui::draw_game;

type Term = Terminal<CrosstermBackend<Stdout>>;

enum Control {
    Play(Intent),
    Quit,
}

pub fn run() -> Result<(), Box<dyn Error>> {
    init_logging()?;
    let config = WellConfig::from_env()?;
    let seed = env_var::<u64>(ENV_SEED)?;
    let mut game = new_session(config, seed)?;
    info!("starting {}x{} well, seed {:?}", config.columns, config.rows, seed);

    let mut tui = TuiGuard::new()?;
    run_loop(tui.terminal_mut(), &mut game)?;
    info!("session ended, score {}", game.score);
    Ok(())
}

// stdout belongs to the terminal UI, so logs only go to a file when asked.
fn init_logging() -> Result<(), Box<dyn Error>> {
    if let Ok(path) = std::env::var(ENV_LOG) {
        let file = File::create(path)?;
        env_logger::Builder::from_default_env()
            .target(env_logger::Target::Pipe(Box::new(file)))
            .init();
    }
    Ok(())
}

fn run_loop(terminal: &mut Term, game: &mut Game) -> Result<(), Box<dyn Error>> {
    let mut last_frame = Instant::now();

    loop {
        let now = Instant::now();
        game.tick(now - last_frame);
        last_frame = now;

        // Drain everything pressed since the last frame, in order.
        let mut timeout = Duration::from_millis(POLL_MS);
        while event::poll(timeout)? {
            timeout = Duration::ZERO;
            if let Event::Key(key) = event::read()? {
                if key.kind != KeyEventKind::Press {
                    continue;
                }
                match map_key(key.code) {
                    Some(Control::Quit) => return Ok(()),
                    Some(Control::Play(intent)) => {
                        game.apply_intent(intent);
                    }
                    None => {}
                }
            }
        }

        let snapshot = game.snapshot();
        terminal.draw(|frame| draw_game(frame, &snapshot, game.config()))?;
    }
}

fn map_key(code: KeyCode) -> Option<Control> {
    match code {
        KeyCode::Left => Some(Control::Play(Intent::MoveLeft)),
        KeyCode::Right => Some(Control::Play(Intent::MoveRight)),
        KeyCode::Down => Some(Control::Play(Intent::SoftDrop)),
        KeyCode::Up => Some(Control::Play(Intent::Rotate)),
        KeyCode::Char(' ') => Some(Control::Play(Intent::HardDrop)),
        KeyCode::Char('q') | KeyCode::Esc => Some(Control::Quit),
        _ => None,
    }
}

struct TuiGuard {
    terminal: Term,
}

impl TuiGuard {
    fn new() -> Result<Self, Box<dyn Error>> {
        enable_raw_mode()?;
        let mut stdout = stdout();
        execute!(stdout, EnterAlternateScreen)?;
        let backend = CrosstermBackend::new(stdout);
        let mut terminal = Terminal::new(backend)?;
        terminal.hide_cursor()?;
        Ok(Self { terminal })
    }

    fn terminal_mut(&mut self) -> &mut Term {
        &mut self.terminal
    }
}

impl Drop for TuiGuard {
    fn drop(&mut self) {
        let _ = disable_raw_mode();
        let _ = execute!(self.terminal.backend_mut(), LeaveAlternateScreen);
        let _ = self.terminal.show_cursor();
    }
}

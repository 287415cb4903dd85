//! Mole Mash entry point
//!
//! Terminal setup, input handling, and the cooperative timer loop that
//! drives the engine.

use std::io::{self, stdout};
use std::panic;
use std::time::{Duration, Instant, SystemTime, UNIX_EPOCH};

use crossterm::{
    cursor,
    event::{
        self, DisableMouseCapture, EnableMouseCapture, Event, KeyCode, KeyEventKind, MouseButton,
        MouseEventKind,
    },
    execute,
    terminal::{self, EnterAlternateScreen, LeaveAlternateScreen},
};
use glam::IVec2;

use mole_mash::consts::*;
use mole_mash::render;
use mole_mash::{GameState, PlayArea, Tuning};

/// Observed engine fields; a frame is drawn only when this changes
type Snapshot = (u64, u32, bool, IVec2, Option<PlayArea>);

fn observe(gs: &GameState) -> Snapshot {
    (
        gs.score(),
        gs.remaining_secs(),
        gs.is_over(),
        gs.target_pos(),
        gs.play_area(),
    )
}

fn resolve_seed(tuning: &Tuning) -> u64 {
    tuning.seed.unwrap_or_else(|| {
        SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .map(|d| d.as_millis() as u64)
            .unwrap_or(0)
    })
}

/// The engine works in terminal cells; the configured target size is
/// clamped so the mole always fits the grid.
fn report_terminal_area(gs: &mut GameState, tuning: &Tuning, cols: u16, rows: u16) {
    let size = tuning.target_size.min(cols as i32).min(rows as i32).max(1);
    gs.report_area(cols as i32, rows as i32, size);
}

fn enter_terminal(out: &mut io::Stdout) -> io::Result<()> {
    terminal::enable_raw_mode()?;
    execute!(out, EnterAlternateScreen, cursor::Hide, EnableMouseCapture)
}

fn leave_terminal(out: &mut io::Stdout) -> io::Result<()> {
    execute!(out, DisableMouseCapture, cursor::Show, LeaveAlternateScreen)?;
    terminal::disable_raw_mode()
}

/// Restore the terminal before the default handler prints, so the panic
/// message lands on a usable screen
fn install_panic_hook() {
    let default_hook = panic::take_hook();
    panic::set_hook(Box::new(move |info| {
        let mut out = stdout();
        let _ = execute!(out, DisableMouseCapture, cursor::Show, LeaveAlternateScreen);
        let _ = terminal::disable_raw_mode();
        default_hook(info);
    }));
}

fn main() -> io::Result<()> {
    env_logger::init();
    log::info!("Mole Mash starting");

    let tuning = Tuning::load();
    log::debug!("Tuning: {tuning:?}");

    let mut gs = GameState::new(resolve_seed(&tuning), tuning.round_secs);
    log::info!("Session seed: {}", gs.seed());

    install_panic_hook();
    let mut out = stdout();
    enter_terminal(&mut out)?;
    let result = run(&mut out, &mut gs, &tuning);
    leave_terminal(&mut out)?;
    result
}

fn run(out: &mut io::Stdout, gs: &mut GameState, tuning: &Tuning) -> io::Result<()> {
    let frame_dur = Duration::from_millis(FRAME_INTERVAL_MS);
    let max_stall = Duration::from_millis(MAX_FRAME_STALL_MS);
    let countdown_step = tuning.countdown_interval();
    let relocate_step = tuning.relocate_interval();

    let (mut cols, mut rows) = terminal::size()?;
    let mut too_small = cols < render::MIN_COLS || rows < render::MIN_ROWS;
    if !too_small {
        report_terminal_area(gs, tuning, cols, rows);
    }

    let mut countdown_accum = Duration::ZERO;
    let mut relocate_accum = Duration::ZERO;
    let mut last_tick = Instant::now();
    let mut last_drawn: Option<Snapshot> = None;
    let mut force_redraw = true;
    let mut pos_at_resize: Option<IVec2> = None;

    loop {
        let frame_start = Instant::now();

        while event::poll(Duration::ZERO)? {
            match event::read()? {
                Event::Key(key) if key.kind == KeyEventKind::Press => match key.code {
                    KeyCode::Char('q') | KeyCode::Esc => return Ok(()),
                    KeyCode::Char('r') => {
                        gs.restart();
                        countdown_accum = Duration::ZERO;
                        relocate_accum = Duration::ZERO;
                        log::debug!("Round restarted ({}s)", gs.round_secs());
                    }
                    _ => {}
                },
                Event::Mouse(mouse) => {
                    if let MouseEventKind::Down(MouseButton::Left) = mouse.kind {
                        if !too_small && !gs.is_over() {
                            if let Some(area) = gs.play_area() {
                                let hit = render::mole_contains(
                                    gs.target_pos(),
                                    area.target_size,
                                    mouse.column,
                                    mouse.row,
                                );
                                if hit {
                                    gs.handle_tap();
                                }
                            }
                        }
                    }
                }
                Event::Resize(c, r) => {
                    cols = c;
                    rows = r;
                    too_small = cols < render::MIN_COLS || rows < render::MIN_ROWS;
                    if !too_small {
                        report_terminal_area(gs, tuning, cols, rows);
                        pos_at_resize = Some(gs.target_pos());
                    }
                    force_redraw = true;
                    log::debug!("Resized to {cols}x{rows}");
                }
                _ => {}
            }
        }

        // Both interval timers run only while the round is active. A
        // stalled terminal pauses the round instead of fast-forwarding it.
        let now = Instant::now();
        let dt = now.duration_since(last_tick).min(max_stall);
        last_tick = now;
        if !gs.is_over() {
            countdown_accum += dt;
            relocate_accum += dt;
            while countdown_accum >= countdown_step {
                countdown_accum -= countdown_step;
                gs.advance_clock();
                if gs.is_over() {
                    log::debug!("Round over with score {}", gs.score());
                    break;
                }
            }
            while !gs.is_over() && relocate_accum >= relocate_step {
                relocate_accum -= relocate_step;
                gs.relocate_target();
            }
        }

        if let Some(p) = pos_at_resize {
            if gs.target_pos() != p {
                log::debug!("Target reseated at {} after resize", gs.target_pos());
                pos_at_resize = None;
            }
        }

        if too_small {
            if force_redraw {
                render::draw_too_small(out, cols, rows)?;
                last_drawn = None;
                force_redraw = false;
            }
        } else {
            let snapshot = observe(gs);
            if force_redraw || last_drawn != Some(snapshot) {
                render::draw_frame(out, gs, cols, rows)?;
                last_drawn = Some(snapshot);
                force_redraw = false;
            }
        }

        let elapsed = frame_start.elapsed();
        if elapsed < frame_dur {
            std::thread::sleep(frame_dur - elapsed);
        }
    }
}

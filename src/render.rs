//! Terminal frame drawing
//!
//! Stateless full-frame rendering over any `Write` sink. The app loop
//! decides when a frame is worth drawing; everything here just queues
//! crossterm commands and flushes.

use std::io::{self, Write};

use crossterm::{
    cursor, queue,
    style::{Color, Print, ResetColor, SetBackgroundColor, SetForegroundColor},
    terminal::{Clear, ClearType},
};
use glam::IVec2;

use crate::consts::LOW_TIME_SECS;
use crate::engine::GameState;

/// Smallest grid the HUD and game-over panel stay legible on
pub const MIN_COLS: u16 = 20;
pub const MIN_ROWS: u16 = 10;

const MOLE_BODY: Color = Color::DarkYellow;
const MOLE_FACE: Color = Color::Black;

/// Draw one complete frame from the current game state
pub fn draw_frame(out: &mut impl Write, gs: &GameState, cols: u16, rows: u16) -> io::Result<()> {
    queue!(out, Clear(ClearType::All))?;
    draw_hud(out, gs, cols)?;
    if let Some(area) = gs.play_area() {
        if !gs.is_over() {
            draw_mole(out, gs.target_pos(), area.target_size)?;
        }
    }
    draw_help(out, rows)?;
    if gs.is_over() {
        draw_game_over(out, gs, cols, rows)?;
    }
    queue!(out, ResetColor)?;
    out.flush()
}

/// Notice shown instead of the game when the grid is below the minimum
pub fn draw_too_small(out: &mut impl Write, cols: u16, rows: u16) -> io::Result<()> {
    queue!(
        out,
        Clear(ClearType::All),
        cursor::MoveTo(0, 0),
        SetForegroundColor(Color::Red),
        Print(format!(
            "Terminal too small ({cols}x{rows}), need at least {MIN_COLS}x{MIN_ROWS}"
        )),
        ResetColor,
    )?;
    out.flush()
}

/// Hit test a terminal cell against the mole's drawn footprint
pub fn mole_contains(pos: IVec2, size: i32, col: u16, row: u16) -> bool {
    let (c, r) = (col as i32, row as i32);
    c >= pos.x && c < pos.x + size && r >= pos.y && r < pos.y + size
}

fn time_color(gs: &GameState) -> Color {
    if gs.remaining_secs() <= LOW_TIME_SECS && !gs.is_over() {
        Color::Red
    } else {
        Color::White
    }
}

fn draw_hud(out: &mut impl Write, gs: &GameState, cols: u16) -> io::Result<()> {
    queue!(
        out,
        cursor::MoveTo(1, 0),
        SetForegroundColor(Color::Yellow),
        Print("MOLE MASH"),
        cursor::MoveTo(1, 1),
        SetForegroundColor(Color::White),
        Print(format!("Score: {}", gs.score())),
    )?;

    let time = format!("Time left: {}s", gs.remaining_secs());
    let x = cols.saturating_sub(time.chars().count() as u16 + 1);
    queue!(
        out,
        cursor::MoveTo(x, 1),
        SetForegroundColor(time_color(gs)),
        Print(time),
    )
}

fn draw_help(out: &mut impl Write, rows: u16) -> io::Result<()> {
    queue!(
        out,
        cursor::MoveTo(1, rows.saturating_sub(1)),
        SetForegroundColor(Color::DarkGrey),
        Print("whack the mole | r restart | q quit"),
    )
}

fn draw_mole(out: &mut impl Write, pos: IVec2, size: i32) -> io::Result<()> {
    let (x, y) = (pos.x as u16, pos.y as u16);
    let w = size.max(1) as u16;

    queue!(
        out,
        SetBackgroundColor(MOLE_BODY),
        SetForegroundColor(MOLE_FACE)
    )?;
    for row in 0..w {
        queue!(
            out,
            cursor::MoveTo(x, y + row),
            Print(" ".repeat(w as usize))
        )?;
    }

    // Face fits from 3 cells up
    if w >= 3 {
        let eye_row = y + w / 3;
        let eye_inset = w / 4;
        queue!(
            out,
            cursor::MoveTo(x + eye_inset, eye_row),
            Print('o'),
            cursor::MoveTo(x + w - 1 - eye_inset, eye_row),
            Print('o'),
            cursor::MoveTo(x + w / 2, y + w * 2 / 3),
            Print('ω'),
        )?;
    }
    queue!(out, ResetColor)
}

fn draw_game_over(out: &mut impl Write, gs: &GameState, cols: u16, rows: u16) -> io::Result<()> {
    let score_line = format!("Final score: {}", gs.score());
    let lines = [
        "GAME OVER",
        "",
        score_line.as_str(),
        "",
        "[R]estart   [Q]uit",
    ];

    let inner = lines.iter().map(|l| l.chars().count()).max().unwrap_or(0) + 2;
    let bw = (inner as u16 + 2).min(cols);
    let bh = lines.len() as u16 + 2;
    let x0 = cols.saturating_sub(bw) / 2;
    let y0 = rows.saturating_sub(bh) / 2;
    let pad = bw.saturating_sub(2) as usize;

    queue!(
        out,
        SetForegroundColor(Color::White),
        cursor::MoveTo(x0, y0),
        Print(format!("┌{}┐", "─".repeat(pad))),
    )?;
    for (i, line) in lines.iter().enumerate() {
        let lw = line.chars().count();
        let left = pad.saturating_sub(lw) / 2;
        let right = pad.saturating_sub(lw + left);
        queue!(
            out,
            cursor::MoveTo(x0, y0 + 1 + i as u16),
            Print(format!("│{}{line}{}│", " ".repeat(left), " ".repeat(right))),
        )?;
    }
    queue!(
        out,
        cursor::MoveTo(x0, y0 + bh - 1),
        Print(format!("└{}┘", "─".repeat(pad))),
    )?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::consts::ROUND_DURATION_SECS;

    fn drawn(gs: &GameState) -> String {
        let mut buf: Vec<u8> = Vec::new();
        draw_frame(&mut buf, gs, 60, 24).unwrap();
        String::from_utf8(buf).unwrap()
    }

    #[test]
    fn test_frame_shows_hud_readouts() {
        let mut gs = GameState::new(1, ROUND_DURATION_SECS);
        gs.report_area(60, 24, 4);
        let frame = drawn(&gs);
        assert!(frame.contains("MOLE MASH"));
        assert!(frame.contains("Score: 0"));
        assert!(frame.contains("Time left: 60s"));
    }

    #[test]
    fn test_frame_before_area_reported_draws() {
        let gs = GameState::new(2, ROUND_DURATION_SECS);
        let frame = drawn(&gs);
        assert!(frame.contains("MOLE MASH"));
    }

    #[test]
    fn test_game_over_panel_shows_final_score() {
        let mut gs = GameState::new(3, ROUND_DURATION_SECS);
        gs.report_area(60, 24, 4);
        for _ in 0..3 {
            gs.handle_tap();
        }
        for _ in 0..=ROUND_DURATION_SECS {
            gs.advance_clock();
        }
        assert!(gs.is_over());

        let frame = drawn(&gs);
        assert!(frame.contains("GAME OVER"));
        assert!(frame.contains("Final score: 3"));
    }

    #[test]
    fn test_mole_hidden_once_over() {
        let mut gs = GameState::new(5, ROUND_DURATION_SECS);
        gs.report_area(60, 24, 4);
        assert!(drawn(&gs).contains('ω'));

        for _ in 0..=ROUND_DURATION_SECS {
            gs.advance_clock();
        }
        assert!(gs.is_over());
        assert!(!drawn(&gs).contains('ω'));
    }

    #[test]
    fn test_time_turns_red_only_while_running() {
        let mut gs = GameState::new(4, ROUND_DURATION_SECS);
        gs.report_area(60, 24, 4);
        assert_eq!(time_color(&gs), Color::White);

        while gs.remaining_secs() > LOW_TIME_SECS {
            gs.advance_clock();
        }
        assert_eq!(time_color(&gs), Color::Red);

        while !gs.is_over() {
            gs.advance_clock();
        }
        assert_eq!(time_color(&gs), Color::White);
    }

    #[test]
    fn test_mole_hit_testing() {
        let pos = IVec2::new(10, 5);
        assert!(mole_contains(pos, 4, 10, 5));
        assert!(mole_contains(pos, 4, 13, 8));
        assert!(!mole_contains(pos, 4, 14, 5));
        assert!(!mole_contains(pos, 4, 10, 9));
        assert!(!mole_contains(pos, 4, 9, 5));
    }

    #[test]
    fn test_too_small_notice_names_minimum() {
        let mut buf: Vec<u8> = Vec::new();
        draw_too_small(&mut buf, 10, 5).unwrap();
        let frame = String::from_utf8(buf).unwrap();
        assert!(frame.contains("10x5"));
        assert!(frame.contains(&format!("{MIN_COLS}x{MIN_ROWS}")));
    }
}

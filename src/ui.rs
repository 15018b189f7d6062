//! Text rendering of boards and attack histories for the console.

use core::fmt::Write;

use crate::{
    board::CellState,
    domain::{BoardResponse, HitsResponse, CELL_HIT, CELL_MISS},
    game::Game,
};

fn write_header(out: &mut String, size: usize) {
    out.push_str("   ");
    for x in 0..size {
        let _ = write!(out, "{:>3}", x);
    }
    out.push('\n');
}

/// Render a fog-of-war board: `X` hit, `o` miss, `.` unknown.
pub fn render_board(view: &BoardResponse) -> String {
    let mut out = String::new();
    write_header(&mut out, view.size);
    for (y, row) in view.cells.iter().enumerate() {
        let _ = write!(out, "{:>3}", y);
        for &status in row {
            let ch = match status {
                CELL_HIT => 'X',
                CELL_MISS => 'o',
                _ => '.',
            };
            let _ = write!(out, "{:>3}", ch);
        }
        out.push('\n');
    }
    out.push_str("   Legend: X=Hit  o=Miss  .=Unknown\n");
    out
}

/// Render an attack history, one attack per line.
pub fn render_hits(hits: &HitsResponse) -> String {
    if hits.hits.is_empty() {
        return "No attacks received yet.\n".to_string();
    }
    let mut out = String::new();
    for (i, hit) in hits.hits.iter().enumerate() {
        let _ = writeln!(out, "{:>4}. ({}, {}) {}", i + 1, hit.x, hit.y, hit.result);
    }
    out
}

impl Game {
    /// Owner's view of the board with every boat shown, followed by the
    /// boat list. Not meant for opponents.
    pub fn debug_render(&self) -> String {
        let state = self.read();
        let board = &state.board;
        let mut out = String::new();
        write_header(&mut out, board.size());
        for (y, row) in board.rows().enumerate() {
            let _ = write!(out, "{:>3}", y);
            for cell in row {
                let ch = match (cell.is_occupied(), cell.is_revealed(), cell.state()) {
                    (true, true, CellState::Hit) => 'X',
                    (true, _, _) => 'B',
                    (false, true, CellState::Miss) => 'o',
                    (false, _, _) => '~',
                };
                let _ = write!(out, "{:>3}", ch);
            }
            out.push('\n');
        }
        out.push_str("   Legend: B=Boat  X=Hit  o=Miss  ~=Water\n\n   Boats:\n");
        for boat in &state.boats {
            let (x, y) = boat.origin();
            let _ = writeln!(
                out,
                "     #{} size={} at=({}, {}) {} hits={}/{}{}",
                boat.id(),
                boat.size(),
                x,
                y,
                boat.orientation(),
                boat.hit_count(),
                boat.size(),
                if boat.is_afloat() { "" } else { " SUNK" }
            );
        }
        out
    }
}

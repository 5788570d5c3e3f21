//! Text rendering of the three grids, side by side.
//!
//! Empty cells show their index. A mark on a grid's completed line is shown
//! as `[X]`, the latest move as `(X)`.

use crossterm::style::{StyledContent, Stylize};
use misere_core::{Cell, GameState, GridId, LineResult, Mark, MoveRecord};

const GAP: &str = "     ";
const SEPARATOR: &str = "---+---+---";
const GRID_WIDTH: usize = 11;

#[derive(Clone, Copy, PartialEq, Eq, Debug)]
enum CellKind {
    Empty,
    Mark(Mark),
    Latest(Mark),
    Line(Mark),
}

fn classify(
    game: &GameState,
    id: GridId,
    cell: Cell,
    line: Option<LineResult>,
    latest: Option<MoveRecord>,
) -> CellKind {
    match game.grid(id).get(cell) {
        None => CellKind::Empty,
        Some(mark) if line.is_some_and(|l| l.contains(cell)) => CellKind::Line(mark),
        Some(mark) if latest == Some(MoveRecord::new(id, cell)) => CellKind::Latest(mark),
        Some(mark) => CellKind::Mark(mark),
    }
}

fn tint(text: String, mark: Mark) -> StyledContent<String> {
    match mark {
        Mark::First => text.red(),
        Mark::Second => text.cyan(),
    }
}

fn paint(kind: CellKind, cell: Cell, color: bool) -> String {
    let text = match kind {
        CellKind::Empty => format!(" {cell} "),
        CellKind::Mark(mark) => format!(" {mark} "),
        CellKind::Latest(mark) => format!("({mark})"),
        CellKind::Line(mark) => format!("[{mark}]"),
    };
    if !color {
        return text;
    }
    match kind {
        CellKind::Empty => text.dark_grey().to_string(),
        CellKind::Mark(mark) => tint(text, mark).to_string(),
        CellKind::Latest(mark) => tint(text, mark).bold().to_string(),
        CellKind::Line(mark) => tint(text, mark).bold().underlined().to_string(),
    }
}

/// Render the grids and the status line.
pub fn render(game: &GameState, color: bool) -> String {
    let latest = game.latest_move();
    let lines = GridId::ALL.map(|id| game.grid_line(id));

    let mut rows = Vec::with_capacity(8);
    rows.push(
        GridId::ALL
            .map(|id| {
                let name: &'static str = id.into();
                format!("{name:^GRID_WIDTH$}")
            })
            .join(GAP),
    );

    for row in 0..3u8 {
        let text = GridId::ALL.map(|id| {
            (0..3u8)
                .map(|col| {
                    let cell = Cell::from_row_col(row, col);
                    paint(classify(game, id, cell, lines[id.index()], latest), cell, color)
                })
                .collect::<Vec<_>>()
                .join("|")
        });
        rows.push(text.join(GAP));
        if row < 2 {
            rows.push([SEPARATOR; 3].join(GAP));
        }
    }

    rows.push(String::new());
    rows.push(game.status_line());

    rows.iter()
        .map(|row| row.trim_end())
        .collect::<Vec<_>>()
        .join("\n")
}

/// Numbered move list, one move per line.
pub fn history_text(game: &GameState) -> String {
    if game.history().is_empty() {
        return "No moves yet.".to_string();
    }
    game.history()
        .iter()
        .enumerate()
        .map(|(i, record)| format!("{:>2}. {} {record}", i + 1, Mark::at_step(i)))
        .collect::<Vec<_>>()
        .join("\n")
}

//! Render game positions to SVG.
//!
//! Usage:
//!   # Single position from move sequence
//!   cargo run --release --bin render -- --moves "first:4 second:0 first:0" -o board.svg
//!
//!   # Batch render all positions in a game
//!   cargo run --release --bin render -- --game "first:4 second:0 ..." --output-dir ./frames/

use std::fs;
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use misere_core::{parse_moves, Cell, GameState, GridId, Mark, MoveRecord};
use tracing::debug;
use tracing_subscriber::EnvFilter;

// ============================================================================
// Layout
// ============================================================================

const CELL_SIZE: f32 = 96.0;
const CELL_GAP: f32 = 6.0;
const BOARD_PADDING: f32 = 12.0;
const BOARD_GAP: f32 = 24.0;
const CELL_RADIUS: f32 = 6.0;
const BOARD_RADIUS: f32 = 10.0;
const STATUS_HEIGHT: f32 = 48.0;

// Image padding (space around the entire content)
const IMAGE_PADDING: f32 = 16.0;

// Colors
const BG_COLOR: &str = "#1a1a1a";
const BOARD_BG: &str = "#2a2a2a";
const CELL_BG: &str = "#3a3a3a";
const X_COLOR: &str = "#e74c3c";
const O_COLOR: &str = "#3498db";
const TEXT_COLOR: &str = "#dddddd";

// Mark strokes
const MARK_INSET: f32 = 26.0;
const MARK_STROKE: f32 = 10.0;

// Highlight colors
const HIGHLIGHT_LAST_MOVE: &str = "#f39c12";
const HIGHLIGHT_LINE: &str = "#88cc88";

// ============================================================================
// SVG generation
// ============================================================================

/// Options for rendering
#[derive(Clone, Copy, Debug)]
struct RenderOptions {
    highlight_last: bool,
    highlight_lines: bool,
    scale: f32,
}

impl Default for RenderOptions {
    fn default() -> Self {
        RenderOptions { highlight_last: false, highlight_lines: true, scale: 1.0 }
    }
}

fn board_outer() -> f32 {
    3.0 * CELL_SIZE + 2.0 * CELL_GAP + 2.0 * BOARD_PADDING
}

/// Draw one mark centred in the cell at (x, y).
fn render_mark_svg(mark: Mark, x: f32, y: f32) -> String {
    match mark {
        Mark::First => {
            let (x0, y0) = (x + MARK_INSET, y + MARK_INSET);
            let (x1, y1) = (x + CELL_SIZE - MARK_INSET, y + CELL_SIZE - MARK_INSET);
            format!(
                "  <path d=\"M {x0} {y0} L {x1} {y1} M {x1} {y0} L {x0} {y1}\" stroke=\"{X_COLOR}\" stroke-width=\"{MARK_STROKE}\" stroke-linecap=\"round\"/>\n"
            )
        }
        Mark::Second => {
            let c = CELL_SIZE / 2.0;
            let r = c - MARK_INSET;
            format!(
                "  <circle cx=\"{}\" cy=\"{}\" r=\"{r}\" fill=\"none\" stroke=\"{O_COLOR}\" stroke-width=\"{MARK_STROKE}\"/>\n",
                x + c,
                y + c
            )
        }
    }
}

/// Generate one grid, top-left corner at (x, y)
fn render_grid_svg(game: &GameState, id: GridId, x: f32, y: f32, opts: &RenderOptions) -> String {
    let mut svg = String::new();
    let outer = board_outer();

    svg.push_str(&format!(
        "  <rect x=\"{x}\" y=\"{y}\" width=\"{outer}\" height=\"{outer}\" rx=\"{BOARD_RADIUS}\" fill=\"{BOARD_BG}\"/>\n"
    ));

    let line = if opts.highlight_lines { game.grid_line(id) } else { None };
    let latest = if opts.highlight_last { game.latest_move() } else { None };

    for cell in Cell::all() {
        let cx = x + BOARD_PADDING + cell.col() as f32 * (CELL_SIZE + CELL_GAP);
        let cy = y + BOARD_PADDING + cell.row() as f32 * (CELL_SIZE + CELL_GAP);

        let on_line = line.is_some_and(|l| l.contains(cell));
        let is_latest = latest == Some(MoveRecord::new(id, cell));

        let (fill, stroke, stroke_width) = if on_line {
            ("#4a5a3a", HIGHLIGHT_LINE, 3.0)
        } else if is_latest {
            ("#5a4a3a", HIGHLIGHT_LAST_MOVE, 3.0)
        } else {
            (CELL_BG, "transparent", 0.0)
        };

        svg.push_str(&format!(
            "  <rect x=\"{cx}\" y=\"{cy}\" width=\"{CELL_SIZE}\" height=\"{CELL_SIZE}\" rx=\"{CELL_RADIUS}\" fill=\"{fill}\" stroke=\"{stroke}\" stroke-width=\"{stroke_width}\"/>\n"
        ));

        if let Some(mark) = game.grid(id).get(cell) {
            svg.push_str(&render_mark_svg(mark, cx, cy));
        }
    }

    svg
}

/// Generate SVG for the three grids stacked vertically
fn render_game_svg(game: &GameState, opts: &RenderOptions) -> String {
    let scale = if opts.scale > 0.0 { opts.scale } else { 1.0 };
    let outer = board_outer();

    let content_width = outer;
    let content_height = 3.0 * outer + 2.0 * BOARD_GAP + STATUS_HEIGHT;
    let width = content_width + 2.0 * IMAGE_PADDING;
    let height = content_height + 2.0 * IMAGE_PADDING;

    let mut svg = String::new();

    // SVG header with viewBox for scaling
    svg.push_str(&format!(
        "<svg xmlns=\"http://www.w3.org/2000/svg\" width=\"{}\" height=\"{}\" viewBox=\"0 0 {width} {height}\">\n",
        width * scale,
        height * scale
    ));
    svg.push_str(&format!("  <rect width=\"{width}\" height=\"{height}\" fill=\"{BG_COLOR}\"/>\n"));

    for id in GridId::ALL {
        let y = IMAGE_PADDING + id.index() as f32 * (outer + BOARD_GAP);
        svg.push_str(&render_grid_svg(game, id, IMAGE_PADDING, y, opts));
    }

    let text_y = IMAGE_PADDING + 3.0 * outer + 2.0 * BOARD_GAP + STATUS_HEIGHT / 2.0 + 6.0;
    svg.push_str(&format!(
        "  <text x=\"{}\" y=\"{text_y}\" font-family=\"system-ui, sans-serif\" font-size=\"20\" fill=\"{TEXT_COLOR}\" text-anchor=\"middle\">{}</text>\n",
        width / 2.0,
        game.status_line()
    ));

    svg.push_str("</svg>\n");
    svg
}

// ============================================================================
// CLI
// ============================================================================

/// Render triple-grid misère positions to SVG
#[derive(Parser, Debug)]
#[command(name = "render")]
#[command(version)]
struct Args {
    /// Render the position after these moves
    #[arg(long, conflicts_with = "game")]
    moves: Option<String>,

    /// Render every position of this game, one frame per move
    #[arg(long)]
    game: Option<String>,

    /// Output file for single position mode
    #[arg(short, long, default_value = "board.svg")]
    output: PathBuf,

    /// Output directory for batch mode
    #[arg(long, default_value = ".")]
    output_dir: PathBuf,

    /// Highlight the latest move
    #[arg(long)]
    highlight_last: bool,

    /// Do not highlight completed lines
    #[arg(long)]
    no_lines: bool,

    /// Scale factor
    #[arg(long, default_value_t = 1.0)]
    scale: f32,
}

fn main() -> Result<()> {
    let args = Args::parse();

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let opts = RenderOptions {
        highlight_last: args.highlight_last,
        highlight_lines: !args.no_lines,
        scale: args.scale,
    };

    // Batch mode: render all positions in a game
    if let Some(text) = args.game {
        let moves = parse_moves(&text).context("invalid --game")?;
        fs::create_dir_all(&args.output_dir)
            .with_context(|| format!("creating {}", args.output_dir.display()))?;

        let mut game = GameState::new();
        for i in 0..=moves.len() {
            if let Some(&record) = i.checked_sub(1).and_then(|j| moves.get(j)) {
                if !game.apply_move(record.grid, record.cell) {
                    anyhow::bail!("move {i} ({record}) was rejected");
                }
            }

            // Highlight last move in every frame after the first
            let frame_opts = RenderOptions { highlight_last: true, ..opts };
            let svg = render_game_svg(&game, &frame_opts);
            let path = args.output_dir.join(format!("move-{i:02}.svg"));
            fs::write(&path, &svg).with_context(|| format!("writing {}", path.display()))?;
            println!("Wrote {}", path.display());
        }

        println!("\nRendered {} frames", moves.len() + 1);
        return Ok(());
    }

    // Single position mode
    let Some(text) = args.moves else {
        anyhow::bail!("specify --moves or --game");
    };
    let moves = parse_moves(&text).context("invalid --moves")?;
    let game = GameState::replay(&moves).context("could not replay --moves")?;
    debug!(step = game.step(), outcome = ?game.current_outcome(), "rendering position");

    let svg = render_game_svg(&game, &opts);
    fs::write(&args.output, &svg).with_context(|| format!("writing {}", args.output.display()))?;
    println!("Wrote {}", args.output.display());
    Ok(())
}

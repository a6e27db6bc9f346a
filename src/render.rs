use std::io::{self, Stdout, Write};

use crossterm::cursor::MoveTo;
use crossterm::style::{Color, Print, ResetColor, SetForegroundColor};
use crossterm::terminal::{self, Clear, ClearType};
use crossterm::QueueableCommand;
use unicode_width::UnicodeWidthStr;

use crate::game::Game;
use crate::geometry::Pos;
use crate::grid::{Grid, Tile, GRID_H, GRID_W};

/// Terminal columns per board cell.
const CELL_W: usize = 2;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Glyph {
    Player,
    Wall,
    Empty,
    Door,
}

impl Glyph {
    pub fn at(grid: &Grid, player: Pos, pos: Pos) -> Glyph {
        if pos == player {
            return Glyph::Player;
        }
        Glyph::from(grid[pos])
    }

    pub fn text(self) -> &'static str {
        match self {
            Glyph::Player => "@",
            Glyph::Wall => "██",
            Glyph::Empty => "·",
            Glyph::Door => "▶",
        }
    }

    fn color(self) -> Color {
        match self {
            Glyph::Player => Color::Yellow,
            Glyph::Wall => Color::Blue,
            Glyph::Empty => Color::DarkGrey,
            Glyph::Door => Color::Green,
        }
    }
}

impl From<Tile> for Glyph {
    fn from(tile: Tile) -> Glyph {
        match tile {
            Tile::Wall => Glyph::Wall,
            Tile::Empty => Glyph::Empty,
            Tile::Door => Glyph::Door,
        }
    }
}

fn padding(text: &str) -> usize {
    CELL_W.saturating_sub(UnicodeWidthStr::width(text))
}

fn hud(traversed: u32) -> String {
    format!("Rooms traversed: {traversed}")
}

/// Plain-text frame: one line per grid row, then the traversal counter.
pub fn render_text(grid: &Grid, player: Pos, traversed: u32) -> String {
    let mut out = String::with_capacity((GRID_W * CELL_W * 3 + 1) * GRID_H + 32);
    for (y, row) in grid.rows().enumerate() {
        for (x, &tile) in row.iter().enumerate() {
            let glyph = if Pos::new(x, y) == player {
                Glyph::Player
            } else {
                Glyph::from(tile)
            };
            let text = glyph.text();
            out.push_str(text);
            out.extend(std::iter::repeat(' ').take(padding(text)));
        }
        out.push('\n');
    }
    out.push_str(&hud(traversed));
    out
}

/// Something that can show the current game state.
pub trait Screen {
    fn draw(&mut self, game: &Game) -> io::Result<()>;
}

/// Full-screen renderer for raw mode. Centers the board and only redraws cells that
/// changed since the last frame.
pub struct TermRenderer {
    out: Stdout,
    last: Vec<Glyph>,
    last_hud: String,
    needs_full: bool,
    origin_x: u16,
    origin_y: u16,
}

impl TermRenderer {
    pub fn new(out: Stdout) -> Self {
        Self {
            out,
            last: vec![Glyph::Empty; GRID_W * GRID_H],
            last_hud: String::new(),
            needs_full: true,
            origin_x: 0,
            origin_y: 0,
        }
    }

    fn draw_cell(&mut self, x: usize, y: usize, glyph: Glyph) -> io::Result<()> {
        let x_pos = self.origin_x + (x * CELL_W) as u16;
        let y_pos = self.origin_y + y as u16;
        let text = glyph.text();
        self.out.queue(MoveTo(x_pos, y_pos))?;
        self.out.queue(SetForegroundColor(glyph.color()))?;
        self.out.queue(Print(text))?;
        for _ in 0..padding(text) {
            self.out.queue(Print(' '))?;
        }
        self.out.queue(ResetColor)?;
        Ok(())
    }
}

impl Screen for TermRenderer {
    fn draw(&mut self, game: &Game) -> io::Result<()> {
        let needed_h = (GRID_H + 1) as u16;
        let needed_w = (GRID_W * CELL_W) as u16;

        let (term_w, term_h) = terminal::size()?;
        if term_w < needed_w || term_h < needed_h {
            self.out.queue(Clear(ClearType::All))?;
            self.out.queue(MoveTo(0, 0))?;
            let msg = format!(
                "Terminal too small. Need at least {}x{} (cols x rows). Current: {}x{}.",
                needed_w, needed_h, term_w, term_h
            );
            self.out.queue(Print(msg))?;
            self.out.flush()?;
            self.needs_full = true;
            return Ok(());
        }

        let origin_x = (term_w - needed_w) / 2;
        let origin_y = (term_h - needed_h) / 2;
        if origin_x != self.origin_x || origin_y != self.origin_y {
            self.origin_x = origin_x;
            self.origin_y = origin_y;
            self.needs_full = true;
        }
        if self.needs_full {
            self.out.queue(Clear(ClearType::All))?;
        }

        let grid = game.grid();
        let player = game.player();
        for y in 0..GRID_H {
            for x in 0..GRID_W {
                let glyph = Glyph::at(grid, player, Pos::new(x, y));
                let idx = y * GRID_W + x;
                if self.needs_full || glyph != self.last[idx] {
                    self.last[idx] = glyph;
                    self.draw_cell(x, y, glyph)?;
                }
            }
        }

        let hud = format!("{}  (wasd/arrows move, r restart, q quit)", hud(game.traversed()));
        if self.needs_full || hud != self.last_hud {
            self.out.queue(MoveTo(self.origin_x, self.origin_y + GRID_H as u16))?;
            self.out.queue(Clear(ClearType::CurrentLine))?;
            self.out.queue(SetForegroundColor(Color::White))?;
            self.out.queue(Print(&hud))?;
            self.out.queue(ResetColor)?;
            self.last_hud = hud;
        }
        self.needs_full = false;

        self.out.flush()
    }
}

/// Cooked-mode renderer: clears the screen, prints the text frame and a prompt.
pub struct LineRenderer<W> {
    out: W,
    clear: bool,
}

impl<W: Write> LineRenderer<W> {
    pub fn new(out: W) -> Self {
        Self { out, clear: true }
    }

    /// Frames are appended instead of clearing the screen first.
    pub fn without_clear(out: W) -> Self {
        Self { out, clear: false }
    }

    pub fn into_inner(self) -> W {
        self.out
    }
}

impl<W: Write> Screen for LineRenderer<W> {
    fn draw(&mut self, game: &Game) -> io::Result<()> {
        if self.clear {
            self.out.queue(Clear(ClearType::All))?;
            self.out.queue(MoveTo(0, 0))?;
        }
        let frame = render_text(game.grid(), game.player(), game.traversed());
        write!(self.out, "\n{frame}\n> ")?;
        self.out.flush()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::room::{Room, START};

    fn sample() -> (Grid, Pos) {
        let mut grid = Grid::bordered();
        let door = Pos::new(GRID_W - 1, 2);
        grid[door] = Tile::Door;
        (grid, door)
    }

    #[test]
    fn glyphs_are_distinct() {
        let all = [Glyph::Player, Glyph::Wall, Glyph::Empty, Glyph::Door];
        for (i, a) in all.iter().enumerate() {
            for b in &all[i + 1..] {
                assert_ne!(a.text(), b.text());
            }
        }
    }

    #[test]
    fn text_frame_layout() {
        let (grid, _) = sample();
        let frame = render_text(&grid, START, 3);
        let lines: Vec<&str> = frame.lines().collect();

        assert_eq!(lines.len(), GRID_H + 1);
        assert_eq!(lines[0], "██".repeat(GRID_W));
        assert!(lines[2].ends_with("▶ "));
        assert!(lines[START.y].starts_with("██@ · "));
        assert_eq!(lines[GRID_H], "Rooms traversed: 3");
        for line in &lines[..GRID_H] {
            assert_eq!(UnicodeWidthStr::width(*line), GRID_W * CELL_W);
        }
    }

    #[test]
    fn text_frame_matches_cell_glyphs() {
        let (mut grid, _) = sample();
        grid[Pos::new(4, 3)] = Tile::Wall;
        let player = Pos::new(6, 7);
        let frame = render_text(&grid, player, 0);

        for (y, line) in frame.lines().take(GRID_H).enumerate() {
            let expected: String = (0..GRID_W)
                .map(|x| {
                    let text = Glyph::at(&grid, player, Pos::new(x, y)).text();
                    format!("{text}{}", " ".repeat(padding(text)))
                })
                .collect();
            assert_eq!(line, expected, "row {y}");
        }
    }

    #[test]
    fn player_overlays_its_cell() {
        let (grid, door) = sample();
        assert_eq!(Glyph::at(&grid, door, door), Glyph::Player);
        assert_eq!(Glyph::at(&grid, START, door), Glyph::Door);
    }

    #[test]
    fn line_renderer_prints_frame_and_prompt() {
        let (grid, _) = sample();
        let game = Game::from_room(Room::new(grid, START).unwrap());
        let mut screen = LineRenderer::without_clear(Vec::new());

        screen.draw(&game).unwrap();

        let out = String::from_utf8(screen.into_inner()).unwrap();
        assert!(out.contains("Rooms traversed: 0"));
        assert!(out.ends_with("> "));
    }
}

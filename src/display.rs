/// Terminal front-end. All terminal I/O lives here.
///
/// The playfield is 800×600 pixels; every draw call is scaled down onto the
/// terminal's character grid.  No game logic is performed here.

use std::collections::HashMap;
use std::io::{self, Write};

use crossterm::{
    cursor,
    style::{self, Color, Print},
    terminal, QueueableCommand,
};
use tank_battle::config::{HEIGHT, WIDTH};
use tank_battle::render::{paint, Audio, Canvas, SpriteDraw, SpriteKind};
use tank_battle::session::Session;

// ── Colour palette ────────────────────────────────────────────────────────────

const C_WALL: Color = Color::DarkRed;
const C_PLAYER: Color = Color::Blue;
const C_ENEMY: Color = Color::Red;
const C_WRECK: Color = Color::DarkGrey;
const C_BULLET: Color = Color::White;
const C_EXPLOSION: Color = Color::Yellow;
const C_TREE: Color = Color::Green;
const C_TEXT: Color = Color::Yellow;
const C_HINT: Color = Color::DarkGrey;
const C_MENU: Color = Color::Cyan;

const TANK_ARROWS: [char; 8] = ['↑', '↗', '→', '↘', '↓', '↙', '←', '↖'];

// ── Sprites ───────────────────────────────────────────────────────────────────

/// Character cells standing in for one sprite sheet.  `frames` is indexed
/// by the draw's animation frame.
#[derive(Clone, Debug)]
pub struct Glyph {
    pub frames: &'static [char],
    pub color: Color,
}

/// Glyphs by sprite kind.  Kinds without an entry are simply not drawn.
#[derive(Clone, Debug, Default)]
pub struct SpriteSet {
    glyphs: HashMap<SpriteKind, Glyph>,
}

impl SpriteSet {
    pub fn standard() -> Self {
        let mut glyphs = HashMap::new();
        glyphs.insert(SpriteKind::Wall, Glyph { frames: &['█'], color: C_WALL });
        glyphs.insert(SpriteKind::PlayerTank, Glyph { frames: &TANK_ARROWS, color: C_PLAYER });
        glyphs.insert(SpriteKind::EnemyTank, Glyph { frames: &TANK_ARROWS, color: C_ENEMY });
        glyphs.insert(SpriteKind::Wreck, Glyph { frames: &['▓', '▒'], color: C_WRECK });
        glyphs.insert(SpriteKind::Bullet, Glyph { frames: &['•'], color: C_BULLET });
        glyphs.insert(SpriteKind::Explosion, Glyph { frames: &['✶', '*', '·'], color: C_EXPLOSION });
        glyphs.insert(SpriteKind::Tree, Glyph { frames: &['♣'], color: C_TREE });
        Self { glyphs }
    }

    fn glyph(&self, kind: SpriteKind, frame: u8) -> Option<(char, Color)> {
        let glyph = self.glyphs.get(&kind)?;
        let ch = glyph.frames.get(usize::from(frame) % glyph.frames.len().max(1))?;
        Some((*ch, glyph.color))
    }
}

// ── Canvas over a terminal ────────────────────────────────────────────────────

/// Scales playfield pixels to terminal cells.  The bottom row is kept free
/// for the controls hint.  The first I/O error is held until [`finish`].
///
/// [`finish`]: TerminalCanvas::finish
pub struct TerminalCanvas<'a, W: Write> {
    out: &'a mut W,
    sprites: &'a SpriteSet,
    cols: u16,
    rows: u16,
    error: Option<io::Error>,
}

impl<'a, W: Write> TerminalCanvas<'a, W> {
    pub fn new(out: &'a mut W, sprites: &'a SpriteSet, cols: u16, rows: u16) -> Self {
        Self {
            out,
            sprites,
            cols,
            rows: rows.saturating_sub(1),
            error: None,
        }
    }

    fn col(&self, x: i32) -> i32 {
        x * i32::from(self.cols) / WIDTH
    }

    fn row(&self, y: i32) -> i32 {
        y * i32::from(self.rows) / HEIGHT
    }

    fn put(&mut self, col: i32, row: i32, text: &str, color: Color) {
        if self.error.is_some()
            || col < 0
            || row < 0
            || col >= i32::from(self.cols)
            || row >= i32::from(self.rows)
        {
            return;
        }
        let result = self
            .out
            .queue(cursor::MoveTo(col as u16, row as u16))
            .and_then(|o| o.queue(style::SetForegroundColor(color)))
            .and_then(|o| o.queue(Print(text)))
            .map(|_| ());
        if let Err(e) = result {
            self.error = Some(e);
        }
    }

    pub fn finish(self) -> io::Result<()> {
        match self.error {
            Some(e) => Err(e),
            None => Ok(()),
        }
    }
}

impl<W: Write> Canvas for TerminalCanvas<'_, W> {
    fn render_sprite(&mut self, draw: &SpriteDraw) {
        let Some((ch, color)) = self.sprites.glyph(draw.kind, draw.frame) else {
            return;
        };
        let c1 = self.col(draw.x);
        let r1 = self.row(draw.y);
        let c2 = self.col(draw.x + draw.width).max(c1 + 1);
        let r2 = self.row(draw.y + draw.height).max(r1 + 1);
        let line: String = std::iter::repeat(ch).take((c2 - c1) as usize).collect();
        for row in r1..r2 {
            self.put(c1, row, &line, color);
        }
    }

    fn render_text(&mut self, text: &str, x: i32, y: i32) {
        let (col, row) = (self.col(x), self.row(y));
        self.put(col, row, text, C_TEXT);
    }
}

// ── Audio ─────────────────────────────────────────────────────────────────────

/// Impact sounds as the terminal bell, rung at most once per frame.
#[derive(Debug, Default)]
pub struct Bell {
    pub enabled: bool,
    pending: bool,
}

impl Bell {
    pub fn new(enabled: bool) -> Self {
        Self { enabled, pending: false }
    }

    pub fn ring<W: Write>(&mut self, out: &mut W) -> io::Result<()> {
        if std::mem::take(&mut self.pending) && self.enabled {
            out.write_all(b"\x07")?;
            out.flush()?;
        }
        Ok(())
    }
}

impl Audio for Bell {
    fn play_impact(&mut self) {
        self.pending = true;
    }
}

// ── Public entry point ────────────────────────────────────────────────────────

/// Render one complete frame.
pub fn render<W: Write>(out: &mut W, session: &Session, sprites: &SpriteSet) -> io::Result<()> {
    let (cols, rows) = terminal::size()?;
    out.queue(terminal::Clear(terminal::ClearType::All))?;

    let mut canvas = TerminalCanvas::new(out, sprites, cols, rows);
    paint(&session.world, &mut canvas);
    canvas.finish()?;

    draw_controls_hint(out, session, rows)?;
    if let Some(lines) = session.end_message() {
        draw_end_menu(out, &lines, cols, rows)?;
    }

    // Park cursor in a harmless spot and flush
    out.queue(style::ResetColor)?;
    out.queue(cursor::MoveTo(0, rows.saturating_sub(1)))?;
    out.flush()?;
    Ok(())
}

// ── Controls hint (last row) ──────────────────────────────────────────────────

fn draw_controls_hint<W: Write>(out: &mut W, session: &Session, rows: u16) -> io::Result<()> {
    out.queue(cursor::MoveTo(1, rows.saturating_sub(1)))?;
    out.queue(style::SetForegroundColor(C_HINT))?;
    out.queue(Print(format!(
        "← → : Turn   ↑ : Drive   SPACE : Fire   ESC : Quit   Screen {}",
        session.world.active_screen.0
    )))?;
    Ok(())
}

// ── End-of-round message box ──────────────────────────────────────────────────

fn draw_end_menu<W: Write>(out: &mut W, lines: &[String], cols: u16, rows: u16) -> io::Result<()> {
    let inner = lines.iter().map(|l| l.chars().count()).max().unwrap_or(0) + 4;
    let top = format!("╔{}╗", "═".repeat(inner));
    let bottom = format!("╚{}╝", "═".repeat(inner));

    let cx = cols / 2;
    let total_rows = lines.len() as u16 + 2;
    let start_row = (rows / 2).saturating_sub(total_rows / 2);
    let col = cx.saturating_sub((inner as u16 + 2) / 2);

    out.queue(style::SetForegroundColor(C_MENU))?;
    out.queue(cursor::MoveTo(col, start_row))?;
    out.queue(Print(&top))?;
    for (i, line) in lines.iter().enumerate() {
        out.queue(cursor::MoveTo(col, start_row + 1 + i as u16))?;
        out.queue(Print(format!("║  {:<width$}  ║", line, width = inner - 4)))?;
    }
    out.queue(cursor::MoveTo(col, start_row + 1 + lines.len() as u16))?;
    out.queue(Print(&bottom))?;
    Ok(())
}

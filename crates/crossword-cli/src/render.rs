use crate::theme::Theme;
use crossterm::{
    queue,
    style::{Color, Print, ResetColor, SetForegroundColor},
};
use crossword_core::{find_intersections, Layout, LayoutViolation, PlacedClue, Position};
use std::collections::HashSet;
use std::io::{self, Write};

/// Writes layouts as text, with or without terminal colors
pub struct Renderer {
    theme: Theme,
    color: bool,
}

impl Renderer {
    pub fn new(theme: Theme, color: bool) -> Self {
        Self { theme, color }
    }

    fn paint<W: Write>(&self, out: &mut W, color: Color, text: &str) -> io::Result<()> {
        if self.color {
            queue!(out, SetForegroundColor(color), Print(text), ResetColor)
        } else {
            queue!(out, Print(text))
        }
    }

    /// Grid, clue lists and a one-line summary
    pub fn write_layout<W: Write>(&self, out: &mut W, layout: &Layout) -> io::Result<()> {
        self.write_grid(out, layout)?;
        writeln!(out)?;
        self.write_clues(out, "Across", layout.across())?;
        self.write_clues(out, "Down", layout.down())?;
        self.write_summary(out, layout)?;
        out.flush()
    }

    fn write_grid<W: Write>(&self, out: &mut W, layout: &Layout) -> io::Result<()> {
        let grid = layout.grid();
        let Some((top, left, bottom, right)) = grid.bounding_box() else {
            return self.paint(out, self.theme.info, "(empty grid)\n");
        };

        let starts: HashSet<Position> = layout
            .clues
            .iter()
            .map(|c| Position::new(c.position.row, c.position.col))
            .collect();

        // Grid design:
        // +-----------+
        // | S · · · · |
        // | O · · · · |
        // | L U N A · |
        // +-----------+
        let width = (right - left + 1) * 2 + 1;
        let frame = format!("+{}+\n", "-".repeat(width));

        self.paint(out, self.theme.border, &frame)?;
        for row in top..=bottom {
            self.paint(out, self.theme.border, "| ")?;
            for col in left..=right {
                let pos = Position::new(row, col);
                match grid.letter(pos) {
                    Some(letter) => {
                        let color = if starts.contains(&pos) {
                            self.theme.start
                        } else {
                            self.theme.letter
                        };
                        self.paint(out, color, &letter.to_string())?;
                    }
                    None => self.paint(out, self.theme.empty, "·")?,
                }
                queue!(out, Print(" "))?;
            }
            self.paint(out, self.theme.border, "|\n")?;
        }
        self.paint(out, self.theme.border, &frame)
    }

    fn write_clues<'a, W: Write>(
        &self,
        out: &mut W,
        heading: &str,
        clues: impl Iterator<Item = &'a PlacedClue>,
    ) -> io::Result<()> {
        let clues: Vec<&PlacedClue> = clues.collect();
        if clues.is_empty() {
            return Ok(());
        }

        self.paint(out, self.theme.heading, &format!("{}\n", heading))?;
        for clue in clues {
            self.paint(out, self.theme.number, &format!("{:>4}. ", clue.number))?;
            queue!(out, Print(format!("{} ({})", clue.record.clue, clue.word.chars().count())))?;
            if !clue.record.category.is_empty() {
                self.paint(out, self.theme.info, &format!("  [{}]", clue.record.category))?;
            }
            queue!(out, Print("\n"))?;
        }
        writeln!(out)
    }

    fn write_summary<W: Write>(&self, out: &mut W, layout: &Layout) -> io::Result<()> {
        let strategy = layout
            .strategy
            .map(|s| s.to_string())
            .unwrap_or_else(|| "none".to_string());
        let crossings = find_intersections(&layout.words()).len();
        let summary = format!(
            "{} words on a {}x{} grid ({} strategy), {} crossings, {} filled cells\n",
            layout.clues.len(),
            layout.grid_size,
            layout.grid_size,
            strategy,
            crossings,
            layout.grid().filled_count()
        );
        self.paint(out, self.theme.info, &summary)?;

        for diagnostic in &layout.diagnostics {
            self.paint(out, self.theme.warning, &format!("  ! {}\n", diagnostic))?;
        }
        Ok(())
    }

    /// Result of `crossword check`; `connected` is only meaningful when
    /// there are no violations
    pub fn write_check<W: Write>(
        &self,
        out: &mut W,
        layout: &Layout,
        violations: &[LayoutViolation],
        connected: bool,
    ) -> io::Result<()> {
        for violation in violations {
            self.paint(out, self.theme.error, &format!("violation: {}\n", violation))?;
        }
        if violations.is_empty() && !connected {
            self.paint(out, self.theme.error, "violation: words do not form a single crossword\n")?;
        }
        if connected {
            let message = format!("ok: {} words, all placements valid and connected\n", layout.clues.len());
            self.paint(out, self.theme.success, &message)?;
        }
        out.flush()
    }
}

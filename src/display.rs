//! Rendering layer — all terminal I/O lives here.
//!
//! The simulation paints into a [`CellCanvas`], which scales canvas-space
//! rectangles onto a grid of terminal cells. [`CellCanvas::present`] then
//! writes the grid to the terminal as coloured blanks.

use std::io::Write;

use crossterm::{
    cursor,
    style::{self, Color, Print},
    QueueableCommand,
};

use crate::surface::{Rgb, Surface};

pub struct CellCanvas {
    columns: u16,
    rows: u16,
    cell_width: f64,
    cell_height: f64,
    fill: Rgb,
    cells: Vec<Rgb>,
}

impl CellCanvas {
    /// A grid of `columns × rows` cells covering a canvas of
    /// `canvas_width × canvas_height` units.
    pub fn new(columns: u16, rows: u16, canvas_width: f64, canvas_height: f64) -> Self {
        let columns = columns.max(1);
        let rows = rows.max(1);
        CellCanvas {
            columns,
            rows,
            cell_width: canvas_width / columns as f64,
            cell_height: canvas_height / rows as f64,
            fill: Rgb::new(0, 0, 0),
            cells: vec![Rgb::new(0, 0, 0); columns as usize * rows as usize],
        }
    }

    pub fn columns(&self) -> u16 {
        self.columns
    }

    pub fn rows(&self) -> u16 {
        self.rows
    }

    pub fn cell(&self, column: u16, row: u16) -> Option<Rgb> {
        if column >= self.columns || row >= self.rows {
            return None;
        }
        Some(self.cells[row as usize * self.columns as usize + column as usize])
    }

    /// Write the whole grid to `out` and flush.
    pub fn present<W: Write>(&self, out: &mut W) -> std::io::Result<()> {
        for row in 0..self.rows {
            out.queue(cursor::MoveTo(0, row))?;
            let mut current: Option<Rgb> = None;
            let start = row as usize * self.columns as usize;
            for &cell in &self.cells[start..start + self.columns as usize] {
                if current != Some(cell) {
                    out.queue(style::SetBackgroundColor(to_terminal(cell)))?;
                    current = Some(cell);
                }
                out.queue(Print(' '))?;
            }
        }
        out.queue(style::ResetColor)?;
        out.flush()?;
        Ok(())
    }
}

impl Surface for CellCanvas {
    fn set_fill(&mut self, color: Rgb) {
        self.fill = color;
    }

    /// Paints every cell the rectangle overlaps, so even sub-cell shapes
    /// stay visible.
    fn fill_rect(&mut self, x: f64, y: f64, width: f64, height: f64) {
        let (c0, c1) = span(x, width, self.cell_width, self.columns);
        let (r0, r1) = span(y, height, self.cell_height, self.rows);
        for row in r0..r1 {
            let start = row * self.columns as usize;
            self.cells[start + c0..start + c1].fill(self.fill);
        }
    }
}

/// Half-open range of cell indices covered by `[start, start + length)`.
fn span(start: f64, length: f64, cell: f64, count: u16) -> (usize, usize) {
    let count = count as f64;
    let first = (start / cell).floor().clamp(0.0, count);
    let last = ((start + length) / cell).ceil().clamp(0.0, count);
    if last <= first {
        return (0, 0);
    }
    (first as usize, last as usize)
}

fn to_terminal(color: Rgb) -> Color {
    Color::Rgb {
        r: color.r,
        g: color.g,
        b: color.b,
    }
}

#![allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]

use ratatui::layout::Rect;

use crate::{
    app::strip::SelectorStrip,
    scene::config::{REFERENCE_HEIGHT, REFERENCE_WIDTH},
};

pub const MIN_WIDTH: u16 = 40;
pub const MIN_HEIGHT: u16 = 14;

const TITLE_HEIGHT: u16 = 1;
const STRIP_HEIGHT: u16 = 3;
const STRIP_MARGIN: u16 = 2;
pub const CELL_WIDTH: u16 = 12;
const CELL_GAP: u16 = 1;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ScreenLayout {
    pub title: Rect,
    pub strip: Rect,
    /// The scene is full-bleed; title and strip are drawn over it.
    pub scene: Rect,
}

#[must_use]
pub fn screen_layout(area: Rect) -> ScreenLayout {
    let title = Rect {
        x: area.x + STRIP_MARGIN.min(area.width),
        y: area.y,
        width: area.width.saturating_sub(STRIP_MARGIN * 2),
        height: TITLE_HEIGHT.min(area.height),
    };
    let strip_y = area.y + TITLE_HEIGHT.min(area.height);
    let strip = Rect {
        x: area.x + STRIP_MARGIN.min(area.width),
        y: strip_y,
        width: area.width.saturating_sub(STRIP_MARGIN * 2),
        height: STRIP_HEIGHT.min(area.bottom().saturating_sub(strip_y)),
    };
    ScreenLayout {
        title,
        strip,
        scene: area,
    }
}

#[must_use]
pub fn strip_capacity(strip_area: Rect) -> usize {
    usize::from((strip_area.width + CELL_GAP) / (CELL_WIDTH + CELL_GAP))
}

/// Rectangles of the visible strip cells, paired with their catalog index.
#[must_use]
pub fn cell_rects(strip_area: Rect, strip: &SelectorStrip) -> Vec<(usize, Rect)> {
    let capacity = strip_capacity(strip_area);
    let first = strip.first_visible(capacity);
    (first..strip.len())
        .take(capacity)
        .enumerate()
        .map(|(slot, index)| {
            let x = strip_area.x + (slot as u16) * (CELL_WIDTH + CELL_GAP);
            (
                index,
                Rect {
                    x,
                    y: strip_area.y,
                    width: CELL_WIDTH,
                    height: strip_area.height,
                },
            )
        })
        .collect()
}

/// Catalog index of the strip cell under a terminal position, if any.
#[must_use]
pub fn strip_cell_at(viewport: Rect, strip: &SelectorStrip, column: u16, row: u16) -> Option<usize> {
    let layout = screen_layout(viewport);
    cell_rects(layout.strip, strip)
        .into_iter()
        .find(|(_, rect)| {
            column >= rect.x && column < rect.right() && row >= rect.y && row < rect.bottom()
        })
        .map(|(index, _)| index)
}

/// Maps a point on the reference canvas to a cell of `area`. Points outside
/// the canvas map to `None`.
#[must_use]
pub fn project(area: Rect, x: f32, y: f32) -> Option<(u16, u16)> {
    let (col, row) = project_signed(area, x, y);
    let inside = col >= i32::from(area.left())
        && col < i32::from(area.right())
        && row >= i32::from(area.top())
        && row < i32::from(area.bottom());
    inside.then_some((col as u16, row as u16))
}

/// Like [`project`] but without clipping, for sprites partly off-screen.
#[must_use]
pub fn project_signed(area: Rect, x: f32, y: f32) -> (i32, i32) {
    let col = (x / REFERENCE_WIDTH * f32::from(area.width)).floor() as i32;
    let row = (y / REFERENCE_HEIGHT * f32::from(area.height)).floor() as i32;
    (i32::from(area.x) + col, i32::from(area.y) + row)
}

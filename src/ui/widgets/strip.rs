use ratatui::{
    Frame,
    layout::{Alignment, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
};

use crate::{
    app::{
        state::AppState,
        strip::{StripCell, cell_at},
    },
    ui::{
        layout::cell_rects,
        theme::{
            BORDER, CELL_TINT, ColorCapability, FOCUS_BORDER, ICON_TINT, MUTED_TEXT, TEXT,
            quantize, tint_over,
        },
    },
};

pub fn render(frame: &mut Frame, area: Rect, state: &AppState, capability: ColorCapability) {
    if area.height == 0 || state.strip.is_empty() {
        return;
    }

    for (index, rect) in cell_rects(area, &state.strip) {
        let alpha = state.strip.tint_alpha(index);
        let buf = frame.buffer_mut();
        for y in rect.top()..rect.bottom() {
            for x in rect.left()..rect.right() {
                if let Some(cell) = buf.cell_mut((x, y)) {
                    let bg = quantize(tint_over(cell.bg, CELL_TINT, alpha), capability);
                    cell.set_bg(bg);
                }
            }
        }

        let mut border_style = Style::default().fg(quantize(BORDER, capability));
        if state.strip.focused() == index {
            border_style = Style::default()
                .fg(quantize(FOCUS_BORDER, capability))
                .add_modifier(Modifier::BOLD);
        }
        let block = Block::default()
            .borders(Borders::ALL)
            .border_style(border_style);

        match cell_at(&state.phenomena, index, state.localizer, state.icon_mode) {
            StripCell::Phenomenon { icon, label } => {
                let mut label_style = Style::default().fg(quantize(TEXT, capability));
                if state.strip.selected() == Some(index) {
                    label_style = label_style.add_modifier(Modifier::BOLD);
                }
                let line = Line::from(vec![
                    Span::styled(icon, Style::default().fg(quantize(ICON_TINT, capability))),
                    Span::raw(" "),
                    Span::styled(label, label_style),
                ]);
                frame.render_widget(
                    Paragraph::new(line).alignment(Alignment::Center).block(block),
                    rect,
                );
            }
            StripCell::Placeholder => {
                frame.render_widget(
                    block.border_style(Style::default().fg(quantize(MUTED_TEXT, capability))),
                    rect,
                );
            }
        }
    }
}

pub mod layout;
pub mod theme;
pub mod widgets;

use ratatui::{
    Frame,
    layout::{Alignment, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Wrap},
};

use crate::{
    app::state::{AppMode, AppState},
    i18n::{STRIP_HINT_KEY, TOO_SMALL_KEY},
};
use layout::{MIN_HEIGHT, MIN_WIDTH, screen_layout};
use theme::{ColorCapability, MUTED_TEXT, TEXT, detect_color_capability, quantize};

pub fn render(frame: &mut Frame, state: &AppState) {
    let area = frame.area();

    if area.width < MIN_WIDTH || area.height < MIN_HEIGHT {
        let warning = Paragraph::new(state.localizer.text(TOO_SMALL_KEY))
            .wrap(Wrap { trim: true })
            .block(
                Block::default()
                    .borders(Borders::ALL)
                    .title(state.title()),
            );
        frame.render_widget(warning, area);
        return;
    }

    let capability = detect_color_capability();
    let layout = screen_layout(area);

    widgets::scene::render(frame, layout.scene, state, capability);
    render_title(frame, layout.title, state, capability);
    if state.mode != AppMode::Loading {
        widgets::strip::render(frame, layout.strip, state, capability);
    }
    widgets::scene::render_lightning(frame, layout.scene, state, capability);
}

fn render_title(frame: &mut Frame, area: Rect, state: &AppState, capability: ColorCapability) {
    let title = Paragraph::new(Line::from(Span::styled(
        state.title(),
        Style::default()
            .fg(quantize(TEXT, capability))
            .add_modifier(Modifier::BOLD),
    )));
    frame.render_widget(title, area);

    let hint = state.localizer.text(STRIP_HINT_KEY);
    let hint_width = u16::try_from(hint.chars().count()).unwrap_or(u16::MAX);
    let title_width = u16::try_from(state.title().chars().count()).unwrap_or(u16::MAX);
    if area.width > title_width.saturating_add(hint_width).saturating_add(2) {
        let hint_area = Rect {
            x: area.right() - hint_width,
            width: hint_width,
            ..area
        };
        let hint = Paragraph::new(Line::from(hint))
            .alignment(Alignment::Right)
            .style(Style::default().fg(quantize(MUTED_TEXT, capability)));
        frame.render_widget(hint, hint_area);
    }
}

#![allow(
    clippy::cast_possible_truncation,
    clippy::cast_possible_wrap,
    clippy::cast_precision_loss,
    clippy::cast_sign_loss
)]

use ratatui::{
    Frame,
    buffer::Buffer,
    layout::{Alignment, Rect},
    style::{Modifier, Style},
    widgets::{Paragraph, Widget, Wrap},
};

use crate::{
    app::state::AppState,
    assets::{self, Backdrop, CLOUD_SPRITE, SUN_SPRITE, SpriteArt},
    scene::{
        Caption, Scene,
        config::{CAPTION_BOTTOM_INSET, CAPTION_SIDE_INSET, REFERENCE_HEIGHT, REFERENCE_WIDTH},
        lightning::LightningStrike,
        sprites::{CLOUD_HEIGHT, SUN_SIZE},
        transition::CrossDissolve,
    },
    ui::{
        layout::{project, project_signed},
        theme::{BOLT, ColorCapability, FLASH, TEXT, lerp_color, quantize, tint_over},
    },
};

pub fn render(frame: &mut Frame, area: Rect, state: &AppState, capability: ColorCapability) {
    let scene = state.renderer.scene();
    frame.render_widget(SceneView { scene, capability }, area);
}

/// Flash and bolt go over everything else on screen, title and strip included.
pub fn render_lightning(
    frame: &mut Frame,
    area: Rect,
    state: &AppState,
    capability: ColorCapability,
) {
    let scene = state.renderer.scene();
    if scene.strikes().next().is_some() {
        frame.render_widget(LightningOverlay { scene, capability }, area);
    }
}

/// Caption box: inset from both sides, bottom edge a fixed distance above
/// the bottom of the scene. Grows upwards when the caption wraps.
#[must_use]
pub fn caption_rect(area: Rect) -> Rect {
    let (left, bottom) = project_signed(
        area,
        CAPTION_SIDE_INSET,
        REFERENCE_HEIGHT - CAPTION_BOTTOM_INSET,
    );
    let (right, _) = project_signed(area, REFERENCE_WIDTH - CAPTION_SIDE_INSET, 0.0);
    let bottom = (bottom.max(i32::from(area.y)) as u16).min(area.bottom().saturating_sub(1));
    let top = bottom.saturating_sub(1).max(area.y);
    let left = left.max(i32::from(area.x)) as u16;
    let right = (right.max(i32::from(left)) as u16).min(area.right());
    Rect {
        x: left,
        y: top,
        width: right.saturating_sub(left),
        height: bottom + 1 - top,
    }
}

/// Full-bleed scene: backdrop gradient, sprites, particles and caption.
/// While a dissolve runs, the previous scene fades out under the new one.
pub struct SceneView<'a> {
    pub scene: &'a Scene,
    pub capability: ColorCapability,
}

impl Widget for SceneView<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        if area.width == 0 || area.height == 0 {
            return;
        }
        let dissolve = self.scene.transition().filter(|d| !d.is_finished());
        let progress = dissolve.map_or(1.0, CrossDissolve::progress);

        paint_backdrop(self.backdrop(), area, buf);
        if let Some(dissolve) = dissolve {
            draw_decorations(dissolve.outgoing(), 1.0 - progress, area, buf);
        }
        draw_decorations(self.scene, progress, area, buf);

        // a cell holds one glyph, so only the stronger caption is drawn
        let outgoing = dissolve
            .and_then(|d| d.outgoing().caption())
            .map(|caption| (caption, 1.0 - progress));
        let incoming = self.scene.caption().map(|caption| (caption, progress));
        let caption = match (outgoing, incoming) {
            (Some(old), Some(new)) => Some(if old.1 > new.1 { old } else { new }),
            (old, new) => new.or(old),
        };
        if let Some((caption, weight)) = caption {
            draw_caption(caption, weight, area, buf);
        }

        quantize_area(area, buf, self.capability);
    }
}

impl SceneView<'_> {
    /// Current backdrop, mid-dissolve when a transition is running.
    fn backdrop(&self) -> Backdrop {
        let target = self.scene.background().backdrop;
        match self.scene.transition() {
            Some(dissolve) if !dissolve.is_finished() => {
                let t = dissolve.progress();
                let from = dissolve.outgoing_backdrop();
                Backdrop {
                    top: lerp_color(from.top, target.top, t),
                    bottom: lerp_color(from.bottom, target.bottom, t),
                }
            }
            _ => target,
        }
    }
}

/// Translucent white flash plus the bolt path of every live strike.
pub struct LightningOverlay<'a> {
    pub scene: &'a Scene,
    pub capability: ColorCapability,
}

impl Widget for LightningOverlay<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let flash = self
            .scene
            .strikes()
            .map(LightningStrike::overlay_alpha)
            .fold(0.0_f32, f32::max);
        if flash > 0.0 {
            for y in area.top()..area.bottom() {
                for x in area.left()..area.right() {
                    if let Some(cell) = buf.cell_mut((x, y)) {
                        let bg = tint_over(cell.bg, FLASH, flash);
                        let fg = tint_over(cell.fg, FLASH, flash);
                        cell.set_bg(bg).set_fg(fg);
                    }
                }
            }
        }

        for bolt in self.scene.strikes().filter_map(LightningStrike::bolt) {
            for segment in bolt.windows(2) {
                draw_bolt_segment(area, buf, segment[0], segment[1]);
            }
        }

        quantize_area(area, buf, self.capability);
    }
}

/// Sprites and particles of one scene, faded towards the backdrop by
/// `weight`.
fn draw_decorations(scene: &Scene, weight: f32, area: Rect, buf: &mut Buffer) {
    if weight <= 0.0 {
        return;
    }

    if scene.clouds().next().is_some()
        && let Ok(art) = assets::sprite(CLOUD_SPRITE)
    {
        for cloud in scene.clouds() {
            let y = cloud.y + (CLOUD_HEIGHT - art_points_height(&art, area)) / 2.0;
            draw_sprite(&art, weight, area, buf, cloud.x(), y);
        }
    }

    if let Some(sun) = scene.sun()
        && let Ok(art) = assets::sprite(SUN_SPRITE)
    {
        let (x, y) = sun.origin();
        let x = x + (SUN_SIZE - art_points_width(&art, area)) / 2.0;
        draw_sprite(&art, sun.opacity() * weight, area, buf, x, y);
    }

    if let Some(emitter) = scene.emitter()
        && let Ok(art) = assets::particles(emitter.config().particles_key)
        && !art.glyphs.is_empty()
    {
        for particle in emitter.particles() {
            let Some(position) = project(area, particle.x, particle.y) else {
                continue;
            };
            let step = emitter.relative_scale(particle) * (art.glyphs.len() - 1) as f32;
            let glyph = art.glyphs[(step.round() as usize).min(art.glyphs.len() - 1)];
            if let Some(cell) = buf.cell_mut(position) {
                let fg = tint_over(cell.bg, art.color, weight);
                cell.set_char(glyph).set_fg(fg);
            }
        }
    }
}

fn draw_caption(caption: &Caption, weight: f32, area: Rect, buf: &mut Buffer) {
    let caption_area = caption_rect(area);
    if caption_area.width == 0 || caption_area.height == 0 {
        return;
    }
    // laid out off-screen so the scene keeps showing between the words
    let mut text = Buffer::empty(caption_area);
    Paragraph::new(caption.text.as_str())
        .alignment(Alignment::Center)
        .wrap(Wrap { trim: true })
        .render(caption_area, &mut text);
    for y in caption_area.top()..caption_area.bottom() {
        for x in caption_area.left()..caption_area.right() {
            let glyph = text[(x, y)].symbol();
            if glyph == " " {
                continue;
            }
            if let Some(cell) = buf.cell_mut((x, y)) {
                let fg = tint_over(cell.bg, TEXT, weight);
                cell.set_symbol(glyph)
                    .set_fg(fg)
                    .set_style(Style::default().add_modifier(Modifier::BOLD));
            }
        }
    }
}

fn quantize_area(area: Rect, buf: &mut Buffer, capability: ColorCapability) {
    for y in area.top()..area.bottom() {
        for x in area.left()..area.right() {
            if let Some(cell) = buf.cell_mut((x, y)) {
                let bg = quantize(cell.bg, capability);
                let fg = quantize(cell.fg, capability);
                cell.set_bg(bg).set_fg(fg);
            }
        }
    }
}

fn paint_backdrop(backdrop: Backdrop, area: Rect, buf: &mut Buffer) {
    for y in area.top()..area.bottom() {
        let t = if area.height <= 1 {
            0.0
        } else {
            f32::from(y - area.y) / f32::from(area.height - 1)
        };
        let color = lerp_color(backdrop.top, backdrop.bottom, t);
        for x in area.left()..area.right() {
            if let Some(cell) = buf.cell_mut((x, y)) {
                cell.set_symbol(" ").set_bg(color).set_fg(TEXT);
            }
        }
    }
}

fn art_points_width(art: &SpriteArt, area: Rect) -> f32 {
    art.width() as f32 * REFERENCE_WIDTH / f32::from(area.width.max(1))
}

fn art_points_height(art: &SpriteArt, area: Rect) -> f32 {
    art.height() as f32 * REFERENCE_HEIGHT / f32::from(area.height.max(1))
}

/// Draws glyph art with its top-left at the given point. Spaces are
/// transparent; cells outside `area` are clipped.
fn draw_sprite(art: &SpriteArt, opacity: f32, area: Rect, buf: &mut Buffer, x: f32, y: f32) {
    let (col, row) = project_signed(area, x, y);
    for (dy, line) in art.lines.iter().enumerate() {
        let cy = row + dy as i32;
        if cy < i32::from(area.top()) || cy >= i32::from(area.bottom()) {
            continue;
        }
        for (dx, ch) in line.chars().enumerate() {
            let cx = col + dx as i32;
            if ch == ' ' || cx < i32::from(area.left()) || cx >= i32::from(area.right()) {
                continue;
            }
            if let Some(cell) = buf.cell_mut((cx as u16, cy as u16)) {
                let fg = tint_over(cell.bg, art.color, opacity);
                cell.set_char(ch).set_fg(fg);
            }
        }
    }
}

fn draw_bolt_segment(area: Rect, buf: &mut Buffer, from: (f32, f32), to: (f32, f32)) {
    let (x0, y0) = project_signed(area, from.0, from.1);
    let (x1, y1) = project_signed(area, to.0, to.1);
    let glyph = match x1.cmp(&x0) {
        std::cmp::Ordering::Greater => '╲',
        std::cmp::Ordering::Less => '╱',
        std::cmp::Ordering::Equal => '│',
    };
    let rows = (y1 - y0).max(1);
    for step in 0..=rows {
        let y = y0 + step;
        let x = x0 + (x1 - x0) * step / rows;
        if x < i32::from(area.left())
            || x >= i32::from(area.right())
            || y < i32::from(area.top())
            || y >= i32::from(area.bottom())
        {
            continue;
        }
        if let Some(cell) = buf.cell_mut((x as u16, y as u16)) {
            cell.set_char(glyph)
                .set_fg(BOLT)
                .set_style(Style::default().add_modifier(Modifier::BOLD));
        }
    }
}

#[cfg(test)]
mod tests {
    use std::time::Duration;

    use rand::{SeedableRng, rngs::StdRng};
    use ratatui::style::Color;

    use super::*;
    use crate::{
        domain::phenomenon::{Phenomenon, PhenomenonKind},
        i18n::{Locale, Localizer},
        scene::{RenderOptions, SceneRenderer},
    };

    fn rendered(renderer: &SceneRenderer, area: Rect) -> Buffer {
        let mut buf = Buffer::empty(area);
        SceneView {
            scene: renderer.scene(),
            capability: ColorCapability::TrueColor,
        }
        .render(area, &mut buf);
        buf
    }

    fn renderer_showing(kind: PhenomenonKind, rng: &mut StdRng) -> SceneRenderer {
        let mut renderer = SceneRenderer::new(Localizer::new(Locale::En), RenderOptions::default());
        renderer.display(Some(&Phenomenon::new(kind, kind.default_icon())), rng);
        renderer.tick(Duration::from_millis(250), rng);
        renderer.tick(Duration::from_millis(250), rng);
        renderer
    }

    #[test]
    fn caption_box_sits_above_bottom_inset() {
        let area = Rect::new(0, 0, 80, 24);
        let rect = caption_rect(area);
        assert_eq!(rect.bottom(), 23);
        assert_eq!(rect.height, 2);
        assert_eq!(rect.x, 6);
        assert_eq!(rect.right(), 73);
    }

    #[test]
    fn blank_scene_is_solid_black() {
        let renderer = SceneRenderer::new(Localizer::new(Locale::En), RenderOptions::default());
        let buf = rendered(&renderer, Rect::new(0, 0, 20, 10));
        assert_eq!(buf[(0, 0)].bg, Color::Rgb(0, 0, 0));
        assert_eq!(buf[(19, 9)].bg, Color::Rgb(0, 0, 0));
    }

    #[test]
    fn backdrop_gradient_runs_top_to_bottom() {
        let mut rng = StdRng::seed_from_u64(3);
        let renderer = renderer_showing(PhenomenonKind::Sun, &mut rng);
        let buf = rendered(&renderer, Rect::new(0, 0, 40, 30));
        let sunny = assets::backdrop(assets::SUNNY_BACKGROUND).expect("sunny");
        assert_eq!(buf[(0, 0)].bg, sunny.top);
        assert_eq!(buf[(0, 29)].bg, sunny.bottom);
    }

    #[test]
    fn sun_sprite_is_drawn_on_the_right() {
        let mut rng = StdRng::seed_from_u64(3);
        let renderer = renderer_showing(PhenomenonKind::Sun, &mut rng);
        let area = Rect::new(0, 0, 40, 40);
        let buf = rendered(&renderer, area);
        let drawn: String = (0..area.height)
            .flat_map(|y| (area.width / 2..area.width).map(move |x| (x, y)))
            .map(|pos| buf[pos].symbol().to_string())
            .collect();
        assert!(drawn.contains("(   )"), "sun art missing:\n{drawn}");
    }

    #[test]
    fn rain_particles_use_raindrop_glyphs() {
        let mut rng = StdRng::seed_from_u64(9);
        let renderer = renderer_showing(PhenomenonKind::Rain, &mut rng);
        let area = Rect::new(0, 0, 60, 40);
        let buf = rendered(&renderer, area);
        let drops = buf
            .content()
            .iter()
            .filter(|cell| matches!(cell.symbol(), "╷" | "│" | "┃"))
            .count();
        assert!(drops > 0);
    }

    fn caption_cells(buf: &Buffer, area: Rect) -> (String, Vec<(Color, Color)>) {
        let rect = caption_rect(area);
        let mut text = String::new();
        let mut colors = Vec::new();
        for y in rect.top()..rect.bottom() {
            for x in rect.left()..rect.right() {
                let cell = &buf[(x, y)];
                text.push_str(cell.symbol());
                if cell.symbol() != " " {
                    colors.push((cell.fg, cell.bg));
                }
            }
        }
        (text, colors)
    }

    #[test]
    fn caption_fades_in_with_the_dissolve() {
        let mut rng = StdRng::seed_from_u64(4);
        let mut renderer = SceneRenderer::new(Localizer::new(Locale::En), RenderOptions::default());
        renderer.display_key("sun", &mut rng);
        let area = Rect::new(0, 0, 40, 40);

        let (text, colors) = caption_cells(&rendered(&renderer, area), area);
        assert!(text.contains("A perfect day for a walk"), "{text}");
        assert!(colors.iter().all(|(fg, bg)| fg == bg));

        renderer.tick(Duration::from_millis(200), &mut rng);
        renderer.tick(Duration::from_millis(200), &mut rng);
        let (_, colors) = caption_cells(&rendered(&renderer, area), area);
        assert!(!colors.is_empty());
        assert!(colors.iter().all(|(fg, _)| *fg == TEXT));
    }

    #[test]
    fn previous_scene_fades_out_under_the_new_one() {
        let mut rng = StdRng::seed_from_u64(3);
        let mut renderer = renderer_showing(PhenomenonKind::Sun, &mut rng);
        let area = Rect::new(0, 0, 40, 40);
        let sun_art = |buf: &Buffer| {
            let drawn: String = (0..area.height)
                .flat_map(|y| (area.width / 2..area.width).map(move |x| (x, y)))
                .map(|pos| buf[pos].symbol().to_string())
                .collect();
            drawn.contains("(   )")
        };

        renderer.display_key("rain", &mut rng);
        let buf = rendered(&renderer, area);
        assert!(sun_art(&buf));
        let (text, colors) = caption_cells(&buf, area);
        assert!(text.contains("A perfect day for a walk"), "{text}");
        assert!(!text.contains("umbrella"));
        assert!(colors.iter().all(|(fg, _)| *fg == TEXT));

        renderer.tick(Duration::from_millis(200), &mut rng);
        renderer.tick(Duration::from_millis(200), &mut rng);
        let buf = rendered(&renderer, area);
        assert!(!sun_art(&buf));
        let (text, _) = caption_cells(&buf, area);
        assert!(text.contains("Don't forget your umbrella"), "{text}");
    }

    #[test]
    fn strike_flashes_and_draws_bolt() {
        let mut rng = StdRng::seed_from_u64(5);
        let mut renderer = renderer_showing(PhenomenonKind::Storm, &mut rng);
        assert!(renderer.strike_lightning(&mut rng));
        let area = Rect::new(0, 0, 40, 40);
        let mut buf = rendered(&renderer, area);
        let storm = assets::backdrop(assets::STORM_BACKGROUND).expect("storm");
        assert_eq!(buf[(0, 0)].bg, storm.top);

        LightningOverlay {
            scene: renderer.scene(),
            capability: ColorCapability::TrueColor,
        }
        .render(area, &mut buf);
        let bolt_cells = buf
            .content()
            .iter()
            .filter(|cell| matches!(cell.symbol(), "╲" | "╱" | "│") && cell.fg == BOLT)
            .count();
        assert!(bolt_cells > 0);
        assert_ne!(buf[(0, 0)].bg, storm.top);
    }
}

use std::time::Instant;

use anyhow::Result;
use crossterm::event::{
    Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers, MouseButton, MouseEvent, MouseEventKind,
};
use rand::{Rng, SeedableRng, rngs::StdRng};
use ratatui::layout::Rect;
use tokio::{sync::mpsc, task::AbortHandle};
use tracing::{debug, info, trace};

use crate::{
    app::{
        events::{AppEvent, LightningTimer, start_frame_task},
        strip::SelectorStrip,
    },
    cli::{Cli, IconMode},
    domain::{
        catalog::PhenomenonCatalog,
        phenomenon::{Phenomenon, PhenomenonKind},
    },
    i18n::{APP_TITLE_KEY, Localizer},
    scene::{RenderOptions, SceneKind, SceneRenderer},
    ui::layout::strip_cell_at,
};

mod input;

use input::{command_char, digit_index};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AppMode {
    Loading,
    Ready,
    Quit,
}

/// Screen controller: owns the catalog, the selector strip, the scene
/// renderer and the single lightning timer.
#[derive(Debug)]
pub struct AppState {
    pub mode: AppMode,
    pub running: bool,
    pub phenomena: Vec<Phenomenon>,
    pub strip: SelectorStrip,
    pub renderer: SceneRenderer,
    pub localizer: Localizer,
    pub icon_mode: IconMode,
    /// Area of the last drawn frame, used for mouse hit testing.
    pub viewport: Rect,
    pub frame_tick: u64,
    catalog: Box<dyn PhenomenonCatalog>,
    lightning: Option<LightningTimer>,
    lightning_generation: u64,
    frame_task: Option<AbortHandle>,
    last_frame_at: Instant,
    rng: StdRng,
    flash: bool,
    initial: Option<PhenomenonKind>,
}

impl AppState {
    pub fn new(cli: &Cli, catalog: Box<dyn PhenomenonCatalog>) -> Self {
        let localizer = Localizer::new(cli.locale());
        let rng = cli
            .seed
            .map_or_else(StdRng::from_os_rng, StdRng::seed_from_u64);

        Self {
            mode: AppMode::Loading,
            running: true,
            phenomena: Vec::new(),
            strip: SelectorStrip::default(),
            renderer: SceneRenderer::new(
                localizer,
                RenderOptions {
                    particles: !cli.no_animation,
                    repeat_clouds: cli.repeat_clouds,
                },
            ),
            localizer,
            icon_mode: cli.icons,
            viewport: Rect::default(),
            frame_tick: 0,
            catalog,
            lightning: None,
            lightning_generation: 0,
            frame_task: None,
            last_frame_at: Instant::now(),
            rng,
            flash: !cli.no_flash,
            initial: cli.initial_phenomenon(),
        }
    }

    pub async fn handle_event(
        &mut self,
        event: AppEvent,
        tx: &mpsc::Sender<AppEvent>,
        cli: &Cli,
    ) -> Result<()> {
        match event {
            AppEvent::Bootstrap => {
                if let Some(previous) = self.frame_task.replace(start_frame_task(tx.clone(), cli.fps))
                {
                    previous.abort();
                }
                self.load(tx);
            }
            AppEvent::TickFrame => {
                let now = Instant::now();
                let delta = now.duration_since(self.last_frame_at);
                self.last_frame_at = now;
                self.frame_tick = self.frame_tick.saturating_add(1);
                self.renderer.tick(delta, &mut self.rng);
            }
            AppEvent::Input(event) => self.handle_input(event, tx).await?,
            AppEvent::Lightning { generation } => self.on_lightning(generation),
            AppEvent::Quit => {
                self.shutdown();
            }
        }

        Ok(())
    }

    /// Populates the catalog and shows the launch scene: the CLI override if
    /// given, otherwise a random phenomenon.
    pub fn load(&mut self, tx: &mpsc::Sender<AppEvent>) {
        self.phenomena = self.catalog.create_weather_phenomena();
        self.strip = SelectorStrip::new(self.phenomena.len());
        info!(count = self.phenomena.len(), "catalog loaded");

        let initial = self
            .initial
            .and_then(|kind| self.phenomena.iter().find(|p| p.kind == kind).cloned())
            .or_else(|| self.random_phenomenon());
        if let Some(index) = initial
            .as_ref()
            .and_then(|p| self.phenomena.iter().position(|candidate| candidate == p))
        {
            self.strip.focus(index);
        }
        self.show(initial.as_ref(), tx);
        self.mode = AppMode::Ready;
    }

    /// Uniform pick from the catalog; `None` only for an empty catalog.
    pub fn random_phenomenon(&mut self) -> Option<Phenomenon> {
        if self.phenomena.is_empty() {
            return None;
        }
        let index = self.rng.random_range(0..self.phenomena.len());
        self.phenomena
            .get(index)
            .or_else(|| self.phenomena.first())
            .cloned()
    }

    /// Strip selection: highlights the cell and always shows its scene, even
    /// when the cell was already selected.
    pub fn select_index(&mut self, index: usize, tx: &mpsc::Sender<AppEvent>) {
        if self.strip.select(index).is_none() {
            return;
        }
        let phenomenon = self.phenomena.get(index).cloned();
        self.show(phenomenon.as_ref(), tx);
    }

    /// Scene transition. The previous timer is cancelled before the renderer
    /// builds the next scene, so at most one timer ever exists.
    pub fn show(&mut self, phenomenon: Option<&Phenomenon>, tx: &mpsc::Sender<AppEvent>) {
        self.stop_lightning_timer();
        self.renderer.display(phenomenon, &mut self.rng);
        if let Some(period) = self.renderer.scene().lightning_period()
            && self.flash
        {
            self.start_lightning_timer(tx, period);
        }
    }

    #[must_use]
    pub fn active_timer_count(&self) -> usize {
        usize::from(self.lightning.is_some())
    }

    #[must_use]
    pub fn lightning_timer(&self) -> Option<&LightningTimer> {
        self.lightning.as_ref()
    }

    /// Screen title: the shown phenomenon's name, or the app title for the
    /// blank scene.
    #[must_use]
    pub fn title(&self) -> &'static str {
        let key = self
            .renderer
            .scene()
            .kind()
            .phenomenon()
            .map_or(APP_TITLE_KEY, PhenomenonKind::key);
        self.localizer.text(key)
    }

    #[must_use]
    pub fn scene_kind(&self) -> SceneKind {
        self.renderer.scene().kind()
    }

    /// Stops every background task owned by the screen.
    pub fn shutdown(&mut self) {
        self.stop_lightning_timer();
        if let Some(frame_task) = self.frame_task.take() {
            frame_task.abort();
        }
        self.mode = AppMode::Quit;
    }

    fn start_lightning_timer(&mut self, tx: &mpsc::Sender<AppEvent>, period: std::time::Duration) {
        self.lightning_generation = self.lightning_generation.wrapping_add(1);
        debug!(
            generation = self.lightning_generation,
            period_ms = period.as_millis(),
            "lightning timer started"
        );
        self.lightning = Some(LightningTimer::start(
            tx.clone(),
            period,
            self.lightning_generation,
        ));
    }

    fn stop_lightning_timer(&mut self) {
        if let Some(timer) = self.lightning.take() {
            debug!(generation = timer.generation(), "lightning timer cancelled");
        }
    }

    fn on_lightning(&mut self, generation: u64) {
        let current = self
            .lightning
            .as_ref()
            .is_some_and(|timer| timer.generation() == generation);
        if !current {
            trace!(generation, "ignoring stale lightning");
            return;
        }
        self.renderer.strike_lightning(&mut self.rng);
    }

    async fn handle_input(&mut self, event: Event, tx: &mpsc::Sender<AppEvent>) -> Result<()> {
        match event {
            Event::Key(key) if key.kind == KeyEventKind::Press => {
                self.handle_key(key, tx).await?;
            }
            Event::Mouse(mouse) => self.handle_mouse(mouse, tx),
            Event::Resize(width, height) => {
                self.viewport = Rect::new(0, 0, width, height);
                self.renderer.scene_mut().reset_particles();
            }
            _ => {}
        }
        Ok(())
    }

    async fn handle_key(&mut self, key: KeyEvent, tx: &mpsc::Sender<AppEvent>) -> Result<()> {
        if key.modifiers.contains(KeyModifiers::CONTROL)
            && matches!(key.code, KeyCode::Char('c' | 'C'))
        {
            tx.send(AppEvent::Quit).await?;
            return Ok(());
        }
        match key.code {
            KeyCode::Esc => tx.send(AppEvent::Quit).await?,
            KeyCode::Left => self.strip.focus_prev(),
            KeyCode::Right => self.strip.focus_next(),
            KeyCode::Enter => self.select_index(self.strip.focused(), tx),
            _ => match command_char(key) {
                Some('q') => tx.send(AppEvent::Quit).await?,
                Some('h') => self.strip.focus_prev(),
                Some('l') => self.strip.focus_next(),
                Some(' ') => self.select_index(self.strip.focused(), tx),
                Some('r') => {
                    let phenomenon = self.random_phenomenon();
                    self.show(phenomenon.as_ref(), tx);
                }
                Some(ch) => {
                    if let Some(index) = digit_index(ch) {
                        self.select_index(index, tx);
                    }
                }
                None => {}
            },
        }
        Ok(())
    }

    fn handle_mouse(&mut self, mouse: MouseEvent, tx: &mpsc::Sender<AppEvent>) {
        match mouse.kind {
            MouseEventKind::Down(MouseButton::Left) => {
                if let Some(index) =
                    strip_cell_at(self.viewport, &self.strip, mouse.column, mouse.row)
                {
                    self.select_index(index, tx);
                }
            }
            MouseEventKind::ScrollDown | MouseEventKind::ScrollRight => self.strip.focus_next(),
            MouseEventKind::ScrollUp | MouseEventKind::ScrollLeft => self.strip.focus_prev(),
            _ => {}
        }
    }
}

use std::time::Duration;

use crossterm::event::{Event, EventStream};
use futures::StreamExt;
use tokio::{
    sync::mpsc,
    task::AbortHandle,
    time::{Instant, MissedTickBehavior, interval, interval_at},
};

#[derive(Debug)]
pub enum AppEvent {
    Bootstrap,
    TickFrame,
    Input(Event),
    /// Fired by the lightning timer; `generation` identifies which timer.
    Lightning {
        generation: u64,
    },
    Quit,
}

pub fn spawn_input_task() -> impl futures::Stream<Item = Event> {
    EventStream::new().filter_map(|event| async move { event.ok() })
}

pub fn start_frame_task(tx: mpsc::Sender<AppEvent>, fps: u8) -> AbortHandle {
    let fps = fps.max(15);
    let task = tokio::spawn(async move {
        let mut ticker = interval(Duration::from_millis(1000_u64 / u64::from(fps)));
        ticker.set_missed_tick_behavior(MissedTickBehavior::Skip);
        loop {
            ticker.tick().await;
            if tx.send(AppEvent::TickFrame).await.is_err() {
                break;
            }
        }
    });
    task.abort_handle()
}

/// Repeating lightning timer. The first strike lands one period after start.
/// Dropping the timer cancels the task.
#[derive(Debug)]
pub struct LightningTimer {
    generation: u64,
    period: Duration,
    handle: AbortHandle,
}

impl LightningTimer {
    pub fn start(tx: mpsc::Sender<AppEvent>, period: Duration, generation: u64) -> Self {
        let task = tokio::spawn(async move {
            let mut ticker = interval_at(Instant::now() + period, period);
            ticker.set_missed_tick_behavior(MissedTickBehavior::Delay);
            loop {
                ticker.tick().await;
                if tx.send(AppEvent::Lightning { generation }).await.is_err() {
                    break;
                }
            }
        });
        Self {
            generation,
            period,
            handle: task.abort_handle(),
        }
    }

    #[must_use]
    pub fn generation(&self) -> u64 {
        self.generation
    }

    #[must_use]
    pub fn period(&self) -> Duration {
        self.period
    }
}

impl Drop for LightningTimer {
    fn drop(&mut self) {
        self.handle.abort();
    }
}

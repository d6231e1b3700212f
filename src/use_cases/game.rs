// The game loop: a single task owns the simulation and the engine sound, so every
// mutation happens in arrival order on one writer.

use super::audio::AudioSubsystem;
use super::simulation::Simulation;
use super::types::{Deferred, Effect, FlightSnapshot, GameEvent, GameNotice};
use crate::domain::ports::AudioBackend;
use rand::Rng;
use std::collections::{BTreeMap, VecDeque};
use std::sync::Arc;
use tokio::sync::{Notify, broadcast, mpsc, watch};
use tokio::task::JoinHandle;
use tokio::time::Instant;
use tracing::{debug, error, info, warn};

/// Channel sizing for a spawned game.
#[derive(Debug, Clone)]
pub struct GameSettings {
    /// Capacity for inbound motion samples and commands.
    pub input_channel_capacity: usize,
    /// Capacity for broadcast notices (score pulses, respawns).
    pub notice_broadcast_capacity: usize,
}

/// Presentation-side handles to a running game.
pub struct GameHandle {
    /// Motion samples and user commands.
    pub input_tx: mpsc::Sender<GameEvent>,
    /// Latest flight snapshot.
    pub frame_rx: watch::Receiver<FlightSnapshot>,
    /// Transient notices; subscribe before sending events you want to hear about.
    pub notice_tx: broadcast::Sender<GameNotice>,
    /// `notify_one` stops the game task.
    pub shutdown: Arc<Notify>,
    pub task: JoinHandle<()>,
}

impl GameHandle {
    pub fn notices(&self) -> broadcast::Receiver<GameNotice> {
        self.notice_tx.subscribe()
    }
}

/// Spawns the game task. The game starts immediately, as if a restart had been confirmed.
pub fn spawn_game<R, B>(settings: &GameSettings, simulation: Simulation<R>, backend: B) -> GameHandle
where
    R: Rng + Send + 'static,
    B: AudioBackend + 'static,
{
    let (input_tx, input_rx) = mpsc::channel::<GameEvent>(settings.input_channel_capacity);
    let (frame_tx, frame_rx) = watch::channel::<FlightSnapshot>(simulation.snapshot());
    let (notice_tx, _notice_rx) =
        broadcast::channel::<GameNotice>(settings.notice_broadcast_capacity);
    let shutdown = Arc::new(Notify::new());

    let task = tokio::spawn(game_task(
        simulation,
        AudioSubsystem::new(backend),
        input_rx,
        frame_tx,
        notice_tx.clone(),
        shutdown.clone(),
    ));

    GameHandle {
        input_tx,
        frame_rx,
        notice_tx,
        shutdown,
        task,
    }
}

pub async fn game_task<R, B>(
    simulation: Simulation<R>,
    audio: AudioSubsystem<B>,
    mut input_rx: mpsc::Receiver<GameEvent>,
    frame_tx: watch::Sender<FlightSnapshot>,
    notice_tx: broadcast::Sender<GameNotice>,
    shutdown: Arc<Notify>,
) where
    R: Rng,
    B: AudioBackend,
{
    let mut game = GameLoop {
        simulation,
        audio,
        frame_tx,
        notice_tx,
        deferred: DeferredQueue::default(),
        backlog: VecDeque::new(),
    };

    // Place the vehicle and the pad, start the engine.
    let effects = game.simulation.reset();
    game.dispatch(effects);
    game.publish();

    loop {
        // Commands that arrived alongside a restart, in arrival order.
        while let Some(event) = game.backlog.pop_front() {
            game.handle_event(event, &mut input_rx);
        }

        let next_due = game.deferred.next_due();
        tokio::select! {
            biased;

            _ = shutdown.notified() => {
                info!("game shutting down");
                break;
            }
            _ = tokio::time::sleep_until(next_due.unwrap_or_else(Instant::now)), if next_due.is_some() => {
                game.fire_due(Instant::now());
            }
            event = input_rx.recv() => {
                let Some(event) = event else {
                    info!("input channel closed");
                    break;
                };
                game.handle_event(event, &mut input_rx);
            }
        }
    }
}

struct GameLoop<R, B: AudioBackend> {
    simulation: Simulation<R>,
    audio: AudioSubsystem<B>,
    frame_tx: watch::Sender<FlightSnapshot>,
    notice_tx: broadcast::Sender<GameNotice>,
    deferred: DeferredQueue,
    backlog: VecDeque<GameEvent>,
}

impl<R: Rng, B: AudioBackend> GameLoop<R, B> {
    fn handle_event(&mut self, event: GameEvent, input_rx: &mut mpsc::Receiver<GameEvent>) {
        let effects = match event {
            GameEvent::Motion(Ok(sample)) => self.simulation.step(sample),
            GameEvent::Motion(Err(e)) => {
                warn!(error = %e, "skipping motion sample");
                return;
            }
            GameEvent::ToggleVehicleKind => self.simulation.toggle_vehicle_kind(),
            GameEvent::ToggleSound => self.simulation.toggle_sound(),
            GameEvent::RequestRestart => {
                debug!("restart requested");
                self.simulation.request_restart();
                Vec::new()
            }
            GameEvent::CancelRestart => {
                debug!("restart cancelled");
                self.simulation.cancel_restart();
                Vec::new()
            }
            GameEvent::ConfirmRestart => {
                let effects = self.simulation.confirm_restart();
                self.discard_stale_motion(input_rx);
                effects
            }
        };

        self.dispatch(effects);
        self.publish();
    }

    // Motion delivery stops with the restart: samples already queued belong to the old
    // flight. Commands are kept and handled next.
    fn discard_stale_motion(&mut self, input_rx: &mut mpsc::Receiver<GameEvent>) {
        let mut dropped = 0usize;
        while let Ok(event) = input_rx.try_recv() {
            match event {
                GameEvent::Motion(_) => dropped += 1,
                command => self.backlog.push_back(command),
            }
        }
        if dropped > 0 {
            debug!(dropped, "discarded motion samples queued before restart");
        }
    }

    fn fire_due(&mut self, now: Instant) {
        while let Some(deferred) = self.deferred.pop_due(now) {
            let effects = self.simulation.apply_deferred(deferred);
            self.dispatch(effects);
        }
        self.publish();
    }

    fn dispatch(&mut self, effects: Vec<Effect>) {
        for effect in effects {
            match effect {
                Effect::Audio(command) => self.audio.apply(command),
                Effect::Notice(notice) => {
                    // No subscribers is fine; notices are fire-and-forget.
                    let _ = self.notice_tx.send(notice);
                }
                Effect::Schedule { delay, deferred } => {
                    match Instant::now().checked_add(delay) {
                        Some(due) => self.deferred.push(due, deferred),
                        None => error!(
                            ?delay,
                            action = ?deferred.action,
                            "deferred effect delay out of range, dropping it"
                        ),
                    }
                }
            }
        }
    }

    fn publish(&self) {
        let snapshot = self.simulation.snapshot();
        self.frame_tx.send_if_modified(|current| {
            if *current == snapshot {
                return false;
            }
            *current = snapshot;
            true
        });
    }
}

/// Deferred effects ordered by deadline, then by scheduling order.
#[derive(Default)]
struct DeferredQueue {
    entries: BTreeMap<(Instant, u64), Deferred>,
    next_seq: u64,
}

impl DeferredQueue {
    fn push(&mut self, due: Instant, deferred: Deferred) {
        self.entries.insert((due, self.next_seq), deferred);
        self.next_seq = self.next_seq.wrapping_add(1);
    }

    fn next_due(&self) -> Option<Instant> {
        self.entries.first_key_value().map(|(&(due, _), _)| due)
    }

    fn pop_due(&mut self, now: Instant) -> Option<Deferred> {
        let entry = self.entries.first_entry()?;
        if entry.key().0 <= now {
            Some(entry.remove())
        } else {
            None
        }
    }
}

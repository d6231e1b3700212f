// The flight simulation: one orientation sample in, next state and side effects out.

use super::types::{Deferred, DeferredAction, Effect, FlightSnapshot, GameNotice};
use crate::domain::{AudioCommand, FlightState, GameTuning, OrientationSample, VehicleKind};
use crate::systems::pad::PadContact;
use crate::systems::{flight, pad, respawn};
use rand::Rng;
use rand::rngs::StdRng;
use std::time::Duration;
use tracing::{debug, info};

pub struct Simulation<R = StdRng> {
    state: FlightState,
    tuning: GameTuning,
    rng: R,
    tick: u64,
}

impl<R: Rng> Simulation<R> {
    /// Helicopter at the origin with sound on. Call `reset` to place the vehicle and the pad.
    pub fn new(tuning: GameTuning, rng: R) -> Self {
        let kind = VehicleKind::default();
        let state = FlightState::new(kind, tuning.vehicles.get(kind).cruise_speed);
        Self::from_state(tuning, state, rng)
    }

    pub fn from_state(tuning: GameTuning, state: FlightState, rng: R) -> Self {
        Self {
            state,
            tuning,
            rng,
            tick: 0,
        }
    }

    pub fn state(&self) -> &FlightState {
        &self.state
    }

    pub fn tuning(&self) -> &GameTuning {
        &self.tuning
    }

    pub fn snapshot(&self) -> FlightSnapshot {
        let state = &self.state;
        FlightSnapshot {
            tick: self.tick,
            kind: state.kind,
            vehicle: state.vehicle,
            pad: state.pad,
            phase: state.phase(),
            landing_scale: self.tuning.landing.landing_scale(state.approaching),
            flight_speed: state.flight_speed,
            score: state.score,
            sound_enabled: state.sound_enabled,
            restart_pending: state.restart_pending,
            generation: state.generation,
        }
    }

    /// Starts a fresh game in place. Pending deferred effects become stale.
    pub fn reset(&mut self) -> Vec<Effect> {
        let spawn = self.tuning.arena.spawn_bounds();
        let cruise_speed = self.tuning.vehicles.get(self.state.kind).cruise_speed;

        let state = &mut self.state;
        state.score = 0;
        state.vehicle = respawn::random_position(&mut self.rng, spawn);
        state.pad = respawn::random_position(&mut self.rng, spawn);
        state.approaching = false;
        state.landed = false;
        state.restart_pending = false;
        state.flight_speed = cruise_speed;
        state.generation = state.generation.wrapping_add(1);

        info!(
            generation = state.generation,
            kind = ?state.kind,
            vehicle = ?state.vehicle,
            pad = ?state.pad,
            "game reset"
        );

        let mut effects = self.engine_audio();
        effects.push(Effect::Notice(GameNotice::Restarted));
        effects
    }

    pub fn set_vehicle_kind(&mut self, kind: VehicleKind) -> Vec<Effect> {
        self.state.kind = kind;
        self.state.flight_speed = self.tuning.vehicles.get(kind).cruise_speed;
        info!(kind = ?kind, "vehicle changed");
        self.engine_audio()
    }

    pub fn toggle_vehicle_kind(&mut self) -> Vec<Effect> {
        self.set_vehicle_kind(self.state.kind.toggled())
    }

    pub fn set_sound_enabled(&mut self, enabled: bool) -> Vec<Effect> {
        self.state.sound_enabled = enabled;
        debug!(enabled, "engine sound toggled");
        self.engine_audio()
    }

    pub fn toggle_sound(&mut self) -> Vec<Effect> {
        self.set_sound_enabled(!self.state.sound_enabled)
    }

    /// Freezes the flight until the restart is confirmed or cancelled.
    pub fn request_restart(&mut self) {
        self.state.restart_pending = true;
    }

    pub fn cancel_restart(&mut self) {
        self.state.restart_pending = false;
    }

    pub fn confirm_restart(&mut self) -> Vec<Effect> {
        self.reset()
    }

    /// Applies one orientation sample.
    pub fn step(&mut self, sample: OrientationSample) -> Vec<Effect> {
        let mut effects = Vec::new();
        if self.state.is_frozen() {
            return effects;
        }
        self.tick += 1;

        let vehicle = *self.tuning.vehicles.get(self.state.kind);
        let landing = self.tuning.landing;

        flight::tick_vehicle(
            &mut self.state.vehicle,
            sample,
            self.state.flight_speed,
            self.tuning.arena.flight_bounds(),
        );

        let contact = pad::contact(
            &self.state.vehicle,
            &self.state.pad,
            landing.proximity_radius,
            vehicle.landing_tolerance,
        );

        let approaching = contact.is_near();
        if approaching != self.state.approaching {
            debug!(approaching, vehicle = ?self.state.vehicle, "pad proximity changed");
            self.state.approaching = approaching;
            effects.push(Effect::Audio(AudioCommand::SetVolume {
                level: landing.landing_scale(approaching) as f32,
                fade: landing.proximity_fade(),
            }));
        }
        self.state.flight_speed = if approaching {
            vehicle.approach_speed
        } else {
            vehicle.cruise_speed
        };

        if contact == PadContact::Touchdown {
            self.touch_down(&mut effects);
        }
        effects
    }

    fn touch_down(&mut self, effects: &mut Vec<Effect>) {
        let kind = self.state.kind;
        let points = self.tuning.vehicles.get(kind).points;
        let landing = self.tuning.landing;

        self.state.landed = true;
        self.state.score = self.state.score.saturating_add(points);
        info!(kind = ?kind, points, score = self.state.score, "landed");

        effects.push(Effect::Audio(AudioCommand::SetVolume {
            level: landing.landed_volume,
            fade: landing.landed_fade(),
        }));
        effects.push(Effect::Notice(GameNotice::Landed {
            kind,
            points,
            score: self.state.score,
        }));

        let generation = self.state.generation;
        for action in [DeferredAction::ClearScorePulse, DeferredAction::FinishLanding] {
            effects.push(Effect::Schedule {
                delay: landing.celebration(),
                deferred: Deferred { generation, action },
            });
        }
    }

    /// Runs a previously scheduled effect. Effects from before the last reset are dropped.
    pub fn apply_deferred(&mut self, deferred: Deferred) -> Vec<Effect> {
        if deferred.generation != self.state.generation {
            debug!(
                scheduled = deferred.generation,
                current = self.state.generation,
                action = ?deferred.action,
                "dropping stale deferred effect"
            );
            return Vec::new();
        }

        match deferred.action {
            DeferredAction::ClearScorePulse => vec![Effect::Notice(GameNotice::ScorePulseCleared)],
            DeferredAction::FinishLanding => {
                let landing = self.tuning.landing;
                let spawn = self.tuning.arena.spawn_bounds();

                self.state.landed = false;
                self.state.approaching = false;
                self.state.pad = respawn::random_position(&mut self.rng, spawn);
                debug!(pad = ?self.state.pad, "pad respawned");

                vec![
                    Effect::Audio(AudioCommand::SetVolume {
                        level: landing.restore_volume,
                        fade: landing.restore_fade(),
                    }),
                    Effect::Notice(GameNotice::PadRespawned {
                        pad: self.state.pad,
                    }),
                ]
            }
        }
    }

    // A fresh player starts at full volume, so it is brought straight to the level the
    // current phase holds.
    fn engine_audio(&self) -> Vec<Effect> {
        if !self.state.sound_enabled {
            return vec![Effect::Audio(AudioCommand::Pause)];
        }
        let mut effects = vec![Effect::Audio(AudioCommand::Play(
            self.state.kind.engine_track(),
        ))];
        if let Some(level) = self.held_volume() {
            effects.push(Effect::Audio(AudioCommand::SetVolume {
                level,
                fade: Duration::ZERO,
            }));
        }
        effects
    }

    fn held_volume(&self) -> Option<f32> {
        let landing = &self.tuning.landing;
        if self.state.landed {
            Some(landing.landed_volume)
        } else if self.state.approaching {
            Some(landing.approach_scale as f32)
        } else {
            None
        }
    }
}

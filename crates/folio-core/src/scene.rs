//! Retained scene graph and its per-frame update.
//!
//! [`SceneController`] owns the physics world, the live sphere population and
//! the single pointer proxy. Accent changes only *queue* a freshly generated
//! batch; the population is swapped at the start of the next frame so that no
//! body update ever sees the population change under it.

use crate::accent::AccentState;
use crate::body::{random_spawn_position, Body};
use crate::color::Rgb;
use crate::constants::BODY_RADIUS;
use crate::controls::SceneCommand;
use crate::config::SceneParams;
use crate::damp::clamp_dt;
use crate::palette::{self, BodySpec, ACCENTS};
use crate::physics::PhysicsWorld;
use crate::pointer::{PointerProxy, Viewport};
use glam::{Vec2, Vec3};
use rand::rngs::StdRng;
use rand::SeedableRng;

/// Host inputs for one frame.
#[derive(Clone, Copy, Debug)]
pub struct FrameInput {
    /// Seconds since the previous frame, unclamped.
    pub dt: f32,
    /// Pointer in normalized device coordinates, +y up.
    pub pointer_ndc: Vec2,
    pub viewport: Viewport,
}

#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct FrameReport {
    /// The clamped delta actually used.
    pub dt: f32,
    /// Whether a queued batch replaced the population this frame.
    pub swapped: bool,
    pub stepped: bool,
    pub bodies: usize,
}

/// Everything the renderer needs to draw one sphere.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SphereInstance {
    pub center: Vec3,
    pub radius: f32,
    pub color: Vec3,
    pub opacity: f32,
    pub roughness: f32,
    pub metalness: f32,
}

#[derive(Clone, Debug)]
struct PendingBatch {
    accent: usize,
    specs: Vec<BodySpec>,
}

pub struct SceneController<W: PhysicsWorld> {
    world: W,
    bodies: Vec<Body>,
    pointer: PointerProxy,
    accent: AccentState,
    params: SceneParams,
    rng: StdRng,
    pending: Option<PendingBatch>,
    running: bool,
    paused: bool,
    generation: u64,
}

impl<W: PhysicsWorld> SceneController<W> {
    /// Seed the world with the pointer proxy and the first batch.
    pub fn new(mut world: W, params: SceneParams) -> Self {
        let seed = params.seed.unwrap_or_else(rand::random);
        let mut rng = StdRng::seed_from_u64(seed);
        let accent = AccentState::new(params.start_accent, ACCENTS.len());
        let pointer = PointerProxy::spawn(&mut world);
        let specs = palette::regenerate(accent.current(), params.body_count, &mut rng);
        let bodies = specs
            .iter()
            .map(|spec| {
                let position = random_spawn_position(&mut rng);
                Body::spawn(&mut world, spec, position)
            })
            .collect::<Vec<_>>();
        log::info!(
            "[scene] seeded {} bodies, accent={} seed={}",
            bodies.len(),
            accent.current(),
            seed
        );
        Self {
            world,
            bodies,
            pointer,
            accent,
            params,
            rng,
            pending: None,
            running: false,
            paused: false,
            generation: 1,
        }
    }

    /// Begin accepting timer ticks.
    pub fn start(&mut self) {
        if !self.running {
            self.running = true;
            log::info!("[scene] started");
        }
    }

    /// Stop accepting timer ticks.
    ///
    /// A batch queued before the stop is kept; the accent index already points
    /// at it, so the next frame still swaps it in.
    pub fn stop(&mut self) {
        if self.running {
            self.running = false;
            log::info!("[scene] stopped");
        }
    }

    #[inline]
    pub fn is_running(&self) -> bool {
        self.running
    }

    #[inline]
    pub fn is_paused(&self) -> bool {
        self.paused
    }

    /// Accent timer tick: advance the accent and queue a new batch.
    ///
    /// Ignored once the controller is stopped. Returns the new accent index.
    pub fn on_timer(&mut self) -> Option<usize> {
        if !self.running {
            return None;
        }
        let next = self.accent.advance();
        self.queue_batch(next);
        Some(next)
    }

    /// Jump straight to accent `index`.
    pub fn select_accent(&mut self, index: usize) -> bool {
        if !self.accent.select(index) {
            return false;
        }
        self.queue_batch(index);
        true
    }

    /// Resample the population with the current accent.
    pub fn reshuffle(&mut self) {
        self.queue_batch(self.accent.current());
    }

    pub fn toggle_paused(&mut self) -> bool {
        self.paused = !self.paused;
        log::info!("[scene] paused={}", self.paused);
        self.paused
    }

    pub fn apply(&mut self, command: SceneCommand) {
        match command {
            SceneCommand::TogglePause => {
                self.toggle_paused();
            }
            SceneCommand::NextAccent => {
                let next = self.accent.advance();
                self.queue_batch(next);
            }
            SceneCommand::SelectAccent(i) => {
                self.select_accent(i);
            }
            SceneCommand::Reshuffle => self.reshuffle(),
        }
    }

    fn queue_batch(&mut self, accent: usize) {
        let specs = palette::regenerate(accent, self.params.body_count, &mut self.rng);
        self.generation += 1;
        log::debug!(
            "[accent] queued batch {} for accent {}",
            self.generation,
            accent
        );
        // a newer batch supersedes one that has not been applied yet
        self.pending = Some(PendingBatch { accent, specs });
    }

    fn swap_population(&mut self, batch: PendingBatch) {
        for body in &mut self.bodies {
            body.despawn(&mut self.world);
        }
        let mut bodies = Vec::with_capacity(batch.specs.len());
        for spec in &batch.specs {
            let position = random_spawn_position(&mut self.rng);
            bodies.push(Body::spawn(&mut self.world, spec, position));
        }
        self.bodies = bodies;
        log::info!(
            "[accent] population swapped: accent={} bodies={}",
            batch.accent,
            self.bodies.len()
        );
    }

    /// Run one frame: swap in a queued batch, step physics, move the pointer
    /// proxy, then correct every body.
    pub fn frame(&mut self, input: FrameInput) -> FrameReport {
        let dt = clamp_dt(input.dt);
        let swapped = match self.pending.take() {
            Some(batch) => {
                self.swap_population(batch);
                true
            }
            None => false,
        };
        if self.paused {
            return FrameReport {
                dt,
                swapped,
                stepped: false,
                bodies: self.bodies.len(),
            };
        }

        self.world.step(dt);
        self.pointer
            .update(&mut self.world, input.pointer_ndc, input.viewport);
        for body in &mut self.bodies {
            body.update(&mut self.world, dt);
        }
        FrameReport {
            dt,
            swapped,
            stepped: true,
            bodies: self.bodies.len(),
        }
    }

    /// Render data for every live body that has a position.
    pub fn instances(&self) -> Vec<SphereInstance> {
        self.bodies
            .iter()
            .filter_map(|b| {
                let center = b.position(&self.world)?;
                Some(SphereInstance {
                    center,
                    radius: BODY_RADIUS,
                    color: b.display.value,
                    opacity: b.material.opacity,
                    roughness: b.material.roughness,
                    metalness: b.material.metalness,
                })
            })
            .collect()
    }

    #[inline]
    pub fn accent(&self) -> usize {
        self.accent.current()
    }

    pub fn accent_color(&self) -> Rgb {
        palette::accent_color(self.accent.current())
    }

    /// Accent of the batch waiting to be swapped in, if any.
    pub fn pending_accent(&self) -> Option<usize> {
        self.pending.as_ref().map(|p| p.accent)
    }

    /// Number of batches generated so far, including the initial one.
    #[inline]
    pub fn generation(&self) -> u64 {
        self.generation
    }

    pub fn bodies(&self) -> &[Body] {
        &self.bodies
    }

    pub fn pointer(&self) -> &PointerProxy {
        &self.pointer
    }

    pub fn world(&self) -> &W {
        &self.world
    }
}

//! Lockstep simulation loop.
//!
//! [`Simulation`] owns the height field, the agent roster, the tunable
//! parameter set, and the control-ingress queue, and advances them all
//! in lockstep: each [`step_sync()`](Simulation::step_sync) call drains
//! pending commands, moves the agents (leaving ripple trails), runs one
//! propagation step, and returns a [`StepResult`] summarising the tick.
//!
//! # Determinism
//!
//! Spawn positions come from a simulation-level seeded ChaCha8 stream;
//! each agent's private RNG is seeded from the config seed XOR its
//! spawn id. Two simulations built from the same [`SimConfig`] and fed
//! the same command sequence at the same ticks produce bit-identical
//! height fields and agent trajectories.

use indexmap::IndexMap;
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

use ripple_agents::WanderAgent;
use ripple_core::{AgentId, Command, TickId, Tunables};
use ripple_field::RippleField;
use ripple_render::{BackgroundSampler, ComposeError, Compositor, FrameBuffer};

use crate::config::{ConfigError, SimConfig};
use crate::ingress::{control_queue, CommandBatch, ControlHandle, ControlQueue};

/// Fraction of the configured ripple strength an agent leaves behind at
/// its position every tick.
pub const TRAIL_RATIO: f64 = 0.3;

/// Fraction of the configured ripple strength applied to pointer-drag
/// disturbances. Drags fire far more often than presses, so each one
/// carries less energy.
pub const DRAG_RATIO: f64 = 0.5;

/// Side length of the square spawn region centred on the world centre.
const SPAWN_SPREAD: f64 = 100.0;

// ── StepResult ──────────────────────────────────────────────────────

/// A read-only view of one agent after a tick, for sprite rendering.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct AgentView {
    /// The agent's stable identity.
    pub id: AgentId,
    /// Display-space x position.
    pub x: f64,
    /// Display-space y position.
    pub y: f64,
    /// Direction of travel in radians.
    pub heading: f64,
}

/// Summary of one [`Simulation::step_sync`] call.
#[derive(Clone, Debug)]
pub struct StepResult {
    /// Tick just completed (1 after the first step).
    pub tick: TickId,
    /// Commands drained and applied this tick.
    pub commands_applied: usize,
    /// Commands passed to `step_sync` that were dropped because the
    /// ingress queue was full.
    pub commands_rejected: usize,
    /// Post-step agent poses in spawn order.
    pub agents: Vec<AgentView>,
}

// ── Simulation ──────────────────────────────────────────────────────

/// Single-threaded lockstep world: height field + agents + controls.
///
/// Created from a [`SimConfig`] via [`new()`](Simulation::new). External
/// input reaches it through cloned [`ControlHandle`]s; everything else
/// happens inside [`step_sync()`](Simulation::step_sync).
pub struct Simulation {
    field: RippleField,
    agents: IndexMap<AgentId, WanderAgent>,
    tunables: Tunables,
    rng: ChaCha8Rng,
    tick: TickId,
    queue: ControlQueue,
    handle: ControlHandle,
    compositor: Compositor,
    next_agent_id: u32,
    width: f64,
    height: f64,
    agent_speed: f64,
    agent_max_turn: f64,
    seed: u64,
}

impl Simulation {
    /// Build a simulation from a validated configuration.
    ///
    /// Spawns the initial agent population near the world centre and
    /// leaves the field flat. Consumes the `SimConfig`.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError`] if the configuration fails validation.
    pub fn new(config: SimConfig) -> Result<Simulation, ConfigError> {
        config.validate()?;

        let field = RippleField::builder()
            .grid_width(config.grid_width())
            .grid_height(config.grid_height())
            .scale(config.scale)
            .damping(config.tunables.damping() as f32)
            .build()
            .expect("field parameters validated by SimConfig");

        let (handle, queue) = control_queue(config.max_ingress_queue);

        let mut sim = Simulation {
            field,
            agents: IndexMap::new(),
            tunables: config.tunables,
            rng: ChaCha8Rng::seed_from_u64(config.seed),
            tick: TickId(0),
            queue,
            handle,
            compositor: Compositor::new(),
            next_agent_id: 0,
            width: f64::from(config.width),
            height: f64::from(config.height),
            agent_speed: config.agent_speed,
            agent_max_turn: config.agent_max_turn,
            seed: config.seed,
        };
        sim.resize_school();
        Ok(sim)
    }

    /// A producer handle for submitting commands from an input layer.
    pub fn control_handle(&self) -> ControlHandle {
        self.handle.clone()
    }

    /// Execute one tick synchronously.
    ///
    /// `commands` are submitted to the ingress queue first (commands
    /// already queued by external handles keep their earlier position),
    /// then the whole queue is drained and applied, agents wander and
    /// leave trails, and the field advances one step.
    pub fn step_sync(&mut self, commands: Vec<Command>) -> StepResult {
        let mut commands_rejected = 0;
        for command in commands {
            if self.handle.submit(command).is_err() {
                commands_rejected += 1;
            }
        }

        let batch = self.queue.drain();
        let commands_applied = batch.len();
        self.apply_commands(batch);

        let trail = (self.tunables.ripple_strength() * TRAIL_RATIO) as f32;
        for agent in self.agents.values_mut() {
            agent.step();
            let (x, y) = agent.position();
            self.field.disturb(x, y, trail);
        }

        self.field.step();
        self.tick = TickId(self.tick.0 + 1);

        StepResult {
            tick: self.tick,
            commands_applied,
            commands_rejected,
            agents: self.agent_views(),
        }
    }

    /// Execute one tick with no directly supplied commands (queued
    /// commands are still drained).
    pub fn step(&mut self) -> StepResult {
        self.step_sync(Vec::new())
    }

    /// Render the current field state over `background` into `frame`.
    ///
    /// Agents are not drawn; sprite rendering is the caller's concern
    /// and works from [`StepResult::agents`].
    ///
    /// # Errors
    ///
    /// Returns [`ComposeError`] if the frame does not match the
    /// display resolution.
    pub fn render<B: BackgroundSampler>(
        &self,
        background: &B,
        frame: &mut FrameBuffer,
    ) -> Result<(), ComposeError> {
        self.compositor.compose(&self.field, background, frame)
    }

    /// The height field.
    pub fn field(&self) -> &RippleField {
        &self.field
    }

    /// Current tunable parameter values.
    pub fn tunables(&self) -> &Tunables {
        &self.tunables
    }

    /// Ticks completed since construction.
    pub fn current_tick(&self) -> TickId {
        self.tick
    }

    /// The seed this run was constructed with.
    pub fn seed(&self) -> u64 {
        self.seed
    }

    /// Current agent poses in spawn order.
    pub fn agent_views(&self) -> Vec<AgentView> {
        self.agents
            .values()
            .map(|agent| {
                let (x, y) = agent.position();
                AgentView {
                    id: agent.id(),
                    x,
                    y,
                    heading: agent.heading(),
                }
            })
            .collect()
    }

    fn apply_commands(&mut self, batch: CommandBatch) {
        for command in batch {
            match command {
                Command::Disturb { x, y, strength } => {
                    self.field.disturb(x, y, strength as f32);
                }
                Command::PointerPress { x, y } => {
                    self.field
                        .disturb(x, y, self.tunables.ripple_strength() as f32);
                }
                Command::PointerDrag { x, y } => {
                    self.field
                        .disturb(x, y, (self.tunables.ripple_strength() * DRAG_RATIO) as f32);
                }
                Command::SetDamping(value) => {
                    self.tunables.set_damping(value);
                    self.field.set_damping(self.tunables.damping() as f32);
                }
                Command::SetRippleStrength(value) => {
                    self.tunables.set_ripple_strength(value);
                }
                Command::SetAgentCount(count) => {
                    self.tunables.set_agent_count(count);
                    self.resize_school();
                }
            }
        }
    }

    /// Grow or shrink the roster to the tunable target. New agents
    /// spawn near the world centre with random headings; shrinking
    /// removes the newest agents first, so long-lived agents keep their
    /// identities.
    fn resize_school(&mut self) {
        let target = self.tunables.agent_count();
        while self.agents.len() < target {
            let id = AgentId(self.next_agent_id);
            self.next_agent_id += 1;

            let x = self.width / 2.0 + (self.rng.random::<f64>() - 0.5) * SPAWN_SPREAD;
            let y = self.height / 2.0 + (self.rng.random::<f64>() - 0.5) * SPAWN_SPREAD;
            let agent = WanderAgent::builder(id)
                .world_width(self.width)
                .world_height(self.height)
                .position(x, y)
                .speed(self.agent_speed)
                .max_turn(self.agent_max_turn)
                .seed(self.seed ^ u64::from(id.0))
                .build()
                .expect("agent parameters validated by SimConfig");
            self.agents.insert(id, agent);
        }
        while self.agents.len() > target {
            self.agents.pop();
        }
    }
}

impl std::fmt::Debug for Simulation {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Simulation")
            .field("tick", &self.tick)
            .field("seed", &self.seed)
            .field("agents", &self.agents.len())
            .field("tunables", &self.tunables)
            .finish()
    }
}

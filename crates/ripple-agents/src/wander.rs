//! The wander steering behaviour.
//!
//! Each step the agent's velocity is perturbed by a small uniform random
//! force, renormalised back to constant speed, and integrated into
//! position. A soft containment rule then nudges the velocity inward
//! whenever the agent is within [`CONTAIN_MARGIN`] display units of a
//! world edge. The nudge deliberately breaks the constant-speed property
//! for one step; the next step's renormalisation restores it. Agents may
//! overshoot the margin (and briefly the world rectangle itself) while
//! turning around; that overshoot is part of the organic look.
//!
//! Every agent owns its own ChaCha8 RNG, seeded at construction, so a
//! single agent's trajectory is reproducible in isolation regardless of
//! what the rest of the simulation draws.

use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;
use ripple_core::AgentId;

/// Display-unit distance from a world edge at which soft containment
/// starts steering the agent back toward the interior.
pub const CONTAIN_MARGIN: f64 = 50.0;

/// Default constant travel speed, in display units per step.
pub const DEFAULT_SPEED: f64 = 3.0;

/// Default twitchiness: maximum per-axis random force per step, and the
/// size of the containment nudge. Lower values give smoother arcs.
pub const DEFAULT_MAX_TURN: f64 = 0.2;

/// Rescale a velocity vector to the given speed, preserving direction.
///
/// Returns `None` for the zero vector, which has no direction to
/// preserve. Callers are expected to fall back to their previous
/// velocity in that case rather than stalling the agent.
pub fn rescaled(vx: f64, vy: f64, speed: f64) -> Option<(f64, f64)> {
    let magnitude = (vx * vx + vy * vy).sqrt();
    if magnitude == 0.0 {
        None
    } else {
        Some((vx / magnitude * speed, vy / magnitude * speed))
    }
}

/// An autonomous agent wandering the display rectangle.
///
/// Positions are in display coordinates (the same space disturbances are
/// injected in), not grid coordinates. Constructed via
/// [`WanderAgent::builder`].
#[derive(Clone, Debug)]
pub struct WanderAgent {
    id: AgentId,
    x: f64,
    y: f64,
    vx: f64,
    vy: f64,
    speed: f64,
    max_turn: f64,
    world_width: f64,
    world_height: f64,
    rng: ChaCha8Rng,
}

/// Builder for [`WanderAgent`].
///
/// Required fields: `world_width` and `world_height`. Position defaults
/// to the world centre; unless fixed with
/// [`heading`](WanderAgentBuilder::heading), the initial heading is the
/// seeded RNG's first draw.
pub struct WanderAgentBuilder {
    id: AgentId,
    world_width: Option<f64>,
    world_height: Option<f64>,
    position: Option<(f64, f64)>,
    heading: Option<f64>,
    speed: f64,
    max_turn: f64,
    seed: u64,
}

impl WanderAgent {
    /// Create a new builder for the given agent identity.
    pub fn builder(id: AgentId) -> WanderAgentBuilder {
        WanderAgentBuilder {
            id,
            world_width: None,
            world_height: None,
            position: None,
            heading: None,
            speed: DEFAULT_SPEED,
            max_turn: DEFAULT_MAX_TURN,
            seed: 0,
        }
    }

    /// This agent's identity.
    pub fn id(&self) -> AgentId {
        self.id
    }

    /// Current position in display coordinates.
    pub fn position(&self) -> (f64, f64) {
        (self.x, self.y)
    }

    /// Current velocity in display units per step.
    pub fn velocity(&self) -> (f64, f64) {
        (self.vx, self.vy)
    }

    /// Direction of travel in radians, for rotating a sprite to face
    /// along the path.
    pub fn heading(&self) -> f64 {
        self.vy.atan2(self.vx)
    }

    /// Configured constant speed.
    pub fn speed(&self) -> f64 {
        self.speed
    }

    /// Advance the agent one step.
    ///
    /// Perturb, renormalise, integrate, then contain. If the perturbed
    /// velocity happens to be exactly zero (no direction to renormalise)
    /// the pre-perturbation velocity is restored, so the agent never
    /// stalls.
    pub fn step(&mut self) {
        let (held_vx, held_vy) = (self.vx, self.vy);
        self.vx += (self.rng.random::<f64>() - 0.5) * self.max_turn;
        self.vy += (self.rng.random::<f64>() - 0.5) * self.max_turn;

        match rescaled(self.vx, self.vy, self.speed) {
            Some((vx, vy)) => {
                self.vx = vx;
                self.vy = vy;
            }
            None => {
                self.vx = held_vx;
                self.vy = held_vy;
            }
        }

        self.x += self.vx;
        self.y += self.vy;

        // Soft containment: steer back, never teleport or clamp.
        if self.x < CONTAIN_MARGIN {
            self.vx += self.max_turn;
        }
        if self.x > self.world_width - CONTAIN_MARGIN {
            self.vx -= self.max_turn;
        }
        if self.y < CONTAIN_MARGIN {
            self.vy += self.max_turn;
        }
        if self.y > self.world_height - CONTAIN_MARGIN {
            self.vy -= self.max_turn;
        }
    }
}

impl WanderAgentBuilder {
    /// Set the world width in display units.
    pub fn world_width(mut self, width: f64) -> Self {
        self.world_width = Some(width);
        self
    }

    /// Set the world height in display units.
    pub fn world_height(mut self, height: f64) -> Self {
        self.world_height = Some(height);
        self
    }

    /// Set the starting position (default: world centre).
    pub fn position(mut self, x: f64, y: f64) -> Self {
        self.position = Some((x, y));
        self
    }

    /// Fix the initial heading in radians instead of drawing it from
    /// the RNG at build time.
    pub fn heading(mut self, radians: f64) -> Self {
        self.heading = Some(radians);
        self
    }

    /// Set the constant travel speed (default: 3.0). Must be finite
    /// and positive.
    pub fn speed(mut self, speed: f64) -> Self {
        self.speed = speed;
        self
    }

    /// Set the per-step turn limit (default: 0.2). Must be finite and
    /// non-negative.
    pub fn max_turn(mut self, max_turn: f64) -> Self {
        self.max_turn = max_turn;
        self
    }

    /// Set the seed for this agent's private RNG (default: 0).
    pub fn seed(mut self, seed: u64) -> Self {
        self.seed = seed;
        self
    }

    /// Build the agent, validating all configuration.
    ///
    /// # Errors
    ///
    /// Returns `Err` if:
    /// - `world_width` or `world_height` is not set, not finite, or not
    ///   positive
    /// - `speed` is not finite or not positive
    /// - `max_turn` is not finite or negative
    /// - the starting position is not finite
    pub fn build(self) -> Result<WanderAgent, String> {
        let world_width = self
            .world_width
            .ok_or_else(|| "world_width is required".to_string())?;
        let world_height = self
            .world_height
            .ok_or_else(|| "world_height is required".to_string())?;
        if !(world_width.is_finite() && world_width > 0.0) {
            return Err(format!(
                "world_width must be finite and positive, got {world_width}"
            ));
        }
        if !(world_height.is_finite() && world_height > 0.0) {
            return Err(format!(
                "world_height must be finite and positive, got {world_height}"
            ));
        }
        if !(self.speed.is_finite() && self.speed > 0.0) {
            return Err(format!(
                "speed must be finite and positive, got {}",
                self.speed
            ));
        }
        if !(self.max_turn.is_finite() && self.max_turn >= 0.0) {
            return Err(format!(
                "max_turn must be finite and non-negative, got {}",
                self.max_turn
            ));
        }

        let (x, y) = self
            .position
            .unwrap_or((world_width / 2.0, world_height / 2.0));
        if !(x.is_finite() && y.is_finite()) {
            return Err(format!("position must be finite, got ({x}, {y})"));
        }

        let mut rng = ChaCha8Rng::seed_from_u64(self.seed);
        let angle = self
            .heading
            .unwrap_or_else(|| rng.random::<f64>() * std::f64::consts::TAU);

        Ok(WanderAgent {
            id: self.id,
            x,
            y,
            vx: angle.cos() * self.speed,
            vy: angle.sin() * self.speed,
            speed: self.speed,
            max_turn: self.max_turn,
            world_width,
            world_height,
            rng,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn agent_at(x: f64, y: f64, heading: f64) -> WanderAgent {
        WanderAgent::builder(AgentId(0))
            .world_width(600.0)
            .world_height(400.0)
            .position(x, y)
            .heading(heading)
            .seed(7)
            .build()
            .unwrap()
    }

    // ---------------------------------------------------------------
    // Builder tests
    // ---------------------------------------------------------------

    #[test]
    fn builder_defaults() {
        let agent = WanderAgent::builder(AgentId(3))
            .world_width(600.0)
            .world_height(400.0)
            .seed(42)
            .build()
            .unwrap();

        assert_eq!(agent.id(), AgentId(3));
        assert_eq!(agent.position(), (300.0, 200.0));
        assert_eq!(agent.speed(), DEFAULT_SPEED);

        let (vx, vy) = agent.velocity();
        let magnitude = (vx * vx + vy * vy).sqrt();
        assert!((magnitude - DEFAULT_SPEED).abs() < 1e-9);
    }

    #[test]
    fn builder_rejects_missing_world() {
        let result = WanderAgent::builder(AgentId(0)).world_width(600.0).build();
        assert!(result.unwrap_err().contains("world_height"));
    }

    #[test]
    fn builder_rejects_bad_numerics() {
        for build in [
            WanderAgent::builder(AgentId(0))
                .world_width(0.0)
                .world_height(400.0)
                .build(),
            WanderAgent::builder(AgentId(0))
                .world_width(600.0)
                .world_height(f64::NAN)
                .build(),
            WanderAgent::builder(AgentId(0))
                .world_width(600.0)
                .world_height(400.0)
                .speed(-1.0)
                .build(),
            WanderAgent::builder(AgentId(0))
                .world_width(600.0)
                .world_height(400.0)
                .max_turn(-0.1)
                .build(),
            WanderAgent::builder(AgentId(0))
                .world_width(600.0)
                .world_height(400.0)
                .position(f64::INFINITY, 0.0)
                .build(),
        ] {
            assert!(build.is_err());
        }
    }

    #[test]
    fn fixed_heading_sets_velocity() {
        let agent = agent_at(300.0, 200.0, 0.0);
        let (vx, vy) = agent.velocity();
        assert!((vx - DEFAULT_SPEED).abs() < 1e-12);
        assert!(vy.abs() < 1e-12);
        assert!(agent.heading().abs() < 1e-12);
    }

    // ---------------------------------------------------------------
    // Steering tests
    // ---------------------------------------------------------------

    #[test]
    fn speed_is_constant_away_from_edges() {
        // Huge world, centre start: containment can never trigger in
        // 500 steps, so post-step speed is exactly the renormalised one.
        let mut agent = WanderAgent::builder(AgentId(0))
            .world_width(10_000.0)
            .world_height(10_000.0)
            .seed(9)
            .build()
            .unwrap();

        for _ in 0..500 {
            agent.step();
            let (vx, vy) = agent.velocity();
            let magnitude = (vx * vx + vy * vy).sqrt();
            assert!((magnitude - DEFAULT_SPEED).abs() < 1e-9);
        }
    }

    #[test]
    fn step_moves_by_velocity() {
        let mut agent = agent_at(300.0, 200.0, 0.0);
        agent.step();
        let (x, y) = agent.position();
        let (vx, vy) = agent.velocity();
        assert!((x - (300.0 + vx)).abs() < 1e-12);
        assert!((y - (200.0 + vy)).abs() < 1e-12);
    }

    #[test]
    fn one_step_displacement_is_bounded_by_speed_plus_turn() {
        // Worst case per axis: full speed plus the whole perturbation
        // pulling the same way.
        let mut agent = agent_at(25.0, 200.0, std::f64::consts::PI);
        agent.step();
        let (x, _) = agent.position();
        assert!(x >= 25.0 - 3.2 && x <= 25.0 + 3.2, "x = {x}");
    }

    #[test]
    fn containment_nudges_velocity_inward() {
        // Two agents, identical seeds and headings, differing only in
        // position: the only difference in outcome is the edge nudge.
        let mut centre = agent_at(300.0, 200.0, std::f64::consts::PI);
        let mut near_left = agent_at(20.0, 200.0, std::f64::consts::PI);

        centre.step();
        near_left.step();

        let (cvx, cvy) = centre.velocity();
        let (lvx, lvy) = near_left.velocity();
        assert!((lvx - (cvx + DEFAULT_MAX_TURN)).abs() < 1e-12);
        assert!((lvy - cvy).abs() < 1e-12);
    }

    #[test]
    fn containment_nudges_apply_on_all_four_edges() {
        let cases = [
            ((20.0, 200.0), (DEFAULT_MAX_TURN, 0.0)),
            ((580.0, 200.0), (-DEFAULT_MAX_TURN, 0.0)),
            ((300.0, 20.0), (0.0, DEFAULT_MAX_TURN)),
            ((300.0, 380.0), (0.0, -DEFAULT_MAX_TURN)),
        ];

        for ((x, y), (dvx, dvy)) in cases {
            let mut centre = agent_at(300.0, 200.0, 0.5);
            let mut edge = agent_at(x, y, 0.5);
            centre.step();
            edge.step();

            let (cvx, cvy) = centre.velocity();
            let (evx, evy) = edge.velocity();
            assert!((evx - (cvx + dvx)).abs() < 1e-12, "edge ({x},{y})");
            assert!((evy - (cvy + dvy)).abs() < 1e-12, "edge ({x},{y})");
        }
    }

    #[test]
    fn identical_seeds_give_identical_trajectories() {
        let build = || {
            WanderAgent::builder(AgentId(0))
                .world_width(600.0)
                .world_height(400.0)
                .seed(123)
                .build()
                .unwrap()
        };
        let mut a = build();
        let mut b = build();

        for _ in 0..200 {
            a.step();
            b.step();
            assert_eq!(a.position(), b.position());
            assert_eq!(a.velocity(), b.velocity());
        }
    }

    #[test]
    fn different_seeds_diverge() {
        let build = |seed| {
            WanderAgent::builder(AgentId(0))
                .world_width(600.0)
                .world_height(400.0)
                .seed(seed)
                .build()
                .unwrap()
        };
        let mut a = build(1);
        let mut b = build(2);
        for _ in 0..10 {
            a.step();
            b.step();
        }
        assert_ne!(a.position(), b.position());
    }

    // ---------------------------------------------------------------
    // rescaled()
    // ---------------------------------------------------------------

    #[test]
    fn rescaled_zero_vector_is_none() {
        assert_eq!(rescaled(0.0, 0.0, 3.0), None);
    }

    #[test]
    fn rescaled_preserves_direction() {
        let (vx, vy) = rescaled(3.0, 4.0, 10.0).unwrap();
        assert!((vx - 6.0).abs() < 1e-12);
        assert!((vy - 8.0).abs() < 1e-12);
    }

    mod properties {
        use super::*;
        use proptest::prelude::*;

        proptest! {
            #[test]
            fn rescaled_magnitude_equals_speed(
                vx in -100.0f64..100.0,
                vy in -100.0f64..100.0,
                speed in 0.1f64..10.0,
            ) {
                prop_assume!(vx != 0.0 || vy != 0.0);
                let (rx, ry) = rescaled(vx, vy, speed).unwrap();
                let magnitude = (rx * rx + ry * ry).sqrt();
                prop_assert!((magnitude - speed).abs() < 1e-9);
                // Direction preserved: cross product with input is ~0
                // and dot product positive.
                prop_assert!((vx * ry - vy * rx).abs() < 1e-6);
                prop_assert!(vx * rx + vy * ry > 0.0);
            }

            #[test]
            fn speed_holds_for_arbitrary_seeds(seed in any::<u64>()) {
                let mut agent = WanderAgent::builder(AgentId(0))
                    .world_width(10_000.0)
                    .world_height(10_000.0)
                    .seed(seed)
                    .build()
                    .unwrap();
                for _ in 0..20 {
                    agent.step();
                    let (vx, vy) = agent.velocity();
                    let magnitude = (vx * vx + vy * vy).sqrt();
                    prop_assert!((magnitude - DEFAULT_SPEED).abs() < 1e-9);
                }
            }
        }
    }
}

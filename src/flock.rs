/*
 * Flock Module
 *
 * This module defines the Flock, the state machine holding every agent's
 * position and velocity. The front end calls `step()` once per simulation
 * tick and forwards pointer clicks into `add_agent` and `scatter`.
 *
 * A step runs, in order:
 * 1. Rebuild the pairwise distance matrix from current positions
 * 2. Evaluate the three rules against that snapshot
 * 3. Add the rule delta to velocity and cap it at the maximum velocity
 * 4. Integrate positions with a unit time step
 * 5. Wrap positions that left the arena margin onto the opposite edge
 *
 * Agents are only ever appended, so indices stay stable for the lifetime
 * of the flock.
 */

use std::f64::consts::TAU;

use glam::DVec2;
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha12Rng;
use tracing::{debug, info, trace};

use crate::distance::DistanceMatrix;
use crate::error::{FlockError, Result};
use crate::params::FlockParams;
use crate::rules::apply_rules;
use crate::vector::limit;

pub struct Flock {
    params: FlockParams,
    position: Vec<DVec2>,
    velocity: Vec<DVec2>,
    distance_matrix: DistanceMatrix,
    rng: ChaCha12Rng,
    steps: u64,
}

// Unit vector with a uniformly random heading in [0, 2π)
fn random_heading(rng: &mut impl Rng) -> DVec2 {
    let angle = TAU * rng.gen::<f64>();
    DVec2::new(angle.sin(), angle.cos())
}

fn seeded_rng(seed: Option<u64>) -> ChaCha12Rng {
    match seed {
        Some(seed) => ChaCha12Rng::seed_from_u64(seed),
        None => ChaCha12Rng::from_entropy(),
    }
}

// Reject NaN and infinite pointer coordinates before they reach the state
fn finite_point(x: f64, y: f64) -> Result<DVec2> {
    if x.is_finite() && y.is_finite() {
        Ok(DVec2::new(x, y))
    } else {
        Err(FlockError::NonFiniteCoordinate { x, y })
    }
}

/// Wrap one position onto the opposite edge once it is past the margin.
///
/// Each axis is checked independently. This is a reset, not a modulo, so the
/// wrapped coordinate lands exactly on `-margin` or `dimension + margin`.
pub fn wrap_edges(position: &mut DVec2, width: f64, height: f64, margin: f64) {
    if position.x > width + margin {
        position.x = -margin;
    }
    if position.x < -margin {
        position.x = width + margin;
    }
    if position.y > height + margin {
        position.y = -margin;
    }
    if position.y < -margin {
        position.y = height + margin;
    }
}

impl Flock {
    /// Build a flock of `params.num_boids` agents around the arena center.
    ///
    /// Uses `params.seed` when set, otherwise seeds from OS entropy.
    pub fn new(params: FlockParams) -> Result<Self> {
        let rng = seeded_rng(params.seed);
        Self::with_rng(params, rng)
    }

    pub fn with_rng(params: FlockParams, mut rng: ChaCha12Rng) -> Result<Self> {
        params.validate()?;

        let (cx, cy) = params.center();
        let spread = params.spawn_spread;
        let n = params.num_boids;

        let mut position = Vec::with_capacity(n);
        let mut velocity = Vec::with_capacity(n);
        for _ in 0..n {
            let dx = (2.0 * rng.gen::<f64>() - 1.0) * spread;
            let dy = (2.0 * rng.gen::<f64>() - 1.0) * spread;
            position.push(DVec2::new(cx + dx, cy + dy));
            velocity.push(random_heading(&mut rng));
        }

        info!(agents = n, seed = ?params.seed, "Created flock");

        Ok(Self {
            params,
            position,
            velocity,
            distance_matrix: DistanceMatrix::default(),
            rng,
            steps: 0,
        })
    }

    // Build a flock from explicit agent state, ignoring `params.num_boids`
    pub fn from_state(
        params: FlockParams,
        position: Vec<DVec2>,
        velocity: Vec<DVec2>,
    ) -> Result<Self> {
        params.validate()?;
        if position.len() != velocity.len() {
            return Err(FlockError::InvalidParams(format!(
                "{} positions but {} velocities",
                position.len(),
                velocity.len()
            )));
        }
        if position
            .iter()
            .chain(velocity.iter())
            .any(|v| !v.is_finite())
        {
            return Err(FlockError::InvalidParams(
                "agent state must be finite".to_string(),
            ));
        }

        let rng = seeded_rng(params.seed);

        Ok(Self {
            params,
            position,
            velocity,
            distance_matrix: DistanceMatrix::default(),
            rng,
            steps: 0,
        })
    }

    // Advance the simulation by one unit of time
    pub fn step(&mut self) {
        // Snapshot distances for this step
        self.distance_matrix = DistanceMatrix::compute(&self.position, self.params.parallel);

        // Rules read the pre-update state only
        let delta = apply_rules(
            &self.position,
            &self.velocity,
            &self.distance_matrix,
            &self.params,
        );

        for (velocity, delta) in self.velocity.iter_mut().zip(delta) {
            *velocity += delta;
        }
        limit(&mut self.velocity, self.params.max_velocity);

        for (position, velocity) in self.position.iter_mut().zip(&self.velocity) {
            *position += *velocity;
        }

        self.apply_boundary_conditions();

        self.steps += 1;
        trace!(step = self.steps, agents = self.len(), "Flock stepped");
    }

    fn apply_boundary_conditions(&mut self) {
        let FlockParams {
            width,
            height,
            boundary_margin,
            ..
        } = self.params;
        for position in &mut self.position {
            wrap_edges(position, width, height, boundary_margin);
        }
    }

    /// Append one agent at `(x, y)` with a random unit heading.
    ///
    /// The point is not bounds checked; an agent outside the margin is
    /// wrapped on the next step.
    pub fn add_agent(&mut self, x: f64, y: f64) -> Result<()> {
        let point = finite_point(x, y)?;
        let heading = random_heading(&mut self.rng);
        self.position.push(point);
        self.velocity.push(heading);
        debug!(x, y, agents = self.len(), "Added agent");
        Ok(())
    }

    /// Push every agent away from `(x, y)` in proportion to its distance.
    ///
    /// Velocities are not re-limited here; the next step caps them.
    pub fn scatter(&mut self, x: f64, y: f64) -> Result<()> {
        let origin = finite_point(x, y)?;
        let factor = self.params.scattering_velocity_factor;
        for (velocity, position) in self.velocity.iter_mut().zip(&self.position) {
            *velocity += factor * (*position - origin);
        }
        debug!(x, y, agents = self.len(), "Scattered flock");
        Ok(())
    }

    pub fn len(&self) -> usize {
        self.position.len()
    }

    pub fn is_empty(&self) -> bool {
        self.position.is_empty()
    }

    pub fn positions(&self) -> &[DVec2] {
        &self.position
    }

    pub fn velocities(&self) -> &[DVec2] {
        &self.velocity
    }

    // Direction markers, `beak_length` ahead of each agent at full speed
    pub fn beaks(&self) -> Vec<DVec2> {
        let scale = self.params.beak_length / self.params.max_velocity;
        self.position
            .iter()
            .zip(&self.velocity)
            .map(|(p, v)| *p + scale * *v)
            .collect()
    }

    /// Distances computed by the most recent step (empty before the first).
    pub fn distance_matrix(&self) -> &DistanceMatrix {
        &self.distance_matrix
    }

    pub fn params(&self) -> &FlockParams {
        &self.params
    }

    pub fn steps(&self) -> u64 {
        self.steps
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn seeded(num_boids: usize, seed: u64) -> Flock {
        Flock::new(FlockParams {
            num_boids,
            seed: Some(seed),
            ..FlockParams::default()
        })
        .unwrap()
    }

    #[test]
    fn initial_agents_spawn_near_center_with_unit_headings() {
        let flock = seeded(50, 7);
        assert_eq!(flock.len(), 50);
        assert_eq!(flock.velocities().len(), 50);
        for (p, v) in flock.positions().iter().zip(flock.velocities()) {
            assert!((p.x - 320.0).abs() <= 10.0);
            assert!((p.y - 240.0).abs() <= 10.0);
            assert!((v.length() - 1.0).abs() < 1e-12);
        }
    }

    #[test]
    fn same_seed_same_flock() {
        let a = seeded(10, 99);
        let b = seeded(10, 99);
        assert_eq!(a.positions(), b.positions());
        assert_eq!(a.velocities(), b.velocities());
    }

    #[test]
    fn zero_agents_is_a_valid_idle_flock() {
        let mut flock = seeded(0, 1);
        assert!(flock.is_empty());
        flock.step();
        assert!(flock.is_empty());
        assert!(flock.distance_matrix().is_empty());
        assert_eq!(flock.steps(), 1);
    }

    #[test]
    fn invalid_params_are_rejected() {
        let params = FlockParams {
            distance_threshold: -1.0,
            ..FlockParams::default()
        };
        assert!(Flock::new(params).is_err());
    }

    #[test]
    fn mismatched_state_is_rejected() {
        let err = Flock::from_state(
            FlockParams::default(),
            vec![DVec2::ZERO, DVec2::ONE],
            vec![DVec2::ZERO],
        );
        assert!(matches!(err, Err(FlockError::InvalidParams(_))));
    }

    #[test]
    fn wrap_edges_resets_to_opposite_margin() {
        let mut p = DVec2::new(643.0, 100.0);
        wrap_edges(&mut p, 640.0, 480.0, 2.0);
        assert_eq!(p, DVec2::new(-2.0, 100.0));

        let mut p = DVec2::new(100.0, -2.5);
        wrap_edges(&mut p, 640.0, 480.0, 2.0);
        assert_eq!(p, DVec2::new(100.0, 482.0));

        // Inside the margin nothing happens
        let mut p = DVec2::new(-1.0, 481.0);
        wrap_edges(&mut p, 640.0, 480.0, 2.0);
        assert_eq!(p, DVec2::new(-1.0, 481.0));
    }

    #[test]
    fn beak_is_ten_units_ahead_at_full_speed() {
        let flock = Flock::from_state(
            FlockParams::default(),
            vec![DVec2::new(100.0, 100.0)],
            vec![DVec2::new(0.0, 2.0)],
        )
        .unwrap();
        assert_eq!(flock.beaks(), vec![DVec2::new(100.0, 110.0)]);
    }

    #[test]
    fn rejected_input_leaves_state_untouched() {
        let mut flock = seeded(3, 5);
        let positions = flock.positions().to_vec();
        let velocities = flock.velocities().to_vec();

        assert!(flock.add_agent(f64::NAN, 1.0).is_err());
        assert!(flock.scatter(0.0, f64::INFINITY).is_err());

        assert_eq!(flock.positions(), positions.as_slice());
        assert_eq!(flock.velocities(), velocities.as_slice());
    }
}

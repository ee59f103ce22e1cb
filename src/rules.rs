/*
 * Rules Module
 *
 * The three flocking rules. Each takes the frozen snapshot of the current
 * step (positions, velocities and the distance matrix) and returns one
 * velocity delta per agent, already limited to the per-rule cap:
 * 1. Separation: push away from every neighbor closer than the minimum distance
 * 2. Alignment: steer along the summed velocity of neighbors in the threshold radius
 * 3. Cohesion: steer toward the summed position of neighbors, less the agent's own
 *
 * Neighborhoods include the agent itself (self-distance is zero). Alignment
 * and cohesion are plain sums, not averages, so denser neighborhoods pull
 * harder; separation is weighted by the neighbor count.
 */

use glam::DVec2;
use rayon::prelude::*;

use crate::distance::DistanceMatrix;
use crate::params::FlockParams;
use crate::vector::limit;

// Evaluate `delta` for every agent index, on the rayon pool when asked.
// Each agent's sums run sequentially over j, so both paths agree bit for bit.
fn per_agent<F>(n: usize, parallel: bool, delta: F) -> Vec<DVec2>
where
    F: Fn(usize) -> DVec2 + Sync + Send,
{
    if parallel {
        (0..n).into_par_iter().map(delta).collect()
    } else {
        (0..n).map(delta).collect()
    }
}

// Every row of the matrix indexes the whole slice
fn assert_same_size(vectors: &[DVec2], distances: &DistanceMatrix) {
    assert_eq!(
        vectors.len(),
        distances.len(),
        "agent slice and distance matrix sizes differ"
    );
}

/// Separation delta: `p[i] * close(i) - sum of close p[j]`.
///
/// # Panics
///
/// Panics if `positions` and `distances` describe different agent counts.
pub fn separation(
    positions: &[DVec2],
    distances: &DistanceMatrix,
    minimum_distance: f64,
    max_rule_velocity: f64,
    parallel: bool,
) -> Vec<DVec2> {
    assert_same_size(positions, distances);
    let mut velocity = per_agent(positions.len(), parallel, |i| {
        let mut count = 0usize;
        let mut sum = DVec2::ZERO;
        for (j, &d) in distances.row(i).iter().enumerate() {
            if d < minimum_distance {
                count += 1;
                sum += positions[j];
            }
        }
        positions[i] * count as f64 - sum
    });
    limit(&mut velocity, max_rule_velocity);
    velocity
}

/// Alignment delta: sum of velocities of agents within the threshold.
///
/// # Panics
///
/// Panics if `velocities` and `distances` describe different agent counts.
pub fn alignment(
    velocities: &[DVec2],
    distances: &DistanceMatrix,
    distance_threshold: f64,
    max_rule_velocity: f64,
    parallel: bool,
) -> Vec<DVec2> {
    assert_same_size(velocities, distances);
    let mut velocity = per_agent(velocities.len(), parallel, |i| {
        let mut sum = DVec2::ZERO;
        for (j, &d) in distances.row(i).iter().enumerate() {
            if d < distance_threshold {
                sum += velocities[j];
            }
        }
        sum
    });
    limit(&mut velocity, max_rule_velocity);
    velocity
}

/// Cohesion delta: sum of positions within the threshold minus the agent's own.
///
/// # Panics
///
/// Panics if `positions` and `distances` describe different agent counts.
pub fn cohesion(
    positions: &[DVec2],
    distances: &DistanceMatrix,
    distance_threshold: f64,
    max_rule_velocity: f64,
    parallel: bool,
) -> Vec<DVec2> {
    assert_same_size(positions, distances);
    let mut velocity = per_agent(positions.len(), parallel, |i| {
        let mut sum = DVec2::ZERO;
        for (j, &d) in distances.row(i).iter().enumerate() {
            if d < distance_threshold {
                sum += positions[j];
            }
        }
        sum - positions[i]
    });
    limit(&mut velocity, max_rule_velocity);
    velocity
}

// Sum of the three limited rule deltas for every agent
pub fn apply_rules(
    positions: &[DVec2],
    velocities: &[DVec2],
    distances: &DistanceMatrix,
    params: &FlockParams,
) -> Vec<DVec2> {
    assert_eq!(positions.len(), velocities.len());

    let cap = params.max_rule_velocity;
    let parallel = params.parallel;

    let mut velocity = separation(positions, distances, params.minimum_distance, cap, parallel);

    let aligned = alignment(velocities, distances, params.distance_threshold, cap, parallel);
    for (v, a) in velocity.iter_mut().zip(aligned) {
        *v += a;
    }

    let cohered = cohesion(positions, distances, params.distance_threshold, cap, parallel);
    for (v, c) in velocity.iter_mut().zip(cohered) {
        *v += c;
    }

    velocity
}

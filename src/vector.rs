/*
 * Vector Module
 *
 * Magnitude limiting, the one numeric primitive shared by the three rules
 * and by the global velocity cap.
 */

use glam::DVec2;

/// Rescale `vector` in place so its length is at most `max_value`.
///
/// Vectors already within the cap, including the zero vector, are left alone.
/// Finite vectors whose squared length overflows are still rescaled to
/// exactly `max_value` along their direction.
#[inline]
pub fn limit_vector(vector: &mut DVec2, max_value: f64) {
    let magnitude = vector.length();
    if magnitude.is_infinite() && vector.is_finite() {
        // Bring the largest component to 1 so the length is representable
        let scaled = *vector / vector.abs().max_element();
        *vector = scaled * max_value / scaled.length();
    } else if magnitude > max_value {
        *vector = *vector * max_value / magnitude;
    }
}

// Limit every vector in the slice independently
pub fn limit(vectors: &mut [DVec2], max_value: f64) {
    for vector in vectors.iter_mut() {
        limit_vector(vector, max_value);
    }
}

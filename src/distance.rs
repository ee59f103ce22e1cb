/*
 * Distance Module
 *
 * This module defines the DistanceMatrix, the dense n x n table of Euclidean
 * distances between every pair of agents. It is rebuilt from scratch at the
 * start of every step so all three rules see the same snapshot.
 *
 * Rows are independent, so they can be filled on the rayon pool. Each entry
 * is `p[i].distance(p[j])`; swapping i and j only negates the difference, so
 * the matrix is exactly symmetric and the diagonal is exactly zero.
 */

use glam::DVec2;
use rayon::prelude::*;

#[derive(Debug, Clone, Default, PartialEq)]
pub struct DistanceMatrix {
    n: usize,
    // Row-major, n * n entries
    data: Vec<f64>,
}

impl DistanceMatrix {
    pub fn compute(positions: &[DVec2], parallel: bool) -> Self {
        let n = positions.len();
        let mut data = vec![0.0; n * n];

        if n == 0 {
            return Self { n, data };
        }

        let fill_row = |(i, row): (usize, &mut [f64])| {
            let p = positions[i];
            for (j, entry) in row.iter_mut().enumerate() {
                *entry = p.distance(positions[j]);
            }
        };

        if parallel {
            data.par_chunks_mut(n).enumerate().for_each(fill_row);
        } else {
            data.chunks_mut(n).enumerate().for_each(fill_row);
        }

        Self { n, data }
    }

    pub fn len(&self) -> usize {
        self.n
    }

    pub fn is_empty(&self) -> bool {
        self.n == 0
    }

    #[inline]
    pub fn get(&self, i: usize, j: usize) -> f64 {
        self.data[i * self.n + j]
    }

    /// Distances from agent `i` to every agent, in index order.
    #[inline]
    pub fn row(&self, i: usize) -> &[f64] {
        &self.data[i * self.n..(i + 1) * self.n]
    }
}

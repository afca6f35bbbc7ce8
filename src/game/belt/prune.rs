use tracing::debug;

use crate::game::geometry::{overlaps, Circle};

/// Which circles touch which, built once and never mutated.
#[derive(Debug, Clone)]
pub struct ConflictGraph {
    neighbours: Vec<Vec<usize>>,
}

impl ConflictGraph {
    pub fn build<C: Circle>(circles: &[C]) -> Self {
        let mut neighbours = vec![Vec::new(); circles.len()];
        for a in 0..circles.len() {
            for b in (a + 1)..circles.len() {
                if overlaps(&circles[a], &circles[b]) {
                    neighbours[a].push(b);
                    neighbours[b].push(a);
                }
            }
        }
        Self { neighbours }
    }

    pub fn degree(&self, node: usize) -> usize {
        self.neighbours[node].len()
    }

    pub fn max_degree(&self) -> usize {
        self.neighbours.iter().map(Vec::len).max().unwrap_or(0)
    }

    /// Greedily removes the most-conflicted nodes until no edges remain and
    /// returns which nodes survive. Degrees are swept from the highest down
    /// to one; within a sweep nodes are visited in index order, and a node is
    /// removed if its remaining degree equals the sweep level.
    pub fn independent_set(&self) -> Vec<bool> {
        let count = self.neighbours.len();
        let mut remaining: Vec<usize> = (0..count).map(|n| self.degree(n)).collect();
        let mut removed = vec![false; count];

        for level in (1..=self.max_degree()).rev() {
            for node in 0..count {
                if removed[node] || remaining[node] != level {
                    continue;
                }
                removed[node] = true;
                for &other in &self.neighbours[node] {
                    if !removed[other] {
                        remaining[other] -= 1;
                    }
                }
            }
        }

        removed.into_iter().map(|gone| !gone).collect()
    }
}

/// Drop circles until none of the survivors touch each other.
pub fn prune_collisions<C: Circle>(circles: Vec<C>) -> Vec<C> {
    let before = circles.len();
    let keep = ConflictGraph::build(&circles).independent_set();
    let kept: Vec<C> = circles
        .into_iter()
        .zip(keep)
        .filter_map(|(circle, keep)| keep.then_some(circle))
        .collect();
    debug!(before, kept = kept.len(), "pruned colliding asteroids");
    kept
}

use std::cmp::Ordering;

use hashbrown::HashSet;
use rayon::prelude::*;
use tracing::debug;

use super::{
    errors::CharacteristicsError,
    intersection::{CollisionEvent, intersect},
    line::{CharacteristicLine, build_lines},
};

/// Accepted shock events of a run together with the lines left untouched.
#[derive(Clone, Debug, Default)]
pub struct ShockFront {
    events: Vec<CollisionEvent>,
    anchored: HashSet<usize>,
    residual: Vec<CharacteristicLine>,
}
impl ShockFront {
    /// Accepted events in nondecreasing `shock_t` order.
    pub fn events(&self) -> &[CollisionEvent] {
        &self.events
    }
    pub fn len(&self) -> usize {
        self.events.len()
    }
    pub fn is_empty(&self) -> bool {
        self.events.is_empty()
    }
    pub fn is_anchored(&self, iline: usize) -> bool {
        self.anchored.contains(&iline)
    }
    pub fn anchored(&self) -> &HashSet<usize> {
        &self.anchored
    }
    /// Lines that never merged into a shock, in origin order.
    pub fn residual_lines(&self) -> &[CharacteristicLine] {
        &self.residual
    }
    pub fn unanchored_origins(&self) -> Vec<f64> {
        self.residual.iter().map(|line| line.origin).collect()
    }
    /// Time of the earliest accepted shock.
    pub fn first_shock_time(&self) -> Option<f64> {
        self.events.first().map(|event| event.shock_t)
    }
}
#[derive(Clone, Copy, Debug, Default)]
pub struct ShockResolver {
    parallel: bool,
}
impl ShockResolver {
    pub fn new() -> Self {
        Self::default()
    }
    pub fn with_parallel(parallel: bool) -> Self {
        Self { parallel }
    }
    /// Every pairwise crossing among `lines`, in no particular order.
    pub fn collect_candidates(&self, lines: &[CharacteristicLine]) -> Vec<CollisionEvent> {
        let n = lines.len();
        if self.parallel {
            (0..n)
                .into_par_iter()
                .flat_map_iter(|i| {
                    let a = &lines[i];
                    lines[i + 1..].iter().filter_map(move |b| intersect(a, b))
                })
                .collect()
        } else {
            let mut candidates = Vec::new();
            for i in 0..n {
                for j in i + 1..n {
                    if let Some(event) = intersect(&lines[i], &lines[j]) {
                        candidates.push(event);
                    }
                }
            }
            candidates
        }
    }
    /// Greedy earliest-first selection: a candidate survives only if neither
    /// of its lines has already merged into an earlier shock.
    pub fn resolve(&self, lines: &[CharacteristicLine]) -> ShockFront {
        let mut candidates = self.collect_candidates(lines);
        sort_candidates(&mut candidates);
        debug!(lines = lines.len(), candidates = candidates.len(), "collected line crossings");

        let mut anchored: HashSet<usize> = HashSet::with_capacity(lines.len());
        let mut events = Vec::new();
        for candidate in candidates {
            if anchored.contains(&candidate.ileft) || anchored.contains(&candidate.iright) {
                continue;
            }
            anchored.insert(candidate.ileft);
            anchored.insert(candidate.iright);
            events.push(candidate);
        }
        let residual = lines
            .iter()
            .filter(|line| !anchored.contains(&line.index))
            .copied()
            .collect();
        debug!(accepted = events.len(), anchored = anchored.len(), "resolved shock front");
        ShockFront {
            events,
            anchored,
            residual,
        }
    }
}
/// Orders candidates by time, then position, then line indices.
pub fn sort_candidates(candidates: &mut [CollisionEvent]) {
    candidates.sort_by(compare_candidates);
}
fn compare_candidates(a: &CollisionEvent, b: &CollisionEvent) -> Ordering {
    a.shock_t
        .total_cmp(&b.shock_t)
        .then_with(|| a.shock_x.total_cmp(&b.shock_x))
        .then_with(|| a.ileft.cmp(&b.ileft))
        .then_with(|| a.iright.cmp(&b.iright))
}
pub fn resolve_shocks<F>(init_func: &F, origins: &[f64]) -> Result<ShockFront, CharacteristicsError>
where
    F: Fn(f64) -> f64 + ?Sized,
{
    let lines = build_lines(init_func, origins)?;
    Ok(ShockResolver::new().resolve(&lines))
}

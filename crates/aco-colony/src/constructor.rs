//! The `PathConstructor` trait and the default roulette-wheel ant.

use aco_core::{AntId, AntRng, NodeId, PathMode};

use crate::{AntOutcome, ColonyContext, FailReason};

/// Pluggable path construction.
///
/// Implement this trait to change how an ant walks the graph.  The engine
/// calls [`construct`][Self::construct] once per ant per step with a
/// read-only [`ColonyContext`] and that ant's own [`AntRng`], so results
/// are deterministic regardless of thread ordering.
///
/// # Thread safety
///
/// With the `parallel` feature the engine calls `construct` for many ants
/// at once via Rayon, so implementations must be `Send + Sync`.  Anything
/// that varies per ant belongs in the RNG or the returned outcome, not in
/// the constructor itself.
pub trait PathConstructor: Send + Sync + 'static {
    /// Build one candidate path for `ant`.
    fn construct(
        &self,
        ant: AntId,
        ctx: &ColonyContext<'_>,
        rng: &mut AntRng,
    ) -> AntOutcome;
}

// ── RouletteConstructor ───────────────────────────────────────────────────────

/// The classic Ant System walk: at every node, pick the next one by
/// roulette wheel over `tau^alpha * (1/d)^beta`.
///
/// - [`PathMode::ClosedTour`]: start at a uniformly random node and visit
///   all of them.  Fails on a dead end, or if the last node has no edge
///   back to the start.
/// - [`PathMode::OpenRoute`]: start at `start`; succeed on reaching
///   `goal`, fail on a dead end or once `step_budget` moves are spent.
#[derive(Debug, Clone, Copy, Default)]
pub struct RouletteConstructor;

impl PathConstructor for RouletteConstructor {
    fn construct(
        &self,
        _ant: AntId,
        ctx:  &ColonyContext<'_>,
        rng:  &mut AntRng,
    ) -> AntOutcome {
        match ctx.mode {
            PathMode::ClosedTour => closed_tour(ctx, rng),
            PathMode::OpenRoute { start, goal, step_budget } => {
                open_route(ctx, start, goal, step_budget, rng)
            }
        }
    }
}

fn closed_tour(ctx: &ColonyContext<'_>, rng: &mut AntRng) -> AntOutcome {
    let n = ctx.node_count();
    let mut visited = vec![false; n];
    let mut path = Vec::with_capacity(n);

    let mut current = NodeId(rng.index(n) as u32);
    visited[current.index()] = true;
    path.push(current);

    while path.len() < n {
        let Some(next) = select_next(ctx, current, &visited, rng) else {
            return AntOutcome::Failed(FailReason::DeadEnd { at: current });
        };
        visited[next.index()] = true;
        path.push(next);
        current = next;
    }

    if !ctx.graph.has_edge(current, path[0]) {
        return AntOutcome::Failed(FailReason::Unclosed { last: current });
    }
    AntOutcome::Succeeded(path)
}

fn open_route(
    ctx:         &ColonyContext<'_>,
    start:       NodeId,
    goal:        NodeId,
    step_budget: usize,
    rng:         &mut AntRng,
) -> AntOutcome {
    let mut visited = vec![false; ctx.node_count()];
    let mut path = vec![start];
    visited[start.index()] = true;

    let mut current = start;
    let mut moves = 0;
    loop {
        let Some(next) = select_next(ctx, current, &visited, rng) else {
            return AntOutcome::Failed(FailReason::DeadEnd { at: current });
        };
        visited[next.index()] = true;
        path.push(next);
        current = next;
        moves += 1;

        if current == goal {
            return AntOutcome::Succeeded(path);
        }
        if moves >= step_budget {
            return AntOutcome::Failed(FailReason::BudgetExhausted);
        }
    }
}

// ── Selection ─────────────────────────────────────────────────────────────────

/// Desirability of moving along an edge of weight `distance` carrying
/// `pheromone`: `pheromone^alpha * (1/distance)^beta`.
#[inline]
pub fn desirability(pheromone: f64, distance: f64, alpha: f64, beta: f64) -> f64 {
    pheromone.powf(alpha) * (1.0 / distance).powf(beta)
}

/// Roulette-wheel choice of the next node from `current`.
///
/// Candidates are the unvisited direct neighbors of `current`, scored with
/// [`desirability`] and scanned in ascending `NodeId` order.  Returns `None`
/// when the scores sum to zero (no eligible neighbor).  Non-edges are never
/// candidates, so no arithmetic is ever done on a missing distance.
pub fn select_next(
    ctx:     &ColonyContext<'_>,
    current: NodeId,
    visited: &[bool],
    rng:     &mut AntRng,
) -> Option<NodeId> {
    let alpha = ctx.params.alpha;
    let beta = ctx.params.beta;
    let trail = ctx.pheromone.row(current);

    let candidates: Vec<(NodeId, f64)> = ctx
        .graph
        .neighbors(current)
        .filter(|(j, _)| !visited[j.index()])
        .map(|(j, d)| (j, desirability(trail[j.index()], d, alpha, beta)))
        .collect();

    let total: f64 = candidates.iter().map(|&(_, s)| s).sum();
    if total == 0.0 {
        return None;
    }
    if !total.is_finite() {
        // A score overflowed; the overflowing neighbor dominates the wheel.
        return candidates
            .iter()
            .find(|(_, s)| !s.is_finite())
            .or(candidates.first())
            .map(|&(j, _)| j);
    }

    let draw = rng.unit() * total;
    let mut cumulative = 0.0;
    for &(j, score) in &candidates {
        cumulative += score;
        if cumulative >= draw {
            return Some(j);
        }
    }

    // Rounding left the cumulative sum just short of the draw.
    candidates.first().map(|&(j, _)| j)
}

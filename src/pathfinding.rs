use std::cmp::Reverse;
use std::collections::{BinaryHeap, HashSet};

use crate::point::Point;

/// Best-first shortest-path search over a dynamic movement graph.
///
/// The frontier is keyed by accumulated steps plus the heuristic estimate;
/// entries are marked visited when popped, and unvisited neighbors are pushed
/// at steps+1. With an admissible heuristic the returned count is a true
/// shortest-path length, but the engine only relies on reachability: `Some`
/// versus `None`.
///
/// # Arguments
/// * `neighbors` - yields the positions reachable in one move from a position
/// * `start` - where the search begins
/// * `is_goal` - when to stop
/// * `heuristic` - non-negative estimate of remaining distance
///
/// # Returns
/// The number of moves to reach a goal position, or `None` if the frontier
/// empties without reaching one.
pub fn path_length<N, G, H>(
    mut neighbors: N,
    start: Point,
    mut is_goal: G,
    heuristic: H,
) -> Option<u32>
where
    N: FnMut(Point) -> Vec<Point>,
    G: FnMut(Point) -> bool,
    H: Fn(Point) -> u32,
{
    // (priority, position, accumulated steps) — Reverse turns the max-heap
    // into a min-heap on priority; Point's Ord breaks ties arbitrarily.
    let mut frontier: BinaryHeap<Reverse<(u32, Point, u32)>> = BinaryHeap::new();
    frontier.push(Reverse((0, start, 0)));

    let mut explored: HashSet<Point> = HashSet::new();

    while let Some(Reverse((_, position, steps))) = frontier.pop() {
        explored.insert(position);

        if is_goal(position) {
            return Some(steps);
        }

        for next in neighbors(position) {
            if !explored.contains(&next) {
                frontier.push(Reverse((steps + 1 + heuristic(next), next, steps + 1)));
            }
        }
    }

    None
}

//! Proptest strategies for DFS solver property-based tests.
//!
//! Instances are kept tiny: at most five rooms and short budgets, so the
//! exhaustive search and the brute-force oracle both stay fast.

use std::collections::HashSet;

use proptest::prelude::*;
use sleuthpath_core::{CaseGraph, DistanceTable, Edge, Location, LocationValues, Minutes, Score};

/// A generated planning problem.
#[derive(Debug, Clone)]
pub struct Instance {
    /// All-pairs travel times of a connected layout.
    pub table: DistanceTable,
    /// Value of each room.
    pub values: LocationValues,
    /// Starting room.
    pub origin: Location,
}

impl Instance {
    /// Values aligned with the table rows.
    pub fn row_values(&self) -> Vec<Score> {
        self.table
            .locations()
            .iter()
            .map(|loc| self.values.get(loc.as_str()))
            .collect()
    }
}

fn room(idx: usize) -> Location {
    Location::new(format!("R{idx}"))
}

/// Corridor weights: either a free doorway or two to six minutes.
fn corridor_minutes(allow_free: bool) -> BoxedStrategy<Minutes> {
    if allow_free {
        prop_oneof![1 => Just(0_u32), 4 => 2_u32..=6].boxed()
    } else {
        (2_u32..=6).boxed()
    }
}

/// Strategy for connected instances with up to `max_rooms` rooms.
pub fn instance(max_rooms: usize, allow_free: bool) -> impl Strategy<Value = Instance> {
    (1..=max_rooms).prop_flat_map(move |rooms| {
        let tree = proptest::collection::vec(
            (any::<prop::sample::Index>(), corridor_minutes(allow_free)),
            rooms - 1,
        );
        let extra = proptest::collection::vec(
            (0..rooms, 0..rooms, corridor_minutes(allow_free)),
            0..=rooms,
        );
        let values = proptest::collection::vec(0_u64..=5, rooms);
        (tree, extra, values, 0..rooms).prop_map(move |(tree, extra, values, origin)| {
            build(rooms, &tree, &extra, &values, origin)
        })
    })
}

#[expect(clippy::expect_used, reason = "generated layouts are valid by construction")]
fn build(
    rooms: usize,
    tree: &[(prop::sample::Index, Minutes)],
    extra: &[(usize, usize, Minutes)],
    values: &[Score],
    origin: usize,
) -> Instance {
    let mut seen = HashSet::new();
    let mut edges = Vec::new();
    for (offset, (parent, minutes)) in tree.iter().enumerate() {
        let child = offset + 1;
        let parent_idx = parent.index(child);
        seen.insert((parent_idx, child));
        edges.push(Edge::new(room(parent_idx), room(child), *minutes));
    }
    for &(a, b, minutes) in extra {
        if a != b && seen.insert((a.min(b), a.max(b))) {
            edges.push(Edge::new(room(a), room(b), minutes));
        }
    }

    let mut builder = CaseGraph::builder();
    for idx in 0..rooms {
        builder.location(room(idx));
    }
    for edge in edges {
        builder
            .edge(edge.from, edge.to, edge.minutes)
            .expect("pairs are unique and never self-loops");
    }
    let graph = builder.build().expect("spanning tree keeps the layout connected");
    Instance {
        table: DistanceTable::from_graph(&graph).expect("connected layout"),
        values: values
            .iter()
            .enumerate()
            .map(|(idx, &value)| (room(idx), value))
            .collect(),
        origin: room(origin),
    }
}

/// Best value over walks that never revisit a room.
///
/// Travel times satisfy the triangle inequality, so revisiting never helps
/// and this brute force is an independent check on the search.
pub fn brute_force_best(instance: &Instance, budget: Minutes) -> Score {
    let values = instance.row_values();
    let Some(origin) = instance.table.index_of(instance.origin.as_str()) else {
        return 0;
    };
    let mut used = vec![false; values.len()];
    if let Some(flag) = used.get_mut(origin) {
        *flag = true;
    }
    let start = values.get(origin).copied().unwrap_or_default();
    extend(&instance.table, &values, &mut used, origin, 0, budget, start)
}

fn extend(
    table: &DistanceTable,
    values: &[Score],
    used: &mut Vec<bool>,
    at: usize,
    minutes: Minutes,
    budget: Minutes,
    value: Score,
) -> Score {
    let mut best = value;
    for next in 0..values.len() {
        if used.get(next).copied().unwrap_or(true) {
            continue;
        }
        let Some(cost) = table.minutes_between(at, next) else {
            continue;
        };
        let arrival = minutes + cost;
        if arrival > budget {
            continue;
        }
        if let Some(flag) = used.get_mut(next) {
            *flag = true;
        }
        let gained = value + values.get(next).copied().unwrap_or_default();
        best = best.max(extend(table, values, used, next, arrival, budget, gained));
        if let Some(flag) = used.get_mut(next) {
            *flag = false;
        }
    }
    best
}

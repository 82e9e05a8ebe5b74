use anyhow::Result;
use knapbench_challenges::knapsack::{Challenge, Solution};
use std::cmp::Ordering;
use std::collections::BinaryHeap;

#[derive(Debug, Clone, Default)]
struct Node {
    depth: usize,
    items: Vec<usize>,
    weight: u32,
    value: u32,
}

// Best-first ordering by accumulated value. Traversal order only; every
// capacity-feasible node is visited regardless.
impl Ord for Node {
    fn cmp(&self, other: &Self) -> Ordering {
        self.value.cmp(&other.value)
    }
}

impl PartialOrd for Node {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Eq for Node {}

impl PartialEq for Node {
    fn eq(&self, other: &Self) -> bool {
        self.value == other.value
    }
}

// Exhaustive solver: enumerates all 2^n include/exclude decision sequences,
// cut only where taking an item would exceed capacity. One value comparison
// is counted per terminal node.
pub fn solve_challenge(challenge: &Challenge) -> Result<Solution> {
    let items = &challenge.items;
    let max_weight = challenge.max_weight;

    let mut queue = BinaryHeap::new();
    let mut comparisons = 0u64;

    let mut best = Node::default();
    queue.push(best.clone());

    while let Some(top) = queue.pop() {
        if top.depth < items.len() {
            // Left child: skip the item at this depth.
            let mut node = top.clone();
            node.depth += 1;
            queue.push(node);

            // Right child: take it, if there is room.
            if top.weight + items[top.depth].weight <= max_weight {
                let mut node = top.clone();
                node.depth += 1;
                node.weight += items[top.depth].weight;
                node.value += items[top.depth].value;
                node.items.push(top.depth);
                queue.push(node);
            }
        } else {
            if top.value > best.value {
                best = top;
            }
            comparisons += 1;
        }
    }

    Ok(Solution {
        items: best.items,
        total_weight: best.weight,
        total_value: best.value,
        comparisons,
    })
}

use anyhow::Result;
use knapbench_challenges::knapsack::{Challenge, Item, Solution};
use std::cmp::Ordering;
use std::collections::BinaryHeap;

#[derive(Debug, Clone, Default)]
struct Node {
    depth: usize,
    items: Vec<usize>,
    weight: u32,
    value: u32,
}

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

// Items paired with their value density, sorted descending. The ranking is
// an estimation aid only; the search still branches in original item order.
struct RankedItem {
    index: usize,
    item: Item,
    density: f64,
}

// Fractional-relaxation bound: greedily fill remaining capacity with the
// undecided items (original index >= depth) in density order, topping up
// with a fraction of the first item that no longer fits whole. No integral
// completion of the node can beat this value.
fn upper_bound(ranked: &[RankedItem], node: &Node, max_weight: u32) -> f64 {
    let mut weight = node.weight;
    let mut value = node.value as f64;

    for entry in ranked {
        if entry.index < node.depth {
            continue;
        }
        if weight + entry.item.weight <= max_weight {
            weight += entry.item.weight;
            value += entry.item.value as f64;
        } else {
            value += (max_weight - weight) as f64 * entry.density;
            break;
        }
    }

    value
}

// Same traversal as backtracking, but a child is enqueued only when its
// upper bound beats the incumbent value. One comparison is counted per
// pruning decision (enqueued or not) and per terminal node.
pub fn solve_challenge(challenge: &Challenge) -> Result<Solution> {
    let items = &challenge.items;
    let max_weight = challenge.max_weight;

    let mut ranked: Vec<RankedItem> = items
        .iter()
        .enumerate()
        .map(|(index, &item)| RankedItem {
            index,
            item,
            density: item.value as f64 / item.weight as f64,
        })
        .collect();
    ranked.sort_by(|a, b| b.density.partial_cmp(&a.density).unwrap_or(Ordering::Equal));

    let mut queue = BinaryHeap::new();
    let mut comparisons = 0u64;

    let mut best = Node::default();
    queue.push(best.clone());

    while let Some(top) = queue.pop() {
        if top.depth < items.len() {
            // Left child: skip the item at this depth.
            let mut node = top.clone();
            node.depth += 1;
            if upper_bound(&ranked, &node, max_weight) > best.value as f64 {
                queue.push(node);
            }
            comparisons += 1;

            // Right child: take it, if there is room.
            if top.weight + items[top.depth].weight <= max_weight {
                let mut node = top.clone();
                node.depth += 1;
                node.weight += items[top.depth].weight;
                node.value += items[top.depth].value;
                node.items.push(top.depth);
                if upper_bound(&ranked, &node, max_weight) > best.value as f64 {
                    queue.push(node);
                }
                comparisons += 1;
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

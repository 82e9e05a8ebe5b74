use anyhow::Result;
use knapbench_challenges::knapsack::{Challenge, Solution};

// Exact solver via the classic weight-indexed table. Cell (row, w) holds the
// best value achievable with items 0..=row and weight limit w. One value
// comparison is counted per max(take, not_take) cell and one per backtrace row.
pub fn solve_challenge(challenge: &Challenge) -> Result<Solution> {
    let items = &challenge.items;
    let max_weight = challenge.max_weight as usize;
    if items.is_empty() || max_weight == 0 {
        return Ok(Solution::default());
    }

    let cols = max_weight + 1;
    // Flattened table, row stride `cols`.
    let mut table = vec![0u32; items.len() * cols];
    let mut comparisons = 0u64;

    // First row is trivial: item 0's value wherever it fits, zero before that.
    for w in (items[0].weight as usize).min(cols)..cols {
        table[w] = items[0].value;
    }

    for row in 1..items.len() {
        let weight = items[row].weight as usize;
        let base = row * cols;
        let prev = (row - 1) * cols;

        // Item cannot fit below its own weight: copy from the previous row.
        for w in 0..weight.min(cols) {
            table[base + w] = table[prev + w];
        }
        for w in weight..cols {
            let take = table[prev + w - weight] + items[row].value;
            let not_take = table[prev + w];
            table[base + w] = if take > not_take { take } else { not_take };
            comparisons += 1;
        }
    }

    // Recover the chosen item set by walking rows last to first; a value
    // change between row and row-1 means the row's item was taken.
    let mut best = Vec::new();
    let mut w = max_weight;
    for row in (1..items.len()).rev() {
        if table[row * cols + w] != table[(row - 1) * cols + w] {
            best.push(row);
            w -= items[row].weight as usize;
        }
    }
    // Row 0 has no row above it: item 0 was taken iff its cell is nonzero.
    if table[w] != 0 {
        best.push(0);
        w -= items[0].weight as usize;
    }
    comparisons += items.len() as u64;

    best.reverse();
    Ok(Solution {
        items: best,
        total_weight: (max_weight - w) as u32,
        total_value: table[(items.len() - 1) * cols + max_weight],
        comparisons,
    })
}

use anyhow::{anyhow, Result};
use rand::{rngs::StdRng, Rng, SeedableRng};
use serde::{Deserialize, Serialize};
use serde_json::{from_value, Map, Value};
use std::collections::HashSet;
use std::fmt;

#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct Difficulty {
    pub num_items: usize,
    pub max_item_weight: u32,
    pub max_item_value: u32,
    pub max_weight: u32,
}

impl From<Vec<i32>> for Difficulty {
    fn from(arr: Vec<i32>) -> Self {
        Self {
            num_items: arr[0] as usize,
            max_item_weight: arr[1] as u32,
            max_item_value: arr[2] as u32,
            max_weight: arr[3] as u32,
        }
    }
}

impl Into<Vec<i32>> for Difficulty {
    fn into(self) -> Vec<i32> {
        vec![
            self.num_items as i32,
            self.max_item_weight as i32,
            self.max_item_value as i32,
            self.max_weight as i32,
        ]
    }
}

#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq)]
pub struct Item {
    pub weight: u32,
    pub value: u32,
}

#[derive(Serialize, Deserialize, Debug, Clone, Default)]
pub struct Solution {
    pub items: Vec<usize>,
    pub total_weight: u32,
    pub total_value: u32,
    pub comparisons: u64,
}

// Two solutions are "equal" when they achieve the same total value; the
// chosen item sets may differ (ties between optimal sets are common).
impl PartialEq for Solution {
    fn eq(&self, other: &Self) -> bool {
        self.total_value == other.total_value
    }
}

impl TryFrom<Map<String, Value>> for Solution {
    type Error = serde_json::Error;

    fn try_from(v: Map<String, Value>) -> Result<Self, Self::Error> {
        from_value(Value::Object(v))
    }
}

impl fmt::Display for Solution {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "value: {} weight: {} [{:8} cmp] ",
            self.total_value, self.total_weight, self.comparisons
        )?;
        for &index in self.items.iter().take(10) {
            write!(f, "{} ", index)?;
        }
        if self.items.len() > 10 {
            write!(f, "...")?;
        }
        Ok(())
    }
}

#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct Challenge {
    pub seed: [u8; 32],
    pub difficulty: Difficulty,
    pub items: Vec<Item>,
    pub max_weight: u32,
}

impl Challenge {
    pub fn generate_instance(seed: &[u8; 32], difficulty: &Difficulty) -> Result<Challenge> {
        let mut rng = StdRng::from_seed(seed.clone());

        // Weights are drawn from [1, max_item_weight]: a zero weight would
        // make the branch-and-bound value density undefined.
        let items: Vec<Item> = (0..difficulty.num_items)
            .map(|_| Item {
                weight: rng.gen_range(1..=difficulty.max_item_weight),
                value: rng.gen_range(1..=difficulty.max_item_value),
            })
            .collect();

        Ok(Challenge {
            seed: seed.clone(),
            difficulty: difficulty.clone(),
            items,
            max_weight: difficulty.max_weight,
        })
    }

    pub fn verify_solution(&self, solution: &Solution) -> Result<u32> {
        let selected_items: HashSet<usize> = solution.items.iter().cloned().collect();
        if selected_items.len() != solution.items.len() {
            return Err(anyhow!("Duplicate items selected."));
        }

        let mut total_weight = 0u32;
        let mut total_value = 0u32;
        for &item in &solution.items {
            if item >= self.items.len() {
                return Err(anyhow!("Item ({}) is out of bounds", item));
            }
            total_weight += self.items[item].weight;
            total_value += self.items[item].value;
        }

        if total_weight > self.max_weight {
            return Err(anyhow!(
                "Total weight ({}) exceeded max weight ({})",
                total_weight,
                self.max_weight
            ));
        }
        if total_weight != solution.total_weight {
            return Err(anyhow!(
                "Recorded total weight ({}) does not match items ({})",
                solution.total_weight,
                total_weight
            ));
        }
        if total_value != solution.total_value {
            return Err(anyhow!(
                "Recorded total value ({}) does not match items ({})",
                solution.total_value,
                total_value
            ));
        }
        Ok(total_value)
    }
}

use crate::serializable_struct;
use knapbench_utils::{jsonify, u8s_from_str};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

pub type Solution = Map<String, Value>;

serializable_struct! {
    RunSettings {
        challenge_id: String,
        algorithm_id: String,
        difficulty: Vec<i32>,
    }
}
impl RunSettings {
    pub fn calc_seed(&self, rand_hash: &str, nonce: u64) -> [u8; 32] {
        u8s_from_str(&format!("{}_{}_{}", jsonify(&self), rand_hash, nonce))
    }
}

serializable_struct! {
    OutputData {
        nonce: u64,
        elapsed_ms: u64,
        solution: Solution,
    }
}

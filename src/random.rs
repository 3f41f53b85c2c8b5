use rand::Rng;
use rand::SeedableRng;
use rand::rngs::StdRng;

use crate::common::RuntimeError;

pub trait RandomSource {
    // produces a random value in the range specified
    // lower: the inclusive lower bound for the random value
    // upper: the inclusive upper bound for the random value
    // return: a uniformly distributed value between the specified range
    fn random_in_range(&mut self, lower: i32, upper: i32) -> Result<i32, RuntimeError>;
}

// the production source, seeded from default entropy
pub struct ThreadRandom;

impl RandomSource for ThreadRandom {
    fn random_in_range(&mut self, lower: i32, upper: i32) -> Result<i32, RuntimeError> {
        let mut rng = rand::thread_rng();

        // widen so the inclusive upper end doesn't overflow
        return Ok(rng.gen_range(lower as i64, upper as i64 + 1) as i32);
    }
}

// a reproducible source for tests and replays
pub struct SeededRandom {
    rng: StdRng
}

impl SeededRandom {
    pub fn new(seed: u64) -> SeededRandom {
        SeededRandom{rng: StdRng::seed_from_u64(seed)}
    }
}

impl RandomSource for SeededRandom {
    fn random_in_range(&mut self, lower: i32, upper: i32) -> Result<i32, RuntimeError> {
        return Ok(self.rng.gen_range(lower as i64, upper as i64 + 1) as i32);
    }
}

// replays a fixed list of values, ignoring the requested range;
// fails once the list is exhausted
pub struct SequenceRandom {
    values: Vec<i32>,
    next: usize
}

impl SequenceRandom {
    pub fn new(values: Vec<i32>) -> SequenceRandom {
        SequenceRandom{values: values, next: 0}
    }
}

impl RandomSource for SequenceRandom {
    fn random_in_range(&mut self, _lower: i32, _upper: i32) -> Result<i32, RuntimeError> {
        if self.next >= self.values.len() {
            return Err(RuntimeError::RandomUnavailable);
        }
        let value = self.values[self.next];
        self.next += 1;
        return Ok(value);
    }
}

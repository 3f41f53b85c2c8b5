use crate::common::RuntimeError;

// the fixed range the program draws from
pub static LOWER_BOUND: i32 = 1_000_000;
pub static UPPER_BOUND: i32 = 999_999_999;

#[derive(Debug, PartialEq, Clone, Copy)]
pub struct Bound {
    lower: i32,
    upper: i32
}

impl Bound {
    // creates a bound over a closed interval
    // lower: the inclusive lower end of the interval
    // upper: the inclusive upper end of the interval
    // return: the bound, or InvalidBound if the interval is empty
    pub fn new(lower: i32, upper: i32) -> Result<Bound, RuntimeError> {
        if lower > upper {
            return Err(RuntimeError::InvalidBound);
        }
        return Ok(Bound{lower: lower, upper: upper});
    }

    pub fn lower(&self) -> i32 {
        return self.lower;
    }

    pub fn upper(&self) -> i32 {
        return self.upper;
    }
}

impl Default for Bound {
    fn default() -> Bound {
        Bound{lower: LOWER_BOUND, upper: UPPER_BOUND}
    }
}

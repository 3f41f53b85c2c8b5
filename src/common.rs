#[derive(PartialEq, Debug)]
pub enum RuntimeError {
    // the random source could not produce a value
    RandomUnavailable,

    // a range was requested with lower greater than upper
    InvalidBound,
}

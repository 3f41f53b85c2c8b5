use large_int::large_int::LargeInt;

use crate::bound::Bound;
use crate::common::RuntimeError;
use crate::random::RandomSource;

#[derive(Debug, PartialEq)]
pub struct RandomPair {
    first: i32,
    second: i32
}

impl RandomPair {
    pub fn new(first: i32, second: i32) -> RandomPair {
        RandomPair{first: first, second: second}
    }

    pub fn first(&self) -> i32 {
        return self.first;
    }

    pub fn second(&self) -> i32 {
        return self.second;
    }

    // multiplies the pair exactly, whatever the magnitude
    // return: the product as an arbitrary-precision integer
    pub fn product(&self) -> LargeInt {
        return LargeInt::from(self.first) * LargeInt::from(self.second);
    }

    // renders the pair and its product in the canonical format
    // return: "<first> x <second> = <product>"
    pub fn report(&self) -> String {
        return format!("{} x {} = {}", self.first, self.second, self.product());
    }
}

pub struct Multiplier<R: RandomSource> {
    source: R,
    bound: Bound
}

impl<R> Multiplier<R>
where R: RandomSource {
    // get a multiplier over the fixed default range
    pub fn new(source: R) -> Multiplier<R> {
        Multiplier{source: source, bound: Bound::default()}
    }

    // get a multiplier over a caller-supplied range
    pub fn with_bound(source: R, bound: Bound) -> Multiplier<R> {
        Multiplier{source: source, bound: bound}
    }

    // draws two independent values from the bound
    // return: the pair, or the source's failure
    pub fn draw_pair(&mut self) -> Result<RandomPair, RuntimeError> {
        let first = self.source.random_in_range(
            self.bound.lower(),
            self.bound.upper()
        )?;
        let second = self.source.random_in_range(
            self.bound.lower(),
            self.bound.upper()
        )?;
        return Ok(RandomPair::new(first, second));
    }

    // draws a pair and formats the full report line
    pub fn report(&mut self) -> Result<String, RuntimeError> {
        let pair = self.draw_pair()?;
        return Ok(pair.report());
    }
}

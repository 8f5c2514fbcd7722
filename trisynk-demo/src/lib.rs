use log::debug;
use trisynk::reduce_sum;

/// Sum of `input`. Overflow behaves as `i64 +=` does.
pub fn accumulate(input: &[i64]) -> i64 {
    debug!("accumulate {} values.", input.len());
    reduce_sum(input)
}

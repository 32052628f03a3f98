// File: crates/timekeeper/src/workloads.rs
// Summary: Demonstration workloads: shuffled integer inputs, element-wise squaring, and sorting.

use std::hint::black_box;

use rand::seq::SliceRandom;

use crate::input::{block, Block, InputSpec};

/// Series names of [`standard_blocks`], in series order.
pub const STANDARD_NAMES: [&str; 2] = ["square", "sort"];

/// `0..size` in random order.
pub fn shuffled(size: usize) -> Vec<usize> {
    let mut v: Vec<usize> = (0..size).collect();
    v.shuffle(&mut rand::thread_rng());
    v
}

/// Shuffled inputs from `min_size` to `max_size`, growing by `factor`.
pub fn shuffled_input(min_size: usize, max_size: usize, factor: usize) -> InputSpec<Vec<usize>> {
    InputSpec::geometric(min_size, max_size, factor, shuffled)
}

/// Linear pass: square every element.
#[allow(clippy::ptr_arg)]
pub fn square_each(data: &Vec<usize>) {
    for &v in data {
        black_box(v.wrapping_mul(v));
    }
}

/// n log n: sort a copy.
#[allow(clippy::ptr_arg)]
pub fn sort_copy(data: &Vec<usize>) {
    let mut sorted = data.clone();
    sorted.sort_unstable();
    black_box(sorted);
}

/// Squaring (series 0) and sorting (series 1).
pub fn standard_blocks() -> Vec<Block<Vec<usize>>> {
    vec![block(square_each), block(sort_copy)]
}

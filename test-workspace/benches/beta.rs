//! Sorting workload.

use std::hint::black_box;
use sweep_fixture::insertion_sort;

fn main() {
    let values: Vec<u64> = (0..4_000u64)
        .map(|i| i.wrapping_mul(2_654_435_761) % 10_007)
        .collect();

    let mut checksum = 0;
    for _ in 0..20 {
        let sorted = insertion_sort(black_box(&values));
        checksum ^= sorted[sorted.len() / 2];
    }
    println!("beta: {checksum}");
}

//! Four-way sorting comparison harness
//!
//! Bubble, selection, insertion and merge sort over the same random input,
//! each instrumented with comparison/swap counters and wall-clock timing.
//! Merge sort moves elements through an auxiliary buffer, so it reports
//! comparisons only.

use std::time::Instant;

use colored::Colorize;
use rand::rngs::StdRng;
use rand::{RngExt, SeedableRng};
use tracing::info;

use crate::errors::DsaLabError;
use crate::system::AppConfig;
use crate::utils::terminal::{banner, prompt_usize, rule};
use crate::{print_error, print_success};

/// Operation counters collected by each algorithm.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct SortStats {
    pub comparisons: u64,
    pub swaps: u64,
}

/// Bubble sort with the early-exit optimization: a pass without swaps
/// means the array is already sorted.
pub fn bubble_sort(values: &mut [i32]) -> SortStats {
    let mut stats = SortStats::default();
    let n = values.len();

    for i in 0..n.saturating_sub(1) {
        let mut swapped = false;
        for j in 0..n - 1 - i {
            stats.comparisons += 1;
            if values[j] > values[j + 1] {
                values.swap(j, j + 1);
                stats.swaps += 1;
                swapped = true;
            }
        }
        if !swapped {
            break;
        }
    }
    stats
}

/// Selection sort: one swap per pass, comparisons always quadratic.
pub fn selection_sort(values: &mut [i32]) -> SortStats {
    let mut stats = SortStats::default();
    let n = values.len();

    for i in 0..n.saturating_sub(1) {
        let mut min_index = i;
        for j in i + 1..n {
            stats.comparisons += 1;
            if values[j] < values[min_index] {
                min_index = j;
            }
        }
        if min_index != i {
            values.swap(i, min_index);
            stats.swaps += 1;
        }
    }
    stats
}

/// Insertion sort; every element shift counts as a swap.
pub fn insertion_sort(values: &mut [i32]) -> SortStats {
    let mut stats = SortStats::default();

    for i in 1..values.len() {
        let key = values[i];
        let mut j = i;
        while j > 0 {
            stats.comparisons += 1;
            if values[j - 1] <= key {
                break;
            }
            values[j] = values[j - 1];
            stats.swaps += 1;
            j -= 1;
        }
        values[j] = key;
    }
    stats
}

/// Top-down merge sort through an auxiliary buffer. Reports comparisons
/// only; no in-place swaps happen.
pub fn merge_sort(values: &mut [i32]) -> SortStats {
    let mut stats = SortStats::default();
    merge_sort_inner(values, &mut stats);
    stats
}

fn merge_sort_inner(values: &mut [i32], stats: &mut SortStats) {
    if values.len() <= 1 {
        return;
    }

    let mid = values.len() / 2;
    let (left, right) = values.split_at_mut(mid);
    merge_sort_inner(left, stats);
    merge_sort_inner(right, stats);

    let merged = merge(left, right, stats);
    values.copy_from_slice(&merged);
}

fn merge(left: &[i32], right: &[i32], stats: &mut SortStats) -> Vec<i32> {
    let mut out = Vec::with_capacity(left.len() + right.len());
    let (mut i, mut j) = (0, 0);

    while i < left.len() && j < right.len() {
        stats.comparisons += 1;
        if left[i] <= right[j] {
            out.push(left[i]);
            i += 1;
        } else {
            out.push(right[j]);
            j += 1;
        }
    }
    out.extend_from_slice(&left[i..]);
    out.extend_from_slice(&right[j..]);
    out
}

pub fn is_sorted(values: &[i32]) -> bool {
    values.windows(2).all(|w| w[0] <= w[1])
}

/// Random values in `[min, max]`; a seed makes the run reproducible.
pub fn generate_values(count: usize, min: i32, max: i32, seed: Option<u64>) -> Vec<i32> {
    match seed {
        Some(seed) => {
            let mut rng = StdRng::seed_from_u64(seed);
            (0..count).map(|_| rng.random_range(min..=max)).collect()
        }
        None => {
            let mut rng = rand::rng();
            (0..count).map(|_| rng.random_range(min..=max)).collect()
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortAlgorithm {
    Bubble,
    Selection,
    Insertion,
    Merge,
}

impl SortAlgorithm {
    pub const ALL: [SortAlgorithm; 4] = [
        SortAlgorithm::Bubble,
        SortAlgorithm::Selection,
        SortAlgorithm::Insertion,
        SortAlgorithm::Merge,
    ];

    pub fn name(&self) -> &'static str {
        match self {
            SortAlgorithm::Bubble => "Bubble Sort",
            SortAlgorithm::Selection => "Selection Sort",
            SortAlgorithm::Insertion => "Insertion Sort",
            SortAlgorithm::Merge => "Merge Sort",
        }
    }

    pub fn sort(&self, values: &mut [i32]) -> SortStats {
        match self {
            SortAlgorithm::Bubble => bubble_sort(values),
            SortAlgorithm::Selection => selection_sort(values),
            SortAlgorithm::Insertion => insertion_sort(values),
            SortAlgorithm::Merge => merge_sort(values),
        }
    }

    pub fn from_choice(choice: usize) -> Option<Self> {
        match choice {
            1 => Some(SortAlgorithm::Bubble),
            2 => Some(SortAlgorithm::Selection),
            3 => Some(SortAlgorithm::Insertion),
            4 => Some(SortAlgorithm::Merge),
            _ => None,
        }
    }
}

fn display_values(label: &str, values: &[i32], limit: usize) {
    let shown = values.len().min(limit);
    let parts: Vec<String> = values[..shown].iter().map(i32::to_string).collect();
    print!("{}: {}", label, parts.join(" "));
    if shown < values.len() {
        print!(" ... (showing first {} of {} elements)", shown, values.len());
    }
    println!();
}

fn run_one(algorithm: SortAlgorithm, values: &[i32], limit: usize) -> (SortStats, f64) {
    let mut work = values.to_vec();

    println!("\n{}", format!("--- {} ---", algorithm.name()).bold());
    let start = Instant::now();
    let stats = algorithm.sort(&mut work);
    let elapsed = start.elapsed().as_secs_f64();

    display_values("Sorted Array", &work, limit);
    println!("\nStatistics:");
    println!("  Comparisons: {}", stats.comparisons);
    // Merge sort never swaps in place, so the counter stays hidden there
    if stats.swaps > 0 || algorithm != SortAlgorithm::Merge {
        println!("  Swaps: {}", stats.swaps);
    }
    println!("  Time taken: {:.6} seconds", elapsed);

    if is_sorted(&work) {
        print_success!("Verification: array is sorted correctly");
    } else {
        print_error!("Verification: array is NOT sorted!");
    }

    info!(
        algorithm = algorithm.name(),
        elements = values.len(),
        comparisons = stats.comparisons,
        swaps = stats.swaps,
        "sort finished"
    );

    (stats, elapsed)
}

fn compare_all(values: &[i32], limit: usize) {
    println!("\n===========================================");
    println!("{}", "Comparing All Sorting Algorithms".bold());
    println!("===========================================");
    display_values("Input Array", values, limit);

    println!("\n{:<16} {:>13} {:>10} {:>14}", "Algorithm", "Comparisons", "Swaps", "Time (s)");
    rule();
    for algorithm in SortAlgorithm::ALL {
        let mut work = values.to_vec();
        let start = Instant::now();
        let stats = algorithm.sort(&mut work);
        let elapsed = start.elapsed().as_secs_f64();
        println!(
            "{:<16} {:>13} {:>10} {:>14.6}",
            algorithm.name(),
            stats.comparisons,
            stats.swaps,
            elapsed
        );
    }
    rule();
}

/// Fixed comparison demo, then the interactive harness.
pub fn run(config: &AppConfig, interactive: bool) -> Result<(), DsaLabError> {
    banner("SORTING ALGORITHMS COMPARISON");
    println!();

    let limit = config.demo.display_limit;

    println!("Demo run with 10 random elements:");
    let demo_values = generate_values(
        10,
        config.demo.value_min,
        config.demo.value_max,
        config.demo.sort_seed,
    );
    compare_all(&demo_values, limit);

    if !interactive {
        return Ok(());
    }

    println!("\n=========================================");
    println!("Sort your own array:");
    println!("=========================================");

    let Some(count) = prompt_usize("Enter number of elements: ") else {
        return Ok(());
    };
    if count == 0 {
        return Err(DsaLabError::validation("Invalid number of elements!"));
    }

    let values = generate_values(
        count,
        config.demo.value_min,
        config.demo.value_max,
        config.demo.sort_seed,
    );
    println!();
    display_values("Original Array", &values, limit);

    println!();
    println!("Choose a sorting algorithm:");
    println!("1. Bubble Sort");
    println!("2. Selection Sort");
    println!("3. Insertion Sort");
    println!("4. Merge Sort");
    let Some(choice) = prompt_usize("Enter choice: ") else {
        return Ok(());
    };
    let Some(algorithm) = SortAlgorithm::from_choice(choice) else {
        return Err(DsaLabError::validation("Invalid choice!"));
    };

    run_one(algorithm, &values, limit);

    let Some(compare) = prompt_usize("\nCompare all algorithms on this array? (1=Yes, 0=No): ")
    else {
        return Ok(());
    };
    if compare == 1 {
        compare_all(&values, limit);
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sorted_copy(values: &[i32]) -> Vec<i32> {
        let mut expected = values.to_vec();
        expected.sort_unstable();
        expected
    }

    fn check_all(values: &[i32]) {
        let expected = sorted_copy(values);
        for algorithm in SortAlgorithm::ALL {
            let mut work = values.to_vec();
            algorithm.sort(&mut work);
            assert_eq!(work, expected, "{} failed on {:?}", algorithm.name(), values);
        }
    }

    #[test]
    fn all_algorithms_sort_random_input() {
        check_all(&[64, 34, 25, 12, 22, 11, 90]);
        check_all(&generate_values(200, 1, 1000, Some(42)));
    }

    #[test]
    fn all_algorithms_handle_edge_shapes() {
        check_all(&[]);
        check_all(&[1]);
        check_all(&[1, 2, 3, 4, 5]);
        check_all(&[5, 4, 3, 2, 1]);
        check_all(&[7, 7, 7, 7]);
        check_all(&[-3, 0, -10, 5, 0]);
    }

    #[test]
    fn bubble_sort_exits_early_on_sorted_input() {
        let mut values: Vec<i32> = (1..=100).collect();
        let stats = bubble_sort(&mut values);
        // one swap-free pass, then done
        assert_eq!(stats.comparisons, 99);
        assert_eq!(stats.swaps, 0);
    }

    #[test]
    fn selection_sort_swaps_at_most_once_per_pass() {
        let mut values = vec![5, 4, 3, 2, 1];
        let stats = selection_sort(&mut values);
        assert!(stats.swaps <= 4);
        assert_eq!(stats.comparisons, 10);
    }

    #[test]
    fn insertion_sort_counts_shifts_as_swaps() {
        let mut values = vec![3, 2, 1];
        let stats = insertion_sort(&mut values);
        assert_eq!(values, vec![1, 2, 3]);
        assert_eq!(stats.swaps, 3);
    }

    #[test]
    fn merge_sort_reports_zero_swaps() {
        let mut values = generate_values(64, 1, 500, Some(7));
        let stats = merge_sort(&mut values);
        assert_eq!(stats.swaps, 0);
        assert!(stats.comparisons > 0);
        assert!(is_sorted(&values));
    }

    #[test]
    fn seeded_generation_is_reproducible() {
        let a = generate_values(50, 1, 1000, Some(99));
        let b = generate_values(50, 1, 1000, Some(99));
        assert_eq!(a, b);
        assert!(a.iter().all(|&v| (1..=1000).contains(&v)));
    }

    #[test]
    fn is_sorted_detects_order() {
        assert!(is_sorted(&[]));
        assert!(is_sorted(&[1]));
        assert!(is_sorted(&[1, 2, 2, 3]));
        assert!(!is_sorted(&[2, 1]));
    }

    #[test]
    fn menu_choice_mapping() {
        assert_eq!(SortAlgorithm::from_choice(1), Some(SortAlgorithm::Bubble));
        assert_eq!(SortAlgorithm::from_choice(4), Some(SortAlgorithm::Merge));
        assert_eq!(SortAlgorithm::from_choice(0), None);
        assert_eq!(SortAlgorithm::from_choice(5), None);
    }
}

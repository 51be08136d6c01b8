//! 排序算法性能基准测试

use criterion::{BenchmarkId, Criterion, criterion_group, criterion_main};
use dsa_lab::demos::sorting::{SortAlgorithm, generate_values};

const SIZES: [usize; 2] = [100, 1000];

fn random_input(size: usize) -> Vec<i32> {
    generate_values(size, 1, 1000, Some(42))
}

fn sorted_input(size: usize) -> Vec<i32> {
    (0..size as i32).collect()
}

fn reversed_input(size: usize) -> Vec<i32> {
    (0..size as i32).rev().collect()
}

// ============== 随机输入 ==============

fn bench_random_input(c: &mut Criterion) {
    let mut group = c.benchmark_group("sorting/random");

    for size in SIZES {
        let values = random_input(size);
        for algorithm in SortAlgorithm::ALL {
            group.bench_with_input(
                BenchmarkId::new(algorithm.name(), size),
                &values,
                |b, values| {
                    b.iter(|| {
                        let mut work = values.clone();
                        algorithm.sort(&mut work);
                        work
                    });
                },
            );
        }
    }

    group.finish();
}

// ============== 已排序输入（冒泡排序提前退出） ==============

fn bench_sorted_input(c: &mut Criterion) {
    let mut group = c.benchmark_group("sorting/sorted");

    for size in SIZES {
        let values = sorted_input(size);
        for algorithm in SortAlgorithm::ALL {
            group.bench_with_input(
                BenchmarkId::new(algorithm.name(), size),
                &values,
                |b, values| {
                    b.iter(|| {
                        let mut work = values.clone();
                        algorithm.sort(&mut work);
                        work
                    });
                },
            );
        }
    }

    group.finish();
}

// ============== 逆序输入（最坏情况） ==============

fn bench_reversed_input(c: &mut Criterion) {
    let mut group = c.benchmark_group("sorting/reversed");

    for size in SIZES {
        let values = reversed_input(size);
        for algorithm in SortAlgorithm::ALL {
            group.bench_with_input(
                BenchmarkId::new(algorithm.name(), size),
                &values,
                |b, values| {
                    b.iter(|| {
                        let mut work = values.clone();
                        algorithm.sort(&mut work);
                        work
                    });
                },
            );
        }
    }

    group.finish();
}

criterion_group!(
    benches,
    bench_random_input,
    bench_sorted_input,
    bench_reversed_input
);
criterion_main!(benches);

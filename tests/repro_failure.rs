use idxsort::prelude::*;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use std::cell::Cell;

/// Counts of calls issued to the comparator and swapper.
#[derive(Debug, Default)]
struct Calls {
    compares: usize,
    swaps: usize,
}

fn quick_sort_counting(data: &mut [u32]) -> Calls {
    let cells = Cell::from_mut(data).as_slice_of_cells();
    let compares = Cell::new(0);
    let swaps = Cell::new(0);
    quick_sort(
        0,
        cells.len(),
        &mut |a: usize, b: usize| {
            compares.set(compares.get() + 1);
            cells[a].get().cmp(&cells[b].get())
        },
        &mut |a: usize, b: usize| {
            swaps.set(swaps.get() + 1);
            cells[a].swap(&cells[b]);
        },
    );
    Calls {
        compares: compares.get(),
        swaps: swaps.get(),
    }
}

#[test]
fn test_all_equal_is_linear() {
    for len in [7, 8, 40, 41, 100, 10_000] {
        let mut data = vec![42u32; len];
        let calls = quick_sort_counting(&mut data);

        assert!(data.iter().all(|&x| x == 42));
        // One partition pass gathers everything into the equal run.
        assert!(calls.swaps <= len, "len {} swaps {:?}", len, calls);
        assert!(calls.compares <= 2 * len, "len {} compares {:?}", len, calls);
    }
}

#[test]
fn test_two_distinct_keys() {
    let mut rng = StdRng::seed_from_u64(42);

    for _iter in 0..50 {
        let len = rng.random_range(2000..5000);
        let mut data: Vec<u32> = (0..len).map(|_| rng.random_range(0..2)).collect();
        let mut expected = data.clone();
        expected.sort();

        let calls = quick_sort_counting(&mut data);

        assert_eq!(data, expected);
        // Each level removes a whole key, so the work stays a small multiple of n.
        assert!(calls.swaps <= 4 * len, "len {} calls {:?}", len, calls);
    }
}

#[test]
fn test_pivot_run_at_edges() {
    // Equal elements sit exactly at the cursors' starting positions, so the pivot's value is
    // relocated by the very first equal-swaps of both scans.
    let mut rng = StdRng::seed_from_u64(9);

    for len in 7..200 {
        for _ in 0..20 {
            let mut data: Vec<u32> = (0..len).map(|_| rng.random_range(0..5)).collect();
            let pivotish = data[len / 2];
            data[0] = pivotish;
            data[len - 1] = pivotish;

            let mut expected = data.clone();
            expected.sort();

            quick_sort_counting(&mut data);
            assert_eq!(data, expected, "len {}", len);
        }
    }
}

#[test]
fn test_organ_pipe_and_sawtooth() {
    let len = 4096u32;
    let patterns: Vec<Vec<u32>> = vec![
        (0..len / 2).chain((0..len / 2).rev()).collect(),
        (0..len).map(|i| i % 17).collect(),
        (0..len).map(|i| if i % 2 == 0 { i } else { len - i }).collect(),
    ];

    for input in patterns {
        let mut expected = input.clone();
        expected.sort();

        let mut quick = input.clone();
        quick_sort_counting(&mut quick);
        assert_eq!(quick, expected);

        let mut merge = input.clone();
        let cells = Cell::from_mut(&mut merge[..]).as_slice_of_cells();
        merge_sort(
            0,
            cells.len(),
            &mut |a: usize, b: usize| cells[a].get().cmp(&cells[b].get()),
            &mut |a: usize, b: usize| cells[a].swap(&cells[b]),
        );
        assert_eq!(merge, expected);
    }
}

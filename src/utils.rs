//! Ordering and scaling helpers shared by the rating models

/// Stably sorts `items` by `tenet` ascending, ties broken by original position.
///
/// Returns the sorted items and, for each sorted slot, the index the item came
/// from. Calling `unwind` again with those indices as the tenet restores the
/// original order.
pub fn unwind<K, T>(tenet: &[K], items: &[T]) -> (Vec<T>, Vec<usize>)
where
    K: Ord + Copy,
    T: Clone,
{
    debug_assert_eq!(tenet.len(), items.len());

    let mut order: Vec<usize> = (0..items.len()).collect();
    // sort_by_key is stable, so equal tenets keep their original order
    order.sort_by_key(|&index| tenet[index]);

    let sorted = order.iter().map(|&index| items[index].clone()).collect();
    (sorted, order)
}

/// Neighbours of each element in a ranking ladder.
///
/// Element `i` is paired with `i - 1` and `i + 1`; the ends have one neighbour.
/// Lists shorter than two yield a single empty neighbour set.
pub fn ladder_pairs<T: Clone>(list: &[T]) -> Vec<Vec<T>> {
    let n = list.len();
    if n <= 1 {
        return vec![Vec::new()];
    }

    let mut result = Vec::with_capacity(n);
    result.push(vec![list[1].clone()]);
    for i in 1..n - 1 {
        result.push(vec![list[i - 1].clone(), list[i + 1].clone()]);
    }
    result.push(vec![list[n - 2].clone()]);
    result
}

/// Linearly rescales `vector` onto `[target_min, target_max]`.
///
/// A single value maps straight to `target_max`. A constant vector uses a
/// source range of 1e-4 instead of zero.
pub fn normalize(vector: &[f64], target_min: f64, target_max: f64) -> Vec<f64> {
    if vector.len() == 1 {
        return vec![target_max];
    }

    let source_min = vector.iter().copied().fold(f64::INFINITY, f64::min);
    let source_max = vector.iter().copied().fold(f64::NEG_INFINITY, f64::max);

    let mut source_range = source_max - source_min;
    if source_range == 0.0 {
        source_range = 0.0001;
    }

    let target_range = target_max - target_min;
    vector
        .iter()
        .map(|value| ((value - source_min) / source_range) * target_range + target_min)
        .collect()
}

//! This module contains utility functionality needed for this crate,
//! currently only the uniform shuffle used by the solver and generator.

use rand::Rng;

/// Collects the items yielded by the given iterator into a vector and
/// shuffles it using a Fisher-Yates shuffle, i.e. every permutation of the
/// items is equally likely.
pub(crate) fn shuffle<T>(rng: &mut impl Rng, values: impl Iterator<Item = T>)
        -> Vec<T> {
    let mut vec: Vec<T> = values.collect();
    let len = vec.len();

    if len < 2 {
        return vec;
    }

    for i in 0..(len - 1) {
        let j = rng.gen_range(i..len);
        vec.swap(i, j);
    }

    vec
}

#[cfg(test)]
mod tests {

    use super::*;

    #[test]
    fn shuffling_keeps_items() {
        let mut rng = rand::thread_rng();
        let mut result = shuffle(&mut rng, 1..=9);
        result.sort_unstable();
        assert_eq!((1..=9).collect::<Vec<_>>(), result);
    }

    #[test]
    fn shuffling_handles_short_inputs() {
        let mut rng = rand::thread_rng();

        assert_eq!(Vec::<u8>::new(), shuffle(&mut rng, std::iter::empty::<u8>()));
        assert_eq!(vec![42], shuffle(&mut rng, std::iter::once(42)));
    }

    #[test]
    fn shuffling_uniformly_distributed() {
        // 18000 experiments, 6 options (3!), so if uniformly distributed:
        // p = 1/6, my = 3000, sigma = sqrt(18000 * 1/6 * 5/6) = 50
        // with a probability of the amount being in the range [2600, 3400]
        // is more than 99,9999999999999 %.

        let mut counts = [0; 6];
        let mut rng = rand::thread_rng();

        for _ in 0..18000 {
            let result = shuffle(&mut rng, 1..=3);

            if result == vec![1, 2, 3] {
                counts[0] += 1;
            }
            else if result == vec![1, 3, 2] {
                counts[1] += 1;
            }
            else if result == vec![2, 1, 3] {
                counts[2] += 1;
            }
            else if result == vec![2, 3, 1] {
                counts[3] += 1;
            }
            else if result == vec![3, 1, 2] {
                counts[4] += 1;
            }
            else if result == vec![3, 2, 1] {
                counts[5] += 1;
            }
        }

        for count in counts.iter() {
            assert!(*count >= 2600 && *count <= 3400,
                "Count is not in range [2600, 3400].");
        }
    }
}

//! Random subset of a collection.

use datagen_core::{GeneratorError, RandomElements, Result};
use rand::seq::index;
use rand::Rng;

/// Pick `count` elements from `source` without replacement.
///
/// Positions are distinct, so duplicate values in `source` can all be picked.
/// The result is in sampling order, not source order.
pub fn generate_random_elements<R: Rng, T: Clone>(
    rng: &mut R,
    source: &[T],
    count: usize,
) -> Result<RandomElements<T>> {
    if count > source.len() {
        return Err(GeneratorError::ValueInvalid(format!(
            "cannot pick {count} elements from a collection of {}",
            source.len()
        )));
    }

    let elements = index::sample(rng, source.len(), count)
        .into_iter()
        .map(|i| source[i].clone())
        .collect();

    Ok(RandomElements::new(elements))
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn test_subset_size_and_membership() {
        let mut rng = StdRng::seed_from_u64(42);
        let source: Vec<i32> = (0..20).collect();

        for count in 0..=source.len() {
            let picked = generate_random_elements(&mut rng, &source, count).unwrap();
            assert_eq!(picked.len(), count);
            assert!(picked.iter().all(|e| source.contains(e)));

            let mut sorted = picked.clone().into_inner();
            sorted.sort();
            sorted.dedup();
            assert_eq!(sorted.len(), count, "positions must be distinct");
        }
    }

    #[test]
    fn test_count_exceeds_source() {
        let mut rng = StdRng::seed_from_u64(42);
        let source = vec!["a", "b", "c"];

        assert!(matches!(
            generate_random_elements(&mut rng, &source, 4),
            Err(GeneratorError::ValueInvalid(_))
        ));
    }

    #[test]
    fn test_duplicates_in_source_are_kept() {
        let mut rng = StdRng::seed_from_u64(42);
        let source = vec!["x", "x", "x"];

        let picked = generate_random_elements(&mut rng, &source, 3).unwrap();
        assert_eq!(picked.into_inner(), vec!["x", "x", "x"]);
    }

    #[test]
    fn test_full_pick_is_a_permutation() {
        let mut rng = StdRng::seed_from_u64(42);
        let source = vec!['a', 'b', 'c', 'd', 'e'];

        let mut picked = generate_random_elements(&mut rng, &source, 5)
            .unwrap()
            .into_inner();
        picked.sort();
        assert_eq!(picked, source);
    }

    #[test]
    fn test_empty_source() {
        let mut rng = StdRng::seed_from_u64(42);
        let source: Vec<u8> = Vec::new();

        assert!(generate_random_elements(&mut rng, &source, 0)
            .unwrap()
            .is_empty());
    }
}

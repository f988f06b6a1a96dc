//! Utility functions and helpers

/// Computes an exclusive prefix sum (scan) for a vector
///
/// The result has one more element than the input; the last element is the
/// total.
pub fn exclusive_scan(input: &[usize]) -> Vec<usize> {
    let mut result = Vec::with_capacity(input.len() + 1);
    let mut sum = 0;

    result.push(0); // First element is always 0

    for &val in input {
        sum += val;
        result.push(sum);
    }

    result
}

/// Offsets at which a run of equal keys begins
///
/// `keys` yields one key per entry of an already-arranged sequence. A new run
/// starts at index 0 and wherever a key differs from its predecessor. An
/// empty sequence has no runs.
pub fn run_starts<K, I>(keys: I) -> Vec<usize>
where
    K: PartialEq,
    I: IntoIterator<Item = K>,
{
    let mut starts = Vec::new();
    let mut prev: Option<K> = None;

    for (i, key) in keys.into_iter().enumerate() {
        if prev.as_ref() != Some(&key) {
            starts.push(i);
        }
        prev = Some(key);
    }

    starts
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_exclusive_scan() {
        let input = vec![1, 2, 3, 4];
        let expected = vec![0, 1, 3, 6, 10];
        assert_eq!(exclusive_scan(&input), expected);

        let input = vec![0, 0, 5, 0];
        let expected = vec![0, 0, 0, 5, 5];
        assert_eq!(exclusive_scan(&input), expected);

        assert_eq!(exclusive_scan(&[]), vec![0]);
    }

    #[test]
    fn test_run_starts() {
        assert_eq!(run_starts([1, 1, 2, 3, 3, 3]), vec![0, 2, 3]);
        assert_eq!(run_starts([5]), vec![0]);
        assert!(run_starts(Vec::<u32>::new()).is_empty());

        // Non-adjacent repeats start a new run
        assert_eq!(run_starts([1, 2, 1]), vec![0, 1, 2]);
    }
}

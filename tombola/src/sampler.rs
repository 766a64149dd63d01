use rand::Rng;

use crate::InvalidRange;

/// Draws `count` distinct numbers from `low..=high`, without replacement.
///
/// Numbers are returned in the order they were accepted, not sorted.
/// Asking for more numbers than the range holds is an error rather than an
/// endless loop.
///
/// ```
/// use rand::{rngs::StdRng, SeedableRng};
/// let mut rng = StdRng::seed_from_u64(0);
/// let mut nums = tombola::sample_unique(&mut rng, 1, 5, 5).unwrap();
/// nums.sort();
/// assert_eq!(nums, vec![1, 2, 3, 4, 5]);
/// ```
pub fn sample_unique<R: Rng + ?Sized>(
    rng: &mut R,
    low: u8,
    high: u8,
    count: usize,
) -> Result<Vec<u8>, InvalidRange> {
    if low > high || count > usize::from(high - low) + 1 {
        return Err(InvalidRange { low, high, count });
    }
    let mut accepted = Vec::with_capacity(count);
    while accepted.len() < count {
        let num = rng.gen_range(low..=high);
        if !accepted.contains(&num) {
            accepted.push(num);
        }
    }
    Ok(accepted)
}

use rand::seq::SliceRandom;
use rand::Rng;

/// Fresh copy of `items` in uniformly random order (Fisher-Yates).
///
/// The source slice is left untouched.
pub fn shuffled_copy<T: Clone, R: Rng + ?Sized>(items: &[T], rng: &mut R) -> Vec<T> {
    let mut copy = items.to_vec();
    copy.shuffle(rng);
    copy
}

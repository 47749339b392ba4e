//! Random-choice adapter

use ipsum_domain::DomainPicker;
use rand::Rng;

/// [`DomainPicker`] backed by the thread-local RNG.
///
/// Uniform over `0..len`; no cryptographic-strength requirement.
pub struct ThreadRngPicker;

impl DomainPicker for ThreadRngPicker {
    fn pick_index(&self, len: usize) -> usize {
        rand::thread_rng().gen_range(0..len)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_pick_index_stays_in_range() {
        let picker = ThreadRngPicker;
        for _ in 0..1000 {
            assert!(picker.pick_index(30) < 30);
        }
    }

    #[test]
    fn test_single_entry_is_always_picked() {
        let picker = ThreadRngPicker;
        assert_eq!(picker.pick_index(1), 0);
    }
}

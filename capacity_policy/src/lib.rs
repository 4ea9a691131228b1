// growth and shrink arithmetic shared by the array-backed containers.
// kept as plain functions so the exact numbers can be tested directly
// instead of relying on whatever Vec decides to allocate

pub const MIN_CAPACITY: usize = 1;

/// Capacity to grow to once a container of `capacity` slots is full:
/// `floor(1.25 * capacity) + 1`.
pub fn grown(capacity: usize) -> usize {
    capacity
        .saturating_add(capacity / 4)
        .saturating_add(1)
}

/// Capacity a resize request actually ends up with. Never drops below the
/// number of occupied slots and never reaches zero.
pub fn clamped(requested: usize, used: usize) -> usize {
    requested.max(used).max(MIN_CAPACITY)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn grown_matches_quarter_growth_plus_one() {
        assert_eq!(grown(0), 1);
        assert_eq!(grown(1), 2);
        assert_eq!(grown(2), 3);
        assert_eq!(grown(3), 4);
        assert_eq!(grown(4), 6);
        assert_eq!(grown(8), 11);
        assert_eq!(grown(30), 38);
        assert_eq!(grown(100), 126);
    }

    #[test]
    fn grown_always_increases() {
        for capacity in 0..1000 {
            assert!(grown(capacity) > capacity);
        }
    }

    #[test]
    fn grown_saturates() {
        assert_eq!(grown(usize::MAX), usize::MAX);
    }

    #[test]
    fn clamped_keeps_occupied_slots() {
        assert_eq!(clamped(2, 5), 5);
        assert_eq!(clamped(7, 5), 7);
        assert_eq!(clamped(5, 5), 5);
    }

    #[test]
    fn clamped_never_zero() {
        assert_eq!(clamped(0, 0), MIN_CAPACITY);
    }
}

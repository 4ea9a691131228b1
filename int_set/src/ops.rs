use super::{IntSet, MAX_SIZE};

impl IntSet {
    /// Members of `self` followed by the members of `other` that are new.
    ///
    /// # Panics
    ///
    /// Panics if the union has more than [`MAX_SIZE`] members.
    pub fn union_with(&self, other: &IntSet) -> IntSet {
        let extra = other.subtract(self);
        assert!(
            self.size() + extra.size() <= MAX_SIZE,
            "union of {} and {} members exceeds the maximum of {MAX_SIZE}",
            self.size(),
            extra.size()
        );
        let mut union = *self;
        for &value in extra.members() {
            union.add(value);
        }
        union
    }

    pub fn intersect(&self, other: &IntSet) -> IntSet {
        let mut intersection = *self;
        for &value in self.members() {
            if !other.contains(value) {
                intersection.remove(value);
            }
        }
        intersection
    }

    pub fn subtract(&self, other: &IntSet) -> IntSet {
        let mut difference = IntSet::new();
        for &value in self.members() {
            if !other.contains(value) {
                difference.add(value);
            }
        }
        difference
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn set_of(values: &[i32]) -> IntSet {
        let mut set = IntSet::new();
        for &value in values {
            set.add(value);
        }
        set
    }

    #[test]
    fn union_appends_new_members() {
        let union = set_of(&[1, 2, 3]).union_with(&set_of(&[3, 4, 1, 5]));
        assert_eq!(union.members(), &[1, 2, 3, 4, 5]);
    }

    #[test]
    fn union_fits_exactly() {
        let left = set_of(&[0, 1, 2, 3, 4]);
        let right = set_of(&[5, 6, 7, 8, 9, 0]);
        assert_eq!(left.union_with(&right).size(), MAX_SIZE);
    }

    #[test]
    #[should_panic(expected = "exceeds the maximum")]
    fn union_overflow_panics() {
        let left = set_of(&[0, 1, 2, 3, 4, 5]);
        let right = set_of(&[6, 7, 8, 9, 10]);
        left.union_with(&right);
    }

    #[test]
    fn intersect_keeps_left_order() {
        let intersection = set_of(&[5, 1, 4, 2]).intersect(&set_of(&[2, 5, 9]));
        assert_eq!(intersection.members(), &[5, 2]);
    }

    #[test]
    fn subtract_removes_shared_members() {
        let difference = set_of(&[5, 1, 4, 2]).subtract(&set_of(&[2, 5, 9]));
        assert_eq!(difference.members(), &[1, 4]);
        assert!(set_of(&[1]).subtract(&set_of(&[1])).is_empty());
    }

    #[test]
    fn operands_are_untouched() {
        let left = set_of(&[1, 2]);
        let right = set_of(&[2, 3]);
        let _ = left.union_with(&right);
        let _ = left.intersect(&right);
        let _ = left.subtract(&right);
        assert_eq!(left.members(), &[1, 2]);
        assert_eq!(right.members(), &[2, 3]);
    }
}

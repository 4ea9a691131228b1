mod ops;

use std::fmt;
use std::io::{self, Write};
use thiserror::Error;

pub const MAX_SIZE: usize = 10;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[error("int set already holds the maximum of {} values", MAX_SIZE)]
pub struct SetFull;

/// Up to [`MAX_SIZE`] distinct integers, kept in the order they joined.
///
/// `data[0..used]` holds the members; the rest of `data` is leftover and
/// never read.
#[derive(Debug, Clone, Copy)]
pub struct IntSet {
    data: [i32; MAX_SIZE],
    used: usize,
}

impl IntSet {
    pub fn new() -> Self {
        Self {
            data: [0; MAX_SIZE],
            used: 0,
        }
    }

    pub fn size(&self) -> usize {
        self.used
    }

    pub fn is_empty(&self) -> bool {
        self.used == 0
    }

    pub fn members(&self) -> &[i32] {
        &self.data[..self.used]
    }

    pub fn contains(&self, value: i32) -> bool {
        self.members().contains(&value)
    }

    pub fn is_subset_of(&self, other: &IntSet) -> bool {
        self.members().iter().all(|&value| other.contains(value))
    }

    /// Adds `value` unless it is already a member. Returns whether it was
    /// added.
    ///
    /// # Panics
    ///
    /// Panics if `value` is new and the set is already full.
    pub fn add(&mut self, value: i32) -> bool {
        match self.try_add(value) {
            Ok(added) => added,
            Err(e) => panic!("{e}"),
        }
    }

    pub fn try_add(&mut self, value: i32) -> Result<bool, SetFull> {
        if self.contains(value) {
            return Ok(false);
        }
        if self.used == MAX_SIZE {
            return Err(SetFull);
        }
        self.data[self.used] = value;
        self.used += 1;
        Ok(true)
    }

    /// Removes `value`, keeping the remaining members in order. Returns
    /// whether it was a member.
    pub fn remove(&mut self, value: i32) -> bool {
        match self.members().iter().position(|&member| member == value) {
            Some(index) => {
                self.data.copy_within(index + 1..self.used, index);
                self.used -= 1;
                true
            }
            None => false,
        }
    }

    pub fn reset(&mut self) {
        self.used = 0;
    }

    /// Members separated by two spaces, nothing at all for an empty set.
    pub fn dump_data<W: Write>(&self, mut writer: W) -> io::Result<()> {
        write!(writer, "{self}")
    }
}

impl Default for IntSet {
    fn default() -> Self {
        Self::new()
    }
}

// same members, in any order
impl PartialEq for IntSet {
    fn eq(&self, other: &Self) -> bool {
        self.is_subset_of(other) && other.is_subset_of(self)
    }
}

impl Eq for IntSet {}

impl fmt::Display for IntSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut members = self.members().iter();
        if let Some(first) = members.next() {
            write!(f, "{first}")?;
        }
        for member in members {
            write!(f, "  {member}")?;
        }
        Ok(())
    }
}

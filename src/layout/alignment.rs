// Thu Oct 15 2026 - Alex

use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Alignment {
    value: usize,
}

impl Alignment {
    /// Returns `None` unless `value` is a non-zero power of two.
    pub fn new(value: usize) -> Option<Self> {
        if value > 0 && value.is_power_of_two() {
            Some(Self { value })
        } else {
            None
        }
    }

    pub fn of<T>() -> Self {
        Self { value: std::mem::align_of::<T>() }
    }

    pub fn as_usize(&self) -> usize {
        self.value
    }

    pub fn align(&self, offset: usize) -> usize {
        (offset + self.value - 1) & !(self.value - 1)
    }

    pub fn is_aligned(&self, offset: usize) -> bool {
        offset & (self.value - 1) == 0
    }

    pub fn min(self, other: Self) -> Self {
        if other.value < self.value { other } else { self }
    }
}

impl fmt::Display for Alignment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rejects_non_power_of_two() {
        assert!(Alignment::new(0).is_none());
        assert!(Alignment::new(3).is_none());
        assert!(Alignment::new(12).is_none());
        assert_eq!(Alignment::new(4).map(|a| a.as_usize()), Some(4));
    }

    #[test]
    fn test_align_rounds_up() {
        let four = Alignment::new(4).unwrap();
        assert_eq!(four.align(0), 0);
        assert_eq!(four.align(1), 4);
        assert_eq!(four.align(62), 64);
        assert_eq!(four.align(123), 124);
        assert!(four.is_aligned(8));
        assert!(!four.is_aligned(6));
    }

    #[test]
    fn test_min_picks_smaller() {
        let two = Alignment::new(2).unwrap();
        let eight = Alignment::new(8).unwrap();
        assert_eq!(eight.min(two), two);
        assert_eq!(two.min(eight), two);
    }
}

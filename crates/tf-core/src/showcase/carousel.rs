//! Rotating selection over a fixed list

use std::time::Duration;

/// How long each item stays on screen before rotating
pub const CAROUSEL_INTERVAL: Duration = Duration::from_secs(5);

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Carousel<T> {
    items: Vec<T>,
    index: usize,
}

impl<T> Carousel<T> {
    /// `None` when there is nothing to rotate through
    pub fn new(items: Vec<T>) -> Option<Self> {
        if items.is_empty() {
            return None;
        }
        Some(Self { items, index: 0 })
    }

    pub fn current(&self) -> &T {
        &self.items[self.index]
    }

    pub fn index(&self) -> usize {
        self.index
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn items(&self) -> &[T] {
        &self.items
    }

    /// Move to the next item, wrapping to the first after the last
    pub fn advance(&mut self) -> &T {
        self.index = if self.index + 1 == self.items.len() {
            0
        } else {
            self.index + 1
        };
        self.current()
    }

    /// Jump to `index`; out-of-range requests are ignored
    pub fn select(&mut self, index: usize) -> bool {
        if index < self.items.len() {
            self.index = index;
            true
        } else {
            false
        }
    }

    /// One flag per item, set for the active one
    pub fn indicators(&self) -> Vec<bool> {
        (0..self.items.len()).map(|i| i == self.index).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_carousel() {
        assert!(Carousel::<u8>::new(Vec::new()).is_none());
    }

    #[test]
    fn test_advance_wraps() {
        let mut carousel = Carousel::new(vec!["a", "b", "c"]).unwrap();
        assert_eq!(*carousel.current(), "a");
        assert_eq!(*carousel.advance(), "b");
        assert_eq!(*carousel.advance(), "c");
        assert_eq!(*carousel.advance(), "a");
    }

    #[test]
    fn test_single_item_stays_put() {
        let mut carousel = Carousel::new(vec![1]).unwrap();
        carousel.advance();
        assert_eq!(carousel.index(), 0);
    }

    #[test]
    fn test_select_and_indicators() {
        let mut carousel = Carousel::new(vec![1, 2, 3]).unwrap();
        assert!(carousel.select(2));
        assert_eq!(carousel.indicators(), vec![false, false, true]);
        assert!(!carousel.select(3));
        assert_eq!(carousel.index(), 2);
    }
}

//! Banner zone state: carousel position and the once-per-mount impression latch.

/// Visible fraction at which an impression counts.
pub const IMPRESSION_THRESHOLD: f64 = 0.5;

/// Rotating index over `len` creatives.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Carousel {
    len: usize,
    index: usize,
}

impl Carousel {
    pub fn new(len: usize) -> Self {
        Self { len, index: 0 }
    }

    pub fn index(&self) -> usize {
        self.index
    }

    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Only more than one creative rotates.
    pub fn rotates(&self) -> bool {
        self.len > 1
    }

    /// Timer tick: next creative, wrapping.
    pub fn advance(&mut self) {
        if self.len > 0 {
            self.index = (self.index + 1) % self.len;
        }
    }

    /// Dot navigation. Out-of-range indexes are ignored.
    pub fn go_to(&mut self, index: usize) {
        if index < self.len {
            self.index = index;
        }
    }
}

/// Fires at most once per zone mount.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct ImpressionLatch {
    fired: bool,
}

impl ImpressionLatch {
    /// Feed a visibility observation. Returns `true` exactly once: the first
    /// time the zone is at least [`IMPRESSION_THRESHOLD`] visible.
    pub fn observe(&mut self, visible_ratio: f64) -> bool {
        if self.fired || visible_ratio < IMPRESSION_THRESHOLD {
            return false;
        }
        self.fired = true;
        true
    }

    pub fn fired(&self) -> bool {
        self.fired
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn carousel_wraps() {
        let mut c = Carousel::new(3);
        c.advance();
        c.advance();
        assert_eq!(c.index(), 2);
        c.advance();
        assert_eq!(c.index(), 0);
    }

    #[test]
    fn dots_jump_and_ignore_out_of_range() {
        let mut c = Carousel::new(3);
        c.go_to(2);
        assert_eq!(c.index(), 2);
        c.go_to(7);
        assert_eq!(c.index(), 2);
    }

    #[test]
    fn single_or_empty_does_not_rotate() {
        assert!(!Carousel::new(1).rotates());
        let mut empty = Carousel::new(0);
        empty.advance();
        assert_eq!(empty.index(), 0);
        assert!(empty.is_empty());
    }

    #[test]
    fn impression_fires_once_even_on_reentry() {
        let mut latch = ImpressionLatch::default();
        assert!(!latch.observe(0.2));
        assert!(latch.observe(0.5));
        assert!(!latch.observe(0.0));
        assert!(!latch.observe(1.0));
        assert!(latch.fired());
    }
}

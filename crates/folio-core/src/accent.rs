/// Index of the active accent colour. Always in `[0, len)`.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct AccentState {
    index: usize,
    len: usize,
}

impl AccentState {
    /// `len` is clamped to at least one; `start` is wrapped into range.
    pub fn new(start: usize, len: usize) -> Self {
        let len = len.max(1);
        Self {
            index: start % len,
            len,
        }
    }

    #[inline]
    pub fn current(&self) -> usize {
        self.index
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.len
    }

    /// Step to the next accent, wrapping around. Returns the new index.
    pub fn advance(&mut self) -> usize {
        self.index = (self.index + 1) % self.len;
        self.index
    }

    /// Jump to `index` if it names an accent.
    pub fn select(&mut self, index: usize) -> bool {
        if index < self.len {
            self.index = index;
            true
        } else {
            false
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn advance_wraps() {
        let mut a = AccentState::new(2, 3);
        assert_eq!(a.advance(), 0);
        assert_eq!(a.advance(), 1);
    }

    #[test]
    fn start_index_is_wrapped() {
        assert_eq!(AccentState::new(9, 4).current(), 1);
        assert_eq!(AccentState::new(5, 0).len(), 1);
    }

    #[test]
    fn select_rejects_out_of_range() {
        let mut a = AccentState::new(0, 4);
        assert!(!a.select(4));
        assert_eq!(a.current(), 0);
        assert!(a.select(3));
        assert_eq!(a.current(), 3);
    }
}

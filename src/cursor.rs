//! Scan position over a borrowed text buffer.

/// Half-open `[pos, upper_bound)` window over a buffer owned by someone else.
///
/// Positions are byte offsets. The tokenizer only ever stops on ASCII
/// delimiters and whitespace, so every position it leaves behind is a valid
/// `char` boundary.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Cursor {
    lower_bound: usize,
    upper_bound: usize,
    pos: usize,
}

impl Cursor {
    /// Create a cursor at `lower_bound`.
    ///
    /// # Panics
    ///
    /// Panics if `lower_bound > upper_bound`.
    pub fn new(lower_bound: usize, upper_bound: usize) -> Self {
        assert!(
            lower_bound <= upper_bound,
            "cursor lower bound {} exceeds upper bound {}",
            lower_bound,
            upper_bound
        );
        Self {
            lower_bound,
            upper_bound,
            pos: lower_bound,
        }
    }

    pub fn upper_bound(&self) -> usize {
        self.upper_bound
    }

    pub fn pos(&self) -> usize {
        self.pos
    }

    /// Move to `pos`, which must stay inside the window.
    ///
    /// # Panics
    ///
    /// Panics if `pos` is outside `[lower_bound, upper_bound]`.
    pub fn update_pos(&mut self, pos: usize) {
        assert!(
            (self.lower_bound..=self.upper_bound).contains(&pos),
            "cursor position {} out of bounds [{}, {}]",
            pos,
            self.lower_bound,
            self.upper_bound
        );
        self.pos = pos;
    }

    /// Step past a single byte if not already at the end.
    pub fn advance(&mut self) {
        if !self.at_end() {
            self.pos += 1;
        }
    }

    pub fn at_end(&self) -> bool {
        self.pos >= self.upper_bound
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_starts_at_lower_bound() {
        let cursor = Cursor::new(4, 10);
        assert_eq!(cursor.pos(), 4);
        assert_eq!(cursor.upper_bound(), 10);
        assert!(!cursor.at_end());
    }

    #[test]
    fn test_empty_window_is_at_end() {
        let cursor = Cursor::new(3, 3);
        assert!(cursor.at_end());
        assert_eq!(cursor.pos(), 3);
    }

    #[test]
    fn test_advance_stops_at_bound() {
        let mut cursor = Cursor::new(0, 1);
        cursor.advance();
        assert!(cursor.at_end());
        cursor.advance();
        assert_eq!(cursor.pos(), 1);
    }

    #[test]
    #[should_panic]
    fn test_update_pos_out_of_bounds() {
        let mut cursor = Cursor::new(2, 5);
        cursor.update_pos(6);
    }
}

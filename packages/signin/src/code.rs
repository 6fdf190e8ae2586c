//! The one-time code typed into a row of single-character cells.

use std::fmt;

/// Number of cells in the code grid.
pub const CODE_LENGTH: usize = 6;

/// A one-time code of at most [`CODE_LENGTH`] characters.
///
/// Logically a single string; the UI shows one character per cell.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct OneTimeCode {
    chars: Vec<char>,
}

impl OneTimeCode {
    pub fn new() -> Self {
        Self::default()
    }

    /// Accept `value` typed into `cell`.
    ///
    /// The new code is every character before `cell` followed by the last
    /// character of `value`, so anything at or after `cell` is dropped. An
    /// empty `value` (the cell was cleared) keeps just the prefix. Returns
    /// whether a character was accepted.
    pub fn enter(&mut self, cell: usize, value: &str) -> bool {
        if cell >= CODE_LENGTH {
            return false;
        }
        self.chars.truncate(cell);
        match value.chars().last() {
            Some(c) => {
                self.chars.push(c);
                true
            }
            None => false,
        }
    }

    /// Character shown in `cell`, if any.
    pub fn cell(&self, cell: usize) -> Option<char> {
        self.chars.get(cell).copied()
    }

    pub fn len(&self) -> usize {
        self.chars.len()
    }

    pub fn is_empty(&self) -> bool {
        self.chars.is_empty()
    }

    pub fn is_complete(&self) -> bool {
        self.chars.len() == CODE_LENGTH
    }

    pub fn clear(&mut self) {
        self.chars.clear();
    }

    pub fn as_string(&self) -> String {
        self.chars.iter().collect()
    }
}

impl fmt::Display for OneTimeCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.as_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn code_of(s: &str) -> OneTimeCode {
        let mut code = OneTimeCode::new();
        for (i, c) in s.chars().enumerate() {
            assert!(code.enter(i, &c.to_string()));
        }
        code
    }

    #[test]
    fn test_enter_in_order() {
        let code = code_of("123456");
        assert_eq!(code.as_string(), "123456");
        assert!(code.is_complete());
        assert_eq!(code.cell(0), Some('1'));
        assert_eq!(code.cell(5), Some('6'));
        assert_eq!(code.cell(6), None);
    }

    #[test]
    fn test_enter_truncates_tail() {
        let mut code = code_of("123456");

        assert!(code.enter(2, "9"));
        assert_eq!(code.as_string(), "129");
        assert!(!code.is_complete());

        assert!(code.enter(0, "7"));
        assert_eq!(code.as_string(), "7");
    }

    #[test]
    fn test_enter_past_end_appends() {
        let mut code = code_of("12");
        assert!(code.enter(4, "5"));
        assert_eq!(code.as_string(), "125");
        assert_eq!(code.cell(2), Some('5'));
        assert_eq!(code.cell(4), None);
    }

    #[test]
    fn test_enter_keeps_last_character() {
        let mut code = code_of("1");
        assert!(code.enter(1, "34"));
        assert_eq!(code.as_string(), "14");
    }

    #[test]
    fn test_clearing_a_cell_keeps_prefix() {
        let mut code = code_of("1234");
        assert!(!code.enter(2, ""));
        assert_eq!(code.as_string(), "12");
    }

    #[test]
    fn test_out_of_range_cell_is_ignored() {
        let mut code = code_of("123456");
        assert!(!code.enter(CODE_LENGTH, "7"));
        assert_eq!(code.as_string(), "123456");
        assert!(code.len() <= CODE_LENGTH);
    }

    #[test]
    fn test_clear() {
        let mut code = code_of("123");
        code.clear();
        assert!(code.is_empty());
        assert_eq!(code.to_string(), "");
    }
}

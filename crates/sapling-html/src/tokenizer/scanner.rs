use crate::error::ParseIssue;

/// A cursor over markup viewed as a sequence of Unicode code points.
///
/// Every reader advances the cursor by exactly the number of characters it
/// returns (tag readers: by the length of the tag) and hands back slices that
/// borrow from the input.
pub struct Scanner<'a> {
    pub(super) input: &'a [char],
    pub(super) pos: usize,
    pub(super) issues: Vec<ParseIssue>,
    // When true, issues are recorded but not echoed to stderr.
    pub(super) quiet: bool,
}

impl<'a> Scanner<'a> {
    /// Create a scanner positioned at the start of `input`.
    #[must_use]
    pub const fn new(input: &'a [char]) -> Self {
        Self {
            input,
            pos: 0,
            issues: Vec::new(),
            quiet: false,
        }
    }

    /// Record parse issues without printing warnings.
    #[must_use]
    pub const fn with_quiet_mode(mut self) -> Self {
        self.quiet = true;
        self
    }

    /// Current cursor offset in code points.
    #[must_use]
    pub const fn position(&self) -> usize {
        self.pos
    }

    /// Returns true once the cursor has consumed the whole input.
    #[must_use]
    pub const fn is_at_end(&self) -> bool {
        self.pos >= self.input.len()
    }

    /// Issues recorded so far.
    #[must_use]
    pub fn issues(&self) -> &[ParseIssue] {
        &self.issues
    }

    /// Take the recorded issues, leaving the scanner's list empty.
    pub fn take_issues(&mut self) -> Vec<ParseIssue> {
        std::mem::take(&mut self.issues)
    }

    /// Consume a maximal run of whitespace starting at the cursor.
    ///
    /// Returns the run, which is empty if the cursor is not on whitespace.
    pub fn read_whitespace(&mut self) -> &'a [char] {
        let start = self.pos;
        while self.current().is_some_and(Self::is_whitespace_char) {
            self.pos += 1;
        }
        &self.input[start..self.pos]
    }

    /// Consume characters up to, but not including, the next `<` that begins
    /// a tag.
    ///
    /// Returns an empty slice without moving if the cursor is already at a
    /// tag, and everything up to end of input if no tag follows. A `<` that
    /// cannot begin a tag (as in `a < b`) is ordinary text.
    pub fn read_until_tag(&mut self) -> &'a [char] {
        let start = self.pos;
        while !self.is_at_end() && !self.begins_tag() {
            self.pos += 1;
        }
        &self.input[start..self.pos]
    }
}

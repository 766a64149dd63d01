/// The error type for [`sample_unique()`](crate::sample_unique), i.e. for
/// requesting more distinct numbers than a range holds.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct InvalidRange {
    pub low: u8,
    pub high: u8,
    pub count: usize,
}

impl std::error::Error for InvalidRange {}

impl std::fmt::Display for InvalidRange {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        if self.low > self.high {
            write!(f, "The range {}..={} is empty", self.low, self.high)
        } else {
            write!(
                f,
                "Cannot draw {} unique numbers from {}..={}, which only holds {}",
                self.count,
                self.low,
                self.high,
                usize::from(self.high - self.low) + 1
            )
        }
    }
}

/// The error type for building a [`Template`](crate::Template).
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum TemplateError {
    InsufficientData { expected: usize, found: usize },
    InvalidFlag { row: usize, col: usize, value: i64 },
    WrongRowDensity { row: usize, ones: usize },
}

impl std::error::Error for TemplateError {}

impl std::fmt::Display for TemplateError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            TemplateError::InsufficientData { expected, found } => write!(
                f,
                "Insufficient template data: expected {} values, found {}",
                expected, found
            ),
            TemplateError::InvalidFlag { row, col, value } => write!(
                f,
                "Template cell ({}, {}) is {}, but only 0 and 1 are allowed",
                row, col, value
            ),
            TemplateError::WrongRowDensity { row, ones } => write!(
                f,
                "Template row {} has {} numbered cells, expected {}",
                row,
                ones,
                crate::NUMBERS_PER_ROW
            ),
        }
    }
}

#[derive(Debug, PartialEq, Eq)]
/// The error type for playing a game.
pub enum GameError {
    /// Every number was drawn and still no card is complete.
    ///
    /// Cannot happen for a tombola built by
    /// [`generate_tombola()`](crate::generate_tombola).
    DrawPoolExhausted { drawn: usize },
}

impl std::error::Error for GameError {}

impl std::fmt::Display for GameError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            GameError::DrawPoolExhausted { drawn } => write!(
                f,
                "Invariant violated: all {} numbers were drawn without a winner",
                drawn
            ),
        }
    }
}

/// The error type for [`DrawSequence::from_numbers()`](crate::DrawSequence::from_numbers).
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum DrawSequenceError {
    OutOfRange { num: u8 },
    Repeated { num: u8 },
}

impl std::error::Error for DrawSequenceError {}

impl std::fmt::Display for DrawSequenceError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            DrawSequenceError::OutOfRange { num } => write!(
                f,
                "{} cannot be drawn, only {} to {} can",
                num,
                crate::LOWEST_NUMBER,
                crate::HIGHEST_NUMBER
            ),
            DrawSequenceError::Repeated { num } => write!(f, "{} is drawn more than once", num),
        }
    }
}

//! The nine menu entries and their display order.

use std::fmt;

/// A selectable menu entry. Discriminants are the numbers the user types.
#[allow(missing_docs)]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MenuAction {
    Terminate = 0,
    Populate = 1,
    ShowAll = 2,
    Clear = 3,
    HighestOddEvenSum = 4,
    IndicesOfValue = 5,
    ReplaceValue = 6,
    SecondLargest = 7,
    RemoveDuplicates = 8,
}

impl MenuAction {
    /// Number of defined actions, terminate included.
    pub const COUNT: usize = 9;

    /// Display order: the array operations 1–8, then terminate last.
    pub const DISPLAY_ORDER: [Self; Self::COUNT] = [
        Self::Populate,
        Self::ShowAll,
        Self::Clear,
        Self::HighestOddEvenSum,
        Self::IndicesOfValue,
        Self::ReplaceValue,
        Self::SecondLargest,
        Self::RemoveDuplicates,
        Self::Terminate,
    ];

    /// Action for a validated menu index.
    #[must_use]
    pub const fn from_index(index: i32) -> Option<Self> {
        Some(match index {
            0 => Self::Terminate,
            1 => Self::Populate,
            2 => Self::ShowAll,
            3 => Self::Clear,
            4 => Self::HighestOddEvenSum,
            5 => Self::IndicesOfValue,
            6 => Self::ReplaceValue,
            7 => Self::SecondLargest,
            8 => Self::RemoveDuplicates,
            _ => return None,
        })
    }

    /// The number shown next to the label.
    #[must_use]
    pub const fn index(self) -> i32 {
        self as i32
    }

    /// Human-readable menu label.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Terminate => "Terminate Program",
            Self::Populate => "Add value/s to the array",
            Self::ShowAll => "Show all values of the array",
            Self::Clear => "Remove all elements",
            Self::HighestOddEvenSum => "Get sum of highest odd and even",
            Self::IndicesOfValue => "Display indices of a value",
            Self::ReplaceValue => "Replace elements with new value",
            Self::SecondLargest => "Show second largest element",
            Self::RemoveDuplicates => "Remove duplicate elements",
        }
    }

    /// Highest index a user may type.
    #[must_use]
    pub const fn max_index() -> i32 {
        Self::RemoveDuplicates as i32
    }
}

impl fmt::Display for MenuAction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}] {}", self.index(), self.label())
    }
}

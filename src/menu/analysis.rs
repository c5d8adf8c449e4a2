//! Computations behind the inspecting and transforming menu actions.
//!
//! Both "highest" queries apply duplicate-tie rejection: a maximum that another
//! element equals is not reported as a valid answer. For the odd/even sum the
//! tied maximum is reported as recurring; for the second largest the query
//! reports that no valid value exists.

use crate::collection::dynamic_array::DynamicArray;
use crate::core::errors::Result;

/// Which half of the odd/even split a value belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Parity {
    /// Odd values, negatives included.
    Odd,
    /// Even values, zero included.
    Even,
}

impl Parity {
    /// Parity of `value`.
    #[must_use]
    pub const fn of(value: i32) -> Self {
        if value & 1 == 1 { Self::Odd } else { Self::Even }
    }

    /// Lowercase name used in messages.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Odd => "odd",
            Self::Even => "even",
        }
    }
}

/// Result of [`highest_odd_even_sum`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ParityOutcome {
    /// Fewer than two elements.
    TooFewElements,
    /// No value of this parity is present.
    MissingParity(Parity),
    /// Both maxima are unique.
    Sum {
        /// Highest odd value.
        odd: i32,
        /// Highest even value.
        even: i32,
        /// `odd + even`, widened so it cannot overflow.
        sum: i64,
    },
    /// At least one maximum is tied; `Some` marks each recurring maximum.
    Recurring {
        /// The odd maximum, if another element ties it.
        odd: Option<i32>,
        /// The even maximum, if another element ties it.
        even: Option<i32>,
    },
}

/// Result of [`second_largest_distinct`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SecondLargest {
    /// Fewer than two elements.
    TooFewElements,
    /// The unique greatest value below the maximum.
    Found(i32),
    /// Every value equals the maximum, or the runner-up is tied.
    NoValidValue,
}

#[derive(Debug, Clone, Copy)]
struct RunningMax {
    value: i32,
    unique: bool,
}

impl RunningMax {
    const fn seed(value: i32) -> Self {
        Self {
            value,
            unique: true,
        }
    }

    fn observe(&mut self, value: i32, parity: Parity) {
        if Parity::of(value) == parity && value > self.value {
            *self = Self::seed(value);
        } else if value == self.value {
            self.unique = false;
        }
    }
}

/// Highest odd value plus highest even value, with duplicate-tie rejection.
///
/// The first odd and the first even element seed the two maxima. Every other
/// element then either raises the maximum of its parity (which is unique
/// again) or, when it equals a current maximum, marks that maximum recurring.
pub fn highest_odd_even_sum(array: &DynamicArray) -> ParityOutcome {
    let values = array.as_slice();
    if values.len() < 2 {
        return ParityOutcome::TooFewElements;
    }

    let first_odd = values.iter().position(|&v| Parity::of(v) == Parity::Odd);
    let first_even = values.iter().position(|&v| Parity::of(v) == Parity::Even);
    let (odd_index, even_index) = match (first_odd, first_even) {
        (Some(odd), Some(even)) => (odd, even),
        (None, _) => return ParityOutcome::MissingParity(Parity::Odd),
        (_, None) => return ParityOutcome::MissingParity(Parity::Even),
    };

    let mut odd = RunningMax::seed(values[odd_index]);
    let mut even = RunningMax::seed(values[even_index]);
    for (i, &value) in values.iter().enumerate() {
        if i == odd_index || i == even_index {
            continue;
        }
        odd.observe(value, Parity::Odd);
        even.observe(value, Parity::Even);
    }

    if odd.unique && even.unique {
        ParityOutcome::Sum {
            odd: odd.value,
            even: even.value,
            sum: i64::from(odd.value) + i64::from(even.value),
        }
    } else {
        ParityOutcome::Recurring {
            odd: (!odd.unique).then_some(odd.value),
            even: (!even.unique).then_some(even.value),
        }
    }
}

/// Every index holding `target`, ascending.
#[must_use]
pub fn indices_of(array: &DynamicArray, target: i32) -> Vec<usize> {
    array
        .iter()
        .enumerate()
        .filter_map(|(i, &v)| (v == target).then_some(i))
        .collect()
}

/// Overwrite every occurrence of `old` with `new`; returns how many changed.
pub fn replace_all(array: &mut DynamicArray, old: i32, new: i32) -> Result<usize> {
    let mut replaced = 0;
    for i in 0..array.len() {
        if array.get(i)? == old {
            array.set(i, new)?;
            replaced += 1;
        }
    }
    Ok(replaced)
}

/// Greatest value strictly below the maximum, valid only if no other element ties it.
pub fn second_largest_distinct(array: &DynamicArray) -> SecondLargest {
    let values = array.as_slice();
    let Some(&largest) = values.iter().max().filter(|_| values.len() >= 2) else {
        return SecondLargest::TooFewElements;
    };

    let mut candidate: Option<i32> = None;
    let mut tied = false;
    for &value in values.iter().filter(|&&v| v < largest) {
        match candidate {
            Some(current) if value == current => tied = true,
            Some(current) if value < current => {}
            _ => {
                candidate = Some(value);
                tied = false;
            }
        }
    }

    match candidate {
        Some(value) if !tied => SecondLargest::Found(value),
        _ => SecondLargest::NoValidValue,
    }
}

/// Keep only the first occurrence of each value, in first-occurrence order.
///
/// Later duplicates are removed one at a time with a left shift, so the
/// position just vacated is checked again. Returns the number removed.
pub fn remove_duplicates(array: &mut DynamicArray) -> Result<usize> {
    let original = array.len();
    let mut i = 0;
    while i < array.len() {
        let current = array.get(i)?;
        let mut j = i + 1;
        while j < array.len() {
            if array.get(j)? == current {
                array.remove(j)?;
            } else {
                j += 1;
            }
        }
        i += 1;
    }
    Ok(original - array.len())
}

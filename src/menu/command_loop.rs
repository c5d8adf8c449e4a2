//! Interactive command loop: menu display, choice validation, and dispatch.
//!
//! The loop owns the session's only [`DynamicArray`] and a [`Terminal`]. It
//! starts by running the populate action, then repeats menu → choice →
//! action until the user confirms termination or the input stream ends.
//!
//! State machine:
//!
//! ```text
//! Running ──(choice 0, confirmed)──▶ Terminating ──▶ Stopped
//!    │  ▲                                               ▲
//!    │  └──(choice 0, declined / any action)            │
//!    └──────────────────(input closed)──────────────────┘
//! ```

use crate::collection::dynamic_array::DynamicArray;
use crate::console::prompt::{self, InputClosed, enter_prompt, message};
use crate::console::tag::ConsoleTag;
use crate::console::terminal::Terminal;
use crate::core::config::Config;
use crate::core::errors::{ArrError, Result};
use crate::menu::action::MenuAction;
use crate::menu::analysis::{self, ParityOutcome, SecondLargest};

const PROGRAM_NAME: &str = "Dynamic Array Menu Options";

/// Lifecycle of a session.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoopState {
    /// Showing the menu and handling choices.
    Running,
    /// Exit confirmed; no further choices are read.
    Terminating,
    /// Session over.
    Stopped,
}

/// Reasons the loop stops early.
#[derive(Debug)]
enum Interrupt {
    Closed,
    Fault(ArrError),
}

impl From<InputClosed> for Interrupt {
    fn from(_: InputClosed) -> Self {
        Self::Closed
    }
}

impl From<ArrError> for Interrupt {
    fn from(err: ArrError) -> Self {
        Self::Fault(err)
    }
}

/// Menu-driven session over one dynamic array.
#[derive(Debug)]
pub struct CommandLoop<T> {
    term: T,
    array: DynamicArray,
    max_elements: usize,
    banner: bool,
    state: LoopState,
}

impl<T: Terminal> CommandLoop<T> {
    /// Session with an empty array sized from `config`.
    pub fn new(term: T, config: &Config) -> Self {
        Self::with_array(
            term,
            DynamicArray::with_capacity(config.array.initial_capacity),
            config,
        )
    }

    /// Session over an existing array.
    pub fn with_array(term: T, array: DynamicArray, config: &Config) -> Self {
        Self {
            term,
            array,
            max_elements: config.array.max_elements,
            banner: config.console.banner,
            state: LoopState::Running,
        }
    }

    /// The session's array.
    pub fn array(&self) -> &DynamicArray {
        &self.array
    }

    /// Current lifecycle state.
    pub fn state(&self) -> LoopState {
        self.state
    }

    /// Give back the terminal and the array.
    pub fn into_parts(self) -> (T, DynamicArray) {
        (self.term, self.array)
    }

    /// Run the session to completion.
    ///
    /// End of input stops the session normally. An error is returned only for
    /// an internal fault such as an out-of-bounds array access.
    pub fn run(&mut self) -> Result<()> {
        let outcome = self.drive();
        self.state = LoopState::Stopped;
        match outcome {
            Ok(()) => {}
            Err(Interrupt::Closed) => {
                message(&mut self.term, ConsoleTag::System, "Input closed, ending session");
            }
            Err(Interrupt::Fault(err)) => return Err(err),
        }
        if self.banner {
            self.term
                .write("\nThank you for using the program!!\n");
        }
        Ok(())
    }

    fn drive(&mut self) -> std::result::Result<(), Interrupt> {
        self.populate()?;
        if self.banner {
            self.term.write("\nDynamic Array Console Program!!");
        }

        while self.state == LoopState::Running {
            self.show_menu();
            enter_prompt(&mut self.term, "choice");
            let choice = prompt::read_int_in_range(&mut self.term, 0, MenuAction::max_index())?;
            self.dispatch(choice)?;
        }
        Ok(())
    }

    fn show_menu(&mut self) {
        self.term
            .write(&format!("\n\n======== {PROGRAM_NAME} ========"));
        for action in MenuAction::DISPLAY_ORDER {
            self.term.write(&format!("\n{action}"));
        }
    }

    fn dispatch(&mut self, choice: i32) -> std::result::Result<(), Interrupt> {
        let Some(action) = MenuAction::from_index(choice) else {
            message(
                &mut self.term,
                ConsoleTag::Debug,
                &format!("No set action for index {choice}"),
            );
            return Ok(());
        };

        match action {
            MenuAction::Terminate => {
                if self.confirm_exit()? {
                    self.state = LoopState::Terminating;
                }
            }
            MenuAction::Populate => self.populate()?,
            MenuAction::ShowAll => self.show_all(),
            MenuAction::Clear => self.clear(),
            MenuAction::HighestOddEvenSum => self.highest_odd_even_sum(),
            MenuAction::IndicesOfValue => self.indices_of_value()?,
            MenuAction::ReplaceValue => {
                self.show_all();
                self.replace_value()?;
            }
            MenuAction::SecondLargest => {
                self.show_all();
                self.second_largest();
            }
            MenuAction::RemoveDuplicates => self.remove_duplicates()?,
        }
        Ok(())
    }

    fn confirm_exit(&mut self) -> std::result::Result<bool, InputClosed> {
        message(&mut self.term, ConsoleTag::System, "Exit the program?");
        self.term.write("\n[1] YES\n[0] NO");
        enter_prompt(&mut self.term, "choice");
        prompt::read_bool(&mut self.term)
    }

    fn populate(&mut self) -> std::result::Result<(), InputClosed> {
        enter_prompt(&mut self.term, "number of values");
        let available = self.max_elements.saturating_sub(self.array.len());
        let bound = i32::try_from(available).unwrap_or(i32::MAX);
        let count = prompt::read_int_in_range(&mut self.term, 0, bound)?;

        for i in 0..count {
            enter_prompt(&mut self.term, &format!("index [{i}]"));
            let value = prompt::read_int(&mut self.term)?;
            self.array.add(value);
        }
        Ok(())
    }

    fn show_all(&mut self) {
        message(&mut self.term, ConsoleTag::Info, "Showing integers in the array");
        if self.array.is_empty() {
            message(
                &mut self.term,
                ConsoleTag::Info,
                "There are no elements in the array",
            );
            return;
        }
        self.term.write(&format!("\n{}", self.array));
    }

    fn clear(&mut self) {
        message(
            &mut self.term,
            ConsoleTag::Info,
            "Removing all elements from the array",
        );
        self.array.clear();
    }

    fn highest_odd_even_sum(&mut self) {
        match analysis::highest_odd_even_sum(&self.array) {
            ParityOutcome::TooFewElements => self.require_input(),
            ParityOutcome::MissingParity(parity) => message(
                &mut self.term,
                ConsoleTag::System,
                &format!("No {} numbers in the array", parity.name()),
            ),
            ParityOutcome::Sum { odd, even, sum } => {
                message(
                    &mut self.term,
                    ConsoleTag::Info,
                    "Successfully got the sum of highest odd and even",
                );
                self.term.write(&format!(
                    "\nHighest Odd: {odd}\nHighest Even: {even}\nSum of the two: {sum}"
                ));
            }
            ParityOutcome::Recurring { odd, even } => {
                message(&mut self.term, ConsoleTag::Info, "Unable to display sum");
                if let Some(odd) = odd {
                    self.term
                        .write(&format!("\nRecurring highest odd number: {odd}"));
                }
                if let Some(even) = even {
                    self.term
                        .write(&format!("\nRecurring highest even number: {even}"));
                }
            }
        }
    }

    fn indices_of_value(&mut self) -> std::result::Result<(), InputClosed> {
        if self.array.is_empty() {
            self.require_input();
            return Ok(());
        }
        enter_prompt(&mut self.term, "an element to find indices");
        let target = prompt::read_int(&mut self.term)?;

        let indices = analysis::indices_of(&self.array, target);
        if indices.is_empty() {
            message(
                &mut self.term,
                ConsoleTag::System,
                &format!("There are no occurrences of the target value {target}"),
            );
            return Ok(());
        }
        let listed: Vec<String> = indices.iter().map(ToString::to_string).collect();
        self.term
            .write(&format!("\nElement found at indices: {}", listed.join(" ")));
        Ok(())
    }

    fn replace_value(&mut self) -> std::result::Result<(), Interrupt> {
        if self.array.is_empty() {
            self.require_input();
            return Ok(());
        }
        enter_prompt(&mut self.term, "an existing value");
        let old = prompt::read_int(&mut self.term)?;
        if !self.array.contains(old) {
            self.term.write(&format!("\nValue {old} is not found"));
            return Ok(());
        }

        enter_prompt(&mut self.term, "new value");
        let new = prompt::read_int(&mut self.term)?;
        if analysis::replace_all(&mut self.array, old, new)? > 0 {
            self.term
                .write(&format!("\nAll occurrences of {old} replaced with {new}"));
        }
        Ok(())
    }

    fn second_largest(&mut self) {
        match analysis::second_largest_distinct(&self.array) {
            SecondLargest::TooFewElements => message(
                &mut self.term,
                ConsoleTag::System,
                "Not enough elements to find second largest",
            ),
            SecondLargest::NoValidValue => message(
                &mut self.term,
                ConsoleTag::System,
                "No valid second largest element",
            ),
            SecondLargest::Found(value) => message(
                &mut self.term,
                ConsoleTag::Info,
                &format!("Second largest element: {value}"),
            ),
        }
    }

    fn remove_duplicates(&mut self) -> Result<()> {
        if self.array.len() < 2 {
            message(
                &mut self.term,
                ConsoleTag::System,
                "Only 0-1 elements are present, Cannot perform duplicate removal process",
            );
            return Ok(());
        }
        let removed = analysis::remove_duplicates(&mut self.array)?;
        message(
            &mut self.term,
            ConsoleTag::System,
            &format!("Removed {removed} elements"),
        );
        Ok(())
    }

    fn require_input(&mut self) {
        message(
            &mut self.term,
            ConsoleTag::System,
            "Input value/s in the array first",
        );
    }
}

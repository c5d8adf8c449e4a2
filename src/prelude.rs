//! Convenience re-exports for library consumers.
//!
//! ```rust,no_run
//! use array_console::prelude::*;
//! ```

// Core
pub use crate::core::config::Config;
pub use crate::core::errors::{ArrError, Result};

// Collection
pub use crate::collection::dynamic_array::DynamicArray;

// Console
pub use crate::console::tag::ConsoleTag;
pub use crate::console::terminal::{StreamTerminal, Terminal};

// Menu
pub use crate::menu::action::MenuAction;
pub use crate::menu::command_loop::{CommandLoop, LoopState};

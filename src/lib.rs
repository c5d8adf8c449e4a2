#![forbid(unsafe_code)]

//! Array Console (arrcon): interactive menu over a growable integer array.
//!
//! Two layers:
//! 1. **Dynamic array**: owned buffer with explicit capacity doubling and
//!    order-preserving removal
//! 2. **Command loop**: validated menu input dispatched to nine actions that
//!    populate, inspect, and transform the array
//!
//! # Library usage
//!
//! Use the [`prelude`] for convenient access to the most common types:
//!
//! ```rust,no_run
//! use array_console::prelude::*;
//!
//! let config = Config::load(None)?;
//! config.validate()?;
//! let mut session = CommandLoop::new(StreamTerminal::stdio(), &config);
//! session.run()?;
//! # Ok::<(), ArrError>(())
//! ```
//!
//! Individual modules can also be imported directly:
//!
//! ```rust,no_run
//! use array_console::collection::dynamic_array::DynamicArray;
//! use array_console::menu::analysis::{second_largest_distinct, SecondLargest};
//! ```

pub mod prelude;

pub mod collection;
pub mod console;
pub mod core;
pub mod menu;

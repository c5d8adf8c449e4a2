//! Menu surface: the action set, the computations behind it, and the loop that drives it.

pub mod action;
pub mod analysis;
pub mod command_loop;

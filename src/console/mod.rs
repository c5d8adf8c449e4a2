//! Console collaborator: terminal I/O, message tags, and validated prompts.

pub mod prompt;
pub mod tag;
pub mod terminal;

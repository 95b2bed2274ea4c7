//! Console output for transcript messages

pub mod renderer;

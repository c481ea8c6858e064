//! IRC plugin conventions: buffer naming and the commands that open them.

pub mod names;

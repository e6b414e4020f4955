mod filesystem;
mod memory;

pub(crate) use filesystem::*;
pub(crate) use memory::*;

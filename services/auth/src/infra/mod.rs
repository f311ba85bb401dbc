pub mod memory;
pub mod reaper;

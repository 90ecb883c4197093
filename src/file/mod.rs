pub mod patcher;
pub mod substitutions;
pub mod target;

pub mod backup;
pub mod extract;
pub mod process;

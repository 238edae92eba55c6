pub mod arrangement;
pub mod report;

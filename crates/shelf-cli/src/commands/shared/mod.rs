pub mod limit;
pub mod notice;

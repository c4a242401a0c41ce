pub mod describe;
pub mod invoke;
pub mod list;
pub mod validate;

pub mod apply;
pub mod directive;
pub mod driver;
pub mod interp;
pub mod time;

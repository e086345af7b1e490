pub mod date;
pub mod filename;
pub mod path;

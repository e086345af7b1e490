pub mod entry;
pub mod month;
pub mod profile;
pub mod record;

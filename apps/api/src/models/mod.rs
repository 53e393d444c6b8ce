pub mod resume;
pub mod saved;

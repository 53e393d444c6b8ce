// Saved resume drafts: several named copies of ResumeData per installation.

pub mod handlers;
pub mod service;

pub use service::DraftService;

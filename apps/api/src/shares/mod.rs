// Share snapshots: immutable public copies of a resume, addressed by an opaque id.

pub mod handlers;
pub mod service;

pub use service::ShareService;

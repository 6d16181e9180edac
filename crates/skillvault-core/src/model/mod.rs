pub mod certificate;
pub mod project;

pub use certificate::Certificate;
pub use project::ProjectReference;

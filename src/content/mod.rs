//! Content module - front matter, the post schema, and validation

mod frontmatter;
pub mod loader;
mod post;
pub mod schema;
mod validate;

pub use frontmatter::FrontMatter;
pub use post::{CreationType, PostRecord, PostType, PostVariant, ReviewDetails, ReviewTarget};
pub use schema::FieldViolation;
pub use validate::validate;

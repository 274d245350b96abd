//! Customer reviews.

pub mod comment;

pub use comment::Comment;

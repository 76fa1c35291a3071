pub mod documents;
pub mod me;

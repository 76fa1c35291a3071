pub mod bearer;
pub mod scope;

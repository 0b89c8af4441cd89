pub mod canonicalize;
pub mod convert;
pub mod reasons;
pub mod validate;

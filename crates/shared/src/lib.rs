pub mod domain;
pub mod validate;

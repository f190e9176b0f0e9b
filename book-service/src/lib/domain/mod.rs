pub mod book;
pub mod user;
pub mod validation;

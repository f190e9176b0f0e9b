pub mod book;
pub mod store;
pub mod user;

pub use book::JsonBookRepository;
pub use store::JsonStore;
pub use user::JsonUserRepository;

//! Library domain: users, registered books, reading progress, feelings

pub mod api;
pub mod domain;
pub mod repository;

// Re-export domain types at the crate root for convenience
pub use domain::entities::{Feeling, ReadingStatus, User, UserBook};
// Re-export repository types
pub use repository::{
    FeelingRepository, LibraryRepositories, NewFeeling, NewUserBook, UserBookChanges,
    UserBookRepository, UserRepository,
};

// Re-export API types
pub use api::routes;
pub use api::LibraryState;

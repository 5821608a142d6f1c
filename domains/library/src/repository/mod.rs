//! Repository implementations for the library domain
//!
//! Runtime `sqlx::query_as` throughout, so builds never need a live
//! database.

pub mod feelings;
pub mod user_books;
pub mod users;

use sqlx::PgPool;

pub use feelings::{FeelingRepository, NewFeeling};
pub use user_books::{NewUserBook, UserBookChanges, UserBookRepository};
pub use users::UserRepository;

/// Combined repository access for the library domain
#[derive(Clone)]
pub struct LibraryRepositories {
    pub users: UserRepository,
    pub user_books: UserBookRepository,
    pub feelings: FeelingRepository,
}

impl LibraryRepositories {
    pub fn new(pool: PgPool) -> Self {
        Self {
            users: UserRepository::new(pool.clone()),
            user_books: UserBookRepository::new(pool.clone()),
            feelings: FeelingRepository::new(pool),
        }
    }
}

pub mod category;
pub mod movie;
pub mod user;

pub use category::PostgresCategoryRepository;
pub use movie::PostgresMovieRepository;
pub use user::PostgresUserRepository;

pub mod article_repos;
pub mod time;
pub mod users;

pub use article_repos::InMemoryArticleStore;
pub use time::FixedClock;
pub use users::InMemoryUserDirectory;

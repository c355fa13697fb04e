#![allow(dead_code)]

pub mod builders;
pub mod mocks;

#[allow(unused_imports)]
pub use builders::{TestContext, actor, context, profile, seed_article};
#[allow(unused_imports)]
pub use mocks::{FixedClock, InMemoryArticleStore, InMemoryUserDirectory};

pub mod config;
pub mod error;
pub mod favorites;
pub mod feed_cache;
pub mod logging;
pub mod models;
pub mod repository;
pub mod state;
pub mod transport;

pub use config::RepositoryConfig;
pub use error::{ConfigError, RepositoryError, RepositoryResult};
pub use favorites::{FavoriteIds, FavoritesSet};
pub use feed_cache::{FeedCache, FeedSnapshot};
pub use models::{
    ImageRef, Markup, MarkupType, Metadata, Paragraph, ParagraphType, Post, PostAuthor, PostsFeed,
    Publication,
};
pub use repository::PostsRepository;
pub use state::{StateCell, Subscription};
pub use transport::{FeedTransport, HttpTransport, StaticTransport};

use std::future::Future;
use std::sync::Arc;

use tokio::runtime::Handle;
use tracing::{debug, warn};

use crate::config::RepositoryConfig;
use crate::error::{RepositoryError, RepositoryResult};
use crate::favorites::{FavoriteIds, FavoritesSet};
use crate::feed_cache::{FeedCache, FeedSnapshot};
use crate::models::{Post, PostsFeed};
use crate::state::Subscription;
use crate::transport::{FeedTransport, HttpTransport};

/// Remote posts feed plus the in-memory state derived from it.
///
/// Clones share the same feed cache and favorites.
#[derive(Clone)]
pub struct PostsRepository {
    transport: Arc<dyn FeedTransport>,
    api_url: Arc<str>,
    feed: FeedCache,
    favorites: FavoritesSet,
}

impl PostsRepository {
    pub fn new(transport: Arc<dyn FeedTransport>, api_url: impl Into<String>) -> Self {
        Self {
            transport,
            api_url: Arc::from(api_url.into().trim()),
            feed: FeedCache::new(),
            favorites: FavoritesSet::new(),
        }
    }

    pub fn http(config: &RepositoryConfig) -> Result<Self, reqwest::Error> {
        let client = config.build_client()?;
        Ok(Self::new(
            Arc::new(HttpTransport::new(client)),
            config.api_url.clone(),
        ))
    }

    pub fn api_url(&self) -> &str {
        &self.api_url
    }

    /// Fetches the feed once and, on success, replaces the cached snapshot with it.
    ///
    /// The fetch runs on its own task: dropping the returned future does not stop it,
    /// and a fetch that completes still lands in the cache. Outside a Tokio runtime
    /// this returns [`RepositoryError::NoRuntime`].
    pub async fn get_feed(&self) -> RepositoryResult<Arc<PostsFeed>> {
        let transport = Arc::clone(&self.transport);
        let url = Arc::clone(&self.api_url);
        let cache = self.feed.clone();
        let result = run_fetch(async move {
            debug!(url = %url, "fetching posts feed");
            let feed = Arc::new(transport.fetch_feed(&url).await?);
            cache.replace(Arc::clone(&feed));
            debug!(url = %url, posts = feed.all_posts().count(), "posts feed cached");
            Ok::<_, RepositoryError>(feed)
        })
        .await;
        if let Err(err) = &result {
            warn!(url = %self.api_url, error = %err, "failed to fetch posts feed");
        }
        result
    }

    /// Fetches the feed and returns the first post whose id is `post_id`.
    ///
    /// Does not consult nor update the feed cache.
    pub async fn get_post(&self, post_id: &str) -> RepositoryResult<Post> {
        let transport = Arc::clone(&self.transport);
        let url = Arc::clone(&self.api_url);
        let feed = match run_fetch(async move { transport.fetch_feed(&url).await }).await {
            Ok(feed) => feed,
            Err(err) => {
                warn!(url = %self.api_url, post_id, error = %err, "failed to fetch post");
                return Err(err);
            }
        };

        match feed.find_post(post_id) {
            Some(post) => Ok(post.clone()),
            None => {
                debug!(post_id, "post not present in fetched feed");
                Err(RepositoryError::NotFound(post_id.to_owned()))
            }
        }
    }

    pub fn observe_feed(&self) -> Subscription<FeedSnapshot> {
        self.feed.observe()
    }

    pub fn observe_favorites(&self) -> Subscription<FavoriteIds> {
        self.favorites.observe()
    }

    /// Flips the favorite flag of `post_id`; returns whether it is now a favorite.
    pub fn toggle_favorite(&self, post_id: &str) -> bool {
        self.favorites.toggle(post_id)
    }

    pub fn is_favorite(&self, post_id: &str) -> bool {
        self.favorites.contains(post_id)
    }

    pub fn favorites(&self) -> FavoriteIds {
        self.favorites.snapshot()
    }

    pub fn current_feed(&self) -> FeedSnapshot {
        self.feed.current()
    }
}

/// Runs `fetch` on its own task of the current runtime and waits for it.
async fn run_fetch<T, F>(fetch: F) -> RepositoryResult<T>
where
    T: Send + 'static,
    F: Future<Output = RepositoryResult<T>> + Send + 'static,
{
    let handle = Handle::try_current()?;
    handle.spawn(fetch).await?
}

#![allow(dead_code)]

use std::collections::VecDeque;
use std::sync::Mutex;

use async_trait::async_trait;
use posts_core::{FeedTransport, PostsFeed, RepositoryResult};
use serde_json::{json, Value};
use tokio::sync::oneshot;

pub fn post_json(id: &str, title: &str) -> Value {
    json!({
        "id": id,
        "title": title,
        "subtitle": "A subtitle",
        "url": format!("https://medium.com/p/{id}"),
        "publication": { "name": "Android Developers", "logoUrl": "https://example.com/logo.png" },
        "metadata": {
            "author": { "name": "Florina Muntenescu", "url": "https://medium.com/@florina.muntenescu" },
            "date": "July 09",
            "readTimeMinutes": 1
        },
        "paragraphs": [
            { "type": "Text", "text": "Hello", "markups": [ { "type": "Bold", "start": 0, "end": 5 } ] },
            { "type": "CodeBlock", "text": "fn main() {}" }
        ],
        "imageId": 2131165313,
        "imageThumbId": "https://example.com/thumb.png"
    })
}

pub fn feed_json(ids: &[&str]) -> Value {
    let (highlighted, rest) = ids.split_first().expect("at least one post");
    let rest: Vec<Value> = rest.iter().map(|id| post_json(id, &format!("Post {id}"))).collect();
    json!({
        "highlightedPost": post_json(highlighted, &format!("Post {highlighted}")),
        "recommendedPosts": rest,
        "popularPosts": [],
        "recentPosts": []
    })
}

pub fn sample_feed(ids: &[&str]) -> PostsFeed {
    serde_json::from_value(feed_json(ids)).expect("valid feed")
}

/// Transport whose fetches block until their gate is released.
///
/// Gates and feeds are handed out in call order.
pub struct GatedTransport {
    pending: Mutex<VecDeque<(oneshot::Receiver<()>, PostsFeed)>>,
}

impl GatedTransport {
    pub fn new(feeds: Vec<PostsFeed>) -> (Self, Vec<oneshot::Sender<()>>) {
        let mut pending = VecDeque::new();
        let mut gates = Vec::new();
        for feed in feeds {
            let (tx, rx) = oneshot::channel();
            pending.push_back((rx, feed));
            gates.push(tx);
        }
        (
            Self {
                pending: Mutex::new(pending),
            },
            gates,
        )
    }
}

#[async_trait]
impl FeedTransport for GatedTransport {
    async fn fetch_feed(&self, _url: &str) -> RepositoryResult<PostsFeed> {
        let (gate, feed) = self
            .pending
            .lock()
            .unwrap()
            .pop_front()
            .expect("unexpected fetch");
        gate.await.expect("gate dropped");
        Ok(feed)
    }
}

/// Transport whose fetch task panics.
pub struct PanickingTransport;

#[async_trait]
impl FeedTransport for PanickingTransport {
    async fn fetch_feed(&self, url: &str) -> RepositoryResult<PostsFeed> {
        panic!("transport blew up fetching {url}");
    }
}

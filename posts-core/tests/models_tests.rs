mod common;

use posts_core::{ImageRef, ParagraphType, PostsFeed};
use serde_json::json;

use common::{post_json, sample_feed};

#[test]
fn all_posts_flattens_sections_in_order() {
    let feed: PostsFeed = serde_json::from_value(json!({
        "highlightedPost": post_json("h", "Highlighted"),
        "recommendedPosts": [post_json("r1", "R1"), post_json("r2", "R2")],
        "popularPosts": [post_json("pop", "Popular")],
        "recentPosts": [post_json("new", "Recent")]
    }))
    .unwrap();

    let ids: Vec<&str> = feed.all_posts().map(|post| post.id.as_str()).collect();
    assert_eq!(ids, ["h", "r1", "r2", "pop", "new"]);
}

#[test]
fn missing_sections_default_to_empty() {
    let feed: PostsFeed =
        serde_json::from_value(json!({ "highlightedPost": post_json("only", "Only") })).unwrap();
    assert_eq!(feed.all_posts().count(), 1);
    assert!(feed.find_post("only").is_some());
}

#[test]
fn find_post_returns_first_match() {
    let mut feed = sample_feed(&["p1", "dup"]);
    let mut second = feed.recommended_posts[0].clone();
    second.title = "Second dup".into();
    feed.recent_posts.push(second);

    assert_eq!(feed.find_post("dup").unwrap().title, "Post dup");
    assert!(feed.find_post("missing").is_none());
}

#[test]
fn post_content_is_decoded() {
    let feed = sample_feed(&["p1"]);
    let post = &feed.highlighted_post;
    assert_eq!(post.paragraphs[0].kind, ParagraphType::Text);
    assert_eq!(post.paragraphs[0].markups.len(), 1);
    assert_eq!(post.paragraphs[1].kind, ParagraphType::CodeBlock);
    assert!(post.paragraphs[1].markups.is_empty());
    assert_eq!(post.image_id, Some(ImageRef::Resource(2131165313)));
    assert_eq!(
        post.image_thumb_id,
        Some(ImageRef::Url("https://example.com/thumb.png".into()))
    );
    assert_eq!(post.publication.as_ref().unwrap().logo_url, "https://example.com/logo.png");
}

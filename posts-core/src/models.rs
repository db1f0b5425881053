use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub enum ParagraphType {
    Title,
    Caption,
    Header,
    Subhead,
    Text,
    CodeBlock,
    Quote,
    Bullet,
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub enum MarkupType {
    Link,
    Code,
    Italic,
    Bold,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Markup {
    #[serde(rename = "type")]
    pub kind: MarkupType,
    pub start: usize,
    pub end: usize,
    #[serde(default)]
    pub href: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Paragraph {
    #[serde(rename = "type")]
    pub kind: ParagraphType,
    pub text: String,
    #[serde(default)]
    pub markups: Vec<Markup>,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct PostAuthor {
    pub name: String,
    #[serde(default)]
    pub url: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct Publication {
    pub name: String,
    #[serde(default)]
    pub logo_url: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct Metadata {
    pub author: PostAuthor,
    #[serde(default)]
    pub date: String,
    #[serde(default)]
    pub read_time_minutes: u32,
}

/// Images are either bundled resources (numeric id) or remote URLs.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(untagged)]
pub enum ImageRef {
    Resource(i64),
    Url(String),
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct Post {
    pub id: String,
    pub title: String,
    #[serde(default)]
    pub subtitle: Option<String>,
    #[serde(default)]
    pub url: String,
    #[serde(default)]
    pub publication: Option<Publication>,
    pub metadata: Metadata,
    #[serde(default)]
    pub paragraphs: Vec<Paragraph>,
    #[serde(default)]
    pub image_id: Option<ImageRef>,
    #[serde(default)]
    pub image_thumb_id: Option<ImageRef>,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct PostsFeed {
    pub highlighted_post: Post,
    #[serde(default)]
    pub recommended_posts: Vec<Post>,
    #[serde(default)]
    pub popular_posts: Vec<Post>,
    #[serde(default)]
    pub recent_posts: Vec<Post>,
}

impl PostsFeed {
    /// Flattened view: highlighted, recommended, popular, then recent.
    pub fn all_posts(&self) -> impl Iterator<Item = &Post> {
        std::iter::once(&self.highlighted_post)
            .chain(self.recommended_posts.iter())
            .chain(self.popular_posts.iter())
            .chain(self.recent_posts.iter())
    }

    /// First post carrying `post_id`, in `all_posts` order.
    pub fn find_post(&self, post_id: &str) -> Option<&Post> {
        self.all_posts().find(|post| post.id == post_id)
    }
}

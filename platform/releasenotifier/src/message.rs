use serde::Serialize;

/// Body of a Discord "execute webhook" request.
#[derive(Debug, Serialize, PartialEq)]
pub struct Payload {
    pub content: String,
}

impl Payload {
    pub fn new(content: &str) -> Self {
        Self {
            content: content.to_string(),
        }
    }
}

/// Announcement text for a release. Values are inserted as-is, Markdown included.
pub fn render(tag: &str, body: &str, url: &str) -> String {
    format!("Hello @everyone, new release **{tag}** is out 🚀 \n{body} \n[View Release]({url})")
}

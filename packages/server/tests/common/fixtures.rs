//! Post collections shared by the integration tests.

use quickfetch_core::domains::posts::PostRecord;
use quickfetch_core::kernel::sample_posts;

/// Ten posts where exactly one mentions cooking.
pub fn demo_posts() -> Vec<PostRecord> {
    let mut posts = sample_posts(10);
    posts[0] = PostRecord::new(1, "How to Cook", "Kitchen basics for beginners", 1);
    posts[1] = PostRecord::new(2, "Travel Tips", "Pack light and plan ahead", 1);
    posts[2] = PostRecord::new(3, "Gardening Notes", "Tomatoes need sun", 1);
    posts
}

/// Raw source payload in the remote API's shape (`userId`, extra fields ignored).
pub fn source_payload(count: usize) -> String {
    let items: Vec<serde_json::Value> = (1..=count)
        .map(|i| {
            serde_json::json!({
                "userId": (i - 1) / 10 + 1,
                "id": i,
                "title": format!("title {}", i),
                "body": format!("body {}", i),
            })
        })
        .collect();
    serde_json::Value::Array(items).to_string()
}

use grab_engine::parse_listing;
use pretty_assertions::assert_eq;
use serde_json::json;

fn entry(domain: &str, post_hint: Option<&str>, url: &str) -> serde_json::Value {
    json!({
        "data": {
            "title": "A title",
            "domain": domain,
            "id": "t3_x",
            "author": "poster",
            "permalink": "/r/pics/comments/x/a_title/",
            "post_hint": post_hint,
            "url": url,
            "subreddit": "pics"
        }
    })
}

fn listing(children: Vec<serde_json::Value>) -> Vec<u8> {
    serde_json::to_vec(&json!({ "data": { "after": "t3_next", "children": children } })).unwrap()
}

#[test]
fn keeps_imgur_and_image_hinted_direct_links_in_order() {
    let bytes = listing(vec![
        entry("i.imgur.com", None, "https://i.imgur.com/first.jpg"),
        entry("i.redd.it", Some("image"), "https://i.redd.it/second.png"),
        entry("youtube.com", Some("rich:video"), "https://youtube.com/watch.mp4"),
        entry("imgur.com", None, "https://imgur.com/a/gallery"),
    ]);

    let parsed = parse_listing(&bytes).unwrap();
    let ids: Vec<_> = parsed
        .candidates()
        .into_iter()
        .map(|image| image.image_id)
        .collect();

    assert_eq!(ids, vec!["first".to_string(), "second".to_string()]);
    assert_eq!(parsed.after(), Some("t3_next"));
}

#[test]
fn candidate_carries_post_metadata() {
    let bytes = listing(vec![entry("i.imgur.com", None, "https://i.imgur.com/abc.gifv")]);

    let image = parse_listing(&bytes).unwrap().candidates().remove(0);

    assert_eq!(image.id, "t3_x");
    assert_eq!(image.image_id, "abc");
    assert_eq!(image.link, "https://i.imgur.com/abc.gifv");
    assert_eq!(image.rewritten_link, None);
    assert_eq!(image.feed, "pics");
    assert_eq!(image.author.name, "poster");
    assert_eq!(image.author.link, "https://www.reddit.com/user/poster/");
    assert_eq!(image.title, "A title");
    assert_eq!(image.post_link, "/r/pics/comments/x/a_title/");
    assert_eq!(image.source, "i.imgur.com");
}

#[test]
fn missing_fields_are_tolerated() {
    let bytes = serde_json::to_vec(&json!({
        "data": { "children": [
            { "data": { "domain": "i.imgur.com" } },
            { "data": { "url": "https://i.imgur.com/only-url.jpg", "domain": "i.imgur.com" } },
            {},
            { "data": { "url": "https://i.imgur.com/.jpg", "domain": "i.imgur.com" } }
        ] }
    }))
    .unwrap();

    let candidates = parse_listing(&bytes).unwrap().candidates();

    assert_eq!(candidates.len(), 1);
    assert_eq!(candidates[0].image_id, "only-url");
    assert_eq!(candidates[0].title, "");
}

#[test]
fn empty_body_and_missing_data_yield_no_candidates() {
    assert!(parse_listing(b"").unwrap().candidates().is_empty());
    assert!(parse_listing(b"  \n").unwrap().candidates().is_empty());
    assert!(parse_listing(b"{}").unwrap().candidates().is_empty());
}

#[test]
fn malformed_body_is_a_parse_error() {
    assert!(parse_listing(b"<html>rate limited</html>").is_err());
}

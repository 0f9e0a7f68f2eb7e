//! Plain-text rendering of search results
//!
//! The output is meant to be read by an agent or a person in a chat window,
//! so it is a fixed line-oriented layout rather than JSON.

use chrono::{DateTime, Utc};

use super::types::{Post, Section};

const HEADER: &str = "=== Twitter Search Results ===";
const UNKNOWN: &str = "unknown";

/// Upstream timestamp layout, e.g. `Mon Oct 14 12:00:00 +0000 2024`
const UPSTREAM_TIMESTAMP_FORMAT: &str = "%a %b %d %H:%M:%S %z %Y";

/// Render a list of posts for the given (already normalized) query.
pub fn format_results(query: &str, section: Section, posts: &[Post]) -> String {
    if posts.is_empty() {
        return format!("No tweets found for query: {query}");
    }

    let mut output = vec![
        HEADER.to_string(),
        format!("Query: {query}"),
        format!("Section: {section}"),
        format!("Found {} tweets\n", posts.len()),
    ];

    for (index, post) in posts.iter().enumerate() {
        push_post(&mut output, index + 1, post);
    }

    output.join("\n")
}

fn push_post(output: &mut Vec<String>, position: usize, post: &Post) {
    let username = post.username().unwrap_or(UNKNOWN);
    let name = post.display_name().unwrap_or(UNKNOWN);

    output.push(format!("[{position}] @{username} ({name})"));
    output.push(post.text.clone().unwrap_or_default());
    output.push(format!(
        "❤️ {} | 🔄 {} | 💬 {}",
        post.favorite_count.unwrap_or(0),
        post.retweet_count.unwrap_or(0),
        post.reply_count.unwrap_or(0)
    ));
    output.push(format!(
        "Posted: {}",
        format_timestamp(post.creation_date.as_deref())
    ));

    if let Some(media) = post.media_url.as_ref().filter(|m| !m.is_empty()) {
        output.push(format!("Media: {}", media.join(", ")));
    }

    output.push(format!(
        "URL: https://twitter.com/{username}/status/{}",
        post.tweet_id.as_deref().unwrap_or_default()
    ));
    output.push(String::new());
}

/// Format a creation timestamp as `M/D/YYYY, h:mm:ss AM` in UTC.
///
/// Unparseable input is returned verbatim.
fn format_timestamp(raw: Option<&str>) -> String {
    let Some(raw) = raw else {
        return "Invalid Date".to_string();
    };

    match parse_timestamp(raw) {
        Some(datetime) => datetime.format("%-m/%-d/%Y, %-I:%M:%S %p").to_string(),
        None => raw.to_string(),
    }
}

fn parse_timestamp(raw: &str) -> Option<DateTime<Utc>> {
    let raw = raw.trim();

    if let Ok(dt) = DateTime::parse_from_str(raw, UPSTREAM_TIMESTAMP_FORMAT) {
        return Some(dt.with_timezone(&Utc));
    }
    if let Ok(dt) = DateTime::parse_from_rfc3339(raw) {
        return Some(dt.with_timezone(&Utc));
    }
    raw.parse::<i64>()
        .ok()
        .and_then(|secs| DateTime::from_timestamp(secs, 0))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::twitter::types::PostAuthor;

    fn post(id: &str, username: &str, text: &str) -> Post {
        Post {
            tweet_id: Some(id.to_string()),
            user: Some(PostAuthor {
                username: Some(username.to_string()),
                name: Some(format!("{username} name")),
            }),
            text: Some(text.to_string()),
            favorite_count: Some(5),
            retweet_count: Some(2),
            reply_count: Some(1),
            creation_date: Some("Mon Oct 14 12:00:00 +0000 2024".to_string()),
            media_url: None,
        }
    }

    #[test]
    fn test_empty_results() {
        assert_eq!(
            format_results("(from:nobody)", Section::Latest, &[]),
            "No tweets found for query: (from:nobody)"
        );
    }

    #[test]
    fn test_single_post_layout() {
        let output = format_results("rust", Section::Top, &[post("42", "ferris", "hello crab")]);
        let expected = "=== Twitter Search Results ===\n\
                        Query: rust\n\
                        Section: top\n\
                        Found 1 tweets\n\
                        \n\
                        [1] @ferris (ferris name)\n\
                        hello crab\n\
                        ❤️ 5 | 🔄 2 | 💬 1\n\
                        Posted: 10/14/2024, 12:00:00 PM\n\
                        URL: https://twitter.com/ferris/status/42\n";
        assert_eq!(output, expected);
    }

    #[test]
    fn test_posts_keep_input_order() {
        let posts = vec![
            post("3", "third", "c"),
            post("1", "first", "a"),
            post("2", "second", "b"),
        ];
        let output = format_results("q", Section::Latest, &posts);

        assert!(output.contains("Found 3 tweets"));
        let first = output.find("[1] @third").unwrap();
        let second = output.find("[2] @first").unwrap();
        let third = output.find("[3] @second").unwrap();
        assert!(first < second && second < third);
    }

    #[test]
    fn test_missing_counts_render_as_zero() {
        let mut p = post("7", "quiet", "nobody saw this");
        p.favorite_count = None;
        p.retweet_count = None;
        p.reply_count = None;

        let output = format_results("q", Section::Latest, &[p]);
        assert!(output.contains("❤️ 0 | 🔄 0 | 💬 0"));
    }

    #[test]
    fn test_media_line_only_when_present() {
        let mut with_media = post("1", "pics", "look");
        with_media.media_url = Some(vec![
            "https://pbs.twimg.com/a.jpg".to_string(),
            "https://pbs.twimg.com/b.jpg".to_string(),
        ]);
        let mut empty_media = post("2", "nopics", "nothing");
        empty_media.media_url = Some(vec![]);

        let output = format_results("q", Section::Latest, &[with_media]);
        assert!(output.contains("Media: https://pbs.twimg.com/a.jpg, https://pbs.twimg.com/b.jpg"));

        let output = format_results("q", Section::Latest, &[empty_media]);
        assert!(!output.contains("Media:"));
    }

    #[test]
    fn test_missing_author_and_id_are_defaulted() {
        let bare = Post {
            text: Some("orphan".to_string()),
            ..Default::default()
        };
        let output = format_results("q", Section::Latest, &[bare]);
        assert!(output.contains("[1] @unknown (unknown)"));
        assert!(output.contains("Posted: Invalid Date"));
        assert!(output.contains("URL: https://twitter.com/unknown/status/"));
    }

    #[test]
    fn test_timestamp_variants() {
        assert_eq!(
            format_timestamp(Some("2024-10-14T00:05:09Z")),
            "10/14/2024, 12:05:09 AM"
        );
        assert_eq!(
            format_timestamp(Some("2024-10-14T15:30:00+02:00")),
            "10/14/2024, 1:30:00 PM"
        );
        assert_eq!(format_timestamp(Some("0")), "1/1/1970, 12:00:00 AM");
        assert_eq!(format_timestamp(Some("yesterday")), "yesterday");
        assert_eq!(format_timestamp(None), "Invalid Date");
    }
}

const MAX_BODY_CHARS: usize = 200;

/// Shorten a response body for error messages and logs
///
/// Collapses whitespace and cuts after 200 characters, so an HTML error page from a
/// proxy doesn't flood the log:
/// "<html>\n  <body>Bad Gateway</body>\n</html>" -> "<html> <body>Bad Gateway</body> </html>"
pub fn summarize_body(body: &str) -> String {
    let collapsed = body.split_whitespace().collect::<Vec<_>>().join(" ");
    if collapsed.chars().count() <= MAX_BODY_CHARS {
        return collapsed;
    }

    let mut short: String = collapsed.chars().take(MAX_BODY_CHARS).collect();
    short.push_str("...");
    short
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_collapses_whitespace() {
        assert_eq!(
            summarize_body("<html>\n  <body>Bad Gateway</body>\n</html>"),
            "<html> <body>Bad Gateway</body> </html>"
        );
    }

    #[test]
    fn test_truncates_long_bodies() {
        let body = "x".repeat(500);
        let short = summarize_body(&body);

        assert_eq!(short.len(), MAX_BODY_CHARS + 3);
        assert!(short.ends_with("..."));
    }
}

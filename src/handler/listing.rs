//! Directory listing generation
//!
//! Renders the immediate entries of a directory as an HTML index page.
//! Entry names are HTML-escaped for display and percent-encoded in hrefs;
//! directories get a trailing slash.

use std::fmt::Write as _;
use std::path::Path;
use tokio::fs;

/// Render the listing page for `dir`, shown under the decoded URL `url_path`.
pub async fn render(dir: &Path, url_path: &str) -> std::io::Result<String> {
    let mut entries = Vec::new();
    let mut read_dir = fs::read_dir(dir).await?;
    while let Some(entry) = read_dir.next_entry().await? {
        let name = entry.file_name().to_string_lossy().into_owned();
        let is_dir = entry
            .file_type()
            .await
            .map(|t| t.is_dir())
            .unwrap_or(false);
        entries.push((name, is_dir));
    }
    entries.sort_by(|a, b| a.0.cmp(&b.0));

    Ok(build_page(url_path, &entries))
}

fn build_page(url_path: &str, entries: &[(String, bool)]) -> String {
    let title = format!("Directory listing for {}", escape_html(url_path));

    let mut items = String::new();
    for (name, is_dir) in entries {
        let display = if *is_dir {
            format!("{}/", escape_html(name))
        } else {
            escape_html(name)
        };
        let href = if *is_dir {
            format!("{}/", percent_encode(name))
        } else {
            percent_encode(name)
        };
        let _ = writeln!(items, "        <li><a href=\"{href}\">{display}</a></li>");
    }

    format!(
        r#"<!DOCTYPE html>
<html lang="en">
<head>
    <meta charset="utf-8">
    <title>{title}</title>
</head>
<body>
    <h1>{title}</h1>
    <hr>
    <ul>
{items}    </ul>
    <hr>
</body>
</html>
"#
    )
}

/// Escape text for inclusion in HTML content or attributes.
fn escape_html(s: &str) -> String {
    s.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
        .replace('\'', "&#x27;")
}

/// Percent-encode a single path segment for use in an href.
fn percent_encode(segment: &str) -> String {
    let mut out = String::with_capacity(segment.len());
    for &b in segment.as_bytes() {
        match b {
            b'A'..=b'Z' | b'a'..=b'z' | b'0'..=b'9' | b'-' | b'.' | b'_' | b'~' => {
                out.push(b as char);
            }
            _ => {
                let _ = write!(out, "%{b:02X}");
            }
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn page_lists_entries_with_directory_slash() {
        let entries = vec![
            ("notes.txt".to_string(), false),
            ("sub".to_string(), true),
        ];
        let page = build_page("/", &entries);
        assert!(page.contains("Directory listing for /"));
        assert!(page.contains("<a href=\"notes.txt\">notes.txt</a>"));
        assert!(page.contains("<a href=\"sub/\">sub/</a>"));
    }

    #[test]
    fn names_are_escaped_and_hrefs_encoded() {
        let entries = vec![("a <b> & 'c'.txt".to_string(), false)];
        let page = build_page("/stuff/", &entries);
        assert!(page.contains("a &lt;b&gt; &amp; &#x27;c&#x27;.txt"));
        assert!(page.contains("href=\"a%20%3Cb%3E%20%26%20%27c%27.txt\""));
    }

    #[test]
    fn percent_encoding_round_trips_through_decoder() {
        let name = "weird name+#?.bin";
        let encoded = percent_encode(name);
        assert_eq!(
            crate::handler::path::percent_decode(&encoded).unwrap(),
            name
        );
    }

    #[tokio::test]
    async fn render_reads_directory_entries() {
        let dir = std::env::temp_dir().join(format!(
            "cors-server-listing-{}",
            std::process::id()
        ));
        let _ = std::fs::remove_dir_all(&dir);
        std::fs::create_dir_all(dir.join("nested")).unwrap();
        std::fs::write(dir.join("file.txt"), b"x").unwrap();

        let page = render(&dir, "/").await.unwrap();
        assert!(page.contains("file.txt"));
        assert!(page.contains("nested/"));

        let _ = std::fs::remove_dir_all(&dir);
    }

    #[tokio::test]
    async fn render_fails_for_missing_directory() {
        let dir = std::env::temp_dir().join("cors-server-listing-does-not-exist");
        assert!(render(&dir, "/").await.is_err());
    }
}

use std::fs;
use std::ops::Range;
use std::path::Path;
use std::sync::LazyLock;

use regex::{Captures, Regex};

use crate::error::Error;
use crate::statsurls::StatsUrls;

// The heading plus the two table-header rows; the match runs to the end of
// the document, since the table is always the trailing section.
static TABLE_ANCHOR: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?s)### Languages and Tools Usage\n\n\|.*?\|\n\|.*?\|\n.*").unwrap()
});

// Each tag is identified by its stable prefix plus the URL prefix up to the
// query string; only the URL attribute value is consumed, so alt text and
// anything after the closing quote survive untouched.
static TOP_LANGS_TAG: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r#"(<img align="left" src=")https://github-readme-stats\.vercel\.app/api/top-langs\?[^"]*"#,
    )
    .unwrap()
});
static OVERVIEW_TAG: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r#"(<img align="center" src=")https://github-readme-stats\.vercel\.app/api\?[^"]*"#)
        .unwrap()
});
static STREAK_TAG: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r#"(<img align="center" src=")https://github-readme-streak-stats\.herokuapp\.com/\?[^"]*"#,
    )
    .unwrap()
});

fn locate(doc: &str, anchor: &Regex) -> Option<Range<usize>> {
    anchor.find(doc).map(|found| found.range())
}

fn replace(doc: &str, span: Range<usize>, text: &str) -> String {
    let mut patched = String::with_capacity(doc.len() - (span.end - span.start) + text.len());
    patched.push_str(&doc[..span.start]);
    patched.push_str(text);
    patched.push_str(&doc[span.end..]);
    patched
}

fn swap_url(doc: &str, tag: &Regex, url: &str) -> String {
    tag.replace_all(doc, |caps: &Captures| format!("{}{url}", &caps[1]))
        .into_owned()
}

/// Replaces the language table section, or appends it when the document has
/// none yet.
pub fn patch_language_table(doc: &str, table: &str) -> String {
    match locate(doc, &TABLE_ANCHOR) {
        Some(span) => replace(doc, span, table),
        None => format!("{doc}\n\n{table}"),
    }
}

/// Rewrites the URL of each recognized stats image; tags that are absent are
/// left alone.
pub fn patch_stats_urls(doc: &str, urls: &StatsUrls) -> String {
    let doc = swap_url(doc, &TOP_LANGS_TAG, &urls.top_langs);
    let doc = swap_url(&doc, &OVERVIEW_TAG, &urls.overview);
    swap_url(&doc, &STREAK_TAG, &urls.streak)
}

pub fn update_language_table(path: impl AsRef<Path>, table: &str) -> Result<(), Error> {
    let doc = fs::read_to_string(&path)?;
    fs::write(&path, patch_language_table(&doc, table))?;
    Ok(())
}

pub fn update_stats_urls(path: impl AsRef<Path>, urls: &StatsUrls) -> Result<(), Error> {
    let doc = fs::read_to_string(&path)?;
    fs::write(&path, patch_stats_urls(&doc, urls))?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    const DOC: &str = r#"# Hi there

<img align="left" src="https://github-readme-stats.vercel.app/api/top-langs?username=old&layout=compact" alt="someone" />
<img align="center" src="https://github-readme-stats.vercel.app/api?username=old" alt="someone" />
<img align="center" src="https://github-readme-streak-stats.herokuapp.com/?user=old&total_commits=1" alt="someone" />

Some prose that must survive.

### Languages and Tools Usage

| Language | Percentage |
|----------|------------|
| Go | 100.00% |
"#;

    const TABLE: &str = "### Languages and Tools Usage\n\n\
        | Language | Percentage |\n\
        |----------|------------|\n\
        | Rust | 66.67% |\n\
        | Python | 33.33% |\n";

    fn urls() -> StatsUrls {
        StatsUrls {
            top_langs: "https://github-readme-stats.vercel.app/api/top-langs?username=new&show_icons=true&locale=en&layout=compact&count_private=true".to_string(),
            overview: "https://github-readme-stats.vercel.app/api?username=new&show_icons=true&locale=en&count_private=true".to_string(),
            streak: "https://github-readme-streak-stats.herokuapp.com/?user=new&total_commits=42".to_string(),
        }
    }

    #[test]
    fn replaces_table_to_end_of_document() {
        let patched = patch_language_table(DOC, TABLE);
        assert!(patched.ends_with(TABLE));
        assert!(patched.contains("Some prose that must survive."));
        assert!(!patched.contains("| Go | 100.00% |"));
    }

    #[test]
    fn appends_table_when_anchor_missing() {
        let doc = "# Hi there\n\nNo table here.\n";
        let patched = patch_language_table(doc, TABLE);
        assert_eq!(patched, format!("{doc}\n\n{TABLE}"));
    }

    #[test]
    fn table_patch_is_idempotent() {
        let once = patch_language_table(DOC, TABLE);
        let twice = patch_language_table(&once, TABLE);
        assert_eq!(once, twice);
    }

    #[test]
    fn append_then_patch_is_idempotent() {
        let doc = "# Hi there\n";
        let once = patch_language_table(doc, TABLE);
        let twice = patch_language_table(&once, TABLE);
        assert_eq!(once, twice);
    }

    #[test]
    fn rewrites_only_the_url_attribute() {
        let patched = patch_stats_urls(DOC, &urls());
        assert!(patched.contains(&format!(
            r#"<img align="left" src="{}" alt="someone" />"#,
            urls().top_langs
        )));
        assert!(patched.contains(&format!(
            r#"<img align="center" src="{}" alt="someone" />"#,
            urls().overview
        )));
        assert!(patched.contains(&format!(
            r#"<img align="center" src="{}" alt="someone" />"#,
            urls().streak
        )));
        assert!(!patched.contains("username=old"));
        assert!(!patched.contains("user=old"));
        // everything outside the three URLs is untouched
        assert!(patched.contains("# Hi there"));
        assert!(patched.contains("Some prose that must survive."));
    }

    #[test]
    fn url_patch_is_idempotent() {
        let once = patch_stats_urls(DOC, &urls());
        let twice = patch_stats_urls(&once, &urls());
        assert_eq!(once, twice);
    }

    #[test]
    fn absent_tag_is_left_alone() {
        let doc = "# Hi there\n\nno images at all\n";
        assert_eq!(patch_stats_urls(doc, &urls()), doc);
    }

    #[test]
    fn updates_file_in_place() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("README.md");
        fs::write(&path, DOC).unwrap();
        update_language_table(&path, TABLE).unwrap();
        update_stats_urls(&path, &urls()).unwrap();
        let doc = fs::read_to_string(&path).unwrap();
        assert!(doc.ends_with(TABLE));
        assert!(doc.contains("username=new"));
    }
}

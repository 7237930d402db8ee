//! Scanner for qualifying index-manifest URLs.
//!
//! A qualifying URL is `http://` or `https://` (any case), followed by a run
//! of characters that are not whitespace, `"`, `'`, `<` or `>`, ending at the
//! first `.m3u8` (any case) that has at least one run character before it.
//! If a `?` directly follows the suffix, the rest of the run is taken as the
//! query string. This is the leftmost-first reading of
//! `(?i)https?://[^\s"'<>]+?\.m3u8(?:\?[^\s"'<>]*)?`, with U+FEFF counted as
//! whitespace the way ECMAScript `\s` counts it.
//!
//! Each run is measured once, so a scan is linear in the input length.

use std::ops::Range;

const SUFFIX: &[u8] = b".m3u8";
const HTTP: &[u8] = b"http://";
const HTTPS: &[u8] = b"https://";

/// Returns an iterator over the byte ranges of every qualifying URL in
/// `haystack`, left to right, without overlaps.
pub fn qualifying_urls(haystack: &str) -> QualifyingUrls<'_> {
    QualifyingUrls {
        haystack,
        pos: 0,
        run_end: 0,
    }
}

#[derive(Debug, Clone)]
pub struct QualifyingUrls<'a> {
    haystack: &'a str,
    pos: usize,
    /// End of the last run scanned. Every byte before it, back to where that
    /// scan began, is a run character.
    run_end: usize,
}

impl QualifyingUrls<'_> {
    fn run_end_from(&mut self, from: usize) -> usize {
        if from >= self.run_end {
            self.run_end = find_run_end(self.haystack, from);
        }
        self.run_end
    }
}

impl Iterator for QualifyingUrls<'_> {
    type Item = Range<usize>;

    fn next(&mut self) -> Option<Self::Item> {
        let bytes = self.haystack.as_bytes();

        while self.pos < bytes.len() {
            let start = self.pos;
            let Some(scheme_len) = scheme_at(bytes, start) else {
                self.pos = next_char_boundary(self.haystack, start);
                continue;
            };

            let body_start = start + scheme_len;
            let run_end = self.run_end_from(body_start);

            match find_suffix(bytes, body_start, run_end) {
                Some(suffix_end) => {
                    // `?` is itself a run character, so the query ends with the run
                    let end = if bytes.get(suffix_end) == Some(&b'?') {
                        run_end
                    } else {
                        suffix_end
                    };
                    self.pos = end;
                    return Some(start..end);
                }
                // Every later start inside this run shares its end, so none of
                // them can contain a suffix either.
                None => self.pos = run_end.max(start + 1),
            }
        }

        None
    }
}

fn scheme_at(bytes: &[u8], at: usize) -> Option<usize> {
    let rest = &bytes[at..];
    [HTTPS, HTTP].into_iter().find_map(|scheme| {
        rest.get(..scheme.len())
            .filter(|head| head.eq_ignore_ascii_case(scheme))
            .map(|_| scheme.len())
    })
}

fn is_url_char(c: char) -> bool {
    !(c.is_whitespace() || matches!(c, '\u{feff}' | '"' | '\'' | '<' | '>'))
}

fn find_run_end(haystack: &str, from: usize) -> usize {
    haystack[from..]
        .char_indices()
        .find(|&(_, c)| !is_url_char(c))
        .map_or(haystack.len(), |(offset, _)| from + offset)
}

/// Finds the end of the first suffix in `bytes[from..to]` that is preceded by
/// at least one byte of the run.
fn find_suffix(bytes: &[u8], from: usize, to: usize) -> Option<usize> {
    let first = from + 1;
    if to < first + SUFFIX.len() {
        return None;
    }
    (first..=to - SUFFIX.len())
        .find(|&i| bytes[i..i + SUFFIX.len()].eq_ignore_ascii_case(SUFFIX))
        .map(|i| i + SUFFIX.len())
}

fn next_char_boundary(haystack: &str, at: usize) -> usize {
    haystack[at..]
        .chars()
        .next()
        .map_or(haystack.len(), |c| at + c.len_utf8())
}

#[cfg(test)]
mod tests {
    use super::*;
    use regex::Regex;

    fn matches(haystack: &str) -> Vec<&str> {
        qualifying_urls(haystack).map(|r| &haystack[r]).collect()
    }

    fn oracle(haystack: &str) -> Vec<&str> {
        let re = Regex::new(r#"(?i)https?://[^\s"'<>]+?\.m3u8(?:\?[^\s"'<>]*)?"#).unwrap();
        re.find_iter(haystack).map(|m| m.as_str()).collect()
    }

    #[test]
    fn plain_and_query_urls() {
        assert_eq!(
            matches("https://cdn.example.com/path/index.m3u8?token=abc"),
            vec!["https://cdn.example.com/path/index.m3u8?token=abc"]
        );
        assert_eq!(
            matches("#EXTINF:-1,News\nhttp://a.b/live.m3u8\n"),
            vec!["http://a.b/live.m3u8"]
        );
    }

    #[test]
    fn segment_urls_never_match() {
        assert!(matches("https://cdn.example.com/seg-001.ts").is_empty());
        assert!(matches("https://cdn.example.com/movie.mp4?x=1").is_empty());
        assert!(matches("https://cdn.example.com/list.m3u").is_empty());
    }

    #[test]
    fn stops_at_first_suffix() {
        assert_eq!(
            matches("http://a/b.m3u8/c.m3u8"),
            vec!["http://a/b.m3u8"]
        );
        assert_eq!(matches("http://a/b.m3u8x"), vec!["http://a/b.m3u8"]);
    }

    #[test]
    fn query_runs_to_end_of_run() {
        assert_eq!(
            matches("http://a/b.m3u8?x=c.m3u8&y=1 tail"),
            vec!["http://a/b.m3u8?x=c.m3u8&y=1"]
        );
        assert_eq!(matches("http://a/b.m3u8?"), vec!["http://a/b.m3u8?"]);
    }

    #[test]
    fn excluded_characters_bound_the_url() {
        assert_eq!(
            matches(r#"<a href="https://x.y/z.m3u8?q=1">link</a>"#),
            vec!["https://x.y/z.m3u8?q=1"]
        );
        assert_eq!(matches("'http://x/y.m3u8'"), vec!["http://x/y.m3u8"]);
        assert!(matches("http://x/y z.m3u8").is_empty());
    }

    #[test]
    fn needs_at_least_one_character_before_suffix() {
        assert!(matches("http://.m3u8").is_empty());
        assert_eq!(matches("http://a.m3u8"), vec!["http://a.m3u8"]);
    }

    #[test]
    fn case_insensitive_scheme_and_suffix() {
        assert_eq!(matches("HTTPS://A.B/C.M3U8"), vec!["HTTPS://A.B/C.M3U8"]);
        assert_eq!(matches("HtTp://a/b.M3u8?Q"), vec!["HtTp://a/b.M3u8?Q"]);
    }

    #[test]
    fn nested_scheme_belongs_to_outer_match() {
        assert_eq!(
            matches("http://proxy/?u=http://origin/a.m3u8"),
            vec!["http://proxy/?u=http://origin/a.m3u8"]
        );
    }

    #[test]
    fn multiple_urls_on_separate_lines() {
        let doc = "#EXTM3U\nhttp://a/1.m3u8\nhttp://a/seg.ts\nhttps://b/2.m3u8?k=v\n";
        assert_eq!(matches(doc), vec!["http://a/1.m3u8", "https://b/2.m3u8?k=v"]);
    }

    #[test]
    fn unicode_content_and_whitespace() {
        assert_eq!(
            matches("ссылка: https://пример.рф/канал.m3u8\u{00a0}ещё"),
            vec!["https://пример.рф/канал.m3u8"]
        );
        assert!(matches("").is_empty());
        assert!(matches("http").is_empty());
        assert!(matches("https://").is_empty());
    }

    #[test]
    fn byte_order_mark_ends_the_run() {
        assert!(matches("http://a/b\u{feff}x.m3u8").is_empty());
        assert_eq!(
            matches("\u{feff}http://a/b.m3u8\u{feff}"),
            vec!["http://a/b.m3u8"]
        );
    }

    #[test]
    fn adjacent_matches_in_one_long_run() {
        let doc = "http://a.m3u8".repeat(40_000);
        assert_eq!(qualifying_urls(&doc).count(), 40_000);

        let doc = (0..40_000)
            .map(|i| format!("http://a/{i}.m3u8"))
            .collect::<Vec<_>>()
            .join(",");
        let ranges: Vec<_> = qualifying_urls(&doc).collect();
        assert_eq!(ranges.len(), 40_000);
        assert_eq!(&doc[ranges[39_999].clone()], "http://a/39999.m3u8");
    }

    #[test]
    fn run_end_is_reused_within_a_run() {
        let doc = "http://a.m3u8".repeat(1_000);
        let mut urls = qualifying_urls(&doc);
        assert!(urls.next().is_some());
        assert_eq!(urls.run_end, doc.len());
        assert_eq!(urls.count(), 999);
    }

    #[test]
    fn agrees_with_reference_pattern() {
        let corpus = [
            "",
            "no urls here",
            "http://a/b.m3u8",
            "https://a/b.m3u8?x",
            "http://a/b.m3u8/c.m3u8?d",
            "http://http://a.m3u8",
            "hTTps://x/y.M3U8?z=\"q\"",
            "http://x/y.ts http://x/z.m3u8 http://x/w.mp4",
            "xhttp://a/b.m3u8",
            "http://a/b.m3u8?q http://c/d.m3u8",
            "http://.m3u8 http://..m3u8",
            "https://x/.m3u8.m3u8",
            "<http://a/b.m3u8>",
            "http://a/ü.m3u8?ö=ä",
            "http://a/b\u{2003}.m3u8",
            "http://a/b.m3u\n8",
            "https//a/b.m3u8",
            "http:/a/b.m3u8",
            "HTTP://A/B.M3U8?Q=1\r\nHTTPS://C/D.m3u8",
            "http://a.m3u8.m3u8?x.m3u8",
            "\"http://a/b.m3u8\" 'https://c/d.m3u8?e'",
        ];
        for doc in corpus {
            assert_eq!(matches(doc), oracle(doc), "{doc:?}");
        }
    }
}

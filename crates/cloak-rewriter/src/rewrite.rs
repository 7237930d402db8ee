use cloak_core::{qualifying_urls, TokenPrefix};

/// Rewrites playlist documents with a fixed token prefix.
#[derive(Debug, Clone, Default)]
pub struct Rewriter {
    prefix: TokenPrefix,
}

impl Rewriter {
    pub fn new(prefix: impl Into<TokenPrefix>) -> Self {
        Self {
            prefix: prefix.into(),
        }
    }

    pub fn prefix(&self) -> &TokenPrefix {
        &self.prefix
    }

    /// Rewrites `content`, see [`rewrite_document`].
    pub fn rewrite(&self, content: &str) -> String {
        self.rewrite_counted(content).0
    }

    /// Rewrites `content` and also returns the number of replaced URLs.
    pub fn rewrite_counted(&self, content: &str) -> (String, usize) {
        substitute(content, &self.prefix)
    }
}

/// Replaces every qualifying `.m3u8` URL in `content` with
/// `prefix + payload`, copying everything else verbatim.
pub fn rewrite_document(content: &str, prefix: &TokenPrefix) -> String {
    substitute(content, prefix).0
}

fn substitute(content: &str, prefix: &TokenPrefix) -> (String, usize) {
    let mut out = String::with_capacity(content.len());
    let mut copied_up_to = 0;
    let mut replaced = 0;

    for range in qualifying_urls(content) {
        out.push_str(&content[copied_up_to..range.start]);
        out.push_str(&prefix.tokenize(&content[range.clone()]));
        copied_up_to = range.end;
        replaced += 1;
    }
    out.push_str(&content[copied_up_to..]);

    (out, replaced)
}

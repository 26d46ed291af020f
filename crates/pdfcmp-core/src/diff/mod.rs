//! Word-level diff of a matched line pair, rendered as annotated HTML.
//!
//! Unchanged words pass through as text; every changed run is wrapped in a
//! `<span class="error …">` whose second class says what happened to it:
//!
//! | class                   | side      | meaning                              |
//! |-------------------------|-----------|--------------------------------------|
//! | `replace-generated`     | generated | run differs from the original's      |
//! | `replace-original`      | original  | run differs from the generated one's |
//! | `deleted-from-generated`| generated | present in generated only            |
//! | `added-to-original`     | original  | present in original only             |
//! | `missing-in-generated`  | original  | generated line is empty              |
//! | `missing-in-original`   | generated | original line is empty               |
//! | `no-match`              | generated | no original line to compare with     |
//!
//! Word text is HTML-escaped so the output can be embedded as-is.

pub mod opcodes;

pub use opcodes::{opcodes, DiffTag, Opcode};

/// Kind of highlight applied to a run of words.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Marker {
    ReplaceGenerated,
    ReplaceOriginal,
    DeletedFromGenerated,
    AddedToOriginal,
    MissingInGenerated,
    MissingInOriginal,
    NoMatch,
}

impl Marker {
    pub fn css_class(self) -> &'static str {
        match self {
            Marker::ReplaceGenerated => "replace-generated",
            Marker::ReplaceOriginal => "replace-original",
            Marker::DeletedFromGenerated => "deleted-from-generated",
            Marker::AddedToOriginal => "added-to-original",
            Marker::MissingInGenerated => "missing-in-generated",
            Marker::MissingInOriginal => "missing-in-original",
            Marker::NoMatch => "no-match",
        }
    }

    /// Wrap already-joined text in this marker's span.
    pub fn wrap(self, text: &str) -> String {
        format!(
            r#"<span class="error {}">{}</span>"#,
            self.css_class(),
            escape_html(text)
        )
    }
}

/// Annotated renderings of a generated/original line pair.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct WordDiff {
    pub generated_html: String,
    pub original_html: String,
}

/// Diff two lines word by word.
///
/// An empty side stays empty while the other side is wrapped whole as
/// missing. Otherwise each aligned run is emitted per side and the pieces are
/// joined with single spaces.
pub fn word_diff(generated: &str, original: &str) -> WordDiff {
    let gen_words: Vec<&str> = generated.split_whitespace().collect();
    let orig_words: Vec<&str> = original.split_whitespace().collect();

    match (gen_words.is_empty(), orig_words.is_empty()) {
        (true, true) => return WordDiff::default(),
        (true, false) => {
            return WordDiff {
                generated_html: String::new(),
                original_html: Marker::MissingInGenerated.wrap(&orig_words.join(" ")),
            }
        }
        (false, true) => {
            return WordDiff {
                generated_html: Marker::MissingInOriginal.wrap(&gen_words.join(" ")),
                original_html: String::new(),
            }
        }
        (false, false) => {}
    }

    let mut gen_out: Vec<String> = Vec::new();
    let mut orig_out: Vec<String> = Vec::new();

    for op in opcodes(&gen_words, &orig_words) {
        let gen_run = gen_words[op.a_range].join(" ");
        let orig_run = orig_words[op.b_range].join(" ");
        match op.tag {
            DiffTag::Equal => {
                gen_out.push(escape_html(&gen_run));
                orig_out.push(escape_html(&orig_run));
            }
            DiffTag::Replace => {
                gen_out.push(Marker::ReplaceGenerated.wrap(&gen_run));
                orig_out.push(Marker::ReplaceOriginal.wrap(&orig_run));
            }
            DiffTag::Delete => gen_out.push(Marker::DeletedFromGenerated.wrap(&gen_run)),
            DiffTag::Insert => orig_out.push(Marker::AddedToOriginal.wrap(&orig_run)),
        }
    }

    WordDiff {
        generated_html: gen_out.join(" "),
        original_html: orig_out.join(" "),
    }
}

/// Rendering of a generated line that had no original counterpart at all.
pub fn no_match_html(generated: &str) -> String {
    Marker::NoMatch.wrap(generated)
}

fn escape_html(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    for c in s.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            _ => out.push(c),
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_identical_lines_unmarked() {
        let d = word_diff("a b c", "a b c");
        assert_eq!(d.generated_html, "a b c");
        assert_eq!(d.original_html, "a b c");
    }

    #[test]
    fn test_replaced_word() {
        let d = word_diff("a b c", "a x c");
        assert_eq!(
            d.generated_html,
            r#"a <span class="error replace-generated">b</span> c"#
        );
        assert_eq!(
            d.original_html,
            r#"a <span class="error replace-original">x</span> c"#
        );
    }

    #[test]
    fn test_both_empty() {
        assert_eq!(word_diff("", ""), WordDiff::default());
    }

    #[test]
    fn test_generated_empty() {
        let d = word_diff("", "hello");
        assert_eq!(d.generated_html, "");
        assert_eq!(
            d.original_html,
            r#"<span class="error missing-in-generated">hello</span>"#
        );
    }

    #[test]
    fn test_original_empty() {
        let d = word_diff("hello", "");
        assert_eq!(
            d.generated_html,
            r#"<span class="error missing-in-original">hello</span>"#
        );
        assert_eq!(d.original_html, "");
    }

    #[test]
    fn test_deleted_and_added_runs() {
        let d = word_diff("pay now or later", "pay later");
        assert_eq!(
            d.generated_html,
            r#"pay <span class="error deleted-from-generated">now or</span> later"#
        );
        assert_eq!(d.original_html, "pay later");

        let d = word_diff("pay later", "pay now or later");
        assert_eq!(d.generated_html, "pay later");
        assert_eq!(
            d.original_html,
            r#"pay <span class="error added-to-original">now or</span> later"#
        );
    }

    #[test]
    fn test_whitespace_runs_collapse() {
        let d = word_diff("a   b", "a b");
        assert_eq!(d.generated_html, "a b");
    }

    #[test]
    fn test_text_is_escaped() {
        let d = word_diff("x < y & z", "x < y & z");
        assert_eq!(d.generated_html, "x &lt; y &amp; z");
        assert_eq!(
            no_match_html("<script>"),
            r#"<span class="error no-match">&lt;script&gt;</span>"#
        );
    }
}

//! Resume text cleanup applied before vectorization.
//!
//! The substitutions run in a fixed order and each one sees the output of the
//! previous step. The classifier was trained on text cleaned exactly this way,
//! so the order and replacement strings must not change.

use std::sync::LazyLock;

use regex::Regex;

/// Whitespace as Python's `re` sees it: Unicode `\s` plus the ASCII
/// separators U+001C..=U+001F.
const WHITESPACE: &str = r"[\s\x1C-\x1F]";
const NON_WHITESPACE: &str = r"[^\s\x1C-\x1F]";

static RE_URL: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(&format!("http{}+{}", NON_WHITESPACE, WHITESPACE)).unwrap());
static RE_RT_CC: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"RT|cc").unwrap());
static RE_HASHTAG: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(&format!("#{}+{}", NON_WHITESPACE, WHITESPACE)).unwrap());
static RE_MENTION: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(&format!("@{}+", NON_WHITESPACE)).unwrap());
static RE_PUNCTUATION: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(&format!("[{}]", regex::escape(PUNCTUATION))).unwrap());
static RE_NON_ASCII: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"[^\x00-\x7F]").unwrap());
static RE_WHITESPACE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(&format!("{}+", WHITESPACE)).unwrap());

/// ASCII punctuation replaced by a space in step 5.
pub const PUNCTUATION: &str = r##"!"#$%&'()*+,-./:;<=>?@[\]^_`{|}~"##;

/// Cleans extracted resume text.
///
/// 1. URL tokens (`http` plus the non-space run and one trailing whitespace)
/// 2. every `RT` or `cc` substring, including inside words
/// 3. hashtags with one trailing whitespace
/// 4. mentions, replaced by two spaces
/// 5. ASCII punctuation
/// 6. non-ASCII characters
/// 7. whitespace runs collapsed to one space
///
/// Leading and trailing spaces are left in place.
pub fn normalize(text: &str) -> String {
    let text = RE_URL.replace_all(text, " ");
    let text = RE_RT_CC.replace_all(&text, " ");
    let text = RE_HASHTAG.replace_all(&text, " ");
    let text = RE_MENTION.replace_all(&text, "  ");
    let text = RE_PUNCTUATION.replace_all(&text, " ");
    let text = RE_NON_ASCII.replace_all(&text, " ");
    RE_WHITESPACE.replace_all(&text, " ").into_owned()
}

//! String helpers: validation predicates, transforms, safe indexing and
//! generators.
//!
//! Positions are counted in Unicode scalar values (`char`s), not bytes.
//! Index arguments are signed so that a negative position is an ordinary
//! out-of-range input that yields `None` instead of a type error.

use std::{
    ops::{Bound, RangeBounds},
    sync::LazyLock,
};

use chrono::{DateTime, Local, NaiveDate, NaiveDateTime, NaiveTime, TimeZone};
use percent_encoding::{AsciiSet, NON_ALPHANUMERIC, percent_decode_str, utf8_percent_encode};
use rand::Rng;
use regex::Regex;
use url::Url;

use crate::compat::{Zz, ZzCompatible, ZzType};

/// Email grammar. Format only; nothing is checked against a mail server.
static EMAIL_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r#"^(?:[\p{L}0-9!#$%\&'*+/=?\^_`{|}~-]+(?:\.[\p{L}0-9!#$%\&'*+/=?\^_`{|}~-]+)*|"(?:[\x01-\x08\x0b\x0c\x0e-\x1f\x21\x23-\x5b\x5d-\x7f]|\\[\x01-\x09\x0b\x0c\x0e-\x7f])*")@(?:(?:[\p{L}0-9](?:[a-z0-9-]*[\p{L}0-9])?\.)+[\p{L}0-9](?:[\p{L}0-9-]*[\p{L}0-9])?|\[(?:(?:25[0-5]|2[0-4][0-9]|[01]?[0-9][0-9]?)\.){3}(?:25[0-5]|2[0-4][0-9]|[01]?[0-9][0-9]?|[\p{L}0-9-]*[\p{L}0-9]:(?:[\x01-\x08\x0b\x0c\x0e-\x1f\x21-\x5a\x53-\x7f]|\\[\x01-\x09\x0b\x0c\x0e-\x7f])+)\])$"#,
    )
    .expect("email pattern is valid")
});

/// Base used to resolve relative references in [`Zz::is_valid_url`].
static RELATIVE_BASE: LazyLock<Url> =
    LazyLock::new(|| Url::parse("http://localhost/").expect("base url is valid"));

/// Characters left untouched by [`Zz::url_encoded`]: the URL host allowed set.
const URL_HOST_ALLOWED: &AsciiSet = &NON_ALPHANUMERIC
    .remove(b'!')
    .remove(b'$')
    .remove(b'&')
    .remove(b'\'')
    .remove(b'(')
    .remove(b')')
    .remove(b'*')
    .remove(b'+')
    .remove(b',')
    .remove(b'-')
    .remove(b'.')
    .remove(b':')
    .remove(b';')
    .remove(b'=')
    .remove(b'[')
    .remove(b']')
    .remove(b'_')
    .remove(b'~');

const LOREM_IPSUM: &str = "Lorem ipsum dolor sit amet, consectetur adipiscing elit, sed do eiusmod tempor incididunt ut labore et dolore magna aliqua. Ut enim ad minim veniam, quis nostrud exercitation ullamco laboris nisi ut aliquip ex ea commodo consequat. Duis aute irure dolor in reprehenderit in voluptate velit esse cillum dolore eu fugiat nulla pariatur. Excepteur sint occaecat cupidatat non proident, sunt in culpa qui officia deserunt mollit anim id est laborum.";

/// Alphabet drawn from by [`ZzType::random`].
pub const RANDOM_ALPHABET: &str = "abcdefghijklmnopqrstuvwxyzABCDEFGHIJKLMNOPQRSTUVWXYZ0123456789";

/// Textual subjects.
pub trait Text: AsRef<str> {}

impl Text for str {}
impl Text for String {}

impl ZzCompatible for str {}
impl ZzCompatible for String {}

impl<'a, T: Text + ?Sized> Zz<&'a T> {
    fn text(&self) -> &'a str {
        <T as AsRef<str>>::as_ref(self.base)
    }

    /// Whether the string looks like an email address.
    ///
    /// ```
    /// # use zz_extension::ZzCompatible;
    /// assert!("john@doe.com".zz().is_valid_email());
    /// ```
    #[must_use]
    pub fn is_valid_email(&self) -> bool {
        EMAIL_PATTERN.is_match(self.text())
    }

    /// Whether the string is a URL, absolute or relative.
    #[must_use]
    pub fn is_valid_url(&self) -> bool {
        let text = self.text();
        if Url::parse(text).is_ok() {
            return true;
        }
        !text.is_empty() && !text.chars().any(char::is_whitespace) && RELATIVE_BASE.join(text).is_ok()
    }

    /// Whether the string is a URL carrying a scheme.
    ///
    /// ```
    /// # use zz_extension::ZzCompatible;
    /// assert!("https://google.com".zz().is_valid_schemed_url());
    /// assert!(!"google.com".zz().is_valid_schemed_url());
    /// ```
    #[must_use]
    pub fn is_valid_schemed_url(&self) -> bool {
        Url::parse(self.text()).is_ok()
    }

    /// Whether the string is an `https` URL.
    #[must_use]
    pub fn is_valid_https_url(&self) -> bool {
        self.has_scheme("https")
    }

    /// Whether the string is an `http` URL.
    #[must_use]
    pub fn is_valid_http_url(&self) -> bool {
        self.has_scheme("http")
    }

    /// Whether the string is a `file` URL, e.g. `file://Documents/file.txt`.
    #[must_use]
    pub fn is_valid_file_url(&self) -> bool {
        self.has_scheme("file")
    }

    fn has_scheme(&self, scheme: &str) -> bool {
        Url::parse(self.text()).is_ok_and(|url| url.scheme() == scheme)
    }

    /// Whether every character is a numeric digit. The empty string qualifies.
    ///
    /// ```
    /// # use zz_extension::ZzCompatible;
    /// assert!("123".zz().is_digits());
    /// assert!(!"1.3".zz().is_digits());
    /// ```
    #[must_use]
    pub fn is_digits(&self) -> bool {
        self.text().chars().all(char::is_numeric)
    }

    /// The string without leading and trailing whitespace and newlines.
    #[must_use]
    pub fn trimmed(&self) -> String {
        self.text().trim().to_string()
    }

    /// The string with percent escapes decoded.
    ///
    /// Malformed escapes or escapes that decode to invalid UTF-8 leave the
    /// string as it was.
    #[must_use]
    pub fn url_decoded(&self) -> String {
        let text = self.text();
        if has_malformed_escape(text) {
            return text.to_string();
        }
        percent_decode_str(text)
            .decode_utf8()
            .map_or_else(|_| text.to_string(), |decoded| decoded.into_owned())
    }

    /// The string percent-encoded for use in a URL.
    ///
    /// ```
    /// # use zz_extension::ZzCompatible;
    /// assert_eq!("it's easy".zz().url_encoded(), "it's%20easy");
    /// ```
    #[must_use]
    pub fn url_encoded(&self) -> String {
        utf8_percent_encode(self.text(), URL_HOST_ALLOWED).to_string()
    }

    /// The string with every space and newline removed.
    #[must_use]
    pub fn without_spaces_and_newlines(&self) -> String {
        self.text().chars().filter(|c| *c != ' ' && *c != '\n').collect()
    }

    /// The character at `index`, or `None` when out of range.
    ///
    /// ```
    /// # use zz_extension::ZzCompatible;
    /// assert_eq!("Hello World!".zz().char_at(3), Some('l'));
    /// assert_eq!("Hello World!".zz().char_at(20), None);
    /// ```
    #[must_use]
    pub fn char_at(&self, index: isize) -> Option<char> {
        let index = usize::try_from(index).ok()?;
        self.text().chars().nth(index)
    }

    /// The characters within `range`, or `None` when the range does not lie
    /// within the string.
    ///
    /// Open ends resolve to the start and end of the string.
    ///
    /// ```
    /// # use zz_extension::ZzCompatible;
    /// assert_eq!("Hello World!".zz().substring(6..11).as_deref(), Some("World"));
    /// assert_eq!("Hello World!".zz().substring(6..=11).as_deref(), Some("World!"));
    /// assert_eq!("Hello World!".zz().substring(21..110), None);
    /// ```
    #[must_use]
    pub fn substring<R: RangeBounds<isize>>(&self, range: R) -> Option<String> {
        let len = self.char_count();
        let start = match range.start_bound() {
            Bound::Included(&start) => start,
            Bound::Excluded(&start) => start.checked_add(1)?,
            Bound::Unbounded => 0,
        };
        let end = match range.end_bound() {
            Bound::Included(&end) => end.checked_add(1)?,
            Bound::Excluded(&end) => end,
            Bound::Unbounded => len,
        };

        if start < 0 || end > len || start > end {
            return None;
        }

        let skip = usize::try_from(start).ok()?;
        let take = usize::try_from(end - start).ok()?;
        Some(self.text().chars().skip(skip).take(take).collect())
    }

    /// `length` characters starting at `index`, clamped to the end of the string.
    ///
    /// ```
    /// # use zz_extension::ZzCompatible;
    /// assert_eq!("Hello World".zz().slicing(6, 5).as_deref(), Some("World"));
    /// assert_eq!("Hello World".zz().slicing(6, 50).as_deref(), Some("World"));
    /// ```
    #[must_use]
    pub fn slicing(&self, index: isize, length: isize) -> Option<String> {
        let len = self.char_count();
        if length < 0 || index < 0 || index >= len {
            return None;
        }
        if index.saturating_add(length) > len {
            return self.substring(index..len);
        }
        if length == 0 {
            return Some(String::new());
        }
        self.substring(index..index + length)
    }

    /// Parse the trimmed, lower-cased string as a local date and time.
    ///
    /// `format` is a `chrono` strftime pattern such as
    /// [`DEFAULT_DATE_FORMAT`](crate::date::DEFAULT_DATE_FORMAT). Patterns
    /// without a time of day resolve to midnight. Returns `None` when the
    /// string does not match.
    #[must_use]
    pub fn date(&self, format: &str) -> Option<DateTime<Local>> {
        let text = self.text().trim().to_lowercase();
        let naive = NaiveDateTime::parse_from_str(&text, format)
            .ok()
            .or_else(|| {
                NaiveDate::parse_from_str(&text, format)
                    .ok()
                    .map(|date| date.and_time(NaiveTime::MIN))
            })?;
        Local.from_local_datetime(&naive).earliest()
    }

    fn char_count(&self) -> isize {
        isize::try_from(self.text().chars().count()).unwrap_or(isize::MAX)
    }
}

impl ZzType<str> {
    /// The lorem ipsum paragraph cut to `length` characters.
    ///
    /// The whole paragraph comes back when `length` exceeds it, an empty string
    /// when `length` is zero.
    #[must_use]
    pub fn lorem_ipsum(length: usize) -> String {
        LOREM_IPSUM.chars().take(length).collect()
    }

    /// The whole lorem ipsum paragraph.
    #[must_use]
    pub const fn lorem_ipsum_full() -> &'static str {
        LOREM_IPSUM
    }

    /// A random alphanumeric string of `length` characters.
    ///
    /// ```
    /// # use zz_extension::ZzType;
    /// assert_eq!(ZzType::<str>::random(18).len(), 18);
    /// ```
    #[must_use]
    pub fn random(length: usize) -> String {
        Self::random_with(length, &mut rand::thread_rng())
    }

    /// [`random`](Self::random) drawing from `rng`.
    pub fn random_with<R: Rng + ?Sized>(length: usize, rng: &mut R) -> String {
        let alphabet = RANDOM_ALPHABET.as_bytes();
        (0..length)
            .map(|_| char::from(alphabet[rng.gen_range(0..alphabet.len())]))
            .collect()
    }
}

/// Whether `text` holds a `%` that is not followed by two hex digits.
fn has_malformed_escape(text: &str) -> bool {
    let bytes = text.as_bytes();
    bytes.iter().enumerate().any(|(i, byte)| {
        *byte == b'%'
            && !(bytes.get(i + 1).is_some_and(u8::is_ascii_hexdigit)
                && bytes.get(i + 2).is_some_and(u8::is_ascii_hexdigit))
    })
}

#[cfg(test)]
mod tests {
    use chrono::{Datelike, Timelike};
    use rand::{SeedableRng, rngs::StdRng};

    use super::*;

    #[test]
    fn test_is_valid_email() {
        assert!("john@doe.com".zz().is_valid_email());
        assert!("first.last+tag@sub.example.org".zz().is_valid_email());
        assert!("jos\u{e9}@doe.com".zz().is_valid_email());
        assert!(!"john@".zz().is_valid_email());
        assert!(!"john.doe.com".zz().is_valid_email());
        assert!(!"john@doe@com".zz().is_valid_email());
        assert!(!"".zz().is_valid_email());
    }

    #[test]
    fn test_url_predicates() {
        assert!("https://google.com".zz().is_valid_url());
        assert!("google.com".zz().is_valid_url());
        assert!(!"not a url".zz().is_valid_url());
        assert!(!"".zz().is_valid_url());

        assert!("https://google.com".zz().is_valid_schemed_url());
        assert!(!"google.com".zz().is_valid_schemed_url());

        assert!("https://google.com".zz().is_valid_https_url());
        assert!(!"http://google.com".zz().is_valid_https_url());
        assert!("http://google.com".zz().is_valid_http_url());
        assert!(!"https://google.com".zz().is_valid_http_url());

        assert!("file://Documents/file.txt".zz().is_valid_file_url());
        assert!(!"https://google.com/file.txt".zz().is_valid_file_url());
    }

    #[test]
    fn test_predicates_work_on_owned_strings() {
        let owned = String::from("https://example.com");
        assert!(owned.zz().is_valid_https_url());
    }

    #[test]
    fn test_is_digits() {
        assert!("123".zz().is_digits());
        assert!("".zz().is_digits());
        assert!(!"1.3".zz().is_digits());
        assert!(!"abc".zz().is_digits());
        assert!(!"12 3".zz().is_digits());
    }

    #[test]
    fn test_transforms() {
        assert_eq!("   hello  \n".zz().trimmed(), "hello");
        assert_eq!(
            "   \n Hello   \n  World  ".zz().without_spaces_and_newlines(),
            "HelloWorld"
        );
    }

    #[test]
    fn test_url_decoded() {
        assert_eq!(
            "it's%20easy%20to%20decode%20strings".zz().url_decoded(),
            "it's easy to decode strings"
        );
        assert_eq!("caf%C3%A9".zz().url_decoded(), "caf\u{e9}");
        assert_eq!("100%".zz().url_decoded(), "100%");
        assert_eq!("%zz".zz().url_decoded(), "%zz");
        assert_eq!("%FF".zz().url_decoded(), "%FF");
    }

    #[test]
    fn test_url_encoded() {
        assert_eq!(
            "it's easy to encode strings".zz().url_encoded(),
            "it's%20easy%20to%20encode%20strings"
        );
        assert_eq!("a/b?c".zz().url_encoded(), "a%2Fb%3Fc");
        assert_eq!("caf\u{e9}".zz().url_encoded(), "caf%C3%A9");
        assert_eq!("[::1]:80".zz().url_encoded(), "[::1]:80");
    }

    #[test]
    fn test_char_at() {
        let text = "Hello World!";
        assert_eq!(text.zz().char_at(0), Some('H'));
        assert_eq!(text.zz().char_at(3), Some('l'));
        assert_eq!(text.zz().char_at(11), Some('!'));
        assert_eq!(text.zz().char_at(12), None);
        assert_eq!(text.zz().char_at(-1), None);
        assert_eq!("h\u{e9}llo".zz().char_at(1), Some('\u{e9}'));
    }

    #[test]
    fn test_substring() {
        let text = "Hello World!";
        assert_eq!(text.zz().substring(6..11).as_deref(), Some("World"));
        assert_eq!(text.zz().substring(6..=11).as_deref(), Some("World!"));
        assert_eq!(text.zz().substring(..5).as_deref(), Some("Hello"));
        assert_eq!(text.zz().substring(6..).as_deref(), Some("World!"));
        assert_eq!(text.zz().substring(3..3).as_deref(), Some(""));
        assert_eq!(text.zz().substring(21..110), None);
        assert_eq!(text.zz().substring(6..13), None);
        assert_eq!(text.zz().substring(-1..3), None);
        assert_eq!(text.zz().substring(5..2), None);
    }

    #[test]
    fn test_slicing() {
        let text = "Hello World";
        assert_eq!(text.zz().slicing(6, 5).as_deref(), Some("World"));
        assert_eq!(text.zz().slicing(6, 100).as_deref(), Some("World"));
        assert_eq!(text.zz().slicing(0, 0).as_deref(), Some(""));
        assert_eq!(text.zz().slicing(10, 1).as_deref(), Some("d"));
        assert_eq!(text.zz().slicing(11, 1), None);
        assert_eq!(text.zz().slicing(-1, 3), None);
        assert_eq!(text.zz().slicing(2, -1), None);
        assert_eq!(text.zz().slicing(2, isize::MAX).as_deref(), Some("llo World"));
    }

    #[test]
    fn test_slicing_length_matches_clamped_request() {
        let text = "abcdefghij";
        for index in 0..10_isize {
            for length in 0..15_isize {
                let sliced = text.zz().slicing(index, length).unwrap();
                let expected = usize::try_from(length.min(10 - index)).unwrap();
                assert_eq!(sliced.chars().count(), expected);
            }
        }
    }

    #[test]
    fn test_lorem_ipsum() {
        assert_eq!(ZzType::<str>::lorem_ipsum(0), "");
        assert_eq!(ZzType::<str>::lorem_ipsum(11), "Lorem ipsum");
        assert_eq!(ZzType::<str>::lorem_ipsum(445), ZzType::<str>::lorem_ipsum_full());
        assert_eq!(ZzType::<str>::lorem_ipsum(10_000), ZzType::<str>::lorem_ipsum_full());
        assert_eq!(ZzType::<str>::lorem_ipsum_full().chars().count(), 445);
    }

    #[test]
    fn test_random_string() {
        assert_eq!(ZzType::<str>::random(0), "");
        for _ in 0..50 {
            let value = ZzType::<str>::random(18);
            assert_eq!(value.chars().count(), 18);
            assert!(value.chars().all(|c| RANDOM_ALPHABET.contains(c)));
        }
    }

    #[test]
    fn test_random_string_seeded() {
        let first = ZzType::<str>::random_with(32, &mut StdRng::seed_from_u64(3));
        let second = ZzType::<str>::random_with(32, &mut StdRng::seed_from_u64(3));
        assert_eq!(first, second);
    }

    #[test]
    fn test_date_parsing() {
        let date = "  18/10/2026 13:45 ".zz().date("%d/%m/%Y %H:%M").unwrap();
        assert_eq!(date.year(), 2026);
        assert_eq!(date.month(), 10);
        assert_eq!(date.day(), 18);
        assert_eq!(date.hour(), 13);
        assert_eq!(date.minute(), 45);
    }

    #[test]
    fn test_date_parsing_is_case_insensitive() {
        let date = "18 OCT 2026".zz().date("%d %b %Y").unwrap();
        assert_eq!(date.month(), 10);
        assert_eq!(date.hour(), 0);
    }

    #[test]
    fn test_date_parsing_mismatch() {
        assert!("2026-10-18".zz().date("%d/%m/%Y %H:%M").is_none());
        assert!("".zz().date("%d/%m/%Y").is_none());
    }
}

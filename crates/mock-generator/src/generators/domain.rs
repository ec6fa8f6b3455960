//! Domain-typed string generators.
//!
//! The population engine renders `type(...)` strings through the
//! [`DomainGenerator`] trait. [`TemplateDomainGenerator`] is the built-in
//! implementation; sessions can swap in their own.

use crate::generators::timestamp;
use crate::random::RandomSource;

const LETTERS: &[u8] = b"abcdefghijklmnopqrstuvwxyz";
const DIGITS: &[u8] = b"0123456789";

/// Renders strings for each domain kind.
pub trait DomainGenerator: Send + Sync {
    fn email(&self, random: &mut RandomSource) -> String;

    fn phone(&self, random: &mut RandomSource) -> String;

    fn url(&self, random: &mut RandomSource) -> String;

    fn ipv4(&self, random: &mut RandomSource) -> String;

    fn domain(&self, random: &mut RandomSource) -> String;

    /// A word whose length lies in `[min, max)`.
    fn word(&self, random: &mut RandomSource, min: i64, max: i64) -> String;

    /// A sentence whose word count lies in `[min, max)`.
    fn sentence(&self, random: &mut RandomSource, min: i64, max: i64) -> String;

    /// The current time rendered with `format`.
    fn date(&self, format: &str) -> String;
}

/// Built-in template renderer.
///
/// - email: `word@word.word`
/// - phone: `1` followed by ten digits
/// - url: `http://www.word.word/word`
/// - ipv4: four octets in `[0, 256)`
/// - domain: `www.word.word`
/// - word: lowercase ASCII letters
/// - sentence: capitalized first word, single spaces, trailing `.`
/// - date: local time, strftime layout
#[derive(Debug, Clone, Copy, Default)]
pub struct TemplateDomainGenerator;

impl DomainGenerator for TemplateDomainGenerator {
    fn email(&self, random: &mut RandomSource) -> String {
        format!(
            "{}@{}.{}",
            self.word(random, 1, 10),
            self.word(random, 1, 10),
            self.word(random, 1, 10)
        )
    }

    fn phone(&self, random: &mut RandomSource) -> String {
        let mut phone = String::with_capacity(11);
        phone.push('1');
        phone.extend((0..10).map(|_| DIGITS[random.index(DIGITS.len())] as char));
        phone
    }

    fn url(&self, random: &mut RandomSource) -> String {
        format!("http://{}/{}", self.domain(random), self.word(random, 1, 10))
    }

    fn ipv4(&self, random: &mut RandomSource) -> String {
        format!(
            "{}.{}.{}.{}",
            random.below(256),
            random.below(256),
            random.below(256),
            random.below(256)
        )
    }

    fn domain(&self, random: &mut RandomSource) -> String {
        format!(
            "www.{}.{}",
            self.word(random, 1, 10),
            self.word(random, 1, 10)
        )
    }

    fn word(&self, random: &mut RandomSource, min: i64, max: i64) -> String {
        let len = usize::try_from(random.int_in(min, max)).unwrap_or(0);
        (0..len)
            .map(|_| LETTERS[random.index(LETTERS.len())] as char)
            .collect()
    }

    fn sentence(&self, random: &mut RandomSource, min: i64, max: i64) -> String {
        let count = usize::try_from(random.int_in(min, max)).unwrap_or(0);
        if count == 0 {
            return String::new();
        }

        let words: Vec<String> = (0..count).map(|_| self.word(random, 1, 10)).collect();
        let mut sentence = capitalize(&words[0]);
        for word in &words[1..] {
            sentence.push(' ');
            sentence.push_str(word);
        }
        sentence.push('.');
        sentence
    }

    fn date(&self, format: &str) -> String {
        timestamp::format_now(format)
    }
}

fn capitalize(word: &str) -> String {
    let mut chars = word.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

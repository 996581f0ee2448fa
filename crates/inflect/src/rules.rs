#![forbid(unsafe_code)]

//! Suffix rule cascades for regular plural and singular forms.
//!
//! Both directions are an ordered list of tagged rules; the first rule that
//! produces a result wins. The order is part of the contract: `-man` must be
//! tried before the sibilant rule, `vowel + o` before the `+s` exception set,
//! and so on.
//!
//! Rules match case-insensitively against ASCII suffixes of the caller's
//! original word and keep its stem as typed. Appended suffixes go through
//! [`match_suffix`], so `BOX` becomes `BOXES` while `Box` becomes `Boxes`.
//!
//! Exception sets are matched against the lowercase last word of the input
//! (split on spaces and hyphens), so `kitchen knife` follows `knife`.

use std::fmt;
use std::sync::{Arc, LazyLock};

use rustc_hash::FxHashSet;

use crate::case::{CasePattern, match_suffix};
use crate::tables::{
    E_SINGULARS, MAN_EXCEPTIONS, MEN_SINGULARS, O_PLUS_S, OE_SINGULARS, S_SINGULARS, VES_BASES,
};

/// One step of the plural cascade.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PluralRule {
    /// `-man -> -men`, except `*human` and the `-man` exception set.
    ManToMen,
    /// `s`, `sh`, `ch`, `x`, `z` endings take `+es`.
    Sibilant,
    /// Consonant + `y` becomes `-ies`; proper names just add `s`.
    ConsonantY,
    /// `-f`/`-fe` in the vesification set becomes `-ves`.
    Vesify,
    /// Vowel + `o` takes `+s`.
    VowelO,
    /// Consonant + `o` in the `+s` exception set takes `+s`.
    PlainO,
    /// Any other `-o` takes `+es`.
    ConsonantO,
    /// Everything else takes `+s`.
    AppendS,
}

impl PluralRule {
    /// Cascade order. [`AppendS`](Self::AppendS) always matches.
    pub const CASCADE: [Self; 8] = [
        Self::ManToMen,
        Self::Sibilant,
        Self::ConsonantY,
        Self::Vesify,
        Self::VowelO,
        Self::PlainO,
        Self::ConsonantO,
        Self::AppendS,
    ];

    /// Stable name for logs.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::ManToMen => "man-to-men",
            Self::Sibilant => "sibilant",
            Self::ConsonantY => "consonant-y",
            Self::Vesify => "vesify",
            Self::VowelO => "vowel-o",
            Self::PlainO => "plain-o",
            Self::ConsonantO => "consonant-o",
            Self::AppendS => "append-s",
        }
    }
}

impl fmt::Display for PluralRule {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// One step of the singular cascade.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SingularRule {
    /// `-men -> -man`, except real `-men` singulars.
    MenToMan,
    /// `-ves -> -f`/`-fe`, chosen by the vesification set.
    VesToF,
    /// Consonant + `-ies -> -y`.
    IesToY,
    /// Drop `-es` after sibilants, consonant + `o`, and known `-s` singulars.
    StripEs,
    /// Drop a trailing `-s` unless the word ends in `-ss`.
    StripS,
}

impl SingularRule {
    /// Cascade order. Words matching none of these are already singular.
    pub const CASCADE: [Self; 5] = [
        Self::MenToMan,
        Self::VesToF,
        Self::IesToY,
        Self::StripEs,
        Self::StripS,
    ];

    /// Stable name for logs.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::MenToMan => "men-to-man",
            Self::VesToF => "ves-to-f",
            Self::IesToY => "ies-to-y",
            Self::StripEs => "strip-es",
            Self::StripS => "strip-s",
        }
    }
}

impl fmt::Display for SingularRule {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Compiled exception sets driving both cascades.
///
/// Immutable once built; engines share one instance through an [`Arc`].
#[derive(Debug)]
pub struct SuffixCascade {
    man_exceptions: FxHashSet<&'static str>,
    men_singulars: FxHashSet<&'static str>,
    ves_bases: FxHashSet<&'static str>,
    o_plus_s: FxHashSet<&'static str>,
    s_singulars: FxHashSet<&'static str>,
    oe_singulars: FxHashSet<&'static str>,
    e_singulars: FxHashSet<&'static str>,
}

static SHARED: LazyLock<Arc<SuffixCascade>> = LazyLock::new(|| Arc::new(SuffixCascade::new()));

impl Default for SuffixCascade {
    fn default() -> Self {
        Self::new()
    }
}

impl SuffixCascade {
    /// Compile the built-in exception sets.
    #[must_use]
    pub fn new() -> Self {
        fn set(words: &[&'static str]) -> FxHashSet<&'static str> {
            words.iter().copied().collect()
        }
        Self {
            man_exceptions: set(MAN_EXCEPTIONS),
            men_singulars: set(MEN_SINGULARS),
            ves_bases: set(VES_BASES),
            o_plus_s: set(O_PLUS_S),
            s_singulars: set(S_SINGULARS),
            oe_singulars: set(OE_SINGULARS),
            e_singulars: set(E_SINGULARS),
        }
    }

    /// The process-wide compiled cascade.
    #[must_use]
    pub fn shared() -> Arc<Self> {
        Arc::clone(&SHARED)
    }

    /// Regular plural of a non-empty word and the rule that produced it.
    #[must_use]
    pub fn pluralize(&self, word: &str) -> (PluralRule, String) {
        for rule in PluralRule::CASCADE {
            if let Some(plural) = self.apply_plural(rule, word) {
                return (rule, plural);
            }
        }
        (PluralRule::AppendS, append(word, "s"))
    }

    /// Regular singular of a word, or `None` when no rule applies.
    #[must_use]
    pub fn singularize(&self, word: &str) -> Option<(SingularRule, String)> {
        SingularRule::CASCADE
            .into_iter()
            .find_map(|rule| self.apply_singular(rule, word).map(|s| (rule, s)))
    }

    /// Try a single plural rule.
    #[must_use]
    pub fn apply_plural(&self, rule: PluralRule, word: &str) -> Option<String> {
        match rule {
            PluralRule::ManToMen => {
                if !ends_with_ci(word, "man")
                    || ends_with_ci(word, "human")
                    || self.man_exceptions.contains(last_word(word).as_str())
                {
                    return None;
                }
                Some(replace_suffix(word, 3, "men"))
            }
            PluralRule::Sibilant => ["s", "sh", "ch", "x", "z"]
                .iter()
                .any(|end| ends_with_ci(word, end))
                .then(|| append(word, "es")),
            PluralRule::ConsonantY => {
                let consonant_y = ends_with_ci(word, "quy")
                    || (ends_with_ci(word, "y") && char_before(word, 1).is_some_and(is_consonant));
                if !consonant_y {
                    return None;
                }
                if CasePattern::of(word).is_proper_name() {
                    Some(append(word, "s"))
                } else {
                    Some(replace_suffix(word, 1, "ies"))
                }
            }
            PluralRule::Vesify => {
                if !self.ves_bases.contains(last_word(word).as_str()) {
                    return None;
                }
                if ends_with_ci(word, "fe") {
                    Some(replace_suffix(word, 2, "ves"))
                } else if ends_with_ci(word, "f") {
                    Some(replace_suffix(word, 1, "ves"))
                } else {
                    None
                }
            }
            PluralRule::VowelO => (ends_with_ci(word, "o")
                && char_before(word, 1).is_some_and(is_vowel))
            .then(|| append(word, "s")),
            PluralRule::PlainO => (ends_with_ci(word, "o")
                && self.o_plus_s.contains(last_word(word).as_str()))
            .then(|| append(word, "s")),
            PluralRule::ConsonantO => ends_with_ci(word, "o").then(|| append(word, "es")),
            PluralRule::AppendS => Some(append(word, "s")),
        }
    }

    /// Try a single singular rule.
    #[must_use]
    pub fn apply_singular(&self, rule: SingularRule, word: &str) -> Option<String> {
        match rule {
            SingularRule::MenToMan => {
                if !ends_with_ci(word, "men") || self.men_singulars.contains(last_word(word).as_str())
                {
                    return None;
                }
                Some(replace_suffix(word, 3, "man"))
            }
            SingularRule::VesToF => {
                if !ends_with_ci(word, "ves") {
                    return None;
                }
                let base = last_word(stem(word, 3));
                if self.ves_bases.contains(format!("{base}fe").as_str()) {
                    Some(replace_suffix(word, 3, "fe"))
                } else if self.ves_bases.contains(format!("{base}f").as_str()) {
                    Some(replace_suffix(word, 3, "f"))
                } else {
                    None
                }
            }
            SingularRule::IesToY => {
                let consonant_ies = ends_with_ci(word, "quies")
                    || (ends_with_ci(word, "ies")
                        && char_before(word, 3).is_some_and(is_consonant));
                consonant_ies.then(|| replace_suffix(word, 3, "y"))
            }
            SingularRule::StripEs => self.strip_es(word),
            SingularRule::StripS => (ends_with_ci(word, "s") && !ends_with_ci(word, "ss"))
                .then(|| stem(word, 1).to_string()),
        }
    }

    fn strip_es(&self, word: &str) -> Option<String> {
        if ends_with_ci(word, "sses") || ends_with_ci(word, "ches") {
            // `-che`/`-sse` singulars only lost their `s`; leave that to StripS.
            if self.e_singulars.contains(last_word(stem(word, 1)).as_str()) {
                return None;
            }
            return Some(stem(word, 2).to_string());
        }
        if ["shes", "xes", "zzes", "tzes"]
            .iter()
            .any(|end| ends_with_ci(word, end))
        {
            return Some(stem(word, 2).to_string());
        }
        if ends_with_ci(word, "oes") {
            if self.oe_singulars.contains(last_word(stem(word, 1)).as_str()) {
                return None;
            }
            return char_before(word, 3)
                .is_some_and(is_consonant)
                .then(|| stem(word, 2).to_string());
        }
        if ends_with_ci(word, "ses") && self.s_singulars.contains(last_word(stem(word, 2)).as_str())
        {
            return Some(stem(word, 2).to_string());
        }
        None
    }
}

/// Case-insensitive ASCII suffix test on raw bytes.
///
/// A match guarantees the trailing `suffix.len()` bytes are ASCII, so slicing
/// there lands on a char boundary.
#[inline]
fn ends_with_ci(word: &str, suffix: &str) -> bool {
    let (w, s) = (word.as_bytes(), suffix.as_bytes());
    w.len() >= s.len() && w[w.len() - s.len()..].eq_ignore_ascii_case(s)
}

/// `word` without its last `n` bytes. Only called after [`ends_with_ci`].
#[inline]
fn stem(word: &str, n: usize) -> &str {
    &word[..word.len() - n]
}

#[inline]
fn char_before(word: &str, n: usize) -> Option<char> {
    stem(word, n).chars().next_back()
}

#[inline]
fn is_vowel(c: char) -> bool {
    matches!(c.to_ascii_lowercase(), 'a' | 'e' | 'i' | 'o' | 'u')
}

#[inline]
fn is_consonant(c: char) -> bool {
    c.is_ascii_alphabetic() && !is_vowel(c)
}

/// Lowercase last word of a phrase, split on spaces and hyphens.
fn last_word(word: &str) -> String {
    word.rsplit([' ', '-']).next().unwrap_or(word).to_lowercase()
}

fn append(word: &str, suffix: &str) -> String {
    format!("{word}{}", match_suffix(word, suffix))
}

fn replace_suffix(word: &str, drop: usize, suffix: &str) -> String {
    format!("{}{}", stem(word, drop), match_suffix(word, suffix))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn plural(word: &str) -> String {
        SuffixCascade::new().pluralize(word).1
    }

    fn plural_rule(word: &str) -> PluralRule {
        SuffixCascade::new().pluralize(word).0
    }

    fn singular(word: &str) -> Option<String> {
        SuffixCascade::new().singularize(word).map(|(_, s)| s)
    }

    #[test]
    fn man_to_men() {
        assert_eq!(plural("policeman"), "policemen");
        assert_eq!(plural("human"), "humans");
        assert_eq!(plural("superhuman"), "superhumans");
        assert_eq!(plural("German"), "Germans");
        assert_eq!(plural("talisman"), "talismans");
    }

    #[test]
    fn sibilants() {
        assert_eq!(plural("box"), "boxes");
        assert_eq!(plural("bus"), "buses");
        assert_eq!(plural("class"), "classes");
        assert_eq!(plural("dish"), "dishes");
        assert_eq!(plural("church"), "churches");
        assert_eq!(plural("buzz"), "buzzes");
        assert_eq!(plural("Jones"), "Joneses");
    }

    #[test]
    fn consonant_y() {
        assert_eq!(plural("city"), "cities");
        assert_eq!(plural("day"), "days");
        assert_eq!(plural("soliloquy"), "soliloquies");
        assert_eq!(plural("Kennedy"), "Kennedys");
        assert_eq!(plural("CITY"), "CITIES");
    }

    #[test]
    fn vesification() {
        assert_eq!(plural("knife"), "knives");
        assert_eq!(plural("wolf"), "wolves");
        assert_eq!(plural("kitchen knife"), "kitchen knives");
        assert_eq!(plural("chief"), "chiefs");
        assert_eq!(plural("roof"), "roofs");
        assert_eq!(plural_rule("leaf"), PluralRule::Vesify);
    }

    #[test]
    fn o_endings() {
        assert_eq!(plural("radio"), "radios");
        assert_eq!(plural("zoo"), "zoos");
        assert_eq!(plural("photo"), "photos");
        assert_eq!(plural("grand piano"), "grand pianos");
        assert_eq!(plural("potato"), "potatoes");
        assert_eq!(plural("hero"), "heroes");
        assert_eq!(plural_rule("radio"), PluralRule::VowelO);
        assert_eq!(plural_rule("photo"), PluralRule::PlainO);
        assert_eq!(plural_rule("echo"), PluralRule::ConsonantO);
    }

    #[test]
    fn default_append() {
        assert_eq!(plural("cat"), "cats");
        assert_eq!(plural("CAT"), "CATS");
        assert_eq!(plural_rule("cat"), PluralRule::AppendS);
    }

    #[test]
    fn cascade_order_is_first_match() {
        // `-man` beats the default; `-s` sibilant beats `+s`.
        assert_eq!(plural_rule("fireman"), PluralRule::ManToMen);
        assert_eq!(plural_rule("gas"), PluralRule::Sibilant);
        // `-quy` is classified before the vowel check could reject it.
        assert_eq!(plural_rule("colloquy"), PluralRule::ConsonantY);
    }

    #[test]
    fn suffix_case_leaves_stem_alone() {
        assert_eq!(plural("BOX"), "BOXES");
        assert_eq!(plural("Box"), "Boxes");
        assert_eq!(plural("KNIFE"), "KNIVES");
        assert_eq!(plural("POLICEMAN"), "POLICEMEN");
    }

    #[test]
    fn singular_rules() {
        assert_eq!(singular("policemen").as_deref(), Some("policeman"));
        assert_eq!(singular("specimen"), None);
        assert_eq!(singular("knives").as_deref(), Some("knife"));
        assert_eq!(singular("wolves").as_deref(), Some("wolf"));
        assert_eq!(singular("olives").as_deref(), Some("olive"));
        assert_eq!(singular("cities").as_deref(), Some("city"));
        assert_eq!(singular("soliloquies").as_deref(), Some("soliloquy"));
        assert_eq!(singular("boxes").as_deref(), Some("box"));
        assert_eq!(singular("classes").as_deref(), Some("class"));
        assert_eq!(singular("churches").as_deref(), Some("church"));
        assert_eq!(singular("buses").as_deref(), Some("bus"));
        assert_eq!(singular("potatoes").as_deref(), Some("potato"));
        assert_eq!(singular("shoes").as_deref(), Some("shoe"));
        assert_eq!(singular("aches").as_deref(), Some("ache"));
        assert_eq!(singular("houses").as_deref(), Some("house"));
        assert_eq!(singular("cats").as_deref(), Some("cat"));
        assert_eq!(singular("glass"), None);
        assert_eq!(singular("cat"), None);
    }

    #[test]
    fn singular_keeps_case() {
        assert_eq!(singular("KNIVES").as_deref(), Some("KNIFE"));
        assert_eq!(singular("Cities").as_deref(), Some("City"));
        assert_eq!(singular("BOXES").as_deref(), Some("BOX"));
    }

    #[test]
    fn non_ascii_words_do_not_panic() {
        assert_eq!(plural("café"), "cafés");
        assert_eq!(plural("日本"), "日本s");
        assert_eq!(singular("naïves").as_deref(), Some("naïve"));
        assert_eq!(singular("ñ"), None);
    }

    #[test]
    fn shared_instance_is_reused() {
        let a = SuffixCascade::shared();
        let b = SuffixCascade::shared();
        assert!(Arc::ptr_eq(&a, &b));
    }
}

//! Incremental romaji -> kana conversion (C2).
//!
//! [`RomKanaConverter`] owns a small pending-romaji buffer and an output
//! accumulator, the same split the teacher's `InputState::Kana { romaji,
//! state }` makes between the not-yet-resolved keystrokes and the kana
//! already committed. Callers push one character at a time via [`append`]
//! and read back [`preedit`](RomKanaConverter::preedit) (the raw romaji still
//! pending) and [`output`](RomKanaConverter::output) (kana resolved so far).

use crate::rules::{self, RuleMatch};

/// Which kana family committed output renders in.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KanaMode {
    Hiragana,
    Katakana,
    Hankaku,
}

#[derive(Debug, Clone, Default)]
pub struct RomKanaConverter {
    mode_katakana: bool,
    mode_hankaku: bool,
    pending: String,
    output: String,
}

impl RomKanaConverter {
    pub fn new() -> Self {
        Self::default()
    }

    fn mode(&self) -> KanaMode {
        if self.mode_hankaku {
            KanaMode::Hankaku
        } else if self.mode_katakana {
            KanaMode::Katakana
        } else {
            KanaMode::Hiragana
        }
    }

    pub fn set_kana_mode(&mut self, mode: KanaMode) {
        self.mode_katakana = matches!(mode, KanaMode::Katakana);
        self.mode_hankaku = matches!(mode, KanaMode::Hankaku);
    }

    /// Romaji accumulated but not yet resolved to kana (what a front end
    /// shows as the trailing, still-editable part of the preedit).
    pub fn preedit(&self) -> &str {
        &self.pending
    }

    /// Kana committed since the last [`reset`](Self::reset).
    pub fn output(&self) -> &str {
        &self.output
    }

    pub fn reset(&mut self) {
        self.pending.clear();
        self.output.clear();
    }

    /// Drops just the committed output, keeping any romaji still pending.
    /// Used when the caller has taken ownership of `output` (e.g. appended
    /// it to a midashi buffer) and wants the converter ready for more input.
    pub fn take_output(&mut self) -> String {
        std::mem::take(&mut self.output)
    }

    /// Seeds `output` directly with already-resolved kana, bypassing romaji
    /// resolution. Used when starting an okurigana sub-converter from a
    /// trigger letter that resolved to a complete mora on its own (a bare
    /// vowel) before the sub-converter existed to resolve it itself.
    pub(crate) fn seed_output(&mut self, kana: &str) {
        self.output.push_str(kana);
    }

    pub fn is_empty(&self) -> bool {
        self.pending.is_empty() && self.output.is_empty()
    }

    /// Appends one typed character and resolves as much of the pending
    /// romaji as the table allows. Returns `true` if anything was committed
    /// to `output`.
    pub fn append(&mut self, c: char) -> bool {
        let before = self.output.len();
        self.pending.push(c.to_ascii_lowercase());
        self.resolve();
        self.output.len() != before
    }

    /// Removes the last pending character, or the last committed kana if
    /// nothing is pending. Mirrors the teacher's `Backspace` arm in
    /// `handle_kana`, which pops `romaji` first and only falls through to
    /// the yomi buffer once it's empty.
    pub fn backspace(&mut self) -> bool {
        if self.pending.pop().is_some() {
            return true;
        }
        self.output.pop().is_some()
    }

    /// Forces a lone pending `n` to commit as ん/ン/ﾝ. `libskk` calls this
    /// `output_nn_if_any`: a trailing `n` is only a prefix match against
    /// `na`/`ni`/.../`nya`.../`nn`, so without an explicit flush it would
    /// otherwise sit pending forever at end of input.
    pub fn flush_trailing_n(&mut self) {
        if self.pending == "n" {
            self.commit_n();
        }
    }

    fn commit_n(&mut self) {
        let rule = match rules::search("nn") {
            RuleMatch::Success(rule) => rule,
            _ => unreachable!("nn is always a table entry"),
        };
        self.output.push_str(rule.render(self.mode()));
        self.pending.clear();
    }

    /// Resolves `self.pending` as far as it will go: commits on an exact
    /// match, geminates on a doubled consonant, flushes a disambiguated `n`,
    /// and otherwise waits for more input.
    fn resolve(&mut self) {
        loop {
            if self.try_sokuon() {
                continue;
            }
            match rules::search(&self.pending) {
                RuleMatch::Success(rule) => {
                    self.output.push_str(rule.render(self.mode()));
                    self.pending.clear();
                    return;
                }
                RuleMatch::Prefix => return,
                RuleMatch::Failure => {
                    if self.try_n_flush() {
                        continue;
                    }
                    if !self.drop_unresolvable_prefix() {
                        return;
                    }
                }
            }
        }
    }

    /// `kk`, `tt`, ... -> small tsu + the second consonant carried forward.
    fn try_sokuon(&mut self) -> bool {
        let mut chars = self.pending.chars();
        let (Some(first), Some(second), None) = (chars.next(), chars.next(), chars.next()) else {
            return false;
        };
        if first == second && rules::is_sokuon_consonant(first) {
            self.output.push_str(rules::sokuon(self.mode()));
            self.pending = second.to_string();
            true
        } else {
            false
        }
    }

    /// `n` followed by something that can't extend an n-rule (not a vowel,
    /// `y`, `n` or `'`) commits the pending `n` as ん and leaves the rest for
    /// the next iteration of [`resolve`].
    fn try_n_flush(&mut self) -> bool {
        let Some(rest) = self.pending.strip_prefix('n') else {
            return false;
        };
        if rest.is_empty() {
            return false;
        }
        let next_extends_n = matches!(rest.chars().next(), Some('a' | 'i' | 'u' | 'e' | 'o' | 'y' | 'n' | '\''));
        if next_extends_n {
            return false;
        }
        self.commit_n();
        self.pending = rest.to_string();
        true
    }

    /// No rule starts with the pending buffer at all: the leading character
    /// can never resolve to anything (stray punctuation, a stray consonant
    /// after an unrelated failure) and is dropped so the rest of the buffer
    /// gets a chance.
    fn drop_unresolvable_prefix(&mut self) -> bool {
        if self.pending.chars().count() <= 1 {
            self.pending.clear();
            return false;
        }
        let rest: String = self.pending.chars().skip(1).collect();
        self.pending = rest;
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn convert(input: &str) -> RomKanaConverter {
        let mut c = RomKanaConverter::new();
        for ch in input.chars() {
            c.append(ch);
        }
        c
    }

    #[test]
    fn simple_syllable() {
        let c = convert("ka");
        assert_eq!(c.output(), "か");
        assert_eq!(c.preedit(), "");
    }

    #[test]
    fn prefix_stays_pending() {
        let c = convert("k");
        assert_eq!(c.output(), "");
        assert_eq!(c.preedit(), "k");
    }

    #[test]
    fn gemination_produces_sokuon() {
        let c = convert("kka");
        assert_eq!(c.output(), "っか");
    }

    #[test]
    fn n_flush_on_non_vowel_consonant() {
        // libskk rom-kana.c: "min" converts to み + pending "n", which a
        // trailing flush resolves to ん.
        let mut c = convert("min");
        assert_eq!(c.output(), "み");
        assert_eq!(c.preedit(), "n");
        c.flush_trailing_n();
        assert_eq!(c.output(), "みん");
        assert_eq!(c.preedit(), "");
    }

    #[test]
    fn n_flush_mid_stream_before_consonant() {
        // "nb" has no rule starting with "nb"; a bare consonant after "n"
        // flushes immediately rather than waiting for end of input.
        let c = convert("nb");
        assert_eq!(c.output(), "ん");
        assert_eq!(c.preedit(), "b");
    }

    #[test]
    fn double_n_commits_eagerly_without_disambiguation() {
        // "nn" is a terminal table entry, so it commits to ん as soon as the
        // second "n" arrives -- it does not wait to see if a vowel follows
        // to try to re-split as "n" + "na". Getting んな out of this
        // requires the apostrophe: "n'na".
        let c = convert("nna");
        assert_eq!(c.output(), "んあ");

        let c = convert("n'na");
        assert_eq!(c.output(), "んな");
    }

    #[test]
    fn trailing_punctuation_after_flush() {
        let mut c = convert("desu.");
        c.flush_trailing_n();
        assert_eq!(c.output(), "です。");
    }

    #[test]
    fn katakana_mode_renders_katakana() {
        let mut c = RomKanaConverter::new();
        c.set_kana_mode(KanaMode::Katakana);
        for ch in "min".chars() {
            c.append(ch);
        }
        c.flush_trailing_n();
        assert_eq!(c.output(), "ミン");
    }

    #[test]
    fn backspace_pops_pending_before_output() {
        let mut c = convert("k");
        assert!(c.backspace());
        assert_eq!(c.preedit(), "");
        assert_eq!(c.output(), "");

        let mut c = convert("ka");
        assert!(c.backspace());
        assert_eq!(c.output(), "");
    }
}

//! Dictionary lookup, registration and completion (C4).
//!
//! `UserDictionary` generalizes the teacher's read-only, multi-file
//! `Jisyo(Vec<SingleJisyo>)` (`jisyo.rs`) into something that can also
//! [`register`](Dictionary::register) and [`purge`](Dictionary::purge) new
//! candidates, which the teacher's on-disk dictionary never needed to do.
//! `StaticDictionary` keeps the teacher's read-only, sorted/binary-searched
//! shape for loaded jisyo files; `LayeredDictionary` lets a mutable user
//! dictionary sit in front of one or more of those, the way most SKK setups
//! layer a personal dictionary over a shared system one.

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::{Result, SkkError};

/// One conversion candidate: the kanji/word text plus an optional
/// dictionary annotation (the part after `;` in `/cand;annotation/`).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Candidate {
    pub text: String,
    pub annotation: Option<String>,
}

impl Candidate {
    pub fn new(text: impl Into<String>) -> Self {
        Self { text: text.into(), annotation: None }
    }

    /// Parses one `/`-delimited jisyo candidate field (`cand` or
    /// `cand;annotation`), the same split the teacher's `InputState::candidate`
    /// does on `;`.
    fn parse(field: &str) -> Self {
        match field.split_once(';') {
            Some((text, annotation)) => Self { text: text.to_string(), annotation: Some(annotation.to_string()) },
            None => Self { text: field.to_string(), annotation: None },
        }
    }
}

/// All candidates registered for one midashi (reading), most-preferred
/// first.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DictEntry {
    pub midashi: String,
    pub candidates: Vec<Candidate>,
}

/// The operations a conversion `Context` needs from a dictionary. `lookup`
/// and `complete` are read paths; `select`/`register`/`purge` are the only
/// ways a dictionary's state changes.
pub trait Dictionary {
    fn lookup(&self, midashi: &str) -> Vec<Candidate>;
    fn select(&mut self, midashi: &str, idx: usize);
    fn register(&mut self, midashi: &str, text: &str);
    fn purge(&mut self, midashi: &str, text: &str);
    /// Finds a midashi starting with `prefix` (but not equal to it) that
    /// isn't already in `visited`, so a caller can walk forward through every
    /// sibling match across a completion cycle instead of only ever seeing
    /// the first one.
    fn complete(&mut self, prefix: &str, visited: &[String]) -> Option<String>;
}

/// An in-memory, mutable dictionary ordered most-recently-used first, the
/// way real SKK user dictionaries promote a just-selected or just-registered
/// entry so it's offered first next time.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct UserDictionary {
    entries: Vec<DictEntry>,
}

impl UserDictionary {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn entries(&self) -> &[DictEntry] {
        &self.entries
    }

    fn position(&self, midashi: &str) -> Option<usize> {
        self.entries.iter().position(|e| e.midashi == midashi)
    }

    fn promote(&mut self, idx: usize) {
        if idx != 0 {
            let entry = self.entries.remove(idx);
            self.entries.insert(0, entry);
        }
    }
}

impl Dictionary for UserDictionary {
    fn lookup(&self, midashi: &str) -> Vec<Candidate> {
        self.entries.iter().find(|e| e.midashi == midashi).map(|e| e.candidates.clone()).unwrap_or_default()
    }

    fn select(&mut self, midashi: &str, idx: usize) {
        let Some(pos) = self.position(midashi) else { return };
        if idx != 0 && idx < self.entries[pos].candidates.len() {
            let candidate = self.entries[pos].candidates.remove(idx);
            self.entries[pos].candidates.insert(0, candidate);
        }
        self.promote(pos);
    }

    fn register(&mut self, midashi: &str, text: &str) {
        if text.is_empty() {
            return;
        }
        match self.position(midashi) {
            Some(pos) => {
                self.entries[pos].candidates.retain(|c| c.text != text);
                self.entries[pos].candidates.insert(0, Candidate::new(text));
                self.promote(pos);
            }
            None => {
                self.entries.insert(
                    0,
                    DictEntry { midashi: midashi.to_string(), candidates: vec![Candidate::new(text)] },
                );
            }
        }
    }

    fn purge(&mut self, midashi: &str, text: &str) {
        let Some(pos) = self.position(midashi) else { return };
        self.entries[pos].candidates.retain(|c| c.text != text);
        if self.entries[pos].candidates.is_empty() {
            self.entries.remove(pos);
        }
    }

    fn complete(&mut self, prefix: &str, visited: &[String]) -> Option<String> {
        if prefix.is_empty() {
            return None;
        }
        self.entries
            .iter()
            .find(|e| e.midashi != prefix && e.midashi.starts_with(prefix) && !visited.iter().any(|v| v == &e.midashi))
            .map(|e| e.midashi.clone())
    }
}

/// A read-only dictionary parsed from SKK jisyo-format text, sorted and
/// binary-searched the way the teacher's `SingleJisyo` is (`jisyo.rs`), but
/// holding fully parsed entries up front rather than byte offsets into the
/// raw file, since this crate doesn't need to avoid the parse cost of a
/// multi-megabyte shared system dictionary the way the original terminal
/// front-end's `Jisyo` did.
#[derive(Debug, Clone, Default)]
pub struct StaticDictionary {
    entries: Vec<DictEntry>,
}

impl StaticDictionary {
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let text = std::fs::read_to_string(path)?;
        Self::from_str(&text)
    }

    pub fn from_str(text: &str) -> Result<Self> {
        let mut entries = Vec::new();
        for (line_no, line) in text.lines().enumerate() {
            let trimmed = line.trim();
            if trimmed.is_empty() || trimmed.starts_with(';') {
                continue;
            }
            let Some((midashi, rest)) = trimmed.split_once(' ') else {
                return Err(SkkError::MalformedDictionaryLine { line: line_no + 1 });
            };
            if !rest.starts_with('/') {
                return Err(SkkError::MalformedDictionaryLine { line: line_no + 1 });
            }
            let candidates: Vec<Candidate> = rest.split('/').filter(|s| !s.is_empty()).map(Candidate::parse).collect();
            if candidates.is_empty() {
                return Err(SkkError::MalformedDictionaryLine { line: line_no + 1 });
            }
            entries.push(DictEntry { midashi: midashi.to_string(), candidates });
        }
        entries.sort_by(|a, b| a.midashi.cmp(&b.midashi));
        Ok(Self { entries })
    }

    fn find(&self, midashi: &str) -> Option<&DictEntry> {
        self.entries.binary_search_by(|e| e.midashi.as_str().cmp(midashi)).ok().map(|i| &self.entries[i])
    }
}

impl Dictionary for StaticDictionary {
    fn lookup(&self, midashi: &str) -> Vec<Candidate> {
        self.find(midashi).map(|e| e.candidates.clone()).unwrap_or_default()
    }

    fn select(&mut self, _midashi: &str, _idx: usize) {}

    fn register(&mut self, _midashi: &str, _text: &str) {}

    fn purge(&mut self, _midashi: &str, _text: &str) {}

    fn complete(&mut self, prefix: &str, visited: &[String]) -> Option<String> {
        if prefix.is_empty() {
            return None;
        }
        let i = self.entries.partition_point(|e| e.midashi.as_str() < prefix);
        self.entries[i..]
            .iter()
            .find(|e| e.midashi != prefix && e.midashi.starts_with(prefix) && !visited.iter().any(|v| v == &e.midashi))
            .map(|e| e.midashi.clone())
    }
}

/// A mutable user dictionary layered in front of any number of read-only
/// static ones. Reads check the user layer first, then each static layer in
/// order, concatenating candidates (mirrors the teacher's `Jisyo::lookup`
/// merging across its `Vec<SingleJisyo>`). All writes land in the user
/// layer; the static layers are immutable by construction.
#[derive(Debug, Default)]
pub struct LayeredDictionary {
    pub user: UserDictionary,
    statics: Vec<StaticDictionary>,
}

impl LayeredDictionary {
    pub fn new(user: UserDictionary, statics: Vec<StaticDictionary>) -> Self {
        Self { user, statics }
    }
}

impl Dictionary for LayeredDictionary {
    fn lookup(&self, midashi: &str) -> Vec<Candidate> {
        let mut out = self.user.lookup(midashi);
        for layer in &self.statics {
            for candidate in layer.lookup(midashi) {
                if !out.iter().any(|c| c.text == candidate.text) {
                    out.push(candidate);
                }
            }
        }
        out
    }

    fn select(&mut self, midashi: &str, idx: usize) {
        self.user.select(midashi, idx);
    }

    fn register(&mut self, midashi: &str, text: &str) {
        self.user.register(midashi, text);
    }

    fn purge(&mut self, midashi: &str, text: &str) {
        self.user.purge(midashi, text);
    }

    fn complete(&mut self, prefix: &str, visited: &[String]) -> Option<String> {
        if let Some(found) = self.user.complete(prefix, visited) {
            return Some(found);
        }
        self.statics.iter_mut().find_map(|layer| layer.complete(prefix, visited))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn register_then_lookup_roundtrips() {
        let mut dict = UserDictionary::new();
        dict.register("かんが", "考");
        assert_eq!(dict.lookup("かんが"), vec![Candidate::new("考")]);
    }

    #[test]
    fn register_promotes_existing_entry_and_dedupes() {
        let mut dict = UserDictionary::new();
        dict.register("あい", "愛");
        dict.register("あい", "哀");
        dict.register("あい", "愛");
        assert_eq!(dict.lookup("あい"), vec![Candidate::new("愛"), Candidate::new("哀")]);
    }

    #[test]
    fn select_reorders_candidates_and_entry() {
        let mut dict = UserDictionary::new();
        dict.register("あい", "愛");
        dict.register("あい", "哀"); // candidates are now [哀, 愛]
        dict.register("べつ", "別"); // べつ is now the most-recent entry
        // Selecting index 1 ("愛") should move it to the front of あい's
        // candidates and promote あい back to the front of the entry list.
        dict.select("あい", 1);
        assert_eq!(dict.lookup("あい"), vec![Candidate::new("愛"), Candidate::new("哀")]);
        assert_eq!(dict.entries()[0].midashi, "あい");
    }

    #[test]
    fn purge_removes_candidate_and_drops_empty_entry() {
        let mut dict = UserDictionary::new();
        dict.register("あい", "愛");
        dict.purge("あい", "愛");
        assert!(dict.lookup("あい").is_empty());
        assert!(dict.entries().is_empty());
    }

    #[test]
    fn completion_finds_most_recent_prefix_match() {
        let mut dict = UserDictionary::new();
        dict.register("かんきょう", "環境");
        dict.register("かんじ", "漢字");
        assert_eq!(dict.complete("かん", &[]), Some("かんじ".to_string()));
    }

    #[test]
    fn completion_cycle_skips_already_visited_entries() {
        let mut dict = UserDictionary::new();
        // Registered oldest-first; MRU ordering puts あかつき ahead of あかね.
        dict.register("あかつき", "暁");
        dict.register("あかね", "茜");
        let first = dict.complete("あか", &[]).unwrap();
        assert_eq!(first, "あかね");
        let second = dict.complete("あか", std::slice::from_ref(&first)).unwrap();
        assert_eq!(second, "あかつき");
        // A third Tab has nothing left to cycle to.
        assert_eq!(dict.complete("あか", &[first, second]), None);
    }

    #[test]
    fn static_dictionary_parses_jisyo_lines() {
        let text = ";; comment\nあい /愛/哀;sorrow/\nかぱ /下/破/\n";
        let dict = StaticDictionary::from_str(text).unwrap();
        assert_eq!(dict.lookup("あい"), vec![Candidate::new("愛"), Candidate { text: "哀".into(), annotation: Some("sorrow".into()) }]);
        assert_eq!(dict.lookup("かぱ"), vec![Candidate::new("下"), Candidate::new("破")]);
        assert!(dict.lookup("missing").is_empty());
    }

    #[test]
    fn static_dictionary_rejects_malformed_lines() {
        let err = StaticDictionary::from_str("not-a-jisyo-line\n").unwrap_err();
        assert!(matches!(err, SkkError::MalformedDictionaryLine { line: 1 }));
    }

    #[test]
    fn layered_dictionary_prefers_user_entries() {
        let mut user = UserDictionary::new();
        user.register("あい", "愛");
        let statics = vec![StaticDictionary::from_str("あい /哀/\n").unwrap()];
        let layered = LayeredDictionary::new(user, statics);
        assert_eq!(layered.lookup("あい"), vec![Candidate::new("愛"), Candidate::new("哀")]);
    }
}

//! The pre-conversion headword buffer (C3): the kana assembled between
//! entering `PreEdit` and asking the dictionary to convert it.
//!
//! Grounded in the teacher's `KanaState::ToBeConverted(String)` plus the
//! trailing-ascii-consonant convention its `InputState::okuri` reads off
//! that string. Real SKK jisyo entries for okuri-ari words are keyed by the
//! reading plus exactly one lowercase romaji letter (the okurigana's
//! consonant) -- e.g. `おくr /送/` for 送る -- so `Midashi` tracks that
//! consonant as its own field rather than smuggling it into `kana` the way
//! the teacher does, and the rest of the okurigana is typed as ordinary
//! kana once conversion has already started (see
//! [`Context`](crate::context::Context)'s commit path).

#[derive(Debug, Clone, Default)]
pub struct Midashi {
    kana: String,
    okuri_consonant: Option<char>,
}

impl Midashi {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn kana(&self) -> &str {
        &self.kana
    }

    pub fn push_kana(&mut self, kana: &str) {
        self.kana.push_str(kana);
    }

    pub fn pop_kana(&mut self) -> Option<char> {
        self.kana.pop()
    }

    pub fn is_empty(&self) -> bool {
        self.kana.is_empty() && self.okuri_consonant.is_none()
    }

    pub fn is_okuri_ari(&self) -> bool {
        self.okuri_consonant.is_some()
    }

    pub fn okuri_consonant(&self) -> Option<char> {
        self.okuri_consonant
    }

    /// Marks the midashi as okuri-ari, recording the okurigana's leading
    /// consonant. Only valid once, before a candidate has been looked up;
    /// the state machine enforces ordering.
    pub fn start_okuri(&mut self, consonant: char) {
        self.okuri_consonant = Some(consonant);
    }

    pub fn cancel_okuri(&mut self) {
        self.okuri_consonant = None;
    }

    /// The string the dictionary is keyed by: the reading alone for
    /// okuri-nasi, or reading plus the bare consonant for okuri-ari.
    pub fn lookup_key(&self) -> String {
        match self.okuri_consonant {
            Some(c) => format!("{}{c}", self.kana),
            None => self.kana.clone(),
        }
    }

    /// Renders the `▽`-prefixed preedit, including any romaji still pending
    /// in the active [`RomKanaConverter`](crate::rom_kana::RomKanaConverter).
    pub fn render(&self, pending_romaji: &str) -> String {
        let mut s = String::from("\u{25BD}"); // ▽
        s.push_str(&self.kana);
        if let Some(c) = self.okuri_consonant {
            s.push('*');
            s.push(c);
        }
        s.push_str(pending_romaji);
        s
    }
}

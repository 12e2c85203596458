//! The conversion state machine (C5) and dict-edit recursion (C6, C7, C8).
//!
//! Grounded throughout in the teacher's `engine.rs`/`state.rs` split between
//! "what key was pressed" and "what phase are we in", generalized from the
//! teacher's single `InputState` enum into a small `Front` struct (phase +
//! the midashi/candidate/rom-kana state that goes with it) so that a
//! dict-edit frame can push a *copy* of the struct rather than needing a
//! recursive `Box<Context<D>>` — same recursive-editing behavior, without
//! fighting Rust's sizing rules for a self-referential generic.
//!
//! The exact transition semantics below (okuri-ari triggering lookup the
//! instant the okurigana resolves with nothing pending, dict-edit
//! registration committing immediately into the parent on `\n`, a lone `q`
//! converting and committing the whole preedit rather than just toggling
//! mode) are not spelled out unambiguously in prose anywhere; they're
//! reverse-engineered from `original_source/tests/context.c`'s
//! `check_transitions` tables, which is the actual behavioral oracle this
//! engine is built to match.

use crate::dictionary::{Candidate, Dictionary};
use crate::key::KeyEvent;
use crate::midashi::Midashi;
use crate::rom_kana::{KanaMode, RomKanaConverter};
use crate::rules;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputMode {
    Hiragana,
    Katakana,
    HankakuKatakana,
    Latin,
    WideLatin,
}

impl InputMode {
    fn kana_mode(self) -> KanaMode {
        match self {
            InputMode::Hiragana => KanaMode::Hiragana,
            InputMode::Katakana => KanaMode::Katakana,
            InputMode::HankakuKatakana => KanaMode::Hankaku,
            InputMode::Latin | InputMode::WideLatin => KanaMode::Hiragana,
        }
    }

    /// How a midashi's canonical hiragana reading re-renders for display
    /// while this mode is active (the PreEdit rom-kana converter always
    /// assembles in hiragana internally, purely so dictionary lookups stay
    /// correctly keyed regardless of mode).
    fn render_reading<'a>(self, reading: &'a str, scratch: &'a mut String) -> &'a str {
        match self {
            InputMode::Hiragana | InputMode::Latin | InputMode::WideLatin => reading,
            InputMode::Katakana => {
                *scratch = rules::to_katakana(reading);
                scratch
            }
            InputMode::HankakuKatakana => {
                *scratch = rules::to_hankaku(reading);
                scratch
            }
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
enum Phase {
    Direct,
    PreEdit,
    Select,
    Abbrev,
    Kuten,
}

/// The okurigana sub-conversion started by an uppercase key mid-midashi.
/// The triggering consonant itself is the dictionary key suffix --
/// independent of whatever kana the conjugation actually spells out (real
/// SKK jisyo entries key okuri-ari words by this trigger consonant, not by
/// the okurigana text itself, precisely so 踏んだ and 踏む can share a kanji
/// root under different keys) -- and lives on `Midashi::okuri_consonant`,
/// not duplicated here.
#[derive(Debug, Clone)]
struct OkuriBuffer {
    conv: RomKanaConverter,
    /// Frozen once a lookup succeeds and Select is entered; nothing further
    /// feeds `conv` after that point.
    frozen_kana: Option<String>,
}

#[derive(Debug, Clone, Default)]
struct KutenBuffer {
    digits: String,
}

/// Everything that changes per "nesting level": the top `Context` and every
/// `DictEditFrame` share this shape, since a dict-edit's inner editor is
/// just another conversion session.
#[derive(Debug, Clone)]
struct Front {
    phase: Phase,
    rom_kana: RomKanaConverter,
    midashi: Midashi,
    okuri: Option<OkuriBuffer>,
    candidates: Vec<Candidate>,
    selected: usize,
    abbrev: String,
    kuten: KutenBuffer,
    output: String,
    /// Held prefix + already-shown set for the current `\t` completion
    /// cycle; `None` when no cycle is in progress. See
    /// [`Context::advance_completion`].
    completion_prefix: Option<String>,
    completion_visited: Vec<String>,
}

impl Default for Front {
    fn default() -> Self {
        Self {
            phase: Phase::Direct,
            rom_kana: RomKanaConverter::new(),
            midashi: Midashi::new(),
            okuri: None,
            candidates: Vec::new(),
            selected: 0,
            abbrev: String::new(),
            kuten: KutenBuffer::default(),
            output: String::new(),
            completion_prefix: None,
            completion_visited: Vec::new(),
        }
    }
}

struct DictEditFrame {
    target_key: String,
    saved: Front,
}

/// A SKK conversion engine: keystrokes in, committed text and a preedit
/// string out. Generic over the dictionary so a caller can supply a
/// `UserDictionary`, a `LayeredDictionary`, or any other `impl Dictionary`.
pub struct Context<D: Dictionary> {
    mode: InputMode,
    dict: D,
    front: Front,
    stack: Vec<DictEditFrame>,
}

impl<D: Dictionary> Context<D> {
    pub fn new(dict: D) -> Self {
        Self { mode: InputMode::Hiragana, dict, front: Front::default(), stack: Vec::new() }
    }

    pub fn mode(&self) -> InputMode {
        self.mode
    }

    pub fn reset(&mut self) {
        self.front = Front::default();
        self.stack.clear();
    }

    /// Total text committed since the last [`reset`](Self::reset) at the
    /// currently active nesting level. Monotonically grows except across
    /// `reset`.
    pub fn get_output(&self) -> &str {
        &self.front.output
    }

    /// The full preedit string: nested `[DictEdit]`/`[[DictEdit]]` bracket
    /// prefixes (one pair per open frame, deepest last) followed by the
    /// innermost editor's own `▽`/`▼`/abbrev/kuten display.
    pub fn get_preedit(&self) -> String {
        let mut s = String::new();
        for (depth, frame) in self.stack.iter().enumerate() {
            for _ in 0..=depth {
                s.push('[');
            }
            s.push_str("DictEdit");
            for _ in 0..=depth {
                s.push(']');
            }
            s.push(' ');
            s.push_str(&frame.target_key);
            s.push(' ');
        }
        s.push_str(&self.render_front());
        s
    }

    fn render_front(&self) -> String {
        let front = &self.front;
        let mut scratch = String::new();
        match front.phase {
            // Top-level Direct has nothing to show (its text lives in
            // `output`, read separately via `get_output`). An open DictEdit
            // frame's Direct phase is different: `output` there *is* the
            // accumulator of everything registered into this frame so far,
            // and must stay visible in the preedit body until the frame
            // closes (e.g. "[DictEdit] かぱ 下破" mid-registration).
            Phase::Direct => {
                if self.stack.is_empty() {
                    String::new()
                } else {
                    front.output.clone()
                }
            }
            Phase::Abbrev => format!("\u{25BD}{}", front.abbrev),
            Phase::Kuten => {
                let mut digits = front.kuten.digits.clone();
                while digits.len() < 4 {
                    digits.push('_');
                }
                format!("Kuten({digits})")
            }
            Phase::PreEdit => {
                let reading = self.mode.render_reading(front.midashi.kana(), &mut scratch);
                let mut s = format!("\u{25BD}{reading}");
                if let Some(okuri) = &front.okuri {
                    s.push('*');
                    s.push_str(okuri.conv.output());
                    s.push_str(okuri.conv.preedit());
                } else {
                    s.push_str(front.rom_kana.preedit());
                }
                s
            }
            Phase::Select => {
                let mut s = String::from("\u{25BC}");
                s.push_str(&front.candidates[front.selected].text);
                if let Some(okuri) = &front.okuri {
                    if let Some(kana) = &okuri.frozen_kana {
                        s.push_str(kana);
                    }
                }
                s
            }
        }
    }

    pub fn process_key_events(&mut self, s: &str) -> bool {
        let mut handled = false;
        for key in KeyEvent::parse_tokens(s) {
            handled = self.process_key(key);
        }
        handled
    }

    pub fn process_key(&mut self, key: KeyEvent) -> bool {
        tracing::trace!(?key, "process_key");
        match self.front.phase {
            Phase::Kuten => self.handle_kuten(key),
            Phase::Abbrev => self.handle_abbrev(key),
            Phase::Select => self.handle_select(key),
            Phase::PreEdit => self.handle_preedit(key),
            Phase::Direct => self.handle_direct(key),
        }
    }

    // ---------------------------------------------------------------
    // Direct phase: no active midashi. Keystrokes either switch mode,
    // start a new midashi, or flow straight through the rom-kana
    // converter into committed output.
    // ---------------------------------------------------------------

    fn handle_direct(&mut self, key: KeyEvent) -> bool {
        match key {
            KeyEvent::Enter if !self.stack.is_empty() => {
                self.finish_dict_edit_frame();
                true
            }
            KeyEvent::Control('g') if !self.stack.is_empty() => {
                self.pop_dict_edit_frame_discarding();
                true
            }
            KeyEvent::Char('q')
                if self.front.rom_kana.preedit().is_empty()
                    && matches!(self.mode, InputMode::Hiragana | InputMode::Katakana | InputMode::HankakuKatakana) =>
            {
                self.toggle_kana_mode();
                true
            }
            KeyEvent::Control('q')
                if self.front.rom_kana.preedit().is_empty()
                    && matches!(self.mode, InputMode::Hiragana | InputMode::Katakana | InputMode::HankakuKatakana) =>
            {
                self.toggle_hankaku_mode();
                true
            }
            KeyEvent::Char('l') if matches!(self.mode, InputMode::Hiragana | InputMode::Katakana | InputMode::HankakuKatakana) => {
                self.mode = InputMode::Latin;
                true
            }
            KeyEvent::Char('L') if matches!(self.mode, InputMode::Hiragana | InputMode::Katakana | InputMode::HankakuKatakana) => {
                self.mode = InputMode::WideLatin;
                true
            }
            KeyEvent::Control('j') if matches!(self.mode, InputMode::Latin | InputMode::WideLatin) => {
                self.mode = InputMode::Hiragana;
                true
            }
            KeyEvent::Char('/') if matches!(self.mode, InputMode::Hiragana | InputMode::Katakana | InputMode::HankakuKatakana) => {
                self.front.phase = Phase::Abbrev;
                self.front.abbrev.clear();
                true
            }
            KeyEvent::Char('\\') if matches!(self.mode, InputMode::Hiragana | InputMode::Katakana | InputMode::HankakuKatakana) => {
                self.front.phase = Phase::Kuten;
                self.front.kuten = KutenBuffer::default();
                true
            }
            KeyEvent::Char('\\') => {
                // Latin/WideLatin: kuten isn't available, '\\' is just a character.
                self.direct_char('\\');
                true
            }
            KeyEvent::Char(c) if matches!(self.mode, InputMode::Latin | InputMode::WideLatin) => {
                self.direct_char(c);
                true
            }
            KeyEvent::Char(c) if c.is_ascii_uppercase() => {
                self.front.phase = Phase::PreEdit;
                self.front.rom_kana.set_kana_mode(KanaMode::Hiragana);
                self.front.rom_kana.append(c.to_ascii_lowercase());
                self.absorb_main_commit();
                true
            }
            KeyEvent::Char(c) => {
                self.front.rom_kana.set_kana_mode(self.mode.kana_mode());
                let handled = self.front.rom_kana.append(c);
                let out = self.front.rom_kana.take_output();
                self.front.output.push_str(&out);
                handled || !out.is_empty()
            }
            KeyEvent::Space => {
                self.direct_char(' ');
                true
            }
            KeyEvent::Delete | KeyEvent::Control('h') => self.front.rom_kana.backspace(),
            _ => false,
        }
    }

    fn direct_char(&mut self, c: char) {
        let rendered = if self.mode == InputMode::WideLatin { rules::to_zenkaku_ascii(c) } else { c };
        self.front.output.push(rendered);
    }

    fn toggle_kana_mode(&mut self) {
        self.mode = match self.mode {
            InputMode::Hiragana => InputMode::Katakana,
            InputMode::Katakana => InputMode::Hiragana,
            InputMode::HankakuKatakana => InputMode::Hiragana,
            other => other,
        };
    }

    fn toggle_hankaku_mode(&mut self) {
        self.mode = match self.mode {
            InputMode::Hiragana | InputMode::Katakana => InputMode::HankakuKatakana,
            InputMode::HankakuKatakana => InputMode::Hiragana,
            other => other,
        };
    }

    /// Moves whatever the main rom-kana converter just committed into the
    /// midashi's reading.
    fn absorb_main_commit(&mut self) {
        let out = self.front.rom_kana.take_output();
        if !out.is_empty() {
            self.front.midashi.push_kana(&out);
        }
    }

    // ---------------------------------------------------------------
    // PreEdit: assembling a midashi (okuri-nasi or okuri-ari).
    // ---------------------------------------------------------------

    fn handle_preedit(&mut self, key: KeyEvent) -> bool {
        match key {
            KeyEvent::Control('g') => {
                self.cancel_to_direct();
                true
            }
            KeyEvent::Char('q') => {
                self.commit_preedit_with_mode_flip(false);
                true
            }
            KeyEvent::Control('q') => {
                self.commit_preedit_with_mode_flip(true);
                true
            }
            KeyEvent::Tab => {
                self.advance_completion();
                true
            }
            KeyEvent::Enter => {
                // Commit the raw, unconverted reading.
                let kana = self.front.midashi.kana().to_string();
                self.commit_and_return_to_direct(&kana);
                true
            }
            KeyEvent::Space => {
                if self.front.okuri.is_none() {
                    self.attempt_lookup();
                }
                true
            }
            KeyEvent::Delete | KeyEvent::Control('h') => {
                self.preedit_backspace();
                true
            }
            KeyEvent::Char(c) if c.is_ascii_uppercase() && self.front.okuri.is_none() && !self.front.midashi.kana().is_empty() => {
                self.start_okuri(c.to_ascii_lowercase());
                true
            }
            // Prefix conversion chain (setsuji): `>` terminates the midashi
            // with a literal `>` appended and looks up immediately, the way
            // `T y o u >` resolves 超 after と prefix-chains off an earlier
            // word (e.g. 東>氏).
            KeyEvent::Char('>') => {
                self.reset_completion();
                self.front.midashi.push_kana(">");
                self.attempt_lookup();
                true
            }
            KeyEvent::Char(c) => {
                self.feed_preedit_char(c.to_ascii_lowercase());
                true
            }
            _ => false,
        }
    }

    /// `\t` in PreEdit: the *first* Tab of a cycle captures the midashi as
    /// typed as the held prefix; every subsequent Tab (until some other key
    /// changes the midashi) reuses that same prefix and asks the dictionary
    /// to skip whatever's already been shown this cycle, so three sibling
    /// entries sharing a prefix cycle through in turn instead of the second
    /// Tab re-deriving a (non-matching) prefix from the first Tab's result.
    fn advance_completion(&mut self) {
        if self.front.completion_prefix.is_none() {
            self.front.completion_prefix = Some(self.front.midashi.kana().to_string());
        }
        let prefix = self.front.completion_prefix.clone().unwrap();
        if let Some(completed) = self.dict.complete(&prefix, &self.front.completion_visited) {
            self.front.completion_visited.push(completed.clone());
            self.front.midashi = Midashi::new();
            self.front.midashi.push_kana(&completed);
        }
    }

    /// Any edit to the midashi other than `\t` itself invalidates whatever
    /// completion cycle was in progress -- the next Tab should re-derive its
    /// held prefix from the midashi as it now stands.
    fn reset_completion(&mut self) {
        self.front.completion_prefix = None;
        self.front.completion_visited.clear();
    }

    fn preedit_backspace(&mut self) {
        self.reset_completion();
        if let Some(okuri) = self.front.okuri.as_mut() {
            if okuri.conv.backspace() {
                return;
            }
            self.front.okuri = None;
            return;
        }
        if self.front.rom_kana.backspace() {
            return;
        }
        if self.front.midashi.pop_kana().is_some() {
            return;
        }
        self.front.phase = Phase::Direct;
    }

    fn feed_preedit_char(&mut self, c: char) {
        self.reset_completion();
        if let Some(okuri) = self.front.okuri.as_mut() {
            okuri.conv.append(c);
            if okuri.conv.preedit().is_empty() {
                self.attempt_lookup();
            }
            return;
        }
        self.front.rom_kana.append(c);
        self.absorb_main_commit();
    }

    /// An uppercase key mid-midashi: feed it through the main converter so
    /// any romaji already pending from *before* the trigger (e.g. a bare
    /// `n` awaiting disambiguation) resolves and lands on the main reading
    /// the way it would have for a lowercase key. What's left is the start
    /// of the okurigana -- except when nothing was pending and the trigger
    /// letter resolved a complete mora all by itself (a bare vowel): that
    /// resolved kana *is* the okurigana, not more of the reading, since
    /// there was nothing before it for the main converter to be finishing.
    fn start_okuri(&mut self, c: char) {
        self.reset_completion();
        let had_pending = !self.front.rom_kana.preedit().is_empty();
        self.front.rom_kana.append(c);
        let committed = self.front.rom_kana.take_output();
        let remainder = self.front.rom_kana.preedit().to_string();
        self.front.rom_kana.reset();

        let mut conv = RomKanaConverter::new();
        if had_pending {
            if !committed.is_empty() {
                self.front.midashi.push_kana(&committed);
            }
            for ch in remainder.chars() {
                conv.append(ch);
            }
        } else {
            conv.seed_output(&committed);
            for ch in remainder.chars() {
                conv.append(ch);
            }
        }

        self.front.midashi.start_okuri(c);
        let lookup_now = conv.preedit().is_empty();
        self.front.okuri = Some(OkuriBuffer { conv, frozen_kana: None });
        if lookup_now {
            self.attempt_lookup();
        }
    }

    fn attempt_lookup(&mut self) {
        let key = self.front.midashi.lookup_key();
        let candidates = self.dict.lookup(&key);
        if let Some(okuri) = self.front.okuri.as_mut() {
            okuri.frozen_kana = Some(okuri.conv.output().to_string());
        }
        if candidates.is_empty() {
            self.push_dict_edit_frame(key);
        } else {
            self.front.candidates = candidates;
            self.front.selected = 0;
            self.front.phase = Phase::Select;
        }
    }

    /// `q`/`C-q` on an active midashi: render the reading (hiragana-only;
    /// any pending okurigana is dropped, matching the teacher's
    /// `delete_setsuji` discarding anything not part of the plain yomi) in
    /// whichever kana family the mode flip lands on, commit it verbatim,
    /// and flip the global mode to match -- a direct short-circuit around
    /// dictionary lookup. The target family depends on the *current* mode,
    /// not just which key was pressed: `q` in Katakana mode round-trips
    /// back to hiragana rather than re-rendering katakana, per the
    /// round-trip invariant (`A i q` commits アイ from Hiragana, あい from
    /// Katakana).
    fn commit_preedit_with_mode_flip(&mut self, hankaku: bool) {
        self.front.rom_kana.flush_trailing_n();
        self.absorb_main_commit();
        let reading = self.front.midashi.kana().to_string();

        let new_mode = if hankaku {
            match self.mode {
                InputMode::HankakuKatakana => InputMode::Hiragana,
                _ => InputMode::HankakuKatakana,
            }
        } else {
            match self.mode {
                InputMode::Katakana => InputMode::Hiragana,
                _ => InputMode::Katakana,
            }
        };
        let rendered = match new_mode {
            InputMode::Katakana => rules::to_katakana(&reading),
            InputMode::HankakuKatakana => rules::to_hankaku(&reading),
            _ => reading,
        };
        self.front.output.push_str(&rendered);
        self.mode = new_mode;
        self.front.phase = Phase::Direct;
        self.front.midashi = Midashi::new();
        self.front.okuri = None;
    }

    fn cancel_to_direct(&mut self) {
        self.front.phase = Phase::Direct;
        self.front.rom_kana.reset();
        self.front.midashi = Midashi::new();
        self.front.okuri = None;
        self.front.candidates.clear();
    }

    fn commit_and_return_to_direct(&mut self, text: &str) {
        self.front.output.push_str(text);
        self.front.phase = Phase::Direct;
        self.front.rom_kana.reset();
        self.front.midashi = Midashi::new();
        self.front.okuri = None;
        self.front.candidates.clear();
    }

    // ---------------------------------------------------------------
    // Select: a candidate list is on offer for the current midashi.
    // ---------------------------------------------------------------

    fn handle_select(&mut self, key: KeyEvent) -> bool {
        match key {
            KeyEvent::Control('g') => {
                self.front.phase = Phase::PreEdit;
                self.front.candidates.clear();
                self.front.selected = 0;
                true
            }
            KeyEvent::Space => {
                if self.front.selected + 1 < self.front.candidates.len() {
                    self.front.selected += 1;
                } else {
                    let key = self.front.midashi.lookup_key();
                    self.push_dict_edit_frame(key);
                }
                true
            }
            KeyEvent::Enter | KeyEvent::Control('j') => {
                self.commit_selected();
                true
            }
            KeyEvent::Char('X') => {
                let key = self.front.midashi.lookup_key();
                let text = self.front.candidates[self.front.selected].text.clone();
                self.dict.purge(&key, &text);
                self.front.phase = Phase::Direct;
                self.front.midashi = Midashi::new();
                self.front.okuri = None;
                self.front.candidates.clear();
                true
            }
            // Prefix conversion chain: commit the current candidate, then
            // immediately start a fresh PreEdit seeded with ">" (as in
            // 東>氏, rather than feeding ">" through RomKana like an
            // ordinary character).
            KeyEvent::Char('>') => {
                self.commit_selected();
                self.front.phase = Phase::PreEdit;
                self.front.midashi.push_kana(">");
                true
            }
            // Any other printable key commits the current candidate, then
            // reprocesses itself against the resulting Direct state -- this
            // is how `K a n g a E r` commits 考え with `r` left pending in
            // RomKana rather than being silently dropped.
            KeyEvent::Char(c) => {
                self.commit_selected();
                self.process_key(KeyEvent::Char(c))
            }
            _ => false,
        }
    }

    fn commit_selected(&mut self) {
        let key = self.front.midashi.lookup_key();
        let text = self.front.candidates[self.front.selected].text.clone();
        self.dict.select(&key, self.front.selected);
        let okuri_kana = self.front.okuri.as_ref().and_then(|o| o.frozen_kana.clone()).unwrap_or_default();
        self.front.output.push_str(&text);
        self.front.output.push_str(&okuri_kana);
        self.front.phase = Phase::Direct;
        self.front.midashi = Midashi::new();
        self.front.okuri = None;
        self.front.candidates.clear();
        self.front.selected = 0;
    }

    // ---------------------------------------------------------------
    // Abbrev: Latin-keyed reading, still dictionary-converted.
    // ---------------------------------------------------------------

    fn handle_abbrev(&mut self, key: KeyEvent) -> bool {
        match key {
            KeyEvent::Control('g') => {
                self.front.phase = Phase::Direct;
                self.front.abbrev.clear();
                true
            }
            KeyEvent::Control('q') => {
                let rendered: String = self.front.abbrev.chars().map(rules::to_zenkaku_ascii).collect();
                self.front.output.push_str(&rendered);
                self.front.phase = Phase::Direct;
                self.front.abbrev.clear();
                true
            }
            KeyEvent::Delete | KeyEvent::Control('h') => {
                if self.front.abbrev.pop().is_none() {
                    self.front.phase = Phase::Direct;
                }
                true
            }
            KeyEvent::Enter => {
                let abbrev = std::mem::take(&mut self.front.abbrev);
                self.commit_and_return_to_direct(&abbrev);
                true
            }
            KeyEvent::Space => {
                let key = self.front.abbrev.clone();
                let candidates = self.dict.lookup(&key);
                if candidates.is_empty() {
                    self.push_dict_edit_frame(key);
                } else {
                    self.front.midashi = Midashi::new();
                    self.front.midashi.push_kana(&self.front.abbrev.clone());
                    self.front.candidates = candidates;
                    self.front.selected = 0;
                    self.front.phase = Phase::Select;
                }
                true
            }
            // "" and most other punctuation is ignored in abbrev mode
            // (matches real SKK: it's a Latin-only reading buffer).
            KeyEvent::Char(c) if c.is_ascii() => {
                self.front.abbrev.push(c);
                true
            }
            _ => false,
        }
    }

    // ---------------------------------------------------------------
    // Kuten: JIS row-cell numeric code entry.
    // ---------------------------------------------------------------

    fn handle_kuten(&mut self, key: KeyEvent) -> bool {
        match key {
            KeyEvent::Control('g') => {
                self.front.phase = Phase::Direct;
                self.front.kuten = KutenBuffer::default();
                true
            }
            KeyEvent::Delete | KeyEvent::Control('h') => {
                if self.front.kuten.digits.pop().is_none() {
                    self.front.phase = Phase::Direct;
                }
                true
            }
            KeyEvent::Char(c) if c.is_ascii_digit() && self.front.kuten.digits.len() < 4 => {
                self.front.kuten.digits.push(c);
                true
            }
            KeyEvent::Enter => {
                if self.front.kuten.digits.len() == 4 {
                    if let Some(c) = kuten_lookup(&self.front.kuten.digits) {
                        self.front.output.push(c);
                    }
                    self.front.phase = Phase::Direct;
                    self.front.kuten = KutenBuffer::default();
                }
                true
            }
            _ => false,
        }
    }

    // ---------------------------------------------------------------
    // DictEdit stack.
    // ---------------------------------------------------------------

    fn push_dict_edit_frame(&mut self, target_key: String) {
        tracing::debug!(target_key, depth = self.stack.len() + 1, "entering dict-edit frame");
        let saved = std::mem::take(&mut self.front);
        self.stack.push(DictEditFrame { target_key, saved });
    }

    /// Pops the innermost frame, discarding whatever was typed in it: used
    /// both for the explicit "nothing typed yet" abandon path and for
    /// `C-g` on an already-idle inner editor.
    fn pop_dict_edit_frame_discarding(&mut self) {
        if let Some(frame) = self.stack.pop() {
            self.front = frame.saved;
        }
    }

    /// `\n` pressed with the inner editor fully idle: register whatever
    /// it accumulated as a new candidate for the frame's target key, pop
    /// the frame, and commit that candidate immediately into the newly
    /// current (parent) context. An empty accumulation abandons instead of
    /// registering an empty string (matches the teacher-independent
    /// original's "don't register empty string" fix).
    fn finish_dict_edit_frame(&mut self) {
        let Some(frame) = self.stack.pop() else { return };
        let registered = self.front.output.clone();
        if registered.is_empty() {
            self.front = frame.saved;
            return;
        }
        self.dict.register(&frame.target_key, &registered);
        self.front = frame.saved;
        self.front.output.push_str(&registered);
        self.front.phase = Phase::Direct;
        self.front.midashi = Midashi::new();
        self.front.okuri = None;
        self.front.candidates.clear();
    }
}

/// A representative subset of JIS X 0208 row 1 (記号) kuten codes, decimal
/// `kkttkk`-style two-digit-ku + two-digit-ten. Exhaustive JIS X 0208
/// coverage (the full row/cell table) is out of proportion here -- this
/// seeds enough to exercise the entry mode end to end.
const KUTEN_TABLE: &[(&str, char)] = &[
    ("0101", '\u{3000}'), //
    ("0102", '、'),
    ("0103", '。'),
    ("0104", '，'),
    ("0105", '．'),
    ("0106", '・'),
    ("0107", '：'),
    ("0108", '；'),
    ("0109", '？'),
    ("0110", '！'),
];

fn kuten_lookup(digits: &str) -> Option<char> {
    KUTEN_TABLE.iter().find(|(k, _)| *k == digits).map(|(_, c)| *c)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dictionary::{StaticDictionary, UserDictionary};

    fn fixture() -> StaticDictionary {
        StaticDictionary::from_str(
            "あい /愛/哀/\n\
             かぱ /下/破/\n\
             か /下/火/\n\
             は /破/葉/\n\
             おくr /送/\n\
             ふn /踏/\n\
             かんがe /考/\n\
             まち /町;town/街;town/\n",
        )
        .unwrap()
    }

    fn ctx() -> Context<crate::dictionary::LayeredDictionary> {
        Context::new(crate::dictionary::LayeredDictionary::new(UserDictionary::new(), vec![fixture()]))
    }

    #[test]
    fn direct_romaji_commits_and_leaves_pending_remainder() {
        let mut c = ctx();
        c.process_key_events("a i r");
        assert_eq!(c.get_output(), "あい");
    }

    #[test]
    fn preedit_assembles_and_converts() {
        let mut c = ctx();
        c.process_key_events("A");
        assert_eq!(c.get_preedit(), "\u{25BD}あ");
        c.process_key_events("i");
        assert_eq!(c.get_preedit(), "\u{25BD}あい");
        c.process_key_events("SPC");
        assert_eq!(c.get_preedit(), "\u{25BC}愛");
        c.process_key_events("\n");
        assert_eq!(c.get_output(), "愛");
    }

    #[test]
    fn select_cycles_candidates() {
        let mut c = ctx();
        c.process_key_events("A i SPC SPC");
        assert_eq!(c.get_preedit(), "\u{25BC}哀");
    }

    #[test]
    fn cancel_from_select_returns_to_preedit() {
        let mut c = ctx();
        c.process_key_events("K a SPC");
        assert_eq!(c.get_preedit(), "\u{25BC}下");
        c.process_key_events("C-g");
        assert_eq!(c.get_preedit(), "\u{25BD}か");
    }

    #[test]
    fn okuri_ari_triggers_lookup_without_space() {
        let mut c = ctx();
        c.process_key_events("O k u R u");
        assert_eq!(c.get_preedit(), "\u{25BC}送");
    }

    #[test]
    fn okuri_ari_commit_appends_okurigana() {
        let mut c = ctx();
        c.process_key_events("O k u R u \n");
        assert_eq!(c.get_output(), "送る");
    }

    #[test]
    fn okuri_trigger_that_resolves_alone_becomes_okurigana_not_reading() {
        // The okuri-head letter can itself be a complete mora (a bare
        // vowel): "かんがE" resolves "e" to "え" with nothing left pending,
        // and that "え" must become the frozen okurigana, not get absorbed
        // into the reading -- the lookup key stays "かんがe", not "かんがえe".
        let mut c = ctx();
        c.process_key_events("K a n g a E");
        assert_eq!(c.get_preedit(), "\u{25BC}考え");
    }

    #[test]
    fn select_lowercase_key_commits_then_reprocesses() {
        // "K a n g a E r": "r" is an ordinary printable key, not a mode
        // toggle -- it must commit 考え and then be fed to RomKana fresh,
        // same as any other non-control key would be.
        let mut c = ctx();
        c.process_key_events("K a n g a E r");
        assert_eq!(c.get_output(), "考え");
    }

    #[test]
    fn select_control_j_commits_like_enter() {
        let mut c = ctx();
        c.process_key_events("A i SPC C-j");
        assert_eq!(c.get_output(), "愛");
        assert_eq!(c.get_preedit(), "");
    }

    #[test]
    fn select_gt_commits_and_starts_new_preedit_seeded_with_gt() {
        let mut c = ctx();
        c.process_key_events("A i SPC >");
        assert_eq!(c.get_output(), "愛");
        assert_eq!(c.get_preedit(), "\u{25BD}>");
    }

    #[test]
    fn preedit_gt_terminates_midashi_and_looks_up() {
        let mut c = ctx();
        c.process_key_events("K a >");
        // "か>" has no entry -> immediate lookup opens dict-edit.
        assert!(c.get_preedit().starts_with("[DictEdit]"));
    }

    #[test]
    fn q_converts_preedit_to_katakana_and_flips_mode() {
        let mut c = ctx();
        c.process_key_events("A i q");
        assert_eq!(c.get_output(), "アイ");
        assert_eq!(c.mode(), InputMode::Katakana);
    }

    #[test]
    fn q_round_trips_back_to_hiragana_from_katakana_mode() {
        let mut c = ctx();
        c.process_key_events("q");
        assert_eq!(c.mode(), InputMode::Katakana);
        c.process_key_events("A i q");
        assert_eq!(c.get_output(), "あい");
        assert_eq!(c.mode(), InputMode::Hiragana);
    }

    #[test]
    fn dict_edit_registers_and_commits_immediately() {
        let mut c = ctx();
        c.process_key_events("M i s a SPC"); // みさ has no entry -> dict-edit
        assert!(c.get_preedit().starts_with("[DictEdit]"));
        // Type a plain reading inside the frame, then commit it: the \n both
        // ends the inner edit and registers + commits into the parent.
        c.process_key_events("m i s a \n");
        assert_eq!(c.get_output(), "みさ");
    }

    #[test]
    fn empty_dict_edit_registration_is_abandoned() {
        let mut c = ctx();
        c.process_key_events("M i s a SPC \n");
        assert_eq!(c.get_output(), "");
        assert_eq!(c.get_preedit(), "\u{25BD}みさ");
    }

    #[test]
    fn latin_mode_passes_through_literally() {
        let mut c = ctx();
        c.process_key_events("l");
        c.process_key_events("a");
        assert_eq!(c.get_output(), "a");
        assert_eq!(c.mode(), InputMode::Latin);
    }

    #[test]
    fn kuten_entry_commits_looked_up_character() {
        let mut c = ctx();
        c.process_key_events("\\");
        assert_eq!(c.get_preedit(), "Kuten(____)");
        c.process_key_events("0 1 0 2 \n");
        assert_eq!(c.get_output(), "、");
    }
}

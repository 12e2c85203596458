//! Canonical keystroke representation (C1).
//!
//! Real front-ends (the teacher's `frontend.rs` maps `termion::event::Key`)
//! translate a physical keyboard event into one of these. For this crate's
//! public facade and tests, [`KeyEvent::parse_tokens`] builds the same
//! values from the symbolic token grammar in the spec: tokens separated by
//! a single ASCII space, where `SPC` stands for the space key itself and a
//! one-byte control character (`\t`, `\n`, `\x7F`) is its own token.

/// A single, already-normalised keystroke.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum KeyEvent {
    /// A printable character, case preserved — uppercase is what starts or
    /// extends conversion.
    Char(char),
    /// The space key (`SPC`): a conversion trigger, not a literal space.
    Space,
    /// `\t` — completion / abbrev lookup.
    Tab,
    /// `\n` — commit.
    Enter,
    /// `\x7F` — delete.
    Delete,
    /// `C-<c>` — control plus a letter (`C-g`, `C-j`, `C-q`, `C-h`, `C-m`, ...).
    Control(char),
}

impl KeyEvent {
    /// Parses one token. Returns `None` for tokens that don't match the
    /// grammar (malformed harness input is the harness's responsibility,
    /// per spec §7).
    pub fn parse_token(token: &str) -> Option<KeyEvent> {
        if token == "SPC" {
            return Some(KeyEvent::Space);
        }
        if let Some(rest) = token.strip_prefix("C-") {
            let mut chars = rest.chars();
            let c = chars.next()?;
            if chars.next().is_some() {
                return None;
            }
            return Some(KeyEvent::Control(c));
        }
        let mut chars = token.chars();
        let only = chars.next()?;
        if chars.next().is_some() {
            return None;
        }
        Some(match only {
            '\t' => KeyEvent::Tab,
            '\n' => KeyEvent::Enter,
            '\x7F' => KeyEvent::Delete,
            c => KeyEvent::Char(c),
        })
    }

    /// Splits `s` on single ASCII spaces (not all whitespace — `\t`/`\n`
    /// tokens are themselves whitespace bytes) and parses every non-empty
    /// token, silently skipping ones that don't parse.
    pub fn parse_tokens(s: &str) -> Vec<KeyEvent> {
        s.split(' ').filter(|t| !t.is_empty()).filter_map(KeyEvent::parse_token).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_basic_tokens() {
        assert_eq!(KeyEvent::parse_token("a"), Some(KeyEvent::Char('a')));
        assert_eq!(KeyEvent::parse_token("A"), Some(KeyEvent::Char('A')));
        assert_eq!(KeyEvent::parse_token("SPC"), Some(KeyEvent::Space));
        assert_eq!(KeyEvent::parse_token("\t"), Some(KeyEvent::Tab));
        assert_eq!(KeyEvent::parse_token("\n"), Some(KeyEvent::Enter));
        assert_eq!(KeyEvent::parse_token("\x7F"), Some(KeyEvent::Delete));
        assert_eq!(KeyEvent::parse_token("C-g"), Some(KeyEvent::Control('g')));
        assert_eq!(KeyEvent::parse_token("C-j"), Some(KeyEvent::Control('j')));
    }

    #[test]
    fn parses_a_stream() {
        let events = KeyEvent::parse_tokens("a i r");
        assert_eq!(events, vec![KeyEvent::Char('a'), KeyEvent::Char('i'), KeyEvent::Char('r')]);

        let events = KeyEvent::parse_tokens("A i SPC \n");
        assert_eq!(
            events,
            vec![KeyEvent::Char('A'), KeyEvent::Char('i'), KeyEvent::Space, KeyEvent::Enter]
        );
    }

    #[test]
    fn rejects_malformed_tokens() {
        assert_eq!(KeyEvent::parse_token("C-"), None);
        assert_eq!(KeyEvent::parse_token("C-ab"), None);
        assert_eq!(KeyEvent::parse_token("ab"), None);
        assert_eq!(KeyEvent::parse_token(""), None);
    }
}

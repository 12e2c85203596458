//! Romaji-to-kana rule table and kana-mode conversion helpers (C2).
//!
//! The search strategy is the teacher's: one lexicographically sorted table,
//! binary-searched with [`slice::partition_point`] the way `romaji.rs`
//! searches `ROMAJI_TO_HIRAGANA`. Unlike the teacher's single hiragana table,
//! each row here carries all three kana renderings up front, since a
//! [`crate::rom_kana::KanaMode`] switch must be able to re-render already
//! committed kana without re-deriving it from romaji.
//!
//! Gemination (`kk` -> っ + `k`) and the trailing-`n` flush are not table
//! entries: they're a property of any consonant, not of a specific romaji
//! string, so they're handled procedurally in [`rom_kana`](crate::rom_kana).

/// One resolved kana spelling, in all three renderings a [`KanaMode`] can ask
/// for.
///
/// [`KanaMode`]: crate::rom_kana::KanaMode
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct KanaRule {
    pub hiragana: &'static str,
    pub katakana: &'static str,
    pub hankaku: &'static str,
}

impl KanaRule {
    pub fn render(&self, mode: crate::rom_kana::KanaMode) -> &'static str {
        use crate::rom_kana::KanaMode;
        match mode {
            KanaMode::Hiragana => self.hiragana,
            KanaMode::Katakana => self.katakana,
            KanaMode::Hankaku => self.hankaku,
        }
    }
}

/// Outcome of searching the table with the romaji typed so far.
pub(crate) enum RuleMatch {
    /// `romaji` is a complete, unambiguous key: commit `KanaRule` and clear
    /// the pending buffer.
    Success(KanaRule),
    /// `romaji` is a strict prefix of at least one key: keep accumulating.
    Prefix,
    /// No key starts with `romaji`: the buffer can't lead anywhere as-is.
    Failure,
}

pub(crate) fn search(romaji: &str) -> RuleMatch {
    if romaji.is_empty() {
        return RuleMatch::Failure;
    }
    let i = ROMAJI_RULES.partition_point(|(k, _)| *k < romaji);
    if let Some((k, rule)) = ROMAJI_RULES.get(i) {
        if *k == romaji {
            return RuleMatch::Success(*rule);
        }
        if k.starts_with(romaji) {
            return RuleMatch::Prefix;
        }
    }
    RuleMatch::Failure
}

/// Consonants that geminate under a doubled leading letter (`kk`, `tt`, ...).
/// `n` is excluded: a doubled `n` is the explicit ん spelling `nn`, already a
/// table entry, not gemination.
pub(crate) fn is_sokuon_consonant(c: char) -> bool {
    matches!(
        c,
        'b' | 'c' | 'd' | 'f' | 'g' | 'h' | 'j' | 'k' | 'm' | 'p' | 'q' | 'r' | 's' | 't' | 'v' | 'w' | 'x' | 'y' | 'z'
    )
}

/// The small tsu (っ/ッ/ｯ) gemination prefixes, in the three renderings.
pub(crate) fn sokuon(mode: crate::rom_kana::KanaMode) -> &'static str {
    use crate::rom_kana::KanaMode;
    match mode {
        KanaMode::Hiragana => "っ",
        KanaMode::Katakana => "ッ",
        KanaMode::Hankaku => "ｯ",
    }
}

include!(concat!(env!("CARGO_MANIFEST_DIR"), "/src/rules_table.rs"));

/// Hiragana codepoints run 0x3041-0x3096; shifting by this offset lands on
/// the matching katakana codepoint. Same trick as the teacher's
/// `convert_to_katakana`, generalised to full strings rather than `engine.rs`'s
/// per-keystroke use.
const HIRAGANA_TO_KATAKANA_OFFSET: u32 = 0x60;

/// Re-renders already-committed hiragana as katakana, for a mid-input mode
/// toggle (`q`) rather than a fresh table lookup.
///
/// ヴ has no dedicated hiragana codepoint, so the rule table spells it as
/// う + combining dakuten (`う゛`), which falls outside the shiftable range.
/// Substituting it first keeps the codepoint-shift loop generic for
/// everything else.
pub(crate) fn to_katakana(hiragana: &str) -> String {
    hiragana
        .replace('\u{3046}' /* う */, "\u{30F4}" /* ヴ */)
        .chars()
        .map(|c| {
            if ('\u{3041}'..='\u{3096}').contains(&c) {
                char::from_u32(c as u32 + HIRAGANA_TO_KATAKANA_OFFSET).unwrap()
            } else {
                c
            }
        })
        .collect()
}

/// Same idea as [`to_katakana`] but via the explicit halfwidth table, since
/// halfwidth katakana isn't reachable by a uniform codepoint shift (dakuten
/// becomes its own combining halfwidth character, `ｶﾞ` not `ガ`-shifted).
pub(crate) fn to_hankaku(hiragana: &str) -> String {
    let normalized = hiragana.replace("う゛", "ヴ");
    let mut result = String::with_capacity(normalized.len());
    for c in normalized.chars() {
        match HIRAGANA_TO_HANKAKU.binary_search_by_key(&c, |&(k, _)| k) {
            Ok(idx) => result.push_str(HIRAGANA_TO_HANKAKU[idx].1),
            Err(_) if c == '\u{30F4}' /* ヴ */ => result.push_str("ｳﾞ"),
            Err(_) => result.push(c),
        }
    }
    result
}

/// Fullwidth ASCII for `WideLatin` mode: the printable range shifts to
/// U+FF01-U+FF5E uniformly, with the space a special case (U+3000, not
/// U+FF00 which isn't assigned). Same mapping as the teacher's
/// `convert_to_zenkaku_ascii`.
pub(crate) fn to_zenkaku_ascii(c: char) -> char {
    match c {
        ' ' => '\u{3000}',
        '!'..='~' => char::from_u32(c as u32 + 0xFEE0).unwrap(),
        _ => c,
    }
}

// Generated hiragana -> halfwidth-katakana table, sorted by the hiragana char.
static HIRAGANA_TO_HANKAKU: &[(char, &str)] = &[
    ('、', "､"),
    ('。', "｡"),
    ('「', "｢"),
    ('」', "｣"),
    ('ぁ', "ｧ"),
    ('あ', "ｱ"),
    ('ぃ', "ｨ"),
    ('い', "ｲ"),
    ('ぅ', "ｩ"),
    ('う', "ｳ"),
    ('ぇ', "ｪ"),
    ('え', "ｴ"),
    ('ぉ', "ｫ"),
    ('お', "ｵ"),
    ('か', "ｶ"),
    ('が', "ｶﾞ"),
    ('き', "ｷ"),
    ('ぎ', "ｷﾞ"),
    ('く', "ｸ"),
    ('ぐ', "ｸﾞ"),
    ('け', "ｹ"),
    ('げ', "ｹﾞ"),
    ('こ', "ｺ"),
    ('ご', "ｺﾞ"),
    ('さ', "ｻ"),
    ('ざ', "ｻﾞ"),
    ('し', "ｼ"),
    ('じ', "ｼﾞ"),
    ('す', "ｽ"),
    ('ず', "ｽﾞ"),
    ('せ', "ｾ"),
    ('ぜ', "ｾﾞ"),
    ('そ', "ｿ"),
    ('ぞ', "ｿﾞ"),
    ('た', "ﾀ"),
    ('だ', "ﾀﾞ"),
    ('ち', "ﾁ"),
    ('ぢ', "ﾁﾞ"),
    ('っ', "ｯ"),
    ('つ', "ﾂ"),
    ('づ', "ﾂﾞ"),
    ('て', "ﾃ"),
    ('で', "ﾃﾞ"),
    ('と', "ﾄ"),
    ('ど', "ﾄﾞ"),
    ('な', "ﾅ"),
    ('に', "ﾆ"),
    ('ぬ', "ﾇ"),
    ('ね', "ﾈ"),
    ('の', "ﾉ"),
    ('は', "ﾊ"),
    ('ば', "ﾊﾞ"),
    ('ぱ', "ﾊﾟ"),
    ('ひ', "ﾋ"),
    ('び', "ﾋﾞ"),
    ('ぴ', "ﾋﾟ"),
    ('ふ', "ﾌ"),
    ('ぶ', "ﾌﾞ"),
    ('ぷ', "ﾌﾟ"),
    ('へ', "ﾍ"),
    ('べ', "ﾍﾞ"),
    ('ぺ', "ﾍﾟ"),
    ('ほ', "ﾎ"),
    ('ぼ', "ﾎﾞ"),
    ('ぽ', "ﾎﾟ"),
    ('ま', "ﾏ"),
    ('み', "ﾐ"),
    ('む', "ﾑ"),
    ('め', "ﾒ"),
    ('も', "ﾓ"),
    ('ゃ', "ｬ"),
    ('や', "ﾔ"),
    ('ゅ', "ｭ"),
    ('ゆ', "ﾕ"),
    ('ょ', "ｮ"),
    ('よ', "ﾖ"),
    ('ら', "ﾗ"),
    ('り', "ﾘ"),
    ('る', "ﾙ"),
    ('れ', "ﾚ"),
    ('ろ', "ﾛ"),
    ('わ', "ﾜ"),
    ('ゐ', "ｲ"),
    ('ゑ', "ｴ"),
    ('を', "ｦ"),
    ('ん', "ﾝ"),
    ('・', "･"),
    ('ー', "ｰ"),
];

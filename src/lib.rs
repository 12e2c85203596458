//! A SKK-style kana-kanji conversion engine: romaji input, okuri-ari/nasi
//! midashi assembly, candidate selection, and the recursive dict-edit
//! mini-session real SKK drops into on a lookup miss.
//!
//! The crate is organised the way the teacher's terminal front-end split
//! its logic, minus the terminal: [`key`] is the canonical keystroke type,
//! [`rules`]/[`rom_kana`] do romaji-to-kana conversion, [`midashi`] is the
//! pre-conversion headword buffer, [`dictionary`] is the lookup/register/
//! purge/complete surface, and [`context`] ties all of it into the single
//! [`Context`] state machine a front end drives one [`KeyEvent`] at a time.

mod context;
mod dictionary;
mod error;
mod key;
mod midashi;
mod rom_kana;
mod rules;

pub use context::{Context, InputMode};
pub use dictionary::{Candidate, DictEntry, Dictionary, LayeredDictionary, StaticDictionary, UserDictionary};
pub use error::{Result, SkkError};
pub use key::KeyEvent;
pub use rom_kana::KanaMode;

//! A thin terminal demo of the engine: raw-mode `/dev/tty` input, rendered
//! with `termion` the way the teacher's `frontend.rs` drives its own editor
//! loop, minus the buffer/clipboard machinery that belonged to that editor
//! rather than to the conversion engine itself. Optionally loads a jisyo
//! file for lookups, via `JISYO_PATH`; without it, only what's typed through
//! the dict-edit flow is available to convert against.

use std::fs::OpenOptions;
use std::io::{self, Write};

use termion::event::Key;
use termion::input::TermRead;
use termion::raw::IntoRawMode;
use termion::screen::IntoAlternateScreen;
use termion::{clear, cursor};

use skk_core::{Context, KeyEvent, LayeredDictionary, StaticDictionary, UserDictionary};

fn to_key_event(k: &Key) -> Option<KeyEvent> {
    match k {
        Key::Char('\n') => Some(KeyEvent::Enter),
        Key::Char('\t') => Some(KeyEvent::Tab),
        Key::Char(' ') => Some(KeyEvent::Space),
        Key::Char(c) => Some(KeyEvent::Char(*c)),
        Key::Backspace => Some(KeyEvent::Delete),
        Key::Ctrl(c) => Some(KeyEvent::Control(*c)),
        _ => None,
    }
}

fn redraw<W: Write>(out: &mut W, ctx: &Context<LayeredDictionary>) -> io::Result<()> {
    write!(out, "{}{}", clear::All, cursor::Goto(1, 1))?;
    write!(out, "{:?}  [{}]", ctx.mode(), ctx.get_preedit())?;
    write!(out, "{}{}", cursor::Goto(1, 2), ctx.get_output())?;
    out.flush()
}

fn load_dictionary() -> LayeredDictionary {
    let statics = match std::env::var("JISYO_PATH") {
        Ok(path) => match StaticDictionary::load(&path) {
            Ok(dict) => vec![dict],
            Err(err) => {
                tracing::warn!(%err, path, "failed to load JISYO_PATH, starting without it");
                Vec::new()
            }
        },
        Err(_) => Vec::new(),
    };
    LayeredDictionary::new(UserDictionary::new(), statics)
}

fn main() -> io::Result<()> {
    tracing_subscriber::fmt::init();

    let tty_in = OpenOptions::new().read(true).open("/dev/tty")?;
    let mut ui = OpenOptions::new().read(true).write(true).open("/dev/tty")?.into_raw_mode()?.into_alternate_screen()?;

    let mut ctx = Context::new(load_dictionary());
    redraw(&mut ui, &ctx)?;

    for key in tty_in.keys() {
        let k = match key {
            Ok(k) => k,
            Err(_) => continue,
        };
        if k == Key::Ctrl('c') {
            break;
        }
        if let Some(ev) = to_key_event(&k) {
            ctx.process_key(ev);
            redraw(&mut ui, &ctx)?;
        }
    }

    write!(ui, "{}{}{}", clear::All, cursor::Goto(1, 1), cursor::Show)?;
    ui.flush()
}

use crossterm::event::{poll, read, Event, KeyCode, KeyModifiers};
use crossterm::terminal;
use std::collections::HashMap;
use std::io;
use std::time::Duration;

/// the left-hand side of a qwerty keyboard folded onto the machine's 16-key
/// pad, the layout emulators conventionally use:
///
/// ```text
///   1 2 3 4         1 2 3 c
///   q w e r   maps  4 5 6 d
///   a s d f   to    7 8 9 e
///   z x c v         a 0 b f
/// ```
const QWERTY_KEYMAP: [(char, u8); 16] = [
    ('x', 0x00),
    ('1', 0x01),
    ('2', 0x02),
    ('3', 0x03),
    ('q', 0x04),
    ('w', 0x05),
    ('e', 0x06),
    ('a', 0x07),
    ('s', 0x08),
    ('d', 0x09),
    ('z', 0x0a),
    ('c', 0x0b),
    ('4', 0x0c),
    ('r', 0x0d),
    ('f', 0x0e),
    ('v', 0x0f),
];

/// what one drain of the terminal event queue produced. a terminal reports
/// presses but never releases, so a pad key counts as held for the one
/// cycle after its event
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeyPoll {
    Idle,
    Key(u8),
    Quit,
}

/// keyboard input over crossterm. owns the terminal's raw mode: it goes on
/// when this is built and off again when it drops
pub struct CrosstermInput {
    keymap: HashMap<char, u8>,
}

impl CrosstermInput {
    pub fn new() -> Result<CrosstermInput, io::Error> {
        terminal::enable_raw_mode()?;
        Ok(CrosstermInput {
            keymap: HashMap::from(QWERTY_KEYMAP),
        })
    }

    /// drain everything pending without blocking. escape or ctrl-c quits;
    /// of the mapped presses, the most recent one wins
    pub fn poll(&mut self) -> Result<KeyPoll, io::Error> {
        let mut latest = KeyPoll::Idle;
        while poll(Duration::from_millis(0))? {
            if let Event::Key(evt) = read()? {
                match evt.code {
                    KeyCode::Esc => return Ok(KeyPoll::Quit),
                    KeyCode::Char('c') if evt.modifiers.contains(KeyModifiers::CONTROL) => {
                        return Ok(KeyPoll::Quit)
                    }
                    KeyCode::Char(key) => match self.keymap.get(&key) {
                        Some(&mapped) => latest = KeyPoll::Key(mapped),
                        None => log::warn!("no pad key for {key:?}"),
                    },
                    _ => (),
                }
            }
        }
        Ok(latest)
    }
}

impl Drop for CrosstermInput {
    fn drop(&mut self) {
        terminal::disable_raw_mode().ok();
    }
}

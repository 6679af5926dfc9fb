//! ## Design
//!
//! * the machine is a library; the binary wires it to a terminal
//! * one `run_cycle()` is one instruction: fetch the word at pc, decode it,
//!   execute it, tick the two timers. the caller owns the clock, so pacing
//!   and key polling happen between cycles, not inside them
//! * the display sits behind a small trait (`Screen`) and key state is
//!   pushed into the machine as a plain value, so the core never touches
//!   a terminal and tests never need one
//! * decode failures are fatal. a word that matches no instruction means
//!   the program has jumped into data, and carrying on would only smear
//!   the damage around
//! * programs load at 0x200, glyph sprites live below it, exactly as on
//!   the hobby machines this instruction set came from
//!
//! Model
//!
//! ```text
//! main loop
//!  |-- poll the keyboard, hand the machine its key state
//!  |-- machine.run_cycle()
//!  |    |-- fetch, decode
//!  |    |-- execute (sprite draws go out through Screen)
//!  |    `-- tick timers
//!  `-- sleep to pace the clock
//! ```
pub mod display;
pub mod error;
pub mod framebuffer;
pub mod input;
pub mod machine;
pub mod memory;
pub mod opcode;
pub mod registers;
pub mod timers;

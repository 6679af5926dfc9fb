use std::io;

/// Everything that can stop the machine. All of these are fatal: the host
/// reports them and either exits or starts over with a fresh [`Machine`];
/// the engine never retries or skips past them.
///
/// [`Machine`]: crate::machine::Machine
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// the instruction word matches no known opcode bit pattern
    #[error("unrecognised opcode {word:#06x}")]
    UnknownOpcode { word: u16 },

    /// a 16th nested CALL would push past the end of the return stack
    #[error("call stack overflow")]
    StackOverflow,

    /// RET with nothing on the return stack
    #[error("return with empty call stack")]
    StackUnderflow,

    /// the program image doesn't fit between 0x200 and the end of RAM
    #[error("program image is {size} bytes but only {capacity} fit in memory")]
    ProgramTooLarge { size: usize, capacity: usize },

    /// LD F,Vx asked for a glyph the built-in font doesn't have
    #[error("no built-in glyph for {value:#04x}")]
    GlyphOutOfRange { value: u8 },

    /// the display sink failed to present a frame
    #[error(transparent)]
    Io(#[from] io::Error),
}

use crate::error::Error;
use crate::memory::PROGRAM_ADDR;

/// entries in the return stack
pub const STACK_DEPTH: usize = 16;

/// General registers, index register, program counter and the return stack.
/// v[0xF] doubles as the flag register; ALU and draw opcodes clobber it to
/// report carry, borrow or collision.
pub struct RegisterFile {
    pub v: [u8; 16],
    pub i: u16,
    pub pc: u16,
    sp: u8,
    stack: [u16; STACK_DEPTH],
}

impl RegisterFile {
    pub fn new() -> Self {
        RegisterFile {
            v: [0; 16],
            i: 0,
            pc: PROGRAM_ADDR,
            sp: 0,
            stack: [0; STACK_DEPTH],
        }
    }

    /// push a return address: bump the pointer, then write. the pointer
    /// lives in [0,16), so a push that would carry it past 15 is a fatal
    /// stack-discipline violation, not a wrap
    pub fn push(&mut self, addr: u16) -> Result<(), Error> {
        if self.sp as usize >= STACK_DEPTH - 1 {
            return Err(Error::StackOverflow);
        }
        self.sp += 1;
        self.stack[self.sp as usize] = addr;
        Ok(())
    }

    /// pop a return address: read the slot the pointer rests on, then drop
    /// the pointer. popping at 0 would take it below 0, which is fatal
    pub fn pop(&mut self) -> Result<u16, Error> {
        if self.sp == 0 {
            return Err(Error::StackUnderflow);
        }
        let addr = self.stack[self.sp as usize];
        self.sp -= 1;
        Ok(addr)
    }

    /// overwrite the flag register outright, never merging with what was
    /// there before
    pub fn set_flag(&mut self, set: bool) {
        self.v[0xF] = set.into();
    }
}

impl Default for RegisterFile {
    fn default() -> Self {
        Self::new()
    }
}

//! the machine itself. one call to `run_cycle` is one instruction: fetch the
//! word at pc, decode it, execute it, then tick both timers. pacing is the
//! caller's problem, as is feeding in key state between cycles.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::display::Screen;
use crate::error::Error;
use crate::framebuffer::Framebuffer;
use crate::memory::{Memory, GLYPH_BYTES, PROGRAM_ADDR};
use crate::opcode::Opcode;
use crate::registers::RegisterFile;
use crate::timers::TimerBank;

/// where pc goes once an instruction has executed. most instructions fall
/// through to the next word; skips step over one; jumps, calls and returns
/// place pc themselves; a wait leaves pc alone so the same instruction runs
/// again next cycle.
enum Pc {
    Next,
    Skip,
    Jump(u16),
    Wait,
}

impl Pc {
    fn skip_if(cond: bool) -> Pc {
        if cond {
            Pc::Skip
        } else {
            Pc::Next
        }
    }
}

/// the assembled machine: ram, registers, timers and the framebuffer, plus
/// the screen it renders to. key state is pushed in from outside rather
/// than polled, so the core stays free of terminal concerns.
pub struct Machine<'a> {
    memory: Memory,
    regs: RegisterFile,
    timers: TimerBank,
    framebuffer: Framebuffer,
    key: Option<u8>,
    rng: StdRng,
    screen: &'a mut dyn Screen,
}

impl<'a> Machine<'a> {
    pub fn new(screen: &'a mut dyn Screen) -> Machine<'a> {
        Machine {
            memory: Memory::new(),
            regs: RegisterFile::new(),
            timers: TimerBank::default(),
            framebuffer: Framebuffer::default(),
            key: None,
            rng: StdRng::from_entropy(),
            screen,
        }
    }

    /// copy a program image into ram and point pc at its first instruction
    pub fn load_program(&mut self, image: &[u8]) -> Result<(), Error> {
        self.memory.load_program(image)?;
        self.regs.pc = PROGRAM_ADDR;
        log::info!("loaded {} byte program", image.len());
        Ok(())
    }

    /// record which key, if any, is down right now. out-of-range values are
    /// folded onto the 16-key pad
    pub fn key_pressed(&mut self, key: Option<u8>) {
        self.key = key.map(|k| k & 0xF);
    }

    /// run a single fetch / decode / execute cycle and tick the timers.
    /// errors are fatal: a word that decodes to nothing means the program
    /// has jumped into data, and there is no way to resynchronise
    pub fn run_cycle(&mut self) -> Result<(), Error> {
        let word = self.memory.read_word(self.regs.pc);
        let op = Opcode::decode(word)?;
        log::trace!("{:#05x}: {:#06x} {:?}", self.regs.pc, word, op);
        self.execute(op)?;
        self.timers.tick();
        Ok(())
    }

    fn execute(&mut self, op: Opcode) -> Result<(), Error> {
        let next = match op {
            Opcode::Sys(addr) => {
                log::debug!("ignoring machine-code call to {addr:#05x}");
                Pc::Next
            }
            Opcode::Cls => {
                self.framebuffer.clear();
                self.screen.clear()?;
                Pc::Next
            }
            Opcode::Ret => Pc::Jump(self.regs.pop()?),
            Opcode::Jp(addr) => Pc::Jump(addr),
            Opcode::Call(addr) => {
                // the return address is the instruction after this one
                self.regs.push(self.regs.pc.wrapping_add(2))?;
                Pc::Jump(addr)
            }
            Opcode::SeByte(x, nn) => Pc::skip_if(self.regs.v[x as usize] == nn),
            Opcode::SneByte(x, nn) => Pc::skip_if(self.regs.v[x as usize] != nn),
            Opcode::SeReg(x, y) => {
                Pc::skip_if(self.regs.v[x as usize] == self.regs.v[y as usize])
            }
            Opcode::SneReg(x, y) => {
                Pc::skip_if(self.regs.v[x as usize] != self.regs.v[y as usize])
            }
            Opcode::LdByte(x, nn) => {
                self.regs.v[x as usize] = nn;
                Pc::Next
            }
            Opcode::AddByte(x, nn) => {
                self.regs.v[x as usize] = self.regs.v[x as usize].wrapping_add(nn);
                Pc::Next
            }
            Opcode::LdReg(x, y) => {
                self.regs.v[x as usize] = self.regs.v[y as usize];
                Pc::Next
            }
            Opcode::Or(x, y) => {
                self.regs.v[x as usize] |= self.regs.v[y as usize];
                Pc::Next
            }
            Opcode::And(x, y) => {
                self.regs.v[x as usize] &= self.regs.v[y as usize];
                Pc::Next
            }
            Opcode::Xor(x, y) => {
                self.regs.v[x as usize] ^= self.regs.v[y as usize];
                Pc::Next
            }
            // for the flagged alu ops the flag lands after the result, so
            // vf-as-destination ends up holding the flag, not the sum
            Opcode::AddReg(x, y) => {
                let (sum, carry) =
                    self.regs.v[x as usize].overflowing_add(self.regs.v[y as usize]);
                self.regs.v[x as usize] = sum;
                self.regs.set_flag(carry);
                Pc::Next
            }
            Opcode::Sub(x, y) => {
                let (diff, borrow) =
                    self.regs.v[x as usize].overflowing_sub(self.regs.v[y as usize]);
                self.regs.v[x as usize] = diff;
                self.regs.set_flag(!borrow);
                Pc::Next
            }
            Opcode::Subn(x, y) => {
                let (diff, borrow) =
                    self.regs.v[y as usize].overflowing_sub(self.regs.v[x as usize]);
                self.regs.v[x as usize] = diff;
                self.regs.set_flag(!borrow);
                Pc::Next
            }
            Opcode::Shr(x, y) => {
                let src = self.regs.v[y as usize];
                self.regs.v[x as usize] = src >> 1;
                self.regs.set_flag(src & 0x01 != 0);
                Pc::Next
            }
            Opcode::Shl(x, y) => {
                let src = self.regs.v[y as usize];
                self.regs.v[x as usize] = src << 1;
                self.regs.set_flag(src & 0x80 != 0);
                Pc::Next
            }
            Opcode::SetI(addr) => {
                self.regs.i = addr;
                Pc::Next
            }
            Opcode::JpV0(addr) => Pc::Jump(addr.wrapping_add(self.regs.v[0] as u16)),
            Opcode::Rnd(x, nn) => {
                self.regs.v[x as usize] = self.rng.gen::<u8>() & nn;
                Pc::Next
            }
            Opcode::Drw(x, y, n) => {
                let col = self.regs.v[x as usize];
                let row = self.regs.v[y as usize];
                let mut sprite = [0u8; 15];
                for (offset, byte) in sprite.iter_mut().enumerate().take(n as usize) {
                    *byte = self.memory.read(self.regs.i.wrapping_add(offset as u16));
                }
                let collided = self.framebuffer.draw(col, row, &sprite[..n as usize]);
                self.regs.set_flag(collided);
                self.screen.present(self.framebuffer.pixels())?;
                Pc::Next
            }
            Opcode::Skp(x) => Pc::skip_if(self.key == Some(self.regs.v[x as usize])),
            Opcode::Sknp(x) => Pc::skip_if(self.key != Some(self.regs.v[x as usize])),
            Opcode::ReadDelay(x) => {
                self.regs.v[x as usize] = self.timers.delay;
                Pc::Next
            }
            Opcode::WaitKey(x) => match self.key {
                Some(k) => {
                    self.regs.v[x as usize] = k;
                    Pc::Next
                }
                None => Pc::Wait,
            },
            Opcode::SetDelay(x) => {
                self.timers.delay = self.regs.v[x as usize];
                Pc::Next
            }
            Opcode::SetSound(x) => {
                self.timers.sound = self.regs.v[x as usize];
                Pc::Next
            }
            Opcode::AddI(x) => {
                self.regs.i = self.regs.i.wrapping_add(self.regs.v[x as usize] as u16);
                Pc::Next
            }
            Opcode::LdGlyph(x) => {
                let value = self.regs.v[x as usize];
                if value > 0xF {
                    return Err(Error::GlyphOutOfRange { value });
                }
                self.regs.i = u16::from(value) * GLYPH_BYTES;
                Pc::Next
            }
            Opcode::StoreBcd(x) => {
                let value = self.regs.v[x as usize];
                self.memory.write(self.regs.i, value / 100);
                self.memory.write(self.regs.i.wrapping_add(1), (value / 10) % 10);
                self.memory.write(self.regs.i.wrapping_add(2), value % 10);
                Pc::Next
            }
            Opcode::StoreRegs(x) => {
                for idx in 0..=x {
                    self.memory
                        .write(self.regs.i.wrapping_add(idx as u16), self.regs.v[idx as usize]);
                }
                self.regs.i = self.regs.i.wrapping_add(x as u16 + 1);
                Pc::Next
            }
            Opcode::LoadRegs(x) => {
                for idx in 0..=x {
                    self.regs.v[idx as usize] =
                        self.memory.read(self.regs.i.wrapping_add(idx as u16));
                }
                self.regs.i = self.regs.i.wrapping_add(x as u16 + 1);
                Pc::Next
            }
        };

        match next {
            Pc::Next => self.regs.pc = self.regs.pc.wrapping_add(2),
            Pc::Skip => self.regs.pc = self.regs.pc.wrapping_add(4),
            Pc::Jump(addr) => self.regs.pc = addr,
            Pc::Wait => (),
        }
        Ok(())
    }
}

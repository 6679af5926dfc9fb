use crate::error::Error;

/// One decoded instruction word. The trailing comment on each variant is
/// the bit pattern it decodes from: x and y are register indices, nn an
/// immediate byte, nnn a 12-bit address, n a 4-bit count.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Opcode {
    Sys(u16),          // 0nnn -- legacy machine-code call; accepted, does nothing
    Cls,               // 00e0
    Ret,               // 00ee
    Jp(u16),           // 1nnn
    Call(u16),         // 2nnn
    SeByte(u8, u8),    // 3xnn -- skip if vx == nn
    SneByte(u8, u8),   // 4xnn
    SeReg(u8, u8),     // 5xy0
    LdByte(u8, u8),    // 6xnn
    AddByte(u8, u8),   // 7xnn -- wraps, no flag
    LdReg(u8, u8),     // 8xy0
    Or(u8, u8),        // 8xy1
    And(u8, u8),       // 8xy2
    Xor(u8, u8),       // 8xy3
    AddReg(u8, u8),    // 8xy4 -- flag = carry
    Sub(u8, u8),       // 8xy5 -- flag = no borrow
    Shr(u8, u8),       // 8xy6 -- vx = vy >> 1, flag = bit shifted out
    Subn(u8, u8),      // 8xy7 -- vx = vy - vx
    Shl(u8, u8),       // 8xye -- vx = vy << 1, flag = bit shifted out
    SneReg(u8, u8),    // 9xy0
    SetI(u16),         // annn
    JpV0(u16),         // bnnn -- jump to nnn + v0
    Rnd(u8, u8),       // cxnn -- vx = random byte & nn
    Drw(u8, u8, u8),   // dxyn -- n sprite rows from I at (vx, vy)
    Skp(u8),           // ex9e -- skip if key vx is down
    Sknp(u8),          // exa1
    ReadDelay(u8),     // fx07
    WaitKey(u8),       // fx0a -- hold here until a key arrives
    SetDelay(u8),      // fx15
    SetSound(u8),      // fx18
    AddI(u8),          // fx1e -- no flag
    LdGlyph(u8),       // fx29 -- I = 5 * vx
    StoreBcd(u8),      // fx33 -- vx as three decimal digits at I
    StoreRegs(u8),     // fx55 -- v0..=vx to memory at I, I moves past them
    LoadRegs(u8),      // fx65 -- the inverse read
}

impl Opcode {
    /// Split an instruction word into an opcode identity and its operand
    /// fields. Pure bit masking, no state. Patterns that match nothing are
    /// an error rather than a silent no-op, so a program that has jumped
    /// into data stops instead of careering on.
    pub fn decode(word: u16) -> Result<Opcode, Error> {
        let x = ((word >> 8) & 0xF) as u8;
        let y = ((word >> 4) & 0xF) as u8;
        let n = (word & 0xF) as u8;
        let nn = (word & 0xFF) as u8;
        let nnn = word & 0xFFF;

        let op = match word >> 12 {
            0x0 => match word {
                0x00E0 => Opcode::Cls,
                0x00EE => Opcode::Ret,
                _ => Opcode::Sys(nnn),
            },
            0x1 => Opcode::Jp(nnn),
            0x2 => Opcode::Call(nnn),
            0x3 => Opcode::SeByte(x, nn),
            0x4 => Opcode::SneByte(x, nn),
            0x5 if n == 0 => Opcode::SeReg(x, y),
            0x6 => Opcode::LdByte(x, nn),
            0x7 => Opcode::AddByte(x, nn),
            0x8 => match n {
                0x0 => Opcode::LdReg(x, y),
                0x1 => Opcode::Or(x, y),
                0x2 => Opcode::And(x, y),
                0x3 => Opcode::Xor(x, y),
                0x4 => Opcode::AddReg(x, y),
                0x5 => Opcode::Sub(x, y),
                0x6 => Opcode::Shr(x, y),
                0x7 => Opcode::Subn(x, y),
                0xE => Opcode::Shl(x, y),
                _ => return Err(Error::UnknownOpcode { word }),
            },
            0x9 if n == 0 => Opcode::SneReg(x, y),
            0xA => Opcode::SetI(nnn),
            0xB => Opcode::JpV0(nnn),
            0xC => Opcode::Rnd(x, nn),
            0xD => Opcode::Drw(x, y, n),
            0xE => match nn {
                0x9E => Opcode::Skp(x),
                0xA1 => Opcode::Sknp(x),
                _ => return Err(Error::UnknownOpcode { word }),
            },
            0xF => match nn {
                0x07 => Opcode::ReadDelay(x),
                0x0A => Opcode::WaitKey(x),
                0x15 => Opcode::SetDelay(x),
                0x18 => Opcode::SetSound(x),
                0x1E => Opcode::AddI(x),
                0x29 => Opcode::LdGlyph(x),
                0x33 => Opcode::StoreBcd(x),
                0x55 => Opcode::StoreRegs(x),
                0x65 => Opcode::LoadRegs(x),
                _ => return Err(Error::UnknownOpcode { word }),
            },
            _ => return Err(Error::UnknownOpcode { word }),
        };
        Ok(op)
    }
}

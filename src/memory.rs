use crate::error::Error;

// NB. addresses are u16 as per the chip-8; lengths are usize to stop endless
// casting. the address space is 12 bits, so every access masks the high bits
// off rather than panicking on a runaway I register.

/// how much RAM we have
pub const RAM_SIZE: usize = 4096;

/// where a program image is loaded and where execution starts
pub const PROGRAM_ADDR: u16 = 0x200;

/// bytes per built-in glyph sprite
pub const GLYPH_BYTES: u16 = 5;

/// Flat addressable store for the whole machine: glyph sprites from 0x000,
/// the program image from 0x200. Nothing below 0x200 is written once the
/// machine is running unless the program aims an explicit store there.
pub struct Memory {
    bytes: Box<[u8; RAM_SIZE]>,
}

impl Memory {
    /// fresh RAM with the sixteen hex glyphs baked in at 0x000, so that
    /// glyph n starts at 5n
    pub fn new() -> Self {
        let mut bytes = Box::new([0u8; RAM_SIZE]);
        bytes[..GLYPH_SPRITES.len()].copy_from_slice(&GLYPH_SPRITES);
        Memory { bytes }
    }

    /// copy a program image verbatim to 0x200. an image that won't fit is
    /// refused outright rather than wrapped or truncated
    pub fn load_program(&mut self, image: &[u8]) -> Result<(), Error> {
        let start = PROGRAM_ADDR as usize;
        let capacity = RAM_SIZE - start;
        if image.len() > capacity {
            return Err(Error::ProgramTooLarge {
                size: image.len(),
                capacity,
            });
        }
        self.bytes[start..start + image.len()].copy_from_slice(image);
        Ok(())
    }

    /// read one byte, address masked to the 12-bit space
    pub fn read(&self, addr: u16) -> u8 {
        self.bytes[addr as usize % RAM_SIZE]
    }

    /// write one byte, address masked to the 12-bit space
    pub fn write(&mut self, addr: u16, value: u8) {
        self.bytes[addr as usize % RAM_SIZE] = value;
    }

    /// fetch a two-byte instruction word, most-significant byte first
    pub fn read_word(&self, addr: u16) -> u16 {
        u16::from_be_bytes([self.read(addr), self.read(addr.wrapping_add(1))])
    }
}

impl Default for Memory {
    fn default() -> Self {
        Self::new()
    }
}

/// the contemporary 5-byte hex glyphs, 0 through F
const GLYPH_SPRITES: [u8; 80] = [
    0xF0, 0x90, 0x90, 0x90, 0xF0, // 0
    0x20, 0x60, 0x20, 0x20, 0x70, // 1
    0xF0, 0x10, 0xF0, 0x80, 0xF0, // 2
    0xF0, 0x10, 0xF0, 0x10, 0xF0, // 3
    0x90, 0x90, 0xF0, 0x10, 0x10, // 4
    0xF0, 0x80, 0xF0, 0x10, 0xF0, // 5
    0xF0, 0x80, 0xF0, 0x90, 0xF0, // 6
    0xF0, 0x10, 0x20, 0x40, 0x40, // 7
    0xF0, 0x90, 0xF0, 0x90, 0xF0, // 8
    0xF0, 0x90, 0xF0, 0x10, 0xF0, // 9
    0xF0, 0x90, 0xF0, 0x90, 0x90, // A
    0xE0, 0x90, 0xE0, 0x90, 0xE0, // B
    0xF0, 0x80, 0x80, 0x80, 0xF0, // C
    0xE0, 0x90, 0x90, 0x90, 0xE0, // D
    0xF0, 0x80, 0xF0, 0x80, 0xF0, // E
    0xF0, 0x80, 0xF0, 0x80, 0x80, // F
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_glyphs_baked_from_zero() {
        let m = Memory::new();
        // glyph 0 sits at 0x000, glyph F at 5 * 0xF
        assert_eq!(m.bytes[..5], [0xF0, 0x90, 0x90, 0x90, 0xF0]);
        assert_eq!(m.bytes[75..80], [0xF0, 0x80, 0xF0, 0x80, 0x80]);
    }

    #[test]
    fn test_memory_zeroed_past_glyphs() {
        let m = Memory::new();
        assert_eq!(m.bytes[80..], [0; RAM_SIZE - 80]);
    }

    #[test]
    fn test_program_load_ok() {
        let mut m = Memory::new();
        let prog = [0x00, 0xe0]; // clear screen
        m.load_program(&prog).unwrap();
        assert_eq!(m.bytes[0x200..0x202], [0x00, 0xe0]);
    }

    #[test]
    fn test_program_load_fills_memory() {
        let mut m = Memory::new();
        let prog = vec![0xff; RAM_SIZE - 0x200];
        m.load_program(&prog).unwrap();
        assert_eq!(m.read(0xfff), 0xff);
    }

    #[test]
    fn test_program_load_too_large() {
        let mut m = Memory::new();
        let prog = vec![0xff; RAM_SIZE - 0x200 + 1];
        let err = m.load_program(&prog).unwrap_err();
        assert!(matches!(
            err,
            Error::ProgramTooLarge {
                size: 3585,
                capacity: 3584
            }
        ));
    }

    #[test]
    fn test_read_word_is_big_endian() {
        let mut m = Memory::new();
        m.write(0x204, 0x04);
        m.write(0x205, 0x05);
        assert_eq!(m.read_word(0x204), 0x0405);
    }

    #[test]
    fn test_addresses_mask_to_ram_size() {
        let mut m = Memory::new();
        m.write(0x1200, 0xaa); // 0x1200 % 0x1000 == 0x200
        assert_eq!(m.read(0x200), 0xaa);
        assert_eq!(m.read(0x1200), 0xaa);
    }
}

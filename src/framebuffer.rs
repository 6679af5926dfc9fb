/// pixels across
pub const WIDTH: usize = 64;
/// pixels down
pub const HEIGHT: usize = 32;

/// The 64x32 XOR plane. Each cell holds the parity of every sprite bit ever
/// drawn there since the last clear, so redrawing a sprite in place erases
/// it. Kept as a flat row-major array with explicit modulo on both axes;
/// that makes the collision rule a single read-xor-write on one index.
pub struct Framebuffer {
    pixels: [u8; WIDTH * HEIGHT],
}

impl Framebuffer {
    pub fn new() -> Self {
        Framebuffer {
            pixels: [0; WIDTH * HEIGHT],
        }
    }

    /// XOR a sprite in at (x, y), one byte per row, most-significant bit
    /// leftmost. Both coordinates wrap, per bit, not just at the origin.
    /// Returns whether any set pixel was turned off, which is what the
    /// machine reports in the flag register.
    pub fn draw(&mut self, x: u8, y: u8, rows: &[u8]) -> bool {
        let mut collided = false;
        for (row_offset, row) in rows.iter().enumerate() {
            for bit_offset in 0..8 {
                let bit = (row >> (7 - bit_offset)) & 1;
                let px = (x as usize + bit_offset) % WIDTH;
                let py = (y as usize + row_offset) % HEIGHT;
                let cell = &mut self.pixels[py * WIDTH + px];
                if bit & *cell == 1 {
                    collided = true;
                }
                *cell ^= bit;
            }
        }
        collided
    }

    /// every pixel back to off
    pub fn clear(&mut self) {
        self.pixels = [0; WIDTH * HEIGHT];
    }

    /// read-only snapshot for the display sink, one byte per pixel, row
    /// major from the top left
    pub fn pixels(&self) -> &[u8] {
        &self.pixels
    }
}

impl Default for Framebuffer {
    fn default() -> Self {
        Self::new()
    }
}

//! Deterministic number generator for jewel alterations.
//!
//! A four-word TinyMT32-style generator matching the game's sequence
//! bit for bit: the seeding protocol, the tempering step and the biased
//! modulo reduction are all part of the contract. Every arithmetic
//! operation is wrapping 32-bit; nothing here may use floats or the
//! platform RNG.

use rand::RngCore;

const INITIAL_STATE: [u32; 4] = [0x4033_6050, 0xCFA3_723C, 0x3CAC_5F6F, 0x3793_FDFF];

const SH0: u32 = 1;
const SH1: u32 = 10;
const MASK: u32 = 0x7FFF_FFFF;
const ALPHA: u32 = 0x0019_660D;
const BRAVO: u32 = 0x5D58_8B65;
const TEMPER_XOR: u32 = 0x3793_FDFF;
const TAINT_A: u32 = 0x8F70_11EE;
const TAINT_B: u32 = 0xFC78_FF1F;

fn manipulate_alpha(value: u32) -> u32 {
    (value ^ (value >> 27)).wrapping_mul(ALPHA)
}

fn manipulate_bravo(value: u32) -> u32 {
    (value ^ (value >> 27)).wrapping_mul(BRAVO)
}

/// The alteration generator. One instance per calculation phase; state
/// carries nothing between [`Self::reset`] calls.
#[derive(Debug, Clone, Default)]
pub struct NumberGenerator {
    state: [u32; 4],
}

impl NumberGenerator {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Load the fixed initial state and mix in the node graph id and the
    /// jewel's effective seed, in that order.
    pub fn reset(&mut self, graph_id: u32, effective_seed: u32) {
        self.state = INITIAL_STATE;
        self.initialize(&[graph_id, effective_seed]);
    }

    /// The seeding protocol: one mixing round per seed, five zero-seed
    /// rounds, four subtractive rounds over the word sums, then eight
    /// plain advances.
    pub fn initialize(&mut self, seeds: &[u32]) {
        let mut index: u32 = 1;

        for &seed in seeds {
            let mut round = manipulate_alpha(
                self.word(index) ^ self.word(index + 1) ^ self.word(index + 3),
            );
            self.add_word(index + 1, round);
            round = round.wrapping_add(seed).wrapping_add(index);
            self.add_word(index + 2, round);
            self.set_word(index, round);
            index = (index + 1) % 4;
        }

        for _ in 0..5 {
            let mut round = manipulate_alpha(
                self.word(index) ^ self.word(index + 1) ^ self.word(index + 3),
            );
            self.add_word(index + 1, round);
            round = round.wrapping_add(index);
            self.add_word(index + 2, round);
            self.set_word(index, round);
            index = (index + 1) % 4;
        }

        for _ in 0..4 {
            let mut round = manipulate_bravo(
                self.word(index)
                    .wrapping_add(self.word(index + 1))
                    .wrapping_add(self.word(index + 3)),
            );
            self.xor_word(index + 1, round);
            round = round.wrapping_sub(index);
            self.xor_word(index + 2, round);
            self.set_word(index, round);
            index = (index + 1) % 4;
        }

        for _ in 0..8 {
            self.advance();
        }
    }

    fn word(&self, index: u32) -> u32 {
        self.state[(index % 4) as usize]
    }

    fn set_word(&mut self, index: u32, value: u32) {
        self.state[(index % 4) as usize] = value;
    }

    fn add_word(&mut self, index: u32, value: u32) {
        let slot = (index % 4) as usize;
        self.state[slot] = self.state[slot].wrapping_add(value);
    }

    fn xor_word(&mut self, index: u32, value: u32) {
        self.state[(index % 4) as usize] ^= value;
    }

    fn advance(&mut self) {
        let mut a = self.state[3];
        let mut b = (self.state[0] & MASK) ^ self.state[1] ^ self.state[2];

        a ^= a << SH0;
        b ^= (b >> SH0) ^ a;

        self.state[0] = self.state[1];
        self.state[1] = self.state[2];
        self.state[2] = a ^ (b << SH1);
        self.state[3] = b;

        if b & 1 != 0 {
            self.state[1] ^= TAINT_A;
            self.state[2] ^= TAINT_B;
        }
    }

    fn temper(&self) -> u32 {
        let b = self.state[0].wrapping_add(self.state[2] >> 8);
        let a = self.state[3] ^ b;
        if b & 1 != 0 { a ^ TEMPER_XOR } else { a }
    }

    /// Advance once and return the tempered word.
    pub fn generate_uint(&mut self) -> u32 {
        self.advance();
        self.temper()
    }

    /// A value in `[0, exclusive_max)` by plain modulo reduction. The
    /// bias is part of the contract. `exclusive_max` must be nonzero;
    /// the weighted draws upstream guarantee that.
    pub fn generate_single(&mut self, exclusive_max: u32) -> u32 {
        self.generate_uint() % exclusive_max
    }

    /// A value in `[min, max]` inclusive, wrapping on the span length.
    pub fn generate_range(&mut self, min: u32, max: u32) -> u32 {
        let span = max.wrapping_sub(min).wrapping_add(1);
        self.generate_single(span).wrapping_add(min)
    }
}

/// The generator plugs into `rand`-based call sites; the calculator
/// itself only uses the inherent methods above.
impl RngCore for NumberGenerator {
    fn next_u32(&mut self) -> u32 {
        self.generate_uint()
    }

    fn next_u64(&mut self) -> u64 {
        let lo = u64::from(self.generate_uint());
        let hi = u64::from(self.generate_uint());
        lo | (hi << 32)
    }

    fn fill_bytes(&mut self, dest: &mut [u8]) {
        for chunk in dest.chunks_mut(4) {
            let word = self.generate_uint().to_le_bytes();
            chunk.copy_from_slice(&word[..chunk.len()]);
        }
    }
}

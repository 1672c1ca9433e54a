//! Synthetic value sources.
//!
//! Generators never touch a global RNG. They receive a [`FakeData`]
//! implementation at construction, so callers choose between a seeded
//! [`Faker`] (reproducible fixtures), an entropy-seeded one, or a fixed
//! [`EdgeFake`] that pins every draw to a bound.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use uuid::Uuid;

const WORDS: &[&str] = &[
    "alpha", "bravo", "cedar", "delta", "ember", "falcon", "granite", "harbor", "indigo",
    "juniper", "kepler", "lumen", "meadow", "nimbus", "orchid", "pioneer", "quartz", "raven",
    "summit", "tundra", "umber", "vector", "willow", "zephyr",
];

/// Source of synthetic values.
pub trait FakeData {
    /// Integer in `min..=max`.
    fn int_in(&mut self, min: i64, max: i64) -> i64;

    /// Float in `min..=max`.
    fn float_in(&mut self, min: f64, max: f64) -> f64;

    /// Index in `0..len`. `len` must be non-zero.
    fn pick(&mut self, len: usize) -> usize;

    /// Random (version 4) UUID.
    fn uuid(&mut self) -> Uuid;

    /// `len` decimal digits, first one non-zero.
    fn digits(&mut self, len: usize) -> String;

    /// `len` lowercase hex characters.
    fn hex(&mut self, len: usize) -> String;

    /// A lowercase dictionary word.
    fn word(&mut self) -> String;
}

/// Pick one element of a non-empty slice.
pub fn choose<'a, T>(fake: &mut dyn FakeData, items: &'a [T]) -> &'a T {
    &items[fake.pick(items.len())]
}

/// [`FakeData`] backed by a [`StdRng`].
pub struct Faker {
    rng: StdRng,
}

impl Faker {
    /// Deterministic source: the same seed yields the same values.
    pub fn seeded(seed: u64) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
        }
    }

    /// Source seeded from OS entropy.
    pub fn from_entropy() -> Self {
        Self {
            rng: StdRng::from_entropy(),
        }
    }

    /// Seeded if `seed` is given, entropy-seeded otherwise.
    pub fn new(seed: Option<u64>) -> Self {
        seed.map_or_else(Self::from_entropy, Self::seeded)
    }
}

impl FakeData for Faker {
    fn int_in(&mut self, min: i64, max: i64) -> i64 {
        self.rng.gen_range(min..=max)
    }

    fn float_in(&mut self, min: f64, max: f64) -> f64 {
        self.rng.gen_range(min..=max)
    }

    fn pick(&mut self, len: usize) -> usize {
        self.rng.gen_range(0..len)
    }

    fn uuid(&mut self) -> Uuid {
        let mut bytes = [0u8; 16];
        self.rng.fill(&mut bytes);

        // Set version (4) and variant (RFC 4122) bits
        bytes[6] = (bytes[6] & 0x0f) | 0x40;
        bytes[8] = (bytes[8] & 0x3f) | 0x80;

        Uuid::from_bytes(bytes)
    }

    fn digits(&mut self, len: usize) -> String {
        (0..len)
            .map(|i| {
                let low = if i == 0 { 1 } else { 0 };
                char::from(b'0' + self.rng.gen_range(low..10u8))
            })
            .collect()
    }

    fn hex(&mut self, len: usize) -> String {
        const HEX: &[u8] = b"0123456789abcdef";
        (0..len)
            .map(|_| char::from(HEX[self.rng.gen_range(0..HEX.len())]))
            .collect()
    }

    fn word(&mut self) -> String {
        WORDS[self.rng.gen_range(0..WORDS.len())].to_string()
    }
}

/// Fixed source returning the upper (or lower) bound of every draw.
///
/// Useful for asserting that generators stay within their bounds.
#[derive(Debug, Clone, Copy)]
pub struct EdgeFake {
    high: bool,
}

impl EdgeFake {
    /// Every draw returns its maximum; `pick` returns the last index.
    pub fn high() -> Self {
        Self { high: true }
    }

    /// Every draw returns its minimum; `pick` returns the first index.
    pub fn low() -> Self {
        Self { high: false }
    }
}

impl FakeData for EdgeFake {
    fn int_in(&mut self, min: i64, max: i64) -> i64 {
        if self.high {
            max
        } else {
            min
        }
    }

    fn float_in(&mut self, min: f64, max: f64) -> f64 {
        if self.high {
            max
        } else {
            min
        }
    }

    fn pick(&mut self, len: usize) -> usize {
        if self.high {
            len - 1
        } else {
            0
        }
    }

    fn uuid(&mut self) -> Uuid {
        if self.high {
            Uuid::from_bytes([0xff; 16])
        } else {
            Uuid::nil()
        }
    }

    fn digits(&mut self, len: usize) -> String {
        let digit = if self.high { "9" } else { "1" };
        digit.repeat(len)
    }

    fn hex(&mut self, len: usize) -> String {
        let digit = if self.high { "f" } else { "0" };
        digit.repeat(len)
    }

    fn word(&mut self) -> String {
        let word = if self.high {
            WORDS[WORDS.len() - 1]
        } else {
            WORDS[0]
        };
        word.to_string()
    }
}

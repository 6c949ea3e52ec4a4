use rand::{rngs::OsRng, Rng, RngCore, SeedableRng};
use rand_xoshiro::Xoshiro256StarStar;

/// Seedable source of randomness for inputs and graph topologies.
///
/// Uses the xoshiro256** PRNG so that runs are reproducible when seeded.
/// Implements [`RngCore`], so it can be handed to anything generic over
/// `rand::Rng`.
///
/// # Examples
///
/// ```
/// use algoviz_util::Fuzzer;
///
/// let mut a = Fuzzer::from_u64(7);
/// let mut b = Fuzzer::from_u64(7);
/// assert_eq!(a.random_int(1, 9), b.random_int(1, 9));
///
/// let n = a.random_int(1, 10);
/// assert!((1..=10).contains(&n));
/// ```
#[derive(Debug, Clone)]
pub struct Fuzzer {
    /// The seed used to initialize the PRNG.
    pub seed: [u8; 32],
    rng: Xoshiro256StarStar,
}

impl Fuzzer {
    /// Create a new fuzzer with an optional seed.
    ///
    /// If no seed is provided, a random seed will be generated using `OsRng`.
    pub fn new(seed: Option<[u8; 32]>) -> Self {
        let seed = seed.unwrap_or_else(|| {
            let mut bytes = [0u8; 32];
            OsRng.fill_bytes(&mut bytes);
            bytes
        });

        Self {
            seed,
            rng: Xoshiro256StarStar::from_seed(seed),
        }
    }

    /// Create a fuzzer from a short numeric seed.
    ///
    /// The 64-bit seed is spread over the 32 seed bytes, little endian, one
    /// copy per lane.
    pub fn from_u64(seed: u64) -> Self {
        let mut bytes = [0u8; 32];
        for lane in bytes.chunks_exact_mut(8) {
            lane.copy_from_slice(&seed.to_le_bytes());
        }
        // An all-zero state would make xoshiro emit zeros forever.
        if seed == 0 {
            bytes[0] = 1;
        }
        Self::new(Some(bytes))
    }

    /// Create a fuzzer from `Some(seed)` or fresh entropy.
    pub fn from_optional(seed: Option<u64>) -> Self {
        match seed {
            Some(seed) => Self::from_u64(seed),
            None => Self::new(None),
        }
    }

    /// Generate a random integer in the range [min, max] (inclusive).
    pub fn random_int(&mut self, min: i64, max: i64) -> i64 {
        self.rng.gen_range(min..=max)
    }

    /// Repeat a callback `times` times and collect results.
    pub fn repeat<T, F>(&mut self, times: usize, mut callback: F) -> Vec<T>
    where
        F: FnMut(&mut Self) -> T,
    {
        (0..times).map(|_| callback(self)).collect()
    }
}

impl RngCore for Fuzzer {
    fn next_u32(&mut self) -> u32 {
        self.rng.next_u32()
    }

    fn next_u64(&mut self) -> u64 {
        self.rng.next_u64()
    }

    fn fill_bytes(&mut self, dest: &mut [u8]) {
        self.rng.fill_bytes(dest)
    }

    fn try_fill_bytes(&mut self, dest: &mut [u8]) -> Result<(), rand::Error> {
        self.rng.try_fill_bytes(dest)
    }
}

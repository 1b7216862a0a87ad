//! Seeded shuffling for layout variations.

/// Draw a fresh seed from the platform RNG
pub fn random_seed() -> u64 {
    let mut seed_bytes = [0u8; 8];
    getrandom::getrandom(&mut seed_bytes).unwrap_or_else(|_| {
        // Fallback: use a static counter if getrandom fails
        static COUNTER: std::sync::atomic::AtomicU64 = std::sync::atomic::AtomicU64::new(1);
        let counter = COUNTER.fetch_add(1, std::sync::atomic::Ordering::Relaxed);
        seed_bytes = counter.to_le_bytes();
    });
    u64::from_le_bytes(seed_bytes)
}

/// Small PCG-style generator; the same seed always yields the same order
pub(crate) struct SimpleRng {
    state: u64,
}

impl SimpleRng {
    pub(crate) fn with_seed(seed: u64) -> Self {
        Self {
            state: seed.wrapping_add(1),
        }
    }

    fn next_u64(&mut self) -> u64 {
        self.state = self
            .state
            .wrapping_mul(6364136223846793005)
            .wrapping_add(1442695040888963407);
        let xorshifted = (((self.state >> 18) ^ self.state) >> 27) as u32;
        let rot = (self.state >> 59) as u32;
        (xorshifted.rotate_right(rot)) as u64
    }

    fn next_usize(&mut self, bound: usize) -> usize {
        (self.next_u64() as usize) % bound
    }

    /// Fisher-Yates
    pub(crate) fn shuffle<T>(&mut self, slice: &mut [T]) {
        for i in (1..slice.len()).rev() {
            let j = self.next_usize(i + 1);
            slice.swap(i, j);
        }
    }
}

use rand::{rngs::StdRng, Rng, SeedableRng};

pub const SEED: u64 = 0x5eed_ba55;
pub const ROUNDS: usize = 200;

pub fn rng() -> StdRng {
    StdRng::seed_from_u64(SEED)
}

/// Raw 8-bit style peaks with a sprinkling of negative sentinels.
/// Always contains at least one positive value.
pub fn random_raw_peaks(rng: &mut StdRng, len: usize) -> Vec<f32> {
    let mut peaks: Vec<f32> = (0..len)
        .map(|_| {
            if rng.random_bool(0.1) {
                -(rng.random_range(1..=128) as f32)
            } else {
                rng.random_range(0..=127) as f32
            }
        })
        .collect();
    let spot = rng.random_range(0..len);
    peaks[spot] = rng.random_range(1..=127) as f32;
    peaks
}

pub fn random_normalized(rng: &mut StdRng, len: usize) -> Vec<u8> {
    (0..len).map(|_| rng.random_range(0..=100)).collect()
}

/// One second of a decaying 8-bit envelope, the shape a drum hit leaves in
/// an analysis file.
pub fn decaying_envelope(len: usize) -> Vec<f32> {
    (0..len)
        .map(|i| {
            let t = i as f32 / len as f32;
            127.0 * (1.0 - t) * (1.0 - t)
        })
        .collect()
}

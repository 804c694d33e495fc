pub mod inventory;
pub mod price;
pub mod rig_count;

// Deterministic jitter in [-0.5, 0.5) for row `i` and stream `salt`.
pub(crate) fn jitter(i: usize, salt: usize) -> f64 {
    let h = (i.wrapping_mul(7919) ^ salt.wrapping_mul(104_729)) % 997;
    h as f64 / 997.0 - 0.5
}

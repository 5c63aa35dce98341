/// Source of randomness for dice rolls
///
/// Production code uses a `rand`-backed adapter; tests substitute fixed
/// values so rolls are deterministic.
pub trait RandomPort: Send + Sync {
    /// A value in `min..=max`
    fn gen_range(&self, min: u8, max: u8) -> u8;
}

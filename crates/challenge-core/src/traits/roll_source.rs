/// Source of uniform random values in [0, 1).
///
/// Injected wherever the engine rolls, so tests can pin the outcome.
pub trait IRollSource {
    fn roll(&mut self) -> f64;
}

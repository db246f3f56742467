//! Random source port used by the playout estimator

/// Uniform choice among `len` alternatives.
///
/// The estimator only ever needs "pick one of these empty cells", so the
/// port is reduced to that one question. Tests supply a scripted source to
/// make playouts exactly reproducible.
pub trait RandomSource: Send {
    /// Return an index in `0..len`. `len` is always at least 1.
    fn choose_index(&mut self, len: usize) -> usize;

    /// Restart the source from a seed. Sources that cannot be reseeded
    /// ignore this.
    fn reseed(&mut self, _seed: u64) {}
}

impl<R: RandomSource + ?Sized> RandomSource for Box<R> {
    fn choose_index(&mut self, len: usize) -> usize {
        (**self).choose_index(len)
    }

    fn reseed(&mut self, seed: u64) {
        (**self).reseed(seed)
    }
}

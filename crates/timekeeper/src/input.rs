// File: crates/timekeeper/src/input.rs
// Summary: Input-size schedule and generator, and the timed block type.

/// Timed code under test: borrows one generated input, returns nothing.
pub type Block<T> = Box<dyn Fn(&T) + Send + 'static>;

/// Box a closure as a [`Block`].
pub fn block<T, F>(f: F) -> Block<T>
where
    F: Fn(&T) + Send + 'static,
{
    Box::new(f)
}

/// How input sizes grow and how an input of a given size is built.
///
/// Sizes start at `min_size` and advance through `step` while they stay
/// `<= max_size`. `step` must return a value strictly greater than its argument.
pub struct InputSpec<T> {
    min_size: usize,
    max_size: usize,
    step: Box<dyn Fn(usize) -> usize + Send>,
    make: Box<dyn Fn(usize) -> T + Send>,
}

impl<T> InputSpec<T> {
    pub fn new(
        min_size: usize,
        max_size: usize,
        step: impl Fn(usize) -> usize + Send + 'static,
        make: impl Fn(usize) -> T + Send + 'static,
    ) -> Self {
        Self { min_size, max_size, step: Box::new(step), make: Box::new(make) }
    }

    /// Sizes multiplied by `factor` each step.
    pub fn geometric(
        min_size: usize,
        max_size: usize,
        factor: usize,
        make: impl Fn(usize) -> T + Send + 'static,
    ) -> Self {
        Self::new(min_size, max_size, move |n| n.saturating_mul(factor), make)
    }

    pub fn min_size(&self) -> usize { self.min_size }
    pub fn max_size(&self) -> usize { self.max_size }

    pub fn next_size(&self, size: usize) -> usize {
        (self.step)(size)
    }

    pub fn make(&self, size: usize) -> T {
        (self.make)(size)
    }
}

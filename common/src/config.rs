pub struct Config {
    /// Suppresses decorative output (headers, separators).
    ///
    /// Level 1 drops decoration, level 2 drops everything but results.
    pub quiet: u8,
    /// Seeds the random source for reproducible problem sequences.
    ///
    /// `None` draws from the thread-local generator.
    pub seed: Option<u64>,
}

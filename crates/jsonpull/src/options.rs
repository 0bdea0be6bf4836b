/// Configuration options for [`Parser`](crate::Parser).
///
/// # Examples
///
/// ```rust
/// use jsonpull::ParserOptions;
///
/// let options = ParserOptions { max_depth: 16 };
/// assert!(options.max_depth < ParserOptions::default().max_depth);
/// ```
#[derive(Debug, Clone, Copy)]
pub struct ParserOptions {
    /// Maximum number of nested containers (objects and arrays) permitted on
    /// any path from the root.
    ///
    /// Recursion depth tracks input nesting depth, so without a limit a
    /// deeply nested document can exhaust the call stack. Opening a
    /// container that is already nested inside `max_depth` containers fails
    /// with [`ErrorKind::DepthExceeded`](crate::ErrorKind::DepthExceeded)
    /// instead.
    ///
    /// # Default
    ///
    /// `128`
    pub max_depth: usize,
}

impl Default for ParserOptions {
    fn default() -> Self {
        Self { max_depth: 128 }
    }
}

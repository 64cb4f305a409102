//! Resolution options and configuration.

/// Options applied when compiling parsers and running chains.
#[derive(Debug, Clone)]
pub struct ResolveOptions {
    /// Match patterns case-insensitively
    pub case_insensitive: bool,

    /// Resolve independent chains (template fields, document batches) in parallel
    pub parallel: bool,
}

impl ResolveOptions {
    /// Create new resolve options with defaults.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set case sensitivity.
    pub fn with_case_insensitive(mut self, value: bool) -> Self {
        self.case_insensitive = value;
        self
    }

    /// Match patterns case-insensitively.
    pub fn case_insensitive(mut self) -> Self {
        self.case_insensitive = true;
        self
    }

    /// Enable or disable parallel processing.
    pub fn with_parallel(mut self, parallel: bool) -> Self {
        self.parallel = parallel;
        self
    }

    /// Disable parallel processing.
    pub fn sequential(mut self) -> Self {
        self.parallel = false;
        self
    }
}

impl Default for ResolveOptions {
    fn default() -> Self {
        Self {
            case_insensitive: false,
            parallel: true,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_resolve_options_builder() {
        let options = ResolveOptions::new().case_insensitive().sequential();
        assert!(options.case_insensitive);
        assert!(!options.parallel);
    }

    #[test]
    fn test_default_options() {
        let options = ResolveOptions::default();
        assert!(!options.case_insensitive);
        assert!(options.parallel);
    }
}

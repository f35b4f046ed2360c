//! Validation configuration.

/// Options controlling the value-level checks run on each record.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct ValidationOptions {
    /// Also require a non-empty description
    pub strict: bool,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validation_options_default_is_lenient() {
        assert!(!ValidationOptions::default().strict);
    }
}

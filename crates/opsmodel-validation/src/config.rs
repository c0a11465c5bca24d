//! Configuration options for validation behavior

// ============================================================================
// Extra Field Handling
// ============================================================================

/// How to handle input keys that name no schema field
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ExtraFields {
    /// Ignore extra keys (default)
    #[default]
    Ignore,
    /// Report every extra key as an undefined attribute
    Forbid,
}

// ============================================================================
// Validation Config
// ============================================================================

/// Configuration options for validation behavior
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ValidationConfig {
    /// How to handle extra keys
    pub extra: ExtraFields,

    /// Rewrite `-` to `_` in input keys before lookup
    pub normalize_keys: bool,
}

impl Default for ValidationConfig {
    fn default() -> Self {
        Self {
            extra: ExtraFields::Ignore,
            normalize_keys: true,
        }
    }
}

impl ValidationConfig {
    /// Create a new validation config with defaults
    pub fn new() -> Self {
        Self::default()
    }

    /// Set extra key handling
    pub fn extra(mut self, extra: ExtraFields) -> Self {
        self.extra = extra;
        self
    }

    /// Forbid extra keys
    pub fn forbid_extra(self) -> Self {
        self.extra(ExtraFields::Forbid)
    }

    /// Ignore extra keys
    pub fn ignore_extra(self) -> Self {
        self.extra(ExtraFields::Ignore)
    }

    /// Enable or disable hyphen-to-underscore key normalization
    pub fn normalize_keys(mut self, normalize: bool) -> Self {
        self.normalize_keys = normalize;
        self
    }
}

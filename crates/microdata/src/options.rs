//! Extraction settings.

/// Default bound on nested item depth.
pub const DEFAULT_MAX_DEPTH: usize = 128;

/// Settings for one extraction run.
///
/// The defaults follow the current HTML microdata rules; each switch
/// selects a stricter or looser behaviour for documents written against
/// other drafts.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ParseOptions {
    /// Record `itemid` on items that declare no `itemtype`.
    ///
    /// Later drafts only define `itemid` for typed items; older ones
    /// accept it everywhere.
    pub id_without_type: bool,
    /// Maximum nesting of items inside items. A nested scope below this
    /// depth is left out of the result.
    pub max_depth: usize,
    /// Resolve URLs against the document's `<base href>` when present.
    pub honor_base_element: bool,
}

impl ParseOptions {
    /// Default settings, usable in const contexts.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            id_without_type: true,
            max_depth: DEFAULT_MAX_DEPTH,
            honor_base_element: true,
        }
    }

    /// Builder-style setter for [`ParseOptions::id_without_type`].
    #[must_use]
    pub const fn with_id_without_type(mut self, enabled: bool) -> Self {
        self.id_without_type = enabled;
        self
    }

    /// Builder-style setter for [`ParseOptions::max_depth`].
    #[must_use]
    pub const fn with_max_depth(mut self, depth: usize) -> Self {
        self.max_depth = depth;
        self
    }

    /// Builder-style setter for [`ParseOptions::honor_base_element`].
    #[must_use]
    pub const fn with_base_element(mut self, enabled: bool) -> Self {
        self.honor_base_element = enabled;
        self
    }
}

impl Default for ParseOptions {
    fn default() -> Self {
        Self::new()
    }
}

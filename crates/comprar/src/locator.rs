//! Selector model for element resolution.
//!
//! Selectors are plain values, resolved fresh against the live DOM on every
//! facade call. No element handles are retained anywhere, so re-renders
//! between two calls never produce stale references.

/// Default timeout for bounded waits (5 seconds)
pub const DEFAULT_TIMEOUT_MS: u64 = 5_000;

/// Default polling interval for bounded waits (50ms)
pub const DEFAULT_POLL_INTERVAL_MS: u64 = 50;

/// Selector for locating elements.
///
/// `Nth` and `Within` exist so that a repeated row can scope all of its
/// internal lookups under one ancestor reference instead of using global
/// selectors that would cross-contaminate between rows.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Selector {
    /// CSS selector (e.g., `.shopping_cart_badge`)
    Css(String),
    /// `data-test` attribute selector (the storefront's test hooks)
    TestId(String),
    /// The n-th match of a CSS selector (0-based)
    Nth {
        /// Base CSS selector
        css: String,
        /// 0-based match index
        index: usize,
    },
    /// A child lookup scoped under an ancestor selector
    Within {
        /// The ancestor the child is resolved under
        root: Box<Selector>,
        /// CSS selector relative to the ancestor
        child: String,
    },
}

impl Selector {
    /// Create a CSS selector
    #[must_use]
    pub fn css(selector: impl Into<String>) -> Self {
        Self::Css(selector.into())
    }

    /// Create a `data-test` attribute selector
    #[must_use]
    pub fn test_id(id: impl Into<String>) -> Self {
        Self::TestId(id.into())
    }

    /// Create a selector for the n-th match of a CSS selector (0-based)
    #[must_use]
    pub fn nth(css: impl Into<String>, index: usize) -> Self {
        Self::Nth {
            css: css.into(),
            index,
        }
    }

    /// Scope a child selector under this one
    #[must_use]
    pub fn child(self, child: impl Into<String>) -> Self {
        Self::Within {
            root: Box::new(self),
            child: child.into(),
        }
    }

    /// Convert to a JavaScript expression resolving to the element or `null`
    #[must_use]
    pub fn to_query(&self) -> String {
        match self {
            Self::Css(s) => format!("document.querySelector({s:?})"),
            Self::TestId(id) => {
                format!("document.querySelector('[data-test={id:?}]')")
            }
            Self::Nth { css, index } => {
                format!("(document.querySelectorAll({css:?})[{index}] ?? null)")
            }
            Self::Within { root, child } => {
                let root_query = root.to_query();
                format!("(() => {{ const r = {root_query}; return r ? r.querySelector({child:?}) : null; }})()")
            }
        }
    }

    /// Convert to a JavaScript expression counting matches
    #[must_use]
    pub fn to_count_query(&self) -> String {
        match self {
            Self::Css(s) => format!("document.querySelectorAll({s:?}).length"),
            Self::TestId(id) => {
                format!("document.querySelectorAll('[data-test={id:?}]').length")
            }
            Self::Nth { css, index } => {
                format!("(document.querySelectorAll({css:?})[{index}] ? 1 : 0)")
            }
            Self::Within { root, child } => {
                let root_query = root.to_query();
                format!("(() => {{ const r = {root_query}; return r ? r.querySelectorAll({child:?}).length : 0; }})()")
            }
        }
    }
}

impl From<&str> for Selector {
    fn from(selector: &str) -> Self {
        Self::Css(selector.to_string())
    }
}

impl From<String> for Selector {
    fn from(selector: String) -> Self {
        Self::Css(selector)
    }
}

impl std::fmt::Display for Selector {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Css(s) => write!(f, "{s}"),
            Self::TestId(id) => write!(f, "[data-test=\"{id}\"]"),
            Self::Nth { css, index } => write!(f, "{css}:nth-match({index})"),
            Self::Within { root, child } => write!(f, "{root} >> {child}"),
        }
    }
}

//! Responsive breakpoint tiers for container widths.
//!
//! Each tier is an upper-bounded pixel bucket chosen from the live container
//! width. The default width tables and font metrics key off the tier, so the
//! same column set resolves to narrower columns in a narrow container.
//!
//! | Breakpoint | Default Range (px)   |
//! |-----------|----------------------|
//! | `Xs`      | <= 480               |
//! | `Sm`      | 481 - 768            |
//! | `Md`      | 769 - 1024           |
//! | `Lg`      | 1025 - 1280          |
//! | `Xl`      | > 1280               |

/// Responsive container-width tier, ordered from narrowest to widest.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Breakpoint {
    /// Extra small: narrowest tier.
    Xs,
    /// Small: compact containers.
    Sm,
    /// Medium: standard content width.
    Md,
    /// Large: wide containers.
    Lg,
    /// Extra large: full-width layouts.
    Xl,
}

impl Breakpoint {
    /// All breakpoints in ascending order.
    pub const ALL: [Breakpoint; 5] = [
        Breakpoint::Xs,
        Breakpoint::Sm,
        Breakpoint::Md,
        Breakpoint::Lg,
        Breakpoint::Xl,
    ];

    /// Ordinal index (0-4).
    #[inline]
    pub(crate) const fn index(self) -> usize {
        match self {
            Breakpoint::Xs => 0,
            Breakpoint::Sm => 1,
            Breakpoint::Md => 2,
            Breakpoint::Lg => 3,
            Breakpoint::Xl => 4,
        }
    }

    /// Short label for display.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Breakpoint::Xs => "xs",
            Breakpoint::Sm => "sm",
            Breakpoint::Md => "md",
            Breakpoint::Lg => "lg",
            Breakpoint::Xl => "xl",
        }
    }
}

impl std::fmt::Display for Breakpoint {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

/// Upper-bound thresholds classifying a container width into a tier.
///
/// A width classifies as the first tier whose threshold it does not exceed;
/// anything above `lg` is `Xl`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Breakpoints {
    /// Maximum width for Xs.
    pub xs: f64,
    /// Maximum width for Sm.
    pub sm: f64,
    /// Maximum width for Md.
    pub md: f64,
    /// Maximum width for Lg.
    pub lg: f64,
    /// Nominal Xl reference width (upper design bound, not a cutoff).
    pub xl: f64,
}

impl Breakpoints {
    /// Default thresholds: 480 / 768 / 1024 / 1280 / 1536 px.
    pub const DEFAULT: Self = Self {
        xs: 480.0,
        sm: 768.0,
        md: 1024.0,
        lg: 1280.0,
        xl: 1536.0,
    };

    /// Classify a container width into a tier.
    #[must_use]
    pub fn classify_width(self, width: f64) -> Breakpoint {
        if width <= self.xs {
            Breakpoint::Xs
        } else if width <= self.sm {
            Breakpoint::Sm
        } else if width <= self.md {
            Breakpoint::Md
        } else if width <= self.lg {
            Breakpoint::Lg
        } else {
            Breakpoint::Xl
        }
    }

    /// Check whether a width is at least as wide as a given tier.
    #[must_use]
    pub fn at_least(self, width: f64, min: Breakpoint) -> bool {
        self.classify_width(width).index() >= min.index()
    }
}

impl Default for Breakpoints {
    fn default() -> Self {
        Self::DEFAULT
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn classify_boundaries() {
        let bp = Breakpoints::DEFAULT;
        assert_eq!(bp.classify_width(0.0), Breakpoint::Xs);
        assert_eq!(bp.classify_width(480.0), Breakpoint::Xs);
        assert_eq!(bp.classify_width(481.0), Breakpoint::Sm);
        assert_eq!(bp.classify_width(768.0), Breakpoint::Sm);
        assert_eq!(bp.classify_width(1024.0), Breakpoint::Md);
        assert_eq!(bp.classify_width(1280.0), Breakpoint::Lg);
        assert_eq!(bp.classify_width(1281.0), Breakpoint::Xl);
        assert_eq!(bp.classify_width(5000.0), Breakpoint::Xl);
    }

    #[test]
    fn negative_width_is_xs() {
        assert_eq!(Breakpoints::DEFAULT.classify_width(-10.0), Breakpoint::Xs);
    }

    #[test]
    fn ordering_and_labels() {
        assert!(Breakpoint::Xs < Breakpoint::Xl);
        assert_eq!(Breakpoint::Md.label(), "md");
        assert_eq!(Breakpoint::Xl.to_string(), "xl");
        assert_eq!(Breakpoint::ALL.len(), 5);
    }

    #[test]
    fn at_least_checks_tier_order() {
        let bp = Breakpoints::DEFAULT;
        assert!(bp.at_least(1300.0, Breakpoint::Md));
        assert!(!bp.at_least(400.0, Breakpoint::Sm));
    }
}

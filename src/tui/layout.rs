/// Responsive breakpoints for the TUI layout.
///
/// Width thresholds live here so render code never hardcodes column counts.

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum Breakpoint {
    /// < 60 cols: short key hints, stacked panels
    Compact,
    /// 60-99 cols: stacked panels
    Normal,
    /// 100+ cols: input and result side by side
    Wide,
}

impl Breakpoint {
    pub fn from_width(width: u16) -> Self {
        match width {
            0..=59 => Breakpoint::Compact,
            60..=99 => Breakpoint::Normal,
            _ => Breakpoint::Wide,
        }
    }

    /// Check if at least this breakpoint (inclusive)
    pub fn at_least(&self, min: Breakpoint) -> bool {
        *self >= min
    }

    /// Input and result panels share a row instead of stacking
    pub fn side_by_side(&self) -> bool {
        self.at_least(Breakpoint::Wide)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn breakpoint_thresholds() {
        assert_eq!(Breakpoint::from_width(40), Breakpoint::Compact);
        assert_eq!(Breakpoint::from_width(59), Breakpoint::Compact);
        assert_eq!(Breakpoint::from_width(60), Breakpoint::Normal);
        assert_eq!(Breakpoint::from_width(99), Breakpoint::Normal);
        assert_eq!(Breakpoint::from_width(100), Breakpoint::Wide);
        assert_eq!(Breakpoint::from_width(300), Breakpoint::Wide);
    }

    #[test]
    fn panels_stack_below_wide() {
        assert!(!Breakpoint::Compact.side_by_side());
        assert!(!Breakpoint::Normal.side_by_side());
        assert!(Breakpoint::Wide.side_by_side());
        assert!(Breakpoint::Normal.at_least(Breakpoint::Compact));
    }
}

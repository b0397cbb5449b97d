use lazy_static::lazy_static;

/// A named sub-interval of the synodic cycle with its display content.
///
/// `range_start` and `range_end` are phase fractions in [0,1); a fraction
/// matches when `range_start <= fraction <= range_end`. The table is content,
/// not code: nothing here guarantees the ranges cover [0,1) without gaps or
/// overlaps, so resolution is total and gaps are separately diagnosable.
#[derive(Debug, Clone, PartialEq)]
pub struct LunarPhaseRange {
    pub name: &'static str,
    pub symbol: &'static str,
    pub range_start: f64,
    pub range_end: f64,
    pub message: &'static str,
}

/// Outcome of resolving a phase fraction against a range table.
///
/// `matched` is `None` when the fraction fell in a gap of the table; callers
/// render the fallback name and symbol instead of failing.
#[derive(Debug, Clone, PartialEq)]
pub struct PhaseResolution<'a> {
    pub matched: Option<&'a LunarPhaseRange>,
    pub fraction: f64,
}

impl<'a> PhaseResolution<'a> {
    pub fn name(&self) -> &'a str {
        self.matched.map_or("unknown phase", |r| r.name)
    }

    pub fn symbol(&self) -> &'a str {
        self.matched.map_or("❓", |r| r.symbol)
    }

    pub fn message(&self) -> &'a str {
        self.matched.map_or("", |r| r.message)
    }
}

/// Resolve a phase fraction against a range table.
///
/// First match in stored order wins, so overlapping ranges are a content
/// ordering question rather than a resolver one. A fraction no range covers
/// resolves to the unknown sentinel.
pub fn resolve_phase(fraction: f64, ranges: &[LunarPhaseRange]) -> PhaseResolution<'_> {
    let matched = ranges
        .iter()
        .find(|r| r.range_start <= fraction && fraction <= r.range_end);
    PhaseResolution { matched, fraction }
}

/// Report the sub-intervals of [0,1) no range in the table covers.
///
/// Intended as a content lint for loaded tables; an empty result means every
/// possible fraction resolves to a named phase.
pub fn coverage_gaps(ranges: &[LunarPhaseRange]) -> Vec<(f64, f64)> {
    const EPS: f64 = 1e-9;

    let mut sorted: Vec<&LunarPhaseRange> = ranges.iter().collect();
    sorted.sort_by(|a, b| a.range_start.total_cmp(&b.range_start));

    let mut gaps = Vec::new();
    let mut covered_to = 0.0_f64;
    for range in sorted {
        if range.range_start > covered_to + EPS {
            gaps.push((covered_to, range.range_start));
        }
        covered_to = covered_to.max(range.range_end);
    }
    if covered_to < 1.0 - EPS {
        gaps.push((covered_to, 1.0));
    }
    gaps
}

lazy_static! {
    /// Built-in eight-phase table partitioning [0,1).
    ///
    /// Boundaries sit at odd sixteenths so each quarter phase is centered on
    /// its exact fraction (full moon on 0.5, quarters on 0.25 and 0.75).
    pub static ref DEFAULT_PHASE_TABLE: Vec<LunarPhaseRange> = vec![
        LunarPhaseRange {
            name: "New Moon",
            symbol: "🌑",
            range_start: 0.0,
            range_end: 0.0625,
            message: "A cycle begins. Set intentions and rest.",
        },
        LunarPhaseRange {
            name: "Waxing Crescent",
            symbol: "🌒",
            range_start: 0.0625,
            range_end: 0.1875,
            message: "First light returns. Take the first small step.",
        },
        LunarPhaseRange {
            name: "First Quarter",
            symbol: "🌓",
            range_start: 0.1875,
            range_end: 0.3125,
            message: "Half lit and climbing. Decide and act.",
        },
        LunarPhaseRange {
            name: "Waxing Gibbous",
            symbol: "🌔",
            range_start: 0.3125,
            range_end: 0.4375,
            message: "Nearly full. Refine what you started.",
        },
        LunarPhaseRange {
            name: "Full Moon",
            symbol: "🌕",
            range_start: 0.4375,
            range_end: 0.5625,
            message: "Peak illumination. Celebrate and release.",
        },
        LunarPhaseRange {
            name: "Waning Gibbous",
            symbol: "🌖",
            range_start: 0.5625,
            range_end: 0.6875,
            message: "The light recedes. Share what you learned.",
        },
        LunarPhaseRange {
            name: "Last Quarter",
            symbol: "🌗",
            range_start: 0.6875,
            range_end: 0.8125,
            message: "Half dark and falling. Let go of what is done.",
        },
        LunarPhaseRange {
            name: "Waning Crescent",
            symbol: "🌘",
            range_start: 0.8125,
            range_end: 1.0,
            message: "The last sliver. Rest before the turn.",
        },
    ];
}

#[cfg(test)]
mod tests {
    use super::*;

    fn range(name: &'static str, start: f64, end: f64) -> LunarPhaseRange {
        LunarPhaseRange {
            name,
            symbol: "·",
            range_start: start,
            range_end: end,
            message: "",
        }
    }

    #[test]
    fn default_table_has_no_gaps() {
        assert!(coverage_gaps(&DEFAULT_PHASE_TABLE).is_empty());
    }

    #[test]
    fn default_table_hits_the_cardinal_fractions() {
        assert_eq!(resolve_phase(0.0, &DEFAULT_PHASE_TABLE).name(), "New Moon");
        assert_eq!(resolve_phase(0.25, &DEFAULT_PHASE_TABLE).name(), "First Quarter");
        assert_eq!(resolve_phase(0.5, &DEFAULT_PHASE_TABLE).name(), "Full Moon");
        assert_eq!(resolve_phase(0.75, &DEFAULT_PHASE_TABLE).name(), "Last Quarter");
        assert_eq!(resolve_phase(0.999, &DEFAULT_PHASE_TABLE).name(), "Waning Crescent");
    }

    #[test]
    fn resolution_is_total_over_the_unit_interval() {
        for i in 0..1000 {
            let f = i as f64 / 1000.0;
            let res = resolve_phase(f, &DEFAULT_PHASE_TABLE);
            assert!(res.matched.is_some(), "fraction {} unresolved", f);
            assert_eq!(res.fraction, f);
        }
    }

    #[test]
    fn gap_resolves_to_unknown_sentinel() {
        let table = vec![range("low", 0.0, 0.3), range("high", 0.7, 1.0)];
        let res = resolve_phase(0.5, &table);
        assert!(res.matched.is_none());
        assert_eq!(res.name(), "unknown phase");
        assert_eq!(res.symbol(), "❓");
        assert_eq!(res.message(), "");
    }

    #[test]
    fn empty_table_resolves_to_unknown() {
        let res = resolve_phase(0.5, &[]);
        assert!(res.matched.is_none());
    }

    #[test]
    fn overlap_first_match_in_stored_order_wins() {
        let table = vec![range("first", 0.2, 0.6), range("second", 0.4, 0.8)];
        assert_eq!(resolve_phase(0.5, &table).name(), "first");
        assert_eq!(resolve_phase(0.7, &table).name(), "second");

        let reversed = vec![range("second", 0.4, 0.8), range("first", 0.2, 0.6)];
        assert_eq!(resolve_phase(0.5, &reversed).name(), "second");
    }

    #[test]
    fn boundaries_are_inclusive_on_both_ends() {
        let table = vec![range("only", 0.25, 0.75)];
        assert!(resolve_phase(0.25, &table).matched.is_some());
        assert!(resolve_phase(0.75, &table).matched.is_some());
        assert!(resolve_phase(0.24999, &table).matched.is_none());
    }

    #[test]
    fn coverage_gaps_reports_holes_and_tail() {
        let table = vec![range("a", 0.1, 0.4), range("b", 0.6, 0.9)];
        let gaps = coverage_gaps(&table);
        assert_eq!(gaps.len(), 3);
        assert!((gaps[0].0 - 0.0).abs() < 1e-12 && (gaps[0].1 - 0.1).abs() < 1e-12);
        assert!((gaps[1].0 - 0.4).abs() < 1e-12 && (gaps[1].1 - 0.6).abs() < 1e-12);
        assert!((gaps[2].0 - 0.9).abs() < 1e-12 && (gaps[2].1 - 1.0).abs() < 1e-12);
    }

    #[test]
    fn coverage_gaps_handles_unordered_input() {
        let table = vec![range("b", 0.5, 1.0), range("a", 0.0, 0.5)];
        assert!(coverage_gaps(&table).is_empty());
    }

    #[test]
    fn coverage_gaps_on_empty_table_is_everything() {
        let gaps = coverage_gaps(&[]);
        assert_eq!(gaps, vec![(0.0, 1.0)]);
    }
}

use crate::division::Division;

/// Pie charts start at twelve o'clock and run counter-clockwise.
pub const START_ANGLE_DEG: f64 = 90.0;
/// Fraction of the radius the leftover wedge is pulled out by.
pub const LEFTOVER_EXPLODE: f64 = 0.1;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SliceKind {
    FairShare,
    Leftover,
}

impl SliceKind {
    pub fn label(self) -> &'static str {
        match self {
            SliceKind::FairShare => "fair share",
            SliceKind::Leftover => "leftover",
        }
    }

    pub fn color(self) -> &'static str {
        match self {
            SliceKind::FairShare => "#6495ED",
            SliceKind::Leftover => "#FFA500",
        }
    }

    fn explode(self) -> f64 {
        match self {
            SliceKind::FairShare => 0.0,
            SliceKind::Leftover => LEFTOVER_EXPLODE,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ShareSlice {
    pub kind: SliceKind,
    pub value: u32,
}

impl ShareSlice {
    pub fn label(&self) -> &'static str {
        self.kind.label()
    }
}

/// The two halves of a division: what was shared evenly and what is left.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Proportions {
    pub divisor: u32,
    pub fair_share: ShareSlice,
    pub leftover: ShareSlice,
}

pub fn proportions(quotient: u32, divisor: u32, remainder: u32) -> Proportions {
    Proportions {
        divisor,
        fair_share: ShareSlice {
            kind: SliceKind::FairShare,
            value: quotient * divisor,
        },
        leftover: ShareSlice {
            kind: SliceKind::Leftover,
            value: remainder,
        },
    }
}

impl From<&Division> for Proportions {
    fn from(d: &Division) -> Self {
        proportions(d.quotient, d.divisor, d.remainder)
    }
}

impl Proportions {
    pub fn slices(&self) -> [ShareSlice; 2] {
        [self.fair_share, self.leftover]
    }

    /// Equals the dividend the proportions were derived from.
    pub fn total(&self) -> u32 {
        self.fair_share.value + self.leftover.value
    }

    /// Nothing to draw when there were no treats at all.
    pub fn is_renderable(&self) -> bool {
        self.total() > 0
    }

    pub fn caption(&self, kind: SliceKind) -> String {
        match kind {
            SliceKind::FairShare => format!("Each Animal's Share ({} animals)", self.divisor),
            SliceKind::Leftover => "Leftovers".to_string(),
        }
    }

    /// Lays the slices out as pie wedges, or `None` for a degenerate chart.
    pub fn pie(&self) -> Option<Vec<PieSlice>> {
        if !self.is_renderable() {
            return None;
        }

        let total = f64::from(self.total());
        let mut start_deg = START_ANGLE_DEG;
        let wedges = self
            .slices()
            .into_iter()
            .map(|slice| {
                let fraction = f64::from(slice.value) / total;
                let wedge = PieSlice {
                    kind: slice.kind,
                    caption: self.caption(slice.kind),
                    value: slice.value,
                    percent: fraction * 100.0,
                    start_deg,
                    sweep_deg: fraction * 360.0,
                    explode: slice.kind.explode(),
                };
                start_deg += wedge.sweep_deg;
                wedge
            })
            .collect();

        Some(wedges)
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct PieSlice {
    pub kind: SliceKind,
    pub caption: String,
    pub value: u32,
    pub percent: f64,
    pub start_deg: f64,
    pub sweep_deg: f64,
    pub explode: f64,
}

impl PieSlice {
    pub fn percent_label(&self) -> String {
        format!("{:.1}%", self.percent)
    }

    pub fn mid_deg(&self) -> f64 {
        self.start_deg + self.sweep_deg / 2.0
    }

    pub fn is_full_circle(&self) -> bool {
        self.sweep_deg >= 360.0
    }

    pub fn is_empty(&self) -> bool {
        self.value == 0
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{division::divide, names};

    #[test]
    fn slices_sum_to_dividend() {
        for dividend in names::TREATS_MIN..=names::TREATS_MAX {
            for divisor in names::ANIMALS_MIN..=names::ANIMALS_MAX {
                let d = divide(dividend, divisor).unwrap();
                let p = proportions(d.quotient, d.divisor, d.remainder);
                assert_eq!(p.total(), dividend);
            }
        }
    }

    #[test]
    fn twenty_five_among_five() {
        let d = divide(25, 5).unwrap();
        let p = Proportions::from(&d);
        let slices = p.slices();
        assert_eq!(slices[0].label(), "fair share");
        assert_eq!(slices[0].value, 25);
        assert_eq!(slices[1].label(), "leftover");
        assert_eq!(slices[1].value, 0);
    }

    #[test]
    fn zero_treats_is_not_renderable() {
        let p = proportions(0, 4, 0);
        assert_eq!(p.total(), 0);
        assert!(!p.is_renderable());
        assert!(p.pie().is_none());
    }

    #[test]
    fn pie_wedges_cover_the_circle() {
        let p = Proportions::from(&divide(17, 3).unwrap());
        let pie = p.pie().unwrap();

        assert_eq!(pie[0].start_deg, START_ANGLE_DEG);
        assert_eq!(pie[1].start_deg, pie[0].start_deg + pie[0].sweep_deg);
        let swept: f64 = pie.iter().map(|s| s.sweep_deg).sum();
        assert!((swept - 360.0).abs() < 1e-9);

        assert_eq!(pie[0].percent_label(), "88.2%");
        assert_eq!(pie[1].percent_label(), "11.8%");
        assert_eq!(pie[0].explode, 0.0);
        assert_eq!(pie[1].explode, LEFTOVER_EXPLODE);
    }

    #[test]
    fn even_share_is_a_full_circle() {
        let p = Proportions::from(&divide(25, 5).unwrap());
        let pie = p.pie().unwrap();
        assert!(pie[0].is_full_circle());
        assert!(pie[1].is_empty());
        assert_eq!(pie[1].percent_label(), "0.0%");
        assert_eq!(pie[0].caption, "Each Animal's Share (5 animals)");
        assert_eq!(pie[1].caption, "Leftovers");
    }
}

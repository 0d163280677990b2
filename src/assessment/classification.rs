use serde::{Deserialize, Serialize};

use super::catalog::Catalog;

/// Maximum attainable score of the 34-question catalog the published ICSPS
/// thresholds were calibrated against.
const REFERENCE_MAX_SCORE: u32 = 102;
const REFERENCE_AD_HOC_MAX: u32 = 62;
const REFERENCE_REACTIVE_MAX: u32 = 88;

/// The three maturity phases countries are mapped into.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum MaturityLevel {
    AdHoc,
    Reactive,
    Proactive,
}

impl MaturityLevel {
    pub const fn label(self) -> &'static str {
        match self {
            MaturityLevel::AdHoc => "Ad-hoc supply planning",
            MaturityLevel::Reactive => "Reactive supply planning",
            MaturityLevel::Proactive => "Proactive supply planning",
        }
    }
}

/// Upper bounds of the two lower maturity bands; anything above
/// `reactive_max` is proactive.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct MaturityBands {
    pub ad_hoc_max: u32,
    pub reactive_max: u32,
}

impl MaturityBands {
    /// The fixed ICSPS thresholds, valid for the standard 34-question
    /// catalog (max score 102).
    pub const fn icsps() -> Self {
        Self {
            ad_hoc_max: REFERENCE_AD_HOC_MAX,
            reactive_max: REFERENCE_REACTIVE_MAX,
        }
    }

    /// Thresholds scaled to a catalog's maximum attainable score, so that
    /// catalog variants with a different question count keep the same band
    /// proportions. For the standard catalog this reproduces the fixed
    /// ICSPS thresholds exactly.
    pub fn for_max_score(max_score: u32) -> Self {
        Self {
            ad_hoc_max: scale(REFERENCE_AD_HOC_MAX, max_score),
            reactive_max: scale(REFERENCE_REACTIVE_MAX, max_score),
        }
    }

    pub fn for_catalog(catalog: &Catalog) -> Self {
        Self::for_max_score(catalog.max_score())
    }

    /// Map a total score to its maturity band.
    pub fn classify(&self, total: u32) -> MaturityLevel {
        if total <= self.ad_hoc_max {
            MaturityLevel::AdHoc
        } else if total <= self.reactive_max {
            MaturityLevel::Reactive
        } else {
            MaturityLevel::Proactive
        }
    }
}

fn scale(reference_bound: u32, max_score: u32) -> u32 {
    // Round-to-nearest proportional rescaling of the reference bound.
    (reference_bound * max_score + REFERENCE_MAX_SCORE / 2) / REFERENCE_MAX_SCORE
}

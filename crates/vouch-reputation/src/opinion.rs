// crates/vouch-reputation/src/opinion.rs
//
// Subjective-logic opinions and the operators of evidence-based subjective
// logic (EBSL): construction from evidence, cumulative fusion, scalar
// multiplication, discounting, and expectation.
//
// Every operator returns an opinion whose belief, disbelief, and uncertainty
// sum to one (within OPINION_EPSILON) and never contains NaN or infinity.

use serde::{Deserialize, Serialize};
use vouch_core::VouchError;

/// Non-informative prior weight W in Jøsang's evidence mapping.
pub const PRIOR_WEIGHT: f64 = 2.0;

/// Base rate used when the caller has no prior about an address.
pub const DEFAULT_BASE_RATE: f64 = 0.5;

/// Tolerance for the belief + disbelief + uncertainty == 1 invariant.
pub const OPINION_EPSILON: f64 = 1e-9;

/// A binomial opinion about a proposition ("this address is trustworthy").
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Opinion {
    /// Mass supporting the proposition.
    pub belief: f64,
    /// Mass against the proposition.
    pub disbelief: f64,
    /// Mass not committed either way.
    pub uncertainty: f64,
    /// Prior probability of the proposition absent any evidence.
    pub base_rate: f64,
}

impl Opinion {
    /// The "no evidence" opinion: full uncertainty at the given base rate.
    pub fn vacuous(base_rate: f64) -> Self {
        Self {
            belief: 0.0,
            disbelief: 0.0,
            uncertainty: 1.0,
            base_rate: sanitize_base_rate(base_rate),
        }
    }

    /// Build an opinion from explicit components, rejecting anything that
    /// violates the opinion invariants.
    pub fn try_new(
        belief: f64,
        disbelief: f64,
        uncertainty: f64,
        base_rate: f64,
    ) -> Result<Self, VouchError> {
        let parts = [
            ("belief", belief),
            ("disbelief", disbelief),
            ("uncertainty", uncertainty),
            ("base_rate", base_rate),
        ];
        for (name, value) in parts {
            if !value.is_finite() || !(0.0..=1.0).contains(&value) {
                return Err(VouchError::InvalidOpinion(format!(
                    "{} must be a finite value in [0, 1], got {}",
                    name, value
                )));
            }
        }
        let sum = belief + disbelief + uncertainty;
        if (sum - 1.0).abs() > OPINION_EPSILON {
            return Err(VouchError::InvalidOpinion(format!(
                "belief + disbelief + uncertainty must equal 1, got {}",
                sum
            )));
        }
        Ok(Self {
            belief,
            disbelief,
            uncertainty,
            base_rate,
        })
    }

    /// Map a trust level (0..=100) backed by `evidence` equivalent
    /// observations to an opinion, using prior weight W = 2:
    ///
    /// - belief      = r * p / (r + W)
    /// - disbelief   = r * (1 - p) / (r + W)
    /// - uncertainty = W / (r + W)
    ///
    /// where p = trust_level / 100 and r = evidence.
    ///
    /// Out-of-range input is clamped: trust levels into [0, 100], negative
    /// evidence to 0, base rates into [0, 1]. A non-finite trust level or
    /// evidence count carries no usable information and yields the vacuous
    /// opinion.
    pub fn from_evidence(trust_level: f64, evidence: f64, base_rate: f64) -> Self {
        let base_rate = sanitize_base_rate(base_rate);
        if !trust_level.is_finite() || !evidence.is_finite() {
            return Self::vacuous(base_rate);
        }
        let p = trust_level.clamp(0.0, 100.0) / 100.0;
        let r = evidence.max(0.0);
        let total = r + PRIOR_WEIGHT;

        let belief = r * p / total;
        let disbelief = r * (1.0 - p) / total;
        Self {
            belief,
            disbelief,
            uncertainty: 1.0 - belief - disbelief,
            base_rate,
        }
    }

    /// Cumulative fusion of two independent opinions.
    ///
    /// With k = uA + uB - uA*uB:
    /// - belief      = (bA*uB + bB*uA) / k
    /// - disbelief   = (dA*uB + dB*uA) / k
    /// - uncertainty = uA*uB / k
    ///
    /// When both opinions are dogmatic (k == 0) the result is the equal-weight
    /// average of their belief and disbelief with zero uncertainty.
    ///
    /// The fused base rate is the inputs' base rates weighted by their
    /// equivalent evidence (see [`Opinion::evidence_weight`]). A dogmatic
    /// side outweighs any finite evidence; the plain mean is used only when
    /// both sides carry no evidence or both are dogmatic.
    ///
    /// The operator is commutative and associative, so a list of opinions may
    /// be folded in any order.
    pub fn fuse(&self, other: &Opinion) -> Opinion {
        let (ua, ub) = (self.uncertainty, other.uncertainty);
        let base_rate = self.fused_base_rate(other);
        let k = ua + ub - ua * ub;

        if k <= f64::EPSILON {
            let belief = (self.belief + other.belief) / 2.0;
            let disbelief = (self.disbelief + other.disbelief) / 2.0;
            let mass = belief + disbelief;
            // Renormalize so the dogmatic average still sums to exactly one.
            let (belief, disbelief) = if mass > 0.0 {
                (belief / mass, disbelief / mass)
            } else {
                (0.0, 0.0)
            };
            return Opinion {
                belief,
                disbelief,
                uncertainty: if mass > 0.0 { 0.0 } else { 1.0 },
                base_rate,
            }
            .normalized();
        }

        Opinion {
            belief: (self.belief * ub + other.belief * ua) / k,
            disbelief: (self.disbelief * ub + other.disbelief * ua) / k,
            uncertainty: (ua * ub) / k,
            base_rate,
        }
        .normalized()
    }

    /// Scale belief and disbelief by `k` (clamped to [0, 1]); the removed
    /// mass moves to uncertainty.
    pub fn scale(&self, k: f64) -> Opinion {
        let k = if k.is_finite() { k.clamp(0.0, 1.0) } else { 0.0 };
        let belief = k * self.belief;
        let disbelief = k * self.disbelief;
        Opinion {
            belief,
            disbelief,
            uncertainty: 1.0 - belief - disbelief,
            base_rate: self.base_rate,
        }
        .normalized()
    }

    /// Discount `target` by this opinion, read as trust in the referrer
    /// that supplied `target`.
    ///
    /// The discount factor is this opinion's belief, so distrusted or unknown
    /// referrers pass on proportionally less of what they vouch for. The
    /// result is never more certain than `target`.
    pub fn discount(&self, target: &Opinion) -> Opinion {
        target.scale(self.belief)
    }

    /// Probability expectation: belief + uncertainty * base_rate, in [0, 1].
    pub fn expectation(&self) -> f64 {
        (self.belief + self.uncertainty * self.base_rate).clamp(0.0, 1.0)
    }

    /// True for the "no evidence" opinion.
    pub fn is_vacuous(&self) -> bool {
        self.belief == 0.0 && self.disbelief == 0.0 && self.uncertainty >= 1.0
    }

    /// Amount of evidence this opinion is equivalent to, r = W * (1 - u) / u.
    /// Dogmatic opinions report infinity.
    pub fn evidence_weight(&self) -> f64 {
        if self.uncertainty <= 0.0 {
            return f64::INFINITY;
        }
        PRIOR_WEIGHT * (1.0 - self.uncertainty) / self.uncertainty
    }

    fn fused_base_rate(&self, other: &Opinion) -> f64 {
        let (ra, rb) = (self.evidence_weight(), other.evidence_weight());
        let mean = (self.base_rate + other.base_rate) / 2.0;
        match (ra.is_infinite(), rb.is_infinite()) {
            (true, true) => mean,
            (true, false) => self.base_rate,
            (false, true) => other.base_rate,
            (false, false) if ra + rb > 0.0 => {
                (ra * self.base_rate + rb * other.base_rate) / (ra + rb)
            }
            (false, false) => mean,
        }
    }

    /// Clamp components into [0, 1] and absorb rounding drift into
    /// uncertainty so the components sum to one.
    fn normalized(self) -> Opinion {
        let belief = finite_unit(self.belief);
        let disbelief = finite_unit(self.disbelief);
        let committed = belief + disbelief;
        let (belief, disbelief) = if committed > 1.0 {
            (belief / committed, disbelief / committed)
        } else {
            (belief, disbelief)
        };
        Opinion {
            belief,
            disbelief,
            uncertainty: (1.0 - belief - disbelief).max(0.0),
            base_rate: sanitize_base_rate(self.base_rate),
        }
    }
}

impl Default for Opinion {
    fn default() -> Self {
        Self::vacuous(DEFAULT_BASE_RATE)
    }
}

/// Free-function form of [`Opinion::from_evidence`].
pub fn opinion_from_evidence(trust_level: f64, evidence: f64, base_rate: f64) -> Opinion {
    Opinion::from_evidence(trust_level, evidence, base_rate)
}

/// Free-function form of [`Opinion::fuse`].
pub fn fuse(a: &Opinion, b: &Opinion) -> Opinion {
    a.fuse(b)
}

/// Fold any number of opinions with cumulative fusion.
///
/// Returns `None` for an empty input so callers choose their own neutral
/// element (usually the vacuous opinion).
pub fn fuse_all<'a, I>(opinions: I) -> Option<Opinion>
where
    I: IntoIterator<Item = &'a Opinion>,
{
    opinions
        .into_iter()
        .copied()
        .reduce(|acc, next| acc.fuse(&next))
}

/// Free-function form of [`Opinion::scale`].
pub fn scalar_multiply(k: f64, opinion: &Opinion) -> Opinion {
    opinion.scale(k)
}

/// Free-function form of [`Opinion::discount`].
pub fn generic_discount(discounting: &Opinion, target: &Opinion) -> Opinion {
    discounting.discount(target)
}

/// Discount what a referrer says about a subject by the trust held in the
/// referrer.
pub fn discount_opinion(trust_in_referrer: &Opinion, referred: &Opinion) -> Opinion {
    generic_discount(trust_in_referrer, referred)
}

/// Free-function form of [`Opinion::expectation`].
pub fn expectation(opinion: &Opinion) -> f64 {
    opinion.expectation()
}

fn finite_unit(value: f64) -> f64 {
    if value.is_finite() {
        value.clamp(0.0, 1.0)
    } else {
        0.0
    }
}

fn sanitize_base_rate(base_rate: f64) -> f64 {
    if base_rate.is_finite() {
        base_rate.clamp(0.0, 1.0)
    } else {
        DEFAULT_BASE_RATE
    }
}

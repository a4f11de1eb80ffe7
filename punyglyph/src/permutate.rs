//! The permutation module generates homoglyph variations of a domain
//! label and keeps the ones that are valid internationalized domain
//! names.
//!
//! Variations are enumerated exhaustively. For a budget of `n`
//! substitutions, every combination of `1..=n` replaceable positions is
//! taken, and for every combination every assignment of look-alike
//! glyphs to those positions is produced. Each candidate is then encoded
//! (see [`encode`](../encode/index.html)); candidates that cannot be
//! encoded are dropped silently.
//!
//! Example:
//!
//! ```
//! use punyglyph::permutate::Domain;
//!
//! let domain = Domain::new("example", "com").unwrap();
//! let generation = domain.homoglyph(1);
//!
//! for variant in &generation.variants {
//!     println!("{} -> {}", variant.display, variant.encoded);
//! }
//! ```
use crate::constants::HOMOGLYPHS;
use crate::encode::{encode, EncodeError};
use crate::error::Error;

use std::str::Chars;

use addr::parser::DomainName;
use addr::psl::List;
use itertools::Itertools;
use serde::Serialize;
use tracing::{debug, trace};

/// Wrapper around a domain label and its top-level domain to perform
/// homoglyph permutations against.
#[derive(Default, Debug, Clone, Serialize)]
pub struct Domain {
    /// The label to permute (e.g. `example`).
    pub label: String,

    /// The top-level domain appended to every variation (e.g. `com`).
    pub tld: String,

    /// The label split into characters. Positions are character
    /// offsets, not byte offsets.
    #[serde(skip)]
    chars: Vec<char>,
}

/// A label with one or more characters swapped for homoglyphs. The
/// top-level domain is not part of the candidate.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize)]
pub struct Candidate {
    pub label: String,

    /// Number of positions that were substituted.
    pub substitutions: usize,
}

/// A variation that survived encoding: the Unicode form as a user would
/// see it, and the ASCII-compatible form that actually resolves.
///
/// Variants order lexicographically by `display`, then by `encoded`.
#[derive(Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
pub struct Variant {
    pub display: String,
    pub encoded: String,
}

/// Outcome of a homoglyph run.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize)]
pub struct Generation {
    /// Deduplicated, sorted variants.
    pub variants: Vec<Variant>,

    /// Number of candidates that were handed to the encoder.
    pub attempted: usize,

    /// Number of candidates the encoder rejected.
    pub rejected: usize,
}

#[derive(Clone, thiserror::Error, Debug)]
pub enum PermutationError {
    #[error("invalid domain name, (expected {expected:?}, found {found:?})")]
    InvalidDomain { expected: String, found: String },
}

impl Domain {
    /// Wrap a label (e.g. `example`) and a top-level domain (e.g. `com`)
    /// into a `Domain`. Neither may be empty.
    ///
    /// Case folding is left to the caller.
    pub fn new(label: &str, tld: &str) -> Result<Domain, Error> {
        if label.is_empty() {
            return Err(PermutationError::InvalidDomain {
                expected: "non-empty domain label".to_string(),
                found: label.to_string(),
            }
            .into());
        }

        if tld.is_empty() {
            return Err(PermutationError::InvalidDomain {
                expected: "non-empty top-level domain".to_string(),
                found: tld.to_string(),
            }
            .into());
        }

        Ok(Domain {
            label: label.to_string(),
            tld: tld.to_string(),
            chars: label.chars().collect(),
        })
    }

    /// Break a full domain (e.g. `www.example.co.uk`) into its
    /// registrable label (`example`) and public suffix (`co.uk`) using
    /// the public suffix list. Any subdomains are discarded.
    pub fn from_fqdn(fqdn: &str) -> Result<Domain, Error> {
        let parsed_domain =
            List.parse_domain_name(fqdn)
                .map_err(|_| PermutationError::InvalidDomain {
                    expected: "valid domain name that can be parsed".to_string(),
                    found: fqdn.to_string(),
                })?;
        let root_domain = parsed_domain
            .root()
            .ok_or(PermutationError::InvalidDomain {
                expected: "valid domain name with a root domain".to_string(),
                found: fqdn.to_string(),
            })?;
        let tld = parsed_domain.suffix();
        let label = root_domain
            .find('.')
            .and_then(|offset| root_domain.get(..offset))
            .ok_or(PermutationError::InvalidDomain {
                expected: "valid domain name with a root domain".to_string(),
                found: fqdn.to_string(),
            })?;

        Domain::new(label, tld)
    }

    /// Character offsets within the label whose character has at least
    /// one homoglyph.
    pub fn replaceable_positions(&self) -> Vec<usize> {
        self.chars
            .iter()
            .enumerate()
            .filter(|(_, c)| HOMOGLYPHS.contains_key(*c))
            .map(|(i, _)| i)
            .collect()
    }

    /// The substitution budget actually used for `max_substitutions`;
    /// never more than the number of replaceable positions.
    pub fn clamp(&self, max_substitutions: usize) -> usize {
        max_substitutions.min(self.replaceable_positions().len())
    }

    /// Every candidate with between one and `max_substitutions`
    /// substitutions, grouped by substitution count in ascending order.
    pub fn candidates(&self, max_substitutions: usize) -> impl Iterator<Item = Candidate> + '_ {
        self.enumerate_candidates(self.replaceable_positions(), max_substitutions)
    }

    /// Every candidate with exactly `substitutions` substituted positions.
    /// Empty when `substitutions` is zero or larger than the number of
    /// replaceable positions.
    pub fn candidates_with(&self, substitutions: usize) -> impl Iterator<Item = Candidate> + '_ {
        self.combine(self.replaceable_positions(), substitutions)
    }

    /// Number of candidates [`Domain::candidates`] yields for
    /// `max_substitutions`, computed without enumerating them.
    pub fn candidate_bound(&self, max_substitutions: usize) -> usize {
        let counts: Vec<usize> = self
            .replaceable_positions()
            .into_iter()
            .map(|pos| self.glyphs_at(pos).count())
            .collect();

        (1..=max_substitutions.min(counts.len()))
            .map(|k| {
                counts
                    .iter()
                    .combinations(k)
                    .map(|combination| combination.into_iter().product::<usize>())
                    .sum::<usize>()
            })
            .sum()
    }

    /// Append the top-level domain to a candidate and encode it.
    pub fn encode_candidate(&self, candidate: &Candidate) -> Result<Variant, EncodeError> {
        let display = format!("{}.{}", candidate.label, self.tld);
        let encoded = encode(&display)?;

        Ok(Variant { display, encoded })
    }

    /// Generate all homoglyph variations with up to `max_substitutions`
    /// substituted characters that encode as valid IDNs.
    ///
    /// An empty result is a normal outcome; it means the label has no
    /// replaceable characters, the budget is zero, or every candidate was
    /// rejected by the encoder.
    pub fn homoglyph(&self, max_substitutions: usize) -> Generation {
        let replaceable = self.replaceable_positions();
        let budget = max_substitutions.min(replaceable.len());

        if budget < 1 {
            debug!(
                label = %self.label,
                tld = %self.tld,
                max_substitutions,
                "no homoglyph variations possible"
            );
            return Generation::default();
        }

        let (mut variants, attempted) = self.encode_candidates(replaceable, budget);
        let accepted = variants.len();

        variants.sort_unstable();
        variants.dedup();

        debug!(
            label = %self.label,
            tld = %self.tld,
            budget,
            attempted,
            accepted,
            unique = variants.len(),
            "generated homoglyph variations"
        );

        Generation {
            variants,
            attempted,
            rejected: attempted - accepted,
        }
    }

    #[cfg(not(feature = "parallel"))]
    fn encode_candidates(&self, replaceable: Vec<usize>, budget: usize) -> (Vec<Variant>, usize) {
        let mut attempted = 0;
        let variants = self
            .enumerate_candidates(replaceable, budget)
            .inspect(|_| attempted += 1)
            .filter_map(|candidate| self.try_variant(&candidate))
            .collect();

        (variants, attempted)
    }

    // Partial results are merged into one vector before the caller sorts
    // and deduplicates, so output matches the sequential path exactly.
    #[cfg(feature = "parallel")]
    fn encode_candidates(&self, replaceable: Vec<usize>, budget: usize) -> (Vec<Variant>, usize) {
        use rayon::prelude::*;

        let candidates: Vec<Candidate> = self.enumerate_candidates(replaceable, budget).collect();
        let variants = candidates
            .par_iter()
            .filter_map(|candidate| self.try_variant(candidate))
            .collect();

        (variants, candidates.len())
    }

    fn try_variant(&self, candidate: &Candidate) -> Option<Variant> {
        match self.encode_candidate(candidate) {
            Ok(variant) => Some(variant),
            Err(e) => {
                trace!(label = %candidate.label, error = %e, "rejected homoglyph candidate");
                None
            }
        }
    }

    /// Candidates for `1..=max_substitutions` over a position set that
    /// was computed once by the caller.
    fn enumerate_candidates(
        &self,
        replaceable: Vec<usize>,
        max_substitutions: usize,
    ) -> impl Iterator<Item = Candidate> + '_ {
        let budget = max_substitutions.min(replaceable.len());

        (1..=budget).flat_map(move |k| self.combine(replaceable.clone(), k))
    }

    fn combine(
        &self,
        replaceable: Vec<usize>,
        substitutions: usize,
    ) -> impl Iterator<Item = Candidate> + '_ {
        replaceable
            .into_iter()
            .combinations(substitutions)
            .filter(|positions| !positions.is_empty())
            .flat_map(move |positions| {
                let alternatives: Vec<Chars<'static>> =
                    positions.iter().map(|&pos| self.glyphs_at(pos)).collect();

                alternatives
                    .into_iter()
                    .multi_cartesian_product()
                    .map(move |glyphs| self.substitute(&positions, &glyphs))
            })
    }

    fn glyphs_at(&self, pos: usize) -> Chars<'static> {
        self.chars
            .get(pos)
            .and_then(|c| HOMOGLYPHS.get(c))
            .copied()
            .unwrap_or_default()
            .chars()
    }

    fn substitute(&self, positions: &[usize], glyphs: &[char]) -> Candidate {
        let mut label = self.chars.clone();

        for (&pos, &glyph) in positions.iter().zip(glyphs) {
            label[pos] = glyph;
        }

        Candidate {
            label: label.into_iter().collect(),
            substitutions: positions.len(),
        }
    }
}

/// Generate the sorted, deduplicated homoglyph variations of
/// `domain.tld` with up to `max_substitutions` substitutions.
///
/// Fails only when `domain` or `tld` is empty.
pub fn generate(domain: &str, tld: &str, max_substitutions: usize) -> Result<Vec<Variant>, Error> {
    Ok(Domain::new(domain, tld)?
        .homoglyph(max_substitutions)
        .variants)
}

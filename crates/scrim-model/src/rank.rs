// Copyright (c) 2025 Felix Kahle.
//
// Permission is hereby granted, free of charge, to any person obtaining
// a copy of this software and associated documentation files (the
// "Software"), to deal in the Software without restriction, including
// without limitation the rights to use, copy, modify, merge, publish,
// distribute, sublicense, and/or sell copies of the Software, and to
// permit persons to whom the Software is furnished to do so, subject to
// the following conditions:
//
// The above copyright notice and this permission notice shall be
// included in all copies or substantial portions of the Software.
//
// THE SOFTWARE IS PROVIDED "AS IS", WITHOUT WARRANTY OF ANY KIND,
// EXPRESS OR IMPLIED, INCLUDING BUT NOT LIMITED TO THE WARRANTIES OF
// MERCHANTABILITY, FITNESS FOR A PARTICULAR PURPOSE AND
// NONINFRINGEMENT. IN NO EVENT SHALL THE AUTHORS OR COPYRIGHT HOLDERS BE
// LIABLE FOR ANY CLAIM, DAMAGES OR OTHER LIABILITY, WHETHER IN AN ACTION
// OF CONTRACT, TORT OR OTHERWISE, ARISING FROM, OUT OF OR IN CONNECTION
// WITH THE SOFTWARE OR THE USE OR OTHER DEALINGS IN THE SOFTWARE.

//! Rank labels and the rank-to-rating lookup.
//!
//! Registration happens in terms of ladder ranks ("Gold 2", "Master"), not
//! raw numbers. This module owns the label grammar and the fixed lookup that
//! turns a rank into an integer rating: the six lower tiers run from Iron 4
//! at 0 to Emerald 1 at 2300 in steps of 100, Diamond divisions widen to
//! steps of 200 (2400 through 3000), and the three apex tiers sit at 3200,
//! 3500 and 3800 without divisions.
//!
//! Parsing is the registration layer's validation point: the solver itself
//! only ever sees ratings that came out of this table.

use thiserror::Error;

/// A ladder tier.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum RankTier {
    Iron,
    Bronze,
    Silver,
    Gold,
    Platinum,
    Emerald,
    Diamond,
    Master,
    Grandmaster,
    Challenger,
}

impl RankTier {
    /// All tiers from lowest to highest.
    pub const ALL: [RankTier; 10] = [
        RankTier::Iron,
        RankTier::Bronze,
        RankTier::Silver,
        RankTier::Gold,
        RankTier::Platinum,
        RankTier::Emerald,
        RankTier::Diamond,
        RankTier::Master,
        RankTier::Grandmaster,
        RankTier::Challenger,
    ];

    /// Returns `true` for the divisionless apex tiers.
    #[inline]
    pub const fn is_apex(self) -> bool {
        matches!(
            self,
            RankTier::Master | RankTier::Grandmaster | RankTier::Challenger
        )
    }

    /// Returns the tier's display name.
    #[inline]
    pub const fn label(self) -> &'static str {
        match self {
            RankTier::Iron => "Iron",
            RankTier::Bronze => "Bronze",
            RankTier::Silver => "Silver",
            RankTier::Gold => "Gold",
            RankTier::Platinum => "Platinum",
            RankTier::Emerald => "Emerald",
            RankTier::Diamond => "Diamond",
            RankTier::Master => "Master",
            RankTier::Grandmaster => "Grandmaster",
            RankTier::Challenger => "Challenger",
        }
    }
}

impl std::fmt::Display for RankTier {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.label())
    }
}

/// An error produced while constructing or parsing a [`Rank`].
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum RankParseError {
    #[error("unrecognized rank tier `{0}`")]
    UnknownTier(String),

    #[error("rank division must be between 1 and 4, got {0}")]
    InvalidDivision(u8),

    #[error("rank tier `{0}` requires a division between 1 and 4")]
    MissingDivision(RankTier),

    #[error("apex tier `{0}` does not take a division")]
    UnexpectedDivision(RankTier),

    #[error("invalid rank label `{0}`")]
    InvalidFormat(String),
}

/// A fully qualified ladder rank: a tier plus a division for non-apex tiers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Rank {
    tier: RankTier,
    /// Division `1..=4`, `None` for apex tiers. `1` is the strongest division.
    division: Option<u8>,
}

impl Rank {
    /// Creates a divisioned rank for a non-apex tier.
    ///
    /// # Examples
    ///
    /// ```rust
    /// # use scrim_model::rank::{Rank, RankTier};
    /// let rank = Rank::new(RankTier::Gold, 2).unwrap();
    /// assert_eq!(rank.rating_value(), 1400);
    /// ```
    pub fn new(tier: RankTier, division: u8) -> Result<Self, RankParseError> {
        if tier.is_apex() {
            return Err(RankParseError::UnexpectedDivision(tier));
        }
        if !(1..=4).contains(&division) {
            return Err(RankParseError::InvalidDivision(division));
        }
        Ok(Self {
            tier,
            division: Some(division),
        })
    }

    /// Creates a rank for a divisionless apex tier.
    pub fn apex(tier: RankTier) -> Result<Self, RankParseError> {
        if !tier.is_apex() {
            return Err(RankParseError::MissingDivision(tier));
        }
        Ok(Self {
            tier,
            division: None,
        })
    }

    /// Returns the tier.
    #[inline]
    pub const fn tier(&self) -> RankTier {
        self.tier
    }

    /// Returns the division, or `None` for apex tiers.
    #[inline]
    pub const fn division(&self) -> Option<u8> {
        self.division
    }

    /// Returns the integer rating this rank maps to.
    ///
    /// The lookup reproduces the ladder table exactly: Iron 4 = 0 rising in
    /// steps of 100 through Emerald 1 = 2300, Diamond divisions stepping by
    /// 200 (2400..3000), then Master 3200, Grandmaster 3500, Challenger 3800.
    pub fn rating_value(&self) -> i32 {
        // Division 4 is the entry point of a tier; division is always
        // `Some` for non-apex ranks.
        let offset = |step: i32| match self.division {
            Some(division) => (4 - i32::from(division)) * step,
            None => 0,
        };
        match self.tier {
            RankTier::Iron => offset(100),
            RankTier::Bronze => 400 + offset(100),
            RankTier::Silver => 800 + offset(100),
            RankTier::Gold => 1200 + offset(100),
            RankTier::Platinum => 1600 + offset(100),
            RankTier::Emerald => 2000 + offset(100),
            RankTier::Diamond => 2400 + offset(200),
            RankTier::Master => 3200,
            RankTier::Grandmaster => 3500,
            RankTier::Challenger => 3800,
        }
    }
}

impl std::str::FromStr for Rank {
    type Err = RankParseError;

    /// Parses labels like `"Gold 2"`, `"iron 4"` or `"Master"`.
    ///
    /// Tier matching is case-insensitive; non-apex tiers require exactly one
    /// trailing division token.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut tokens = s.split_whitespace();
        let tier_token = tokens
            .next()
            .ok_or_else(|| RankParseError::InvalidFormat(s.to_string()))?;

        let tier = RankTier::ALL
            .iter()
            .copied()
            .find(|t| t.label().eq_ignore_ascii_case(tier_token))
            .ok_or_else(|| RankParseError::UnknownTier(tier_token.to_string()))?;

        let division_token = tokens.next();
        if tokens.next().is_some() {
            return Err(RankParseError::InvalidFormat(s.to_string()));
        }

        match (tier.is_apex(), division_token) {
            (true, None) => Rank::apex(tier),
            (true, Some(_)) => Err(RankParseError::UnexpectedDivision(tier)),
            (false, None) => Err(RankParseError::MissingDivision(tier)),
            (false, Some(token)) => {
                let division: u8 = token
                    .parse()
                    .map_err(|_| RankParseError::InvalidFormat(s.to_string()))?;
                Rank::new(tier, division)
            }
        }
    }
}

impl std::fmt::Display for Rank {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self.division {
            Some(division) => write!(f, "{} {}", self.tier, division),
            None => write!(f, "{}", self.tier),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rating_table_endpoints() {
        assert_eq!(Rank::new(RankTier::Iron, 4).unwrap().rating_value(), 0);
        assert_eq!(Rank::new(RankTier::Iron, 1).unwrap().rating_value(), 300);
        assert_eq!(Rank::new(RankTier::Emerald, 1).unwrap().rating_value(), 2300);
        assert_eq!(Rank::apex(RankTier::Challenger).unwrap().rating_value(), 3800);
    }

    #[test]
    fn test_rating_table_interior_values() {
        assert_eq!(Rank::new(RankTier::Bronze, 3).unwrap().rating_value(), 500);
        assert_eq!(Rank::new(RankTier::Silver, 2).unwrap().rating_value(), 1000);
        assert_eq!(Rank::new(RankTier::Gold, 2).unwrap().rating_value(), 1400);
        assert_eq!(Rank::new(RankTier::Platinum, 1).unwrap().rating_value(), 1900);
    }

    #[test]
    fn test_diamond_divisions_step_by_200() {
        assert_eq!(Rank::new(RankTier::Diamond, 4).unwrap().rating_value(), 2400);
        assert_eq!(Rank::new(RankTier::Diamond, 3).unwrap().rating_value(), 2600);
        assert_eq!(Rank::new(RankTier::Diamond, 2).unwrap().rating_value(), 2800);
        assert_eq!(Rank::new(RankTier::Diamond, 1).unwrap().rating_value(), 3000);
    }

    #[test]
    fn test_apex_tiers_have_no_division() {
        assert_eq!(Rank::apex(RankTier::Master).unwrap().rating_value(), 3200);
        assert_eq!(
            Rank::apex(RankTier::Grandmaster).unwrap().rating_value(),
            3500
        );
        assert_eq!(
            Rank::new(RankTier::Master, 1),
            Err(RankParseError::UnexpectedDivision(RankTier::Master))
        );
        assert_eq!(
            Rank::apex(RankTier::Gold),
            Err(RankParseError::MissingDivision(RankTier::Gold))
        );
    }

    #[test]
    fn test_division_bounds() {
        assert_eq!(
            Rank::new(RankTier::Gold, 0),
            Err(RankParseError::InvalidDivision(0))
        );
        assert_eq!(
            Rank::new(RankTier::Gold, 5),
            Err(RankParseError::InvalidDivision(5))
        );
    }

    #[test]
    fn test_parse_valid_labels() {
        let gold2: Rank = "Gold 2".parse().unwrap();
        assert_eq!(gold2, Rank::new(RankTier::Gold, 2).unwrap());

        let iron4: Rank = "iron 4".parse().unwrap();
        assert_eq!(iron4, Rank::new(RankTier::Iron, 4).unwrap());

        let master: Rank = "Master".parse().unwrap();
        assert_eq!(master, Rank::apex(RankTier::Master).unwrap());
    }

    #[test]
    fn test_parse_invalid_labels() {
        assert_eq!(
            "Wood 3".parse::<Rank>(),
            Err(RankParseError::UnknownTier("Wood".to_string()))
        );
        assert_eq!(
            "Gold".parse::<Rank>(),
            Err(RankParseError::MissingDivision(RankTier::Gold))
        );
        assert_eq!(
            "Master 1".parse::<Rank>(),
            Err(RankParseError::UnexpectedDivision(RankTier::Master))
        );
        assert_eq!(
            "Gold two".parse::<Rank>(),
            Err(RankParseError::InvalidFormat("Gold two".to_string()))
        );
    }

    #[test]
    fn test_display_roundtrip() {
        for label in ["Iron 4", "Gold 2", "Diamond 1", "Challenger"] {
            let rank: Rank = label.parse().unwrap();
            assert_eq!(format!("{}", rank), label);
        }
    }
}

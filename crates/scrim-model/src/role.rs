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

//! The fixed 5-lane role set.
//!
//! Every entrant registers with exactly one lane, and a complete team fields
//! exactly one entrant per lane. The enum discriminants double as stable array
//! indices, so role buckets and per-team role masks never need a hash map.

/// A lane in the fixed 5-role team composition.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Role {
    Top,
    Jungle,
    Mid,
    Adc,
    Support,
}

impl Role {
    /// The number of distinct roles.
    pub const COUNT: usize = 5;

    /// All roles in canonical lane order.
    pub const ALL: [Role; Role::COUNT] = [
        Role::Top,
        Role::Jungle,
        Role::Mid,
        Role::Adc,
        Role::Support,
    ];

    /// Returns the stable index of this role in `0..Role::COUNT`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// # use scrim_model::role::Role;
    /// assert_eq!(Role::Top.index(), 0);
    /// assert_eq!(Role::Support.index(), 4);
    /// ```
    #[inline(always)]
    pub const fn index(self) -> usize {
        self as usize
    }

    /// Returns the role with the given index, or `None` if out of range.
    #[inline]
    pub const fn from_index(index: usize) -> Option<Role> {
        if index < Role::COUNT {
            Some(Role::ALL[index])
        } else {
            None
        }
    }

    /// Returns the short lane label used in rosters and result listings.
    #[inline]
    pub const fn label(self) -> &'static str {
        match self {
            Role::Top => "TOP",
            Role::Jungle => "JG",
            Role::Mid => "MID",
            Role::Adc => "ADC",
            Role::Support => "SUP",
        }
    }
}

impl std::fmt::Display for Role {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.label())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_all_is_in_index_order() {
        for (i, role) in Role::ALL.iter().enumerate() {
            assert_eq!(role.index(), i, "Role::ALL must be sorted by index");
            assert_eq!(Role::from_index(i), Some(*role));
        }
    }

    #[test]
    fn test_from_index_rejects_out_of_range() {
        assert_eq!(Role::from_index(Role::COUNT), None);
    }

    #[test]
    fn test_labels() {
        let labels: Vec<&str> = Role::ALL.iter().map(|r| r.label()).collect();
        assert_eq!(labels, vec!["TOP", "JG", "MID", "ADC", "SUP"]);
    }
}

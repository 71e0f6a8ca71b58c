//! The ten playable piles.

use std::ops::{Index, IndexMut};

use serde::{Deserialize, Serialize};

use super::pile::Pile;

/// Number of piles on the tableau.
pub const TABLEAU_PILES: usize = 10;

/// Fixed collection of ten piles, indexed 0..10. Never resized.
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Tableau {
    piles: [Pile; TABLEAU_PILES],
}

impl Tableau {
    /// Ten empty piles.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Build from ten piles.
    #[must_use]
    pub fn from_piles(piles: [Pile; TABLEAU_PILES]) -> Self {
        Self { piles }
    }

    /// Pile at `index`, `None` outside the tableau.
    #[must_use]
    pub fn get(&self, index: usize) -> Option<&Pile> {
        self.piles.get(index)
    }

    /// Mutable pile at `index`, `None` outside the tableau.
    pub fn get_mut(&mut self, index: usize) -> Option<&mut Pile> {
        self.piles.get_mut(index)
    }

    /// Two distinct piles borrowed mutably at once.
    ///
    /// `None` if either index is out of range or they are equal.
    pub fn pair_mut(&mut self, a: usize, b: usize) -> Option<(&mut Pile, &mut Pile)> {
        if a == b || a >= TABLEAU_PILES || b >= TABLEAU_PILES {
            return None;
        }
        if a < b {
            let (low, high) = self.piles.split_at_mut(b);
            Some((&mut low[a], &mut high[0]))
        } else {
            let (low, high) = self.piles.split_at_mut(a);
            Some((&mut high[0], &mut low[b]))
        }
    }

    /// Iterate over piles in index order.
    pub fn iter(&self) -> std::slice::Iter<'_, Pile> {
        self.piles.iter()
    }

    /// Iterate mutably over piles in index order.
    pub fn iter_mut(&mut self) -> std::slice::IterMut<'_, Pile> {
        self.piles.iter_mut()
    }

    /// All piles as a slice.
    #[must_use]
    pub fn piles(&self) -> &[Pile] {
        &self.piles
    }

    /// Total cards across all piles.
    #[must_use]
    pub fn card_count(&self) -> usize {
        self.piles.iter().map(Pile::len).sum()
    }

    /// True if at least one pile is empty.
    #[must_use]
    pub fn has_empty_pile(&self) -> bool {
        self.piles.iter().any(Pile::is_empty)
    }
}

impl Index<usize> for Tableau {
    type Output = Pile;

    fn index(&self, index: usize) -> &Self::Output {
        &self.piles[index]
    }
}

impl IndexMut<usize> for Tableau {
    fn index_mut(&mut self, index: usize) -> &mut Self::Output {
        &mut self.piles[index]
    }
}

impl<'a> IntoIterator for &'a Tableau {
    type Item = &'a Pile;
    type IntoIter = std::slice::Iter<'a, Pile>;

    fn into_iter(self) -> Self::IntoIter {
        self.piles.iter()
    }
}

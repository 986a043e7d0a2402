// Copyright 2026 the Pageflow Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Ordered collection of section identifiers.

use alloc::vec::Vec;

/// An ordered, host-owned collection of section identifiers.
///
/// The registry is the source of truth for section order and count. It does
/// not impose hashing or ordering constraints on `K`; only equality is
/// required, and only for [`SectionRegistry::index_of`]. This keeps the type
/// easy to integrate with whatever the host uses as a section handle — a DOM
/// element id, an interned string, a generational key from a scene tree.
///
/// Sections are registered once and never removed during a session; the
/// transition engine only consumes the count, while the input layer resolves
/// navigation-link targets through [`SectionRegistry::index_of`].
///
/// ## Minimal example
///
/// ```
/// use pageflow_engine::SectionRegistry;
///
/// let sections = SectionRegistry::new(vec!["intro", "work", "about", "contact"]);
/// assert_eq!(sections.len(), 4);
/// assert_eq!(sections.index_of(&"about"), Some(2));
/// assert_eq!(sections.get(0), Some(&"intro"));
/// assert_eq!(sections.index_of(&"missing"), None);
/// ```
#[derive(Clone, Debug, Default)]
pub struct SectionRegistry<K> {
    ids: Vec<K>,
}

impl<K> SectionRegistry<K> {
    /// Creates a registry from section identifiers in display order.
    #[must_use]
    pub fn new(ids: Vec<K>) -> Self {
        Self { ids }
    }

    /// Returns the number of registered sections.
    #[must_use]
    pub fn len(&self) -> usize {
        self.ids.len()
    }

    /// Returns `true` if no sections are registered.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.ids.is_empty()
    }

    /// Returns the identifier at `index`, if in range.
    #[must_use]
    pub fn get(&self, index: usize) -> Option<&K> {
        self.ids.get(index)
    }

    /// Iterates identifiers in display order.
    pub fn iter(&self) -> impl Iterator<Item = &K> {
        self.ids.iter()
    }
}

impl<K: PartialEq> SectionRegistry<K> {
    /// Resolves an identifier (for example a nav-link target) to its index.
    ///
    /// Linear scan; section counts in a page-scroll widget are small.
    #[must_use]
    pub fn index_of(&self, id: &K) -> Option<usize> {
        self.ids.iter().position(|candidate| candidate == id)
    }
}

impl<K> FromIterator<K> for SectionRegistry<K> {
    fn from_iter<I: IntoIterator<Item = K>>(iter: I) -> Self {
        Self {
            ids: iter.into_iter().collect(),
        }
    }
}

/// Computes the z-index for a section under the default layering policy.
///
/// The host owns z assignment; the engine only documents the invariant that
/// assignment must satisfy: for all `i < j`, `z(i) ≥ z(j)`. This helper
/// implements the canonical form of that policy — monotonically
/// non-increasing from `starting_z` — so earlier sections always sit at or
/// above later ones and a retreating section slides over the one it reveals.
///
/// Z layering is the sole supported ordering mechanism; hosts must not
/// physically reorder their section nodes.
///
/// ```
/// use pageflow_engine::z_index;
///
/// assert_eq!(z_index(100, 0), 100);
/// assert_eq!(z_index(100, 3), 97);
/// ```
#[must_use]
pub fn z_index(starting_z: i32, index: usize) -> i32 {
    let offset = i32::try_from(index).unwrap_or(i32::MAX);
    starting_z.saturating_sub(offset)
}

#[cfg(test)]
mod tests {
    use super::*;
    use alloc::vec;

    #[test]
    fn registry_preserves_order() {
        let sections: SectionRegistry<u32> = [7_u32, 3, 9].into_iter().collect();
        assert_eq!(sections.len(), 3);
        assert_eq!(sections.get(1), Some(&3));
        let in_order: Vec<u32> = sections.iter().copied().collect();
        assert_eq!(in_order, vec![7, 3, 9]);
    }

    #[test]
    fn index_of_finds_first_match() {
        let sections = SectionRegistry::new(vec!["a", "b", "b"]);
        assert_eq!(sections.index_of(&"b"), Some(1));
        assert_eq!(sections.index_of(&"z"), None);
    }

    #[test]
    fn empty_registry() {
        let sections: SectionRegistry<&str> = SectionRegistry::default();
        assert!(sections.is_empty());
        assert_eq!(sections.get(0), None);
    }

    #[test]
    fn z_index_is_non_increasing() {
        let zs: Vec<i32> = (0..5).map(|i| z_index(100, i)).collect();
        assert_eq!(zs, vec![100, 99, 98, 97, 96]);
        assert!(zs.windows(2).all(|w| w[0] >= w[1]), "z(i) >= z(j) for i < j");
    }

    #[test]
    fn z_index_saturates_instead_of_wrapping() {
        assert_eq!(z_index(i32::MIN, 1), i32::MIN);
        assert_eq!(z_index(0, usize::MAX), 0_i32.saturating_sub(i32::MAX));
    }
}

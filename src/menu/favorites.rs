//! Favorites

use rustc_hash::FxHashSet;

/// Dishes the guest hearted during this session. Not persisted.
#[derive(Debug, Clone, Default)]
pub struct Favorites {
    ids: FxHashSet<String>,
}

impl Favorites {
    /// Create an empty set.
    pub fn new() -> Self {
        Self::default()
    }

    /// Flip the favorite state of a dish and return the new state.
    pub fn toggle(&mut self, id: &str) -> bool {
        if self.ids.remove(id) {
            false
        } else {
            self.ids.insert(id.to_string());
            true
        }
    }

    /// Check if a dish is a favorite.
    pub fn contains(&self, id: &str) -> bool {
        self.ids.contains(id)
    }

    /// Number of favorites.
    pub fn len(&self) -> usize {
        self.ids.len()
    }

    /// Check if there are no favorites.
    pub fn is_empty(&self) -> bool {
        self.ids.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn toggle_flips_state() {
        let mut favorites = Favorites::new();

        assert!(favorites.toggle("papanasi"));
        assert!(favorites.contains("papanasi"));
        assert!(!favorites.toggle("papanasi"));
        assert!(!favorites.contains("papanasi"));
        assert!(favorites.is_empty());
    }
}

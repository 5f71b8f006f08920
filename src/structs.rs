use std::collections::HashMap;

/// Read-only single character substitution table.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CharacterMap {
    entries: HashMap<char, char>,
}

impl CharacterMap {
    pub fn get(&self, key: char) -> Option<char> {
        self.entries.get(&key).copied()
    }

    pub fn contains_key(&self, key: char) -> bool {
        self.entries.contains_key(&key)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (char, char)> + '_ {
        self.entries.iter().map(|(&k, &v)| (k, v))
    }

    /// True when no two keys share a value.
    pub fn is_injective(&self) -> bool {
        let mut seen = std::collections::HashSet::with_capacity(self.entries.len());
        self.entries.values().all(|v| seen.insert(*v))
    }

    /// Swaps every `(k, v)` pair into `(v, k)`.
    ///
    /// Only lossless for injective maps.
    pub fn invert(&self) -> CharacterMap {
        self.iter().map(|(k, v)| (v, k)).collect()
    }
}

impl FromIterator<(char, char)> for CharacterMap {
    fn from_iter<I: IntoIterator<Item = (char, char)>>(iter: I) -> Self {
        CharacterMap {
            entries: iter.into_iter().collect(),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Mode {
    Encrypt,
    Decrypt,
}

/// Forward and inverse maps for one (shift, flags) combination.
#[derive(Debug, Clone)]
pub struct CaesarCipher {
    pub shift: usize,
    pub forward: CharacterMap,
    pub inverse: CharacterMap,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn invert_swaps_pairs() {
        let map: CharacterMap = [('a', 'x'), ('b', 'y')].into_iter().collect();
        let inverse = map.invert();

        assert_eq!(inverse.get('x'), Some('a'));
        assert_eq!(inverse.get('y'), Some('b'));
        assert_eq!(inverse.get('a'), None);
        assert_eq!(inverse.invert(), map);
    }

    #[test]
    fn collision_is_not_injective() {
        let map: CharacterMap = [('a', 'x'), ('b', 'x')].into_iter().collect();

        assert!(!map.is_injective());
        assert_eq!(map.invert().len(), 1);
    }
}

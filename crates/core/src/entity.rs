//! Entity trait: identity + continuity across state changes.

/// Entity marker + minimal interface.
pub trait Entity {
    /// Strongly-typed entity identifier.
    type Id: Clone + Eq + core::hash::Hash + core::fmt::Debug;

    /// Returns the entity identifier.
    fn id(&self) -> &Self::Id;
}

/// Position of the entity with the given id (linear scan, first match wins).
pub fn find_index<E: Entity>(items: &[E], id: &E::Id) -> Option<usize> {
    items.iter().position(|item| item.id() == id)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug)]
    struct Thing {
        id: u32,
    }

    impl Entity for Thing {
        type Id = u32;

        fn id(&self) -> &u32 {
            &self.id
        }
    }

    #[test]
    fn find_index_returns_first_match() {
        let items = vec![Thing { id: 3 }, Thing { id: 7 }, Thing { id: 7 }];
        assert_eq!(find_index(&items, &7), Some(1));
        assert_eq!(find_index(&items, &9), None);
    }
}

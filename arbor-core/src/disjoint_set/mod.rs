//! Union-find (disjoint set) over arbitrary hashable items.
//!
//! Each registered item is assigned a dense integer code in registration
//! order. Codes index a growable table of slots; a slot is either a root
//! carrying its rank or a child pointing at its parent's code. Unions always
//! attach one root beneath another, so parent chains are finite.
//!
//! Merging is union-by-rank. When both roots have equal rank the root with
//! the greater code absorbs the other and its rank grows by one, which makes
//! the resulting partition and its component identifiers reproducible for a
//! given sequence of operations. `find_set` compresses the traversed path.

use std::collections::HashMap;
use std::collections::hash_map::Entry;
use std::fmt;
use std::hash::Hash;

use crate::error::{DisjointSetError, describe};

/// Slots reserved by [`DisjointSet::new`] before the first growth.
const DEFAULT_CAPACITY: usize = 10;

/// Identifier of a component: the code of its current root.
///
/// Identifiers are stable until the component takes part in a union.
///
/// # Examples
/// ```
/// use arbor_core::DisjointSet;
///
/// let mut set = DisjointSet::new();
/// set.make_set("a")?;
/// set.make_set("b")?;
/// let merged = set.union(&"a", &"b")?;
/// assert_eq!(set.find_set(&"a")?, merged);
/// assert_eq!(merged.get(), 1);
/// # Ok::<(), arbor_core::DisjointSetError>(())
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ComponentId(usize);

impl ComponentId {
    /// Returns the root code backing this identifier.
    #[rustfmt::skip]
    #[must_use]
    pub fn get(self) -> usize { self.0 }
}

impl fmt::Display for ComponentId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum Slot {
    Root { rank: u32 },
    Child { parent: usize },
}

/// Disjoint-set forest keyed by item value.
///
/// # Examples
/// ```
/// use arbor_core::DisjointSet;
///
/// let mut set = DisjointSet::new();
/// for city in ["oslo", "bergen", "tromso"] {
///     set.make_set(city)?;
/// }
/// set.union(&"oslo", &"bergen")?;
/// assert!(set.same_component(&"oslo", &"bergen")?);
/// assert!(!set.same_component(&"oslo", &"tromso")?);
/// assert_eq!(set.component_count(), 2);
/// # Ok::<(), arbor_core::DisjointSetError>(())
/// ```
#[derive(Clone, Debug)]
pub struct DisjointSet<T> {
    codes: HashMap<T, usize>,
    slots: Vec<Slot>,
    components: usize,
}

impl<T> Default for DisjointSet<T> {
    fn default() -> Self {
        Self {
            codes: HashMap::with_capacity(DEFAULT_CAPACITY),
            slots: Vec::with_capacity(DEFAULT_CAPACITY),
            components: 0,
        }
    }
}

impl<T> DisjointSet<T>
where
    T: Eq + Hash + fmt::Debug,
{
    /// Creates an empty structure with room for a handful of items.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates an empty structure with room for `capacity` items.
    #[must_use]
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            codes: HashMap::with_capacity(capacity),
            slots: Vec::with_capacity(capacity),
            components: 0,
        }
    }

    /// Returns the number of registered items.
    #[must_use]
    pub fn len(&self) -> usize {
        self.slots.len()
    }

    /// Returns `true` when no item has been registered.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.slots.is_empty()
    }

    /// Returns the number of disjoint components.
    #[must_use]
    pub fn component_count(&self) -> usize {
        self.components
    }

    /// Returns `true` when `item` has been registered.
    #[must_use]
    pub fn contains(&self, item: &T) -> bool {
        self.codes.contains_key(item)
    }

    /// Registers `item` as a new singleton component.
    ///
    /// # Errors
    /// Returns [`DisjointSetError::AlreadyRegistered`] when `item` is already
    /// present; the structure is left unchanged.
    pub fn make_set(&mut self, item: T) -> Result<(), DisjointSetError> {
        match self.codes.entry(item) {
            Entry::Occupied(existing) => Err(DisjointSetError::AlreadyRegistered {
                item: describe(existing.key()),
            }),
            Entry::Vacant(vacant) => {
                if self.slots.len() == self.slots.capacity() {
                    self.slots.reserve(self.slots.len().max(DEFAULT_CAPACITY));
                }
                let code = self.slots.len();
                self.slots.push(Slot::Root { rank: 0 });
                vacant.insert(code);
                self.components = self.components.saturating_add(1);
                Ok(())
            }
        }
    }

    /// Returns the identifier of the component containing `item`.
    ///
    /// # Errors
    /// Returns [`DisjointSetError::Unregistered`] when `item` is unknown.
    pub fn find_set(&mut self, item: &T) -> Result<ComponentId, DisjointSetError> {
        let code = self.code_of(item)?;
        Ok(ComponentId(self.compress(code)))
    }

    /// Returns `true` when both items belong to the same component.
    ///
    /// # Errors
    /// Returns [`DisjointSetError::Unregistered`] when either item is unknown.
    pub fn same_component(&mut self, left: &T, right: &T) -> Result<bool, DisjointSetError> {
        let left_code = self.code_of(left)?;
        let right_code = self.code_of(right)?;
        Ok(self.compress(left_code) == self.compress(right_code))
    }

    /// Merges the components containing `left` and `right`.
    ///
    /// Returns the identifier of the merged component.
    ///
    /// # Errors
    /// Returns [`DisjointSetError::Unregistered`] when either item is
    /// unknown and [`DisjointSetError::SameComponent`] when both items are
    /// already connected. Neither failure mutates the structure.
    pub fn union(&mut self, left: &T, right: &T) -> Result<ComponentId, DisjointSetError> {
        match self.try_union(left, right)? {
            Some(merged) => Ok(merged),
            None => {
                let left_code = self.code_of(left)?;
                Err(DisjointSetError::SameComponent {
                    left: describe(left),
                    right: describe(right),
                    component: self.root_of(left_code),
                })
            }
        }
    }

    /// Merges the components containing `left` and `right` unless they are
    /// already connected.
    ///
    /// Returns `Ok(None)` without mutating anything when both items share a
    /// component.
    ///
    /// # Errors
    /// Returns [`DisjointSetError::Unregistered`] when either item is unknown.
    pub fn try_union(
        &mut self,
        left: &T,
        right: &T,
    ) -> Result<Option<ComponentId>, DisjointSetError> {
        let left_root = self.root_of(self.code_of(left)?);
        let right_root = self.root_of(self.code_of(right)?);
        if left_root == right_root {
            return Ok(None);
        }

        let left_rank = self.rank_of(left_root);
        let right_rank = self.rank_of(right_root);
        let (parent, child) = choose_parent_child(left_root, right_root, left_rank, right_rank);

        self.slots[child] = Slot::Child { parent };
        if left_rank == right_rank {
            self.slots[parent] = Slot::Root {
                rank: left_rank.saturating_add(1),
            };
        }
        self.components = self.components.saturating_sub(1);
        Ok(Some(ComponentId(parent)))
    }

    fn code_of(&self, item: &T) -> Result<usize, DisjointSetError> {
        self.codes
            .get(item)
            .copied()
            .ok_or_else(|| DisjointSetError::Unregistered {
                item: describe(item),
            })
    }

    fn rank_of(&self, root: usize) -> u32 {
        match self.slots[root] {
            Slot::Root { rank } => rank,
            Slot::Child { .. } => 0,
        }
    }

    fn root_of(&self, code: usize) -> usize {
        let mut current = code;
        while let Slot::Child { parent } = self.slots[current] {
            current = parent;
        }
        current
    }

    fn compress(&mut self, code: usize) -> usize {
        let root = self.root_of(code);
        let mut current = code;
        while let Slot::Child { parent } = self.slots[current] {
            self.slots[current] = Slot::Child { parent: root };
            current = parent;
        }
        root
    }
}

/// Picks `(parent, child)` for a union of two distinct roots.
fn choose_parent_child(
    left_root: usize,
    right_root: usize,
    left_rank: u32,
    right_rank: u32,
) -> (usize, usize) {
    if left_rank > right_rank {
        return (left_root, right_root);
    }
    if right_rank > left_rank {
        return (right_root, left_root);
    }

    if left_root > right_root {
        (left_root, right_root)
    } else {
        (right_root, left_root)
    }
}

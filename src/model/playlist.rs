//! Ordered playlist container
//!
//! `OrderedList` is a circular doubly linked list whose nodes live in an
//! arena of slots addressed by index. Reclaimed slots go on a free list and
//! carry a generation counter so that a [`NodeHandle`] to a removed node
//! never resolves to whatever reuses its slot.
//!
//! Positional operations clamp instead of failing: an index at or below zero
//! means the front, an index at or past the end means the back. Inserting
//! `None` is a no-op. Every walk over the ring is bounded by the element
//! count, never by looking for a missing link.

use super::Track;
use std::fmt;
use std::iter::FusedIterator;
use thiserror::Error;

/// The playlist proper: an ordered ring of owned tracks
pub type OrderedTrackList = OrderedList<Track>;

/// Stable reference to one node of an [`OrderedList`]
///
/// A handle stays valid until its node is removed. It does not borrow the
/// list, so it can be kept across mutations and checked later with
/// [`OrderedList::get`] or [`OrderedList::contains_handle`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct NodeHandle {
    slot: usize,
    generation: u64,
}

/// Ring invariant violation reported by [`OrderedList::verify`]
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RingError {
    #[error("list holds {occupied} nodes but records a length of {len}")]
    SizeMismatch { len: usize, occupied: usize },

    #[error("{free} free slots + {len} nodes do not cover {slots} slots")]
    FreeListMismatch { len: usize, free: usize, slots: usize },

    #[error("empty/non-empty state disagrees with head (len {len})")]
    HeadMismatch { len: usize },

    #[error("link from slot {from} points at vacant slot {to}")]
    VacantLink { from: usize, to: usize },

    #[error("prev/next links disagree at slot {slot}")]
    BrokenLink { slot: usize },

    #[error("ring closes after {steps} steps, expected {len}")]
    WrongCycleLength { steps: usize, len: usize },
}

#[derive(Debug, Clone)]
struct Node<T> {
    value: T,
    prev: usize,
    next: usize,
}

#[derive(Debug, Clone)]
struct Slot<T> {
    generation: u64,
    node: Option<Node<T>>,
}

/// Circular doubly linked list with O(1) ends and O(k) positional access
#[derive(Clone)]
pub struct OrderedList<T> {
    slots: Vec<Slot<T>>,
    free: Vec<usize>,
    head: Option<usize>,
    len: usize,
}

impl<T> OrderedList<T> {
    /// Create an empty list
    pub fn new() -> Self {
        Self {
            slots: Vec::new(),
            free: Vec::new(),
            head: None,
            len: 0,
        }
    }

    /// Check if the list is empty
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Number of elements in the ring
    pub fn len(&self) -> usize {
        self.len
    }

    /// Insert at the front. `None` is ignored.
    pub fn add_first(&mut self, value: impl Into<Option<T>>) -> Option<NodeHandle> {
        let value = value.into()?;
        let slot = self.insert_front(value);
        Some(self.handle(slot))
    }

    /// Insert at the back. `None` is ignored.
    pub fn add_last(&mut self, value: impl Into<Option<T>>) -> Option<NodeHandle> {
        let value = value.into()?;
        let slot = self.insert_back(value);
        Some(self.handle(slot))
    }

    /// Insert so the value ends up at position `index`
    ///
    /// `index <= 0` prepends, `index >= len()` appends, anything in between
    /// is spliced in front of the current occupant of that position.
    pub fn add_at(&mut self, value: impl Into<Option<T>>, index: isize) -> Option<NodeHandle> {
        let value = value.into()?;

        let slot = match clamp_insert(index, self.len) {
            Position::Front => self.insert_front(value),
            Position::Back => self.insert_back(value),
            Position::At(index) => {
                let at = self.slot_at(index)?;
                let slot = self.alloc(value);
                self.link_before(slot, at);
                slot
            }
        };

        Some(self.handle(slot))
    }

    /// Element at `index`, or `None` when out of `[0, len)`
    pub fn get_at(&self, index: isize) -> Option<&T> {
        let index = usize::try_from(index).ok()?;
        let slot = self.slot_at(index)?;
        Some(&self.node(slot).value)
    }

    /// Front element
    pub fn first(&self) -> Option<&T> {
        self.head.map(|slot| &self.node(slot).value)
    }

    /// Back element
    pub fn last(&self) -> Option<&T> {
        self.tail().map(|slot| &self.node(slot).value)
    }

    /// Remove the front element. Returns `false` on an empty list.
    pub fn remove_first(&mut self) -> bool {
        self.pop_first().is_some()
    }

    /// Remove the back element. Returns `false` on an empty list.
    pub fn remove_last(&mut self) -> bool {
        self.pop_last().is_some()
    }

    /// Remove by position with clamping; `false` only on an empty list
    pub fn remove_at(&mut self, index: isize) -> bool {
        self.pop_at(index).is_some()
    }

    /// Remove and return the front element
    pub fn pop_first(&mut self) -> Option<T> {
        let head = self.head?;
        Some(self.unlink(head))
    }

    /// Remove and return the back element
    pub fn pop_last(&mut self) -> Option<T> {
        let tail = self.tail()?;
        Some(self.unlink(tail))
    }

    /// Remove and return the element at `index`
    ///
    /// `index <= 0` pops the front, `index >= len() - 1` pops the back.
    pub fn pop_at(&mut self, index: isize) -> Option<T> {
        if self.is_empty() {
            return None;
        }

        match clamp_remove(index, self.len) {
            Position::Front => self.pop_first(),
            Position::Back => self.pop_last(),
            Position::At(index) => {
                let slot = self.slot_at(index)?;
                Some(self.unlink(slot))
            }
        }
    }

    /// Release every node and return how many were released
    ///
    /// The walk runs exactly `len()` steps around the ring. Slots are kept
    /// (with bumped generations) so outstanding handles stay stale.
    pub fn clear(&mut self) -> usize {
        let Some(mut slot) = self.head.take() else {
            return 0;
        };

        let count = self.len;
        for _ in 0..count {
            let next = self.node(slot).next;
            drop(self.release(slot));
            slot = next;
        }
        self.len = 0;

        count
    }

    /// Iterate front to back
    pub fn iter(&self) -> Iter<'_, T> {
        Iter {
            list: self,
            front: self.head,
            back: self.tail(),
            remaining: self.len,
        }
    }

    /// Handle for the node currently at `index`
    pub fn handle_at(&self, index: isize) -> Option<NodeHandle> {
        let index = usize::try_from(index).ok()?;
        self.slot_at(index).map(|slot| self.handle(slot))
    }

    /// Resolve a handle; `None` once its node has been removed
    pub fn get(&self, handle: NodeHandle) -> Option<&T> {
        self.slots
            .get(handle.slot)
            .filter(|s| s.generation == handle.generation)
            .and_then(|s| s.node.as_ref())
            .map(|node| &node.value)
    }

    /// Whether `handle` still names a node of this list
    pub fn contains_handle(&self, handle: NodeHandle) -> bool {
        self.get(handle).is_some()
    }

    /// Current position of a live handle
    pub fn position_of(&self, handle: NodeHandle) -> Option<usize> {
        if !self.contains_handle(handle) {
            return None;
        }

        let mut slot = self.head?;
        for position in 0..self.len {
            if slot == handle.slot {
                return Some(position);
            }
            slot = self.node(slot).next;
        }
        None
    }

    /// Check every structural invariant of the ring
    ///
    /// Walks the ring once, checking both links of every node. Meant for
    /// tests; a failure here is a bug in this module, not a caller error.
    pub fn verify(&self) -> Result<(), RingError> {
        let occupied = self.slots.iter().filter(|s| s.node.is_some()).count();
        if occupied != self.len {
            return Err(RingError::SizeMismatch {
                len: self.len,
                occupied,
            });
        }
        if self.free.len() + self.len != self.slots.len() {
            return Err(RingError::FreeListMismatch {
                len: self.len,
                free: self.free.len(),
                slots: self.slots.len(),
            });
        }

        let head = match (self.head, self.len) {
            (None, 0) => return Ok(()),
            (Some(head), len) if len > 0 => head,
            _ => return Err(RingError::HeadMismatch { len: self.len }),
        };

        let lookup = |from: usize, to: usize| {
            self.slots
                .get(to)
                .and_then(|s| s.node.as_ref())
                .ok_or(RingError::VacantLink { from, to })
        };

        let mut slot = head;
        for step in 1..=self.len {
            let node = lookup(slot, slot)?;
            if lookup(slot, node.next)?.prev != slot || lookup(slot, node.prev)?.next != slot {
                return Err(RingError::BrokenLink { slot });
            }
            slot = node.next;
            if slot == head && step < self.len {
                return Err(RingError::WrongCycleLength {
                    steps: step,
                    len: self.len,
                });
            }
        }
        if slot != head {
            return Err(RingError::WrongCycleLength {
                steps: self.len + 1,
                len: self.len,
            });
        }

        Ok(())
    }

    fn tail(&self) -> Option<usize> {
        self.head.map(|head| self.node(head).prev)
    }

    fn handle(&self, slot: usize) -> NodeHandle {
        NodeHandle {
            slot,
            generation: self.slots[slot].generation,
        }
    }

    fn node(&self, slot: usize) -> &Node<T> {
        match self.slots[slot].node.as_ref() {
            Some(node) => node,
            None => unreachable!("ring link points at vacant slot {slot}"),
        }
    }

    fn node_mut(&mut self, slot: usize) -> &mut Node<T> {
        match self.slots[slot].node.as_mut() {
            Some(node) => node,
            None => unreachable!("ring link points at vacant slot {slot}"),
        }
    }

    /// Store a value in a self-linked node outside the ring
    fn alloc(&mut self, value: T) -> usize {
        let slot = match self.free.pop() {
            Some(slot) => slot,
            None => {
                self.slots.push(Slot {
                    generation: 0,
                    node: None,
                });
                self.slots.len() - 1
            }
        };

        self.slots[slot].node = Some(Node {
            value,
            prev: slot,
            next: slot,
        });
        slot
    }

    /// Take the value out of a slot and put the slot on the free list
    fn release(&mut self, slot: usize) -> T {
        let entry = &mut self.slots[slot];
        let node = match entry.node.take() {
            Some(node) => node,
            None => unreachable!("slot {slot} released twice"),
        };
        entry.generation = entry.generation.wrapping_add(1);
        self.free.push(slot);
        node.value
    }

    /// Splice a detached node in front of `at`
    fn link_before(&mut self, slot: usize, at: usize) {
        let prev = self.node(at).prev;

        let node = self.node_mut(slot);
        node.prev = prev;
        node.next = at;

        self.node_mut(prev).next = slot;
        self.node_mut(at).prev = slot;
        self.len += 1;
    }

    fn insert_front(&mut self, value: T) -> usize {
        let slot = self.insert_back(value);
        self.head = Some(slot);
        slot
    }

    fn insert_back(&mut self, value: T) -> usize {
        let slot = self.alloc(value);
        match self.head {
            Some(head) => self.link_before(slot, head),
            None => {
                self.head = Some(slot);
                self.len = 1;
            }
        }
        slot
    }

    /// Detach a node, closing the ring around the gap
    fn unlink(&mut self, slot: usize) -> T {
        if self.len == 1 {
            self.head = None;
        } else {
            let (prev, next) = {
                let node = self.node(slot);
                (node.prev, node.next)
            };
            self.node_mut(prev).next = next;
            self.node_mut(next).prev = prev;
            if self.head == Some(slot) {
                self.head = Some(next);
            }
        }

        self.len -= 1;
        self.release(slot)
    }

    /// Slot holding position `index`, walking from whichever end is closer
    fn slot_at(&self, index: usize) -> Option<usize> {
        if index >= self.len {
            return None;
        }

        let mut slot = self.head?;
        if index <= self.len / 2 {
            for _ in 0..index {
                slot = self.node(slot).next;
            }
        } else {
            for _ in index..self.len {
                slot = self.node(slot).prev;
            }
        }
        Some(slot)
    }
}

/// Where a clamped positional operation lands
#[derive(Debug, PartialEq, Eq)]
enum Position {
    Front,
    Back,
    At(usize),
}

fn clamp_insert(index: isize, len: usize) -> Position {
    match usize::try_from(index) {
        Ok(0) | Err(_) => Position::Front,
        Ok(i) if i >= len => Position::Back,
        Ok(i) => Position::At(i),
    }
}

fn clamp_remove(index: isize, len: usize) -> Position {
    match usize::try_from(index) {
        Ok(0) | Err(_) => Position::Front,
        Ok(i) if i >= len.saturating_sub(1) => Position::Back,
        Ok(i) => Position::At(i),
    }
}

impl OrderedList<Track> {
    /// Sum of all track durations in seconds
    pub fn total_seconds(&self) -> u64 {
        self.iter().map(|t| u64::from(t.duration_seconds())).sum()
    }
}

impl<T> Default for OrderedList<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: fmt::Debug> fmt::Debug for OrderedList<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.iter()).finish()
    }
}

impl<T: PartialEq> PartialEq for OrderedList<T> {
    fn eq(&self, other: &Self) -> bool {
        self.len == other.len && self.iter().eq(other.iter())
    }
}

impl<T: Eq> Eq for OrderedList<T> {}

impl<T> Extend<T> for OrderedList<T> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        for value in iter {
            self.insert_back(value);
        }
    }
}

impl<T> FromIterator<T> for OrderedList<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let mut list = Self::new();
        list.extend(iter);
        list
    }
}

impl<'a, T> IntoIterator for &'a OrderedList<T> {
    type Item = &'a T;
    type IntoIter = Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl<T> IntoIterator for OrderedList<T> {
    type Item = T;
    type IntoIter = IntoIter<T>;

    fn into_iter(self) -> Self::IntoIter {
        IntoIter { list: self }
    }
}

/// Borrowing iterator over an [`OrderedList`], front to back
pub struct Iter<'a, T> {
    list: &'a OrderedList<T>,
    front: Option<usize>,
    back: Option<usize>,
    remaining: usize,
}

impl<'a, T> Iterator for Iter<'a, T> {
    type Item = &'a T;

    fn next(&mut self) -> Option<Self::Item> {
        if self.remaining == 0 {
            return None;
        }
        let node = self.list.node(self.front?);
        self.front = Some(node.next);
        self.remaining -= 1;
        Some(&node.value)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

impl<T> DoubleEndedIterator for Iter<'_, T> {
    fn next_back(&mut self) -> Option<Self::Item> {
        if self.remaining == 0 {
            return None;
        }
        let node = self.list.node(self.back?);
        self.back = Some(node.prev);
        self.remaining -= 1;
        Some(&node.value)
    }
}

impl<T> ExactSizeIterator for Iter<'_, T> {}

impl<T> FusedIterator for Iter<'_, T> {}

/// Owning iterator, draining from the front
pub struct IntoIter<T> {
    list: OrderedList<T>,
}

impl<T> Iterator for IntoIter<T> {
    type Item = T;

    fn next(&mut self) -> Option<T> {
        self.list.pop_first()
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.list.len(), Some(self.list.len()))
    }
}

impl<T> DoubleEndedIterator for IntoIter<T> {
    fn next_back(&mut self) -> Option<T> {
        self.list.pop_last()
    }
}

impl<T> ExactSizeIterator for IntoIter<T> {}

impl<T> FusedIterator for IntoIter<T> {}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::Cell;
    use std::rc::Rc;

    fn track(title: &str, artist: &str, duration: u32) -> Track {
        Track::new(title, artist, duration).unwrap()
    }

    fn titles(list: &OrderedTrackList) -> Vec<&str> {
        list.iter().map(|t| t.title()).collect()
    }

    fn abc() -> OrderedList<char> {
        "ABC".chars().collect()
    }

    fn contents(list: &OrderedList<char>) -> String {
        list.iter().collect()
    }

    #[test]
    fn test_new_list_is_empty() {
        let list: OrderedTrackList = OrderedList::new();
        assert!(list.is_empty());
        assert_eq!(list.len(), 0);
        assert!(list.first().is_none());
        assert!(list.last().is_none());
        assert_eq!(list.iter().count(), 0);
        list.verify().unwrap();
    }

    #[test]
    fn test_single_node_is_self_linked() {
        let mut list: OrderedList<char> = OrderedList::new();
        list.add_first('A');
        assert_eq!(list.len(), 1);
        assert_eq!(list.first(), Some(&'A'));
        assert_eq!(list.last(), Some(&'A'));

        let head = list.head.unwrap();
        assert_eq!(list.node(head).next, head);
        assert_eq!(list.node(head).prev, head);
        list.verify().unwrap();
    }

    #[test]
    fn test_playlist_scenario() {
        let mut list = OrderedTrackList::new();
        list.add_last(track("Blinding Lights", "The Weeknd", 200));
        list.add_last(track("Perfect", "Ed Sheeran", 263));
        list.add_first(track("Bad Guy", "Billie Eilish", 194));
        assert_eq!(titles(&list), ["Bad Guy", "Blinding Lights", "Perfect"]);

        assert!(list.remove_last());
        assert_eq!(titles(&list), ["Bad Guy", "Blinding Lights"]);
        assert!(list.get_at(5).is_none());
        list.verify().unwrap();
    }

    #[test]
    fn test_none_is_ignored() {
        let mut list = abc();
        assert!(list.add_first(None).is_none());
        assert!(list.add_last(None).is_none());
        assert!(list.add_at(None, 1).is_none());
        assert_eq!(contents(&list), "ABC");
        list.verify().unwrap();
    }

    #[test]
    fn test_add_at_clamps() {
        let mut list = abc();
        list.add_at('t', -5);
        assert_eq!(contents(&list), "tABC");

        let mut list = abc();
        list.add_at('t', 99);
        assert_eq!(contents(&list), "ABCt");

        let mut list = abc();
        list.add_at('t', 1);
        assert_eq!(contents(&list), "AtBC");

        let mut list = abc();
        list.add_at('t', 3);
        assert_eq!(contents(&list), "ABCt");

        let mut list = abc();
        list.add_at('t', 2);
        assert_eq!(contents(&list), "ABtC");
        list.verify().unwrap();
    }

    #[test]
    fn test_add_at_on_empty_list() {
        let mut list: OrderedList<char> = OrderedList::new();
        list.add_at('x', 7);
        assert_eq!(contents(&list), "x");
        list.verify().unwrap();
    }

    #[test]
    fn test_get_at_bounds() {
        let list = abc();
        assert_eq!(list.get_at(0), Some(&'A'));
        assert_eq!(list.get_at(2), Some(&'C'));
        assert_eq!(list.get_at(3), None);
        assert_eq!(list.get_at(-1), None);
        assert_eq!(OrderedList::<char>::new().get_at(0), None);
    }

    #[test]
    fn test_remove_on_empty_returns_false() {
        let mut list: OrderedList<char> = OrderedList::new();
        assert!(!list.remove_first());
        assert!(!list.remove_last());
        assert!(!list.remove_at(0));
        assert!(!list.remove_at(-3));
        assert!(list.is_empty());
        list.verify().unwrap();
    }

    #[test]
    fn test_remove_at_single_element() {
        let mut list: OrderedList<char> = "A".chars().collect();
        assert!(list.remove_at(0));
        assert!(list.is_empty());

        let mut list: OrderedList<char> = "A".chars().collect();
        assert!(list.remove_at(list.len() as isize - 1));
        assert!(list.is_empty());
        list.verify().unwrap();
    }

    #[test]
    fn test_remove_at_clamps() {
        let mut list = abc();
        assert!(list.remove_at(-2));
        assert_eq!(contents(&list), "BC");

        let mut list = abc();
        assert!(list.remove_at(42));
        assert_eq!(contents(&list), "AB");

        let mut list = abc();
        assert!(list.remove_at(1));
        assert_eq!(contents(&list), "AC");
        list.verify().unwrap();
    }

    #[test]
    fn test_pop_returns_payload() {
        let mut list: OrderedList<char> = "ABCDE".chars().collect();
        assert_eq!(list.pop_first(), Some('A'));
        assert_eq!(list.pop_last(), Some('E'));
        assert_eq!(list.pop_at(1), Some('C'));
        assert_eq!(contents(&list), "BD");
        list.verify().unwrap();
    }

    #[test]
    fn test_clear_is_idempotent() {
        let mut list = abc();
        assert_eq!(list.clear(), 3);
        assert!(list.is_empty());
        assert_eq!(list.len(), 0);
        assert_eq!(list.clear(), 0);
        list.verify().unwrap();

        list.add_last('Z');
        assert_eq!(contents(&list), "Z");
        list.verify().unwrap();
    }

    #[test]
    fn test_iteration_is_restartable_and_reversible() {
        let list = abc();
        assert_eq!(list.iter().collect::<String>(), "ABC");
        assert_eq!(list.iter().collect::<String>(), "ABC");
        assert_eq!(list.iter().rev().collect::<String>(), "CBA");
        assert_eq!(list.iter().len(), 3);

        let mut iter = list.iter();
        assert_eq!(iter.next(), Some(&'A'));
        assert_eq!(iter.next_back(), Some(&'C'));
        assert_eq!(iter.next(), Some(&'B'));
        assert_eq!(iter.next_back(), None);
        assert_eq!(iter.next(), None);
    }

    #[test]
    fn test_owned_iteration() {
        let list = abc();
        let forward: String = list.clone().into_iter().collect();
        let backward: String = list.into_iter().rev().collect();
        assert_eq!(forward, "ABC");
        assert_eq!(backward, "CBA");
    }

    #[test]
    fn test_total_seconds_does_not_overflow() {
        let mut list = OrderedTrackList::new();
        assert_eq!(list.total_seconds(), 0);

        list.add_last(Track::new("Long", "Drone", 3_000_000_000).unwrap());
        list.add_last(Track::new("Longer", "Drone", u32::MAX).unwrap());
        assert_eq!(list.total_seconds(), 3_000_000_000 + u64::from(u32::MAX));
    }

    #[test]
    fn test_slots_are_reused() {
        let mut list = abc();
        list.remove_at(1);
        list.add_at('X', 1);
        assert_eq!(list.slots.len(), 3);
        assert_eq!(contents(&list), "AXC");
        list.verify().unwrap();
    }

    #[test]
    fn test_handles_survive_moves_and_go_stale() {
        let mut list = OrderedTrackList::new();
        let first = list.add_last(track("Perfect", "Ed Sheeran", 263)).unwrap();
        let second = list.add_last(track("Perfect", "Ed Sheeran", 263)).unwrap();
        assert_ne!(first, second);
        assert_eq!(list.get(first), list.get(second));

        list.add_first(track("Bad Guy", "Billie Eilish", 194));
        assert_eq!(list.position_of(first), Some(1));
        assert_eq!(list.position_of(second), Some(2));
        assert_eq!(list.handle_at(2), Some(second));

        assert!(list.remove_at(1));
        assert!(!list.contains_handle(first));
        assert_eq!(list.position_of(first), None);

        // Reusing the slot must not revive the old handle
        list.add_last(track("Levitating", "Dua Lipa", 203));
        assert!(list.get(first).is_none());
        assert_eq!(list.position_of(second), Some(1));
    }

    #[test]
    fn test_clear_invalidates_handles() {
        let mut list = abc();
        let handle = list.handle_at(0).unwrap();
        list.clear();
        list.add_last('A');
        assert!(!list.contains_handle(handle));
    }

    #[test]
    fn test_equality_is_by_sequence() {
        let mut shuffled: OrderedList<char> = OrderedList::new();
        shuffled.add_last('C');
        shuffled.add_first('A');
        shuffled.add_at('B', 1);
        assert_eq!(shuffled, abc());
        assert_ne!(shuffled, "ABCD".chars().collect::<OrderedList<char>>());
    }

    #[test]
    fn test_debug_lists_elements() {
        assert_eq!(format!("{:?}", abc()), "['A', 'B', 'C']");
    }

    #[test]
    fn test_verify_detects_broken_link() {
        let mut list = abc();
        let head = list.head.unwrap();
        let second = list.node(head).next;
        list.node_mut(second).prev = second;
        assert!(matches!(list.verify(), Err(RingError::BrokenLink { .. })));
    }

    #[test]
    fn test_verify_detects_size_mismatch() {
        let mut list = abc();
        list.len = 2;
        assert!(matches!(list.verify(), Err(RingError::SizeMismatch { .. })));
    }

    #[derive(Debug)]
    struct DropCounter(Rc<Cell<usize>>);

    impl Drop for DropCounter {
        fn drop(&mut self) {
            self.0.set(self.0.get() + 1);
        }
    }

    #[test]
    fn test_clear_releases_every_node_once() {
        let drops = Rc::new(Cell::new(0));
        let mut list: OrderedList<DropCounter> = OrderedList::new();
        for _ in 0..10_000 {
            list.add_last(DropCounter(drops.clone()));
        }
        assert_eq!(list.len(), 10_000);

        assert_eq!(list.clear(), 10_000);
        assert_eq!(drops.get(), 10_000);
        assert!(list.is_empty());
        list.verify().unwrap();

        drop(list);
        assert_eq!(drops.get(), 10_000);
    }

    #[test]
    fn test_drop_releases_every_node_once() {
        let drops = Rc::new(Cell::new(0));
        let mut list: OrderedList<DropCounter> = OrderedList::new();
        for i in 0..10_000 {
            list.add_at(DropCounter(drops.clone()), i % 7);
        }
        list.remove_first();
        assert_eq!(drops.get(), 1);

        drop(list);
        assert_eq!(drops.get(), 10_000);
    }

    #[test]
    fn test_clamp_helpers() {
        assert_eq!(clamp_insert(-1, 3), Position::Front);
        assert_eq!(clamp_insert(0, 3), Position::Front);
        assert_eq!(clamp_insert(2, 3), Position::At(2));
        assert_eq!(clamp_insert(3, 3), Position::Back);
        assert_eq!(clamp_remove(2, 3), Position::Back);
        assert_eq!(clamp_remove(1, 3), Position::At(1));
        assert_eq!(clamp_remove(isize::MAX, 3), Position::Back);
    }
}

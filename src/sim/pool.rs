//! Fixed-capacity ring-buffer pool
//!
//! Allocation always writes at the cursor and advances it modulo capacity,
//! overwriting the oldest slot when the pool is full. There is no free list:
//! dead slots are skipped on iteration.

use serde::{Deserialize, Serialize};

/// A pool entry with a liveness flag
pub trait Slot {
    fn is_alive(&self) -> bool;
    fn kill(&mut self);
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RingPool<T> {
    slots: Vec<T>,
    cursor: usize,
}

impl<T: Slot + Default + Clone> RingPool<T> {
    /// Preallocate `capacity` dead slots
    pub fn new(capacity: usize) -> Self {
        assert!(capacity > 0, "pool capacity must be non-zero");
        Self {
            slots: vec![T::default(); capacity],
            cursor: 0,
        }
    }

    pub fn capacity(&self) -> usize {
        self.slots.len()
    }

    /// Index the next allocation will write to
    pub fn cursor(&self) -> usize {
        self.cursor
    }

    /// Write `item` at the cursor and advance. Returns the slot index used.
    pub fn alloc(&mut self, item: T) -> usize {
        let index = self.cursor;
        self.slots[index] = item;
        self.cursor = (self.cursor + 1) % self.slots.len();
        index
    }

    /// All slots in index order, dead ones included
    pub fn slots(&self) -> &[T] {
        &self.slots
    }

    pub fn slots_mut(&mut self) -> &mut [T] {
        &mut self.slots
    }

    pub fn iter_alive(&self) -> impl Iterator<Item = &T> {
        self.slots.iter().filter(|s| s.is_alive())
    }

    pub fn iter_alive_mut(&mut self) -> impl Iterator<Item = &mut T> {
        self.slots.iter_mut().filter(|s| s.is_alive())
    }

    pub fn alive_count(&self) -> usize {
        self.iter_alive().count()
    }

    pub fn kill_all(&mut self) {
        for slot in &mut self.slots {
            slot.kill();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug, Clone, Default, PartialEq)]
    struct Dot {
        id: u32,
        alive: bool,
    }

    impl Slot for Dot {
        fn is_alive(&self) -> bool {
            self.alive
        }

        fn kill(&mut self) {
            self.alive = false;
        }
    }

    fn dot(id: u32) -> Dot {
        Dot { id, alive: true }
    }

    #[test]
    fn test_new_pool_is_empty() {
        let pool: RingPool<Dot> = RingPool::new(4);
        assert_eq!(pool.capacity(), 4);
        assert_eq!(pool.alive_count(), 0);
        assert_eq!(pool.cursor(), 0);
    }

    #[test]
    fn test_alloc_wraps_and_overwrites_oldest() {
        let mut pool = RingPool::new(3);
        assert_eq!(pool.alloc(dot(1)), 0);
        assert_eq!(pool.alloc(dot(2)), 1);
        assert_eq!(pool.alloc(dot(3)), 2);
        assert_eq!(pool.cursor(), 0);

        // Full: the next write clobbers slot 0
        assert_eq!(pool.alloc(dot(4)), 0);
        let ids: Vec<u32> = pool.iter_alive().map(|d| d.id).collect();
        assert_eq!(ids, vec![4, 2, 3]);
        assert_eq!(pool.alive_count(), 3);
    }

    #[test]
    fn test_cursor_ignores_liveness() {
        let mut pool = RingPool::new(3);
        pool.alloc(dot(1));
        pool.slots_mut()[0].kill();
        // Cursor does not go back to the freed slot
        assert_eq!(pool.alloc(dot(2)), 1);
        assert_eq!(pool.alive_count(), 1);
    }

    #[test]
    fn test_kill_all() {
        let mut pool = RingPool::new(2);
        pool.alloc(dot(1));
        pool.alloc(dot(2));
        pool.kill_all();
        assert_eq!(pool.alive_count(), 0);
        assert_eq!(pool.iter_alive().count(), 0);
    }
}

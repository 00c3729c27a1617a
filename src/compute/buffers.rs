//! Generation buffer pool.
//!
//! A fixed ring of grid slots. One slot is "current"; stepping writes the next
//! generation into the following slot and then makes it current. Slots behind
//! the current one double as history for cycle detection.

use super::{Grid, GridError, Rule, evolve_into};

/// Smallest pool that can hold a current and a next generation.
pub const MIN_CAPACITY: usize = 2;

struct Slot {
    grid: Grid,
    /// Set once a generation has been written here.
    populated: bool,
}

/// Owned pool of grid slots with a rotating current index.
pub struct GenerationBuffers {
    slots: Vec<Slot>,
    current: usize,
}

impl GenerationBuffers {
    /// Create a pool of `capacity` slots (at least [`MIN_CAPACITY`]) with
    /// `initial` as the current generation.
    ///
    /// All slots are allocated here; the pool never grows afterwards.
    pub fn new(initial: Grid, capacity: usize) -> Result<Self, GridError> {
        let capacity = capacity.max(MIN_CAPACITY);
        let (width, height) = (initial.width(), initial.height());

        let mut slots = Vec::new();
        slots
            .try_reserve_exact(capacity)
            .map_err(|source| GridError::Allocation {
                width,
                height,
                source,
            })?;
        slots.push(Slot {
            grid: initial,
            populated: true,
        });
        for _ in 1..capacity {
            slots.push(Slot {
                grid: Grid::try_new(width, height)?,
                populated: false,
            });
        }

        Ok(Self { slots, current: 0 })
    }

    /// The most recently completed generation.
    #[inline]
    pub fn current(&self) -> &Grid {
        &self.slots[self.current].grid
    }

    /// Number of slots in the pool.
    #[inline]
    pub fn capacity(&self) -> usize {
        self.slots.len()
    }

    /// Number of slots that hold a generation.
    pub fn populated(&self) -> usize {
        self.slots.iter().filter(|s| s.populated).count()
    }

    /// Compute the next generation with `rule` and make it current.
    pub fn advance(&mut self, rule: Rule) {
        let next = (self.current + 1) % self.slots.len();
        let (read, write) = read_write(&mut self.slots, self.current, next);
        evolve_into(rule, &read.grid, &mut write.grid);
        write.populated = true;
        self.current = next;
    }

    /// Past generations, newest first: the first item is one generation
    /// before [`current`](Self::current). Stops at the first slot that has
    /// never been written, and never yields the current slot.
    pub fn history(&self) -> impl Iterator<Item = &Grid> + '_ {
        let capacity = self.slots.len();
        (1..capacity)
            .map(move |lookback| &self.slots[(self.current + capacity - lookback) % capacity])
            .take_while(|slot| slot.populated)
            .map(|slot| &slot.grid)
    }
}

/// Borrow one slot for reading and a different one for writing.
fn read_write(slots: &mut [Slot], read: usize, write: usize) -> (&Slot, &mut Slot) {
    assert_ne!(read, write, "read and write slots must differ");
    if read < write {
        let (head, tail) = slots.split_at_mut(write);
        (&head[read], &mut tail[0])
    } else {
        let (head, tail) = slots.split_at_mut(read);
        (&tail[0], &mut head[write])
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::compute::{Cell, Coordinate};

    fn blinker() -> Grid {
        let mut grid = Grid::new(3, 3);
        for column in 0..3 {
            grid.set_live(Coordinate::new(1, column), 0).unwrap();
        }
        grid
    }

    #[test]
    fn test_minimum_capacity() {
        let buffers = GenerationBuffers::new(Grid::new(2, 2), 0).unwrap();
        assert_eq!(buffers.capacity(), MIN_CAPACITY);
        assert_eq!(buffers.populated(), 1);
    }

    #[test]
    fn test_history_starts_empty() {
        let buffers = GenerationBuffers::new(blinker(), 5).unwrap();
        assert_eq!(buffers.history().count(), 0);
        assert!(buffers.current().same_pattern(&blinker()));
    }

    #[test]
    fn test_advance_rotates_current() {
        let mut buffers = GenerationBuffers::new(blinker(), 2).unwrap();
        buffers.advance(Rule::Binary);
        assert!(buffers.current().is_live(Coordinate::new(0, 1)));
        assert!(!buffers.current().is_live(Coordinate::new(1, 0)));

        let history: Vec<_> = buffers.history().collect();
        assert_eq!(history.len(), 1);
        assert!(history[0].same_pattern(&blinker()));

        buffers.advance(Rule::Binary);
        assert!(buffers.current().same_pattern(&blinker()));
    }

    #[test]
    fn test_history_fills_then_wraps() {
        let mut buffers = GenerationBuffers::new(blinker(), 5).unwrap();
        for step in 1..=7 {
            buffers.advance(Rule::Aging);
            assert_eq!(buffers.history().count(), step.min(4));
        }
        assert_eq!(buffers.populated(), 5);
        assert_eq!(buffers.capacity(), 5);
    }

    #[test]
    fn test_history_is_newest_first() {
        let mut buffers = GenerationBuffers::new(blinker(), 4).unwrap();
        // The blinker's center cell survives every generation, so its age
        // identifies which generation a slot holds.
        for _ in 0..3 {
            buffers.advance(Rule::Aging);
        }
        let center = Coordinate::new(1, 1);
        assert_eq!(buffers.current()[center], Cell::Alive(3));
        let ages: Vec<_> = buffers.history().map(|g| g[center]).collect();
        assert_eq!(ages, vec![Cell::Alive(2), Cell::Alive(1), Cell::Alive(0)]);
    }

    #[test]
    fn test_read_write_split() {
        let mut slots: Vec<Slot> = (0..3)
            .map(|i| Slot {
                grid: Grid::new(i + 1, 1),
                populated: false,
            })
            .collect();
        let (read, write) = read_write(&mut slots, 2, 0);
        assert_eq!(read.grid.width(), 3);
        write.populated = true;
        assert!(slots[0].populated);
    }
}

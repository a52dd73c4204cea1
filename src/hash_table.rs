use alloc::boxed::Box;
use alloc::vec::Vec;
use core::fmt::Debug;
use core::mem;

use crate::error::Result;
use crate::primes::next_prime;

/// Base capacity a fresh table starts with; shrinking never goes below it.
///
/// The bucket-array length is the next prime at or above the base, so the
/// smallest table has 53 slots.
const INITIAL_BASE_SIZE: usize = 50;

/// Polynomial base for the primary hash. Prime, and larger than the byte
/// alphabet, so short keys spread before the modulus folds them.
const HASH_BASE_1: u64 = 2423;

/// Polynomial base for the secondary hash, which derives the probe stride.
const HASH_BASE_2: u64 = 2287;

/// Load percentage above which an insert doubles the base capacity.
const GROW_LOAD_PERCENT: usize = 70;

/// Load percentage below which a removal halves the base capacity.
const SHRINK_LOAD_PERCENT: usize = 10;

/// Folds `bytes` into `0..modulus` by evaluating the polynomial
/// `sum(base^(len - 1 - i) * bytes[i])` with Horner's rule, reducing after
/// every step so intermediates stay small.
fn hash_bytes(bytes: &[u8], base: u64, modulus: usize) -> usize {
    let modulus = modulus as u128;
    let mut hash = 0u128;

    for &byte in bytes {
        hash = (hash * u128::from(base) + u128::from(byte)) % modulus;
    }

    hash as usize
}

/// Allocates an all-empty bucket array of exactly `size` slots, reporting
/// failure instead of aborting.
fn allocate_slots(size: usize) -> Result<Box<[Slot]>> {
    let mut slots = Vec::new();
    slots.try_reserve_exact(size)?;
    slots.resize_with(size, || Slot::Empty);

    Ok(slots.into_boxed_slice())
}

/// Copies `bytes` into freshly allocated table-owned storage, reporting
/// failure instead of aborting.
fn copy_bytes(bytes: &[u8]) -> Result<Box<[u8]>> {
    let mut buffer = Vec::new();
    buffer.try_reserve_exact(bytes.len())?;
    buffer.extend_from_slice(bytes);

    Ok(buffer.into_boxed_slice())
}

/// An owned key-value pair of byte strings.
#[derive(Debug, Clone)]
struct Item {
    key: Box<[u8]>,
    value: Box<[u8]>,
}

/// State of one bucket slot.
///
/// A removal leaves `Tombstone` rather than `Empty` so probe sequences that
/// passed through the slot while it held an item still reach entries placed
/// beyond it. Rebuilds write a fresh array and drop all tombstones.
#[derive(Debug, Clone, Default)]
enum Slot {
    /// Unused since the last rebuild; terminates probe sequences.
    #[default]
    Empty,
    /// Held an item that was removed; probe sequences continue past it.
    Tombstone,
    /// Holds a live item.
    Occupied(Item),
}

/// Double-hashing probe sequence for one key over a bucket array of prime
/// length.
///
/// Yields `(h1 + i * stride) mod size` for `i = 0, 1, 2, ...` where the
/// stride is `h2 + 1`, substituted with 1 when that sum is a multiple of
/// `size` (a stride of 0 modulo the array length would revisit a single slot
/// forever). Because `size` is prime, every other stride visits each slot
/// exactly once within `size` attempts, so callers bound the sequence with
/// `take(size)`.
struct Probe {
    index: usize,
    stride: usize,
    size: usize,
}

impl Probe {
    fn new(key: &[u8], size: usize) -> Self {
        let index = hash_bytes(key, HASH_BASE_1, size);
        let mut stride = hash_bytes(key, HASH_BASE_2, size) + 1;
        if stride == size {
            stride = 1;
        }

        Self {
            index,
            stride,
            size,
        }
    }
}

impl Iterator for Probe {
    type Item = usize;

    fn next(&mut self) -> Option<Self::Item> {
        let current = self.index;
        self.index = (self.index + self.stride) % self.size;
        Some(current)
    }
}

/// Where an insert of a given key must land.
enum InsertSlot {
    /// The key is already present at this index; overwrite in place.
    Occupied(usize),
    /// The key is absent; a new item goes to this index.
    Vacant(usize),
}

/// A point-in-time snapshot of table occupancy and probe behavior.
///
/// Available with the `stats` feature.
#[cfg(feature = "stats")]
#[derive(Debug, Clone)]
pub struct TableStats {
    /// Number of live entries
    pub len: usize,
    /// Bucket-array length (always prime)
    pub capacity: usize,
    /// Capacity target before prime rounding
    pub base_size: usize,
    /// Slots holding a tombstone marker
    pub tombstones: usize,
    /// Slots unused since the last rebuild
    pub empty_slots: usize,
    /// Load factor (len / capacity)
    pub load_factor: f64,
    /// Live entries binned by the number of probe attempts a lookup needs
    /// to reach them; bin 0 holds entries sitting on their home slot
    pub probe_histogram: Vec<usize>,
}

#[cfg(feature = "stats")]
impl TableStats {
    /// Pretty-print the statistics.
    #[cfg(feature = "std")]
    pub fn print(&self) {
        println!("=== Hash Table Statistics ===");
        println!(
            "Population: {}/{} ({:.2}% load factor)",
            self.len,
            self.capacity,
            self.load_factor * 100.0
        );
        println!("Base capacity: {}", self.base_size);
        println!(
            "Slots: {} occupied, {} tombstone, {} empty",
            self.len, self.tombstones, self.empty_slots
        );

        let max = self.probe_histogram.iter().copied().max().unwrap_or(0);
        if max == 0 {
            println!("Probe histogram: empty");
            return;
        }

        let max_bar = 60usize;
        println!("Probe histogram:");
        for (attempts, &count) in self.probe_histogram.iter().enumerate() {
            let width = ((count as u128 * max_bar as u128).div_ceil(max as u128)) as usize;
            println!("{:>3} | {} ({})", attempts, "█".repeat(width), count);
        }
    }
}

/// A byte-string hash table using open addressing with double hashing.
///
/// `HashTable` maps owned byte-string keys to owned byte-string values.
/// Collisions are resolved by probing a second, key-derived stride over a
/// prime-length bucket array. The table grows (base capacity × 2) when its
/// load exceeds 70% and shrinks (base capacity ÷ 2, never below the initial
/// size) when load drops under 10%; both transitions rebuild the array and
/// reclaim the tombstones left by removals.
///
/// Construction and the operations that allocate are fallible: on allocation
/// failure they return [`Error::OutOfMemory`](crate::Error) and leave the
/// table in its previous state.
///
/// ## Example
///
/// ```rust
/// use duo_hash::HashTable;
///
/// let mut table = HashTable::new()?;
/// table.insert("apple", "red")?;
/// table.insert("banana", "yellow")?;
///
/// assert_eq!(table.get("apple"), Some(&b"red"[..]));
/// assert_eq!(table.len(), 2);
///
/// table.remove("apple")?;
/// assert_eq!(table.get("apple"), None);
/// # Ok::<(), duo_hash::Error>(())
/// ```
#[derive(Clone)]
pub struct HashTable {
    /// Capacity target before prime rounding; doubled and halved by resizes.
    base_size: usize,
    /// Bucket array; its length is `next_prime(base_size)`.
    slots: Box<[Slot]>,
    /// Number of occupied slots. Tombstones are not counted.
    count: usize,
}

impl Debug for HashTable {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_map()
            .entries(self.iter().map(|(key, value)| (Bytes(key), Bytes(value))))
            .finish()
    }
}

/// Formats a byte string as an ASCII-escaped literal for debug output.
struct Bytes<'a>(&'a [u8]);

impl Debug for Bytes<'_> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write!(f, "b\"{}\"", self.0.escape_ascii())
    }
}

impl HashTable {
    /// Creates an empty table with the default base capacity of 50, giving
    /// 53 slots.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use duo_hash::HashTable;
    ///
    /// let table = HashTable::new()?;
    /// assert!(table.is_empty());
    /// assert_eq!(table.capacity(), 53);
    /// # Ok::<(), duo_hash::Error>(())
    /// ```
    pub fn new() -> Result<Self> {
        Self::with_capacity(INITIAL_BASE_SIZE)
    }

    /// Creates an empty table with the given base capacity.
    ///
    /// The base is clamped up to the minimum of 50, and the actual
    /// bucket-array length is the next prime at or above it. Later resizes
    /// double or halve the base, so a table created here grows along
    /// `base_size * 2^n`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use duo_hash::HashTable;
    ///
    /// let table = HashTable::with_capacity(500)?;
    /// assert_eq!(table.capacity(), 503);
    ///
    /// // Requests below the minimum base capacity are clamped.
    /// let table = HashTable::with_capacity(10)?;
    /// assert_eq!(table.capacity(), 53);
    /// # Ok::<(), duo_hash::Error>(())
    /// ```
    pub fn with_capacity(base_size: usize) -> Result<Self> {
        let base_size = base_size.max(INITIAL_BASE_SIZE);
        let slots = allocate_slots(next_prime(base_size))?;

        Ok(Self {
            base_size,
            slots,
            count: 0,
        })
    }

    /// Inserts a key-value pair, returning the previous value if the key was
    /// already present.
    ///
    /// Key and value are copied into table-owned storage; the caller keeps
    /// its buffers. If the load factor is above 70% when the insert begins,
    /// the table first doubles its base capacity.
    ///
    /// # Errors
    ///
    /// Returns `Err` if storage for the entry or for a grow cannot be
    /// reserved. No entries are added, removed, or modified in that case.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use duo_hash::HashTable;
    ///
    /// let mut table = HashTable::new()?;
    ///
    /// assert_eq!(table.insert("apple", "red")?, None);
    /// assert_eq!(table.len(), 1);
    ///
    /// // Inserting an existing key replaces the value in place.
    /// let previous = table.insert("apple", "green")?;
    /// assert_eq!(previous.as_deref(), Some(&b"red"[..]));
    /// assert_eq!(table.len(), 1);
    /// # Ok::<(), duo_hash::Error>(())
    /// ```
    pub fn insert(
        &mut self,
        key: impl AsRef<[u8]>,
        value: impl AsRef<[u8]>,
    ) -> Result<Option<Box<[u8]>>> {
        let key = key.as_ref();
        let value = value.as_ref();

        if self.load_percent() > GROW_LOAD_PERCENT {
            self.resize(self.base_size.checked_mul(2).expect("base capacity overflow"))?;
        }

        match self.insertion_slot(key) {
            InsertSlot::Occupied(index) => {
                let value = copy_bytes(value)?;
                let Slot::Occupied(item) = &mut self.slots[index] else {
                    unreachable!("insertion probe landed on a slot without an item");
                };

                Ok(Some(mem::replace(&mut item.value, value)))
            }
            InsertSlot::Vacant(index) => {
                let item = Item {
                    key: copy_bytes(key)?,
                    value: copy_bytes(value)?,
                };
                self.slots[index] = Slot::Occupied(item);
                self.count += 1;

                Ok(None)
            }
        }
    }

    /// Returns the value stored for `key`, if any.
    ///
    /// Lookups never mutate the table; tombstones left by removals are
    /// probed straight through.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use duo_hash::HashTable;
    ///
    /// let mut table = HashTable::new()?;
    /// table.insert("apple", "red")?;
    ///
    /// assert_eq!(table.get("apple"), Some(&b"red"[..]));
    /// assert_eq!(table.get("pear"), None);
    /// # Ok::<(), duo_hash::Error>(())
    /// ```
    #[inline]
    pub fn get(&self, key: impl AsRef<[u8]>) -> Option<&[u8]> {
        let index = self.position_of(key.as_ref())?;
        if let Slot::Occupied(item) = &self.slots[index] {
            Some(&item.value)
        } else {
            None
        }
    }

    /// Returns a mutable borrow of the value stored for `key`, if any.
    ///
    /// The borrow allows editing the value bytes in place; changing the
    /// value's length requires [`insert`](HashTable::insert).
    ///
    /// # Examples
    ///
    /// ```rust
    /// use duo_hash::HashTable;
    ///
    /// let mut table = HashTable::new()?;
    /// table.insert("apple", "red")?;
    ///
    /// if let Some(value) = table.get_mut("apple") {
    ///     value.make_ascii_uppercase();
    /// }
    /// assert_eq!(table.get("apple"), Some(&b"RED"[..]));
    /// # Ok::<(), duo_hash::Error>(())
    /// ```
    #[inline]
    pub fn get_mut(&mut self, key: impl AsRef<[u8]>) -> Option<&mut [u8]> {
        let index = self.position_of(key.as_ref())?;
        if let Slot::Occupied(item) = &mut self.slots[index] {
            Some(&mut item.value)
        } else {
            None
        }
    }

    /// Returns `true` if the table holds a value for `key`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use duo_hash::HashTable;
    ///
    /// let mut table = HashTable::new()?;
    /// table.insert("apple", "red")?;
    ///
    /// assert!(table.contains_key("apple"));
    /// assert!(!table.contains_key("pear"));
    /// # Ok::<(), duo_hash::Error>(())
    /// ```
    #[inline]
    pub fn contains_key(&self, key: impl AsRef<[u8]>) -> bool {
        self.position_of(key.as_ref()).is_some()
    }

    /// Removes `key` from the table, returning its value if it was present.
    ///
    /// The vacated slot becomes a tombstone so probe chains running through
    /// it stay intact; rebuilds reclaim tombstones. If the load factor is
    /// below 10% when the removal begins, the table first halves its base
    /// capacity (stopping at the initial size). Removing an absent key
    /// changes nothing.
    ///
    /// # Errors
    ///
    /// Returns `Err` if storage for a shrink cannot be reserved. The table
    /// is unchanged in that case.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use duo_hash::HashTable;
    ///
    /// let mut table = HashTable::new()?;
    /// table.insert("apple", "red")?;
    ///
    /// assert_eq!(table.remove("apple")?.as_deref(), Some(&b"red"[..]));
    /// assert_eq!(table.remove("apple")?, None);
    /// assert!(table.is_empty());
    /// # Ok::<(), duo_hash::Error>(())
    /// ```
    pub fn remove(&mut self, key: impl AsRef<[u8]>) -> Result<Option<Box<[u8]>>> {
        if self.load_percent() < SHRINK_LOAD_PERCENT {
            self.resize(self.base_size / 2)?;
        }

        let Some(index) = self.position_of(key.as_ref()) else {
            return Ok(None);
        };

        let Slot::Occupied(item) = mem::replace(&mut self.slots[index], Slot::Tombstone) else {
            unreachable!("lookup probe landed on a slot without an item");
        };
        self.count -= 1;

        Ok(Some(item.value))
    }

    /// Returns the number of live entries in the table.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use duo_hash::HashTable;
    ///
    /// let mut table = HashTable::new()?;
    /// assert_eq!(table.len(), 0);
    ///
    /// table.insert("apple", "red")?;
    /// assert_eq!(table.len(), 1);
    /// # Ok::<(), duo_hash::Error>(())
    /// ```
    #[inline]
    pub fn len(&self) -> usize {
        self.count
    }

    /// Returns `true` if the table contains no entries.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use duo_hash::HashTable;
    ///
    /// let table = HashTable::new()?;
    /// assert!(table.is_empty());
    /// # Ok::<(), duo_hash::Error>(())
    /// ```
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.count == 0
    }

    /// Returns the current bucket-array length.
    ///
    /// The length is always prime: 53 for a fresh default table, and the
    /// next prime at or above the doubled (or halved) base capacity after
    /// each resize.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use duo_hash::HashTable;
    ///
    /// let table = HashTable::new()?;
    /// assert_eq!(table.capacity(), 53);
    /// # Ok::<(), duo_hash::Error>(())
    /// ```
    ///
    /// # Load Factor
    ///
    /// The table rebuilds itself when the share of occupied slots rises
    /// above 70% (doubling the base capacity) or falls below 10% (halving
    /// it, never below the initial size).
    pub fn capacity(&self) -> usize {
        self.slots.len()
    }

    /// Removes all entries and tombstones, keeping the current capacity.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use duo_hash::HashTable;
    ///
    /// let mut table = HashTable::new()?;
    /// table.insert("apple", "red")?;
    /// table.insert("banana", "yellow")?;
    ///
    /// table.clear();
    /// assert!(table.is_empty());
    /// assert_eq!(table.capacity(), 53);
    /// # Ok::<(), duo_hash::Error>(())
    /// ```
    pub fn clear(&mut self) {
        for slot in &mut self.slots {
            *slot = Slot::Empty;
        }
        self.count = 0;
    }

    /// Returns an iterator over the entries as `(&key, &value)` pairs.
    ///
    /// Order is unspecified and changes across rebuilds.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use duo_hash::HashTable;
    ///
    /// let mut table = HashTable::new()?;
    /// table.insert("apple", "red")?;
    /// table.insert("banana", "yellow")?;
    ///
    /// assert_eq!(table.iter().count(), 2);
    /// # Ok::<(), duo_hash::Error>(())
    /// ```
    pub fn iter(&self) -> Iter<'_> {
        Iter {
            slots: self.slots.iter(),
        }
    }

    /// Returns a draining iterator that yields owned `(key, value)` pairs
    /// and leaves the table empty.
    ///
    /// Capacity is preserved. Dropping the iterator exhausts it first.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use duo_hash::HashTable;
    ///
    /// let mut table = HashTable::new()?;
    /// table.insert("apple", "red")?;
    /// table.insert("banana", "yellow")?;
    ///
    /// let drained = table.drain().count();
    /// assert_eq!(drained, 2);
    /// assert!(table.is_empty());
    /// # Ok::<(), duo_hash::Error>(())
    /// ```
    pub fn drain(&mut self) -> Drain<'_> {
        Drain {
            table: self,
            index: 0,
        }
    }

    /// Integer load percentage, `count * 100 / capacity`.
    #[inline]
    fn load_percent(&self) -> usize {
        ((self.count as u128 * 100) / (self.slots.len() as u128)) as usize
    }

    /// Starts the probe sequence for `key` over the current bucket array.
    #[inline]
    fn probe(&self, key: &[u8]) -> Probe {
        Probe::new(key, self.slots.len())
    }

    /// Probes for the slot holding `key`.
    ///
    /// An empty slot ends the search; tombstones and other keys keep it
    /// going. At most one full cycle over the array is attempted.
    fn position_of(&self, key: &[u8]) -> Option<usize> {
        for index in self.probe(key).take(self.slots.len()) {
            match &self.slots[index] {
                Slot::Empty => return None,
                Slot::Tombstone => {}
                Slot::Occupied(item) => {
                    if item.key.as_ref() == key {
                        return Some(index);
                    }
                }
            }
        }

        None
    }

    /// Probes for where an insert of `key` must land.
    ///
    /// The first tombstone on the chain is remembered: if the key turns out
    /// to be absent, the new item goes there instead of the terminating
    /// empty slot, keeping chains short. Writing into a tombstone before
    /// the chain has been walked to a key match or an empty slot could
    /// duplicate a key stored further along, so the scan always finishes
    /// first.
    fn insertion_slot(&self, key: &[u8]) -> InsertSlot {
        let mut tombstone = None;

        for index in self.probe(key).take(self.slots.len()) {
            match &self.slots[index] {
                Slot::Empty => return InsertSlot::Vacant(tombstone.unwrap_or(index)),
                Slot::Tombstone => {
                    if tombstone.is_none() {
                        tombstone = Some(index);
                    }
                }
                Slot::Occupied(item) => {
                    if item.key.as_ref() == key {
                        return InsertSlot::Occupied(index);
                    }
                }
            }
        }

        // A full cycle without an empty slot is only possible when
        // tombstones fill all the free space the load bound guarantees.
        match tombstone {
            Some(index) => InsertSlot::Vacant(index),
            None => unreachable!("probe cycled a table with no free slot"),
        }
    }

    /// Rebuilds the table for a new base capacity.
    ///
    /// A target below the minimum base leaves the table unchanged, which is
    /// how shrinking bottoms out. The new bucket array is fully allocated
    /// before anything moves, so an allocation failure leaves the table
    /// exactly as it was. Live items transfer by move into the first empty
    /// slot on their new probe chain; a fresh array holds no tombstones and
    /// no duplicate keys, so no key comparison is needed. Tombstones are
    /// dropped by the rebuild.
    #[cold]
    fn resize(&mut self, new_base_size: usize) -> Result<()> {
        if new_base_size < INITIAL_BASE_SIZE {
            return Ok(());
        }

        let new_size = next_prime(new_base_size);
        let mut new_slots = allocate_slots(new_size)?;

        log::trace!(
            "rebuilding table: {} -> {} slots ({} live entries)",
            self.slots.len(),
            new_size,
            self.count
        );

        for slot in mem::take(&mut self.slots).into_vec() {
            if let Slot::Occupied(item) = slot {
                let index = free_slot(&new_slots, &item.key);
                new_slots[index] = Slot::Occupied(item);
            }
        }

        self.slots = new_slots;
        self.base_size = new_base_size;

        Ok(())
    }
}

/// First empty slot on `key`'s probe chain over `slots`.
///
/// Only valid during a rebuild: the array must contain no tombstone and no
/// item with an equal key.
fn free_slot(slots: &[Slot], key: &[u8]) -> usize {
    let size = slots.len();
    for index in Probe::new(key, size).take(size) {
        if matches!(slots[index], Slot::Empty) {
            return index;
        }
    }

    unreachable!("rebuild target has no free slot")
}

#[cfg(feature = "stats")]
impl HashTable {
    /// Computes occupancy statistics and a probe-length histogram.
    ///
    /// Available with the `stats` feature. The histogram bins live entries
    /// by the number of probe attempts a lookup needs to reach them, so a
    /// healthy table concentrates its mass in bin 0.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use duo_hash::HashTable;
    ///
    /// let mut table = HashTable::new()?;
    /// table.insert("apple", "red")?;
    ///
    /// let stats = table.stats();
    /// assert_eq!(stats.len, 1);
    /// assert_eq!(stats.capacity, 53);
    /// assert_eq!(stats.probe_histogram.iter().sum::<usize>(), 1);
    /// # Ok::<(), duo_hash::Error>(())
    /// ```
    pub fn stats(&self) -> TableStats {
        let mut tombstones = 0;
        let mut empty_slots = 0;
        let mut probe_histogram = Vec::new();

        for slot in &self.slots {
            match slot {
                Slot::Empty => empty_slots += 1,
                Slot::Tombstone => tombstones += 1,
                Slot::Occupied(item) => {
                    let attempts = self.probe_length(&item.key);
                    if probe_histogram.len() <= attempts {
                        probe_histogram.resize(attempts + 1, 0);
                    }
                    probe_histogram[attempts] += 1;
                }
            }
        }

        TableStats {
            len: self.count,
            capacity: self.slots.len(),
            base_size: self.base_size,
            tombstones,
            empty_slots,
            load_factor: self.count as f64 / self.slots.len() as f64,
            probe_histogram,
        }
    }

    /// Number of probe attempts a lookup of `key` needs to land on its
    /// slot. The key must be present.
    fn probe_length(&self, key: &[u8]) -> usize {
        for (attempts, index) in self.probe(key).take(self.slots.len()).enumerate() {
            if let Slot::Occupied(item) = &self.slots[index] {
                if item.key.as_ref() == key {
                    return attempts;
                }
            }
        }

        unreachable!("probe length requested for an absent key")
    }
}

/// An iterator over the entries of a [`HashTable`].
///
/// This struct is created by the [`iter`] method on [`HashTable`].
///
/// [`iter`]: HashTable::iter
pub struct Iter<'a> {
    slots: core::slice::Iter<'a, Slot>,
}

impl<'a> Iterator for Iter<'a> {
    type Item = (&'a [u8], &'a [u8]);

    fn next(&mut self) -> Option<Self::Item> {
        for slot in self.slots.by_ref() {
            if let Slot::Occupied(item) = slot {
                return Some((&item.key, &item.value));
            }
        }

        None
    }
}

/// A draining iterator over the entries of a [`HashTable`].
///
/// This struct is created by the [`drain`] method on [`HashTable`]. It
/// yields owned pairs and empties the table as it goes; dropping it
/// finishes the job.
///
/// [`drain`]: HashTable::drain
pub struct Drain<'a> {
    table: &'a mut HashTable,
    index: usize,
}

impl Iterator for Drain<'_> {
    type Item = (Box<[u8]>, Box<[u8]>);

    fn next(&mut self) -> Option<Self::Item> {
        while self.index < self.table.slots.len() {
            let slot = mem::take(&mut self.table.slots[self.index]);
            self.index += 1;

            if let Slot::Occupied(item) = slot {
                self.table.count -= 1;
                return Some((item.key, item.value));
            }
        }

        None
    }
}

impl Drop for Drain<'_> {
    fn drop(&mut self) {
        for _ in &mut *self {}
    }
}

//! Viewport scroll sampler: the single owner of the vertical scroll offset.
//!
//! Every call to [`ScrollSampler::sample`] (or `scroll_by` / `resize`) fans
//! out synchronously to all live subscribers.  Subscribers are plain
//! closures; a [`Subscription`] handle deregisters its closure when dropped,
//! so a torn-down view can never observe another sample.
//!
//! The registry is single-threaded (`Rc<RefCell<..>>`).  Callbacks are taken
//! out of the registry while they run, which lets a callback cancel itself
//! or another subscription mid fan-out without a double borrow.

use std::cell::{Cell, RefCell};
use std::rc::{Rc, Weak};

// ───────────────────────────────────────── sample ────────────

/// One reading of the viewport.  Offsets are in pixels.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ScrollSample {
    /// Current vertical scroll offset, always `<= max_scrollable`.
    pub offset_y: u32,
    /// Document height minus viewport height (0 for single-screen pages).
    pub max_scrollable: u32,
    /// Visible height, as of the last resize.
    pub viewport_height: u32,
}

type Callback = Box<dyn FnMut(ScrollSample)>;

// ───────────────────────────────────────── registry ──────────

struct Slot {
    id: u64,
    /// `None` while the callback is being invoked.
    callback: Option<Callback>,
}

#[derive(Default)]
struct Registry {
    next_id: u64,
    slots: Vec<Slot>,
}

impl Registry {
    fn insert(&mut self, callback: Callback) -> u64 {
        let id = self.next_id;
        self.next_id = self.next_id.wrapping_add(1);
        self.slots.push(Slot {
            id,
            callback: Some(callback),
        });
        id
    }

    /// Remove a slot.  The removed callback is handed back so the caller can
    /// drop it after releasing the borrow (it may own other subscriptions).
    fn remove(&mut self, id: u64) -> Option<Slot> {
        let idx = self.slots.iter().position(|s| s.id == id)?;
        Some(self.slots.remove(idx))
    }

    fn contains(&self, id: u64) -> bool {
        self.slots.iter().any(|s| s.id == id)
    }

    fn ids(&self) -> Vec<u64> {
        self.slots.iter().map(|s| s.id).collect()
    }

    fn take(&mut self, id: u64) -> Option<Callback> {
        self.slots
            .iter_mut()
            .find(|s| s.id == id)
            .and_then(|s| s.callback.take())
    }

    /// Put a callback back after it ran.  If the slot was cancelled during
    /// the call the callback is returned for the caller to drop.
    fn restore(&mut self, id: u64, callback: Callback) -> Option<Callback> {
        match self.slots.iter_mut().find(|s| s.id == id) {
            Some(slot) => {
                slot.callback = Some(callback);
                None
            }
            None => Some(callback),
        }
    }
}

// ───────────────────────────────────────── subscription ──────

/// Handle returned by [`ScrollSampler::subscribe`].
///
/// Dropping it deregisters the callback synchronously.
#[must_use = "dropping a Subscription deregisters its callback immediately"]
pub struct Subscription {
    id: u64,
    registry: Weak<RefCell<Registry>>,
}

impl Subscription {
    /// Explicit form of `drop(subscription)`.
    pub fn cancel(self) {}

    /// `true` while the callback is still registered with a live sampler.
    pub fn is_active(&self) -> bool {
        self.registry
            .upgrade()
            .is_some_and(|r| r.borrow().contains(self.id))
    }
}

impl Drop for Subscription {
    fn drop(&mut self) {
        let Some(registry) = self.registry.upgrade() else {
            return;
        };
        let removed = registry.borrow_mut().remove(self.id);
        drop(removed);
    }
}

impl std::fmt::Debug for Subscription {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Subscription")
            .field("id", &self.id)
            .field("active", &self.is_active())
            .finish()
    }
}

// ───────────────────────────────────────── derived value ─────

/// A value recomputed by a subscriber and read by the renderer.
///
/// Cloning shares the same cell; once the owning binding is dropped the
/// value simply stops changing.
#[derive(Debug, Clone)]
pub struct Derived<T: Copy> {
    cell: Rc<Cell<T>>,
}

impl<T: Copy> Derived<T> {
    pub(crate) fn new(value: T) -> Self {
        Self {
            cell: Rc::new(Cell::new(value)),
        }
    }

    pub fn get(&self) -> T {
        self.cell.get()
    }

    pub(crate) fn set(&self, value: T) {
        self.cell.set(value);
    }
}

// ───────────────────────────────────────── sampler ───────────

/// Owned observable scroll offset.
pub struct ScrollSampler {
    current: ScrollSample,
    /// `false` when there is no scrollable viewport; the offset stays 0.
    attached: bool,
    registry: Rc<RefCell<Registry>>,
}

impl Default for ScrollSampler {
    fn default() -> Self {
        Self::new()
    }
}

impl ScrollSampler {
    pub fn new() -> Self {
        Self {
            current: ScrollSample::default(),
            attached: true,
            registry: Rc::new(RefCell::new(Registry::default())),
        }
    }

    /// A sampler with no viewport behind it.  Every read yields 0 and
    /// scroll input is ignored; subscriptions still work.
    pub fn detached() -> Self {
        Self {
            attached: false,
            ..Self::new()
        }
    }

    pub fn is_attached(&self) -> bool {
        self.attached
    }

    pub fn offset_y(&self) -> u32 {
        self.current.offset_y
    }

    pub fn max_scrollable(&self) -> u32 {
        self.current.max_scrollable
    }

    pub fn current(&self) -> ScrollSample {
        self.current
    }

    /// Record a new absolute offset (clamped to the scrollable range) and
    /// notify every subscriber.
    pub fn sample(&mut self, offset_y: u32) {
        if self.attached {
            self.current.offset_y = offset_y.min(self.current.max_scrollable);
        }
        self.notify();
    }

    /// Relative scroll.  Negative deltas scroll up.
    pub fn scroll_by(&mut self, delta: i64) {
        let next = (i64::from(self.current.offset_y) + delta)
            .clamp(0, i64::from(self.current.max_scrollable));
        self.sample(next as u32);
    }

    /// Recompute the scrollable height after the document or the viewport
    /// changed size.  The current offset is re-clamped.
    pub fn resize(&mut self, document_height: u32, viewport_height: u32) {
        if self.attached {
            self.current.max_scrollable = document_height.saturating_sub(viewport_height);
            self.current.viewport_height = viewport_height;
            self.current.offset_y = self.current.offset_y.min(self.current.max_scrollable);
        }
        self.notify();
    }

    /// Register a callback invoked with every subsequent sample.
    pub fn subscribe<F>(&self, callback: F) -> Subscription
    where
        F: FnMut(ScrollSample) + 'static,
    {
        let id = self.registry.borrow_mut().insert(Box::new(callback));
        Subscription {
            id,
            registry: Rc::downgrade(&self.registry),
        }
    }

    pub fn subscriber_count(&self) -> usize {
        self.registry.borrow().slots.len()
    }

    fn notify(&self) {
        let sample = self.current;
        // Snapshot: subscribers added during this fan-out see the next one.
        let ids = self.registry.borrow().ids();
        for id in ids {
            let Some(mut callback) = self.registry.borrow_mut().take(id) else {
                // Cancelled earlier in this fan-out.
                continue;
            };
            callback(sample);
            let orphan = self.registry.borrow_mut().restore(id, callback);
            drop(orphan);
        }
    }
}

impl std::fmt::Debug for ScrollSampler {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ScrollSampler")
            .field("current", &self.current)
            .field("attached", &self.attached)
            .field("subscribers", &self.subscriber_count())
            .finish()
    }
}

//! Bounded pool of reusable entities.
//!
//! Every entity the pool has built lives in exactly one of two sets: idle or
//! in use. Entities are created lazily when no idle one is available and are
//! never dropped individually; they live as long as the pool.
//!
//! Reuse order is FIFO: `acquire` hands out the entity that has been idle the
//! longest.

use crate::error::{ConfigError, PoolError};
use std::collections::VecDeque;
use std::fmt;

/// Stable identifier of one pooled entity.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct PoolHandle(usize);

impl PoolHandle {
    #[inline]
    pub fn index(self) -> usize {
        self.0
    }
}

impl fmt::Display for PoolHandle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "entity #{}", self.0)
    }
}

/// Idle/in-use counts, for diagnostics only.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct PoolStatus {
    pub idle: usize,
    pub in_use: usize,
}

impl fmt::Display for PoolStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "used objects: {}, pooled objects {}",
            self.in_use, self.idle
        )
    }
}

pub type Hook<T> = Box<dyn FnMut(&mut T)>;

pub struct ResourcePool<T> {
    slots: Vec<T>,
    idle: VecDeque<PoolHandle>,
    in_use: Vec<PoolHandle>,
    capacity: Option<usize>,
    factory: Box<dyn FnMut() -> T>,
    init: Option<Hook<T>>,
    cleanup: Option<Hook<T>>,
}

impl<T> ResourcePool<T> {
    /// Create an empty pool. `capacity` of `None` means unbounded.
    pub fn new(
        factory: impl FnMut() -> T + 'static,
        capacity: Option<usize>,
    ) -> Result<Self, ConfigError> {
        if capacity == Some(0) {
            return Err(ConfigError::ZeroCapacity);
        }
        Ok(Self {
            slots: Vec::new(),
            idle: VecDeque::new(),
            in_use: Vec::new(),
            capacity,
            factory: Box::new(factory),
            init: None,
            cleanup: None,
        })
    }

    /// Hook applied once to every freshly constructed entity.
    pub fn with_init(mut self, init: impl FnMut(&mut T) + 'static) -> Self {
        self.init = Some(Box::new(init));
        self
    }

    /// Hook applied to every entity as it is released.
    pub fn with_cleanup(mut self, cleanup: impl FnMut(&mut T) + 'static) -> Self {
        self.cleanup = Some(Box::new(cleanup));
        self
    }

    /// Check out an entity, reusing an idle one when possible.
    ///
    /// Fails with [`PoolError::Exhausted`] when nothing is idle and the cap is
    /// reached. There is no queueing; the caller must not go on to use an
    /// entity it did not get.
    pub fn acquire(&mut self) -> Result<PoolHandle, PoolError> {
        if let Some(handle) = self.idle.pop_front() {
            self.in_use.push(handle);
            log::debug!("[pool] reuse {handle} ({})", self.status());
            return Ok(handle);
        }

        if let Some(capacity) = self.capacity {
            if self.in_use.len() >= capacity {
                log::warn!("[pool] max pool size {capacity} reached");
                return Err(PoolError::Exhausted { capacity });
            }
        }

        let mut entity = (self.factory)();
        if let Some(init) = self.init.as_mut() {
            init(&mut entity);
        }
        let handle = PoolHandle(self.slots.len());
        self.slots.push(entity);
        self.in_use.push(handle);
        log::debug!("[pool] built {handle} ({})", self.status());
        Ok(handle)
    }

    /// Clean up an in-use entity and return it to the idle set.
    pub fn release(&mut self, handle: PoolHandle) -> Result<(), PoolError> {
        let pos = self
            .in_use
            .iter()
            .position(|h| *h == handle)
            .ok_or(PoolError::NotInUse(handle))?;
        self.in_use.remove(pos);
        self.clean(handle);
        self.idle.push_back(handle);
        log::debug!("[pool] released {handle} ({})", self.status());
        Ok(())
    }

    /// Release everything currently in use, oldest first. No-op when empty.
    pub fn release_all(&mut self) {
        let handles = std::mem::take(&mut self.in_use);
        for handle in handles {
            self.clean(handle);
            self.idle.push_back(handle);
        }
    }

    fn clean(&mut self, handle: PoolHandle) {
        if let (Some(cleanup), Some(entity)) = (self.cleanup.as_mut(), self.slots.get_mut(handle.0))
        {
            cleanup(entity);
        }
    }

    pub fn status(&self) -> PoolStatus {
        PoolStatus {
            idle: self.idle.len(),
            in_use: self.in_use.len(),
        }
    }

    #[inline]
    pub fn in_use_count(&self) -> usize {
        self.in_use.len()
    }

    #[inline]
    pub fn capacity(&self) -> Option<usize> {
        self.capacity
    }

    pub fn is_in_use(&self, handle: PoolHandle) -> bool {
        self.in_use.contains(&handle)
    }

    /// Borrow an in-use entity. Idle entities are not reachable.
    pub fn get(&self, handle: PoolHandle) -> Option<&T> {
        if self.is_in_use(handle) {
            self.slots.get(handle.0)
        } else {
            None
        }
    }

    pub fn get_mut(&mut self, handle: PoolHandle) -> Option<&mut T> {
        if self.is_in_use(handle) {
            self.slots.get_mut(handle.0)
        } else {
            None
        }
    }

    /// In-use handles in acquisition order.
    pub fn in_use(&self) -> &[PoolHandle] {
        &self.in_use
    }

    /// In-use entities in acquisition order.
    pub fn iter(&self) -> impl Iterator<Item = (PoolHandle, &T)> + '_ {
        self.in_use.iter().map(move |h| (*h, &self.slots[h.0]))
    }

    /// Visit every in-use entity mutably, in acquisition order.
    pub fn for_each_in_use(&mut self, mut f: impl FnMut(PoolHandle, &mut T)) {
        let slots = &mut self.slots;
        for handle in &self.in_use {
            if let Some(entity) = slots.get_mut(handle.0) {
                f(*handle, entity);
            }
        }
    }
}

impl<T> fmt::Debug for ResourcePool<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ResourcePool")
            .field("status", &self.status())
            .field("capacity", &self.capacity)
            .finish()
    }
}

//! Table views with typed cell reuse.
//!
//! Cells are registered and pooled per concrete type. The short type name is
//! only used in logs and errors.

use std::any::{Any, TypeId, type_name};
use std::collections::HashMap;
use std::fmt;
use std::sync::LazyLock;

use log::debug;
use regex::Regex;

use crate::compat::{Zz, ZzCompatible};
use crate::error::{Error, Result};

static MODULE_PATH: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?:\w+::)+").expect("module path pattern is valid"));

/// A cell that a [`TableView`] can hand out and take back.
pub trait TableCell: Any {
    /// Reset per-row state before the cell is handed out.
    fn prepare_for_reuse(&mut self) {}
}

/// Location of a row in a table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Default)]
pub struct IndexPath {
    pub section: usize,
    pub row: usize,
}

impl IndexPath {
    #[must_use]
    pub const fn new(section: usize, row: usize) -> Self {
        Self { section, row }
    }
}

impl fmt::Display for IndexPath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}, {}]", self.section, self.row)
    }
}

type CellFactory = Box<dyn Fn() -> Box<dyn Any>>;

struct Registration {
    identifier: String,
    factory: CellFactory,
}

/// Cell registry and reuse pool keyed by cell type.
#[derive(Default)]
pub struct TableView {
    registrations: HashMap<TypeId, Registration>,
    reusable: HashMap<TypeId, Vec<Box<dyn Any>>>,
}

impl fmt::Debug for TableView {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut identifiers: Vec<_> = self
            .registrations
            .values()
            .map(|registration| registration.identifier.as_str())
            .collect();
        identifiers.sort_unstable();
        f.debug_struct("TableView")
            .field("registered", &identifiers)
            .field("reusable", &self.reusable.values().map(Vec::len).sum::<usize>())
            .finish()
    }
}

impl TableView {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn is_registered<C: TableCell>(&self) -> bool {
        self.registrations.contains_key(&TypeId::of::<C>())
    }

    /// Number of cells of type `C` waiting for reuse.
    #[must_use]
    pub fn reusable_count<C: TableCell>(&self) -> usize {
        self.reusable.get(&TypeId::of::<C>()).map_or(0, Vec::len)
    }

    /// Take a queued cell of type `C`, or build a fresh one.
    ///
    /// Returns `None` when `C` is not registered.
    fn dequeue_reusable<C: TableCell>(&mut self) -> Option<Box<dyn Any>> {
        let key = TypeId::of::<C>();
        let registration = self.registrations.get(&key)?;
        if let Some(cell) = self.reusable.get_mut(&key).and_then(Vec::pop) {
            debug!("Reusing queued cell '{}'", registration.identifier);
            return Some(cell);
        }
        debug!("Creating cell '{}'", registration.identifier);
        Some((registration.factory)())
    }
}

/// Reuse identifier of a cell type: its name with module paths removed.
#[must_use]
pub fn reuse_identifier<C: TableCell>() -> String {
    MODULE_PATH.replace_all(type_name::<C>(), "").into_owned()
}

impl ZzCompatible for TableView {}

impl Zz<&mut TableView> {
    /// Register `C`, replacing an earlier registration of the same type.
    pub fn register<C: TableCell + Default>(&mut self) {
        let factory: CellFactory = Box::new(|| -> Box<dyn Any> { Box::new(C::default()) });
        self.base.registrations.insert(
            TypeId::of::<C>(),
            Registration {
                identifier: reuse_identifier::<C>(),
                factory,
            },
        );
    }

    /// A cell of type `C` for the row at `index_path`.
    ///
    /// # Errors
    ///
    /// Returns [`Error::CellNotRegistered`] when `C` was never registered.
    pub fn dequeue<C: TableCell>(&mut self, index_path: IndexPath) -> Result<C> {
        let not_registered = || Error::CellNotRegistered {
            identifier: reuse_identifier::<C>(),
        };

        let cell = self
            .base
            .dequeue_reusable::<C>()
            .ok_or_else(not_registered)?;
        let mut cell = cell.downcast::<C>().map_err(|_| not_registered())?;

        debug!("Dequeued '{}' for row {index_path}", reuse_identifier::<C>());
        cell.prepare_for_reuse();
        Ok(*cell)
    }

    /// Hand `cell` back for reuse by a later [`dequeue`](Self::dequeue).
    pub fn recycle<C: TableCell>(&mut self, cell: C) {
        self.base
            .reusable
            .entry(TypeId::of::<C>())
            .or_default()
            .push(Box::new(cell));
    }
}

//! Ordered catalog of named effects

use embassy_time::Duration;
use heapless::Vec;

use crate::effect::{BUILTIN_EFFECT_COUNT, Effect, EffectId, EffectSlot};
use crate::error::SchedulerError;

/// A named effect
#[derive(Debug, Clone)]
pub struct EffectDescriptor<E> {
    name: &'static str,
    effect: E,
}

impl<E> EffectDescriptor<E> {
    pub const fn new(name: &'static str, effect: E) -> Self {
        Self { name, effect }
    }

    pub const fn name(&self) -> &'static str {
        self.name
    }

    pub const fn effect(&self) -> &E {
        &self.effect
    }

    pub fn effect_mut(&mut self) -> &mut E {
        &mut self.effect
    }
}

/// Fixed ordered sequence of effects, indexed `0..len`
///
/// The order never changes after construction; the scheduler refuses to
/// start with an empty library.
#[derive(Debug, Clone)]
pub struct EffectLibrary<E, const CAP: usize> {
    entries: Vec<EffectDescriptor<E>, CAP>,
}

/// Library holding every built-in effect
pub type BuiltinLibrary = EffectLibrary<EffectSlot, BUILTIN_EFFECT_COUNT>;

impl<E, const CAP: usize> Default for EffectLibrary<E, CAP> {
    fn default() -> Self {
        Self::new()
    }
}

impl<E, const CAP: usize> EffectLibrary<E, CAP> {
    /// Create an empty library
    pub const fn new() -> Self {
        Self {
            entries: Vec::new(),
        }
    }

    /// Append an effect at the end of the catalog
    pub fn push(&mut self, name: &'static str, effect: E) -> Result<(), SchedulerError> {
        self.entries
            .push(EffectDescriptor::new(name, effect))
            .map_err(|_| SchedulerError::LibraryFull)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Name of the effect at `index`
    pub fn name(&self, index: usize) -> Option<&'static str> {
        self.entries.get(index).map(EffectDescriptor::name)
    }

    pub fn get(&self, index: usize) -> Option<&EffectDescriptor<E>> {
        self.entries.get(index)
    }

    pub fn get_mut(&mut self, index: usize) -> Option<&mut EffectDescriptor<E>> {
        self.entries.get_mut(index)
    }

    pub fn iter(&self) -> impl Iterator<Item = &EffectDescriptor<E>> {
        self.entries.iter()
    }
}

impl<E: Effect, const CAP: usize> EffectLibrary<E, CAP> {
    /// Build a library from `(name, effect)` pairs
    pub fn from_entries<I>(entries: I) -> Result<Self, SchedulerError>
    where
        I: IntoIterator<Item = (&'static str, E)>,
    {
        let mut library = Self::new();
        for (name, effect) in entries {
            library.push(name, effect)?;
        }
        Ok(library)
    }
}

const _: () = assert!(BUILTIN_EFFECT_COUNT == EffectId::ALL.len());

impl BuiltinLibrary {
    /// All built-in effects in catalog order
    pub fn builtin(step_delay: Duration) -> Self {
        let mut library = Self::new();
        for id in EffectId::ALL {
            // Capacity equals the number of ids, checked above
            let _ = library.push(id.display_name(), id.to_slot(step_delay));
        }
        library
    }
}

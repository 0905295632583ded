/*
 * ==========================================================================
 * KOALCODE - Code that Clings!
 * ==========================================================================
 *
 * License:
 * This file is part of the KoalCode programming language project.
 *
 * KoalCode is dual-licensed under the terms of:
 *   - The MIT license
 *   - The Apache License, Version 2.0
 *
 * You may choose either license to govern your use of this software.
 *
 * Unless required by applicable law or agreed to in writing, software
 * distributed under these licenses is distributed on an "AS IS" BASIS,
 * WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
 *
 * ==========================================================================
 */

use std::cell::RefCell;
use std::rc::Rc;

/// Size charged per bound value when measuring a frame against a memory
/// budget, matching the width of the language's one value type.
const VALUE_SIZE: usize = std::mem::size_of::<f64>();

/// One environment frame: insertion-ordered name→value bindings plus an
/// optional parent link. Only the single global frame has no parent.
///
/// Lookup walks the frame itself, then its ancestors outward. Assignment
/// never touches an ancestor: an existing binding in this frame is
/// mutated in place, otherwise a new binding is created here. Writes
/// therefore shadow outer bindings instead of writing through to them.
///
/// Bindings are kept in insertion order because the evict budget mode
/// removes the oldest-inserted binding first (FIFO, not LRU).
#[derive(Debug, Clone, Default)]
pub struct Frame {
    slots: Vec<(String, f64)>,
    parent: Option<Rc<RefCell<Frame>>>,
}

impl Frame {
    /// Creates the global frame.
    pub fn root() -> Rc<RefCell<Frame>> {
        Rc::new(RefCell::new(Frame {
            slots: Vec::new(),
            parent: None,
        }))
    }

    /// Creates a call frame chained to the caller's active frame.
    pub fn child(parent: Rc<RefCell<Frame>>) -> Rc<RefCell<Frame>> {
        Rc::new(RefCell::new(Frame {
            slots: Vec::new(),
            parent: Some(parent),
        }))
    }

    /// Resolves a name against this frame, then its ancestors.
    pub fn get(&self, name: &str) -> Option<f64> {
        for (slot, value) in &self.slots {
            if slot == name {
                return Some(*value);
            }
        }

        if let Some(parent) = &self.parent {
            return parent.borrow().get(name);
        }

        None
    }

    /// Binds `name` in this frame only. Mutates an existing binding in
    /// place; otherwise appends a new one. Ancestors are never searched
    /// or mutated.
    pub fn set(&mut self, name: &str, value: f64) {
        for (slot, existing) in &mut self.slots {
            if slot == name {
                *existing = value;
                return;
            }
        }

        self.slots.push((name.to_string(), value));
    }

    /// Drops every binding in this frame (reset budget mode).
    pub fn clear(&mut self) {
        self.slots.clear();
    }

    /// Removes the oldest-inserted binding. Returns false when the frame
    /// is already empty.
    pub fn evict_oldest(&mut self) -> bool {
        if self.slots.is_empty() {
            return false;
        }
        self.slots.remove(0);
        true
    }

    /// Approximate frame size used for budget enforcement:
    /// name length + 1 byte per binding name, plus a fixed size per value.
    pub fn approx_size(&self) -> usize {
        self.slots
            .iter()
            .map(|(name, _)| name.len() + 1 + VALUE_SIZE)
            .sum()
    }

    /// Number of bindings in this frame alone.
    pub fn len(&self) -> usize {
        self.slots.len()
    }

    pub fn is_empty(&self) -> bool {
        self.slots.is_empty()
    }

    /// Binding names in insertion order. Used by budget tests and
    /// diagnostics; ancestors are not included.
    pub fn names(&self) -> Vec<String> {
        self.slots.iter().map(|(name, _)| name.clone()).collect()
    }
}

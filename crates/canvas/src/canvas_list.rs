use std::fmt;
use std::io::{self, Write};

use euclid::point2;
use itertools::Itertools;

use shapes::{Shape, ShapeObject};

use crate::error::CanvasError;

type Link = Option<Box<ShapeNode>>;

struct ShapeNode {
    value: ShapeObject,
    next: Link,
}

/// An ordered, singly-linked collection of owned shapes. Positions count
/// from the head, so position 0 is the front of the canvas.
pub struct CanvasList {
    head: Link,
    len: usize,
}

impl CanvasList {
    pub fn new() -> CanvasList {
        CanvasList { head: None, len: 0 }
    }

    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.head.is_none()
    }

    pub fn front(&self) -> Option<&dyn Shape> {
        self.head.as_deref().map(|node| &*node.value)
    }

    pub fn push_front(&mut self, shape: ShapeObject) {
        self.head = Some(Box::new(ShapeNode {
            value: shape,
            next: self.head.take(),
        }));
        self.len += 1;
    }

    pub fn push_back(&mut self, shape: ShapeObject) {
        self.insert_at_slot(self.len, shape);
    }

    /// Inserts `shape` as the element following position `index`. On an
    /// empty canvas, index 0 makes the shape the head; `index == len()`
    /// appends at the tail, so every index in `0..=len()` is accepted.
    /// Anything larger leaves the canvas unchanged.
    pub fn insert_after(&mut self, index: usize, shape: ShapeObject) -> Result<(), CanvasError> {
        if index > self.len {
            return Err(CanvasError::IndexOutOfRange {
                index,
                len: self.len,
            });
        }
        self.insert_at_slot((index + 1).min(self.len), shape);
        Ok(())
    }

    // Walks `slot` links from the head and splices a new node in at that
    // link. Callers guarantee `slot <= len`.
    fn insert_at_slot(&mut self, slot: usize, shape: ShapeObject) {
        let mut link = &mut self.head;
        for _ in 0..slot {
            let Some(node) = link else { break };
            link = &mut node.next;
        }
        *link = Some(Box::new(ShapeNode {
            value: shape,
            next: link.take(),
        }));
        self.len += 1;
    }

    /// Removes and destroys the shape at `index`. Out-of-range indices are
    /// quietly ignored.
    pub fn remove_at(&mut self, index: usize) {
        if index >= self.len {
            return;
        }
        let mut link = &mut self.head;
        for _ in 0..index {
            let Some(node) = link else { return };
            link = &mut node.next;
        }
        if let Some(node) = link.take() {
            *link = node.next;
            self.len -= 1;
        }
    }

    pub fn pop_front(&mut self) -> Option<ShapeObject> {
        let node = self.head.take()?;
        self.head = node.next;
        self.len -= 1;
        Some(node.value)
    }

    pub fn pop_back(&mut self) -> Option<ShapeObject> {
        let last = self.len.checked_sub(1)?;
        let mut link = &mut self.head;
        for _ in 0..last {
            let Some(node) = link else { break };
            link = &mut node.next;
        }
        let node = link.take()?;
        self.len -= 1;
        Some(node.value)
    }

    /// Position of the first shape sitting at exactly `(x, y)`, scanning
    /// from the front.
    pub fn find(&self, x: i32, y: i32) -> Option<usize> {
        self.iter()
            .position(|shape| shape.position() == point2(x, y))
    }

    pub fn shape_at(&self, index: usize) -> Option<&dyn Shape> {
        self.iter().nth(index)
    }

    pub fn shape_at_mut(&mut self, index: usize) -> Option<&mut (dyn Shape + 'static)> {
        if index >= self.len {
            return None;
        }
        let mut current = self.head.as_deref_mut();
        for _ in 0..index {
            current = current.and_then(|node| node.next.as_deref_mut());
        }
        current.map(|node| &mut *node.value)
    }

    /// Drops every shape. Unlinks one node at a time so a long canvas
    /// cannot recurse through the whole chain on drop.
    pub fn clear(&mut self) {
        let mut next = self.head.take();
        while let Some(mut node) = next {
            next = node.next.take();
        }
        self.len = 0;
    }

    pub fn iter(&self) -> Iter<'_> {
        Iter {
            next: self.head.as_deref(),
            remaining: self.len,
        }
    }

    /// The `describe()` line of every shape, front to back.
    pub fn descriptions(&self) -> Vec<String> {
        self.iter().map(|shape| shape.describe()).collect_vec()
    }

    /// Writes one description line per shape, in canvas order.
    pub fn draw(&self, sink: &mut impl Write) -> io::Result<()> {
        for shape in self {
            writeln!(sink, "{shape}")?;
        }
        Ok(())
    }

    /// Writes one identity line per shape. Slots are canvas positions, the
    /// stable stand-in for storage addresses.
    pub fn print_inventory(&self, sink: &mut impl Write) -> io::Result<()> {
        for (slot, shape) in self.iter().enumerate() {
            writeln!(sink, "slot: {slot}\tkind: {}", shape.kind())?;
        }
        Ok(())
    }
}

impl Default for CanvasList {
    fn default() -> CanvasList {
        CanvasList::new()
    }
}

impl Clone for CanvasList {
    fn clone(&self) -> CanvasList {
        self.iter()
            .map(|shape| dyn_clone::clone_box(shape))
            .collect()
    }
}

impl Drop for CanvasList {
    fn drop(&mut self) {
        self.clear();
    }
}

impl fmt::Debug for CanvasList {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.iter()).finish()
    }
}

impl FromIterator<ShapeObject> for CanvasList {
    fn from_iter<I: IntoIterator<Item = ShapeObject>>(shapes: I) -> CanvasList {
        let mut list = CanvasList::new();
        for shape in shapes {
            list.push_back(shape);
        }
        list
    }
}

pub struct Iter<'a> {
    next: Option<&'a ShapeNode>,
    remaining: usize,
}

impl<'a> Iterator for Iter<'a> {
    type Item = &'a (dyn Shape + 'static);

    fn next(&mut self) -> Option<Self::Item> {
        let node = self.next?;
        self.next = node.next.as_deref();
        self.remaining -= 1;
        Some(&*node.value)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

impl ExactSizeIterator for Iter<'_> {}

impl<'a> IntoIterator for &'a CanvasList {
    type Item = &'a (dyn Shape + 'static);
    type IntoIter = Iter<'a>;

    fn into_iter(self) -> Iter<'a> {
        self.iter()
    }
}

pub struct IntoIter(CanvasList);

impl Iterator for IntoIter {
    type Item = ShapeObject;

    fn next(&mut self) -> Option<ShapeObject> {
        self.0.pop_front()
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.0.len, Some(self.0.len))
    }
}

impl ExactSizeIterator for IntoIter {}

impl IntoIterator for CanvasList {
    type Item = ShapeObject;
    type IntoIter = IntoIter;

    fn into_iter(self) -> IntoIter {
        IntoIter(self)
    }
}

//! Ordered path of distinct vertices.
//!
//! The sequence gives positional access; an `FxHashSet` mirrors it so that
//! membership tests stay O(1) in the search hot loop. Start and end are always
//! read off the sequence rather than stored separately.

use std::fmt;

use rustc_hash::FxHashSet;

use crate::graph::Vertex;

#[derive(Debug, Clone, Default)]
pub struct Path {
    /// Vertices in path order.
    sequence: Vec<Vertex>,
    /// Same vertices as `sequence`, for membership tests.
    members: FxHashSet<Vertex>,
}

impl Path {
    /// Creates an empty path.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a path holding only `vertex`.
    pub fn single(vertex: Vertex) -> Self {
        let mut path = Self::new();
        path.push_end(vertex);
        path
    }

    /// Builds a path from vertices in order.
    ///
    /// # Panics
    ///
    /// Panics if a vertex repeats.
    pub fn from_vertices(vertices: &[Vertex]) -> Self {
        let mut path = Self::new();
        for &vertex in vertices {
            path.push_end(vertex);
        }
        path
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.sequence.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.sequence.is_empty()
    }

    #[inline]
    pub fn start(&self) -> Option<Vertex> {
        self.sequence.first().copied()
    }

    #[inline]
    pub fn end(&self) -> Option<Vertex> {
        self.sequence.last().copied()
    }

    /// The vertices in path order.
    #[inline]
    pub fn vertices(&self) -> &[Vertex] {
        &self.sequence
    }

    #[inline]
    pub fn contains(&self, vertex: Vertex) -> bool {
        self.members.contains(&vertex)
    }

    /// Returns true if any of `vertices` is already on the path.
    pub fn contains_any<I>(&self, vertices: I) -> bool
    where
        I: IntoIterator<Item = Vertex>,
    {
        vertices.into_iter().any(|vertex| self.contains(vertex))
    }

    /// Appends `vertex` as the new end.
    ///
    /// # Panics
    ///
    /// Panics if `vertex` is already on the path.
    #[inline]
    pub fn push_end(&mut self, vertex: Vertex) {
        assert!(
            self.members.insert(vertex),
            "vertex {vertex} is already on the path"
        );
        self.sequence.push(vertex);
    }

    /// Removes and returns the end vertex.
    ///
    /// # Panics
    ///
    /// Panics if the path is empty.
    #[inline]
    pub fn pop_end(&mut self) -> Vertex {
        let Some(vertex) = self.sequence.pop() else {
            panic!("cannot pop the end of an empty path");
        };
        self.members.remove(&vertex);
        vertex
    }

    /// Inserts `vertex` right after `after`, or at the front when `after` is
    /// `None`.
    ///
    /// # Panics
    ///
    /// Panics if `vertex` is already on the path or `after` is not on it.
    pub fn insert_after(&mut self, vertex: Vertex, after: Option<Vertex>) {
        let index = match after {
            None => 0,
            Some(anchor) => match self.sequence.iter().position(|&v| v == anchor) {
                Some(position) => position + 1,
                None => panic!("anchor vertex {anchor} is not on the path"),
            },
        };
        assert!(
            self.members.insert(vertex),
            "vertex {vertex} is already on the path"
        );
        self.sequence.insert(index, vertex);
    }
}

impl PartialEq for Path {
    fn eq(&self, other: &Self) -> bool {
        self.sequence == other.sequence
    }
}

impl Eq for Path {}

/// Renders as `|v1->v2->...->vk|`.
impl fmt::Display for Path {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("|")?;
        for (i, vertex) in self.sequence.iter().enumerate() {
            if i > 0 {
                f.write_str("->")?;
            }
            write!(f, "{vertex}")?;
        }
        f.write_str("|")
    }
}

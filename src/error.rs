// Copyright 2015 The Rust Project Developers. See the COPYRIGHT
// file at the top-level directory of this distribution and at
// http://rust-lang.org/COPYRIGHT.
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

use std::collections::TryReserveError;

use thiserror::Error;

/// Failures reported by [`MinHeap`](crate::MinHeap).
///
/// A heap that returns one of these is left exactly as it was before the call.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum Error {
    /// Bulk-load bounds where `end` precedes `begin` or runs past the source.
    #[error("bounds {begin}..{end} are invalid for a source of length {len}")]
    InvalidArgument { begin: usize, end: usize, len: usize },

    /// `top` or `pop` on a heap with no live items.
    #[error("cannot {op} an empty heap")]
    EmptyHeap { op: &'static str },

    /// `reserve` to fewer slots than there are live items.
    #[error("cannot reserve {requested} slots, the heap holds {len} items")]
    ReserveBelowLength { requested: usize, len: usize },

    /// The backing storage could not be (re)allocated to `requested` slots.
    #[error("failed to allocate storage for {requested} items")]
    AllocationFailure {
        requested: usize,
        #[source]
        source: Option<TryReserveError>,
    },
}

impl Error {
    #[cold]
    pub(crate) fn empty_heap(op: &'static str) -> Self {
        Error::EmptyHeap { op }
    }

    #[cold]
    pub(crate) fn allocation_failure(requested: usize, source: Option<TryReserveError>) -> Self {
        Error::AllocationFailure { requested, source }
    }

    /// Returns `true` if the operation was refused because of the heap's current
    /// contents rather than a bad argument or a resource problem.
    pub fn is_invalid_state(&self) -> bool {
        matches!(self, Error::EmptyHeap { .. } | Error::ReserveBelowLength { .. })
    }
}

pub type Result<T> = std::result::Result<T, Error>;

// Copyright (c) 2025 Felix Kahle.
//
// Permission is hereby granted, free of charge, to any person obtaining
// a copy of this software and associated documentation files (the
// "Software"), to deal in the Software without restriction, including
// without limitation the rights to use, copy, modify, merge, publish,
// distribute, sublicense, and/or sell copies of the Software, and to
// permit persons to whom the Software is furnished to do so, subject to
// the following conditions:
//
// The above copyright notice and this permission notice shall be
// included in all copies or substantial portions of the Software.
//
// THE SOFTWARE IS PROVIDED "AS IS", WITHOUT WARRANTY OF ANY KIND,
// EXPRESS OR IMPLIED, INCLUDING BUT NOT LIMITED TO THE WARRANTIES OF
// MERCHANTABILITY, FITNESS FOR A PARTICULAR PURPOSE AND
// NONINFRINGEMENT. IN NO EVENT SHALL THE AUTHORS OR COPYRIGHT HOLDERS BE
// LIABLE FOR ANY CLAIM, DAMAGES OR OTHER LIABILITY, WHETHER IN AN ACTION
// OF CONTRACT, TORT OR OTHERWISE, ARISING FROM, OUT OF OR IN CONNECTION
// WITH THE SOFTWARE OR THE USE OR OTHER DEALINGS IN THE SOFTWARE.

//! Gambit‑Model: data model for the N‑Queens trace engine
//!
//! Holds the types shared between the search engine and the delivery
//! layer: the mutable occupancy board, grid cell positions, the step
//! events that make up a search trace, and the wire request/response
//! shapes consumed by the visualization front end.
//!
//! Module map
//! - `board`: the N×N occupancy grid mutated during search.
//! - `position`: a (row, column) cell coordinate.
//! - `event`: step events recording one search decision each, with a
//!   full board snapshot.
//! - `api`: serde wire types for the solve and safe‑position endpoints.
//!
//! Everything here is plain data; no search logic lives in this crate.

pub mod api;
pub mod board;
pub mod event;
pub mod position;

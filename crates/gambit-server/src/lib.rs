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

//! Gambit‑Server: HTTP delivery layer for the N‑Queens trace engine
//!
//! Exposes the search engine over a small JSON API for the
//! visualization front end:
//! - `POST /api/nqueens/solve` -- run a traced search.
//! - `GET /api/nqueens/safe-positions` -- list cells not attacked by
//!   one placed queen.
//!
//! The server owns all request validation the engine deliberately
//! leaves to its collaborator: the supported board size range (4–20)
//! and start‑cell bounds are rejected here with descriptive 400s
//! before the engine ever runs. Each accepted request constructs its
//! own search session; no engine state is shared across requests.

pub mod error;
pub mod handlers;
pub mod router;

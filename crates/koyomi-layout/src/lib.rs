//! Calendar layout engine.
//!
//! Turns a view state (anchor date, view mode, live "now") and a read-only
//! event collection into renderer-ready tuples: date grids for the visible
//! frame, vertical intervals on an hour-scaled track, and non-colliding
//! column assignments for concurrent events. The presentation layer consumes
//! the output without doing any date or overlap computation of its own.

pub mod grid;
pub mod index;
pub mod pack;
pub mod track;
pub mod view;

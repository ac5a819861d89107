//! # gramlex
//!
//! A scanner for restricted English sentence text.
//!
//! The scanner splits a sentence into maximal runs of letters and spaces,
//! producing a flat token stream terminated by an end sentinel. Two scan
//! variants are provided: a strict one that fails on the first unrecognized
//! character, and a collecting one that records every offending span so an
//! editor can highlight all of them in a single pass. See the
//! [scan module](gram::scan) for the entry points.

pub mod gram;

//! Pattern compilation for path matching.
//!
//! `compiler` turns a list of path patterns into one `CompositeMatcher` and
//! memoises compiled matchers in an `ExpiringCache`.

pub mod compiler;

//! Path type definitions.

/// One object key in a path.
pub type PathStep = String;

/// An owned key path. Borrowed paths are plain `&[S]` with `S: AsRef<str>`.
pub type Path = Vec<PathStep>;

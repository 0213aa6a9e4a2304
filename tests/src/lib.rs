// Meta-package for the cross-crate scenarios under `integrations/`.
// It has no code of its own.

pub use scriptgraph;

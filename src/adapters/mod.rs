// Adapters layer: concrete name sources for the engine.

pub mod stdin;

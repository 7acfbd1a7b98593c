//! CLI library components for the metabolite annotation unifier.

pub mod logging;

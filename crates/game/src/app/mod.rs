pub(crate) mod bootstrap;
mod demo_map;
pub(crate) mod loop_runner;

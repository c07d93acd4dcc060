pub mod ai;
pub mod calculators;
pub mod engine;
pub mod rng;
pub mod state;

#[cfg(test)]
pub(crate) mod tests;

pub mod datagen;
pub mod evaluate;
pub mod matching;
pub mod model;
pub mod params;
pub mod report;
pub mod selectors;
pub mod store;
pub mod strategies;
pub mod util;

#[cfg(test)]
pub(crate) mod test_support;

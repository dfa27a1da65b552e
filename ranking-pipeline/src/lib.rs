pub mod scored;
pub mod selector;
pub mod strategy;
pub mod util;

//! learnlist library exports for testing

pub mod core;
pub mod markup;
pub mod oneshot;
pub mod source;
pub mod tui;

#[cfg(test)]
pub mod test_support;

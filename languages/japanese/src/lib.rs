pub mod daijisen;
pub mod heading;
pub mod jmnedict;

#[cfg(test)]
mod tests;

pub use daijisen::DaijisenExtractor;
pub use heading::{Heading, HeadingParser};
pub use jmnedict::{JmnedictExtractor, compute_tag_meta};

pub mod error;
pub mod loaders;
pub mod types;

pub use error::LoadError;
pub use loaders::epwing::EpwingLoader;
pub use loaders::jmnedict::JmnedictLoader;
pub use types::{Jmnedict, JmnedictEntry, JmnedictKanji, JmnedictReading, JmnedictTranslation};

// Moderable: live content-moderation verdicts for collections of text.
//
// This is the library root. A host owns text fragments, classifies each
// one against a shared threshold, and re-classifies a fragment every time
// its content is written.

pub mod classifier;
pub mod config;
pub mod error;
pub mod fragment;
pub mod moderation;
pub mod output;

pub use classifier::logora::LogoraClassifier;
pub use classifier::traits::ModerationClassifier;
pub use error::ModerationError;
pub use fragment::Fragment;
pub use moderation::host::ModerationHost;
pub use moderation::moderable::Moderable;
pub use moderation::rate::ModerationRate;
pub use moderation::verdict::Verdict;

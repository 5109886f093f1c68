// Moderation classifiers — trait-based abstraction over scoring backends.
//
// ModerationClassifier is the seam. LogoraClassifier talks to the hosted
// moderation API; tests plug in scripted classifiers instead.

pub mod logora;
pub mod traits;

// Moderation — hosts that keep a live verdict for each of their fragments.
//
// The host owns the fragments and a verdict store parallel to them; the
// rate is a shared threshold cell; Moderable lets other types embed a host
// and expose the same surface.

pub mod host;
pub mod moderable;
pub mod rate;
pub mod verdict;

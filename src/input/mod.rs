// SignGlove — Input Conditioning
//
// Per-channel filters that turn raw pin readings into the boolean hand
// state the classifier consumes.  Every channel owns its own ring buffer;
// nothing is shared between channels.

pub mod flex;
pub mod touch;

pub use flex::FlexChannel;
pub use touch::TouchChannel;

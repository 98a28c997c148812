mod cancel;
mod draw;
mod score;
mod simulate;

pub use cancel::CancellationToken;
pub use draw::draw;
pub(crate) use draw::draw_unchecked;
pub use score::score;
pub use simulate::{simulate, Simulator};

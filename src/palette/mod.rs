mod color;
mod effect;
pub mod order;
mod store;

pub use color::{ColorId, ColorName, ColorRecord, Hex, Rgb, DEFAULT_HEX, PENDING_NAME};
pub use effect::{Effect, EffectSink};
pub use store::{PaletteStore, DEFAULT_FALLBACK_NAME};

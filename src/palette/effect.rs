use super::color::{ColorId, ColorRecord, Hex};

/// Side effect requested by a palette mutation
///
/// The store never waits on these. A sink decides how (and whether) they run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Effect {
    /// Write the record to durable storage
    Upsert(ColorRecord),
    /// Remove the record from durable storage
    Delete(ColorId),
    /// Resolve a display name for the record's hex
    LookupName { id: ColorId, hex: Hex },
}

/// Receives effects from the palette store
pub trait EffectSink {
    fn dispatch(&self, effect: Effect);
}

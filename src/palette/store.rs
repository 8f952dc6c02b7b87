use std::collections::HashMap;

use super::color::{ColorId, ColorName, ColorRecord, Hex};
use super::effect::{Effect, EffectSink};
use super::order::{changed_since, order_map, reindex, sort_by_order};

/// Name used when the naming service knows no name for a hex
pub const DEFAULT_FALLBACK_NAME: &str = "New Color";

/// The palette of one session
///
/// Records are kept sorted by `order`, and the orders are dense after every
/// public mutation. Durable writes and name lookups leave as [`Effect`]s; their
/// outcome never changes the in-memory orders.
pub struct PaletteStore<S> {
    records: Vec<ColorRecord>,
    sink: S,
    fallback_name: String,
}

impl<S: EffectSink> PaletteStore<S> {
    /// Create an empty palette
    pub fn new(sink: S) -> Self {
        Self {
            records: Vec::new(),
            sink,
            fallback_name: DEFAULT_FALLBACK_NAME.to_string(),
        }
    }

    /// Create a palette from a stored snapshot
    pub fn from_snapshot(records: Vec<ColorRecord>, sink: S) -> Self {
        let mut store = Self::new(sink);
        store.replace(records);
        store
    }

    /// Swap in a stored snapshot
    ///
    /// The snapshot is sorted by order and reindexed. Records whose order had
    /// to change are written back.
    pub fn replace(&mut self, mut records: Vec<ColorRecord>) {
        let before = order_map(&records);
        sort_by_order(&mut records);
        self.records = reindex(records);

        let healed = self.upsert_changed(&before);
        if healed > 0 {
            tracing::info!(healed, "normalized stored palette order");
        }
    }

    pub fn with_fallback_name(mut self, name: impl Into<String>) -> Self {
        self.fallback_name = name.into();
        self
    }

    pub fn records(&self) -> &[ColorRecord] {
        &self.records
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn get(&self, id: ColorId) -> Option<&ColorRecord> {
        self.records.iter().find(|r| r.id == id)
    }

    pub fn get_by_order(&self, order: u32) -> Option<&ColorRecord> {
        self.records.iter().find(|r| r.order == order)
    }

    pub fn sink(&self) -> &S {
        &self.sink
    }

    /// Append a record at `len + 1` and persist it
    pub fn add(&mut self, record: ColorRecord) -> &ColorRecord {
        let record = ColorRecord {
            order: self.next_order(),
            ..record
        };

        tracing::debug!(id = %record.id, order = record.order, "add color");
        self.sink.dispatch(Effect::Upsert(record.clone()));
        self.records.push(record);

        &self.records[self.records.len() - 1]
    }

    /// Live edit of the record at `order`: new hex, derived rgb, pending name
    ///
    /// Malformed hex is ignored. Nothing is persisted; see [`Self::commit_color`].
    /// Returns whether a record was updated.
    pub fn update_fields(&mut self, order: u32, hex: &str) -> bool {
        let hex = match Hex::parse(hex) {
            Ok(hex) => hex,
            Err(err) => {
                tracing::debug!(order, %err, "ignoring color input");
                return false;
            }
        };

        let Some(record) = self.records.iter_mut().find(|r| r.order == order) else {
            return false;
        };

        record.rgb = Some(hex.to_rgb());
        record.hex = hex;
        record.name = ColorName::Pending;
        true
    }

    /// End of an edit: request a name for the record's current hex
    pub fn commit_color(&mut self, id: ColorId) -> bool {
        let Some(record) = self.get(id) else {
            return false;
        };

        let hex = record.hex.clone();
        tracing::debug!(%id, %hex, "commit color");
        self.sink.dispatch(Effect::LookupName { id, hex });
        true
    }

    /// Apply a name lookup result and persist the named record
    ///
    /// A result for a record that was deleted, or whose hex changed since the
    /// lookup was issued, is dropped.
    pub fn apply_name(&mut self, id: ColorId, hex: &Hex, name: Option<String>) -> bool {
        let Some(record) = self.records.iter_mut().find(|r| r.id == id) else {
            return false;
        };

        if record.hex != *hex {
            tracing::debug!(%id, looked_up = %hex, current = %record.hex, "dropping stale name");
            return false;
        }

        let name = name
            .filter(|n| !n.trim().is_empty())
            .unwrap_or_else(|| self.fallback_name.clone());
        record.name = ColorName::Named(name);

        self.sink.dispatch(Effect::Upsert(record.clone()));
        true
    }

    /// Remove a record and close the gap it leaves
    ///
    /// Survivors keep their relative order. Besides the delete, every survivor
    /// whose order moved is written back.
    pub fn delete(&mut self, id: ColorId) -> Option<ColorRecord> {
        let index = self.records.iter().position(|r| r.id == id)?;

        let before = order_map(&self.records);
        let removed = self.records.remove(index);
        self.records = reindex(std::mem::take(&mut self.records));

        tracing::debug!(%id, order = removed.order, "delete color");
        self.sink.dispatch(Effect::Delete(id));
        self.upsert_changed(&before);

        Some(removed)
    }

    /// Move a record from `old_order` to `new_order`
    ///
    /// Any other record at `new_order` takes `old_order`, then the palette is
    /// sorted and reindexed. Every record whose order changed is written back.
    /// Returns whether anything moved.
    pub fn reorder(&mut self, id: ColorId, old_order: u32, new_order: u32) -> bool {
        if old_order == new_order || self.get(id).is_none() {
            return false;
        }

        let before = order_map(&self.records);

        for record in &mut self.records {
            if record.id == id {
                record.order = new_order;
            } else if record.order == new_order {
                record.order = old_order;
            }
        }

        sort_by_order(&mut self.records);
        self.records = reindex(std::mem::take(&mut self.records));

        let moved = self.upsert_changed(&before);
        tracing::debug!(%id, old_order, new_order, moved, "reorder color");
        moved > 0
    }

    fn next_order(&self) -> u32 {
        self.records.len() as u32 + 1
    }

    fn upsert_changed(&self, before: &HashMap<ColorId, u32>) -> usize {
        let changed = changed_since(before, &self.records);
        for record in &changed {
            self.sink.dispatch(Effect::Upsert((*record).clone()));
        }
        changed.len()
    }
}

use tracing::debug;

use super::data::{LayerId, ShadowLayer};
use super::edit::{ShadowParams, ShadowUpdate};

/// The LayerStore owns the ordered shadow layers and the active selection.
///
/// It is the single source of truth for the editor. Everything visible on
/// screen (preview, code panel) is derived from [`LayerStore::layers`] on
/// demand, never stored alongside it.
///
/// Invariant: `active` is either `None` or the id of a layer in `layers`.
/// Every mutating method below preserves it.
///
/// Operations that reference a missing id are silent no-ops. A remove and an
/// update can be queued by the same UI tick, so a stale id is expected.
#[derive(Debug, Clone, Default)]
pub struct LayerStore {
    layers: Vec<ShadowLayer>,
    active: Option<LayerId>,
    next_id: u64,
}

impl LayerStore {
    /// Create an empty store with no selection
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a store seeded from a preset
    pub fn with_preset(preset: &[ShadowParams]) -> Self {
        let mut store = Self::new();
        store.load_preset(preset);
        store
    }

    // ========== Read access ==========

    /// All layers in paint order
    pub fn layers(&self) -> &[ShadowLayer] {
        &self.layers
    }

    pub fn active_layer_id(&self) -> Option<LayerId> {
        self.active
    }

    /// The layer the property panel is editing, if any
    pub fn active_layer(&self) -> Option<&ShadowLayer> {
        self.active.and_then(|id| self.get(id))
    }

    pub fn get(&self, id: LayerId) -> Option<&ShadowLayer> {
        self.layers.iter().find(|layer| layer.id == id)
    }

    /// Index of a layer in the collection
    pub fn position(&self, id: LayerId) -> Option<usize> {
        self.layers.iter().position(|layer| layer.id == id)
    }

    pub fn len(&self) -> usize {
        self.layers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.layers.is_empty()
    }

    // ========== Mutations ==========

    /// Append a layer with default parameters and make it active
    pub fn add_layer(&mut self) -> LayerId {
        let id = self.generate_id();
        self.layers.push(ShadowLayer {
            id,
            params: ShadowParams::default(),
        });
        self.active = Some(id);

        debug!(%id, count = self.layers.len(), "added layer");
        id
    }

    /// Remove a layer, keeping the relative order of the rest
    ///
    /// If the removed layer was active, the selection moves to the layer
    /// just before it (or the new first layer), or clears when nothing is left.
    pub fn remove_layer(&mut self, id: LayerId) {
        let Some(index) = self.position(id) else {
            debug!(%id, "remove ignored, layer not found");
            return;
        };

        self.layers.remove(index);

        if self.active == Some(id) {
            self.active = if self.layers.is_empty() {
                None
            } else {
                let next = index.saturating_sub(1).min(self.layers.len() - 1);
                Some(self.layers[next].id)
            };
        }

        debug!(%id, count = self.layers.len(), "removed layer");
    }

    /// Replace one field of one layer
    ///
    /// The value is stored as given; range clamping is the caller's job.
    pub fn update_layer(&mut self, id: LayerId, update: ShadowUpdate) {
        match self.layers.iter_mut().find(|layer| layer.id == id) {
            Some(layer) => layer.params.apply(update),
            None => debug!(%id, ?update, "update ignored, layer not found"),
        }
    }

    /// Select a layer, or clear the selection with `None`
    ///
    /// Ids that are not in the collection are ignored so the selection can
    /// never dangle.
    pub fn set_active_layer_id(&mut self, id: Option<LayerId>) {
        match id {
            Some(id) if self.position(id).is_none() => {
                debug!(%id, "selection ignored, layer not found");
            }
            _ => self.active = id,
        }
    }

    /// Move the layer at `old_index` to `new_index`
    ///
    /// Layers in between shift by one to close and open the gap. Out of range
    /// indices leave the collection untouched.
    pub fn reorder_layers(&mut self, old_index: usize, new_index: usize) {
        let len = self.layers.len();
        if old_index >= len || new_index >= len {
            debug!(old_index, new_index, len, "reorder ignored, index out of range");
            return;
        }
        if old_index == new_index {
            return;
        }

        let layer = self.layers.remove(old_index);
        self.layers.insert(new_index, layer);
    }

    pub fn toggle_layer_visibility(&mut self, id: LayerId) {
        match self.layers.iter_mut().find(|layer| layer.id == id) {
            Some(layer) => layer.params.visible = !layer.params.visible,
            None => debug!(%id, "toggle ignored, layer not found"),
        }
    }

    /// Replace every layer with a fresh copy of `preset`
    ///
    /// Each copy gets a new id. The first layer becomes active.
    pub fn load_preset(&mut self, preset: &[ShadowParams]) {
        let mut layers = Vec::with_capacity(preset.len());
        for params in preset {
            layers.push(ShadowLayer {
                id: self.generate_id(),
                params: params.clone(),
            });
        }

        self.active = layers.first().map(|layer| layer.id);
        self.layers = layers;

        debug!(count = self.layers.len(), "loaded preset");
    }

    fn generate_id(&mut self) -> LayerId {
        let id = LayerId(self.next_id);
        self.next_id += 1;
        id
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::{Rng, SeedableRng};
    use std::collections::HashSet;

    fn ids(store: &LayerStore) -> Vec<LayerId> {
        store.layers().iter().map(|layer| layer.id).collect()
    }

    fn assert_selection_valid(store: &LayerStore) {
        if let Some(active) = store.active_layer_id() {
            assert!(store.get(active).is_some(), "active id {} dangles", active);
        }
    }

    fn three_layers() -> (LayerStore, LayerId, LayerId, LayerId) {
        let mut store = LayerStore::new();
        let a = store.add_layer();
        let b = store.add_layer();
        let c = store.add_layer();
        (store, a, b, c)
    }

    #[test]
    fn test_add_layer_to_empty_store() {
        let mut store = LayerStore::new();
        assert!(store.is_empty());
        assert_eq!(store.active_layer_id(), None);

        let id = store.add_layer();

        assert_eq!(store.len(), 1);
        assert_eq!(store.active_layer_id(), Some(id));
        assert_eq!(store.layers()[0].params, ShadowParams::default());
    }

    #[test]
    fn test_add_layer_appends_and_selects() {
        let (mut store, a, b, c) = three_layers();
        assert_eq!(ids(&store), vec![a, b, c]);

        let d = store.add_layer();

        assert_eq!(store.len(), 4);
        assert_eq!(ids(&store).last(), Some(&d));
        assert_eq!(store.active_layer_id(), Some(d));
    }

    #[test]
    fn test_remove_active_middle_layer_selects_previous() {
        let (mut store, a, b, c) = three_layers();
        store.set_active_layer_id(Some(b));

        store.remove_layer(b);

        assert_eq!(ids(&store), vec![a, c]);
        assert_eq!(store.active_layer_id(), Some(a));
    }

    #[test]
    fn test_remove_active_first_layer_selects_new_first() {
        let (mut store, a, b, c) = three_layers();
        store.set_active_layer_id(Some(a));

        store.remove_layer(a);

        assert_eq!(ids(&store), vec![b, c]);
        assert_eq!(store.active_layer_id(), Some(b));
    }

    #[test]
    fn test_remove_last_remaining_layer_clears_selection() {
        let mut store = LayerStore::new();
        let id = store.add_layer();

        store.remove_layer(id);

        assert!(store.is_empty());
        assert_eq!(store.active_layer_id(), None);
    }

    #[test]
    fn test_remove_inactive_layer_keeps_selection() {
        let (mut store, a, b, c) = three_layers();
        assert_eq!(store.active_layer_id(), Some(c));

        store.remove_layer(a);

        assert_eq!(ids(&store), vec![b, c]);
        assert_eq!(store.active_layer_id(), Some(c));
    }

    #[test]
    fn test_remove_unknown_id_is_noop() {
        let (mut store, a, _, _) = three_layers();
        store.remove_layer(a);
        let before = store.clone();

        store.remove_layer(a);

        assert_eq!(store.layers(), before.layers());
        assert_eq!(store.active_layer_id(), before.active_layer_id());
    }

    #[test]
    fn test_update_layer_changes_only_target() {
        let (mut store, a, b, c) = three_layers();

        store.update_layer(b, ShadowUpdate::Blur(42.0));
        store.update_layer(b, ShadowUpdate::Color("#123456".to_string()));

        assert_eq!(ids(&store), vec![a, b, c]);
        assert_eq!(store.get(a).unwrap().params, ShadowParams::default());
        assert_eq!(store.get(c).unwrap().params, ShadowParams::default());

        let updated = &store.get(b).unwrap().params;
        assert_eq!(updated.blur, 42.0);
        assert_eq!(updated.color, "#123456");
        assert_eq!(updated.y, 5.0);
    }

    #[test]
    fn test_update_unknown_id_is_noop() {
        let (mut store, a, _, _) = three_layers();
        store.remove_layer(a);
        let before = store.layers().to_vec();

        store.update_layer(a, ShadowUpdate::X(99.0));

        assert_eq!(store.layers(), before.as_slice());
    }

    #[test]
    fn test_update_does_not_validate_ranges() {
        let mut store = LayerStore::new();
        let id = store.add_layer();

        store.update_layer(id, ShadowUpdate::Blur(-30.0));

        assert_eq!(store.get(id).unwrap().params.blur, -30.0);
    }

    #[test]
    fn test_set_active_layer_id() {
        let (mut store, a, _, _) = three_layers();

        store.set_active_layer_id(Some(a));
        assert_eq!(store.active_layer_id(), Some(a));
        assert_eq!(store.active_layer().map(|layer| layer.id), Some(a));

        store.set_active_layer_id(None);
        assert_eq!(store.active_layer_id(), None);
        assert!(store.active_layer().is_none());
    }

    #[test]
    fn test_set_active_ignores_unknown_id() {
        let (mut store, a, b, _) = three_layers();
        store.set_active_layer_id(Some(b));
        store.remove_layer(a);

        store.set_active_layer_id(Some(a));

        assert_eq!(store.active_layer_id(), Some(b));
    }

    #[test]
    fn test_reorder_first_to_last() {
        let (mut store, a, b, c) = three_layers();

        store.reorder_layers(0, 2);

        assert_eq!(ids(&store), vec![b, c, a]);
    }

    #[test]
    fn test_reorder_last_to_first() {
        let (mut store, a, b, c) = three_layers();

        store.reorder_layers(2, 0);

        assert_eq!(ids(&store), vec![c, a, b]);
    }

    #[test]
    fn test_reorder_is_permutation_for_every_pair() {
        let mut store = LayerStore::new();
        for _ in 0..5 {
            store.add_layer();
        }
        let original = ids(&store);
        let expected: HashSet<_> = original.iter().copied().collect();

        for i in 0..5 {
            for j in 0..5 {
                let mut copy = store.clone();
                copy.reorder_layers(i, j);

                let moved = ids(&copy);
                assert_eq!(moved[j], original[i]);
                assert_eq!(moved.iter().copied().collect::<HashSet<_>>(), expected);
                assert_eq!(moved.len(), original.len());
            }
        }
    }

    #[test]
    fn test_reorder_out_of_range_is_noop() {
        let (mut store, a, b, c) = three_layers();

        store.reorder_layers(3, 0);
        store.reorder_layers(0, 3);
        store.reorder_layers(usize::MAX, 1);

        assert_eq!(ids(&store), vec![a, b, c]);
    }

    #[test]
    fn test_reorder_keeps_selection() {
        let (mut store, a, _, _) = three_layers();
        store.set_active_layer_id(Some(a));

        store.reorder_layers(0, 2);

        assert_eq!(store.active_layer_id(), Some(a));
        assert_eq!(store.position(a), Some(2));
    }

    #[test]
    fn test_toggle_visibility_is_reversible() {
        let (mut store, _, b, _) = three_layers();
        store.update_layer(b, ShadowUpdate::Spread(3.0));

        store.toggle_layer_visibility(b);
        assert!(!store.get(b).unwrap().params.visible);
        assert_eq!(store.len(), 3);

        store.toggle_layer_visibility(b);
        let params = &store.get(b).unwrap().params;
        assert!(params.visible);
        assert_eq!(params.spread, 3.0);
    }

    #[test]
    fn test_toggle_unknown_id_is_noop() {
        let (mut store, a, _, _) = three_layers();
        store.remove_layer(a);
        let before = store.layers().to_vec();

        store.toggle_layer_visibility(a);

        assert_eq!(store.layers(), before.as_slice());
    }

    #[test]
    fn test_load_preset_copies_values_with_fresh_ids() {
        let (mut store, a, b, c) = three_layers();
        let preset = vec![
            ShadowParams::default().with(ShadowUpdate::X(8.0)),
            ShadowParams::default()
                .with(ShadowUpdate::Inset(true))
                .with(ShadowUpdate::Color("#fff".to_string())),
        ];

        store.load_preset(&preset);

        let params: Vec<_> = store.layers().iter().map(|layer| layer.params.clone()).collect();
        assert_eq!(params, preset);

        let new_ids = ids(&store);
        assert_eq!(new_ids.iter().collect::<HashSet<_>>().len(), 2);
        for old in [a, b, c] {
            assert!(!new_ids.contains(&old));
        }
        assert_eq!(store.active_layer_id(), Some(new_ids[0]));
    }

    #[test]
    fn test_load_empty_preset_clears_selection() {
        let (mut store, _, _, _) = three_layers();

        store.load_preset(&[]);

        assert!(store.is_empty());
        assert_eq!(store.active_layer_id(), None);
    }

    #[test]
    fn test_with_preset_seeds_store() {
        let preset = vec![ShadowParams::default(); 2];
        let store = LayerStore::with_preset(&preset);

        assert_eq!(store.len(), 2);
        assert_eq!(store.active_layer_id(), Some(store.layers()[0].id));
    }

    #[test]
    fn test_ids_never_reused() {
        let mut store = LayerStore::new();
        let mut seen = HashSet::new();

        for round in 0..4 {
            let id = store.add_layer();
            assert!(seen.insert(id));
            if round % 2 == 0 {
                store.remove_layer(id);
            }
            store.load_preset(&[ShadowParams::default()]);
            assert!(seen.insert(store.layers()[0].id));
        }
    }

    #[test]
    fn test_selection_stays_valid_across_mixed_operations() {
        let mut store = LayerStore::new();
        let a = store.add_layer();
        let b = store.add_layer();
        assert_selection_valid(&store);

        store.remove_layer(b);
        assert_selection_valid(&store);

        let c = store.add_layer();
        store.reorder_layers(1, 0);
        store.set_active_layer_id(Some(b));
        assert_selection_valid(&store);

        store.toggle_layer_visibility(c);
        store.remove_layer(c);
        assert_selection_valid(&store);
        assert_eq!(store.active_layer_id(), Some(a));

        store.remove_layer(a);
        assert_selection_valid(&store);
        assert_eq!(store.active_layer_id(), None);

        store.load_preset(&vec![ShadowParams::default(); 3]);
        assert_selection_valid(&store);
    }

    /// Pick an id from the collection, or one that was issued and removed
    fn pick_id(rng: &mut StdRng, store: &LayerStore, retired: &[LayerId]) -> Option<LayerId> {
        if !store.is_empty() && (retired.is_empty() || rng.gen_bool(0.8)) {
            Some(store.layers()[rng.gen_range(0..store.len())].id)
        } else if !retired.is_empty() {
            Some(retired[rng.gen_range(0..retired.len())])
        } else {
            None
        }
    }

    #[test]
    fn test_random_operation_sequences_keep_invariants() {
        let mut rng = StdRng::seed_from_u64(0x5eed_cafe);

        for _ in 0..500 {
            let mut store = LayerStore::new();
            let mut issued = HashSet::new();
            let mut retired: Vec<LayerId> = Vec::new();

            for _ in 0..40 {
                let before = store.layers().to_vec();

                match rng.gen_range(0..7) {
                    0 => {
                        let id = store.add_layer();
                        assert!(issued.insert(id), "id {} issued twice", id);
                        assert_eq!(store.len(), before.len() + 1);
                        assert_eq!(store.active_layer_id(), Some(id));
                    }
                    1 => {
                        if let Some(id) = pick_id(&mut rng, &store, &retired) {
                            let present = before.iter().any(|layer| layer.id == id);
                            store.remove_layer(id);
                            if present {
                                assert_eq!(store.len(), before.len() - 1);
                                assert!(store.get(id).is_none());
                                retired.push(id);
                            } else {
                                assert_eq!(store.layers(), before.as_slice());
                            }
                        }
                    }
                    2 => {
                        if let Some(id) = pick_id(&mut rng, &store, &retired) {
                            let blur = rng.gen_range(0.0..200.0);
                            store.update_layer(id, ShadowUpdate::Blur(blur));
                            match store.get(id) {
                                Some(layer) => assert_eq!(layer.params.blur, blur),
                                None => assert_eq!(store.layers(), before.as_slice()),
                            }
                            assert_eq!(store.len(), before.len());
                        }
                    }
                    3 => {
                        let previous = store.active_layer_id();
                        let target = if rng.gen_bool(0.1) {
                            None
                        } else {
                            pick_id(&mut rng, &store, &retired)
                        };
                        store.set_active_layer_id(target);
                        match target {
                            Some(id) if store.get(id).is_none() => {
                                assert_eq!(store.active_layer_id(), previous)
                            }
                            _ => assert_eq!(store.active_layer_id(), target),
                        }
                    }
                    4 => {
                        let bound = before.len() + 2;
                        let from = rng.gen_range(0..bound);
                        let to = rng.gen_range(0..bound);
                        store.reorder_layers(from, to);
                        if from < before.len() && to < before.len() {
                            assert_eq!(store.layers()[to].id, before[from].id);
                            let mut sorted_before: Vec<LayerId> = before.iter().map(|layer| layer.id).collect();
                            let mut sorted_after = ids(&store);
                            sorted_before.sort_unstable();
                            sorted_after.sort_unstable();
                            assert_eq!(sorted_before, sorted_after);
                        } else {
                            assert_eq!(store.layers(), before.as_slice());
                        }
                    }
                    5 => {
                        if let Some(id) = pick_id(&mut rng, &store, &retired) {
                            let was = store.get(id).map(|layer| layer.params.visible);
                            store.toggle_layer_visibility(id);
                            assert_eq!(store.get(id).map(|layer| layer.params.visible), was.map(|v| !v));
                        }
                    }
                    _ => {
                        retired.extend(ids(&store));
                        let preset = vec![ShadowParams::default(); rng.gen_range(0..4)];
                        store.load_preset(&preset);
                        assert_eq!(store.len(), preset.len());
                        for id in ids(&store) {
                            assert!(issued.insert(id), "id {} issued twice", id);
                        }
                    }
                }

                assert_selection_valid(&store);
                let unique: HashSet<LayerId> = ids(&store).into_iter().collect();
                assert_eq!(unique.len(), store.len());
                if !store.is_empty() && before.is_empty() {
                    assert!(store.active_layer_id().is_some());
                }
            }
        }
    }
}

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::state::ParamState;

/// Ten digit-keyed slots holding full parameter snapshots.
///
/// Slots are created or overwritten by an explicit store and never expire.
/// The bank itself is plain storage; transition construction on recall is the
/// integrator's job.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct PresetBank {
    slots: BTreeMap<u8, ParamState>,
}

impl PresetBank {
    pub fn new() -> Self {
        Self::default()
    }

    /// Stores `state` under `slot`, replacing any previous snapshot.
    pub fn store(&mut self, slot: u8, state: ParamState) {
        self.slots.insert(slot, state);
    }

    /// The snapshot stored under `slot`, if any.
    pub fn get(&self, slot: u8) -> Option<ParamState> {
        self.slots.get(&slot).copied()
    }

    pub fn is_empty(&self) -> bool {
        self.slots.is_empty()
    }

    pub fn len(&self) -> usize {
        self.slots.len()
    }

    /// Occupied slots in ascending order.
    pub fn entries(&self) -> impl Iterator<Item = (u8, &ParamState)> + '_ {
        self.slots.iter().map(|(slot, state)| (*slot, state))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn store_overwrites_and_get_copies() {
        let mut bank = PresetBank::new();
        assert!(bank.is_empty());
        assert_eq!(bank.get(3), None);

        let mut first = ParamState::default();
        first.zoom = 2.0;
        bank.store(3, first);
        assert_eq!(bank.get(3), Some(first));
        assert_eq!(bank.len(), 1);

        let mut second = ParamState::default();
        second.zoom = 0.5;
        bank.store(3, second);
        assert_eq!(bank.get(3), Some(second));
        assert_eq!(bank.len(), 1);
    }

    #[test]
    fn entries_are_sorted_by_slot() {
        let mut bank = PresetBank::new();
        bank.store(7, ParamState::default());
        bank.store(1, ParamState::default());
        bank.store(4, ParamState::default());
        let slots: Vec<u8> = bank.entries().map(|(slot, _)| slot).collect();
        assert_eq!(slots, vec![1, 4, 7]);
    }

    #[test]
    fn bank_round_trips_through_serde() {
        let mut bank = PresetBank::new();
        let mut state = ParamState::default();
        state.rotation = 1.25;
        state.rotation_vel = -0.01;
        bank.store(9, state);

        let json = serde_json::to_string(&bank).unwrap();
        let back: PresetBank = serde_json::from_str(&json).unwrap();
        assert_eq!(back, bank);
    }
}

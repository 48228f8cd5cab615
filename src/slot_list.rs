use crate::{require, CodecResult, Identifier, SlotCodecError};

/// A fixed capacity list of slots owned by the caller. The codec only reads it
/// and hands back fresh values, it never keeps one around.
///
/// Invariants: `len() == capacity()` and no slot holds the placeholder.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SlotList {
    slots: Vec<Option<Identifier>>,
}

impl SlotList {
    pub fn empty(capacity: usize) -> Self {
        SlotList {
            slots: vec![None; capacity],
        }
    }

    pub fn from_slots(capacity: usize, slots: Vec<Option<Identifier>>) -> CodecResult<Self> {
        require!(
            slots.len() == capacity,
            SlotCodecError::CapacityMismatch {
                expected: capacity,
                actual: slots.len()
            }
        );
        if let Some(index) = slots
            .iter()
            .position(|slot| slot.is_some_and(|id| id.is_placeholder()))
        {
            return Err(SlotCodecError::invalid_at(index));
        }

        Ok(SlotList { slots })
    }

    pub fn capacity(&self) -> usize {
        self.slots.len()
    }

    pub fn is_vacant(&self) -> bool {
        self.slots.iter().all(Option::is_none)
    }

    pub fn is_full(&self) -> bool {
        self.slots.iter().all(Option::is_some)
    }

    pub fn as_slice(&self) -> &[Option<Identifier>] {
        &self.slots
    }

    pub fn into_inner(self) -> Vec<Option<Identifier>> {
        self.slots
    }

    pub fn get(&self, index: usize) -> CodecResult<Option<Identifier>> {
        self.slots
            .get(index)
            .copied()
            .ok_or(SlotCodecError::IndexOutOfRange {
                index,
                capacity: self.capacity(),
            })
    }

    /// Overwrite one slot. Other slots keep their value and position.
    pub fn set(&mut self, index: usize, value: Option<Identifier>) -> CodecResult<()> {
        let capacity = self.capacity();
        let slot = self
            .slots
            .get_mut(index)
            .ok_or(SlotCodecError::IndexOutOfRange { index, capacity })?;
        require!(
            !value.is_some_and(|id| id.is_placeholder()),
            SlotCodecError::invalid_at(index)
        );

        *slot = value;
        Ok(())
    }

    pub fn position(&self, identifier: &Identifier) -> Option<usize> {
        self.slots.iter().position(|slot| slot.as_ref() == Some(identifier))
    }

    /// Place `identifier` in the first empty slot and return that slot's index.
    pub fn add(&mut self, identifier: Identifier) -> CodecResult<usize> {
        require!(
            !identifier.is_placeholder(),
            SlotCodecError::InvalidIdentifier { index: None }
        );
        if let Some(index) = self.position(&identifier) {
            return Err(SlotCodecError::DuplicateIdentifier { index });
        }

        let index = self
            .slots
            .iter()
            .position(Option::is_none)
            .ok_or(SlotCodecError::SlotListFull {
                capacity: self.capacity(),
            })?;
        self.slots[index] = Some(identifier);

        Ok(index)
    }

    /// Clear the slot holding `identifier`. The slot stays in place as an empty
    /// slot. Returns the cleared index, or `None` if it was not present.
    pub fn remove(&mut self, identifier: &Identifier) -> Option<usize> {
        let index = self.position(identifier)?;
        self.slots[index] = None;
        Some(index)
    }

    /// Occupied identifiers in slot order
    pub fn occupied(&self) -> impl Iterator<Item = Identifier> + '_ {
        self.slots.iter().flatten().copied()
    }
}

#[cfg(test)]
mod test {
    use super::*;

    fn id(byte: u8) -> Identifier {
        Identifier::from([byte; 20])
    }

    #[test]
    fn test_from_slots_checks_capacity() {
        assert_eq!(
            SlotList::from_slots(6, vec![None; 5]),
            Err(SlotCodecError::CapacityMismatch {
                expected: 6,
                actual: 5
            })
        );
        assert!(SlotList::from_slots(6, vec![None; 6]).is_ok());
    }

    #[test]
    fn test_from_slots_rejects_placeholder() {
        let slots = vec![Some(id(0xaa)), Some(Identifier::PLACEHOLDER), None];
        assert_eq!(
            SlotList::from_slots(3, slots),
            Err(SlotCodecError::invalid_at(1))
        );
    }

    #[test]
    fn test_add_fills_first_empty_slot() {
        let mut list = SlotList::from_slots(4, vec![Some(id(1)), None, Some(id(3)), None]).unwrap();

        assert_eq!(list.add(id(2)), Ok(1));
        assert_eq!(list.add(id(4)), Ok(3));
        assert!(list.is_full());
        assert_eq!(
            list.add(id(5)),
            Err(SlotCodecError::SlotListFull { capacity: 4 })
        );
    }

    #[test]
    fn test_add_rejects_duplicate_and_placeholder() {
        let mut list = SlotList::empty(6);
        list.add(id(1)).unwrap();

        assert_eq!(
            list.add(id(1)),
            Err(SlotCodecError::DuplicateIdentifier { index: 0 })
        );
        assert_eq!(
            list.add(Identifier::PLACEHOLDER),
            Err(SlotCodecError::InvalidIdentifier { index: None })
        );
    }

    #[test]
    fn test_remove_keeps_positions() {
        let mut list =
            SlotList::from_slots(3, vec![Some(id(1)), Some(id(2)), Some(id(3))]).unwrap();

        assert_eq!(list.remove(&id(2)), Some(1));
        assert_eq!(list.as_slice(), &[Some(id(1)), None, Some(id(3))]);
        assert_eq!(list.remove(&id(2)), None);
        assert_eq!(list.occupied().collect::<Vec<_>>(), vec![id(1), id(3)]);
    }

    #[test]
    fn test_set_and_get_bounds() {
        let mut list = SlotList::empty(6);

        list.set(5, Some(id(9))).unwrap();
        assert_eq!(list.get(5), Ok(Some(id(9))));
        assert_eq!(
            list.set(6, Some(id(9))),
            Err(SlotCodecError::IndexOutOfRange {
                index: 6,
                capacity: 6
            })
        );
        assert_eq!(
            list.get(6),
            Err(SlotCodecError::IndexOutOfRange {
                index: 6,
                capacity: 6
            })
        );
        assert_eq!(
            list.set(0, Some(Identifier::PLACEHOLDER)),
            Err(SlotCodecError::invalid_at(0))
        );
    }
}

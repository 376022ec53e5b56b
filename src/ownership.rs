use fnv::FnvHashMap;

/// Effects that mutate page elements.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Effect {
    Reveal,
    HeaderSlide,
    LetterHeading,
    WordCycle,
    Signature,
    Carousel,
}

/// Which effect holds mutation rights over which element.
///
/// Elements are keyed by a small integer stamped onto them on first claim.
/// The first effect to claim an element keeps it for the page's lifetime.
#[derive(Debug, Default)]
pub struct OwnershipMap {
    owners: FnvHashMap<u32, Effect>,
    next_key: u32,
}

impl OwnershipMap {
    pub fn new() -> Self {
        Self::default()
    }

    /// Hand out a fresh element key.
    pub fn allocate_key(&mut self) -> u32 {
        let key = self.next_key;
        self.next_key = self.next_key.wrapping_add(1);
        key
    }

    /// Claim `key` for `effect`. Re-claiming by the current owner succeeds.
    pub fn claim(&mut self, key: u32, effect: Effect) -> bool {
        match self.owners.get(&key) {
            Some(owner) => *owner == effect,
            None => {
                self.owners.insert(key, effect);
                true
            }
        }
    }

    pub fn owner(&self, key: u32) -> Option<Effect> {
        self.owners.get(&key).copied()
    }

    pub fn len(&self) -> usize {
        self.owners.len()
    }

    pub fn is_empty(&self) -> bool {
        self.owners.is_empty()
    }
}

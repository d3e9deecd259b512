//! Minimal traded-item double.

use crate::domain::TradedItem;

/// A [`TradedItem`] with settable species, egg flag, and nickname.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TestItem {
    species_id: u16,
    species_name: String,
    nickname: String,
    egg: bool,
}

impl TestItem {
    /// Item of the given species, nicknamed after it.
    #[must_use]
    pub fn species(id: u16, name: impl Into<String>) -> Self {
        let name = name.into();
        Self {
            species_id: id,
            nickname: name.clone(),
            species_name: name,
            egg: false,
        }
    }

    /// The empty item (species 0).
    #[must_use]
    pub fn none() -> Self {
        Self {
            species_id: 0,
            species_name: String::new(),
            nickname: String::new(),
            egg: false,
        }
    }

    /// Mark the item as an unhatched egg.
    #[must_use]
    pub fn as_egg(mut self) -> Self {
        self.egg = true;
        self
    }

    /// Override the nickname.
    #[must_use]
    pub fn nicknamed(mut self, nickname: impl Into<String>) -> Self {
        self.nickname = nickname.into();
        self
    }
}

impl TradedItem for TestItem {
    fn species_id(&self) -> u16 {
        self.species_id
    }

    fn is_egg(&self) -> bool {
        self.egg
    }

    fn nickname(&self) -> &str {
        &self.nickname
    }

    fn species_name(&self) -> String {
        self.species_name.clone()
    }

    fn file_name(&self) -> String {
        format!("{} - {}.bin", self.species_id, self.species_name)
    }

    fn to_bytes(&self) -> Vec<u8> {
        self.species_id.to_le_bytes().to_vec()
    }

    fn export_text(&self) -> String {
        format!("Species: {}", self.species_name)
    }
}

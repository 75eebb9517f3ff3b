//! Meld triplet resource
//!
//! Each triplet is `[front, front, result]` by printed name. Meld printings
//! carry no face array, so this table is the only source of their side letter,
//! their display name and their card parts.

use std::collections::HashMap;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MeldRole {
    Front,
    Result,
}

#[derive(Debug, Clone, Default)]
pub struct MeldTriplets {
    triplets: Vec<[String; 3]>,
    by_name: HashMap<String, usize>,
}

impl MeldTriplets {
    pub fn new(triplets: Vec<[String; 3]>) -> Self {
        let mut by_name = HashMap::new();
        for (index, triplet) in triplets.iter().enumerate() {
            for name in triplet {
                // A front that appears in two triplets keeps its first one
                by_name.entry(name.clone()).or_insert(index);
            }
        }
        Self { triplets, by_name }
    }

    /// Triplet containing `name`, in `[front, front, result]` order
    pub fn triplet_for(&self, name: &str) -> Option<&[String; 3]> {
        self.by_name.get(name).map(|&index| &self.triplets[index])
    }

    pub fn role_of(&self, name: &str) -> Option<MeldRole> {
        let triplet = self.triplet_for(name)?;
        if triplet[2] == name {
            Some(MeldRole::Result)
        } else {
            Some(MeldRole::Front)
        }
    }

    /// Side letter for a meld face: fronts are "a", the result is "b"
    pub fn side_for(&self, name: &str) -> Option<char> {
        self.role_of(name).map(|role| match role {
            MeldRole::Front => 'a',
            MeldRole::Result => 'b',
        })
    }

    /// Result card a front melds into
    pub fn result_for(&self, name: &str) -> Option<&str> {
        match self.role_of(name)? {
            MeldRole::Front => self.triplet_for(name).map(|t| t[2].as_str()),
            MeldRole::Result => None,
        }
    }

    /// Names a face links to: a front links to its result, a result to both fronts
    pub fn partners_of(&self, name: &str) -> Vec<&str> {
        let Some(triplet) = self.triplet_for(name) else {
            return Vec::new();
        };
        match self.role_of(name) {
            Some(MeldRole::Result) => vec![triplet[0].as_str(), triplet[1].as_str()],
            Some(MeldRole::Front) => vec![triplet[2].as_str()],
            None => Vec::new(),
        }
    }

    pub fn len(&self) -> usize {
        self.triplets.len()
    }

    pub fn is_empty(&self) -> bool {
        self.triplets.is_empty()
    }
}

#[cfg(test)]
pub use tests::make_test_melds;

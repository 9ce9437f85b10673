//! Canonical grouping and ordering of materials: divisions ascending by
//! numeric code (encounter order breaking ties), tiers 1 to 3 within a
//! division, input order preserved within a tier. Both renderers consume
//! this one projection; neither re-derives ordering on its own.

use std::collections::HashMap;

use crate::model::{Material, Tier};

/// One division bucket in canonical order. Materials are borrowed from
/// the analysis snapshot; the grouping is a pure projection over it.
#[derive(Debug, Clone)]
pub struct DivisionGroup<'a> {
    /// `"{csi_number} - {csi_division}"`, the exact bucketing key.
    pub key: String,
    pub number: String,
    pub name: String,
    pub tier1: Vec<&'a Material>,
    pub tier2: Vec<&'a Material>,
    pub tier3: Vec<&'a Material>,
}

impl<'a> DivisionGroup<'a> {
    pub fn tier_bucket(&self, tier: Tier) -> &[&'a Material] {
        match tier {
            Tier::ReadilyAvailable => &self.tier1,
            Tier::RequiresCustomization => &self.tier2,
            Tier::CustomDevelopment => &self.tier3,
        }
    }

    /// Materials in rendering order: tier 1, then 2, then 3.
    pub fn ordered(&self) -> impl Iterator<Item = &&'a Material> {
        self.tier1.iter().chain(&self.tier2).chain(&self.tier3)
    }

    pub fn len(&self) -> usize {
        self.tier1.len() + self.tier2.len() + self.tier3.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// Material counts per tier across a whole analysis.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct TierCounts {
    pub tier1: usize,
    pub tier2: usize,
    pub tier3: usize,
}

impl TierCounts {
    pub fn get(&self, tier: Tier) -> usize {
        match tier {
            Tier::ReadilyAvailable => self.tier1,
            Tier::RequiresCustomization => self.tier2,
            Tier::CustomDevelopment => self.tier3,
        }
    }

    pub fn total(&self) -> usize {
        self.tier1 + self.tier2 + self.tier3
    }
}

/// Exact bucketing key for a material. Division name typos produce
/// separate buckets on purpose: upstream data arrives unvalidated and
/// the grouping must not paper over it.
pub fn division_key(material: &Material) -> String {
    format!("{} - {}", material.csi_number, material.csi_division)
}

fn division_sort_value(number: &str) -> u32 {
    number.trim().parse::<u32>().unwrap_or(u32::MAX)
}

/// Partition materials into canonical division buckets.
pub fn group_materials(materials: &[Material]) -> Vec<DivisionGroup<'_>> {
    let mut keys: Vec<String> = Vec::new();
    let mut buckets: HashMap<String, Vec<&Material>> = HashMap::new();

    for material in materials {
        let key = division_key(material);
        if !buckets.contains_key(&key) {
            keys.push(key.clone());
        }
        buckets.entry(key).or_default().push(material);
    }

    // Stable: equal numeric codes keep first-encounter order.
    keys.sort_by_key(|key| division_sort_value(key.split(" - ").next().unwrap_or(key.as_str())));

    keys.into_iter()
        .map(|key| {
            let members = buckets.remove(&key).unwrap_or_default();
            let mut group = DivisionGroup {
                key: key.clone(),
                number: String::new(),
                name: String::new(),
                tier1: Vec::new(),
                tier2: Vec::new(),
                tier3: Vec::new(),
            };
            for material in members {
                if group.number.is_empty() {
                    group.number = material.csi_number.clone();
                    group.name = material.csi_division.clone();
                }
                match material.tier {
                    Tier::ReadilyAvailable => group.tier1.push(material),
                    Tier::RequiresCustomization => group.tier2.push(material),
                    Tier::CustomDevelopment => group.tier3.push(material),
                }
            }
            group
        })
        .collect()
}

/// Per-tier counts over the raw material list.
pub fn tier_counts(materials: &[Material]) -> TierCounts {
    let mut counts = TierCounts::default();
    for material in materials {
        match material.tier {
            Tier::ReadilyAvailable => counts.tier1 += 1,
            Tier::RequiresCustomization => counts.tier2 += 1,
            Tier::CustomDevelopment => counts.tier3 += 1,
        }
    }
    counts
}

pub fn has_tier(materials: &[Material], tier: Tier) -> bool {
    materials.iter().any(|m| m.tier == tier)
}

/// Distinct division names in first-encounter order.
pub fn distinct_divisions(materials: &[Material]) -> Vec<String> {
    let mut seen: Vec<String> = Vec::new();
    for material in materials {
        if !seen.iter().any(|d| d == &material.csi_division) {
            seen.push(material.csi_division.clone());
        }
    }
    seen
}

/// Division names, in canonical order, whose bucket for `tier` is
/// non-empty.
pub fn divisions_with_tier(groups: &[DivisionGroup<'_>], tier: Tier) -> Vec<String> {
    groups
        .iter()
        .filter(|g| !g.tier_bucket(tier).is_empty())
        .map(|g| g.name.clone())
        .collect()
}

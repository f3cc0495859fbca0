//! Aggregates over the record stores.
//!
//! Everything here is a pure function of the slices it is handed; callers
//! pass the full, unfiltered store contents and get a freshly computed
//! summary back on every call.
//!
//! Grouped maps are `IndexMap`s so keys serialise in the order they first
//! appear during the store scan.
//!
//! Animal totals are `u128`: every per-record count fits in a `u64`, and the
//! sum over any store that fits in memory fits in a `u128`.

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

use crate::models::{Movement, MovementType, Outbreak, OutbreakStatus, Vaccination};

/// Totals across every vaccination record.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VaccinationStats {
    pub total_animals: u128,
    pub total_males: u128,
    pub total_females: u128,
    pub total_young: u128,
    pub total_adult: u128,
    pub total_vaccinations: usize,
}

impl VaccinationStats {
    pub fn compute(vaccinations: &[Vaccination]) -> Self {
        vaccinations.iter().fold(
            Self {
                total_vaccinations: vaccinations.len(),
                ..Self::default()
            },
            |mut acc, v| {
                acc.total_animals += u128::from(v.animals_vaccinated);
                acc.total_males += u128::from(v.male_count);
                acc.total_females += u128::from(v.female_count);
                acc.total_young += u128::from(v.young_count);
                acc.total_adult += u128::from(v.adult_count);
                acc
            },
        )
    }
}

/// Cross-store headline numbers for the public dashboard.
///
/// `total_imports` / `total_exports` count movement *records*, unlike
/// [`MovementsSummary`] which sums animals.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PublicOverview {
    pub total_animals: u128,
    pub total_imports: usize,
    pub total_exports: usize,
    pub active_outbreaks: usize,
    pub animals_by_region: IndexMap<String, u128>,
}

impl PublicOverview {
    pub fn compute(
        movements: &[Movement],
        outbreaks: &[Outbreak],
        vaccinations: &[Vaccination],
    ) -> Self {
        let count_of = |kind: MovementType| {
            movements
                .iter()
                .filter(|m| m.movement_type == kind)
                .count()
        };

        Self {
            total_animals: VaccinationStats::compute(vaccinations).total_animals,
            total_imports: count_of(MovementType::Import),
            total_exports: count_of(MovementType::Export),
            active_outbreaks: outbreaks
                .iter()
                .filter(|o| o.status == OutbreakStatus::Active)
                .count(),
            animals_by_region: sum_by(vaccinations, |v| &v.region, |v| v.animals_vaccinated),
        }
    }
}

/// Animals moved through one country, split by direction.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CountryFlow {
    pub imports: u128,
    pub exports: u128,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MovementsSummary {
    pub movements_by_country: IndexMap<String, CountryFlow>,
    pub purpose_distribution: IndexMap<String, u128>,
    pub total_imports: u128,
    pub total_exports: u128,
}

impl MovementsSummary {
    pub fn compute(movements: &[Movement]) -> Self {
        let mut movements_by_country: IndexMap<String, CountryFlow> = IndexMap::new();
        let mut total_imports: u128 = 0;
        let mut total_exports: u128 = 0;

        for m in movements {
            let count = u128::from(m.animal_count);
            let flow = movements_by_country.entry(m.country.clone()).or_default();
            match m.movement_type {
                MovementType::Import => {
                    flow.imports += count;
                    total_imports += count;
                }
                MovementType::Export => {
                    flow.exports += count;
                    total_exports += count;
                }
            }
        }

        Self {
            movements_by_country,
            purpose_distribution: sum_by(movements, |m| &m.purpose, |m| m.animal_count),
            total_imports,
            total_exports,
        }
    }
}

/// Outbreak counts per status. All three keys are always present.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct StatusDistribution {
    pub active: usize,
    pub controlled: usize,
    pub eradicated: usize,
}

impl StatusDistribution {
    fn record(&mut self, status: OutbreakStatus) {
        match status {
            OutbreakStatus::Active => self.active += 1,
            OutbreakStatus::Controlled => self.controlled += 1,
            OutbreakStatus::Eradicated => self.eradicated += 1,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OutbreaksSummary {
    pub status_distribution: StatusDistribution,
    pub disease_distribution: IndexMap<String, u128>,
    pub region_distribution: IndexMap<String, u128>,
    pub total_outbreaks: usize,
    pub total_affected_animals: u128,
}

impl OutbreaksSummary {
    pub fn compute(outbreaks: &[Outbreak]) -> Self {
        let mut status_distribution = StatusDistribution::default();
        for o in outbreaks {
            status_distribution.record(o.status);
        }

        Self {
            status_distribution,
            disease_distribution: sum_by(outbreaks, |o| &o.disease_type, |o| o.affected_animals),
            region_distribution: sum_by(outbreaks, |o| &o.region, |o| o.affected_animals),
            total_outbreaks: outbreaks.len(),
            total_affected_animals: outbreaks.iter().map(|o| u128::from(o.affected_animals)).sum(),
        }
    }
}

/// Group `records` by `key` and sum `value`, keeping first-appearance order.
fn sum_by<T, K, V>(records: &[T], key: K, value: V) -> IndexMap<String, u128>
where
    K: Fn(&T) -> &String,
    V: Fn(&T) -> u64,
{
    let mut groups: IndexMap<String, u128> = IndexMap::new();
    for record in records {
        *groups.entry(key(record).clone()).or_insert(0) += u128::from(value(record));
    }
    groups
}

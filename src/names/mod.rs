//! Name tables for synthetic employees
//!
//! A [`NameTable`] maps each gender to a list of given names and a list of
//! family names. It is injected into the population generator; the crate
//! ships a Czech table as the default.

mod czech;

use rand::Rng;
use rand::seq::IndexedRandom;

use crate::error::{EmployeeStatsError, Result};
use crate::models::Gender;

/// Given and family names available for one gender
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NameList {
    given_names: Vec<String>,
    family_names: Vec<String>,
}

impl NameList {
    /// Create a name list, rejecting empty lists
    pub fn new<G, F, S>(given_names: G, family_names: F) -> Result<Self>
    where
        G: IntoIterator<Item = S>,
        F: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let given_names: Vec<String> = given_names.into_iter().map(Into::into).collect();
        let family_names: Vec<String> = family_names.into_iter().map(Into::into).collect();

        if given_names.is_empty() {
            return Err(EmployeeStatsError::invalid_config(
                "name list has no given names",
            ));
        }
        if family_names.is_empty() {
            return Err(EmployeeStatsError::invalid_config(
                "name list has no family names",
            ));
        }

        Ok(Self {
            given_names,
            family_names,
        })
    }

    /// Given names in table order
    #[must_use]
    pub fn given_names(&self) -> &[String] {
        &self.given_names
    }

    /// Family names in table order
    #[must_use]
    pub fn family_names(&self) -> &[String] {
        &self.family_names
    }

    /// Draw a given name and a family name independently
    pub fn draw<R: Rng + ?Sized>(&self, rng: &mut R) -> (&str, &str) {
        // Both lists are non-empty by construction
        let given = self.given_names.choose(rng).map_or("", String::as_str);
        let family = self.family_names.choose(rng).map_or("", String::as_str);
        (given, family)
    }
}

/// Read-only mapping from gender to its name list
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NameTable {
    male: NameList,
    female: NameList,
}

impl NameTable {
    /// Create a name table from one list per gender
    #[must_use]
    pub fn new(male: NameList, female: NameList) -> Self {
        Self { male, female }
    }

    /// The built-in table of common Czech names
    #[must_use]
    pub fn czech() -> Self {
        czech::table()
    }

    /// Name list for a gender
    #[must_use]
    pub fn for_gender(&self, gender: Gender) -> &NameList {
        match gender {
            Gender::Male => &self.male,
            Gender::Female => &self.female,
        }
    }
}

impl Default for NameTable {
    fn default() -> Self {
        Self::czech()
    }
}

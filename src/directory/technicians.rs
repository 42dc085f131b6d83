//! Technician directory and assignment candidates.

use super::entity::{DisplayName, EntityDirectory};
use crate::catalog::domain::{Technician, TechnicianId, TechnicianStatus};
use serde::Serialize;

/// Technician fields needed by the assignment picker.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TechnicianSummary {
    /// Display name.
    pub name: String,
    /// Availability at load time.
    pub status: TechnicianStatus,
    /// Service area.
    pub location: String,
}

impl DisplayName for TechnicianSummary {
    fn display_name(&self) -> &str {
        &self.name
    }
}

/// Technician summaries by id.
pub type TechnicianDirectory = EntityDirectory<TechnicianId, TechnicianSummary>;

impl TechnicianDirectory {
    /// Builds the directory from a technician list.
    #[must_use]
    pub fn from_technicians(technicians: &[Technician]) -> Self {
        Self::build(technicians, |technician| {
            (
                technician.id().clone(),
                TechnicianSummary {
                    name: technician.name().to_owned(),
                    status: technician.status().clone(),
                    location: technician.location().to_owned(),
                },
            )
        })
    }

    /// Filters the directory down to technicians that may be offered.
    ///
    /// Keeps backend order. An empty result is reported as
    /// [`TechnicianCandidates::NoneAvailable`] rather than an empty list.
    #[must_use]
    pub fn candidates(&self) -> TechnicianCandidates {
        let available: Vec<Candidate> = self
            .iter()
            .filter(|(_, summary)| summary.status.is_available())
            .map(|(id, summary)| Candidate {
                id: id.clone(),
                name: summary.name.clone(),
            })
            .collect();

        if available.is_empty() {
            TechnicianCandidates::NoneAvailable
        } else {
            TechnicianCandidates::Available(available)
        }
    }
}

/// A technician offered by the assignment picker.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Candidate {
    /// Technician identifier.
    pub id: TechnicianId,
    /// Display name.
    pub name: String,
}

/// Result of filtering the technician directory for the picker.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TechnicianCandidates {
    /// At least one technician is available.
    Available(Vec<Candidate>),
    /// Nobody is available; the picker says so explicitly.
    NoneAvailable,
}

impl TechnicianCandidates {
    /// Returns the offered technicians, empty when none are available.
    #[must_use]
    pub fn as_slice(&self) -> &[Candidate] {
        match self {
            Self::Available(candidates) => candidates,
            Self::NoneAvailable => &[],
        }
    }

    /// Returns whether the technician is on offer.
    #[must_use]
    pub fn contains(&self, id: &TechnicianId) -> bool {
        self.as_slice().iter().any(|candidate| &candidate.id == id)
    }

    /// Returns whether nobody is available.
    #[must_use]
    pub const fn is_none_available(&self) -> bool {
        matches!(self, Self::NoneAvailable)
    }
}

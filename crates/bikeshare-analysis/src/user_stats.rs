//! Rider categories and demographics.

use crate::mode::{mode, value_counts};
use crate::table::TripTable;
use crate::traits::{StatOutcome, StatisticGroup};
use bikeshare_common::City;
use std::fmt;
use tracing::{debug, instrument};

/// Birth year aggregates over the rows that have one.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BirthYears {
    /// Earliest birth year
    pub oldest: i32,
    /// Latest birth year
    pub youngest: i32,
    /// Most frequent birth year
    pub most_common: i32,
}

/// Gender and birth year results, when the dataset has them.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Demographics {
    /// The dataset has both demographic columns
    Available {
        /// Count per gender, blank cells excluded
        genders: Vec<(String, usize)>,
        /// Aggregates over non-blank birth years
        birth_years: StatOutcome<BirthYears>,
    },
    /// The dataset lacks a `Gender` or `Birth Year` column
    Unavailable {
        /// City whose dataset lacks them
        city: City,
    },
}

/// User type counts plus demographics.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UserStats {
    /// Count per user type, most frequent first
    pub user_types: Vec<(String, usize)>,
    /// Gender and birth year results
    pub demographics: Demographics,
}

impl fmt::Display for BirthYears {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Youngest traveler birth year: {}", self.youngest)?;
        write!(f, "\n\nOldest traveler birth year: {}", self.oldest)?;
        write!(f, "\n\nMost frequent traveler birth year: {}", self.most_common)
    }
}

fn write_counts(f: &mut fmt::Formatter<'_>, counts: &[(String, usize)]) -> fmt::Result {
    for (value, count) in counts {
        write!(f, "\n\t{value}\n\t\tCount: {count}")?;
    }
    Ok(())
}

impl fmt::Display for UserStats {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("User Types:")?;
        write_counts(f, &self.user_types)?;

        match &self.demographics {
            Demographics::Available {
                genders,
                birth_years,
            } => {
                f.write_str("\n\nGenders:")?;
                write_counts(f, genders)?;
                match birth_years {
                    StatOutcome::Computed(years) => write!(f, "\n\n{years}"),
                    StatOutcome::NoData => write!(f, "\n\nBirth years: {birth_years}"),
                }
            }
            Demographics::Unavailable { city } => write!(
                f,
                "\n\nInformation about Gender and/or Birth Year not available for {city}."
            ),
        }
    }
}

/// User demographics statistic group.
#[derive(Debug, Clone, Copy, Default)]
pub struct UserStatsGroup;

impl UserStatsGroup {
    fn demographics(table: &TripTable) -> Demographics {
        if !table.has_demographics() {
            return Demographics::Unavailable { city: table.city() };
        }

        let records = table.records();
        let genders = value_counts(records.iter().filter_map(|r| r.gender.as_deref()))
            .into_iter()
            .map(|(gender, count)| (gender.to_string(), count))
            .collect();

        let years = || records.iter().filter_map(|r| r.birth_year);
        let birth_years = years()
            .min()
            .zip(years().max())
            .zip(mode(years()))
            .map(|((oldest, youngest), most_common)| BirthYears {
                oldest,
                youngest,
                most_common,
            });

        Demographics::Available {
            genders,
            birth_years: birth_years.into(),
        }
    }
}

impl StatisticGroup for UserStatsGroup {
    type Output = StatOutcome<UserStats>;

    #[instrument(skip_all, fields(rows = table.len(), city = %table.city()))]
    fn compute(&self, table: &TripTable) -> Self::Output {
        if table.is_empty() {
            return StatOutcome::NoData;
        }

        // Blank user types count as missing values
        let user_types = value_counts(
            table
                .records()
                .iter()
                .map(|r| r.user_type.as_str())
                .filter(|user_type| !user_type.is_empty()),
        )
        .into_iter()
        .map(|(user_type, count)| (user_type.to_string(), count))
        .collect();

        let stats = UserStats {
            user_types,
            demographics: Self::demographics(table),
        };
        debug!(?stats, "Computed user statistics");
        StatOutcome::Computed(stats)
    }

    fn name(&self) -> &'static str {
        "user_stats"
    }

    fn heading(&self) -> &'static str {
        "Calculating User Stats..."
    }
}

//! Audit of the table's general categories against a [`CategoryOracle`].
//!
//! Mismatches are data, not failures: the audit always runs to the end and
//! hands back a [`Report`].

use crate::category::GeneralCategory;
use crate::consts::{MAX_CODE_POINT, REPORT_HEADER};
use crate::error::{Error, Result};
use crate::lookup::WidthLookup;
use crate::oracle::CategoryOracle;
use linked_hash_map::LinkedHashMap;
use rayon::prelude::*;

use std::io::{self, Write};
use std::ops::RangeInclusive;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Mismatch {
    pub code_point: u32,
    /// What the table says.
    pub expected: GeneralCategory,
    /// What the oracle says.
    pub actual: GeneralCategory,
}

/// A code point whose entry could not be resolved at all.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Fault {
    pub code_point: u32,
    pub reason: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Report {
    /// Ordered by code point.
    pub mismatches: Vec<Mismatch>,
    pub faults: Vec<Fault>,
}

enum Outcome {
    Mismatch(Mismatch),
    Fault(Fault),
}

pub struct CrossValidator<'a, O: CategoryOracle> {
    lookup: &'a WidthLookup<O>,
    threads: Option<usize>,
}

impl<'a, O: CategoryOracle> CrossValidator<'a, O> {
    /// Compares `lookup` against its own oracle.
    pub fn new(lookup: &'a WidthLookup<O>) -> CrossValidator<'a, O> {
        CrossValidator {
            lookup,
            threads: None,
        }
    }

    /// Runs on a dedicated pool of `threads` workers instead of rayon's
    /// global one.
    pub fn threads(mut self, threads: Option<usize>) -> CrossValidator<'a, O> {
        self.threads = threads;
        self
    }

    /// Audits every code point in `[0, 0x10FFFF]`.
    pub fn run(&self) -> Result<Report> {
        self.run_range(0..=MAX_CODE_POINT)
    }

    pub fn run_range(&self, range: RangeInclusive<u32>) -> Result<Report> {
        let (first, last) = (*range.start(), (*range.end()).min(MAX_CODE_POINT));
        info!("auditing U+{:04X}..U+{:04X}", first, last);

        let report = match self.threads {
            Some(n) => {
                let pool = rayon::ThreadPoolBuilder::new().num_threads(n).build()?;
                pool.install(|| self.scan(first..=last))
            }
            None => self.scan(first..=last),
        };

        info!(
            "audit done: {} mismatches, {} faults",
            report.mismatches.len(),
            report.faults.len()
        );
        Ok(report)
    }

    fn scan(&self, range: RangeInclusive<u32>) -> Report {
        // collect keeps code point order
        let outcomes: Vec<Outcome> = range
            .into_par_iter()
            .filter_map(|code_point| self.check(code_point))
            .collect();

        let mut report = Report::default();
        for outcome in outcomes {
            match outcome {
                Outcome::Mismatch(m) => report.mismatches.push(m),
                Outcome::Fault(f) => report.faults.push(f),
            }
        }
        report
    }

    fn check(&self, code_point: u32) -> Option<Outcome> {
        let actual = self.lookup.oracle().category_of(code_point);
        match self.lookup.general_category_of(code_point) {
            Ok(expected) if expected == actual => None,
            Ok(expected) => Some(Outcome::Mismatch(Mismatch {
                code_point,
                expected,
                actual,
            })),
            Err(e) => {
                warn!("{}", e);
                let reason = match e {
                    Error::UnknownCategoryCode { code, .. } => format!("unknown category {}", code),
                    other => other.to_string(),
                };
                Some(Outcome::Fault(Fault { code_point, reason }))
            }
        }
    }
}

impl Report {
    pub fn is_clean(&self) -> bool {
        self.mismatches.is_empty() && self.faults.is_empty()
    }

    /// Mismatch counts per `(expected, actual)` pair, in first-seen order.
    pub fn summary(&self) -> LinkedHashMap<(GeneralCategory, GeneralCategory), usize> {
        let mut tally = LinkedHashMap::new();
        for m in &self.mismatches {
            *tally.entry((m.expected, m.actual)).or_insert(0) += 1;
        }
        tally
    }

    /// Writes the mismatches as CSV, closed by a total line.
    pub fn write_csv<W: Write>(&self, out: &mut W) -> io::Result<()> {
        writeln!(out, "{}", REPORT_HEADER)?;
        for m in &self.mismatches {
            writeln!(out, "U+{:04X},{},{}", m.code_point, m.expected, m.actual)?;
        }
        writeln!(out, "Total mismatches: {}", self.mismatches.len())
    }
}

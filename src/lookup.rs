use crate::category::{CategoryCode, GeneralCategory};
use crate::error::{Error, Result};
use crate::oracle::{CategoryOracle, UnicodeOracle};
use crate::range::{Entry, RangeTable};
use crate::width::EastAsianWidth;

use std::sync::Arc;

/// Point queries against a shared, immutable [`RangeTable`].
///
/// Code points without a containing range are unassigned: they report
/// `Neutral` and `OtherNotAssigned`.
#[derive(Debug, Clone)]
pub struct WidthLookup<O = UnicodeOracle> {
    table: Arc<RangeTable>,
    oracle: O,
}

impl WidthLookup {
    pub fn new(table: Arc<RangeTable>) -> WidthLookup {
        WidthLookup::with_oracle(table, UnicodeOracle)
    }
}

impl<O: CategoryOracle> WidthLookup<O> {
    pub fn with_oracle(table: Arc<RangeTable>, oracle: O) -> WidthLookup<O> {
        WidthLookup { table, oracle }
    }

    pub fn table(&self) -> &RangeTable {
        &self.table
    }

    pub fn oracle(&self) -> &O {
        &self.oracle
    }

    pub fn width_of(&self, code_point: u32) -> EastAsianWidth {
        self.range_of(code_point)
            .map(|entry| entry.width)
            .unwrap_or(EastAsianWidth::Neutral)
    }

    pub fn range_of(&self, code_point: u32) -> Option<&Entry> {
        self.table.find(code_point)
    }

    /// Entries with exactly `width`, in table order.
    pub fn entries_with_width(&self, width: EastAsianWidth) -> impl Iterator<Item = &Entry> {
        self.table.iter().filter(move |entry| entry.width == width)
    }

    /// Same as [`entries_with_width`](Self::entries_with_width) for a raw
    /// discriminant. Values outside the enum match nothing.
    pub fn entries_with_width_code(&self, code: u8) -> Vec<&Entry> {
        match EastAsianWidth::from_u8(code) {
            Some(width) => self.entries_with_width(width).collect(),
            None => vec![],
        }
    }

    /// Resolves the general category through the containing entry. `L&`
    /// entries are split by the oracle.
    ///
    /// An entry with a category code outside the UCD set means the table
    /// is corrupt and yields [`Error::UnknownCategoryCode`].
    pub fn general_category_of(&self, code_point: u32) -> Result<GeneralCategory> {
        let entry = match self.range_of(code_point) {
            Some(entry) => entry,
            None => return Ok(GeneralCategory::OtherNotAssigned),
        };

        match CategoryCode::parse(&entry.general_category) {
            Some(CategoryCode::Fixed(category)) => Ok(category),
            Some(CategoryCode::CasedLetter) => {
                let category = self.oracle.category_of(code_point);
                if !category.is_cased_letter() {
                    debug!(
                        "U+{:04X} sits in an L& range but is {}",
                        code_point, category
                    );
                }
                Ok(category)
            }
            None => Err(Error::UnknownCategoryCode {
                code_point,
                code: entry.general_category.clone(),
            }),
        }
    }
}

//! Renders a [`RangeTable`] as Rust source, loadable again through
//! [`RangeTable::from_rows`].

use crate::range::{Entry, RangeTable};
use itertools::Itertools;

use std::io::{self, Write};

pub const TABLE_NAME: &str = "EAST_ASIAN_WIDTH";

fn render_entry(e: &Entry) -> String {
    format!(
        "(0x{:04X}, 0x{:04X}, EastAsianWidth::{:?}, {:?}, {}, {:?}, {:?})",
        e.start, e.end, e.width, e.general_category, e.range_length, e.start_name, e.end_name
    )
}

pub fn render(table: &RangeTable) -> String {
    let rows = table
        .iter()
        .map(|e| format!("{}{},\n", " ".repeat(4), render_entry(e)))
        .join("");

    format!(
        "// Generated from EastAsianWidth.txt by typewidth. Do not edit.

use typewidth::{{EastAsianWidth, Row}};

pub static {}: &[Row] = &[
{}];
",
        TABLE_NAME, rows
    )
}

pub fn write_to<W: Write>(table: &RangeTable, out: &mut W) -> io::Result<()> {
    out.write_all(render(table).as_bytes())
}

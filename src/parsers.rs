use winnow::{
    ascii::{dec_int, space0},
    combinator::{delimited, eof, separated},
};

use crate::errors::RangeParseError;
use winnow::prelude::*;

/// Parse `"stop"`, `"start, stop"` or `"start, stop, step"`.
pub(crate) fn parse_range_args(input: &mut &str) -> Result<Vec<i64>, RangeParseError> {
    let args = range_args.parse_next(input)?;
    Ok(args)
}

fn range_args(input: &mut &str) -> winnow::Result<Vec<i64>> {
    delimited(
        space0,
        separated(1..=3, dec_int::<_, i64, _>, (space0, ',', space0)),
        (space0, eof),
    )
    .parse_next(input)
}

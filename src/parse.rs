use winnow::{
    ascii::{dec_uint, multispace0},
    combinator::{alt, cut_err, delimited, preceded},
    error::{
        StrContext::{Expected, Label},
        StrContextValue::{CharLiteral, Description},
    },
    PResult, Parser,
};

use crate::error::DieError;

/// Parses `d{sides}`, `D{sides}` or `d%` and returns the number of sides.
///
/// The side count is not validated here, `d0` parses to 0 and `d4294967296` to 4294967296.
pub(crate) fn parse_notation(notation: &str) -> Result<u64, DieError> {
    die_notation.parse(notation).map_err(|e| {
        tracing::debug!(notation, error = %e, "rejected die notation");
        DieError::InvalidNotation(e.to_string())
    })
}

fn die_notation(input: &mut &str) -> PResult<u64> {
    delimited(
        multispace0,
        preceded(
            alt(('d', 'D'))
                .context(Label("d"))
                .context(Expected(CharLiteral('d'))),
            cut_err(die_sides),
        ),
        multispace0,
    )
    .context(Label("Die"))
    .parse_next(input)
}

fn die_sides(input: &mut &str) -> PResult<u64> {
    alt((
        '%'.value(100)
            .context(Label("Percentile die"))
            .context(Expected(CharLiteral('%'))),
        dec_uint::<_, u64, _>
            .context(Label("sides"))
            .context(Expected(Description("number of sides"))),
    ))
    .parse_next(input)
}

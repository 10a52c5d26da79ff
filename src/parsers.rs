//! Reusable parsers for the `flexver` library.

use crate::component::Component;
use nom::branch::alt;
use nom::bytes::complete::take_while1;
use nom::combinator::map;
use nom::multi::many0;
use nom::{IResult, Parser};

/// Is this code point a digit as far as decomposition is concerned? Only
/// the ASCII digits count; digits of other scripts compare as ordinary
/// text.
pub(crate) fn is_digit(c: char) -> bool {
    c.is_ascii_digit()
}

/// A maximal run of decimal digits.
fn numeric(i: &str) -> IResult<&str, Component> {
    map(take_while1(is_digit), |run: &str| {
        Component::Numeric(run.to_string())
    })
    .parse(i)
}

/// A maximal run of anything that is not a decimal digit.
fn textual(i: &str) -> IResult<&str, Component> {
    map(take_while1(|c: char| !is_digit(c)), Component::textual).parse(i)
}

/// Alternating digit and non-digit runs. `take_while1` walks `char`s, so a
/// multi-byte code point is never split across two runs, and the two
/// predicates cover every `char` between them: any input parses in its
/// entirety.
pub(crate) fn components(i: &str) -> IResult<&str, Vec<Component>> {
    many0(alt((numeric, textual))).parse(i)
}

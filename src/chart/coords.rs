//! Coordinate literal parser
//!
//! Parses the text stored in a `coords` cell into rings of points. Only
//! nested list (or tuple) literals of plain decimal numbers are accepted:
//!
//! ```text
//! rings  := seq(ring)
//! ring   := seq(point)
//! point  := seq(number)        at least two ordinates, extras ignored
//! seq(x) := '[' [x (',' x)* [',']] ']' | '(' ... ')'
//! ```
//!
//! Nothing in the input is ever evaluated. Names, calls, strings and
//! operators are rejected with the byte offset where parsing stopped.

use nom::{
    branch::alt,
    character::complete::{char, multispace0},
    combinator::{all_consuming, cut, map, map_res, opt, verify},
    multi::separated_list0,
    number::complete::recognize_float,
    sequence::delimited,
    IResult,
};
use thiserror::Error;

/// A 2-D point; `x` is longitude, `y` is latitude
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

/// One polygon boundary as written in the literal (not closed)
pub type Ring = Vec<Point>;

/// Coordinate literal errors
#[derive(Error, Debug, Clone, PartialEq)]
pub enum CoordsError {
    /// Text is not a nested numeric list
    #[error("unexpected input at offset {offset}: '{snippet}'")]
    Malformed { offset: usize, snippet: String },

    /// Cell held something other than text
    #[error("coordinate cell is not text (found '{0}')")]
    NotText(String),
}

/// Parse a coordinate literal into its rings
pub fn parse_rings(text: &str) -> Result<Vec<Ring>, CoordsError> {
    let trimmed = text.trim();

    match all_consuming(rings)(trimmed) {
        Ok((_, rings)) => Ok(rings),
        Err(nom::Err::Error(e)) | Err(nom::Err::Failure(e)) => {
            let offset = trimmed.len() - e.input.len();
            Err(CoordsError::Malformed {
                offset,
                snippet: e.input.chars().take(24).collect(),
            })
        }
        Err(nom::Err::Incomplete(_)) => Err(CoordsError::Malformed {
            offset: trimmed.len(),
            snippet: String::new(),
        }),
    }
}

fn rings(input: &str) -> IResult<&str, Vec<Ring>> {
    sequence(ring)(input)
}

fn ring(input: &str) -> IResult<&str, Ring> {
    sequence(point)(input)
}

fn point(input: &str) -> IResult<&str, Point> {
    map(
        verify(sequence(number), |ordinates: &Vec<f64>| ordinates.len() >= 2),
        |ordinates| Point::new(ordinates[0], ordinates[1]),
    )(input)
}

fn number(input: &str) -> IResult<&str, f64> {
    map_res(recognize_float, str::parse::<f64>)(input)
}

/// A bracketed or parenthesized, comma-separated sequence of `item`
fn sequence<'a, O, F>(item: F) -> impl FnMut(&'a str) -> IResult<&'a str, Vec<O>>
where
    F: FnMut(&'a str) -> IResult<&'a str, O> + Copy,
{
    move |input: &'a str| alt((enclosed('[', ']', item), enclosed('(', ')', item)))(input)
}

fn enclosed<'a, O, F>(
    open: char,
    close: char,
    mut item: F,
) -> impl FnMut(&'a str) -> IResult<&'a str, Vec<O>>
where
    F: FnMut(&'a str) -> IResult<&'a str, O>,
{
    move |input: &'a str| {
        let (input, _) = char(open)(input)?;
        // Past the opening bracket the literal must be well formed
        cut(|input: &'a str| -> IResult<&'a str, Vec<O>> {
            let (input, _) = multispace0(input)?;
            let (input, items) =
                separated_list0(delimited(multispace0, char(','), multispace0), &mut item)(input)?;
            let (input, _) = multispace0(input)?;
            // A trailing comma is only valid after at least one item
            let (input, _) = if items.is_empty() {
                (input, None)
            } else {
                opt(char(','))(input)?
            };
            let (input, _) = multispace0(input)?;
            let (input, _) = char(close)(input)?;
            Ok((input, items))
        })(input)
    }
}

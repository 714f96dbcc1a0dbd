use nom::{
    IResult,
    branch::alt,
    bytes::complete::{tag, take_while},
    character::complete::{char, digit1, multispace0, one_of, satisfy},
    combinator::{map, map_res, opt, recognize},
    error::{Error, ErrorKind},
    multi::many0,
    sequence::{delimited, pair, preceded, tuple},
};

use crate::ParseError;

/// Deepest nesting of parentheses, calls, signs and exponents accepted.
pub(crate) const MAX_DEPTH: usize = 64;

/// Left-associative operators, applied in order within a [`ParseNode::Chain`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum BinOp {
    Add,
    Sub,
    Mul,
    Div,
}

/// Parse tree with unresolved names.
///
/// Names are resolved against the allow-list after parsing so that unknown
/// identifiers produce a precise error instead of a generic syntax error.
/// Runs of `+ -` or `* /` are kept flat, so the tree only deepens where the
/// input nests.
#[derive(Debug, Clone, PartialEq)]
pub(crate) enum ParseNode {
    Number(f64),
    Name(String),
    Call(String, Box<ParseNode>),
    Neg(Box<ParseNode>),
    Pow(Box<ParseNode>, Box<ParseNode>),
    Chain(Box<ParseNode>, Vec<(BinOp, ParseNode)>),
}

/// Parses a complete expression.
///
/// # Errors
///
/// Returns a [`ParseError`] for empty input, malformed syntax, nesting deeper
/// than [`MAX_DEPTH`], or input left over after a complete expression.
pub(crate) fn parse(source: &str) -> Result<ParseNode, ParseError> {
    if source.trim().is_empty() {
        return Err(ParseError::Empty);
    }

    let (remaining, node) = parse_expr(source, 0).map_err(|err| syntax_error(source, err))?;

    let remaining = remaining.trim();
    if !remaining.is_empty() {
        return Err(ParseError::UnconsumedInput(remaining.to_string()));
    }

    Ok(node)
}

fn syntax_error(source: &str, err: nom::Err<Error<&str>>) -> ParseError {
    let remaining = match err {
        nom::Err::Failure(e) if e.code == ErrorKind::TooLarge => {
            return ParseError::TooDeep { limit: MAX_DEPTH };
        }
        nom::Err::Error(e) | nom::Err::Failure(e) => e.input,
        nom::Err::Incomplete(_) => "",
    };
    let position = source.len() - remaining.len();
    let near = remaining.trim_start();
    let near = if near.is_empty() {
        "end of input".to_string()
    } else {
        near.chars().take(12).collect()
    };
    ParseError::Syntax { position, near }
}

// Numeric literals: 12, 1.5, .5, 3., 1e-8, 2.5E+3
fn parse_number(input: &str) -> IResult<&str, ParseNode> {
    let mantissa = alt((
        recognize(pair(digit1, opt(pair(char('.'), opt(digit1))))),
        recognize(pair(char('.'), digit1)),
    ));
    let exponent = tuple((one_of("eE"), opt(one_of("+-")), digit1));

    map_res(recognize(pair(mantissa, opt(exponent))), |text: &str| {
        text.parse::<f64>().map(ParseNode::Number)
    })(input)
}

// Identifiers start with a letter or underscore; `math.` is an optional prefix.
fn parse_identifier(input: &str) -> IResult<&str, &str> {
    let (input, _) = opt(tag("math."))(input)?;
    recognize(pair(
        satisfy(|c| c.is_ascii_alphabetic() || c == '_'),
        take_while(|c: char| c.is_ascii_alphanumeric() || c == '_'),
    ))(input)
}

// A name, optionally followed by a parenthesized argument.
fn parse_name_or_call(input: &str, depth: usize) -> IResult<&str, ParseNode> {
    let (input, name) = parse_identifier(input)?;
    let (input, arg) = opt(|i| parse_parens(i, depth))(input)?;

    let node = match arg {
        Some(arg) => ParseNode::Call(name.to_string(), Box::new(arg)),
        None => ParseNode::Name(name.to_string()),
    };
    Ok((input, node))
}

fn parse_parens(input: &str, depth: usize) -> IResult<&str, ParseNode> {
    delimited(
        preceded(multispace0, char('(')),
        |i| parse_expr(i, depth + 1),
        preceded(multispace0, char(')')),
    )(input)
}

fn parse_atom(input: &str, depth: usize) -> IResult<&str, ParseNode> {
    preceded(
        multispace0,
        alt((
            parse_number,
            |i| parse_name_or_call(i, depth),
            |i| parse_parens(i, depth),
        )),
    )(input)
}

// Power is right associative: 2^3^2 = 2^(3^2). The exponent may be signed.
fn parse_power(input: &str, depth: usize) -> IResult<&str, ParseNode> {
    let (input, base) = parse_atom(input, depth)?;
    let (input, exponent) = opt(preceded(
        preceded(multispace0, alt((tag("**"), tag("^")))),
        |i| parse_unary(i, depth + 1),
    ))(input)?;

    let node = match exponent {
        Some(exponent) => ParseNode::Pow(Box::new(base), Box::new(exponent)),
        None => base,
    };
    Ok((input, node))
}

// Every nesting path passes through here, so this is where depth is capped.
fn parse_unary(input: &str, depth: usize) -> IResult<&str, ParseNode> {
    if depth > MAX_DEPTH {
        return Err(nom::Err::Failure(Error::new(input, ErrorKind::TooLarge)));
    }
    alt((
        map(
            preceded(preceded(multispace0, char('-')), |i| {
                parse_unary(i, depth + 1)
            }),
            |node| ParseNode::Neg(Box::new(node)),
        ),
        preceded(preceded(multispace0, char('+')), |i| {
            parse_unary(i, depth + 1)
        }),
        |i| parse_power(i, depth),
    ))(input)
}

fn chain(first: ParseNode, rest: Vec<(BinOp, ParseNode)>) -> ParseNode {
    if rest.is_empty() {
        first
    } else {
        ParseNode::Chain(Box::new(first), rest)
    }
}

fn parse_term(input: &str, depth: usize) -> IResult<&str, ParseNode> {
    let op = map(preceded(multispace0, one_of("*/")), |c| match c {
        '*' => BinOp::Mul,
        _ => BinOp::Div,
    });
    let (input, first) = parse_unary(input, depth)?;
    let (input, rest) = many0(pair(op, |i| parse_unary(i, depth)))(input)?;
    Ok((input, chain(first, rest)))
}

fn parse_expr(input: &str, depth: usize) -> IResult<&str, ParseNode> {
    let op = map(preceded(multispace0, one_of("+-")), |c| match c {
        '+' => BinOp::Add,
        _ => BinOp::Sub,
    });
    let (input, first) = parse_term(input, depth)?;
    let (input, rest) = many0(pair(op, |i| parse_term(i, depth)))(input)?;
    Ok((input, chain(first, rest)))
}

//! Recursive-descent unit parser.
//!
//! Unit grammar:
//!
//! ```text
//! ValidUnit := Unit
//!            | ""                 # Dimensionless measurement
//! Unit      := Term
//!            | ( Unit )           # Grouping
//!            | Unit ^ Integer     # Unit exponentiation
//!            | Unit / Unit        # Unit division
//!            | Unit · Unit        # Unit multiplication (· is center dot)
//!            | Unit " " Unit      # Unit multiplication (" " is whitespace)
//! Term      := Prefix? Symbol
//! Integer   := -? [0-9]+          # fits in i8
//! ```
//!
//! Examples:
//! - A newton: `N`, `kg m s^-2`, `kg·m/s^2`
//! - A pascal: `Pa`, `N/m^2`
//! - A litre: `l`, `L`, `dm^3`
//!
//! Division associates to the right: `a/b/c` is `a/(b/c)`. The SI leaves
//! this unspecified, so callers should parenthesize instead of relying on it.

use mu_core::{Exponent, ParsedUnit};
use mu_tables::Tables;
use tracing::trace;

use crate::cursor::Cursor;
use crate::error::{Failure, ParseError, ParseErrorKind, ParseResult};

/// Deepest parenthesis nesting accepted before the parse is abandoned.
pub const MAX_DEPTH: usize = 256;

type Step<'a, T> = Result<(T, Cursor<'a>), Failure>;

#[derive(Debug, Clone, Copy)]
enum Combinator {
    Multiply,
    Divide,
}

/// Unit parser over a shared, read-only set of tables.
#[derive(Debug, Clone, Copy)]
pub struct UnitParser<'t> {
    tables: &'t Tables,
}

impl<'t> UnitParser<'t> {
    pub fn new(tables: &'t Tables) -> Self {
        Self { tables }
    }

    /// Parse a complete unit expression. Empty text is dimensionless.
    pub fn parse(&self, text: &str) -> ParseResult<ParsedUnit> {
        if text.is_empty() {
            return Ok(ParsedUnit::dimensionless());
        }

        let (unit, cur) = self
            .unit(Cursor::new(text), 0)
            .map_err(|failure| failure.into_error(text))?;

        let (cur, _) = cur.skip_whitespace();
        if !cur.is_at_end() {
            return Err(ParseError::new(
                text,
                cur.pos(),
                ParseErrorKind::UnparsedText,
            ));
        }
        Ok(unit)
    }

    /// A chain of factors joined by `/`, `·` or whitespace.
    ///
    /// The chain is collected left to right and folded from the right, so
    /// `a/b/c` is `a/(b/c)`. Only parentheses add to `depth`.
    fn unit<'a>(&self, cur: Cursor<'a>, depth: usize) -> Step<'a, ParsedUnit> {
        if depth >= MAX_DEPTH {
            return Err(Failure::new(ParseErrorKind::TooDeep(MAX_DEPTH), cur.pos()));
        }

        let (first, mut cur, mut had_space) = self.factor(cur, depth)?;
        let mut operands = vec![first];
        let mut ops: Vec<Combinator> = Vec::new();
        // Where the latest implicit multiplication began. A failure after it
        // ends the unit there and leaves the rest for the caller to judge.
        let mut implicit_start: Option<(usize, Cursor<'a>)> = None;

        loop {
            let (op, rhs) = if let Some(rhs) = cur.eat('/') {
                (Combinator::Divide, rhs)
            } else if let Some(rhs) = cur.eat('·') {
                (Combinator::Multiply, rhs)
            } else if had_space {
                implicit_start = Some((operands.len(), cur));
                (Combinator::Multiply, cur)
            } else {
                break;
            };

            match self.factor(rhs, depth) {
                Ok((unit, after, space)) => {
                    ops.push(op);
                    operands.push(unit);
                    (cur, had_space) = (after, space);
                }
                Err(failure) if matches!(failure.kind, ParseErrorKind::TooDeep(_)) => {
                    return Err(failure);
                }
                Err(failure) => match implicit_start {
                    Some((len, start)) => {
                        operands.truncate(len);
                        ops.truncate(len - 1);
                        cur = start;
                        break;
                    }
                    None => return Err(failure),
                },
            }
        }

        let mut unit = operands.pop().unwrap_or_default();
        while let (Some(op), Some(lhs)) = (ops.pop(), operands.pop()) {
            unit = match op {
                Combinator::Divide => lhs.multiply(&unit.reciprocal()),
                Combinator::Multiply => lhs.multiply(&unit),
            };
        }
        Ok((unit, cur))
    }

    /// `( Unit )` or a Term, with an optional `^Integer`. Also reports
    /// whether whitespace followed it.
    fn factor<'a>(
        &self,
        cur: Cursor<'a>,
        depth: usize,
    ) -> Result<(ParsedUnit, Cursor<'a>, bool), Failure> {
        let (cur, _) = cur.skip_whitespace();

        let (mut unit, cur) = match cur.eat('(') {
            Some(inner) => {
                let (unit, after) = self.unit(inner, depth + 1)?;
                let after = after
                    .eat(')')
                    .ok_or_else(|| Failure::new(ParseErrorKind::RuneNotFound(')'), after.pos()))?;
                (unit, after)
            }
            None => self.term(cur)?,
        };

        let (mut cur, mut had_space) = cur.skip_whitespace();
        if let Some(step) = self.exponent(cur) {
            let (exp, after) = step?;
            unit = unit.exponentiate(exp);
            (cur, had_space) = after.skip_whitespace();
        }
        Ok((unit, cur, had_space))
    }

    fn term<'a>(&self, start: Cursor<'a>) -> Step<'a, ParsedUnit> {
        // Term := Prefix Symbol
        if let Ok((scale, after_prefix)) = self.prefix(start) {
            if let Ok((unit, after)) = self.symbol(after_prefix) {
                trace!(
                    term = start.slice_to(after),
                    scale,
                    "resolved prefixed symbol"
                );
                return Ok((unit.with_scale_offset(scale), after));
            }
        }

        // Some symbols start with a prefix (m(illi) and m(etre), P(eta) and
        // Pa), so fall back to Term := Symbol.
        let (unit, after) = self.symbol(start)?;
        trace!(term = start.slice_to(after), "resolved bare symbol");
        Ok((unit.clone(), after))
    }

    pub(crate) fn prefix<'a>(&self, cur: Cursor<'a>) -> Step<'a, i32> {
        self.tables
            .match_prefix(cur.rest())
            .map(|p| (p.scale, cur.advance(p.key.len())))
            .ok_or_else(|| Failure::new(ParseErrorKind::PrefixNotFound, cur.pos()))
    }

    fn symbol<'a>(&self, cur: Cursor<'a>) -> Step<'a, &'t ParsedUnit> {
        self.tables
            .match_symbol(cur.rest())
            .map(|s| (&s.unit, cur.advance(s.key.len())))
            .ok_or_else(|| Failure::new(ParseErrorKind::SymbolNotFound, cur.pos()))
    }

    /// `None` when no `^` follows; otherwise the parsed integer or why it
    /// is not one.
    fn exponent<'a>(&self, cur: Cursor<'a>) -> Option<Step<'a, Exponent>> {
        let digits = cur.eat('^')?;
        let end = digits.scan_integer();
        let literal = digits.slice_to(end);
        Some(
            literal
                .parse::<Exponent>()
                .map(|exp| (exp, end))
                .map_err(|_| {
                    Failure::new(
                        ParseErrorKind::InvalidExponent(literal.to_string()),
                        digits.pos(),
                    )
                }),
        )
    }
}

/// Parse `text` against `tables`.
pub fn parse_unit(tables: &Tables, text: &str) -> ParseResult<ParsedUnit> {
    UnitParser::new(tables).parse(text)
}

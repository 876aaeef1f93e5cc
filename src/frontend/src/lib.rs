mod parser;

use model::Time;

/// Times read from a text listing, in file order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Listing {
    pub times: Vec<Time>,
}

impl TryFrom<&str> for Listing {
    type Error = anyhow::Error;

    fn try_from(src: &str) -> Result<Self, Self::Error> {
        use chumsky::Parser;

        let times = match parser::listing_parser().parse(src).into_result() {
            Ok(times) => times,
            Err(errs) => anyhow::bail!(errs
                .iter()
                .map(|err| {
                    let (line, column) = line_and_column(src, err.span().start);
                    format!("line {line}, column {column}: {err}")
                })
                .collect::<Vec<_>>()
                .join(", ")),
        };

        Ok(Listing { times })
    }
}

/// 1-based position of a byte offset into `src`.
fn line_and_column(src: &str, offset: usize) -> (usize, usize) {
    let before = &src[..offset.min(src.len())];
    let line = before.matches('\n').count() + 1;
    let column = before.chars().rev().take_while(|&c| c != '\n').count() + 1;
    (line, column)
}

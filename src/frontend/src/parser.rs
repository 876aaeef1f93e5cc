use {
    chumsky::prelude::{Parser as ChumskyParser, *},
    model::Time,
};

pub(super) trait Parser<'src, Output>:
    ChumskyParser<'src, &'src str, Output, extra::Err<Rich<'src, char>>> + Clone
{
}
impl<
        'src,
        Output,
        T: ChumskyParser<'src, &'src str, Output, extra::Err<Rich<'src, char>>> + Clone,
    > Parser<'src, Output> for T
{
}

fn field_parser<'src>() -> impl Parser<'src, i32> {
    just('-')
        .or_not()
        .then(text::digits(10))
        .to_slice()
        .validate(|digits: &str, e, emitter| {
            digits.parse::<i32>().unwrap_or_else(|err| {
                emitter.emit(Rich::custom(
                    e.span(),
                    format!("invalid field `{digits}`: {err}"),
                ));
                0
            })
        })
}

fn time_parser<'src>() -> impl Parser<'src, Time> {
    field_parser()
        .then_ignore(just(':'))
        .then(field_parser())
        .then_ignore(just(':'))
        .then(field_parser())
        .map(|((hours, minutes), seconds)| Time::new(hours, minutes, seconds))
}

fn comment_parser<'src>() -> impl Parser<'src, ()> {
    just('#').then(none_of('\n').repeated()).padded().ignored()
}

pub(super) fn listing_parser<'src>() -> impl Parser<'src, Vec<Time>> {
    comment_parser()
        .repeated()
        .ignore_then(
            time_parser()
                .padded()
                .then_ignore(comment_parser().repeated())
                .repeated()
                .collect(),
        )
        .padded()
        .then_ignore(end())
}

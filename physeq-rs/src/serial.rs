//! The `magnitude,scale,u0,u1,u2,u3,u4,u5,u6` text form of a quantity.

use crate::error::EquationError;
use crate::quantity::Quantity;
use crate::unit::{BASE_DIMENSIONS, UnitVector};
use chumsky::error::Rich;
use chumsky::prelude::*;
use chumsky::{IterParser, extra};
use std::fmt::Display;
use std::str::FromStr;

fn parser<'a>() -> impl Parser<'a, &'a str, Quantity, extra::Err<Rich<'a, char>>> {
    let field = none_of(",")
        .repeated()
        .at_least(1)
        .to_slice()
        .map(|text: &str| text.trim());
    let magnitude = field.clone().try_map(|text, span| {
        text.parse::<f64>()
            .map_err(|err| Rich::custom(span, format!("invalid magnitude `{}`: {}", text, err)))
    });
    let integer = field.try_map(|text, span| {
        text.parse::<i32>()
            .map_err(|err| Rich::custom(span, format!("invalid integer `{}`: {}", text, err)))
    });
    let exponents = integer
        .clone()
        .separated_by(just(','))
        .exactly(BASE_DIMENSIONS)
        .collect::<Vec<i32>>()
        .try_map(|exponents, span| {
            <[i32; BASE_DIMENSIONS]>::try_from(exponents)
                .map_err(|_| Rich::custom(span, "expected seven unit exponents"))
        });
    magnitude
        .then_ignore(just(','))
        .then(integer)
        .then_ignore(just(','))
        .then(exponents)
        .then_ignore(just(',').or_not())
        .then_ignore(end())
        .map(|((magnitude, scale), exponents)| {
            Quantity::new(magnitude, scale, UnitVector::new(exponents))
        })
}

impl FromStr for Quantity {
    type Err = EquationError;

    fn from_str(input: &str) -> Result<Self, Self::Err> {
        parser()
            .parse(input.trim())
            .into_result()
            .map_err(|errors| EquationError::MalformedSerializedQuantity {
                input: input.to_string(),
                reason: errors
                    .iter()
                    .map(|error| error.to_string())
                    .collect::<Vec<_>>()
                    .join("; "),
            })
    }
}

impl Display for Quantity {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{},{},{}", self.magnitude(), self.scale(), self.unit())
    }
}

//! The aggregate directive and its fixed function enumeration.

use serde::{Deserialize, Serialize};

use crate::error::InvalidDirective;

/// An aggregation function, spelled as the API expects it (`count`, `avgDistinct`, ...).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum AggregateFunction {
    /// Count the number of items (`count`).
    Count,
    /// Count the number of distinct values (`countDistinct`).
    CountDistinct,
    /// Sum the values (`sum`).
    Sum,
    /// Sum the distinct values (`sumDistinct`).
    SumDistinct,
    /// Average the values (`avg`).
    Avg,
    /// Average the distinct values (`avgDistinct`).
    AvgDistinct,
    /// Smallest value (`min`).
    Min,
    /// Largest value (`max`).
    Max,
}

impl AggregateFunction {
    /// The wire spelling of the function.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Count => "count",
            Self::CountDistinct => "countDistinct",
            Self::Sum => "sum",
            Self::SumDistinct => "sumDistinct",
            Self::Avg => "avg",
            Self::AvgDistinct => "avgDistinct",
            Self::Min => "min",
            Self::Max => "max",
        }
    }
}

impl std::fmt::Display for AggregateFunction {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl std::str::FromStr for AggregateFunction {
    type Err = InvalidDirective;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "count" => Ok(Self::Count),
            "countDistinct" => Ok(Self::CountDistinct),
            "sum" => Ok(Self::Sum),
            "sumDistinct" => Ok(Self::SumDistinct),
            "avg" => Ok(Self::Avg),
            "avgDistinct" => Ok(Self::AvgDistinct),
            "min" => Ok(Self::Min),
            "max" => Ok(Self::Max),
            _ => Err(InvalidDirective::UnknownFunction(s.to_string())),
        }
    }
}

/// The aggregate directive: one function applied to one or more fields.
///
/// Renders as a single `aggregate[<function>]` key whose value comma-joins
/// the target fields in the given order. The wildcard `*` is a valid target
/// for `count`.
///
/// ```
/// use rectus_query::{Aggregate, AggregateFunction};
///
/// let agg = Aggregate::new(AggregateFunction::Sum, ["price", "qty"]).unwrap();
/// assert_eq!(agg.render(), vec![("aggregate[sum]".to_string(), "price,qty".to_string())]);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Aggregate {
    func: AggregateFunction,
    fields: Vec<String>,
}

impl Aggregate {
    /// Build an aggregate over the given target fields.
    ///
    /// # Errors
    ///
    /// Returns [`InvalidDirective::NoFields`] if `fields` is empty and
    /// [`InvalidDirective::EmptyField`] if any target is an empty string.
    pub fn new<I, S>(func: AggregateFunction, fields: I) -> Result<Self, InvalidDirective>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let fields: Vec<String> = fields.into_iter().map(Into::into).collect();
        if fields.is_empty() {
            return Err(InvalidDirective::NoFields {
                directive: "aggregate",
            });
        }
        if fields.iter().any(|f| f.is_empty()) {
            return Err(InvalidDirective::EmptyField {
                directive: "aggregate",
            });
        }
        Ok(Self { func, fields })
    }

    /// The aggregation function.
    pub fn func(&self) -> AggregateFunction {
        self.func
    }

    /// The target fields, in the order they will render.
    pub fn fields(&self) -> &[String] {
        &self.fields
    }

    /// Render to the single `aggregate[<function>]` pair.
    pub fn render(&self) -> Vec<(String, String)> {
        vec![(
            format!("aggregate[{}]", self.func.as_str()),
            self.fields.join(","),
        )]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn key_is_aggregate_bracket_function() {
        let agg = Aggregate::new(AggregateFunction::Sum, ["price", "qty"]).unwrap();
        assert_eq!(
            agg.render(),
            vec![("aggregate[sum]".to_string(), "price,qty".to_string())]
        );
    }

    #[test]
    fn wildcard_count() {
        let agg = Aggregate::new(AggregateFunction::Count, ["*"]).unwrap();
        assert_eq!(
            agg.render(),
            vec![("aggregate[count]".to_string(), "*".to_string())]
        );
    }

    #[test]
    fn field_order_is_preserved() {
        let agg = Aggregate::new(AggregateFunction::Max, ["b", "a", "c"]).unwrap();
        assert_eq!(agg.render()[0].1, "b,a,c");
    }

    #[test]
    fn zero_fields_is_rejected() {
        let err = Aggregate::new(AggregateFunction::Count, Vec::<String>::new()).unwrap_err();
        assert_eq!(
            err,
            InvalidDirective::NoFields {
                directive: "aggregate"
            }
        );
    }

    #[test]
    fn camel_case_functions_parse_and_print() {
        for spelling in [
            "count",
            "countDistinct",
            "sum",
            "sumDistinct",
            "avg",
            "avgDistinct",
            "min",
            "max",
        ] {
            let func: AggregateFunction = spelling.parse().unwrap();
            assert_eq!(func.as_str(), spelling);
        }
        assert!("median".parse::<AggregateFunction>().is_err());
    }
}

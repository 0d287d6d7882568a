//! The filter directive and its fixed operator enumeration.
//!
//! Filter rules address a (possibly nested) field path and apply one operator
//! from the API's fixed set. On the wire a rule becomes a single bracketed
//! key with the operator innermost: `filter[author][name][_eq]=Rijk`.

use serde::{Deserialize, Serialize};

use crate::error::InvalidDirective;

/// A filter operator, spelled exactly as the API expects it (`_eq`, `_nin`, ...).
///
/// The set is fixed by the API contract; there is no extension point. Use
/// [`FilterOp::as_str`] for the wire spelling and `parse()` to go the other
/// way:
///
/// ```
/// use rectus_query::FilterOp;
///
/// let op: FilterOp = "_icontains".parse().unwrap();
/// assert_eq!(op, FilterOp::ContainsCi);
/// assert_eq!(op.as_str(), "_icontains");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum FilterOp {
    /// Equal to (`_eq`).
    #[serde(rename = "_eq")]
    Eq,
    /// Not equal to (`_neq`).
    #[serde(rename = "_neq")]
    Neq,
    /// Less than (`_lt`).
    #[serde(rename = "_lt")]
    Lt,
    /// Less than or equal to (`_lte`).
    #[serde(rename = "_lte")]
    Lte,
    /// Greater than (`_gt`).
    #[serde(rename = "_gt")]
    Gt,
    /// Greater than or equal to (`_gte`).
    #[serde(rename = "_gte")]
    Gte,
    /// Member of the given set (`_in`).
    #[serde(rename = "_in")]
    In,
    /// Not a member of the given set (`_nin`).
    #[serde(rename = "_nin")]
    NotIn,
    /// Is `null` (`_null`).
    #[serde(rename = "_null")]
    Null,
    /// Is not `null` (`_nnull`).
    #[serde(rename = "_nnull")]
    NotNull,
    /// Contains the substring (`_contains`).
    #[serde(rename = "_contains")]
    Contains,
    /// Does not contain the substring (`_ncontains`).
    #[serde(rename = "_ncontains")]
    NotContains,
    /// Contains the substring, case-insensitive (`_icontains`).
    #[serde(rename = "_icontains")]
    ContainsCi,
    /// Does not contain the substring, case-insensitive (`_nicontains`).
    #[serde(rename = "_nicontains")]
    NotContainsCi,
    /// Starts with the prefix (`_starts_with`).
    #[serde(rename = "_starts_with")]
    StartsWith,
    /// Starts with the prefix, case-insensitive (`_istarts_with`).
    #[serde(rename = "_istarts_with")]
    StartsWithCi,
    /// Does not start with the prefix (`_nstarts_with`).
    #[serde(rename = "_nstarts_with")]
    NotStartsWith,
    /// Does not start with the prefix, case-insensitive (`_nistarts_with`).
    #[serde(rename = "_nistarts_with")]
    NotStartsWithCi,
    /// Ends with the suffix (`_ends_with`).
    #[serde(rename = "_ends_with")]
    EndsWith,
    /// Ends with the suffix, case-insensitive (`_iends_with`).
    #[serde(rename = "_iends_with")]
    EndsWithCi,
    /// Does not end with the suffix (`_nends_with`).
    #[serde(rename = "_nends_with")]
    NotEndsWith,
    /// Does not end with the suffix, case-insensitive (`_niends_with`).
    #[serde(rename = "_niends_with")]
    NotEndsWithCi,
    /// Between the two given values, inclusive (`_between`).
    #[serde(rename = "_between")]
    Between,
    /// Not between the two given values (`_nbetween`).
    #[serde(rename = "_nbetween")]
    NotBetween,
    /// Is empty: `null` or an empty string (`_empty`).
    #[serde(rename = "_empty")]
    Empty,
    /// Is not empty (`_nempty`).
    #[serde(rename = "_nempty")]
    NotEmpty,
    /// Geometry intersects the given geometry (`_intersects`).
    #[serde(rename = "_intersects")]
    Intersects,
    /// Geometry does not intersect the given geometry (`_nintersects`).
    #[serde(rename = "_nintersects")]
    NotIntersects,
    /// Geometry intersects the given bounding box (`_intersects_bbox`).
    #[serde(rename = "_intersects_bbox")]
    IntersectsBbox,
    /// Geometry does not intersect the given bounding box (`_nintersects_bbox`).
    #[serde(rename = "_nintersects_bbox")]
    NotIntersectsBbox,
    /// Matches the given regular expression (`_regex`).
    #[serde(rename = "_regex")]
    Regex,
    /// At least one related item matches (`_some`).
    #[serde(rename = "_some")]
    MatchesSome,
    /// No related item matches (`_none`).
    #[serde(rename = "_none")]
    MatchesNone,
}

impl FilterOp {
    /// The wire spelling of the operator, underscore prefix included.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Eq => "_eq",
            Self::Neq => "_neq",
            Self::Lt => "_lt",
            Self::Lte => "_lte",
            Self::Gt => "_gt",
            Self::Gte => "_gte",
            Self::In => "_in",
            Self::NotIn => "_nin",
            Self::Null => "_null",
            Self::NotNull => "_nnull",
            Self::Contains => "_contains",
            Self::NotContains => "_ncontains",
            Self::ContainsCi => "_icontains",
            Self::NotContainsCi => "_nicontains",
            Self::StartsWith => "_starts_with",
            Self::StartsWithCi => "_istarts_with",
            Self::NotStartsWith => "_nstarts_with",
            Self::NotStartsWithCi => "_nistarts_with",
            Self::EndsWith => "_ends_with",
            Self::EndsWithCi => "_iends_with",
            Self::NotEndsWith => "_nends_with",
            Self::NotEndsWithCi => "_niends_with",
            Self::Between => "_between",
            Self::NotBetween => "_nbetween",
            Self::Empty => "_empty",
            Self::NotEmpty => "_nempty",
            Self::Intersects => "_intersects",
            Self::NotIntersects => "_nintersects",
            Self::IntersectsBbox => "_intersects_bbox",
            Self::NotIntersectsBbox => "_nintersects_bbox",
            Self::Regex => "_regex",
            Self::MatchesSome => "_some",
            Self::MatchesNone => "_none",
        }
    }
}

impl std::fmt::Display for FilterOp {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl std::str::FromStr for FilterOp {
    type Err = InvalidDirective;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "_eq" => Ok(Self::Eq),
            "_neq" => Ok(Self::Neq),
            "_lt" => Ok(Self::Lt),
            "_lte" => Ok(Self::Lte),
            "_gt" => Ok(Self::Gt),
            "_gte" => Ok(Self::Gte),
            "_in" => Ok(Self::In),
            "_nin" => Ok(Self::NotIn),
            "_null" => Ok(Self::Null),
            "_nnull" => Ok(Self::NotNull),
            "_contains" => Ok(Self::Contains),
            "_ncontains" => Ok(Self::NotContains),
            "_icontains" => Ok(Self::ContainsCi),
            "_nicontains" => Ok(Self::NotContainsCi),
            "_starts_with" => Ok(Self::StartsWith),
            "_istarts_with" => Ok(Self::StartsWithCi),
            "_nstarts_with" => Ok(Self::NotStartsWith),
            "_nistarts_with" => Ok(Self::NotStartsWithCi),
            "_ends_with" => Ok(Self::EndsWith),
            "_iends_with" => Ok(Self::EndsWithCi),
            "_nends_with" => Ok(Self::NotEndsWith),
            "_niends_with" => Ok(Self::NotEndsWithCi),
            "_between" => Ok(Self::Between),
            "_nbetween" => Ok(Self::NotBetween),
            "_empty" => Ok(Self::Empty),
            "_nempty" => Ok(Self::NotEmpty),
            "_intersects" => Ok(Self::Intersects),
            "_nintersects" => Ok(Self::NotIntersects),
            "_intersects_bbox" => Ok(Self::IntersectsBbox),
            "_nintersects_bbox" => Ok(Self::NotIntersectsBbox),
            "_regex" => Ok(Self::Regex),
            "_some" => Ok(Self::MatchesSome),
            "_none" => Ok(Self::MatchesNone),
            _ => Err(InvalidDirective::UnknownOperator(s.to_string())),
        }
    }
}

/// A server-resolved dynamic variable usable as a filter value.
///
/// These render as the literal `$`-prefixed tokens the API substitutes at
/// request time (e.g. `filter[user_created][_eq]=$CURRENT_USER`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum DynamicValue {
    /// The primary key of the authenticated user (`$CURRENT_USER`).
    #[serde(rename = "$CURRENT_USER")]
    CurrentUser,
    /// The role of the authenticated user (`$CURRENT_ROLE`).
    #[serde(rename = "$CURRENT_ROLE")]
    CurrentRole,
    /// The current server timestamp (`$NOW`).
    #[serde(rename = "$NOW")]
    Now,
}

impl DynamicValue {
    /// The wire spelling of the variable, `$` prefix included.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::CurrentUser => "$CURRENT_USER",
            Self::CurrentRole => "$CURRENT_ROLE",
            Self::Now => "$NOW",
        }
    }
}

impl std::fmt::Display for DynamicValue {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// The comparison value carried by a [`Filter`].
///
/// Lists render comma-joined (`_in`, `_between` take list values); dynamic
/// variables render as their `$`-prefixed token. `From` impls cover the
/// common scalar types so call sites can pass literals directly.
#[derive(Debug, Clone, PartialEq)]
pub enum FilterValue {
    /// A string value, rendered as-is (URL encoding is the transport's job).
    Str(String),
    /// An integer value.
    Int(i64),
    /// A floating point value.
    Float(f64),
    /// A boolean value, rendered `true`/`false`.
    Bool(bool),
    /// A list of values, rendered comma-joined in order.
    List(Vec<FilterValue>),
    /// A server-resolved dynamic variable.
    Dynamic(DynamicValue),
}

impl std::fmt::Display for FilterValue {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Str(s) => f.write_str(s),
            Self::Int(i) => write!(f, "{i}"),
            Self::Float(x) => write!(f, "{x}"),
            Self::Bool(b) => write!(f, "{b}"),
            Self::List(items) => {
                for (i, item) in items.iter().enumerate() {
                    if i > 0 {
                        f.write_str(",")?;
                    }
                    write!(f, "{item}")?;
                }
                Ok(())
            }
            Self::Dynamic(d) => f.write_str(d.as_str()),
        }
    }
}

impl From<&str> for FilterValue {
    fn from(s: &str) -> Self {
        Self::Str(s.to_string())
    }
}

impl From<String> for FilterValue {
    fn from(s: String) -> Self {
        Self::Str(s)
    }
}

impl From<i64> for FilterValue {
    fn from(i: i64) -> Self {
        Self::Int(i)
    }
}

impl From<i32> for FilterValue {
    fn from(i: i32) -> Self {
        Self::Int(i64::from(i))
    }
}

impl From<f64> for FilterValue {
    fn from(x: f64) -> Self {
        Self::Float(x)
    }
}

impl From<bool> for FilterValue {
    fn from(b: bool) -> Self {
        Self::Bool(b)
    }
}

impl From<DynamicValue> for FilterValue {
    fn from(d: DynamicValue) -> Self {
        Self::Dynamic(d)
    }
}

impl<V: Into<FilterValue>> From<Vec<V>> for FilterValue {
    fn from(items: Vec<V>) -> Self {
        Self::List(items.into_iter().map(Into::into).collect())
    }
}

/// A single filter rule: one field path, one operator, one value.
///
/// The field path may traverse relations with dots (`author.name`); each
/// segment becomes a bracket level in the rendered key.
///
/// ```
/// use rectus_query::{Filter, FilterOp};
///
/// let pair = Filter::new("author.name", FilterOp::Eq, "Rijk").unwrap().render();
/// assert_eq!(pair, vec![("filter[author][name][_eq]".to_string(), "Rijk".to_string())]);
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct Filter {
    field: String,
    op: FilterOp,
    value: FilterValue,
}

impl Filter {
    /// Build a filter rule against `field` (dot-separated for nested paths).
    ///
    /// # Errors
    ///
    /// Returns [`InvalidDirective::EmptyField`] if the path or any of its
    /// segments is empty.
    pub fn new(
        field: impl Into<String>,
        op: FilterOp,
        value: impl Into<FilterValue>,
    ) -> Result<Self, InvalidDirective> {
        let field = field.into();
        if field.is_empty() || field.split('.').any(str::is_empty) {
            return Err(InvalidDirective::EmptyField {
                directive: "filter",
            });
        }
        Ok(Self {
            field,
            op,
            value: value.into(),
        })
    }

    /// The targeted field path.
    pub fn field(&self) -> &str {
        &self.field
    }

    /// The operator applied to the field.
    pub fn op(&self) -> FilterOp {
        self.op
    }

    /// Render to the single `filter[..][_op]` pair.
    pub fn render(&self) -> Vec<(String, String)> {
        let mut key = String::from("filter");
        for segment in self.field.split('.') {
            key.push('[');
            key.push_str(segment);
            key.push(']');
        }
        key.push('[');
        key.push_str(self.op.as_str());
        key.push(']');
        vec![(key, self.value.to_string())]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn renders_single_pair_with_field_and_op() {
        let filter = Filter::new("status", FilterOp::Eq, "published").unwrap();
        let pairs = filter.render();
        assert_eq!(pairs.len(), 1);
        assert_eq!(pairs[0].0, "filter[status][_eq]");
        assert_eq!(pairs[0].1, "published");
    }

    #[test]
    fn nested_path_becomes_bracket_levels() {
        let filter = Filter::new("author.name", FilterOp::ContainsCi, "rijk").unwrap();
        assert_eq!(
            filter.render(),
            vec![("filter[author][name][_icontains]".to_string(), "rijk".to_string())]
        );
    }

    #[test]
    fn list_values_join_with_commas() {
        let filter = Filter::new("id", FilterOp::In, vec![1, 2, 3]).unwrap();
        assert_eq!(filter.render()[0].1, "1,2,3");

        let between = Filter::new("price", FilterOp::Between, vec![9.99, 19.99]).unwrap();
        assert_eq!(between.render()[0], ("filter[price][_between]".to_string(), "9.99,19.99".to_string()));
    }

    #[test]
    fn dynamic_values_render_dollar_tokens() {
        let filter = Filter::new("user_created", FilterOp::Eq, DynamicValue::CurrentUser).unwrap();
        assert_eq!(filter.render()[0].1, "$CURRENT_USER");
    }

    #[test]
    fn every_operator_has_a_stable_wire_spelling() {
        // FromStr and as_str must agree for the full fixed set.
        for spelling in [
            "_eq", "_neq", "_lt", "_lte", "_gt", "_gte", "_in", "_nin", "_null", "_nnull",
            "_contains", "_ncontains", "_icontains", "_nicontains", "_starts_with",
            "_istarts_with", "_nstarts_with", "_nistarts_with", "_ends_with", "_iends_with",
            "_nends_with", "_niends_with", "_between", "_nbetween", "_empty", "_nempty",
            "_intersects", "_nintersects", "_intersects_bbox", "_nintersects_bbox", "_regex",
            "_some", "_none",
        ] {
            let op: FilterOp = spelling.parse().unwrap();
            assert_eq!(op.as_str(), spelling);
        }
    }

    #[test]
    fn unknown_operator_is_rejected() {
        let err = "_bogus".parse::<FilterOp>().unwrap_err();
        assert_eq!(err, InvalidDirective::UnknownOperator("_bogus".to_string()));

        // Missing underscore prefix is not the wire spelling either.
        assert!("eq".parse::<FilterOp>().is_err());
    }

    #[test]
    fn empty_field_path_is_rejected() {
        assert!(matches!(
            Filter::new("", FilterOp::Eq, 1),
            Err(InvalidDirective::EmptyField { directive: "filter" })
        ));
        assert!(Filter::new("a..b", FilterOp::Eq, 1).is_err());
    }
}

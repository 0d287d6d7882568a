//! The scalar and list-shaped query directives, and the closed [`Directive`]
//! variant that unifies all of them behind one `render` operation.
//!
//! Every directive renders to plain key/value string pairs; URL encoding is
//! left to the transport that eventually ships the query string.

use serde::{Deserialize, Serialize};

use crate::aggregate::Aggregate;
use crate::error::InvalidDirective;
use crate::filter::Filter;

/// A datetime/count function applicable to a field selector.
///
/// Used inside [`Fields`] and [`GroupBy`] lists, where the API accepts
/// selectors like `year(date_created)`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FieldFunction {
    /// Extract the year (`year`).
    Year,
    /// Extract the month (`month`).
    Month,
    /// Extract the ISO week number (`week`).
    Week,
    /// Extract the day of the month (`day`).
    Day,
    /// Extract the day of the week (`weekday`).
    Weekday,
    /// Extract the hour (`hour`).
    Hour,
    /// Extract the minute (`minute`).
    Minute,
    /// Extract the second (`second`).
    Second,
    /// Count of related items (`count`).
    Count,
}

impl FieldFunction {
    /// The wire spelling of the function.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Year => "year",
            Self::Month => "month",
            Self::Week => "week",
            Self::Day => "day",
            Self::Weekday => "weekday",
            Self::Hour => "hour",
            Self::Minute => "minute",
            Self::Second => "second",
            Self::Count => "count",
        }
    }

    /// Wrap a field name in this function: `year(date_created)`.
    pub fn applied_to(&self, field: &str) -> String {
        format!("{}({field})", self.as_str())
    }
}

impl std::fmt::Display for FieldFunction {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl std::str::FromStr for FieldFunction {
    type Err = InvalidDirective;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "year" => Ok(Self::Year),
            "month" => Ok(Self::Month),
            "week" => Ok(Self::Week),
            "day" => Ok(Self::Day),
            "weekday" => Ok(Self::Weekday),
            "hour" => Ok(Self::Hour),
            "minute" => Ok(Self::Minute),
            "second" => Ok(Self::Second),
            "count" => Ok(Self::Count),
            _ => Err(InvalidDirective::UnknownFieldFunction(s.to_string())),
        }
    }
}

/// Output format for the export directive.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ExportFormat {
    /// Comma-separated values.
    Csv,
    /// JSON document.
    Json,
    /// XML document.
    Xml,
    /// YAML document.
    Yaml,
}

impl ExportFormat {
    /// The wire spelling of the format.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Csv => "csv",
            Self::Json => "json",
            Self::Xml => "xml",
            Self::Yaml => "yaml",
        }
    }
}

impl std::fmt::Display for ExportFormat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl std::str::FromStr for ExportFormat {
    type Err = InvalidDirective;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "csv" => Ok(Self::Csv),
            "json" => Ok(Self::Json),
            "xml" => Ok(Self::Xml),
            "yaml" => Ok(Self::Yaml),
            _ => Err(InvalidDirective::UnknownExportFormat(s.to_string())),
        }
    }
}

/// Validate a non-empty list of non-empty field selectors.
fn field_list<I, S>(directive: &'static str, fields: I) -> Result<Vec<String>, InvalidDirective>
where
    I: IntoIterator<Item = S>,
    S: Into<String>,
{
    let fields: Vec<String> = fields.into_iter().map(Into::into).collect();
    if fields.is_empty() {
        return Err(InvalidDirective::NoFields { directive });
    }
    if fields.iter().any(|f| f.is_empty()) {
        return Err(InvalidDirective::EmptyField { directive });
    }
    Ok(fields)
}

/// Which fields to return: `fields=title,author.name`.
///
/// Selectors may use wildcards (`*`, `*.*`) and [`FieldFunction`] wrappers.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Fields(Vec<String>);

impl Fields {
    /// Build a fields selection.
    ///
    /// # Errors
    ///
    /// Returns [`InvalidDirective::NoFields`] on an empty list and
    /// [`InvalidDirective::EmptyField`] on an empty selector.
    pub fn new<I, S>(fields: I) -> Result<Self, InvalidDirective>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Ok(Self(field_list("fields", fields)?))
    }

    /// Render to the single `fields` pair.
    pub fn render(&self) -> Vec<(String, String)> {
        vec![("fields".to_string(), self.0.join(","))]
    }
}

/// Full-text search across string fields: `search=<query>`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Search(String);

impl Search {
    /// Build a search directive; any string is a valid query.
    pub fn new(query: impl Into<String>) -> Self {
        Self(query.into())
    }

    /// Render to the single `search` pair.
    pub fn render(&self) -> Vec<(String, String)> {
        vec![("search".to_string(), self.0.clone())]
    }
}

/// Sort order: `sort=-date_created,name`. A `-` prefix sorts descending.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Sort(Vec<String>);

impl Sort {
    /// Build a sort directive from field names, `-`-prefixed for descending.
    ///
    /// # Errors
    ///
    /// Returns [`InvalidDirective::NoFields`] on an empty list and
    /// [`InvalidDirective::EmptyField`] on an empty selector.
    pub fn new<I, S>(fields: I) -> Result<Self, InvalidDirective>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Ok(Self(field_list("sort", fields)?))
    }

    /// Render to the single `sort` pair.
    pub fn render(&self) -> Vec<(String, String)> {
        vec![("sort".to_string(), self.0.join(","))]
    }
}

/// Maximum number of items to return: `limit=<n>`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Limit(i64);

impl Limit {
    /// Limit to at most `n` items.
    pub fn new(n: i64) -> Self {
        Self(n)
    }

    /// No limit; the API convention for "all items" is `limit=-1`.
    pub fn all() -> Self {
        Self(-1)
    }

    /// Render to the single `limit` pair.
    pub fn render(&self) -> Vec<(String, String)> {
        vec![("limit".to_string(), self.0.to_string())]
    }
}

/// How many items to skip: `offset=<n>`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Offset(u64);

impl Offset {
    /// Skip the first `n` items.
    pub fn new(n: u64) -> Self {
        Self(n)
    }

    /// Render to the single `offset` pair.
    pub fn render(&self) -> Vec<(String, String)> {
        vec![("offset".to_string(), self.0.to_string())]
    }
}

/// Page cursor, 1-based, usually combined with a limit: `page=<n>`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Page(u64);

impl Page {
    /// Request page `n` (1-based).
    pub fn new(n: u64) -> Self {
        Self(n)
    }

    /// Render to the single `page` pair.
    pub fn render(&self) -> Vec<(String, String)> {
        vec![("page".to_string(), self.0.to_string())]
    }
}

/// Grouping fields for aggregation: `groupBy=year(date_created),status`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GroupBy(Vec<String>);

impl GroupBy {
    /// Build a group-by directive from field selectors.
    ///
    /// # Errors
    ///
    /// Returns [`InvalidDirective::NoFields`] on an empty list and
    /// [`InvalidDirective::EmptyField`] on an empty selector.
    pub fn new<I, S>(fields: I) -> Result<Self, InvalidDirective>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Ok(Self(field_list("groupBy", fields)?))
    }

    /// Render to the single `groupBy` pair.
    pub fn render(&self) -> Vec<(String, String)> {
        vec![("groupBy".to_string(), self.0.join(","))]
    }
}

/// Nested query parameters for relational fields, carried as opaque JSON:
/// `deep={"related_articles":{"_limit":3}}`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Deep(serde_json::Value);

impl Deep {
    /// Build a deep directive from the nested parameter object.
    pub fn new(value: serde_json::Value) -> Self {
        Self(value)
    }

    /// Render to the single `deep` pair, value as compact JSON text.
    pub fn render(&self) -> Vec<(String, String)> {
        vec![("deep".to_string(), self.0.to_string())]
    }
}

/// Field aliases, letting one field be requested under several names:
/// `alias[first]=name&alias[second]=name`.
///
/// Entries render one pair each, in insertion order. This is the one
/// directive that contributes more than a single pair per se.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Alias(Vec<(String, String)>);

impl Alias {
    /// Build an alias map from `(alias, field)` entries.
    ///
    /// # Errors
    ///
    /// Returns [`InvalidDirective::NoFields`] on an empty map and
    /// [`InvalidDirective::EmptyField`] if an alias or field name is empty.
    pub fn new<I, S>(entries: I) -> Result<Self, InvalidDirective>
    where
        I: IntoIterator<Item = (S, S)>,
        S: Into<String>,
    {
        let entries: Vec<(String, String)> = entries
            .into_iter()
            .map(|(name, field)| (name.into(), field.into()))
            .collect();
        if entries.is_empty() {
            return Err(InvalidDirective::NoFields { directive: "alias" });
        }
        if entries
            .iter()
            .any(|(name, field)| name.is_empty() || field.is_empty())
        {
            return Err(InvalidDirective::EmptyField { directive: "alias" });
        }
        Ok(Self(entries))
    }

    /// Render one `alias[<name>]` pair per entry, in insertion order.
    pub fn render(&self) -> Vec<(String, String)> {
        self.0
            .iter()
            .map(|(name, field)| (format!("alias[{name}]"), field.clone()))
            .collect()
    }
}

/// Export the result set as a downloadable file: `export=csv`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Export(ExportFormat);

impl Export {
    /// Build an export directive for the given format.
    pub fn new(format: ExportFormat) -> Self {
        Self(format)
    }

    /// Render to the single `export` pair.
    pub fn render(&self) -> Vec<(String, String)> {
        vec![("export".to_string(), self.0.as_str().to_string())]
    }
}

/// Request a content version of the items: `version=<key>`.
///
/// The raw variant additionally asks for the unsaved delta applied on top
/// of the main version (`versionRaw=true`), so it renders two pairs.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Version {
    key: String,
    raw: bool,
}

impl Version {
    /// Request the content version identified by `key`.
    pub fn new(key: impl Into<String>) -> Self {
        Self {
            key: key.into(),
            raw: false,
        }
    }

    /// Request the raw (delta-applied) form of the content version.
    pub fn raw(key: impl Into<String>) -> Self {
        Self {
            key: key.into(),
            raw: true,
        }
    }

    /// Render the `version` pair, plus `versionRaw=true` for the raw form.
    pub fn render(&self) -> Vec<(String, String)> {
        let mut pairs = vec![("version".to_string(), self.key.clone())];
        if self.raw {
            pairs.push(("versionRaw".to_string(), "true".to_string()));
        }
        pairs
    }
}

/// Whether wildcard field selections follow reverse relations:
/// `backlink=false` skips them.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Backlink(bool);

impl Backlink {
    /// Build a backlink directive.
    pub fn new(enabled: bool) -> Self {
        Self(enabled)
    }

    /// Render to the single `backlink` pair.
    pub fn render(&self) -> Vec<(String, String)> {
        vec![("backlink".to_string(), self.0.to_string())]
    }
}

/// Metadata to return alongside the items: `meta=total_count,filter_count`
/// or `meta=*` for everything.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Meta(String);

impl Meta {
    /// Request the named metadata counts (comma-separated selector).
    pub fn new(selector: impl Into<String>) -> Self {
        Self(selector.into())
    }

    /// Request all available metadata (`meta=*`).
    pub fn all() -> Self {
        Self("*".to_string())
    }

    /// Render to the single `meta` pair.
    pub fn render(&self) -> Vec<(String, String)> {
        vec![("meta".to_string(), self.0.clone())]
    }
}

/// The closed set of directive kinds, in declared slot order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DirectiveKind {
    /// Fields selection.
    Fields,
    /// Filter rule.
    Filter,
    /// Full-text search.
    Search,
    /// Sort order.
    Sort,
    /// Item limit.
    Limit,
    /// Item offset.
    Offset,
    /// Page cursor.
    Page,
    /// Aggregation.
    Aggregate,
    /// Aggregation grouping.
    GroupBy,
    /// Nested relational parameters.
    Deep,
    /// Field aliases.
    Alias,
    /// File export.
    Export,
    /// Content version.
    Version,
    /// Reverse relation traversal.
    Backlink,
    /// Response metadata.
    Meta,
}

impl DirectiveKind {
    /// The slot name of the directive kind (`fields`, `groupBy`, ...).
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Fields => "fields",
            Self::Filter => "filter",
            Self::Search => "search",
            Self::Sort => "sort",
            Self::Limit => "limit",
            Self::Offset => "offset",
            Self::Page => "page",
            Self::Aggregate => "aggregate",
            Self::GroupBy => "groupBy",
            Self::Deep => "deep",
            Self::Alias => "alias",
            Self::Export => "export",
            Self::Version => "version",
            Self::Backlink => "backlink",
            Self::Meta => "meta",
        }
    }
}

impl std::fmt::Display for DirectiveKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Any single query directive, tagged by kind.
///
/// This is the uniform currency of [`DirectiveSet::insert`](crate::DirectiveSet::insert):
/// one `render` operation, dispatched exhaustively over the closed set of kinds.
#[derive(Debug, Clone, PartialEq)]
pub enum Directive {
    /// Fields selection.
    Fields(Fields),
    /// A filter rule.
    Filter(Filter),
    /// Full-text search.
    Search(Search),
    /// Sort order.
    Sort(Sort),
    /// Item limit.
    Limit(Limit),
    /// Item offset.
    Offset(Offset),
    /// Page cursor.
    Page(Page),
    /// Aggregation.
    Aggregate(Aggregate),
    /// Aggregation grouping.
    GroupBy(GroupBy),
    /// Nested relational parameters.
    Deep(Deep),
    /// Field aliases.
    Alias(Alias),
    /// File export.
    Export(Export),
    /// Content version.
    Version(Version),
    /// Reverse relation traversal.
    Backlink(Backlink),
    /// Response metadata.
    Meta(Meta),
}

impl Directive {
    /// The kind tag of this directive.
    pub fn kind(&self) -> DirectiveKind {
        match self {
            Self::Fields(_) => DirectiveKind::Fields,
            Self::Filter(_) => DirectiveKind::Filter,
            Self::Search(_) => DirectiveKind::Search,
            Self::Sort(_) => DirectiveKind::Sort,
            Self::Limit(_) => DirectiveKind::Limit,
            Self::Offset(_) => DirectiveKind::Offset,
            Self::Page(_) => DirectiveKind::Page,
            Self::Aggregate(_) => DirectiveKind::Aggregate,
            Self::GroupBy(_) => DirectiveKind::GroupBy,
            Self::Deep(_) => DirectiveKind::Deep,
            Self::Alias(_) => DirectiveKind::Alias,
            Self::Export(_) => DirectiveKind::Export,
            Self::Version(_) => DirectiveKind::Version,
            Self::Backlink(_) => DirectiveKind::Backlink,
            Self::Meta(_) => DirectiveKind::Meta,
        }
    }

    /// Render the directive to its key/value pairs.
    pub fn render(&self) -> Vec<(String, String)> {
        match self {
            Self::Fields(d) => d.render(),
            Self::Filter(d) => d.render(),
            Self::Search(d) => d.render(),
            Self::Sort(d) => d.render(),
            Self::Limit(d) => d.render(),
            Self::Offset(d) => d.render(),
            Self::Page(d) => d.render(),
            Self::Aggregate(d) => d.render(),
            Self::GroupBy(d) => d.render(),
            Self::Deep(d) => d.render(),
            Self::Alias(d) => d.render(),
            Self::Export(d) => d.render(),
            Self::Version(d) => d.render(),
            Self::Backlink(d) => d.render(),
            Self::Meta(d) => d.render(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fields_and_sort_join_with_commas() {
        let fields = Fields::new(["title", "author.name", "*"]).unwrap();
        assert_eq!(
            fields.render(),
            vec![("fields".to_string(), "title,author.name,*".to_string())]
        );

        let sort = Sort::new(["-date_created", "name"]).unwrap();
        assert_eq!(
            sort.render(),
            vec![("sort".to_string(), "-date_created,name".to_string())]
        );
    }

    #[test]
    fn scalar_directives_render_their_slot_key() {
        assert_eq!(Limit::new(25).render(), vec![("limit".to_string(), "25".to_string())]);
        assert_eq!(Limit::all().render()[0].1, "-1");
        assert_eq!(Offset::new(50).render()[0], ("offset".to_string(), "50".to_string()));
        assert_eq!(Page::new(3).render()[0], ("page".to_string(), "3".to_string()));
        assert_eq!(Search::new("lorem").render()[0], ("search".to_string(), "lorem".to_string()));
        assert_eq!(Backlink::new(false).render()[0], ("backlink".to_string(), "false".to_string()));
        assert_eq!(Export::new(ExportFormat::Csv).render()[0], ("export".to_string(), "csv".to_string()));
        assert_eq!(Meta::all().render()[0], ("meta".to_string(), "*".to_string()));
    }

    #[test]
    fn group_by_accepts_field_functions() {
        let group = GroupBy::new([FieldFunction::Year.applied_to("date_created"), "status".to_string()]).unwrap();
        assert_eq!(group.render()[0].1, "year(date_created),status");
    }

    #[test]
    fn deep_renders_compact_json() {
        let deep = Deep::new(serde_json::json!({"related_articles": {"_limit": 3}}));
        assert_eq!(
            deep.render(),
            vec![("deep".to_string(), r#"{"related_articles":{"_limit":3}}"#.to_string())]
        );
    }

    #[test]
    fn alias_renders_one_pair_per_entry_in_order() {
        let alias = Alias::new([("first", "name"), ("second", "name")]).unwrap();
        assert_eq!(
            alias.render(),
            vec![
                ("alias[first]".to_string(), "name".to_string()),
                ("alias[second]".to_string(), "name".to_string()),
            ]
        );
    }

    #[test]
    fn version_raw_renders_two_pairs() {
        assert_eq!(
            Version::new("draft").render(),
            vec![("version".to_string(), "draft".to_string())]
        );
        assert_eq!(
            Version::raw("draft").render(),
            vec![
                ("version".to_string(), "draft".to_string()),
                ("versionRaw".to_string(), "true".to_string()),
            ]
        );
    }

    #[test]
    fn empty_lists_are_rejected() {
        assert!(matches!(
            Fields::new(Vec::<String>::new()),
            Err(InvalidDirective::NoFields { directive: "fields" })
        ));
        assert!(matches!(
            Sort::new(Vec::<String>::new()),
            Err(InvalidDirective::NoFields { directive: "sort" })
        ));
        assert!(matches!(
            GroupBy::new([""]),
            Err(InvalidDirective::EmptyField { directive: "groupBy" })
        ));
        assert!(matches!(
            Alias::new(Vec::<(String, String)>::new()),
            Err(InvalidDirective::NoFields { directive: "alias" })
        ));
        assert!(Alias::new([("", "name")]).is_err());
    }

    #[test]
    fn field_functions_parse_and_print() {
        for spelling in [
            "year", "month", "week", "day", "weekday", "hour", "minute", "second", "count",
        ] {
            let func: FieldFunction = spelling.parse().unwrap();
            assert_eq!(func.as_str(), spelling);
        }
        assert!("decade".parse::<FieldFunction>().is_err());
        assert!("tsv".parse::<ExportFormat>().is_err());
    }

    #[test]
    fn directive_kind_matches_slot_name() {
        let directive = Directive::GroupBy(GroupBy::new(["status"]).unwrap());
        assert_eq!(directive.kind(), DirectiveKind::GroupBy);
        assert_eq!(directive.kind().to_string(), "groupBy");
        assert_eq!(directive.render()[0].0, "groupBy");
    }
}

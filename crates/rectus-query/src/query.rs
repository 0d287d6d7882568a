//! Assembling directives into a set and compiling them to query pairs.

use crate::aggregate::Aggregate;
use crate::directive::{
    Alias, Backlink, Deep, Directive, DirectiveKind, Export, Fields, GroupBy, Limit, Meta, Offset,
    Page, Search, Sort, Version,
};
use crate::filter::Filter;

/// The caller's chosen combination of directives for one request.
///
/// One optional slot per directive kind, so "at most one directive per kind"
/// holds by construction. Slots are populated either with the typed `with_*`
/// builders or uniformly through [`DirectiveSet::insert`].
///
/// ```
/// use rectus_query::{DirectiveSet, Fields, Filter, FilterOp, Limit};
///
/// let query = DirectiveSet::new()
///     .with_fields(Fields::new(["title", "author.name"])?)
///     .with_filter(Filter::new("status", FilterOp::Eq, "published")?)
///     .with_limit(Limit::new(25))
///     .compile();
/// assert_eq!(query.len(), 3);
/// # Ok::<(), rectus_query::InvalidDirective>(())
/// ```
#[derive(Debug, Clone, Default, PartialEq)]
pub struct DirectiveSet {
    fields: Option<Fields>,
    filter: Option<Filter>,
    search: Option<Search>,
    sort: Option<Sort>,
    limit: Option<Limit>,
    offset: Option<Offset>,
    page: Option<Page>,
    aggregate: Option<Aggregate>,
    group_by: Option<GroupBy>,
    deep: Option<Deep>,
    alias: Option<Alias>,
    export: Option<Export>,
    version: Option<Version>,
    backlink: Option<Backlink>,
    meta: Option<Meta>,
}

impl DirectiveSet {
    /// An empty directive set; compiles to an empty query.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the fields selection slot.
    pub fn with_fields(mut self, d: Fields) -> Self {
        self.fields = Some(d);
        self
    }

    /// Set the filter slot.
    pub fn with_filter(mut self, d: Filter) -> Self {
        self.filter = Some(d);
        self
    }

    /// Set the search slot.
    pub fn with_search(mut self, d: Search) -> Self {
        self.search = Some(d);
        self
    }

    /// Set the sort slot.
    pub fn with_sort(mut self, d: Sort) -> Self {
        self.sort = Some(d);
        self
    }

    /// Set the limit slot.
    pub fn with_limit(mut self, d: Limit) -> Self {
        self.limit = Some(d);
        self
    }

    /// Set the offset slot.
    pub fn with_offset(mut self, d: Offset) -> Self {
        self.offset = Some(d);
        self
    }

    /// Set the page slot.
    pub fn with_page(mut self, d: Page) -> Self {
        self.page = Some(d);
        self
    }

    /// Set the aggregate slot.
    pub fn with_aggregate(mut self, d: Aggregate) -> Self {
        self.aggregate = Some(d);
        self
    }

    /// Set the group-by slot.
    pub fn with_group_by(mut self, d: GroupBy) -> Self {
        self.group_by = Some(d);
        self
    }

    /// Set the deep slot.
    pub fn with_deep(mut self, d: Deep) -> Self {
        self.deep = Some(d);
        self
    }

    /// Set the alias slot.
    pub fn with_alias(mut self, d: Alias) -> Self {
        self.alias = Some(d);
        self
    }

    /// Set the export slot.
    pub fn with_export(mut self, d: Export) -> Self {
        self.export = Some(d);
        self
    }

    /// Set the version slot.
    pub fn with_version(mut self, d: Version) -> Self {
        self.version = Some(d);
        self
    }

    /// Set the backlink slot.
    pub fn with_backlink(mut self, d: Backlink) -> Self {
        self.backlink = Some(d);
        self
    }

    /// Set the meta slot.
    pub fn with_meta(mut self, d: Meta) -> Self {
        self.meta = Some(d);
        self
    }

    /// Place a directive in its slot, returning the directive it replaced.
    pub fn insert(&mut self, directive: Directive) -> Option<Directive> {
        match directive {
            Directive::Fields(d) => self.fields.replace(d).map(Directive::Fields),
            Directive::Filter(d) => self.filter.replace(d).map(Directive::Filter),
            Directive::Search(d) => self.search.replace(d).map(Directive::Search),
            Directive::Sort(d) => self.sort.replace(d).map(Directive::Sort),
            Directive::Limit(d) => self.limit.replace(d).map(Directive::Limit),
            Directive::Offset(d) => self.offset.replace(d).map(Directive::Offset),
            Directive::Page(d) => self.page.replace(d).map(Directive::Page),
            Directive::Aggregate(d) => self.aggregate.replace(d).map(Directive::Aggregate),
            Directive::GroupBy(d) => self.group_by.replace(d).map(Directive::GroupBy),
            Directive::Deep(d) => self.deep.replace(d).map(Directive::Deep),
            Directive::Alias(d) => self.alias.replace(d).map(Directive::Alias),
            Directive::Export(d) => self.export.replace(d).map(Directive::Export),
            Directive::Version(d) => self.version.replace(d).map(Directive::Version),
            Directive::Backlink(d) => self.backlink.replace(d).map(Directive::Backlink),
            Directive::Meta(d) => self.meta.replace(d).map(Directive::Meta),
        }
    }

    /// Number of populated slots.
    pub fn len(&self) -> usize {
        self.directives().count()
    }

    /// Whether no slot is populated.
    pub fn is_empty(&self) -> bool {
        self.directives().next().is_none()
    }

    /// Iterate the populated slots in declared order.
    fn directives(&self) -> impl Iterator<Item = Directive> + '_ {
        let slots: [Option<Directive>; 15] = [
            self.fields.clone().map(Directive::Fields),
            self.filter.clone().map(Directive::Filter),
            self.search.clone().map(Directive::Search),
            self.sort.clone().map(Directive::Sort),
            self.limit.map(Directive::Limit),
            self.offset.map(Directive::Offset),
            self.page.map(Directive::Page),
            self.aggregate.clone().map(Directive::Aggregate),
            self.group_by.clone().map(Directive::GroupBy),
            self.deep.clone().map(Directive::Deep),
            self.alias.clone().map(Directive::Alias),
            self.export.map(Directive::Export),
            self.version.clone().map(Directive::Version),
            self.backlink.map(Directive::Backlink),
            self.meta.clone().map(Directive::Meta),
        ];
        slots.into_iter().flatten()
    }

    /// Compile the set into the flattened key/value sequence.
    ///
    /// Pure and deterministic: slots render in declared order, every rendered
    /// pair is appended, and no key collision resolution is performed. An
    /// empty set compiles to an empty query.
    pub fn compile(&self) -> CompiledQuery {
        let mut pairs: Vec<(String, String)> = Vec::new();
        let mut directives = 0usize;
        for directive in self.directives() {
            let rendered = directive.render();
            tracing::trace!(
                "Rendered {} into {} pair(s)",
                directive.kind(),
                rendered.len()
            );
            directives += 1;
            pairs.extend(rendered);
        }
        tracing::debug!(
            "Compiled {} directive(s) into {} query pair(s)",
            directives,
            pairs.len()
        );
        CompiledQuery(pairs)
    }

    /// Kinds of the populated slots, in declared order.
    pub fn kinds(&self) -> Vec<DirectiveKind> {
        self.directives().map(|d| d.kind()).collect()
    }
}

/// The flattened `(key, value)` sequence ready for URL query-string encoding.
///
/// Values are not URL-encoded; that is the transport's concern. Duplicate
/// keys are possible when the protocol allows them (aggregate keys are
/// namespaced by function) and are passed through untouched.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CompiledQuery(Vec<(String, String)>);

impl CompiledQuery {
    /// The pairs in render order.
    pub fn pairs(&self) -> &[(String, String)] {
        &self.0
    }

    /// Number of pairs.
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Whether the query has no pairs.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Iterate the pairs in render order.
    pub fn iter(&self) -> std::slice::Iter<'_, (String, String)> {
        self.0.iter()
    }

    /// Consume into the underlying pair vector.
    pub fn into_pairs(self) -> Vec<(String, String)> {
        self.0
    }
}

impl IntoIterator for CompiledQuery {
    type Item = (String, String);
    type IntoIter = std::vec::IntoIter<(String, String)>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.into_iter()
    }
}

impl<'a> IntoIterator for &'a CompiledQuery {
    type Item = &'a (String, String);
    type IntoIter = std::slice::Iter<'a, (String, String)>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::aggregate::AggregateFunction;
    use crate::filter::FilterOp;

    #[test]
    fn empty_set_compiles_to_empty_query() {
        let query = DirectiveSet::new().compile();
        assert!(query.is_empty());
        assert_eq!(query.len(), 0);
    }

    #[test]
    fn output_is_the_union_of_each_directives_pairs() {
        let filter = Filter::new("status", FilterOp::Eq, "published").unwrap();
        let agg = Aggregate::new(AggregateFunction::Sum, ["price", "qty"]).unwrap();

        let compiled = DirectiveSet::new()
            .with_filter(filter.clone())
            .with_aggregate(agg.clone())
            .compile();

        let mut expected = filter.render();
        expected.extend(agg.render());

        // Order-independent equality over the pair set.
        let mut got: Vec<_> = compiled.into_pairs();
        got.sort();
        expected.sort();
        assert_eq!(got, expected);
    }

    #[test]
    fn multi_pair_directives_contribute_every_pair() {
        let compiled = DirectiveSet::new()
            .with_alias(Alias::new([("first", "name"), ("second", "name")]).unwrap())
            .with_version(Version::raw("draft"))
            .compile();
        assert_eq!(compiled.len(), 4);
        assert_eq!(compiled.pairs()[0].0, "alias[first]");
        assert_eq!(compiled.pairs()[3], ("versionRaw".to_string(), "true".to_string()));
    }

    #[test]
    fn compilation_is_deterministic() {
        let set = DirectiveSet::new()
            .with_fields(Fields::new(["*"]).unwrap())
            .with_search(Search::new("lorem"))
            .with_sort(Sort::new(["-date_created"]).unwrap())
            .with_limit(Limit::new(10))
            .with_offset(Offset::new(20))
            .with_page(Page::new(2))
            .with_group_by(GroupBy::new(["status"]).unwrap())
            .with_deep(Deep::new(serde_json::json!({"translations": {"_limit": 1}})))
            .with_export(Export::new(crate::ExportFormat::Json))
            .with_backlink(Backlink::new(true))
            .with_meta(Meta::all());
        assert_eq!(set.compile(), set.compile());
    }

    #[test]
    fn insert_replaces_the_slot_and_returns_the_previous_directive() {
        let mut set = DirectiveSet::new();
        assert!(set.insert(Directive::Limit(Limit::new(10))).is_none());
        let previous = set.insert(Directive::Limit(Limit::new(25)));
        assert_eq!(previous, Some(Directive::Limit(Limit::new(10))));

        let compiled = set.compile();
        assert_eq!(compiled.pairs(), [("limit".to_string(), "25".to_string())]);
    }

    #[test]
    fn slots_render_in_declared_order() {
        // Built backlink-first; output still follows the slot order.
        let mut set = DirectiveSet::new();
        set.insert(Directive::Backlink(Backlink::new(false)));
        set.insert(Directive::Fields(Fields::new(["id"]).unwrap()));
        set.insert(Directive::Limit(Limit::all()));

        assert_eq!(
            set.kinds(),
            vec![DirectiveKind::Fields, DirectiveKind::Limit, DirectiveKind::Backlink]
        );
        let keys: Vec<_> = set.compile().into_pairs().into_iter().map(|(k, _)| k).collect();
        assert_eq!(keys, vec!["fields", "limit", "backlink"]);
    }

    #[test]
    fn compiled_query_iterates_pairs() {
        let compiled = DirectiveSet::new().with_limit(Limit::new(5)).compile();
        let collected: Vec<_> = (&compiled).into_iter().cloned().collect();
        assert_eq!(collected, compiled.clone().into_pairs());
        assert_eq!(compiled.iter().count(), 1);
    }
}

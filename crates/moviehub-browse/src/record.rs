/// A row of a searchable, paginated board list.
///
/// Implementors expose a stable id and the text fields the search term is
/// matched against. A record with no value for some field should return an
/// empty string in its place rather than omit it; missing text never faults,
/// it just never matches.
pub trait ListRecord {
    type Id: Copy + PartialEq;

    fn id(&self) -> Self::Id;

    /// Searchable field values, in the order they were configured.
    fn search_fields(&self) -> Vec<&str>;
}

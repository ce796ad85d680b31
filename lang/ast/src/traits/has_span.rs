use interop_miette_util::codespan::Span;

/// Trait for syntactic entities which have a source-code span.
///
/// Every node is the result of parsing and lowering, so the span is always
/// available; it covers the node's first child through its last child, or
/// the originating token for leaves.
pub trait HasSpan {
    /// Return the source code span of the entity.
    fn span(&self) -> Span;
}

use crate::ast;
use crate::transform::FragmentResolver;
use crate::NormalizeError;
use indexmap::IndexMap;

type Result<T> = std::result::Result<T, NormalizeError>;

/// The fragment definitions of a document, keyed by name, with every spread
/// inside them already inlined.
///
/// Fragments are kept in document order. When a document defines the same
/// fragment name more than once, the first definition wins.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct FragmentTable {
    fragments: IndexMap<String, ast::query::FragmentDefinition>,
}

impl FragmentTable {
    pub fn empty() -> Self {
        Self::default()
    }

    /// Collect and pre-resolve all fragment definitions in a document.
    ///
    /// Every fragment definition is resolved against the full set of
    /// fragments declared in the document (including ones that are never
    /// spread by an operation), so an unknown or cyclic spread anywhere in a
    /// fragment fails here.
    pub fn from_document(document: &ast::query::Document) -> Result<Self> {
        let mut declared: IndexMap<String, ast::query::FragmentDefinition> =
            IndexMap::new();
        for def in &document.definitions {
            if let ast::query::Definition::Fragment(frag_def) = def {
                declared.entry(frag_def.name.to_owned())
                    .or_insert_with(|| frag_def.to_owned());
            }
        }

        log::debug!(
            "Resolving {} fragment definitions.",
            declared.len(),
        );

        let mut fragments = IndexMap::with_capacity(declared.len());
        for def in &document.definitions {
            let ast::query::Definition::Fragment(frag_def) = def else {
                continue;
            };

            let resolved =
                FragmentResolver::from_fragments(&declared)
                    .resolve_fragment_definition(frag_def.to_owned())?;

            if fragments.contains_key(&resolved.name) {
                log::debug!(
                    "Ignoring duplicate definition of fragment `{}`.",
                    resolved.name,
                );
                continue;
            }
            fragments.insert(resolved.name.to_owned(), resolved);
        }

        Ok(Self { fragments })
    }

    pub fn fragments(&self) -> &IndexMap<String, ast::query::FragmentDefinition> {
        &self.fragments
    }

    pub fn get(&self, fragment_name: &str) -> Option<&ast::query::FragmentDefinition> {
        self.fragments.get(fragment_name)
    }

    pub fn is_empty(&self) -> bool {
        self.fragments.is_empty()
    }

    pub fn len(&self) -> usize {
        self.fragments.len()
    }
}

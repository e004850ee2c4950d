//! Reserved words.
//!
//! The vocabulary is listed once in [`KEYWORDS`]. [`KeywordTable`] indexes it
//! for lookup; the process-wide instance is built on first use and is
//! read-only afterwards, so any number of lexers may share it across threads.

use rustc_hash::FxHashMap;

use crate::token::TokenKind;

/// Which part of the language a reserved word belongs to.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum KeywordClass {
    /// `true`, `false`, `null`
    Value,
    /// Boolean connectives
    Boolean,
    /// Class model structure
    ClassModel,
    /// State machine sections
    StateMachine,
    /// Association kinds
    Association,
    /// OCL constraint forms
    Ocl,
    /// SOIL imperative statements
    Soil,
    /// Built-in number operations
    NumberOperation,
    /// Built-in string operations
    StringOperation,
    /// Operations on `OclAny`
    OclAnyOperation,
    /// Operations on `OclMessage`
    OclMessageOperation,
    /// Collection predicates and aggregates
    CollectionOperation,
    /// Iterator expressions
    IterationOperation,
}

/// Every reserved spelling with its token kind and family. Case-sensitive.
pub const KEYWORDS: &[(&str, TokenKind, KeywordClass)] = &[
    ("true", TokenKind::True, KeywordClass::Value),
    ("false", TokenKind::False, KeywordClass::Value),
    ("null", TokenKind::Null, KeywordClass::Value),
    ("and", TokenKind::And, KeywordClass::Boolean),
    ("or", TokenKind::Or, KeywordClass::Boolean),
    ("xor", TokenKind::Xor, KeywordClass::Boolean),
    ("not", TokenKind::Not, KeywordClass::Boolean),
    ("implies", TokenKind::Implies, KeywordClass::Boolean),
    ("model", TokenKind::Model, KeywordClass::ClassModel),
    ("class", TokenKind::Class, KeywordClass::ClassModel),
    ("attributes", TokenKind::Attributes, KeywordClass::ClassModel),
    ("operations", TokenKind::Operations, KeywordClass::ClassModel),
    ("statemachines", TokenKind::StateMachines, KeywordClass::StateMachine),
    ("initial", TokenKind::Initial, KeywordClass::StateMachine),
    ("final", TokenKind::Final, KeywordClass::StateMachine),
    ("association", TokenKind::Association, KeywordClass::Association),
    ("associationclass", TokenKind::AssociationClass, KeywordClass::Association),
    ("aggregation", TokenKind::Aggregation, KeywordClass::Association),
    ("composition", TokenKind::Composition, KeywordClass::Association),
    ("self", TokenKind::Self_, KeywordClass::Ocl),
    ("begin", TokenKind::Begin, KeywordClass::Ocl),
    ("end", TokenKind::End, KeywordClass::Ocl),
    ("init", TokenKind::Init, KeywordClass::Ocl),
    ("derived", TokenKind::Derived, KeywordClass::Ocl),
    ("context", TokenKind::Context, KeywordClass::Ocl),
    ("inv", TokenKind::Inv, KeywordClass::Ocl),
    ("pre", TokenKind::Pre, KeywordClass::Ocl),
    ("@pre", TokenKind::AtPre, KeywordClass::Ocl),
    ("post", TokenKind::Post, KeywordClass::Ocl),
    ("between", TokenKind::Between, KeywordClass::Ocl),
    ("if", TokenKind::If, KeywordClass::Ocl),
    ("then", TokenKind::Then, KeywordClass::Ocl),
    ("else", TokenKind::Else, KeywordClass::Ocl),
    ("endif", TokenKind::EndIf, KeywordClass::Ocl),
    ("result", TokenKind::Result, KeywordClass::Ocl),
    ("new", TokenKind::New, KeywordClass::Soil),
    ("destroy", TokenKind::Destroy, KeywordClass::Soil),
    ("insert", TokenKind::Insert, KeywordClass::Soil),
    ("delete", TokenKind::Delete, KeywordClass::Soil),
    ("into", TokenKind::Into, KeywordClass::Soil),
    ("from", TokenKind::From, KeywordClass::Soil),
    ("declare", TokenKind::Declare, KeywordClass::Soil),
    ("for", TokenKind::For, KeywordClass::Soil),
    ("in", TokenKind::In, KeywordClass::Soil),
    ("do", TokenKind::Do, KeywordClass::Soil),
    ("mod", TokenKind::Mod, KeywordClass::NumberOperation),
    ("div", TokenKind::Div, KeywordClass::NumberOperation),
    ("abs", TokenKind::Abs, KeywordClass::NumberOperation),
    ("max", TokenKind::Max, KeywordClass::NumberOperation),
    ("min", TokenKind::Min, KeywordClass::NumberOperation),
    ("round", TokenKind::Round, KeywordClass::NumberOperation),
    ("floor", TokenKind::Floor, KeywordClass::NumberOperation),
    ("concat", TokenKind::Concat, KeywordClass::StringOperation),
    ("toLower", TokenKind::ToLower, KeywordClass::StringOperation),
    ("toUpper", TokenKind::ToUpper, KeywordClass::StringOperation),
    ("substring", TokenKind::Substring, KeywordClass::StringOperation),
    ("oclIsNew", TokenKind::OclIsNew, KeywordClass::OclAnyOperation),
    ("oclIsUndefined", TokenKind::OclIsUndefined, KeywordClass::OclAnyOperation),
    ("oclAsType", TokenKind::OclAsType, KeywordClass::OclAnyOperation),
    ("oclIsTypeOf", TokenKind::OclIsTypeOf, KeywordClass::OclAnyOperation),
    ("oclIsKindOf", TokenKind::OclIsKindOf, KeywordClass::OclAnyOperation),
    ("oclIsInState", TokenKind::OclIsInState, KeywordClass::OclAnyOperation),
    ("allInstances", TokenKind::AllInstances, KeywordClass::OclAnyOperation),
    ("hasReturned", TokenKind::HasReturned, KeywordClass::OclMessageOperation),
    ("isSignalSent", TokenKind::IsSignalSent, KeywordClass::OclMessageOperation),
    ("isOperationCall", TokenKind::IsOperationCall, KeywordClass::OclMessageOperation),
    ("count", TokenKind::Count, KeywordClass::CollectionOperation),
    ("excludes", TokenKind::Excludes, KeywordClass::CollectionOperation),
    ("excludesAll", TokenKind::ExcludesAll, KeywordClass::CollectionOperation),
    ("includes", TokenKind::Includes, KeywordClass::CollectionOperation),
    ("includesAll", TokenKind::IncludesAll, KeywordClass::CollectionOperation),
    ("isEmpty", TokenKind::IsEmpty, KeywordClass::CollectionOperation),
    ("notEmpty", TokenKind::NotEmpty, KeywordClass::CollectionOperation),
    ("size", TokenKind::Size, KeywordClass::CollectionOperation),
    ("sum", TokenKind::Sum, KeywordClass::CollectionOperation),
    ("any", TokenKind::Any, KeywordClass::IterationOperation),
    ("collect", TokenKind::Collect, KeywordClass::IterationOperation),
    ("collectNested", TokenKind::CollectNested, KeywordClass::IterationOperation),
    ("exists", TokenKind::Exists, KeywordClass::IterationOperation),
    ("forAll", TokenKind::ForAll, KeywordClass::IterationOperation),
    ("isUnique", TokenKind::IsUnique, KeywordClass::IterationOperation),
    ("iterate", TokenKind::Iterate, KeywordClass::IterationOperation),
    ("one", TokenKind::One, KeywordClass::IterationOperation),
    ("reject", TokenKind::Reject, KeywordClass::IterationOperation),
    ("select", TokenKind::Select, KeywordClass::IterationOperation),
    ("sortedBy", TokenKind::SortedBy, KeywordClass::IterationOperation),
];

lazy_static::lazy_static! {
    static ref GLOBAL_KEYWORDS: KeywordTable = KeywordTable::new();
}

/// Lookup from exact spelling to token kind.
#[derive(Debug, Clone)]
pub struct KeywordTable {
    map: FxHashMap<&'static str, TokenKind>,
}

static_assertions::assert_impl_all!(KeywordTable: Send, Sync);

impl KeywordTable {
    /// Build a table holding every entry of [`KEYWORDS`].
    pub fn new() -> Self {
        let mut map = FxHashMap::default();
        map.reserve(KEYWORDS.len());
        for &(text, kind, _) in KEYWORDS {
            map.insert(text, kind);
        }
        Self { map }
    }

    /// The shared table, built on first access.
    pub fn global() -> &'static KeywordTable {
        &*GLOBAL_KEYWORDS
    }

    /// Resolve an exact spelling. Matching is case-sensitive.
    ///
    /// ```
    /// use usec_lex::keywords::KeywordTable;
    /// use usec_lex::TokenKind;
    ///
    /// let table = KeywordTable::global();
    /// assert_eq!(table.get("context"), Some(TokenKind::Context));
    /// assert_eq!(table.get("Context"), None);
    /// assert_eq!(table.get("contextual"), None);
    /// ```
    #[inline]
    pub fn get(&self, text: &str) -> Option<TokenKind> {
        self.map.get(text).copied()
    }

    /// Returns true if `text` is reserved.
    #[inline]
    pub fn contains(&self, text: &str) -> bool {
        self.map.contains_key(text)
    }

    /// Number of reserved spellings.
    pub fn len(&self) -> usize {
        self.map.len()
    }

    /// Returns true if the table has no entries.
    pub fn is_empty(&self) -> bool {
        self.map.is_empty()
    }
}

impl Default for KeywordTable {
    fn default() -> Self {
        Self::new()
    }
}

//! Error types for the arbor core library.
//!
//! Every failure is a local validation failure raised before any mutation.
//! Each error carries a stable machine-readable code and maps onto a coarse
//! [`ErrorKind`] so callers can branch on "bad input" versus "no path"
//! without matching individual variants.

use std::fmt;

use thiserror::Error;

macro_rules! define_error_codes {
    (
        $(#[$enum_meta:meta])*
        enum $CodeTy:ident for $ErrTy:ident {
            $(
                $(#[$variant_meta:meta])*
                $CodeVariant:ident => $ErrVariant:ident $( { $($pattern:tt)* } )? => $kind:ident => $code:expr
            ),+ $(,)?
        }
    ) => {
        $(#[$enum_meta])*
        #[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
        #[non_exhaustive]
        pub enum $CodeTy {
            $(
                $(#[$variant_meta])*
                $CodeVariant,
            )+
        }

        impl $CodeTy {
            /// Return the stable machine-readable representation of this error code.
            #[must_use]
            pub const fn as_str(self) -> &'static str {
                match self {
                    $(Self::$CodeVariant => $code,)+
                }
            }

            /// Return the coarse category this code belongs to.
            #[must_use]
            pub const fn kind(self) -> ErrorKind {
                match self {
                    $(Self::$CodeVariant => ErrorKind::$kind,)+
                }
            }
        }

        impl fmt::Display for $CodeTy {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(self.as_str())
            }
        }

        impl $ErrTy {
            #[doc = concat!(
                "Retrieve the stable [`",
                stringify!($CodeTy),
                "`] for this error."
            )]
            #[must_use]
            pub const fn code(&self) -> $CodeTy {
                match self {
                    $(Self::$ErrVariant $( { $($pattern)* } )? => $CodeTy::$CodeVariant,)+
                }
            }

            /// Return the coarse category of this error.
            #[must_use]
            pub const fn kind(&self) -> ErrorKind {
                self.code().kind()
            }
        }
    };
}

/// Coarse error taxonomy shared by every error in the crate.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub enum ErrorKind {
    /// The caller supplied an argument that violates a documented precondition.
    InvalidArgument,
    /// The destination of a shortest-path query is unreachable from the source.
    NoPathExists,
}

impl ErrorKind {
    /// Return the stable machine-readable representation of this kind.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::InvalidArgument => "INVALID_ARGUMENT",
            Self::NoPathExists => "NO_PATH_EXISTS",
        }
    }
}

impl fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// An error produced by [`crate::DisjointSet`] operations.
#[non_exhaustive]
#[derive(Clone, Debug, Eq, Error, PartialEq)]
pub enum DisjointSetError {
    /// The item was already registered with `make_set`.
    #[error("item {item} is already registered")]
    AlreadyRegistered {
        /// Debug rendering of the offending item.
        item: String,
    },
    /// The item was never registered with `make_set`.
    #[error("item {item} is not registered")]
    Unregistered {
        /// Debug rendering of the offending item.
        item: String,
    },
    /// Both items already belong to the same component.
    #[error("items {left} and {right} already share component {component}")]
    SameComponent {
        /// Debug rendering of the first item.
        left: String,
        /// Debug rendering of the second item.
        right: String,
        /// Identifier of the shared component.
        component: usize,
    },
}

define_error_codes! {
    /// Stable codes describing [`DisjointSetError`] variants.
    enum DisjointSetErrorCode for DisjointSetError {
        /// The item was already registered.
        AlreadyRegistered => AlreadyRegistered { .. } => InvalidArgument => "DISJOINT_SET_ALREADY_REGISTERED",
        /// The item was never registered.
        Unregistered => Unregistered { .. } => InvalidArgument => "DISJOINT_SET_UNREGISTERED",
        /// Both items already share a component.
        SameComponent => SameComponent { .. } => InvalidArgument => "DISJOINT_SET_SAME_COMPONENT",
    }
}

/// An error produced while building or querying a [`crate::Graph`].
#[non_exhaustive]
#[derive(Clone, Debug, Error, PartialEq)]
pub enum GraphError {
    /// An edge carried a weight below zero.
    #[error("edge {edge} has negative weight {weight}")]
    NegativeWeight {
        /// Position of the edge in the supplied edge sequence.
        edge: usize,
        /// The rejected weight.
        weight: f64,
    },
    /// An edge carried a NaN or infinite weight.
    #[error("edge {edge} has non-finite weight")]
    NonFiniteWeight {
        /// Position of the edge in the supplied edge sequence.
        edge: usize,
    },
    /// The edge weights sum past the largest finite `f64`, so path and tree
    /// totals could overflow.
    #[error("edge weights sum to more than the largest finite f64")]
    WeightOverflow,
    /// A vertex was referenced that is not part of the graph.
    #[error("vertex {vertex} is not part of the graph")]
    UnknownVertex {
        /// Debug rendering of the missing vertex.
        vertex: String,
    },
    /// The vertex sequence listed the same vertex twice.
    #[error("vertex {vertex} is listed more than once")]
    DuplicateVertex {
        /// Debug rendering of the repeated vertex.
        vertex: String,
    },
    /// A spanning tree was requested for a graph with several components.
    #[error("graph has {components} connected components; a spanning tree needs exactly one")]
    Disconnected {
        /// Number of connected components found.
        components: usize,
    },
    /// The destination cannot be reached from the source.
    #[error("no path exists from {start} to {end}")]
    NoPathExists {
        /// Debug rendering of the source vertex.
        start: String,
        /// Debug rendering of the destination vertex.
        end: String,
    },
    /// The disjoint-set backing a spanning-tree computation rejected an operation.
    #[error(transparent)]
    DisjointSet {
        /// The underlying disjoint-set failure.
        #[from]
        source: DisjointSetError,
    },
}

define_error_codes! {
    /// Stable codes describing [`GraphError`] variants.
    enum GraphErrorCode for GraphError {
        /// An edge carried a weight below zero.
        NegativeWeight => NegativeWeight { .. } => InvalidArgument => "GRAPH_NEGATIVE_WEIGHT",
        /// An edge carried a NaN or infinite weight.
        NonFiniteWeight => NonFiniteWeight { .. } => InvalidArgument => "GRAPH_NON_FINITE_WEIGHT",
        /// The edge weights sum past the largest finite `f64`.
        WeightOverflow => WeightOverflow => InvalidArgument => "GRAPH_WEIGHT_OVERFLOW",
        /// A vertex was referenced that is not part of the graph.
        UnknownVertex => UnknownVertex { .. } => InvalidArgument => "GRAPH_UNKNOWN_VERTEX",
        /// The vertex sequence listed the same vertex twice.
        DuplicateVertex => DuplicateVertex { .. } => InvalidArgument => "GRAPH_DUPLICATE_VERTEX",
        /// A spanning tree was requested for a disconnected graph.
        Disconnected => Disconnected { .. } => InvalidArgument => "GRAPH_DISCONNECTED",
        /// The destination cannot be reached from the source.
        NoPathExists => NoPathExists { .. } => NoPathExists => "GRAPH_NO_PATH_EXISTS",
        /// The backing disjoint-set rejected an operation.
        DisjointSet => DisjointSet { .. } => InvalidArgument => "GRAPH_DISJOINT_SET",
    }
}

/// Renders a value for inclusion in an error message.
pub(crate) fn describe<T: fmt::Debug + ?Sized>(value: &T) -> String {
    format!("{value:?}")
}

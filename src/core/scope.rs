//! Delivery scope definitions.

use std::fmt;
use std::str::FromStr;

use crate::error::AssetError;

/// Delivery timing class of an asset.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Scope {
    /// Rendered inline, blocking first paint.
    Critical,
    /// Deferred, non-blocking.
    Async,
}

impl Scope {
    /// Both scopes, in storage order.
    pub const ALL: [Scope; 2] = [Scope::Critical, Scope::Async];

    /// Name used in configuration and markup (`critical` / `async`).
    pub const fn name(self) -> &'static str {
        match self {
            Self::Critical => "critical",
            Self::Async => "async",
        }
    }

    /// Scope implied by a stylesheet file name.
    ///
    /// Any name containing `-critical` is critical, everything else is async.
    pub fn from_file_name(name: &str) -> Self {
        if name.contains("-critical") {
            Self::Critical
        } else {
            Self::Async
        }
    }
}

impl fmt::Display for Scope {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Scope {
    type Err = AssetError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "critical" => Ok(Self::Critical),
            "async" => Ok(Self::Async),
            other => Err(AssetError::UnsupportedScope(other.to_string())),
        }
    }
}

/// Conversion accepted by every scope-parameterized operation.
///
/// Lets callers pass either a typed [`Scope`] or the scope name as text;
/// text outside `critical`/`async` fails with `UnsupportedScope`.
pub trait IntoScope {
    fn into_scope(self) -> Result<Scope, AssetError>;
}

impl IntoScope for Scope {
    #[inline]
    fn into_scope(self) -> Result<Scope, AssetError> {
        Ok(self)
    }
}

impl IntoScope for &str {
    #[inline]
    fn into_scope(self) -> Result<Scope, AssetError> {
        self.parse()
    }
}

impl IntoScope for &String {
    #[inline]
    fn into_scope(self) -> Result<Scope, AssetError> {
        self.parse()
    }
}

/// One value per scope. Both slots always exist.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PerScope<T> {
    critical: T,
    deferred: T,
}

impl<T> PerScope<T> {
    pub const fn new(critical: T, deferred: T) -> Self {
        Self { critical, deferred }
    }

    #[inline]
    pub fn get(&self, scope: Scope) -> &T {
        match scope {
            Scope::Critical => &self.critical,
            Scope::Async => &self.deferred,
        }
    }

    #[inline]
    pub fn get_mut(&mut self, scope: Scope) -> &mut T {
        match scope {
            Scope::Critical => &mut self.critical,
            Scope::Async => &mut self.deferred,
        }
    }

    /// Iterate `(scope, value)` pairs, critical first.
    pub fn iter(&self) -> impl Iterator<Item = (Scope, &T)> {
        Scope::ALL.into_iter().map(move |scope| (scope, self.get(scope)))
    }

    /// Consume into `(scope, value)` pairs, critical first.
    pub fn into_pairs(self) -> [(Scope, T); 2] {
        [(Scope::Critical, self.critical), (Scope::Async, self.deferred)]
    }
}

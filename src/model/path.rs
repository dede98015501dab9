use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// Terminal key that requests a partial pressure instead of a stored leaf.
pub const VAPOR_PRESSURE: &str = "vapor pressure";
/// Leaf read from the species entry when deriving a partial pressure.
pub const MOLE_FRACTION: &str = "mole fraction";
/// Per-calculation total pressure, the second operand of the derivation.
pub const PRESSURE: &str = "pressure";

/// Separator used by the textual form of a [`KeyPath`].
pub const PATH_SEPARATOR: char = '/';

#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[error("unsupported key path depth {0}: expected 1, 3, or 5 keys")]
pub struct UnsupportedDepth(pub usize);

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseKeyPathError {
    #[error("key path is empty")]
    Empty,
    #[error("key path '{0}' contains an empty segment")]
    EmptySegment(String),
}

/// Ordered keys locating a value inside one calculation's result tree.
///
/// The number of keys is the only dispatch signal; see [`KeyPath::route`].
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct KeyPath(Vec<String>);

/// How a [`KeyPath`] is resolved, decided purely from its depth and
/// terminal key.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Route<'a> {
    /// Top-level scalar, e.g. `temperature`.
    Depth1(&'a str),
    /// Category, entry, quantity.
    Depth3([&'a str; 3]),
    /// Four nested mappings then a stored leaf.
    Depth5Direct([&'a str; 5]),
    /// Four nested mappings whose `mole fraction` is scaled by the
    /// calculation's `pressure`.
    Depth5Derived([&'a str; 4]),
}

impl KeyPath {
    pub fn new<I, S>(keys: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self(keys.into_iter().map(Into::into).collect())
    }

    pub fn keys(&self) -> &[String] {
        &self.0
    }

    #[inline]
    pub fn depth(&self) -> usize {
        self.0.len()
    }

    pub fn terminal(&self) -> Option<&str> {
        self.0.last().map(String::as_str)
    }

    pub fn is_derived(&self) -> bool {
        matches!(self.route(), Ok(Route::Depth5Derived(_)))
    }

    pub fn route(&self) -> Result<Route<'_>, UnsupportedDepth> {
        match self.0.as_slice() {
            [a] => Ok(Route::Depth1(a)),
            [a, b, c] => Ok(Route::Depth3([a, b, c].map(String::as_str))),
            [a, b, c, d, e] if e == VAPOR_PRESSURE => {
                Ok(Route::Depth5Derived([a, b, c, d].map(String::as_str)))
            }
            [a, b, c, d, e] => Ok(Route::Depth5Direct([a, b, c, d, e].map(String::as_str))),
            keys => Err(UnsupportedDepth(keys.len())),
        }
    }
}

impl fmt::Display for KeyPath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, key) in self.0.iter().enumerate() {
            if i > 0 {
                write!(f, "{}", PATH_SEPARATOR)?;
            }
            f.write_str(key)?;
        }
        Ok(())
    }
}

impl FromStr for KeyPath {
    type Err = ParseKeyPathError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s.trim().is_empty() {
            return Err(ParseKeyPathError::Empty);
        }
        let keys: Vec<String> = s
            .split(PATH_SEPARATOR)
            .map(|seg| seg.trim().to_string())
            .collect();
        if keys.iter().any(String::is_empty) {
            return Err(ParseKeyPathError::EmptySegment(s.to_string()));
        }
        Ok(Self(keys))
    }
}

impl<S: Into<String>> From<Vec<S>> for KeyPath {
    fn from(keys: Vec<S>) -> Self {
        Self::new(keys)
    }
}

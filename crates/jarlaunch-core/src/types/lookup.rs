//! Outcome of a `Main-Class` lookup.

use std::fmt;

use super::class_name::MainClass;

/// Result of scanning a manifest for its `Main-Class` attribute
///
/// Three outcomes are possible, and only one of them carries a value:
///
/// - `Found`: the attribute exists and names a class
/// - `Absent`: there is no manifest, or it has no `Main-Class` line. A JAR used
///   as a library looks like this, so it is not an error.
/// - `Malformed`: the attribute exists but no usable class name can be taken
///   from it. No fallback entry point exists, so the default launch policy
///   terminates the process (see [`crate::launch`]).
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MainClassLookup
{
    /// The declared entry point
    Found(MainClass),
    /// No entry point is declared
    Absent(Absence),
    /// An entry point is declared but unusable
    Malformed(MalformedManifest),
}

impl MainClassLookup
{
    /// Returns the class name if one was found
    pub fn main_class(&self) -> Option<&MainClass>
    {
        match self {
            MainClassLookup::Found(class) => Some(class),
            _ => None,
        }
    }

    /// Consume the lookup, keeping only a found class name
    pub fn into_main_class(self) -> Option<MainClass>
    {
        match self {
            MainClassLookup::Found(class) => Some(class),
            _ => None,
        }
    }

    /// True when the lookup found a class name
    pub fn is_found(&self) -> bool
    {
        matches!(self, MainClassLookup::Found(_))
    }

    /// True when no entry point is declared
    pub fn is_absent(&self) -> bool
    {
        matches!(self, MainClassLookup::Absent(_))
    }

    /// True when the declared entry point is unusable
    pub fn is_malformed(&self) -> bool
    {
        matches!(self, MainClassLookup::Malformed(_))
    }
}

/// Why no entry point was declared
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Absence
{
    /// The manifest file could not be opened
    NoManifest,
    /// The manifest was read to the end without a `Main-Class:` line
    NoAttribute,
}

impl fmt::Display for Absence
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result
    {
        match self {
            Absence::NoManifest => f.write_str("manifest file not readable"),
            Absence::NoAttribute => f.write_str("no Main-Class attribute"),
        }
    }
}

/// Why a declared entry point is unusable
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MalformedManifest
{
    /// `Main-Class:` is followed only by whitespace
    MissingClassName
    {
        /// 1-based physical line number of the attribute
        line: usize,
    },
    /// The `Main-Class:` line is longer than the configured maximum
    LineTooLong
    {
        /// 1-based physical line number of the attribute
        line: usize,
        /// The configured maximum, in bytes
        max: usize,
    },
    /// The class name is not valid UTF-8
    InvalidEncoding
    {
        /// 1-based physical line number of the attribute
        line: usize,
    },
}

impl MalformedManifest
{
    /// Physical line number of the offending attribute
    pub fn line(&self) -> usize
    {
        match *self {
            MalformedManifest::MissingClassName { line }
            | MalformedManifest::LineTooLong { line, .. }
            | MalformedManifest::InvalidEncoding { line } => line,
        }
    }
}

impl fmt::Display for MalformedManifest
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result
    {
        match self {
            MalformedManifest::MissingClassName { line } => write!(f, "missing class name on line {line}"),
            MalformedManifest::LineTooLong { line, max } => {
                write!(f, "Main-Class line {line} exceeds {max} bytes")
            }
            MalformedManifest::InvalidEncoding { line } => write!(f, "class name on line {line} is not UTF-8"),
        }
    }
}

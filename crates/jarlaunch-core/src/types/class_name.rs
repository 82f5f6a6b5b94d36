//! Resolved entry point class name.

use std::ffi::{CString, NulError};
use std::fmt;

/// Fully qualified, dot-separated name of an archive's entry point class
///
/// This is the owned result of a successful resolution. It holds exactly the
/// bytes of the `Main-Class` value, with no surrounding whitespace and no
/// terminator; the memory is released when the value is dropped.
///
/// ## Example
///
/// ```rust
/// use jarlaunch_core::types::MainClass;
///
/// let class = MainClass::from("com.acme.Main");
/// assert_eq!(class.internal_name(), "com/acme/Main");
/// assert_eq!(class.simple_name(), "Main");
/// assert_eq!(class.package(), Some("com.acme"));
/// ```
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct MainClass(String);

impl MainClass
{
    /// The dotted class name, as written in the manifest
    pub fn as_str(&self) -> &str
    {
        &self.0
    }

    /// Number of bytes in the class name
    pub fn len(&self) -> usize
    {
        self.0.len()
    }

    /// Always `false` for names produced by the resolver
    pub fn is_empty(&self) -> bool
    {
        self.0.is_empty()
    }

    /// Slash-separated form used by class loaders (`com/acme/Main`)
    pub fn internal_name(&self) -> String
    {
        self.0.replace('.', "/")
    }

    /// The last segment of the name (`Main` for `com.acme.Main`)
    pub fn simple_name(&self) -> &str
    {
        self.0.rsplit_once('.').map_or(self.0.as_str(), |(_, simple)| simple)
    }

    /// The package part of the name, or `None` for the default package
    pub fn package(&self) -> Option<&str>
    {
        self.0.rsplit_once('.').map(|(package, _)| package)
    }

    /// NUL-terminated copy for handing to C APIs
    ///
    /// The returned buffer is exactly `len() + 1` bytes long.
    ///
    /// ## Errors
    ///
    /// Returns `NulError` if the name contains an interior NUL byte. The
    /// resolver never produces such names.
    pub fn to_c_string(&self) -> Result<CString, NulError>
    {
        CString::new(self.0.as_bytes())
    }

    /// Consume and return the owned string
    pub fn into_string(self) -> String
    {
        self.0
    }
}

impl From<&str> for MainClass
{
    fn from(name: &str) -> Self
    {
        MainClass(name.to_string())
    }
}

impl From<String> for MainClass
{
    fn from(name: String) -> Self
    {
        MainClass(name)
    }
}

impl AsRef<str> for MainClass
{
    fn as_ref(&self) -> &str
    {
        &self.0
    }
}

impl fmt::Display for MainClass
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result
    {
        f.write_str(&self.0)
    }
}

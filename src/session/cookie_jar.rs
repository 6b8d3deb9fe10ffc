use fxhash::FxHashMap;
use std::collections::HashMap;
use std::hash::BuildHasher;
use std::iter::FromIterator;

/// A read-only key/value view of the cookies available to the page
pub trait CookieSource {
    /// the raw value stored under `name`, if any
    fn cookie(&self, name: &str) -> Option<&str>;
}

impl<S: BuildHasher> CookieSource for HashMap<String, String, S> {
    fn cookie(&self, name: &str) -> Option<&str> {
        self.get(name).map(String::as_str)
    }
}

/// Cookies parsed out of a `document.cookie` style string, e.g. `a=1; b=2`.
///
/// When a name shows up more than once the last value wins. Pieces without an
/// `=` are ignored. Values are kept exactly as they appear, encoded or not.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CookieJar {
    cookies: FxHashMap<String, String>,
}

impl CookieJar {
    /// parses a cookie string
    pub fn parse(cookie_str: &str) -> Self {
        cookie_str
            .split(';')
            .filter_map(|pair| pair.trim_start().split_once('='))
            .map(|(name, value)| (name.trim(), value))
            .filter(|(name, _)| !name.is_empty())
            .collect()
    }

    /// number of distinct cookie names
    pub fn len(&self) -> usize {
        self.cookies.len()
    }

    /// true when no cookies were found
    pub fn is_empty(&self) -> bool {
        self.cookies.is_empty()
    }
}

impl<K: Into<String>, V: Into<String>> FromIterator<(K, V)> for CookieJar {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        CookieJar {
            cookies: iter
                .into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        }
    }
}

impl CookieSource for CookieJar {
    fn cookie(&self, name: &str) -> Option<&str> {
        self.cookies.get(name).map(String::as_str)
    }
}

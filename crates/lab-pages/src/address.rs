//! Page addresses
//!
//! Detail pages read the record id from the `id` query parameter of their
//! own address. Relative addresses are resolved against a placeholder
//! origin so only the query matters.

use crate::error::AddressError;
use reqwest::Url;

const PLACEHOLDER_ORIGIN: &str = "http://localhost/";

/// Parsed page address
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PageAddress {
    href: String,
    url: Url,
}

impl PageAddress {
    /// Parse an absolute or site-relative address
    ///
    /// # Errors
    ///
    /// Returns [`AddressError`] when the address cannot be parsed.
    pub fn parse(href: &str) -> Result<Self, AddressError> {
        let url = match Url::parse(href) {
            Ok(url) => url,
            Err(_) => Url::parse(PLACEHOLDER_ORIGIN)
                .and_then(|base| base.join(href))
                .map_err(|e| AddressError {
                    href: href.to_string(),
                    reason: e.to_string(),
                })?,
        };
        Ok(Self {
            href: href.to_string(),
            url,
        })
    }

    /// Address of `page` with `id` as its query
    ///
    /// # Errors
    ///
    /// Returns [`AddressError`] when `page` is not a valid path.
    pub fn for_record(page: &str, id: &str) -> Result<Self, AddressError> {
        let mut address = Self::parse(page)?;
        address.url.query_pairs_mut().clear().append_pair("id", id);
        address.href = match address.url.as_str().strip_prefix(PLACEHOLDER_ORIGIN) {
            Some(relative) => relative.to_string(),
            None => address.url.to_string(),
        };
        Ok(address)
    }

    /// Address as given
    #[must_use]
    pub fn href(&self) -> &str {
        &self.href
    }

    /// The `id` query parameter, when present and non-empty
    #[must_use]
    pub fn id(&self) -> Option<String> {
        self.url
            .query_pairs()
            .find(|(key, _)| key == "id")
            .map(|(_, value)| value.into_owned())
            .filter(|value| !value.is_empty())
    }
}

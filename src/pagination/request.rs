use std::collections::HashMap;

use super::calculator::{paginate, PageRequest, PageSource};
use super::config::{PageKeys, PaginationConfig};
use super::error::PaginationError;
use super::page::Page;
use super::sort::Sort;

/// Read-only view over a request's query-string parameters
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct QueryParams {
    values: HashMap<String, String>,
}

impl QueryParams {
    pub fn new(values: HashMap<String, String>) -> Self {
        Self { values }
    }

    pub fn get(&self, key: &str) -> Option<&str> {
        self.values.get(key).map(String::as_str)
    }

    /// Empty values read as absent
    pub fn get_optional_int(&self, key: &str) -> Result<Option<i64>, PaginationError> {
        let raw = match self.get(key) {
            None | Some("") => return Ok(None),
            Some(raw) => raw,
        };

        raw.parse::<i64>()
            .map(Some)
            .map_err(|_| PaginationError::ParameterType {
                key: key.to_string(),
                raw: raw.to_string(),
            })
    }
}

impl From<HashMap<String, String>> for QueryParams {
    fn from(values: HashMap<String, String>) -> Self {
        Self::new(values)
    }
}

impl<K, V> FromIterator<(K, V)> for QueryParams
where
    K: Into<String>,
    V: Into<String>,
{
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self::new(
            iter.into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        )
    }
}

/// Resolves page number and size from the request, before validation
pub fn resolve_page_params(
    params: &QueryParams,
    keys: &PageKeys,
    config: &PaginationConfig,
) -> Result<(i64, i64), PaginationError> {
    let number = params.get_optional_int(&keys.page)?.unwrap_or(1);
    let requested = params
        .get_optional_int(&keys.per)?
        .unwrap_or_else(|| i64::try_from(config.default_page_size).unwrap_or(i64::MAX));

    let size = config.clamp_page_size(requested);
    if size != requested {
        log::debug!("Clamped page size {} to {}", requested, size);
    }

    Ok((number, size))
}

pub fn paginate_from_request<S>(
    source: &mut S,
    params: &QueryParams,
    keys: &PageKeys,
    config: &PaginationConfig,
    sorts: Option<Vec<Sort>>,
) -> Result<Page<S::Item>, S::Error>
where
    S: PageSource + ?Sized,
{
    let (number, size) = resolve_page_params(params, keys, config)?;
    let request = PageRequest::with_defaults(config, number, Some(size), sorts)?;
    paginate(source, request)
}

//! Search-then-paginate pipeline shared by the project and profile listings.

use serde::Serialize;

use crate::pagination::{Paginated, paginate};
use crate::params::ListParams;
use crate::search::{Searchable, filter};

/// One rendered listing page together with the echoed search text.
#[derive(Debug, Serialize)]
pub struct Listing<T> {
    pub search_query: String,
    #[serde(flatten)]
    pub page: Paginated<T>,
}

/// Filters `records` by keyword and slices the requested page.
pub fn search_and_paginate<T: Searchable>(
    params: &ListParams,
    records: Vec<T>,
    per_page: usize,
) -> Listing<T> {
    let (records, search_query) = filter(params, records);
    Listing {
        search_query,
        page: paginate(params, records, per_page),
    }
}

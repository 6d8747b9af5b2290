// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Service provider queries.

use diesel::SqliteConnection;
use diesel::prelude::*;
use tracing::debug;

use hr_admin_domain::{MAX_LIST_RESULTS, ServiceProvider, ServiceProviderFilter};

use crate::data_models::ServiceProviderRow;
use crate::diesel_schema::service_providers;
use crate::error::PersistenceError;

/// Lists service providers in insertion order.
///
/// Inactive providers are excluded while `filter.active_only` is set.
///
/// # Errors
///
/// Returns an error if the database query fails or a stored row no longer
/// parses.
pub fn list_service_providers(
    conn: &mut SqliteConnection,
    filter: &ServiceProviderFilter,
) -> Result<Vec<ServiceProvider>, PersistenceError> {
    debug!(?filter, "Listing service providers");

    let mut query = service_providers::table
        .select(ServiceProviderRow::as_select())
        .into_boxed();

    if let Some(tier) = filter.network_tier {
        query = query.filter(service_providers::network_tier.eq(tier.as_str()));
    }
    if filter.active_only {
        query = query.filter(service_providers::is_active.eq(1));
    }

    let rows: Vec<ServiceProviderRow> = query
        .order(service_providers::doc_key.asc())
        .limit(MAX_LIST_RESULTS)
        .load(conn)?;

    rows.into_iter()
        .map(ServiceProviderRow::into_domain)
        .collect()
}

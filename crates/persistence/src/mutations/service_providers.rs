// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use diesel::SqliteConnection;
use diesel::prelude::*;
use tracing::info;

use hr_admin_domain::ServiceProvider;

use crate::data_models::NewServiceProviderRow;
use crate::diesel_schema::service_providers;
use crate::error::PersistenceError;

/// Inserts a complete service provider record.
///
/// # Errors
///
/// Returns an error if the record cannot be encoded or inserted.
pub fn insert_service_provider(
    conn: &mut SqliteConnection,
    provider: &ServiceProvider,
) -> Result<(), PersistenceError> {
    diesel::insert_into(service_providers::table)
        .values(NewServiceProviderRow::from_domain(provider)?)
        .execute(conn)?;

    info!(id = %provider.id, name = %provider.name, "Service provider registered");
    Ok(())
}

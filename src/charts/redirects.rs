//! Resolve a public identifier to a published chart

use crate::error::{Error, Result};
use crate::models::Chart;
use crate::store::EntityStore;

/// Find the published chart for a slug or numeric id, following the
/// redirect table when nothing matches directly.
///
/// A redirect whose target is missing or unpublished is reported as
/// [`Error::DanglingRedirect`], never as [`Error::NotFound`].
pub async fn find_with_redirects(store: &dyn EntityStore, identifier: &str) -> Result<Chart> {
    let numeric_id = identifier.parse::<i64>().ok();

    if let Some(chart) = store.get_chart_by_slug_or_id(identifier, numeric_id).await? {
        log::debug!("'{}' matched chart {}", identifier, chart.id);
        return Ok(chart);
    }

    let Some(redirect) = store.get_redirect_by_slug(identifier).await? else {
        log::debug!("No chart or redirect for '{}'", identifier);
        return Err(Error::NotFound(identifier.to_string()));
    };

    match store.get_published_chart(redirect.chart_id).await? {
        Some(chart) => {
            log::debug!("'{}' redirected to chart {}", identifier, chart.id);
            Ok(chart)
        }
        None => {
            log::warn!(
                "Redirect '{}' points at chart {}, which is missing or unpublished",
                redirect.slug,
                redirect.chart_id
            );
            Err(Error::DanglingRedirect {
                slug: redirect.slug,
                chart_id: redirect.chart_id,
            })
        }
    }
}

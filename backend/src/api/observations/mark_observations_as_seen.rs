use common::{filter_set::FilterSet, observations::MarkAsSeenReply, querystring};

use crate::{config::get_api_config, http_utils::observation_api::api_post_form};

/// Queues the server-side job; callers refresh their views once this returns.
pub async fn mark_observations_as_seen(filters: FilterSet) -> anyhow::Result<bool> {
    let config = get_api_config();
    let url = config.url(&config.endpoints.mark_observations_as_seen_url);
    let reply: MarkAsSeenReply = api_post_form(url, querystring::encode(&filters)).await?;
    if !reply.queued {
        tracing::warn!("mark as seen was not queued");
    }
    Ok(reply.queued)
}

//! Requests that must not be overwritten by slower, older responses.

use std::future::Future;

use common::request_tracker::RequestTracker;
use dioxus::prelude::*;

/// Latest accepted response of a view's request, `None` until the first one lands.
pub type TrackedResponse<T> = ReadSignal<Option<Result<T, ServerFnError>>>;

/// Re-issues `request` whenever a signal it reads changes. `request` returns the
/// identity of the request (encoded filters plus view-specific params) and the
/// future producing it; a response is only stored if no newer request was
/// issued by this view in the meantime.
pub fn use_tracked_request<T, Fut>(mut request: impl FnMut() -> (String, Fut) + 'static) -> TrackedResponse<T>
where
    T: 'static,
    Fut: Future<Output = Result<T, ServerFnError>> + 'static,
{
    let mut tracker = use_signal(RequestTracker::new);
    let mut response = use_signal(|| None);

    use_effect(move || {
        let (query, future) = request();
        let tag = tracker.write().issue_query(query);
        spawn(async move {
            let result = future.await;
            if let Ok(result) = tracker.peek().accept(&tag, result) {
                response.set(Some(result));
            }
        });
    });

    response.into()
}

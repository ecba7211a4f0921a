//! Validates a browser switch return against the session that started it.
//!
//! Rules are applied in order:
//! 1. a canceled switch is `Cancelled`, the returned url is never looked at;
//! 2. the last path segment of the returned url must match the success url's;
//! 3. the round-trip token (key chosen by the recorded flow) must be present in
//!    the returned url and equal the token of the approval url.

use url::Url;

use crate::{
    logger,
    services::BrowserSwitchStatus,
    types::{AuthorizationOutcome, AuthorizationSession, InvalidReason, UrlResponseData},
};

/// Last non-empty path segment, falling back to the host for urls such as
/// `scheme://local-payment-success` that carry their status there.
fn status_segment(url: &Url) -> Option<String> {
    url.path_segments()
        .and_then(|segments| segments.rev().find(|segment| !segment.is_empty()))
        .map(str::to_owned)
        .or_else(|| url.host_str().map(str::to_owned))
}

fn query_parameter(url: &Url, key: &str) -> Option<String> {
    url.query_pairs()
        .find(|(name, _)| name == key)
        .map(|(_, value)| value.into_owned())
}

fn tokens_match(returned_url: &Url, session: &AuthorizationSession) -> bool {
    let token_key = session.token_key();
    let Some(response_token) = query_parameter(returned_url, token_key) else {
        return false;
    };
    let request_token = Url::parse(&session.approval_url)
        .ok()
        .and_then(|approval_url| query_parameter(&approval_url, token_key));

    request_token.as_deref() == Some(response_token.as_str())
}

pub fn resolve(
    status: BrowserSwitchStatus,
    returned_url: Option<&str>,
    session: &AuthorizationSession,
) -> AuthorizationOutcome {
    if status == BrowserSwitchStatus::Canceled {
        logger::info!(flow = %session.flow, "user canceled the browser switch");
        return AuthorizationOutcome::Cancelled;
    }

    let Some((raw_url, parsed_url)) =
        returned_url.and_then(|raw| Url::parse(raw).ok().map(|parsed| (raw, parsed)))
    else {
        logger::warn!(flow = %session.flow, "browser switch returned without a usable url");
        return AuthorizationOutcome::Invalid(InvalidReason::AuthorizationNotCompleted);
    };

    let expected_status = Url::parse(&session.success_url)
        .ok()
        .as_ref()
        .and_then(status_segment);
    let returned_status = status_segment(&parsed_url);
    if expected_status.is_none() || expected_status != returned_status {
        logger::info!(
            flow = %session.flow,
            returned_status = ?returned_status,
            "browser switch did not return to the success target"
        );
        return AuthorizationOutcome::Invalid(InvalidReason::AuthorizationNotCompleted);
    }

    if !tokens_match(&parsed_url, session) {
        logger::warn!(
            flow = %session.flow,
            token_key = session.token_key(),
            "returned token is missing or does not match the approval url"
        );
        return AuthorizationOutcome::Invalid(InvalidReason::InconsistentResponseData);
    }

    AuthorizationOutcome::Authorized(UrlResponseData::from_web_url(raw_url))
}

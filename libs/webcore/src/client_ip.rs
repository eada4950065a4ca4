//! Best-effort caller address resolution.
//!
//! The address is used for coarse rate limiting and audit metadata only, so a
//! spoofable header chain is acceptable. Resolution order matches what the
//! reverse proxy / CDN in front of the server populates: the first hop of
//! `x-forwarded-for`, then `x-real-ip`, then `cf-connecting-ip`, else a fixed
//! `"unknown"` literal.

use axum::http::HeaderMap;

pub const UNKNOWN: &str = "unknown";

/// Resolve the caller's network address from proxy headers.
pub fn resolve_caller_address(headers: &HeaderMap) -> String {
    if let Some(forwarded) = header_str(headers, "x-forwarded-for") {
        if let Some(first_hop) = forwarded.split(',').next() {
            let first_hop = first_hop.trim();
            if !first_hop.is_empty() {
                return first_hop.to_owned();
            }
        }
    }
    if let Some(real_ip) = header_str(headers, "x-real-ip") {
        return real_ip.trim().to_owned();
    }
    if let Some(cf_ip) = header_str(headers, "cf-connecting-ip") {
        return cf_ip.trim().to_owned();
    }
    UNKNOWN.to_owned()
}

/// The client agent string, or `"unknown"` when absent or non-UTF8.
pub fn resolve_user_agent(headers: &HeaderMap) -> String {
    header_str(headers, "user-agent")
        .unwrap_or(UNKNOWN)
        .to_owned()
}

fn header_str<'a>(headers: &'a HeaderMap, name: &str) -> Option<&'a str> {
    headers
        .get(name)
        .and_then(|v| v.to_str().ok())
        .filter(|v| !v.is_empty())
}

//! Shared range-validation helpers.

/// Push an error if `value` is outside `[min, max]`.
pub(crate) fn validate_range(errors: &mut Vec<String>, name: &str, value: u32, min: u32, max: u32) {
    if value < min || value > max {
        errors.push(format!("{name} = {value} is out of range [{min}, {max}]"));
    }
}

/// Push an error unless `url` is an http(s) URL with a host part.
pub(crate) fn validate_http_url(errors: &mut Vec<String>, name: &str, url: &str) {
    let rest = url
        .strip_prefix("http://")
        .or_else(|| url.strip_prefix("https://"));
    match rest {
        Some(host) if !host.trim_matches('/').is_empty() => {}
        Some(_) => errors.push(format!("{name} = {url:?} has no host")),
        None => errors.push(format!("{name} = {url:?} must start with http:// or https://")),
    }
}

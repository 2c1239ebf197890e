//! Display helpers for backend timestamps and profile fields.

#[cfg(test)]
#[path = "format_test.rs"]
mod format_test;

/// Platforms a profile can tick, in display order.
pub const PLATFORMS: [&str; 3] = ["ps", "xbox", "pc"];

/// Browser: the local date and time for `ts`. Elsewhere:
/// `2024-05-01T18:42:07.123Z` -> `2024-05-01 18:42` (UTC). Unrecognized input
/// is returned unchanged.
pub fn format_timestamp(ts: &str) -> String {
    #[cfg(feature = "hydrate")]
    {
        if let Some(local) = browser_local(ts, false) {
            return local;
        }
    }
    match split_iso(ts) {
        Some((date, time)) => format!("{date} {time}"),
        None => ts.to_owned(),
    }
}

/// Browser: local `HH:MM` for `ts`. Elsewhere: `2024-05-01T18:42:07.123Z` ->
/// `18:42` (UTC).
pub fn format_time(ts: &str) -> String {
    #[cfg(feature = "hydrate")]
    {
        if let Some(local) = browser_local(ts, true) {
            return local;
        }
    }
    split_iso(ts).map_or_else(|| ts.to_owned(), |(_, time)| time.to_owned())
}

/// Render `ts` in the browser's locale and time zone. `None` when the browser
/// cannot parse it.
#[cfg(feature = "hydrate")]
fn browser_local(ts: &str, time_only: bool) -> Option<String> {
    use js_sys::{Date, Object, Reflect};
    use wasm_bindgen::JsValue;

    let date = Date::new(&JsValue::from_str(ts));
    if date.get_time().is_nan() {
        return None;
    }
    let options = Object::new();
    if time_only {
        Reflect::set(&options, &"hour".into(), &"2-digit".into()).ok()?;
        Reflect::set(&options, &"minute".into(), &"2-digit".into()).ok()?;
    }
    Some(date.to_locale_string("default", &options).into())
}

fn split_iso(ts: &str) -> Option<(&str, &str)> {
    let (date, rest) = ts.split_once('T')?;
    let time = rest.get(..5)?;
    if date.len() != 10 || time.as_bytes().get(2) != Some(&b':') {
        return None;
    }
    Some((date, time))
}

/// `["ps", "pc"]` -> `"PS, PC"`, or `"None"` when empty.
pub fn platform_summary(platforms: &[String]) -> String {
    if platforms.is_empty() {
        return "None".to_owned();
    }
    platforms.iter().map(|p| p.to_uppercase()).collect::<Vec<_>>().join(", ")
}

/// Avatar URL or the bundled placeholder.
pub fn avatar_or_default(avatar: Option<&str>) -> String {
    match avatar {
        Some(url) if !url.is_empty() => url.to_owned(),
        _ => "/default-avatar.png".to_owned(),
    }
}

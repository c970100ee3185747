//! Connection settings form
//!
//! Typed edits of the connection attributes and the polling interval. Every
//! edit is one write-accessor call; nothing is rejected, odd input is coerced.

use regex::Regex;
use tracing::debug;

use crate::application::native_config::{AttrValue, ConfigAttribute};
use crate::infrastructure::traits::ConfigHost;

/// Lowest accepted polling interval in seconds.
pub const POLL_INTERVAL_MIN: u32 = 10;
/// Increment of the interval spinner in seconds.
pub const POLL_INTERVAL_STEP: u32 = 5;
/// Interval used when the stored or typed value is unusable.
pub const POLL_INTERVAL_DEFAULT: u32 = 60;

const TOKEN_MASK: &str = "********";

/// Parse an interval as typed: integers, or decimals rounded to whole seconds.
pub fn parse_poll_interval(text: &str) -> Option<i64> {
    let text = text.trim();
    text.parse::<i64>().ok().or_else(|| {
        text.parse::<f64>()
            .ok()
            .filter(|f| f.is_finite())
            .map(|f| f.round() as i64)
    })
}

/// Clamp a parsed interval to the minimum; unparseable input yields the default.
pub fn coerce_poll_interval(value: Option<i64>) -> u32 {
    match value {
        Some(secs) if secs < POLL_INTERVAL_MIN as i64 => POLL_INTERVAL_MIN,
        Some(secs) => u32::try_from(secs).unwrap_or(POLL_INTERVAL_DEFAULT),
        None => POLL_INTERVAL_DEFAULT,
    }
}

/// Effective interval of a stored host value.
pub fn effective_poll_interval(raw: Option<&AttrValue>) -> u32 {
    let parsed = match raw {
        Some(AttrValue::Number(n)) => Some(*n),
        Some(AttrValue::Text(text)) => parse_poll_interval(text),
        Some(AttrValue::Other(toml::Value::Float(f))) if f.is_finite() => Some(f.round() as i64),
        _ => None,
    };
    coerce_poll_interval(parsed)
}

/// Numeric polling-interval input.
///
/// Keeps the raw text while the user types; only values at or above the
/// minimum that fit in `u32` are written immediately. `blur` coerces whatever
/// is left. Stepping snaps to the grid `POLL_INTERVAL_MIN + k * POLL_INTERVAL_STEP`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PollIntervalField {
    buffer: String,
}

impl PollIntervalField {
    pub fn from_host(host: &dyn ConfigHost) -> Self {
        Self {
            buffer: effective_poll_interval(host.native().poll_interval.as_ref()).to_string(),
        }
    }

    pub fn buffer(&self) -> &str {
        &self.buffer
    }

    /// Text changed. Returns the value written, if any.
    pub fn input(&mut self, host: &mut dyn ConfigHost, text: &str) -> Option<u32> {
        self.buffer = text.to_string();
        let accepted = parse_poll_interval(text)
            .and_then(|secs| u32::try_from(secs).ok())
            .filter(|secs| *secs >= POLL_INTERVAL_MIN);
        match accepted {
            Some(secs) => {
                host.set(ConfigAttribute::PollInterval, AttrValue::Number(i64::from(secs)));
                Some(secs)
            }
            None => {
                debug!("poll interval input {:?} kept transient", text);
                None
            }
        }
    }

    /// Focus lost: coerce the buffer and write it.
    pub fn blur(&mut self, host: &mut dyn ConfigHost) -> u32 {
        let secs = coerce_poll_interval(parse_poll_interval(&self.buffer));
        self.commit(host, secs)
    }

    /// Next grid value above the current one.
    pub fn step_up(&mut self, host: &mut dyn ConfigHost) -> u32 {
        let current = coerce_poll_interval(parse_poll_interval(&self.buffer));
        let steps = (current - POLL_INTERVAL_MIN) / POLL_INTERVAL_STEP + 1;
        let raised = steps
            .checked_mul(POLL_INTERVAL_STEP)
            .and_then(|offset| offset.checked_add(POLL_INTERVAL_MIN))
            .unwrap_or(current);
        self.commit(host, raised)
    }

    /// Previous grid value below the current one, never under the minimum.
    pub fn step_down(&mut self, host: &mut dyn ConfigHost) -> u32 {
        let current = coerce_poll_interval(parse_poll_interval(&self.buffer));
        let lowered = match current.checked_sub(POLL_INTERVAL_MIN + 1) {
            Some(above) => POLL_INTERVAL_MIN + above / POLL_INTERVAL_STEP * POLL_INTERVAL_STEP,
            None => POLL_INTERVAL_MIN,
        };
        self.commit(host, lowered)
    }

    fn commit(&mut self, host: &mut dyn ConfigHost, secs: u32) -> u32 {
        self.buffer = secs.to_string();
        host.set(ConfigAttribute::PollInterval, AttrValue::Number(i64::from(secs)));
        secs
    }
}

/// Snapshot of the connection section for rendering.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConnectionView {
    pub base_url: String,
    /// Never the token itself
    pub api_token_masked: Option<String>,
    pub allow_self_signed: bool,
    pub poll_interval: u32,
    /// Localization key of a hint for the base URL, if any
    pub base_url_hint: Option<&'static str>,
}

/// Connection form bound to a host.
pub struct ConnectionForm {
    url_pattern: Regex,
}

impl Default for ConnectionForm {
    fn default() -> Self {
        Self::new()
    }
}

impl ConnectionForm {
    pub fn new() -> Self {
        Self {
            url_pattern: Regex::new(r"^https?://[^\s/]+").unwrap(),
        }
    }

    pub fn view(&self, host: &dyn ConfigHost) -> ConnectionView {
        let native = host.native();
        ConnectionView {
            base_url: native.base_url.clone(),
            api_token_masked: mask_token(&native.api_token),
            allow_self_signed: native.allow_self_signed,
            poll_interval: effective_poll_interval(native.poll_interval.as_ref()),
            base_url_hint: self.base_url_hint(&native.base_url),
        }
    }

    /// Hint key when `url` is set but lacks an http(s) scheme.
    pub fn base_url_hint(&self, url: &str) -> Option<&'static str> {
        if url.is_empty() || self.url_pattern.is_match(url) {
            None
        } else {
            Some("hint.base_url_scheme")
        }
    }

    /// Store the trimmed URL. Returns the hint for the stored value.
    pub fn set_base_url(&self, host: &mut dyn ConfigHost, url: &str) -> Option<&'static str> {
        let url = url.trim();
        host.set(ConfigAttribute::BaseUrl, AttrValue::Text(url.to_string()));
        self.base_url_hint(url)
    }

    pub fn set_api_token(&self, host: &mut dyn ConfigHost, token: &str) {
        debug!("updating api token");
        host.set(ConfigAttribute::ApiToken, AttrValue::Text(token.trim().to_string()));
    }

    pub fn set_allow_self_signed(&self, host: &mut dyn ConfigHost, allow: bool) {
        host.set(ConfigAttribute::AllowSelfSigned, AttrValue::Flag(allow));
    }
}

/// Fixed-width mask so the output does not reveal the token length.
pub fn mask_token(token: &str) -> Option<String> {
    if token.is_empty() {
        None
    } else {
        Some(TOKEN_MASK.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_poll_interval() {
        assert_eq!(parse_poll_interval(" 30 "), Some(30));
        assert_eq!(parse_poll_interval("12.6"), Some(13));
        assert_eq!(parse_poll_interval(""), None);
        assert_eq!(parse_poll_interval("abc"), None);
        assert_eq!(parse_poll_interval("NaN"), None);
    }

    #[test]
    fn test_mask_token_hides_length() {
        assert_eq!(mask_token(""), None);
        assert_eq!(mask_token("a"), mask_token("a-much-longer-token"));
    }

    #[test]
    fn test_base_url_hint() {
        let form = ConnectionForm::new();
        assert_eq!(form.base_url_hint(""), None);
        assert_eq!(form.base_url_hint("https://tower.local"), None);
        assert_eq!(form.base_url_hint("http://192.168.1.10:8080"), None);
        assert_eq!(form.base_url_hint("tower.local"), Some("hint.base_url_scheme"));
    }
}

//! Session cookie reading and writing.

use http::{header, HeaderMap};

use crate::config::AuthConfig;
use crate::domain::user::SessionToken;

/// Settings for the cookie that carries the session token.
#[derive(Debug, Clone)]
pub struct SessionCookie {
    name: String,
    max_age_secs: u64,
    secure: bool,
}

impl SessionCookie {
    pub fn new(name: impl Into<String>, max_age_secs: u64, secure: bool) -> Self {
        Self {
            name: name.into(),
            max_age_secs,
            secure,
        }
    }

    /// Cookie settings from the auth config. `secure` adds the `Secure` attribute.
    pub fn from_config(config: &AuthConfig, secure: bool) -> Self {
        Self::new(
            config.session_cookie_name.clone(),
            config.session_ttl_secs,
            secure,
        )
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// Token from the request's `Cookie` headers, if present and non-empty.
    pub fn read(&self, headers: &HeaderMap) -> Option<SessionToken> {
        headers
            .get_all(header::COOKIE)
            .iter()
            .filter_map(|value| value.to_str().ok())
            .flat_map(|value| value.split(';'))
            .filter_map(|pair| pair.trim().split_once('='))
            .find(|(name, value)| *name == self.name && !value.is_empty())
            .map(|(_, value)| SessionToken::from_raw(value))
    }

    /// `Set-Cookie` value that stores the token.
    pub fn issue(&self, token: &SessionToken) -> String {
        self.render(token.as_str(), self.max_age_secs)
    }

    /// `Set-Cookie` value that removes the cookie.
    pub fn clear(&self) -> String {
        self.render("", 0)
    }

    fn render(&self, value: &str, max_age: u64) -> String {
        let mut cookie = format!(
            "{}={}; Path=/; HttpOnly; SameSite=Lax; Max-Age={}",
            self.name, value, max_age
        );
        if self.secure {
            cookie.push_str("; Secure");
        }
        cookie
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use http::HeaderValue;

    fn cookie() -> SessionCookie {
        SessionCookie::new("sessionid", 3600, false)
    }

    fn headers(values: &[&str]) -> HeaderMap {
        let mut headers = HeaderMap::new();
        for value in values {
            headers.append(header::COOKIE, HeaderValue::from_str(value).unwrap());
        }
        headers
    }

    #[test]
    fn reads_token_among_other_cookies() {
        let token = cookie()
            .read(&headers(&["theme=dark; sessionid=abc123; lang=en"]))
            .unwrap();
        assert_eq!(token.as_str(), "abc123");
    }

    #[test]
    fn reads_token_from_second_header() {
        let token = cookie()
            .read(&headers(&["theme=dark", "sessionid=xyz"]))
            .unwrap();
        assert_eq!(token.as_str(), "xyz");
    }

    #[test]
    fn ignores_missing_or_empty_cookie() {
        assert!(cookie().read(&HeaderMap::new()).is_none());
        assert!(cookie().read(&headers(&["sessionid="])).is_none());
        assert!(cookie().read(&headers(&["other=abc"])).is_none());
    }

    #[test]
    fn name_must_match_exactly() {
        assert!(cookie().read(&headers(&["xsessionid=abc"])).is_none());
    }

    #[test]
    fn issued_cookie_is_http_only_and_lax() {
        let value = cookie().issue(&SessionToken::from_raw("tok"));
        assert_eq!(
            value,
            "sessionid=tok; Path=/; HttpOnly; SameSite=Lax; Max-Age=3600"
        );
    }

    #[test]
    fn secure_cookie_carries_secure_attribute() {
        let value = SessionCookie::new("sid", 60, true).issue(&SessionToken::from_raw("t"));
        assert!(value.ends_with("; Secure"));
    }

    #[test]
    fn cleared_cookie_expires_immediately() {
        assert_eq!(
            cookie().clear(),
            "sessionid=; Path=/; HttpOnly; SameSite=Lax; Max-Age=0"
        );
    }

    #[test]
    fn from_config_uses_name_and_ttl() {
        let config = AuthConfig::default();
        let cookie = SessionCookie::from_config(&config, false);
        assert_eq!(cookie.name(), "sessionid");
        assert!(cookie.issue(&SessionToken::from_raw("t")).contains("Max-Age=1209600"));
    }
}

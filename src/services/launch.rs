// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Launch parameters carried in the page URL's query string.

use crate::services::onboarding::EntryPoint;

/// Startup signals from the outside world.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct LaunchParams {
    /// Wipe stored state and restart onboarding from the beginning
    pub reset: bool,
    /// Where the visitor came from
    pub entry: Option<EntryPoint>,
}

impl LaunchParams {
    /// Parse a query string such as `?reset=1&entry=direct`.
    ///
    /// Unknown keys and undecodable pairs are ignored.
    pub fn from_query(query: &str) -> Self {
        let mut params = Self::default();
        let query = query.trim().trim_start_matches('?');

        for pair in query.split('&').filter(|p| !p.is_empty()) {
            let (raw_key, raw_value) = pair.split_once('=').unwrap_or((pair, ""));
            let (Ok(key), Ok(value)) = (
                urlencoding::decode(raw_key),
                urlencoding::decode(raw_value),
            ) else {
                tracing::debug!(pair, "Ignoring undecodable query pair");
                continue;
            };

            match &*key {
                "reset" => params.reset = is_truthy(&value),
                "entry" => params.entry = EntryPoint::parse(&value),
                _ => {}
            }
        }

        params
    }
}

/// A bare `reset` counts as set.
fn is_truthy(value: &str) -> bool {
    matches!(
        value.trim().to_ascii_lowercase().as_str(),
        "" | "1" | "true" | "yes"
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_reset_values() {
        assert!(LaunchParams::from_query("?reset=true").reset);
        assert!(LaunchParams::from_query("reset=1").reset);
        assert!(LaunchParams::from_query("?reset").reset);
        assert!(!LaunchParams::from_query("?reset=0").reset);
        assert!(!LaunchParams::from_query("").reset);
    }

    #[test]
    fn test_entry_and_encoding() {
        let params = LaunchParams::from_query("?utm=x&entry=%64irect");
        assert_eq!(params.entry, Some(EntryPoint::Direct));
        assert!(!params.reset);

        let params = LaunchParams::from_query("?entry=somewhere");
        assert_eq!(params.entry, None);
    }

    #[test]
    fn test_bad_percent_encoding_ignored() {
        let params = LaunchParams::from_query("?entry=%FF%FE&reset=yes");
        assert_eq!(params.entry, None);
        assert!(params.reset);
    }
}

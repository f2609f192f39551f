use serde::Deserialize;

/// One line of the credential list plus the proxy line paired with it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AccountCredential {
    pub init_data: String,
    pub proxy: Option<String>,
}

impl AccountCredential {
    pub fn new(init_data: impl Into<String>, proxy: Option<String>) -> Self {
        Self {
            init_data: init_data.into(),
            proxy,
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct UserProfile {
    #[serde(default)]
    pub id: Option<i64>,
    #[serde(default)]
    pub first_name: Option<String>,
    #[serde(default)]
    pub username: Option<String>,
}

/// An account ready to run: credential, label used in logs, 1-based position.
#[derive(Debug, Clone)]
pub struct Account {
    pub index: usize,
    pub label: String,
    pub credential: AccountCredential,
}

impl Account {
    pub fn new(index: usize, credential: AccountCredential) -> Self {
        let label = display_name_from_init_data(&credential.init_data)
            .unwrap_or_else(|| format!("account #{}", index));
        Self {
            index,
            label,
            credential,
        }
    }
}

/// Decodes the `user` parameter embedded in the init data and returns its
/// `first_name`.
pub fn display_name_from_init_data(init_data: &str) -> Option<String> {
    let raw_user = url::form_urlencoded::parse(init_data.as_bytes())
        .find(|(key, _)| key == "user")
        .map(|(_, value)| value.into_owned())?;
    let profile = parse_profile(&raw_user)?;
    profile
        .first_name
        .map(|name| name.trim().to_string())
        .filter(|name| !name.is_empty())
}

/// Some clients percent-encode the profile twice; one extra decode pass
/// recovers it.
fn parse_profile(raw_user: &str) -> Option<UserProfile> {
    if let Ok(profile) = serde_json::from_str(raw_user) {
        return Some(profile);
    }
    let decoded: String = url::form_urlencoded::parse(format!("v={}", raw_user).as_bytes())
        .next()
        .map(|(_, value)| value.into_owned())?;
    serde_json::from_str(&decoded).ok()
}

/// Zips credentials with proxies by position. Accounts past the end of the
/// proxy list run without a proxy.
pub fn pair_credentials(tokens: Vec<String>, proxies: Vec<String>) -> Vec<AccountCredential> {
    let mut proxies = proxies.into_iter();
    tokens
        .into_iter()
        .map(|token| AccountCredential::new(token, proxies.next()))
        .collect()
}

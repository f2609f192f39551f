use crate::error::{AppError, AppResult};
use crate::models::account::pair_credentials;
use crate::models::{Account, InputConfig};
use std::fs;
use std::path::Path;

/// Trimmed, non-blank lines of a list file.
pub fn read_file_lines(path: &Path) -> AppResult<Vec<String>> {
    let content = fs::read_to_string(path)?;
    Ok(content
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .map(str::to_string)
        .collect())
}

/// Loads credentials and pairs them with proxies by line position.
/// The credential file is required; the proxy file is optional.
pub fn load_accounts(input: &InputConfig) -> AppResult<Vec<Account>> {
    let data_path = Path::new(&input.data_file);
    let tokens = read_file_lines(data_path).map_err(|e| {
        AppError::Config(format!(
            "failed_to_read_credentials {}: {}",
            data_path.display(),
            e
        ))
    })?;

    let proxy_path = Path::new(&input.proxy_file);
    let proxies = if proxy_path.exists() {
        read_file_lines(proxy_path)?
    } else {
        tracing::warn!(
            "Proxy list {} not found, all accounts will connect directly",
            proxy_path.display()
        );
        Vec::new()
    };

    if proxies.len() > tokens.len() {
        tracing::debug!(
            "Ignoring {} extra proxy line(s)",
            proxies.len() - tokens.len()
        );
    }

    let accounts: Vec<Account> = pair_credentials(tokens, proxies)
        .into_iter()
        .enumerate()
        .map(|(i, credential)| Account::new(i + 1, credential))
        .collect();

    tracing::info!(
        "Loaded {} account(s), {} with proxy",
        accounts.len(),
        accounts
            .iter()
            .filter(|a| a.credential.proxy.is_some())
            .count()
    );
    Ok(accounts)
}

/// Persistence for the bearer token handed out by `/userlogin`.
///
/// Implementations log storage failures instead of returning them: a store
/// that cannot be read behaves like a store without a token, which sends the
/// user back to login.
pub trait TokenStore {
    fn get(&self) -> Option<String>;
    fn set(&self, token: &str);
    fn clear(&self);
}

/// Logs a failed backend write. `None` means the backend itself is missing.
/// Returns whether the write went through.
pub fn check_write<E>(outcome: Option<Result<(), E>>, action: &str) -> bool {
    match outcome {
        Some(Ok(())) => true,
        Some(Err(_)) => {
            tracing::warn!("token storage rejected {action}");
            false
        }
        None => {
            tracing::warn!("token storage unavailable; skipped {action}");
            false
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn failed_writes_are_reported() {
        assert!(check_write::<()>(Some(Ok(())), "the token write"));
        assert!(!check_write(Some(Err("quota")), "removing the token"));
        assert!(!check_write::<()>(None, "removing the token"));
    }
}

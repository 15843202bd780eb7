use aws_config::{BehaviorVersion, SdkConfig};
use aws_credential_types::Credentials;
use aws_types::region::Region;
use tracing::debug;

/// Credentials for one fetch invocation.
///
/// Supplied by the caller at request time and discarded with the
/// invocation; nothing here is cached or persisted.
#[derive(Clone, Default)]
pub struct SessionCredentials {
    pub access_key_id: String,
    pub secret_access_key: String,
    pub session_token: Option<String>,
    pub region: String,
}

impl SessionCredentials {
    /// Create AWS SDK credentials from this bundle.
    pub fn to_aws_credentials(&self) -> Credentials {
        Credentials::from_keys(
            &self.access_key_id,
            &self.secret_access_key,
            self.session_token.clone(),
        )
    }

    /// Build the SDK config all service clients for this invocation share.
    pub async fn create_sdk_config(&self) -> SdkConfig {
        let config = aws_config::defaults(BehaviorVersion::latest())
            .region(Region::new(self.region.clone()))
            .credentials_provider(self.to_aws_credentials())
            .load()
            .await;

        debug!("Created AWS config for region: {}", self.region);
        config
    }
}

impl std::fmt::Debug for SessionCredentials {
    // Secret key and session token stay out of logs.
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SessionCredentials")
            .field("access_key_id", &self.access_key_id)
            .field("region", &self.region)
            .finish_non_exhaustive()
    }
}

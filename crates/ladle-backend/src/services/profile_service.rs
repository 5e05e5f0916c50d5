//! Profile lookups and writes for the sign-up flow.

use ladle_bridge::profile::{Profile, ProfileUpsert};
use ladle_client::{BackendClient, ClientError, Query};

const PROFILE_TABLE: &str = "profile";

/// Whether a profile already claims this username. Checked before sign-up so
/// the auth account is never created for a name that cannot be stored.
pub async fn username_taken(
    client: &BackendClient,
    username: &str,
) -> Result<bool, ClientError> {
    let rows: Vec<Profile> = client
        .select(
            PROFILE_TABLE,
            Query::new().select("id").eq("username", username).limit(1),
            None,
        )
        .await?;
    Ok(!rows.is_empty())
}

/// Stores (or refreshes) the profile row for a newly registered user.
pub async fn upsert_profile(
    client: &BackendClient,
    user_id: &str,
    username: &str,
    fullname: &str,
) -> Result<(), ClientError> {
    let row = ProfileUpsert {
        id: user_id.to_owned(),
        username: username.to_owned(),
        fullname: fullname.to_owned(),
    };
    client.upsert(PROFILE_TABLE, &row, None).await
}

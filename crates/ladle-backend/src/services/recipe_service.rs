//! Recipe read and write handlers against the data API.

use ladle_bridge::{
    MessageFromBackend,
    notification::ToastMessage,
    recipe::{Recipe, RecipeFilter, RecipePayload, RecipeSummary},
};
use ladle_client::{ClientError, Query};
use serde::Deserialize;

use super::AppContextHandle;

const RECIPE_TABLE: &str = "recipe";
const SUMMARY_COLUMNS: &str = "id,title,category,image_url,user_id,created_at";

const OWNERSHIP_DENIED: &str = "Recipe not found or you don't have permission to edit it";

/// The minimal projection used by the pre-write ownership check.
#[derive(Debug, Deserialize)]
#[allow(dead_code)]
struct OwnershipRow {
    id: String,
    user_id: Option<String>,
}

/// Decides whether an update may proceed from the ownership pre-check
/// result. `NotFound` covers both a missing row and a row owned by somebody
/// else, since the lookup is scoped by record id and user id together; any
/// other failure is surfaced verbatim. A returned message means the write
/// must not be attempted.
fn ownership_denial(check: Result<OwnershipRow, ClientError>) -> Option<String> {
    match check {
        Ok(_) => None,
        Err(ClientError::NotFound) => Some(OWNERSHIP_DENIED.to_owned()),
        Err(error) => Some(error.to_string()),
    }
}

/// Handles a dashboard list request, pushing the active filters down into
/// the query. The mine-only filter requires a signed-in user.
pub async fn handle_list_request(context: AppContextHandle, filter: RecipeFilter) {
    let (client, access_token, user_id, page_size) = {
        let state = context.state.read().await;
        (
            state.client.clone(),
            state.access_token().map(str::to_owned),
            state.user_id().map(str::to_owned),
            state.config.dashboard.page_size,
        )
    };

    let mut query = Query::new().select(SUMMARY_COLUMNS);
    if let Some(category) = filter.category {
        query = query.eq("category", category.label());
    }
    let search = filter.search.trim();
    if !search.is_empty() {
        query = query.ilike("title", format!("%{search}%"));
    }
    if filter.mine_only {
        let Some(user_id) = user_id else {
            context.send(MessageFromBackend::AuthRequired).await;
            return;
        };
        query = query.eq("user_id", user_id);
    }
    query = query.order_desc("created_at").limit(page_size);

    let result: Result<Vec<RecipeSummary>, ClientError> = client
        .select(RECIPE_TABLE, query, access_token.as_deref())
        .await;
    if let Err(error) = &result {
        log::warn!("Recipe list request failed: {error}");
    }
    context
        .send(MessageFromBackend::RecipeListResponse(
            result.map_err(|error| error.to_string()),
        ))
        .await;
}

/// Handles a single-recipe fetch for the detail and edit views.
pub async fn handle_fetch_request(context: AppContextHandle, id: String) {
    let (client, access_token) = {
        let state = context.state.read().await;
        (
            state.client.clone(),
            state.access_token().map(str::to_owned),
        )
    };

    let result: Result<Recipe, ClientError> = client
        .select_single(
            RECIPE_TABLE,
            Query::new().eq("id", &id),
            access_token.as_deref(),
        )
        .await;
    if let Err(error) = &result {
        log::warn!("Recipe fetch for {id} failed: {error}");
    }
    context
        .send(MessageFromBackend::RecipeResponse(
            result.map_err(|error| error.to_string()),
        ))
        .await;
}

/// Handles a create request. The signed-in user becomes the owner; without a
/// session the request is refused before any network call.
pub async fn handle_create_request(context: AppContextHandle, mut payload: RecipePayload) {
    let (client, access_token, user_id) = {
        let state = context.state.read().await;
        (
            state.client.clone(),
            state.access_token().map(str::to_owned),
            state.user_id().map(str::to_owned),
        )
    };

    let Some(user_id) = user_id else {
        context.send(MessageFromBackend::AuthRequired).await;
        context
            .send_toast(ToastMessage::warning("You must be logged in to add a recipe"))
            .await;
        return;
    };
    payload.user_id = Some(user_id);

    match client
        .insert::<Recipe, _>(RECIPE_TABLE, &payload, access_token.as_deref())
        .await
    {
        Ok(recipe) => {
            context
                .send(MessageFromBackend::RecipeSaved { id: recipe.id })
                .await;
            context
                .send_toast(ToastMessage::success("Recipe created"))
                .await;
        }
        Err(error) => {
            log::warn!("Recipe create failed: {error}");
            context
                .send(MessageFromBackend::RecipeSaveFailed(error.to_string()))
                .await;
        }
    }
}

/// Handles an update request. Ownership is verified up front so a row that
/// is missing (or owned by someone else) fails with a clear message instead
/// of a silent no-op, and the write itself stays scoped to the owner.
pub async fn handle_update_request(context: AppContextHandle, id: String, payload: RecipePayload) {
    let (client, access_token, user_id) = {
        let state = context.state.read().await;
        (
            state.client.clone(),
            state.access_token().map(str::to_owned),
            state.user_id().map(str::to_owned),
        )
    };

    let Some(user_id) = user_id else {
        context.send(MessageFromBackend::AuthRequired).await;
        return;
    };

    let owned: Result<OwnershipRow, ClientError> = client
        .select_single(
            RECIPE_TABLE,
            Query::new()
                .select("id,user_id")
                .eq("id", &id)
                .eq("user_id", &user_id),
            access_token.as_deref(),
        )
        .await;
    if let Err(error) = &owned {
        if !matches!(error, ClientError::NotFound) {
            log::warn!("Ownership check for {id} failed: {error}");
        }
    }
    if let Some(message) = ownership_denial(owned) {
        context
            .send(MessageFromBackend::RecipeSaveFailed(message))
            .await;
        return;
    }

    match client
        .update::<Recipe, _>(
            RECIPE_TABLE,
            Query::new().eq("id", &id).eq("user_id", &user_id),
            &payload,
            access_token.as_deref(),
        )
        .await
    {
        Ok(recipe) => {
            context
                .send(MessageFromBackend::RecipeSaved { id: recipe.id })
                .await;
            context
                .send_toast(ToastMessage::success("Recipe updated"))
                .await;
        }
        Err(error) => {
            log::warn!("Recipe update for {id} failed: {error}");
            context
                .send(MessageFromBackend::RecipeSaveFailed(error.to_string()))
                .await;
        }
    }
}

/// Handles a delete request, scoped to the signed-in owner.
pub async fn handle_delete_request(context: AppContextHandle, id: String) {
    let (client, access_token, user_id) = {
        let state = context.state.read().await;
        (
            state.client.clone(),
            state.access_token().map(str::to_owned),
            state.user_id().map(str::to_owned),
        )
    };

    let Some(user_id) = user_id else {
        context.send(MessageFromBackend::AuthRequired).await;
        return;
    };

    match client
        .delete(
            RECIPE_TABLE,
            Query::new().eq("id", &id).eq("user_id", &user_id),
            access_token.as_deref(),
        )
        .await
    {
        Ok(()) => {
            context.send(MessageFromBackend::RecipeDeleted { id }).await;
            context
                .send_toast(ToastMessage::success("Recipe deleted"))
                .await;
        }
        Err(error) => {
            log::warn!("Recipe delete for {id} failed: {error}");
            context
                .send_toast(ToastMessage::error("Failed to delete recipe").body(error.to_string()))
                .await;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ladle_client::ApiError;

    #[test]
    fn editing_a_foreign_or_missing_recipe_is_denied_before_any_write() {
        // the lookup is scoped by id AND user id, so somebody else's recipe
        // comes back as no row at all
        let denial = ownership_denial(Err(ClientError::NotFound));
        assert_eq!(denial.as_deref(), Some(OWNERSHIP_DENIED));
    }

    #[test]
    fn the_owner_passes_the_pre_check() {
        let row = OwnershipRow {
            id: "r1".to_owned(),
            user_id: Some("u1".to_owned()),
        };
        assert!(ownership_denial(Ok(row)).is_none());
    }

    #[test]
    fn unexpected_pre_check_failures_surface_verbatim() {
        let error = ClientError::Api(ApiError {
            message: Some("permission denied for table recipe".to_owned()),
            ..ApiError::default()
        });
        assert_eq!(
            ownership_denial(Err(error)).as_deref(),
            Some("permission denied for table recipe")
        );
    }
}

use actix_web::{web, HttpResponse};

use cb_core::repositories::{IdentityProvider, TokenRepository};

use crate::dto::user_dto::{SearchQuery, UserSummary};
use crate::handlers::error_handler::handle_domain_error;
use crate::middleware::auth::AuthContext;
use crate::state::AppState;

/// Ceiling for the search result count
const MAX_RESULTS: u32 = 10;

/// Handler for GET /api/v1/users/search?q=...&limit=...
///
/// Case-insensitive substring search over display names and emails.
pub async fn search<I, T>(
    state: web::Data<AppState<I, T>>,
    _auth: AuthContext,
    query: web::Query<SearchQuery>,
) -> HttpResponse
where
    I: IdentityProvider + 'static,
    T: TokenRepository + 'static,
{
    let limit = query.limit.unwrap_or(MAX_RESULTS).min(MAX_RESULTS);

    if query.q.trim().is_empty() {
        return HttpResponse::Ok().json(Vec::<UserSummary>::new());
    }

    match state.identities.search(query.q.trim(), limit).await {
        Ok(identities) => HttpResponse::Ok().json(
            identities
                .into_iter()
                .map(UserSummary::from)
                .collect::<Vec<_>>(),
        ),
        Err(error) => handle_domain_error(error),
    }
}

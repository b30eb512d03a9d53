//! Bearer-token middleware for protected routes.
//!
//! Extracts the JWT from the Authorization header, validates it against the
//! access-token codec, and injects an [`AuthContext`] into the request
//! extensions. Handlers pull the context back out with the `FromRequest`
//! extractor.

use std::future::{ready, Ready};
use std::rc::Rc;
use std::sync::Arc;
use std::task::{Context, Poll};

use actix_web::dev::{Service, ServiceRequest, ServiceResponse, Transform};
use actix_web::http::header::AUTHORIZATION;
use actix_web::{Error, FromRequest, HttpMessage, HttpRequest, HttpResponse};
use futures_util::future::LocalBoxFuture;

use cb_core::domain::entities::token::AccessClaims;
use cb_core::services::token::AccessTokenCodec;
use cb_shared::types::ErrorResponse;

/// Authenticated caller context injected into requests
#[derive(Debug, Clone)]
pub struct AuthContext {
    /// User id from the subject claim
    pub user_id: i64,
    /// Role labels from the scope claim
    pub scope: Vec<String>,
    /// Token identifier
    pub jti: String,
}

impl AuthContext {
    fn from_claims(claims: AccessClaims) -> Option<Self> {
        let user_id = claims.user_id().ok()?;
        Some(Self {
            user_id,
            scope: claims.scope,
            jti: claims.jti,
        })
    }
}

/// JWT authentication middleware factory
pub struct JwtAuth {
    codec: Arc<AccessTokenCodec>,
}

impl JwtAuth {
    pub fn new(codec: Arc<AccessTokenCodec>) -> Self {
        Self { codec }
    }
}

impl<S, B> Transform<S, ServiceRequest> for JwtAuth
where
    S: Service<ServiceRequest, Response = ServiceResponse<B>, Error = Error> + 'static,
    S::Future: 'static,
    B: 'static,
{
    type Response = ServiceResponse<B>;
    type Error = Error;
    type InitError = ();
    type Transform = JwtAuthMiddleware<S>;
    type Future = Ready<Result<Self::Transform, Self::InitError>>;

    fn new_transform(&self, service: S) -> Self::Future {
        ready(Ok(JwtAuthMiddleware {
            service: Rc::new(service),
            codec: self.codec.clone(),
        }))
    }
}

pub struct JwtAuthMiddleware<S> {
    service: Rc<S>,
    codec: Arc<AccessTokenCodec>,
}

impl<S, B> Service<ServiceRequest> for JwtAuthMiddleware<S>
where
    S: Service<ServiceRequest, Response = ServiceResponse<B>, Error = Error> + 'static,
    S::Future: 'static,
    B: 'static,
{
    type Response = ServiceResponse<B>;
    type Error = Error;
    type Future = LocalBoxFuture<'static, Result<Self::Response, Self::Error>>;

    fn poll_ready(&self, ctx: &mut Context<'_>) -> Poll<Result<(), Self::Error>> {
        self.service.poll_ready(ctx)
    }

    fn call(&self, req: ServiceRequest) -> Self::Future {
        let service = Rc::clone(&self.service);
        let codec = self.codec.clone();

        Box::pin(async move {
            let token = match extract_bearer_token(&req) {
                Some(token) => token,
                None => return Err(unauthorized("Missing or malformed Authorization header")),
            };

            let claims = match codec.validate(&token) {
                Ok(claims) => claims,
                Err(_) => return Err(unauthorized("Invalid or expired token")),
            };

            let context = match AuthContext::from_claims(claims) {
                Some(context) => context,
                None => return Err(unauthorized("Invalid or expired token")),
            };

            req.extensions_mut().insert(context);
            service.call(req).await
        })
    }
}

/// Extracts the token from `Authorization: Bearer <token>`.
///
/// The scheme comparison is case-insensitive per RFC 7235.
fn extract_bearer_token(req: &ServiceRequest) -> Option<String> {
    let header = req.headers().get(AUTHORIZATION)?.to_str().ok()?;
    let (scheme, rest) = header.split_once(' ')?;
    if !scheme.eq_ignore_ascii_case("bearer") {
        return None;
    }
    let token = rest.trim();
    if token.is_empty() {
        None
    } else {
        Some(token.to_string())
    }
}

fn unauthorized(message: &str) -> Error {
    let response =
        HttpResponse::Unauthorized().json(ErrorResponse::new("unauthorized", message));
    actix_web::error::InternalError::from_response(message.to_owned(), response).into()
}

impl FromRequest for AuthContext {
    type Error = Error;
    type Future = Ready<Result<Self, Self::Error>>;

    fn from_request(req: &HttpRequest, _: &mut actix_web::dev::Payload) -> Self::Future {
        let result = req
            .extensions()
            .get::<AuthContext>()
            .cloned()
            .ok_or_else(|| unauthorized("Authentication required"));

        ready(result)
    }
}

use actix_web::{
    dev::{forward_ready, Service, ServiceRequest, ServiceResponse, Transform},
    Error, HttpMessage, HttpRequest,
};
use futures_util::future::LocalBoxFuture;
use sha2::{Digest, Sha256};
use std::future::{ready, Ready};
use std::rc::Rc;
use std::sync::Arc;

use crate::core::AppError;
use crate::modules::users::models::Role;
use crate::modules::users::repositories::UserRepository;

/// Identity resolved for the current request
#[derive(Debug, Clone)]
pub struct AuthUser {
    pub id: String,
    pub role: Role,
}

/// Digest a session token for storage/lookup; raw tokens never touch the
/// database.
pub fn hash_session_token(token: &str) -> String {
    let mut hasher = Sha256::new();
    hasher.update(token.as_bytes());
    hex::encode(hasher.finalize())
}

/// Session authentication middleware.
///
/// Sessions are issued by the external identity provider; this service
/// only resolves the bearer token to a user row and stores the identity
/// in request extensions for handlers to read.
pub struct SessionAuth {
    users: Arc<dyn UserRepository>,
}

impl SessionAuth {
    pub fn new(users: Arc<dyn UserRepository>) -> Self {
        Self { users }
    }
}

impl<S, B> Transform<S, ServiceRequest> for SessionAuth
where
    S: Service<ServiceRequest, Response = ServiceResponse<B>, Error = Error> + 'static,
    S::Future: 'static,
    B: 'static,
{
    type Response = ServiceResponse<B>;
    type Error = Error;
    type InitError = ();
    type Transform = SessionAuthMiddleware<S>;
    type Future = Ready<std::result::Result<Self::Transform, Self::InitError>>;

    fn new_transform(&self, service: S) -> Self::Future {
        ready(Ok(SessionAuthMiddleware {
            service: Rc::new(service),
            users: self.users.clone(),
        }))
    }
}

pub struct SessionAuthMiddleware<S> {
    service: Rc<S>,
    users: Arc<dyn UserRepository>,
}

impl<S, B> Service<ServiceRequest> for SessionAuthMiddleware<S>
where
    S: Service<ServiceRequest, Response = ServiceResponse<B>, Error = Error> + 'static,
    S::Future: 'static,
    B: 'static,
{
    type Response = ServiceResponse<B>;
    type Error = Error;
    type Future = LocalBoxFuture<'static, std::result::Result<Self::Response, Self::Error>>;

    forward_ready!(service);

    fn call(&self, req: ServiceRequest) -> Self::Future {
        let svc = self.service.clone();
        let users = self.users.clone();

        Box::pin(async move {
            // health check and index stay public
            let path = req.path();
            if path == "/health" || path == "/" {
                return svc.call(req).await;
            }

            let token = req
                .headers()
                .get("Authorization")
                .and_then(|h| h.to_str().ok())
                .and_then(|h| h.strip_prefix("Bearer "))
                .ok_or_else(|| Error::from(AppError::unauthorized("Missing bearer token")))?;

            let digest = hash_session_token(token);
            let user = users
                .find_by_session_digest(&digest)
                .await
                .map_err(Error::from)?
                .ok_or_else(|| Error::from(AppError::unauthorized("Invalid or expired session")))?;

            req.extensions_mut().insert(AuthUser {
                id: user.id,
                role: user.role,
            });

            svc.call(req).await
        })
    }
}

/// The session identity, for any authenticated route
pub fn require_user(req: &HttpRequest) -> crate::core::Result<AuthUser> {
    req.extensions()
        .get::<AuthUser>()
        .cloned()
        .ok_or_else(|| AppError::unauthorized("Authentication required"))
}

/// The session identity, provided it may edit (admin role)
pub fn require_editor(req: &HttpRequest) -> crate::core::Result<AuthUser> {
    let auth = require_user(req)?;
    if !auth.role.can_edit() {
        return Err(AppError::forbidden("Administrator role required"));
    }
    Ok(auth)
}

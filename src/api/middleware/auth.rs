use actix_web::{
    body::MessageBody,
    dev::{Service, ServiceRequest, ServiceResponse, Transform},
    Error,
};
use futures::future::{ready, LocalBoxFuture, Ready};
use log::warn;
use std::{
    rc::Rc,
    sync::Arc,
    task::{Context, Poll},
};

use crate::{
    constants::MARKETPLACE_RESOURCE,
    models::ApiError,
    utils::{extract_bearer_token, Authorizer},
};

/// Middleware that authorizes every request of the scope it wraps before the
/// handler runs. Rejected requests terminate with 401 and never reach the
/// handler, so no outbound call is made for them.
pub struct AuthMiddleware {
    authorizer: Arc<dyn Authorizer>,
}

impl AuthMiddleware {
    pub fn new(authorizer: Arc<dyn Authorizer>) -> Self {
        Self { authorizer }
    }
}

impl<S, B> Transform<S, ServiceRequest> for AuthMiddleware
where
    S: Service<ServiceRequest, Response = ServiceResponse<B>, Error = Error> + 'static,
    S::Future: 'static,
    B: MessageBody + 'static,
{
    type Response = ServiceResponse<B>;
    type Error = Error;
    type Transform = AuthMiddlewareService<S>;
    type InitError = ();
    type Future = Ready<Result<Self::Transform, Self::InitError>>;

    fn new_transform(&self, service: S) -> Self::Future {
        ready(Ok(AuthMiddlewareService {
            service: Rc::new(service),
            authorizer: Arc::clone(&self.authorizer),
        }))
    }
}

pub struct AuthMiddlewareService<S> {
    service: Rc<S>,
    authorizer: Arc<dyn Authorizer>,
}

impl<S, B> Service<ServiceRequest> for AuthMiddlewareService<S>
where
    S: Service<ServiceRequest, Response = ServiceResponse<B>, Error = Error> + 'static,
    S::Future: 'static,
    B: MessageBody + 'static,
{
    type Response = ServiceResponse<B>;
    type Error = Error;
    type Future = LocalBoxFuture<'static, Result<Self::Response, Self::Error>>;

    fn poll_ready(&self, cx: &mut Context<'_>) -> Poll<Result<(), Self::Error>> {
        self.service.poll_ready(cx)
    }

    fn call(&self, req: ServiceRequest) -> Self::Future {
        let service = Rc::clone(&self.service);
        let authorizer = Arc::clone(&self.authorizer);

        Box::pin(async move {
            let authorized = {
                let credential = extract_bearer_token(&req);
                authorizer.authorize(
                    credential,
                    MARKETPLACE_RESOURCE,
                    req.method().as_str(),
                    &[],
                )
            };

            if !authorized {
                warn!("Authorization failed: {} {}", req.method(), req.path());
                return Err(ApiError::Unauthorized.into());
            }

            service.call(req).await
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::utils::TokenAuthorizer;
    use actix_web::{http::StatusCode, test, web, App, HttpResponse};

    fn middleware(api_key: &str) -> AuthMiddleware {
        AuthMiddleware::new(Arc::new(TokenAuthorizer::new(api_key)))
    }

    #[actix_web::test]
    async fn test_authorized_request_reaches_handler() {
        let app = test::init_service(App::new().wrap(middleware("test-key")).route(
            "/guarded",
            web::get().to(|| async { HttpResponse::Ok().body("OK") }),
        ))
        .await;

        let req = test::TestRequest::get()
            .uri("/guarded")
            .insert_header(("Authorization", "Bearer test-key"))
            .to_request();
        let resp = test::call_service(&app, req).await;

        assert!(resp.status().is_success());
    }

    #[actix_web::test]
    async fn test_missing_credential_is_rejected_with_401() {
        let app = test::init_service(App::new().wrap(middleware("test-key")).route(
            "/guarded",
            web::get().to(|| async { HttpResponse::Ok().body("OK") }),
        ))
        .await;

        let req = test::TestRequest::get().uri("/guarded").to_request();
        let result = test::try_call_service(&app, req).await;

        let err = result.unwrap_err();
        assert_eq!(
            err.as_response_error().status_code(),
            StatusCode::UNAUTHORIZED
        );
        assert_eq!(err.to_string(), "Authorization failed.");
    }

    #[actix_web::test]
    async fn test_wrong_token_is_rejected_with_401() {
        let app = test::init_service(App::new().wrap(middleware("test-key")).route(
            "/guarded",
            web::get().to(|| async { HttpResponse::Ok().body("OK") }),
        ))
        .await;

        let req = test::TestRequest::get()
            .uri("/guarded")
            .insert_header(("Authorization", "Bearer wrong-key"))
            .to_request();
        let result = test::try_call_service(&app, req).await;

        let err = result.unwrap_err();
        assert_eq!(
            err.as_response_error().status_code(),
            StatusCode::UNAUTHORIZED
        );
    }
}

use std::future::{ready, Ready};

use actix_web::{http::header::AUTHORIZATION, web, FromRequest, HttpRequest};

use crate::{auth::Claims, auth::JwtService, errors::AppError};

/// Extractor for the authenticated caller. Validates the bearer token
/// against the `JwtService` registered as app data.
pub struct AuthenticatedUser(pub Claims);

impl FromRequest for AuthenticatedUser {
    type Error = AppError;
    type Future = Ready<Result<Self, Self::Error>>;

    fn from_request(req: &HttpRequest, _payload: &mut actix_web::dev::Payload) -> Self::Future {
        ready(authenticate(req).map(AuthenticatedUser))
    }
}

fn authenticate(req: &HttpRequest) -> Result<Claims, AppError> {
    let jwt_service = req
        .app_data::<web::Data<JwtService>>()
        .ok_or_else(|| AppError::InternalError("JWT service not configured".to_string()))?;

    let auth_header = req
        .headers()
        .get(AUTHORIZATION)
        .and_then(|h| h.to_str().ok())
        .ok_or_else(|| AppError::Unauthorized("Missing authorization header".to_string()))?;

    let token = auth_header
        .strip_prefix("Bearer ")
        .ok_or_else(|| AppError::Unauthorized("Invalid authorization header format".to_string()))?;

    jwt_service.validate_token(token)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::Config;
    use actix_web::test::TestRequest;

    fn jwt_service() -> JwtService {
        JwtService::new(&Config::test_config().jwt_secret, 1)
    }

    #[actix_web::test]
    async fn missing_header_is_unauthorized() {
        let req = TestRequest::default()
            .app_data(web::Data::new(jwt_service()))
            .to_http_request();

        let result = authenticate(&req);
        assert!(matches!(result, Err(AppError::Unauthorized(_))));
    }

    #[actix_web::test]
    async fn non_bearer_header_is_unauthorized() {
        let req = TestRequest::default()
            .app_data(web::Data::new(jwt_service()))
            .insert_header((AUTHORIZATION, "Basic dXNlcjpwYXNz"))
            .to_http_request();

        let result = authenticate(&req);
        assert!(matches!(result, Err(AppError::Unauthorized(_))));
    }

    #[actix_web::test]
    async fn valid_token_yields_claims() {
        let service = jwt_service();
        let token = service.create_token("user-7", "grace@example.com").unwrap();

        let req = TestRequest::default()
            .app_data(web::Data::new(service))
            .insert_header((AUTHORIZATION, format!("Bearer {}", token)))
            .to_http_request();

        let claims = authenticate(&req).unwrap();
        assert_eq!(claims.sub, "user-7");
    }
}

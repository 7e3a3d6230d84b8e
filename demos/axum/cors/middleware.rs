use axum::{
    body::Body,
    extract::{Request, State},
    http::{HeaderMap, HeaderName, HeaderValue, StatusCode},
    middleware::Next,
    response::Response,
};
use cors_filter_rs::{CorsDecision, Headers, RequestContext, constants::header};

use super::AppState;

pub async fn cors_middleware(
    State(state): State<AppState>,
    request: Request,
    next: Next,
) -> Response {
    let (decision, headers) = state.cors.check(&request_context(&request));

    match decision {
        CorsDecision::Terminate(status) => {
            let mut response = Response::new(Body::empty());
            *response.status_mut() = StatusCode::from_u16(status).unwrap_or(StatusCode::OK);
            apply_headers(response.headers_mut(), &headers);
            response
        }
        CorsDecision::Continue => {
            let mut response = next.run(request).await;
            apply_headers(response.headers_mut(), &headers);
            response
        }
    }
}

fn request_context(request: &Request) -> RequestContext<'_> {
    let headers = request.headers();

    RequestContext {
        method: request.method().as_str(),
        origin: header_value(headers, header::ORIGIN),
        access_control_request_method: header_value(
            headers,
            header::ACCESS_CONTROL_REQUEST_METHOD,
        ),
        access_control_request_headers: header_value(
            headers,
            header::ACCESS_CONTROL_REQUEST_HEADERS,
        ),
    }
}

fn apply_headers(map: &mut HeaderMap, headers: &Headers) {
    for (name, value) in headers.iter() {
        if let (Ok(header_name), Ok(header_value)) = (
            HeaderName::try_from(name.as_str()),
            HeaderValue::from_str(value),
        ) {
            map.insert(header_name, header_value);
        }
    }
}

fn header_value<'a>(headers: &'a HeaderMap, name: &str) -> Option<&'a str> {
    headers.get(name).and_then(|value| value.to_str().ok())
}

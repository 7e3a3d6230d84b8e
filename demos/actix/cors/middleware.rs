use std::future::{Ready, ready};
use std::pin::Pin;
use std::task::{Context, Poll};

use actix_web::body::{EitherBody, MessageBody};
use actix_web::dev::{Service, ServiceRequest, ServiceResponse, Transform};
use actix_web::http::{
    StatusCode,
    header::{HeaderMap, HeaderName, HeaderValue},
};
use actix_web::{Error, HttpRequest, HttpResponse};
use cors_filter_rs::{CorsDecision, Headers, RequestContext, constants::header};

use super::SharedCors;

type LocalBoxFuture<'a, T> = Pin<Box<dyn std::future::Future<Output = T> + 'a>>;

pub struct CorsFilter {
    cors: SharedCors,
}

impl CorsFilter {
    pub fn new(cors: SharedCors) -> Self {
        Self { cors }
    }
}

impl<S, B> Transform<S, ServiceRequest> for CorsFilter
where
    S: Service<ServiceRequest, Response = ServiceResponse<B>, Error = Error> + 'static,
    B: MessageBody + 'static,
{
    type Response = ServiceResponse<EitherBody<B>>;
    type Error = Error;
    type Transform = CorsFilterMiddleware<S>;
    type InitError = ();
    type Future = Ready<Result<Self::Transform, Self::InitError>>;

    fn new_transform(&self, service: S) -> Self::Future {
        ready(Ok(CorsFilterMiddleware {
            service,
            cors: self.cors.clone(),
        }))
    }
}

pub struct CorsFilterMiddleware<S> {
    service: S,
    cors: SharedCors,
}

impl<S, B> Service<ServiceRequest> for CorsFilterMiddleware<S>
where
    S: Service<ServiceRequest, Response = ServiceResponse<B>, Error = Error> + 'static,
    B: MessageBody + 'static,
{
    type Response = ServiceResponse<EitherBody<B>>;
    type Error = Error;
    type Future = LocalBoxFuture<'static, Result<Self::Response, Self::Error>>;

    fn poll_ready(&self, cx: &mut Context<'_>) -> Poll<Result<(), Self::Error>> {
        self.service.poll_ready(cx)
    }

    fn call(&self, req: ServiceRequest) -> Self::Future {
        let (decision, headers) = self.cors.check(&request_context(req.request()));

        match decision {
            CorsDecision::Terminate(status) => {
                Box::pin(async move { Ok(preflight_response(req, status, headers)) })
            }
            CorsDecision::Continue => {
                let fut = self.service.call(req);
                Box::pin(async move {
                    let mut res = fut.await?.map_into_left_body();
                    apply_headers(res.headers_mut(), &headers);
                    Ok(res)
                })
            }
        }
    }
}

fn preflight_response<B>(
    req: ServiceRequest,
    status: u16,
    headers: Headers,
) -> ServiceResponse<EitherBody<B>> {
    let status = StatusCode::from_u16(status).unwrap_or(StatusCode::OK);
    let mut response = HttpResponse::new(status);
    apply_headers(response.headers_mut(), &headers);
    req.into_response(response.map_into_right_body())
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

fn request_context(request: &HttpRequest) -> RequestContext<'_> {
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

fn header_value<'a>(headers: &'a HeaderMap, name: &str) -> Option<&'a str> {
    headers.get(name).and_then(|value| value.to_str().ok())
}

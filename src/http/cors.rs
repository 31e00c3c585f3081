use vercel_runtime::{Body, Request, Response, StatusCode};

pub const ALLOWED_METHODS: &str = "DELETE, GET, HEAD, OPTIONS, PATCH, POST, PUT";
const PREFLIGHT_MAX_AGE: &str = "600";

/// Origin allow-list. Listed origins may use every method and header;
/// everyone else gets no CORS headers at all.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CorsPolicy {
    origins: Vec<String>,
}

pub fn request_origin(req: &Request) -> Option<&str> {
    req.headers().get("origin").and_then(|h| h.to_str().ok())
}

fn set_header(resp: &mut Response<Body>, name: &'static str, value: &str) {
    if let Ok(value) = value.parse() {
        resp.headers_mut().insert(name, value);
    }
}

impl CorsPolicy {
    pub fn new(origins: Vec<String>) -> Self {
        Self { origins }
    }

    pub fn allows(&self, origin: &str) -> bool {
        self.origins.iter().any(|o| o == origin)
    }

    pub fn apply(&self, origin: Option<&str>, mut resp: Response<Body>) -> Response<Body> {
        let Some(origin) = origin.filter(|o| self.allows(o)) else {
            return resp;
        };
        set_header(&mut resp, "Access-Control-Allow-Origin", origin);
        set_header(&mut resp, "Access-Control-Allow-Credentials", "true");
        set_header(&mut resp, "Vary", "Origin");
        resp
    }

    /// Answers an `OPTIONS` preflight.
    pub fn preflight(&self, req: &Request) -> anyhow::Result<Response<Body>> {
        let origin = request_origin(req).filter(|o| self.allows(o));
        let Some(origin) = origin else {
            return Ok(Response::builder()
                .status(StatusCode::BAD_REQUEST)
                .header("Content-Type", "text/plain; charset=utf-8")
                .body("Disallowed CORS origin".to_string().into())?);
        };

        let mut builder = Response::builder()
            .status(StatusCode::OK)
            .header("Access-Control-Allow-Methods", ALLOWED_METHODS)
            .header("Access-Control-Max-Age", PREFLIGHT_MAX_AGE);
        if let Some(requested) = req
            .headers()
            .get("access-control-request-headers")
            .and_then(|h| h.to_str().ok())
        {
            builder = builder.header("Access-Control-Allow-Headers", requested);
        }
        let resp = builder.body(String::new().into())?;
        Ok(self.apply(Some(origin), resp))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn policy() -> CorsPolicy {
        CorsPolicy::new(vec!["http://localhost:3000".into(), "http://127.0.0.1:3000".into()])
    }

    fn options(origin: Option<&'static str>) -> Request {
        let mut req = Request::new(String::new().into());
        *req.method_mut() = "OPTIONS".parse().unwrap();
        if let Some(origin) = origin {
            req.headers_mut().insert("origin", origin.parse().unwrap());
        }
        req.headers_mut()
            .insert("access-control-request-headers", "content-type".parse().unwrap());
        req
    }

    fn header<'a>(resp: &'a Response<Body>, name: &str) -> Option<&'a str> {
        resp.headers().get(name).and_then(|v| v.to_str().ok())
    }

    #[test]
    fn allowed_origin_is_echoed() {
        let resp = Response::builder().status(StatusCode::OK).body(String::new().into()).unwrap();
        let resp = policy().apply(Some("http://localhost:3000"), resp);
        assert_eq!(header(&resp, "access-control-allow-origin"), Some("http://localhost:3000"));
        assert_eq!(header(&resp, "access-control-allow-credentials"), Some("true"));
    }

    #[test]
    fn unknown_origin_gets_no_headers() {
        let resp = Response::builder().status(StatusCode::OK).body(String::new().into()).unwrap();
        let resp = policy().apply(Some("https://evil.example"), resp);
        assert_eq!(header(&resp, "access-control-allow-origin"), None);
    }

    #[test]
    fn preflight_from_allowed_origin() {
        let resp = policy().preflight(&options(Some("http://127.0.0.1:3000"))).unwrap();
        assert_eq!(resp.status(), StatusCode::OK);
        assert_eq!(header(&resp, "access-control-allow-methods"), Some(ALLOWED_METHODS));
        assert_eq!(header(&resp, "access-control-allow-headers"), Some("content-type"));
        assert_eq!(header(&resp, "access-control-allow-origin"), Some("http://127.0.0.1:3000"));
    }

    #[test]
    fn preflight_from_other_origin_is_rejected() {
        let resp = policy().preflight(&options(Some("http://localhost:9999"))).unwrap();
        assert_eq!(resp.status(), StatusCode::BAD_REQUEST);

        let resp = policy().preflight(&options(None)).unwrap();
        assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
    }
}

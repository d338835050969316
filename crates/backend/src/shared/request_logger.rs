use axum::body::{Body, HttpBody};
use axum::http::Request;
use axum::middleware::Next;
use axum::response::Response;

/// Logs method, path, status, body size and latency of every request.
pub async fn request_logger(req: Request<Body>, next: Next) -> Response {
    let start = std::time::Instant::now();
    let method = req.method().clone();
    let path = req.uri().path().to_string();

    let response = next.run(req).await;

    let status = response.status().as_u16();
    let size = response
        .body()
        .size_hint()
        .exact()
        .map(format_number)
        .unwrap_or_else(|| "stream".to_string());
    let elapsed = start.elapsed().as_millis();

    if response.status().is_success() || response.status().is_redirection() {
        tracing::info!("{:>5}ms | {:>10} | {} {:>6} {}", elapsed, size, status, method, path);
    } else {
        tracing::warn!("{:>5}ms | {:>10} | {} {:>6} {}", elapsed, size, status, method, path);
    }

    response
}

/// Thousands separated with dots: `1234567` -> `"1.234.567"`.
pub fn format_number(n: u64) -> String {
    let s = n.to_string();
    let mut result = String::new();
    for (i, ch) in s.chars().rev().enumerate() {
        if i > 0 && i % 3 == 0 {
            result.push('.');
        }
        result.push(ch);
    }
    result.chars().rev().collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_number() {
        assert_eq!(format_number(0), "0");
        assert_eq!(format_number(999), "999");
        assert_eq!(format_number(1_000), "1.000");
        assert_eq!(format_number(1_234_567), "1.234.567");
    }
}

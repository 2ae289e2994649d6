//! HTTP span helpers.

use uuid::Uuid;

/// Collapse UUID path segments so metrics and span names stay low-cardinality.
pub(super) fn route_label(path: &str) -> String {
    if path == "/" {
        return "/".to_owned();
    }

    let segments: Vec<&str> = path
        .trim_start_matches('/')
        .split('/')
        .map(|segment| {
            if Uuid::parse_str(segment).is_ok() {
                "{uuid}"
            } else {
                segment
            }
        })
        .collect();

    format!("/{}", segments.join("/"))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn uuid_segments_are_collapsed() {
        assert_eq!(
            route_label("/products/0191d0a4-5b1c-7c3e-9f3a-1b2c3d4e5f60/stock_in"),
            "/products/{uuid}/stock_in"
        );
    }

    #[test]
    fn plain_paths_are_unchanged() {
        assert_eq!(route_label("/reports/daily_report"), "/reports/daily_report");
        assert_eq!(route_label("/"), "/");
    }
}

//! `sitemap.xml` and `robots.txt` built from the shared route table.

use contracts::site::routes::SiteRoute;

/// Escapes the characters that are not allowed verbatim in XML text.
fn xml_escape(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for ch in text.chars() {
        match ch {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&apos;"),
            _ => out.push(ch),
        }
    }
    out
}

pub fn render_sitemap(base_url: &str, routes: &[SiteRoute], lastmod: &str) -> String {
    let base = base_url.trim_end_matches('/');
    let mut xml = String::from(
        "<?xml version=\"1.0\" encoding=\"UTF-8\"?>\n<urlset xmlns=\"http://www.sitemaps.org/schemas/sitemap/0.9\">\n",
    );
    for route in routes {
        xml.push_str("  <url>\n");
        xml.push_str(&format!("    <loc>{}</loc>\n", xml_escape(&format!("{}{}", base, route.path))));
        xml.push_str(&format!("    <lastmod>{}</lastmod>\n", xml_escape(lastmod)));
        xml.push_str(&format!("    <priority>{:.1}</priority>\n", route.priority));
        xml.push_str("  </url>\n");
    }
    xml.push_str("</urlset>\n");
    xml
}

pub fn render_robots(base_url: &str) -> String {
    format!(
        "User-agent: *\nAllow: /\nSitemap: {}/sitemap.xml\n",
        base_url.trim_end_matches('/')
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use contracts::site::routes::SITE_ROUTES;

    #[test]
    fn test_sitemap_lists_every_route() {
        let xml = render_sitemap("https://example.org/", SITE_ROUTES, "2025-09-01");
        assert_eq!(xml.matches("<url>").count(), SITE_ROUTES.len());
        assert!(xml.contains("<loc>https://example.org/staff</loc>"));
        assert!(xml.contains("<loc>https://example.org/</loc>"));
        assert!(xml.contains("<priority>1.0</priority>"));
    }

    #[test]
    fn test_sitemap_escapes_base_url() {
        let xml = render_sitemap("https://example.org/?a=1&b=<2>", SITE_ROUTES, "2025-09-01");
        assert!(xml.contains("<loc>https://example.org/?a=1&amp;b=&lt;2&gt;/staff</loc>"));
        assert!(!xml.contains("&b="));
    }

    #[test]
    fn test_robots_points_to_sitemap() {
        assert_eq!(
            render_robots("https://example.org"),
            "User-agent: *\nAllow: /\nSitemap: https://example.org/sitemap.xml\n"
        );
    }
}

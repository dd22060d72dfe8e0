//! Server-rendered HTML for the page shells.
//!
//! Every value that comes from the request or the catalog goes through
//! [`escape`] before it is written into markup.

use storefront_catalog::{BrandWithProductCount, Category, Product, ProductSearchHit};
use storefront_legal::{LegalPageContent, LegalPageType};

pub const CONTENT_TYPE: &str = "text/html; charset=utf-8";

/// Markup of the search loading state, sent before any result is known.
pub const SEARCH_LOADING: &str =
    r#"<div id="search-loading" class="loading" aria-busy="true">Buscando...</div>"#;

pub fn escape(raw: &str) -> String {
    let mut out = String::with_capacity(raw.len());
    for c in raw.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            c => out.push(c),
        }
    }
    out
}

/// Document head and the opening of `<main>`; pair with [`page_close`].
pub fn page_open(title: &str) -> String {
    format!(
        "<!DOCTYPE html>\n<html lang=\"es\">\n<head>\n<meta charset=\"utf-8\">\n<title>{}</title>\n</head>\n<body>\n<main>\n",
        escape(title)
    )
}

pub fn page_close() -> &'static str {
    "</main>\n</body>\n</html>\n"
}

pub fn page(title: &str, body: &str) -> String {
    let mut out = page_open(title);
    out.push_str(body);
    out.push_str(page_close());
    out
}

pub fn laptop_page(slug: &str, product: Option<&Product>) -> String {
    let mut body = format!(
        "<article class=\"laptop\" data-slug=\"{0}\">\n<h1>Laptop: {0}</h1>\n",
        escape(slug)
    );
    if let Some(product) = product {
        body.push_str(&format!(
            "<p class=\"product-name\">{}</p>\n",
            escape(&product.name)
        ));
        if let Some(cents) = product.price_cents {
            body.push_str(&format!("<p class=\"price\">{}</p>\n", format_price(cents)));
        }
    }
    body.push_str("</article>\n");
    page(&format!("Laptop {slug}"), &body)
}

pub fn category_page(
    slug: &str,
    category: Option<&Category>,
    brands: &[BrandWithProductCount],
) -> String {
    let mut body = format!(
        "<section class=\"category\" data-slug=\"{0}\">\n<h1>Categoría: {0}</h1>\n",
        escape(slug)
    );
    if let Some(category) = category {
        body.push_str(&format!(
            "<p class=\"category-name\">{}</p>\n",
            escape(&category.name)
        ));
    }

    if brands.is_empty() {
        body.push_str("<p class=\"empty\">No hay marcas en esta categoría.</p>\n");
    } else {
        body.push_str("<ul class=\"brands\">\n");
        for brand in brands {
            body.push_str(&format!(
                "<li data-brand=\"{}\">{} <span class=\"count\">({})</span></li>\n",
                escape(brand.slug.as_str()),
                escape(&brand.name),
                brand.product_count
            ));
        }
        body.push_str("</ul>\n");
    }
    body.push_str("</section>\n");
    page(&format!("Categoría {slug}"), &body)
}

/// First chunk of the search page: heading plus the loading state.
pub fn search_head(term: &str) -> String {
    let mut out = page_open("Buscar");
    out.push_str(&format!(
        "<h1>Resultados para \"{}\"</h1>\n{}\n",
        escape(term),
        SEARCH_LOADING
    ));
    out
}

/// Last chunk of the search page: the results fragment and the closing tags.
pub fn search_results(hits: &[ProductSearchHit]) -> String {
    let mut out = String::from("<section id=\"search-results\">\n");
    if hits.is_empty() {
        out.push_str("<p class=\"empty\">Sin resultados.</p>\n");
    } else {
        out.push_str("<ul>\n");
        for hit in hits {
            out.push_str(&format!(
                "<li><a href=\"/laptops/{}\">{}</a>",
                escape(hit.slug.as_str()),
                escape(&hit.name)
            ));
            if let Some(brand) = &hit.brand_name {
                out.push_str(&format!(" <span class=\"brand\">{}</span>", escape(brand)));
            }
            out.push_str(&format!(
                " <a class=\"category\" href=\"/categorias/{0}\">{0}</a></li>\n",
                escape(hit.category_slug.as_str())
            ));
        }
        out.push_str("</ul>\n");
    }
    out.push_str("</section>\n");
    out.push_str(page_close());
    out
}

/// Last chunk of the search page when the loader failed after streaming began.
pub fn search_failed() -> String {
    let mut out = String::from(
        "<section id=\"search-results\">\n<p class=\"error\">No se pudo completar la búsqueda.</p>\n</section>\n",
    );
    out.push_str(page_close());
    out
}

pub fn legal_page(page_type: LegalPageType, content: &LegalPageContent) -> String {
    let updated = content
        .last_updated_date()
        .map(|d| d.format("%d/%m/%Y").to_string())
        .unwrap_or_else(|_| content.last_updated.to_string());
    let mut body = format!(
        "<article class=\"legal\" data-page=\"{}\">\n<h1>{}</h1>\n<p class=\"meta\">Versión {} · Última actualización: {}</p>\n",
        page_type,
        escape(page_type.title()),
        escape(content.version),
        escape(&updated)
    );
    for section in content.sections {
        body.push_str(&format!(
            "<section id=\"{}\">\n<h2>{}</h2>\n<p>{}</p>\n</section>\n",
            escape(section.id),
            escape(section.title),
            escape(section.content)
        ));
    }
    body.push_str("</article>\n<nav class=\"legal-links\">\n");
    for other in LegalPageType::ALL {
        if other != page_type {
            body.push_str(&format!(
                "<a href=\"/legal/{}\">{}</a>\n",
                other,
                escape(other.title())
            ));
        }
    }
    body.push_str("</nav>\n");
    page(page_type.title(), &body)
}

fn format_price(cents: u64) -> String {
    format!("{}.{:02} €", cents / 100, cents % 100)
}

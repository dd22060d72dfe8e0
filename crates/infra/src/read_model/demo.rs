//! Demo laptop catalog used by the in-memory backend in dev and tests.

use uuid::Uuid;

use storefront_catalog::{Brand, CatalogSnapshot, Category, Product};
use storefront_core::{BrandId, CategoryId, DomainError, DomainResult, ProductId, Slug};

const CATEGORIES: &[(u128, &str, &str)] = &[
    (0x0100, "ultrabooks", "Ultrabooks"),
    (0x0101, "gaming", "Gaming"),
    (0x0102, "workstations", "Workstations"),
    (0x0103, "convertibles", "Convertibles 2 en 1"),
    (0x0104, "reacondicionados", "Reacondicionados"),
    // Deliberately empty: never shows up in category counts.
    (0x0105, "accesorios", "Accesorios"),
];

const BRANDS: &[(u128, &str, &str)] = &[
    (0x0200, "lenovo", "Lenovo"),
    (0x0201, "asus", "ASUS"),
    (0x0202, "dell", "Dell"),
    (0x0203, "hp", "HP"),
    (0x0204, "apple", "Apple"),
    (0x0205, "acer", "Acer"),
];

/// (id, slug, name, category slug, brand slug, price in cents)
const PRODUCTS: &[(u128, &str, &str, &str, Option<&str>, Option<u64>)] = &[
    (0x0300, "thinkpad-x1", "ThinkPad X1 Carbon Gen 11", "ultrabooks", Some("lenovo"), Some(189_900)),
    (0x0301, "yoga-slim-7", "Yoga Slim 7", "ultrabooks", Some("lenovo"), Some(109_900)),
    (0x0302, "zenbook-14", "Zenbook 14 OLED", "ultrabooks", Some("asus"), Some(99_900)),
    (0x0303, "xps-13", "XPS 13", "ultrabooks", Some("dell"), Some(129_900)),
    (0x0304, "macbook-air-m3", "MacBook Air M3", "ultrabooks", Some("apple"), Some(129_900)),
    (0x0305, "spectre-x360-14", "Spectre x360 14", "convertibles", Some("hp"), Some(149_900)),
    (0x0306, "yoga-7i", "Yoga 7i 2 en 1", "convertibles", Some("lenovo"), Some(89_900)),
    (0x0307, "rog-strix-g16", "ROG Strix G16", "gaming", Some("asus"), Some(179_900)),
    (0x0308, "legion-5", "Legion 5 Pro", "gaming", Some("lenovo"), Some(159_900)),
    (0x0309, "predator-helios-16", "Predator Helios 16", "gaming", Some("acer"), Some(169_900)),
    (0x030a, "tuf-gaming-a15", "TUF Gaming A15", "gaming", Some("asus"), Some(99_900)),
    (0x030b, "precision-5680", "Precision 5680", "workstations", Some("dell"), Some(349_900)),
    (0x030c, "zbook-firefly-16", "ZBook Firefly 16", "workstations", Some("hp"), Some(219_900)),
    (0x030d, "thinkpad-t14-reacondicionado", "ThinkPad T14 reacondicionado", "reacondicionados", Some("lenovo"), Some(49_900)),
    (0x030e, "lote-portatiles-oficina", "Lote portátiles de oficina", "reacondicionados", None, None),
];

/// Build the demo catalog.
pub fn demo_catalog() -> DomainResult<CatalogSnapshot> {
    let categories = CATEGORIES
        .iter()
        .map(|&(id, slug, name)| -> DomainResult<Category> {
            Ok(Category {
                id: CategoryId::from_uuid(Uuid::from_u128(id)),
                slug: Slug::parse(slug)?,
                name: name.to_string(),
            })
        })
        .collect::<DomainResult<Vec<_>>>()?;

    let brands = BRANDS
        .iter()
        .map(|&(id, slug, name)| -> DomainResult<Brand> {
            Ok(Brand {
                id: BrandId::from_uuid(Uuid::from_u128(id)),
                slug: Slug::parse(slug)?,
                name: name.to_string(),
            })
        })
        .collect::<DomainResult<Vec<_>>>()?;

    let products = PRODUCTS
        .iter()
        .map(|&(id, slug, name, category, brand, price_cents)| -> DomainResult<Product> {
            let category_id = categories
                .iter()
                .find(|c| c.slug.as_str() == category)
                .map(|c| c.id)
                .ok_or_else(|| DomainError::unknown_reference("category", category))?;
            let brand_id = match brand {
                Some(brand) => Some(
                    brands
                        .iter()
                        .find(|b| b.slug.as_str() == brand)
                        .map(|b| b.id)
                        .ok_or_else(|| DomainError::unknown_reference("brand", brand))?,
                ),
                None => None,
            };
            Ok(Product {
                id: ProductId::from_uuid(Uuid::from_u128(id)),
                slug: Slug::parse(slug)?,
                name: name.to_string(),
                category_id,
                brand_id,
                price_cents,
            })
        })
        .collect::<DomainResult<Vec<_>>>()?;

    Ok(CatalogSnapshot {
        categories,
        brands,
        products,
    })
}

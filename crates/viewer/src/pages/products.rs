use flipbook::content::{self, CATEGORIES};
use flipbook::links::{card_enquiry_text, quote_mailto, quote_request_text, whatsapp_link};
use flipbook::routes::Route;
use flipbook::seo::PageMeta;
use flipbook::types::{Icon, Product};
use yew::prelude::*;

use crate::shared::{navigate, use_page_meta, Section};

fn open_external(url: &str) {
    if let Some(window) = web_sys::window() {
        let _ = window.open_with_url_and_target(url, "_blank");
    }
}

fn go(route: Route) -> Callback<MouseEvent> {
    Callback::from(move |_: MouseEvent| navigate(&route))
}

// ─── Cards ──────────────────────────────────────────────────────────

#[derive(Properties, PartialEq)]
struct CategoryCardProps {
    title: AttrValue,
    #[prop_or_default]
    description: Option<AttrValue>,
    #[prop_or_default]
    image: Option<AttrValue>,
    #[prop_or_default]
    icon: Option<Icon>,
    onclick: Callback<MouseEvent>,
}

#[function_component(CategoryCard)]
fn category_card(props: &CategoryCardProps) -> Html {
    let placeholder = match props.icon {
        Some(icon) => html! { <span class="card-glyph">{icon.glyph()}</span> },
        None => html! { <span class="card-initial serif">{props.title.chars().next().map(String::from).unwrap_or_default()}</span> },
    };
    html! {
        <div class="category-card" onclick={props.onclick.clone()}>
            <div class="card-media">
                if let Some(image) = props.image.clone() {
                    <img src={image} alt={props.title.clone()} />
                } else {
                    {placeholder}
                }
                if let Some(icon) = props.icon {
                    <span class="card-badge">{icon.glyph()}</span>
                }
            </div>
            <div class="card-body">
                <div class="card-title-row">
                    <h3 class="serif">{props.title.clone()}</h3>
                    <span class="arrow">{"→"}</span>
                </div>
                if let Some(description) = props.description.clone() {
                    <p>{description}</p>
                }
            </div>
        </div>
    }
}

#[derive(Properties, PartialEq)]
pub struct ProductCardProps {
    pub product: &'static Product,
    pub onclick: Callback<MouseEvent>,
}

#[function_component(ProductCard)]
pub fn product_card(props: &ProductCardProps) -> Html {
    let product = props.product;
    let enquire = Callback::from(move |e: MouseEvent| {
        e.stop_propagation();
        open_external(&whatsapp_link(Some(&card_enquiry_text(product))));
    });
    html! {
        <div class="product-card" onclick={props.onclick.clone()}>
            <div class="card-media contain">
                <img src={product.image_url} alt={product.name} />
                <span class="sku-badge">{product.sku}</span>
            </div>
            <div class="card-body">
                <div class="eyebrow small">{product.category.replacen('-', " ", 1)}</div>
                <h3 class="serif">{product.name}</h3>
                <p class="clamp">{product.description}</p>
                <div class="mini-specs">
                    <div><span>{"Material:"}</span><span>{product.specifications.material}</span></div>
                    <div><span>{"Finish:"}</span><span>{product.specifications.finish}</span></div>
                </div>
                <button class="btn btn-primary wide small" onclick={enquire}>{"💬 Request Quote"}</button>
            </div>
        </div>
    }
}

// ─── Shared chrome ──────────────────────────────────────────────────

#[derive(Properties, PartialEq)]
struct CatalogHeaderProps {
    title: AttrValue,
    subtitle: AttrValue,
    #[prop_or_default]
    crumbs: Vec<(AttrValue, Option<Route>)>,
}

#[function_component(CatalogHeader)]
fn catalog_header(props: &CatalogHeaderProps) -> Html {
    html! {
        <div class="catalog-header">
            <div class="container">
                if !props.crumbs.is_empty() {
                    <div class="breadcrumbs">
                        { for props.crumbs.iter().enumerate().map(|(i, (label, route))| html! {
                            <>
                                if i > 0 { <span class="sep">{"›"}</span> }
                                if let Some(route) = route {
                                    <a href={route.to_hash()}>{label.clone()}</a>
                                } else {
                                    <span class="current">{label.clone()}</span>
                                }
                            </>
                        }) }
                    </div>
                }
                <h1 class="serif">{props.title.clone()}</h1>
                <p>{props.subtitle.clone()}</p>
            </div>
        </div>
    }
}

fn not_found(message: &'static str) -> Html {
    html! { <div class="not-found-inline">{message}</div> }
}

// ─── Pages ──────────────────────────────────────────────────────────

#[function_component(ProductsIndex)]
pub fn products_index() -> Html {
    use_page_meta(PageMeta::products_index());
    html! {
        <div class="page products">
            <CatalogHeader
                title="Product Categories"
                subtitle="Select a specialty to explore our precision instruments."
            />
            <Section class="white">
                <div class="container card-grid three">
                    { for CATEGORIES.iter().map(|c| html! {
                        <CategoryCard
                            key={c.slug}
                            title={c.name}
                            description={Some(AttrValue::from(c.description))}
                            image={Some(AttrValue::from(c.image))}
                            icon={Some(c.icon)}
                            onclick={go(Route::Category { category: c.slug.to_string() })}
                        />
                    }) }
                </div>
            </Section>
        </div>
    }
}

#[derive(Properties, PartialEq)]
pub struct CategoryViewProps {
    pub category: String,
}

#[function_component(CategoryView)]
pub fn category_view(props: &CategoryViewProps) -> Html {
    let category = content::category_by_slug(&props.category);
    use_page_meta(match category {
        Some(c) => PageMeta::category(c),
        None => PageMeta::not_found("Category not found"),
    });
    let Some(category) = category else {
        return not_found("Category not found");
    };
    let subs = category.subcategories;

    html! {
        <div class="page products">
            <CatalogHeader
                title={category.name}
                subtitle={category.description}
                crumbs={vec![
                    (AttrValue::from("Products"), Some(Route::Products)),
                    (AttrValue::from(category.name), None),
                ]}
            />
            <Section class="white">
                <div class="container">
                    if subs.is_empty() {
                        <div class="empty-state">
                            <h3 class="serif">{"No subcategories found"}</h3>
                            <p>{"Please check back later."}</p>
                        </div>
                    } else {
                        <div class="card-grid three">
                            { for subs.iter().map(|sub| {
                                let description = sub
                                    .description
                                    .map(AttrValue::from)
                                    .unwrap_or_else(|| format!("Browse all {} instruments.", sub.name).into());
                                html! {
                                    <CategoryCard
                                        key={sub.slug}
                                        title={sub.name}
                                        description={Some(description)}
                                        image={Some(AttrValue::from(content::subcategory_image(sub)))}
                                        onclick={go(Route::Subcategory {
                                            category: category.slug.to_string(),
                                            subcategory: sub.slug.to_string(),
                                        })}
                                    />
                                }
                            }) }
                        </div>
                    }
                </div>
            </Section>
        </div>
    }
}

#[derive(Properties, PartialEq)]
pub struct SubcategoryViewProps {
    pub category: String,
    pub subcategory: String,
}

#[function_component(SubcategoryView)]
pub fn subcategory_view(props: &SubcategoryViewProps) -> Html {
    let found = content::category_by_slug(&props.category)
        .zip(content::subcategory(&props.category, &props.subcategory));
    use_page_meta(match found {
        Some((c, s)) => PageMeta::subcategory(c, s),
        None => PageMeta::not_found("Not found"),
    });
    let Some((category, sub)) = found else {
        return not_found("Category or Subcategory not found");
    };
    let products = content::products_in(category.slug, sub.slug);

    html! {
        <div class="page products">
            <CatalogHeader
                title={sub.name}
                subtitle={format!("{} instruments available.", products.len())}
                crumbs={vec![
                    (AttrValue::from("Products"), Some(Route::Products)),
                    (AttrValue::from(category.name), Some(Route::Category { category: category.slug.to_string() })),
                    (AttrValue::from(sub.name), None),
                ]}
            />
            <Section class="white">
                <div class="container">
                    if products.is_empty() {
                        <div class="empty-state">
                            <h3 class="serif">{"No products found"}</h3>
                            <p>{"We are adding products to this category soon."}</p>
                        </div>
                    } else {
                        <div class="card-grid four">
                            { for products.into_iter().map(|p| html! {
                                <ProductCard
                                    key={p.id}
                                    product={p}
                                    onclick={go(Route::Product {
                                        category: category.slug.to_string(),
                                        subcategory: sub.slug.to_string(),
                                        id: p.id.to_string(),
                                    })}
                                />
                            }) }
                        </div>
                    }
                </div>
            </Section>
        </div>
    }
}

#[derive(Properties, PartialEq)]
pub struct ProductDetailProps {
    pub category: String,
    pub subcategory: String,
    pub id: String,
}

#[function_component(ProductDetail)]
pub fn product_detail(props: &ProductDetailProps) -> Html {
    let found = content::category_by_slug(&props.category)
        .zip(content::subcategory(&props.category, &props.subcategory))
        .zip(content::product_by_id(&props.id));
    use_page_meta(match found {
        Some((_, p)) => PageMeta::product(p),
        None => PageMeta::not_found("Product not found"),
    });
    let Some(((category, sub), product)) = found else {
        return not_found("Product not found");
    };

    let whatsapp = Callback::from(move |_: MouseEvent| {
        open_external(&whatsapp_link(Some(&quote_request_text(product))));
    });
    let email = Callback::from(move |_: MouseEvent| {
        if let Some(window) = web_sys::window() {
            let _ = window.location().set_href(&quote_mailto(product));
        }
    });

    html! {
        <div class="page products">
            <div class="breadcrumb-bar">
                <div class="container breadcrumbs">
                    <a href={Route::Products.to_hash()}>{"Products"}</a>
                    <span class="sep">{"›"}</span>
                    <a href={Route::Category { category: category.slug.to_string() }.to_hash()}>{category.name}</a>
                    <span class="sep">{"›"}</span>
                    <a href={Route::Subcategory { category: category.slug.to_string(), subcategory: sub.slug.to_string() }.to_hash()}>{sub.name}</a>
                    <span class="sep">{"›"}</span>
                    <span class="current gold">{product.sku}</span>
                </div>
            </div>
            <Section class="white">
                <div class="container detail-grid">
                    <div class="detail-media">
                        <img src={product.image_url} alt={product.name} />
                        <span class="grade-badge">{"PREMIUM GRADE"}</span>
                    </div>
                    <div class="detail-body">
                        <h1 class="serif">{product.name}</h1>
                        <div class="detail-meta">
                            <span class="sku mono">{format!("SKU: {}", product.sku)}</span>
                            <span class="stock">{"✓ In Stock"}</span>
                        </div>
                        <p class="lede">{product.description}</p>
                        <div class="spec-table">
                            <h3 class="serif">{"Specifications"}</h3>
                            <div class="spec-rows">
                                { for product.specifications.rows().into_iter().map(|(label, value)| html! {
                                    <div class="spec-row"><span>{label}</span><strong>{value}</strong></div>
                                }) }
                            </div>
                        </div>
                        <div class="detail-actions">
                            <button class="btn btn-primary" onclick={whatsapp}>{"💬 Request Quote via WhatsApp"}</button>
                            <button class="btn btn-outline" onclick={email}>{"Email Inquiry"}</button>
                        </div>
                        <div class="trust-badges">
                            <span>{"🛡 ISO 13485 Certified"}</span>
                            <span>{"🚚 Worldwide Shipping"}</span>
                        </div>
                    </div>
                </div>
            </Section>
        </div>
    }
}

use crate::catalog::{Catalog, Category};
use crate::i18n::keys;
use crate::router::{Route, RouteError, compute_suggestions};
use crate::view::{RenderContext, html_escape, render_tool_card};

/// Find the category a ranked list should show.
pub fn resolve_category<'a>(
    catalog: &'a Catalog,
    id: Option<&str>,
) -> Result<&'a Category, RouteError> {
    let id = id.ok_or(RouteError::MissingCategory)?;
    catalog
        .category(id)
        .ok_or_else(|| RouteError::UnknownCategory {
            id: id.to_string(),
            suggestions: compute_suggestions(id, &catalog.category_ids()),
        })
}

/// The tools of one category, best first, as a column of cards.
pub fn render_ranked_list(category: &Category, ctx: &RenderContext<'_>) -> String {
    let ranked = ctx.catalog.ranked(&category.id);
    tracing::debug!(category = %category.id, tools = ranked.len(), "rendering ranked list");

    let mut html = String::new();
    html.push_str("<div class=\"page container mx-auto px-4 py-8 max-w-3xl\">\n");
    html.push_str(&format!(
        "  <a id=\"back-to-categories-btn\" href=\"{}\" class=\"mb-6 text-primary font-bold hover:opacity-80 transition-opacity flex items-center gap-2 text-lg\"><i class=\"fas fa-arrow-left\"></i> {}</a>\n",
        Route::categories().to_hash(),
        html_escape(ctx.t(keys::BACK_TO_CATEGORIES))
    ));
    html.push_str(&format!(
        "  <h1 class=\"text-5xl font-extrabold text-center mb-12 text-dark-text\">{}</h1>\n",
        html_escape(category.name.resolve(ctx.language))
    ));
    html.push_str("  <div class=\"space-y-12\">\n");
    for entry in &ranked {
        html.push_str(&render_tool_card(entry, ctx));
    }
    html.push_str("  </div>\n");
    html.push_str("</div>\n");
    html
}

use crate::i18n::keys;
use crate::router::Route;
use crate::view::{RenderContext, html_escape};

/// Grid of category buttons, each linking to that category's ranked list.
pub fn render_categories(ctx: &RenderContext<'_>) -> String {
    let mut html = String::new();
    html.push_str("<div class=\"page container mx-auto px-4 py-12\">\n");
    html.push_str(&format!(
        "  <h1 class=\"text-4xl font-extrabold text-center mb-10 text-dark-text\">{}</h1>\n",
        html_escape(ctx.t(keys::CHOOSE_CATEGORY))
    ));
    html.push_str("  <div class=\"grid grid-cols-2 md:grid-cols-3 lg:grid-cols-4 gap-6\">\n");
    for category in ctx.catalog.categories() {
        let route = Route::ranked_list(category.id.as_str());
        html.push_str(&format!(
            "    <a href=\"{}\" data-category-id=\"{}\" class=\"category-btn bg-dark-card p-6 rounded-2xl shadow-md hover:shadow-primary/20 hover:shadow-lg hover:-translate-y-1.5 transition-all duration-300 flex flex-col items-center justify-center gap-4 text-center\">\n",
            html_escape(&route.to_hash()),
            html_escape(&category.id)
        ));
        html.push_str(&format!(
            "      <i class=\"{} text-4xl text-primary\"></i>\n",
            html_escape(&category.icon)
        ));
        html.push_str(&format!(
            "      <span class=\"text-lg font-bold text-dark-text\">{}</span>\n",
            html_escape(category.name.resolve(ctx.language))
        ));
        html.push_str("    </a>\n");
    }
    html.push_str("  </div>\n");
    html.push_str("</div>\n");
    html
}
